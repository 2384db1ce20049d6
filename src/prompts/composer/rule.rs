use crate::prompts::models::{
    field_value::{format_number, FieldValue},
    prompt_inputs::PromptInputs,
};

/// When a rule's value produces a clause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Present,
    /// Numeric value strictly above the bound.
    Above(f64),
    /// Any present value other than the service default.
    NotDefault(f64),
    /// Any present value other than a placeholder keyword such as `None`.
    NotKeyword(&'static str),
    IsTrue,
}

/// How a value is turned into its clause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Render {
    Text {
        prefix: &'static str,
        suffix: &'static str,
    },
    Lowercase {
        prefix: &'static str,
    },
    /// `round(value / divisor)`, halves rounded up.
    Scaled {
        prefix: &'static str,
        divisor: f64,
    },
    /// Strips a leading `v` so `v6` and `6` both give `--v 6`.
    Version {
        prefix: &'static str,
    },
    /// A length in seconds; `8`, `"8"` and `"8s"` all give `8s`.
    Seconds {
        prefix: &'static str,
    },
    Switch(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub keys: &'static [&'static str],
    pub when: Condition,
    pub render: Render,
}

/// An ordered group of clauses joined by `joiner`. `lead` separates the
/// section from whatever was composed before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub lead: &'static str,
    pub joiner: &'static str,
    pub open: &'static str,
    pub close: &'static str,
    pub rules: &'static [Rule],
}

impl Condition {
    pub fn holds(&self, value: &FieldValue) -> bool {
        match *self {
            Self::Present => value.is_present(),
            Self::Above(bound) => value.number().map_or(false, |n| n > bound),
            Self::NotDefault(default) => value.is_present() && value.number() != Some(default),
            Self::NotKeyword(keyword) => value
                .text()
                .map_or(false, |text| !text.eq_ignore_ascii_case(keyword)),
            Self::IsTrue => value.is_true(),
        }
    }
}

impl Render {
    pub fn apply(&self, value: &FieldValue) -> Option<String> {
        match *self {
            Self::Text { prefix, suffix } => Some(format!("{}{}{}", prefix, value.text()?, suffix)),
            Self::Lowercase { prefix } => {
                Some(format!("{}{}", prefix, value.text()?.to_lowercase()))
            }
            Self::Scaled { prefix, divisor } => {
                let scaled = (value.number()? / divisor + 0.5).floor();
                Some(format!("{}{}", prefix, format_number(scaled)))
            }
            Self::Version { prefix } => {
                let text = value.text()?;
                let version = text.trim_start_matches(['v', 'V']).trim();
                match version.is_empty() {
                    true => None,
                    false => Some(format!("{}{}", prefix, version)),
                }
            }
            Self::Seconds { prefix } => {
                let seconds = value.number().or_else(|| {
                    value
                        .text()?
                        .trim_end_matches(['s', 'S'])
                        .trim()
                        .parse::<f64>()
                        .ok()
                })?;

                match seconds > 0.0 && seconds.is_finite() {
                    true => Some(format!("{}{}s", prefix, format_number(seconds))),
                    false => None,
                }
            }
            Self::Switch(token) => Some(token.to_string()),
        }
    }
}

impl Rule {
    pub fn apply(&self, inputs: &PromptInputs) -> Option<String> {
        let value = inputs.first_present(self.keys)?;

        match self.when.holds(value) {
            true => self.render.apply(value),
            false => None,
        }
    }
}

impl Section {
    pub fn apply(&self, inputs: &PromptInputs) -> Option<String> {
        let clauses: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.apply(inputs))
            .filter_map(|clause| tidy_clause(&clause))
            .collect();

        match clauses.is_empty() {
            true => None,
            false => Some(format!(
                "{}{}{}",
                self.open,
                clauses.join(self.joiner),
                self.close
            )),
        }
    }
}

/// Drops trailing commas, periods and whitespace so a clause never doubles
/// the separator that follows it.
pub fn tidy_clause(clause: &str) -> Option<String> {
    let clause = clause.trim_end_matches(|c: char| c == ',' || c == '.' || c.is_whitespace());

    match clause.is_empty() {
        true => None,
        false => Some(clause.to_string()),
    }
}

pub const fn keyword(keys: &'static [&'static str]) -> Rule {
    Rule {
        keys,
        when: Condition::Present,
        render: Render::Text {
            prefix: "",
            suffix: "",
        },
    }
}

pub const fn flag(keys: &'static [&'static str], prefix: &'static str) -> Rule {
    Rule {
        keys,
        when: Condition::Present,
        render: Render::Text { prefix, suffix: "" },
    }
}

pub const fn switch(keys: &'static [&'static str], token: &'static str) -> Rule {
    Rule {
        keys,
        when: Condition::IsTrue,
        render: Render::Switch(token),
    }
}
