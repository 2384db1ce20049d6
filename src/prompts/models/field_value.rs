use serde::Deserialize;

/// A single form value as the UI sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as filled in: blank text, `null`, `false`,
    /// zero (as a number or a numeric string) and empty lists do not.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            _ => self.text().is_some(),
        }
    }

    pub fn is_true(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(text) => text.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// A real boolean or the strings `"true"`/`"false"` a select control sends.
    pub fn is_boolean(&self) -> bool {
        match self {
            Self::Bool(_) => true,
            Self::Text(text) => {
                let text = text.trim();
                text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
            }
            _ => false,
        }
    }

    /// Trimmed text with whitespace runs collapsed. Numbers are rendered
    /// without a trailing `.0`; booleans have no text.
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Null | Self::Bool(_) => None,
            Self::Number(n) => match *n != 0.0 && n.is_finite() {
                true => Some(format_number(*n)),
                false => None,
            },
            Self::Text(text) => match self.number() {
                Some(n) if n == 0.0 => None,
                _ => non_blank(collapse_whitespace(text)),
            },
            Self::List(items) => non_blank(
                items
                    .iter()
                    .map(|item| collapse_whitespace(item))
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>()
                    .join(" + "),
            ),
        }
    }

    /// Numeric reading of the value. Select controls send numbers as strings.
    pub fn number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(text: String) -> Option<String> {
    match text.is_empty() {
        true => None,
        false => Some(text),
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_every_json_primitive() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[null, true, 25, 1.5, "16:9", ["Pan Left", "Zoom In"]]"#)
                .unwrap();

        assert_eq!(
            values,
            vec![
                FieldValue::Null,
                FieldValue::Bool(true),
                FieldValue::Number(25.0),
                FieldValue::Number(1.5),
                FieldValue::Text("16:9".to_string()),
                FieldValue::List(vec!["Pan Left".to_string(), "Zoom In".to_string()]),
            ]
        );
    }

    #[test]
    fn follows_form_truthiness() {
        assert!(!FieldValue::Null.is_present());
        assert!(!FieldValue::from("   ").is_present());
        assert!(!FieldValue::from(0).is_present());
        assert!(!FieldValue::from(false).is_present());
        assert!(!FieldValue::List(vec![" ".to_string()]).is_present());

        assert!(FieldValue::from("a fox").is_present());
        assert!(FieldValue::from(7).is_present());
        assert!(FieldValue::from(true).is_present());
    }

    #[test]
    fn zero_is_absent_as_number_or_string() {
        for zero in [FieldValue::from(0), FieldValue::from("0"), FieldValue::from(" 0.0 ")] {
            assert!(!zero.is_present(), "{zero:?}");
            assert_eq!(zero.text(), None);
        }

        assert!(FieldValue::from("0.5").is_present());
        assert!(FieldValue::from("10").is_present());
    }

    #[test]
    fn recognizes_boolean_strings() {
        assert!(FieldValue::from(false).is_boolean());
        assert!(FieldValue::from(" False ").is_boolean());
        assert!(FieldValue::from("true").is_boolean());
        assert!(!FieldValue::from("a fox").is_boolean());
        assert!(!FieldValue::from(1).is_boolean());
    }

    #[test]
    fn normalizes_text() {
        assert_eq!(
            FieldValue::from("  a knight\n in   armour ").text().as_deref(),
            Some("a knight in armour")
        );
        assert_eq!(FieldValue::from(8).text().as_deref(), Some("8"));
        assert_eq!(FieldValue::from(7.5).text().as_deref(), Some("7.5"));
        assert_eq!(
            FieldValue::from(vec!["Pan Left", "", "Zoom In"]).text().as_deref(),
            Some("Pan Left + Zoom In")
        );
        assert_eq!(FieldValue::from(true).text(), None);
    }

    #[test]
    fn reads_numbers_from_strings() {
        assert_eq!(FieldValue::from("25").number(), Some(25.0));
        assert_eq!(FieldValue::from(" 100 ").number(), Some(100.0));
        assert_eq!(FieldValue::from("high").number(), None);
        assert_eq!(FieldValue::from(true).number(), None);
    }
}
