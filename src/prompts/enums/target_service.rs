use std::{fmt, str::FromStr};

use crate::prompts::errors::UnknownTargetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetService {
    Veo,
    Runway,
    Kling,
    Luma,
    Pixverse,
    Midjourney,
}

impl TargetService {
    pub const ALL: [TargetService; 6] = [
        Self::Veo,
        Self::Runway,
        Self::Kling,
        Self::Luma,
        Self::Pixverse,
        Self::Midjourney,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Veo => "veo",
            Self::Runway => "runway",
            Self::Kling => "kling",
            Self::Luma => "luma",
            Self::Pixverse => "pixverse",
            Self::Midjourney => "midjourney",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match *self {
            Self::Veo => "Veo 3",
            Self::Runway => "Runway Gen-4",
            Self::Kling => "Kling 2.0",
            Self::Luma => "Luma Dream Machine",
            Self::Pixverse => "Pixverse",
            Self::Midjourney => "Midjourney Video",
        }
    }
}

impl fmt::Display for TargetService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts the loose names the studio pages send, e.g. `"Veo 3+ Studio"`,
/// `"Runway Gen4+ Studio"` or plain `"luma"`. The first word must be the
/// service name, optionally followed by a version number.
impl FromStr for TargetService {
    type Err = UnknownTargetError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let first_word = tag
            .split(|c: char| !c.is_ascii_alphanumeric())
            .find(|word| !word.is_empty())
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|service| {
                first_word
                    .strip_prefix(service.value())
                    .map_or(false, |rest| rest.chars().all(|c| c.is_ascii_digit()))
            })
            .ok_or_else(|| UnknownTargetError {
                tag: tag.to_string(),
            })
    }
}
