//! Title (honorific) value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Honorific chosen on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    Mr,
    Mrs,
    Ms,
    Miss,
    Dr,
}

impl Title {
    /// Every title in the order the form offers them.
    pub const ALL: [Title; 5] = [Title::Mr, Title::Mrs, Title::Ms, Title::Miss, Title::Dr];

    /// Submitted form value.
    pub fn key(self) -> &'static str {
        match self {
            Title::Mr => "mr",
            Title::Mrs => "mrs",
            Title::Ms => "ms",
            Title::Miss => "miss",
            Title::Dr => "dr",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
            Title::Ms => "Ms",
            Title::Miss => "Miss",
            Title::Dr => "DR",
        }
    }
}

impl FromStr for Title {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Title::ALL
            .into_iter()
            .find(|title| title.key() == s)
            .ok_or_else(|| ValidationError::UnknownTitle(s.to_string()))
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
