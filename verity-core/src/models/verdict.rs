use std::fmt;

use serde::{Deserialize, Serialize};

/// The three-way outcome of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Uncertain,
}

impl Verdict {
    /// Lowercase wire form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
            Verdict::Uncertain => "uncertain",
        }
    }

    /// True or False, as opposed to Uncertain.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Verdict::Uncertain)
    }

    /// Lenient parse for labels read back from storage.
    /// Unknown or empty labels map to Uncertain.
    pub fn parse(label: &str) -> Verdict {
        match label.trim().to_lowercase().as_str() {
            "true" => Verdict::True,
            "false" => Verdict::False,
            _ => Verdict::Uncertain,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
