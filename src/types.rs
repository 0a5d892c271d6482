//! Output types for password scoring.

use serde::{Deserialize, Serialize};

/// Qualitative strength category derived from the numeric score.
///
/// `Empty` is reserved for the zero-length short circuit; every other
/// variant is a total function of the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Empty,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    Excellent,
}

impl StrengthLabel {
    /// Maps a clamped score in `[0, 10]` to its label.
    pub fn from_score(score: u8) -> Self {
        match score {
            9..=10 => StrengthLabel::Excellent,
            7..=8 => StrengthLabel::Strong,
            5..=6 => StrengthLabel::Moderate,
            3..=4 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Empty => "Empty",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single scoring call.
///
/// `entropy_bits` and `length` are present only when the full heuristic
/// pipeline ran; the empty-password and blacklist short circuits omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Aggregate score, always in `[0, 10]`.
    pub score: u8,
    /// Category derived from `score`.
    pub label: StrengthLabel,
    /// Improvement notes, in the order the heuristics appended them.
    pub reasons: Vec<String>,
    /// Approximate entropy, rounded to one decimal place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entropy_bits: Option<f64>,
    /// Password length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}
