//! Password scorer - the aggregate scoring pipeline.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::heuristics::{entropy_bits, pattern_penalty};
use crate::types::{StrengthLabel, Verdict};

/// Scores a password against a blacklist and returns a [`Verdict`].
///
/// The empty-password and blacklisted-password cases short-circuit with
/// fixed verdicts; otherwise four heuristics run in order (length tier,
/// character variety, entropy tier, pattern penalty) and the accumulated
/// score is clamped to `[0, 10]` before the label lookup.
///
/// Pure: the same `(password, blacklist)` pair always yields the same
/// verdict, and nothing is retained across calls.
pub fn score_password(password: &SecretString, blacklist: &Blacklist) -> Verdict {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return Verdict {
            score: 0,
            label: StrengthLabel::Empty,
            reasons: vec!["No password provided.".to_string()],
            entropy_bits: None,
            length: None,
        };
    }

    // A blacklist hit trumps every other heuristic, even for long or
    // complex-looking entries.
    if blacklist.contains(pwd) {
        #[cfg(feature = "tracing")]
        tracing::debug!("candidate rejected by blacklist");
        return Verdict {
            score: 1,
            label: StrengthLabel::VeryWeak,
            reasons: vec!["Common password (easily guessed).".to_string()],
            entropy_bits: None,
            length: None,
        };
    }

    let mut score: i32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Length tier
    let length = pwd.chars().count();
    score += match length {
        16.. => 4,
        12..=15 => 3,
        10..=11 => 2,
        8..=9 => 1,
        _ => {
            reasons.push("Too short (< 8 characters).".to_string());
            0
        }
    };

    // Character variety: max(0, classes - 1) points
    let variety = [
        pwd.chars().any(|c| c.is_ascii_lowercase()),
        pwd.chars().any(|c| c.is_ascii_uppercase()),
        pwd.chars().any(|c| c.is_ascii_digit()),
        pwd.chars().any(crate::heuristics::is_symbol),
    ]
    .iter()
    .filter(|&&present| present)
    .count() as i32;
    score += (variety - 1).max(0);
    if variety <= 1 {
        reasons.push("Use a mix of lowercase, uppercase, digits, and symbols.".to_string());
    }

    // Entropy tier
    let bits = entropy_bits(pwd);
    score += if bits >= 80.0 {
        3
    } else if bits >= 60.0 {
        2
    } else if bits >= 40.0 {
        1
    } else {
        reasons.push("Low entropy — consider longer length and more variety.".to_string());
        0
    };

    // Pattern penalties
    let penalty = pattern_penalty(pwd);
    score -= penalty as i32;
    if penalty > 0 {
        reasons.push("Avoid repeats or easy sequences (e.g., 1234, qwer, aaa).".to_string());
    }

    let score = score.clamp(0, 10) as u8;

    Verdict {
        score,
        label: StrengthLabel::from_score(score),
        reasons,
        entropy_bits: Some((bits * 10.0).round() / 10.0),
        length: Some(length),
    }
}
