//! Pattern-penalty detector - flags repeats and easy sequences.

/// Ascending 4-digit runs.
const NUMERIC_RUNS: [&str; 7] = ["0123", "1234", "2345", "3456", "4567", "5678", "6789"];

/// Common 4-letter alphabetic and keyboard fragments.
const ALPHA_RUNS: [&str; 7] = ["abcd", "bcde", "cdef", "defg", "qwer", "asdf", "zxcv"];

/// Physical keyboard rows, scanned for any 4-character window.
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Computes the penalty for low-randomness structure in a password.
///
/// Four detectors run independently, each adding at most 1 no matter how
/// often its pattern recurs. The keyboard-row detector counts per row, so
/// it alone can contribute up to 3.
pub fn pattern_penalty(password: &str) -> u32 {
    let mut penalty = 0;

    if has_repeated_run(password) {
        penalty += 1;
    }

    if NUMERIC_RUNS.iter().any(|run| password.contains(run)) {
        penalty += 1;
    }

    let lower = password.to_lowercase();
    if ALPHA_RUNS.iter().any(|run| lower.contains(run)) {
        penalty += 1;
    }

    for row in KEYBOARD_ROWS {
        for start in 0..=row.len() - 4 {
            if lower.contains(&row[start..start + 4]) {
                penalty += 1;
                break;
            }
        }
    }

    penalty
}

/// True when any character repeats 3+ times consecutively (case-sensitive).
fn has_repeated_run(password: &str) -> bool {
    let mut run = 1;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
        prev = Some(c);
    }
    false
}
