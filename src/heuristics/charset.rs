//! Charset-size estimator - approximates the alphabet a password draws from.

/// Per-class alphabet sizes: lowercase, uppercase, digits, and a rough
/// count of printable symbols.
const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 33;

/// Non-word characters: anything that is not alphanumeric or underscore.
pub(crate) fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && c != '_'
}

/// Estimates the alphabet size a password was drawn from.
///
/// Sums a fixed size for each character class present at least once.
/// Returns 1 when no class matches, so callers can always take `log2`.
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += LOWER_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += UPPER_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += DIGIT_SIZE;
    }
    if password.chars().any(is_symbol) {
        size += SYMBOL_SIZE;
    }
    size.max(1)
}
