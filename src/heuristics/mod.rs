//! Password scoring heuristics
//!
//! Each module estimates one independent aspect of password strength.

mod charset;
mod entropy;
mod pattern;

pub use charset::charset_size;
pub(crate) use charset::is_symbol;
pub use entropy::entropy_bits;
pub use pattern::pattern_penalty;
