//! Offline password strength scoring library
//!
//! This library estimates password strength from local heuristics (length,
//! character variety, approximate entropy, and common-pattern detection)
//! plus a configurable blacklist of known-weak passwords. It never touches
//! the network and keeps no state between calls.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{score_password, Blacklist};
//! use secrecy::SecretString;
//!
//! let blacklist = Blacklist::builtin();
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let verdict = score_password(&password, &blacklist);
//! println!("Score: {}/10 — {}", verdict.score, verdict.label);
//! ```

// Internal modules
mod blacklist;
mod heuristics;
mod scorer;
mod types;

// Public API
pub use blacklist::{Blacklist, BlacklistError, default_path};
pub use heuristics::{charset_size, entropy_bits, pattern_penalty};
pub use scorer::score_password;
pub use types::{StrengthLabel, Verdict};
