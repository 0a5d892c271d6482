//! Blacklist management module
//!
//! Handles loading and querying the known-weak password list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Compiled-in fallback list of the most common passwords.
const BUILTIN: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "12345",
    "qwerty",
    "abc123",
    "111111",
    "123123",
    "letmein",
    "admin",
    "welcome",
    "iloveyou",
    "monkey",
    "dragon",
    "football",
    "baseball",
    "qwertyuiop",
    "1234",
    "1q2w3e4r",
    "passw0rd",
    "password1",
    "000000",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Immutable set of known-weak passwords with case-insensitive lookup.
///
/// Entries are lowercased on construction and `contains` lowercases the
/// candidate, so membership is case-insensitive in both directions.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Builds a blacklist from the compiled-in common-password list.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().copied())
    }

    /// Builds a blacklist from arbitrary entries, lowercasing each one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a blacklist from a file, one password per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    /// Checks membership, case-insensitively.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the default blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn default_path() -> PathBuf {
    std::env::var("PWD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_default_path_without_env() {
        remove_env("PWD_BLACKLIST_PATH");

        let path = default_path();
        assert_eq!(path, PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_default_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env("PWD_BLACKLIST_PATH", custom_path);

        let path = default_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Blacklist::from_path("/nonexistent/path/blacklist.txt");
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let temp_file = setup_with_tempfile(&["password123", "qwerty"]);

        let blacklist = Blacklist::from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(blacklist.len(), 2);
        assert!(blacklist.contains("password123"));
    }

    #[test]
    fn test_from_path_normalizes_case_and_whitespace() {
        let temp_file = setup_with_tempfile(&["  PaSsWoRd  ", "", "letmein"]);

        let blacklist = Blacklist::from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(blacklist.len(), 2);
        assert!(blacklist.contains("password"));
        assert!(blacklist.contains("letmein"));
    }

    #[test]
    fn test_contains_case_insensitive() {
        let blacklist = Blacklist::from_entries(["testpassword"]);
        assert!(blacklist.contains("testpassword"));
        assert!(blacklist.contains("TESTPASSWORD"));
        assert!(blacklist.contains("TestPassword"));
    }

    #[test]
    fn test_contains_miss() {
        let blacklist = Blacklist::from_entries(["common123"]);
        assert!(!blacklist.contains("veryuncommonpassword987"));
    }

    #[test]
    fn test_builtin_has_classics() {
        let blacklist = Blacklist::builtin();
        assert!(blacklist.contains("password"));
        assert!(blacklist.contains("QWERTY"));
        assert!(blacklist.contains("letmein"));
        assert!(!blacklist.is_empty());
    }
}
