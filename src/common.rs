//! Common password list
//!
//! Holds the known-weak passwords used by the commonality check. A built-in
//! list is always present; more entries can be loaded from a newline
//! delimited file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra word-list file.
pub const COMMON_LIST_ENV: &str = "PWD_BLACKLIST_PATH";

const BUILTIN: &[&str] = &[
    "123456", "password", "123456789", "12345678", "12345", "1234567",
    "1234567890", "qwerty", "abc123", "password123", "admin", "letmein",
    "welcome", "monkey", "password1", "123123", "111111", "dragon",
    "master", "sunshine", "princess", "football", "charlie", "jordan",
    "baseball", "freedom", "lovely", "buster", "trustno1", "shadow",
];

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Case-insensitive set of known-weak passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswordSet {
    words: HashSet<String>,
}

impl Default for CommonPasswordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonPasswordSet {
    /// The built-in list only.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Built-in list, extended from the file named by `PWD_BLACKLIST_PATH`
    /// when that variable is set.
    ///
    /// # Errors
    ///
    /// Same as [`CommonPasswordSet::extend_from_path`].
    pub fn from_env() -> Result<Self, CommonListError> {
        let mut set = Self::builtin();
        if let Some(path) = configured_path() {
            set.extend_from_path(path)?;
        }
        Ok(set)
    }

    /// Adds every non-blank line of `path`, trimmed and lowercased.
    ///
    /// Returns the number of entries the file contributed.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, CommonListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: file not found {:?}", path);
            return Err(CommonListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: empty file {:?}", path);
            return Err(CommonListError::EmptyFile);
        }

        let entries: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        let count = entries.len();
        self.words.extend(entries);

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list extended: {} entries from {:?}", count, path);

        Ok(count)
    }

    /// Returns `true` if the lowercased password is a known-weak password.
    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn configured_path() -> Option<PathBuf> {
    std::env::var_os(COMMON_LIST_ENV).map(PathBuf::from)
}
