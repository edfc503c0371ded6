use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full-match pattern for a 32-character hexadecimal string (MD5 hash format)
const HASH_PATTERN: &str = "^[a-fA-F0-9]{32}$";

/// A validated user hash.
///
/// Invariant: exactly 32 characters, all hexadecimal. Case-insensitive and
/// never normalized; the value is stored exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserHash(String);

impl UserHash {
    /// Get the string representation of the hash
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Syntactic validator for user hashes.
///
/// The pattern is compiled once at construction; validation is pure and
/// idempotent.
#[derive(Debug, Clone)]
pub struct UserHashValidator {
    pattern: Regex,
}

impl UserHashValidator {
    /// Create a new validator
    pub fn new() -> Self {
        // The pattern is a compile-time constant and always valid.
        Self {
            pattern: Regex::new(HASH_PATTERN).expect("hash pattern is valid"),
        }
    }

    /// Validate a candidate hash, returning the accepted value unchanged.
    ///
    /// Empty and whitespace-only candidates are rejected before the pattern
    /// is consulted.
    pub fn validate(&self, candidate: &str) -> Result<UserHash> {
        if candidate.trim().is_empty() {
            return Err(Error::MalformedUserHash);
        }

        if !self.pattern.is_match(candidate) {
            return Err(Error::MalformedUserHash);
        }

        Ok(UserHash(candidate.to_string()))
    }
}

impl Default for UserHashValidator {
    fn default() -> Self {
        Self::new()
    }
}
