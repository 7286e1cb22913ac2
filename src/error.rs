//! Error types for the slotlru library.
//!
//! A cache miss is an ordinary `None`, never an error. The only failure a
//! caller can trigger is an invalid construction parameter ([`ConfigError`]).
//! [`InvariantError`] comes from the `check_invariants` methods and means the
//! arena, recency list and index disagree.
//!
//! ```
//! use slotlru::policy::lru::LruCache;
//!
//! let err = LruCache::<u64, String>::try_new(-1i64).unwrap_err();
//! assert_eq!(err.parameter(), "capacity");
//! assert!(err.to_string().starts_with("invalid capacity"));
//! ```

use std::fmt;

/// An invalid construction parameter.
///
/// Produced by [`LruCache::try_new`](crate::policy::lru::LruCache::try_new)
/// and [`LruCacheBuilder::try_build`](crate::builder::LruCacheBuilder::try_build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    parameter: &'static str,
    reason: String,
}

impl ConfigError {
    pub fn new(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the rejected parameter.
    pub fn parameter(&self) -> &'static str {
        self.parameter
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.parameter, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// A broken structural invariant, naming the structure that failed the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError {
    structure: &'static str,
    detail: String,
}

impl InvariantError {
    pub fn new(structure: &'static str, detail: impl Into<String>) -> Self {
        Self {
            structure,
            detail: detail.into(),
        }
    }

    /// `"cache"` or `"recency list"`.
    pub fn structure(&self) -> &'static str {
        self.structure
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invariant violated: {}", self.structure, self.detail)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_parameter() {
        let err = ConfigError::new("capacity", "got -1");
        assert_eq!(err.parameter(), "capacity");
        assert_eq!(err.reason(), "got -1");
        assert_eq!(err.to_string(), "invalid capacity: got -1");
    }

    #[test]
    fn invariant_error_names_structure() {
        let err = InvariantError::new("recency list", "tail has a successor");
        assert_eq!(err.structure(), "recency list");
        assert_eq!(err.detail(), "tail has a successor");
        assert_eq!(
            err.to_string(),
            "recency list invariant violated: tail has a successor"
        );
    }

    #[test]
    fn errors_are_send_sync_std_errors() {
        fn check<T: std::error::Error + Send + Sync + 'static>() {}
        check::<ConfigError>();
        check::<InvariantError>();
    }
}
