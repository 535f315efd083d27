//! Typed error handling for enumlab.
//!
//! Raw-value lookups never error: they return `None` when no variant
//! matches. The errors here cover the surfaces around the sets (name
//! parsing, coverage audits, configuration, CLI-driven lookups).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enumlab operations.
#[derive(Error, Debug)]
pub enum EnumlabError {
    /// A variant name that is not declared by the set
    #[error("'{name}' is not a variant of {set}")]
    UnknownVariant { set: &'static str, name: String },

    /// A set name that is not one of the lesson sets
    #[error("Unknown closed set: {name}")]
    UnknownSet { name: String },

    /// A raw value string that cannot be read as the set's raw type
    #[error("Invalid raw value for {set}: {message}")]
    InvalidRaw { set: &'static str, message: String },

    /// A matching function produced an empty result for a variant
    #[error("{function} returned an empty result for {set}::{variant}")]
    EmptyBranch {
        set: &'static str,
        function: String,
        variant: &'static str,
    },

    /// Unknown page name
    #[error("Unknown page: {name}")]
    UnknownPage { name: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// I/O error when reading files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl EnumlabError {
    /// Create an unknown-variant error.
    pub fn unknown_variant(set: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            set,
            name: name.into(),
        }
    }

    /// Create an unknown-set error.
    pub fn unknown_set(name: impl Into<String>) -> Self {
        Self::UnknownSet { name: name.into() }
    }

    /// Create an invalid-raw error.
    pub fn invalid_raw(set: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRaw {
            set,
            message: message.into(),
        }
    }

    pub fn unknown_page(name: impl Into<String>) -> Self {
        Self::UnknownPage { name: name.into() }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Check if the error comes from user input rather than a broken lesson.
    ///
    /// An `EmptyBranch` means a matching function is wrong; everything
    /// else can be fixed by the caller passing different input.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::EmptyBranch { .. } | Self::Io { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } => Some(path),
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for enumlab results.
pub type EnumlabResult<T> = Result<T, EnumlabError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> EnumlabResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> EnumlabResult<T> {
        self.map_err(|e| EnumlabError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let err = EnumlabError::unknown_variant("Weekday", "Funday");
        assert_eq!(err.to_string(), "'Funday' is not a variant of Weekday");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_empty_branch_is_not_user_error() {
        let err = EnumlabError::EmptyBranch {
            set: "Month",
            function: "month_position".to_string(),
            variant: "May",
        };
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("Month::May"));
    }

    #[test]
    fn test_config_error_path() {
        let err = EnumlabError::config("/tmp/enumlab.toml", "bad format");
        assert_eq!(err.path(), Some(&PathBuf::from("/tmp/enumlab.toml")));
        assert!(err.to_string().contains("bad format"));
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.with_path("/missing/enumlab.toml").unwrap_err();
        assert!(matches!(err, EnumlabError::Io { .. }));
        assert!(!err.is_user_error());
    }
}
