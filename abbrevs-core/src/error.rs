//! Error types for token list loading and lookup

use thiserror::Error;

/// Errors raised while loading datasets or validating lookup arguments
///
/// An unknown language code is deliberately not represented here: lookups
/// for languages without a dataset return an empty list.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Malformed caller input, e.g. a language code that is not 2 characters
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },

    /// A dataset could not be normalized into token entries
    #[error("invalid dataset for '{language}': {reason}")]
    Dataset {
        /// Language code (or file stem) of the offending dataset
        language: String,
        /// The reason the dataset was rejected
        reason: String,
    },

    /// The same language was supplied more than once by a source
    #[error("language '{code}' is defined more than once")]
    DuplicateLanguage {
        /// The duplicated code
        code: String,
    },

    /// I/O error while reading a dataset directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TokenError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        TokenError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn dataset(language: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenError::Dataset {
            language: language.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = TokenError::invalid_argument("code must be 2 characters");
        assert_eq!(
            error.to_string(),
            "invalid argument: code must be 2 characters"
        );
    }

    #[test]
    fn test_dataset_error_display() {
        let error = TokenError::dataset("en", "entry 3 is empty");
        assert_eq!(
            error.to_string(),
            "invalid dataset for 'en': entry 3 is empty"
        );
    }

    #[test]
    fn test_duplicate_language_display() {
        let error = TokenError::DuplicateLanguage {
            code: "de".to_string(),
        };
        assert_eq!(error.to_string(), "language 'de' is defined more than once");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: TokenError = io.into();
        assert!(matches!(error, TokenError::Io(_)));
        assert!(error.to_string().starts_with("I/O error:"));
    }
}
