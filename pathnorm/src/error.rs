//! Error types for the pathnorm library.
//!
//! The engine uses two failure channels. A path that merely cannot be
//! normalized (malformed prefix, `..` above the root) is reported as
//! `Ok(None)`. A path that should never have reached the engine (a NUL
//! character, an NTFS alternate data stream name under the Windows flavor)
//! is rejected with an [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathnorm error.
///
/// # Examples
///
/// ```
/// use pathnorm::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathnorm library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path contains a NUL character.
    #[error("illegal NUL character at byte {position} in path \"{path}\"")]
    IllegalCharacter {
        /// The offending path, with control characters escaped.
        path: String,
        /// Byte offset of the first NUL.
        position: usize,
    },

    /// A `:` follows the last separator under the Windows flavor.
    #[error("NTFS alternate data stream separator ':' in file name is forbidden: \"{path}\"")]
    AlternateDataStream {
        /// The offending path.
        path: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigurationFile {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a rejection of the path itself (as opposed to
    /// a configuration or I/O problem).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnorm::Error;
    ///
    /// let err = Error::AlternateDataStream { path: "a.txt:s".to_string() };
    /// assert!(err.is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::IllegalCharacter { .. } | Self::AlternateDataStream { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_character_error() {
        let err = Error::IllegalCharacter {
            path: "a\\0b".to_string(),
            position: 1,
        };
        let display = format!("{err}");
        assert!(display.contains("NUL"));
        assert!(display.contains("byte 1"));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_alternate_data_stream_error() {
        let err = Error::AlternateDataStream {
            path: "foo.exe:bar.txt".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("alternate data stream"));
        assert!(display.contains("foo.exe:bar.txt"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "separator".to_string(),
            message: "must be unix or windows".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("separator"));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_configuration_file_error() {
        let err = Error::ConfigurationFile {
            path: PathBuf::from("/etc/pathnorm.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let display = format!("{err}").replace(std::path::MAIN_SEPARATOR, "/");
        assert!(display.contains("/etc/pathnorm.yaml"));
        assert!(display.contains("missing"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::Validation {
                field: "flavor".to_string(),
                message: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
