use thiserror::Error;

/// Error types shared by vasuki-core and vasuki-lsp.
///
/// Request handlers never surface these to the client. They are logged and
/// the request answers with "no result".
///
/// # Examples
///
/// ```
/// use vasuki_core::error::{Result, VasukiError};
///
/// fn check_size(size: u64) -> Result<()> {
///     if size > 10 {
///         return Err(VasukiError::FileTooLarge { size, limit: 10 });
///     }
///     Ok(())
/// }
///
/// assert!(check_size(5).is_ok());
/// assert!(check_size(11).is_err());
/// ```
#[derive(Error, Debug)]
pub enum VasukiError {
    #[error("invalid definition pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid URI: {0}")]
    InvalidUri(String),

    #[error("unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("file too large: {size} bytes (max: {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, VasukiError>`.
pub type Result<T> = std::result::Result<T, VasukiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_uri_display() {
        let error = VasukiError::InvalidUri("untitled:Untitled-1".into());
        assert_eq!(error.to_string(), "invalid URI: untitled:Untitled-1");
    }

    #[test]
    fn test_unsupported_document_display() {
        let error = VasukiError::UnsupportedDocument("file:///notes.txt".into());
        assert_eq!(error.to_string(), "unsupported document: file:///notes.txt");
    }

    #[test]
    fn test_file_too_large_display() {
        let error = VasukiError::FileTooLarge {
            size: 20,
            limit: 10,
        };
        assert_eq!(error.to_string(), "file too large: 20 bytes (max: 10 bytes)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: VasukiError = io_err.into();
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error: VasukiError = regex_err.into();
        assert!(error.to_string().starts_with("invalid definition pattern"));
    }
}
