//! Document loading from the filesystem for cold start.
//!
//! An editor may already have a `.vasuki` file open when the server starts
//! and never send `didOpen` for it. Hover and definition requests for such
//! a document read it from disk instead of returning nothing.
//!
//! Limits:
//! - Only `file://` URIs are loaded
//! - Files over 10MB are rejected
//! - Non-UTF8 files are rejected

use tower_lsp_server::ls_types::Uri;
use vasuki_core::error::{Result, VasukiError};

/// Maximum allowed file size in bytes (10MB).
const MAX_FILE_SIZE: u64 = 10_000_000;

/// Files above this size (1MB) are loaded with a warning.
const LARGE_FILE_THRESHOLD: u64 = 1_000_000;

/// Loads document content from disk.
///
/// # Errors
///
/// - `VasukiError::InvalidUri` - URI is not a file:// URI
/// - `VasukiError::FileTooLarge` - file exceeds 10MB
/// - `VasukiError::Io` - file missing, unreadable, or not UTF-8
///
/// # Examples
///
/// ```no_run
/// use vasuki_lsp::document::load_document_from_disk;
/// use tower_lsp_server::ls_types::Uri;
///
/// # async fn example() -> vasuki_core::Result<()> {
/// let uri = Uri::from_file_path("/path/to/main.vasuki").unwrap();
/// let content = load_document_from_disk(&uri).await?;
/// println!("Loaded {} bytes", content.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_document_from_disk(uri: &Uri) -> Result<String> {
    let Some(path) = uri.to_file_path() else {
        tracing::debug!("Cannot load non-file URI: {:?}", uri);
        return Err(VasukiError::InvalidUri(format!("{:?}", uri)));
    };

    tracing::debug!("Loading document from disk: {:?}", path);

    let metadata = tokio::fs::metadata(&path).await.map_err(|e| {
        match e.kind() {
            std::io::ErrorKind::NotFound => tracing::debug!("File not found: {:?}", path),
            std::io::ErrorKind::PermissionDenied => {
                tracing::warn!("Permission denied: {:?}", path);
            }
            _ => tracing::error!("IO error reading metadata for {:?}: {}", path, e),
        }
        VasukiError::Io(e)
    })?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        tracing::error!(
            "Document exceeds maximum size: {} bytes (limit: {} bytes)",
            size,
            MAX_FILE_SIZE
        );
        return Err(VasukiError::FileTooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    if size > LARGE_FILE_THRESHOLD {
        tracing::warn!("Document is large: {} bytes for {:?}", size, path);
    }

    let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!("Failed to read {:?}: {}", path, e);
        VasukiError::Io(e)
    })?;

    tracing::debug!(
        "Successfully loaded document: {:?} ({} bytes)",
        path,
        content.len()
    );

    Ok(content)
}
