use dashmap::DashMap;
use std::time::{Duration, Instant};
use tower_lsp_server::ls_types::Uri;

/// State of one open document.
///
/// Only the full text is kept. Every request rescans it, so there is no
/// derived data to invalidate on change.
///
/// # Examples
///
/// ```
/// use vasuki_lsp::document::DocumentState;
///
/// let doc = DocumentState::new("def main() {}".into(), Some(1));
/// assert_eq!(doc.version, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Full document text
    pub content: String,
    /// Client-side version; `None` for documents loaded from disk
    pub version: Option<i32>,
    /// When this content was stored
    pub updated_at: Instant,
}

impl DocumentState {
    pub fn new(content: String, version: Option<i32>) -> Self {
        Self {
            content,
            version,
            updated_at: Instant::now(),
        }
    }
}

/// Tracks recent cold start attempts per URI.
///
/// A client that keeps asking about a file it never opened would otherwise
/// trigger a disk read per request.
///
/// # Examples
///
/// ```
/// use vasuki_lsp::document::ColdStartLimiter;
/// use tower_lsp_server::ls_types::Uri;
/// use std::time::Duration;
///
/// let limiter = ColdStartLimiter::new();
/// let uri = Uri::from_file_path("/test/main.vasuki").unwrap();
/// let interval = Duration::from_millis(100);
///
/// assert!(limiter.allow_cold_start(&uri, interval));
/// assert!(!limiter.allow_cold_start(&uri, interval)); // Rate limited
/// ```
#[derive(Debug, Default)]
pub struct ColdStartLimiter {
    /// Maps URI to last cold start attempt time.
    last_attempts: DashMap<Uri, Instant>,
}

impl ColdStartLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a cold start is allowed, false if rate limited.
    ///
    /// Records the attempt time when the cold start is allowed.
    pub fn allow_cold_start(&self, uri: &Uri, min_interval: Duration) -> bool {
        let now = Instant::now();

        if let Some(mut entry) = self.last_attempts.get_mut(uri) {
            let elapsed = now.duration_since(*entry);
            if elapsed < min_interval {
                tracing::warn!(
                    "Cold start rate limited for {:?} (retry after {:?})",
                    uri,
                    min_interval.saturating_sub(elapsed)
                );
                return false;
            }
            *entry = now;
        } else {
            self.last_attempts.insert(uri.clone(), now);
        }

        true
    }

    /// Removes entries older than `max_age`.
    ///
    /// Called periodically from a background task.
    pub fn cleanup_old_entries(&self, max_age: Duration) {
        let now = Instant::now();
        self.last_attempts
            .retain(|_, instant| now.duration_since(*instant) < max_age);
    }

    /// Returns the number of tracked URIs.
    pub fn tracked_count(&self) -> usize {
        self.last_attempts.len()
    }
}

/// Global server state shared by all handlers.
///
/// # Examples
///
/// ```
/// use vasuki_lsp::document::ServerState;
///
/// let state = ServerState::new();
/// assert_eq!(state.document_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ServerState {
    /// Open documents by URI
    pub documents: DashMap<Uri, DocumentState>,
    /// Cold start rate limiter
    pub cold_start_limiter: ColdStartLimiter,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves document state by URI.
    ///
    /// The returned reference holds a shard lock on the map; drop it
    /// before awaiting.
    pub fn get_document(
        &self,
        uri: &Uri,
    ) -> Option<dashmap::mapref::one::Ref<'_, Uri, DocumentState>> {
        self.documents.get(uri)
    }

    /// Retrieves a cloned copy of document state by URI.
    pub fn get_document_clone(&self, uri: &Uri) -> Option<DocumentState> {
        self.documents.get(uri).map(|doc| doc.clone())
    }

    /// Inserts or replaces document state.
    pub fn update_document(&self, uri: Uri, state: DocumentState) {
        self.documents.insert(uri, state);
    }

    /// Removes document state and returns the removed entry.
    pub fn remove_document(&self, uri: &Uri) -> Option<(Uri, DocumentState)> {
        self.documents.remove(uri)
    }

    /// Returns the number of open documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
