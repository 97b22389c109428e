//! Document open/change handling and cold start loading.

use super::loader::load_document_from_disk;
use super::state::{DocumentState, ServerState};
use crate::config::VasukiConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::{MessageType, Uri};
use vasuki_core::error::{Result, VasukiError};
use vasuki_core::{LANGUAGE_ID, is_vasuki_uri};

/// Stores the text of a newly opened document.
///
/// A document is accepted when the client tags it with the `vasuki`
/// language id or its path ends in `.vasuki`, so untitled buffers and
/// custom file associations are served too. Anything else fails with
/// `UnsupportedDocument`.
pub fn handle_document_open(
    uri: Uri,
    language_id: &str,
    content: String,
    version: Option<i32>,
    state: &ServerState,
) -> Result<()> {
    if language_id != LANGUAGE_ID && !is_vasuki_uri(&uri) {
        return Err(VasukiError::UnsupportedDocument(format!("{uri:?}")));
    }

    tracing::debug!("storing {:?} ({} bytes)", uri, content.len());
    state.update_document(uri, DocumentState::new(content, version));
    Ok(())
}

/// Replaces the text of a changed document.
///
/// The server uses full sync, so each change carries the complete text.
/// Documents accepted on open stay supported whatever their URI.
pub fn handle_document_change(
    uri: Uri,
    content: String,
    version: i32,
    state: &ServerState,
) -> Result<()> {
    let known = state.get_document(&uri).is_some();
    if !known && !is_vasuki_uri(&uri) {
        return Err(VasukiError::UnsupportedDocument(format!("{uri:?}")));
    }

    if let Some(doc) = state.get_document(&uri)
        && doc.version.is_some_and(|current| current > version)
    {
        tracing::debug!(
            "ignoring stale change for {:?} (version {} < {:?})",
            uri,
            version,
            doc.version
        );
        return Ok(());
    }

    state.update_document(uri, DocumentState::new(content, Some(version)));
    Ok(())
}

/// Makes sure a document is available before a request uses it.
///
/// Returns `true` when the document is already open or was loaded from
/// disk. Returns `false` when cold start is disabled or rate limited, when
/// the file is not a `.vasuki` file, or when reading it failed. Only the
/// disk load checks the extension.
///
/// # Examples
///
/// ```no_run
/// # use vasuki_lsp::document::{ServerState, ensure_document_loaded};
/// # use std::sync::Arc;
/// # use tower_lsp_server::ls_types::Uri;
/// # async fn example(
/// #     uri: &Uri,
/// #     state: Arc<ServerState>,
/// #     client: tower_lsp_server::Client,
/// #     config: Arc<tokio::sync::RwLock<vasuki_lsp::VasukiConfig>>,
/// # ) {
/// if ensure_document_loaded(uri, state, client, config).await {
///     println!("Document is available for processing");
/// }
/// # }
/// ```
pub async fn ensure_document_loaded(
    uri: &Uri,
    state: Arc<ServerState>,
    client: Client,
    config: Arc<RwLock<VasukiConfig>>,
) -> bool {
    // Fast path: document already open
    if state.get_document(uri).is_some() {
        return true;
    }

    let cold_start_config = { config.read().await.cold_start.clone() };

    if !cold_start_config.enabled {
        tracing::debug!("Cold start disabled via configuration");
        return false;
    }

    if !is_vasuki_uri(uri) {
        tracing::debug!("Unsupported file type: {:?}", uri);
        return false;
    }

    let min_interval = Duration::from_millis(cold_start_config.rate_limit_ms);
    if !state.cold_start_limiter.allow_cold_start(uri, min_interval) {
        return false;
    }

    tracing::info!("Loading document from disk (cold start): {:?}", uri);
    let content = match load_document_from_disk(uri).await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to load document {:?}: {}", uri, e);
            client
                .log_message(MessageType::WARNING, format!("Could not load file: {e}"))
                .await;
            return false;
        }
    };

    match handle_document_open(uri.clone(), LANGUAGE_ID, content, None, &state) {
        Ok(()) => {
            tracing::info!("Document loaded successfully from disk: {:?}", uri);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to store loaded document {:?}: {}", uri, e);
            false
        }
    }
}
