//! Completion handler.

use crate::config::VasukiConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp_server::ls_types::{CompletionParams, CompletionResponse};
use vasuki_core::completion_items;

/// Handles completion requests.
///
/// The candidate list is the same for every position and every document,
/// so the document itself is never consulted.
pub async fn handle_completion(
    params: CompletionParams,
    config: Arc<RwLock<VasukiConfig>>,
) -> Option<CompletionResponse> {
    let enabled = config.read().await.completion.enabled;
    if !enabled {
        tracing::debug!("completion disabled via configuration");
        return None;
    }

    let position = params.text_document_position.position;
    tracing::trace!(
        "completion request: uri={:?}, position={}:{}",
        params.text_document_position.text_document.uri,
        position.line,
        position.character
    );

    Some(CompletionResponse::Array(completion_items()))
}
