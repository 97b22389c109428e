//! Hover handler.

use crate::config::VasukiConfig;
use crate::document::{ServerState, ensure_document_loaded};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::{Hover, HoverParams};

/// Handles hover requests for the word under the cursor.
pub async fn handle_hover(
    state: Arc<ServerState>,
    params: HoverParams,
    client: Client,
    config: Arc<RwLock<VasukiConfig>>,
) -> Option<Hover> {
    let enabled = config.read().await.hover.enabled;
    if !enabled {
        return None;
    }

    let uri = &params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    // Ensure document is loaded (cold start support)
    if !ensure_document_loaded(uri, Arc::clone(&state), client, config).await {
        tracing::warn!("Could not load document for hover: {:?}", uri);
        return None;
    }

    let doc = state.get_document(uri)?;
    vasuki_core::hover_at(&doc.content, position)
}
