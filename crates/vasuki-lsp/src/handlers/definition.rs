//! Go-to-definition handler.

use crate::config::VasukiConfig;
use crate::document::{ServerState, ensure_document_loaded};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::{GotoDefinitionParams, GotoDefinitionResponse, Location};

/// Handles definition requests by scanning the current document for
/// `def <word>(`.
pub async fn handle_goto_definition(
    state: Arc<ServerState>,
    params: GotoDefinitionParams,
    client: Client,
    config: Arc<RwLock<VasukiConfig>>,
) -> Option<GotoDefinitionResponse> {
    let enabled = config.read().await.definition.enabled;
    if !enabled {
        return None;
    }

    let uri = params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    if !ensure_document_loaded(&uri, Arc::clone(&state), client, config).await {
        tracing::warn!("Could not load document for definition: {:?}", uri);
        return None;
    }

    let range = {
        let doc = state.get_document(&uri)?;
        vasuki_core::definition_at(&doc.content, position)
    };

    match range {
        Ok(Some(range)) => Some(GotoDefinitionResponse::Scalar(Location { uri, range })),
        Ok(None) => None,
        Err(e) => {
            tracing::error!("definition lookup failed for {:?}: {}", uri, e);
            None
        }
    }
}
