use crate::config::VasukiConfig;
use crate::document::{ServerState, handle_document_change, handle_document_open};
use crate::handlers::{completion, definition, hover};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_lsp_server::ls_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeConfigurationParams,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    GotoDefinitionParams, GotoDefinitionResponse, Hover, HoverParams, HoverProviderCapability,
    InitializeParams, InitializeResult, InitializedParams, MessageType, OneOf, ServerCapabilities,
    ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tower_lsp_server::{Client, LanguageServer, jsonrpc::Result};
use vasuki_core::VasukiError;

/// How often stale cold start entries are swept.
const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Cold start entries older than this are dropped by the sweep.
const LIMITER_MAX_AGE: Duration = Duration::from_secs(300);

pub struct Backend {
    pub(crate) client: Client,
    state: Arc<ServerState>,
    config: Arc<RwLock<VasukiConfig>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(ServerState::new()),
            config: Arc::new(RwLock::new(VasukiConfig::default())),
        }
    }

    fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                resolve_provider: Some(false),
                ..Default::default()
            }),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            definition_provider: Some(OneOf::Left(true)),
            ..Default::default()
        }
    }
}

impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("initializing vasuki-lsp server");

        if let Some(init_options) = params.initialization_options {
            match serde_json::from_value::<VasukiConfig>(init_options) {
                Ok(config) => {
                    tracing::debug!("loaded configuration: {:?}", config);
                    *self.config.write().await = config;
                }
                Err(e) => {
                    tracing::warn!("ignoring invalid initialization options: {}", e);
                }
            }
        }

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "vasuki-lsp".into(),
                version: Some(env!("CARGO_PKG_VERSION").into()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("vasuki-lsp server initialized");
        self.client
            .log_message(MessageType::INFO, "vasuki-lsp ready")
            .await;

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(LIMITER_CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                state.cold_start_limiter.cleanup_old_entries(LIMITER_MAX_AGE);
                tracing::trace!("Cleaned up old cold start rate limit entries");
            }
        });
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutting down vasuki-lsp server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        tracing::info!("document opened: {:?}", doc.uri);

        let uri = doc.uri.clone();
        match handle_document_open(
            doc.uri,
            &doc.language_id,
            doc.text,
            Some(doc.version),
            &self.state,
        ) {
            Ok(()) => {}
            Err(VasukiError::UnsupportedDocument(_)) => {
                tracing::debug!("unsupported document: {:?} ({})", uri, doc.language_id);
            }
            Err(e) => tracing::error!("failed to open document {:?}: {}", uri, e),
        }
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: the last change holds the complete text
        let Some(change) = params.content_changes.into_iter().next_back() else {
            return;
        };

        match handle_document_change(uri.clone(), change.text, version, &self.state) {
            Ok(()) => {}
            Err(VasukiError::UnsupportedDocument(_)) => {
                tracing::debug!("unsupported document: {:?}", uri);
            }
            Err(e) => tracing::error!("failed to process document change {:?}: {}", uri, e),
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::info!("document closed: {:?}", uri);

        self.state.remove_document(&uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        match VasukiConfig::from_settings(params.settings) {
            Ok(None) => {
                tracing::debug!("settings carry no vasuki section, keeping configuration");
            }
            Ok(Some(config)) => {
                tracing::info!("configuration updated");
                tracing::debug!("new configuration: {:?}", config);
                *self.config.write().await = config;
            }
            Err(e) => {
                tracing::warn!("ignoring invalid configuration: {}", e);
                self.client
                    .log_message(
                        MessageType::WARNING,
                        format!("Invalid vasuki configuration: {e}"),
                    )
                    .await;
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        Ok(completion::handle_completion(params, Arc::clone(&self.config)).await)
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        Ok(hover::handle_hover(
            Arc::clone(&self.state),
            params,
            self.client.clone(),
            Arc::clone(&self.config),
        )
        .await)
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        Ok(definition::handle_goto_definition(
            Arc::clone(&self.state),
            params,
            self.client.clone(),
            Arc::clone(&self.config),
        )
        .await)
    }
}
