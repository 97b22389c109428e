#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use zed_extension_api::{self as zed, LanguageServerId, Result, settings::LspSettings};

const BINARY_NAME: &str = "vasuki-lsp";

struct VasukiExtension {
    cached_binary_path: Option<String>,
}

impl VasukiExtension {
    /// Returns the path to the `vasuki-lsp` binary.
    ///
    /// Lookup order:
    /// 1. `lsp.vasuki-lsp.binary.path` from the user's Zed settings
    /// 2. Cached path from previous invocation
    /// 3. System PATH via `worktree.which()`
    fn language_server_binary_path(
        &mut self,
        settings: Option<&LspSettings>,
        worktree: &zed::Worktree,
    ) -> Result<String> {
        if let Some(path) = settings
            .and_then(|s| s.binary.as_ref())
            .and_then(|binary| binary.path.clone())
        {
            return Ok(path);
        }

        if let Some(path) = &self.cached_binary_path
            && fs::metadata(path).is_ok_and(|stat| stat.is_file())
        {
            return Ok(path.clone());
        }

        let path = worktree.which(BINARY_NAME).ok_or_else(|| {
            format!(
                "{BINARY_NAME} not found on PATH; install it with \
                 `cargo install vasuki-lsp` or set lsp.{BINARY_NAME}.binary.path"
            )
        })?;

        self.cached_binary_path = Some(path.clone());
        Ok(path)
    }
}

impl zed::Extension for VasukiExtension {
    fn new() -> Self {
        Self {
            cached_binary_path: None,
        }
    }

    fn language_server_command(
        &mut self,
        language_server_id: &LanguageServerId,
        worktree: &zed::Worktree,
    ) -> Result<zed::Command> {
        let settings = LspSettings::for_worktree(language_server_id.as_ref(), worktree).ok();

        let args = settings
            .as_ref()
            .and_then(|s| s.binary.as_ref())
            .and_then(|binary| binary.arguments.clone())
            .unwrap_or_default();

        Ok(zed::Command {
            command: self.language_server_binary_path(settings.as_ref(), worktree)?,
            args,
            env: worktree.shell_env(),
        })
    }

    fn language_server_initialization_options(
        &mut self,
        language_server_id: &LanguageServerId,
        worktree: &zed::Worktree,
    ) -> Result<Option<zed::serde_json::Value>> {
        Ok(LspSettings::for_worktree(language_server_id.as_ref(), worktree)
            .ok()
            .and_then(|settings| settings.initialization_options))
    }

    fn language_server_workspace_configuration(
        &mut self,
        language_server_id: &LanguageServerId,
        worktree: &zed::Worktree,
    ) -> Result<Option<zed::serde_json::Value>> {
        Ok(LspSettings::for_worktree(language_server_id.as_ref(), worktree)
            .ok()
            .and_then(|settings| settings.settings))
    }
}

zed::register_extension!(VasukiExtension);
