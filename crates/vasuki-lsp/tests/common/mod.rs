//! Common test utilities for integration tests.
//!
//! Provides `LspClient`, which drives the `vasuki-lsp` binary over stdio.

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, Command, Stdio};

/// A notification received while waiting for a response.
#[derive(Debug, Clone)]
pub(crate) struct CapturedNotification {
    /// The LSP method name (e.g., "window/logMessage").
    pub method: String,
    /// The full notification parameters.
    pub params: Value,
}

/// LSP test client for communicating with the server binary.
pub(crate) struct LspClient {
    process: Child,
    reader: BufReader<std::process::ChildStdout>,
    notifications: Vec<CapturedNotification>,
}

impl LspClient {
    /// Spawn the vasuki-lsp binary.
    pub(crate) fn spawn() -> Self {
        let mut process = Command::new(env!("CARGO_BIN_EXE_vasuki-lsp"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn vasuki-lsp binary");

        let stdout = process.stdout.take().expect("Failed to capture stdout");

        Self {
            process,
            reader: BufReader::new(stdout),
            notifications: Vec::new(),
        }
    }

    /// Notifications captured so far.
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn notifications(&self) -> &[CapturedNotification] {
        &self.notifications
    }

    /// Send a JSON-RPC message to the server.
    pub(crate) fn send(&mut self, message: &Value) {
        let body = serde_json::to_string(message).unwrap();
        let header = format!("Content-Length: {}\r\n\r\n", body.len());

        let stdin = self.process.stdin.as_mut().expect("stdin not captured");
        stdin.write_all(header.as_bytes()).unwrap();
        stdin.write_all(body.as_bytes()).unwrap();
        stdin.flush().unwrap();
    }

    /// Read messages until the response with `expected_id` arrives.
    ///
    /// Notifications seen on the way are captured.
    pub(crate) fn read_response(&mut self, expected_id: i64) -> Value {
        loop {
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                let bytes_read = self
                    .reader
                    .read_line(&mut line)
                    .expect("Failed to read header");

                assert!(bytes_read != 0, "Server closed connection unexpectedly");

                if line == "\r\n" || line == "\n" {
                    break;
                }

                if line.to_lowercase().starts_with("content-length:") {
                    content_length = line
                        .split(':')
                        .nth(1)
                        .unwrap()
                        .trim()
                        .parse()
                        .expect("Invalid content length");
                }
            }

            if content_length == 0 {
                continue;
            }

            let mut body = vec![0u8; content_length];
            self.reader
                .read_exact(&mut body)
                .expect("Failed to read body");

            let message: Value = serde_json::from_slice(&body).unwrap_or_else(|e| {
                panic!("Invalid JSON: {e} in: {:?}", String::from_utf8_lossy(&body))
            });

            if message.get("id").is_none() {
                if let Some(method) = message.get("method").and_then(|m| m.as_str()) {
                    self.notifications.push(CapturedNotification {
                        method: method.to_string(),
                        params: message.get("params").cloned().unwrap_or(Value::Null),
                    });
                }
                continue;
            }

            if message.get("id") == Some(&json!(expected_id)) {
                return message;
            }
        }
    }

    /// Initialize the LSP session.
    pub(crate) fn initialize(&mut self) -> Value {
        self.initialize_with_options(Value::Null)
    }

    /// Initialize the LSP session with `initializationOptions`.
    pub(crate) fn initialize_with_options(&mut self, options: Value) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "processId": null,
                "capabilities": {
                    "textDocument": {
                        "hover": {
                            "contentFormat": ["markdown", "plaintext"]
                        },
                        "completion": {
                            "completionItem": {
                                "documentationFormat": ["markdown", "plaintext"]
                            }
                        },
                        "definition": {}
                    }
                },
                "rootUri": "file:///tmp",
                "initializationOptions": options,
                "workspaceFolders": null
            }
        }));

        let response = self.read_response(1);

        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "initialized",
            "params": {}
        }));

        response
    }

    /// Open a text document.
    pub(crate) fn did_open(&mut self, uri: &str, text: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {
                "textDocument": {
                    "uri": uri,
                    "languageId": "vasuki",
                    "version": 1,
                    "text": text
                }
            }
        }));
    }

    /// Replace the full text of an open document.
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn did_change(&mut self, uri: &str, version: i32, text: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didChange",
            "params": {
                "textDocument": {"uri": uri, "version": version},
                "contentChanges": [{"text": text}]
            }
        }));
    }

    /// Close a document.
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn did_close(&mut self, uri: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didClose",
            "params": {
                "textDocument": {"uri": uri}
            }
        }));
    }

    fn position_request(
        &mut self,
        id: i64,
        method: &str,
        uri: &str,
        line: u32,
        character: u32,
    ) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": {
                "textDocument": {"uri": uri},
                "position": {"line": line, "character": character}
            }
        }));
        self.read_response(id)
    }

    /// Request hover information.
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn hover(&mut self, id: i64, uri: &str, line: u32, character: u32) -> Value {
        self.position_request(id, "textDocument/hover", uri, line, character)
    }

    /// Request completions.
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn completion(&mut self, id: i64, uri: &str, line: u32, character: u32) -> Value {
        self.position_request(id, "textDocument/completion", uri, line, character)
    }

    /// Request the definition of the symbol at a position.
    #[allow(dead_code)] // Not used in all tests
    pub(crate) fn definition(&mut self, id: i64, uri: &str, line: u32, character: u32) -> Value {
        self.position_request(id, "textDocument/definition", uri, line, character)
    }

    /// Shutdown the server.
    pub(crate) fn shutdown(&mut self) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": 999,
            "method": "shutdown"
        }));
        self.read_response(999)
    }
}

impl Drop for LspClient {
    fn drop(&mut self) {
        let _ = self.process.kill();
    }
}
