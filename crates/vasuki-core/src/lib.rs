//! Core language data and text lookups for vasuki-lsp.
//!
//! This crate knows everything the server knows about the Vasuki scripting
//! language, which is deliberately little: a fixed keyword list, a fixed
//! list of built-in functions, documentation for a handful of them, and a
//! textual `def name(` pattern for locating function definitions.
//!
//! Nothing here performs I/O or holds state. Every function recomputes its
//! answer from the static tables or from the text it is given, so the LSP
//! layer can call into it from any request handler.
//!
//! # Examples
//!
//! ```
//! use vasuki_core::{definition::find_definition, hover::hover_at};
//! use tower_lsp_server::ls_types::Position;
//!
//! let source = "def add(a, b) { return a + b; }\nprint(add(1, 2));\n";
//!
//! let range = find_definition(source, "add").unwrap().unwrap();
//! assert_eq!(range.start, Position::new(0, 0));
//!
//! assert!(hover_at(source, Position::new(1, 2)).is_some());
//! ```

pub mod completion;
pub mod definition;
pub mod error;
pub mod hover;
pub mod language;
pub mod text;

// Re-export commonly used types
pub use completion::completion_items;
pub use definition::{definition_at, definition_pattern, find_definition};
pub use error::{Result, VasukiError};
pub use hover::{hover_at, hover_for_word};
pub use language::{
    BUILTIN_FUNCTIONS, FILE_EXTENSION, KEYWORDS, LANGUAGE_ID, builtin_documentation, is_builtin,
    is_keyword, is_vasuki_uri,
};
pub use text::{LineIndex, Word, word_at};
