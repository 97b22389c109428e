//! LSP protocol handlers.
//!
//! Each handler implements one LSP feature:
//!
//! - [`completion`]: Keyword and built-in function completions
//! - [`hover`]: Documentation for built-in functions
//! - [`definition`]: Jump to `def name(` in the current document
//!
//! Handlers delegate the text work to `vasuki-core` and never fail a
//! request: a missing document, a disabled feature, or an unmatched word
//! all answer with `None`.

pub mod completion;
pub mod definition;
pub mod hover;
