//! Hover documentation for built-in functions.

use tower_lsp_server::ls_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position, Range};

use crate::language::builtin_documentation;
use crate::text::word_at;

/// Builds a hover for `word` if it is a documented built-in.
///
/// # Examples
///
/// ```
/// use vasuki_core::hover_for_word;
///
/// assert!(hover_for_word("print", None).is_some());
/// assert!(hover_for_word("foobar123", None).is_none());
/// ```
pub fn hover_for_word(word: &str, range: Option<Range>) -> Option<Hover> {
    let docs = builtin_documentation(word)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: docs.to_string(),
        }),
        range,
    })
}

/// Builds a hover for the identifier at `position` in `text`.
pub fn hover_at(text: &str, position: Position) -> Option<Hover> {
    let word = word_at(text, position)?;
    tracing::trace!("hover lookup for {:?}", word.text);
    hover_for_word(word.text, Some(word.range))
}
