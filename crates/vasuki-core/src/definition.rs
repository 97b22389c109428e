//! Naive "go to definition" for user functions.
//!
//! A definition is any `def <name>(` in the document. There is no scoping:
//! the first match in the text wins.

use regex::Regex;
use tower_lsp_server::ls_types::{Position, Range};

use crate::error::Result;
use crate::text::LineIndex;

/// Builds the pattern matching a definition of `name`.
///
/// `name` is matched literally. Whitespace between `def`, the name and the
/// opening parenthesis may include line breaks.
pub fn definition_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(r"\bdef\s+{}\s*\(", regex::escape(name));
    Ok(Regex::new(&pattern)?)
}

/// Finds the first definition of `name` in `text`.
///
/// The returned range starts at `def` and runs to the end of that line.
///
/// # Examples
///
/// ```
/// use vasuki_core::find_definition;
/// use tower_lsp_server::ls_types::{Position, Range};
///
/// let text = "def add(a, b) { return a + b; }";
/// assert_eq!(
///     find_definition(text, "add").unwrap(),
///     Some(Range::new(Position::new(0, 0), Position::new(0, 31))),
/// );
/// assert_eq!(find_definition(text, "sub").unwrap(), None);
/// ```
pub fn find_definition(text: &str, name: &str) -> Result<Option<Range>> {
    find_definition_in(&LineIndex::new(text), name)
}

/// Finds the definition of the identifier at `position`.
pub fn definition_at(text: &str, position: Position) -> Result<Option<Range>> {
    let index = LineIndex::new(text);
    let Some(word) = index.word_at(position) else {
        return Ok(None);
    };
    find_definition_in(&index, word.text)
}

fn find_definition_in(index: &LineIndex<'_>, name: &str) -> Result<Option<Range>> {
    if name.is_empty() {
        return Ok(None);
    }

    let pattern = definition_pattern(name)?;
    let Some(found) = pattern.find(index.text()) else {
        tracing::debug!("no definition found for {:?}", name);
        return Ok(None);
    };

    let start = index.offset_to_position(found.start());
    let end = index.line_end(start.line).unwrap_or(start);

    Ok(Some(Range::new(start, end)))
}
