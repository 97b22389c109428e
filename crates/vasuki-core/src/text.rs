//! Offset and position conversion for document text.
//!
//! LSP positions count columns in UTF-16 code units. Documents are stored
//! as `&str`, so every lookup goes through a [`LineIndex`] that converts
//! between byte offsets and [`Position`]s.

use tower_lsp_server::ls_types::{Position, Range};

/// Line start table for a document.
///
/// # Examples
///
/// ```
/// use vasuki_core::LineIndex;
/// use tower_lsp_server::ls_types::Position;
///
/// let index = LineIndex::new("var x = 1;\nprint(x);\n");
/// assert_eq!(index.offset_to_position(11), Position::new(1, 0));
/// assert_eq!(index.line_end(1), Some(Position::new(1, 9)));
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// The indexed text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the content of `line` without its `\n` or `\r\n` terminator.
    pub fn line_content(&self, line: u32) -> Option<&'a str> {
        let line = line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());

        let content = &self.text[start..end];
        let content = content.strip_suffix('\n').unwrap_or(content);
        Some(content.strip_suffix('\r').unwrap_or(content))
    }

    /// Converts a byte offset into a position.
    ///
    /// Offsets past the end clamp to the end of the document. An offset in
    /// the middle of a multi-byte character resolves to that character's
    /// start.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];

        let character: usize = self.text[line_start..]
            .char_indices()
            .take_while(|(i, _)| line_start + i < offset)
            .filter(|(i, c)| line_start + i + c.len_utf8() <= offset)
            .map(|(_, c)| c.len_utf16())
            .sum();

        Position::new(line as u32, character as u32)
    }

    /// Converts a position into a byte offset.
    ///
    /// Returns `None` for a line past the end of the document. A column past
    /// the end of its line clamps to the line end.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let content = self.line_content(position.line)?;
        let line_start = self.line_starts[position.line as usize];
        Some(line_start + utf16_column_to_byte(content, position.character))
    }

    /// Position just after the last character of `line`.
    pub fn line_end(&self, line: u32) -> Option<Position> {
        let content = self.line_content(line)?;
        Some(Position::new(line, utf16_len(content)))
    }

    /// Finds the identifier under or directly before the cursor.
    pub fn word_at(&self, position: Position) -> Option<Word<'a>> {
        let content = self.line_content(position.line)?;
        let bytes = content.as_bytes();
        let cursor = utf16_column_to_byte(content, position.character);

        let mut start = cursor;
        while start > 0 && is_word_byte(bytes[start - 1]) {
            start -= 1;
        }
        let mut end = cursor;
        while end < bytes.len() && is_word_byte(bytes[end]) {
            end += 1;
        }

        if start == end {
            return None;
        }

        // Word bytes are ASCII, so the word's UTF-16 width is its byte length.
        let start_col = utf16_len(&content[..start]);
        let end_col = start_col + (end - start) as u32;

        Some(Word {
            text: &content[start..end],
            range: Range::new(
                Position::new(position.line, start_col),
                Position::new(position.line, end_col),
            ),
        })
    }
}

/// An identifier found in a document, with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub range: Range,
}

/// Finds the identifier at `position` in `text`.
///
/// An identifier is a run of ASCII letters, digits and underscores. The
/// cursor may sit anywhere inside it or immediately after its last
/// character.
///
/// # Examples
///
/// ```
/// use vasuki_core::word_at;
/// use tower_lsp_server::ls_types::Position;
///
/// let text = "push(items, 3);";
/// assert_eq!(word_at(text, Position::new(0, 2)).unwrap().text, "push");
/// assert_eq!(word_at(text, Position::new(0, 4)).unwrap().text, "push");
/// assert!(word_at(text, Position::new(0, 11)).is_none());
/// ```
pub fn word_at(text: &str, position: Position) -> Option<Word<'_>> {
    LineIndex::new(text).word_at(position)
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn utf16_len(s: &str) -> u32 {
    s.encode_utf16().count() as u32
}

fn utf16_column_to_byte(line: &str, column: u32) -> usize {
    let mut units = 0u32;
    for (i, c) in line.char_indices() {
        if units >= column {
            return i;
        }
        units += c.len_utf16() as u32;
    }
    line.len()
}
