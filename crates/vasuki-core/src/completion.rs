//! Completion candidates.

use tower_lsp_server::ls_types::{
    CompletionItem, CompletionItemKind, Documentation, MarkupContent, MarkupKind,
};

use crate::language::{BUILTIN_FUNCTIONS, KEYWORDS, builtin_documentation};

const KEYWORD_DETAIL: &str = "Vasuki keyword";
const BUILTIN_DETAIL: &str = "Vasuki built-in function";

/// Builds the completion list: every keyword, then every built-in.
///
/// The list does not depend on the cursor or the typed prefix; filtering
/// and ranking are left to the client.
///
/// # Examples
///
/// ```
/// use vasuki_core::{BUILTIN_FUNCTIONS, KEYWORDS, completion_items};
///
/// let items = completion_items();
/// assert_eq!(items.len(), KEYWORDS.len() + BUILTIN_FUNCTIONS.len());
/// assert_eq!(items[0].label, "if");
/// ```
pub fn completion_items() -> Vec<CompletionItem> {
    let mut items = Vec::with_capacity(KEYWORDS.len() + BUILTIN_FUNCTIONS.len());

    items.extend(KEYWORDS.iter().map(|keyword| CompletionItem {
        label: (*keyword).to_string(),
        kind: Some(CompletionItemKind::KEYWORD),
        detail: Some(KEYWORD_DETAIL.to_string()),
        ..Default::default()
    }));

    items.extend(BUILTIN_FUNCTIONS.iter().map(|name| CompletionItem {
        label: (*name).to_string(),
        kind: Some(CompletionItemKind::FUNCTION),
        detail: Some(BUILTIN_DETAIL.to_string()),
        documentation: builtin_documentation(name).map(|docs| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: docs.to_string(),
            })
        }),
        ..Default::default()
    }));

    items
}
