//! Static language tables.
//!
//! These lists are fixed at compile time and never mutated.

use tower_lsp_server::ls_types::Uri;

/// LSP language identifier clients use for Vasuki documents.
pub const LANGUAGE_ID: &str = "vasuki";

/// File extension (without the dot) of Vasuki source files.
pub const FILE_EXTENSION: &str = "vasuki";

/// Reserved words, in the order they are offered for completion.
pub const KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "return", "yield", "break", "continue", "def", "var", "dynamic",
    "true", "false",
];

/// Built-in functions, in the order they are offered for completion.
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "print",
    "length",
    "push",
    "pop",
    // Arrays
    "array_slice",
    "array_join",
    "array_sort",
    "array_reverse",
    "array_find",
    "array_find_last",
    "array_count",
    "array_unique",
    // Strings
    "string_slice",
    "string_match",
    "string_search",
    "string_replace",
    "string_split",
    "string_match_all",
    // Math
    "sqrt",
    "pow",
    "log",
    "log10",
    "sin",
    "cos",
    "tan",
    "asin",
    "acos",
    "atan",
    "atan2",
    "degrees",
    "radians",
    "floor",
    "ceil",
    "round",
    "abs",
    "gcd",
    "lcm",
    "is_prime",
    "factorial",
    // Random
    "random_int",
    "random_float",
    "random_uniform",
    // Bitwise
    "bit_and",
    "bit_or",
    "bit_xor",
    "bit_not",
    "bit_shift_left",
    "bit_shift_right",
    // Priority queues
    "priority_queue",
    "priority_queue_enqueue",
    "priority_queue_dequeue",
    "priority_queue_peek",
    "priority_queue_size",
    "priority_queue_is_empty",
    // Sets
    "set",
    "set_add",
    "set_remove",
    "set_contains",
    "set_clear",
    "set_size",
    "set_to_list",
    "set_union",
    "set_intersection",
    "set_difference",
    "set_is_subset",
    "set_is_superset",
    // Type checks
    "is_int",
    "is_float",
    "is_string",
    "is_char",
    "is_bool",
    // String helpers
    "uppercase",
    "lowercase",
    "contains",
    "startswith",
    "endswith",
    "replace",
    "trim",
];

/// Markdown documentation for the built-ins that have it.
const BUILTIN_DOCS: &[(&str, &str)] = &[
    ("print", "Prints a value to the console.\n\n`print(value);`"),
    (
        "length",
        "Returns the length of an array or string.\n\n`length(array);`",
    ),
    (
        "push",
        "Adds an element to the end of an array.\n\n`push(array, element);`",
    ),
    (
        "array_slice",
        "Returns a slice of an array (1-based indexing).\n\n`array_slice(array, start, end, step);`",
    ),
    (
        "priority_queue",
        "Creates a new priority queue.\n\n`priority_queue(isMinQueue);` - Pass true for min queue, false for max queue",
    ),
    ("set", "Creates a new set.\n\n`set();`"),
];

/// Returns true if `word` is a Vasuki keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns true if `word` names a built-in function.
pub fn is_builtin(word: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&word)
}

/// Looks up the documentation for a built-in function.
///
/// Matching is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use vasuki_core::builtin_documentation;
///
/// assert!(builtin_documentation("print").unwrap().contains("`print(value);`"));
/// assert!(builtin_documentation("Print").is_none());
/// assert!(builtin_documentation("pop").is_none());
/// ```
pub fn builtin_documentation(name: &str) -> Option<&'static str> {
    BUILTIN_DOCS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, docs)| *docs)
}

/// Returns true if the URI points at a `.vasuki` file.
pub fn is_vasuki_uri(uri: &Uri) -> bool {
    let path = uri.path();
    path.as_str()
        .split('/')
        .next_back()
        .and_then(|filename| filename.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_unique() {
        let unique: HashSet<_> = KEYWORDS.iter().collect();
        assert_eq!(unique.len(), KEYWORDS.len());
    }

    #[test]
    fn test_builtins_are_unique() {
        let unique: HashSet<_> = BUILTIN_FUNCTIONS.iter().collect();
        assert_eq!(unique.len(), BUILTIN_FUNCTIONS.len());
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(KEYWORDS.len(), 13);
        assert_eq!(BUILTIN_FUNCTIONS.len(), 78);
    }

    #[test]
    fn test_documented_names_are_builtins() {
        for (name, _) in BUILTIN_DOCS {
            assert!(is_builtin(name), "{name} is documented but not a built-in");
        }
    }

    #[test]
    fn test_exactly_six_documented() {
        let documented = BUILTIN_FUNCTIONS
            .iter()
            .filter(|name| builtin_documentation(name).is_some())
            .count();
        assert_eq!(documented, 6);
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("def"));
        assert!(is_keyword("dynamic"));
        assert!(!is_keyword("print"));
        assert!(!is_keyword("DEF"));
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("priority_queue_is_empty"));
        assert!(is_builtin("trim"));
        assert!(!is_builtin("while"));
    }

    #[test]
    fn test_priority_queue_docs() {
        let docs = builtin_documentation("priority_queue").unwrap();
        assert!(docs.starts_with("Creates a new priority queue."));
        assert!(docs.ends_with("false for max queue"));
    }

    #[test]
    fn test_is_vasuki_uri() {
        let uri = Uri::from_file_path("/project/src/main.vasuki").unwrap();
        assert!(is_vasuki_uri(&uri));
    }

    #[test]
    fn test_is_vasuki_uri_other_extension() {
        let uri = Uri::from_file_path("/project/src/main.py").unwrap();
        assert!(!is_vasuki_uri(&uri));

        let uri = Uri::from_file_path("/project/vasuki").unwrap();
        assert!(!is_vasuki_uri(&uri));

        let uri = Uri::from_file_path("/project/main.vasuki.bytecode").unwrap();
        assert!(!is_vasuki_uri(&uri));
    }
}
