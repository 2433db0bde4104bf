//! Locating nodes in parsed fixtures.

use typed_props::parser::ast::{AstNode, identifier_at};
use typed_props::{SyntaxNode, TextSize, parse};

/// Parse `source`, asserting that it has no syntax errors.
pub fn parse_ok(source: &str) -> SyntaxNode {
    let parse = parse(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    parse.syntax()
}

/// Byte offset of the `nth` whole-word occurrence of `word` in `source`.
pub fn word_offset(source: &str, word: &str, nth: usize) -> usize {
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    source
        .match_indices(word)
        .map(|(idx, _)| idx)
        .filter(|&idx| {
            let before = source[..idx].chars().next_back();
            let after = source[idx + word.len()..].chars().next();
            !before.is_some_and(is_word) && !after.is_some_and(is_word)
        })
        .nth(nth)
        .unwrap_or_else(|| panic!("no occurrence {nth} of `{word}`"))
}

/// The identifier node at the `nth` whole-word occurrence of `name`.
pub fn identifier(root: &SyntaxNode, name: &str, nth: usize) -> SyntaxNode {
    let offset = word_offset(&root.text().to_string(), name, nth);
    identifier_at(root, TextSize::from(offset as u32 + 1))
        .unwrap_or_else(|| panic!("occurrence {nth} of `{name}` is not an identifier"))
        .syntax()
        .clone()
}
