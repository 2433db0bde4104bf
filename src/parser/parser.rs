//! Recursive descent parser for JavaScript / TypeScript
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! Trivia is attached lazily: it is flushed into the currently open node
//! right before the next node is started or the next token is consumed, so
//! no node ever begins with whitespace or a comment. `node.text()` of an
//! identifier is therefore exactly its name.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}

/// Parse JavaScript / TypeScript / JSX source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
pub(super) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    /// Set while parsing a `for (... in ...)` head, where `in` is not a binary operator
    pub(super) no_in: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            no_in: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection (all lookahead skips trivia)
    // =========================================================================

    /// Index of the n-th significant token at or after `pos`
    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return Some(idx);
                }
                count += 1;
            }
            idx += 1;
        }
        None
    }

    pub(super) fn current(&self) -> Option<&Token<'a>> {
        self.nth_index(0).map(|idx| &self.tokens[idx])
    }

    pub(super) fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    pub(super) fn nth_text(&self, n: usize) -> &str {
        self.nth_index(n).map(|idx| self.tokens[idx].text).unwrap_or("")
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub(super) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Check for a contextual keyword such as `from` or `async`
    pub(super) fn at_contextual(&self, keyword: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text() == keyword
    }

    pub(super) fn nth_contextual(&self, n: usize, keyword: &str) -> bool {
        self.nth(n) == SyntaxKind::IDENT && self.nth_text(n) == keyword
    }

    pub(super) fn at_eof(&self) -> bool {
        self.nth_index(0).is_none()
    }

    /// True when a line break separates the previous significant token
    /// from the current one (automatic semicolon insertion).
    pub(super) fn has_preceding_line_break(&self) -> bool {
        let Some(current) = self.nth_index(0) else {
            return true;
        };
        self.tokens[..current]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.text.contains('\n'))
    }

    /// True when the n-th significant token directly follows the (n-1)-th
    /// with no trivia in between.
    pub(super) fn nth_is_adjacent(&self, n: usize) -> bool {
        match (n.checked_sub(1).and_then(|p| self.nth_index(p)), self.nth_index(n)) {
            (Some(prev), Some(idx)) => prev + 1 == idx,
            _ => false,
        }
    }

    /// Kinds of the upcoming significant tokens, starting with the current one
    pub(super) fn lookahead(&self) -> impl Iterator<Item = SyntaxKind> + '_ {
        self.tokens[self.pos..]
            .iter()
            .map(|t| t.kind)
            .filter(|kind| !kind.is_trivia())
    }

    /// True when a line break separates the n-th significant token from
    /// the one before it.
    pub(super) fn nth_line_break(&self, n: usize) -> bool {
        let Some(idx) = self.nth_index(n) else {
            return true;
        };
        self.tokens[..idx]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.text.contains('\n'))
    }

    /// True when the current token directly follows the last consumed one
    pub(super) fn current_is_adjacent(&self) -> bool {
        self.pos > 0
            && self
                .tokens
                .get(self.pos)
                .is_some_and(|t| !t.kind.is_trivia())
    }

    /// Scan forward from the current `open` token to its matching `close`,
    /// returning the significant-token lookahead index just past it.
    pub(super) fn skip_balanced(&self, open: SyntaxKind, close: SyntaxKind) -> Option<usize> {
        let start = self.nth_index(0)?;
        if self.tokens[start].kind != open {
            return None;
        }
        let mut depth = 0usize;
        let mut n = 0;
        for token in &self.tokens[start..] {
            if token.kind.is_trivia() {
                continue;
            }
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth -= 1;
                if depth == 0 {
                    return Some(n + 1);
                }
            }
            n += 1;
        }
        None
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(super) fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the current token, recording it under a different kind.
    /// Used for contextual keywords and identifier-like keywords.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(super) fn bump_any(&mut self) {
        self.bump();
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_contextual(&mut self, keyword: &str, kind: SyntaxKind) -> bool {
        if self.at_contextual(keyword) {
            self.bump_remap(kind);
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!(
                "expected {}, found {}",
                kind.display_name(),
                self.found_description()
            ));
            false
        }
    }

    /// Statement terminator with automatic semicolon insertion
    pub(super) fn consume_semicolon(&mut self) {
        if self.eat(SyntaxKind::SEMICOLON) {
            return;
        }
        if self.at(SyntaxKind::R_BRACE) || self.at_eof() || self.has_preceding_line_break() {
            return;
        }
        self.error(format!("expected ';', found {}", self.found_description()));
    }

    fn found_description(&self) -> String {
        match self.current() {
            Some(token) => format!("'{}' ({})", token.text, token.kind.display_name()),
            None => "end of file".to_string(),
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    pub(super) fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| {
                let end = self.tokens.last().map(|t| t.end()).unwrap_or_default();
                TextRange::empty(end)
            });
        self.errors.push(SyntaxError::new(message, range));
    }

    pub(super) fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump_any();
            consumed = true;
        }
        // If we didn't consume anything and we're not at EOF, consume one token
        // to prevent infinite loops
        if !consumed && !self.at_eof() {
            self.bump_any();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    /// Position marker used by loops to guarantee progress
    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    // =========================================================================
    // Grammar entry
    // =========================================================================

    /// SourceFile = Statement*
    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        while !self.at_eof() {
            let pos_before = self.pos;
            self.parse_statement();
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump_any();
            }
        }
        self.skip_trivia();

        self.finish_node();
    }
}
