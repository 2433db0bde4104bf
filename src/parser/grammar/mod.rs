//! Grammar rules for the JavaScript / TypeScript parser
//!
//! Each submodule adds an `impl Parser` block for one area of the grammar.
//! Rules are documented with a loose EBNF of what they accept.

mod expressions;
mod jsx;
mod patterns;
mod statements;
mod types;

use super::parser::Parser;
use super::syntax_kind::SyntaxKind;

impl Parser<'_> {
    // =========================================================================
    // Shared leaf rules
    // =========================================================================

    /// Wrap the current identifier-like token in a node of `kind`.
    ///
    /// Reserved words are accepted and recorded as `IDENT` so that
    /// `obj.default` and `import { default as x }` compare like plain names.
    pub(super) fn parse_name(&mut self, kind: SyntaxKind) -> bool {
        if !self.current_kind().is_identifier_name() {
            self.error(format!("expected a name, found '{}'", self.current_text()));
            return false;
        }
        self.start_node(kind);
        self.bump_remap(SyntaxKind::IDENT);
        self.finish_node();
        true
    }

    /// BindingIdentifier = IDENT
    pub(super) fn parse_binding_identifier(&mut self) -> bool {
        if self.at(SyntaxKind::IDENT) {
            self.parse_name(SyntaxKind::IDENTIFIER)
        } else {
            self.error(format!(
                "expected an identifier, found '{}'",
                self.current_text()
            ));
            false
        }
    }

    /// PropertyName = IdentifierName | '#' IdentifierName | String | Number | '[' Expression ']'
    pub(super) fn parse_property_name(&mut self) {
        match self.current_kind() {
            SyntaxKind::STRING | SyntaxKind::NUMBER => self.parse_literal(),
            SyntaxKind::L_BRACKET => {
                self.start_node(SyntaxKind::COMPUTED_PROPERTY_NAME);
                self.bump();
                self.parse_assignment_expression();
                self.expect(SyntaxKind::R_BRACKET);
                self.finish_node();
            }
            SyntaxKind::HASH => {
                self.start_node(SyntaxKind::PROPERTY_IDENTIFIER);
                self.bump();
                if self.current_kind().is_identifier_name() {
                    self.bump_remap(SyntaxKind::IDENT);
                }
                self.finish_node();
            }
            _ => {
                self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
            }
        }
    }

    /// Literal = Number | String | Template | 'true' | 'false' | 'null' | 'this' | 'super'
    pub(super) fn parse_literal(&mut self) {
        self.start_node(SyntaxKind::LITERAL);
        self.bump();
        self.finish_node();
    }

    /// ModuleSource = String
    ///
    /// `$`-prefixed identifiers are also accepted so that structural patterns
    /// such as `import $NAME from $SOURCE` parse without errors.
    pub(super) fn parse_module_source(&mut self) {
        if self.at(SyntaxKind::STRING) {
            self.parse_literal();
        } else if self.at(SyntaxKind::IDENT) && self.current_text().starts_with('$') {
            self.parse_name(SyntaxKind::IDENTIFIER);
        } else {
            self.error(format!(
                "expected a module specifier string, found '{}'",
                self.current_text()
            ));
        }
    }

    /// Is the current token a modifier keyword (e.g. `static`, `async`) that
    /// is followed by something it can modify, rather than being a name itself?
    pub(super) fn at_modifier(&self, modifiers: &[&str]) -> bool {
        if self.current_kind() != SyntaxKind::IDENT || !modifiers.contains(&self.current_text()) {
            return false;
        }
        let next = self.nth(1);
        let next_is_member_start = next.is_identifier_name()
            || matches!(
                next,
                SyntaxKind::L_BRACKET
                    | SyntaxKind::HASH
                    | SyntaxKind::STAR
                    | SyntaxKind::STRING
                    | SyntaxKind::NUMBER
                    | SyntaxKind::L_BRACE
            );
        next_is_member_start && !self.nth_line_break(1)
    }

    /// Decorator = '@' LeftHandSideExpression
    pub(super) fn parse_decorators(&mut self) {
        while self.at(SyntaxKind::AT) {
            self.bump();
            self.parse_left_hand_side_expression();
        }
    }
}

fn contextual_keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "abstract" => SyntaxKind::ABSTRACT_KW,
        "as" => SyntaxKind::AS_KW,
        "async" => SyntaxKind::ASYNC_KW,
        "declare" => SyntaxKind::DECLARE_KW,
        "from" => SyntaxKind::FROM_KW,
        "get" => SyntaxKind::GET_KW,
        "keyof" => SyntaxKind::KEYOF_KW,
        "of" => SyntaxKind::OF_KW,
        "private" => SyntaxKind::PRIVATE_KW,
        "protected" => SyntaxKind::PROTECTED_KW,
        "public" => SyntaxKind::PUBLIC_KW,
        "readonly" => SyntaxKind::READONLY_KW,
        "satisfies" => SyntaxKind::SATISFIES_KW,
        "set" => SyntaxKind::SET_KW,
        "static" => SyntaxKind::STATIC_KW,
        "type" => SyntaxKind::TYPE_KW,
        _ => return None,
    };
    Some(kind)
}

impl Parser<'_> {
    /// Consume a modifier word, remapping it to its keyword kind when known
    pub(super) fn bump_modifier(&mut self) {
        match contextual_keyword(self.current_text()) {
            Some(kind) => self.bump_remap(kind),
            None => self.bump(),
        }
    }
}
