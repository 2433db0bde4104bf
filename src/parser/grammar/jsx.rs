//! JSX elements
//!
//! JSX text is not lexed specially: the raw tokens between tags are wrapped
//! in JSX_TEXT nodes, so the concatenated node text still reproduces the
//! source exactly.

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// JsxElement = JsxSelfClosingElement | JsxOpeningElement JsxChild* JsxClosingElement
    ///
    /// JsxOpeningElement = '<' JsxName? TypeArguments? JsxAttribute* '>'
    /// JsxSelfClosingElement = '<' JsxName TypeArguments? JsxAttribute* '/' '>'
    /// JsxClosingElement = '<' '/' JsxName? '>'
    pub(super) fn parse_jsx_element(&mut self) {
        let element = self.checkpoint();
        self.expect(SyntaxKind::LT);

        if !self.at(SyntaxKind::GT) {
            self.parse_jsx_element_name();
            if self.at(SyntaxKind::LT) {
                self.parse_type_arguments();
            }
            self.parse_jsx_attributes();
        }

        if self.eat(SyntaxKind::SLASH) {
            self.expect(SyntaxKind::GT);
            self.start_node_at(element, SyntaxKind::JSX_SELF_CLOSING_ELEMENT);
            self.finish_node();
            return;
        }

        self.expect(SyntaxKind::GT);
        self.start_node_at(element, SyntaxKind::JSX_OPENING_ELEMENT);
        self.finish_node();

        self.parse_jsx_children();

        self.start_node(SyntaxKind::JSX_CLOSING_ELEMENT);
        self.expect(SyntaxKind::LT);
        self.expect(SyntaxKind::SLASH);
        if !self.at(SyntaxKind::GT) {
            self.parse_jsx_element_name();
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();

        self.start_node_at(element, SyntaxKind::JSX_ELEMENT);
        self.finish_node();
    }

    /// JsxName = IDENT (('-' | ':') IDENT)* | IDENT ('.' IDENT)*
    ///
    /// Component names become IDENTIFIER (or MEMBER_EXPRESSION) nodes, so
    /// `<Layout>` refers to `Layout` like any other expression would.
    fn parse_jsx_element_name(&mut self) {
        let checkpoint = self.checkpoint();
        if !self.current_kind().is_identifier_name() {
            self.error(format!(
                "expected a JSX element name, found '{}'",
                self.current_text()
            ));
            return;
        }
        self.start_node(SyntaxKind::IDENTIFIER);
        self.bump_remap(SyntaxKind::IDENT);
        self.eat_jsx_name_continuation();
        self.finish_node();

        while self.at(SyntaxKind::DOT) {
            self.start_node_at(checkpoint, SyntaxKind::MEMBER_EXPRESSION);
            self.bump();
            self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
            self.finish_node();
        }
    }

    /// Dashed and namespaced names: `data-id`, `xlink:href`
    fn eat_jsx_name_continuation(&mut self) {
        while matches!(self.current_kind(), SyntaxKind::MINUS | SyntaxKind::COLON)
            && self.current_is_adjacent()
            && self.nth_is_adjacent(1)
            && self.nth(1).is_identifier_name()
        {
            self.bump();
            self.bump_remap(SyntaxKind::IDENT);
        }
    }

    /// JsxAttribute = JsxAttributeName ('=' (String | JsxExpression | JsxElement))?
    ///              | '{' '...' AssignmentExpression '}'
    fn parse_jsx_attributes(&mut self) {
        while !self.at_any(&[SyntaxKind::GT, SyntaxKind::SLASH]) && !self.at_eof() {
            let before = self.pos();
            if self.at(SyntaxKind::L_BRACE) {
                self.parse_jsx_expression();
            } else if self.current_kind().is_identifier_name() {
                self.start_node(SyntaxKind::JSX_ATTRIBUTE);
                self.start_node(SyntaxKind::PROPERTY_IDENTIFIER);
                self.bump_remap(SyntaxKind::IDENT);
                self.eat_jsx_name_continuation();
                self.finish_node();
                if self.eat(SyntaxKind::EQ) {
                    match self.current_kind() {
                        SyntaxKind::STRING => self.parse_literal(),
                        SyntaxKind::L_BRACE => self.parse_jsx_expression(),
                        SyntaxKind::LT => self.parse_jsx_element(),
                        _ => self.error(format!(
                            "expected a JSX attribute value, found '{}'",
                            self.current_text()
                        )),
                    }
                }
                self.finish_node();
            }
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in JSX attributes", self.current_text()),
                    &[SyntaxKind::GT, SyntaxKind::SLASH],
                );
            }
        }
    }

    /// JsxExpression = '{' ('...'? Expression)? '}'
    fn parse_jsx_expression(&mut self) {
        self.start_node(SyntaxKind::JSX_EXPRESSION);
        self.expect(SyntaxKind::L_BRACE);
        let no_in = std::mem::replace(&mut self.no_in, false);
        if self.at(SyntaxKind::DOT_DOT_DOT) {
            self.start_node(SyntaxKind::SPREAD_ELEMENT);
            self.bump();
            self.parse_assignment_expression();
            self.finish_node();
        } else if !self.at(SyntaxKind::R_BRACE) {
            self.parse_expression();
        }
        self.no_in = no_in;
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// JsxChild = JsxText | JsxExpression | JsxElement
    fn parse_jsx_children(&mut self) {
        loop {
            match self.current_kind() {
                _ if self.at_eof() => {
                    self.error("unterminated JSX element");
                    return;
                }
                SyntaxKind::LT if self.nth(1) == SyntaxKind::SLASH => return,
                SyntaxKind::LT => self.parse_jsx_element(),
                SyntaxKind::L_BRACE => self.parse_jsx_expression(),
                _ => {
                    self.start_node(SyntaxKind::JSX_TEXT);
                    while !self.at_any(&[SyntaxKind::LT, SyntaxKind::L_BRACE]) && !self.at_eof() {
                        self.bump_any();
                    }
                    self.finish_node();
                }
            }
        }
    }
}
