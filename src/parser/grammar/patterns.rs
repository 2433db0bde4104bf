//! Binding patterns and formal parameters

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// BindingTarget = IDENT | ObjectPattern | ArrayPattern
    pub(super) fn parse_binding_target(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_BRACE => self.parse_object_pattern(),
            SyntaxKind::L_BRACKET => self.parse_array_pattern(),
            _ => {
                self.parse_binding_identifier();
            }
        }
    }

    /// BindingElement = BindingTarget ('=' AssignmentExpression)?
    fn parse_binding_element(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_binding_target();
        if self.at(SyntaxKind::EQ) {
            self.start_node_at(checkpoint, SyntaxKind::ASSIGNMENT_PATTERN);
            self.bump();
            self.parse_assignment_expression();
            self.finish_node();
        }
    }

    /// RestPattern = '...' BindingTarget
    fn parse_rest_pattern(&mut self) {
        self.start_node(SyntaxKind::REST_PATTERN);
        self.bump();
        self.parse_binding_target();
        self.finish_node();
    }

    /// ObjectPattern = '{' (PatternMember (',' PatternMember)* ','?)? '}'
    ///
    /// PatternMember = PropertyName ':' BindingElement   (PAIR_PATTERN)
    ///               | IDENT '=' AssignmentExpression    (OBJECT_ASSIGNMENT_PATTERN)
    ///               | IDENT                             (shorthand, plain IDENTIFIER)
    ///               | RestPattern
    fn parse_object_pattern(&mut self) {
        self.start_node(SyntaxKind::OBJECT_PATTERN);
        self.bump();
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let before = self.pos();
            self.parse_object_pattern_member();
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in object pattern", self.current_text()),
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_object_pattern_member(&mut self) {
        if self.at(SyntaxKind::DOT_DOT_DOT) {
            self.parse_rest_pattern();
            return;
        }
        if self.nth(1) == SyntaxKind::COLON || !self.at(SyntaxKind::IDENT) {
            self.start_node(SyntaxKind::PAIR_PATTERN);
            self.parse_property_name();
            self.expect(SyntaxKind::COLON);
            self.parse_binding_element();
            self.finish_node();
            return;
        }
        if self.nth(1) == SyntaxKind::EQ {
            self.start_node(SyntaxKind::OBJECT_ASSIGNMENT_PATTERN);
            self.parse_binding_identifier();
            self.bump();
            self.parse_assignment_expression();
            self.finish_node();
            return;
        }
        self.parse_binding_identifier();
    }

    /// ArrayPattern = '[' (BindingElement | RestPattern | <hole>) (',' ...)* ']'
    fn parse_array_pattern(&mut self) {
        self.start_node(SyntaxKind::ARRAY_PATTERN);
        self.bump();
        while !self.at(SyntaxKind::R_BRACKET) && !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::COMMA => {}
                SyntaxKind::DOT_DOT_DOT => self.parse_rest_pattern(),
                SyntaxKind::IDENT | SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET => {
                    self.parse_binding_element()
                }
                _ => self.error_recover(
                    format!("unexpected '{}' in array pattern", self.current_text()),
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACKET],
                ),
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACKET);
        self.finish_node();
    }

    /// FormalParameters = '(' (Parameter (',' Parameter)* ','?)? ')'
    pub(super) fn parse_formal_parameters(&mut self) {
        self.start_node(SyntaxKind::FORMAL_PARAMETERS);
        if !self.expect(SyntaxKind::L_PAREN) {
            self.finish_node();
            return;
        }
        let no_in = std::mem::replace(&mut self.no_in, false);
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            let before = self.pos();
            self.parse_parameter();
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in parameter list", self.current_text()),
                    &[SyntaxKind::COMMA, SyntaxKind::R_PAREN],
                );
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.no_in = no_in;
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    /// Parameter = Decorator* AccessibilityModifier* ('...'? BindingTarget | 'this')
    ///             '?'? TypeAnnotation? ('=' AssignmentExpression)?
    ///
    /// A parameter with `?` or a default value is an OPTIONAL_PARAMETER,
    /// everything else a REQUIRED_PARAMETER.
    fn parse_parameter(&mut self) {
        const PARAMETER_MODIFIERS: &[&str] =
            &["public", "private", "protected", "readonly", "override"];

        let checkpoint = self.checkpoint();
        self.parse_decorators();
        while self.at_modifier(PARAMETER_MODIFIERS) {
            self.bump_modifier();
        }

        match self.current_kind() {
            SyntaxKind::DOT_DOT_DOT => self.parse_rest_pattern(),
            SyntaxKind::THIS_KW => self.bump(),
            SyntaxKind::IDENT | SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET => {
                self.parse_binding_target()
            }
            _ => {
                self.error(format!(
                    "expected a parameter, found '{}'",
                    self.current_text()
                ));
                return;
            }
        }

        let mut optional = self.eat(SyntaxKind::QUESTION);
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        if self.eat(SyntaxKind::EQ) {
            optional = true;
            self.parse_assignment_expression();
        }

        let kind = if optional {
            SyntaxKind::OPTIONAL_PARAMETER
        } else {
            SyntaxKind::REQUIRED_PARAMETER
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }
}
