//! Expressions
//!
//! Binary operators are parsed by precedence climbing over
//! [`SyntaxKind::binary_precedence`]. Left-associative chains reuse one
//! checkpoint so `a + b + c` nests as `(a + b) + c`.

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Precedence of the postfix `as` / `satisfies` operators (same level as relational)
const AS_PRECEDENCE: u8 = 8;
/// Precedence of `>>` and `>>>`, which the lexer emits as separate `>` tokens
const SHIFT_PRECEDENCE: u8 = 9;
const EXPONENT_PRECEDENCE: u8 = 12;

/// Upper bound on lookahead while deciding whether `(` starts an arrow function
const ARROW_SCAN_LIMIT: usize = 256;

impl Parser<'_> {
    /// Expression = AssignmentExpression (',' AssignmentExpression)*
    pub(super) fn parse_expression(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_assignment_expression();
        if self.at(SyntaxKind::COMMA) {
            self.start_node_at(checkpoint, SyntaxKind::SEQUENCE_EXPRESSION);
            while self.eat(SyntaxKind::COMMA) {
                self.parse_assignment_expression();
            }
            self.finish_node();
        }
    }

    /// AssignmentExpression = ArrowFunction | YieldExpression
    ///                      | ConditionalExpression (AssignmentOperator AssignmentExpression)?
    pub(in crate::parser) fn parse_assignment_expression(&mut self) {
        if self.at_arrow_function() {
            self.parse_arrow_function();
            return;
        }
        if self.at(SyntaxKind::YIELD_KW) {
            self.start_node(SyntaxKind::YIELD_EXPRESSION);
            self.bump();
            self.eat(SyntaxKind::STAR);
            if !self.has_preceding_line_break() && self.at_expression_start() {
                self.parse_assignment_expression();
            }
            self.finish_node();
            return;
        }

        let checkpoint = self.checkpoint();
        self.parse_conditional_expression();
        if self.current_kind().is_assignment_op() {
            self.start_node_at(checkpoint, SyntaxKind::ASSIGNMENT_EXPRESSION);
            self.bump();
            self.parse_assignment_expression();
            self.finish_node();
        }
    }

    fn at_expression_start(&self) -> bool {
        !matches!(
            self.current_kind(),
            SyntaxKind::R_PAREN
                | SyntaxKind::R_BRACKET
                | SyntaxKind::R_BRACE
                | SyntaxKind::COMMA
                | SyntaxKind::SEMICOLON
                | SyntaxKind::COLON
                | SyntaxKind::ERROR
        ) && !self.at_eof()
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    fn at_arrow_function(&self) -> bool {
        let offset = if self.at_contextual("async")
            && !self.nth_line_break(1)
            && matches!(self.nth(1), SyntaxKind::IDENT | SyntaxKind::L_PAREN)
        {
            1
        } else {
            0
        };
        match self.nth(offset) {
            SyntaxKind::IDENT => {
                self.nth(offset + 1) == SyntaxKind::FAT_ARROW && !self.nth_line_break(offset + 1)
            }
            SyntaxKind::L_PAREN => self.is_arrow_parameter_list(offset),
            _ => false,
        }
    }

    /// Does the parenthesised group at lookahead `offset` end in `=>`,
    /// possibly after a return type annotation?
    fn is_arrow_parameter_list(&self, offset: usize) -> bool {
        let mut tokens = self.lookahead().skip(offset).take(ARROW_SCAN_LIMIT);
        let mut depth = 0usize;
        let mut closed = false;
        for kind in tokens.by_ref() {
            match kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    let Some(outer) = depth.checked_sub(1) else {
                        return false;
                    };
                    depth = outer;
                    if depth == 0 {
                        closed = true;
                        break;
                    }
                }
                _ => {}
            }
        }
        if !closed {
            return false;
        }
        match tokens.next() {
            Some(SyntaxKind::FAT_ARROW) => true,
            Some(SyntaxKind::COLON) => return_type_then_arrow(tokens),
            _ => false,
        }
    }

    /// ArrowFunction = 'async'? (IDENT | FormalParameters TypeAnnotation?) '=>' (Block | AssignmentExpression)
    fn parse_arrow_function(&mut self) {
        self.start_node(SyntaxKind::ARROW_FUNCTION);
        if self.nth(1) != SyntaxKind::FAT_ARROW {
            self.eat_contextual("async", SyntaxKind::ASYNC_KW);
        }
        if self.at(SyntaxKind::IDENT) {
            self.parse_binding_identifier();
        } else {
            self.parse_formal_parameters();
            if self.at(SyntaxKind::COLON) {
                self.parse_type_annotation();
            }
        }
        self.expect(SyntaxKind::FAT_ARROW);
        if self.at(SyntaxKind::L_BRACE) {
            let no_in = std::mem::replace(&mut self.no_in, false);
            self.parse_block();
            self.no_in = no_in;
        } else {
            self.parse_assignment_expression();
        }
        self.finish_node();
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// ConditionalExpression = BinaryExpression ('?' AssignmentExpression ':' AssignmentExpression)?
    fn parse_conditional_expression(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_binary_expression(0);
        if self.at(SyntaxKind::QUESTION) {
            self.start_node_at(checkpoint, SyntaxKind::TERNARY_EXPRESSION);
            self.bump();
            let no_in = std::mem::replace(&mut self.no_in, false);
            self.parse_assignment_expression();
            self.no_in = no_in;
            self.expect(SyntaxKind::COLON);
            self.parse_assignment_expression();
            self.finish_node();
        }
    }

    /// Operator at the current position with its precedence and token count
    fn current_binary_operator(&self) -> Option<(u8, usize)> {
        let kind = self.current_kind();
        if kind == SyntaxKind::GT && self.nth(1) == SyntaxKind::GT && self.nth_is_adjacent(1) {
            // `>>`, `>>>`, `>>=` and `>>>=` arrive as separate tokens
            let mut count = 2;
            if self.nth(2) == SyntaxKind::GT && self.nth_is_adjacent(2) {
                count = 3;
            }
            if self.nth(count) == SyntaxKind::GT_EQ && self.nth_is_adjacent(count) {
                return None;
            }
            return Some((SHIFT_PRECEDENCE, count));
        }
        if kind == SyntaxKind::IN_KW && self.no_in {
            return None;
        }
        kind.binary_precedence().map(|prec| (prec, 1))
    }

    /// BinaryExpression = UnaryExpression (BinaryOperator UnaryExpression)*
    ///                  | BinaryExpression ('as' | 'satisfies') (Type | 'const')
    fn parse_binary_expression(&mut self, min_precedence: u8) {
        let checkpoint = self.checkpoint();
        self.parse_unary_expression();

        loop {
            if (self.at_contextual("as") || self.at_contextual("satisfies"))
                && !self.has_preceding_line_break()
            {
                if AS_PRECEDENCE <= min_precedence {
                    break;
                }
                let (kind, keyword) = if self.at_contextual("as") {
                    (SyntaxKind::AS_EXPRESSION, SyntaxKind::AS_KW)
                } else {
                    (SyntaxKind::SATISFIES_EXPRESSION, SyntaxKind::SATISFIES_KW)
                };
                self.start_node_at(checkpoint, kind);
                self.bump_remap(keyword);
                if !self.eat(SyntaxKind::CONST_KW) {
                    self.parse_type();
                }
                self.finish_node();
                continue;
            }

            let Some((precedence, token_count)) = self.current_binary_operator() else {
                break;
            };
            if precedence <= min_precedence {
                break;
            }
            self.start_node_at(checkpoint, SyntaxKind::BINARY_EXPRESSION);
            for _ in 0..token_count {
                self.bump();
            }
            // exponentiation is right-associative
            let next_min = if precedence == EXPONENT_PRECEDENCE {
                precedence - 1
            } else {
                precedence
            };
            self.parse_binary_expression(next_min);
            self.finish_node();
        }
    }

    /// UnaryExpression = ('!' | '~' | '+' | '-' | 'typeof' | 'void' | 'delete') UnaryExpression
    ///                 | ('++' | '--') UnaryExpression
    ///                 | 'await' UnaryExpression
    ///                 | PostfixExpression
    fn parse_unary_expression(&mut self) {
        match self.current_kind() {
            SyntaxKind::BANG
            | SyntaxKind::TILDE
            | SyntaxKind::PLUS
            | SyntaxKind::MINUS
            | SyntaxKind::TYPEOF_KW
            | SyntaxKind::VOID_KW
            | SyntaxKind::DELETE_KW => {
                self.start_node(SyntaxKind::UNARY_EXPRESSION);
                self.bump();
                self.parse_unary_expression();
                self.finish_node();
            }
            SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                self.start_node(SyntaxKind::UPDATE_EXPRESSION);
                self.bump();
                self.parse_unary_expression();
                self.finish_node();
            }
            SyntaxKind::AWAIT_KW => {
                self.start_node(SyntaxKind::AWAIT_EXPRESSION);
                self.bump();
                self.parse_unary_expression();
                self.finish_node();
            }
            _ => self.parse_postfix_expression(),
        }
    }

    /// PostfixExpression = LeftHandSideExpression ('++' | '--')?
    fn parse_postfix_expression(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_left_hand_side_expression();
        if matches!(
            self.current_kind(),
            SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS
        ) && !self.has_preceding_line_break()
        {
            self.start_node_at(checkpoint, SyntaxKind::UPDATE_EXPRESSION);
            self.bump();
            self.finish_node();
        }
    }

    /// LeftHandSideExpression = PrimaryExpression (Member | Subscript | Call | NonNull | TaggedTemplate)*
    pub(in crate::parser) fn parse_left_hand_side_expression(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary_expression();

        loop {
            match self.current_kind() {
                SyntaxKind::DOT => {
                    self.start_node_at(checkpoint, SyntaxKind::MEMBER_EXPRESSION);
                    self.bump();
                    self.parse_property_name_after_dot();
                    self.finish_node();
                }
                SyntaxKind::QUESTION_DOT => match self.nth(1) {
                    SyntaxKind::L_PAREN => {
                        self.start_node_at(checkpoint, SyntaxKind::CALL_EXPRESSION);
                        self.bump();
                        self.parse_arguments();
                        self.finish_node();
                    }
                    SyntaxKind::L_BRACKET => {
                        self.start_node_at(checkpoint, SyntaxKind::SUBSCRIPT_EXPRESSION);
                        self.bump();
                        self.parse_subscript();
                        self.finish_node();
                    }
                    _ => {
                        self.start_node_at(checkpoint, SyntaxKind::MEMBER_EXPRESSION);
                        self.bump();
                        self.parse_property_name_after_dot();
                        self.finish_node();
                    }
                },
                SyntaxKind::L_BRACKET => {
                    self.start_node_at(checkpoint, SyntaxKind::SUBSCRIPT_EXPRESSION);
                    self.parse_subscript();
                    self.finish_node();
                }
                SyntaxKind::L_PAREN => {
                    self.start_node_at(checkpoint, SyntaxKind::CALL_EXPRESSION);
                    self.parse_arguments();
                    self.finish_node();
                }
                SyntaxKind::TEMPLATE_STRING => {
                    self.start_node_at(checkpoint, SyntaxKind::CALL_EXPRESSION);
                    self.parse_literal();
                    self.finish_node();
                }
                SyntaxKind::BANG if !self.has_preceding_line_break() => {
                    self.start_node_at(checkpoint, SyntaxKind::NON_NULL_EXPRESSION);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::LT if self.at_call_type_arguments() => {
                    self.start_node_at(checkpoint, SyntaxKind::CALL_EXPRESSION);
                    self.parse_type_arguments();
                    self.parse_arguments();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_property_name_after_dot(&mut self) {
        if self.at(SyntaxKind::HASH) {
            self.parse_property_name();
        } else {
            self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
        }
    }

    fn parse_subscript(&mut self) {
        self.expect(SyntaxKind::L_BRACKET);
        let no_in = std::mem::replace(&mut self.no_in, false);
        self.parse_expression();
        self.no_in = no_in;
        self.expect(SyntaxKind::R_BRACKET);
    }

    /// `f<T>(x)`: a balanced `<...>` of type-like tokens directly followed by `(`
    fn at_call_type_arguments(&self) -> bool {
        let Some(end) = self.skip_balanced(SyntaxKind::LT, SyntaxKind::GT) else {
            return false;
        };
        if self.nth(end) != SyntaxKind::L_PAREN {
            return false;
        }
        self.lookahead()
            .take(end.saturating_sub(1))
            .skip(1)
            .all(|kind| {
                !matches!(
                    kind,
                    SyntaxKind::AMP_AMP
                        | SyntaxKind::PIPE_PIPE
                        | SyntaxKind::PLUS
                        | SyntaxKind::STAR
                        | SyntaxKind::SLASH
                        | SyntaxKind::PERCENT
                        | SyntaxKind::EQ_EQ
                        | SyntaxKind::EQ_EQ_EQ
                        | SyntaxKind::BANG_EQ
                        | SyntaxKind::BANG_EQ_EQ
                        | SyntaxKind::LT_EQ
                        | SyntaxKind::GT_EQ
                        | SyntaxKind::QUESTION_QUESTION
                        | SyntaxKind::SEMICOLON
                )
            })
    }

    /// Arguments = '(' (('...'? AssignmentExpression) (',' ...)* ','?)? ')'
    fn parse_arguments(&mut self) {
        self.start_node(SyntaxKind::ARGUMENTS);
        self.expect(SyntaxKind::L_PAREN);
        let no_in = std::mem::replace(&mut self.no_in, false);
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            let before = self.pos();
            self.parse_spread_or_assignment();
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in arguments", self.current_text()),
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

    fn parse_spread_or_assignment(&mut self) {
        if self.at(SyntaxKind::DOT_DOT_DOT) {
            self.start_node(SyntaxKind::SPREAD_ELEMENT);
            self.bump();
            self.parse_assignment_expression();
            self.finish_node();
        } else {
            self.parse_assignment_expression();
        }
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) {
        match self.current_kind() {
            SyntaxKind::IDENT
                if self.at_contextual("async")
                    && self.nth(1) == SyntaxKind::FUNCTION_KW
                    && !self.nth_line_break(1) =>
            {
                self.parse_function(SyntaxKind::FUNCTION_EXPRESSION)
            }
            SyntaxKind::IDENT => {
                self.parse_name(SyntaxKind::IDENTIFIER);
            }
            SyntaxKind::NUMBER
            | SyntaxKind::STRING
            | SyntaxKind::TEMPLATE_STRING
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW
            | SyntaxKind::THIS_KW
            | SyntaxKind::SUPER_KW
            | SyntaxKind::IMPORT_KW => self.parse_literal(),
            SyntaxKind::L_PAREN => self.parse_parenthesized_expression(),
            SyntaxKind::L_BRACKET => self.parse_array_expression(),
            SyntaxKind::L_BRACE => self.parse_object_expression(),
            SyntaxKind::FUNCTION_KW => self.parse_function(SyntaxKind::FUNCTION_EXPRESSION),
            SyntaxKind::CLASS_KW => self.parse_class(SyntaxKind::CLASS_EXPRESSION),
            SyntaxKind::NEW_KW => self.parse_new_expression(),
            SyntaxKind::LT => self.parse_jsx_element(),
            SyntaxKind::AT => {
                self.parse_decorators();
                self.parse_class(SyntaxKind::CLASS_EXPRESSION);
            }
            _ => self.error(format!(
                "expected an expression, found '{}'",
                self.current_text()
            )),
        }
    }

    /// ParenthesizedExpression = '(' Expression ')'
    pub(super) fn parse_parenthesized_expression(&mut self) {
        self.start_node(SyntaxKind::PARENTHESIZED_EXPRESSION);
        self.expect(SyntaxKind::L_PAREN);
        let no_in = std::mem::replace(&mut self.no_in, false);
        self.parse_expression();
        self.no_in = no_in;
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    /// Array = '[' (('...'? AssignmentExpression)? ',')* ']'
    fn parse_array_expression(&mut self) {
        self.start_node(SyntaxKind::ARRAY);
        self.bump();
        let no_in = std::mem::replace(&mut self.no_in, false);
        while !self.at(SyntaxKind::R_BRACKET) && !self.at_eof() {
            if !self.at(SyntaxKind::COMMA) {
                let before = self.pos();
                self.parse_spread_or_assignment();
                if self.pos() == before {
                    self.error_recover(
                        format!("unexpected '{}' in array", self.current_text()),
                        &[SyntaxKind::COMMA, SyntaxKind::R_BRACKET],
                    );
                }
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.no_in = no_in;
        self.expect(SyntaxKind::R_BRACKET);
        self.finish_node();
    }

    /// Object = '{' (ObjectMember (',' ObjectMember)* ','?)? '}'
    pub(super) fn parse_object_expression(&mut self) {
        self.start_node(SyntaxKind::OBJECT);
        self.expect(SyntaxKind::L_BRACE);
        let no_in = std::mem::replace(&mut self.no_in, false);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let before = self.pos();
            self.parse_object_member();
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in object", self.current_text()),
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.no_in = no_in;
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// ObjectMember = '...' AssignmentExpression                (SPREAD_ELEMENT)
    ///              | Modifier* '*'? PropertyName MethodSignature Block (METHOD_DEFINITION)
    ///              | PropertyName ':' AssignmentExpression     (PAIR)
    ///              | IDENT ('=' AssignmentExpression)?         (shorthand, IDENTIFIER)
    fn parse_object_member(&mut self) {
        const METHOD_MODIFIERS: &[&str] = &["async", "get", "set"];

        if self.at(SyntaxKind::DOT_DOT_DOT) {
            self.parse_spread_or_assignment();
            return;
        }

        let member = self.checkpoint();
        let mut has_modifiers = false;
        while self.at_modifier(METHOD_MODIFIERS) && self.nth(1) != SyntaxKind::L_BRACE {
            self.bump_modifier();
            has_modifiers = true;
        }
        has_modifiers |= self.eat(SyntaxKind::STAR);

        let shorthand = !has_modifiers
            && self.at(SyntaxKind::IDENT)
            && matches!(
                self.nth(1),
                SyntaxKind::COMMA | SyntaxKind::R_BRACE | SyntaxKind::EQ
            );
        if shorthand {
            self.parse_binding_identifier();
            if self.at(SyntaxKind::EQ) {
                // `{ a = 1 } = obj` destructuring assignment target
                self.start_node_at(member, SyntaxKind::OBJECT_ASSIGNMENT_PATTERN);
                self.bump();
                self.parse_assignment_expression();
                self.finish_node();
            }
            return;
        }

        self.parse_property_name();

        if has_modifiers || self.at(SyntaxKind::L_PAREN) || self.at(SyntaxKind::LT) {
            self.start_node_at(member, SyntaxKind::METHOD_DEFINITION);
            self.parse_function_rest();
            self.finish_node();
            return;
        }

        self.start_node_at(member, SyntaxKind::PAIR);
        self.expect(SyntaxKind::COLON);
        self.parse_assignment_expression();
        self.finish_node();
    }

    /// NewExpression = 'new' LeftHandSideExpression-without-call TypeArguments? Arguments?
    fn parse_new_expression(&mut self) {
        self.start_node(SyntaxKind::NEW_EXPRESSION);
        self.bump();
        if self.at(SyntaxKind::DOT) {
            // new.target
            self.bump();
            self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
            self.finish_node();
            return;
        }

        let callee = self.checkpoint();
        if self.at(SyntaxKind::NEW_KW) {
            self.parse_new_expression();
        } else {
            self.parse_primary_expression();
        }
        loop {
            match self.current_kind() {
                SyntaxKind::DOT => {
                    self.start_node_at(callee, SyntaxKind::MEMBER_EXPRESSION);
                    self.bump();
                    self.parse_property_name_after_dot();
                    self.finish_node();
                }
                SyntaxKind::L_BRACKET => {
                    self.start_node_at(callee, SyntaxKind::SUBSCRIPT_EXPRESSION);
                    self.parse_subscript();
                    self.finish_node();
                }
                _ => break,
            }
        }
        if self.at(SyntaxKind::LT) && self.at_call_type_arguments() {
            self.parse_type_arguments();
        }
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_arguments();
        }
        self.finish_node();
    }
}

/// Scan a return type annotation for a `=>` at depth zero
fn return_type_then_arrow(tokens: impl Iterator<Item = SyntaxKind>) -> bool {
    let mut depth = 0usize;
    for kind in tokens {
        match kind {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE | SyntaxKind::LT => {
                depth += 1
            }
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE | SyntaxKind::GT => {
                let Some(outer) = depth.checked_sub(1) else {
                    return false;
                };
                depth = outer;
            }
            SyntaxKind::FAT_ARROW if depth == 0 => return true,
            SyntaxKind::SEMICOLON | SyntaxKind::COMMA | SyntaxKind::EQ if depth == 0 => {
                return false;
            }
            _ => {}
        }
    }
    false
}
