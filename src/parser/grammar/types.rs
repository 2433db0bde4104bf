//! TypeScript type syntax

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;
use rowan::Checkpoint;

impl Parser<'_> {
    /// TypeAnnotation = ':' Type
    pub(in crate::parser) fn parse_type_annotation(&mut self) {
        self.start_node(SyntaxKind::TYPE_ANNOTATION);
        self.expect(SyntaxKind::COLON);
        self.parse_type();
        self.finish_node();
    }

    /// Type = FunctionType | ConditionalType | UnionType
    /// ConditionalType = UnionType 'extends' Type '?' Type ':' Type
    pub(in crate::parser) fn parse_type(&mut self) {
        if self.at_function_type() {
            self.parse_function_type();
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_union_type();
        if self.at(SyntaxKind::EXTENDS_KW) {
            // conditional types are kept as a flat union-like node
            self.start_node_at(checkpoint, SyntaxKind::UNION_TYPE);
            self.bump();
            self.parse_union_type();
            if self.eat(SyntaxKind::QUESTION) {
                self.parse_type();
                self.expect(SyntaxKind::COLON);
                self.parse_type();
            }
            self.finish_node();
        }
    }

    fn at_function_type(&self) -> bool {
        match self.current_kind() {
            SyntaxKind::NEW_KW => true,
            SyntaxKind::LT => true,
            SyntaxKind::L_PAREN => self
                .skip_balanced(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN)
                .is_some_and(|end| self.nth(end) == SyntaxKind::FAT_ARROW),
            _ => false,
        }
    }

    /// FunctionType = 'new'? TypeParameters? FormalParameters '=>' Type
    fn parse_function_type(&mut self) {
        self.start_node(SyntaxKind::FUNCTION_TYPE);
        self.eat(SyntaxKind::NEW_KW);
        if self.at(SyntaxKind::LT) {
            self.parse_type_parameters();
        }
        self.parse_formal_parameters();
        self.expect(SyntaxKind::FAT_ARROW);
        self.parse_type();
        self.finish_node();
    }

    /// UnionType = '|'? IntersectionType ('|' IntersectionType)*
    fn parse_union_type(&mut self) {
        let checkpoint = self.checkpoint();
        let leading = self.eat(SyntaxKind::PIPE);
        self.parse_intersection_type();
        if leading || self.at(SyntaxKind::PIPE) {
            self.start_node_at(checkpoint, SyntaxKind::UNION_TYPE);
            while self.eat(SyntaxKind::PIPE) {
                self.parse_intersection_type();
            }
            self.finish_node();
        }
    }

    /// IntersectionType = '&'? OperatorType ('&' OperatorType)*
    fn parse_intersection_type(&mut self) {
        let checkpoint = self.checkpoint();
        let leading = self.eat(SyntaxKind::AMP);
        self.parse_operator_type();
        if leading || self.at(SyntaxKind::AMP) {
            self.start_node_at(checkpoint, SyntaxKind::INTERSECTION_TYPE);
            while self.eat(SyntaxKind::AMP) {
                self.parse_operator_type();
            }
            self.finish_node();
        }
    }

    /// OperatorType = ('keyof' | 'unique' | 'readonly' | 'infer') OperatorType | PostfixType
    fn parse_operator_type(&mut self) {
        if self.at(SyntaxKind::IDENT)
            && matches!(self.current_text(), "keyof" | "unique" | "readonly" | "infer")
            && self.nth(1) != SyntaxKind::DOT
            && !matches!(
                self.nth(1),
                SyntaxKind::R_PAREN
                    | SyntaxKind::R_BRACKET
                    | SyntaxKind::R_BRACE
                    | SyntaxKind::COMMA
                    | SyntaxKind::SEMICOLON
                    | SyntaxKind::GT
                    | SyntaxKind::EQ
                    | SyntaxKind::PIPE
                    | SyntaxKind::AMP
            )
        {
            self.start_node(SyntaxKind::TYPE_OPERATOR);
            self.bump_modifier();
            self.parse_operator_type();
            self.finish_node();
            return;
        }
        self.parse_postfix_type();
    }

    /// PostfixType = PrimaryType ('[' ']' | '[' Type ']')*
    fn parse_postfix_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary_type();
        while self.at(SyntaxKind::L_BRACKET) && !self.has_preceding_line_break() {
            if self.nth(1) == SyntaxKind::R_BRACKET {
                self.start_node_at(checkpoint, SyntaxKind::ARRAY_TYPE);
                self.bump();
                self.bump();
            } else {
                self.start_node_at(checkpoint, SyntaxKind::INDEXED_ACCESS_TYPE);
                self.bump();
                self.parse_type();
                self.expect(SyntaxKind::R_BRACKET);
            }
            self.finish_node();
        }
    }

    fn parse_primary_type(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_PAREN => {
                self.start_node(SyntaxKind::PARENTHESIZED_TYPE);
                self.bump();
                self.parse_type();
                self.expect(SyntaxKind::R_PAREN);
                self.finish_node();
            }
            SyntaxKind::L_BRACE => self.parse_object_type(),
            SyntaxKind::L_BRACKET => self.parse_tuple_type(),
            SyntaxKind::TYPEOF_KW => {
                self.start_node(SyntaxKind::TYPE_QUERY);
                self.bump();
                self.parse_left_hand_side_expression();
                self.finish_node();
            }
            SyntaxKind::STRING
            | SyntaxKind::NUMBER
            | SyntaxKind::TEMPLATE_STRING
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW => {
                self.start_node(SyntaxKind::LITERAL_TYPE);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::MINUS if self.nth(1) == SyntaxKind::NUMBER => {
                self.start_node(SyntaxKind::LITERAL_TYPE);
                self.bump();
                self.bump();
                self.finish_node();
            }
            SyntaxKind::IMPORT_KW => {
                // import('./module').Name
                self.start_node(SyntaxKind::TYPE_QUERY);
                self.parse_left_hand_side_expression();
                self.finish_node();
            }
            kind if kind.is_identifier_name() => self.parse_type_reference(),
            _ => self.error(format!(
                "expected a type, found '{}'",
                self.current_text()
            )),
        }
    }

    /// TypeReference = IDENT ('.' IDENT)* TypeArguments?
    ///
    /// Produces TYPE_IDENTIFIER, NESTED_TYPE_IDENTIFIER, or a GENERIC_TYPE wrapping either.
    fn parse_type_reference(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_name(SyntaxKind::TYPE_IDENTIFIER);
        while self.at(SyntaxKind::DOT) && self.nth(1).is_identifier_name() {
            self.start_node_at(checkpoint, SyntaxKind::NESTED_TYPE_IDENTIFIER);
            self.bump();
            self.parse_name(SyntaxKind::TYPE_IDENTIFIER);
            self.finish_node();
        }
        if self.at(SyntaxKind::LT) && !self.has_preceding_line_break() {
            self.start_node_at(checkpoint, SyntaxKind::GENERIC_TYPE);
            self.parse_type_arguments();
            self.finish_node();
        }
    }

    /// TypeArguments = '<' Type (',' Type)* ','? '>'
    pub(in crate::parser) fn parse_type_arguments(&mut self) {
        self.start_node(SyntaxKind::TYPE_ARGUMENTS);
        self.expect(SyntaxKind::LT);
        while !self.at(SyntaxKind::GT) && !self.at_eof() {
            let before = self.pos();
            self.parse_type();
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in type arguments", self.current_text()),
                    &[SyntaxKind::COMMA, SyntaxKind::GT],
                );
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();
    }

    /// TypeParameters = '<' TypeParameter (',' TypeParameter)* ','? '>'
    /// TypeParameter = 'const'? IDENT ('extends' Type)? ('=' Type)?
    pub(in crate::parser) fn parse_type_parameters(&mut self) {
        self.start_node(SyntaxKind::TYPE_PARAMETERS);
        self.expect(SyntaxKind::LT);
        while !self.at(SyntaxKind::GT) && !self.at_eof() {
            self.start_node(SyntaxKind::TYPE_PARAMETER);
            self.eat(SyntaxKind::CONST_KW);
            if self.current_kind().is_identifier_name() {
                self.parse_name(SyntaxKind::TYPE_IDENTIFIER);
            } else {
                self.error_recover(
                    "expected a type parameter name",
                    &[SyntaxKind::COMMA, SyntaxKind::GT],
                );
            }
            if self.eat(SyntaxKind::EXTENDS_KW) {
                self.parse_type();
            }
            if self.eat(SyntaxKind::EQ) {
                self.parse_type();
            }
            self.finish_node();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();
    }

    /// TupleType = '[' (('...'? (IDENT '?'? ':')? Type) (',' ...)* ','?)? ']'
    fn parse_tuple_type(&mut self) {
        self.start_node(SyntaxKind::TUPLE_TYPE);
        self.bump();
        while !self.at(SyntaxKind::R_BRACKET) && !self.at_eof() {
            let before = self.pos();
            self.eat(SyntaxKind::DOT_DOT_DOT);
            if self.at(SyntaxKind::IDENT)
                && (self.nth(1) == SyntaxKind::COLON
                    || (self.nth(1) == SyntaxKind::QUESTION && self.nth(2) == SyntaxKind::COLON))
            {
                self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
                self.eat(SyntaxKind::QUESTION);
                self.bump();
            }
            self.parse_type();
            self.eat(SyntaxKind::QUESTION);
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in tuple type", self.current_text()),
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACKET],
                );
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACKET);
        self.finish_node();
    }

    /// ObjectType = '{' (TypeMember (';' | ',')?)* '}'
    pub(in crate::parser) fn parse_object_type(&mut self) {
        self.start_node(SyntaxKind::OBJECT_TYPE);
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let before = self.pos();
            self.parse_type_member();
            if !self.eat(SyntaxKind::SEMICOLON) {
                self.eat(SyntaxKind::COMMA);
            }
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in object type", self.current_text()),
                    &[SyntaxKind::SEMICOLON, SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// TypeMember = Modifier* IndexSignature
    ///            | Modifier* PropertyName '?'? MethodSignature? TypeAnnotation?
    ///            | 'new'? TypeParameters? FormalParameters TypeAnnotation?   (call signature)
    fn parse_type_member(&mut self) {
        let member = self.checkpoint();
        if matches!(self.current_kind(), SyntaxKind::L_PAREN | SyntaxKind::LT)
            || (self.at(SyntaxKind::NEW_KW) && self.nth(1) == SyntaxKind::L_PAREN)
        {
            self.start_node(SyntaxKind::PROPERTY_SIGNATURE);
            self.eat(SyntaxKind::NEW_KW);
            if self.at(SyntaxKind::LT) {
                self.parse_type_parameters();
            }
            self.parse_formal_parameters();
            if self.at(SyntaxKind::COLON) {
                self.parse_type_annotation();
            }
            self.finish_node();
            return;
        }
        while self.at_modifier(&["readonly", "get", "set"]) {
            self.bump_modifier();
        }
        if self.at(SyntaxKind::L_BRACKET) && self.is_index_signature() {
            self.parse_index_signature(member);
            return;
        }
        self.parse_property_name();
        self.start_node_at(member, SyntaxKind::PROPERTY_SIGNATURE);
        self.eat(SyntaxKind::QUESTION);
        if self.at(SyntaxKind::L_PAREN) || self.at(SyntaxKind::LT) {
            if self.at(SyntaxKind::LT) {
                self.parse_type_parameters();
            }
            self.parse_formal_parameters();
        }
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        self.finish_node();
    }

    /// `[key: T]` or `[K in T]` as opposed to a computed property name
    pub(in crate::parser) fn is_index_signature(&self) -> bool {
        self.nth(1) == SyntaxKind::IDENT
            && (self.nth(2) == SyntaxKind::COLON || self.nth(2) == SyntaxKind::IN_KW)
    }

    /// IndexSignature = '[' IDENT (':' Type | 'in' Type ('as' Type)?) ']' '?'? TypeAnnotation?
    ///
    /// `member` marks the start of the member, before any modifiers.
    pub(in crate::parser) fn parse_index_signature(&mut self, member: Checkpoint) {
        self.bump();
        self.parse_name(SyntaxKind::TYPE_IDENTIFIER);
        if self.eat(SyntaxKind::IN_KW) {
            self.parse_type();
            if self.eat_contextual("as", SyntaxKind::AS_KW) {
                self.parse_type();
            }
        } else {
            self.parse_type_annotation();
        }
        self.expect(SyntaxKind::R_BRACKET);
        if !self.eat(SyntaxKind::QUESTION) {
            self.eat(SyntaxKind::MINUS);
            self.eat(SyntaxKind::PLUS);
            self.eat(SyntaxKind::QUESTION);
        }
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        self.start_node_at(member, SyntaxKind::INDEX_SIGNATURE);
        self.finish_node();
    }
}
