//! Statements, declarations and module items

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Tokens that end an erroneous statement during recovery
const STATEMENT_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::SEMICOLON,
    SyntaxKind::R_BRACE,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::EXPORT_KW,
    SyntaxKind::CONST_KW,
    SyntaxKind::LET_KW,
    SyntaxKind::VAR_KW,
    SyntaxKind::FUNCTION_KW,
    SyntaxKind::CLASS_KW,
];

impl Parser<'_> {
    /// Statement = Declaration | ImportStatement | ExportStatement | ...
    pub(in crate::parser) fn parse_statement(&mut self) {
        match self.current_kind() {
            SyntaxKind::IMPORT_KW
                if !matches!(self.nth(1), SyntaxKind::L_PAREN | SyntaxKind::DOT) =>
            {
                self.parse_import_statement()
            }
            SyntaxKind::EXPORT_KW => self.parse_export_statement(),
            SyntaxKind::VAR_KW => self.parse_variable_declaration(true),
            SyntaxKind::LET_KW | SyntaxKind::CONST_KW
                if self.nth(1) != SyntaxKind::ENUM_KW =>
            {
                self.parse_variable_declaration(true)
            }
            SyntaxKind::CONST_KW | SyntaxKind::ENUM_KW => self.parse_enum_declaration(),
            SyntaxKind::FUNCTION_KW if self.at_named_function(0) => {
                self.parse_function(SyntaxKind::FUNCTION_DECLARATION)
            }
            SyntaxKind::IDENT
                if self.at_contextual("async")
                    && self.nth(1) == SyntaxKind::FUNCTION_KW
                    && !self.nth_line_break(1)
                    && self.at_named_function(1) =>
            {
                self.parse_function(SyntaxKind::FUNCTION_DECLARATION)
            }
            SyntaxKind::CLASS_KW if self.nth(1) == SyntaxKind::IDENT => {
                self.parse_class(SyntaxKind::CLASS_DECLARATION)
            }
            SyntaxKind::IDENT
                if self.at_contextual("abstract") && self.nth(1) == SyntaxKind::CLASS_KW =>
            {
                self.parse_class(SyntaxKind::CLASS_DECLARATION)
            }
            SyntaxKind::IDENT
                if self.at_contextual("type")
                    && self.nth(1) == SyntaxKind::IDENT
                    && matches!(self.nth(2), SyntaxKind::EQ | SyntaxKind::LT) =>
            {
                self.parse_type_alias()
            }
            SyntaxKind::INTERFACE_KW => self.parse_interface(),
            SyntaxKind::IDENT if self.at_contextual("declare") && self.at_declare_prefix() => {
                self.bump_remap(SyntaxKind::DECLARE_KW);
                self.parse_statement();
            }
            SyntaxKind::AT => {
                self.parse_decorators();
                self.parse_statement();
            }
            SyntaxKind::L_BRACE => self.parse_block(),
            SyntaxKind::SEMICOLON => {
                self.start_node(SyntaxKind::EMPTY_STATEMENT);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::IF_KW => self.parse_if_statement(),
            SyntaxKind::FOR_KW => self.parse_for_statement(),
            SyntaxKind::WHILE_KW => self.parse_while_statement(),
            SyntaxKind::DO_KW => self.parse_do_statement(),
            SyntaxKind::RETURN_KW => self.parse_return_statement(),
            SyntaxKind::THROW_KW => self.parse_throw_statement(),
            SyntaxKind::TRY_KW => self.parse_try_statement(),
            SyntaxKind::BREAK_KW => self.parse_jump_statement(SyntaxKind::BREAK_STATEMENT),
            SyntaxKind::CONTINUE_KW => self.parse_jump_statement(SyntaxKind::CONTINUE_STATEMENT),
            SyntaxKind::SWITCH_KW => self.parse_switch_statement(),
            SyntaxKind::DEBUGGER_KW => {
                self.start_node(SyntaxKind::EXPRESSION_STATEMENT);
                self.bump();
                self.consume_semicolon();
                self.finish_node();
            }
            SyntaxKind::IDENT if self.nth(1) == SyntaxKind::COLON => self.parse_labeled_statement(),
            SyntaxKind::R_BRACE | SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                self.error_recover(
                    format!("unexpected '{}'", self.current_text()),
                    STATEMENT_RECOVERY,
                );
                self.eat(SyntaxKind::SEMICOLON);
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// `function name`, `function* name` with the `function` keyword at lookahead `n`
    fn at_named_function(&self, n: usize) -> bool {
        match self.nth(n + 1) {
            SyntaxKind::IDENT => true,
            SyntaxKind::STAR => self.nth(n + 2) == SyntaxKind::IDENT,
            _ => false,
        }
    }

    fn at_declare_prefix(&self) -> bool {
        if self.nth_line_break(1) {
            return false;
        }
        matches!(
            self.nth(1),
            SyntaxKind::VAR_KW
                | SyntaxKind::LET_KW
                | SyntaxKind::CONST_KW
                | SyntaxKind::FUNCTION_KW
                | SyntaxKind::CLASS_KW
                | SyntaxKind::ENUM_KW
                | SyntaxKind::INTERFACE_KW
        ) || self.nth_contextual(1, "type")
            || self.nth_contextual(1, "abstract")
    }

    /// ExpressionStatement = Expression ';'?
    fn parse_expression_statement(&mut self) {
        self.start_node(SyntaxKind::EXPRESSION_STATEMENT);
        let before = self.pos();
        self.parse_expression();
        if self.pos() == before {
            self.error_recover(
                format!("expected a statement, found '{}'", self.current_text()),
                STATEMENT_RECOVERY,
            );
        }
        self.consume_semicolon();
        self.finish_node();
    }

    /// Block = '{' Statement* '}'
    pub(super) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::STATEMENT_BLOCK);
        self.expect(SyntaxKind::L_BRACE);
        self.parse_statements_until(&[SyntaxKind::R_BRACE]);
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_statements_until(&mut self, terminators: &[SyntaxKind]) {
        while !self.at_eof() && !self.at_any(terminators) {
            let before = self.pos();
            self.parse_statement();
            if self.pos() == before {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump_any();
            }
        }
    }

    // =========================================================================
    // Modules
    // =========================================================================

    /// ImportStatement = 'import' 'type'? ImportClause 'from' ModuleSource ';'
    ///                 | 'import' ModuleSource ';'
    ///
    /// ImportClause = IDENT (',' (NamedImports | NamespaceImport))?
    ///              | NamedImports | NamespaceImport
    fn parse_import_statement(&mut self) {
        self.start_node(SyntaxKind::IMPORT_STATEMENT);
        self.bump();

        if self.at_contextual("type")
            && !self.nth_contextual(1, "from")
            && matches!(
                self.nth(1),
                SyntaxKind::IDENT | SyntaxKind::L_BRACE | SyntaxKind::STAR
            )
        {
            self.bump_remap(SyntaxKind::TYPE_KW);
        }

        if self.at(SyntaxKind::STRING) {
            self.parse_module_source();
        } else {
            if self.at(SyntaxKind::IDENT) {
                self.parse_binding_identifier();
                if self.eat(SyntaxKind::COMMA) {
                    self.parse_import_bindings();
                }
            } else {
                self.parse_import_bindings();
            }
            if !self.eat_contextual("from", SyntaxKind::FROM_KW) {
                self.error(format!("expected 'from', found '{}'", self.current_text()));
            }
            self.parse_module_source();
        }
        self.parse_import_attributes();
        self.consume_semicolon();
        self.finish_node();
    }

    fn parse_import_bindings(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_BRACE => self.parse_named_imports(),
            SyntaxKind::STAR => {
                self.start_node(SyntaxKind::NAMESPACE_IMPORT);
                self.bump();
                if !self.eat_contextual("as", SyntaxKind::AS_KW) {
                    self.error("expected 'as' after '*'");
                }
                self.parse_binding_identifier();
                self.finish_node();
            }
            _ => self.error(format!(
                "expected import bindings, found '{}'",
                self.current_text()
            )),
        }
    }

    /// NamedImports = '{' (ImportSpecifier (',' ImportSpecifier)* ','?)? '}'
    fn parse_named_imports(&mut self) {
        self.start_node(SyntaxKind::NAMED_IMPORTS);
        self.bump();
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            if !self.current_kind().is_identifier_name() && !self.at(SyntaxKind::STRING) {
                self.error_recover(
                    "expected an import specifier",
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
            } else {
                self.parse_import_specifier();
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// ImportSpecifier = 'type'? (IdentifierName | String) ('as' IDENT)?
    fn parse_import_specifier(&mut self) {
        self.start_node(SyntaxKind::IMPORT_SPECIFIER);
        if self.at_contextual("type")
            && self.nth(1).is_identifier_name()
            && !self.nth_contextual(1, "as")
        {
            self.bump_remap(SyntaxKind::TYPE_KW);
        }
        if self.at(SyntaxKind::STRING) {
            self.parse_literal();
        } else {
            self.parse_name(SyntaxKind::IDENTIFIER);
        }
        if self.eat_contextual("as", SyntaxKind::AS_KW) {
            self.parse_name(SyntaxKind::IDENTIFIER);
        }
        self.finish_node();
    }

    /// ImportAttributes = ('with' | 'assert') Object
    fn parse_import_attributes(&mut self) {
        if (self.at(SyntaxKind::WITH_KW) || self.at_contextual("assert"))
            && self.nth(1) == SyntaxKind::L_BRACE
            && !self.has_preceding_line_break()
        {
            self.bump();
            self.parse_object_expression();
        }
    }

    /// ExportStatement = 'export' 'default' (Declaration | Expression ';')
    ///                 | 'export' Declaration
    ///                 | 'export' 'type'? ExportClause ('from' ModuleSource)? ';'
    ///                 | 'export' '*' ('as' IdentifierName)? 'from' ModuleSource ';'
    ///                 | 'export' '=' Expression ';'
    fn parse_export_statement(&mut self) {
        self.start_node(SyntaxKind::EXPORT_STATEMENT);
        self.bump();

        match self.current_kind() {
            SyntaxKind::DEFAULT_KW => {
                self.bump();
                self.parse_export_default_value();
            }
            SyntaxKind::EQ => {
                self.bump();
                self.parse_expression();
                self.consume_semicolon();
            }
            SyntaxKind::STAR => {
                self.bump();
                if self.eat_contextual("as", SyntaxKind::AS_KW) {
                    self.parse_name(SyntaxKind::IDENTIFIER);
                }
                self.parse_export_from();
                self.consume_semicolon();
            }
            SyntaxKind::L_BRACE => {
                self.parse_export_clause();
                if self.at_contextual("from") {
                    self.parse_export_from();
                }
                self.consume_semicolon();
            }
            SyntaxKind::IDENT
                if self.at_contextual("type") && self.nth(1) == SyntaxKind::L_BRACE =>
            {
                self.bump_remap(SyntaxKind::TYPE_KW);
                self.parse_export_clause();
                if self.at_contextual("from") {
                    self.parse_export_from();
                }
                self.consume_semicolon();
            }
            _ => self.parse_statement(),
        }

        self.finish_node();
    }

    fn parse_export_default_value(&mut self) {
        let is_async_function = self.at_contextual("async")
            && self.nth(1) == SyntaxKind::FUNCTION_KW
            && !self.nth_line_break(1);
        if self.at(SyntaxKind::FUNCTION_KW) || is_async_function {
            let keyword_at = usize::from(is_async_function);
            let kind = if self.at_named_function(keyword_at) {
                SyntaxKind::FUNCTION_DECLARATION
            } else {
                SyntaxKind::FUNCTION_EXPRESSION
            };
            self.parse_function(kind);
            return;
        }
        let class_at = usize::from(self.at_contextual("abstract"));
        if self.nth(class_at) == SyntaxKind::CLASS_KW {
            let kind = if self.nth(class_at + 1) == SyntaxKind::IDENT
                && !self.nth_contextual(class_at + 1, "extends")
                && !self.nth_contextual(class_at + 1, "implements")
            {
                SyntaxKind::CLASS_DECLARATION
            } else {
                SyntaxKind::CLASS_EXPRESSION
            };
            self.parse_class(kind);
            return;
        }
        if self.at(SyntaxKind::INTERFACE_KW) {
            self.parse_interface();
            return;
        }
        self.parse_assignment_expression();
        self.consume_semicolon();
    }

    fn parse_export_from(&mut self) {
        if !self.eat_contextual("from", SyntaxKind::FROM_KW) {
            self.error(format!("expected 'from', found '{}'", self.current_text()));
        }
        self.parse_module_source();
    }

    /// ExportClause = '{' (ExportSpecifier (',' ExportSpecifier)* ','?)? '}'
    /// ExportSpecifier = 'type'? IdentifierName ('as' IdentifierName)?
    fn parse_export_clause(&mut self) {
        self.start_node(SyntaxKind::EXPORT_CLAUSE);
        self.bump();
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            self.start_node(SyntaxKind::EXPORT_SPECIFIER);
            if self.at_contextual("type")
                && self.nth(1).is_identifier_name()
                && !self.nth_contextual(1, "as")
            {
                self.bump_remap(SyntaxKind::TYPE_KW);
            }
            if self.at(SyntaxKind::STRING) {
                self.parse_literal();
            } else if self.current_kind().is_identifier_name() {
                self.parse_name(SyntaxKind::IDENTIFIER);
            } else {
                self.error_recover(
                    "expected an export specifier",
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
            }
            if self.eat_contextual("as", SyntaxKind::AS_KW) {
                if self.at(SyntaxKind::STRING) {
                    self.parse_literal();
                } else {
                    self.parse_name(SyntaxKind::IDENTIFIER);
                }
            }
            self.finish_node();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// VariableDeclaration = ('var' | 'let' | 'const') VariableDeclarator (',' VariableDeclarator)* ';'
    ///
    /// `var` produces VARIABLE_DECLARATION, `let`/`const` produce LEXICAL_DECLARATION.
    pub(super) fn parse_variable_declaration(&mut self, terminated: bool) {
        let kind = if self.at(SyntaxKind::VAR_KW) {
            SyntaxKind::VARIABLE_DECLARATION
        } else {
            SyntaxKind::LEXICAL_DECLARATION
        };
        self.start_node(kind);
        self.bump();
        loop {
            self.parse_variable_declarator();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        if terminated {
            self.consume_semicolon();
        }
        self.finish_node();
    }

    /// VariableDeclarator = BindingTarget '!'? TypeAnnotation? ('=' AssignmentExpression)?
    fn parse_variable_declarator(&mut self) {
        self.start_node(SyntaxKind::VARIABLE_DECLARATOR);
        self.parse_binding_target();
        self.eat(SyntaxKind::BANG);
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        if self.eat(SyntaxKind::EQ) {
            self.parse_assignment_expression();
        }
        self.finish_node();
    }

    /// Function = 'async'? 'function' '*'? IDENT? TypeParameters? FormalParameters
    ///            TypeAnnotation? (Block | ';')
    pub(super) fn parse_function(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.eat_contextual("async", SyntaxKind::ASYNC_KW);
        self.expect(SyntaxKind::FUNCTION_KW);
        self.eat(SyntaxKind::STAR);
        if self.at(SyntaxKind::IDENT) {
            self.parse_binding_identifier();
        }
        self.parse_function_rest();
        self.finish_node();
    }

    /// Everything after a function's name: signature and body.
    pub(super) fn parse_function_rest(&mut self) {
        if self.at(SyntaxKind::LT) {
            self.parse_type_parameters();
        }
        self.parse_formal_parameters();
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else {
            // overload signature or ambient declaration
            self.consume_semicolon();
        }
    }

    /// Class = 'abstract'? 'class' IDENT? TypeParameters? ClassHeritage? ClassBody
    pub(super) fn parse_class(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.eat_contextual("abstract", SyntaxKind::ABSTRACT_KW);
        self.expect(SyntaxKind::CLASS_KW);
        if self.at(SyntaxKind::IDENT) && !self.at_contextual("implements") {
            self.parse_binding_identifier();
        }
        if self.at(SyntaxKind::LT) {
            self.parse_type_parameters();
        }
        if self.at(SyntaxKind::EXTENDS_KW) || self.at(SyntaxKind::IMPLEMENTS_KW) {
            self.parse_class_heritage();
        }
        self.parse_class_body();
        self.finish_node();
    }

    /// ClassHeritage = ('extends' LeftHandSideExpression TypeArguments?)? ('implements' Type (',' Type)*)?
    fn parse_class_heritage(&mut self) {
        self.start_node(SyntaxKind::CLASS_HERITAGE);
        if self.eat(SyntaxKind::EXTENDS_KW) {
            self.parse_left_hand_side_expression();
            if self.at(SyntaxKind::LT) {
                self.parse_type_arguments();
            }
        }
        if self.eat(SyntaxKind::IMPLEMENTS_KW) {
            loop {
                self.parse_type();
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }
        self.finish_node();
    }

    /// ClassBody = '{' ClassMember* '}'
    fn parse_class_body(&mut self) {
        self.start_node(SyntaxKind::CLASS_BODY);
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let before = self.pos();
            if !self.eat(SyntaxKind::SEMICOLON) {
                self.parse_class_member();
            }
            if self.pos() == before {
                self.error_recover(
                    format!("unexpected '{}' in class body", self.current_text()),
                    &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE],
                );
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// ClassMember = Decorator* Modifier* PropertyName ('?' | '!')?
    ///               (MethodSignature Block? | TypeAnnotation? ('=' AssignmentExpression)? ';')
    ///             | 'static' Block
    fn parse_class_member(&mut self) {
        const CLASS_MODIFIERS: &[&str] = &[
            "static",
            "public",
            "private",
            "protected",
            "readonly",
            "abstract",
            "declare",
            "override",
            "accessor",
            "async",
            "get",
            "set",
        ];

        let checkpoint = self.checkpoint();
        self.parse_decorators();

        if self.at_contextual("static") && self.nth(1) == SyntaxKind::L_BRACE {
            self.bump_remap(SyntaxKind::STATIC_KW);
            self.parse_block();
            return;
        }

        while self.at_modifier(CLASS_MODIFIERS) && self.nth(1) != SyntaxKind::L_BRACE {
            self.bump_modifier();
        }
        self.eat(SyntaxKind::STAR);

        if self.at(SyntaxKind::L_BRACKET) && self.is_index_signature() {
            self.parse_index_signature(checkpoint);
            self.consume_semicolon();
            return;
        }

        self.parse_property_name();
        if !self.eat(SyntaxKind::QUESTION) {
            self.eat(SyntaxKind::BANG);
        }

        if self.at(SyntaxKind::L_PAREN) || self.at(SyntaxKind::LT) {
            self.start_node_at(checkpoint, SyntaxKind::METHOD_DEFINITION);
            self.parse_function_rest();
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::FIELD_DEFINITION);
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        if self.eat(SyntaxKind::EQ) {
            self.parse_assignment_expression();
        }
        self.consume_semicolon();
        self.finish_node();
    }

    /// TypeAlias = 'type' IDENT TypeParameters? '=' Type ';'
    fn parse_type_alias(&mut self) {
        self.start_node(SyntaxKind::TYPE_ALIAS_DECLARATION);
        self.bump_remap(SyntaxKind::TYPE_KW);
        self.parse_name(SyntaxKind::TYPE_IDENTIFIER);
        if self.at(SyntaxKind::LT) {
            self.parse_type_parameters();
        }
        self.expect(SyntaxKind::EQ);
        self.parse_type();
        self.consume_semicolon();
        self.finish_node();
    }

    /// Interface = 'interface' IDENT TypeParameters? ('extends' Type (',' Type)*)? ObjectType
    fn parse_interface(&mut self) {
        self.start_node(SyntaxKind::INTERFACE_DECLARATION);
        self.bump();
        self.parse_name(SyntaxKind::TYPE_IDENTIFIER);
        if self.at(SyntaxKind::LT) {
            self.parse_type_parameters();
        }
        if self.eat(SyntaxKind::EXTENDS_KW) {
            loop {
                self.parse_type();
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }
        self.parse_object_type();
        self.finish_node();
    }

    /// Enum = 'const'? 'enum' IDENT '{' (EnumMember (',' EnumMember)* ','?)? '}'
    /// EnumMember = PropertyName ('=' AssignmentExpression)?
    fn parse_enum_declaration(&mut self) {
        self.start_node(SyntaxKind::ENUM_DECLARATION);
        self.eat(SyntaxKind::CONST_KW);
        self.expect(SyntaxKind::ENUM_KW);
        self.parse_binding_identifier();
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let before = self.pos();
            self.parse_property_name();
            if self.eat(SyntaxKind::EQ) {
                self.parse_assignment_expression();
            }
            if self.pos() == before {
                self.bump_any();
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    /// IfStatement = 'if' '(' Expression ')' Statement ('else' Statement)?
    fn parse_if_statement(&mut self) {
        self.start_node(SyntaxKind::IF_STATEMENT);
        self.bump();
        self.parse_parenthesized_expression();
        self.parse_statement();
        if self.at(SyntaxKind::ELSE_KW) {
            self.start_node(SyntaxKind::ELSE_CLAUSE);
            self.bump();
            self.parse_statement();
            self.finish_node();
        }
        self.finish_node();
    }

    /// ForStatement = 'for' '(' (VariableDeclaration | Expression)? ';' Expression? ';' Expression? ')' Statement
    /// ForInStatement = 'for' 'await'? '(' (VariableDeclaration | LeftHandSideExpression) ('in' | 'of') Expression ')' Statement
    fn parse_for_statement(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump();
        self.eat(SyntaxKind::AWAIT_KW);
        self.expect(SyntaxKind::L_PAREN);

        let no_in = std::mem::replace(&mut self.no_in, true);
        match self.current_kind() {
            SyntaxKind::VAR_KW | SyntaxKind::LET_KW | SyntaxKind::CONST_KW => {
                self.parse_variable_declaration(false)
            }
            SyntaxKind::SEMICOLON => {}
            _ => self.parse_expression(),
        }
        self.no_in = no_in;

        let kind = if self.at(SyntaxKind::IN_KW) || self.at_contextual("of") {
            if self.at(SyntaxKind::IN_KW) {
                self.bump();
            } else {
                self.bump_remap(SyntaxKind::OF_KW);
            }
            self.parse_expression();
            SyntaxKind::FOR_IN_STATEMENT
        } else {
            self.expect(SyntaxKind::SEMICOLON);
            if !self.at(SyntaxKind::SEMICOLON) {
                self.parse_expression();
            }
            self.expect(SyntaxKind::SEMICOLON);
            if !self.at(SyntaxKind::R_PAREN) {
                self.parse_expression();
            }
            SyntaxKind::FOR_STATEMENT
        };
        self.expect(SyntaxKind::R_PAREN);
        self.parse_statement();

        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    /// WhileStatement = 'while' '(' Expression ')' Statement
    fn parse_while_statement(&mut self) {
        self.start_node(SyntaxKind::WHILE_STATEMENT);
        self.bump();
        self.parse_parenthesized_expression();
        self.parse_statement();
        self.finish_node();
    }

    /// DoStatement = 'do' Statement 'while' '(' Expression ')' ';'?
    fn parse_do_statement(&mut self) {
        self.start_node(SyntaxKind::DO_STATEMENT);
        self.bump();
        self.parse_statement();
        self.expect(SyntaxKind::WHILE_KW);
        self.parse_parenthesized_expression();
        self.eat(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// ReturnStatement = 'return' Expression? ';'
    fn parse_return_statement(&mut self) {
        self.start_node(SyntaxKind::RETURN_STATEMENT);
        self.bump();
        if !self.at(SyntaxKind::SEMICOLON)
            && !self.at(SyntaxKind::R_BRACE)
            && !self.at_eof()
            && !self.has_preceding_line_break()
        {
            self.parse_expression();
        }
        self.consume_semicolon();
        self.finish_node();
    }

    /// ThrowStatement = 'throw' Expression ';'
    fn parse_throw_statement(&mut self) {
        self.start_node(SyntaxKind::THROW_STATEMENT);
        self.bump();
        self.parse_expression();
        self.consume_semicolon();
        self.finish_node();
    }

    /// TryStatement = 'try' Block CatchClause? FinallyClause?
    /// CatchClause = 'catch' ('(' BindingTarget TypeAnnotation? ')')? Block
    fn parse_try_statement(&mut self) {
        self.start_node(SyntaxKind::TRY_STATEMENT);
        self.bump();
        self.parse_block();
        if self.at(SyntaxKind::CATCH_KW) {
            self.start_node(SyntaxKind::CATCH_CLAUSE);
            self.bump();
            if self.eat(SyntaxKind::L_PAREN) {
                self.parse_binding_target();
                if self.at(SyntaxKind::COLON) {
                    self.parse_type_annotation();
                }
                self.expect(SyntaxKind::R_PAREN);
            }
            self.parse_block();
            self.finish_node();
        }
        if self.at(SyntaxKind::FINALLY_KW) {
            self.start_node(SyntaxKind::FINALLY_CLAUSE);
            self.bump();
            self.parse_block();
            self.finish_node();
        }
        self.finish_node();
    }

    /// BreakStatement = 'break' IDENT? ';'
    /// ContinueStatement = 'continue' IDENT? ';'
    fn parse_jump_statement(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        if self.at(SyntaxKind::IDENT) && !self.has_preceding_line_break() {
            self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
        }
        self.consume_semicolon();
        self.finish_node();
    }

    /// SwitchStatement = 'switch' '(' Expression ')' '{' SwitchCase* '}'
    /// SwitchCase = ('case' Expression | 'default') ':' Statement*
    fn parse_switch_statement(&mut self) {
        self.start_node(SyntaxKind::SWITCH_STATEMENT);
        self.bump();
        self.parse_parenthesized_expression();
        self.start_node(SyntaxKind::SWITCH_BODY);
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            self.start_node(SyntaxKind::SWITCH_CASE);
            if self.eat(SyntaxKind::CASE_KW) {
                self.parse_expression();
            } else if !self.eat(SyntaxKind::DEFAULT_KW) {
                self.error_recover(
                    "expected 'case' or 'default'",
                    &[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW, SyntaxKind::R_BRACE],
                );
                self.finish_node();
                continue;
            }
            self.expect(SyntaxKind::COLON);
            self.parse_statements_until(&[
                SyntaxKind::CASE_KW,
                SyntaxKind::DEFAULT_KW,
                SyntaxKind::R_BRACE,
            ]);
            self.finish_node();
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
        self.finish_node();
    }

    /// LabeledStatement = IDENT ':' Statement
    fn parse_labeled_statement(&mut self) {
        self.start_node(SyntaxKind::LABELED_STATEMENT);
        self.parse_name(SyntaxKind::PROPERTY_IDENTIFIER);
        self.bump();
        self.parse_statement();
        self.finish_node();
    }
}
