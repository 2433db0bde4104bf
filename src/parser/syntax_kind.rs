//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Node names follow the tree-sitter JavaScript/TypeScript grammars so that
//! structural patterns read the same way they would against those trees.

/// All syntax kinds (tokens and nodes) for JavaScript, TypeScript and JSX
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (statements, expressions, patterns, types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier, including `$`-prefixed metavariables
    NUMBER,             // 42, 0x1F, 1_000, 3.14
    STRING,             // "hello" or 'hello'
    TEMPLATE_STRING,    // `hello ${name}`

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    SEMICOLON,          // ;
    COLON,              // :
    COMMA,              // ,
    DOT,                // .
    DOT_DOT_DOT,        // ...
    QUESTION,           // ?
    QUESTION_DOT,       // ?.
    QUESTION_QUESTION,  // ??
    EQ,                 // =
    EQ_EQ,              // ==
    EQ_EQ_EQ,           // ===
    BANG,               // !
    BANG_EQ,            // !=
    BANG_EQ_EQ,         // !==
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    GT_EQ,              // >=
    LT_LT,              // <<
    FAT_ARROW,          // =>
    PLUS,               // +
    MINUS,              // -
    STAR,               // *
    STAR_STAR,          // **
    SLASH,              // /
    PERCENT,            // %
    PLUS_PLUS,          // ++
    MINUS_MINUS,        // --
    AMP,                // &
    AMP_AMP,            // &&
    PIPE,               // |
    PIPE_PIPE,          // ||
    CARET,              // ^
    TILDE,              // ~
    AT,                 // @
    HASH,               // #
    PLUS_EQ,            // +=
    MINUS_EQ,           // -=
    STAR_EQ,            // *=
    SLASH_EQ,           // /=
    PERCENT_EQ,         // %=
    AMP_EQ,             // &=
    PIPE_EQ,            // |=
    CARET_EQ,           // ^=
    AMP_AMP_EQ,         // &&=
    PIPE_PIPE_EQ,       // ||=
    QUESTION_QUESTION_EQ, // ??=

    // =========================================================================
    // KEYWORDS - reserved words (always lexed as keywords)
    // =========================================================================
    AWAIT_KW,
    BREAK_KW,
    CASE_KW,
    CATCH_KW,
    CLASS_KW,
    CONST_KW,
    CONTINUE_KW,
    DEBUGGER_KW,
    DEFAULT_KW,
    DELETE_KW,
    DO_KW,
    ELSE_KW,
    ENUM_KW,
    EXPORT_KW,
    EXTENDS_KW,
    FALSE_KW,
    FINALLY_KW,
    FOR_KW,
    FUNCTION_KW,
    IF_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    IN_KW,
    INSTANCEOF_KW,
    INTERFACE_KW,
    LET_KW,
    NEW_KW,
    NULL_KW,
    RETURN_KW,
    SUPER_KW,
    SWITCH_KW,
    THIS_KW,
    THROW_KW,
    TRUE_KW,
    TRY_KW,
    TYPEOF_KW,
    VAR_KW,
    VOID_KW,
    WHILE_KW,
    WITH_KW,
    YIELD_KW,

    // =========================================================================
    // KEYWORDS - contextual (lexed as IDENT, remapped by the parser)
    // =========================================================================
    ABSTRACT_KW,
    AS_KW,
    ASYNC_KW,
    DECLARE_KW,
    FROM_KW,
    GET_KW,
    KEYOF_KW,
    OF_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    READONLY_KW,
    SATISFIES_KW,
    SET_KW,
    STATIC_KW,
    TYPE_KW,

    // =========================================================================
    // NODES - module items
    // =========================================================================
    SOURCE_FILE,
    IMPORT_STATEMENT,
    NAMED_IMPORTS,
    IMPORT_SPECIFIER,
    NAMESPACE_IMPORT,
    EXPORT_STATEMENT,
    EXPORT_CLAUSE,
    EXPORT_SPECIFIER,

    // Declarations
    LEXICAL_DECLARATION,    // let / const
    VARIABLE_DECLARATION,   // var
    VARIABLE_DECLARATOR,
    FUNCTION_DECLARATION,
    CLASS_DECLARATION,
    CLASS_HERITAGE,
    CLASS_BODY,
    METHOD_DEFINITION,
    FIELD_DEFINITION,
    TYPE_ALIAS_DECLARATION,
    INTERFACE_DECLARATION,
    ENUM_DECLARATION,

    // Statements
    EXPRESSION_STATEMENT,
    STATEMENT_BLOCK,
    EMPTY_STATEMENT,
    RETURN_STATEMENT,
    IF_STATEMENT,
    ELSE_CLAUSE,
    FOR_STATEMENT,
    FOR_IN_STATEMENT,
    WHILE_STATEMENT,
    DO_STATEMENT,
    TRY_STATEMENT,
    CATCH_CLAUSE,
    FINALLY_CLAUSE,
    THROW_STATEMENT,
    BREAK_STATEMENT,
    CONTINUE_STATEMENT,
    SWITCH_STATEMENT,
    SWITCH_BODY,
    SWITCH_CASE,
    LABELED_STATEMENT,

    // Parameters and binding patterns
    FORMAL_PARAMETERS,
    REQUIRED_PARAMETER,
    OPTIONAL_PARAMETER,
    OBJECT_PATTERN,
    PAIR_PATTERN,
    OBJECT_ASSIGNMENT_PATTERN,
    ARRAY_PATTERN,
    ASSIGNMENT_PATTERN,
    REST_PATTERN,

    // Expressions
    IDENTIFIER,
    PROPERTY_IDENTIFIER,
    LITERAL,
    PARENTHESIZED_EXPRESSION,
    ARRAY,
    OBJECT,
    PAIR,
    SPREAD_ELEMENT,
    COMPUTED_PROPERTY_NAME,
    FUNCTION_EXPRESSION,
    ARROW_FUNCTION,
    CLASS_EXPRESSION,
    CALL_EXPRESSION,
    ARGUMENTS,
    MEMBER_EXPRESSION,
    SUBSCRIPT_EXPRESSION,
    NEW_EXPRESSION,
    BINARY_EXPRESSION,
    UNARY_EXPRESSION,
    UPDATE_EXPRESSION,
    ASSIGNMENT_EXPRESSION,
    TERNARY_EXPRESSION,
    AWAIT_EXPRESSION,
    YIELD_EXPRESSION,
    AS_EXPRESSION,
    SATISFIES_EXPRESSION,
    NON_NULL_EXPRESSION,
    SEQUENCE_EXPRESSION,

    // JSX
    JSX_ELEMENT,
    JSX_OPENING_ELEMENT,
    JSX_CLOSING_ELEMENT,
    JSX_SELF_CLOSING_ELEMENT,
    JSX_ATTRIBUTE,
    JSX_EXPRESSION,
    JSX_TEXT,

    // Types
    TYPE_ANNOTATION,
    TYPE_IDENTIFIER,
    NESTED_TYPE_IDENTIFIER,
    GENERIC_TYPE,
    TYPE_ARGUMENTS,
    TYPE_PARAMETERS,
    TYPE_PARAMETER,
    OBJECT_TYPE,
    PROPERTY_SIGNATURE,
    INDEX_SIGNATURE,
    UNION_TYPE,
    INTERSECTION_TYPE,
    ARRAY_TYPE,
    TUPLE_TYPE,
    FUNCTION_TYPE,
    LITERAL_TYPE,
    PARENTHESIZED_TYPE,
    TYPE_QUERY,
    TYPE_OPERATOR,
    INDEXED_ACCESS_TYPE,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword, reserved or contextual
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AWAIT_KW as u16) && (self as u16) <= (Self::TYPE_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16)
            && (self as u16) <= (Self::QUESTION_QUESTION_EQ as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::NUMBER | Self::STRING | Self::TEMPLATE_STRING
        )
    }

    /// Check if this kind is a token rather than a composite node
    pub fn is_token(self) -> bool {
        (self as u16) < (Self::SOURCE_FILE as u16)
    }

    /// Check if a token of this kind may appear where an identifier name is
    /// expected (property names, import specifiers, contextual keywords).
    pub fn is_identifier_name(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }

    /// Assignment operators (`=`, `+=`, `??=`, ...)
    pub fn is_assignment_op(self) -> bool {
        matches!(
            self,
            Self::EQ
                | Self::PLUS_EQ
                | Self::MINUS_EQ
                | Self::STAR_EQ
                | Self::SLASH_EQ
                | Self::PERCENT_EQ
                | Self::AMP_EQ
                | Self::PIPE_EQ
                | Self::CARET_EQ
                | Self::AMP_AMP_EQ
                | Self::PIPE_PIPE_EQ
                | Self::QUESTION_QUESTION_EQ
        )
    }

    /// Binding power of a binary operator, or `None` if `self` is not one.
    ///
    /// `>` also stands in for `>>`/`>>>`, which the parser glues from
    /// adjacent `>` tokens so that nested generics lex cleanly.
    pub fn binary_precedence(self) -> Option<u8> {
        let prec = match self {
            Self::QUESTION_QUESTION => 1,
            Self::PIPE_PIPE => 2,
            Self::AMP_AMP => 3,
            Self::PIPE => 4,
            Self::CARET => 5,
            Self::AMP => 6,
            Self::EQ_EQ | Self::BANG_EQ | Self::EQ_EQ_EQ | Self::BANG_EQ_EQ => 7,
            Self::LT
            | Self::GT
            | Self::LT_EQ
            | Self::GT_EQ
            | Self::INSTANCEOF_KW
            | Self::IN_KW => 8,
            Self::LT_LT => 9,
            Self::PLUS | Self::MINUS => 10,
            Self::STAR | Self::SLASH | Self::PERCENT => 11,
            Self::STAR_STAR => 12,
            _ => return None,
        };
        Some(prec)
    }

    /// Human readable name used in parse error messages
    pub fn display_name(self) -> &'static str {
        match self {
            Self::IDENT => "identifier",
            Self::NUMBER => "number",
            Self::STRING => "string",
            Self::TEMPLATE_STRING => "template string",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::SEMICOLON => "';'",
            Self::COLON => "':'",
            Self::COMMA => "','",
            Self::EQ => "'='",
            Self::GT => "'>'",
            Self::LT => "'<'",
            Self::FAT_ARROW => "'=>'",
            Self::SLASH => "'/'",
            _ if self.is_keyword() => "keyword",
            _ if self.is_punct() => "punctuation",
            _ => "token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsLanguage {}

impl rowan::Language for JsLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<JsLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JsLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JsLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<JsLanguage>;
