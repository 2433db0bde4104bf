//! Logos-based lexer for JavaScript / TypeScript
//!
//! Fast tokenization using the logos crate. Contextual keywords (`from`,
//! `as`, `async`, `type`, ...) are lexed as identifiers; the parser remaps
//! them when they are used as keywords.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// End offset of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Skip to the closing `*/`; an unterminated comment swallows the rest of
/// the input as an error token.
fn block_comment(lex: &mut logos::Lexer<LogosToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f\u{feff}\u{a0}]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9_]+)?n?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+n?")]
    #[regex(r"0[bB][01_]+n?")]
    #[regex(r"0[oO][0-7_]+n?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,

    #[regex(r"`([^`\\]|\\[\s\S])*`")]
    TemplateString,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (logos picks the longest match)
    // =========================================================================
    #[token("...")]
    DotDotDot,
    #[token("?.")]
    QuestionDot,
    #[token("??=")]
    QuestionQuestionEq,
    #[token("??")]
    QuestionQuestion,
    #[token("===")]
    EqEqEq,
    #[token("==")]
    EqEq,
    #[token("!==")]
    BangEqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    LtLt,
    #[token("=>")]
    FatArrow,
    #[token("**")]
    StarStar,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("&&=")]
    AmpAmpEq,
    #[token("&&")]
    AmpAmp,
    #[token("||=")]
    PipePipeEq,
    #[token("||")]
    PipePipe,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("@")]
    At,
    #[token("#")]
    Hash,

    // =========================================================================
    // RESERVED WORDS (alphabetical)
    // =========================================================================
    #[token("await")]
    AwaitKw,
    #[token("break")]
    BreakKw,
    #[token("case")]
    CaseKw,
    #[token("catch")]
    CatchKw,
    #[token("class")]
    ClassKw,
    #[token("const")]
    ConstKw,
    #[token("continue")]
    ContinueKw,
    #[token("debugger")]
    DebuggerKw,
    #[token("default")]
    DefaultKw,
    #[token("delete")]
    DeleteKw,
    #[token("do")]
    DoKw,
    #[token("else")]
    ElseKw,
    #[token("enum")]
    EnumKw,
    #[token("export")]
    ExportKw,
    #[token("extends")]
    ExtendsKw,
    #[token("false")]
    FalseKw,
    #[token("finally")]
    FinallyKw,
    #[token("for")]
    ForKw,
    #[token("function")]
    FunctionKw,
    #[token("if")]
    IfKw,
    #[token("implements")]
    ImplementsKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("instanceof")]
    InstanceofKw,
    #[token("interface")]
    InterfaceKw,
    #[token("let")]
    LetKw,
    #[token("new")]
    NewKw,
    #[token("null")]
    NullKw,
    #[token("return")]
    ReturnKw,
    #[token("super")]
    SuperKw,
    #[token("switch")]
    SwitchKw,
    #[token("this")]
    ThisKw,
    #[token("throw")]
    ThrowKw,
    #[token("true")]
    TrueKw,
    #[token("try")]
    TryKw,
    #[token("typeof")]
    TypeofKw,
    #[token("var")]
    VarKw,
    #[token("void")]
    VoidKw,
    #[token("while")]
    WhileKw,
    #[token("with")]
    WithKw,
    #[token("yield")]
    YieldKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Number => SyntaxKind::NUMBER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::TemplateString => SyntaxKind::TEMPLATE_STRING,
            LogosToken::DotDotDot => SyntaxKind::DOT_DOT_DOT,
            LogosToken::QuestionDot => SyntaxKind::QUESTION_DOT,
            LogosToken::QuestionQuestionEq => SyntaxKind::QUESTION_QUESTION_EQ,
            LogosToken::QuestionQuestion => SyntaxKind::QUESTION_QUESTION,
            LogosToken::EqEqEq => SyntaxKind::EQ_EQ_EQ,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEqEq => SyntaxKind::BANG_EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::LtLt => SyntaxKind::LT_LT,
            LogosToken::FatArrow => SyntaxKind::FAT_ARROW,
            LogosToken::StarStar => SyntaxKind::STAR_STAR,
            LogosToken::PlusPlus => SyntaxKind::PLUS_PLUS,
            LogosToken::MinusMinus => SyntaxKind::MINUS_MINUS,
            LogosToken::AmpAmpEq => SyntaxKind::AMP_AMP_EQ,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::PipePipeEq => SyntaxKind::PIPE_PIPE_EQ,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,
            LogosToken::PlusEq => SyntaxKind::PLUS_EQ,
            LogosToken::MinusEq => SyntaxKind::MINUS_EQ,
            LogosToken::StarEq => SyntaxKind::STAR_EQ,
            LogosToken::SlashEq => SyntaxKind::SLASH_EQ,
            LogosToken::PercentEq => SyntaxKind::PERCENT_EQ,
            LogosToken::AmpEq => SyntaxKind::AMP_EQ,
            LogosToken::PipeEq => SyntaxKind::PIPE_EQ,
            LogosToken::CaretEq => SyntaxKind::CARET_EQ,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Hash => SyntaxKind::HASH,
            LogosToken::AwaitKw => SyntaxKind::AWAIT_KW,
            LogosToken::BreakKw => SyntaxKind::BREAK_KW,
            LogosToken::CaseKw => SyntaxKind::CASE_KW,
            LogosToken::CatchKw => SyntaxKind::CATCH_KW,
            LogosToken::ClassKw => SyntaxKind::CLASS_KW,
            LogosToken::ConstKw => SyntaxKind::CONST_KW,
            LogosToken::ContinueKw => SyntaxKind::CONTINUE_KW,
            LogosToken::DebuggerKw => SyntaxKind::DEBUGGER_KW,
            LogosToken::DefaultKw => SyntaxKind::DEFAULT_KW,
            LogosToken::DeleteKw => SyntaxKind::DELETE_KW,
            LogosToken::DoKw => SyntaxKind::DO_KW,
            LogosToken::ElseKw => SyntaxKind::ELSE_KW,
            LogosToken::EnumKw => SyntaxKind::ENUM_KW,
            LogosToken::ExportKw => SyntaxKind::EXPORT_KW,
            LogosToken::ExtendsKw => SyntaxKind::EXTENDS_KW,
            LogosToken::FalseKw => SyntaxKind::FALSE_KW,
            LogosToken::FinallyKw => SyntaxKind::FINALLY_KW,
            LogosToken::ForKw => SyntaxKind::FOR_KW,
            LogosToken::FunctionKw => SyntaxKind::FUNCTION_KW,
            LogosToken::IfKw => SyntaxKind::IF_KW,
            LogosToken::ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            LogosToken::ImportKw => SyntaxKind::IMPORT_KW,
            LogosToken::InKw => SyntaxKind::IN_KW,
            LogosToken::InstanceofKw => SyntaxKind::INSTANCEOF_KW,
            LogosToken::InterfaceKw => SyntaxKind::INTERFACE_KW,
            LogosToken::LetKw => SyntaxKind::LET_KW,
            LogosToken::NewKw => SyntaxKind::NEW_KW,
            LogosToken::NullKw => SyntaxKind::NULL_KW,
            LogosToken::ReturnKw => SyntaxKind::RETURN_KW,
            LogosToken::SuperKw => SyntaxKind::SUPER_KW,
            LogosToken::SwitchKw => SyntaxKind::SWITCH_KW,
            LogosToken::ThisKw => SyntaxKind::THIS_KW,
            LogosToken::ThrowKw => SyntaxKind::THROW_KW,
            LogosToken::TrueKw => SyntaxKind::TRUE_KW,
            LogosToken::TryKw => SyntaxKind::TRY_KW,
            LogosToken::TypeofKw => SyntaxKind::TYPEOF_KW,
            LogosToken::VarKw => SyntaxKind::VAR_KW,
            LogosToken::VoidKw => SyntaxKind::VOID_KW,
            LogosToken::WhileKw => SyntaxKind::WHILE_KW,
            LogosToken::WithKw => SyntaxKind::WITH_KW,
            LogosToken::YieldKw => SyntaxKind::YIELD_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_declaration() {
        assert_eq!(
            kinds("const x = 1;"),
            vec![
                SyntaxKind::CONST_KW,
                SyntaxKind::IDENT,
                SyntaxKind::EQ,
                SyntaxKind::NUMBER,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn test_metavariables_lex_as_identifiers() {
        let tokens = tokenize("$NAME $$$PARAMS");
        let idents: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == SyntaxKind::IDENT)
            .map(|t| t.text)
            .collect();
        assert_eq!(idents, vec!["$NAME", "$$$PARAMS"]);
    }

    #[test]
    fn test_contextual_keywords_are_identifiers() {
        assert_eq!(
            kinds("from as async type"),
            vec![SyntaxKind::IDENT; 4]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        // `constant` must not split into `const` + `ant`
        assert_eq!(kinds("constant"), vec![SyntaxKind::IDENT]);
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let input = "import { a } from 'mod'";
        let tokens = tokenize(input);
        let mut expected = TextSize::new(0);
        for token in &tokens {
            assert_eq!(token.offset, expected);
            expected = token.end();
        }
        assert_eq!(u32::from(expected) as usize, input.len());
    }

    #[test]
    fn test_strings_and_templates() {
        assert_eq!(
            kinds(r#"'a' "b\"c" `d ${e}`"#),
            vec![
                SyntaxKind::STRING,
                SyntaxKind::STRING,
                SyntaxKind::TEMPLATE_STRING,
            ]
        );
    }

    #[test]
    fn test_block_comment_with_stars() {
        assert_eq!(
            tokenize("/** doc **/").first().map(|t| t.kind),
            Some(SyntaxKind::BLOCK_COMMENT)
        );
    }

    #[test]
    fn test_jsdoc_before_declaration() {
        let kinds: Vec<_> = tokenize("/** Page props */\nconst").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::BLOCK_COMMENT,
                SyntaxKind::WHITESPACE,
                SyntaxKind::CONST_KW,
            ]
        );
    }

    #[test]
    fn test_block_comment_ends_at_first_close() {
        let tokens = tokenize("/* a */ x /* b */");
        assert_eq!(tokens[0].text, "/* a */");
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[4].text, "/* b */");
    }

    #[test]
    fn test_unterminated_block_comment_is_error() {
        let tokens = tokenize("/* open");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, SyntaxKind::ERROR);
    }
}
