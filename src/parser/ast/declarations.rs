use super::*;

// ============================================================================
// Identifier
// ============================================================================

ast_node!(Identifier, IDENTIFIER);

impl Identifier {
    /// The identifier's name, exactly as written
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

// ============================================================================
// Variable declarations
// ============================================================================

/// A `var`, `let` or `const` statement.
///
/// Covers both VARIABLE_DECLARATION (`var`) and LEXICAL_DECLARATION (`let`/`const`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableDeclaration(pub(crate) SyntaxNode);

impl AstNode for VariableDeclaration {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::VARIABLE_DECLARATION | SyntaxKind::LEXICAL_DECLARATION
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl VariableDeclaration {
    has_token_method!(is_const, CONST_KW, "const x = 1");
    children_method!(declarators, VariableDeclarator);

    /// The only declarator, when the statement declares exactly one binding
    pub fn single_declarator(&self) -> Option<VariableDeclarator> {
        let mut declarators = self.declarators();
        let first = declarators.next()?;
        declarators.next().is_none().then_some(first)
    }
}

ast_node!(VariableDeclarator, VARIABLE_DECLARATOR);

impl VariableDeclarator {
    /// The binding target: an IDENTIFIER, OBJECT_PATTERN or ARRAY_PATTERN
    pub fn target(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }

    /// Declared name, for simple `name = value` declarators
    pub fn name(&self) -> Option<Identifier> {
        self.target().and_then(Identifier::cast)
    }

    /// The initializer expression after `=`
    pub fn value(&self) -> Option<SyntaxNode> {
        node_after_token(&self.0, SyntaxKind::EQ)
    }
}

// ============================================================================
// Classes
// ============================================================================

ast_node!(ClassDeclaration, CLASS_DECLARATION);

impl ClassDeclaration {
    has_token_method!(is_abstract, ABSTRACT_KW);
    first_child_method!(name, Identifier);
}
