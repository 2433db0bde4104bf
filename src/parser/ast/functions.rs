use super::*;

// ============================================================================
// FunctionLike
// ============================================================================

/// Anything with a parameter list and a body: function declarations,
/// function expressions and arrow functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionLike(pub(crate) SyntaxNode);

impl AstNode for FunctionLike {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::FUNCTION_DECLARATION
                | SyntaxKind::FUNCTION_EXPRESSION
                | SyntaxKind::ARROW_FUNCTION
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

impl FunctionLike {
    has_token_method!(is_async, ASYNC_KW, "async function f() {}");
    first_child_method!(parameters, FormalParameters);

    pub fn is_arrow(&self) -> bool {
        self.0.kind() == SyntaxKind::ARROW_FUNCTION
    }

    /// Function name; arrow functions and anonymous expressions have none.
    ///
    /// A bare-identifier arrow parameter (`x => x`) is not a name.
    pub fn name(&self) -> Option<Identifier> {
        if self.is_arrow() {
            return None;
        }
        self.0.children().find_map(Identifier::cast)
    }

    /// The single bare parameter of `x => ...`
    pub fn bare_parameter(&self) -> Option<Identifier> {
        if !self.is_arrow() {
            return None;
        }
        self.0.first_child().and_then(Identifier::cast)
    }

    /// Return type annotation, the TYPE_ANNOTATION directly on the function
    pub fn return_type(&self) -> Option<TypeAnnotation> {
        self.0.children().find_map(TypeAnnotation::cast)
    }
}

// ============================================================================
// Parameters
// ============================================================================

ast_node!(FormalParameters, FORMAL_PARAMETERS);

impl FormalParameters {
    children_method!(params, Parameter);

    pub fn first(&self) -> Option<Parameter> {
        self.params().next()
    }
}

/// A REQUIRED_PARAMETER or OPTIONAL_PARAMETER
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter(pub(crate) SyntaxNode);

impl AstNode for Parameter {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::REQUIRED_PARAMETER | SyntaxKind::OPTIONAL_PARAMETER
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

impl Parameter {
    first_child_method!(type_annotation, TypeAnnotation);

    /// Required parameters have neither `?` nor a default value
    pub fn is_required(&self) -> bool {
        self.0.kind() == SyntaxKind::REQUIRED_PARAMETER
    }

    /// The binding pattern (IDENTIFIER, OBJECT_PATTERN, ARRAY_PATTERN or REST_PATTERN)
    pub fn pattern(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| {
            matches!(
                n.kind(),
                SyntaxKind::IDENTIFIER
                    | SyntaxKind::OBJECT_PATTERN
                    | SyntaxKind::ARRAY_PATTERN
                    | SyntaxKind::REST_PATTERN
            )
        })
    }

    /// Default value after `=`
    pub fn default_value(&self) -> Option<SyntaxNode> {
        node_after_token(&self.0, SyntaxKind::EQ)
    }
}

// ============================================================================
// Types
// ============================================================================

ast_node!(TypeAnnotation, TYPE_ANNOTATION);

impl TypeAnnotation {
    /// The annotated type, without the leading `:`
    pub fn ty(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }
}
