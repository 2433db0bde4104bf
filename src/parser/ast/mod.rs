//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for the JavaScript /
//! TypeScript nodes the resolver and the rewrite driver inspect. Each struct
//! wraps a SyntaxNode and provides methods to access children.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken, TextSize};

// ============================================================================
// Child access
// ============================================================================

/// Whether `node` has a direct child token of `kind` (`async`, `const`, ...).
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// First child node that comes after a direct child token of `kind`.
fn node_after_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.children_with_tokens()
        .skip_while(|e| e.as_token().is_none_or(|t| t.kind() != kind))
        .find_map(|e| e.into_node())
}

/// `pub fn is_x(&self) -> bool` for a modifier token.
///
/// ```ignore
/// impl FunctionLike {
///     has_token_method!(is_async, ASYNC_KW, "async function f() {}");
/// }
/// ```
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Has a `", stringify!($kind), "` token")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
    ($name:ident, $kind:ident, $example:literal) => {
        #[doc = concat!("`", $example, "`")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// `pub fn x(&self) -> Option<T>` for the first child of a wrapper type.
///
/// ```ignore
/// impl FunctionLike {
///     first_child_method!(parameters, FormalParameters);
/// }
/// ```
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("The `", stringify!($type), "` child")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// `pub fn xs(&self) -> impl Iterator<Item = T>` over children of a wrapper type.
///
/// ```ignore
/// impl VariableDeclaration {
///     children_method!(declarators, VariableDeclarator);
/// }
/// ```
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Every `", stringify!($type), "` child")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

// ============================================================================
// AstNode trait
// ============================================================================

pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Descendants that cast to `T`, in pre-order
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
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
    };
}

// ============================================================================
// Lookup helpers
// ============================================================================

/// Find the IDENTIFIER node whose range contains `offset`.
///
/// An offset sitting exactly between two tokens tries the token on its left
/// first, so both `|foo` and `foo|` find `foo`.
pub fn identifier_at(root: &SyntaxNode, offset: TextSize) -> Option<Identifier> {
    root.token_at_offset(offset)
        .filter(|token: &SyntaxToken| token.kind() == SyntaxKind::IDENT)
        .find_map(|token| token.parent().and_then(Identifier::cast))
}

// Submodules are declared after the macros so macro_rules! are in scope
mod declarations;
mod functions;
mod modules;

// Re-export all public types so external code sees a flat namespace
pub use self::declarations::*;
pub use self::functions::*;
pub use self::modules::*;

#[cfg(test)]
mod tests;
