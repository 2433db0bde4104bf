//! Lexical definition resolution.
//!
//! Given an identifier occurrence, find the syntax node that introduces its
//! binding: an import, a variable declaration, a function, a parameter, a
//! class, an object method or a destructured name.
//!
//! There is no symbol table. Every ancestor of the identifier is treated as a
//! scope candidate and, nearest first, probed with a fixed battery of
//! declaration shapes (see [`DeclarationShape`]):
//!
//! ```text
//!   identifier ──parent──▶ scope₀ ──parent──▶ scope₁ ──▶ ... ──▶ SOURCE_FILE
//!                            │                  │
//!                            ▼                  ▼
//!                     Import, Variable, Function, Parameter,
//!                     Class, ArrowFunction, ObjectMethod, Destructuring
//!                            │
//!                            └── first hit wins, at the nearest level
//! ```
//!
//! Each probe searches the whole subtree of its scope candidate, so block
//! scoping, hoisting and program order are only approximated: a declaration
//! later in the source, or in a sibling block, can be returned. Imports are
//! bindings; the imported module is never opened.

mod shapes;


use crate::parser::SyntaxNode;
use crate::pattern::{Matcher, StructuralMatcher};

pub use shapes::DeclarationShape;

/// Looks for a binding of a name declared at one scope candidate.
pub trait ScopeProber {
    /// The binding node for `name` under `scope`, if any.
    fn probe(&self, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode>;
}

/// Probes every [`DeclarationShape`] in order using structural patterns.
#[derive(Debug, Clone, Default)]
pub struct LexicalProber<M = StructuralMatcher> {
    matcher: M,
}

impl<M: Matcher> LexicalProber<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }
}

impl<M: Matcher> ScopeProber for LexicalProber<M> {
    fn probe(&self, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
        DeclarationShape::ALL.into_iter().find_map(|shape| {
            let binding = shape.probe(&self.matcher, scope, name)?;
            tracing::trace!(
                name,
                ?shape,
                scope = ?scope.kind(),
                binding = ?binding.kind(),
                "binding found"
            );
            Some(binding)
        })
    }
}

/// Walks the scope chain of an identifier.
#[derive(Debug, Clone, Default)]
pub struct Resolver<P = LexicalProber> {
    prober: P,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: Matcher> Resolver<LexicalProber<M>> {
    /// A lexical resolver driven by a custom matcher.
    pub fn with_matcher(matcher: M) -> Self {
        Self::with_prober(LexicalProber::new(matcher))
    }
}

impl<P: ScopeProber> Resolver<P> {
    pub fn with_prober(prober: P) -> Self {
        Self { prober }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Find the binding of `identifier`, looked up under `name` if given and
    /// under the identifier's own text otherwise.
    ///
    /// Every ancestor, starting at the identifier's parent, is probed; the
    /// first level with a hit wins. Returns `None` when the identifier has no
    /// parent or no level binds the name (globals such as `console`).
    pub fn resolve(&self, identifier: &SyntaxNode, name: Option<&str>) -> Option<SyntaxNode> {
        let own_text;
        let name = match name {
            Some(name) => name,
            None => {
                own_text = identifier.text().to_string();
                &own_text
            }
        };

        let mut current = identifier.parent();
        while let Some(scope) = current {
            if let Some(binding) = self.prober.probe(&scope, name) {
                return Some(binding);
            }
            current = scope.parent();
        }

        tracing::trace!(name, "no binding in any enclosing scope");
        None
    }
}

/// Resolve `identifier` with the default structural matcher.
pub fn find_definition(identifier: &SyntaxNode) -> Option<SyntaxNode> {
    Resolver::new().resolve(identifier, None)
}

/// Resolve `identifier` under an explicit `name`.
pub fn find_definition_named(identifier: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
    Resolver::new().resolve(identifier, Some(name))
}
