//! Structural pattern matching over the JavaScript/TypeScript syntax tree.
//!
//! Patterns are written in surface syntax and compiled with the same parser
//! as the code they search:
//!
//! ```text
//!   "function $NAME($$$PARAMS) { $$$BODY }"
//!         │
//!         ▼  parse + compile
//!   FUNCTION_DECLARATION
//!     ├── FUNCTION_KW "function"
//!     ├── $NAME              (single: one node)
//!     ├── FORMAL_PARAMETERS
//!     │     └── $$$PARAMS    (rest: zero or more nodes)
//!     └── STATEMENT_BLOCK
//!           └── $$$BODY
//! ```
//!
//! ## Matching rules
//!
//! - Node kinds must be equal and token texts must be equal. Trivia is ignored.
//! - Every element of the pattern must match. Tokens present in the target but
//!   missing from the pattern (`async`, `;`, `,` ...) may be skipped.
//! - `$NAME` captures exactly one node; `$$$NAME` captures an ordered, possibly
//!   empty run of sibling nodes. A metavariable used twice must capture equal
//!   text both times. `$_` and names starting with `_` match without capturing.
//! - Search is pre-order document order and includes the root node.
//!
//! Fragments that do not parse as a standalone statement (an object method, an
//! import specifier) are written as [`Pattern::contextual`]: a full snippet
//! plus the kind of the sub-node that acts as the pattern.

mod compile;
mod matching;


use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::parser::SyntaxNode;

pub use compile::Pattern;

/// Captured metavariables of one match, in binding order
pub type CaptureEnv = IndexMap<SmolStr, Capture, FxBuildHasher>;

/// What a metavariable captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// `$NAME`
    Single(SyntaxNode),
    /// `$$$NAME`
    Multi(Vec<SyntaxNode>),
}

impl Capture {
    /// Captured nodes as a slice (one element for a single capture)
    pub fn nodes(&self) -> &[SyntaxNode] {
        match self {
            Capture::Single(node) => std::slice::from_ref(node),
            Capture::Multi(nodes) => nodes,
        }
    }

    /// Source text of the capture; rest captures concatenate their nodes
    pub fn text(&self) -> String {
        self.nodes().iter().map(|n| n.text().to_string()).collect()
    }
}

/// One successful match of a [`Rule`].
#[derive(Debug, Clone)]
pub struct Match {
    root: SyntaxNode,
    env: CaptureEnv,
}

impl Match {
    pub(crate) fn new(root: SyntaxNode, env: CaptureEnv) -> Self {
        Self { root, env }
    }

    /// The node the pattern's root matched
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&Capture> {
        self.env.get(name)
    }

    /// The node captured by `$name`
    pub fn get_node(&self, name: &str) -> Option<&SyntaxNode> {
        match self.env.get(name)? {
            Capture::Single(node) => Some(node),
            Capture::Multi(_) => None,
        }
    }

    /// The nodes captured by `$$$name`, empty when unbound
    pub fn get_multiple(&self, name: &str) -> &[SyntaxNode] {
        self.env.get(name).map(Capture::nodes).unwrap_or_default()
    }

    pub fn captures(&self) -> &CaptureEnv {
        &self.env
    }
}

/// A pattern, or an ordered alternation of rules.
#[derive(Debug, Clone)]
pub enum Rule {
    Pattern(Pattern),
    /// At each candidate node, the first alternative that matches wins
    Any(Vec<Rule>),
}

impl Rule {
    pub fn any(rules: impl IntoIterator<Item = impl Into<Rule>>) -> Self {
        Rule::Any(rules.into_iter().map(Into::into).collect())
    }

    /// Match this rule against `node` itself (no descent).
    pub fn match_node(&self, node: &SyntaxNode) -> Option<Match> {
        match self {
            Rule::Pattern(pattern) => pattern.match_node(node),
            Rule::Any(rules) => rules.iter().find_map(|rule| rule.match_node(node)),
        }
    }
}

impl From<Pattern> for Rule {
    fn from(pattern: Pattern) -> Self {
        Rule::Pattern(pattern)
    }
}

// ============================================================================
// Matcher
// ============================================================================

/// Searches a subtree for nodes matching a rule.
///
/// The resolver is written against this trait, so any implementation with the
/// same search order can drive it.
pub trait Matcher {
    /// Every match under `scope` (root included), in pre-order document order.
    fn find_all(&self, scope: &SyntaxNode, rule: &Rule) -> Vec<Match>;

    /// The first match under `scope` in pre-order document order.
    fn find(&self, scope: &SyntaxNode, rule: &Rule) -> Option<Match> {
        self.find_all(scope, rule).into_iter().next()
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn find_all(&self, scope: &SyntaxNode, rule: &Rule) -> Vec<Match> {
        (**self).find_all(scope, rule)
    }

    fn find(&self, scope: &SyntaxNode, rule: &Rule) -> Option<Match> {
        (**self).find(scope, rule)
    }
}

/// The tree-walking [`Matcher`] backed by compiled [`Pattern`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralMatcher;

impl Matcher for StructuralMatcher {
    fn find_all(&self, scope: &SyntaxNode, rule: &Rule) -> Vec<Match> {
        scope
            .descendants()
            .filter_map(|node| rule.match_node(&node))
            .collect()
    }

    fn find(&self, scope: &SyntaxNode, rule: &Rule) -> Option<Match> {
        scope.descendants().find_map(|node| rule.match_node(&node))
    }
}
