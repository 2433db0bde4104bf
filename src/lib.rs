//! # typed-page-props
//!
//! Lexical definition resolution over JavaScript/TypeScript syntax trees, and
//! a codemod that types Next.js App Router components with route-aware
//! `PageProps<"/route">` / `LayoutProps<"/route">`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! transform → Rewrite driver: default export, first-parameter type, edits
//!   ↓
//! resolve   → Scope-chain walk + declaration-shape battery
//!   ↓
//! pattern   → Structural matcher: $NAME / $$$NAME templates
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST wrappers
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Position)
//!
//! project   → Next.js project root, App Router routes, route file discovery
//! ```
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//! use typed_props::transform::{TransformOptions, transform};
//!
//! let source = "export default function Page({ params }: Props) {}";
//! let options = TransformOptions::new().with_route("/blog/[slug]");
//! let result = transform(source, Path::new("app/blog/[slug]/page.tsx"), &options).unwrap();
//! assert_eq!(
//!     result.as_deref(),
//!     Some("export default function Page({ params }: PageProps<\"/blog/[slug]\">) {}")
//! );
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → pattern → resolve → transform)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Crate-wide error type
pub mod error;

/// Parser: Logos lexer, recursive-descent parser, typed AST wrappers
pub mod parser;

/// Structural pattern matching with metavariables
pub mod pattern;

/// Lexical definition resolver
pub mod resolve;

/// Next.js project layout and route inference
pub mod project;

/// Rewrite driver for page and layout components
pub mod transform;

// Re-export the main entry points
pub use error::{CodemodError, Result};
pub use parser::{Parse, SyntaxKind, SyntaxNode, parse};
pub use pattern::{Match, Matcher, Pattern, Rule, StructuralMatcher};
pub use resolve::{Resolver, find_definition, find_definition_named};
pub use transform::{TransformOptions, transform};

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
