//! The rewrite driver.
//!
//! Finds the component a Next.js route file exports by default and replaces
//! the type of its first parameter with the generated route-aware props type:
//!
//! ```text
//!   app/blog/[slug]/page.tsx
//!
//!   export default function Page({ params }: { params: { slug: string } })
//!                                            ──────────────────────────────
//!                                                        ▼
//!   export default function Page({ params }: PageProps<"/blog/[slug]">)
//! ```
//!
//! `layout.*` files get `LayoutProps<...>` instead. Every precondition that
//! does not hold (no default export, not a function, first parameter optional
//! or untyped, no route) means "leave the file alone", never an error.

mod edit;


use std::path::Path;

use crate::error::{CodemodError, Result};
use crate::parser::ast::{AstNode, FunctionLike, VariableDeclaration, VariableDeclarator};
use crate::parser::{SyntaxKind, SyntaxNode, parse};
use crate::pattern::{Matcher, Pattern, StructuralMatcher};
use crate::project::infer_route;
use crate::resolve::find_definition;

pub use edit::{Edit, commit_edits};

/// The generated props type a route file's component receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropsKind {
    Page,
    Layout,
}

impl PropsKind {
    /// `layout.*` files are layouts; everything else is typed as a page
    pub fn from_path(path: &Path) -> Self {
        match path.file_stem().and_then(|s| s.to_str()) {
            Some("layout") => PropsKind::Layout,
            _ => PropsKind::Page,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            PropsKind::Page => "PageProps",
            PropsKind::Layout => "LayoutProps",
        }
    }

    /// `PageProps<"/route">`
    pub fn annotation(self, route: &str) -> String {
        format!("{}<\"{}\">", self.type_name(), route)
    }
}

/// Where the route of a file comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteSource {
    /// Walk up to the Next.js project root and derive it from the path
    #[default]
    Infer,
    /// Use this route for every file
    Fixed(String),
}

/// Options for [`transform`].
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub route: RouteSource,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip route inference and use `route` as is
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = RouteSource::Fixed(route.into());
        self
    }

    fn route_for(&self, path: &Path) -> Result<Option<String>> {
        match &self.route {
            RouteSource::Fixed(route) => Ok(Some(route.clone())),
            RouteSource::Infer => infer_route(path),
        }
    }
}

/// A planned rewrite of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub kind: PropsKind,
    pub route: String,
    pub edit: Edit,
}

// ============================================================================
// Default export discovery
// ============================================================================

/// The node a module exports by default.
///
/// An exported identifier (`export default Page`) is resolved to its
/// definition; anything else is returned as written.
pub fn default_export(root: &SyntaxNode) -> Option<SyntaxNode> {
    let pattern = Pattern::new("export default $ARG").ok()?;
    let found = StructuralMatcher.find(root, &pattern.into())?;
    let arg = found.get_node("ARG")?;

    if arg.kind() == SyntaxKind::IDENTIFIER {
        find_definition(arg)
    } else {
        Some(arg.clone())
    }
}

pub fn is_function_like(node: &SyntaxNode) -> bool {
    FunctionLike::can_cast(node.kind())
}

/// The function behind an exported binding; `const Page = (...) => ...`
/// resolves to the whole declaration, so look through to its initializer.
fn exported_function(binding: SyntaxNode) -> Option<FunctionLike> {
    let node = match binding.kind() {
        SyntaxKind::LEXICAL_DECLARATION | SyntaxKind::VARIABLE_DECLARATION => {
            VariableDeclaration::cast(binding)?.single_declarator()?.value()?
        }
        SyntaxKind::VARIABLE_DECLARATOR => VariableDeclarator::cast(binding)?.value()?,
        _ => binding,
    };
    FunctionLike::cast(node)
}

/// The type node of the default export's first parameter, if it is a
/// required parameter with a type annotation.
pub fn props_type(root: &SyntaxNode) -> Option<SyntaxNode> {
    let Some(function) = default_export(root).and_then(exported_function) else {
        tracing::debug!("no function-like default export");
        return None;
    };

    let parameter = function.parameters()?.first()?;
    if !parameter.is_required() {
        tracing::debug!(parameter = %parameter.syntax().text(), "first parameter is optional");
        return None;
    }
    parameter.type_annotation()?.ty()
}

// ============================================================================
// Driver
// ============================================================================

/// Work out the rewrite for one file without applying it.
pub fn plan(source: &str, path: &Path, options: &TransformOptions) -> Result<Option<Rewrite>> {
    let parse = parse(source);
    if !parse.ok() {
        tracing::debug!(
            path = %path.display(),
            errors = parse.errors.len(),
            "source has syntax errors, continuing with recovered tree"
        );
    }

    let Some(ty) = props_type(&parse.syntax()) else {
        tracing::debug!(path = %path.display(), "no typed props parameter");
        return Ok(None);
    };
    let Some(route) = options.route_for(path)? else {
        tracing::debug!(path = %path.display(), "no route for file");
        return Ok(None);
    };

    let kind = PropsKind::from_path(path);
    let edit = Edit::replace(&ty, kind.annotation(&route));
    Ok(Some(Rewrite { kind, route, edit }))
}

/// Rewrite `source`, the contents of `path`.
///
/// Returns `Ok(None)` when nothing applies or the props are already typed.
pub fn transform(source: &str, path: &Path, options: &TransformOptions) -> Result<Option<String>> {
    let Some(rewrite) = plan(source, path, options)? else {
        return Ok(None);
    };
    let result = commit_edits(source, vec![rewrite.edit])?;
    Ok((result != source).then_some(result))
}

/// Read `path` and [`transform`] its contents.
pub fn transform_file(path: &Path, options: &TransformOptions) -> Result<Option<String>> {
    let source = std::fs::read_to_string(path).map_err(|e| CodemodError::io(path, e))?;
    transform(&source, path, options)
}
