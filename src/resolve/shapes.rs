//! The declaration shapes probed at every scope level.

use crate::parser::{SyntaxKind, SyntaxNode};
use crate::pattern::{Match, Matcher, Pattern, Rule};

/// A syntactic form that can introduce a binding.
///
/// Shapes are probed in the order of [`DeclarationShape::ALL`] and the first
/// one that finds `name` wins, so an import beats a `const` with the same
/// name in the same scope no matter which comes first in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationShape {
    /// `import { a, b as c } from 'm'`, `import a from 'm'`, `import * as a from 'm'`
    Import,
    /// `var|let|const a [= value]`
    Variable,
    /// `function a(...) { ... }`
    Function,
    /// A parameter of a function declaration, arrow function or function expression
    Parameter,
    /// `class A { ... }`
    Class,
    /// `var|let|const a = (...) => ...`
    ArrowFunction,
    /// `{ a(...) { ... } }` in an object literal
    ObjectMethod,
    /// `var|let|const { a, b: c } = value` and `var|let|const [a, b] = value`
    Destructuring,
}

// The namespace form comes before the default form: a single `$NAME` in
// binding position also matches the whole `* as name` node.
const IMPORTS: &[&str] = &[
    "import { $$$IMPORTS } from $SOURCE",
    "import * as $NAME from $SOURCE",
    "import $NAME from $SOURCE",
    "import $NAME, { $$$IMPORTS } from $SOURCE",
];

const VARIABLES: &[&str] = &[
    "var $NAME = $VALUE",
    "let $NAME = $VALUE",
    "const $NAME = $VALUE",
    "var $NAME",
    "let $NAME",
    "const $NAME",
];

const FUNCTIONS: &[&str] = &["function $NAME($$$PARAMS) { $$$BODY }"];

const PARAMETER_OWNERS: &[&str] = &[
    "function $FNAME($$$PARAMS) { $$$BODY }",
    "($$$PARAMS) => $BODY",
    "function($$$PARAMS) { $$$BODY }",
];

const CLASSES: &[&str] = &["class $NAME { $$$BODY }"];

const ARROW_FUNCTIONS: &[&str] = &[
    "const $NAME = ($$$PARAMS) => $BODY",
    "let $NAME = ($$$PARAMS) => $BODY",
    "var $NAME = ($$$PARAMS) => $BODY",
    "const $NAME = $PARAMS => $BODY",
    "let $NAME = $PARAMS => $BODY",
    "var $NAME = $PARAMS => $BODY",
];

const OBJECT_METHOD: &str = "({ $NAME($$$PARAMS) { $$$BODY } })";

const DESTRUCTURING: &[&str] = &[
    "const { $$$PROPS } = $VALUE",
    "let { $$$PROPS } = $VALUE",
    "var { $$$PROPS } = $VALUE",
    "const [$$$ITEMS] = $VALUE",
    "let [$$$ITEMS] = $VALUE",
    "var [$$$ITEMS] = $VALUE",
];

impl DeclarationShape {
    /// All shapes, in probing order.
    pub const ALL: [DeclarationShape; 8] = [
        DeclarationShape::Import,
        DeclarationShape::Variable,
        DeclarationShape::Function,
        DeclarationShape::Parameter,
        DeclarationShape::Class,
        DeclarationShape::ArrowFunction,
        DeclarationShape::ObjectMethod,
        DeclarationShape::Destructuring,
    ];

    /// Find a binding of `name` of this shape anywhere under `scope`.
    pub fn probe<M: Matcher>(self, matcher: &M, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
        match self {
            DeclarationShape::Import => probe_import(matcher, scope, name),
            DeclarationShape::Variable => probe_named(matcher, scope, name, VARIABLES),
            DeclarationShape::Function => probe_named(matcher, scope, name, FUNCTIONS),
            DeclarationShape::Parameter => probe_parameter(matcher, scope, name),
            DeclarationShape::Class => probe_named(matcher, scope, name, CLASSES),
            DeclarationShape::ArrowFunction => probe_named(matcher, scope, name, ARROW_FUNCTIONS),
            DeclarationShape::ObjectMethod => probe_object_method(matcher, scope, name),
            DeclarationShape::Destructuring => probe_destructuring(matcher, scope, name),
        }
    }
}

// ============================================================================
// Probes
// ============================================================================

/// The import statement for default/namespace bindings, the specifier for
/// named ones.
fn probe_import<M: Matcher>(matcher: &M, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
    let imports = rule(IMPORTS)?;
    let specifier = Rule::any([
        contextual(&format!("import {{ {name} }} from 'm'"), SyntaxKind::IMPORT_SPECIFIER)?,
        contextual(
            &format!("import {{ $OLD as {name} }} from 'm'"),
            SyntaxKind::IMPORT_SPECIFIER,
        )?,
    ]);

    for import in matcher.find_all(scope, &imports) {
        if captures_name(&import, "NAME", name) {
            return Some(import.root().clone());
        }
        let named = import
            .get_multiple("IMPORTS")
            .iter()
            .find_map(|node| matcher.find(node, &specifier));
        if let Some(found) = named {
            return Some(found.root().clone());
        }
    }
    None
}

/// The whole matched declaration whose `$NAME` is `name`.
fn probe_named<M: Matcher>(
    matcher: &M,
    scope: &SyntaxNode,
    name: &str,
    templates: &[&str],
) -> Option<SyntaxNode> {
    matcher
        .find_all(scope, &rule(templates)?)
        .into_iter()
        .find(|found| captures_name(found, "NAME", name))
        .map(|found| found.root().clone())
}

/// The first bare `name` inside some function's parameter list.
///
/// This includes non-binding occurrences such as `b` in `(a = b) => a`.
fn probe_parameter<M: Matcher>(matcher: &M, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
    let owners = rule(PARAMETER_OWNERS)?;
    let bare: Rule = compile(name)?.into();

    matcher.find_all(scope, &owners).into_iter().find_map(|owner| {
        owner
            .get_multiple("PARAMS")
            .iter()
            .find_map(|param| matcher.find(param, &bare))
            .map(|found| found.root().clone())
    })
}

/// The method's name node; class methods share the node kind and are skipped.
fn probe_object_method<M: Matcher>(matcher: &M, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
    let method: Rule = contextual(OBJECT_METHOD, SyntaxKind::METHOD_DEFINITION)?.into();

    matcher
        .find_all(scope, &method)
        .into_iter()
        .filter(|found| {
            found
                .root()
                .parent()
                .is_some_and(|parent| parent.kind() == SyntaxKind::OBJECT)
        })
        .find(|found| captures_name(found, "NAME", name))
        .and_then(|found| found.get_node("NAME").cloned())
}

/// A shorthand element `name` or a renamed `key: name` pair.
fn probe_destructuring<M: Matcher>(matcher: &M, scope: &SyntaxNode, name: &str) -> Option<SyntaxNode> {
    let declarations = rule(DESTRUCTURING)?;
    let element = Rule::any([
        compile(name)?,
        contextual(
            &format!("const {{ $OLD: {name} }} = _"),
            SyntaxKind::PAIR_PATTERN,
        )?,
    ]);

    matcher.find_all(scope, &declarations).into_iter().find_map(|declaration| {
        let elements = match declaration.get_multiple("PROPS") {
            [] => declaration.get_multiple("ITEMS"),
            props => props,
        };
        elements
            .iter()
            .find_map(|node| matcher.find(node, &element))
            .map(|found| found.root().clone())
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn captures_name(found: &Match, var: &str, name: &str) -> bool {
    found.get(var).is_some_and(|capture| capture.text() == name)
}

/// A name that cannot be compiled into a pattern simply never matches.
fn compile(template: &str) -> Option<Pattern> {
    Pattern::new(template)
        .inspect_err(|error| tracing::trace!(%error, "declaration pattern skipped"))
        .ok()
}

fn contextual(context: &str, selector: SyntaxKind) -> Option<Pattern> {
    Pattern::contextual(context, selector)
        .inspect_err(|error| tracing::trace!(%error, "declaration pattern skipped"))
        .ok()
}

fn rule(templates: &[&str]) -> Option<Rule> {
    templates
        .iter()
        .map(|template| compile(template))
        .collect::<Option<Vec<_>>>()
        .map(Rule::any)
}
