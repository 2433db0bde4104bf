//! Template compilation: surface syntax to a [`PatternNode`] tree.

use smol_str::SmolStr;

use crate::error::{CodemodError, Result};
use crate::parser::{SyntaxKind, SyntaxNode, parse};

/// A compiled structural pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    template: String,
    pub(super) root: PatternNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum PatternNode {
    MetaVar(MetaVar),
    Token {
        kind: SyntaxKind,
        text: SmolStr,
    },
    Node {
        kind: SyntaxKind,
        children: Vec<PatternNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MetaVar {
    /// `None` for anonymous (`$_`, `$$$`) and `_`-prefixed names
    pub(super) name: Option<SmolStr>,
    pub(super) multi: bool,
}

impl Pattern {
    /// Compile a template that parses as exactly one statement.
    ///
    /// An expression statement without a trailing `;` is unwrapped to the
    /// expression, so `($$$PARAMS) => $BODY` matches arrow functions anywhere,
    /// not only in statement position.
    pub fn new(template: &str) -> Result<Self> {
        let root = parse_template(template)?;
        let mut statements = root.children();
        let (Some(statement), None) = (statements.next(), statements.next()) else {
            return Err(CodemodError::invalid_pattern(
                template,
                "pattern must contain exactly one statement",
            ));
        };
        Ok(Self::from_syntax(template, &unwrap_expression_statement(statement)))
    }

    /// Compile the first `selector` node inside `context`.
    pub fn contextual(context: &str, selector: SyntaxKind) -> Result<Self> {
        let root = parse_template(context)?;
        let node = root
            .descendants()
            .find(|n| n.kind() == selector)
            .ok_or_else(|| {
                CodemodError::invalid_pattern(context, format!("no {selector:?} node in context"))
            })?;
        Ok(Self::from_syntax(context, &node))
    }

    fn from_syntax(template: &str, node: &SyntaxNode) -> Self {
        Self {
            template: template.to_string(),
            root: compile_node(node),
        }
    }

    /// The source text this pattern was compiled from
    pub fn template(&self) -> &str {
        &self.template
    }
}

fn parse_template(template: &str) -> Result<SyntaxNode> {
    let parse = parse(template);
    match parse.errors.first() {
        Some(error) => Err(CodemodError::invalid_pattern(template, error.to_string())),
        None => Ok(parse.syntax()),
    }
}

fn unwrap_expression_statement(statement: SyntaxNode) -> SyntaxNode {
    if statement.kind() != SyntaxKind::EXPRESSION_STATEMENT {
        return statement;
    }
    let terminated = statement
        .children_with_tokens()
        .any(|e| e.kind() == SyntaxKind::SEMICOLON);
    match statement.first_child() {
        Some(expression) if !terminated => expression,
        _ => statement,
    }
}

/// A rest metavariable replaces the outermost node spelled `$$$NAME`, so
/// `$$$PARAMS` inside `(...)` stands for parameters rather than for an
/// identifier inside one parameter. A single metavariable replaces only the
/// leaf spelled `$NAME`; wrappers around it stay structural, so `const $NAME`
/// keeps its declarator and does not match `const a = 1`.
fn compile_node(node: &SyntaxNode) -> PatternNode {
    if let Some(var) = metavariable(&node.text().to_string()) {
        if var.multi || node.first_child().is_none() {
            return PatternNode::MetaVar(var);
        }
    }
    let children = node
        .children_with_tokens()
        .filter(|e| !e.kind().is_trivia())
        .map(|element| match element {
            rowan::NodeOrToken::Node(child) => compile_node(&child),
            rowan::NodeOrToken::Token(token) => PatternNode::Token {
                kind: token.kind(),
                text: SmolStr::new(token.text()),
            },
        })
        .collect();
    PatternNode::Node {
        kind: node.kind(),
        children,
    }
}

/// `$NAME`, `$$$NAME`, `$_` or `$$$`; names are upper-case ASCII, digits and `_`.
pub(super) fn metavariable(text: &str) -> Option<MetaVar> {
    let (multi, name) = match text.strip_prefix("$$$") {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('$')?),
    };
    if name.is_empty() {
        return multi.then_some(MetaVar { name: None, multi });
    }
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        return None;
    }
    Some(MetaVar {
        name: (!name.starts_with('_')).then(|| SmolStr::new(name)),
        multi,
    })
}
