//! Matching a compiled [`Pattern`] against one syntax node.

use crate::parser::{SyntaxElement, SyntaxNode};

use super::compile::{MetaVar, PatternNode};
use super::{Capture, CaptureEnv, Match, Pattern};

impl Pattern {
    /// Match this pattern against `node` itself (no descent).
    pub fn match_node(&self, node: &SyntaxNode) -> Option<Match> {
        let mut env = CaptureEnv::default();
        let matched = match &self.root {
            // a rest metavariable at the root can only ever see one node
            PatternNode::MetaVar(var) if var.multi => {
                bind(&mut env, var, Capture::Multi(vec![node.clone()]))
            }
            root => match_node(root, node, &mut env),
        };
        matched.then(|| Match::new(node.clone(), env))
    }
}

fn match_node(pattern: &PatternNode, node: &SyntaxNode, env: &mut CaptureEnv) -> bool {
    match pattern {
        PatternNode::MetaVar(var) => bind(env, var, Capture::Single(node.clone())),
        PatternNode::Token { .. } => false,
        PatternNode::Node { kind, children } => {
            if node.kind() != *kind {
                return false;
            }
            let targets: Vec<SyntaxElement> = node
                .children_with_tokens()
                .filter(|e| !e.kind().is_trivia())
                .collect();
            match_sequence(children, &targets, env)
        }
    }
}

fn match_element(pattern: &PatternNode, target: &SyntaxElement, env: &mut CaptureEnv) -> bool {
    match (pattern, target) {
        (PatternNode::Token { kind, text }, rowan::NodeOrToken::Token(token)) => {
            token.kind() == *kind && token.text() == text.as_str()
        }
        (PatternNode::Token { .. }, rowan::NodeOrToken::Node(_)) => false,
        (_, rowan::NodeOrToken::Node(node)) => match_node(pattern, node, env),
        (_, rowan::NodeOrToken::Token(_)) => false,
    }
}

/// Match sibling patterns against sibling targets.
///
/// Target tokens the pattern does not mention are skipped. Rest captures are
/// lazy: they take as few targets as possible and grow on backtracking.
fn match_sequence(patterns: &[PatternNode], targets: &[SyntaxElement], env: &mut CaptureEnv) -> bool {
    let Some((pattern, rest)) = patterns.split_first() else {
        return targets.iter().all(|t| t.as_token().is_some());
    };

    if let PatternNode::MetaVar(var @ MetaVar { multi: true, .. }) = pattern {
        for end in 0..=targets.len() {
            let snapshot = env.clone();
            let nodes = targets[..end]
                .iter()
                .filter_map(|t| t.as_node().cloned())
                .collect();
            if bind(env, var, Capture::Multi(nodes)) && match_sequence(rest, &targets[end..], env) {
                return true;
            }
            *env = snapshot;
        }
        return false;
    }

    let Some((target, remaining)) = targets.split_first() else {
        return false;
    };
    let snapshot = env.clone();
    if match_element(pattern, target, env) && match_sequence(rest, remaining, env) {
        return true;
    }
    *env = snapshot;
    target.as_token().is_some() && match_sequence(patterns, remaining, env)
}

/// Record a capture; a name bound twice must capture equal text.
fn bind(env: &mut CaptureEnv, var: &MetaVar, capture: Capture) -> bool {
    let Some(name) = &var.name else {
        return true;
    };
    match env.get(name) {
        Some(existing) => existing.text() == capture.text(),
        None => {
            env.insert(name.clone(), capture);
            true
        }
    }
}
