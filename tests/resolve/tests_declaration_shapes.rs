#![allow(clippy::unwrap_used, clippy::expect_used)]

use rstest::rstest;

use crate::helpers::syntax_helpers::parse_ok;
use typed_props::SyntaxKind;
use typed_props::pattern::StructuralMatcher;
use typed_props::resolve::{DeclarationShape, LexicalProber, ScopeProber};

const MODULE: &str = r#"import Link from 'next/link';
import { cache as memo } from 'react';

let counter = 0;

function loadPosts(limit: number) {
  return fetch("/api/posts?limit=" + limit);
}

class PostStore {}

const renderRow = (row) => <li>{row}</li>;

const handlers = {
  submit(event) {
    return event;
  },
};

const { data: posts, error } = useSWR('/api/posts');
"#;

#[rstest]
#[case::default_import(DeclarationShape::Import, "Link", SyntaxKind::IMPORT_STATEMENT)]
#[case::aliased_import(DeclarationShape::Import, "memo", SyntaxKind::IMPORT_SPECIFIER)]
#[case::variable(DeclarationShape::Variable, "counter", SyntaxKind::LEXICAL_DECLARATION)]
#[case::function(DeclarationShape::Function, "loadPosts", SyntaxKind::FUNCTION_DECLARATION)]
#[case::parameter(DeclarationShape::Parameter, "limit", SyntaxKind::IDENTIFIER)]
#[case::class(DeclarationShape::Class, "PostStore", SyntaxKind::CLASS_DECLARATION)]
#[case::arrow_function(DeclarationShape::ArrowFunction, "renderRow", SyntaxKind::LEXICAL_DECLARATION)]
#[case::object_method(DeclarationShape::ObjectMethod, "submit", SyntaxKind::PROPERTY_IDENTIFIER)]
#[case::renamed_destructuring(DeclarationShape::Destructuring, "posts", SyntaxKind::PAIR_PATTERN)]
#[case::shorthand_destructuring(DeclarationShape::Destructuring, "error", SyntaxKind::IDENTIFIER)]
fn each_shape_finds_its_binding(
    #[case] shape: DeclarationShape,
    #[case] name: &str,
    #[case] expected: SyntaxKind,
) {
    let root = parse_ok(MODULE);
    let binding = shape
        .probe(&StructuralMatcher, &root, name)
        .unwrap_or_else(|| panic!("{shape:?} did not find `{name}`"));
    assert_eq!(binding.kind(), expected);
    assert!(binding.text().to_string().contains(name));
}

#[rstest]
#[case::import_is_not_a_variable(DeclarationShape::Variable, "Link")]
#[case::original_import_name(DeclarationShape::Import, "cache")]
#[case::renamed_key(DeclarationShape::Destructuring, "data")]
#[case::function_is_not_a_class(DeclarationShape::Class, "loadPosts")]
#[case::argument_is_not_a_parameter(DeclarationShape::Parameter, "counter")]
fn shapes_do_not_claim_other_bindings(#[case] shape: DeclarationShape, #[case] name: &str) {
    let root = parse_ok(MODULE);
    assert_eq!(shape.probe(&StructuralMatcher, &root, name), None);
}

#[test]
fn shapes_are_probed_imports_first() {
    assert_eq!(DeclarationShape::ALL.first(), Some(&DeclarationShape::Import));
    assert_eq!(DeclarationShape::ALL.last(), Some(&DeclarationShape::Destructuring));
    assert_eq!(DeclarationShape::ALL.len(), 8);
}

#[test]
fn prober_prefers_earlier_shapes() {
    // `current` is both a plain declaration and a destructured element
    let root = parse_ok("const { current } = ref;\nconst current = 1;\n");
    let binding = LexicalProber::new(StructuralMatcher).probe(&root, "current").unwrap();
    assert_eq!(binding.kind(), SyntaxKind::LEXICAL_DECLARATION);
    assert_eq!(binding.text(), "const current = 1;");
}

#[test]
fn prober_misses_unbound_names() {
    let root = parse_ok(MODULE);
    assert!(LexicalProber::new(StructuralMatcher).probe(&root, "useSWR").is_none());
}
