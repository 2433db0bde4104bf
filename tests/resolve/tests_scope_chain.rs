#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::source_fixtures::*;
use crate::helpers::syntax_helpers::{identifier, parse_ok, word_offset};
use typed_props::resolve::{Resolver, find_definition, find_definition_named};
use typed_props::{SyntaxKind, SyntaxNode, TextSize};

fn starts_at(node: &SyntaxNode, source: &str, word: &str, nth: usize) -> bool {
    node.text_range().start() == TextSize::from(word_offset(source, word, nth) as u32)
}

#[test]
fn test_blog_page_bindings() {
    let root = parse_ok(BLOG_POST_PAGE);

    // `slug` in `getPost(slug, limit)` comes from `const { slug } = await params`
    let slug = find_definition(&identifier(&root, "slug", 2)).unwrap();
    assert_eq!(slug.kind(), SyntaxKind::IDENTIFIER);
    assert!(starts_at(&slug, BLOG_POST_PAGE, "slug", 1));

    let limit = find_definition(&identifier(&root, "limit", 1)).unwrap();
    assert_eq!(limit.kind(), SyntaxKind::LEXICAL_DECLARATION);
    assert_eq!(limit.text(), "const limit = 10;");

    let not_found = find_definition(&identifier(&root, "notFound", 1)).unwrap();
    assert_eq!(not_found.kind(), SyntaxKind::IMPORT_SPECIFIER);
    assert_eq!(not_found.text(), "notFound");

    // `params` is the shorthand inside the first parameter's object pattern
    let params = find_definition(&identifier(&root, "params", 2)).unwrap();
    assert_eq!(params.kind(), SyntaxKind::IDENTIFIER);
    assert!(starts_at(&params, BLOG_POST_PAGE, "params", 0));
    assert!(
        params
            .ancestors()
            .any(|n| n.kind() == SyntaxKind::REQUIRED_PARAMETER)
    );
}

#[test]
fn test_jsx_expression_resolves_to_local() {
    let root = parse_ok(BLOG_POST_PAGE);
    // occurrence 2 is the attribute name, 3 the value
    let post = find_definition(&identifier(&root, "post", 3)).unwrap();
    assert_eq!(post.kind(), SyntaxKind::LEXICAL_DECLARATION);
    assert!(post.text().to_string().starts_with("const post ="));
}

#[test]
fn test_undeclared_names_are_absent() {
    let root = parse_ok("export default function Page() {\n  console.log(window.location);\n  return <Article />;\n}\n");
    assert!(find_definition(&identifier(&root, "console", 0)).is_none());
    assert!(find_definition(&identifier(&root, "window", 0)).is_none());
    assert!(find_definition(&identifier(&root, "Article", 0)).is_none());
}

#[test]
fn test_callback_parameters_shadow_outer_scope() {
    let root = parse_ok(LIST_PAGE);

    let index = find_definition(&identifier(&root, "index", 2)).unwrap();
    assert!(starts_at(&index, LIST_PAGE, "index", 0));

    let item = find_definition(&identifier(&root, "item", 1)).unwrap();
    assert!(starts_at(&item, LIST_PAGE, "item", 0));

    let items = find_definition(&identifier(&root, "items", 1)).unwrap();
    assert!(starts_at(&items, LIST_PAGE, "items", 0));
}

#[test]
fn test_nearest_declaration_wins() {
    let source = "const theme = 'light';\n\nfunction Panel() {\n  const theme = 'dark';\n  return theme;\n}\n\nexport const current = theme;\n";
    let root = parse_ok(source);

    let inner = find_definition(&identifier(&root, "theme", 2)).unwrap();
    assert_eq!(inner.text(), "const theme = 'dark';");

    // the module-level use sees the whole file and finds the first match in
    // document order
    let outer = find_definition(&identifier(&root, "theme", 3)).unwrap();
    assert_eq!(outer.text(), "const theme = 'light';");
}

#[test]
fn test_sibling_scopes_are_not_isolated() {
    let source = "function a() {\n  const shared = 1;\n}\nfunction b() {\n  return shared;\n}\n";
    let root = parse_ok(source);
    let shared = find_definition(&identifier(&root, "shared", 1)).unwrap();
    assert_eq!(shared.text(), "const shared = 1;");
}

#[test]
fn test_explicit_name_overrides_identifier_text() {
    let root = parse_ok(ARROW_PAGE);
    let export = identifier(&root, "SettingsPage", 1);

    let state = find_definition_named(&export, "useState").unwrap();
    assert_eq!(state.kind(), SyntaxKind::IMPORT_SPECIFIER);

    let own = Resolver::new().resolve(&export, None).unwrap();
    assert_eq!(own.kind(), SyntaxKind::LEXICAL_DECLARATION);
    assert!(own.text().to_string().starts_with("const SettingsPage ="));
}

#[test]
fn test_array_destructured_state() {
    let root = parse_ok(ARROW_PAGE);
    // occurrence 1 is the `.tab` property access
    let tab = find_definition(&identifier(&root, "tab", 2)).unwrap();
    assert_eq!(tab.kind(), SyntaxKind::IDENTIFIER);
    assert!(starts_at(&tab, ARROW_PAGE, "tab", 0));

    let set_tab = find_definition(&identifier(&root, "setTab", 1)).unwrap();
    assert!(starts_at(&set_tab, ARROW_PAGE, "setTab", 0));
}

#[test]
fn test_repeated_resolution_is_stable() {
    let root = parse_ok(BLOG_POST_PAGE);
    let target = identifier(&root, "slug", 2);
    let results: Vec<_> = (0..3).map(|_| find_definition(&target)).collect();
    assert!(results[0].is_some());
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
