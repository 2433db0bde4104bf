use super::*;
use rstest::rstest;

/// Kinds of the direct child nodes of `node`
fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|n| n.kind()).collect()
}

fn first_of_kind(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in tree:\n{root:#?}"))
}

#[rstest]
#[case::declarations("const a = 1;\nlet b;\nvar c = a + b * 2;")]
#[case::imports("import React, { useState as useS, type FC } from 'react';\nimport * as path from \"path\";\nimport './globals.css';")]
#[case::exports("export const x = 1;\nexport { a as b, c };\nexport * from './x';\nexport default x;")]
#[case::functions("async function load(id: string, opts?: Options): Promise<Data> { return await fetch(id); }")]
#[case::arrows("const f = async ({ a, b: [c] }: Props = {}): Promise<void> => { await a(c); };\nconst g = x => x * 2;")]
#[case::classes("export default class Store<T> extends Base implements Api {\n  private items: T[] = [];\n  static create() { return new Store(); }\n  get size() { return this.items.length; }\n}")]
#[case::control_flow("for (const item of items) { if (!item) continue; }\nfor (let i = 0; i < n; i++) {}\nwhile (x) x--;\ntry { f(); } catch (e) { g(e); } finally { h(); }\nswitch (k) { case 1: break; default: k = 2; }")]
#[case::types("type Props = { params: Promise<{ slug: string }>; children?: React.ReactNode };\ninterface A extends B { readonly [key: string]: number | undefined }")]
#[case::jsx("export default function Page() {\n  return (\n    <main className=\"p-4\">\n      <Header title={title} {...rest} />\n      <>{items.map(i => <li key={i.id}>{i.name}</li>)}</>\n    </main>\n  );\n}")]
#[case::operators("const v = a?.b ?? c!.d[0] >> 2 >>> 1 ** 2;\nconst w = typeof x === 'string' ? x as string : `${y}`;")]
fn parses_without_errors(#[case] source: &str) {
    let parse = parse(source);
    assert!(parse.ok(), "errors: {:?}\n{:#?}", parse.errors, parse.syntax());
}

#[rstest]
#[case("const a = 1; // trailing\n/* block */ function f() {}")]
#[case("export default function Page({ params }: { params: { id: string } }) {\n  return <div>{params.id}</div>;\n}\n")]
#[case("const = ;\nlet x = (;")]
fn tree_is_lossless(#[case] source: &str) {
    let parse = parse(source);
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn recovers_from_errors() {
    let parse = parse("const = 1;\nconst ok = 2;");
    assert!(!parse.ok());
    let root = parse.syntax();
    let ok = root
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::IDENTIFIER)
        .any(|n| n.text() == "ok");
    assert!(ok, "later declaration should still parse:\n{root:#?}");
}

#[test]
fn import_statement_is_flat() {
    let root = parse("import React, { useState } from 'react';").syntax();
    let import = first_of_kind(&root, SyntaxKind::IMPORT_STATEMENT);
    assert_eq!(
        child_kinds(&import),
        vec![
            SyntaxKind::IDENTIFIER,
            SyntaxKind::NAMED_IMPORTS,
            SyntaxKind::LITERAL
        ]
    );
}

#[test]
fn import_source_accepts_metavariable() {
    let parse = parse("import * as $NAME from $SOURCE");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    let import = first_of_kind(&parse.syntax(), SyntaxKind::IMPORT_STATEMENT);
    assert_eq!(
        child_kinds(&import),
        vec![SyntaxKind::NAMESPACE_IMPORT, SyntaxKind::IDENTIFIER]
    );
}

#[test]
fn aliased_import_specifier() {
    let root = parse("import { a as b } from 'm';").syntax();
    let spec = first_of_kind(&root, SyntaxKind::IMPORT_SPECIFIER);
    assert_eq!(
        child_kinds(&spec),
        vec![SyntaxKind::IDENTIFIER, SyntaxKind::IDENTIFIER]
    );
    assert_eq!(spec.text(), "a as b");
}

#[test]
fn object_keys_are_property_identifiers() {
    let root = parse("const o = { a, b: c, d() {} };").syntax();
    let object = first_of_kind(&root, SyntaxKind::OBJECT);
    assert_eq!(
        child_kinds(&object),
        vec![
            SyntaxKind::IDENTIFIER,
            SyntaxKind::PAIR,
            SyntaxKind::METHOD_DEFINITION
        ]
    );
    let pair = first_of_kind(&object, SyntaxKind::PAIR);
    assert_eq!(
        child_kinds(&pair),
        vec![SyntaxKind::PROPERTY_IDENTIFIER, SyntaxKind::IDENTIFIER]
    );
}

#[test]
fn object_pattern_members() {
    let root = parse("const { a: b, c, d = 1, ...rest } = obj;").syntax();
    let pattern = first_of_kind(&root, SyntaxKind::OBJECT_PATTERN);
    assert_eq!(
        child_kinds(&pattern),
        vec![
            SyntaxKind::PAIR_PATTERN,
            SyntaxKind::IDENTIFIER,
            SyntaxKind::OBJECT_ASSIGNMENT_PATTERN,
            SyntaxKind::REST_PATTERN
        ]
    );
    let pair = first_of_kind(&pattern, SyntaxKind::PAIR_PATTERN);
    assert_eq!(
        child_kinds(&pair),
        vec![SyntaxKind::PROPERTY_IDENTIFIER, SyntaxKind::IDENTIFIER]
    );
}

#[rstest]
#[case("const f = (a) => a;")]
#[case("const f = async (a, b) => a;")]
#[case("const f = (a: A): B => a;")]
#[case("const f = (): Promise<{ ok: boolean }> => go();")]
#[case("const f = a => a;")]
#[case("const f = async a => a;")]
fn arrow_functions(#[case] source: &str) {
    let parse = parse(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    let declarator = first_of_kind(&parse.syntax(), SyntaxKind::VARIABLE_DECLARATOR);
    assert_eq!(
        child_kinds(&declarator),
        vec![SyntaxKind::IDENTIFIER, SyntaxKind::ARROW_FUNCTION]
    );
}

#[rstest]
#[case("const f = (a);")]
#[case("const f = (a, b) ? c : d;")]
#[case("call(a, (b), c);")]
fn parenthesized_is_not_arrow(#[case] source: &str) {
    let parse = parse(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    assert!(
        parse
            .syntax()
            .descendants()
            .all(|n| n.kind() != SyntaxKind::ARROW_FUNCTION)
    );
}

#[test]
fn parameters_and_type_annotation() {
    let root = parse("function Page({ params }: Props, extra?: number) {}").syntax();
    let params = first_of_kind(&root, SyntaxKind::FORMAL_PARAMETERS);
    assert_eq!(
        child_kinds(&params),
        vec![SyntaxKind::REQUIRED_PARAMETER, SyntaxKind::OPTIONAL_PARAMETER]
    );
    let first = first_of_kind(&params, SyntaxKind::REQUIRED_PARAMETER);
    assert_eq!(
        child_kinds(&first),
        vec![SyntaxKind::OBJECT_PATTERN, SyntaxKind::TYPE_ANNOTATION]
    );
    let annotation = first_of_kind(&first, SyntaxKind::TYPE_ANNOTATION);
    assert_eq!(annotation.text(), ": Props");
}

#[test]
fn type_names_are_not_identifiers() {
    let root = parse("function f(a: Props, b: A.B<C>) {}").syntax();
    let names: Vec<_> = root
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::IDENTIFIER)
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(names, vec!["f", "a", "b"]);
}

#[rstest]
#[case::function("export default function Page() {}", SyntaxKind::FUNCTION_DECLARATION)]
#[case::async_function("export default async function Page() {}", SyntaxKind::FUNCTION_DECLARATION)]
#[case::anonymous("export default function () {}", SyntaxKind::FUNCTION_EXPRESSION)]
#[case::arrow("export default (props: P) => null;", SyntaxKind::ARROW_FUNCTION)]
#[case::identifier("export default Page;", SyntaxKind::IDENTIFIER)]
#[case::class("export default class Foo {}", SyntaxKind::CLASS_DECLARATION)]
fn export_default_values(#[case] source: &str, #[case] expected: SyntaxKind) {
    let parse = parse(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    let export = first_of_kind(&parse.syntax(), SyntaxKind::EXPORT_STATEMENT);
    assert_eq!(child_kinds(&export), vec![expected]);
}

#[test]
fn contextual_keywords_as_names() {
    let parse = parse("const type = 1;\nlet async = 2;\nconst from = of + as;");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    let names: Vec<_> = parse
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::IDENTIFIER)
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(names, vec!["type", "async", "from", "of", "as"]);
}

#[test]
fn nodes_never_start_with_trivia() {
    let root = parse("  const   a =  /* c */ b ;\n\n function  f ( x ) { }").syntax();
    for node in root.descendants().filter(|n| n.kind() != SyntaxKind::SOURCE_FILE) {
        let first = node.first_token().map(|t| t.kind());
        assert!(
            !first.is_some_and(SyntaxKind::is_trivia),
            "{:?} starts with trivia",
            node.kind()
        );
    }
}

#[test]
fn binary_chains_are_left_associative() {
    let root = parse("a - b - c;").syntax();
    let outer = first_of_kind(&root, SyntaxKind::BINARY_EXPRESSION);
    assert_eq!(outer.text(), "a - b - c");
    let inner = outer
        .children()
        .next()
        .map(|n| n.text().to_string());
    assert_eq!(inner.as_deref(), Some("a - b"));
}

#[test]
fn jsx_component_names_are_identifiers() {
    let root = parse("const el = <Layout.Main><Sidebar /></Layout.Main>;").syntax();
    let names: Vec<_> = root
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::IDENTIFIER)
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(names, vec!["el", "Layout", "Sidebar", "Layout"]);
}

#[test]
fn metavariable_templates_parse() {
    for template in [
        "function $NAME($$$PARAMS) { $$$BODY }",
        "class $NAME { $$$BODY }",
        "const { $$$PROPS } = $VALUE",
        "let [$$$ITEMS] = $VALUE",
        "({ $NAME($$$PARAMS) { $$$BODY } })",
        "export default $ARG",
    ] {
        let parse = parse(template);
        assert!(parse.ok(), "{template}: {:?}", parse.errors);
    }
}

#[rstest]
#[case::leading_jsdoc("/**\n * Blog post page.\n * @param props route props\n */\nexport default function Page(props: Props) {}")]
#[case::inside_parameters("function f(/* c */ a: number, b /* d */) {}")]
#[case::starred_close("/** banner **/\nconst a = 1;")]
fn block_comments_are_trivia(#[case] source: &str) {
    let parse = parse(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
}
