use super::*;
use crate::parser::parse;

fn first<T: AstNode>(source: &str) -> T {
    let parsed = parse(source);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    parsed
        .syntax()
        .descendants()
        .find_map(T::cast)
        .unwrap_or_else(|| panic!("no matching node in `{source}`"))
}

#[test]
fn test_ast_import_bindings() {
    let import: ImportStatement =
        first("import React, { useState, useEffect as effect } from 'react';");

    assert_eq!(import.source().as_deref(), Some("'react'"));
    assert_eq!(import.default_binding().map(|i| i.text()), Some("React".into()));
    assert!(!import.is_type_only());

    let locals: Vec<_> = import
        .specifiers()
        .filter_map(|s| s.local())
        .map(|i| i.text())
        .collect();
    assert_eq!(locals, vec!["useState", "effect"]);

    let imported: Vec<_> = import
        .specifiers()
        .filter_map(|s| s.imported())
        .map(|i| i.text())
        .collect();
    assert_eq!(imported, vec!["useState", "useEffect"]);
}

#[test]
fn test_ast_side_effect_import() {
    let import: ImportStatement = first("import './globals.css';");
    assert_eq!(import.source().as_deref(), Some("'./globals.css'"));
    assert!(import.default_binding().is_none());
    assert_eq!(import.specifiers().count(), 0);
}

#[test]
fn test_ast_type_only_import() {
    let import: ImportStatement = first("import type { Metadata } from 'next';");
    assert!(import.is_type_only());
}

#[test]
fn test_ast_export_default_value() {
    let export: ExportStatement = first("export default Page;");
    assert!(export.is_default());
    let value = export.default_value().unwrap();
    assert_eq!(value.kind(), SyntaxKind::IDENTIFIER);
    assert_eq!(value.text(), "Page");
    assert!(export.declaration().is_none());
}

#[test]
fn test_ast_export_declaration() {
    let export: ExportStatement = first("export const revalidate = 60;");
    assert!(!export.is_default());
    assert!(export.default_value().is_none());
    let decl = export.declaration().and_then(VariableDeclaration::cast).unwrap();
    assert!(decl.is_const());
}

#[test]
fn test_ast_function_parameters() {
    let func: FunctionLike =
        first("export default async function Page({ params }: Props, extra = 1) {}");

    assert!(func.is_async());
    assert!(!func.is_arrow());
    assert_eq!(func.name().map(|n| n.text()), Some("Page".into()));

    let params: Vec<_> = func.parameters().unwrap().params().collect();
    assert_eq!(params.len(), 2);

    assert!(params[0].is_required());
    assert_eq!(
        params[0].pattern().map(|p| p.kind()),
        Some(SyntaxKind::OBJECT_PATTERN)
    );
    let ty = params[0].type_annotation().and_then(|a| a.ty()).unwrap();
    assert_eq!(ty.kind(), SyntaxKind::TYPE_IDENTIFIER);
    assert_eq!(ty.text(), "Props");

    assert!(!params[1].is_required());
    assert_eq!(params[1].default_value().map(|v| v.text().to_string()), Some("1".into()));
}

#[test]
fn test_ast_arrow_function() {
    let func: FunctionLike = first("const Page = (props: PageProps<'/'>) => null;");
    assert!(func.is_arrow());
    assert!(func.name().is_none());
    assert!(func.bare_parameter().is_none());

    let first_param = func.parameters().and_then(|p| p.first()).unwrap();
    let ty = first_param.type_annotation().and_then(|a| a.ty()).unwrap();
    assert_eq!(ty.kind(), SyntaxKind::GENERIC_TYPE);
}

#[test]
fn test_ast_bare_arrow_parameter() {
    let func: FunctionLike = first("items.map(item => item.id);");
    assert_eq!(func.bare_parameter().map(|p| p.text()), Some("item".into()));
    assert!(func.parameters().is_none());
}

#[test]
fn test_ast_return_type() {
    let func: FunctionLike = first("function f(): string { return ''; }");
    let ret = func.return_type().and_then(|r| r.ty()).unwrap();
    assert_eq!(ret.text(), "string");
}

#[test]
fn test_ast_variable_declarator() {
    let decl: VariableDeclaration = first("let a = 1, b;");
    assert!(!decl.is_const());
    assert!(decl.single_declarator().is_none());

    let declarators: Vec<_> = decl.declarators().collect();
    assert_eq!(declarators[0].name().map(|n| n.text()), Some("a".into()));
    assert_eq!(
        declarators[0].value().map(|v| v.text().to_string()),
        Some("1".into())
    );
    assert!(declarators[1].value().is_none());
}

#[test]
fn test_ast_destructuring_declarator_has_no_name() {
    let decl: VariableDeclaration = first("const { a } = obj;");
    let declarator = decl.single_declarator().unwrap();
    assert!(declarator.name().is_none());
    assert_eq!(
        declarator.target().map(|t| t.kind()),
        Some(SyntaxKind::OBJECT_PATTERN)
    );
}

#[test]
fn test_ast_class_declaration() {
    let class: ClassDeclaration = first("abstract class Store {}");
    assert!(class.is_abstract());
    assert_eq!(class.name().map(|n| n.text()), Some("Store".into()));
}

#[test]
fn test_identifier_at() {
    let source = "const value = other + value;";
    let root = parse(source).syntax();

    let offset = |needle: &str, nth: usize| {
        let idx = source.match_indices(needle).nth(nth).unwrap().0;
        TextSize::from(idx as u32)
    };

    let ident = identifier_at(&root, offset("other", 0)).unwrap();
    assert_eq!(ident.text(), "other");

    let second = identifier_at(&root, offset("value", 1)).unwrap();
    assert_eq!(second.text(), "value");
    assert_eq!(
        second.syntax().text_range().start(),
        offset("value", 1)
    );

    // end of a name still finds it
    let end = offset("other", 0) + TextSize::of("other");
    assert_eq!(identifier_at(&root, end).map(|i| i.text()), Some("other".into()));

    // `const` keyword is not an identifier
    assert!(identifier_at(&root, TextSize::from(1)).is_none());
}
