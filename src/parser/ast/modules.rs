use super::*;

// ============================================================================
// Imports
// ============================================================================

ast_node!(ImportStatement, IMPORT_STATEMENT);

impl ImportStatement {
    has_token_method!(is_type_only, TYPE_KW, "import type { A } from 'a'");

    /// Module specifier including its quotes, e.g. `'react'`
    pub fn source(&self) -> Option<String> {
        node_after_token(&self.0, SyntaxKind::FROM_KW)
            .or_else(|| {
                // side-effect import: `import './styles.css'`
                self.0
                    .children()
                    .find(|n| n.kind() == SyntaxKind::LITERAL)
            })
            .map(|n| n.text().to_string())
    }

    /// Default import binding, `React` in `import React, { useState } from 'react'`
    pub fn default_binding(&self) -> Option<Identifier> {
        self.0
            .children_with_tokens()
            .take_while(|e| e.as_token().is_none_or(|t| t.kind() != SyntaxKind::FROM_KW))
            .filter_map(|e| e.into_node())
            .find_map(Identifier::cast)
    }

    /// Specifiers of the `{ ... }` clause, in source order
    pub fn specifiers(&self) -> impl Iterator<Item = ImportSpecifier> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::NAMED_IMPORTS)
            .flat_map(|named| named.children().filter_map(ImportSpecifier::cast))
    }
}

ast_node!(ImportSpecifier, IMPORT_SPECIFIER);

impl ImportSpecifier {
    /// Name exported by the source module
    pub fn imported(&self) -> Option<Identifier> {
        self.0.children().find_map(Identifier::cast)
    }

    /// Local binding name: the alias after `as`, or the imported name itself
    pub fn local(&self) -> Option<Identifier> {
        node_after_token(&self.0, SyntaxKind::AS_KW)
            .and_then(Identifier::cast)
            .or_else(|| self.imported())
    }
}

// ============================================================================
// Exports
// ============================================================================

ast_node!(ExportStatement, EXPORT_STATEMENT);

impl ExportStatement {
    has_token_method!(is_default, DEFAULT_KW, "export default Page");

    /// The exported value of `export default <value>`
    pub fn default_value(&self) -> Option<SyntaxNode> {
        if !self.is_default() {
            return None;
        }
        node_after_token(&self.0, SyntaxKind::DEFAULT_KW)
    }

    /// The declaration of `export const ...`, `export function ...`, etc.
    pub fn declaration(&self) -> Option<SyntaxNode> {
        if self.is_default() {
            return None;
        }
        self.0.children().find(|n| {
            matches!(
                n.kind(),
                SyntaxKind::LEXICAL_DECLARATION
                    | SyntaxKind::VARIABLE_DECLARATION
                    | SyntaxKind::FUNCTION_DECLARATION
                    | SyntaxKind::CLASS_DECLARATION
                    | SyntaxKind::TYPE_ALIAS_DECLARATION
                    | SyntaxKind::INTERFACE_DECLARATION
                    | SyntaxKind::ENUM_DECLARATION
            )
        })
    }
}
