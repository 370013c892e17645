//! JavaScript language adapter
//!
//! Lowers the tree-sitter JavaScript grammar into the generic syntax tree.

use anyhow::Result;
use sl_span::Span;
use sl_syntax::{Language, SyntaxKind, SyntaxNode};
use tree_sitter::{Parser, Tree};

/// JavaScript language implementation
pub struct JavaScriptLanguage;

impl JavaScriptLanguage {
    /// Creates a new JavaScript language adapter
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaScriptLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for JavaScriptLanguage {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &[&'static str] {
        &["js", "mjs", "cjs"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_javascript::LANGUAGE.into())?;

        parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("tree-sitter parse failed"))
    }

    fn lower_node(&self, node: &tree_sitter::Node, source: &str) -> SyntaxNode {
        let kind = match node.kind() {
            "program" => SyntaxKind::Root,
            "function_declaration" | "generator_function_declaration" => {
                SyntaxKind::FunctionDeclaration
            }
            // Older grammar versions call function expressions plain "function".
            "function_expression" | "function" | "generator_function" => {
                SyntaxKind::FunctionExpression
            }
            "arrow_function" => SyntaxKind::ArrowFunction,
            "method_definition" => SyntaxKind::MethodDefinition,
            "class_declaration" => SyntaxKind::ClassDeclaration,
            "class" => SyntaxKind::ClassExpression,
            "variable_declarator" => SyntaxKind::VariableDeclarator,
            "formal_parameters" => SyntaxKind::FormalParameters,
            "statement_block" => SyntaxKind::StatementBlock,
            "catch_clause" => SyntaxKind::CatchClause,
            "for_in_statement" => SyntaxKind::ForInStatement,
            "identifier" => SyntaxKind::Identifier,
            "property_identifier" | "private_property_identifier" => {
                SyntaxKind::PropertyIdentifier
            }
            "shorthand_property_identifier" => SyntaxKind::ShorthandProperty,
            "shorthand_property_identifier_pattern" => SyntaxKind::ShorthandPropertyPattern,
            "object_pattern" => SyntaxKind::ObjectPattern,
            "array_pattern" => SyntaxKind::ArrayPattern,
            "assignment_pattern" => SyntaxKind::AssignmentPattern,
            "rest_pattern" => SyntaxKind::RestPattern,
            "comment" => SyntaxKind::Comment,
            other => SyntaxKind::Unknown(other.to_string()),
        };

        let span = Span::new(node.start_byte() as u32, node.end_byte() as u32);

        // Extract source text for this node
        let text = source[node.start_byte()..node.end_byte()].to_string();

        let mut children = Vec::new();
        let mut cursor = node.walk();

        if cursor.goto_first_child() {
            loop {
                let field = cursor.field_name();
                let child_node = cursor.node();
                let mut child = self.lower_node(&child_node, source);
                child.field = field;
                children.push(child);

                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        SyntaxNode {
            kind,
            span,
            text,
            field: None,
            children,
        }
    }
}
