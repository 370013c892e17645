//! Builds the scope graph from a lowered syntax tree
//!
//! Scoping follows the function-level model: functions and catch clauses open
//! scopes, declarators bind in the nearest enclosing scope, and a named
//! function expression sees its own name through a synthetic scope holding
//! nothing else.

use crate::graph::{ScopeGraph, ScopeId, ScopeKind};
use sl_syntax::{SyntaxKind, SyntaxNode};

/// Analyze a lowered syntax tree into a scope graph with resolved references
pub fn analyze(root: &SyntaxNode) -> ScopeGraph {
    let mut analyzer = ScopeAnalyzer {
        graph: ScopeGraph::new(root.span),
    };

    let global = analyzer.graph.root();
    for child in &root.children {
        analyzer.visit(child, global);
    }

    let mut graph = analyzer.graph;
    // Resolution runs after the full walk so later declarations in the same
    // scope are visible to earlier references (hoisting).
    graph.resolve_references();
    graph
}

/// Tree walker that populates the scope graph
struct ScopeAnalyzer {
    graph: ScopeGraph,
}

impl ScopeAnalyzer {
    fn visit(&mut self, node: &SyntaxNode, scope: ScopeId) {
        match &node.kind {
            SyntaxKind::FunctionDeclaration => {
                // The declared name is visible in the surrounding scope
                if let Some(name) = node.child_by_field("name") {
                    self.graph.define(scope, &name.text, name.span);
                }
                let body_scope = self
                    .graph
                    .create_child(scope, ScopeKind::Function, node.span);
                self.visit_function(node, body_scope);
            }
            SyntaxKind::FunctionExpression => {
                let outer = match node.child_by_field("name") {
                    Some(name) => {
                        let name_scope = self.graph.create_child(
                            scope,
                            ScopeKind::FunctionExpressionName,
                            node.span,
                        );
                        self.graph.define(name_scope, &name.text, name.span);
                        name_scope
                    }
                    None => scope,
                };
                let body_scope = self
                    .graph
                    .create_child(outer, ScopeKind::Function, node.span);
                self.visit_function(node, body_scope);
            }
            SyntaxKind::ArrowFunction | SyntaxKind::MethodDefinition => {
                let body_scope = self
                    .graph
                    .create_child(scope, ScopeKind::Function, node.span);
                self.visit_function(node, body_scope);
            }
            SyntaxKind::ClassDeclaration => {
                if let Some(name) = node.child_by_field("name") {
                    self.graph.define(scope, &name.text, name.span);
                }
                for child in &node.children {
                    if child.field != Some("name") {
                        self.visit(child, scope);
                    }
                }
            }
            SyntaxKind::ClassExpression => {
                for child in &node.children {
                    if child.field != Some("name") {
                        self.visit(child, scope);
                    }
                }
            }
            SyntaxKind::VariableDeclarator => {
                self.visit_declarator(node, scope);
            }
            SyntaxKind::ForInStatement => {
                // `for (var k in obj)` declares its loop variable inline; the
                // grammar hangs the bare pattern straight off the statement
                let declares = node.children.iter().any(|child| {
                    matches!(&child.kind, SyntaxKind::Unknown(name)
                        if name == "var" || name == "let" || name == "const")
                });
                if let Some(left) = node.child_by_field("left") {
                    if declares {
                        self.bind_pattern(left, scope);
                    } else {
                        self.visit(left, scope);
                    }
                }
                if let Some(right) = node.child_by_field("right") {
                    self.visit(right, scope);
                }
                if let Some(body) = node.child_by_field("body") {
                    self.visit(body, scope);
                }
            }
            SyntaxKind::CatchClause => {
                let catch_scope = self.graph.create_child(scope, ScopeKind::Catch, node.span);
                if let Some(parameter) = node.child_by_field("parameter") {
                    self.bind_pattern(parameter, catch_scope);
                }
                if let Some(body) = node.child_by_field("body") {
                    self.visit(body, catch_scope);
                }
            }
            // A pattern identifier reaching this path is a destructuring
            // assignment target, which is a write reference
            SyntaxKind::Identifier
            | SyntaxKind::ShorthandProperty
            | SyntaxKind::ShorthandPropertyPattern => {
                self.graph.add_reference(scope, &node.text, node.span);
            }
            // Property names and comments never participate in scoping
            SyntaxKind::PropertyIdentifier | SyntaxKind::Comment => {}
            _ => {
                for child in &node.children {
                    self.visit(child, scope);
                }
            }
        }
    }

    /// Bind parameters and walk the body of any function-like node
    fn visit_function(&mut self, node: &SyntaxNode, body_scope: ScopeId) {
        if let Some(parameters) = node.child_by_field("parameters") {
            self.bind_pattern(parameters, body_scope);
        } else if let Some(parameter) = node.child_by_field("parameter") {
            // Arrow functions may take a single bare identifier
            self.bind_pattern(parameter, body_scope);
        }
        if let Some(body) = node.child_by_field("body") {
            self.visit(body, body_scope);
        }
    }

    fn visit_declarator(&mut self, node: &SyntaxNode, scope: ScopeId) {
        let Some(name) = node.child_by_field("name") else {
            return;
        };
        self.bind_pattern(name, scope);

        if let Some(value) = node.child_by_field("value") {
            // A declarator with an initializer reports the bound name twice:
            // once as a definition and once as a write reference at the same
            // position. The annotator collapses the pair.
            let mut bound = Vec::new();
            pattern_identifiers(name, &mut bound);
            for ident in bound {
                self.graph.add_reference(scope, &ident.text, ident.span);
            }
            self.visit(value, scope);
        }
    }

    /// Define every identifier a binding pattern introduces
    ///
    /// Default values inside the pattern evaluate as ordinary expressions in
    /// the scope being bound into.
    fn bind_pattern(&mut self, node: &SyntaxNode, scope: ScopeId) {
        match &node.kind {
            SyntaxKind::Identifier | SyntaxKind::ShorthandPropertyPattern => {
                self.graph.define(scope, &node.text, node.span);
            }
            SyntaxKind::AssignmentPattern => {
                if let Some(left) = node.child_by_field("left") {
                    self.bind_pattern(left, scope);
                }
                if let Some(right) = node.child_by_field("right") {
                    self.visit(right, scope);
                }
            }
            _ => {
                for child in &node.children {
                    self.bind_pattern(child, scope);
                }
            }
        }
    }
}

/// Collect the identifier nodes a binding pattern introduces, skipping
/// default-value expressions
fn pattern_identifiers<'tree>(node: &'tree SyntaxNode, out: &mut Vec<&'tree SyntaxNode>) {
    match &node.kind {
        SyntaxKind::Identifier | SyntaxKind::ShorthandPropertyPattern => out.push(node),
        SyntaxKind::AssignmentPattern => {
            if let Some(left) = node.child_by_field("left") {
                pattern_identifiers(left, out);
            }
        }
        _ => {
            for child in &node.children {
                pattern_identifiers(child, out);
            }
        }
    }
}
