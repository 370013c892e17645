//! Generic syntax tree types for scope analysis
//!
//! This crate provides the lowered syntax tree the pipeline consumes and the
//! trait that connects it to a concrete tree-sitter grammar.

use anyhow::Result;
use sl_span::Span;
use std::fmt;

/// Generic syntax tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// The kind of this node
    pub kind: SyntaxKind,
    /// Source location
    pub span: Span,
    /// Source text (for identifiers and other leaves)
    pub text: String,
    /// Field name assigned by the parent node, if any (e.g. `name`, `body`)
    pub field: Option<&'static str>,
    /// Child nodes
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Finds the first direct child carrying the given field name
    pub fn child_by_field(&self, field: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.field == Some(field))
    }
}

/// Language-independent node kinds relevant to lexical scoping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    /// Root of the syntax tree
    Root,
    /// Function declaration statement
    FunctionDeclaration,
    /// Function expression (possibly named)
    FunctionExpression,
    /// Arrow function
    ArrowFunction,
    /// Method definition inside a class or object
    MethodDefinition,
    /// Class declaration statement
    ClassDeclaration,
    /// Class expression
    ClassExpression,
    /// Single variable declarator (`name = value` inside a declaration)
    VariableDeclarator,
    /// Formal parameter list
    FormalParameters,
    /// Braced statement block
    StatementBlock,
    /// Catch clause of a try statement
    CatchClause,
    /// `for (... in ...)` / `for (... of ...)` statement, which may declare
    /// its loop variable inline
    ForInStatement,
    /// Identifier in an expression or binding position
    Identifier,
    /// Property name (member access, object key)
    PropertyIdentifier,
    /// Shorthand object property in an expression (`{ a }` reads `a`)
    ShorthandProperty,
    /// Shorthand object property in a pattern (`{ a } = x` binds `a`)
    ShorthandPropertyPattern,
    /// Object destructuring pattern
    ObjectPattern,
    /// Array destructuring pattern
    ArrayPattern,
    /// Pattern with a default value (`a = 1` in a binding position)
    AssignmentPattern,
    /// Rest pattern (`...a`)
    RestPattern,
    /// Comment
    Comment,
    /// Unknown/language-specific node
    Unknown(String),
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(formatter, "root"),
            Self::FunctionDeclaration => write!(formatter, "function_declaration"),
            Self::FunctionExpression => write!(formatter, "function_expression"),
            Self::ArrowFunction => write!(formatter, "arrow_function"),
            Self::MethodDefinition => write!(formatter, "method_definition"),
            Self::ClassDeclaration => write!(formatter, "class_declaration"),
            Self::ClassExpression => write!(formatter, "class_expression"),
            Self::VariableDeclarator => write!(formatter, "variable_declarator"),
            Self::FormalParameters => write!(formatter, "formal_parameters"),
            Self::StatementBlock => write!(formatter, "statement_block"),
            Self::CatchClause => write!(formatter, "catch_clause"),
            Self::ForInStatement => write!(formatter, "for_in_statement"),
            Self::Identifier => write!(formatter, "identifier"),
            Self::PropertyIdentifier => write!(formatter, "property_identifier"),
            Self::ShorthandProperty => write!(formatter, "shorthand_property"),
            Self::ShorthandPropertyPattern => write!(formatter, "shorthand_property_pattern"),
            Self::ObjectPattern => write!(formatter, "object_pattern"),
            Self::ArrayPattern => write!(formatter, "array_pattern"),
            Self::AssignmentPattern => write!(formatter, "assignment_pattern"),
            Self::RestPattern => write!(formatter, "rest_pattern"),
            Self::Comment => write!(formatter, "comment"),
            Self::Unknown(name) => write!(formatter, "unknown({name})"),
        }
    }
}

/// Trait for language-specific parsers
pub trait Language: Send + Sync + 'static {
    /// Name of the language
    fn name(&self) -> &'static str;

    /// File extensions this language handles
    fn extensions(&self) -> &[&'static str];

    /// tree-sitter language instance
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Parse source code to concrete syntax tree
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails
    fn parse(&self, source: &str) -> Result<tree_sitter::Tree>;

    /// Convert tree-sitter node to generic syntax node
    fn lower_node(&self, node: &tree_sitter::Node, source: &str) -> SyntaxNode;
}
