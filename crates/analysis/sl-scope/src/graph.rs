//! Scope graph built during analysis

use indexmap::IndexMap;
use la_arena::{Arena, Idx};
use rustc_hash::FxBuildHasher;
use sl_span::Span;
use std::ops::Index;

/// Unique identifier for a scope
pub type ScopeId = Idx<ScopeData>;

/// Kind of scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Outermost scope of the source unit
    Global,
    /// Function body scope (declaration, expression, arrow, method)
    Function,
    /// Synthetic scope that only binds a named function expression's own name
    FunctionExpressionName,
    /// Catch clause scope
    Catch,
}

/// One declared name, with a range for every site where it is (re)defined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The declared name
    pub name: String,
    /// Name occurrence ranges at each definition site
    pub defs: Vec<Span>,
}

/// One identifier occurrence that is not itself a definition site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The referenced name
    pub name: String,
    /// Range of the occurrence
    pub span: Span,
    /// Scope whose definition this reference resolves to, if any
    pub resolved: Option<ScopeId>,
}

/// A single scope in the graph
#[derive(Debug, Clone)]
pub struct ScopeData {
    /// Parent scope (None for the global scope)
    pub parent: Option<ScopeId>,
    /// Kind of scope
    pub kind: ScopeKind,
    /// Range of the construct introducing the scope
    pub block: Span,
    /// Variables declared in this scope, in declaration order
    pub variables: IndexMap<String, Variable, FxBuildHasher>,
    /// References occurring in this scope, in source order
    pub references: Vec<Reference>,
}

impl ScopeData {
    fn new(parent: Option<ScopeId>, kind: ScopeKind, block: Span) -> Self {
        Self {
            parent,
            kind,
            block,
            variables: IndexMap::default(),
            references: Vec::new(),
        }
    }

    /// Whether this is the synthetic function-expression name scope
    pub fn is_function_expression_name(&self) -> bool {
        matches!(self.kind, ScopeKind::FunctionExpressionName)
    }
}

/// Tree of all scopes in a source unit
///
/// Scopes are allocated parent-before-child, so iterating in allocation order
/// always visits a parent before any of its children.
#[derive(Debug, Clone)]
pub struct ScopeGraph {
    scopes: Arena<ScopeData>,
    root: ScopeId,
}

impl ScopeGraph {
    /// Creates a graph containing only the global scope
    #[must_use]
    pub fn new(block: Span) -> Self {
        let mut scopes = Arena::new();
        let root = scopes.alloc(ScopeData::new(None, ScopeKind::Global, block));
        Self { scopes, root }
    }

    /// The global scope
    pub fn root(&self) -> ScopeId {
        self.root
    }

    /// Create a child scope
    pub fn create_child(&mut self, parent: ScopeId, kind: ScopeKind, block: Span) -> ScopeId {
        self.scopes.alloc(ScopeData::new(Some(parent), kind, block))
    }

    /// Define a name in a scope, recording one more definition site
    ///
    /// Redeclaring an existing name appends to its definition list.
    pub fn define(&mut self, scope: ScopeId, name: &str, def: Span) {
        self.scopes[scope]
            .variables
            .entry(name.to_string())
            .or_insert_with(|| Variable {
                name: name.to_string(),
                defs: Vec::new(),
            })
            .defs
            .push(def);
    }

    /// Record an unresolved reference in a scope
    pub fn add_reference(&mut self, scope: ScopeId, name: &str, span: Span) {
        self.scopes[scope].references.push(Reference {
            name: name.to_string(),
            span,
            resolved: None,
        });
    }

    /// Resolve a name from a scope, walking up the parent chain
    ///
    /// Returns the scope that defines the name, or None if no enclosing scope
    /// does (an unresolved/global access).
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if self.scopes[id].variables.contains_key(name) {
                return Some(id);
            }
            current = self.scopes[id].parent;
        }
        None
    }

    /// Resolve every recorded reference against the finished graph
    ///
    /// Run after the whole tree has been walked so that names declared later
    /// in their scope still resolve (hoisting).
    pub fn resolve_references(&mut self) {
        let ids: Vec<ScopeId> = self.scopes.iter().map(|(id, _)| id).collect();
        for id in ids {
            let targets: Vec<Option<ScopeId>> = self.scopes[id]
                .references
                .iter()
                .map(|reference| self.resolve(id, &reference.name))
                .collect();
            for (reference, target) in self.scopes[id].references.iter_mut().zip(targets) {
                reference.resolved = target;
            }
        }
    }

    /// Iterate all scopes in allocation (parent-before-child) order
    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &ScopeData)> {
        self.scopes.iter()
    }

    /// Number of scopes in the graph
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the graph is empty (it never is: the global scope always exists)
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Index<ScopeId> for ScopeGraph {
    type Output = ScopeData;

    fn index(&self, id: ScopeId) -> &ScopeData {
        &self.scopes[id]
    }
}
