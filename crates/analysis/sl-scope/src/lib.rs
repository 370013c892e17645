//! Lexical scope analysis for Scopelight
//!
//! Consumes the lowered syntax tree and produces a scope graph: a tree of
//! scopes holding declared variables, identifier references, and resolution
//! links from each reference to its defining scope.

pub mod analyze;
pub mod graph;

pub use analyze::analyze;
pub use graph::{Reference, ScopeData, ScopeGraph, ScopeId, ScopeKind, Variable};
