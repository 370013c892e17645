//! Nesting level assignment

use crate::error::AnnotateError;
use la_arena::ArenaMap;
use sl_scope::{ScopeGraph, ScopeId};

/// Level of every scope, keyed by scope identity
pub type ScopeLevels = ArenaMap<ScopeId, i32>;

/// Assign a nesting level to every scope in one top-down pass
///
/// The global scope sits at level 0 and each nested scope at its parent's
/// level plus one, except that the child of a function-expression name scope
/// inherits the parent's level unchanged: the synthetic binding layer must
/// not show up as an extra visual nesting step. The name scope itself is
/// still leveled so that references resolving into it land on the level its
/// child renders at.
///
/// Levels go into a separate table rather than onto the scopes, so the pass
/// needs no already-leveled guard.
///
/// # Errors
///
/// Returns [`AnnotateError::UnleveledParent`] if a scope is visited before
/// its parent. Scope graphs allocate parent-before-child, so this indicates
/// a corrupted graph.
pub fn assign_levels(graph: &ScopeGraph) -> Result<ScopeLevels, AnnotateError> {
    let mut levels = ScopeLevels::default();

    for (id, scope) in graph.iter() {
        let level = match scope.parent {
            None => 0,
            Some(parent) => {
                let parent_level =
                    *levels
                        .get(parent)
                        .ok_or(AnnotateError::UnleveledParent {
                            start: scope.block.start,
                            end: scope.block.end,
                        })?;
                if graph[parent].is_function_expression_name() {
                    parent_level
                } else {
                    parent_level + 1
                }
            }
        };
        levels.insert(id, level);
    }

    Ok(levels)
}
