//! Definition and reference classification

use crate::error::AnnotateError;
use crate::level::ScopeLevels;
use crate::token::{GLOBAL_LEVEL, Style, Token};
use sl_scope::{ScopeGraph, ScopeId};
use sl_span::Span;

/// Emit the symbol tokens for one scope: bold definitions first, then the
/// references that survive the declare-with-initializer collapse
///
/// `level` is the emitting scope's own nesting level. Definitions absorbed
/// from a function-expression name parent surface here, at this level.
///
/// # Errors
///
/// Returns [`AnnotateError::UnknownScope`] if a reference resolves to a
/// scope the level table has never seen.
pub fn scope_symbols(
    graph: &ScopeGraph,
    levels: &ScopeLevels,
    id: ScopeId,
    level: i32,
) -> Result<Vec<Token>, AnnotateError> {
    let scope = &graph[id];
    let mut tokens = Vec::new();
    let mut defined: Vec<Span> = Vec::new();

    // A named function expression's own name lives in the synthetic parent
    // scope; it renders as if declared in this one.
    let absorbed = scope
        .parent
        .filter(|&parent| graph[parent].is_function_expression_name())
        .map(|parent| graph[parent].variables.values());

    for variable in absorbed
        .into_iter()
        .flatten()
        .chain(scope.variables.values())
    {
        for def in &variable.defs {
            defined.push(*def);
            tokens.push(Token::new(def.start, def.end, level, Style::Bold));
        }
    }

    for reference in &scope.references {
        // A name declared with an initializer is reported both as a
        // definition and as a reference at the identical range; keep only
        // the definition.
        if defined.iter().any(|def| *def == reference.span) {
            continue;
        }
        let reference_level = match reference.resolved {
            Some(target) => *levels.get(target).ok_or(AnnotateError::UnknownScope {
                start: reference.span.start,
                end: reference.span.end,
            })?,
            None => GLOBAL_LEVEL,
        };
        tokens.push(Token::new(
            reference.span.start,
            reference.span.end,
            reference_level,
            Style::Normal,
        ));
    }

    Ok(tokens)
}
