//! Scope-to-annotation transformation
//!
//! Turns a scope graph plus a comment list into the flat token sequence a
//! depth-coloring highlighter consumes: every scope boundary, every variable
//! definition (bold), every reference (at the level of its defining scope),
//! and every comment (at the reserved level -1), shifted into the display
//! layer's 1-based convention.

pub mod error;
pub mod level;
pub mod symbols;
pub mod token;

pub use error::AnnotateError;
pub use level::{ScopeLevels, assign_levels};
pub use token::{COMMENT_LEVEL, GLOBAL_LEVEL, Style, Token};

use sl_scope::ScopeGraph;
use sl_span::Span;

/// Transform a scope graph and comment list into the final token sequence
///
/// Output is grouped by category: all scope boundaries, then each scope's
/// symbols in scope order, then comments in source order. It is deliberately
/// not sorted by position; a consumer writing into a position-indexed buffer
/// does not care, and anyone else can sort. Offsets in the result are
/// 1-based inclusive-start.
///
/// # Errors
///
/// Propagates the annotator's invariant violations; see [`AnnotateError`].
pub fn annotate(graph: &ScopeGraph, comments: &[Span]) -> Result<Vec<Token>, AnnotateError> {
    let levels = assign_levels(graph)?;

    let mut boundaries = Vec::new();
    let mut symbol_tokens = Vec::new();
    for (id, scope) in graph.iter() {
        // The synthetic name scope is leveled but has no presence of its own
        if scope.is_function_expression_name() {
            continue;
        }
        let level = *levels.get(id).ok_or(AnnotateError::UnleveledParent {
            start: scope.block.start,
            end: scope.block.end,
        })?;
        boundaries.push(Token::new(
            scope.block.start,
            scope.block.end,
            level,
            Style::Normal,
        ));
        symbol_tokens.extend(symbols::scope_symbols(graph, &levels, id, level)?);
    }

    let mut tokens = boundaries;
    tokens.append(&mut symbol_tokens);
    tokens.extend(
        comments
            .iter()
            .map(|comment| Token::new(comment.start, comment.end, COMMENT_LEVEL, Style::Normal)),
    );

    // The display layer counts from 1; this is the only unit conversion in
    // the pipeline and it happens exactly once, here.
    Ok(tokens.into_iter().map(Token::into_one_based).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_scope::ScopeKind;

    fn empty_graph() -> ScopeGraph {
        ScopeGraph::new(Span::new(0, 100))
    }

    fn span_matches(token: &Token, start: u32, end: u32) -> bool {
        token.start == start && token.end == end
    }

    #[test]
    fn test_root_scope_is_level_zero() {
        let graph = empty_graph();
        let levels = assign_levels(&graph).unwrap();
        assert_eq!(levels[graph.root()], 0);
    }

    #[test]
    fn test_nested_scopes_increment_levels() {
        let mut graph = empty_graph();
        let outer = graph.create_child(graph.root(), ScopeKind::Function, Span::new(10, 90));
        let inner = graph.create_child(outer, ScopeKind::Function, Span::new(20, 80));

        let levels = assign_levels(&graph).unwrap();
        assert_eq!(levels[outer], 1);
        assert_eq!(levels[inner], 2);
    }

    #[test]
    fn test_function_expression_name_scope_collapses() {
        let mut graph = empty_graph();
        let name_scope = graph.create_child(
            graph.root(),
            ScopeKind::FunctionExpressionName,
            Span::new(10, 90),
        );
        let body = graph.create_child(name_scope, ScopeKind::Function, Span::new(10, 90));

        let levels = assign_levels(&graph).unwrap();
        // The synthetic layer is leveled but its child inherits rather than
        // nesting one deeper
        assert_eq!(levels[name_scope], 1);
        assert_eq!(levels[body], 1);
    }

    #[test]
    fn test_name_scope_emits_no_boundary_and_child_absorbs_its_variable() {
        let mut graph = empty_graph();
        let name_scope = graph.create_child(
            graph.root(),
            ScopeKind::FunctionExpressionName,
            Span::new(10, 90),
        );
        let body = graph.create_child(name_scope, ScopeKind::Function, Span::new(10, 90));
        graph.define(name_scope, "f", Span::new(19, 20));
        graph.add_reference(body, "f", Span::new(40, 41));
        graph.resolve_references();

        let tokens = annotate(&graph, &[]).unwrap();

        // Boundaries: global + body only
        let boundaries: Vec<&Token> = tokens
            .iter()
            .filter(|token| span_matches(token, 11, 91))
            .collect();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].level, 1);

        // The name definition surfaces through the body scope, bold, level 1
        let definition = tokens
            .iter()
            .find(|token| token.style == Style::Bold)
            .unwrap();
        assert_eq!((definition.start, definition.end), (20, 21));
        assert_eq!(definition.level, 1);

        // The inner reference lands on the collapsed level, not a deeper one
        let reference = tokens
            .iter()
            .find(|token| span_matches(token, 41, 42))
            .unwrap();
        assert_eq!(reference.level, 1);
        assert_eq!(reference.style, Style::Normal);
    }

    #[test]
    fn test_declare_with_initializer_deduplicates() {
        let mut graph = empty_graph();
        let root = graph.root();
        graph.define(root, "a", Span::new(4, 5));
        graph.add_reference(root, "a", Span::new(4, 5));
        graph.resolve_references();

        let tokens = annotate(&graph, &[]).unwrap();

        // Boundary + one bold definition; the duplicate reference is dropped
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].style, Style::Bold);
        assert_eq!((tokens[1].start, tokens[1].end), (5, 6));
    }

    #[test]
    fn test_reference_at_different_range_is_kept() {
        let mut graph = empty_graph();
        let root = graph.root();
        graph.define(root, "a", Span::new(4, 5));
        graph.add_reference(root, "a", Span::new(10, 11));
        graph.resolve_references();

        let tokens = annotate(&graph, &[]).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].style, Style::Normal);
        assert_eq!(tokens[2].level, 0);
    }

    #[test]
    fn test_unresolved_reference_falls_back_to_global_level() {
        let mut graph = empty_graph();
        let scope = graph.create_child(graph.root(), ScopeKind::Function, Span::new(10, 90));
        graph.add_reference(scope, "undeclared", Span::new(30, 40));
        graph.resolve_references();

        let tokens = annotate(&graph, &[]).unwrap();
        let reference = tokens
            .iter()
            .find(|token| span_matches(token, 31, 41))
            .unwrap();
        assert_eq!(reference.level, GLOBAL_LEVEL);
    }

    #[test]
    fn test_comments_carry_the_reserved_level() {
        let graph = empty_graph();
        let tokens = annotate(&graph, &[Span::new(0, 5)]).unwrap();

        let comment = tokens.last().unwrap();
        assert_eq!((comment.start, comment.end), (1, 6));
        assert_eq!(comment.level, COMMENT_LEVEL);
        assert_eq!(comment.style, Style::Normal);

        // No other token uses the sentinel
        assert!(
            tokens[..tokens.len() - 1]
                .iter()
                .all(|token| token.level != COMMENT_LEVEL)
        );
    }

    #[test]
    fn test_output_is_shifted_by_one() {
        let graph = empty_graph();
        let tokens = annotate(&graph, &[]).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].start, tokens[0].end), (1, 101));
    }
}
