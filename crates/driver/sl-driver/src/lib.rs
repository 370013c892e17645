//! Pipeline driver
//!
//! This crate wires the pipeline together: parse the source, build the scope
//! graph, annotate. One call in, one token sequence (or one typed error) out.

use miette::Diagnostic;
use sl_annotate::{AnnotateError, Token, annotate};
use sl_parser::ParseError;
use sl_scope::analyze;
use std::path::Path;
use thiserror::Error;

/// Failure of a single annotation run
#[derive(Error, Debug, Diagnostic)]
pub enum ScopifyError {
    /// The source is not syntactically valid; no tokens are produced
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// The scope graph violated an annotator invariant
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
}

/// Produce the annotation token sequence for one source unit
///
/// A parse error fails the whole run: no partial or best-effort annotation
/// is attempted for broken source. Batch callers handle the error per unit
/// instead of losing the whole batch.
///
/// # Errors
///
/// [`ScopifyError::Parse`] on invalid source, [`ScopifyError::Annotate`] on
/// a corrupted scope graph (a bug, not an input problem).
pub fn scopify(source: &str) -> Result<Vec<Token>, ScopifyError> {
    let parse = sl_parser::parse_source(source);

    if let Some(error) = parse.errors.into_iter().next() {
        return Err(ScopifyError::Parse(error));
    }
    let syntax = parse.syntax.ok_or_else(|| {
        ScopifyError::Parse(ParseError::ParseFailed {
            reason: "parser produced no syntax tree".to_string(),
        })
    })?;

    let graph = analyze(&syntax);
    Ok(annotate(&graph, &parse.comments)?)
}

/// Read a file and produce its annotation tokens
///
/// # Errors
///
/// As [`scopify`]; unreadable files surface as a parse-layer I/O error.
pub fn scopify_file(path: impl AsRef<Path>) -> Result<Vec<Token>, ScopifyError> {
    let source = std::fs::read_to_string(path).map_err(|err| {
        ScopifyError::Parse(ParseError::IoError {
            message: err.to_string(),
        })
    })?;
    scopify(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_scopify_simple_declaration() {
        let tokens = scopify("var a = 1;").unwrap();

        // Program boundary plus the bold definition; the initializer's write
        // reference collapses into the definition
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start, tokens[0].end, tokens[0].level), (1, 11, 0));
        assert_eq!((tokens[1].start, tokens[1].end, tokens[1].level), (5, 6, 0));
        assert_eq!(tokens[1].style, sl_annotate::Style::Bold);
    }

    #[test]
    fn test_scopify_rejects_broken_source() {
        let result = scopify("function f( {");
        assert!(matches!(result, Err(ScopifyError::Parse(_))));
    }

    #[test]
    fn test_scopify_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "var a = 1;").unwrap();

        let tokens = scopify_file(file.path()).unwrap();
        assert_eq!(tokens, scopify("var a = 1;").unwrap());
    }

    #[test]
    fn test_scopify_missing_file_is_an_error() {
        let result = scopify_file("/nonexistent/path.js");
        assert!(matches!(
            result,
            Err(ScopifyError::Parse(ParseError::IoError { .. }))
        ));
    }
}
