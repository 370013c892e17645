//! End-to-end tests for the annotation pipeline
//!
//! The actual suites live in `tests/`; this crate only carries shared
//! helpers.

use sl_annotate::Token;
use std::fmt::Write;

/// Render tokens one per line for snapshot comparisons
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "({}, {}, {}, {:?})",
            token.start, token.end, token.level, token.style
        );
    }
    out
}
