//! Invariant-violation errors for the annotator

use thiserror::Error;

/// A broken invariant in the scope graph handed to the annotator
///
/// These are programming errors, not user errors: a well-formed scope graph
/// never triggers them. The invocation aborts rather than emitting wrong
/// tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// A scope needed its parent's level before the parent had one
    #[error("scope at bytes {start}..{end} has an unleveled parent")]
    UnleveledParent {
        /// Start of the scope's block range
        start: u32,
        /// End of the scope's block range
        end: u32,
    },

    /// A reference resolved to a scope absent from the level table
    #[error("reference at bytes {start}..{end} resolves to an unknown scope")]
    UnknownScope {
        /// Start of the reference range
        start: u32,
        /// End of the reference range
        end: u32,
    },
}
