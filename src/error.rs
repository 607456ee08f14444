//! Error types for the texseq build orchestrator.
//!
//! Two layers: [`ParserError`] covers every configuration-grammar violation
//! and maps to its own process exit code, while [`Error`] aggregates the
//! remaining fatal conditions of a build run. Internal modules return typed
//! errors; filesystem and process boundaries attach context through
//! [`anyhow`] and surface here via the [`Error::Other`] variant.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for general failures (missing config, unknown program).
pub const EXIT_FAILURE: u8 = 1;
/// Process exit code for configuration-grammar violations.
pub const EXIT_PARSER: u8 = 2;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal condition encountered while resolving or running a build.
#[derive(Error, Debug)]
pub enum Error {
    /// The standalone configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The configuration text violates the grammar.
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// A sequence entry names a program with no matching spec.
    #[error("unknown program in sequence: '{name}'")]
    UnknownProgram {
        /// The unresolvable sequence entry.
        name: String,
    },

    /// A known configuration key carries a value of the wrong shape.
    #[error("configuration key '{key}': {detail}")]
    InvalidKey {
        /// Dotted path of the offending key (e.g. `programs.latex.command`).
        key: String,
        /// What was expected.
        detail: String,
    },

    /// Standalone mode without a `source` key.
    #[error("no source detected")]
    MissingSource,

    /// Context-wrapped I/O or environment failure.
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// The process exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parser(_) => EXIT_PARSER,
            _ => EXIT_FAILURE,
        }
    }
}

/// A violation of the restricted configuration grammar.
///
/// Every variant carries the 1-based line of the raw configuration text it
/// was detected on. Any of these aborts the parse; no partial table is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// An assignment with nothing before the `=`.
    #[error("line {line}: empty key")]
    EmptyKey {
        /// Line of the offending `=`.
        line: usize,
    },

    /// The same key assigned twice within one table.
    #[error("line {line}: duplicate key '{key}'")]
    DuplicateKey {
        /// The re-declared key.
        key: String,
        /// Line of the second declaration.
        line: usize,
    },

    /// A quoted string interrupted by a raw line break or end of input.
    #[error("line {line}: unterminated string")]
    UnterminatedString {
        /// Line the string started on.
        line: usize,
    },

    /// A numeric literal that does not convert.
    #[error("line {line}: invalid number '{text}'")]
    InvalidNumber {
        /// The literal as written.
        text: String,
        /// Line of the literal.
        line: usize,
    },

    /// Non-whitespace, non-comment characters left over after a value.
    #[error("line {line}: invalid primitive: unexpected characters after value")]
    InvalidPrimitive {
        /// Line of the trailing characters.
        line: usize,
    },

    /// A construct the restricted grammar does not admit.
    #[error("line {line}: unsupported construct: {what}")]
    Unsupported {
        /// What was encountered (array, inline table, boolean, ...).
        what: &'static str,
        /// Line of the construct.
        line: usize,
    },

    /// Line or input ended where a value was required.
    #[error("line {line}: expected a value")]
    ExpectedValue {
        /// Line of the incomplete assignment.
        line: usize,
    },

    /// A key not followed by `=`.
    #[error("line {line}: expected '=' after key")]
    ExpectedAssignment {
        /// Line of the bare key.
        line: usize,
    },
}
