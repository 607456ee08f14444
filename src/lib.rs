//! Document-build orchestration engine.
//!
//! texseq resolves a build configuration — embedded in magic `% +++`
//! comment blocks of a source document, or read from a standalone
//! `texseq.toml` — and runs the configured, ordered sequence of external
//! typesetting programs against that document.
//!
//! The public API is organised leaf-first:
//!
//! - **[`config`]** — the restricted configuration grammar: scanner,
//!   comment-block extraction, and merge/resolution into a [`config::Config`]
//! - **[`invocation`]** — placeholder expansion into argument vectors
//! - **[`exec`]** — the external-process seam
//! - **[`runner`]** — ordered, synchronous sequence execution
//! - **[`commands`]** — top-level command orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod invocation;
pub mod logging;
pub mod runner;
