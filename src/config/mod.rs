//! Build configuration: data model, defaults, and loading.
//!
//! A [`Config`] starts from built-in defaults and is produced by exactly one
//! merge — either from the configuration embedded in a source document
//! ([`Config::from_document`]) or from a standalone configuration file
//! ([`Config::from_file`]). It is immutable from then on; the sequence
//! runner only reads it.

pub mod extract;
pub mod merge;
pub mod scanner;
pub mod value;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;

use crate::error::{Error, Result};

/// Well-known name of the standalone configuration file.
pub const CONFIG_FILE: &str = "texseq.toml";

/// Default typesetting engine, used as the command fallback for the default
/// `latex` program.
pub const DEFAULT_ENGINE: &str = "lualatex";

/// How to invoke one external program of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpec {
    /// Executable name. Empty means declared but disabled: the step is
    /// skipped without spawning a process.
    pub command: String,
    /// Argument template; `%T` expands to the full filename, `%B` to the
    /// filename without directory prefix and extension.
    pub arg: String,
}

/// The resolved build configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default engine name, consumed by the command-fallback rule for the
    /// `latex` program.
    pub latex: String,
    /// Ordered program names to execute. Duplicates are permitted; order is
    /// execution order.
    pub sequence: Vec<String>,
    /// Upper bound on total runs of a step whose output requests a rerun.
    pub max_repeat: u32,
    /// Document to build when no filename is supplied on the command line.
    pub source: Option<String>,
    /// Declared programs, keyed by sequence name.
    pub programs: BTreeMap<String, ProgramSpec>,
}

impl Default for Config {
    fn default() -> Self {
        let programs = BTreeMap::from([
            (
                "latex".to_string(),
                ProgramSpec {
                    command: String::new(),
                    arg: "%T".to_string(),
                },
            ),
            (
                "dvipdf".to_string(),
                ProgramSpec {
                    command: String::new(),
                    arg: "%B".to_string(),
                },
            ),
        ]);
        Self {
            latex: DEFAULT_ENGINE.to_string(),
            sequence: vec!["latex".to_string(), "dvipdf".to_string()],
            max_repeat: 3,
            source: None,
            programs,
        }
    }
}

impl Config {
    /// Resolve the configuration embedded in the magic comment blocks of
    /// `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, the embedded text
    /// violates the grammar, or the merge rejects a value shape.
    pub fn from_document(document: &Path) -> Result<Self> {
        let raw = extract::extract(document)?;
        Self::from_raw(&raw)
    }

    /// Resolve the configuration from a standalone file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if `path` does not exist, and
    /// otherwise the same errors as [`Config::from_document`].
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration file {}", path.display()))?;
        Self::from_raw(&raw)
    }

    /// Scan `raw` and merge the result over the defaults.
    fn from_raw(raw: &str) -> Result<Self> {
        let table = scanner::scan(raw)?;
        let mut config = Self::default();
        merge::merge(&mut config, &table)?;
        Ok(config)
    }
}
