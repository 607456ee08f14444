//! Expansion of a program's argument template into a concrete invocation.
//!
//! Two placeholder tokens are recognized: `%T` expands to the full given
//! filename and `%B` to its basename — the filename without directory prefix
//! and trailing extension (the last path separator and the last `.` delimit
//! the stripped portions). The template is split on whitespace *before*
//! substitution, so a filename containing spaces or shell metacharacters
//! stays a single argument: programs are invoked directly, never through a
//! shell.

use std::fmt;

use crate::config::ProgramSpec;

/// Placeholder expanded to the full filename.
pub const PLACEHOLDER_TARGET: &str = "%T";
/// Placeholder expanded to the filename without directory and extension.
pub const PLACEHOLDER_BASE: &str = "%B";

/// A fully expanded external command: program name plus argument vector.
///
/// Renders as `command ++ " " ++ args` for logging:
///
/// ```
/// use texseq::config::ProgramSpec;
/// use texseq::invocation::Invocation;
///
/// let spec = ProgramSpec {
///     command: "foo".to_string(),
///     arg: "%T".to_string(),
/// };
/// assert_eq!(Invocation::build(&spec, "paper.tex").to_string(), "foo paper.tex");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to spawn.
    pub program: String,
    /// Arguments, one element per template token.
    pub args: Vec<String>,
}

impl Invocation {
    /// Expand `spec.arg` against `target` and pair it with `spec.command`.
    #[must_use]
    pub fn build(spec: &ProgramSpec, target: &str) -> Self {
        let base = basename(target);
        let args = spec
            .arg
            .split_whitespace()
            .map(|token| {
                token
                    .replace(PLACEHOLDER_TARGET, target)
                    .replace(PLACEHOLDER_BASE, &base)
            })
            .collect();
        Self {
            program: spec.command.clone(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The filename without its directory prefix and trailing extension.
fn basename(target: &str) -> String {
    std::path::Path::new(target)
        .file_stem()
        .map_or_else(|| target.to_string(), |stem| stem.to_string_lossy().into_owned())
}
