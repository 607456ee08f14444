//! Ordered execution of the resolved program sequence.
//!
//! The runner walks `Config::sequence` strictly in order and blocks on each
//! external program before starting the next. A failing program is warned
//! about and the sequence continues — only an *unresolvable* sequence entry
//! stops the run. Steps whose captured output asks for another pass (the
//! conventional rerun request of typesetting engines) are repeated, bounded
//! by `Config::max_repeat`.

use crate::config::{Config, ProgramSpec};
use crate::error::{Error, Result};
use crate::exec::{ExecResult, Executor};
use crate::invocation::Invocation;
use crate::logging;

/// Marker typesetting engines print when an auxiliary file changed and the
/// document needs another pass.
const RERUN_MARKER: &str = "Rerun to get";

/// Executes a resolved configuration against one target document.
pub struct SequenceRunner<'a> {
    config: &'a Config,
    executor: &'a dyn Executor,
    dry_run: bool,
}

impl<'a> SequenceRunner<'a> {
    /// Create a runner over `config`, spawning processes through `executor`.
    #[must_use]
    pub const fn new(config: &'a Config, executor: &'a dyn Executor, dry_run: bool) -> Self {
        Self {
            config,
            executor,
            dry_run,
        }
    }

    /// Run every step of the sequence, in order, against `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProgram`] when a sequence entry has no
    /// matching program spec; earlier steps will already have run.
    pub fn run(&self, target: &str) -> Result<()> {
        for name in &self.config.sequence {
            let spec =
                self.config
                    .programs
                    .get(name)
                    .ok_or_else(|| Error::UnknownProgram {
                        name: name.clone(),
                    })?;

            if spec.command.is_empty() {
                tracing::debug!("skipping '{name}': no command configured");
                continue;
            }

            self.run_step(name, spec, target);
        }
        Ok(())
    }

    /// Run one step, repeating it while its output requests another pass.
    ///
    /// The exit status is inspected but deliberately not propagated: a
    /// failing external program does not halt the sequence.
    fn run_step(&self, name: &str, spec: &ProgramSpec, target: &str) {
        let invocation = Invocation::build(spec, target);

        let mut attempts = 0;
        loop {
            attempts += 1;

            if self.dry_run {
                logging::dry_run(&invocation.to_string());
                return;
            }

            tracing::info!("running: {invocation}");
            match self.executor.run(&invocation.program, &invocation.args) {
                Ok(result) => {
                    log_captured(name, &result);
                    if !result.success {
                        let code = result
                            .code
                            .map_or_else(|| "signal".to_string(), |c| c.to_string());
                        tracing::warn!("'{name}' exited with status {code}; continuing");
                    }
                    if result.success
                        && requests_rerun(&result)
                        && attempts < self.config.max_repeat
                    {
                        tracing::info!("'{name}' requested another pass");
                        continue;
                    }
                }
                Err(e) => tracing::warn!("could not run '{name}': {e:#}; continuing"),
            }
            return;
        }
    }
}

impl std::fmt::Debug for SequenceRunner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceRunner")
            .field("config", &self.config)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

/// Whether the captured output asks for another typesetting pass.
fn requests_rerun(result: &ExecResult) -> bool {
    result.stdout.contains(RERUN_MARKER) || result.stderr.contains(RERUN_MARKER)
}

/// Forward a step's captured output to the debug log.
fn log_captured(name: &str, result: &ExecResult) {
    if !result.stdout.is_empty() {
        tracing::debug!("{name} stdout:\n{}", result.stdout.trim_end());
    }
    if !result.stderr.is_empty() {
        tracing::debug!("{name} stderr:\n{}", result.stderr.trim_end());
    }
}
