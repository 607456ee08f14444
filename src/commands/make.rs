//! Command: resolve a configuration and build the document.

use std::path::Path;

use crate::cli::Cli;
use crate::config::{CONFIG_FILE, Config};
use crate::error::{Error, Result};
use crate::exec::SystemExecutor;
use crate::logging;
use crate::runner::SequenceRunner;

/// Run the build: resolve the configuration, then execute the sequence.
///
/// With filenames on the command line, the first one is built using its
/// embedded configuration. Without any, the standalone configuration file
/// is loaded and must name a `source`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved or a sequence
/// entry is unresolvable.
pub fn run(cli: &Cli) -> Result<()> {
    let (config, target) = resolve(cli)?;

    logging::stage(&format!("Building {target}"));
    tracing::debug!("engine: {}", config.latex);
    tracing::debug!("sequence: {}", config.sequence.join(", "));

    let executor = SystemExecutor;
    SequenceRunner::new(&config, &executor, cli.dry_run).run(&target)
}

/// Resolve the configuration and the target document for this invocation.
fn resolve(cli: &Cli) -> Result<(Config, String)> {
    if let Some(first) = cli.files.first() {
        if cli.files.len() > 1 {
            tracing::debug!("multiple files given; building only the first");
        }
        let config = Config::from_document(first)?;
        return Ok((config, first.to_string_lossy().into_owned()));
    }

    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| Path::new(CONFIG_FILE).to_path_buf());
    let config = Config::from_file(&path)?;
    let source = config.source.clone().ok_or(Error::MissingSource)?;
    Ok((config, source))
}
