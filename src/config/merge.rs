//! Merge of a scanned table into a base configuration.
//!
//! Top-level keys replace their [`Config`](super::Config) counterpart
//! wholesale — there is no recursive merge, so a table carrying `programs`
//! drops every default program not re-declared. After replacement the
//! command-fallback rule runs against the merged configuration: the `latex`
//! program picks up the engine field (so the built-in default engine applies
//! even when nothing was declared), and every other program whose command is
//! still empty picks up the value of an identically named top-level scalar
//! key.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

use super::value::{RawTable, Value};
use super::{Config, ProgramSpec};

/// Merge `table` into `config`, replacing top-level fields and applying the
/// command-fallback rule.
///
/// Unrecognized scalar keys that match no program name are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] when a known key (or a program-table
/// entry) carries a value of the wrong shape.
pub fn merge(config: &mut Config, table: &RawTable) -> Result<()> {
    for (key, value) in table {
        match key.as_str() {
            "latex" => config.latex = require_str(key, value)?,
            "source" => config.source = Some(require_str(key, value)?),
            "sequence" => config.sequence = sequence_entries(value)?,
            "max_repeat" => {
                let number = value.as_num().ok_or_else(|| Error::InvalidKey {
                    key: key.clone(),
                    detail: "expected a number".to_string(),
                })?;
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let repeat = number.max(0.0) as u32;
                config.max_repeat = repeat;
            }
            "programs" => config.programs = program_table(value)?,
            _ => {}
        }
    }

    // Command fallback, read from the merged configuration: the engine
    // field covers the `latex` program — the default engine must apply even
    // without any user keys — and a top-level scalar named after any other
    // declared program supplies that program's command, unless one is
    // already set.
    for (name, spec) in &mut config.programs {
        if !spec.command.is_empty() {
            continue;
        }
        if name.as_str() == "latex" {
            spec.command = config.latex.clone();
        } else if let Some(value) = table.get(name)
            && let Some(text) = value.to_text()
        {
            spec.command = text;
        }
    }

    Ok(())
}

fn require_str(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| Error::InvalidKey {
            key: key.to_string(),
            detail: "expected a string".to_string(),
        })
}

fn sequence_entries(value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| Error::InvalidKey {
        key: "sequence".to_string(),
        detail: "expected an array of program names".to_string(),
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(ToString::to_string)
                .ok_or_else(|| Error::InvalidKey {
                    key: "sequence".to_string(),
                    detail: "expected an array of program names".to_string(),
                })
        })
        .collect()
}

fn program_table(value: &Value) -> Result<BTreeMap<String, ProgramSpec>> {
    let entries = value.as_table().ok_or_else(|| Error::InvalidKey {
        key: "programs".to_string(),
        detail: "expected a table of program specs".to_string(),
    })?;

    let mut programs = BTreeMap::new();
    for (name, entry) in entries {
        let spec = entry.as_table().ok_or_else(|| Error::InvalidKey {
            key: format!("programs.{name}"),
            detail: "expected a table".to_string(),
        })?;
        let command = match spec.get("command") {
            None => String::new(),
            Some(value) => value.as_str().map(ToString::to_string).ok_or_else(|| {
                Error::InvalidKey {
                    key: format!("programs.{name}.command"),
                    detail: "must be a string".to_string(),
                }
            })?,
        };
        let arg = match spec.get("arg") {
            None => String::new(),
            Some(value) => value.as_str().map(ToString::to_string).ok_or_else(|| {
                Error::InvalidKey {
                    key: format!("programs.{name}.arg"),
                    detail: "must be a string".to_string(),
                }
            })?,
        };
        programs.insert(name.clone(), ProgramSpec { command, arg });
    }
    Ok(programs)
}
