//! Picking the ruleset a run classifies with.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::debug;

use ctype_rules::{setlocale, Active, ClassTable, Ruleset};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Tables built into ctypedump.
    Builtin,
    /// The platform C library.
    Host,
}

pub fn select(
    backend: Backend,
    locale: Option<&str>,
    table: Option<&Path>,
) -> Result<Box<dyn Ruleset>> {
    if let Some(path) = table {
        return Ok(Box::new(load_table(path)?.named("table")));
    }

    match backend {
        Backend::Builtin => {
            if let Some(name) = locale {
                let selected = setlocale(Some(name))
                    .with_context(|| format!("unknown builtin locale `{name}`"))?;
                debug!(requested = name, selected, "builtin locale selected");
            }
            Ok(Box::new(Active))
        }
        Backend::Host => host(locale),
    }
}

#[cfg(unix)]
fn host(locale: Option<&str>) -> Result<Box<dyn Ruleset>> {
    let host = match locale {
        Some(name) => crate::host::Host::with_locale(name)?,
        None => crate::host::Host::current(),
    };
    debug!(locale = host.name(), "host locale selected");
    Ok(Box::new(host))
}

#[cfg(not(unix))]
fn host(_locale: Option<&str>) -> Result<Box<dyn Ruleset>> {
    anyhow::bail!("the host ruleset needs a unix C library")
}

/// Reads a stored golden dump.
pub fn load_table(path: &Path) -> Result<ClassTable> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    ClassTable::from_dump(&text)
        .with_context(|| format!("{} is not a valid dump", path.display()))
}
