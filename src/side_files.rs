//! Loaders for the newline-delimited side files named by flags
//!
//! - purity file: one method identifier per line, kept verbatim
//! - prefix blacklist: one prefix per line, trimmed
//!
//! Blank and whitespace-only lines are skipped in both.

use crate::error::{ArgsError, Result};
use std::fs;
use std::path::Path;

fn read_lines(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ArgsError::file_access(path, e))
}

/// Read method identifiers from a purity file
pub fn read_purity_methods(path: &Path) -> Result<Vec<String>> {
    let contents = read_lines(path)?;
    let methods: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    tracing::debug!(
        "read {} purity methods from {}",
        methods.len(),
        path.display()
    );
    Ok(methods)
}

/// Read trimmed prefixes from a blacklist file
pub fn read_prefix_blacklist(path: &Path) -> Result<Vec<String>> {
    let contents = read_lines(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
