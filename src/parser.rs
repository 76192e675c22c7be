//! Argument grammar
//!
//! Tool flags come first, as `--key` or `--key=value`. The first token
//! without the `--` prefix is the target program, and it and everything
//! after it belong to the target's own invocation; none of those tokens are
//! interpreted here.

use crate::error::{ArgsError, Result};
use crate::flags::{Flag, FLAG_PREFIX, VALUE_SEPARATOR};
use crate::table::ArgTable;

/// Output of the grammar pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Defaults plus every recognised flag
    pub table: ArgTable,
    /// Position of the target program in the token list
    pub program_index: usize,
}

/// A single flag token split into key and optional value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagToken<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// True if the token is a tool flag
pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Split a flag token (including its prefix) into key and value
pub fn split_flag(token: &str) -> Result<FlagToken<'_>> {
    let body = token
        .strip_prefix(FLAG_PREFIX)
        .ok_or_else(|| ArgsError::syntax(token, "missing flag prefix"))?;

    let mut parts = body.split(VALUE_SEPARATOR);
    let key = parts.next().unwrap_or_default();
    let value = parts.next();
    if parts.next().is_some() {
        return Err(ArgsError::syntax(
            token,
            format!("more than one '{}' separator", VALUE_SEPARATOR),
        ));
    }

    Ok(FlagToken { key, value })
}

/// Resolve a flag token against the vocabulary
pub fn recognise(token: &str) -> Result<(Flag, Option<String>)> {
    let FlagToken { key, value } = split_flag(token)?;
    let flag = Flag::from_cli_key(key).ok_or_else(|| ArgsError::UnknownFlag(key.to_string()))?;
    Ok((flag, value.map(str::to_string)))
}

/// Run the grammar over the raw tokens
///
/// The returned table starts from the default seed. Fails with
/// [`ArgsError::MissingTarget`] when every token is a flag.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<ParsedArgs> {
    let mut table = ArgTable::with_defaults();
    let mut program_index = 0;

    while program_index < tokens.len() {
        let token = tokens[program_index].as_ref();
        if !is_flag(token) {
            break;
        }

        let (flag, value) = recognise(token)?;
        if !flag.expansion().is_empty() {
            tracing::debug!("expanding macro flag {}", flag);
        }
        table.insert_expanded(flag, value);
        program_index += 1;
    }

    if program_index >= tokens.len() {
        return Err(ArgsError::MissingTarget);
    }

    tracing::debug!(
        program_index,
        target = tokens[program_index].as_ref(),
        "found target program"
    );

    Ok(ParsedArgs {
        table,
        program_index,
    })
}
