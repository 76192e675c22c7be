//! The argument table: recognised flag → optional raw value
//!
//! A key present with `None` is a presence flag. An absent key is unset and
//! falls back to its default when the typed settings are resolved.

use crate::defaults;
use crate::flags::Flag;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgTable {
    entries: BTreeMap<Flag, Option<String>>,
}

impl ArgTable {
    /// Empty table, no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the default entries
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (flag, value) in defaults::seed() {
            table.insert(flag, Some(value.to_string()));
        }
        table
    }

    /// Insert a value, replacing any earlier one for the same flag
    pub fn insert(&mut self, flag: Flag, value: Option<String>) {
        if self.entries.remove(&flag).is_some() {
            tracing::trace!("overwriting earlier value for {}", flag);
        }
        self.entries.insert(flag, value);
    }

    /// Insert a flag along with everything it expands into
    ///
    /// Expanded flags carry no value; the macro flag keeps the given one.
    pub fn insert_expanded(&mut self, flag: Flag, value: Option<String>) {
        for primitive in flag.expansion() {
            self.insert(*primitive, None);
        }
        self.insert(flag, value);
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.entries.contains_key(&flag)
    }

    /// `None` when the flag is unset, `Some(None)` for a presence flag
    pub fn get(&self, flag: Flag) -> Option<Option<&str>> {
        self.entries.get(&flag).map(|value| value.as_deref())
    }

    /// Raw value of a flag, `None` when unset or valueless
    pub fn value(&self, flag: Flag) -> Option<&str> {
        self.get(flag).flatten()
    }

    pub fn remove(&mut self, flag: Flag) -> Option<Option<String>> {
        self.entries.remove(&flag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Flag, Option<&str>)> {
        self.entries
            .iter()
            .map(|(flag, value)| (*flag, value.as_deref()))
    }
}
