//! Closed flag vocabulary for the front end
//!
//! Command-line keys are matched against a fixed vocabulary instead of any
//! kind of runtime introspection. Keys are stored in their internal form, with
//! `_` as the word separator; the command line uses `-`.

use serde::Serialize;

/// Prefix that marks a token as a tool flag
pub const FLAG_PREFIX: &str = "--";

/// Separator between a flag key and its value
pub const VALUE_SEPARATOR: char = '=';

/// Word separator on the command line and in the internal vocabulary
pub const CLI_WORD_SEPARATOR: char = '-';
pub const KEY_WORD_SEPARATOR: char = '_';

/// Every flag the front end understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    ArraysOnly,
    AutoDetectPure,
    Comparability,
    ComparabilityFile,
    DontCatchExceptions,
    DtraceAppend,
    EmitNullaryInfo,
    EnumUnderlyingValues,
    ForceUnixNewline,
    FriendlyDecTypes,
    GenerateComparability,
    IsEnumFlags,
    IsPropertyFlags,
    IsReadonlyFlags,
    LinkedLists,
    NestingDepth,
    OmitDecType,
    OmitParentDecType,
    OmitVar,
    OutputFolder,
    OutputLocation,
    PortableDll,
    PptOmitPattern,
    PptSelectPattern,
    PurityFile,
    PurityPrefixBlacklist,
    RobustMode,
    SampleStart,
    SaveAndRun,
    SaveProgram,
    StdVisibility,
    Verbose,
    VsFlags,
    Wpf,
}

/// How a flag's raw value is coerced into a typed setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Presence means true; a boolean string is honoured, anything else ignored
    Switch,
    /// Presence means true; the value must be a boolean string if given
    StrictSwitch,
    /// Non-negative integer
    Integer,
    /// Regular expression
    Pattern,
    /// Filesystem path
    Path,
    /// Free-form text
    Text,
}

/// Every flag, in vocabulary order
const ALL_FLAGS: [Flag; 34] = [
    Flag::ArraysOnly,
    Flag::AutoDetectPure,
    Flag::Comparability,
    Flag::ComparabilityFile,
    Flag::DontCatchExceptions,
    Flag::DtraceAppend,
    Flag::EmitNullaryInfo,
    Flag::EnumUnderlyingValues,
    Flag::ForceUnixNewline,
    Flag::FriendlyDecTypes,
    Flag::GenerateComparability,
    Flag::IsEnumFlags,
    Flag::IsPropertyFlags,
    Flag::IsReadonlyFlags,
    Flag::LinkedLists,
    Flag::NestingDepth,
    Flag::OmitDecType,
    Flag::OmitParentDecType,
    Flag::OmitVar,
    Flag::OutputFolder,
    Flag::OutputLocation,
    Flag::PortableDll,
    Flag::PptOmitPattern,
    Flag::PptSelectPattern,
    Flag::PurityFile,
    Flag::PurityPrefixBlacklist,
    Flag::RobustMode,
    Flag::SampleStart,
    Flag::SaveAndRun,
    Flag::SaveProgram,
    Flag::StdVisibility,
    Flag::Verbose,
    Flag::VsFlags,
    Flag::Wpf,
];

/// Primitive flags the `vs-flags` macro unfolds into (each without a value)
pub const VS_FLAGS_EXPANSION: [Flag; 5] = [
    Flag::Comparability,
    Flag::StdVisibility,
    Flag::IsEnumFlags,
    Flag::IsPropertyFlags,
    Flag::IsReadonlyFlags,
];

impl Flag {
    /// Look up a flag by its internal (underscore-separated) key
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_FLAGS.into_iter().find(|flag| flag.key() == key)
    }

    /// Look up a flag by its command-line (hyphen-separated) key
    pub fn from_cli_key(key: &str) -> Option<Self> {
        Self::from_key(&key.replace(CLI_WORD_SEPARATOR, &KEY_WORD_SEPARATOR.to_string()))
    }

    /// Internal key, e.g. `nesting_depth`
    pub fn key(self) -> &'static str {
        self.entry().0
    }

    /// Command-line key, e.g. `nesting-depth`
    pub fn cli_name(self) -> String {
        self.key()
            .replace(KEY_WORD_SEPARATOR, &CLI_WORD_SEPARATOR.to_string())
    }

    pub fn kind(self) -> FlagKind {
        self.entry().1
    }

    /// Flags this one expands into, if it is a macro flag
    pub fn expansion(self) -> &'static [Flag] {
        match self {
            Flag::VsFlags => &VS_FLAGS_EXPANSION,
            _ => &[],
        }
    }

    /// All flags in vocabulary order
    pub fn all() -> impl Iterator<Item = Flag> {
        ALL_FLAGS.into_iter()
    }

    fn entry(self) -> (&'static str, FlagKind) {
        match self {
            Flag::ArraysOnly => ("arrays_only", FlagKind::StrictSwitch),
            Flag::AutoDetectPure => ("auto_detect_pure", FlagKind::Switch),
            Flag::Comparability => ("comparability", FlagKind::Switch),
            Flag::ComparabilityFile => ("comparability_file", FlagKind::Path),
            Flag::DontCatchExceptions => ("dont_catch_exceptions", FlagKind::StrictSwitch),
            Flag::DtraceAppend => ("dtrace_append", FlagKind::Switch),
            Flag::EmitNullaryInfo => ("emit_nullary_info", FlagKind::Switch),
            Flag::EnumUnderlyingValues => ("enum_underlying_values", FlagKind::Switch),
            Flag::ForceUnixNewline => ("force_unix_newline", FlagKind::Switch),
            Flag::FriendlyDecTypes => ("friendly_dec_types", FlagKind::StrictSwitch),
            Flag::GenerateComparability => ("generate_comparability", FlagKind::Switch),
            Flag::IsEnumFlags => ("is_enum_flags", FlagKind::Switch),
            Flag::IsPropertyFlags => ("is_property_flags", FlagKind::Switch),
            Flag::IsReadonlyFlags => ("is_readonly_flags", FlagKind::Switch),
            Flag::LinkedLists => ("linked_lists", FlagKind::StrictSwitch),
            Flag::NestingDepth => ("nesting_depth", FlagKind::Integer),
            Flag::OmitDecType => ("omit_dec_type", FlagKind::Pattern),
            Flag::OmitParentDecType => ("omit_parent_dec_type", FlagKind::Pattern),
            Flag::OmitVar => ("omit_var", FlagKind::Pattern),
            Flag::OutputFolder => ("output_folder", FlagKind::Path),
            Flag::OutputLocation => ("output_location", FlagKind::Text),
            Flag::PortableDll => ("portable_dll", FlagKind::Switch),
            Flag::PptOmitPattern => ("ppt_omit_pattern", FlagKind::Pattern),
            Flag::PptSelectPattern => ("ppt_select_pattern", FlagKind::Pattern),
            Flag::PurityFile => ("purity_file", FlagKind::Path),
            Flag::PurityPrefixBlacklist => ("purity_prefix_blacklist", FlagKind::Path),
            Flag::RobustMode => ("robust_mode", FlagKind::Switch),
            Flag::SampleStart => ("sample_start", FlagKind::Integer),
            Flag::SaveAndRun => ("save_and_run", FlagKind::Switch),
            Flag::SaveProgram => ("save_program", FlagKind::Path),
            Flag::StdVisibility => ("std_visibility", FlagKind::Switch),
            Flag::Verbose => ("verbose", FlagKind::Switch),
            Flag::VsFlags => ("vs_flags", FlagKind::Switch),
            Flag::Wpf => ("wpf", FlagKind::Switch),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", FLAG_PREFIX, self.cli_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_flag_listed_once() {
        let flags: HashSet<Flag> = Flag::all().collect();
        assert_eq!(flags.len(), ALL_FLAGS.len());
        for flag in Flag::all() {
            assert_eq!(Flag::from_key(flag.key()), Some(flag));
        }
    }

    #[test]
    fn test_flag_list_follows_declaration_order() {
        for (index, flag) in ALL_FLAGS.iter().enumerate() {
            assert_eq!(*flag as usize, index, "{} out of place", flag);
        }
        assert_eq!(Flag::Wpf as usize + 1, ALL_FLAGS.len());
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = Flag::all().map(Flag::key).collect();
        assert_eq!(keys.len(), ALL_FLAGS.len());
    }

    #[test]
    fn test_cli_key_translates_hyphens() {
        assert_eq!(
            Flag::from_cli_key("ppt-omit-pattern"),
            Some(Flag::PptOmitPattern)
        );
        assert_eq!(Flag::from_cli_key("nesting-depth"), Some(Flag::NestingDepth));
        assert_eq!(Flag::from_cli_key("nesting_depth"), Some(Flag::NestingDepth));
        assert_eq!(Flag::from_cli_key("nesting-depths"), None);
    }

    #[test]
    fn test_cli_name_and_display() {
        assert_eq!(Flag::OmitParentDecType.cli_name(), "omit-parent-dec-type");
        assert_eq!(Flag::VsFlags.to_string(), "--vs-flags");
    }

    #[test]
    fn test_only_vs_flags_expands() {
        assert_eq!(Flag::VsFlags.expansion().len(), 5);
        for flag in Flag::all().filter(|f| *f != Flag::VsFlags) {
            assert!(flag.expansion().is_empty(), "{} should not expand", flag);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Flag::NestingDepth.kind(), FlagKind::Integer);
        assert_eq!(Flag::OmitVar.kind(), FlagKind::Pattern);
        assert_eq!(Flag::Verbose.kind(), FlagKind::Switch);
        assert_eq!(Flag::DontCatchExceptions.kind(), FlagKind::StrictSwitch);
    }
}
