//! Program-point and variable filtering
//!
//! Supports:
//! - Omit/select patterns for program points: --ppt-omit-pattern, --ppt-select-pattern
//! - Omit pattern for variables: --omit-var
//! - Fixed exclusions for compiler-synthesized names and infrastructure types

use regex::Regex;
use std::sync::LazyLock;

/// Name the compiler gives the backing field of an enum
pub const ENUM_BACKING_FIELD: &str = "value__";

/// Types whose program points are generated by the toolchain, not the user
pub const RESERVED_PPT_TYPES: &[&str] = &["<Module>", "<PrivateImplementationDetails>"];

// Closures, lambdas, iterators and anonymous types: `<>c__DisplayClass1`,
// `<Main>b__0`, `<Items>d__3`, `<>f__AnonymousType0`
static COMPILER_GENERATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>[a-z]__").expect("compiler-generated pattern is valid")
});

/// True for names the compiler synthesized rather than the user wrote
pub fn is_compiler_generated(name: &str) -> bool {
    COMPILER_GENERATED.is_match(name)
}

/// True for program points declared on a reserved infrastructure type
pub fn is_reserved_ppt(name: &str) -> bool {
    RESERVED_PPT_TYPES.iter().any(|ty| {
        name.strip_prefix(ty)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    })
}

/// Decides which program points get instrumented
#[derive(Debug, Clone, Default)]
pub struct PptFilter {
    omit: Option<Regex>,
    select: Option<Regex>,
}

impl PptFilter {
    /// Filter with no user patterns; only the fixed exclusions apply
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(omit: Option<Regex>, select: Option<Regex>) -> Self {
        Self { omit, select }
    }

    pub fn omit_pattern(&self) -> Option<&Regex> {
        self.omit.as_ref()
    }

    pub fn select_pattern(&self) -> Option<&Regex> {
        self.select.as_ref()
    }

    /// Check if a program point should be printed
    ///
    /// `name` and `label` are concatenated before any pattern is tested.
    pub fn should_print(&self, name: &str, label: Option<&str>) -> bool {
        let full = match label {
            Some(label) => format!("{}{}", name, label),
            None => name.to_string(),
        };

        let not_omitted = self.omit.as_ref().is_none_or(|re| !re.is_match(&full));
        let selected = self.select.as_ref().is_none_or(|re| re.is_match(&full));

        not_omitted && selected && !is_compiler_generated(&full) && !is_reserved_ppt(name)
    }
}

/// Decides which variables get printed at a program point
#[derive(Debug, Clone, Default)]
pub struct VariableFilter {
    omit: Option<Regex>,
}

impl VariableFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(omit: Option<Regex>) -> Self {
        Self { omit }
    }

    pub fn omit_pattern(&self) -> Option<&Regex> {
        self.omit.as_ref()
    }

    /// Check if a variable should be printed
    pub fn should_print(&self, name: &str) -> bool {
        if name.ends_with(ENUM_BACKING_FIELD) {
            return false;
        }
        self.omit.as_ref().is_none_or(|re| !re.is_match(name))
    }
}
