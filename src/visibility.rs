//! Reflection visibility policy
//!
//! Decides which members of a type the value-capture visitor may inspect.

use serde::Serialize;

/// Modules defining the built-in string and hash-set types. Members of
/// types from these modules are never inspected non-publicly.
pub const FRAMEWORK_MODULES: &[&str] = &[
    "mscorlib.dll",
    "System.Core.dll",
    "System.Private.CoreLib.dll",
    "System.Collections.dll",
];

/// Which members reflection may see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MemberAccess {
    pub public: bool,
    pub non_public: bool,
    pub instance: bool,
    pub statics: bool,
}

impl MemberAccess {
    pub fn with_instance(self) -> Self {
        Self {
            instance: true,
            ..self
        }
    }

    pub fn with_statics(self) -> Self {
        Self {
            statics: true,
            ..self
        }
    }
}

/// A type as seen by the visitor: its full name and defining module
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub full_name: String,
    pub module: String,
}

impl TypeRef {
    pub fn new(full_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            module: module.into(),
        }
    }

    pub fn is_framework(&self) -> bool {
        FRAMEWORK_MODULES
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&self.module))
    }
}

/// Member-access policy derived from `--std-visibility`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityPolicy {
    std_visibility: bool,
}

impl VisibilityPolicy {
    pub fn new(std_visibility: bool) -> Self {
        Self { std_visibility }
    }

    /// Public always, non-public unless standard visibility was requested
    pub fn base(&self) -> MemberAccess {
        MemberAccess {
            public: true,
            non_public: !self.std_visibility,
            ..MemberAccess::default()
        }
    }

    pub fn instance(&self) -> MemberAccess {
        self.base().with_instance()
    }

    pub fn statics(&self) -> MemberAccess {
        self.base().with_statics()
    }

    /// Access for members of `inspected` when the inspection point lives in `origin`
    ///
    /// A type always sees its own non-public members, except framework
    /// types, whose internals are never descended into.
    pub fn access_for(&self, inspected: &TypeRef, origin: &TypeRef) -> MemberAccess {
        let mut access = self.base();
        if inspected == origin {
            access.non_public = true;
        }
        if inspected.is_framework() {
            access.non_public = false;
        }
        access
    }
}
