//! Printable snapshot of a resolved configuration
//!
//! Used by the `tracefront` binary for `--format text` and `--format json`.

use crate::settings::{FrontEndArgs, Switches};
use crate::visibility::MemberAccess;
use serde::Serialize;
use std::fmt::Write as _;

/// Resolved configuration in serializable form
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub assembly_name: String,
    pub assembly_path: String,
    pub program_args: Vec<String>,
    pub output_location: String,
    pub print_to_stdout: bool,
    pub nesting_depth: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_start: Option<u32>,
    pub switches: Switches,
    pub patterns: PatternReport,
    pub member_access: MemberAccess,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparability_file: Option<String>,
    pub purity_methods: Vec<String>,
}

/// Source text of each configured pattern
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_var: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_dec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_parent_dec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppt_omit_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppt_select_pattern: Option<String>,
}

impl ConfigReport {
    pub fn from_args(args: &FrontEndArgs) -> Self {
        let source = |re: Option<&regex::Regex>| re.map(|re| re.as_str().to_string());
        Self {
            assembly_name: args.assembly_name().to_string(),
            assembly_path: args.assembly_path().display().to_string(),
            program_args: args.program_args().to_vec(),
            output_location: args.output_location().to_string(),
            print_to_stdout: args.print_to_stdout(),
            nesting_depth: args.nesting_depth(),
            sample_start: args.sample_start(),
            switches: *args.switches(),
            patterns: PatternReport {
                omit_var: source(args.omit_var()),
                omit_dec_type: source(args.omit_dec_type()),
                omit_parent_dec_type: source(args.omit_parent_dec_type()),
                ppt_omit_pattern: source(args.ppt_omit_pattern()),
                ppt_select_pattern: source(args.ppt_select_pattern()),
            },
            member_access: args.base_access(),
            save_program: args.save_program().map(|p| p.display().to_string()),
            comparability_file: args.comparability_file().map(|p| p.display().to_string()),
            purity_methods: args.purity_methods().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable `key: value` listing
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "assembly: {} ({})", self.assembly_name, self.assembly_path);
        let _ = writeln!(out, "program: {}", self.program_args.join(" "));
        let _ = writeln!(out, "output: {}", self.output_location);
        let _ = writeln!(out, "nesting depth: {}", self.nesting_depth);
        match self.sample_start {
            Some(n) => {
                let _ = writeln!(out, "sample start: {}", n);
            }
            None => {
                let _ = writeln!(out, "sample start: off");
            }
        }
        let _ = writeln!(
            out,
            "member access: public={} non_public={}",
            self.member_access.public, self.member_access.non_public
        );
        if let Some(save) = &self.save_program {
            let _ = writeln!(out, "save program: {}", save);
        }
        if let Some(cmp) = &self.comparability_file {
            let _ = writeln!(out, "comparability file: {}", cmp);
        }
        if !self.purity_methods.is_empty() {
            let _ = writeln!(out, "purity methods: {}", self.purity_methods.len());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::target::{TargetHost, TargetIdentity};
    use std::path::Path;

    struct StubHost;

    impl TargetHost for StubHost {
        fn resolve_identity(&self, path: &Path) -> Result<TargetIdentity> {
            Ok(TargetIdentity {
                assembly_name: "App".to_string(),
                assembly_path: path.to_path_buf(),
            })
        }

        fn duplicate(&self, _: &Path, _: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn report(tokens: &[&str]) -> ConfigReport {
        ConfigReport::from_args(&FrontEndArgs::parse_with(tokens, &StubHost).unwrap())
    }

    #[test]
    fn test_json_contains_resolved_fields() {
        let json = report(&["--nesting-depth=4", "--omit-var=^tmp", "App.exe", "x"])
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["assembly_name"], "App");
        assert_eq!(value["nesting_depth"], 4);
        assert_eq!(value["patterns"]["omit_var"], "^tmp");
        assert_eq!(value["program_args"][1], "x");
        assert_eq!(value["switches"]["dont_catch_exceptions"], true);
        assert!(value.get("sample_start").is_none());
    }

    #[test]
    fn test_text_lists_output_and_sampling() {
        let text = report(&["--sample-start=100", "App.exe"]).to_text();
        assert!(text.contains("output: daikon-output/App.dtrace"));
        assert!(text.contains("sample start: 100"));
        assert!(!text.contains("save program"));
    }
}
