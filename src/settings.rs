//! Resolved front-end configuration
//!
//! [`FrontEndArgs`] is built once per launch from the raw command line.
//! Every flag is coerced into a typed field at construction, so an invalid
//! value fails the whole build instead of surfacing later. After that the
//! record is read-mostly: only extension rewriting and purity loading
//! mutate it.

use crate::defaults::{
    AUTO_PURITY_SUFFIX, DEFAULT_NESTING_DEPTH, DEFAULT_OUTPUT_FOLDER, DEFAULT_SAVE_PROGRAM,
    STDOUT_SENTINEL, TRACE_EXTENSION,
};
use crate::error::{ArgsError, Result};
use crate::filter::{PptFilter, VariableFilter};
use crate::flags::{Flag, FlagKind};
use crate::parser::{parse_tokens, recognise};
use crate::side_files::{read_prefix_blacklist, read_purity_methods};
use crate::table::ArgTable;
use crate::target::{ObjectFileHost, TargetHost, TargetIdentity};
use crate::transforms::wrap_for_save;
use crate::visibility::{MemberAccess, TypeRef, VisibilityPolicy};
use regex::Regex;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// Boolean settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Switches {
    pub verbose: bool,
    pub force_unix_newline: bool,
    pub std_visibility: bool,
    pub dtrace_append: bool,
    pub enum_underlying_values: bool,
    pub robust_mode: bool,
    pub save_and_run: bool,
    pub wpf: bool,
    pub portable_dll: bool,
    pub is_property_flags: bool,
    pub is_readonly_flags: bool,
    pub is_enum_flags: bool,
    pub auto_detect_pure: bool,
    pub generate_comparability: bool,
    pub comparability: bool,
    pub emit_nullary_info: bool,
    pub vs_flags: bool,
    pub linked_lists: bool,
    pub arrays_only: bool,
    pub friendly_dec_types: bool,
    pub dont_catch_exceptions: bool,
}

impl Switches {
    fn resolve(table: &ArgTable) -> Result<Self> {
        let on = |flag| switch(table, flag);
        Ok(Self {
            verbose: on(Flag::Verbose)?,
            force_unix_newline: on(Flag::ForceUnixNewline)?,
            std_visibility: on(Flag::StdVisibility)?,
            dtrace_append: on(Flag::DtraceAppend)?,
            enum_underlying_values: on(Flag::EnumUnderlyingValues)?,
            robust_mode: on(Flag::RobustMode)?,
            save_and_run: on(Flag::SaveAndRun)?,
            wpf: on(Flag::Wpf)?,
            portable_dll: on(Flag::PortableDll)?,
            is_property_flags: on(Flag::IsPropertyFlags)?,
            is_readonly_flags: on(Flag::IsReadonlyFlags)?,
            is_enum_flags: on(Flag::IsEnumFlags)?,
            auto_detect_pure: on(Flag::AutoDetectPure)?,
            generate_comparability: on(Flag::GenerateComparability)?,
            comparability: on(Flag::Comparability)?,
            emit_nullary_info: on(Flag::EmitNullaryInfo)?,
            vs_flags: on(Flag::VsFlags)?,
            linked_lists: on(Flag::LinkedLists)?,
            arrays_only: on(Flag::ArraysOnly)?,
            friendly_dec_types: on(Flag::FriendlyDecTypes)?,
            dont_catch_exceptions: on(Flag::DontCatchExceptions)?,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Coerce a boolean flag: unset is false, presence is true, and a boolean
/// string value is honoured. Strict switches reject any other value.
fn switch(table: &ArgTable, flag: Flag) -> Result<bool> {
    match table.get(flag) {
        None => Ok(false),
        Some(None) => Ok(true),
        Some(Some(value)) => match (parse_bool(value), flag.kind()) {
            (Some(parsed), _) => Ok(parsed),
            (None, FlagKind::StrictSwitch) => Err(ArgsError::malformed(
                flag.key(),
                value,
                "expected true or false",
            )),
            (None, _) => Ok(true),
        },
    }
}

/// Value of a flag that is meaningless without one
fn required_value(table: &ArgTable, flag: Flag) -> Result<Option<&str>> {
    match table.get(flag) {
        None => Ok(None),
        Some(None) => Err(ArgsError::malformed(flag.key(), "", "a value is required")),
        Some(Some(value)) => Ok(Some(value)),
    }
}

fn pattern(table: &ArgTable, flag: Flag) -> Result<Option<Regex>> {
    required_value(table, flag)?
        .map(|value| Regex::new(value).map_err(|e| ArgsError::malformed(flag.key(), value, e)))
        .transpose()
}

fn integer(table: &ArgTable, flag: Flag) -> Result<Option<u32>> {
    required_value(table, flag)?
        .map(|value| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|e| ArgsError::malformed(flag.key(), value, e))
        })
        .transpose()
}

fn path(table: &ArgTable, flag: Flag) -> Result<Option<PathBuf>> {
    Ok(required_value(table, flag)?.map(PathBuf::from))
}

/// True for a `wpf` token that switches the flag on, wherever it appears
fn requests_wrap(token: &str) -> bool {
    match recognise(token) {
        Ok((Flag::Wpf, value)) => value.is_none_or(|v| parse_bool(&v).unwrap_or(true)),
        _ => false,
    }
}

/// The resolved configuration handed to the instrumentation engine,
/// the visitor and the trace printer
#[derive(Debug)]
pub struct FrontEndArgs {
    pub(crate) table: ArgTable,
    program_index: usize,
    program_args: Vec<String>,
    target: TargetIdentity,

    pub(crate) output_location: String,
    pub(crate) print_to_stdout: bool,
    output_folder: PathBuf,

    nesting_depth: u32,
    sample_start: Option<u32>,
    switches: Switches,

    omit_dec_type: Option<Regex>,
    omit_parent_dec_type: Option<Regex>,
    ppt_filter: PptFilter,
    var_filter: VariableFilter,

    save_program: Option<PathBuf>,
    comparability_file: Option<PathBuf>,
    purity_file: Option<PathBuf>,
    purity_methods: Vec<String>,
    prefix_blacklist_file: Option<PathBuf>,
    prefix_blacklist: OnceCell<Vec<String>>,
}

impl FrontEndArgs {
    /// Resolve the command line, probing the target with [`ObjectFileHost`]
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        Self::parse_with(tokens, &ObjectFileHost)
    }

    /// Resolve the command line against an explicit host
    pub fn parse_with<S: AsRef<str>>(tokens: &[S], host: &dyn TargetHost) -> Result<Self> {
        let parsed = parse_tokens(tokens)?;
        let mut table = parsed.table;
        let program_index = parsed.program_index;
        let program_args: Vec<String> = tokens[program_index..]
            .iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        let mut target = host.resolve_identity(Path::new(&program_args[0]))?;
        tracing::debug!(
            "target assembly {} at {}",
            target.assembly_name,
            target.assembly_path.display()
        );

        let output_folder = path(&table, Flag::OutputFolder)?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FOLDER));
        if !table.contains(Flag::OutputLocation) {
            let location = output_folder
                .join(format!("{}{}", target.assembly_name, TRACE_EXTENSION))
                .to_string_lossy()
                .into_owned();
            table.insert(Flag::OutputLocation, Some(location));
        }
        if table.value(Flag::OutputLocation).is_none_or(str::is_empty) {
            return Err(ArgsError::malformed(
                Flag::OutputLocation.key(),
                "",
                "a value is required",
            ));
        }

        let purity_file = path(&table, Flag::PurityFile)?;
        let purity_methods = match &purity_file {
            Some(file) => read_purity_methods(file)?,
            None => Vec::new(),
        };

        if tokens.iter().any(|t| requests_wrap(t.as_ref())) {
            wrap_for_save(&mut table, &mut target, host)?;
        }

        let output_location = required_value(&table, Flag::OutputLocation)?
            .map(str::to_string)
            .unwrap_or_default();
        let print_to_stdout = output_location == STDOUT_SENTINEL;

        let save_program = match table.get(Flag::SaveProgram) {
            None => None,
            Some(None) => Some(PathBuf::from(DEFAULT_SAVE_PROGRAM)),
            Some(Some(value)) => Some(PathBuf::from(value)),
        };

        let args = Self {
            program_index,
            program_args,
            target,
            output_location,
            print_to_stdout,
            output_folder,
            nesting_depth: integer(&table, Flag::NestingDepth)?.unwrap_or(DEFAULT_NESTING_DEPTH),
            sample_start: integer(&table, Flag::SampleStart)?,
            switches: Switches::resolve(&table)?,
            omit_dec_type: pattern(&table, Flag::OmitDecType)?,
            omit_parent_dec_type: pattern(&table, Flag::OmitParentDecType)?,
            ppt_filter: PptFilter::new(
                pattern(&table, Flag::PptOmitPattern)?,
                pattern(&table, Flag::PptSelectPattern)?,
            ),
            var_filter: VariableFilter::new(pattern(&table, Flag::OmitVar)?),
            save_program,
            comparability_file: path(&table, Flag::ComparabilityFile)?,
            purity_file,
            purity_methods,
            prefix_blacklist_file: path(&table, Flag::PurityPrefixBlacklist)?,
            prefix_blacklist: OnceCell::new(),
            table,
        };
        args.check_invariants(tokens.len());
        Ok(args)
    }

    fn check_invariants(&self, token_count: usize) {
        debug_assert!(self.program_index < token_count);
        debug_assert!(!self.program_args.is_empty());
        debug_assert!(!self.output_location.is_empty());
        debug_assert!(self.table.contains(Flag::OutputLocation));
    }

    // --- invocation ---------------------------------------------------

    /// Index of the target program in the raw token list
    pub fn program_index(&self) -> usize {
        self.program_index
    }

    /// The target program's own invocation, program path first
    pub fn program_args(&self) -> &[String] {
        &self.program_args
    }

    pub fn target(&self) -> &TargetIdentity {
        &self.target
    }

    pub fn assembly_name(&self) -> &str {
        &self.target.assembly_name
    }

    /// Binary the instrumentation engine rewrites
    pub fn assembly_path(&self) -> &Path {
        &self.target.assembly_path
    }

    /// Argument table after defaults, expansion and transforms
    pub fn raw_table(&self) -> &ArgTable {
        &self.table
    }

    // --- output -------------------------------------------------------

    pub fn output_location(&self) -> &str {
        &self.output_location
    }

    /// True when output goes to the console instead of a file
    pub fn print_to_stdout(&self) -> bool {
        self.print_to_stdout
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    pub fn save_program(&self) -> Option<&Path> {
        self.save_program.as_deref()
    }

    pub fn comparability_file(&self) -> Option<&Path> {
        self.comparability_file.as_deref()
    }

    // --- traversal ----------------------------------------------------

    pub fn nesting_depth(&self) -> u32 {
        self.nesting_depth
    }

    /// Program-point count after which sampling starts; `None` disables sampling
    pub fn sample_start(&self) -> Option<u32> {
        self.sample_start
    }

    pub fn switches(&self) -> &Switches {
        &self.switches
    }

    pub fn verbose(&self) -> bool {
        self.switches.verbose
    }

    pub fn force_unix_newline(&self) -> bool {
        self.switches.force_unix_newline
    }

    pub fn std_visibility(&self) -> bool {
        self.switches.std_visibility
    }

    pub fn dtrace_append(&self) -> bool {
        self.switches.dtrace_append
    }

    pub fn enum_underlying_values(&self) -> bool {
        self.switches.enum_underlying_values
    }

    pub fn robust_mode(&self) -> bool {
        self.switches.robust_mode
    }

    pub fn save_and_run(&self) -> bool {
        self.switches.save_and_run
    }

    pub fn wpf(&self) -> bool {
        self.switches.wpf
    }

    pub fn portable_dll(&self) -> bool {
        self.switches.portable_dll
    }

    pub fn is_property_flags(&self) -> bool {
        self.switches.is_property_flags
    }

    pub fn is_readonly_flags(&self) -> bool {
        self.switches.is_readonly_flags
    }

    pub fn is_enum_flags(&self) -> bool {
        self.switches.is_enum_flags
    }

    pub fn auto_detect_pure(&self) -> bool {
        self.switches.auto_detect_pure
    }

    pub fn generate_comparability(&self) -> bool {
        self.switches.generate_comparability
    }

    pub fn comparability(&self) -> bool {
        self.switches.comparability
    }

    pub fn emit_nullary_info(&self) -> bool {
        self.switches.emit_nullary_info
    }

    pub fn vs_flags(&self) -> bool {
        self.switches.vs_flags
    }

    /// Treat self-referential single-field classes as linked lists
    pub fn linked_lists(&self) -> bool {
        self.switches.linked_lists
    }

    /// Only inspect elements of arrays, not other collections
    pub fn arrays_only(&self) -> bool {
        self.switches.arrays_only
    }

    pub fn friendly_dec_types(&self) -> bool {
        self.switches.friendly_dec_types
    }

    /// Let exceptions thrown by instrumentation escape at runtime
    pub fn dont_catch_exceptions(&self) -> bool {
        self.switches.dont_catch_exceptions
    }

    // --- patterns -----------------------------------------------------

    pub fn omit_var(&self) -> Option<&Regex> {
        self.var_filter.omit_pattern()
    }

    pub fn omit_dec_type(&self) -> Option<&Regex> {
        self.omit_dec_type.as_ref()
    }

    pub fn omit_parent_dec_type(&self) -> Option<&Regex> {
        self.omit_parent_dec_type.as_ref()
    }

    pub fn ppt_omit_pattern(&self) -> Option<&Regex> {
        self.ppt_filter.omit_pattern()
    }

    pub fn ppt_select_pattern(&self) -> Option<&Regex> {
        self.ppt_filter.select_pattern()
    }

    pub fn should_print_variable(&self, name: &str) -> bool {
        self.var_filter.should_print(name)
    }

    pub fn should_print_program_point(&self, name: &str, label: Option<&str>) -> bool {
        self.ppt_filter.should_print(name, label)
    }

    // --- visibility ---------------------------------------------------

    pub fn visibility(&self) -> VisibilityPolicy {
        VisibilityPolicy::new(self.switches.std_visibility)
    }

    pub fn base_access(&self) -> MemberAccess {
        self.visibility().base()
    }

    pub fn instance_access(&self) -> MemberAccess {
        self.visibility().instance()
    }

    pub fn static_access(&self) -> MemberAccess {
        self.visibility().statics()
    }

    pub fn access_for(&self, inspected: &TypeRef, origin: &TypeRef) -> MemberAccess {
        self.visibility().access_for(inspected, origin)
    }

    // --- side files ---------------------------------------------------

    pub fn purity_file(&self) -> Option<&Path> {
        self.purity_file.as_deref()
    }

    /// Methods known to be free of side effects, in load order
    pub fn purity_methods(&self) -> &[String] {
        &self.purity_methods
    }

    /// Append the methods listed in `path` to the purity list
    pub fn load_purity_file(&mut self, path: &Path) -> Result<()> {
        let methods = read_purity_methods(path)?;
        self.purity_methods.extend(methods);
        Ok(())
    }

    /// File a prior auto-detection pass writes pure methods to
    pub fn auto_detected_purity_file(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}{}",
            self.target.assembly_name, AUTO_PURITY_SUFFIX
        ))
    }

    /// Append methods found by the auto-detection pass
    pub fn load_auto_detected_purity(&mut self) -> Result<()> {
        let file = self.auto_detected_purity_file();
        tracing::info!("loading auto-detected purity methods from {}", file.display());
        self.load_purity_file(&file)
    }

    /// Prefixes excluded from nullary-method info, read on first access
    ///
    /// Only meaningful with `--emit-nullary-info`.
    pub fn purity_prefix_blacklist(&self) -> Result<&[String]> {
        if !self.switches.emit_nullary_info {
            return Err(ArgsError::Precondition(format!(
                "{} requires {}",
                Flag::PurityPrefixBlacklist,
                Flag::EmitNullaryInfo
            )));
        }
        if let Some(prefixes) = self.prefix_blacklist.get() {
            return Ok(prefixes.as_slice());
        }
        let prefixes = match &self.prefix_blacklist_file {
            Some(file) => read_prefix_blacklist(file)?,
            None => Vec::new(),
        };
        Ok(self.prefix_blacklist.get_or_init(|| prefixes).as_slice())
    }
}
