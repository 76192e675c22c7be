//! Post-resolution transforms
//!
//! - output extension rewriting between trace and declarations files
//! - wrap-for-save: instrument a duplicate of the target and write the
//!   result back over the original

use crate::defaults::{DECLS_EXTENSION, TRACE_EXTENSION, WRAP_TEMP_SUFFIX};
use crate::error::Result;
use crate::flags::Flag;
use crate::settings::FrontEndArgs;
use crate::table::ArgTable;
use crate::target::{TargetHost, TargetIdentity};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Replace the extension of `path` with `extension` (given with its dot)
pub fn replace_extension(path: &str, extension: &str) -> String {
    Path::new(path)
        .with_extension(extension.trim_start_matches('.'))
        .to_string_lossy()
        .into_owned()
}

/// Sibling path the wrap-for-save duplicate is written to
pub fn wrap_duplicate_path(original: &Path) -> PathBuf {
    let mut name = OsString::from(original.as_os_str());
    name.push(WRAP_TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Redirect instrumentation to a copy of the target
///
/// Afterwards `save-program` names the original path, the target identity
/// points at the duplicate, and `save-and-run` is on.
pub fn wrap_for_save(
    table: &mut ArgTable,
    target: &mut TargetIdentity,
    host: &dyn TargetHost,
) -> Result<()> {
    let original = target.assembly_path.clone();
    let duplicate = wrap_duplicate_path(&original);

    host.duplicate(&original, &duplicate)?;
    tracing::info!(
        "instrumenting copy {} and saving over {}",
        duplicate.display(),
        original.display()
    );

    table.insert(
        Flag::SaveProgram,
        Some(original.to_string_lossy().into_owned()),
    );
    table.insert(Flag::SaveAndRun, None);
    target.assembly_path = duplicate;
    Ok(())
}

impl FrontEndArgs {
    /// Point the output at the declarations file
    pub fn set_decl_extension(&mut self) {
        self.set_output_extension(DECLS_EXTENSION);
    }

    /// Point the output at the trace file
    pub fn set_trace_extension(&mut self) {
        self.set_output_extension(TRACE_EXTENSION);
    }

    fn set_output_extension(&mut self, extension: &str) {
        if self.print_to_stdout {
            return;
        }
        self.output_location = replace_extension(&self.output_location, extension);
        self.table
            .insert(Flag::OutputLocation, Some(self.output_location.clone()));
    }
}
