//! Baseline values seeded into the argument table before parsing, and the
//! fixed names and extensions the front end resolves paths with.

use crate::flags::Flag;

/// Default maximum depth of field traversal
pub const DEFAULT_NESTING_DEPTH: u32 = 2;

/// Folder trace and declaration files are written under
pub const DEFAULT_OUTPUT_FOLDER: &str = "daikon-output";

pub const TRACE_EXTENSION: &str = ".dtrace";
pub const DECLS_EXTENSION: &str = ".decls";

/// Output location meaning "write to the console"
pub const STDOUT_SENTINEL: &str = "STDOUT";

/// File written when `--save-program` is given without a path
pub const DEFAULT_SAVE_PROGRAM: &str = "InstrumentedProgram.exe";

/// Appended to the assembly name to locate auto-detected purity output
pub const AUTO_PURITY_SUFFIX: &str = "_auto.pure";

/// Appended to the target path to name the wrap-for-save duplicate
pub const WRAP_TEMP_SUFFIX: &str = ".tmp";

/// Seed entries, overwritten when the flag is supplied explicitly
pub fn seed() -> [(Flag, &'static str); 6] {
    [
        (Flag::NestingDepth, "2"),
        (Flag::Verbose, "false"),
        (Flag::LinkedLists, "true"),
        (Flag::ArraysOnly, "false"),
        (Flag::DontCatchExceptions, "true"),
        (Flag::FriendlyDecTypes, "false"),
    ]
}
