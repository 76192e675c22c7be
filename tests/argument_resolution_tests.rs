// Argument resolution against real files on disk
//
// These tests use the default ObjectFileHost, so the target program must be
// a real binary. The test executable itself is copied into a temp dir and
// used as the target.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracefront::{ArgsError, FrontEndArgs};

fn target_in(dir: &TempDir, name: &str) -> PathBuf {
    let exe = std::env::current_exe().unwrap();
    let target = dir.path().join(name);
    fs::copy(exe, &target).unwrap();
    target
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_target_identity_from_binary() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "Calculator.exe");

    let args = FrontEndArgs::parse(&[target.to_str().unwrap(), "1", "+", "2"]).unwrap();

    assert_eq!(args.assembly_name(), "Calculator");
    assert_eq!(args.assembly_path(), target.as_path());
    assert_eq!(args.program_index(), 0);
    assert_eq!(args.program_args().len(), 4);
    assert_eq!(
        Path::new(args.output_location()),
        Path::new("daikon-output/Calculator.dtrace")
    );
}

#[test]
fn test_missing_target_binary() {
    let err = FrontEndArgs::parse(&["--verbose", "/no/such/program.exe"]).unwrap_err();
    assert!(matches!(err, ArgsError::TargetResolution { .. }));
}

#[test]
fn test_only_flags_is_missing_target() {
    let err = FrontEndArgs::parse(&["--verbose", "--nesting-depth=3"]).unwrap_err();
    assert!(matches!(err, ArgsError::MissingTarget));
}

#[test]
fn test_purity_file_loaded_eagerly() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "App.exe");
    let purity = write_file(&dir, "app.pure", "App.Stack.get_Count()\n\n  \nApp.Stack.IsEmpty()\n");

    let flag = format!("--purity-file={}", purity.display());
    let args = FrontEndArgs::parse(&[flag.as_str(), target.to_str().unwrap()]).unwrap();

    assert_eq!(args.purity_file(), Some(purity.as_path()));
    assert_eq!(
        args.purity_methods(),
        &["App.Stack.get_Count()", "App.Stack.IsEmpty()"]
    );
}

#[test]
fn test_purity_list_accumulates() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "App.exe");
    let manual = write_file(&dir, "manual.pure", "A.B()\n");
    let detected = write_file(&dir, "detected.pure", "C.D()\nE.F()\n");

    let flag = format!("--purity-file={}", manual.display());
    let mut args = FrontEndArgs::parse(&[flag.as_str(), target.to_str().unwrap()]).unwrap();
    args.load_purity_file(&detected).unwrap();

    assert_eq!(args.purity_methods(), &["A.B()", "C.D()", "E.F()"]);
}

#[test]
fn test_auto_detected_purity_missing_is_file_access() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "NoPurityHere.exe");
    let mut args = FrontEndArgs::parse(&[target.to_str().unwrap()]).unwrap();

    let err = args.load_auto_detected_purity().unwrap_err();
    assert!(matches!(err, ArgsError::FileAccess { .. }));
    assert!(args.purity_methods().is_empty());
}

#[test]
fn test_prefix_blacklist_loaded_and_cached() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "App.exe");
    let blacklist = write_file(&dir, "prefixes.txt", "  System.\n\nMicrosoft.  \n");

    let flag = format!("--purity-prefix-blacklist={}", blacklist.display());
    let args = FrontEndArgs::parse(&[
        "--emit-nullary-info",
        flag.as_str(),
        target.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(args.purity_prefix_blacklist().unwrap(), &["System.", "Microsoft."]);

    // Cached: the file is not read again
    fs::remove_file(&blacklist).unwrap();
    assert_eq!(args.purity_prefix_blacklist().unwrap().len(), 2);
}

#[test]
fn test_prefix_blacklist_missing_file_fails_on_access() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "App.exe");
    let args = FrontEndArgs::parse(&[
        "--emit-nullary-info",
        "--purity-prefix-blacklist=/no/such/prefixes.txt",
        target.to_str().unwrap(),
    ])
    .unwrap();

    assert!(matches!(
        args.purity_prefix_blacklist().unwrap_err(),
        ArgsError::FileAccess { .. }
    ));
}

#[test]
fn test_wpf_duplicates_target() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "Viewer.exe");

    let args = FrontEndArgs::parse(&["--wpf", target.to_str().unwrap()]).unwrap();

    let duplicate = dir.path().join("Viewer.exe.tmp");
    assert!(duplicate.exists());
    assert_eq!(args.assembly_path(), duplicate.as_path());
    assert_eq!(args.save_program(), Some(target.as_path()));
    assert!(args.save_and_run());
    assert_eq!(args.assembly_name(), "Viewer");
}

#[test]
fn test_decl_then_trace_extension() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "App.exe");
    let mut args = FrontEndArgs::parse(&[target.to_str().unwrap()]).unwrap();

    args.set_decl_extension();
    assert!(args.output_location().ends_with(".decls"));
    args.set_trace_extension();
    assert!(args.output_location().ends_with(".dtrace"));
    assert!(!args.output_location().ends_with(".decls"));
}

#[test]
fn test_explicit_output_location_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let target = target_in(&dir, "App.exe");
    let args = FrontEndArgs::parse(&[
        "--output-location=run1.dtrace",
        target.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(args.output_location(), "run1.dtrace");
}
