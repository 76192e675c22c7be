//! Target program identity
//!
//! The front end never loads the target itself. Resolving a binary path to
//! an assembly name, and copying the binary for the wrap-for-save mode, go
//! through a [`TargetHost`] so the binary-format reader stays swappable.

use crate::error::{ArgsError, Result};
use object::Object;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Name and location of the program being instrumented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetIdentity {
    pub assembly_name: String,
    pub assembly_path: PathBuf,
}

/// Capabilities the front end borrows from its environment
pub trait TargetHost {
    /// Resolve the binary at `path` to its identity
    fn resolve_identity(&self, path: &Path) -> Result<TargetIdentity>;

    /// Copy the binary at `from` to `to`
    fn duplicate(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Default host: probes the target with the `object` crate
///
/// Accepts anything `object` can parse (PE, ELF, Mach-O) and names the
/// assembly after the file stem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectFileHost;

impl ObjectFileHost {
    fn probe(path: &Path) -> std::result::Result<(), String> {
        let file = File::open(path).map_err(|e| e.to_string())?;
        let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| e.to_string())?;
        let object = object::File::parse(&*mmap).map_err(|e| e.to_string())?;
        tracing::debug!(
            "target {} is a {:?} binary",
            path.display(),
            object.format()
        );
        Ok(())
    }
}

impl TargetHost for ObjectFileHost {
    fn resolve_identity(&self, path: &Path) -> Result<TargetIdentity> {
        if !path.exists() {
            return Err(ArgsError::TargetResolution {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }

        Self::probe(path).map_err(|reason| ArgsError::TargetResolution {
            path: path.to_path_buf(),
            reason,
        })?;

        let assembly_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ArgsError::TargetResolution {
                path: path.to_path_buf(),
                reason: "path has no file name".to_string(),
            })?;

        Ok(TargetIdentity {
            assembly_name,
            assembly_path: path.to_path_buf(),
        })
    }

    fn duplicate(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::copy(from, to).map_err(|e| ArgsError::file_access(from, e))?;
        Ok(())
    }
}
