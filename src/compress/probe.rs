//! Ghostscript availability probing
//!
//! The probe is a trait so callers can pin the outcome in tests instead of
//! depending on what happens to be installed on `PATH`.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::defaults::GHOSTSCRIPT_CANDIDATES;

/// Locates an external PDF optimizer executable
pub trait OptimizerProbe {
    fn locate(&self) -> Option<PathBuf>;
}

/// Searches the process `PATH` for the platform's Ghostscript names.
///
/// Nothing is cached; each call walks `PATH` again.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPath;

impl OptimizerProbe for SearchPath {
    fn locate(&self) -> Option<PathBuf> {
        let path_var = env::var_os("PATH")?;
        let dirs: Vec<PathBuf> = env::split_paths(&path_var).collect();

        for name in GHOSTSCRIPT_CANDIDATES {
            if let Some(found) = find_executable(&dirs, name) {
                log::debug!("Found Ghostscript at {}", found.display());
                return Some(found);
            }
            log::debug!("{} not found on PATH", name);
        }
        None
    }
}

/// Always reports the given executable
#[derive(Debug, Clone)]
pub struct Available(pub PathBuf);

impl OptimizerProbe for Available {
    fn locate(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Always reports that no optimizer is installed
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl OptimizerProbe for Unavailable {
    fn locate(&self) -> Option<PathBuf> {
        None
    }
}

fn find_executable(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    let file_name = format!("{}{}", name, env::consts::EXE_SUFFIX);
    dirs.iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
