use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single resolved package from the lockfile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    /// Resolved version, kept as an opaque string. Lockfile versions may
    /// carry platform suffixes (`1.15.4-x86_64-linux`) that are not semver.
    pub version: String,
    /// The dependencies this package declares, with their requirement strings.
    #[serde(default)]
    pub deps: Vec<DependencyReq>,
    /// Filesystem origin for `PATH`/`GIT` sourced packages; absent for
    /// registry gems.
    #[serde(default)]
    pub origin: Option<PathBuf>,
}

/// A declared dependency edge: target name plus the literal requirement
/// string that justified it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReq {
    pub name: String,
    pub requirement: String,
}

impl Package {
    /// True if this package declares a dependency on `name` (exact match).
    pub fn depends_on(&self, name: &str) -> bool {
        self.deps.iter().any(|d| d.name == name)
    }
}

/// The fully resolved bundle: every package plus the project's top-level
/// declared dependency names.
///
/// Package order is lockfile order and is the deterministic iteration order
/// for every query that reports "manifest order".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub packages: Vec<Package>,
    /// Names from the `DEPENDENCIES` section of the lockfile.
    #[serde(default)]
    pub top_level: Vec<String>,
}

impl Manifest {
    /// True if `name` is one of the project's direct requirements.
    pub fn is_top_level(&self, name: &str) -> bool {
        self.top_level.iter().any(|n| n == name)
    }
}
