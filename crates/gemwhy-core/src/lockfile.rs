//! Line-based parser for `Gemfile.lock`.
//!
//! The lockfile is a bespoke indented format, not TOML or YAML. Sections are
//! unindented all-caps headers (`GEM`, `PATH`, `GIT`, `DEPENDENCIES`, ...);
//! resolved specs sit at four spaces of indent as `name (version)`, with
//! their declared dependencies below at six spaces. Only the sections that
//! feed the reverse-dependency model are ingested; `PLATFORMS`,
//! `RUBY VERSION` and `BUNDLED WITH` are skipped.

use std::path::{Path, PathBuf};

use crate::errors::GemwhyError;
use crate::package::{DependencyReq, Manifest, Package};

/// Requirement recorded for a dependency line with no parenthesized
/// requirement, matching Bundler's "any version" default.
const ANY_REQUIREMENT: &str = ">= 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Gem,
    Path,
    Git,
    Dependencies,
    Skipped,
    None,
}

impl Section {
    fn from_header(line: &str) -> Option<Section> {
        match line {
            "GEM" => Some(Section::Gem),
            "PATH" => Some(Section::Path),
            "GIT" => Some(Section::Git),
            "DEPENDENCIES" => Some(Section::Dependencies),
            "PLATFORMS" | "RUBY VERSION" | "BUNDLED WITH" | "CHECKSUMS" => Some(Section::Skipped),
            _ => None,
        }
    }

    /// Whether specs in this section carry a filesystem/repository origin.
    fn records_origin(self) -> bool {
        matches!(self, Section::Path | Section::Git)
    }
}

/// Load and parse a `Gemfile.lock` from the given path.
pub fn from_path(path: &Path) -> miette::Result<Manifest> {
    let content = std::fs::read_to_string(path).map_err(|e| GemwhyError::Lockfile {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    parse(&content).map_err(Into::into)
}

/// Parse lockfile text into a [`Manifest`].
///
/// Packages keep lockfile order. Duplicate spec names (multi-platform
/// lockfiles list one spec per platform) keep the first occurrence.
pub fn parse(content: &str) -> Result<Manifest, GemwhyError> {
    let mut manifest = Manifest::default();
    let mut section = Section::None;
    let mut saw_section = false;
    let mut current_origin: Option<PathBuf> = None;

    for raw in content.lines() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with(' ') {
            match Section::from_header(line) {
                Some(s) => {
                    section = s;
                    saw_section = true;
                    current_origin = None;
                }
                None => section = Section::None,
            }
            continue;
        }

        match section {
            Section::Gem | Section::Path | Section::Git => {
                let indent = line.len() - line.trim_start().len();
                let body = line.trim_start();
                match indent {
                    2 => {
                        // Section metadata: remote, revision, branch, specs:
                        if section.records_origin() {
                            if let Some(remote) = body.strip_prefix("remote: ") {
                                current_origin = Some(PathBuf::from(remote));
                            }
                        }
                    }
                    4 => {
                        let (name, version) = split_name_parens(body);
                        if !manifest.packages.iter().any(|p| p.name == name) {
                            manifest.packages.push(Package {
                                name,
                                version: version.unwrap_or_default(),
                                deps: Vec::new(),
                                origin: current_origin.clone(),
                            });
                        }
                    }
                    6 => {
                        let (name, requirement) = split_name_parens(body);
                        if let Some(pkg) = manifest.packages.last_mut() {
                            pkg.deps.push(DependencyReq {
                                name,
                                requirement: requirement
                                    .unwrap_or_else(|| ANY_REQUIREMENT.to_string()),
                            });
                        }
                    }
                    _ => {}
                }
            }
            Section::Dependencies => {
                let body = line.trim_start();
                // Trailing `!` marks a PATH/GIT sourced dependency.
                let (name, _req) = split_name_parens(body.trim_end_matches('!'));
                if !manifest.top_level.iter().any(|n| n == &name) {
                    manifest.top_level.push(name);
                }
            }
            Section::Skipped | Section::None => {}
        }
    }

    if !saw_section {
        return Err(GemwhyError::Lockfile {
            message: "No recognizable sections; this does not look like a Gemfile.lock"
                .to_string(),
        });
    }

    tracing::debug!(
        packages = manifest.packages.len(),
        top_level = manifest.top_level.len(),
        "parsed lockfile"
    );
    Ok(manifest)
}

/// Split `name (value)` into the name and the parenthesized value, if any.
fn split_name_parens(entry: &str) -> (String, Option<String>) {
    match entry.split_once(" (") {
        Some((name, rest)) => {
            let value = rest.strip_suffix(')').unwrap_or(rest);
            (name.to_string(), Some(value.to_string()))
        }
        None => (entry.to_string(), None),
    }
}
