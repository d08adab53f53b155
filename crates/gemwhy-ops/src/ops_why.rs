//! Operation: explain why a package is present in the bundle.

use std::path::Path;

use gemwhy_core::errors::{GemwhyError, GemwhyResult};
use gemwhy_core::lockfile;
use gemwhy_engine::Engine;

use crate::render;

/// Output mode for `gemwhy <package>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Dependents tree plus root-cause chains (the default view).
    #[default]
    Tree,
    /// Flat transitive dependents list instead of the tree.
    Flat,
    /// Root-cause chains only.
    Chains,
    /// The full explanation as pretty-printed JSON.
    Json,
}

/// Options for the why operation.
#[derive(Debug, Default)]
pub struct WhyOptions {
    pub mode: OutputMode,
    /// Clamp rendered tree depth. The engine's own safety bound still
    /// applies.
    pub depth: Option<usize>,
}

/// Load the lockfile, query the engine, and render the result.
///
/// An unknown package is reported as [`GemwhyError::PackageNotFound`]; the
/// caller maps it to a non-zero exit.
pub fn why(lockfile_path: &Path, package: &str, opts: &WhyOptions) -> GemwhyResult<String> {
    let manifest = lockfile::from_path(lockfile_path)?;
    tracing::debug!(
        lockfile = %lockfile_path.display(),
        packages = manifest.packages.len(),
        "loaded lockfile"
    );

    let engine = Engine::new(manifest);
    let explanation = engine
        .explain(package)
        .ok_or_else(|| GemwhyError::PackageNotFound {
            name: package.to_string(),
        })?;

    match opts.mode {
        OutputMode::Json => serde_json::to_string_pretty(&explanation).map_err(|e| {
            GemwhyError::Generic {
                message: format!("Failed to serialize explanation: {e}"),
            }
            .into()
        }),
        OutputMode::Chains => Ok(render::render_chains(&explanation)),
        OutputMode::Flat => Ok(render::render_flat(&explanation)),
        OutputMode::Tree => Ok(render::render_tree(&explanation, opts.depth)),
    }
}
