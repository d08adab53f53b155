//! Reverse-dependency engine: given a resolved bundle, answer "why is this
//! package here?" with direct dependents, the transitive dependent set, a
//! dependents tree, and root-cause chains back to the project's top-level
//! declared dependencies.
//!
//! The engine is built once from a [`Manifest`] and performs pure in-memory
//! reads; all query results are rebuilt per call.

mod chains;
mod dependents;
mod graph;
mod tree;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use gemwhy_core::package::{Manifest, Package};

pub use dependents::{Dependent, DependentSummary};
pub use tree::{TreeNode, MAX_TREE_DEPTH};

use graph::DependencyGraph;

/// The query engine over one resolved bundle.
pub struct Engine {
    manifest: Manifest,
    graph: DependencyGraph,
}

/// Everything the engine knows about why a package is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub name: String,
    pub version: String,
    /// Filesystem origin, when the package has one (`PATH`/`GIT` sources).
    pub origin: Option<PathBuf>,
    pub direct_dependents: Vec<Dependent>,
    pub all_dependents: Vec<DependentSummary>,
    pub dependents_tree: Vec<TreeNode>,
    /// Root-cause chains, each ordered top-level dependency first, target
    /// last.
    pub chains: Vec<Vec<String>>,
}

impl Engine {
    /// Build the graph index from a manifest. The manifest is immutable for
    /// the engine's lifetime.
    pub fn new(manifest: Manifest) -> Self {
        let graph = DependencyGraph::from_manifest(&manifest);
        tracing::debug!(
            packages = graph.node_count(),
            edges = graph.edge_count(),
            top_level = manifest.top_level.len(),
            "built dependency graph"
        );
        Self { manifest, graph }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a user-supplied name to its package record: exact match
    /// first, then the first case-insensitive match in manifest order.
    /// `None` means "unknown package", a normal outcome.
    pub fn find_package(&self, name: &str) -> Option<&Package> {
        self.manifest
            .packages
            .iter()
            .find(|p| p.name == name)
            .or_else(|| {
                self.manifest
                    .packages
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(name))
            })
    }

    /// Run every query for `name` and bundle the results. `None` is the
    /// not-found signal; the caller owns user-facing messaging.
    pub fn explain(&self, name: &str) -> Option<Explanation> {
        let package = self.find_package(name)?;
        let canonical = package.name.clone();
        Some(Explanation {
            name: canonical.clone(),
            version: package.version.clone(),
            origin: package.origin.clone(),
            direct_dependents: self.direct_dependents(&canonical),
            all_dependents: self.all_dependents(&canonical),
            dependents_tree: self.dependents_tree(&canonical),
            chains: self.dependency_chains(&canonical),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use gemwhy_core::package::{DependencyReq, Manifest, Package};

    use crate::Engine;

    pub fn pkg(name: &str, version: &str, deps: &[(&str, &str)]) -> Package {
        Package {
            name: name.to_string(),
            version: version.to_string(),
            deps: deps
                .iter()
                .map(|(n, r)| DependencyReq {
                    name: n.to_string(),
                    requirement: r.to_string(),
                })
                .collect(),
            origin: None,
        }
    }

    pub fn engine(packages: Vec<Package>, top_level: &[&str]) -> Engine {
        Engine::new(Manifest {
            packages,
            top_level: top_level.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{engine, pkg};

    #[test]
    fn find_package_exact_then_case_insensitive() {
        let engine = engine(vec![pkg("Rack", "2.2.8", &[])], &[]);
        assert_eq!(engine.find_package("Rack").unwrap().version, "2.2.8");
        assert_eq!(engine.find_package("rack").unwrap().name, "Rack");
        assert!(engine.find_package("rake").is_none());
    }

    #[test]
    fn explain_bundles_every_view() {
        let engine = engine(
            vec![
                pkg("a", "1.0", &[("b", ">= 1.0")]),
                pkg("b", "1.1", &[("c", ">= 2.0")]),
                pkg("c", "2.3", &[]),
            ],
            &["a"],
        );
        let explanation = engine.explain("c").unwrap();
        assert_eq!(explanation.name, "c");
        assert_eq!(explanation.version, "2.3");
        assert_eq!(explanation.direct_dependents.len(), 1);
        assert_eq!(explanation.all_dependents.len(), 2);
        assert_eq!(explanation.dependents_tree.len(), 1);
        assert_eq!(explanation.chains, [["a", "b", "c"]]);
    }

    #[test]
    fn explain_resolves_case_insensitively() {
        let engine = engine(
            vec![pkg("a", "1.0", &[("C", ">= 0")]), pkg("C", "1.0", &[])],
            &["a"],
        );
        let explanation = engine.explain("c").unwrap();
        assert_eq!(explanation.name, "C");
        assert_eq!(explanation.direct_dependents[0].name, "a");
    }

    #[test]
    fn explain_unknown_package_is_none() {
        let engine = engine(vec![pkg("a", "1.0", &[])], &[]);
        assert!(engine.explain("missing").is_none());
    }
}
