//! Root-cause chains: paths from top-level declared dependencies down to the
//! queried package.
//!
//! Chains are found by walking upward from the target through its dependents
//! and closing a chain whenever the walk reaches a top-level declared
//! dependency. This emits every distinct path, unlike a root-side DFS that
//! stops at the first path per top-level dependency.

use petgraph::graph::NodeIndex;

use crate::Engine;

impl Engine {
    /// Every path from a top-level declared dependency to `name`, ordered
    /// root to target, deduplicated.
    ///
    /// The result is empty when the target is unknown, is itself top-level
    /// with no dependents, or is orphaned (no dependent path reaches a
    /// top-level name). The cycle guard is path-local: a walk stops, without
    /// emitting, when it revisits a name already on the path being built.
    pub fn dependency_chains(&self, name: &str) -> Vec<Vec<String>> {
        let Some(target) = self.graph.resolve(name) else {
            return Vec::new();
        };
        let target_name = self.graph.node(target).name.clone();

        let mut chains: Vec<Vec<String>> = Vec::new();
        for (dep_idx, _) in self.graph.dependents_of(target) {
            let dep_name = &self.graph.node(dep_idx).name;
            if self.manifest.is_top_level(dep_name) {
                push_unique(&mut chains, vec![dep_name.clone(), target_name.clone()]);
            } else {
                self.climb(dep_idx, &[target_name.clone()], &mut chains);
            }
        }
        chains
    }

    /// Walk upward from `current`, extending `path` (which already runs from
    /// some ancestor of the target down to the target).
    fn climb(&self, current: NodeIndex, path: &[String], chains: &mut Vec<Vec<String>>) {
        let current_name = &self.graph.node(current).name;
        if path.iter().any(|n| n == current_name) {
            return;
        }

        let dependents = self.graph.dependents_of(current);
        if dependents.is_empty() {
            if self.manifest.is_top_level(current_name) {
                push_unique(chains, prepend(current_name, path));
            }
            return;
        }

        let new_path = prepend(current_name, path);
        for (dep_idx, _) in dependents {
            let dep_name = &self.graph.node(dep_idx).name;
            if self.manifest.is_top_level(dep_name) {
                push_unique(chains, prepend(dep_name, &new_path));
            } else {
                self.climb(dep_idx, &new_path, chains);
            }
        }
    }
}

fn prepend(name: &str, path: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(path.len() + 1);
    out.push(name.to_string());
    out.extend_from_slice(path);
    out
}

fn push_unique(chains: &mut Vec<Vec<String>>, chain: Vec<String>) {
    if !chains.contains(&chain) {
        chains.push(chain);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{engine, pkg};

    #[test]
    fn single_chain_root_to_target() {
        let engine = engine(
            vec![
                pkg("a", "1.0", &[("b", ">= 1.0")]),
                pkg("b", "1.1", &[("c", ">= 2.0")]),
                pkg("c", "2.3", &[]),
            ],
            &["a"],
        );
        assert_eq!(engine.dependency_chains("c"), [["a", "b", "c"]]);
    }

    #[test]
    fn multiple_chains_one_per_path() {
        // Two top-level gems reach leaf: one directly through mid, one
        // through an extra hop.
        let engine = engine(
            vec![
                pkg("app", "1.0", &[("mid", ">= 0")]),
                pkg("tool", "1.0", &[("extra", ">= 0")]),
                pkg("extra", "1.0", &[("mid", ">= 0")]),
                pkg("mid", "1.0", &[("leaf", ">= 0")]),
                pkg("leaf", "1.0", &[]),
            ],
            &["app", "tool"],
        );
        let chains = engine.dependency_chains("leaf");
        assert_eq!(chains.len(), 2);
        assert!(chains.contains(&vec![
            "app".to_string(),
            "mid".to_string(),
            "leaf".to_string()
        ]));
        assert!(chains.contains(&vec![
            "tool".to_string(),
            "extra".to_string(),
            "mid".to_string(),
            "leaf".to_string()
        ]));
    }

    #[test]
    fn chains_start_top_level_and_end_at_target() {
        let engine = engine(
            vec![
                pkg("app", "1.0", &[("mid", ">= 0")]),
                pkg("mid", "1.0", &[("leaf", ">= 0")]),
                pkg("leaf", "1.0", &[]),
            ],
            &["app"],
        );
        for chain in engine.dependency_chains("leaf") {
            assert!(engine.manifest().is_top_level(&chain[0]));
            assert_eq!(chain.last().map(String::as_str), Some("leaf"));
        }
    }

    #[test]
    fn top_level_target_with_no_dependents_has_no_chains() {
        let engine = engine(vec![pkg("rake", "13.0.6", &[])], &["rake"]);
        assert!(engine.dependency_chains("rake").is_empty());
    }

    #[test]
    fn orphan_target_has_no_chains() {
        // loner depends on leaf but is neither top-level nor depended upon.
        let engine = engine(
            vec![pkg("loner", "1.0", &[("leaf", ">= 0")]), pkg("leaf", "1.0", &[])],
            &[],
        );
        assert!(engine.dependency_chains("leaf").is_empty());
    }

    #[test]
    fn cycle_does_not_hang_or_emit() {
        let engine = engine(
            vec![
                pkg("x", "1.0", &[("y", ">= 0")]),
                pkg("y", "1.0", &[("x", ">= 0")]),
            ],
            &[],
        );
        assert!(engine.dependency_chains("x").is_empty());
    }

    #[test]
    fn cycle_off_the_path_still_reaches_top_level() {
        // app -> a -> leaf, with a <-> b cycle hanging off a.
        let engine = engine(
            vec![
                pkg("app", "1.0", &[("a", ">= 0")]),
                pkg("a", "1.0", &[("leaf", ">= 0"), ("b", ">= 0")]),
                pkg("b", "1.0", &[("a", ">= 0")]),
                pkg("leaf", "1.0", &[]),
            ],
            &["app"],
        );
        let chains = engine.dependency_chains("leaf");
        assert!(chains.contains(&vec![
            "app".to_string(),
            "a".to_string(),
            "leaf".to_string()
        ]));
    }
}
