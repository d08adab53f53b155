//! Direct and transitive dependent queries.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::Engine;

/// A package that directly depends on the queried one, with the requirement
/// string from its declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub name: String,
    pub version: String,
    pub requirement: String,
}

/// A package that depends on the queried one directly or transitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentSummary {
    pub name: String,
    pub version: String,
}

impl Engine {
    /// Every package whose declared dependencies reference `name`, in
    /// manifest order. Unknown names yield an empty list.
    pub fn direct_dependents(&self, name: &str) -> Vec<Dependent> {
        let Some(idx) = self.graph.resolve(name) else {
            return Vec::new();
        };
        self.graph
            .dependents_of(idx)
            .into_iter()
            .map(|(dep_idx, requirement)| {
                let node = self.graph.node(dep_idx);
                Dependent {
                    name: node.name.clone(),
                    version: node.version.clone(),
                    requirement: requirement.to_string(),
                }
            })
            .collect()
    }

    /// The full set of packages that depend on `name`, directly or
    /// indirectly, deduplicated by name in breadth-first discovery order.
    ///
    /// The queried package is never part of its own result, even when a
    /// dependency cycle routes back to it. The global visited set guarantees
    /// termination on cyclic graphs.
    pub fn all_dependents(&self, name: &str) -> Vec<DependentSummary> {
        let Some(target) = self.graph.resolve(name) else {
            return Vec::new();
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut discovered: HashSet<NodeIndex> = HashSet::new();
        let mut result: Vec<NodeIndex> = Vec::new();
        let mut queue: VecDeque<NodeIndex> = VecDeque::from([target]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            for (dep_idx, _) in self.graph.dependents_of(current) {
                if dep_idx != target && discovered.insert(dep_idx) {
                    result.push(dep_idx);
                }
                if !visited.contains(&dep_idx) {
                    queue.push_back(dep_idx);
                }
            }
        }

        result
            .into_iter()
            .map(|idx| {
                let node = self.graph.node(idx);
                DependentSummary {
                    name: node.name.clone(),
                    version: node.version.clone(),
                }
            })
            .collect()
    }
}
