//! Depth-bounded dependents tree.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::Engine;

/// Safety bound on tree recursion depth. Branches are silently truncated
/// past this depth; it guards against runaway graphs, it is not a semantic
/// limit on the output.
pub const MAX_TREE_DEPTH: usize = 10;

/// One node of the dependents tree: a package that requires its parent,
/// with its own dependents as children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub version: String,
    pub requirement: String,
    pub children: Vec<TreeNode>,
}

impl Engine {
    /// Recursive tree of direct dependents for `name`, one level of children
    /// per dependent, down to [`MAX_TREE_DEPTH`].
    ///
    /// The cycle guard is branch-local: the visited set is cloned per branch,
    /// so a package may appear in separate sibling subtrees but never twice
    /// along one root-to-leaf path. This differs deliberately from
    /// [`Engine::all_dependents`], which deduplicates globally. Unknown
    /// names yield an empty tree.
    pub fn dependents_tree(&self, name: &str) -> Vec<TreeNode> {
        let Some(idx) = self.graph.resolve(name) else {
            return Vec::new();
        };
        self.tree_level(idx, &HashSet::new(), 0)
    }

    fn tree_level(
        &self,
        idx: NodeIndex,
        visited: &HashSet<NodeIndex>,
        depth: usize,
    ) -> Vec<TreeNode> {
        if depth > MAX_TREE_DEPTH {
            return Vec::new();
        }
        // Branch-local guard: clone so siblings are isolated from each
        // other's visits.
        let mut visited = visited.clone();
        visited.insert(idx);

        self.graph
            .dependents_of(idx)
            .into_iter()
            .filter(|(dep_idx, _)| !visited.contains(dep_idx))
            .map(|(dep_idx, requirement)| {
                let node = self.graph.node(dep_idx);
                TreeNode {
                    name: node.name.clone(),
                    version: node.version.clone(),
                    requirement: requirement.to_string(),
                    children: self.tree_level(dep_idx, &visited, depth + 1),
                }
            })
            .collect()
    }
}
