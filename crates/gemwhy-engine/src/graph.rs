//! Reverse-dependency graph index built once from a manifest.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use gemwhy_core::package::Manifest;

/// A node in the dependency graph.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PackageNode {
    pub name: String,
    pub version: String,
}

/// Directed graph of the resolved bundle, backed by petgraph.
///
/// Edges point in the "depends on" direction, with the requirement string as
/// the edge weight; dependents of a package are its incoming edges. Nodes are
/// added in manifest order, so ascending node index is manifest order.
pub struct DependencyGraph {
    graph: DiGraph<PackageNode, String>,
    /// Lookup from exact package name to node index.
    index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Build the index from a manifest. Dependency entries naming a package
    /// that is not in the manifest produce no edge.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        for pkg in &manifest.packages {
            if index.contains_key(&pkg.name) {
                continue;
            }
            let idx = graph.add_node(PackageNode {
                name: pkg.name.clone(),
                version: pkg.version.clone(),
            });
            index.insert(pkg.name.clone(), idx);
        }

        for pkg in &manifest.packages {
            let Some(&from) = index.get(&pkg.name) else {
                continue;
            };
            for dep in &pkg.deps {
                let Some(&to) = index.get(&dep.name) else {
                    continue;
                };
                // At most one requirement per directed edge.
                if !graph.edges(from).any(|e| e.target() == to) {
                    graph.add_edge(from, to, dep.requirement.clone());
                }
            }
        }

        Self { graph, index }
    }

    /// Resolve a user-supplied name: exact match first, then the first
    /// case-insensitive match in manifest order.
    pub fn resolve(&self, name: &str) -> Option<NodeIndex> {
        if let Some(&idx) = self.index.get(name) {
            return Some(idx);
        }
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].name.eq_ignore_ascii_case(name))
    }

    /// Node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &PackageNode {
        &self.graph[idx]
    }

    /// Direct dependents of a node with their requirement strings, in
    /// manifest order.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &str)> {
        let mut dependents: Vec<(NodeIndex, &str)> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.source(), e.weight().as_str()))
            .collect();
        // petgraph iterates incoming edges newest-first; node index order
        // restores manifest order.
        dependents.sort_by_key(|(source, _)| source.index());
        dependents
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
