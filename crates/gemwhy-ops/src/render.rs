//! Plain-text rendering of an [`Explanation`].
//!
//! All formatting lives here; the engine only produces data. Output mirrors
//! the classic `bundle why` layout: a `name (version)` header, a dependents
//! tree drawn with box glyphs, chain lines, and the install location when
//! one is known.

use gemwhy_engine::{Explanation, TreeNode};

const NO_DEPENDENTS: &str = "Not required by any other packages (may be a direct dependency)";

/// Default view: dependents tree plus root-cause chains.
pub fn render_tree(explanation: &Explanation, max_depth: Option<usize>) -> String {
    let mut out = header(explanation);

    if explanation.dependents_tree.is_empty() {
        out.push_str(NO_DEPENDENTS);
        out.push('\n');
    } else {
        out.push_str("Directly required by:\n");
        render_nodes(&mut out, &explanation.dependents_tree, "", 1, max_depth);
    }

    if !explanation.chains.is_empty() {
        out.push('\n');
        out.push_str(&chain_lines(explanation));
    }

    push_location(&mut out, explanation);
    out
}

/// Flat view: the transitive dependents list instead of the tree.
pub fn render_flat(explanation: &Explanation) -> String {
    let mut out = header(explanation);

    if explanation.all_dependents.is_empty() {
        out.push_str(NO_DEPENDENTS);
        out.push('\n');
    } else {
        out.push_str("Required by:\n");
        for dependent in &explanation.all_dependents {
            out.push_str(&format!("  {} ({})\n", dependent.name, dependent.version));
        }
    }

    push_location(&mut out, explanation);
    out
}

/// Chains-only view.
pub fn render_chains(explanation: &Explanation) -> String {
    let mut out = header(explanation);
    if explanation.chains.is_empty() {
        out.push_str("No dependency chain from a top-level gem.\n");
    } else {
        out.push_str(&chain_lines(explanation));
    }
    out
}

fn header(explanation: &Explanation) -> String {
    format!("{} ({})\n\n", explanation.name, explanation.version)
}

fn chain_lines(explanation: &Explanation) -> String {
    let mut out = String::from("Dependency chains:\n");
    for chain in &explanation.chains {
        out.push_str(&format!("  {}\n", chain.join(" > ")));
    }
    out
}

fn push_location(out: &mut String, explanation: &Explanation) {
    if let Some(origin) = &explanation.origin {
        out.push('\n');
        out.push_str(&format!("Location: {}\n", origin.display()));
    }
}

fn render_nodes(
    out: &mut String,
    nodes: &[TreeNode],
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
) {
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "  └── " } else { "  ├── " };
        out.push_str(&format!(
            "{prefix}{connector}{} ({}) [{}]\n",
            node.name, node.version, node.requirement
        ));

        if let Some(max) = max_depth {
            if depth >= max {
                continue;
            }
        }
        if !node.children.is_empty() {
            let child_prefix = format!("{prefix}{}", if is_last { "      " } else { "  │   " });
            render_nodes(out, &node.children, &child_prefix, depth + 1, max_depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemwhy_engine::{Dependent, DependentSummary};

    fn node(name: &str, requirement: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            version: "1.0".to_string(),
            requirement: requirement.to_string(),
            children,
        }
    }

    fn explanation() -> Explanation {
        Explanation {
            name: "leaf".to_string(),
            version: "2.3".to_string(),
            origin: None,
            direct_dependents: vec![Dependent {
                name: "mid".to_string(),
                version: "1.0".to_string(),
                requirement: ">= 2.0".to_string(),
            }],
            all_dependents: vec![
                DependentSummary {
                    name: "mid".to_string(),
                    version: "1.0".to_string(),
                },
                DependentSummary {
                    name: "app".to_string(),
                    version: "1.0".to_string(),
                },
            ],
            dependents_tree: vec![node(
                "mid",
                ">= 2.0",
                vec![node("app", ">= 1.0", vec![])],
            )],
            chains: vec![vec![
                "app".to_string(),
                "mid".to_string(),
                "leaf".to_string(),
            ]],
        }
    }

    #[test]
    fn tree_view_draws_glyphs_and_chains() {
        let out = render_tree(&explanation(), None);
        assert!(out.starts_with("leaf (2.3)\n\n"));
        assert!(out.contains("Directly required by:\n"));
        assert!(out.contains("  └── mid (1.0) [>= 2.0]\n"));
        assert!(out.contains("        └── app (1.0) [>= 1.0]\n"));
        assert!(out.contains("Dependency chains:\n  app > mid > leaf\n"));
    }

    #[test]
    fn tree_view_depth_clamp() {
        let out = render_tree(&explanation(), Some(1));
        assert!(out.contains("mid (1.0)"));
        assert!(!out.contains("app (1.0) [>= 1.0]"));
    }

    #[test]
    fn empty_tree_prints_warning() {
        let mut expl = explanation();
        expl.dependents_tree.clear();
        expl.chains.clear();
        let out = render_tree(&expl, None);
        assert!(out.contains(NO_DEPENDENTS));
    }

    #[test]
    fn flat_view_lists_all_dependents() {
        let out = render_flat(&explanation());
        assert!(out.contains("Required by:\n  mid (1.0)\n  app (1.0)\n"));
    }

    #[test]
    fn location_is_appended_when_present() {
        let mut expl = explanation();
        expl.origin = Some("../vendor/leaf".into());
        let out = render_tree(&expl, None);
        assert!(out.ends_with("Location: ../vendor/leaf\n"));
    }

    #[test]
    fn chains_view_handles_empty() {
        let mut expl = explanation();
        expl.chains.clear();
        let out = render_chains(&expl);
        assert!(out.contains("No dependency chain"));
    }
}
