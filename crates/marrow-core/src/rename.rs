//! The rename pass.
//!
//! A single in-order traversal of the flat node table. Every node whose name
//! starts with the prefix gets the next counter value appended; everything
//! else is left alone. Each node is tested once, against the name it had on
//! entry, so names produced by the pass are never re-matched.

use crate::schema::Node;

/// One planned rename, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Index into the node table.
    pub index: usize,
    /// Name before the pass.
    pub from: String,
    /// Name after the pass.
    pub to: String,
}

/// Compute the renames a pass over `nodes` would perform, without mutating.
///
/// The k-th matching node (1-based, in slice order) is assigned the suffix k.
/// Matching is case-sensitive and anchored at position 0; a name exactly
/// equal to the prefix matches. Nodes with an absent or empty name never
/// match a non-empty prefix. `prefix` is expected to be non-empty.
pub fn plan_renames(nodes: &[Node], prefix: &str) -> Vec<Rename> {
    let mut plan = Vec::new();
    let mut counter = 1usize;

    for (index, node) in nodes.iter().enumerate() {
        let Some(name) = node.name.as_deref() else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        plan.push(Rename {
            index,
            from: name.to_owned(),
            to: format!("{}{}", name, counter),
        });
        counter += 1;
    }

    plan
}

/// Rename every node whose name starts with `prefix`, in place.
///
/// Applies exactly the plan [`plan_renames`] produces and returns the number
/// of nodes renamed. Only the `name` member of matching nodes is written.
pub fn rename_matching(nodes: &mut [Node], prefix: &str) -> usize {
    let plan = plan_renames(nodes, prefix);
    for rename in &plan {
        nodes[rename.index].name = Some(rename.to.clone());
    }
    plan.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[Node]) -> Vec<Option<&str>> {
        nodes.iter().map(|n| n.name.as_deref()).collect()
    }

    fn named_nodes(names: &[&str]) -> Vec<Node> {
        names.iter().map(|n| Node::named(*n)).collect()
    }

    #[test]
    fn test_basic_sequence() {
        // A name equal to the prefix matches; later duplicates keep counting
        let mut nodes = named_nodes(&["Bone", "Mesh1", "BoneArm", "Bone"]);
        let count = rename_matching(&mut nodes, "Bone");

        assert_eq!(count, 3);
        assert_eq!(
            names(&nodes),
            [Some("Bone1"), Some("Mesh1"), Some("BoneArm2"), Some("Bone3")]
        );
    }

    #[test]
    fn test_no_matches_leaves_input_untouched() {
        let mut nodes = named_nodes(&["Mesh", "Armature", "Camera"]);
        let before = nodes.clone();

        let count = rename_matching(&mut nodes, "Bone");
        assert_eq!(count, 0);
        assert_eq!(nodes, before);
    }

    #[test]
    fn test_absent_name_is_skipped() {
        let mut nodes = vec![Node::named("Bone"), Node::default(), Node::named("BoneTail")];
        let count = rename_matching(&mut nodes, "Bone");

        assert_eq!(count, 2);
        assert_eq!(names(&nodes), [Some("Bone1"), None, Some("BoneTail2")]);
    }

    #[test]
    fn test_empty_name_is_skipped() {
        let mut nodes = named_nodes(&["", "Bone"]);
        let count = rename_matching(&mut nodes, "Bone");

        assert_eq!(count, 1);
        assert_eq!(names(&nodes), [Some(""), Some("Bone1")]);
    }

    #[test]
    fn test_empty_node_list() {
        let mut nodes: Vec<Node> = vec![];
        assert_eq!(rename_matching(&mut nodes, "Bone"), 0);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut nodes = named_nodes(&["bone", "BONE", "Bone"]);
        let count = rename_matching(&mut nodes, "Bone");

        assert_eq!(count, 1);
        assert_eq!(names(&nodes), [Some("bone"), Some("BONE"), Some("Bone1")]);
    }

    #[test]
    fn test_match_is_anchored_at_start() {
        let mut nodes = named_nodes(&["LeftBone", "Bone"]);
        let count = rename_matching(&mut nodes, "Bone");

        assert_eq!(count, 1);
        assert_eq!(names(&nodes), [Some("LeftBone"), Some("Bone1")]);
    }

    #[test]
    fn test_non_name_members_untouched() {
        let mut node = Node::named("Bone");
        node.mesh = Some(3);
        node.children = vec![1, 2];
        node.rest.insert("translation".into(), serde_json::json!([1.0, 2.0, 3.0]));
        let mut nodes = vec![node];

        rename_matching(&mut nodes, "Bone");
        assert_eq!(nodes[0].name.as_deref(), Some("Bone1"));
        assert_eq!(nodes[0].mesh, Some(3));
        assert_eq!(nodes[0].children, [1, 2]);
        assert_eq!(nodes[0].rest["translation"], serde_json::json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_not_idempotent() {
        // "Bone1" still starts with "Bone", so a second pass renames again
        let mut once = named_nodes(&["Bone"]);
        rename_matching(&mut once, "Bone");
        assert_eq!(names(&once), [Some("Bone1")]);

        let mut twice = once.clone();
        rename_matching(&mut twice, "Bone");
        assert_eq!(names(&twice), [Some("Bone11")]);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_plan_matches_apply() {
        let nodes = named_nodes(&["Bone", "Mesh", "BoneArm"]);
        let plan = plan_renames(&nodes, "Bone");

        assert_eq!(
            plan,
            [
                Rename { index: 0, from: "Bone".into(), to: "Bone1".into() },
                Rename { index: 2, from: "BoneArm".into(), to: "BoneArm2".into() },
            ]
        );

        let mut applied = nodes.clone();
        rename_matching(&mut applied, "Bone");
        for rename in &plan {
            assert_eq!(applied[rename.index].name.as_deref(), Some(rename.to.as_str()));
        }
    }
}
