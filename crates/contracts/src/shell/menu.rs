//! Navigation tree shown in the sidebar and used to synthesize routes.

use super::routes::normalize_path;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Menu shipped with the portal.
const BUILTIN_MENU: &str = include_str!("menu.json");

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("malformed menu definition: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate menu id '{id}' under '{parent}'")]
    DuplicateId { parent: String, id: String },
}

// ============================================================================
// Declarative form
// ============================================================================

/// Menu node as written in `menu.json`.
///
/// Both `path` and `children` are optional here; [`MenuNode::from`] decides
/// which one is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNodeConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuNodeConfig>>,
}

// ============================================================================
// Tree
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// Navigable item. A leaf without a path is inert.
    Leaf {
        id: String,
        label: String,
        icon: String,
        path: Option<String>,
    },
    /// Section with at least one child.
    Branch {
        id: String,
        label: String,
        icon: String,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    pub fn leaf(id: &str, label: &str, icon: &str, path: &str) -> Self {
        MenuNode::Leaf {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            path: Some(path.to_string()),
        }
    }

    pub fn branch(id: &str, label: &str, icon: &str, children: Vec<MenuNode>) -> Self {
        MenuNode::Branch {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            children,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            MenuNode::Leaf { id, .. } | MenuNode::Branch { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuNode::Leaf { label, .. } | MenuNode::Branch { label, .. } => label,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            MenuNode::Leaf { icon, .. } | MenuNode::Branch { icon, .. } => icon,
        }
    }

    /// Routing path of a leaf. Branches never route.
    pub fn path(&self) -> Option<&str> {
        match self {
            MenuNode::Leaf { path, .. } => path.as_deref(),
            MenuNode::Branch { .. } => None,
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Leaf { .. } => &[],
            MenuNode::Branch { children, .. } => children,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, MenuNode::Branch { .. })
    }
}

impl From<MenuNodeConfig> for MenuNode {
    /// Non-empty `children` make a branch and any `path` is dropped.
    /// Empty or absent `children` make a leaf on `path`.
    fn from(config: MenuNodeConfig) -> Self {
        let MenuNodeConfig {
            id,
            label,
            icon,
            path,
            children,
        } = config;

        match children {
            Some(children) if !children.is_empty() => MenuNode::Branch {
                id,
                label,
                icon,
                children: children.into_iter().map(MenuNode::from).collect(),
            },
            _ => MenuNode::Leaf {
                id,
                label,
                icon,
                path,
            },
        }
    }
}

/// Ordered forest of menu nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(roots: Vec<MenuNode>) -> Result<Self, MenuError> {
        check_sibling_ids("<root>", &roots)?;
        Ok(Self { roots })
    }

    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let configs: Vec<MenuNodeConfig> = serde_json::from_str(json)?;
        Self::new(configs.into_iter().map(MenuNode::from).collect())
    }

    /// Portal menu from `menu.json`.
    ///
    /// Panics when the bundled definition is broken: that is a build defect
    /// and must stop the application at startup.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_MENU).expect("bundled menu.json is invalid")
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    /// Depth-first, pre-order visit of every node.
    pub fn walk<F: FnMut(&MenuNode)>(&self, mut visit: F) {
        fn go<F: FnMut(&MenuNode)>(nodes: &[MenuNode], visit: &mut F) {
            for node in nodes {
                visit(node);
                go(node.children(), visit);
            }
        }
        go(&self.roots, &mut visit);
    }

    /// Ids from the root down to the leaf routed at `path`, compared after
    /// [`normalize_path`]. Empty when no leaf has that path.
    pub fn trail_to(&self, path: &str) -> Vec<String> {
        fn go(nodes: &[MenuNode], path: &str, trail: &mut Vec<String>) -> bool {
            for node in nodes {
                trail.push(node.id().to_string());
                let found = match node {
                    MenuNode::Leaf { path: Some(p), .. } => normalize_path(p) == path,
                    MenuNode::Leaf { .. } => false,
                    MenuNode::Branch { children, .. } => go(children, path, trail),
                };
                if found {
                    return true;
                }
                trail.pop();
            }
            false
        }

        let path = normalize_path(path);
        let mut trail = Vec::new();
        go(&self.roots, &path, &mut trail);
        trail
    }
}

fn check_sibling_ids(parent: &str, nodes: &[MenuNode]) -> Result<(), MenuError> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.id()) {
            return Err(MenuError::DuplicateId {
                parent: parent.to_string(),
                id: node.id().to_string(),
            });
        }
        check_sibling_ids(node.id(), node.children())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_menu_loads() {
        let tree = MenuTree::builtin();
        assert!(!tree.roots().is_empty());
        assert_eq!(tree.roots()[0].path(), Some("/"));
    }

    #[test]
    fn children_win_over_path() {
        let tree = MenuTree::from_json(
            r#"[{"id":"s","label":"Section","path":"/s","children":[
                {"id":"a","label":"A","path":"/s/a"}]}]"#,
        )
        .unwrap();
        let section = &tree.roots()[0];
        assert!(section.is_branch());
        assert_eq!(section.path(), None);
        assert_eq!(section.children().len(), 1);
    }

    #[test]
    fn empty_children_fall_back_to_path() {
        let tree =
            MenuTree::from_json(r#"[{"id":"s","label":"S","path":"/s","children":[]}]"#).unwrap();
        assert_eq!(tree.roots()[0], MenuNode::leaf("s", "S", "", "/s"));

        let tree = MenuTree::from_json(r#"[{"id":"s","label":"S","children":[]}]"#).unwrap();
        assert!(!tree.roots()[0].is_branch());
        assert_eq!(tree.roots()[0].path(), None);
    }

    #[test]
    fn children_must_be_a_sequence() {
        let err = MenuTree::from_json(r#"[{"id":"s","label":"S","children":{"id":"x"}}]"#)
            .unwrap_err();
        assert!(matches!(err, MenuError::Malformed(_)));
    }

    #[test]
    fn duplicate_sibling_ids_are_rejected() {
        let err = MenuTree::new(vec![
            MenuNode::leaf("a", "A", "", "/a"),
            MenuNode::leaf("a", "A again", "", "/b"),
        ])
        .unwrap_err();
        assert!(matches!(err, MenuError::DuplicateId { ref id, .. } if id == "a"));

        // same id under different parents is fine
        MenuTree::new(vec![
            MenuNode::branch("x", "X", "", vec![MenuNode::leaf("item", "I", "", "/x")]),
            MenuNode::branch("y", "Y", "", vec![MenuNode::leaf("item", "I", "", "/y")]),
        ])
        .unwrap();
    }

    #[test]
    fn trail_to_finds_nested_leaf() {
        let tree = MenuTree::builtin();
        assert_eq!(tree.trail_to("/parameters/merchant"), vec!["parameters", "merchant"]);
        assert_eq!(tree.trail_to("/"), vec!["dashboard"]);
        assert!(tree.trail_to("/nowhere").is_empty());
    }

    #[test]
    fn trail_to_ignores_trailing_slashes() {
        let tree = MenuTree::new(vec![MenuNode::branch(
            "m",
            "M",
            "",
            vec![MenuNode::leaf("isos", "ISOs", "", "/isos/")],
        )])
        .unwrap();
        assert_eq!(tree.trail_to("/isos"), vec!["m", "isos"]);
        assert_eq!(tree.trail_to("/isos/?page=2"), vec!["m", "isos"]);
    }

    #[test]
    fn walk_is_pre_order() {
        let tree = MenuTree::new(vec![
            MenuNode::branch(
                "a",
                "A",
                "",
                vec![
                    MenuNode::leaf("a1", "A1", "", "/a1"),
                    MenuNode::branch("a2", "A2", "", vec![MenuNode::leaf("a2x", "X", "", "/x")]),
                ],
            ),
            MenuNode::leaf("b", "B", "", "/b"),
        ])
        .unwrap();

        let mut ids = Vec::new();
        tree.walk(|n| ids.push(n.id().to_string()));
        assert_eq!(ids, vec!["a", "a1", "a2", "a2x", "b"]);
    }
}
