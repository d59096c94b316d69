//! Route table of the portal.
//!
//! Hand-registered routes come first, then the bindings synthesized from the
//! menu tree, then the not-found fallback. Paths are stored normalized (see
//! [`normalize_path`]) and are unique: the first registration of a path wins
//! and later ones are rejected.

use super::menu::{MenuNode, MenuTree};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Identifies the view rendered for a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum ViewKey {
    Dashboard,
    Banks,
    Profile,
    /// Generic section page titled with the menu label.
    Generic(String),
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKey::Dashboard => f.write_str("dashboard"),
            ViewKey::Banks => f.write_str("banks"),
            ViewKey::Profile => f.write_str("profile"),
            ViewKey::Generic(label) => write!(f, "generic({label})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteBinding {
    pub path: String,
    pub view_key: ViewKey,
}

impl RouteBinding {
    pub fn new(path: &str, view_key: ViewKey) -> Self {
        Self {
            path: path.to_string(),
            view_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("route '{path}' is already bound to {existing}, {rejected} ignored")]
    DuplicatePath {
        path: String,
        existing: ViewKey,
        rejected: ViewKey,
    },

    #[error("menu item '{id}' has a relative path '{path}'")]
    RelativePath { id: String, path: String },
}

// ============================================================================
// Synthesis
// ============================================================================

/// Output of [`RouteSynthesizer::synthesize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    pub bindings: Vec<RouteBinding>,
    pub rejected: Vec<ConfigurationError>,
}

/// Turns a menu tree into route bindings.
#[derive(Debug, Clone, Default)]
pub struct RouteSynthesizer {
    reserved: HashSet<String>,
    dedicated: HashMap<String, ViewKey>,
}

impl RouteSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip `path`: it is bound to a hand-written view elsewhere.
    pub fn reserve(mut self, path: &str) -> Self {
        self.reserved.insert(normalize_path(path));
        self
    }

    /// Bind `path` to `view_key` instead of the generic view.
    pub fn dedicate(mut self, path: &str, view_key: ViewKey) -> Self {
        self.dedicated.insert(normalize_path(path), view_key);
        self
    }

    pub fn synthesize(&self, tree: &MenuTree) -> Synthesis {
        let mut out = Synthesis::default();
        let mut seen: HashMap<String, usize> = HashMap::new();
        self.visit(tree.roots(), &mut seen, &mut out);
        out
    }

    fn visit(&self, nodes: &[MenuNode], seen: &mut HashMap<String, usize>, out: &mut Synthesis) {
        for node in nodes {
            match node {
                MenuNode::Branch { children, .. } => self.visit(children, seen, out),
                MenuNode::Leaf {
                    id,
                    label,
                    path: Some(path),
                    ..
                } => {
                    if !path.starts_with('/') {
                        out.rejected.push(ConfigurationError::RelativePath {
                            id: id.clone(),
                            path: path.clone(),
                        });
                        continue;
                    }
                    // Stored in the form `resolve` compares against.
                    let path = normalize_path(path);
                    if self.reserved.contains(&path) {
                        continue;
                    }

                    let view_key = self
                        .dedicated
                        .get(&path)
                        .cloned()
                        .unwrap_or_else(|| ViewKey::Generic(label.clone()));

                    if let Some(&idx) = seen.get(&path) {
                        out.rejected.push(ConfigurationError::DuplicatePath {
                            path,
                            existing: out.bindings[idx].view_key.clone(),
                            rejected: view_key,
                        });
                        continue;
                    }

                    seen.insert(path.clone(), out.bindings.len());
                    out.bindings.push(RouteBinding { path, view_key });
                }
                MenuNode::Leaf { path: None, .. } => {}
            }
        }
    }
}

// ============================================================================
// Route table
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a RouteBinding),
    /// Wildcard fallback.
    NotFound { path: String },
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    explicit: Vec<RouteBinding>,
    synthesized: Vec<RouteBinding>,
    rejected: Vec<ConfigurationError>,
}

impl RouteTable {
    /// Hand-registered routes of the portal.
    pub fn explicit_routes() -> Vec<RouteBinding> {
        vec![
            RouteBinding::new("/banks", ViewKey::Banks),
            RouteBinding::new("/profile", ViewKey::Profile),
        ]
    }

    /// Paths with a dedicated view that still come from the menu.
    pub fn dedicated_views() -> Vec<(&'static str, ViewKey)> {
        vec![("/", ViewKey::Dashboard)]
    }

    /// Route table of the portal built from `tree`.
    pub fn for_portal(tree: &MenuTree) -> Self {
        Self::build(tree, Self::explicit_routes(), &Self::dedicated_views())
    }

    pub fn build(
        tree: &MenuTree,
        explicit: Vec<RouteBinding>,
        dedicated: &[(&str, ViewKey)],
    ) -> Self {
        let mut rejected = Vec::new();
        let mut kept: Vec<RouteBinding> = Vec::with_capacity(explicit.len());
        for mut binding in explicit {
            binding.path = normalize_path(&binding.path);
            if let Some(existing) = kept.iter().find(|b| b.path == binding.path) {
                rejected.push(ConfigurationError::DuplicatePath {
                    path: binding.path.clone(),
                    existing: existing.view_key.clone(),
                    rejected: binding.view_key,
                });
                continue;
            }
            kept.push(binding);
        }

        let synthesizer = kept
            .iter()
            .fold(RouteSynthesizer::new(), |s, b| s.reserve(&b.path));
        let synthesizer = dedicated
            .iter()
            .fold(synthesizer, |s, (path, key)| s.dedicate(path, key.clone()));

        let synthesis = synthesizer.synthesize(tree);
        rejected.extend(synthesis.rejected);

        Self {
            explicit: kept,
            synthesized: synthesis.bindings,
            rejected,
        }
    }

    /// All bindings in match order.
    pub fn bindings(&self) -> impl Iterator<Item = &RouteBinding> {
        self.explicit.iter().chain(self.synthesized.iter())
    }

    pub fn synthesized(&self) -> &[RouteBinding] {
        &self.synthesized
    }

    pub fn rejected(&self) -> &[ConfigurationError] {
        &self.rejected
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let path = normalize_path(path);
        match self.bindings().find(|b| b.path == path) {
            Some(binding) => Resolution::Matched(binding),
            None => Resolution::NotFound { path },
        }
    }
}

/// Drops query, fragment and trailing slashes; empty becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, path: &str) -> MenuNode {
        MenuNode::leaf(id, &id.to_uppercase(), "", path)
    }

    fn paths(bindings: &[RouteBinding]) -> Vec<&str> {
        bindings.iter().map(|b| b.path.as_str()).collect()
    }

    #[test]
    fn two_sections_yield_four_bindings() {
        let tree = MenuTree::new(vec![
            MenuNode::branch(
                "params",
                "Parameters",
                "",
                vec![leaf("a", "/a"), leaf("b", "/b"), leaf("c", "/c")],
            ),
            leaf("reports", "/reports"),
        ])
        .unwrap();

        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(paths(&out.bindings), vec!["/a", "/b", "/c", "/reports"]);
        assert!(out.rejected.is_empty());
    }

    #[test]
    fn section_with_empty_children_binds_its_path() {
        let tree = MenuTree::from_json(
            r#"[
                {"id":"params","label":"Parameters","children":[
                    {"id":"a","label":"A","path":"/a"},
                    {"id":"b","label":"B","path":"/b"},
                    {"id":"c","label":"C","path":"/c"}]},
                {"id":"reports","label":"Reports","path":"/reports","children":[]}
            ]"#,
        )
        .unwrap();

        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(paths(&out.bindings), vec!["/a", "/b", "/c", "/reports"]);
        assert!(out.rejected.is_empty());
    }

    #[test]
    fn branch_with_path_never_binds() {
        let tree = MenuTree::from_json(
            r#"[{"id":"s","label":"S","path":"/s","children":[
                {"id":"x","label":"X","path":"/s/x"}]}]"#,
        )
        .unwrap();

        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(paths(&out.bindings), vec!["/s/x"]);
    }

    #[test]
    fn recursion_is_not_limited_to_two_levels() {
        let tree = MenuTree::new(vec![MenuNode::branch(
            "l1",
            "L1",
            "",
            vec![MenuNode::branch(
                "l2",
                "L2",
                "",
                vec![MenuNode::branch("l3", "L3", "", vec![leaf("deep", "/deep")])],
            )],
        )])
        .unwrap();

        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(out.bindings, vec![RouteBinding::new("/deep", ViewKey::Generic("DEEP".into()))]);
    }

    #[test]
    fn reserved_and_inert_nodes_are_skipped() {
        let tree = MenuTree::new(vec![
            leaf("banks", "/banks"),
            MenuNode::Leaf {
                id: "inert".into(),
                label: "Inert".into(),
                icon: String::new(),
                path: None,
            },
            leaf("isos", "/isos"),
        ])
        .unwrap();

        let out = RouteSynthesizer::new().reserve("/banks").synthesize(&tree);
        assert_eq!(paths(&out.bindings), vec!["/isos"]);
    }

    #[test]
    fn dedicated_mapping_overrides_generic_view() {
        let tree = MenuTree::new(vec![leaf("home", "/"), leaf("isos", "/isos")]).unwrap();
        let out = RouteSynthesizer::new()
            .dedicate("/", ViewKey::Dashboard)
            .synthesize(&tree);

        assert_eq!(out.bindings[0].view_key, ViewKey::Dashboard);
        assert_eq!(out.bindings[1].view_key, ViewKey::Generic("ISOS".into()));
    }

    #[test]
    fn first_registration_of_a_path_wins() {
        let tree = MenuTree::new(vec![
            MenuNode::leaf("one", "First", "", "/dup"),
            MenuNode::leaf("two", "Second", "", "/dup"),
        ])
        .unwrap();

        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(out.bindings, vec![RouteBinding::new("/dup", ViewKey::Generic("First".into()))]);
        assert_eq!(
            out.rejected,
            vec![ConfigurationError::DuplicatePath {
                path: "/dup".into(),
                existing: ViewKey::Generic("First".into()),
                rejected: ViewKey::Generic("Second".into()),
            }]
        );
    }

    #[test]
    fn relative_path_is_a_configuration_error() {
        let tree = MenuTree::new(vec![leaf("x", "x"), leaf("y", "/y")]).unwrap();
        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(paths(&out.bindings), vec!["/y"]);
        assert!(matches!(out.rejected[0], ConfigurationError::RelativePath { .. }));
    }

    #[test]
    fn every_routable_leaf_appears_exactly_once() {
        let tree = MenuTree::builtin();
        let table = RouteTable::for_portal(&tree);
        assert!(table.rejected().is_empty());

        let mut leaves = Vec::new();
        tree.walk(|n| {
            if let Some(p) = n.path() {
                leaves.push(p.to_string());
            }
        });

        for path in leaves {
            let path = normalize_path(&path);
            let count = table.bindings().filter(|b| b.path == path).count();
            assert_eq!(count, 1, "{path}");
        }
    }

    #[test]
    fn explicit_routes_come_before_synthesized() {
        let table = RouteTable::for_portal(&MenuTree::builtin());
        let order: Vec<_> = table.bindings().map(|b| b.view_key.clone()).collect();
        assert_eq!(order[0], ViewKey::Banks);
        assert_eq!(order[1], ViewKey::Profile);
        assert_eq!(order[2], ViewKey::Dashboard);
        assert!(!table.synthesized().iter().any(|b| b.path == "/banks"));
    }

    #[test]
    fn duplicate_explicit_routes_keep_the_first() {
        let tree = MenuTree::new(vec![]).unwrap();
        let table = RouteTable::build(
            &tree,
            vec![
                RouteBinding::new("/banks", ViewKey::Banks),
                RouteBinding::new("/banks", ViewKey::Profile),
            ],
            &[],
        );
        assert_eq!(table.bindings().count(), 1);
        assert_eq!(table.rejected().len(), 1);
    }

    #[test]
    fn trailing_slash_in_menu_is_still_reachable() {
        let tree = MenuTree::new(vec![MenuNode::leaf("isos", "ISOs", "", "/isos/")]).unwrap();
        let table = RouteTable::build(&tree, vec![], &[]);

        assert_eq!(paths(table.synthesized()), vec!["/isos"]);
        assert!(table.rejected().is_empty());
        for requested in ["/isos", "/isos/"] {
            let Resolution::Matched(binding) = table.resolve(requested) else {
                panic!("{requested} should match");
            };
            assert_eq!(binding.view_key, ViewKey::Generic("ISOs".into()));
        }
    }

    #[test]
    fn reserved_path_is_matched_in_any_form() {
        let tree = MenuTree::new(vec![
            MenuNode::leaf("banks", "Banks", "", "/banks/"),
            MenuNode::leaf("home", "Home", "", "/"),
        ])
        .unwrap();
        let table = RouteTable::build(
            &tree,
            vec![RouteBinding::new("/banks", ViewKey::Banks)],
            &[("/", ViewKey::Dashboard)],
        );

        assert_eq!(paths(table.synthesized()), vec!["/"]);
        assert!(table.rejected().is_empty());
        assert_eq!(table.resolve("/banks/"), Resolution::Matched(&RouteBinding::new("/banks", ViewKey::Banks)));
    }

    #[test]
    fn explicit_route_with_trailing_slash_reserves_the_plain_path() {
        let tree = MenuTree::new(vec![MenuNode::leaf("profile", "Profile", "", "/profile")]).unwrap();
        let table = RouteTable::build(&tree, vec![RouteBinding::new("/profile/", ViewKey::Profile)], &[]);

        assert!(table.synthesized().is_empty());
        assert_eq!(table.bindings().next().map(|b| b.path.as_str()), Some("/profile"));
    }

    #[test]
    fn same_path_in_two_forms_is_a_duplicate() {
        let tree = MenuTree::new(vec![
            MenuNode::leaf("isos", "ISOs", "", "/isos"),
            MenuNode::leaf("isos_again", "ISO list", "", "/isos/"),
        ])
        .unwrap();

        let out = RouteSynthesizer::new().synthesize(&tree);
        assert_eq!(paths(&out.bindings), vec!["/isos"]);
        assert_eq!(
            out.rejected,
            vec![ConfigurationError::DuplicatePath {
                path: "/isos".into(),
                existing: ViewKey::Generic("ISOs".into()),
                rejected: ViewKey::Generic("ISO list".into()),
            }]
        );
    }

    #[test]
    fn portal_table_has_no_rejections() {
        let table = RouteTable::for_portal(&MenuTree::builtin());
        assert_eq!(table.rejected(), &[] as &[ConfigurationError]);
        assert!(table.bindings().all(|b| b.path == normalize_path(&b.path)));
    }

    #[test]
    fn unregistered_path_resolves_to_fallback() {
        let table = RouteTable::for_portal(&MenuTree::builtin());
        assert_eq!(
            table.resolve("/no/such/page"),
            Resolution::NotFound {
                path: "/no/such/page".into()
            }
        );
    }

    #[test]
    fn resolve_normalizes_the_path() {
        let table = RouteTable::for_portal(&MenuTree::builtin());
        let Resolution::Matched(binding) = table.resolve("/banks/?page=2") else {
            panic!("expected /banks to match");
        };
        assert_eq!(binding.view_key, ViewKey::Banks);

        let Resolution::Matched(home) = table.resolve("") else {
            panic!("expected root to match");
        };
        assert_eq!(home.view_key, ViewKey::Dashboard);
    }

    #[test]
    fn normalize_path_cases() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("isos"), "/isos");
        assert_eq!(normalize_path("/reports/x#top"), "/reports/x");
    }
}
