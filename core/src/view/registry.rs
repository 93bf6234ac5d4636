//! View registry for the dashboards a route can point at

use crate::router::{ResolvedRoute, RouteParams, ViewId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Describes a renderable view supplied by the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    pub id: ViewId,
    pub title: String,
    pub description: String,
    /// Input property names the view expects
    pub inputs: Vec<String>,
}

impl ViewDescriptor {
    pub fn new(id: impl Into<ViewId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            inputs: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare an expected input property
    pub fn with_input(mut self, name: impl Into<String>) -> Self {
        self.inputs.push(name.into());
        self
    }
}

/// A view selected for display together with its input properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountedView {
    pub view: ViewDescriptor,
    pub props: RouteParams,
}

impl MountedView {
    /// Expected inputs that the route did not supply
    pub fn missing_inputs(&self) -> Vec<&str> {
        self.view
            .inputs
            .iter()
            .map(String::as_str)
            .filter(|input| !self.props.contains(input))
            .collect()
    }
}

/// Registry of views keyed by id
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: BTreeMap<ViewId, ViewDescriptor>,
}

impl ViewRegistry {
    /// Create an empty view registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view, replacing any previous view with the same id
    pub fn register(&mut self, view: ViewDescriptor) {
        self.views.insert(view.id.clone(), view);
    }

    pub fn get(&self, id: &str) -> Option<&ViewDescriptor> {
        self.views.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.contains_key(id)
    }

    /// List all registered views, ordered by id
    pub fn list(&self) -> impl Iterator<Item = &ViewDescriptor> {
        self.views.values()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Select the view for a resolved route and compute its props
    pub fn mount(&self, route: &ResolvedRoute) -> Option<MountedView> {
        self.get(route.view.as_str()).map(|view| MountedView {
            view: view.clone(),
            props: route.view_props(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(props: bool) -> ResolvedRoute {
        ResolvedRoute {
            name: "issues-dashboard".into(),
            view: "IssuesDashboard".into(),
            params: [("owner", "acme"), ("repo", "widget")].into_iter().collect(),
            props,
            path: "/repos/acme/widget/issues".to_string(),
            query: None,
            hash: None,
        }
    }

    fn registry() -> ViewRegistry {
        let mut registry = ViewRegistry::new();
        registry.register(
            ViewDescriptor::new("IssuesDashboard", "Issues")
                .with_input("owner")
                .with_input("repo"),
        );
        registry
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("IssuesDashboard"));
        assert!(registry.get("RepoGrid").is_none());
    }

    #[test]
    fn test_mount_forwards_params_when_props_set() {
        let registry = registry();

        let mounted = registry.mount(&route(true)).unwrap();
        assert_eq!(mounted.view.title, "Issues");
        assert_eq!(mounted.props.get("owner"), Some("acme"));
        assert!(mounted.missing_inputs().is_empty());

        let mounted = registry.mount(&route(false)).unwrap();
        assert!(mounted.props.is_empty());
        assert_eq!(mounted.missing_inputs(), ["owner", "repo"]);
    }

    #[test]
    fn test_mount_unknown_view() {
        let mut unknown = route(true);
        unknown.view = "Nope".into();
        assert!(registry().mount(&unknown).is_none());
    }
}
