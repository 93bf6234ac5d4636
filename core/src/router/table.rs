//! The ordered, immutable route table

use super::params::RouteParams;
use super::pattern::PathPattern;
use super::route::{RouteDefinition, RouteName};
use crate::error::ConfigError;
use crate::view::ViewRegistry;
use std::collections::HashMap;
use tracing::debug;

/// A route definition together with its compiled pattern
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub definition: RouteDefinition,
    pub pattern: PathPattern,
}

/// Route definitions in declaration order
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    by_name: HashMap<RouteName, usize>,
}

impl RouteTable {
    /// Register the application's routes.
    ///
    /// Fails on an empty table, a duplicate route name, or a malformed
    /// pattern. Declaration order is kept and decides ties at match time.
    pub fn register(
        definitions: impl IntoIterator<Item = RouteDefinition>,
    ) -> Result<Self, ConfigError> {
        let mut routes = Vec::new();
        let mut by_name = HashMap::new();

        for definition in definitions {
            if by_name.contains_key(&definition.name) {
                return Err(ConfigError::DuplicateRouteName {
                    name: definition.name.0,
                });
            }

            if definition.view.as_str().is_empty() {
                return Err(ConfigError::UnknownView {
                    route: definition.name.0,
                    view: String::new(),
                });
            }

            let pattern =
                PathPattern::parse(&definition.pattern).map_err(|e| ConfigError::InvalidPattern {
                    route: definition.name.0.clone(),
                    pattern: definition.pattern.clone(),
                    reason: e.to_string(),
                })?;

            debug!(route = %definition.name, pattern = %pattern, "Registered route");
            by_name.insert(definition.name.clone(), routes.len());
            routes.push(CompiledRoute {
                definition,
                pattern,
            });
        }

        if routes.is_empty() {
            return Err(ConfigError::NoRoutes);
        }

        Ok(Self { routes, by_name })
    }

    /// Check that every route refers to a view present in `views`
    pub fn check_views(&self, views: &ViewRegistry) -> Result<(), ConfigError> {
        for route in &self.routes {
            let definition = &route.definition;
            if !views.contains(definition.view.as_str()) {
                return Err(ConfigError::UnknownView {
                    route: definition.name.0.clone(),
                    view: definition.view.0.clone(),
                });
            }
        }
        Ok(())
    }

    /// First route, in declaration order, whose pattern matches the segments
    pub fn match_segments(&self, segments: &[&str]) -> Option<(&CompiledRoute, RouteParams)> {
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(segments).map(|params| (route, params)))
    }

    /// Get a route by name
    pub fn get(&self, name: &str) -> Option<&CompiledRoute> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Routes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRoute> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::pattern::split_path;
    use crate::view::ViewDescriptor;

    fn definitions() -> Vec<RouteDefinition> {
        vec![
            RouteDefinition::new("home", "/", "Home"),
            RouteDefinition::new("repo", "/repos/:owner/:repo", "Repo").with_props(),
        ]
    }

    #[test]
    fn test_register_keeps_declaration_order() {
        let table = RouteTable::register(definitions()).unwrap();
        let names: Vec<_> = table.iter().map(|r| r.definition.name.as_str()).collect();
        assert_eq!(names, ["home", "repo"]);
        assert_eq!(table.len(), 2);
        assert!(table.contains("repo"));
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_register_rejects_duplicate_names() {
        let mut defs = definitions();
        defs.push(RouteDefinition::new("home", "/other", "Other"));

        let err = RouteTable::register(defs).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateRouteName {
                name: "home".to_string()
            }
        );
    }

    #[test]
    fn test_register_rejects_bad_patterns_and_empty_tables() {
        let err = RouteTable::register(vec![RouteDefinition::new("bad", "repos", "Repo")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { route, .. } if route == "bad"));

        let err = RouteTable::register(vec![RouteDefinition::new("blank", "/", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownView { route, .. } if route == "blank"));

        let err = RouteTable::register(Vec::<RouteDefinition>::new()).unwrap_err();
        assert_eq!(err, ConfigError::NoRoutes);
    }

    #[test]
    fn test_first_declared_pattern_wins() {
        let table = RouteTable::register(vec![
            RouteDefinition::new("specific", "/repos/:owner/settings", "Settings"),
            RouteDefinition::new("generic", "/repos/:owner/:repo", "Repo"),
        ])
        .unwrap();

        let (route, params) = table.match_segments(&split_path("/repos/acme/settings")).unwrap();
        assert_eq!(route.definition.name.as_str(), "specific");
        assert_eq!(params.get("owner"), Some("acme"));
        assert!(!params.contains("repo"));

        let (route, _) = table.match_segments(&split_path("/repos/acme/widget")).unwrap();
        assert_eq!(route.definition.name.as_str(), "generic");
    }

    #[test]
    fn test_check_views() {
        let table = RouteTable::register(definitions()).unwrap();

        let mut views = ViewRegistry::new();
        views.register(ViewDescriptor::new("Home", "Home"));
        let err = table.check_views(&views).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownView {
                route: "repo".to_string(),
                view: "Repo".to_string()
            }
        );

        views.register(ViewDescriptor::new("Repo", "Repository"));
        assert!(table.check_views(&views).is_ok());
    }
}
