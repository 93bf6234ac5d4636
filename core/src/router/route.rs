//! Route definitions and resolution results
//!
//! This module defines the declarative route records that make up the
//! route table, and the values produced when a path is resolved.

use super::params::RouteParams;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Unique symbolic name of a route
    RouteName
}

string_id! {
    /// Opaque reference to a view owned by the view layer
    ViewId
}

/// A static route declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Unique name of this route
    pub name: RouteName,
    /// Path pattern, e.g. `/repos/:owner/:repo/issues`
    pub pattern: String,
    /// View rendered for this route
    pub view: ViewId,
    /// Whether bound params are forwarded to the view as input properties
    #[serde(default)]
    pub props: bool,
    /// Optional human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form metadata for the application shell
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl RouteDefinition {
    /// Create a new route definition
    pub fn new(
        name: impl Into<RouteName>,
        pattern: impl Into<String>,
        view: impl Into<ViewId>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            view: view.into(),
            props: false,
            title: None,
            meta: BTreeMap::new(),
        }
    }

    /// Forward bound params to the view
    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add metadata to this route
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// A route matched against a concrete navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    pub name: RouteName,
    pub view: ViewId,
    pub params: RouteParams,
    /// Copied from the definition's `props` flag
    pub props: bool,
    /// Matched path relative to the router base, as requested
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl ResolvedRoute {
    /// Path with query and hash reattached
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }

    /// Decoded `key=value` pairs of the query string, in order.
    ///
    /// Repeated keys are kept; `+` decodes to a space.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .map(|query| {
                url::form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Input properties for the view: the bound params when `props` is set
    pub fn view_props(&self) -> RouteParams {
        if self.props {
            self.params.clone()
        } else {
            RouteParams::new()
        }
    }
}

/// Outcome of resolving a path against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedRoute),
    /// No pattern matched; rendering a fallback is up to the caller
    NotFound { path: String },
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Resolution::Found(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<ResolvedRoute> {
        match self {
            Resolution::Found(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }
}
