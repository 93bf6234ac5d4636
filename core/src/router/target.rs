//! Navigation targets
//!
//! A raw target is split into path, query and hash. The path is kept exactly
//! as given: dot segments, backslashes and whitespace are ordinary segment
//! content and are matched after percent-decoding.

use crate::error::NavigationError;

/// A parsed navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Absolute path, as written by the caller
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl NavigationTarget {
    /// Parse a raw target such as `/repos/acme/widget/issues?state=open`
    pub fn parse(raw: &str) -> Result<Self, NavigationError> {
        let invalid = |reason: &str| NavigationError::InvalidTarget {
            target: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("target must be an absolute path"));
        }
        // `//host/path` is scheme-relative and would leave the application
        if raw.starts_with("//") {
            return Err(invalid("target must not change origin"));
        }

        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Ok(Self {
            path: path.to_string(),
            query,
            hash,
        })
    }

    /// Remove the router base prefix; `None` when the path lies outside it.
    ///
    /// `base` must already be normalized (no trailing slash, empty for root).
    pub fn strip_base(mut self, base: &str) -> Option<Self> {
        if base.is_empty() {
            return Some(self);
        }

        let rest = self.path.strip_prefix(base)?;
        if rest.is_empty() {
            self.path = "/".to_string();
        } else if rest.starts_with('/') {
            self.path = rest.to_string();
        } else {
            return None;
        }
        Some(self)
    }

    /// Drop a single trailing slash (never on the root path)
    pub fn trim_trailing_slash(mut self) -> Self {
        if self.path.len() > 1 && self.path.ends_with('/') {
            self.path.pop();
        }
        self
    }
}
