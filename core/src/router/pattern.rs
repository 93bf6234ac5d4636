//! Path patterns and segment matching
//!
//! A pattern such as `/repos/:owner/:repo/issues` is compiled into a list of
//! [`Segment`]s. Matching is a linear, segment-by-segment scan.

use super::params::RouteParams;
use std::fmt;
use thiserror::Error;

/// Reasons a pattern string is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    #[error("empty segment at position {0}")]
    EmptySegment(usize),

    #[error("unnamed parameter at position {0}")]
    UnnamedParam(usize),

    #[error("parameter ':{0}' appears more than once")]
    DuplicateParam(String),
}

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Must equal the requested segment exactly
    Literal(String),
    /// Matches any non-empty segment and binds it under this name
    Param(String),
}

/// A compiled route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let rest = source
            .strip_prefix('/')
            .ok_or(PatternError::MissingLeadingSlash)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for (position, raw) in rest.split('/').enumerate() {
                let segment = match raw.strip_prefix(':') {
                    Some("") => return Err(PatternError::UnnamedParam(position)),
                    Some(name) => {
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(PatternError::DuplicateParam(name.to_string()));
                        }
                        Segment::Param(name.to_string())
                    }
                    None if raw.is_empty() => return Err(PatternError::EmptySegment(position)),
                    None => Segment::Literal(raw.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern as it was written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameter placeholders, in pattern order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match percent-encoded path segments against this pattern.
    ///
    /// Returns the bound parameters on success. Segment counts must be equal;
    /// segments that do not decode to UTF-8 never match.
    pub fn matches(&self, path_segments: &[&str]) -> Option<RouteParams> {
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, raw) in self.segments.iter().zip(path_segments) {
            let decoded = urlencoding::decode(raw).ok()?;
            match segment {
                Segment::Literal(literal) => {
                    if *literal != decoded {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if decoded.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decoded.into_owned());
                }
            }
        }

        Some(params)
    }

    /// Build a concrete path from parameter values.
    ///
    /// On a missing value, returns the name of the first unbound placeholder.
    pub fn build(&self, params: &RouteParams) -> Result<String, String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if !value.is_empty() => path.push_str(&encode_segment(value)),
                    _ => return Err(name.clone()),
                },
            }
        }

        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Percent-encode a param value for use as one path segment.
///
/// `.` and `..` are escaped as well, since hosts treat them as dot segments.
fn encode_segment(value: &str) -> String {
    match value {
        "." | ".." => value.replace('.', "%2E"),
        _ => urlencoding::encode(value).into_owned(),
    }
}

/// Split an absolute, percent-encoded path into its raw segments.
///
/// `/` yields no segments; empty segments (as in `/a//b`) are preserved so
/// that they fail to match.
pub fn split_path(path: &str) -> Vec<&str> {
    match path.strip_prefix('/') {
        Some("") | None => Vec::new(),
        Some(rest) => rest.split('/').collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_and_params() {
        let root = PathPattern::parse("/").unwrap();
        assert!(root.segments().is_empty());

        let pattern = PathPattern::parse("/repos/:owner/:repo/issues").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("repos".to_string()),
                Segment::Param("owner".to_string()),
                Segment::Param("repo".to_string()),
                Segment::Literal("issues".to_string()),
            ]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), ["owner", "repo"]);
        assert_eq!(pattern.to_string(), "/repos/:owner/:repo/issues");
    }

    #[test]
    fn test_parse_rejects_malformed_patterns() {
        assert_eq!(
            PathPattern::parse("repos"),
            Err(PatternError::MissingLeadingSlash)
        );
        assert_eq!(
            PathPattern::parse("/repos//issues"),
            Err(PatternError::EmptySegment(1))
        );
        assert_eq!(
            PathPattern::parse("/repos/:"),
            Err(PatternError::UnnamedParam(1))
        );
        assert_eq!(
            PathPattern::parse("/:owner/:owner"),
            Err(PatternError::DuplicateParam("owner".to_string()))
        );
    }

    #[test]
    fn test_matches_binds_params() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/issues").unwrap();

        let params = pattern
            .matches(&split_path("/repos/acme/widget/issues"))
            .unwrap();
        assert_eq!(params.get("owner"), Some("acme"));
        assert_eq!(params.get("repo"), Some("widget"));

        assert!(pattern.matches(&split_path("/repos/acme/widget")).is_none());
        assert!(pattern
            .matches(&split_path("/repos/acme/widget/pulls"))
            .is_none());
        assert!(pattern.matches(&split_path("/repos//widget/issues")).is_none());
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/pullRequests").unwrap();
        assert!(pattern
            .matches(&split_path("/repos/a/b/pullRequests"))
            .is_some());
        assert!(pattern
            .matches(&split_path("/repos/a/b/pullrequests"))
            .is_none());
    }

    #[test]
    fn test_matches_decodes_segments() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/issues").unwrap();
        let params = pattern
            .matches(&split_path("/repos/my%20org/c%2B%2B/issues"))
            .unwrap();
        assert_eq!(params.get("owner"), Some("my org"));
        assert_eq!(params.get("repo"), Some("c++"));

        // Invalid UTF-8 after decoding
        assert!(pattern.matches(&split_path("/repos/%FF/x/issues")).is_none());
    }

    #[test]
    fn test_build_encodes_values() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/builder").unwrap();
        let params: RouteParams = [("owner", "my org"), ("repo", "a/b")].into_iter().collect();
        let path = pattern.build(&params).unwrap();
        assert_eq!(path, "/repos/my%20org/a%2Fb/builder");

        let rebound = pattern.matches(&split_path(&path)).unwrap();
        assert_eq!(rebound, params);
    }

    #[test]
    fn test_build_escapes_dot_segments() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/issues").unwrap();
        let params: RouteParams = [("owner", ".."), ("repo", ".")].into_iter().collect();
        let path = pattern.build(&params).unwrap();
        assert_eq!(path, "/repos/%2E%2E/%2E/issues");
        assert_eq!(pattern.matches(&split_path(&path)).unwrap(), params);

        // Dots inside a longer value are left alone
        let params: RouteParams = [("owner", "a..b"), ("repo", ".x")].into_iter().collect();
        assert_eq!(pattern.build(&params).unwrap(), "/repos/a..b/.x/issues");
    }

    #[test]
    fn test_matches_raw_segments() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/issues").unwrap();
        for (owner, repo) in [("..", "widget"), (".", "widget"), ("a\\b", "c d"), ("a\tb", "%")] {
            let path = format!("/repos/{}/{}/issues", owner, repo);
            let params = pattern.matches(&split_path(&path)).unwrap();
            assert_eq!(params.get("owner"), Some(owner));
            assert_eq!(params.get("repo"), Some(repo));
        }
    }

    #[test]
    fn test_build_reports_missing_param() {
        let pattern = PathPattern::parse("/repos/:owner/:repo/builder").unwrap();
        let params: RouteParams = [("owner", "acme")].into_iter().collect();
        assert_eq!(pattern.build(&params), Err("repo".to_string()));

        let root = PathPattern::parse("/").unwrap();
        assert_eq!(root.build(&RouteParams::new()), Ok("/".to_string()));
    }

    #[test]
    fn test_split_path() {
        assert!(split_path("/").is_empty());
        assert_eq!(split_path("/a/b"), ["a", "b"]);
        assert_eq!(split_path("/a//b"), ["a", "", "b"]);
        assert_eq!(split_path("/a/"), ["a", ""]);
    }
}
