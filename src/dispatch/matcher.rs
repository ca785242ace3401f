//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method against a mapping's method set
//! - Match the request path (exact or prefix)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Empty method set = always matches (wildcard)
//! - No regex to guarantee O(n) matching

use axum::http::Method;

use crate::dispatch::DispatchRequest;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &DispatchRequest) -> bool;
}

/// Matches the request method against an allowed set.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    allowed: Vec<Method>,
}

impl MethodMatcher {
    /// Create a new method matcher. An empty set matches every method.
    pub fn new(allowed: Vec<Method>) -> Self {
        Self { allowed }
    }

    /// A matcher that accepts any method.
    pub fn any() -> Self {
        Self { allowed: Vec::new() }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &DispatchRequest) -> bool {
        self.allowed.is_empty() || self.allowed.contains(req.method())
    }
}

/// Matches the request path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, req: &DispatchRequest) -> bool {
        req.path() == self.path
    }
}

/// Matches the request path by prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, req: &DispatchRequest) -> bool {
        req.path().starts_with(&self.prefix)
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, req: &DispatchRequest) -> bool {
        // All matchers must pass (AND)
        self.matchers.iter().all(|m| m.matches(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http;
    use bytes::Bytes;

    fn request(method: Method, path: &str) -> DispatchRequest {
        http::Request::builder()
            .method(method)
            .uri(path)
            .body(Bytes::new())
            .unwrap()
            .into()
    }

    #[test]
    fn test_method_matcher() {
        let matcher = MethodMatcher::new(vec![Method::GET, Method::HEAD]);

        assert!(matcher.matches(&request(Method::GET, "/")));
        assert!(matcher.matches(&request(Method::HEAD, "/")));
        assert!(!matcher.matches(&request(Method::POST, "/")));

        let any = MethodMatcher::any();
        assert!(any.matches(&request(Method::DELETE, "/")));
    }

    #[test]
    fn test_exact_path_matcher() {
        let matcher = ExactPathMatcher::new("/health");

        assert!(matcher.matches(&request(Method::GET, "/health")));
        assert!(!matcher.matches(&request(Method::GET, "/health/db")));
        assert!(!matcher.matches(&request(Method::GET, "/Health")));
    }

    #[test]
    fn test_path_prefix_matcher() {
        let matcher = PathPrefixMatcher::new("/api/");

        assert!(matcher.matches(&request(Method::GET, "/api/v1")));
        assert!(!matcher.matches(&request(Method::GET, "/api")));
        assert!(!matcher.matches(&request(Method::GET, "/images")));
    }

    #[test]
    fn test_and_matcher() {
        let matcher = AndMatcher::new(vec![
            Box::new(MethodMatcher::new(vec![Method::POST])),
            Box::new(PathPrefixMatcher::new("/echo/")),
        ]);

        assert!(matcher.matches(&request(Method::POST, "/echo/hello")));
        assert!(!matcher.matches(&request(Method::GET, "/echo/hello")));
        assert!(!matcher.matches(&request(Method::POST, "/other")));
    }
}
