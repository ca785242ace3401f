//! Route mappings.
//!
//! A mapping pairs a method set with a path pattern and compiles into the
//! matchers evaluated at dispatch time. Patterns are exact (`/health`) or
//! prefix wildcards (`/files/*`, matching everything under `/files/`).

use axum::http::Method;

use crate::dispatch::matcher::{ExactPathMatcher, Matcher, MethodMatcher, PathPrefixMatcher};

/// A path pattern, parsed once at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// The full path, matched exactly.
    Exact(String),
    /// Everything under a prefix. `/files/*` stores `/files/`.
    Prefix(String),
}

impl PathPattern {
    /// Parse a pattern string. A trailing `/*` makes it a prefix pattern.
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix('*') {
            Some(prefix) if prefix.ends_with('/') => PathPattern::Prefix(prefix.to_string()),
            _ => PathPattern::Exact(pattern.to_string()),
        }
    }

    /// Compile into a path matcher.
    pub fn compile(&self) -> Box<dyn Matcher> {
        match self {
            PathPattern::Exact(path) => Box::new(ExactPathMatcher::new(path.clone())),
            PathPattern::Prefix(prefix) => Box::new(PathPrefixMatcher::new(prefix.clone())),
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathPattern::Exact(path) => write!(f, "{}", path),
            PathPattern::Prefix(prefix) => write!(f, "{}*", prefix),
        }
    }
}

/// A registered route: method set plus path pattern.
#[derive(Debug, Clone)]
pub struct RouteMapping {
    methods: Vec<Method>,
    pattern: PathPattern,
}

impl RouteMapping {
    /// A mapping for an explicit method set. An empty set matches every
    /// method.
    pub fn new(methods: Vec<Method>, pattern: &str) -> Self {
        Self {
            methods,
            pattern: PathPattern::parse(pattern),
        }
    }

    pub fn get(pattern: &str) -> Self {
        Self::new(vec![Method::GET], pattern)
    }

    pub fn post(pattern: &str) -> Self {
        Self::new(vec![Method::POST], pattern)
    }

    pub fn put(pattern: &str) -> Self {
        Self::new(vec![Method::PUT], pattern)
    }

    pub fn delete(pattern: &str) -> Self {
        Self::new(vec![Method::DELETE], pattern)
    }

    /// A mapping matching any method on the pattern.
    pub fn any(pattern: &str) -> Self {
        Self::new(Vec::new(), pattern)
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Compile into separate path and method matchers. Kept separate so the
    /// dispatcher can distinguish an unmatched path from an unmatched
    /// method.
    pub fn compile(&self) -> (Box<dyn Matcher>, MethodMatcher) {
        (self.pattern.compile(), MethodMatcher::new(self.methods.clone()))
    }
}

impl std::fmt::Display for RouteMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.methods.is_empty() {
            write!(f, "* {}", self.pattern)
        } else {
            for (i, method) in self.methods.iter().enumerate() {
                if i > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", method)?;
            }
            write!(f, " {}", self.pattern)
        }
    }
}
