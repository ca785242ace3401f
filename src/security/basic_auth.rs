//! HTTP Basic authentication filter.

use async_trait::async_trait;
use axum::http::header;
use axum::response::Response;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::config::AuthConfig;
use crate::dispatch::{DispatchError, DispatchRequest};
use crate::pipeline::{Filter, FilterChain};

/// Principal attached to requests that passed authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Pipeline filter enforcing HTTP Basic credentials on every route.
///
/// Rejections carry the configured realm; the exception handler turns them
/// into a 401 with the matching `WWW-Authenticate` challenge.
pub struct BasicAuthFilter {
    realm: String,
    username: String,
    password: String,
}

impl BasicAuthFilter {
    pub fn new(
        realm: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            realm: realm.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.realm, &config.username, &config.password)
    }

    /// Check the Authorization header, returning the authenticated
    /// username or the rejection reason.
    fn verify(&self, header: Option<&str>) -> Result<String, &'static str> {
        let header = header.ok_or("missing Authorization header")?;
        let encoded = header
            .strip_prefix("Basic ")
            .ok_or("not a Basic credential")?;
        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|_| "credentials are not valid base64")?;
        let decoded = String::from_utf8(decoded).map_err(|_| "credentials are not UTF-8")?;
        let (username, password) = decoded.split_once(':').ok_or("missing ':' separator")?;

        if username == self.username && password == self.password {
            Ok(username.to_string())
        } else {
            Err("wrong username or password")
        }
    }
}

#[async_trait]
impl Filter for BasicAuthFilter {
    async fn filter(
        &self,
        mut req: DispatchRequest,
        chain: FilterChain<'_>,
    ) -> Result<Response, DispatchError> {
        match self.verify(req.header(header::AUTHORIZATION)) {
            Ok(username) => {
                tracing::debug!(user = %username, path = %req.path(), "Authenticated");
                req.insert_extension(AuthenticatedUser { username });
                chain.next(req).await
            }
            Err(reason) => {
                tracing::debug!(reason, path = %req.path(), "Rejecting request");
                Err(DispatchError::Unauthorized {
                    realm: self.realm.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> BasicAuthFilter {
        BasicAuthFilter::new("realm", "admin", "secret")
    }

    fn basic(credentials: &str) -> String {
        format!("Basic {}", BASE64.encode(credentials))
    }

    #[test]
    fn accepts_correct_credentials() {
        let header = basic("admin:secret");
        assert_eq!(filter().verify(Some(&header)).unwrap(), "admin");
    }

    #[test]
    fn rejects_missing_header() {
        assert!(filter().verify(None).is_err());
    }

    #[test]
    fn rejects_non_basic_scheme() {
        assert!(filter().verify(Some("Bearer token")).is_err());
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(filter().verify(Some("Basic !!!not-base64!!!")).is_err());
    }

    #[test]
    fn rejects_missing_separator() {
        let header = basic("adminsecret");
        assert!(filter().verify(Some(&header)).is_err());
    }

    #[test]
    fn rejects_wrong_password() {
        let header = basic("admin:wrong");
        assert!(filter().verify(Some(&header)).is_err());
    }

    #[test]
    fn password_may_contain_colons() {
        let filter = BasicAuthFilter::new("realm", "admin", "se:cret");
        let header = basic("admin:se:cret");
        assert_eq!(filter.verify(Some(&header)).unwrap(), "admin");
    }
}
