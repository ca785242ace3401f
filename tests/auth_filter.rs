//! End-to-end tests for the Basic authentication filter.

use std::sync::Arc;

use web_dispatch::dispatch::{HandlerValue, RouteMapping};
use web_dispatch::security::{AuthenticatedUser, BasicAuthFilter};
use web_dispatch::ApplicationContext;

mod common;

fn guarded_context() -> ApplicationContext {
    ApplicationContext::builder()
        .filter(Arc::new(BasicAuthFilter::new("vault", "admin", "secret")))
        .route_fn(RouteMapping::get("/secret"), |req| async move {
            let user = req
                .extensions()
                .get::<AuthenticatedUser>()
                .map(|u| u.username.clone())
                .unwrap_or_default();
            Ok(HandlerValue::Text(format!("hello {}", user)))
        })
        .build()
}

#[tokio::test]
async fn missing_credentials_get_a_challenge() {
    let (addr, _shutdown) = common::spawn_app(guarded_context()).await;

    let res = common::client()
        .get(format!("http://{}/secret", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
    assert_eq!(
        res.headers()["www-authenticate"],
        "Basic realm=\"vault\""
    );
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (addr, _shutdown) = common::spawn_app(guarded_context()).await;

    let res = common::client()
        .get(format!("http://{}/secret", addr))
        .basic_auth("admin", Some("wrong"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
}

#[tokio::test]
async fn malformed_header_is_rejected() {
    let (addr, _shutdown) = common::spawn_app(guarded_context()).await;

    let res = common::client()
        .get(format!("http://{}/secret", addr))
        .header("Authorization", "Basic not!base64!")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
}

#[tokio::test]
async fn valid_credentials_pass_and_attach_the_user() {
    let (addr, _shutdown) = common::spawn_app(guarded_context()).await;

    let res = common::client()
        .get(format!("http://{}/secret", addr))
        .basic_auth("admin", Some("secret"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "hello admin");
}

#[tokio::test]
async fn filter_guards_unknown_paths_too() {
    // Auth runs before dispatch, so even a 404 requires credentials
    let (addr, _shutdown) = common::spawn_app(guarded_context()).await;

    let res = common::client()
        .get(format!("http://{}/nowhere", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    let res = common::client()
        .get(format!("http://{}/nowhere", addr))
        .basic_auth("admin", Some("secret"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}
