#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn create_test_app() -> Router {
    irv_profile::router(irv_profile::AppState {
        config: irv_profile::Config::default(),
    })
}

pub async fn get(router: &Router, uri: &str, language: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(language) = language {
        request = request.header(header::ACCEPT_LANGUAGE, language);
    }

    send(router, request.body(Body::empty()).unwrap()).await
}

pub async fn post_form(
    router: &Router,
    fields: &[(&str, &str)],
    language: Option<&str>,
) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(fields).unwrap();

    let mut request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(language) = language {
        request = request.header(header::ACCEPT_LANGUAGE, language);
    }

    send(router, request.body(Body::from(body)).unwrap()).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
