use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_profile_page_returns_200() {
    let app = common::create_test_app();

    let (status, body) = common::get(&app, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("TEACHER IRV"));
    assert!(body.contains(r#"src="/your-photo.jpg""#));
}

#[tokio::test]
async fn test_profile_page_defaults_to_traditional_chinese() {
    let app = common::create_test_app();

    let (_, body) = common::get(&app, "/", None).await;

    assert!(body.contains(r#"<html lang="zh-TW">"#));
    assert!(body.contains("專業私人家教"));
    assert!(body.contains("教學成效"));
    assert!(body.contains("使用語言"));
    assert!(body.contains("教學特色"));
    assert!(body.contains("教學專長"));
    assert!(body.contains("學歷背景"));
    assert!(body.contains("國立中興大學"));
    assert!(body.contains("TOEIC 945 / IELTS 7.5"));
    assert!(body.contains("（如木翻、輔大）"));
    assert!(body.contains("irvwang"));
    assert!(body.contains("kettn0504@gmail.com"));
}

#[tokio::test]
async fn test_profile_page_in_english() {
    let app = common::create_test_app();

    let (_, body) = common::get(&app, "/", Some("en-US,en;q=0.9")).await;

    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains("Professional private tutor"));
    assert!(body.contains("Teaching Results"));
    assert!(body.contains("Specialties"));
    assert!(body.contains("(e.g. 木翻 and Fu Jen)"));
    assert!(body.contains("National Chung Hsing University"));
}

#[tokio::test]
async fn test_profile_page_has_empty_contact_form() {
    let app = common::create_test_app();

    let (_, body) = common::get(&app, "/", Some("en")).await;

    assert!(body.contains(r#"action="/contact""#));
    assert!(body.contains(r#"type="text" name="name""#));
    assert!(body.contains(r#"type="email" name="email""#));
    assert!(body.contains(r#"<textarea name="message""#));
    assert!(body.contains(r#"value="""#));
    assert_eq!(body.matches("required").count(), 3);
    assert!(!body.contains("<dialog"));
    assert!(!body.contains("aria-invalid"));
}

#[tokio::test]
async fn test_unknown_route_returns_404_page() {
    let app = common::create_test_app();

    let (status, body) = common::get(&app, "/recipes", Some("en")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_missing_photo_does_not_break_page() {
    let app = common::create_test_app();

    let (status, _) = common::get(&app, "/your-photo.jpg", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::get(&app, "/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_photo_is_not_cached_as_immutable() {
    let app = common::create_test_app().layer(axum::middleware::from_fn(
        irv_profile::middleware::cache_control_middleware,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/your-photo.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let cache_control = response.headers()[header::CACHE_CONTROL].to_str().unwrap();
    assert!(!cache_control.contains("immutable"));
    assert!(cache_control.contains("no-store"));
}

#[tokio::test]
async fn test_served_stylesheet_is_cached_as_immutable() {
    let app = common::create_test_app().layer(axum::middleware::from_fn(
        irv_profile::middleware::cache_control_middleware,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/css/profile.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = common::create_test_app();

    let (status, body) = common::get(&app, "/static/css/profile.css", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".contact-form"));
}

#[tokio::test]
async fn test_health() {
    let app = common::create_test_app();

    let (status, body) = common::get(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ok"));
}
