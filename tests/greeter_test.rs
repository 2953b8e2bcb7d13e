use axum::body::Body;
use axum::Router;
use config_greeter::config::{ConfigValue, GreeterConfig};
use config_greeter::greeter::{router, AppState};
use config_greeter::render::Renderer;
use config_greeter::settings::GreeterSettings;
use http::header::CONTENT_TYPE;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

fn app_with(config: &GreeterConfig) -> Router {
    router(AppState {
        settings: GreeterSettings::from_config(config),
        renderer: Renderer::new(),
    })
}

async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_defaults_when_config_is_empty() {
    let (status, body) = get(app_with(&GreeterConfig::empty()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("hello from default"));
    assert!(body.contains("<td>0</td>"));
    assert!(body.contains("No VCAP Settings found"));
    assert!(body.contains("local_app"));
    assert!(body.contains("local_space"));
}

#[tokio::test]
async fn index_renders_configured_values_verbatim() {
    let config = GreeterConfig::from_yaml_str(
        "application:\n  greeting:\n    message: hi\n  number:\n    value: 42\n",
        "test",
    )
    .unwrap();
    let (status, body) = get(app_with(&config), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>hi</h1>"));
    assert!(body.contains("<td>42</td>"));
}

#[tokio::test]
async fn index_reflects_bound_service_credentials() {
    let mut config = GreeterConfig::empty();
    config.set(
        "vcap.services.my-custom-service.username",
        ConfigValue::String("svc-user".into()),
    );
    config.set("vcap.application.name", ConfigValue::String("demo-app".into()));
    let (status, body) = get(app_with(&config), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("svc-user"));
    assert!(body.contains("demo-app"));
}

#[tokio::test]
async fn index_is_served_as_html() {
    let app = app_with(&GreeterConfig::empty());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn no_route_is_ever_unauthorized() {
    let app = app_with(&GreeterConfig::empty());
    for path in ["/missing", "/admin", "/deeply/nested/route"] {
        let (status, _) = get(app.clone(), path).await;
        assert_ne!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert_ne!(status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn health_reports_up() {
    let (status, body) = get(app_with(&GreeterConfig::empty()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"UP"}"#);
}
