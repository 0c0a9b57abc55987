//! 问候服务路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// 创建问候页路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::greeting_page))
        .route("/api/db/test", get(handlers::test_database))
        .route("/api/health", get(handlers::health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use common::config::AppConfig;
    use crate::connector::testing::{AlwaysDown, AlwaysUp};
    use crate::connector::ConnectivityProbe;
    use crate::state::AppState;

    fn test_app(probe: Arc<dyn ConnectivityProbe>) -> axum::Router {
        let config = AppConfig::load_with_service("greeter-service");
        crate::create_router(AppState::with_probe(config, probe))
    }

    async fn get_response(app: axum::Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_page_reports_success() {
        let response = get_response(test_app(Arc::new(AlwaysUp)), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert_eq!(content_type, "text/html; charset=utf-8");

        let body = body_string(response).await;
        assert_eq!(
            body,
            "<h1>Hello from LAMP on CentOS 9!</h1><p>Connected to the database successfully.</p>"
        );
    }

    #[tokio::test]
    async fn test_root_page_reports_failure_with_escaped_error() {
        let probe = AlwaysDown("error & <socket> gone".to_string());
        let response = get_response(test_app(Arc::new(probe)), "/").await;

        // The page itself still renders, only the result line changes
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.starts_with("<h1>Hello from LAMP on CentOS 9!</h1>"));
        assert!(body.contains(
            r#"<p style="color:red">Database connection failed: error &amp; &lt;socket&gt; gone</p>"#
        ));
        assert!(!body.contains("<socket>"));
    }

    #[tokio::test]
    async fn test_db_test_reports_failure_outcome() {
        let probe = AlwaysDown("connection refused".to_string());
        let response = get_response(test_app(Arc::new(probe)), "/api/db/test").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["success"], false);
        assert_eq!(json["data"]["error"], "connection refused");
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_db_test_reports_latency_on_success() {
        let response = get_response(test_app(Arc::new(AlwaysUp)), "/api/db/test").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["success"], true);
        assert!(json["data"]["latency_ms"].is_u64());
        assert!(json["data"].get("error").is_none());
    }

    #[tokio::test]
    async fn test_health_reports_service_without_credentials() {
        let response = get_response(test_app(Arc::new(AlwaysUp)), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "greeter-service");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(!body.contains("CHANGE_ME_PASS"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = get_response(test_app(Arc::new(AlwaysUp)), "/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["openapi"].is_string());
        assert!(json["paths"]["/"].is_object());
    }

    #[tokio::test]
    async fn test_responses_carry_request_id_header() {
        let response = get_response(test_app(Arc::new(AlwaysUp)), "/").await;
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get_response(test_app(Arc::new(AlwaysUp)), "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
