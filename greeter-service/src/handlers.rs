//! Handler模块

use axum::{
    extract::State,
    response::Html,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use common::errors::AppError;
use common::middleware::request_id::RequestId;
use common::response::ApiResponse;
use crate::service::GreeterService;
use crate::state::AppState;

/// 问候页
///
/// 固定问候语加上一次数据库连接探测的结果。探测失败不影响页面
/// 本身的状态码，失败信息会转义后嵌入页面。
#[utoipa::path(
    get,
    path = "/",
    tag = "page",
    responses(
        (status = 200, description = "问候页 HTML", content_type = "text/html", body = String)
    )
)]
pub async fn greeting_page(State(state): State<AppState>) -> Html<String> {
    let service = GreeterService::new(state.probe);
    Html(service.render_page().await)
}

/// 测试数据库连通性
#[utoipa::path(
    get,
    path = "/api/db/test",
    tag = "database",
    responses(
        (status = 200, description = "连接测试结果", body = ApiResponse<DbTestResult>)
    )
)]
pub async fn test_database(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<DbTestResult>>, AppError> {
    let service = GreeterService::new(state.probe);
    let result = match service.test().await {
        Ok(latency_ms) => DbTestResult {
            success: true,
            latency_ms: Some(latency_ms),
            error: None,
        },
        Err(e) => DbTestResult {
            success: false,
            latency_ms: None,
            error: Some(e.to_string()),
        },
    };
    Ok(Json(
        ApiResponse::ok_with_service(result, "greeter-service")
            .with_request_id(request_id.as_str()),
    ))
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "greeter-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        database: state.config.database.redacted_url(),
    })
}

/// 连接测试结果
#[derive(Serialize, ToSchema)]
pub struct DbTestResult {
    /// 测试是否成功
    pub success: bool,
    /// 连接耗时（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// 错误信息（如果测试失败）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
    /// 数据库地址（不含凭据）
    pub database: String,
}
