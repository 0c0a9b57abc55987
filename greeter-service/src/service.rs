//! 问候页渲染服务模块

use std::sync::Arc;

use common::errors::AppResult;
use common::utils::HtmlEscaper;
use crate::connector::ConnectivityProbe;

/// 页面固定问候语
pub const GREETING_HTML: &str = "<h1>Hello from LAMP on CentOS 9!</h1>";

/// 数据库连接成功提示
pub const SUCCESS_HTML: &str = "<p>Connected to the database successfully.</p>";

/// 问候页服务
pub struct GreeterService {
    probe: Arc<dyn ConnectivityProbe>,
}

impl GreeterService {
    /// 创建新的问候页服务实例
    pub fn new(probe: Arc<dyn ConnectivityProbe>) -> Self {
        Self { probe }
    }

    /// 渲染问候页
    ///
    /// 先输出固定问候语，再执行一次连接探测并追加结果段落。
    /// 无论探测结果如何，页面本身都会正常返回。
    pub async fn render_page(&self) -> String {
        let mut page = String::from(GREETING_HTML);
        match self.probe.check().await {
            Ok(latency) => {
                tracing::info!(latency_ms = latency.as_millis() as u64, "数据库连接成功");
                page.push_str(SUCCESS_HTML);
            }
            Err(e) => page.push_str(&Self::failure_line(&e.to_string())),
        }
        page
    }

    /// 测试数据库连通性，返回连接耗时（毫秒）
    pub async fn test(&self) -> AppResult<u64> {
        let latency = self.probe.check().await?;
        Ok(latency.as_millis() as u64)
    }

    /// 连接失败时的结果行，驱动错误信息经过 HTML 转义
    fn failure_line(error: &str) -> String {
        format!(
            r#"<p style="color:red">Database connection failed: {}</p>"#,
            HtmlEscaper::escape(error)
        )
    }
}
