//! 菜谱服务客户端
//!
//! 封装对外部菜谱生成服务（POST /generate-recipe）的调用

use std::future::Future;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ServiceError;
use crate::models::{ErrorBody, GeneratedRecipe, RecipeRequest};

/// 菜谱生成服务
///
/// 每次调用只发一次请求，不重试、不设超时
pub trait RecipeService {
    fn generate(
        &self,
        request: &RecipeRequest,
    ) -> impl Future<Output = Result<GeneratedRecipe, ServiceError>> + Send;
}

/// 基于 HTTP 的菜谱服务客户端
#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecipeClient {
    /// 创建新的菜谱服务客户端
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.generate_url())
    }

    /// 使用指定的完整接口地址创建客户端
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    fn transport_error(&self, source: reqwest::Error) -> ServiceError {
        warn!("请求菜谱服务失败: {}", source);
        ServiceError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl RecipeService for RecipeClient {
    async fn generate(&self, request: &RecipeRequest) -> Result<GeneratedRecipe, ServiceError> {
        debug!("POST {} payload: {:?}", self.endpoint, request);

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        debug!("菜谱服务响应 {}: {} 字节", status, body.len());

        parse_response(status, &body)
    }
}

/// 把响应状态码和响应体映射为结果
///
/// - 2xx：解析 `{recipe, imageUrl}`，失败视为响应体格式错误
/// - 其他：尽量从 `{error}` 中取出错误信息
pub fn parse_response(status: StatusCode, body: &str) -> Result<GeneratedRecipe, ServiceError> {
    if status.is_success() {
        return serde_json::from_str::<GeneratedRecipe>(body).map_err(|e| {
            warn!("菜谱服务响应无法解析: {}", e);
            ServiceError::malformed(e.to_string())
        });
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);

    Err(ServiceError::Status {
        status: status.as_u16(),
        message,
    })
}
