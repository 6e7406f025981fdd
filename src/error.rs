use thiserror::Error;

/// 服务端没有给出可读信息时展示给用户的兜底文案
pub const GENERIC_SERVICE_MESSAGE: &str =
    "Sorry, the kitchen is a bit busy! Couldn't generate a recipe. Please try again.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入校验错误（不会发起网络请求）
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 菜谱服务调用错误
    #[error("服务错误: {0}")]
    Service(#[from] ServiceError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 终端读写错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 展示给用户的单行文案
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.user_message().to_string(),
            AppError::Service(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// 输入校验错误
///
/// 在联系菜谱服务之前就被拦截，界面停留在输入页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 食材列表为空
    #[error("食材列表为空")]
    NoIngredients,
    /// 已有请求在进行中
    #[error("已有菜谱请求正在进行")]
    RequestInFlight,
    /// 还没有进入等待状态就试图调用服务
    #[error("菜谱请求尚未开始")]
    RequestNotStarted,
    /// 菜谱已生成，需要先重新开始
    #[error("菜谱已生成，请先重新开始")]
    RecipeAlreadyShown,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NoIngredients => "Please add at least one ingredient.",
            ValidationError::RequestInFlight => {
                "A recipe is already being prepared. Please wait for it to finish."
            }
            ValidationError::RequestNotStarted => "Press generate to ask for a recipe.",
            ValidationError::RecipeAlreadyShown => {
                "Start over before asking for another recipe."
            }
        }
    }
}

/// 菜谱服务调用错误
///
/// 不区分暂时性与永久性失败，也不做重试
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 网络请求失败（连接失败、传输中断等）
    #[error("请求 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务返回非 2xx 状态码
    #[error("服务返回错误状态 {status}: {message:?}")]
    Status { status: u16, message: Option<String> },
    /// 响应体无法解析
    #[error("响应体格式错误: {detail}")]
    MalformedBody { detail: String },
}

impl ServiceError {
    /// 提取可读错误信息
    ///
    /// 优先使用服务端 `error` 字段；非 2xx 但没有可用信息时给出状态码；
    /// 其余情况使用兜底文案。
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ServiceError::Status { status, .. } => format!("HTTP error! status: {}", status),
            ServiceError::Transport { .. } | ServiceError::MalformedBody { .. } => {
                GENERIC_SERVICE_MESSAGE.to_string()
            }
        }
    }

    /// 创建响应体解析错误
    pub fn malformed(detail: impl Into<String>) -> Self {
        ServiceError::MalformedBody {
            detail: detail.into(),
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("读取配置文件 {path} 失败: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("解析配置文件 {path} 失败: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_server_error_field() {
        let err = ServiceError::Status {
            status: 500,
            message: Some("kitchen overloaded".to_string()),
        };
        assert_eq!(err.user_message(), "kitchen overloaded");
    }

    #[test]
    fn test_status_without_message_reports_code() {
        let err = ServiceError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), "HTTP error! status: 502");

        // 空白字符串视为没有信息
        let err = ServiceError::Status {
            status: 400,
            message: Some("   ".to_string()),
        };
        assert_eq!(err.user_message(), "HTTP error! status: 400");
    }

    #[test]
    fn test_malformed_body_falls_back_to_generic_message() {
        let err = ServiceError::malformed("missing field `recipe`");
        assert_eq!(err.user_message(), GENERIC_SERVICE_MESSAGE);
    }

    #[test]
    fn test_app_error_user_message_delegates() {
        let err: AppError = ValidationError::NoIngredients.into();
        assert_eq!(err.user_message(), "Please add at least one ingredient.");
    }
}
