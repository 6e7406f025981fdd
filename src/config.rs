use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AppResult, ConfigError};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "recipe_assistant.toml";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 菜谱服务地址
    pub service_base_url: String,
    /// 生成菜谱的接口路径
    pub generate_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// tracing 过滤规则
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_base_url: "http://localhost:3001".to_string(),
            generate_path: "/generate-recipe".to_string(),
            verbose_logging: false,
            log_filter: "recipe_assistant=info".to_string(),
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    service_base_url: Option<String>,
    generate_path: Option<String>,
    verbose_logging: Option<bool>,
    log_filter: Option<String>,
}

impl Config {
    /// 只从环境变量读取，未设置的项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 读取配置文件（可选）后再叠加环境变量
    ///
    /// 配置文件路径取自 `RECIPE_ASSISTANT_CONFIG`，默认 `recipe_assistant.toml`。
    /// 文件不存在时跳过；存在但无法解析时报错。
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("RECIPE_ASSISTANT_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let config = Self::from_file_or_default(Path::new(&path))?;
        Ok(config.with_env_overrides())
    }

    /// 从 TOML 文件读取配置；文件不存在时返回默认配置
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("配置文件 {} 不存在，使用默认配置", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// 解析 TOML 文本，缺省项使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(content)?;
        let default = Self::default();
        Ok(Self {
            service_base_url: file.service_base_url.unwrap_or(default.service_base_url),
            generate_path: file.generate_path.unwrap_or(default.generate_path),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
            log_filter: file.log_filter.unwrap_or(default.log_filter),
        })
    }

    fn with_env_overrides(self) -> Self {
        Self {
            service_base_url: std::env::var("RECIPE_SERVICE_URL").unwrap_or(self.service_base_url),
            generate_path: std::env::var("RECIPE_GENERATE_PATH").unwrap_or(self.generate_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            log_filter: std::env::var("RUST_LOG").unwrap_or(self.log_filter),
        }
    }

    /// 生成菜谱接口的完整地址
    pub fn generate_url(&self) -> String {
        let base = self.service_base_url.trim_end_matches('/');
        let path = self.generate_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
