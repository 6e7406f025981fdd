//! 日志初始化

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化 tracing 日志
///
/// 日志写到 stderr，避免和终端页面（stdout）混在一起。
/// 开启 `verbose_logging` 时本 crate 输出 debug 级别。
pub fn init(config: &Config) {
    let filter = if config.verbose_logging {
        "recipe_assistant=debug".to_string()
    } else {
        config.log_filter.clone()
    };

    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
