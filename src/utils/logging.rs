//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::{info, warn};

use crate::config::Config;
use crate::models::RecipeRequest;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🍳 菜谱助手启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 菜谱服务: {}", config.generate_url());
    info!("{}", "=".repeat(60));
}

/// 记录即将发出的菜谱请求
pub fn log_request(request: &RecipeRequest) {
    info!(
        "📤 请求菜谱: {} 人份, 语言 {}, 食材 [{}]",
        request.servings,
        request.language,
        truncate_text(&request.ingredients_text, 80)
    );
}

/// 记录请求结果
///
/// # 参数
/// - `elapsed_ms`: 请求耗时（毫秒）
/// - `outcome`: 成功时为菜名，失败时为错误信息
pub fn log_outcome(elapsed_ms: u128, outcome: Result<&str, &str>) {
    match outcome {
        Ok(title) => info!("✅ 菜谱已生成: {} (耗时 {} ms)", title, elapsed_ms),
        Err(message) => warn!("❌ 菜谱生成失败: {} (耗时 {} ms)", message, elapsed_ms),
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
