use anyhow::{Context, Result};
use recipe_assistant::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logger::init(&config);

    // 初始化并运行应用
    App::initialize(&config).run().await?;

    Ok(())
}
