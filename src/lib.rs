//! # Recipe Assistant
//!
//! 根据用户手头的食材和偏好，向远程菜谱服务请求一份菜谱（附配图地址）。
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 食材、偏好、份数、菜谱等值类型，以及请求文本的拼装
//!
//! ### ② 客户端层（Clients）
//! - `RecipeService` - 菜谱生成能力（一次调用，不重试）
//! - `RecipeClient` - 基于 reqwest 的 HTTP 实现
//!
//! ### ③ 流程层（Workflow）
//! - `RequestState` - `Input` / `Loading` / `RecipeReady` 三态
//! - `RecipeOrchestrator` - 持有输入和结果，驱动一次请求的生命周期
//!
//! ### ④ 界面层（Console）
//! - `console/` - 命令解析与三个页面的文本渲染
//! - `App` - 终端主循环
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod models;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{RecipeClient, RecipeService};
pub use config::Config;
pub use error::{AppError, AppResult, ServiceError, ValidationError};
pub use models::{GeneratedRecipe, IngredientList, Preferences, Recipe, RecipeRequest};
pub use workflow::{RecipeOrchestrator, RequestState};
