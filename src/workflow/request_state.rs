//! 请求状态机
//!
//! `Input → Loading → RecipeReady`，失败时 `Loading → Input`，
//! 重新开始时 `RecipeReady → Input`。菜谱只挂在 `RecipeReady` 上。

use std::fmt::Display;

use crate::models::Recipe;

/// 当前显示的页面 / 请求阶段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// 录入食材和偏好
    #[default]
    Input,
    /// 请求已发出，等待菜谱服务返回
    Loading,
    /// 菜谱已生成
    RecipeReady { recipe: Recipe, image_url: String },
}

impl RequestState {
    pub fn is_input(&self) -> bool {
        matches!(self, RequestState::Input)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            RequestState::RecipeReady { recipe, .. } => Some(recipe),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            RequestState::RecipeReady { image_url, .. } => Some(image_url),
            _ => None,
        }
    }

    /// 页面名称
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Input => "input",
            RequestState::Loading => "loading",
            RequestState::RecipeReady { .. } => "recipe",
        }
    }
}

impl Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
