//! 菜谱服务的请求与响应

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

use super::{IngredientList, Language, Preferences, Servings};

/// 发送给菜谱服务的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub ingredients_text: String,
    pub preference_text: String,
    pub servings: Servings,
    pub language: Language,
}

impl RecipeRequest {
    /// 由当前输入组装请求
    pub fn compose(ingredients: &IngredientList, servings: Servings, preferences: &Preferences) -> Self {
        Self {
            ingredients_text: ingredients.describe(),
            preference_text: preferences.describe(),
            servings,
            language: preferences.language,
        }
    }
}

/// 菜谱的份数字段
///
/// AI 生成的内容有时给数字、有时给文字（如 "2-3"），两种都接受
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeYield {
    Count(u32),
    Text(String),
}

impl Default for RecipeYield {
    fn default() -> Self {
        RecipeYield::Text(String::new())
    }
}

impl Display for RecipeYield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeYield::Count(n) => write!(f, "{}", n),
            RecipeYield::Text(s) => f.write_str(s),
        }
    }
}

/// 缺失字段和 `null` 都取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 菜谱服务返回的菜谱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cook_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servings: RecipeYield,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
}

/// 成功响应：菜谱 + 配图地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    /// 配图生成失败时服务端可能给空字符串
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

/// 失败响应体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
