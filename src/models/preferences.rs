//! 用餐偏好：餐食类型、烹饪时间、输出语言

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// 餐食类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MealType {
    #[default]
    Any,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Any,
        MealType::Vegetarian,
        MealType::Vegan,
        MealType::GlutenFree,
    ];

    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            MealType::Any => "Any",
            MealType::Vegetarian => "Vegetarian",
            MealType::Vegan => "Vegan",
            MealType::GlutenFree => "Gluten-Free",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| matches_name(v.name(), name))
    }
}

/// 烹饪时间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CookingTime {
    #[default]
    Any,
    #[serde(rename = "Under 15 mins")]
    Under15Mins,
    #[serde(rename = "Under 30 mins")]
    Under30Mins,
    #[serde(rename = "Over 30 mins")]
    Over30Mins,
}

impl CookingTime {
    pub const ALL: [CookingTime; 4] = [
        CookingTime::Any,
        CookingTime::Under15Mins,
        CookingTime::Under30Mins,
        CookingTime::Over30Mins,
    ];

    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            CookingTime::Any => "Any",
            CookingTime::Under15Mins => "Under 15 mins",
            CookingTime::Under30Mins => "Under 30 mins",
            CookingTime::Over30Mins => "Over 30 mins",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| matches_name(v.name(), name))
    }
}

/// 菜谱输出语言
///
/// 只作为标签透传给菜谱服务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
    Gujarati,
    Maithili,
    Bhojpuri,
    Spanish,
    French,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Hindi,
        Language::Punjabi,
        Language::Gujarati,
        Language::Maithili,
        Language::Bhojpuri,
        Language::Spanish,
        Language::French,
    ];

    /// 获取语言名称
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Punjabi => "Punjabi",
            Language::Gujarati => "Gujarati",
            Language::Maithili => "Maithili",
            Language::Bhojpuri => "Bhojpuri",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| matches_name(v.name(), name))
    }
}

macro_rules! impl_display_by_name {
    ($($ty:ty),*) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

impl_display_by_name!(MealType, CookingTime, Language);

/// 不区分大小写，并把 `-`、`_` 和连续空白都视为同一个分隔
fn matches_name(expected: &str, input: &str) -> bool {
    fn fold(s: &str) -> String {
        s.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
    fold(expected) == fold(input)
}

/// 用餐偏好
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub meal_type: MealType,
    pub cooking_time: CookingTime,
    pub language: Language,
}

impl Preferences {
    /// 生成发送给菜谱服务的偏好描述
    ///
    /// 语言单独作为字段发送，不在描述里
    pub fn describe(&self) -> String {
        format!(
            "Meal type: {}. Cooking time: {}.",
            self.meal_type, self.cooking_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.meal_type, MealType::Any);
        assert_eq!(prefs.cooking_time, CookingTime::Any);
        assert_eq!(prefs.language, Language::English);
    }

    #[test]
    fn test_describe() {
        let prefs = Preferences {
            meal_type: MealType::GlutenFree,
            cooking_time: CookingTime::Under30Mins,
            language: Language::Hindi,
        };
        assert_eq!(
            prefs.describe(),
            "Meal type: Gluten-Free. Cooking time: Under 30 mins."
        );
    }

    #[test]
    fn test_from_name_is_lenient() {
        assert_eq!(MealType::from_name("gluten free"), Some(MealType::GlutenFree));
        assert_eq!(MealType::from_name("VEGAN"), Some(MealType::Vegan));
        assert_eq!(
            CookingTime::from_name("under 15  mins"),
            Some(CookingTime::Under15Mins)
        );
        assert_eq!(Language::from_name("bhojpuri"), Some(Language::Bhojpuri));
        assert_eq!(Language::from_name("Klingon"), None);
    }

    #[test]
    fn test_serialized_names_match_display() {
        assert_eq!(
            serde_json::to_string(&CookingTime::Over30Mins).unwrap(),
            "\"Over 30 mins\""
        );
        assert_eq!(
            serde_json::to_string(&MealType::GlutenFree).unwrap(),
            "\"Gluten-Free\""
        );
    }
}
