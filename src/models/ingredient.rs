//! 食材条目与食材列表

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 计量单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Grams,
    Kg,
    Pieces,
    Ml,
    Tbsp,
    Tsp,
}

impl Unit {
    /// 全部单位，按表单中的顺序
    pub const ALL: [Unit; 6] = [
        Unit::Grams,
        Unit::Kg,
        Unit::Pieces,
        Unit::Ml,
        Unit::Tbsp,
        Unit::Tsp,
    ];

    /// 获取单位名称
    pub fn name(self) -> &'static str {
        match self {
            Unit::Grams => "grams",
            Unit::Kg => "kg",
            Unit::Pieces => "pieces",
            Unit::Ml => "ml",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
        }
    }

    /// 从名称解析单位（不区分大小写）
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(name))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown unit '{}'", s.trim()))
    }
}

/// 一条食材
///
/// 名称在创建时规范化（去空白、转小写），之后不可修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    name: String,
    quantity: String,
    unit: Unit,
}

impl IngredientEntry {
    /// 创建食材条目，名称或数量为空时返回 `None`
    pub fn new(name: &str, quantity: &str, unit: Unit) -> Option<Self> {
        let name = name.trim().to_lowercase();
        let quantity = quantity.trim();
        if name.is_empty() || quantity.is_empty() {
            return None;
        }
        Some(Self {
            name,
            quantity: quantity.to_string(),
            unit,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl Display for IngredientEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.name, self.quantity, self.unit)
    }
}

/// 按添加顺序保存的食材列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    entries: Vec<IngredientEntry>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加食材；名称或数量为空时不做任何事
    ///
    /// # 返回
    /// 列表是否发生变化
    pub fn add(&mut self, name: &str, quantity: &str, unit: Unit) -> bool {
        match IngredientEntry::new(name, quantity, unit) {
            Some(entry) => {
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// 按索引（从0开始）删除食材；越界时不做任何事
    pub fn remove(&mut self, index: usize) -> Option<IngredientEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientEntry> {
        self.entries.iter()
    }

    /// 生成发送给菜谱服务的食材描述
    ///
    /// 格式: `name (qty unit), name (qty unit), ...`
    pub fn describe(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
