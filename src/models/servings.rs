//! 份数

use std::fmt::Display;

use serde::Serialize;

/// 份数，始终不小于 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Servings(u32);

impl Servings {
    pub const DEFAULT: Servings = Servings(2);
    pub const MIN: u32 = 1;

    /// 创建份数，小于 1 时取 1
    pub fn new(count: u32) -> Self {
        Self(count.max(Self::MIN))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// 加一份，没有上限
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// 减一份，最少 1 份
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
    }
}

impl Default for Servings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Servings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two() {
        assert_eq!(Servings::default().get(), 2);
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut servings = Servings::default();
        for _ in 0..5 {
            servings.decrement();
        }
        assert_eq!(servings.get(), 1);
    }

    #[test]
    fn test_increment_unbounded() {
        let mut servings = Servings::new(1);
        for _ in 0..99 {
            servings.increment();
        }
        assert_eq!(servings.get(), 100);
    }

    #[test]
    fn test_new_clamps_zero() {
        assert_eq!(Servings::new(0).get(), 1);
        assert_eq!(Servings::new(6).get(), 6);
    }
}
