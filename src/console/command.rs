//! 终端命令解析

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CookingTime, Language, MealType, Unit};

/// 份数调整方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Increment,
    Decrement,
    Set(u32),
}

/// 一条用户命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        quantity: String,
        unit: Unit,
    },
    /// 从0开始的索引（用户输入的是从1开始的编号）
    Remove(usize),
    Servings(ServingsChange),
    Meal(MealType),
    Time(CookingTime),
    Lang(Language),
    Generate,
    Reset,
    Show,
    Help,
    Quit,
}

/// `<name> <qty> [unit]`，名称可以包含空格
static ADD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s+(?P<qty>\d+(?:\.\d+)?)\s*(?P<unit>[A-Za-z]+)?$")
        .expect("add pattern is a valid regex")
});

impl Command {
    /// 解析一行输入
    ///
    /// # 返回
    /// 失败时返回可以直接展示给用户的提示
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "add" | "a" => parse_add(rest),
            "remove" | "rm" => parse_remove(rest),
            "servings" | "s" => parse_servings(rest),
            "meal" => MealType::from_name(rest)
                .map(Command::Meal)
                .ok_or_else(|| choices("meal type", MealType::ALL.iter().map(|v| v.name()))),
            "time" => CookingTime::from_name(rest)
                .map(Command::Time)
                .ok_or_else(|| choices("cooking time", CookingTime::ALL.iter().map(|v| v.name()))),
            "lang" | "language" => Language::from_name(rest)
                .map(Command::Lang)
                .ok_or_else(|| choices("language", Language::ALL.iter().map(|v| v.name()))),
            "generate" | "go" => Ok(Command::Generate),
            "reset" | "new" => Ok(Command::Reset),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, String> {
    let usage = "Usage: add <name> <qty> [unit]";
    let caps = ADD_PATTERN.captures(rest).ok_or_else(|| usage.to_string())?;

    let unit = match caps.name("unit") {
        Some(m) => m.as_str().parse::<Unit>().map_err(|_| {
            choices("unit", Unit::ALL.iter().map(|u| u.name()))
        })?,
        None => Unit::default(),
    };

    Ok(Command::Add {
        name: caps["name"].to_string(),
        quantity: caps["qty"].to_string(),
        unit,
    })
}

fn parse_remove(rest: &str) -> Result<Command, String> {
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(Command::Remove(n - 1)),
        _ => Err("Usage: remove <number as listed>".to_string()),
    }
}

fn parse_servings(rest: &str) -> Result<Command, String> {
    let change = match rest {
        "+" => ServingsChange::Increment,
        "-" => ServingsChange::Decrement,
        n => n
            .parse::<u32>()
            .map(ServingsChange::Set)
            .map_err(|_| "Usage: servings <+|-|number>".to_string())?,
    };
    Ok(Command::Servings(change))
}

fn choices<'a>(what: &str, names: impl Iterator<Item = &'a str>) -> String {
    format!(
        "Unknown {}. Choose one of: {}",
        what,
        names.collect::<Vec<_>>().join(", ")
    )
}
