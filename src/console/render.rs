//! 三个页面的纯文本渲染

use std::fmt::{self, Display};

use crate::models::Recipe;
use crate::workflow::{RecipeOrchestrator, RequestState};

const RULE_WIDTH: usize = 60;

fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

/// 按当前状态渲染对应页面
pub fn screen(session: &RecipeOrchestrator) -> String {
    match session.state() {
        RequestState::Input => input_screen(session),
        RequestState::Loading => loading_screen(session.loading_message().unwrap_or_default()),
        RequestState::RecipeReady { recipe, image_url } => recipe_screen(recipe, image_url),
    }
}

/// 录入页：食材、偏好、份数和错误信息
pub fn input_screen(session: &RecipeOrchestrator) -> String {
    InputScreen(session).to_string()
}

/// 等待页
pub fn loading_screen(message: &str) -> String {
    format!("\n  ... {}\n", message)
}

/// 菜谱页
pub fn recipe_screen(recipe: &Recipe, image_url: &str) -> String {
    RecipeScreen { recipe, image_url }.to_string()
}

struct InputScreen<'a>(&'a RecipeOrchestrator);

impl Display for InputScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "What's in your kitchen?")?;
        writeln!(f, "{}", rule('-'))?;

        if session.ingredients().is_empty() {
            writeln!(f, "  Add some ingredients to get started...")?;
        } else {
            for (i, entry) in session.ingredients().iter().enumerate() {
                writeln!(
                    f,
                    "  {:>2}. {:<24} {} {}",
                    i + 1,
                    entry.name(),
                    entry.quantity(),
                    entry.unit()
                )?;
            }
        }

        let prefs = session.preferences();
        writeln!(f, "{}", rule('-'))?;
        writeln!(f, "Preferences")?;
        writeln!(f, "  Meal type:    {}", prefs.meal_type)?;
        writeln!(f, "  Cooking time: {}", prefs.cooking_time)?;
        writeln!(f, "  Language:     {}", prefs.language)?;
        writeln!(f, "  Servings:     {}", session.servings())?;

        if !session.error().is_empty() {
            writeln!(f, "{}", rule('-'))?;
            writeln!(f, "! {}", session.error())?;
        }
        writeln!(f, "{}", rule('='))
    }
}

struct RecipeScreen<'a> {
    recipe: &'a Recipe,
    image_url: &'a str,
}

impl Display for RecipeScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.recipe;
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "{}", recipe.title)?;
        if !recipe.description.is_empty() {
            writeln!(f, "{}", recipe.description)?;
        }
        writeln!(f, "{}", rule('-'))?;

        if self.image_url.is_empty() {
            writeln!(f, "Image: unavailable")?;
        } else {
            writeln!(f, "Image: {}", self.image_url)?;
        }
        writeln!(
            f,
            "Prep: {}  |  Cook: {}  |  Serves: {}",
            or_dash(&recipe.prep_time),
            or_dash(&recipe.cook_time),
            or_dash(&recipe.servings.to_string())
        )?;

        writeln!(f, "{}", rule('-'))?;
        writeln!(f, "Ingredients")?;
        for item in &recipe.ingredients {
            writeln!(f, "  - {}", item)?;
        }

        writeln!(f, "{}", rule('-'))?;
        writeln!(f, "Instructions")?;
        for (i, step) in recipe.instructions.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step)?;
        }
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "Type 'new' to create another recipe.")
    }
}

/// 帮助信息
pub fn help() -> &'static str {
    "Commands:
  add <name> <qty> [unit]   add an ingredient (units: grams, kg, pieces, ml, tbsp, tsp)
  remove <n>                remove ingredient number n
  servings <+|-|n>          change servings
  meal <type>               Any, Vegetarian, Vegan, Gluten-Free
  time <choice>             Any, Under 15 mins, Under 30 mins, Over 30 mins
  lang <language>           English, Hindi, Punjabi, Gujarati, Maithili, Bhojpuri, Spanish, French
  generate                  create my recipe
  new                       start over
  show                      redraw the current screen
  quit                      leave"
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}
