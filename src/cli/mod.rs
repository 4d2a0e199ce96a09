mod export;
mod foods;
mod summary;

pub use export::*;
pub use foods::*;
pub use summary::*;

use std::path::Path;

use anyhow::Context;
use nutriplan_nutrition::{FoodTable, MealPlan};

use crate::config::Config;

/// Reads a meal plan from its JSON file.
pub fn load_plan(path: &Path) -> anyhow::Result<MealPlan> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan {}", path.display()))?;
    let plan: MealPlan = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse plan {}", path.display()))?;
    plan.validate().with_context(|| format!("Invalid plan {}", path.display()))?;

    tracing::info!(plan = %plan.name, meals = plan.meals.len(), "plan loaded");

    Ok(plan)
}

/// Configured food dataset, or the bundled one.
pub fn load_foods(config: &Config) -> anyhow::Result<FoodTable> {
    let foods = match &config.dataset.foods_path {
        Some(path) => FoodTable::from_path(path)
            .with_context(|| format!("Failed to load food dataset {path}"))?,
        None => FoodTable::bundled().context("Failed to load bundled food dataset")?,
    };

    tracing::debug!(foods = foods.len(), "food dataset ready");

    Ok(foods)
}
