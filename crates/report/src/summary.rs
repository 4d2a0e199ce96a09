use std::fmt;

use nutriplan_nutrition::{FoodLookup, MealPlan, Nutrient, nutrients_for_meal};

use crate::format::{round, round_tenths};
use crate::rows::{ItemRow, TotalRow, item_rows, total_rows};

#[derive(Debug, Clone, PartialEq)]
pub struct NutrientFigure {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealSummary {
    pub name: String,
    /// Energy and macronutrients, rounded to integers.
    pub main: Vec<NutrientFigure>,
    /// Fiber and minerals, one decimal.
    pub details: Vec<NutrientFigure>,
    pub items: Vec<ItemRow>,
}

/// What the planner shows on screen for a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub name: String,
    pub meals: Vec<MealSummary>,
    pub totals: Vec<TotalRow>,
}

impl PlanSummary {
    pub fn build<L: FoodLookup + ?Sized>(plan: &MealPlan, foods: &L) -> Self {
        let meals = plan
            .meals
            .iter()
            .map(|meal| {
                let nutrients = nutrients_for_meal(foods, meal);

                MealSummary {
                    name: meal.name.to_owned(),
                    main: Nutrient::MAIN
                        .iter()
                        .map(|n| NutrientFigure {
                            label: n.label(),
                            value: round(nutrients.get(n.key())).to_string(),
                            unit: n.unit(),
                        })
                        .collect(),
                    details: Nutrient::DETAILED
                        .iter()
                        .map(|n| NutrientFigure {
                            label: n.label(),
                            value: round_tenths(nutrients.get(n.key())),
                            unit: n.unit(),
                        })
                        .collect(),
                    items: item_rows(foods, meal),
                }
            })
            .collect();

        Self {
            name: plan.name.to_owned(),
            meals,
            totals: total_rows(foods, plan),
        }
    }

    pub fn violations(&self) -> impl Iterator<Item = &TotalRow> {
        self.totals.iter().filter(|row| row.evaluation.is_violation())
    }
}

fn write_figures(f: &mut fmt::Formatter<'_>, figures: &[NutrientFigure]) -> fmt::Result {
    let line = figures
        .iter()
        .map(|n| format!("{}: {} {}", n.label, n.value, n.unit))
        .collect::<Vec<_>>()
        .join(" | ");

    writeln!(f, "    {line}")
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;

        for meal in &self.meals {
            writeln!(f)?;
            writeln!(f, "  {}", meal.name)?;
            write_figures(f, &meal.main)?;
            write_figures(f, &meal.details)?;
            for item in &meal.items {
                writeln!(
                    f,
                    "    - {} ({}): {} kcal",
                    item.description, item.portion, item.calories
                )?;
            }
        }

        if !self.totals.is_empty() {
            writeln!(f)?;
            writeln!(f, "  Goals")?;
            for row in &self.totals {
                let marker = if row.evaluation.is_violation() { " !" } else { "" };
                writeln!(
                    f,
                    "    {}: {} ({}) {}{}",
                    row.label, row.actual, row.goal, row.evaluation.status, marker
                )?;
            }
        }

        Ok(())
    }
}
