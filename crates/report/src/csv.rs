use nutriplan_nutrition::{FoodLookup, MealPlan};
use tracing::instrument;

use crate::format::slug;
use crate::rows::{goal_rows, item_rows, profile_rows, total_rows};
use crate::{Export, ReportOptions, Result};

/// Quotes a field when it holds a separator, a quote or a line break.
pub fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

fn record(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| escape(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the CSV export of a plan. Records are joined by `\n`, with no
/// trailing newline.
#[instrument(skip_all, fields(plan = %plan.name, meals = plan.meals.len()))]
pub fn to_csv<L: FoodLookup + ?Sized>(
    plan: &MealPlan,
    foods: &L,
    options: &ReportOptions,
) -> Result<Export> {
    let mut lines: Vec<String> = vec![
        "NutriPlan Export".to_owned(),
        format!("Plan Name: {}", plan.name),
        format!("Created: {}", options.format_date(plan.created_at)?),
        format!("Last Updated: {}", options.format_date(plan.updated_at)?),
        String::new(),
    ];

    if plan.nutritionist.is_some() || plan.patient.is_some() {
        lines.push("Professional and Patient Information".to_owned());
        for row in profile_rows(plan) {
            lines.push(record(&[row.field.label(), &row.value]));
        }
        lines.push(String::new());
    }

    lines.push("Nutritional Goals".to_owned());
    lines.push("Nutrient,Target,Tolerance".to_owned());
    for row in goal_rows(plan) {
        lines.push(record(&[&row.label, &row.target, &row.tolerance]));
    }
    lines.push(String::new());

    for meal in &plan.meals {
        lines.push(escape(&meal.name));
        lines.push("Food,Portion,Calories,Protein,Carbs,Lipids".to_owned());
        for row in item_rows(foods, meal) {
            lines.push(record(&[
                &row.description,
                &row.portion,
                &format!("{} kcal", row.calories),
                &format!("{}g", row.protein),
                &format!("{}g", row.carbohydrates),
                &format!("{}g", row.lipids),
            ]));
        }
        lines.push(String::new());
    }

    lines.push("Total Nutrition Summary".to_owned());
    lines.push("Nutrient,Actual,Goal".to_owned());
    for row in total_rows(foods, plan) {
        lines.push(record(&[&row.label, &row.actual, &row.goal]));
    }

    tracing::debug!(records = lines.len(), "csv export built");

    Ok(Export {
        file_name: format!("nutriplan-{}.csv", slug(&plan.name)),
        content: lines.join("\n"),
    })
}
