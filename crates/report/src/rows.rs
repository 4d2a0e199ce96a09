use nutriplan_nutrition::{
    FoodLookup, GoalEvaluation, Meal, MealPlan, Nutrient, evaluate, label_of, nutrients_for_meal,
    nutrients_for_plan, unit_of,
};

use crate::format::{goal_target, number, portion, round, tolerance};

/// One line of the professional/patient block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    NutritionistName,
    License,
    Email,
    Phone,
    PatientName,
    Age,
    Gender,
    Height,
    Weight,
}

impl ProfileField {
    /// Label used by the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::NutritionistName => "Nutritionist Name",
            ProfileField::License => "License",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::PatientName => "Patient Name",
            ProfileField::Age => "Age",
            ProfileField::Gender => "Gender",
            ProfileField::Height => "Height",
            ProfileField::Weight => "Weight",
        }
    }

    /// Translation key used by the printable report.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::NutritionistName => "report.nutritionist_name",
            ProfileField::License => "report.license",
            ProfileField::Email => "report.email",
            ProfileField::Phone => "report.phone",
            ProfileField::PatientName => "report.patient_name",
            ProfileField::Age => "report.age",
            ProfileField::Gender => "report.gender",
            ProfileField::Height => "report.height",
            ProfileField::Weight => "report.weight",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub field: ProfileField,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub label: String,
    pub target: String,
    pub tolerance: String,
}

/// Figures of a single meal line, already rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub description: String,
    pub portion: String,
    pub calories: i64,
    pub protein: i64,
    pub carbohydrates: i64,
    pub lipids: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalRow {
    pub label: String,
    pub actual: String,
    pub goal: String,
    pub evaluation: GoalEvaluation,
}

/// Empty when the plan carries neither a nutritionist nor a patient.
pub fn profile_rows(plan: &MealPlan) -> Vec<ProfileRow> {
    let mut rows = Vec::new();
    let mut push = |field, value: String| rows.push(ProfileRow { field, value });

    if let Some(nutritionist) = &plan.nutritionist {
        push(ProfileField::NutritionistName, nutritionist.name.to_owned());
        push(ProfileField::License, nutritionist.license.to_owned());
        if let Some(email) = nutritionist.email.as_ref().filter(|v| !v.is_empty()) {
            push(ProfileField::Email, email.to_owned());
        }
        if let Some(phone) = nutritionist.phone.as_ref().filter(|v| !v.is_empty()) {
            push(ProfileField::Phone, phone.to_owned());
        }
    }

    if let Some(patient) = &plan.patient {
        push(ProfileField::PatientName, patient.name.to_owned());
        if let Some(age) = patient.age.filter(|v| *v > 0) {
            push(ProfileField::Age, age.to_string());
        }
        if let Some(gender) = patient.gender {
            push(ProfileField::Gender, gender.to_string());
        }
        if let Some(height) = patient.height.filter(|v| *v > 0.0) {
            push(ProfileField::Height, format!("{} cm", number(height)));
        }
        if let Some(weight) = patient.weight.filter(|v| *v > 0.0) {
            push(ProfileField::Weight, format!("{} kg", number(weight)));
        }
    }

    rows
}

pub fn goal_rows(plan: &MealPlan) -> Vec<GoalRow> {
    plan.goals
        .iter()
        .map(|(key, goal)| GoalRow {
            label: label_of(key),
            target: goal_target(key, goal),
            tolerance: tolerance(goal),
        })
        .collect()
}

/// Per-line figures of a meal; lines whose food is unknown are left out.
pub fn item_rows<L: FoodLookup + ?Sized>(foods: &L, meal: &Meal) -> Vec<ItemRow> {
    meal.items
        .iter()
        .filter_map(|item| {
            let food = foods.food(item.food_id)?;
            let nutrients = nutrients_for_meal(foods, &meal.single(item));

            Some(ItemRow {
                description: food.description.to_owned(),
                portion: portion(item.quantity, &item.unit),
                calories: round(nutrients.get(Nutrient::Energy.key())),
                protein: round(nutrients.get(Nutrient::Protein.key())),
                carbohydrates: round(nutrients.get(Nutrient::Carbohydrates.key())),
                lipids: round(nutrients.get(Nutrient::Lipids.key())),
            })
        })
        .collect()
}

/// Plan totals for every goal of the plan.
///
/// Both exporters print these rows, so CSV and printable report always agree.
pub fn total_rows<L: FoodLookup + ?Sized>(foods: &L, plan: &MealPlan) -> Vec<TotalRow> {
    let totals = nutrients_for_plan(foods, &plan.meals);

    evaluate(&totals, &plan.goals)
        .into_iter()
        .map(|(key, evaluation)| TotalRow {
            label: label_of(&key),
            actual: format!("{}{}", round(evaluation.actual), unit_of(&key)),
            goal: goal_target(&key, &evaluation.goal),
            evaluation,
        })
        .collect()
}
