use std::collections::BTreeMap;

use nutriplan_shared::{bail, not_found};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;
use validator::Validate;

use crate::food::{FoodId, FoodTable};
use crate::goal::NutrientGoal;
use crate::unit::DEFAULT_UNIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub food_id: FoodId,
    pub quantity: f64,
    pub unit: String,
}

impl MealItem {
    pub fn new(food_id: FoodId, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            food_id,
            quantity,
            unit: unit.into(),
        }
    }
}

/// Partial change to a meal line; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub food_id: Option<FoodId>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MealItem>,
}

impl Meal {
    pub fn new(name: impl AsRef<str>) -> nutriplan_shared::Result<Self> {
        Ok(Self {
            name: meal_name(name.as_ref())?,
            items: Vec::new(),
        })
    }

    /// Renames the meal; blank names are rejected and leave it unchanged.
    pub fn rename(&mut self, name: impl AsRef<str>) -> nutriplan_shared::Result<()> {
        self.name = meal_name(name.as_ref())?;

        Ok(())
    }

    /// Wraps one line in its own meal, used for per-line figures.
    pub fn single(&self, item: &MealItem) -> Meal {
        Meal {
            name: self.name.to_owned(),
            items: vec![item.clone()],
        }
    }

    fn item_mut(&mut self, index: usize) -> nutriplan_shared::Result<&mut MealItem> {
        match self.items.get_mut(index) {
            Some(item) => Ok(item),
            None => not_found!("food line #{} in meal '{}'", index, self.name),
        }
    }
}

fn meal_name(name: &str) -> nutriplan_shared::Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Meal name must not be empty");
    }

    Ok(name.to_owned())
}

fn validate_quantity(quantity: f64) -> nutriplan_shared::Result<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        bail!("Quantity must be a positive number, got {quantity}");
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Nutritionist {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Gender {
    M,
    F,
    O,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Patient {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 150))]
    pub age: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0))]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0))]
    pub weight: Option<f64>,
}

/// Aggregate root of the planner.
///
/// Totals are never stored here; consumers recompute them from the current
/// meals. Every successful edit refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub name: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub goals: BTreeMap<String, NutrientGoal>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritionist: Option<Nutritionist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<Patient>,
}

impl MealPlan {
    pub fn new(name: impl AsRef<str>) -> nutriplan_shared::Result<Self> {
        let name = plan_name(name.as_ref())?;
        let now = OffsetDateTime::now_utc();

        Ok(Self {
            name,
            meals: Vec::new(),
            goals: BTreeMap::new(),
            created_at: now,
            updated_at: now,
            nutritionist: None,
            patient: None,
        })
    }

    /// Checks a plan that did not go through the editing methods, such as
    /// one read from a file, against the same rules those methods enforce.
    pub fn validate(&self) -> nutriplan_shared::Result<()> {
        plan_name(&self.name)?;

        for meal in &self.meals {
            meal_name(&meal.name)?;
            for item in &meal.items {
                validate_quantity(item.quantity)?;
            }
        }

        for (key, goal) in &self.goals {
            if key.trim().is_empty() {
                bail!("Nutrient key must not be empty");
            }
            goal.validate()?;
        }

        if let Some(nutritionist) = &self.nutritionist {
            nutritionist.validate()?;
        }
        if let Some(patient) = &self.patient {
            patient.validate()?;
        }

        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }

    fn meal_mut(&mut self, index: usize) -> nutriplan_shared::Result<&mut Meal> {
        match self.meals.get_mut(index) {
            Some(meal) => Ok(meal),
            None => not_found!("meal #{}", index),
        }
    }

    pub fn rename(&mut self, name: impl AsRef<str>) -> nutriplan_shared::Result<()> {
        self.name = plan_name(name.as_ref())?;
        self.touch();

        Ok(())
    }

    /// Appends an empty meal and returns its index.
    pub fn add_meal(&mut self, name: impl AsRef<str>) -> nutriplan_shared::Result<usize> {
        self.meals.push(Meal::new(name)?);
        self.touch();

        Ok(self.meals.len() - 1)
    }

    pub fn remove_meal(&mut self, index: usize) -> nutriplan_shared::Result<Meal> {
        if index >= self.meals.len() {
            not_found!("meal #{}", index);
        }

        let meal = self.meals.remove(index);
        self.touch();

        Ok(meal)
    }

    pub fn rename_meal(
        &mut self,
        index: usize,
        name: impl AsRef<str>,
    ) -> nutriplan_shared::Result<()> {
        self.meal_mut(index)?.rename(name)?;
        self.touch();

        Ok(())
    }

    /// Adds a line with the dataset's first food, one cup.
    pub fn add_food(&mut self, meal: usize, foods: &FoodTable) -> nutriplan_shared::Result<()> {
        let Some(food) = foods.first() else {
            bail!("Food dataset is empty");
        };

        self.add_item(meal, MealItem::new(food.id, 1.0, DEFAULT_UNIT))
    }

    pub fn add_item(&mut self, meal: usize, item: MealItem) -> nutriplan_shared::Result<()> {
        validate_quantity(item.quantity)?;
        self.meal_mut(meal)?.items.push(item);
        self.touch();

        Ok(())
    }

    pub fn remove_item(&mut self, meal: usize, item: usize) -> nutriplan_shared::Result<MealItem> {
        let meal = self.meal_mut(meal)?;
        if item >= meal.items.len() {
            not_found!("food line #{} in meal '{}'", item, meal.name);
        }

        let removed = meal.items.remove(item);
        self.touch();

        Ok(removed)
    }

    pub fn update_item(
        &mut self,
        meal: usize,
        item: usize,
        update: ItemUpdate,
    ) -> nutriplan_shared::Result<()> {
        if let Some(quantity) = update.quantity {
            validate_quantity(quantity)?;
        }

        let line = self.meal_mut(meal)?.item_mut(item)?;
        if let Some(food_id) = update.food_id {
            line.food_id = food_id;
        }
        if let Some(quantity) = update.quantity {
            line.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            line.unit = unit;
        }
        self.touch();

        Ok(())
    }

    pub fn set_goal(
        &mut self,
        key: impl Into<String>,
        goal: NutrientGoal,
    ) -> nutriplan_shared::Result<()> {
        goal.validate()?;

        let key = key.into();
        if key.trim().is_empty() {
            bail!("Nutrient key must not be empty");
        }

        self.goals.insert(key, goal);
        self.touch();

        Ok(())
    }

    pub fn remove_goal(&mut self, key: &str) -> nutriplan_shared::Result<NutrientGoal> {
        let Some(goal) = self.goals.remove(key) else {
            not_found!("goal '{}'", key);
        };
        self.touch();

        Ok(goal)
    }

    pub fn set_nutritionist(
        &mut self,
        nutritionist: Option<Nutritionist>,
    ) -> nutriplan_shared::Result<()> {
        if let Some(nutritionist) = &nutritionist {
            nutritionist.validate()?;
        }

        self.nutritionist = nutritionist;
        self.touch();

        Ok(())
    }

    pub fn set_patient(&mut self, patient: Option<Patient>) -> nutriplan_shared::Result<()> {
        if let Some(patient) = &patient {
            patient.validate()?;
        }

        self.patient = patient;
        self.touch();

        Ok(())
    }
}

fn plan_name(name: &str) -> nutriplan_shared::Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Plan name must not be empty");
    }

    Ok(name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_name_is_trimmed() {
        let meal = Meal::new("  Breakfast ").unwrap();
        assert_eq!(meal.name, "Breakfast");
    }

    #[test]
    fn test_blank_rename_keeps_name() {
        let mut meal = Meal::new("Lunch").unwrap();

        assert!(meal.rename("   ").is_err());
        assert_eq!(meal.name, "Lunch");

        meal.rename("Dinner").unwrap();
        assert_eq!(meal.name, "Dinner");
    }

    #[test]
    fn test_plan_json_shape() {
        let json = r#"{
            "name": "Week 1",
            "meals": [{"name": "Breakfast", "items": [{"foodId": 7, "quantity": 1.5, "unit": "cup"}]}],
            "goals": {"protein": {"value": 120, "type": "min", "tolerance": 10}},
            "createdAt": "2024-03-01T08:00:00Z",
            "updatedAt": "2024-03-02T09:30:00Z",
            "patient": {"name": "Maria", "age": 41, "gender": "F"}
        }"#;

        let plan: MealPlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.meals[0].items[0], MealItem::new(7, 1.5, "cup"));
        assert_eq!(plan.goals["protein"], NutrientGoal::min(120.0, 10.0));
        assert_eq!(plan.patient.as_ref().unwrap().gender, Some(Gender::F));
        assert!(plan.nutritionist.is_none());
        assert!(plan.updated_at > plan.created_at);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_what_edits_reject() {
        let json = r#"{
            "name": "Week 1",
            "meals": [{"name": "Lunch", "items": [{"foodId": 2, "quantity": 1, "unit": "cup"}]}],
            "goals": {"energy": {"value": 2000, "type": "max", "tolerance": 10}},
            "createdAt": "2024-03-01T08:00:00Z",
            "updatedAt": "2024-03-01T08:00:00Z"
        }"#;
        let plan: MealPlan = serde_json::from_str(json).unwrap();
        assert!(plan.validate().is_ok());

        let mut blank = plan.clone();
        blank.name = "  ".to_owned();
        assert!(blank.validate().is_err());

        let mut blank_meal = plan.clone();
        blank_meal.meals[0].name = String::new();
        assert!(blank_meal.validate().is_err());

        let mut negative = plan.clone();
        negative.meals[0].items[0].quantity = -3.0;
        assert!(negative.validate().is_err());

        let mut goal = plan.clone();
        goal.goals.insert("energy".to_owned(), NutrientGoal::max(-100.0, 10.0));
        assert!(matches!(goal.validate(), Err(nutriplan_shared::Error::Validate(_))));

        let mut tolerance = plan;
        tolerance.goals.insert("energy".to_owned(), NutrientGoal::max(2000.0, 500.0));
        assert!(tolerance.validate().is_err());
    }
}
