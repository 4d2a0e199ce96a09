use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::AddAssign;

use serde::Serialize;

use crate::food::{FoodLookup, REFERENCE_PORTION_GRAMS};
use crate::plan::{Meal, MealItem};
use crate::unit::grams_of;

/// Accumulated nutrient values keyed by nutrient key.
///
/// Keys that were never accumulated read as zero, so an empty value is the
/// all-zero total of an empty meal or plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutrientTotals(BTreeMap<String, f64>);

impl NutrientTotals {
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, key: impl Into<String>, value: f64) {
        *self.0.entry(key.into()).or_insert(0.0) += value;
    }
}

impl AddAssign<&NutrientTotals> for NutrientTotals {
    fn add_assign(&mut self, other: &NutrientTotals) {
        for (key, value) in &other.0 {
            self.add(key.as_str(), *value);
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, other: NutrientTotals) {
        *self += &other;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), |mut acc, totals| {
            acc += totals;
            acc
        })
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for NutrientTotals {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut totals = NutrientTotals::default();
        for (key, value) in iter {
            totals.add(key, value);
        }
        totals
    }
}

/// Nutrients contributed by a single meal line.
///
/// Every profile value is scaled by `grams / 100`. A line pointing at a food
/// missing from the lookup contributes nothing.
pub fn nutrients_for_item<L: FoodLookup + ?Sized>(foods: &L, item: &MealItem) -> NutrientTotals {
    let Some(food) = foods.food(item.food_id) else {
        return NutrientTotals::default();
    };

    let ratio = grams_of(item.quantity, &item.unit) / REFERENCE_PORTION_GRAMS;

    food.nutrients
        .iter()
        .map(|(key, value)| (key.as_str(), value * ratio))
        .collect()
}

pub fn nutrients_for_meal<L: FoodLookup + ?Sized>(foods: &L, meal: &Meal) -> NutrientTotals {
    meal.items
        .iter()
        .map(|item| nutrients_for_item(foods, item))
        .sum()
}

pub fn nutrients_for_plan<L: FoodLookup + ?Sized>(foods: &L, meals: &[Meal]) -> NutrientTotals {
    meals
        .iter()
        .map(|meal| nutrients_for_meal(foods, meal))
        .sum()
}
