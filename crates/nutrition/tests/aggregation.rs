use std::collections::BTreeMap;

use nutriplan_nutrition::{
    FoodTable, Meal, MealItem, Nutrient, NutrientGoal, NutrientTotals, evaluate,
    nutrients_for_item, nutrients_for_meal, nutrients_for_plan,
};

fn meal(name: &str, items: Vec<MealItem>) -> Meal {
    let mut meal = Meal::new(name).unwrap();
    meal.items = items;
    meal
}

fn sample_meals() -> Vec<Meal> {
    vec![
        meal(
            "Breakfast",
            vec![
                MealItem::new(10, 3.0, "tablespoon"),
                MealItem::new(6, 1.0, "glass"),
                MealItem::new(7, 120.0, "gram"),
            ],
        ),
        meal(
            "Lunch",
            vec![
                MealItem::new(2, 1.5, "cup"),
                MealItem::new(3, 0.75, "cup"),
                MealItem::new(4, 150.0, "gram"),
                MealItem::new(11, 2.0, "teaspoon"),
                MealItem::new(9999, 1.0, "cup"),
            ],
        ),
        meal("Snack", vec![]),
        meal(
            "Dinner",
            vec![
                MealItem::new(16, 130.0, "slice"),
                MealItem::new(12, 0.5, "cup"),
            ],
        ),
    ]
}

#[test]
fn test_plan_equals_sum_of_meals_and_meals_sum_of_items() {
    let foods = FoodTable::bundled().unwrap();
    let meals = sample_meals();

    let plan = nutrients_for_plan(&foods, &meals);
    let by_meal: NutrientTotals = meals.iter().map(|m| nutrients_for_meal(&foods, m)).sum();
    assert_eq!(plan, by_meal);

    for meal in &meals {
        let totals = nutrients_for_meal(&foods, meal);
        let by_item: NutrientTotals = meal
            .items
            .iter()
            .map(|item| nutrients_for_item(&foods, item))
            .sum();
        assert_eq!(totals, by_item);

        for key in by_item.keys() {
            assert_eq!(totals.get(key), by_item.get(key));
        }
    }

    for nutrient in Nutrient::MAIN {
        assert!(plan.get(nutrient.key()) > 0.0);
    }
}

#[test]
fn test_missing_food_does_not_change_totals() {
    let foods = FoodTable::bundled().unwrap();
    let with_missing = meal(
        "Lunch",
        vec![MealItem::new(2, 1.0, "cup"), MealItem::new(424242, 5.0, "cup")],
    );
    let without = meal("Lunch", vec![MealItem::new(2, 1.0, "cup")]);

    assert_eq!(
        nutrients_for_meal(&foods, &with_missing),
        nutrients_for_meal(&foods, &without)
    );
    assert!(nutrients_for_item(&foods, &MealItem::new(424242, 5.0, "cup")).is_empty());
}

#[test]
fn test_unknown_unit_counts_as_grams() {
    let foods = FoodTable::bundled().unwrap();
    let grams = nutrients_for_item(&foods, &MealItem::new(4, 150.0, "gram"));
    let unknown = nutrients_for_item(&foods, &MealItem::new(4, 150.0, "slice"));

    assert_eq!(grams, unknown);
    assert_eq!(grams.get("protein"), 32.0 * 1.5);
}

#[test]
fn test_empty_meal_reads_zero_for_every_key() {
    let foods = FoodTable::bundled().unwrap();
    let totals = nutrients_for_meal(&foods, &meal("Snack", vec![]));

    for nutrient in [Nutrient::Energy, Nutrient::Protein, Nutrient::Zinc] {
        assert_eq!(totals.get(nutrient.key()), 0.0);
    }
    assert_eq!(totals.get("anything"), 0.0);
}

#[test]
fn test_repeated_calls_are_identical() {
    let foods = FoodTable::bundled().unwrap();
    let meals = sample_meals();
    let goals: BTreeMap<String, NutrientGoal> = [
        ("energy".to_owned(), NutrientGoal::max(2200.0, 10.0)),
        ("protein".to_owned(), NutrientGoal::min(90.0, 15.0)),
        ("sodium".to_owned(), NutrientGoal::max(0.0, 5.0)),
    ]
    .into_iter()
    .collect();

    let first = nutrients_for_plan(&foods, &meals);
    let second = nutrients_for_plan(&foods, &meals);
    for (key, value) in first.iter() {
        assert_eq!(value.to_bits(), second.get(key).to_bits());
    }

    assert_eq!(evaluate(&first, &goals), evaluate(&second, &goals));
}
