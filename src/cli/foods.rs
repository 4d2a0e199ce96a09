use std::io::Write;

use nutriplan_nutrition::{MEASUREMENT_UNITS, Nutrient};

use crate::config::Config;

/// Lists the dataset, optionally filtered by description.
pub fn foods(config: &Config, search: Option<&str>, out: &mut impl Write) -> anyhow::Result<()> {
    let foods = super::load_foods(config)?;

    let mut count = 0;
    for food in foods.search(search.unwrap_or_default()) {
        let main = Nutrient::MAIN
            .iter()
            .map(|n| format!("{} {}{}", n.label(), food.nutrient(n.key()), n.unit()))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{:>4}  {}  ({})", food.id, food.description, main)?;
        count += 1;
    }

    tracing::debug!(count, "foods listed");

    Ok(())
}

pub fn units(out: &mut impl Write) -> anyhow::Result<()> {
    for m in MEASUREMENT_UNITS.iter() {
        writeln!(out, "{:<12} {:<12} {} g", m.unit, m.label, m.grams_per_unit)?;
    }

    Ok(())
}
