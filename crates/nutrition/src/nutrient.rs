use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Nutrients with a known display label and measurement unit.
///
/// Nutrient profiles and goals are keyed by plain strings so that datasets
/// may carry extra keys; this enum only covers the keys the resolver knows.
#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum Nutrient {
    Energy,
    Protein,
    Lipids,
    Carbohydrates,
    Fiber,
    Cholesterol,
    Calcium,
    Magnesium,
    Phosphorus,
    Iron,
    Sodium,
    Potassium,
    Zinc,
    VitaminC,
}

impl Nutrient {
    /// Main nutrients shown on every meal header.
    pub const MAIN: [Nutrient; 4] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Lipids,
    ];

    /// Secondary nutrients shown in the expanded meal details.
    pub const DETAILED: [Nutrient; 6] = [
        Nutrient::Fiber,
        Nutrient::Sodium,
        Nutrient::Potassium,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Zinc,
    ];

    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Protein => "Protein",
            Nutrient::Lipids => "Lipids",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Fiber => "Dietary Fiber",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Calcium => "Calcium",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Iron => "Iron",
            Nutrient::Sodium => "Sodium",
            Nutrient::Potassium => "Potassium",
            Nutrient::Zinc => "Zinc",
            Nutrient::VitaminC => "Vitamin C",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Protein | Nutrient::Lipids | Nutrient::Carbohydrates | Nutrient::Fiber => "g",
            _ => "mg",
        }
    }
}

/// Display label of a nutrient key, or the raw key when it is unknown.
pub fn label_of(key: &str) -> String {
    match Nutrient::from_str(key) {
        Ok(nutrient) => nutrient.label().to_owned(),
        Err(_) => key.to_owned(),
    }
}

/// Measurement unit of a nutrient key, empty when the key is unknown.
pub fn unit_of(key: &str) -> &'static str {
    Nutrient::from_str(key)
        .map(|nutrient| nutrient.unit())
        .unwrap_or_default()
}
