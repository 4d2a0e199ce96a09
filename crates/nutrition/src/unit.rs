/// A household measure and how many grams one unit of it weighs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementConversion {
    pub unit: &'static str,
    pub label: &'static str,
    pub grams_per_unit: f64,
}

/// Unit symbol used when a food line is added without an explicit portion.
pub const DEFAULT_UNIT: &str = "cup";

pub const MEASUREMENT_UNITS: [MeasurementConversion; 5] = [
    MeasurementConversion {
        unit: "cup",
        label: "Cup",
        grams_per_unit: 240.0,
    },
    MeasurementConversion {
        unit: "teaspoon",
        label: "Teaspoon",
        grams_per_unit: 5.0,
    },
    MeasurementConversion {
        unit: "tablespoon",
        label: "Tablespoon",
        grams_per_unit: 15.0,
    },
    MeasurementConversion {
        unit: "glass",
        label: "Glass",
        grams_per_unit: 250.0,
    },
    MeasurementConversion {
        unit: "gram",
        label: "Grams",
        grams_per_unit: 1.0,
    },
];

pub fn measurement(unit: &str) -> Option<&'static MeasurementConversion> {
    MEASUREMENT_UNITS.iter().find(|m| m.unit == unit)
}

/// Converts a portion to grams.
///
/// Unknown unit symbols are taken to be grams already, so the quantity is
/// returned unchanged.
pub fn grams_of(quantity: f64, unit: &str) -> f64 {
    match measurement(unit) {
        Some(conversion) => quantity * conversion.grams_per_unit,
        None => quantity,
    }
}
