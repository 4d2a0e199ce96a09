use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

pub type FoodId = u32;

/// Name of the bundled dataset inside the embedded `data/` folder.
const BUNDLED_DATASET: &str = "foods.json";

/// Grams of food the profile values refer to.
pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;

#[derive(RustEmbed)]
#[folder = "data/"]
struct Dataset;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset '{0}' is missing")]
    Missing(String),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate food id {0}")]
    DuplicateId(FoodId),
}

/// Reference food with its nutrient profile per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub description: String,
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

impl Food {
    pub fn nutrient(&self, key: &str) -> f64 {
        self.nutrients.get(key).copied().unwrap_or_default()
    }
}

/// Read-only access to the food reference data.
pub trait FoodLookup {
    fn food(&self, id: FoodId) -> Option<&Food>;
}

/// Immutable food dataset, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct FoodTable {
    foods: Vec<Food>,
    index: HashMap<FoodId, usize>,
}

impl FoodTable {
    pub fn new(foods: Vec<Food>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(foods.len());
        for (position, food) in foods.iter().enumerate() {
            if index.insert(food.id, position).is_some() {
                return Err(DatasetError::DuplicateId(food.id));
            }
        }

        Ok(Self { foods, index })
    }

    /// Loads the dataset embedded in the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        let file = Dataset::get(BUNDLED_DATASET)
            .ok_or_else(|| DatasetError::Missing(BUNDLED_DATASET.to_owned()))?;

        Self::from_slice(&file.data)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path)?;

        Self::from_slice(&bytes)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Self::from_slice(json.as_bytes())
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let foods: Vec<Food> = serde_json::from_slice(bytes)?;

        Self::new(foods)
    }

    /// First food of the dataset, used for freshly added meal lines.
    pub fn first(&self) -> Option<&Food> {
        self.foods.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Case-insensitive substring search over food descriptions.
    pub fn search<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a Food> {
        let needle = text.trim().to_lowercase();

        self.foods
            .iter()
            .filter(move |food| food.description.to_lowercase().contains(&needle))
    }
}

impl FoodLookup for FoodTable {
    fn food(&self, id: FoodId) -> Option<&Food> {
        self.index.get(&id).map(|position| &self.foods[*position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let foods = FoodTable::bundled().unwrap();
        assert!(!foods.is_empty());

        let first = foods.first().unwrap();
        assert_eq!(foods.food(first.id), Some(first));
        assert!(first.nutrient("energy") > 0.0);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "description": "Rice", "nutrients": {"energy": 128}},
            {"id": 1, "description": "Beans", "nutrients": {"energy": 76}}
        ]"#;

        let err = FoodTable::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId(1)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let json = r#"[
            {"id": 1, "description": "Arroz, tipo 1, cozido"},
            {"id": 2, "description": "Feijão, carioca, cozido"},
            {"id": 3, "description": "Banana, prata, crua"}
        ]"#;
        let foods = FoodTable::from_json(json).unwrap();

        let ids: Vec<FoodId> = foods.search("COZIDO").map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(foods.search("").count(), 3);
        assert_eq!(foods.food(3).unwrap().nutrient("energy"), 0.0);
        assert!(foods.food(42).is_none());
    }
}
