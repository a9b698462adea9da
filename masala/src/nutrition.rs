use serde::{Deserialize, Serialize};

/// Macro-nutrients for one ingredient. The reference table stores these per
/// 100 grams; [`NutritionRecord::for_quantity`] scales them to a serving.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MacroFacts {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Per-100g reference data. Approximate values, enough for a demo chart.
const REFERENCE_TABLE: &[(&str, MacroFacts)] = &[
    ("paneer", MacroFacts { calories: 265.0, protein_g: 18.0, fat_g: 20.0, carbs_g: 3.0 }),
    ("spinach", MacroFacts { calories: 23.0, protein_g: 2.9, fat_g: 0.4, carbs_g: 3.6 }),
    ("onion", MacroFacts { calories: 40.0, protein_g: 1.1, fat_g: 0.1, carbs_g: 9.3 }),
    ("tomato", MacroFacts { calories: 18.0, protein_g: 0.9, fat_g: 0.2, carbs_g: 3.9 }),
    ("butter", MacroFacts { calories: 717.0, protein_g: 0.9, fat_g: 81.0, carbs_g: 0.1 }),
    ("garlic", MacroFacts { calories: 149.0, protein_g: 6.4, fat_g: 0.5, carbs_g: 33.0 }),
    ("ginger", MacroFacts { calories: 80.0, protein_g: 1.8, fat_g: 0.8, carbs_g: 18.0 }),
    ("oil", MacroFacts { calories: 884.0, protein_g: 0.0, fat_g: 100.0, carbs_g: 0.0 }),
];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("no reference entry for ingredient: {0}")]
    NotFound(String),
}

/// Normalize a model-supplied ingredient name to a reference-table key.
/// The substring aliases cover the colloquial names local models tend to
/// emit for these entries.
pub fn canonicalize(name: &str) -> String {
    let key = name.trim().to_lowercase();
    if key.contains("ghee") || key.contains("vegetable oil") {
        return "oil".to_string();
    }
    if key.contains("tomatoes") {
        return "tomato".to_string();
    }
    key
}

/// Look up per-100g facts for an ingredient name, after canonicalization.
/// Returns the canonical key alongside the facts so callers report the table
/// entry they matched rather than whatever the model wrote.
pub fn lookup(name: &str) -> Result<(&'static str, &'static MacroFacts), LookupError> {
    let key = canonicalize(name);
    REFERENCE_TABLE
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(entry, facts)| (*entry, facts))
        .ok_or_else(|| LookupError::NotFound(name.to_string()))
}

/// Nutrition for one ingredient at a concrete quantity. Immutable once
/// computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionRecord {
    pub ingredient: String,
    pub quantity_grams: u32,
    pub calories: i64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl NutritionRecord {
    /// Scale per-100g facts to `quantity_grams`. Calories round to the
    /// nearest integer, the other macros to two decimal places.
    pub fn for_quantity(ingredient: &str, facts: &MacroFacts, quantity_grams: u32) -> Self {
        let factor = quantity_grams as f64 / 100.0;
        Self {
            ingredient: ingredient.to_string(),
            quantity_grams,
            calories: (facts.calories * factor).round() as i64,
            protein_g: round2(facts.protein_g * factor),
            fat_g: round2(facts.fat_g * factor),
            carbs_g: round2(facts.carbs_g * factor),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running sum over [`NutritionRecord`]s for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotal {
    pub calories: i64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl std::ops::AddAssign<&NutritionRecord> for NutritionTotal {
    fn add_assign(&mut self, record: &NutritionRecord) {
        self.calories += record.calories;
        self.protein_g += record.protein_g;
        self.fat_g += record.fat_g;
        self.carbs_g += record.carbs_g;
    }
}

impl<'a> std::iter::Sum<&'a NutritionRecord> for NutritionTotal {
    fn sum<I: Iterator<Item = &'a NutritionRecord>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut total, record| {
            total += record;
            total
        })
    }
}
