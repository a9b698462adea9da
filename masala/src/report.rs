use serde_json::Value;

use crate::errors::ReportError;
use crate::extract::TaggedPayload;
use crate::nutrition::{self, NutritionRecord, NutritionTotal};

/// Everything the presentation layer needs from one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeReport {
    /// Recipe prose after the tagged block, shown verbatim.
    pub recipe_text: String,
    /// One formatted chart line per matched ingredient, in payload order.
    pub details: Vec<String>,
    /// The scaled records behind `details`.
    pub records: Vec<NutritionRecord>,
    pub totals: NutritionTotal,
}

/// Turn a raw model response into a [`RecipeReport`].
///
/// A missing tagged block or a payload that is not a JSON array is fatal.
/// Individual records with a missing name, a non-positive quantity, or no
/// reference-table match are skipped with a warning and do not abort the run;
/// a payload with zero usable records yields an empty report rather than an
/// error.
pub fn assemble_report(response: &str) -> Result<RecipeReport, ReportError> {
    let tagged =
        TaggedPayload::extract(response).map_err(|source| ReportError::MissingPayload {
            raw: response.to_string(),
            source,
        })?;
    let items: Vec<Value> =
        serde_json::from_str(tagged.payload).map_err(|source| ReportError::BadPayload {
            raw: response.to_string(),
            source,
        })?;

    let mut records = Vec::new();
    let mut details = Vec::new();
    let mut totals = NutritionTotal::default();
    for item in &items {
        let Some(name) = item
            .get("ingredient_name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
        else {
            tracing::warn!(%item, "skipping ingredient record without a usable name");
            continue;
        };
        let Some(quantity) = item
            .get("quantity_grams")
            .and_then(Value::as_u64)
            .and_then(|quantity| u32::try_from(quantity).ok())
            .filter(|quantity| *quantity > 0)
        else {
            tracing::warn!(%item, "skipping ingredient record without a positive integer quantity");
            continue;
        };
        let (key, facts) = match nutrition::lookup(name) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(%err, "ingredient skipped");
                continue;
            }
        };

        let record = NutritionRecord::for_quantity(key, facts, quantity);
        totals += &record;
        details.push(format!(
            "  - {}: {} cal, {}g protein",
            record.ingredient, record.calories, record.protein_g
        ));
        records.push(record);
    }

    Ok(RecipeReport {
        recipe_text: tagged.recipe_text.to_string(),
        details,
        records,
        totals,
    })
}
