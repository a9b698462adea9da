//! Core logic for the recipe-and-nutrition demo: locate the tagged
//! ingredient block inside a model's free-text reply, decode it, and price
//! every ingredient against a small per-100g reference table.
//!
//! Nothing in this crate performs I/O; the caller supplies the raw response
//! text and the presentation layer renders the resulting [`RecipeReport`].

pub mod errors;
pub mod extract;
pub mod nutrition;
pub mod report;

pub use errors::ReportError;
pub use extract::{ExtractError, TaggedPayload, END_TAG, START_TAG};
pub use nutrition::{LookupError, MacroFacts, NutritionRecord, NutritionTotal};
pub use report::{assemble_report, RecipeReport};
