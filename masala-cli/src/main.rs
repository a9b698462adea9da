use anyhow::Result;
use clap::Parser;
use masala::report::assemble_report;
use tracing_subscriber::EnvFilter;

mod llm;

/// Generate a recipe and an approximate nutrition chart from a list of
/// ingredients, using a locally hosted model.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Ingredients to cook with, as free text
    #[arg(default_value = "paneer, spinach, and onion")]
    ingredients: String,
    /// Model to ask for the recipe
    #[arg(long, default_value = "llama3")]
    model: String,
    /// LLM API base URL
    #[arg(long, default_value = "http://localhost:11434/v1")]
    llm_api_base: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let model = llm::RecipeModel::new(&args.llm_api_base, &args.model);
    let prompt = llm::RecipeModel::recipe_prompt(&args.ingredients);

    println!("User: I have {}. What can I make?", args.ingredients);
    println!("--- [AI Thinking...] ---");
    let response = model.generate(&prompt).await?;

    let report = match assemble_report(&response) {
        Ok(report) => report,
        Err(err) => {
            // Show the raw reply so a misbehaving model can be debugged.
            eprintln!("{err}");
            eprintln!("Raw model response:");
            eprintln!("{}", err.raw_response());
            std::process::exit(1);
        }
    };

    println!();
    println!("=================================");
    println!("      AI Recipe Generator      ");
    println!("=================================");
    println!();
    println!("{}", report.recipe_text);
    println!();
    println!("--- Approximate Nutritional Chart ---");
    for line in &report.details {
        println!("{line}");
    }
    println!("---------------------------------");
    println!("Total Calories: {}", report.totals.calories);
    println!("Total Protein: {:.1}g", report.totals.protein_g);
    println!("Total Fat: {:.1}g", report.totals.fat_g);
    println!("Total Carbs: {:.1}g", report.totals.carbs_g);

    Ok(())
}
