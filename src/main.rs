use std::env;

use mealdb_fetch::{FetcherConfig, RecipeFetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FetcherConfig::load()?;

    // Optional batch size argument; configured default otherwise
    let args: Vec<String> = env::args().collect();
    let batch_size = match args.get(1) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("Invalid count: {raw}"))?,
        None => config.batch_size,
    };

    let fetcher = RecipeFetcher::from_config(&config)?;
    let result = fetcher.fetch_recipes(batch_size).await;

    for recipe in &result.recipes {
        println!("{} [{}] ({})", recipe.name, recipe.category, recipe.id);
    }
    println!("Fetched {} recipes.", result.recipes.len());

    if !result.reachable {
        eprintln!("Some requests failed: this tool requires internet access.");
    }

    Ok(())
}
