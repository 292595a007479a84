use clap::Parser;
use log::warn;

use recipe_finder::client::services::recipe_service::EdamamService;
use recipe_finder::common::models::{Query, Recipe};
use recipe_finder::config::ClientConfig;
use recipe_finder::utils::logger;

/// Search recipes from the terminal.
#[derive(Debug, Parser)]
#[command(name = "recipe-finder-cli", version)]
struct Args {
    /// Search term; defaults to RECIPE_DEFAULT_QUERY
    query: Option<String>,
    /// Print at most this many results
    #[arg(short, long)]
    limit: Option<usize>,
    /// Print the recipes as JSON instead of one line each
    #[arg(long)]
    json: bool,
}

fn format_line(index: usize, recipe: &Recipe) -> String {
    let source = if recipe.source.is_empty() { "unknown source" } else { recipe.source.as_str() };
    format!("{:>2}. {} — {} — {}", index + 1, recipe.label, source, recipe.url)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = ClientConfig::from_env()?;
    logger::init(&cfg.log_level);

    let raw = args.query.unwrap_or_else(|| cfg.default_query.clone());
    let query = Query::parse(&raw)?;

    let service = EdamamService::new(&cfg)?;
    let (mut recipes, count) = match service.lookup_with_count(&query).await {
        Ok(found) => found,
        Err(e) => {
            warn!("Lookup for '{}' failed: {}", query, e);
            anyhow::bail!(e.user_message());
        }
    };
    if let Some(limit) = args.limit {
        recipes.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    match count {
        Some(total) => println!("[CLIENT] {} recipes match '{}', showing {}", total, query, recipes.len()),
        None => println!("[CLIENT] Showing {} recipes for '{}'", recipes.len(), query),
    }
    for (i, recipe) in recipes.iter().enumerate() {
        println!("{}", format_line(i, recipe));
    }
    Ok(())
}
