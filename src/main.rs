use std::sync::Arc;

use iced::Application;
use recipe_finder::client::gui::app::{AppFlags, RecipeApp};
use recipe_finder::client::services::recipe_service::{EdamamService, RecipeProvider};
use recipe_finder::config::ClientConfig;
use recipe_finder::utils::logger;

fn main() -> anyhow::Result<()> {
    let cfg = ClientConfig::from_env()?;
    logger::init(&cfg.log_level);

    let provider: Arc<dyn RecipeProvider> = Arc::new(EdamamService::new(&cfg)?);
    let flags = AppFlags {
        provider,
        preload_query: cfg.preload.then(|| cfg.default_query.clone()),
    };

    RecipeApp::run(iced::Settings::with_flags(flags))
        .map_err(|e| anyhow::anyhow!("GUI terminated with an error: {}", e))
}
