use std::env;
use std::error::Error;

use pushkind_catalog::models::config::ServerConfig;
use pushkind_catalog::repository::MemoryRepository;
use pushkind_catalog::services::UseCase;
use pushkind_catalog::services::categories::{
    CreateCategoryCommand, CreateCategoryUseCase, ListCategoriesUseCase,
};

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config_path = env::var("CATALOG_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let server_config = ServerConfig::load(&config_path)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(server_config.log_level.as_str()),
    )
    .init();

    let repo = MemoryRepository::new();

    let create = CreateCategoryUseCase::new(&repo);
    for seed in &server_config.seed {
        let command = CreateCategoryCommand::with(
            Some(seed.name.as_str()),
            seed.description.as_deref(),
            seed.is_active,
        );
        if let Some(notification) = create.execute(command)?.left() {
            log::warn!("Skipping seed category {}: {notification}", seed.name);
        }
    }

    let list = ListCategoriesUseCase::new(&repo);
    let page = list.execute(server_config.listing.query())?;
    log::info!("Listed {} of {} categories", page.items.len(), page.total);

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
