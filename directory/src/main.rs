//! Person Directory CLI
//!
//! Loads an optional seed file into the in-memory stores and prints the
//! (optionally filtered and sorted) person listing as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use person_directory::{
    Config, CountriesService, InMemoryCountryRepository, InMemoryPersonRepository, PersonService,
    Seed,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr (stdout carries the listing)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,person_directory=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting person directory...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let country_repo = Arc::new(InMemoryCountryRepository::new());
    let person_repo = Arc::new(InMemoryPersonRepository::new());

    // Create application services
    let country_service = CountriesService::new(country_repo.clone());
    let person_service = PersonService::new(person_repo.clone(), country_repo.clone());

    if let Some(path) = &config.seed_file {
        tracing::info!("Loading seed file {}", path.display());
        let seed = Seed::load(path)
            .await
            .with_context(|| format!("Failed to load seed file {}", path.display()))?;
        seed.apply(&country_service, &person_service).await?;
    }

    let filtered = person_service
        .get_filtered_persons(config.search_by.as_deref(), config.search_string.as_deref())
        .await?;
    let listing = person_service.get_sorted_persons(
        filtered,
        config.sort_by.as_deref(),
        config.sort_order,
    );

    tracing::info!(count = listing.len(), "Listing persons");
    println!("{}", serde_json::to_string_pretty(&listing)?);

    Ok(())
}
