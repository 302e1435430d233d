//! Roadmap CLI Application
//!
//! Command-line interface for composing learning roadmaps from a course
//! catalog and managing the roadmaps that have been submitted.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use roadmap_core::{params::ListRoadmaps, CatalogService, JsonFileCatalog, RoadmapStoreBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let store = RoadmapStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize roadmap store")?;

    let catalog = match catalog_file {
        Some(path) => CatalogService::new(JsonFileCatalog::new(path)),
        None => CatalogService::default(),
    };

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, catalog, renderer);

    info!("Roadmap started");

    match command {
        Some(Catalog(args)) => cli.show_catalog(&args.into()).await,
        Some(Compose(args)) => {
            let dry_run = args.dry_run;
            cli.compose(&args.into(), dry_run).await
        }
        Some(List(args)) => cli.list_roadmaps(&args.into()).await,
        Some(Show(args)) => cli.show_roadmap(&args.into()).await,
        Some(Delete(args)) => cli.delete_roadmap(&args.into()).await,
        None => cli.list_roadmaps(&ListRoadmaps::default()).await,
    }
}
