use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogArgs, ComposeArgs, DeleteRoadmapArgs, ListRoadmapsArgs, ShowRoadmapArgs};

/// Compose learning roadmaps from a course catalog
///
/// Browse the catalog, pick courses in the order they should be taken and
/// submit the result as a roadmap. Submitted roadmaps are stored in a local
/// SQLite database and can be listed, shown and deleted.
#[derive(Parser)]
#[command(version, about, name = "roadmap")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roadmap/roadmap.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON course catalog. Defaults to the built-in sample catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Roadmap CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the course catalog
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Compose a roadmap from catalog courses and submit it
    Compose(ComposeArgs),
    /// List submitted roadmaps
    #[command(aliases = ["l", "ls"])]
    List(ListRoadmapsArgs),
    /// Show a submitted roadmap
    #[command(alias = "s")]
    Show(ShowRoadmapArgs),
    /// Delete a submitted roadmap
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRoadmapArgs),
}
