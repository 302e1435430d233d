//! Command handlers and their clap argument wrappers.
//!
//! Each subcommand has an argument struct carrying the clap derives. It
//! converts into the matching core parameter type with `From`, so core types
//! stay free of CLI attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Composer / Store
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info};
use roadmap_core::{
    params::{CatalogQuery, ComposeRoadmap, Id, ListRoadmaps, Move},
    CatalogService, Courses, CreateResult, DeleteResult, LoadOutcome, RoadmapComposer,
    RoadmapForm, RoadmapStore, RoadmapSummaries, SubmissionSink,
};

use crate::renderer::TerminalRenderer;

/// Browse the course catalog
///
/// Courses in the "General" category are listed under every category
/// filter. The search term matches titles, instructors and skills,
/// ignoring case.
#[derive(Args)]
pub struct CatalogArgs {
    #[arg(short, long, help = "Only show courses in this category")]
    pub category: Option<String>,
    #[arg(short, long, help = "Only show courses matching this search term")]
    pub search: Option<String>,
}

impl From<CatalogArgs> for CatalogQuery {
    fn from(val: CatalogArgs) -> Self {
        CatalogQuery {
            category: val.category,
            search: val.search,
        }
    }
}

/// Compose a roadmap and submit it
///
/// Courses are selected in the order the `--course` flags are given. Moves
/// are then applied to the selected list, each one taking the course at
/// position FROM (0-based) and inserting it at position TO. The duration is
/// derived from the selected courses, and so is the instructor when they all
/// share one.
#[derive(Args)]
pub struct ComposeArgs {
    /// Title of the roadmap
    pub title: String,
    #[arg(short, long, help = "What the roadmap is about")]
    pub description: Option<String>,
    #[arg(short, long, help = "Category of the roadmap, e.g. Backend")]
    pub category: Option<String>,
    #[arg(short, long, help = "Target level of the roadmap")]
    pub level: Option<LevelArg>,
    #[arg(
        short,
        long,
        help = "Instructor to use when the selected courses have more than one"
    )]
    pub instructor: Option<String>,
    #[arg(
        long = "course",
        value_name = "ID",
        help = "Course id to include; repeat to add more courses in order"
    )]
    pub courses: Vec<String>,
    #[arg(
        long = "move",
        value_name = "FROM:TO",
        help = "Move a selected course from one position to another"
    )]
    pub moves: Vec<Move>,
    #[arg(long, help = "Print the roadmap payload as JSON instead of saving it")]
    pub dry_run: bool,
}

impl From<ComposeArgs> for ComposeRoadmap {
    fn from(val: ComposeArgs) -> Self {
        ComposeRoadmap {
            title: val.title,
            description: val.description.unwrap_or_default(),
            category: val.category.unwrap_or_default(),
            level: val.level.map(|level| level.to_string()),
            instructor: val.instructor,
            course_ids: val.courses,
            moves: val.moves,
        }
    }
}

/// List submitted roadmaps
#[derive(Args)]
pub struct ListRoadmapsArgs {
    #[arg(short, long, help = "Only list roadmaps in this category")]
    pub category: Option<String>,
    #[arg(short, long, help = "Only list roadmaps whose title contains this text")]
    pub title: Option<String>,
}

impl From<ListRoadmapsArgs> for ListRoadmaps {
    fn from(val: ListRoadmapsArgs) -> Self {
        ListRoadmaps {
            category: val.category,
            title: val.title,
        }
    }
}

/// Show a submitted roadmap with its ordered courses
#[derive(Args)]
pub struct ShowRoadmapArgs {
    #[arg(help = "Unique identifier of the roadmap to show")]
    pub id: u64,
}

impl From<ShowRoadmapArgs> for Id {
    fn from(val: ShowRoadmapArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a submitted roadmap permanently
#[derive(Args)]
pub struct DeleteRoadmapArgs {
    #[arg(help = "Unique identifier of the roadmap to delete")]
    pub id: u64,
}

impl From<DeleteRoadmapArgs> for Id {
    fn from(val: DeleteRoadmapArgs) -> Self {
        Id { id: val.id }
    }
}

/// Command-line representation of roadmap levels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for LevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelArg::Beginner => write!(f, "beginner"),
            LevelArg::Intermediate => write!(f, "intermediate"),
            LevelArg::Advanced => write!(f, "advanced"),
        }
    }
}

/// Runs subcommands against a roadmap store and a catalog source.
pub struct Cli {
    store: RoadmapStore,
    catalog: CatalogService,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: RoadmapStore, catalog: CatalogService, renderer: TerminalRenderer) -> Self {
        Self {
            store,
            catalog,
            renderer,
        }
    }

    /// Loads the catalog into a composer, failing when the fetch fails.
    async fn load_composer(&self, composer: &mut RoadmapComposer) -> Result<()> {
        match composer.load_catalog(&self.catalog).await {
            LoadOutcome::Applied { courses } => {
                debug!("Composer ready with {courses} catalog course(s)");
                Ok(())
            }
            LoadOutcome::Failed { message } => bail!("Failed to load catalog: {message}"),
            LoadOutcome::Stale => bail!("Catalog load was superseded"),
        }
    }

    pub async fn show_catalog(&self, params: &CatalogQuery) -> Result<()> {
        let mut composer = RoadmapComposer::default();
        self.load_composer(&mut composer).await?;
        composer.set_filter(params.into());

        let courses: Courses = composer.visible_courses().into_iter().collect();
        self.renderer
            .render(&format!("# Catalog ({} courses)\n\n{courses}", courses.len()))
    }

    /// Builds a roadmap from the parameters and submits it to the store, or
    /// prints the payload when `dry_run` is set.
    ///
    /// Every validation failure is reported at once and makes the command
    /// fail without saving anything.
    pub async fn compose(&self, params: &ComposeRoadmap, dry_run: bool) -> Result<()> {
        let level = params.parsed_level()?;
        let form = RoadmapForm {
            title: params.title.clone(),
            description: params.description.clone(),
            category: params.category.clone(),
            level,
            duration: String::new(),
            instructor: params.instructor.clone().unwrap_or_default(),
        };

        let mut composer = RoadmapComposer::default().with_form(form);
        self.load_composer(&mut composer).await?;

        for id in &params.course_ids {
            if !composer.is_selected(id) {
                composer.toggle_course(id)?;
            }
        }
        for Move { from, to } in &params.moves {
            composer
                .reorder(*from, *to)
                .with_context(|| format!("Failed to move course {from} to {to}"))?;
        }

        let payload = composer.submit()?;

        if dry_run {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        let roadmap = self.store.submit(&payload).await?;
        info!("Submitted roadmap {}", roadmap.id);
        self.renderer.render(&CreateResult::new(roadmap).to_string())
    }

    pub async fn list_roadmaps(&self, params: &ListRoadmaps) -> Result<()> {
        let summaries = RoadmapSummaries(self.store.list_roadmaps(params).await?);
        self.renderer.render(&summaries.to_string())
    }

    pub async fn show_roadmap(&self, params: &Id) -> Result<()> {
        match self.store.get_roadmap(params).await? {
            Some(roadmap) => self.renderer.render(&roadmap.to_string()),
            None => bail!("Roadmap with ID {} not found", params.id),
        }
    }

    pub async fn delete_roadmap(&self, params: &Id) -> Result<()> {
        match self.store.delete_roadmap(params).await? {
            Some(roadmap) => self.renderer.render(&DeleteResult::new(roadmap).to_string()),
            None => bail!("Roadmap with ID {} not found", params.id),
        }
    }
}
