use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug, info};

use crate::anilist::AniListClient;
use crate::catalog::{FetchOptions, fetch_catalog, load_catalog, save_catalog};
use crate::models::{CombineMode, MediaStatus, Settings, normalize_username};
use crate::pool::build_candidate_pool;
use crate::search::{CatalogIndex, DEFAULT_LIMIT, rank_titles};
use crate::settings_store::{ensure_settings_initialized, load_settings, reset_settings, save_settings};
use crate::tui::run_guess;
use crate::utils::{default_catalog_path, endpoint_override, get_config_dir};

#[derive(Parser)]
#[command(name = "anidle")]
#[command(version)]
#[command(about = "Daily guess-the-anime game built from AniList watch lists", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the candidate pool and print the selected answer id
    Pick(PoolArgs),
    /// Build the candidate pool and print its ids
    Pool(PoolArgs),
    /// Rank catalog titles against a query
    Search {
        query: String,
        /// Catalog file (defaults to catalog.json in the config directory)
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Interactive guess prompt with suggestions
    Guess {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show or edit the stored settings
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Manage the local title catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

/// Per-run overrides for the pool pipeline
#[derive(Args, Debug, Default)]
pub struct PoolArgs {
    /// Use these users instead of the stored ones (repeatable)
    #[arg(long = "user")]
    pub users: Vec<String>,
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Restore the default settings
    Reset,
    /// Add an AniList user after checking the account exists
    AddUser {
        name: String,
        /// Skip the remote existence check
        #[arg(long)]
        skip_check: bool,
    },
    /// Remove an AniList user
    RemoveUser { name: String },
    /// Change filters and combine mode
    Set(SetArgs),
}

#[derive(Args, Debug, Default)]
pub struct SetArgs {
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Replace the status list (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<String>,
    #[arg(long)]
    pub year_min: Option<i64>,
    #[arg(long)]
    pub year_max: Option<i64>,
    #[arg(long)]
    pub popularity_min: Option<i64>,
    #[arg(long)]
    pub popularity_max: Option<i64>,
    /// Remove both year bounds
    #[arg(long, conflicts_with_all = ["year_min", "year_max"])]
    pub clear_year: bool,
    /// Remove both popularity bounds
    #[arg(long, conflicts_with_all = ["popularity_min", "popularity_max"])]
    pub clear_popularity: bool,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Download the full anime catalog from AniList
    Fetch {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 50)]
        per_page: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Union,
    Intersect,
}

impl From<ModeArg> for CombineMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Union => CombineMode::Union,
            ModeArg::Intersect => CombineMode::Intersect,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Pick(args)) => pick(&args)?,
        Some(Commands::Pool(args)) => show_pool(&args)?,
        Some(Commands::Search { query, catalog, limit }) => search(&query, catalog, limit)?,
        Some(Commands::Guess { catalog }) => guess(catalog)?,
        Some(Commands::Settings(command)) => settings(command)?,
        Some(Commands::Catalog(CatalogCommand::Fetch { out, per_page })) => {
            fetch(out, per_page)?
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    // Already initialized when embedded; keep the existing logger
    let _ = clog.try_init();
}

fn client() -> AniListClient {
    match endpoint_override() {
        Some(endpoint) => {
            debug!("Using AniList endpoint {}", endpoint);
            AniListClient::with_endpoint(endpoint)
        }
        None => AniListClient::new(),
    }
}

/// Stored settings with the run's overrides applied.
fn effective_settings(args: &PoolArgs) -> Result<Settings> {
    let config_dir = get_config_dir()?;
    let mut settings = load_settings(&config_dir)?;
    apply_pool_args(&mut settings, args);
    Ok(settings)
}

fn apply_pool_args(settings: &mut Settings, args: &PoolArgs) {
    if !args.users.is_empty() {
        settings.anilist_usernames = args.users.clone();
    }
    if let Some(mode) = args.mode {
        settings.combine = mode.into();
    }
}

fn pick(args: &PoolArgs) -> Result<()> {
    let settings = effective_settings(args)?;
    let pool = build_candidate_pool(&client(), &settings)?;
    let id = pool.pick()?;
    println!("{}", id);
    Ok(())
}

fn show_pool(args: &PoolArgs) -> Result<()> {
    let settings = effective_settings(args)?;
    let pool = build_candidate_pool(&client(), &settings)?;

    let mut ids: Vec<_> = pool.ids.iter().copied().collect();
    ids.sort_unstable();

    println!("Candidate pool ({}): {} titles", pool.mode, ids.len());
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}

fn open_index(catalog: Option<PathBuf>) -> Result<CatalogIndex> {
    let path = match catalog {
        Some(path) => path,
        None => default_catalog_path()?,
    };
    if !path.exists() {
        bail!(
            "Catalog not found at {} (run `anidle catalog fetch` first)",
            path.display()
        );
    }
    let records = load_catalog(&path)?;
    Ok(CatalogIndex::build(records))
}

fn search(query: &str, catalog: Option<PathBuf>, limit: usize) -> Result<()> {
    let index = open_index(catalog)?;
    let ranked = rank_titles(query, &index, limit);

    if ranked.is_empty() {
        println!("No matches for \"{}\"", query);
        return Ok(());
    }
    for item in ranked {
        println!("{}\t{}\t{}", item.id, item.kind.label(), item.text);
    }
    Ok(())
}

fn guess(catalog: Option<PathBuf>) -> Result<()> {
    let index = Arc::new(open_index(catalog)?);
    match run_guess(index)? {
        Some(selection) => println!("{}\t{}", selection.id, selection.text),
        None => println!("No guess made"),
    }
    Ok(())
}

fn settings(command: SettingsCommand) -> Result<()> {
    let config_dir = get_config_dir()?;

    match command {
        SettingsCommand::Show => {
            let settings = ensure_settings_initialized(&config_dir)?;
            println!("{}", settings.summary());
            if let Err(e) = settings.validate() {
                println!();
                println!("Warning: {}", e);
            }
        }
        SettingsCommand::Reset => {
            reset_settings(&config_dir)?;
            println!("Settings reset to defaults");
        }
        SettingsCommand::AddUser { name, skip_check } => {
            let mut settings = load_settings(&config_dir)?;
            let name = add_user(&mut settings, &name)?;
            if !skip_check {
                let exists = client()
                    .user_exists(&name)
                    .with_context(|| format!("Failed to look up AniList user {}", name))?;
                if !exists {
                    bail!("AniList user {} does not exist", name);
                }
            }
            save_settings(&config_dir, &settings)?;
            println!("Added {}", name);
        }
        SettingsCommand::RemoveUser { name } => {
            let mut settings = load_settings(&config_dir)?;
            let name = remove_user(&mut settings, &name)?;
            save_settings(&config_dir, &settings)?;
            println!("Removed {}", name);
        }
        SettingsCommand::Set(args) => {
            let mut settings = load_settings(&config_dir)?;
            apply_set_args(&mut settings, &args)?;
            save_settings(&config_dir, &settings)?;
            println!("{}", settings.summary());
        }
    }

    Ok(())
}

/// Append a user unless already present (case-insensitive). Returns the cleaned name.
fn add_user(settings: &mut Settings, raw: &str) -> Result<String> {
    let name = normalize_username(raw);
    if name.is_empty() {
        bail!("Username is empty");
    }
    if settings.normalized_usernames().iter().any(|u| u.eq_ignore_ascii_case(&name)) {
        bail!("{} is already in the user list", name);
    }
    settings.anilist_usernames.push(name.clone());
    Ok(name)
}

fn remove_user(settings: &mut Settings, raw: &str) -> Result<String> {
    let name = normalize_username(raw);
    let before = settings.anilist_usernames.len();
    settings.anilist_usernames.retain(|u| !normalize_username(u).eq_ignore_ascii_case(&name));
    if settings.anilist_usernames.len() == before {
        bail!("{} is not in the user list", name);
    }
    Ok(name)
}

fn apply_set_args(settings: &mut Settings, args: &SetArgs) -> Result<()> {
    if let Some(mode) = args.mode {
        settings.combine = mode.into();
    }

    if !args.statuses.is_empty() {
        let mut statuses = Vec::new();
        for token in &args.statuses {
            let status = MediaStatus::from_token(token)
                .with_context(|| format!("Unknown status {}", token))?;
            let canonical = status.as_str().to_string();
            if !statuses.contains(&canonical) {
                statuses.push(canonical);
            }
        }
        settings.statuses = statuses;
    }

    if args.clear_year {
        settings.year_min = None;
        settings.year_max = None;
    }
    if args.year_min.is_some() {
        settings.year_min = args.year_min;
    }
    if args.year_max.is_some() {
        settings.year_max = args.year_max;
    }

    if args.clear_popularity {
        settings.popularity_min = None;
        settings.popularity_max = None;
    }
    if args.popularity_min.is_some() {
        settings.popularity_min = args.popularity_min;
    }
    if args.popularity_max.is_some() {
        settings.popularity_max = args.popularity_max;
    }

    settings.year_range().check("year")?;
    settings.popularity_range().check("popularity")?;
    Ok(())
}

fn fetch(out: Option<PathBuf>, per_page: u32) -> Result<()> {
    let path = match out {
        Some(path) => path,
        None => default_catalog_path()?,
    };
    let options = FetchOptions { per_page, ..FetchOptions::default() };

    let records = fetch_catalog(&client(), &options).context("Catalog download failed")?;
    save_catalog(&path, &records)?;
    info!("Saved {} titles to {}", records.len(), path.display());
    Ok(())
}
