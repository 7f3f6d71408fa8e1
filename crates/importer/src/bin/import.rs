use clap::{Parser, Subcommand, ValueEnum};
use importer::{
    FallbackSource, RosterConfig, SeasonAggregator, SeasonValidator, SourceKind,
    sources::fallback::snapshot_2025,
};
use std::path::PathBuf;
use std::time::Duration;
use storage::{SnapshotStore, models::TeamPalette};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "season-import")]
#[command(about = "F1 season data collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the current season and write it as a snapshot
    Collect {
        #[arg(long, value_enum, env = "SEASON_SOURCE", default_value = "scrape")]
        source: SourceArg,

        #[arg(long, env = "SNAPSHOT_PATH", default_value = "./data/season.json")]
        output: PathBuf,

        #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
        timeout_secs: u64,

        #[arg(long, env = "TEAM_PALETTE_PATH")]
        palette: Option<PathBuf>,
    },
    /// Check a snapshot file against the season invariants
    Validate { file: PathBuf },
    /// List the rounds stored in a snapshot file
    Races { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Scrape,
    Api,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Scrape => SourceKind::Scrape,
            SourceArg::Api => SourceKind::Api,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "season_import={},importer={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Collect {
            source,
            output,
            timeout_secs,
            palette,
        } => {
            handle_collect(source.into(), output, timeout_secs, palette).await?;
        }
        Commands::Validate { file } => {
            handle_validate(file).await?;
        }
        Commands::Races { file } => {
            handle_races(file).await?;
        }
    }

    Ok(())
}

async fn handle_collect(
    kind: SourceKind,
    output: PathBuf,
    timeout_secs: u64,
    palette_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let palette = match palette_path {
        Some(path) => {
            tracing::info!("Loading team palette from: {}", path.display());
            let json = tokio::fs::read_to_string(&path).await?;
            TeamPalette::from_json(&json)?
        }
        None => TeamPalette::season_2025(),
    };

    let store = SnapshotStore::new(&output);
    let fallback = if store.exists().await {
        tracing::info!("Using previous snapshot as fallback: {}", output.display());
        FallbackSource::from_dataset(store.load().await?)
    } else {
        tracing::info!("No previous snapshot, using built-in 2025 data as fallback");
        FallbackSource::from_dataset(snapshot_2025())
    };

    let timeout = Duration::from_secs(timeout_secs);
    let config = RosterConfig {
        fetch_timeout: timeout,
        ..RosterConfig::default()
    };
    let aggregator = SeasonAggregator::with_config(kind.build(palette, timeout)?, fallback, config);

    let dataset = aggregator.collect().await;
    tracing::info!(
        "Collected {} drivers, {} constructors, {} races (origin: {})",
        dataset.drivers.len(),
        dataset.constructors.len(),
        dataset.season_results.len(),
        dataset.origin
    );

    let report = SeasonValidator::validate(&dataset)?;
    report.log_warnings();

    store.save(&dataset).await?;
    tracing::info!("✓ Snapshot written to: {}", output.display());

    Ok(())
}

async fn handle_validate(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading snapshot from: {}", file.display());
    let dataset = SnapshotStore::new(&file).load().await?;

    tracing::info!(
        "Snapshot generated at {} from {}",
        dataset.generated_at,
        dataset.origin
    );

    let report = SeasonValidator::validate(&dataset)?;
    tracing::info!("✓ Validation successful!");

    if !report.warnings.is_empty() {
        tracing::warn!("Validation warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            tracing::warn!("  {}", warning);
        }
    }

    Ok(())
}

async fn handle_races(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = SnapshotStore::new(&file).load().await?;

    tracing::info!("{} rounds in {}:", dataset.season_results.len(), file.display());
    for race in &dataset.season_results {
        let winner = race
            .results
            .iter()
            .find(|entry| entry.position == 1)
            .map(|entry| entry.driver_id.as_str())
            .unwrap_or("-");
        tracing::info!(
            "  R{:>2} {:<28} {:<10} {:>2} results, winner {}",
            race.round,
            race.race,
            race.date,
            race.results.len(),
            winner
        );
    }

    Ok(())
}
