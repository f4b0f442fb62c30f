//! linimg-golden - record or verify regression scene hashes

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use linimg_tests::scenarios::{self, DEFAULT_MAP_SIZE};
use linimg_tests::{ComparisonMode, GoldenConfig, GoldenOutcome, GoldenStore, update_or_compare};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linimg-golden")]
#[command(author, version, about = "Record or verify linimg regression hashes")]
#[command(long_about = "
Builds every regression scene and checks it against hashes.json in a
reference directory.

Examples:
  linimg-golden update tests/golden     # Rewrite stored hashes
  linimg-golden compare tests/golden    # Fail on any mismatch
  linimg-golden skip                    # Only build the scenes
")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Edge length of the generated normal and depth maps
    #[arg(long, global = true, default_value_t = DEFAULT_MAP_SIZE)]
    size: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Compare scenes against stored hashes
    Compare {
        /// Reference directory
        dir: PathBuf,
    },
    /// Store the current scene hashes
    Update {
        /// Reference directory
        dir: PathBuf,
    },
    /// Build scenes without comparing
    Skip,
}

impl Command {
    fn config(self) -> GoldenConfig {
        match self {
            Command::Compare { dir } => GoldenConfig::compare(dir),
            Command::Update { dir } => GoldenConfig::update(dir),
            Command::Skip => GoldenConfig::skip(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.command.config();
    if config.mode == ComparisonMode::Skip {
        warn!("no reference directory given, skipping comparison");
    }

    let path = config.hashes_path();
    let mut store = match config.mode {
        ComparisonMode::Compare => GoldenStore::load(&path)?,
        _ => GoldenStore::new(),
    };

    let mut failures = 0usize;
    for scene in scenarios::all(cli.size)? {
        match update_or_compare(&config, &mut store, scene.name, &scene.image) {
            Ok(GoldenOutcome::Matched) => info!(name = scene.name, "ok"),
            Ok(GoldenOutcome::Updated) => info!(name = scene.name, "updated"),
            Ok(GoldenOutcome::Skipped) => info!(name = scene.name, "built"),
            Err(e) => {
                error!("{e}");
                failures += 1;
            }
        }
    }

    if config.mode == ComparisonMode::Update {
        store.save(&path)?;
    }
    if failures > 0 {
        bail!("{failures} scene(s) failed golden comparison");
    }
    Ok(())
}
