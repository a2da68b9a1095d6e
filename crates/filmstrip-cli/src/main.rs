use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use filmstrip_core::{items, FilmstripConfig};

mod commands;

#[derive(Parser)]
#[command(name = "filmstrip")]
#[command(author, version, about = "A looping, focus-weighted filmstrip carousel")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal carousel (default)
    Run(RunArgs),
    /// Print the layout and focus weights of a strip without a terminal
    Inspect(InspectArgs),
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Where item labels come from
#[derive(Args, Debug, Default)]
struct ItemSource {
    /// Comma-separated item labels
    #[arg(long, conflicts_with = "file")]
    items: Option<String>,
    /// File with one item label per line
    #[arg(long)]
    file: Option<PathBuf>,
}

impl ItemSource {
    fn labels(&self) -> Result<Vec<String>> {
        if let Some(path) = &self.file {
            return items::read_labels(path)
                .with_context(|| format!("Failed to read items from {}", path.display()));
        }
        match &self.items {
            Some(list) => Ok(items::split_labels(list)),
            None => Ok(items::sample_labels()),
        }
    }
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    source: ItemSource,
    /// Disable autoplay and arrow-key stepping
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    #[command(flatten)]
    source: ItemSource,
    /// Scroll offset in pixels; defaults to centering the first item
    #[arg(long)]
    scroll: Option<f64>,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Disable autoplay and arrow-key stepping
    #[arg(long)]
    reduced_motion: bool,
}

/// Logs go to a file while the terminal UI owns the screen
enum LogTarget {
    File(PathBuf),
    Stderr,
}

fn init_logging(config: &FilmstripConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = FilmstripConfig::load()?;

    match cli.command {
        Some(Commands::Run(args)) => run(config, args),
        None => run(config, cli.run),
        Some(Commands::Inspect(args)) => {
            init_logging(&config, LogTarget::Stderr)?;
            config.carousel.reduced_motion |= args.reduced_motion;
            let labels = args.source.labels()?;
            commands::inspect::run(
                &config,
                labels,
                commands::inspect::Options {
                    scroll: args.scroll,
                    width: args.width,
                    json: args.json,
                },
            )
        }
        Some(Commands::Init { force }) => commands::init::run(&config, force),
    }
}

fn run(mut config: FilmstripConfig, args: RunArgs) -> Result<()> {
    init_logging(&config, LogTarget::File(config.log_path()))?;
    config.carousel.reduced_motion |= args.reduced_motion;
    let labels = args.source.labels()?;
    commands::run::run(config, labels)
}
