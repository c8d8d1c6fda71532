use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod render;

#[derive(Parser)]
#[command(name = "mediscan")]
#[command(about = "MediScan - spoken medication identification", long_about = None)]
struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not speak announcements; print them instead
    #[arg(long, global = true)]
    mute: bool,

    /// Skip the simulated lookup latency
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a medication by name
    Search {
        /// Medication name, e.g. "aspirin"
        query: String,
    },
    /// Identify a medication from a photo
    Scan {
        /// Image file used as the captured frame
        #[arg(long)]
        image: PathBuf,
    },
    /// Start an interactive session
    Repl {
        /// Image file served by the camera
        #[arg(long)]
        camera_image: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mediscan=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let options = commands::SessionOptions {
        config_path: cli.config,
        mute: cli.mute,
        no_latency: cli.no_latency,
    };

    match cli.command {
        Commands::Search { query } => commands::search::run(&options, &query).await?,
        Commands::Scan { image } => commands::scan::run(&options, image).await?,
        Commands::Repl { camera_image } => commands::repl::run(&options, camera_image).await?,
    }

    Ok(())
}
