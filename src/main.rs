//! src/main.rs
//!
//! Entrypoint: parse flags, load config, start logging, delegate to `app::run()`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use tui_launcher::{LauncherConfig, app, logging};

#[derive(Parser, Debug)]
#[command(version, about = "Terminal game launcher")]
struct Args {
    /// YAML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the background animation.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the rolling log file.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut config = LauncherConfig::load_or_default(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.field.seed = Some(seed);
    }
    if let Some(dir) = args.log_dir {
        config.log_dir = dir;
    }

    let _logging = logging::init(&config.log_dir);
    app::run(config)
}
