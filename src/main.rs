//! gazecast - headless harness for gaze-driven hit testing
//!
//! Replays scripted pointer and orientation input against a scene
//! snapshot and reports which nodes the gaze selected and activated.

mod config;
mod harness;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use harness::HarnessOptions;
use script::ScriptedInputPlayer;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "gazecast",
    version,
    about = "Replay scripted gaze input against a scene snapshot"
)]
struct Cli {
    /// Scene snapshot JSON file.
    scene: PathBuf,

    /// Scripted input JSON file.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Viewer configuration TOML; defaults to config/viewer.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated milliseconds per frame.
    #[arg(long, default_value_t = 16.0)]
    dt_ms: f64,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so the report can stream to stdout; level is
    // overridable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Starting gazecast v{}", env!("CARGO_PKG_VERSION"));

    let session_config = config::load(cli.config.as_deref());
    let scene = harness::load_scene(&cli.scene)?;
    info!(nodes = scene.snapshot.len(), "scene loaded");

    let script = match &cli.script {
        Some(path) => Some(
            ScriptedInputPlayer::from_path(path)
                .with_context(|| format!("loading input script {}", path.display()))?,
        ),
        None => None,
    };

    let report = harness::run(
        &scene,
        script,
        &HarnessOptions {
            frames: cli.frames,
            dt_ms: cli.dt_ms,
            config: session_config,
        },
    );

    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    match &cli.report {
        Some(path) => std::fs::write(path, &json)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
