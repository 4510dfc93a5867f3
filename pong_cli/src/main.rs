//! Headless driver: runs a match at the fixed frame rate from scripted input

mod console;
mod script;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_core::{Config, GameState, Params, Screen};
use tracing::{debug, info};

use crate::console::{ConsoleDisplay, LogAudio};
use crate::script::{InputScript, ScriptEvent};

#[derive(Parser)]
#[command(name = "pong", about = "Two-player table pong, driven from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match from a frame-indexed input script
    Run {
        /// JSON input script; without one the ball is auto-served
        #[arg(long)]
        script: Option<PathBuf>,

        /// JSON config overriding the defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed for serve angles
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 36_000)]
        max_frames: u32,

        /// Only print the final result
        #[arg(long)]
        quiet: bool,
    },
    /// Write the default config as JSON
    DefaultConfig {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            script,
            config,
            seed,
            max_frames,
            quiet,
        } => run(
            script.as_deref(),
            config.as_deref(),
            seed,
            max_frames,
            quiet,
        ),
        Commands::DefaultConfig { output } => default_config(output.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn run(
    script_path: Option<&Path>,
    config_path: Option<&Path>,
    seed: Option<u64>,
    max_frames: u32,
    quiet: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let script = match script_path {
        Some(path) => InputScript::load(path)?,
        None => InputScript::autoserve(max_frames),
    };
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, inputs = script.inputs.len(), "starting run");

    let mut game = GameState::new(
        config,
        seed,
        Box::new(LogAudio),
        Box::new(ConsoleDisplay::new(quiet)),
    )
    .context("invalid config")?;
    game.start();

    let last_scripted = script.last_frame();
    let mut frame = 0;
    while frame < max_frames {
        for event in script.at_frame(frame) {
            debug!(frame, ?event, "scripted input");
            match event {
                ScriptEvent::KeyDown { key } => game.handle_key(key, true),
                ScriptEvent::KeyUp { key } => game.handle_key(key, false),
                ScriptEvent::Confirm => game.confirm(),
            }
        }
        game.tick(Params::FIXED_DT);
        frame += 1;

        if frame > last_scripted && game.screen() == Screen::End {
            break;
        }
    }

    let score = game.score();
    println!(
        "frames: {frame}  screen: {:?}  score: {}-{}",
        game.screen(),
        score.left,
        score.right
    );
    if let Some(summary) = game.summary() {
        println!("{summary}");
    }
    Ok(())
}

fn default_config(output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote default config");
        }
        None => println!("{json}"),
    }
    Ok(())
}
