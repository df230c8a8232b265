use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use boulderflash::GameConfig;
use boulderflash::GameSession;
use boulderflash::headless::{ReplayConfig, ReplayRunner, parse_script};
use boulderflash::levels::LevelManager;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// List the built-in levels
    #[arg(long)]
    list_levels: bool,

    /// Level to start on (0-based)
    #[arg(long, default_value = "0")]
    level: usize,

    /// Play a level map from a text file instead of the built-in levels
    #[arg(long)]
    map: Option<PathBuf>,

    /// Actions to replay: U D L R move, B bomb, P pillar, . wait
    #[arg(long, default_value = "")]
    script: String,

    /// Frames simulated after each scripted action (overrides config)
    #[arg(long)]
    frames_per_action: Option<u32>,

    /// RNG seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board every N frames, 0 = final board only (overrides config)
    #[arg(long)]
    print_every: Option<u32>,

    /// Explicit config file (default: optional boulderflash.ron)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn list_levels(levels: &LevelManager) {
    println!("Available levels:");
    for level in levels.levels() {
        println!("  {:2}: {} - {}", level.id, level.name, level.description);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Handle --list-levels flag
    if args.list_levels {
        list_levels(&LevelManager::new());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::load()?,
    };

    let levels = match &args.map {
        Some(path) => {
            let map = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read map {}", path.display()))?;
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            LevelManager::single(name, map)
        }
        None => LevelManager::new(),
    };

    let actions = parse_script(&args.script)?;
    let seed = args.seed.unwrap_or(config.runner.seed);

    let session = GameSession::new(
        levels,
        config.session.clone(),
        config.engine.clone(),
        seed,
        args.level,
    )
    .context("Failed to start session")?;
    log::info!(
        "Starting level {} ({}) with seed {seed}",
        args.level,
        session.level_name()
    );

    let mut replay = ReplayConfig::from(&config.runner);
    if let Some(frames) = args.frames_per_action {
        replay.frames_per_action = frames;
    }
    if let Some(every) = args.print_every {
        replay.print_every = every;
    }

    let mut runner = ReplayRunner::new(session, replay);
    let stdout = std::io::stdout();
    let summary = runner.run(&actions, &mut stdout.lock())?;

    println!(
        "{:?} after {} frames ({} actions): {} levels completed, {} lives left, on {}",
        summary.status,
        summary.frames,
        summary.actions_applied,
        summary.completed_levels,
        summary.lives,
        summary.level_name
    );
    Ok(())
}
