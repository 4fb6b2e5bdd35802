use anyhow::Result;
use clap::Parser;
use shoal_lib::app::{App, HeadlessOptions};
use shoal_lib::model::config::SimConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path (TOML); defaults are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Override the spawn seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of host frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Synthetic host frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Number of agents to spawn
    #[arg(short, long, default_value_t = 3)]
    agents: usize,

    /// Feed every N frames (0 disables)
    #[arg(long, default_value_t = 120)]
    feed_every: u64,

    /// Pellets per feed
    #[arg(long, default_value_t = 6)]
    feed_count: usize,

    /// Release bubbles every N frames (0 disables)
    #[arg(long, default_value_t = 90)]
    bubble_every: u64,

    /// Bubbles per release
    #[arg(long, default_value_t = 3)]
    bubble_count: usize,

    /// Pause at this frame
    #[arg(long)]
    pause_at: Option<u64>,

    /// Frames to stay paused
    #[arg(long, default_value_t = 0)]
    pause_frames: u64,

    /// Pretty-print the final summary
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "shoal=info,shoal_lib=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if args.dump_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let options = HeadlessOptions {
        frames: args.frames,
        fps: args.fps,
        agents: args.agents,
        feed_every: args.feed_every,
        feed_count: args.feed_count,
        bubble_every: args.bubble_every,
        bubble_count: args.bubble_count,
        pause_at: args.pause_at,
        pause_frames: args.pause_frames,
    };

    let mut app = App::new(config, options)?;
    let summary = app.run()?;
    tracing::info!(
        frames = summary.frames,
        eaten = summary.eaten,
        settled = summary.settled,
        surfaced = summary.surfaced,
        "Headless run finished"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}
