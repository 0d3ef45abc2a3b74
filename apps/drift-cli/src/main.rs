mod script;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use drift_common::Axis;
use drift_kernel::{GameConfig, Session};
use tracing_subscriber::EnvFilter;

use crate::script::Script;

#[derive(Parser)]
#[command(name = "drift-cli", about = "Headless driver for the drift motion core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the active motion settings
    Info,
    /// Run a headless session with a scripted key timeline
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "60")]
        ticks: u64,
        /// Seconds per tick
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Key timeline, e.g. "0:+forward,30:-forward,40:+a"
        #[arg(short, long, default_value = "0:+forward")]
        script: String,
        /// Print the ship position every N ticks (0 = only at the end)
        #[arg(long, default_value = "0")]
        every: u64,
    },
    /// Print the resolved config as JSON
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("drift-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", drift_kernel::crate_info());
            println!("input: {}", drift_input::crate_info());
            println!(
                "motion: speed={} ramp_rate={} easing={:?}",
                config.motion.speed, config.motion.ramp_rate, config.motion.easing
            );
            println!(
                "spawner: interval={}s variants={} seed={}",
                config.spawner.interval, config.spawner.variant_count, config.spawner.seed
            );
            let bindings = config.key_bindings()?;
            for (host, key) in bindings.iter() {
                println!("  {host:>10} -> {key}");
            }
        }
        Commands::Simulate {
            ticks,
            dt,
            script,
            every,
        } => {
            let script = Script::parse(&script)?;
            let mut session = Session::new(&config)?;
            println!(
                "Simulating {ticks} ticks at dt={dt} with {} scripted events",
                script.len()
            );

            for t in 0..ticks {
                script.feed(t, &mut session);
                let report = session.tick(dt);
                let p = report.ship_position;
                tracing::debug!(
                    tick = report.tick,
                    x = p.x,
                    z = p.z,
                    ramp_x = session.controller().ramp(Axis::Lateral),
                    ramp_z = session.controller().ramp(Axis::Forward),
                    "tick"
                );
                if let Some((id, req)) = report.spawned {
                    tracing::info!(tick = report.tick, id = %id.short(), model = %req.model_name(), "asteroid");
                }
                for event in &report.scene_events {
                    tracing::trace!(tick = report.tick, ?event, "scene");
                }
                if every > 0 && report.tick % every == 0 {
                    println!(
                        "tick {:>5}: pos=({:.3}, {:.3}, {:.3})",
                        report.tick, p.x, p.y, p.z
                    );
                }
            }

            let p = session.ship_position().unwrap_or_default();
            let c = session.controller();
            println!(
                "Final: tick={} pos=({:.3}, {:.3}, {:.3})",
                session.tick_count(),
                p.x,
                p.y,
                p.z
            );
            println!(
                "Ramp: lateral={:.3} forward={:.3}  Accel: lateral={:.3} forward={:.3}",
                c.ramp(Axis::Lateral),
                c.ramp(Axis::Forward),
                c.acceleration(Axis::Lateral),
                c.acceleration(Axis::Forward)
            );
            println!(
                "Asteroids spawned: {} (scene nodes: {})",
                session.spawner().spawned(),
                session.scene().len()
            );
        }
        Commands::Config => {
            println!("{}", config.to_json_pretty()?);
        }
    }

    Ok(())
}
