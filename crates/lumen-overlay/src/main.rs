mod hud;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use lumen_engine::config::StreamProofConfig;
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::track::{FixedTarget, TrackedRect};
use lumen_engine::window::{Runtime, RuntimeConfig};

use hud::Hud;

/// Transparent HUD drawn on top of a screen rectangle.
#[derive(Debug, Parser)]
#[command(name = "lumen-overlay", version, about)]
struct Args {
    /// Left edge of the tracked rectangle, in physical pixels.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    x: i32,

    /// Top edge of the tracked rectangle, in physical pixels.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    y: i32,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Global opacity for every shape, clamped to [0, 1].
    #[arg(long, default_value_t = 1.0)]
    alpha: f32,

    /// Flip the persisted stream-proof flag before opening the overlay.
    #[arg(long)]
    toggle_streamproof: bool,

    /// Settings file; defaults to lumen.ini next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record line shapes without the anti-aliasing hint.
    #[arg(long)]
    no_anti_alias: bool,

    /// Keep the overlay clickable instead of passing input through.
    #[arg(long)]
    interactive: bool,

    /// Present as fast as possible instead of waiting for vsync.
    #[arg(long)]
    no_vsync: bool,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    log::info!("lumen-overlay {}", env!("CARGO_PKG_VERSION"));

    let stream_proof = stream_proof_enabled(&args);

    let target = FixedTarget(TrackedRect::new(args.x, args.y, args.width, args.height));

    let config = RuntimeConfig {
        title: "Lumen Overlay".to_string(),
        click_through: !args.interactive,
        stream_proof,
    };

    let mut gpu_init = GpuInit::default();
    if args.no_vsync {
        gpu_init.present_mode = wgpu::PresentMode::AutoNoVsync;
    }

    let hud = Hud::new(args.alpha, !args.no_anti_alias);

    Runtime::run(config, gpu_init, target, hud)
}

/// Reads (and optionally flips) the persisted flag.
///
/// Settings are best-effort: any I/O failure is logged and the overlay opens
/// without capture exclusion.
fn stream_proof_enabled(args: &Args) -> bool {
    let loaded = match &args.config {
        Some(path) => StreamProofConfig::load(path.clone()),
        None => StreamProofConfig::load_default(),
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            log::warn!("stream-proof settings unavailable: {e:#}");
            return false;
        }
    };

    if args.toggle_streamproof {
        match config.toggle() {
            Ok(enabled) => log::info!(
                "stream-proof {} ({})",
                if enabled { "enabled" } else { "disabled" },
                config.path().display()
            ),
            Err(e) => log::warn!("failed to persist stream-proof toggle: {e:#}"),
        }
    }

    config.is_enabled()
}
