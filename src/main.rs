//! Defog CLI
//!
//! Runs the dehazing pipeline over a synthetic hazy source, standing in
//! for a camera, and discards the output frames. Useful for demonstrating
//! the pipeline and for profiling without capture hardware.

use clap::Parser;
use defog::{
    capture::MockSource,
    display::NullSink,
    params::DehazeParams,
    pipeline::Orchestrator,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "defog", version, about = "Per-frame video dehazing pipeline demo")]
struct Args {
    /// Number of synthetic frames to process.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Source frame width.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Source frame height.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Haze strength / percentile selector, in (0, 1).
    #[arg(long, default_value_t = 0.8)]
    omega: f64,

    /// Transmission floor, in (0, 1).
    #[arg(long = "t-min", default_value_t = 0.1)]
    t_min: f64,

    /// Atmospheric light boost, > 0.
    #[arg(long = "light-factor", default_value_t = 3.0)]
    light_factor: f64,

    /// Disable the horizontal mirror on output frames.
    #[arg(long)]
    no_mirror: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Defog v{}", defog::VERSION);

    let params = DehazeParams {
        omega: args.omega,
        t_min: args.t_min,
        enhance_light_factor: args.light_factor,
    };
    if let Err(e) = params.validate() {
        eprintln!("Invalid parameters: {}", e);
        std::process::exit(1);
    }

    // Ctrl-C drains the loop at the next frame boundary.
    let quit = Arc::new(AtomicBool::new(false));
    {
        let quit = quit.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            quit.store(true, Ordering::Relaxed);
        }) {
            warn!("Failed to install signal handler: {}", e);
        }
    }

    let mut source = MockSource::new(args.width, args.height, args.frames);
    let mut sink = NullSink::with_quit_flag(quit);

    let mut orchestrator = match Orchestrator::new(params, (args.width, args.height)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid parameters: {}", e);
            std::process::exit(1);
        }
    };
    if args.no_mirror {
        orchestrator = orchestrator.without_mirror();
    }

    match orchestrator.run(&mut source, &mut sink) {
        Ok(summary) => {
            info!(
                "Processed {} frames ({} passed through raw)",
                summary.processed, summary.passed_through
            );
        }
        Err(e) => {
            eprintln!("Pipeline failed: {}", e);
            std::process::exit(1);
        }
    }
}
