use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use pcm_peak_meter::config::{DEFAULT_BUFFER_SIZE, DEFAULT_ELASTICITY, DEFAULT_SAMPLE_RATE};
use pcm_peak_meter::display::DEFAULT_WIDTH;
use pcm_peak_meter::{MeterConfig, MeterError, Pipeline, TextDisplay};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Peak meter for raw 16-bit little-endian stereo PCM read from stdin.
///
/// e.g. `arecord -f cd -t raw | volmeter`
#[derive(Parser, Debug)]
#[command(name = "volmeter", version)]
struct Args {
    /// Window size in bytes; must be a multiple of 4.
    #[arg(default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Nominal sample rate in Hz, used to report the refresh time.
    #[arg(default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f64,

    /// How fast the hold marker follows the peak, in (0, 1].
    #[arg(short, long, default_value_t = DEFAULT_ELASTICITY)]
    elasticity: f64,

    /// Bar width in columns.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Copy the input to stdout and draw the meter on stderr instead.
    #[arg(long)]
    passthrough: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn run(args: Args) -> Result<(), MeterError> {
    let config =
        MeterConfig::new(args.buffer_size, args.sample_rate)?.with_elasticity(args.elasticity)?;
    config.log_summary();

    let display_out: Box<dyn Write> = if args.passthrough {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let display = TextDisplay::new(display_out, args.width)?;

    let mut pipeline = Pipeline::new(config, io::stdin().lock(), display)?;
    if args.passthrough {
        pipeline = pipeline.with_passthrough(io::stdout());
    }

    pipeline.run()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
