use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use polar_roses::{
    CurveGenerator, DEFAULT_REPORT_PATH, DrawMode, DrawStrategy, GeneratorOpts, MetricsOpts,
    RasterSurface, RoseSession, SessionOpts, SystemClock,
};

#[derive(Parser, Debug)]
#[command(
    name = "polar-roses",
    version,
    about = "Animate polar roses on a headless surface and report frame-rate statistics"
)]
struct Cli {
    /// Number of roses to animate (must be > 0).
    #[arg(short = 'q', long = "quantity", value_parser = parse_curve_count)]
    quantity: u32,

    /// Seed for curve generation. Defaults to one derived from the wall clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many seconds. 0 disables the cap.
    #[arg(long, default_value_t = 15.0)]
    seconds: f64,

    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Worker thread count. Defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,

    /// How each rose is drawn.
    #[arg(long, value_enum, default_value_t = ModeChoice::Points)]
    mode: ModeChoice,

    /// Where computation hands over to drawing.
    #[arg(long, value_enum, default_value_t = StrategyChoice::ComputeThenDraw)]
    strategy: StrategyChoice,

    /// Keep each rose's samples on a single worker.
    #[arg(long)]
    no_index_parallelism: bool,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Text report output path.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Do not write the text report.
    #[arg(long)]
    no_report: bool,

    /// Divide each raw FPS sample by this factor before recording it.
    #[arg(long)]
    fps_divisor: Option<f64>,

    /// Save the last presented frame as a PNG.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Points,
    Contour,
    Filled,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    ComputeThenDraw,
    LockedPerCurve,
}

/// Parse the rose count: a positive integer that fits in `u32`.
fn parse_curve_count(raw: &str) -> Result<u32, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not an integer"))?;
    if value <= 0 {
        return Err(format!("must be greater than 0, got {value}"));
    }
    u32::try_from(value).map_err(|_| format!("{value} is too large"))
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let max_duration = if cli.seconds == 0.0 {
        None
    } else {
        let cap = Duration::try_from_secs_f64(cli.seconds)
            .with_context(|| format!("--seconds {} is not a usable duration", cli.seconds))?;
        Some(cap)
    };

    let surface = RasterSurface::new(cli.width, cli.height).context("acquire drawing surface")?;
    let canvas = surface.canvas();

    let seed = cli.seed.unwrap_or_else(wall_clock_seed);
    tracing::debug!(seed, quantity = cli.quantity, "generating roses");
    let specs = CurveGenerator::seeded(seed, GeneratorOpts { canvas })
        .generate_many(cli.quantity as usize);

    let opts = SessionOpts {
        threads: cli.threads,
        parallel_indices: !cli.no_index_parallelism,
        strategy: match cli.strategy {
            StrategyChoice::ComputeThenDraw => DrawStrategy::ComputeThenDraw,
            StrategyChoice::LockedPerCurve => DrawStrategy::LockedPerCurve,
        },
        draw_mode: match cli.mode {
            ModeChoice::Points => DrawMode::Points,
            ModeChoice::Contour => DrawMode::Contour,
            ModeChoice::Filled => DrawMode::FilledPetals,
        },
        max_duration,
        max_frames: cli.frames,
        report_path: (!cli.no_report).then(|| cli.report.clone()),
        metrics: MetricsOpts {
            calibration_divisor: cli.fps_divisor,
            ..MetricsOpts::default()
        },
        ..SessionOpts::default()
    };

    let mut session = RoseSession::new(specs, surface, SystemClock::new(), opts)?;
    let outcome = session.run()?;
    let surface = session.into_surface();

    if let Some(path) = &cli.snapshot {
        surface.save_png(path)?;
        eprintln!("wrote {}", path.display());
    }

    match &outcome.report {
        Some(report) if cli.json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        Some(_) => {}
        None => tracing::info!(
            frames = outcome.frames,
            "no complete sampling window, report skipped"
        ),
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
