use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scroll_timeline::{Engine, EngineConfig, Progress, ReplayOpts, SectionPhase};

#[derive(Parser, Debug)]
#[command(name = "scroll-timeline", version)]
struct Cli {
    /// Log engine diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a config file and print its section table.
    Validate(ValidateArgs),
    /// Evaluate the page at a single progress value, fully settled.
    Sample(SampleArgs),
    /// Replay a scroll trace and write one JSON line per frame.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input engine config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input engine config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll progress in `[0, 1]` (clamped).
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input engine config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// JSON array of scroll offsets in pixels, one per frame. Without it the page is
    /// swept top to bottom.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Frames used for the top-to-bottom sweep.
    #[arg(long, default_value_t = 120, conflicts_with = "trace")]
    frames: u64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Frame clock rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output JSON Lines path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<EngineConfig> {
    EngineConfig::from_path(path).with_context(|| format!("load config '{}'", path.display()))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    println!(
        "{:<24} {:>8} {:>8} {:>8} {:>8}",
        "section", "in", "full", "out", "hidden"
    );
    for spec in config.schedule.iter() {
        let w = spec.window;
        println!(
            "{:<24} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            spec.name,
            w.fade_in_start(),
            w.fade_in_end(),
            w.fade_out_start(),
            w.fade_out_end()
        );
    }
    println!(
        "zoom: {:.3}..{:.3} scale {} -> {}",
        config.zoom.start(),
        config.zoom.end(),
        config.zoom.from_scale(),
        config.zoom.to_scale()
    );
    println!(
        "timeline: {:.3}..{:.3}",
        config.timeline.start(),
        config.timeline.end()
    );
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let mut engine = Engine::new(config)?;
    let state = engine.seek(Progress::new(args.progress));

    let visible: Vec<&str> = state
        .sections
        .iter()
        .filter(|s| s.phase != SectionPhase::Hidden)
        .map(|s| s.name.as_str())
        .collect();
    tracing::debug!(?visible, "sampled");

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    serde_json::to_writer_pretty(&mut w, state).context("encode state")?;
    writeln!(w)?;
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let offsets = match &args.trace {
        Some(path) => read_trace(path)?,
        None => sweep(args.frames, args.viewport, config.page_height_viewports),
    };

    let opts = ReplayOpts {
        viewport_height: args.viewport,
        fps: args.fps,
        ..ReplayOpts::default()
    };
    let states = scroll_timeline::replay(config, offsets, opts)?;

    let mut w: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    for state in &states {
        serde_json::to_writer(&mut w, state).context("encode state")?;
        writeln!(w)?;
    }
    w.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", states.len(), path.display());
    }
    Ok(())
}

fn read_trace(path: &Path) -> anyhow::Result<Vec<f64>> {
    let f = File::open(path).with_context(|| format!("open trace '{}'", path.display()))?;
    let offsets: Vec<f64> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse trace JSON")?;
    Ok(offsets)
}

fn sweep(frames: u64, viewport: f64, page_height_viewports: f64) -> Vec<f64> {
    let max = viewport * (page_height_viewports - 1.0);
    match frames {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n).map(|i| max * i as f64 / (n - 1) as f64).collect(),
    }
}
