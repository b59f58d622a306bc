use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use qrmorph::{
    IdentityMapper, LayoutKind, MorphConfig, MorphDriver, QrCodeEncoder, QrEncoder, ZoneIndexer,
};

#[derive(Parser, Debug)]
#[command(name = "qrmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the morphing animation as a PNG sequence.
    Frames(FramesArgs),
    /// Print the layout of one payload as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Optional JSON configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of ticks.
    #[arg(long)]
    ticks: Option<u32>,

    /// Override the initial payload.
    #[arg(long)]
    text: Option<String>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Position,
    Offset,
}

impl From<KindArg> for LayoutKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Position => LayoutKind::Position,
            KindArg::Offset => LayoutKind::Offset,
        }
    }
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Payload to encode.
    #[arg(long)]
    text: String,

    /// Which layout to print.
    #[arg(long, value_enum, default_value_t = KindArg::Position)]
    kind: KindArg,

    /// Zone side length in modules.
    #[arg(long, default_value_t = qrmorph::DEFAULT_ZONE_SIZE)]
    zone_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => MorphConfig::from_path(path)?,
        None => MorphConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(text) = args.text {
        config.initial_text = text;
    }
    if args.parallel {
        config.threading.parallel = true;
    }
    if args.threads.is_some() {
        config.threading.threads = args.threads;
    }

    let encoder = QrCodeEncoder::new(config.ec_level);
    let mut driver = MorphDriver::new(config, encoder)?;
    let (frames, stats) = qrmorph::render_sequence(&mut driver)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for (idx, frame) in frames.iter().enumerate() {
        frame.save_png(&args.out.join(format!("frame_{idx:05}.png")))?;
    }

    eprintln!(
        "wrote {} frames ({} ticks, {} skipped) to {}",
        stats.frames_rendered,
        stats.ticks_total,
        stats.ticks_skipped,
        args.out.display()
    );
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let grid = QrCodeEncoder::default()
        .encode(&args.text)
        .with_context(|| format!("'{}' cannot be encoded as a QR code", args.text))?;
    let mapper = IdentityMapper::new(ZoneIndexer::new(args.zone_size)?);
    let layout = LayoutKind::from(args.kind).build(&grid, &mapper)?;
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
