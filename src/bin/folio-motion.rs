use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio_motion::{
    MotionConfig, ParallaxDirection, ParallaxSection, ParticleField, Point, Rect, Rng64,
    StaggerPlan, TiltCard, WAVE_COUNT, WaveField,
};

#[derive(Parser, Debug)]
#[command(name = "folio-motion", version)]
struct Cli {
    /// Motion config JSON. Flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a particle field and sample it.
    Particles(ParticlesArgs),
    /// Generate wave descriptors and their SVG path data.
    Waves(WavesArgs),
    /// Sample the parallax curve across scroll progress.
    Parallax(ParallaxArgs),
    /// Simulate the tilt springs for a pointer position followed by a leave.
    Tilt(TiltArgs),
    /// Print a stagger delay plan.
    Stagger(StaggerArgs),
}

#[derive(Parser, Debug)]
struct ParticlesArgs {
    /// Particle count (defaults to the config's background density).
    #[arg(long)]
    density: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Seconds after mount to sample at.
    #[arg(long, default_value_t = 0.0)]
    at: f64,
}

#[derive(Parser, Debug)]
struct WavesArgs {
    /// Band width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    #[arg(long)]
    seed: Option<u64>,

    /// Seconds after mount to sample at.
    #[arg(long, default_value_t = 0.0)]
    at: f64,
}

#[derive(Parser, Debug)]
struct ParallaxArgs {
    #[arg(long)]
    speed: Option<f64>,

    #[arg(long, value_enum)]
    direction: Option<DirectionChoice>,

    /// Number of samples across `[0, 1]`.
    #[arg(long, default_value_t = 11)]
    samples: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Up,
    Down,
    Left,
    Right,
}

impl From<DirectionChoice> for ParallaxDirection {
    fn from(d: DirectionChoice) -> Self {
        match d {
            DirectionChoice::Up => Self::Up,
            DirectionChoice::Down => Self::Down,
            DirectionChoice::Left => Self::Left,
            DirectionChoice::Right => Self::Right,
        }
    }
}

const MAX_HOLD_SECS: f64 = 60.0;
const MAX_TILT_FRAMES: u64 = 100_000;

#[derive(Parser, Debug)]
struct TiltArgs {
    /// Pointer x within the card, in pixels from its left edge.
    #[arg(long, default_value_t = 0.0)]
    x: f64,

    /// Pointer y within the card, in pixels from its top edge.
    #[arg(long, default_value_t = 0.0)]
    y: f64,

    #[arg(long, default_value_t = 300.0)]
    width: f64,

    #[arg(long, default_value_t = 200.0)]
    height: f64,

    #[arg(long)]
    depth: Option<f64>,

    /// Seconds to hold the pointer, then seconds to relax after leaving.
    #[arg(long, default_value_t = 1.0)]
    hold: f64,

    /// Simulation rate in frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct StaggerArgs {
    #[arg(long)]
    count: usize,

    #[arg(long, default_value_t = 0.0)]
    base: f64,

    #[arg(long, default_value_t = 0.1)]
    interval: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let out = match cli.cmd {
        Command::Particles(args) => cmd_particles(&config, args)?,
        Command::Waves(args) => cmd_waves(&config, args)?,
        Command::Parallax(args) => cmd_parallax(&config, args)?,
        Command::Tilt(args) => cmd_tilt(&config, args)?,
        Command::Stagger(args) => cmd_stagger(args)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MotionConfig> {
    match path {
        None => Ok(MotionConfig::default()),
        Some(path) => MotionConfig::from_path(path)
            .with_context(|| format!("load motion config '{}'", path.display())),
    }
}

fn cmd_particles(config: &MotionConfig, args: ParticlesArgs) -> anyhow::Result<serde_json::Value> {
    let density = args.density.unwrap_or(config.background.density);
    let seed = args.seed.unwrap_or(config.seed);
    let field = ParticleField::generate(density, &mut Rng64::new(seed));
    Ok(serde_json::json!({
        "seed": seed,
        "particles": field.particles(),
        "frames": field.sample(args.at),
    }))
}

fn cmd_waves(config: &MotionConfig, args: WavesArgs) -> anyhow::Result<serde_json::Value> {
    if !args.width.is_finite() || args.width <= 0.0 {
        anyhow::bail!("--width must be finite and > 0");
    }
    let seed = args.seed.unwrap_or(config.seed);
    let field = WaveField::generate(WAVE_COUNT, &mut Rng64::new(seed));
    let waves: Vec<_> = field
        .waves()
        .iter()
        .map(|wave| {
            serde_json::json!({
                "wave": wave,
                "period": wave.period(),
                "path": wave.path(args.width, args.at).to_svg(),
            })
        })
        .collect();
    Ok(serde_json::json!({ "seed": seed, "width": args.width, "waves": waves }))
}

fn cmd_parallax(config: &MotionConfig, args: ParallaxArgs) -> anyhow::Result<serde_json::Value> {
    if args.samples < 2 {
        anyhow::bail!("--samples must be at least 2");
    }
    let mut parallax = config.parallax.clone();
    if let Some(speed) = args.speed {
        parallax.speed = speed;
    }
    if let Some(direction) = args.direction {
        parallax.direction = direction.into();
    }
    let section = ParallaxSection::new(&parallax);
    let last = (args.samples - 1) as f64;
    let samples: Vec<_> = (0..args.samples)
        .map(|i| {
            let progress = i as f64 / last;
            serde_json::json!({ "progress": progress, "style": section.sample(progress) })
        })
        .collect();
    Ok(serde_json::json!({
        "direction": parallax.direction,
        "distance": section.distance(),
        "samples": samples,
    }))
}

fn cmd_tilt(config: &MotionConfig, args: TiltArgs) -> anyhow::Result<serde_json::Value> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    if !args.hold.is_finite() || !(0.0..=MAX_HOLD_SECS).contains(&args.hold) {
        anyhow::bail!("--hold must be within [0, {MAX_HOLD_SECS}] seconds");
    }
    let mut tilt = config.tilt.clone();
    if let Some(depth) = args.depth {
        tilt.depth = depth;
    }
    let mut card = TiltCard::new(&tilt, config.spring).context("build tilt card")?;
    let bounds = Rect::new(0.0, 0.0, args.width, args.height);
    let dt = 1.0 / f64::from(args.fps);
    let hold_frames = (args.hold * f64::from(args.fps)).round() as u64;
    if hold_frames > MAX_TILT_FRAMES {
        anyhow::bail!("--hold x --fps exceeds {MAX_TILT_FRAMES} frames");
    }

    let mut frames = Vec::new();
    let mut t = 0.0;
    frames.push(card.frame(t));
    if !card.on_pointer_move(Point::new(args.x, args.y), Some(bounds), t) {
        anyhow::bail!("card bounds must have a positive size");
    }
    for _ in 0..hold_frames {
        t += dt;
        frames.push(card.frame(t));
    }
    card.on_pointer_leave(t);
    for _ in 0..hold_frames {
        t += dt;
        frames.push(card.frame(t));
    }

    let peak = |pick: fn(&folio_motion::TiltFrame) -> f64| {
        frames.iter().map(pick).fold(0.0_f64, |a, b| a.max(b.abs()))
    };
    Ok(serde_json::json!({
        "depth": card.depth(),
        "dt": dt,
        "peak_abs_rotation": [peak(|f| f.rotate_x), peak(|f| f.rotate_y)],
        "frames": frames,
    }))
}

fn cmd_stagger(args: StaggerArgs) -> anyhow::Result<serde_json::Value> {
    let plan = StaggerPlan::new(args.count, args.base, args.interval);
    Ok(serde_json::to_value(&plan)?)
}
