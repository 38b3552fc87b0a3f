use std::io::Write as _;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use kenburns::{
    Animator, Ease, FrameUpdate, GeneratorConfig, RandomTransitionGenerator, Rect,
    TransitionGenerator,
};

#[derive(Parser, Debug)]
#[command(name = "kenburns", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a seeded animator over a simulated clock, printing one JSON object per tick.
    Simulate(SimulateArgs),
    /// Print generated transitions for the given bounds and seed as JSON.
    Transition(TransitionArgs),
}

#[derive(Parser, Debug)]
struct BoundsArgs {
    /// Image width in pixels.
    #[arg(long, default_value_t = 1600.0)]
    image_width: f64,

    /// Image height in pixels.
    #[arg(long, default_value_t = 900.0)]
    image_height: f64,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 400.0)]
    viewport_width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 300.0)]
    viewport_height: f64,
}

impl BoundsArgs {
    fn image(&self) -> anyhow::Result<Rect> {
        bounds(self.image_width, self.image_height, "image")
    }

    fn viewport(&self) -> anyhow::Result<Rect> {
        bounds(self.viewport_width, self.viewport_height, "viewport")
    }
}

#[derive(Parser, Debug)]
struct GeneratorArgs {
    /// Minimum crop size as a fraction of the largest fitting crop.
    #[arg(long, default_value_t = 0.6)]
    min_crop_factor: f64,

    /// Maximum crop size as a fraction of the largest fitting crop.
    #[arg(long, default_value_t = 1.0)]
    max_crop_factor: f64,

    /// Minimum transition duration in milliseconds.
    #[arg(long, default_value_t = 8_000)]
    min_duration_ms: u64,

    /// Maximum transition duration in milliseconds.
    #[arg(long, default_value_t = 12_000)]
    max_duration_ms: u64,

    /// Easing curve applied to every transition.
    #[arg(long, value_enum, default_value_t = EaseChoice::InOutSine)]
    ease: EaseChoice,

    /// RNG seed for the transition generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl GeneratorArgs {
    fn generator(&self) -> anyhow::Result<RandomTransitionGenerator> {
        let config = GeneratorConfig {
            min_crop_factor: self.min_crop_factor,
            max_crop_factor: self.max_crop_factor,
            min_duration_ms: self.min_duration_ms,
            max_duration_ms: self.max_duration_ms,
            ease: self.ease.into(),
            seed: Some(self.seed),
        };
        RandomTransitionGenerator::new(config).context("build generator")
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InOutSine,
}

impl From<EaseChoice> for Ease {
    fn from(choice: EaseChoice) -> Self {
        match choice {
            EaseChoice::Linear => Ease::Linear,
            EaseChoice::InQuad => Ease::InQuad,
            EaseChoice::OutQuad => Ease::OutQuad,
            EaseChoice::InOutQuad => Ease::InOutQuad,
            EaseChoice::InCubic => Ease::InCubic,
            EaseChoice::OutCubic => Ease::OutCubic,
            EaseChoice::InOutCubic => Ease::InOutCubic,
            EaseChoice::InOutSine => Ease::InOutSine,
        }
    }
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    bounds: BoundsArgs,

    #[command(flatten)]
    generator: GeneratorArgs,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 60)]
    ticks: u64,

    /// Simulated milliseconds between ticks.
    #[arg(long, default_value_t = 16)]
    period_ms: u64,
}

#[derive(Parser, Debug)]
struct TransitionArgs {
    #[command(flatten)]
    bounds: BoundsArgs,

    #[command(flatten)]
    generator: GeneratorArgs,

    /// Number of transitions to generate.
    #[arg(long, default_value_t = 4)]
    count: u64,
}

#[derive(serde::Serialize)]
struct TickRecord {
    tick: u64,
    now_ms: u64,
    elapsed_ms: u64,
    #[serde(flatten)]
    update: FrameUpdate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Transition(args) => cmd_transition(args),
    }
}

fn bounds(w: f64, h: f64, what: &str) -> anyhow::Result<Rect> {
    if w <= 0.0 || h <= 0.0 {
        anyhow::bail!("{what} dimensions must be > 0 (got {w}x{h})");
    }
    Ok(Rect::new(0.0, 0.0, w, h))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let image = args.bounds.image()?;
    let viewport = args.bounds.viewport()?;
    let generator = args.generator.generator()?;

    let mut animator = Animator::new(Box::new(generator));
    animator.on_bounds_changed(image, viewport);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for tick in 0..args.ticks {
        let now_ms = tick * args.period_ms;
        if let Some(update) = animator.tick(now_ms) {
            let record = TickRecord {
                tick,
                now_ms,
                elapsed_ms: animator.elapsed_ms(),
                update,
            };
            serde_json::to_writer(&mut out, &record).context("write tick record")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn cmd_transition(args: TransitionArgs) -> anyhow::Result<()> {
    let image = args.bounds.image()?;
    let viewport = args.bounds.viewport()?;
    let mut generator = args.generator.generator()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        let transition = generator
            .generate_next_transition(image, viewport)
            .context("generate transition")?;
        serde_json::to_writer(&mut out, &transition).context("write transition")?;
        writeln!(out)?;
    }

    Ok(())
}
