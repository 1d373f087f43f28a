use std::{
    io::{BufRead as _, Write as _},
    path::{Path, PathBuf},
    thread,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sense_layers::{
    AnimationConfig, Animator, BarGraph, CancelToken, DisplaySink, FrameIndex, LayersResult,
    PIXEL_COUNT, Rgb8, Scene, WIDTH,
};

#[derive(Parser, Debug)]
#[command(name = "sense-layers", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a scene in the terminal. Press Enter to stop.
    Play(PlayArgs),
    /// Print one composited frame.
    Frame(FrameArgs),
    /// Animate a scrolling bar graph from a list of values.
    Graph(GraphArgs),
    /// Validate a scene and list its layers.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override seconds per frame.
    #[arg(long)]
    speed: Option<f64>,

    /// Override total running time in seconds.
    #[arg(long, conflicts_with = "loops")]
    total_time: Option<f64>,

    /// Play this many full animation cycles instead of a fixed time.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    loops: Option<u64>,

    /// Send straight colour, ignoring alpha.
    #[arg(long)]
    no_alpha: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: u64,

    /// Send straight colour, ignoring alpha.
    #[arg(long)]
    no_alpha: bool,
}

#[derive(Parser, Debug)]
struct GraphArgs {
    /// Comma-separated bar heights in [0, 1].
    #[arg(long, value_delimiter = ',', required = true)]
    values: Vec<f64>,

    /// Seconds per bar.
    #[arg(long, default_value_t = 0.5)]
    speed: f64,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Graph(args) => cmd_graph(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    let scene =
        Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))?;
    Ok(scene)
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let stack = scene.build()?;

    let mut config = scene.animation.clone();
    if let Some(speed) = args.speed {
        config.scroll_speed = speed;
    }
    if let Some(total) = args.total_time {
        config.total_time = total;
    }
    if let Some(loops) = args.loops {
        let frames = stack.period().checked_mul(loops).with_context(|| {
            format!(
                "--loops {loops} is too large for a {}-frame cycle",
                stack.period()
            )
        })?;
        config.total_time = frames as f64 * config.scroll_speed;
    }
    if args.no_alpha {
        config.use_alpha = false;
    }
    let animator = Animator::new(config)?;

    let cancel = CancelToken::new();
    spawn_enter_watcher(cancel.clone());

    let mut sink = TerminalSink::new(std::io::stdout());
    let report = animator.run(&stack, &mut sink, &cancel)?;
    eprintln!(
        "showed {} frame(s){}",
        report.frames_shown,
        if report.cancelled { " (stopped)" } else { "" }
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let stack = scene.build()?;
    let animator = Animator::new(AnimationConfig {
        use_alpha: !args.no_alpha,
        ..scene.animation
    })?;

    let mut sink = TerminalSink::new(std::io::stdout());
    animator.show_static(&stack, FrameIndex(args.index), &mut sink)?;
    Ok(())
}

fn cmd_graph(args: GraphArgs) -> anyhow::Result<()> {
    let animator = Animator::new(AnimationConfig {
        scroll_speed: args.speed,
        total_time: args.speed * args.values.len() as f64,
        use_alpha: false,
    })?;

    let cancel = CancelToken::new();
    spawn_enter_watcher(cancel.clone());

    let mut graph = BarGraph::default();
    let frames = args.values.iter().map(|&v| {
        graph.add_bar(v);
        *graph.pixels()
    });
    let mut sink = TerminalSink::new(std::io::stdout());
    animator.play(frames, &mut sink, &cancel)?;
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let stack = scene.build()?;

    println!("scene '{}': {} layer(s)", stack.name(), stack.len());
    for (i, layer) in stack.layers().iter().enumerate() {
        println!(
            "  #{i} {:<16} effects={} period={}",
            layer.name(),
            layer.depth(),
            layer.period()
        );
    }
    println!(
        "  cycle={} frames, run={} frames",
        stack.period(),
        scene.animation.frame_total()
    );
    Ok(())
}

fn spawn_enter_watcher(cancel: CancelToken) {
    thread::spawn(move || {
        let mut line = String::new();
        // EOF means stdin is not interactive; keep playing.
        if matches!(std::io::stdin().lock().read_line(&mut line), Ok(n) if n > 0) {
            cancel.cancel();
        }
    });
}

/// Draws frames as 24-bit colour blocks, redrawing in place.
struct TerminalSink<W: std::io::Write> {
    out: W,
    drawn: bool,
}

impl<W: std::io::Write> TerminalSink<W> {
    fn new(out: W) -> Self {
        Self { out, drawn: false }
    }

    fn draw(&mut self, pixels: &[Rgb8; PIXEL_COUNT]) -> std::io::Result<()> {
        if self.drawn {
            write!(self.out, "\x1b[{}A", PIXEL_COUNT / WIDTH)?;
        }
        for row in pixels.chunks_exact(WIDTH) {
            for [r, g, b] in row {
                write!(self.out, "\x1b[38;2;{r};{g};{b}m\u{2588}\u{2588}")?;
            }
            writeln!(self.out, "\x1b[0m")?;
        }
        self.out.flush()?;
        self.drawn = true;
        Ok(())
    }
}

impl<W: std::io::Write> DisplaySink for TerminalSink<W> {
    fn set_pixels(&mut self, pixels: &[Rgb8; PIXEL_COUNT]) -> LayersResult<()> {
        self.draw(pixels).context("write frame to terminal")?;
        Ok(())
    }
}
