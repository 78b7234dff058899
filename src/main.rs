//! cutpath CLI - inspect, render and replay tool paths and simulation traces.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use cutpath::app::{designer_from_config, visualizer_from_config};
use cutpath::{
    init_logging, remember_recent, replay_clock, Config, ConfigSource, FileSummary,
    PlaybackCommand, SimulationTrace, SvgCanvas, BUILD_DATE, VERSION,
};
use cutpath_visualizer::TickOutcome;

#[derive(Parser)]
#[command(name = "cutpath")]
#[command(about = "Tool-path authoring and simulation playback", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (.toml or .json). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise an instruction file or a simulation trace
    Inspect {
        file: PathBuf,
    },
    /// Render an instruction file as the editor shows it
    RenderPath {
        /// Instruction file
        input: PathBuf,
        /// Output SVG
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render one frame of a simulation trace
    RenderFrame {
        /// Trace file
        input: PathBuf,
        /// State index to show
        #[arg(short, long, default_value_t = 0)]
        frame: usize,
        /// Output SVG
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Replay a trace headlessly in realtime, logging each displayed frame
    Replay {
        input: PathBuf,
        /// Stop after this many ticks (default: run until the trace ends)
        #[arg(long)]
        ticks: Option<usize>,
        /// Simulated display refresh rate
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
    },
    /// Write an empty instruction file with the configured robot profile
    NewPath {
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!("cutpath {} (built {})", VERSION, BUILD_DATE);

    let config_path = match cli.config {
        Some(path) => Some(path),
        None => Config::default_path().ok(),
    };
    let (mut config, source) = match &config_path {
        Some(path) => Config::load_or_default(path),
        None => (Config::default(), ConfigSource::Missing),
    };

    match cli.command {
        Commands::Inspect { file } => {
            let summary = FileSummary::from_file(&file)?;
            println!("{}", summary);
        }
        Commands::RenderPath { input, output } => {
            render_path(&config, &input, &output)?;
            remember_recent(&mut config, config_path.as_deref(), source, &input);
        }
        Commands::RenderFrame {
            input,
            frame,
            output,
        } => {
            render_frame(&config, &input, frame, &output)?;
            remember_recent(&mut config, config_path.as_deref(), source, &input);
        }
        Commands::Replay { input, ticks, fps } => {
            replay(&config, &input, ticks, fps)?;
        }
        Commands::NewPath { output } => {
            let mut designer = designer_from_config(&config);
            designer.save_to_file(&output)?;
            println!("Wrote empty instruction file to {}", output.display());
            remember_recent(&mut config, config_path.as_deref(), source, &output);
        }
    }

    Ok(())
}

fn render_path(config: &Config, input: &Path, output: &Path) -> Result<()> {
    let mut designer = designer_from_config(config);
    designer.load_from_file(input)?;

    let size = designer.canvas.viewport().size();
    let mut canvas = SvgCanvas::new(size);
    designer.render(&mut canvas);
    canvas
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Rendered {} instructions to {}",
        designer.sequence.len(),
        output.display()
    );
    Ok(())
}

fn render_frame(config: &Config, input: &Path, frame: usize, output: &Path) -> Result<()> {
    let trace = SimulationTrace::load_from_file(input)
        .with_context(|| format!("Failed to load trace {}", input.display()))?;
    let mut viewer = visualizer_from_config(config, trace);

    let step = viewer.playback().step_secs();
    viewer.playback_mut().set_timer(frame as f64 * step);
    viewer.advance(Duration::ZERO);

    let size = viewer.camera().viewport().size();
    let mut canvas = SvgCanvas::new(size).with_font_size((size.height / 40.0).floor());
    viewer.render(&mut canvas);
    canvas
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Rendered frame {}/{} to {}",
        viewer.current_index(),
        viewer.trace().len(),
        output.display()
    );
    Ok(())
}

fn replay(config: &Config, input: &Path, ticks: Option<usize>, fps: f64) -> Result<()> {
    let mut clock = replay_clock(fps, &config.viewer)?;
    let trace = SimulationTrace::load_from_file(input)
        .with_context(|| format!("Failed to load trace {}", input.display()))?;
    let mut viewer = visualizer_from_config(config, trace);
    if viewer.playback().is_paused() {
        viewer.apply(PlaybackCommand::TogglePlayback);
    }

    let mut tick = 0;
    while ticks.map_or(true, |limit| tick < limit) {
        let outcome = viewer.tick(&mut clock);
        info!("{}", viewer.overlay_messages().join(" | "));
        tick += 1;
        if outcome == TickOutcome::Exhausted {
            break;
        }
    }

    println!(
        "Replayed {} ticks, stopped at frame {}/{}",
        tick,
        viewer.current_index(),
        viewer.trace().len()
    );
    Ok(())
}
