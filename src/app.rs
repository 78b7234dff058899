//! Glue between the settings file and the editor/viewer, plus file
//! inspection for the CLI.

use anyhow::{bail, Context};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

use cutpath_core::{
    BladeState, FixedClock, Instruction, InstructionSequence, RobotProfile, SurfaceContext,
};
use cutpath_designer::{DesignerState, EditorStyle, InstructionFile};
use cutpath_settings::{Config, ConfigSource, EditorSettings, ViewerSettings};
use cutpath_visualizer::{SimulationTrace, ViewerOptions, Visualizer};

/// Editor drawing style for the configured zoom and resolution.
pub fn editor_style(settings: &EditorSettings) -> EditorStyle {
    EditorStyle {
        pick_radius: settings.pick_radius_px,
        bezier_steps: settings.bezier_steps,
        cut_samples: settings.cut_samples,
        show_cut_preview: settings.show_cut_preview,
        ..EditorStyle::for_scale(settings.scale)
    }
}

pub fn viewer_options(settings: &ViewerSettings) -> ViewerOptions {
    ViewerOptions {
        scale: settings.scale,
        lag_threshold_secs: settings.lag_threshold_secs,
        start_paused: settings.start_paused,
        pan_speed: settings.pan_speed,
        zoom_rate: settings.zoom_rate,
        min_scale: settings.min_scale,
        max_scale: settings.max_scale,
    }
}

/// A designer sized and styled from the config.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let editor = &config.editor;
    let context = SurfaceContext::new(editor.window_width as f64, editor.window_height as f64);
    DesignerState::with_style(&context, editor.scale, editor_style(editor))
        .with_robot(config.robot.clone())
}

/// A viewer sized and tuned from the config.
pub fn visualizer_from_config(config: &Config, trace: SimulationTrace) -> Visualizer {
    let viewer = &config.viewer;
    let context = SurfaceContext::new(viewer.window_width as f64, viewer.window_height as f64);
    Visualizer::with_options(trace, &context, &viewer_options(viewer))
}

/// Clock for headless replay at `fps`.
///
/// Rejects rates whose frame time the viewer would drop as a stall, since
/// playback would never advance.
pub fn replay_clock(fps: f64, viewer: &ViewerSettings) -> anyhow::Result<FixedClock> {
    let clock = match FixedClock::from_fps(fps) {
        Some(clock) => clock,
        None => bail!("--fps must be a positive rate, got {}", fps),
    };
    let frame_secs = clock.step().as_secs_f64();
    if frame_secs > viewer.lag_threshold_secs {
        bail!(
            "--fps {} gives {:.3} s frames, above the {} s lag threshold; every tick would be dropped",
            fps,
            frame_secs,
            viewer.lag_threshold_secs
        );
    }
    Ok(clock)
}

/// Records `file` in the recent list and persists the config.
///
/// Nothing is written when there is no config path or when the file on disk
/// was unusable, so a hand-edited config is never replaced by defaults.
/// Failures only warn.
pub fn remember_recent(
    config: &mut Config,
    config_path: Option<&Path>,
    source: ConfigSource,
    file: &Path,
) {
    let Some(config_path) = config_path else {
        return;
    };
    if !source.can_save() {
        debug!(
            "Not updating recent files: {} could not be loaded",
            config_path.display()
        );
        return;
    }
    let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    config.add_recent_file(file);
    if let Err(e) = config.save_to_file(config_path) {
        warn!("Could not update recent files: {}", e);
    }
}

/// What `inspect` found in a file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSummary {
    Instructions {
        lines: usize,
        curves: usize,
        blade_toggles: usize,
        /// Sum of line lengths and curve chords, in meters.
        chord_length: f64,
        final_blade: BladeState,
        robot: RobotProfile,
    },
    Trace {
        states: usize,
        blade_on_states: usize,
        duration_secs: f64,
        robot: RobotProfile,
    },
}

impl FileSummary {
    /// Reads a file and summarises it as an instruction file or a trace,
    /// depending on which list it carries.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;

        if value.get("instructions").is_some() {
            let file = InstructionFile::from_json(&content)
                .context("Failed to parse instruction file")?;
            Ok(Self::for_sequence(&file.to_sequence(), file.robot_profile()?))
        } else if value.get("states").is_some() || value.get("steps").is_some() {
            let trace = SimulationTrace::from_json(&content).context("Failed to parse trace")?;
            Ok(Self::for_trace(&trace))
        } else {
            bail!(
                "{} has neither `instructions` nor `states`",
                path.display()
            )
        }
    }

    pub fn for_sequence(sequence: &InstructionSequence, robot: RobotProfile) -> Self {
        let mut lines = 0;
        let mut curves = 0;
        let mut blade_toggles = 0;
        for instruction in sequence {
            match instruction {
                Instruction::MoveLine { .. } => lines += 1,
                Instruction::MoveCurve { .. } => curves += 1,
                Instruction::BladeOn | Instruction::BladeOff => blade_toggles += 1,
            }
        }
        Self::Instructions {
            lines,
            curves,
            blade_toggles,
            chord_length: sequence.iter().filter_map(Instruction::chord_length).sum(),
            final_blade: sequence.blade_state(),
            robot,
        }
    }

    pub fn for_trace(trace: &SimulationTrace) -> Self {
        Self::Trace {
            states: trace.len(),
            blade_on_states: trace.blade_on_count(),
            duration_secs: trace.duration().as_secs_f64(),
            robot: trace.robot().clone(),
        }
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let robot = match self {
            Self::Instructions {
                lines,
                curves,
                blade_toggles,
                chord_length,
                final_blade,
                robot,
            } => {
                writeln!(f, "Instruction file")?;
                writeln!(
                    f,
                    "  {} lines, {} curves, {} blade toggles",
                    lines, curves, blade_toggles
                )?;
                writeln!(f, "  chord length: {:.3} m", chord_length)?;
                writeln!(f, "  final state: {}", final_blade)?;
                robot
            }
            Self::Trace {
                states,
                blade_on_states,
                duration_secs,
                robot,
            } => {
                writeln!(f, "Simulation trace")?;
                writeln!(
                    f,
                    "  {} states ({} with blade on), {:.3} s",
                    states, blade_on_states, duration_secs
                )?;
                robot
            }
        };
        write!(
            f,
            "  robot: wheel distance {} m, wheel radius {} m, blade radius {} m, step {:?}",
            robot.wheel_distance, robot.wheel_radius, robot.blade_radius, robot.delta_time
        )
    }
}
