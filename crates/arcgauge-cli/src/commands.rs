//! Subcommand implementations. Each writes its report to `out`.

use anyhow::{bail, Context, Result};
use arcgauge::widgets::ArcProgressBar;
use arcgauge::yaml::{GaugeConfig, GaugeManifest};
use arcgauge::{DrawCommand, Event, FrameTimer, HostScreen, Rect, RecordingCanvas, Widget};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Output format of `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Draw commands as JSON
    #[default]
    Json,
    /// Human-readable summary
    Summary,
}

#[derive(Debug, Serialize)]
struct RenderReport {
    progress: i32,
    max: i32,
    size: f32,
    sweep_angle: f32,
    pointer_angle: f32,
    accessible_value: String,
    commands: Vec<DrawCommand>,
}

fn load_config(path: Option<&Path>) -> Result<GaugeConfig> {
    let Some(path) = path else {
        return Ok(GaugeConfig::default());
    };
    let config = GaugeManifest::from_file(path)?
        .resolve()
        .with_context(|| format!("invalid manifest {}", path.display()))?;
    debug!(path = %path.display(), "loaded gauge manifest");
    Ok(config)
}

fn render_gauge(
    config: &GaugeConfig,
    progress: i32,
    max: Option<i32>,
    size: f32,
) -> ArcProgressBar {
    let mut gauge = config.build_gauge();
    if let Some(max) = max {
        gauge.set_max(max);
    }
    gauge.set_progress(progress);
    gauge.layout(Rect::new(0.0, 0.0, size, size));
    gauge
}

/// Paint one frame of the gauge and report it.
pub fn render(
    out: &mut impl Write,
    progress: i32,
    max: Option<i32>,
    size: Option<f32>,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config)?;
    let size = size.unwrap_or(config.size);
    let gauge = render_gauge(&config, progress, max, size);

    let mut canvas = RecordingCanvas::new();
    gauge.paint(&mut canvas);
    if canvas.is_empty() {
        bail!(
            "nothing painted: max must be positive, got {}",
            gauge.get_max()
        );
    }

    let report = RenderReport {
        progress: gauge.get_progress(),
        max: gauge.get_max(),
        size,
        sweep_angle: gauge.sweep_angle(),
        pointer_angle: gauge.pointer_angle(),
        accessible_value: gauge.accessible_value(),
        commands: canvas.take_commands(),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Summary => write_summary(out, &report)?,
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, report: &RenderReport) -> Result<()> {
    writeln!(out, "progress: {}/{}", report.progress, report.max)?;
    writeln!(out, "size: {}px", report.size)?;
    writeln!(out, "sweep: {}°", report.sweep_angle)?;
    writeln!(out, "pointer: {}°", report.pointer_angle)?;

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for command in &report.commands {
        *kinds.entry(command.kind()).or_default() += 1;
    }
    let kinds: Vec<_> = kinds.iter().map(|(k, n)| format!("{k}={n}")).collect();
    writeln!(
        out,
        "commands: {} ({})",
        report.commands.len(),
        kinds.join(", ")
    )?;
    Ok(())
}

/// Outcome of a headless simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Target chosen by each click
    pub targets: Vec<i32>,
    /// Frames run in total
    pub frames: u64,
    /// Frames that produced a repaint
    pub repaints: u64,
    /// Final gauge progress
    pub progress: i32,
    /// Final label text
    pub label: String,
}

/// Click the screen's button `clicks` times, running frames at `fps` until
/// each transition settles.
pub fn simulate(
    out: &mut impl Write,
    clicks: u32,
    seed: Option<u64>,
    fps: u32,
    config: Option<&Path>,
) -> Result<SimulationSummary> {
    let config = load_config(config)?;
    let mut screen = HostScreen::from_config(&config, seed);
    screen.layout(Rect::new(0.0, 0.0, config.size, config.size * 2.0));

    let mut timer = FrameTimer::new(fps);
    let mut now_us = 0u64;
    timer.frame(now_us);

    let mut canvas = RecordingCanvas::new();
    let mut targets = Vec::new();
    let mut repaints = 0u64;

    for click in 1..=clicks {
        let center = screen.button_center();
        screen.handle_event(&Event::press(center));
        let Some(target) = screen.handle_event(&Event::release(center)) else {
            bail!("click {click} did not reach the button");
        };
        targets.push(target);

        let mut frames = 0u32;
        loop {
            now_us += timer.target_frame_us();
            let running = screen.advance(timer.frame(now_us));
            frames += 1;
            if screen.take_redraw_request() {
                canvas.clear();
                screen.paint(&mut canvas);
                repaints += 1;
            }
            if !running {
                break;
            }
        }

        info!(click, speed = target, frames, "transition settled");
        writeln!(
            out,
            "click {click}: target {target}, settled after {frames} frames"
        )?;
    }

    let summary = SimulationSummary {
        targets,
        frames: timer.total_frames().saturating_sub(1),
        repaints,
        progress: screen.gauge().get_progress(),
        label: screen.label().content().to_string(),
    };

    writeln!(out, "label: {}", summary.label)?;
    writeln!(out, "progress: {}", summary.progress)?;
    writeln!(
        out,
        "frames: {} ({} repaints, {:.1} fps)",
        summary.frames,
        summary.repaints,
        timer.fps()
    )?;
    Ok(summary)
}

/// Validate a manifest file and print its resolved values.
pub fn check(out: &mut impl Write, path: &Path) -> Result<GaugeConfig> {
    let config = load_config(Some(path))?;
    let style = &config.style;

    writeln!(out, "Manifest valid: {}", path.display())?;
    writeln!(out, "  strokeWidth: {}", style.stroke_width)?;
    writeln!(out, "  backgroundColor: {}", style.background_color.to_hex_with_alpha())?;
    writeln!(out, "  pointerColor: {}", style.pointer_color.to_hex_with_alpha())?;
    writeln!(
        out,
        "  gradient: {} {} {}",
        style.start_color.to_hex(),
        style.center_color.to_hex(),
        style.end_color.to_hex()
    )?;
    writeln!(out, "  max: {}", config.max)?;
    writeln!(out, "  size: {}", config.size)?;
    writeln!(
        out,
        "  animation: {}ms {:?}",
        config.animation_duration_ms, config.easing
    )?;
    Ok(config)
}
