use anyhow::Context;
use clap::Parser;
use kundli::rendering::{legend, render_legend_svg, render_svg, ChartSpec, LegendEntry, VisualConfig};
use kundli::{load_chart_from_json, planet_report, ChartStyle, PlanetRow, WheelCompositor};
use kundli_config::{load_render_settings, RenderSettings};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a birth chart as an SVG wheel")]
struct Args {
    /// Chart JSON, either the bare chart or the service response envelope.
    #[arg(long)]
    chart: PathBuf,

    /// Canvas width in pixels (overrides the config file).
    #[arg(long)]
    width: Option<f32>,

    /// Layout style: north-indian, south-indian, kp or western.
    #[arg(long)]
    style: Option<String>,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Config file (default: configs/wheel.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the planet legend even if the config turns it off.
    #[arg(long)]
    legend: bool,

    /// Print the per-planet report.
    #[arg(long)]
    report: bool,

    /// Write the drawing as JSON instead of SVG.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    drawing: &'a ChartSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<Vec<LegendEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<Vec<PlanetRow>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let settings = load_render_settings(args.config.as_deref())?;
    if let Some(source) = &settings.source {
        log::info!("Loaded render settings from {}", source.display());
    }

    let text = fs::read_to_string(&args.chart)
        .with_context(|| format!("reading chart {}", args.chart.display()))?;
    let mut chart = load_chart_from_json(&text)
        .with_context(|| format!("loading chart {}", args.chart.display()))?;

    if let Some(style) = resolve_style(args, &settings)? {
        chart = chart.with_style(style);
    }

    let width = args.width.unwrap_or(settings.width);
    let compositor = WheelCompositor::with_config(VisualConfig {
        padding: settings.padding,
        ..VisualConfig::default()
    });
    let spec = compositor
        .generate(&chart, width)
        .context("composing chart wheel")?;
    for diagnostic in &spec.diagnostics {
        log::warn!("{}: {}", diagnostic.planet, diagnostic.message);
    }
    log::info!(
        "Rendered {} wheel at {}px ({} planets drawn)",
        spec.style.display_name(),
        spec.width,
        spec.glyphs().count()
    );

    let want_legend = args.legend || settings.legend;
    let rows = args.report.then(|| planet_report(&chart));

    if args.json {
        let output = JsonOutput {
            drawing: &spec,
            legend: want_legend.then(legend),
            report: rows,
        };
        let json = serde_json::to_string_pretty(&output).context("serializing drawing")?;
        return write_output(args.out.as_deref(), &json);
    }

    write_output(args.out.as_deref(), &render_svg(&spec))?;

    // Extra text goes to stderr when the SVG itself is on stdout.
    let mut side: Box<dyn Write> = match args.out {
        Some(_) => Box::new(std::io::stdout()),
        None => Box::new(std::io::stderr()),
    };

    if want_legend {
        let entries = legend();
        match &args.out {
            Some(out) => {
                let path = legend_path(out);
                fs::write(&path, render_legend_svg(&entries, spec.width))
                    .with_context(|| format!("writing legend {}", path.display()))?;
                log::info!("Wrote legend to {}", path.display());
            }
            None => {
                for entry in &entries {
                    writeln!(side, "{} {}", entry.glyph, entry.planet)?;
                }
            }
        }
    }

    if let Some(rows) = rows {
        for row in &rows {
            writeln!(side, "{}", row)?;
        }
    }

    Ok(())
}

/// CLI flag beats config; neither means the chart's own style.
fn resolve_style(args: &Args, settings: &RenderSettings) -> anyhow::Result<Option<ChartStyle>> {
    let Some(tag) = args.style.as_deref().or(settings.style.as_deref()) else {
        return Ok(None);
    };
    let style = tag
        .parse::<ChartStyle>()
        .with_context(|| format!("--style {:?}", tag))?;
    Ok(Some(style))
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// `wheel.svg` -> `wheel.legend.svg`.
fn legend_path(out: &Path) -> PathBuf {
    out.with_extension("legend.svg")
}
