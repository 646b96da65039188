// File: crates/voronoi-demo/src/main.rs
// Summary: Demo mounts a Voronoi hover layer over CSV (or generated) series, sweeps a pointer
// across it logging hover transitions, pans once to force a rebuild, and writes a PNG.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voronoi_core::{
    theme, Dataset, Domain, HoverCallbacks, HoverEvent, Margins, Point, RenderOptions, Series, VoronoiLayer, VoronoiProps,
};

const PLOT_W: f64 = 800.0;
const PLOT_H: f64 = 450.0;

/// What hover callbacks get back for each point.
#[derive(Clone, Debug)]
struct Row {
    series: String,
    index: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // args: [input.csv] [output.png]
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/voronoi_demo.png"));

    let dataset = match input.as_deref() {
        Some(path) => load_series_csv(Path::new(path)).with_context(|| format!("failed to load CSV '{}'", path))?,
        None => {
            info!("no input CSV given; using generated sample series");
            sample_dataset()
        }
    };
    let total: usize = dataset.iter().map(|s| s.len()).sum();
    if total == 0 {
        anyhow::bail!("no points loaded; check headers (series,x,y)");
    }
    info!("loaded {} series, {} points", dataset.len(), total);

    let stack = std::env::var("VORONOI_STACK").map(|v| v == "1").unwrap_or(false);
    let dataset = if stack { Series::stacked(&dataset) } else { dataset };
    let dataset = Arc::new(dataset);
    let domain = Arc::new(Domain::from_dataset(&dataset, stack));

    let props = build_props(Arc::clone(&dataset), Arc::clone(&domain), stack)?;
    let mut layer = VoronoiLayer::mount(props, hover_logging());
    info!("mounted layer with {} hit regions", layer.overlay().len());

    // diagonal sweep across the plot and its margin band
    let steps = 24;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        layer.pointer_move(-20.0 + t * (PLOT_W + 40.0), -10.0 + t * (PLOT_H + 20.0));
    }
    layer.pointer_leave();

    // identical references: overlay is reused
    let same = layer.props().clone();
    info!("update with same inputs -> {:?}", layer.update(same));

    // pan: a new domain object rebuilds the partition
    let panned = Arc::new(domain.panned_by_pixels(-120.0, 0.0, PLOT_W, PLOT_H));
    let next = build_props(Arc::clone(&dataset), panned, stack)?;
    info!("update with panned domain -> {:?}", layer.update(next));

    let theme_name = std::env::var("VORONOI_THEME").unwrap_or_else(|_| "dark".to_string());
    let opts = RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() };
    if !opts.theme.name.eq_ignore_ascii_case(&theme_name) {
        let known: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
        warn!("unknown theme '{}', using dark (known: {})", theme_name, known.join(", "));
    }

    layer.pointer_move(PLOT_W * 0.5, PLOT_H * 0.5);
    layer.render_to_png(&opts, &output).with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());
    layer.unmount();
    Ok(())
}

fn build_props(dataset: Arc<Dataset<Row>>, domain: Arc<Domain>, stack: bool) -> Result<VoronoiProps<Row>> {
    let props = VoronoiProps::builder(dataset, Arc::clone(&domain))
        .x_scale(domain.x_scale(PLOT_W).into_fn())
        .y_scale(domain.y_scale(PLOT_H).into_fn())
        .margins(Margins::default())
        .size(PLOT_W, PLOT_H)
        .focus(true)
        .stack(stack)
        .build()?;
    Ok(props)
}

fn hover_logging() -> HoverCallbacks<Row> {
    HoverCallbacks::new()
        .on_mouse_over(|ev: HoverEvent<'_, Row>| {
            info!(
                "over {}[{}] x={} y={} at ({:.1}, {:.1})",
                ev.point.payload.series, ev.point.payload.index, ev.point.x, ev.point.y, ev.site.x, ev.site.y
            );
            if let Some(focus) = ev.focus {
                focus.reposition(ev.site.x, ev.site.y);
            }
        })
        .on_mouse_out(|ev: HoverEvent<'_, Row>| {
            info!("out  {}[{}]", ev.point.payload.series, ev.point.payload.index);
            if let Some(focus) = ev.focus {
                focus.hide();
            }
        })
}

fn sample_dataset() -> Dataset<Row> {
    ["temperature", "humidity"]
        .iter()
        .enumerate()
        .map(|(k, name)| {
            let data = (0..60)
                .map(|i| {
                    let x = i as f64 * 0.5;
                    let y = 20.0 + 8.0 * (x * 0.4 + k as f64).sin() + k as f64 * 5.0;
                    // pre-quantized to a tenth, as source data usually is
                    let y = (y * 10.0).round() / 10.0;
                    Point::new(x, y, Row { series: name.to_string(), index: i })
                })
                .collect();
            Series::with_data(*name, data)
        })
        .collect()
}

/// Load `series,x,y` rows into one series per distinct series name (file order kept).
fn load_series_csv(path: &Path) -> Result<Dataset<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_series = idx(&["series", "name", "group"]);
    let i_x = idx(&["x", "time", "t"]).context("missing x column")?;
    let i_y = idx(&["y", "value", "v"]).context("missing y column")?;

    let mut out: Dataset<Row> = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let name = i_series.and_then(|i| rec.get(i)).unwrap_or("series").trim().to_string();
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            skipped += 1;
            continue;
        };
        let pos = match out.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                out.push(Series::new(name.clone()));
                out.len() - 1
            }
        };
        let index = out[pos].len();
        out[pos].push(Point::new(x, y, Row { series: name, index }));
    }
    if skipped > 0 {
        warn!("skipped {} rows with unparsable x/y", skipped);
    }
    Ok(out)
}
