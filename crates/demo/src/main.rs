// File: crates/demo/src/main.rs
// Summary: Headless demo: loads an (x, y) CSV, runs the frame loop with a synthetic pointer, writes the final frame as PNG.

use anyhow::{Context, Result};
use meridian_core::{
    ChartOptions, ContainerStyle, LiveChart, PointerEvent, Rgb, Scene, Series, StaticContainers,
};
use meridian_render_skia::render_scene_to_png;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Accept path from CLI or fall back to the bundled sample
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/samples/wave.csv".to_string());
    let path = PathBuf::from(&raw);

    let points = load_xy_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} points", points.len());

    if points.is_empty() {
        anyhow::bail!("no points loaded — check headers/delimiter.");
    }

    let mut containers = StaticContainers::new();
    containers.insert("chart", ContainerStyle::new("1024px", "640px"));

    let options = ChartOptions::new("chart", Rgb(0xFFFFFF))
        .with_series(vec![Series::with_data("csv", Rgb(0x4090FF), points)]);
    let mut chart = LiveChart::create(options, &containers).context("chart setup failed")?;
    chart.start();

    // A short synthetic session: sixty ticks with the pointer crossing mid-way,
    // so the final frame carries the cursor guide.
    let mut scene = Scene::new();
    for frame in 0..60u32 {
        if frame == 30 {
            chart.pointer_moved(PointerEvent { x: 512.0, y: 320.0 });
        }
        chart.tick(&mut scene);
    }

    let out = out_name(&path);
    render_scene_to_png(
        &scene,
        chart.surface().width as i32,
        chart.surface().height as i32,
        &out,
    )?;
    println!("Wrote {}", out.display());

    chart.stop();
    Ok(())
}

fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from(format!("target/out/{stem}_final_frame.png"))
}

/// Load (x, y) pairs from CSV. Header names are matched case-insensitively;
/// when no x column exists the row index is used. Rows without a parsable
/// y value are skipped.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };
    let i_x = idx(&["x", "time", "timestamp", "index", "date"]);
    let i_y = idx(&["y", "value", "close", "price"]).unwrap_or(headers.len().saturating_sub(1));

    let mut out = Vec::new();
    let mut row_index = 0_f64;
    for rec in rdr.records() {
        let rec = rec?;
        let parse =
            |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()) };
        let x = match i_x.and_then(parse) {
            Some(v) => v,
            None => {
                let v = row_index;
                row_index += 1.0;
                v
            }
        };
        if let Some(y) = parse(i_y) {
            out.push((x, y));
        }
    }
    Ok(out)
}
