// File: crates/meridian-examples/src/bin/lines.rs
// Summary: Minimal example that composes one frame and renders it to PNG.

use meridian_core::{ChartOptions, ContainerStyle, LiveChart, Rgb, Scene, Series, StaticContainers};

fn main() {
    // Build a simple line series
    let data = vec![
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let mut containers = StaticContainers::new();
    containers.insert("chart", ContainerStyle::new("640px", "360px"));

    let options = ChartOptions::new("chart", Rgb(0xFFFFFF))
        .with_series(vec![Series::with_data("line", Rgb(0x2078C8), data)]);
    let mut chart = LiveChart::create(options, &containers).expect("setup");
    chart.start();

    let mut scene = Scene::new();
    chart.tick(&mut scene);

    let out = std::path::PathBuf::from("target/out/example_lines.png");
    meridian_render_skia::render_scene_to_png(&scene, 640, 360, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
