// File: crates/meridian-core/tests/frame.rs
// Purpose: Validate per-tick frame composition: paint order, cursor lifecycle, live reconfiguration.

use meridian_core::{
    ChartOptions, ContainerStyle, LiveChart, Point, PointerEvent, Rgb, RunState, Scene, Series,
    Shape, StaticContainers,
};

const BG: Rgb = Rgb(0xFFFFFF);

fn containers() -> StaticContainers {
    let mut c = StaticContainers::new();
    c.insert("chart", ContainerStyle::new("100px", "100px"));
    c
}

fn chart_with(series: Vec<Series>) -> LiveChart {
    let options = ChartOptions::new("chart", BG).with_series(series);
    let mut chart = LiveChart::create(options, &containers()).expect("setup");
    chart.start();
    chart
}

fn series(name: &str, data: Vec<(f64, f64)>) -> Series {
    Series::with_data(name, Rgb(0x4090FF), data)
}

#[test]
fn frame_is_background_axis_series_cursor() {
    let mut chart = chart_with(vec![
        series("a", vec![(0.0, 0.0), (1.0, 1.0)]),
        series("empty", Vec::new()),
        series("b", vec![(0.0, 2.0), (1.0, 3.0)]),
    ]);

    let mut scene = Scene::new();
    chart.tick(&mut scene);

    // no cursor yet: rect, axis, two polylines (empty series skipped)
    let shapes = scene.shapes();
    assert_eq!(shapes.len(), 4);
    let Shape::Rect { x, y, width, height, fill } = shapes[0] else {
        panic!("background is a rect")
    };
    assert_eq!((x, y, width, height), (0.0, 0.0, 100.0, 100.0));
    assert_eq!(fill, BG);
    assert!(matches!(shapes[1], Shape::Line { .. }));
    assert!(matches!(shapes[2], Shape::Polyline { stroke, .. } if stroke == Rgb(0x4090FF)));
    assert!(matches!(shapes[3], Shape::Polyline { .. }));

    // axis runs from the origin to the full width at the origin's height
    let origin = chart.origin();
    assert_eq!(origin, Point::new(10.0, 50.0));
    let Shape::Line { from, to, .. } = shapes[1] else { panic!("axis is a line") };
    assert_eq!(from, origin);
    assert_eq!(to, Point::new(100.0, origin.y));
}

#[test]
fn series_polyline_is_anchored_at_origin_with_y_inverted() {
    let mut chart = chart_with(vec![series("a", vec![(0.0, 0.0), (1.0, 10.0), (2.0, 5.0)])]);

    let mut scene = Scene::new();
    chart.tick(&mut scene);

    let origin = chart.origin();
    let Shape::Polyline { points, .. } = &scene.shapes()[2] else { panic!("series is a polyline") };

    // leading origin anchor, then origin + transformed with y flipped
    assert_eq!(points.len(), 4);
    assert_eq!(points[0], origin);
    assert_eq!(points[1], Point::new(origin.x, origin.y));
    assert_eq!(points[2], Point::new(origin.x + 50.0, origin.y - 100.0));
    assert_eq!(points[3], Point::new(origin.x + 100.0, origin.y - 50.0));
}

#[test]
fn cursor_appears_after_pointer_and_persists_across_frames() {
    let mut chart = chart_with(vec![series("a", vec![(0.0, 0.0), (1.0, 1.0)])]);
    let mut scene = Scene::new();

    chart.tick(&mut scene);
    assert_eq!(scene.len(), 3, "no cursor before the first pointer event");

    chart.pointer_moved(PointerEvent { x: 42.0, y: 17.0 });

    // the cursor line is redrawn at the same x on every subsequent frame
    for _ in 0..3 {
        chart.tick(&mut scene);
        assert_eq!(scene.len(), 4);
        let Shape::Line { from, to, .. } = scene.shapes()[3] else { panic!("cursor is a line") };
        assert_eq!(from, Point::new(42.0, 0.0));
        assert_eq!(to, Point::new(42.0, 100.0));
    }

    // a new event moves it; out-of-surface coordinates are accepted as-is
    chart.pointer_moved(PointerEvent { x: 130.0, y: -5.0 });
    chart.tick(&mut scene);
    let Shape::Line { from, .. } = scene.shapes()[3] else { panic!("cursor is a line") };
    assert_eq!(from.x, 130.0);
}

#[test]
fn replacing_series_between_ticks_changes_the_next_frame() {
    let mut chart = chart_with(vec![series("a", vec![(0.0, 0.0), (1.0, 1.0)])]);
    let mut scene = Scene::new();

    chart.tick(&mut scene);
    assert_eq!(scene.len(), 3);

    chart.set_series(vec![
        series("b", vec![(0.0, 0.0), (1.0, 1.0)]),
        series("c", vec![(0.0, 1.0), (1.0, 0.0)]),
        series("d", vec![(0.0, 2.0), (1.0, 2.0)]),
    ]);

    chart.tick(&mut scene);
    assert_eq!(scene.len(), 5, "next frame plots the replacement list");
}

#[test]
fn add_remove_and_background_accessors() {
    let mut chart = chart_with(vec![series("a", vec![(0.0, 0.0), (1.0, 1.0)])]);
    let mut scene = Scene::new();

    chart.add_series(series("b", vec![(0.0, 1.0), (1.0, 2.0)]));
    chart.tick(&mut scene);
    assert_eq!(scene.len(), 4);

    let removed = chart.remove_series("a").expect("a exists");
    assert_eq!(removed.name, "a");
    assert!(chart.remove_series("a").is_none());

    chart.set_background(Rgb(0x101214));
    chart.tick(&mut scene);
    assert_eq!(scene.len(), 3);
    assert!(matches!(scene.shapes()[0], Shape::Rect { fill, .. } if fill == Rgb(0x101214)));
}

#[test]
fn ticks_are_noops_outside_running() {
    let options = ChartOptions::new("chart", BG)
        .with_series(vec![series("a", vec![(0.0, 0.0), (1.0, 1.0)])]);
    let mut chart = LiveChart::create(options, &containers()).expect("setup");
    assert_eq!(chart.state(), RunState::Idle);

    let mut scene = Scene::new();
    chart.tick(&mut scene);
    assert!(scene.is_empty(), "idle chart does not compose frames");

    chart.start();
    assert_eq!(chart.state(), RunState::Running);
    chart.tick(&mut scene);
    assert_eq!(scene.len(), 3);

    chart.stop();
    assert_eq!(chart.state(), RunState::Stopped);

    // stopped is terminal: neither ticks nor a restart revive the chart
    chart.start();
    assert_eq!(chart.state(), RunState::Stopped);
    scene.clear();
    chart.tick(&mut scene);
    assert!(scene.is_empty());

    // pointer events after teardown are dropped
    chart.pointer_moved(PointerEvent { x: 1.0, y: 1.0 });
    assert!(chart.cursor().is_none());
}
