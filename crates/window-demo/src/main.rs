// File: crates/window-demo/src/main.rs
// Summary: Interactive host: winit supplies the per-frame tick and pointer events, softbuffer presents frames.

use meridian_core::{
    ChartOptions, ContainerStyle, LiveChart, PointerEvent, Rgb, Scene, Series, StaticContainers,
};
use meridian_render_skia::render_scene_to_rgba8;
use std::num::NonZeroU32;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The demo "page": one container entry, sized like the window we open.
    let mut containers = StaticContainers::new();
    containers.insert("chart", ContainerStyle::new("1024px", "640px"));

    let options = ChartOptions::new("chart", Rgb(0xFFFFFF)).with_series(demo_series());
    let Some(mut chart) = LiveChart::create(options, &containers) else {
        eprintln!("chart setup failed; run with RUST_LOG=warn for details");
        return;
    };
    chart.start();

    let width = chart.surface().width as u32;
    let height = chart.surface().height as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Meridian Chart — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(width as f64, height as f64))
        .with_resizable(false)
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut scene = Scene::new();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    // Teardown: the tick and pointer subscriptions die with the loop.
                    chart.stop();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // Window-local position is already surface-local here.
                    chart.pointer_moved(PointerEvent {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                chart.tick(&mut scene);

                surface
                    .resize(NonZeroU32::new(width).unwrap(), NonZeroU32::new(height).unwrap())
                    .ok();
                let rgba = match render_scene_to_rgba8(&scene, width as i32, height as i32) {
                    Ok((rgba, _, _, _)) => rgba,
                    Err(e) => {
                        eprintln!("frame render failed: {e:?}");
                        return;
                    }
                };
                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    // Softbuffer expects ARGB or BGRA depending on platform; BGRA is common.
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn demo_series() -> Vec<Series> {
    let wave: Vec<(f64, f64)> = (0..200)
        .map(|i| {
            let x = i as f64 * 0.05;
            (x, (x * 2.0).sin() * 4.0 + 5.0)
        })
        .collect();
    let steps: Vec<(f64, f64)> = (0..50)
        .map(|i| (i as f64, (i / 7) as f64 * 3.0 + 1.0))
        .collect();
    vec![
        Series::with_data("wave", Rgb(0x4090FF), wave),
        Series::with_data("steps", Rgb(0xE05050), steps),
    ]
}
