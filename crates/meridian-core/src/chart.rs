// File: crates/meridian-core/src/chart.rs
// Summary: LiveChart engine: setup, tick-driven frame composition, pointer-tracked cursor.

use tracing::warn;

use crate::container::{parse_css_px, ContainerLookup};
use crate::error::SetupError;
use crate::scale::SeriesScale;
use crate::scene::{Scene, Shape};
use crate::series::Series;
use crate::types::{
    Point, PointerEvent, Rgb, SurfaceSize, AXIS_COLOR, CURSOR_COLOR, ORIGIN_INSET_X,
};

/// Construction options. `container` names an entry in the host's
/// [`ContainerLookup`]; its inline style fixes the surface size.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub container: String,
    pub series: Vec<Series>,
    pub background: Rgb,
}

impl ChartOptions {
    /// Options with the required fields and no initial series.
    pub fn new(container: impl Into<String>, background: Rgb) -> Self {
        Self { container: container.into(), series: Vec::new(), background }
    }

    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        self.series = series;
        self
    }
}

/// Frame-loop lifecycle. `Stopped` is terminal: a stopped chart cannot be
/// restarted, and hosts drop their tick and pointer subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

/// The chart engine. Owns the series list, the fixed origin, and the
/// cursor position; composes one [`Scene`] per tick while running.
#[derive(Debug)]
pub struct LiveChart {
    series: Vec<Series>,
    background: Rgb,
    surface: SurfaceSize,
    origin: Point,
    cursor: Option<Point>,
    state: RunState,
}

impl LiveChart {
    /// Build a chart from options, resolving the container through the
    /// host. Configuration errors are logged and swallowed: the chart
    /// silently fails to come up and the only visible symptom is that
    /// nothing renders.
    pub fn create(options: ChartOptions, containers: &dyn ContainerLookup) -> Option<Self> {
        match Self::try_create(options, containers) {
            Ok(chart) => Some(chart),
            Err(err) => {
                warn!("chart setup aborted: {err}");
                None
            }
        }
    }

    /// Fallible setup; [`LiveChart::create`] is the logging wrapper.
    pub fn try_create(
        options: ChartOptions,
        containers: &dyn ContainerLookup,
    ) -> Result<Self, SetupError> {
        let style = containers
            .find(&options.container)
            .ok_or_else(|| SetupError::ContainerNotFound(options.container.clone()))?;

        let width = parse_css_px(&style.width).ok_or_else(|| SetupError::InvalidSize {
            id: options.container.clone(),
            value: style.width.clone(),
        })?;
        let height = parse_css_px(&style.height).ok_or_else(|| SetupError::InvalidSize {
            id: options.container.clone(),
            value: style.height.clone(),
        })?;

        let surface = SurfaceSize::new(width as f32, height as f32);
        Ok(Self {
            series: options.series,
            background: options.background,
            surface,
            // Fixed at setup: small left inset, vertical midpoint. Not
            // recomputed on resize.
            origin: Point::new(ORIGIN_INSET_X, surface.height / 2.0),
            cursor: None,
            state: RunState::Idle,
        })
    }

    /// Begin ticking. Only an idle chart starts; `Stopped` is terminal.
    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
        }
    }

    /// Tear down. Subsequent ticks and pointer events are no-ops.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn series(&self) -> &[Series] {
        self.series.as_slice()
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Remove the first series named `name`, returning it.
    pub fn remove_series(&mut self, name: &str) -> Option<Series> {
        let idx = self.series.iter().position(|s| s.name == name)?;
        Some(self.series.remove(idx))
    }

    /// Replace the whole series list; the very next tick plots the new
    /// list, no reconstruction needed.
    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    /// Record the latest surface-local pointer position. Coordinates are
    /// stored as-is: no clamping to surface bounds, no reset on leave.
    pub fn pointer_moved(&mut self, event: PointerEvent) {
        if self.state == RunState::Stopped {
            return;
        }
        self.cursor = Some(Point::new(event.x, event.y));
    }

    /// Compose one frame. Paint order on every tick: background, axis,
    /// series in configuration order, cursor. Outside `Running` this is a
    /// no-op and the scene is left untouched.
    pub fn tick(&mut self, scene: &mut Scene) {
        if self.state != RunState::Running {
            return;
        }
        scene.clear();
        scene.push(Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: self.surface.width,
            height: self.surface.height,
            fill: self.background,
        });
        draw_x_axis(scene, self.origin, self.surface);
        for series in &self.series {
            // Empty data has no extents; skip instead of plotting.
            let Some(scale) = SeriesScale::fit(&series.data, self.surface) else {
                continue;
            };
            plot_line_series(
                scene,
                self.origin,
                series.color,
                &scale.transform_all(&series.data),
            );
        }
        draw_cursor(scene, self.cursor, self.surface);
    }
}

// ---- frame helpers ----------------------------------------------------------

fn plot_line_series(scene: &mut Scene, origin: Point, color: Rgb, transformed: &[(f64, f64)]) {
    let mut points = Vec::with_capacity(transformed.len() + 1);
    points.push(origin);
    for &(tx, ty) in transformed {
        // Screen y decreases as data y increases: chart "up" is visually up.
        points.push(Point::new(origin.x + tx as f32, origin.y - ty as f32));
    }
    scene.push(Shape::Polyline { points, stroke: color });
}

fn draw_x_axis(scene: &mut Scene, origin: Point, surface: SurfaceSize) {
    scene.push(Shape::Line {
        from: origin,
        to: Point::new(surface.width, origin.y),
        stroke: AXIS_COLOR,
    });
}

fn draw_cursor(scene: &mut Scene, cursor: Option<Point>, surface: SurfaceSize) {
    if let Some(at) = cursor {
        scene.push(Shape::Line {
            from: Point::new(at.x, 0.0),
            to: Point::new(at.x, surface.height),
            stroke: CURSOR_COLOR,
        });
    }
}
