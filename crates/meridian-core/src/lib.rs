// File: crates/meridian-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and per-frame composition.

pub mod chart;
pub mod container;
pub mod error;
pub mod scale;
pub mod scene;
pub mod series;
pub mod types;

pub use chart::{ChartOptions, LiveChart, RunState};
pub use container::{parse_css_px, ContainerLookup, ContainerStyle, StaticContainers};
pub use error::SetupError;
pub use scale::SeriesScale;
pub use scene::{Scene, Shape};
pub use series::Series;
pub use types::{Point, PointerEvent, Rgb, SurfaceSize};
