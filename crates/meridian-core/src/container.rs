// File: crates/meridian-core/src/container.rs
// Summary: Container lookup capability and inline-style size parsing.

use std::collections::HashMap;

/// Inline style sizing of a container, as CSS pixel strings ("640px").
#[derive(Clone, Debug)]
pub struct ContainerStyle {
    pub width: String,
    pub height: String,
}

impl ContainerStyle {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self { width: width.into(), height: height.into() }
    }
}

/// Resolves a container id to its style. Hosts decide where containers
/// live: a document, a window registry, a test fixture.
pub trait ContainerLookup {
    fn find(&self, id: &str) -> Option<ContainerStyle>;
}

/// HashMap-backed lookup for hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticContainers {
    entries: HashMap<String, ContainerStyle>,
}

impl StaticContainers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, style: ContainerStyle) {
        self.entries.insert(id.into(), style);
    }
}

impl ContainerLookup for StaticContainers {
    fn find(&self, id: &str) -> Option<ContainerStyle> {
        self.entries.get(id).cloned()
    }
}

/// Take the numeric prefix of a CSS pixel value: "640px" parses as 640.0.
/// Returns `None` when the value does not start with a number.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
