//! View-frame measurement.
//!
//! Rendering code records the rectangle an element was drawn into under a
//! string key; later readers (the launch animation) look it up. Several
//! values under one key are fine: the last one recorded wins.

use std::collections::HashMap;

use ratatui::layout::Rect;

/// Rectangle in cell units, kept as floats so animation math can be fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            f32::from(rect.x),
            f32::from(rect.y),
            f32::from(rect.width),
            f32::from(rect.height),
        )
    }
}

/// Space a measurement is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateSpace {
    /// Terminal coordinates.
    Global,
    /// Relative to the origin of the given container.
    Local(Bounds),
}

/// Read `area` in `space` as a single-entry measurement under `key`.
pub fn measure(key: impl Into<String>, area: Rect, space: CoordinateSpace) -> Measurements {
    let global = Bounds::from(area);
    let bounds = match space {
        CoordinateSpace::Global => global,
        CoordinateSpace::Local(origin) => Bounds {
            x: global.x - origin.x,
            y: global.y - origin.y,
            ..global
        },
    };
    let mut measurements = Measurements::new();
    measurements.insert(key, bounds);
    measurements
}

/// Latest known bounds per key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    values: HashMap<String, Bounds>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, bounds: Bounds) {
        self.values.insert(key.into(), bounds);
    }

    pub fn get(&self, key: &str) -> Option<Bounds> {
        self.values.get(key).copied()
    }

    /// Fold `next` into `self`; on a shared key, `next` wins.
    pub fn merge(&mut self, next: Measurements) {
        self.values.extend(next.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
