//! Viewport metrics.

use serde::{Deserialize, Serialize};

/// Size of the visible page area, kept current by the host on resize.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Offset that moves an element centered at `item_center` (page
    /// coordinates, taken at `scroll_y`) to the middle of the viewport.
    pub fn center_offset(&self, item_center: f32, scroll_y: f32) -> f32 {
        self.height / 2.0 - item_center + scroll_y
    }

    /// Distance the detail container travels per navigation step:
    /// half the viewport height plus `margin` of the height.
    pub fn travel(&self, margin: f32) -> f32 {
        self.height / 2.0 + self.height * margin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
