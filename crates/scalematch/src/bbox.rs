//! Axis-aligned candidate boxes and their overlap geometry.

use serde::{Deserialize, Serialize};

/// One candidate placement of the template within the screenshot.
///
/// `x`/`y` is the top-left corner in screenshot pixel coordinates; `width`
/// and `height` are the resized template dimensions at the scale that
/// produced the candidate. Candidates are plain values, never mutated after
/// emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge (`x + width`).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Box area in pixels.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Area of the axis-aligned intersection with `other`; zero when disjoint.
    pub fn intersection_area(&self, other: &BBox) -> u64 {
        let iw = self
            .right()
            .min(other.right())
            .saturating_sub(self.x.max(other.x));
        let ih = self
            .bottom()
            .min(other.bottom())
            .saturating_sub(self.y.max(other.y));
        iw as u64 * ih as u64
    }

    /// Box center `[x + width/2, y + height/2]`, truncated to whole pixels.
    pub fn center(&self) -> [u32; 2] {
        [self.x + self.width / 2, self.y + self.height / 2]
    }
}
