//! Drawing surface primitives

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color with float alpha, as CSS `rgba()` takes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A 2D raster target sized to the viewport
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        assert_eq!(Rgba::new(255, 0, 0, 0.5).to_css(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(
            Rgba::new(0, 102, 255, 1.0).with_alpha(0.1).to_css(),
            "rgba(0, 102, 255, 0.1)"
        );
    }
}
