//! Viewport frame stories are rendered in.

use serde::{Deserialize, Serialize};

/// Fixed-height frame, capped at a fraction of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportFrame {
    /// Preferred height in logical pixels.
    pub height: f32,
    /// Maximum share of the viewport height, between 0 and 1.
    pub max_height_fraction: f32,
}

impl Default for ViewportFrame {
    fn default() -> Self {
        Self {
            height: 600.,
            max_height_fraction: 0.8,
        }
    }
}

impl ViewportFrame {
    /// Height of the frame for a viewport of the given height.
    pub fn resolved_height(&self, viewport_height: f32) -> f32 {
        let cap = viewport_height.max(0.) * self.max_height_fraction.clamp(0., 1.);
        self.height.min(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_viewport_uses_fixed_height() {
        let frame = ViewportFrame::default();
        assert_eq!(frame.resolved_height(1200.), 600.);
    }

    #[test]
    fn test_short_viewport_caps_height() {
        let frame = ViewportFrame::default();
        assert_eq!(frame.resolved_height(500.), 400.);
    }

    #[test]
    fn test_fraction_is_clamped() {
        let frame = ViewportFrame {
            height: 600.,
            max_height_fraction: 3.,
        };
        assert_eq!(frame.resolved_height(300.), 300.);
    }
}
