#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightLimits {
    /// Pan speed in pixels per tick; converted to plane units at the current zoom.
    pub pan_step_pixels: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Per-tick scale while the pointer is held down.
    pub pointer_zoom_factor: f64,
    pub max_pixel_block: u32,
}

impl FlightLimits {
    /// Copy with degenerate settings clamped to usable values.
    #[must_use]
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        let factor_or = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };

        Self {
            pan_step_pixels: if self.pan_step_pixels.is_finite() {
                self.pan_step_pixels.abs()
            } else {
                defaults.pan_step_pixels
            },
            zoom_in_factor: factor_or(self.zoom_in_factor, defaults.zoom_in_factor),
            zoom_out_factor: factor_or(self.zoom_out_factor, defaults.zoom_out_factor),
            pointer_zoom_factor: factor_or(self.pointer_zoom_factor, defaults.pointer_zoom_factor),
            max_pixel_block: self
                .max_pixel_block
                .clamp(1, MAX_PIXEL_BLOCK_CEILING)
                .next_power_of_two()
                .min(MAX_PIXEL_BLOCK_CEILING),
        }
    }
}

const MAX_PIXEL_BLOCK_CEILING: u32 = 64;

impl Default for FlightLimits {
    fn default() -> Self {
        Self {
            pan_step_pixels: 5.0,
            zoom_in_factor: 0.95,
            zoom_out_factor: 1.05,
            pointer_zoom_factor: 0.975,
            max_pixel_block: 8,
        }
    }
}
