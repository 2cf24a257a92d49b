use crate::core::{
    actions::render_frame::render_frame::max_iterations_for,
    data::{
        complex::Complex,
        surface::PixelDims,
        viewport::{Viewport, ViewportError},
    },
};

const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
const DEFAULT_HALF_WIDTH: f64 = 3.0;
const DEFAULT_MIN_ITERATIONS: u32 = 100;
const DEFAULT_ITERATION_SCALE: f64 = 100.0;
const DEFAULT_TOTAL_COLOURS: usize = 2048;
const DEFAULT_SEED_HUES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub default_center: Complex,
    pub default_half_width: f64,
    pub min_iterations: u32,
    pub iteration_scale: f64,
    pub total_colours: usize,
    pub seed_hue_count: usize,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_half_width: DEFAULT_HALF_WIDTH,
            min_iterations: DEFAULT_MIN_ITERATIONS,
            iteration_scale: DEFAULT_ITERATION_SCALE,
            total_colours: DEFAULT_TOTAL_COLOURS,
            seed_hue_count: DEFAULT_SEED_HUES,
        }
    }
}

impl MandelbrotConfig {
    /// Copy with degenerate settings clamped to usable values.
    #[must_use]
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        let default_view_is_valid = self.default_center.is_finite()
            && self.default_half_width.is_finite()
            && self.default_half_width > 0.0;

        Self {
            default_center: if default_view_is_valid {
                self.default_center
            } else {
                defaults.default_center
            },
            default_half_width: if default_view_is_valid {
                self.default_half_width
            } else {
                defaults.default_half_width
            },
            min_iterations: self.min_iterations.max(1),
            iteration_scale: if self.iteration_scale.is_finite() && self.iteration_scale >= 0.0 {
                self.iteration_scale
            } else {
                defaults.iteration_scale
            },
            total_colours: self.total_colours.max(2),
            seed_hue_count: self.seed_hue_count.max(1),
        }
    }

    pub fn default_viewport(&self, dims: PixelDims) -> Result<Viewport, ViewportError> {
        Viewport::new(self.default_center, self.default_half_width, dims)
    }

    #[must_use]
    pub fn max_iterations(&self, half_width: f64) -> u32 {
        max_iterations_for(half_width, self.min_iterations, self.iteration_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_matches_reset_view() {
        let config = MandelbrotConfig::default();
        let viewport = config.default_viewport(PixelDims::new(16, 16)).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
        assert_eq!(viewport.half_width(), 3.0);
    }

    #[test]
    fn default_view_uses_minimum_iterations() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.max_iterations(config.default_half_width), 100);
    }

    #[test]
    fn validated_clamps_degenerate_values() {
        let config = MandelbrotConfig {
            default_half_width: -1.0,
            min_iterations: 0,
            iteration_scale: f64::NAN,
            total_colours: 1,
            seed_hue_count: 0,
            ..MandelbrotConfig::default()
        }
        .validated();

        assert_eq!(config.default_half_width, 3.0);
        assert_eq!(config.min_iterations, 1);
        assert_eq!(config.iteration_scale, 100.0);
        assert_eq!(config.total_colours, 2);
        assert_eq!(config.seed_hue_count, 1);
    }

    #[test]
    fn validated_keeps_sane_values() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.validated(), config);
    }
}
