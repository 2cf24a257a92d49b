use crate::core::flight::limits::FlightLimits;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

const DEFAULT_MAX_BUFFER_WIDTH: u32 = 800;

/// Settings for an [`ExplorerController`](crate::ExplorerController).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub mandelbrot: MandelbrotConfig,
    pub limits: FlightLimits,
    /// Frame buffers never grow wider than this, whatever the surface size.
    pub max_buffer_width: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            mandelbrot: MandelbrotConfig::default(),
            limits: FlightLimits::default(),
            max_buffer_width: DEFAULT_MAX_BUFFER_WIDTH,
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn validated(self) -> Self {
        let limits = self.limits.validated();

        Self {
            mandelbrot: self.mandelbrot.validated(),
            limits,
            max_buffer_width: self.max_buffer_width.max(limits.max_pixel_block),
        }
    }
}
