/// Pixel dimensions of the frame buffer the core renders into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelDims {
    pub width: u32,
    pub height: u32,
}

impl PixelDims {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_aligned_to(&self, block: u32) -> bool {
        block > 0 && self.width % block == 0 && self.height % block == 0
    }
}

/// Size of the host display surface as reported on startup and on resize.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Buffer dimensions for this surface.
    ///
    /// The width is capped at `max_width`, the height follows the surface
    /// aspect ratio, and both are floored to a multiple of `block` (never
    /// less than one block) so every detail level tiles the buffer exactly.
    #[must_use]
    pub fn align(&self, max_width: u32, block: u32) -> PixelDims {
        let block = block.max(1);

        if self.width == 0 || self.height == 0 {
            return PixelDims::new(block, block);
        }

        let width = self.width.min(max_width.max(block));
        let height = (u64::from(width) * u64::from(self.height) / u64::from(self.width))
            .min(u64::from(u32::MAX)) as u32;

        PixelDims::new(floor_to_block(width, block), floor_to_block(height, block))
    }
}

fn floor_to_block(value: u32, block: u32) -> u32 {
    (value - value % block).max(block)
}
