use crate::core::data::colour::Colour;
use crate::core::data::surface::PixelDims;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    BoundsMismatch {
        expected_pixels: usize,
        buffer_pixels: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_pixels,
                buffer_pixels,
            } => {
                write!(
                    f,
                    "frame size {} pixels does not match buffer size {} pixels",
                    expected_pixels, buffer_pixels
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

pub type FrameBufferData = Vec<u32>;

/// A row-major frame of packed `0xAARRGGBB` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    dims: PixelDims,
    pixels: FrameBufferData,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(dims: PixelDims) -> Self {
        Self {
            dims,
            pixels: vec![Colour::default().to_argb(); dims.pixel_count()],
        }
    }

    pub fn from_data(dims: PixelDims, pixels: FrameBufferData) -> Result<Self, FrameBufferError> {
        if dims.pixel_count() != pixels.len() {
            return Err(FrameBufferError::BoundsMismatch {
                expected_pixels: dims.pixel_count(),
                buffer_pixels: pixels.len(),
            });
        }

        Ok(Self { dims, pixels })
    }

    #[must_use]
    pub fn dims(&self) -> PixelDims {
        self.dims
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }

        self.pixels
            .get(y as usize * self.dims.width as usize + x as usize)
            .copied()
    }
}
