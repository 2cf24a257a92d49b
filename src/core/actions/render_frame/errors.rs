use crate::core::data::surface::PixelDims;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFrameError {
    DimensionMismatch {
        viewport: PixelDims,
        frame: PixelDims,
    },
    InvalidBlock {
        pixel_block: u32,
    },
    UnalignedBlock {
        dims: PixelDims,
        pixel_block: u32,
    },
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { viewport, frame } => {
                write!(
                    f,
                    "viewport is {}x{} but frame buffer is {}x{}",
                    viewport.width, viewport.height, frame.width, frame.height
                )
            }
            Self::InvalidBlock { pixel_block } => {
                write!(f, "pixel block {} is not a power of two", pixel_block)
            }
            Self::UnalignedBlock { dims, pixel_block } => {
                write!(
                    f,
                    "pixel block {} does not tile a {}x{} frame",
                    pixel_block, dims.width, dims.height
                )
            }
        }
    }
}

impl Error for RenderFrameError {}
