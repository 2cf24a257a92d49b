use crate::core::data::complex::Complex;
use crate::core::data::surface::PixelDims;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonPositiveHalfWidth { half_width: f64 },
    NonFinite,
    EmptyDims { dims: PixelDims },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveHalfWidth { half_width } => {
                write!(f, "viewport half width must be positive: {}", half_width)
            }
            Self::NonFinite => {
                write!(f, "viewport center and half width must be finite")
            }
            Self::EmptyDims { dims } => {
                write!(
                    f,
                    "viewport needs at least one pixel each way: {}x{}",
                    dims.width, dims.height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane mapped onto the frame buffer.
///
/// The half height is derived from the half width and the pixel aspect
/// ratio, so pixels are always square in plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    half_width: f64,
    dims: PixelDims,
}

impl Viewport {
    pub fn new(center: Complex, half_width: f64, dims: PixelDims) -> Result<Self, ViewportError> {
        validate(center, half_width)?;
        validate_dims(dims)?;

        Ok(Self {
            center,
            half_width,
            dims,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_width * f64::from(self.dims.height) / f64::from(self.dims.width)
    }

    #[must_use]
    pub fn dims(&self) -> PixelDims {
        self.dims
    }

    /// Plane coordinate of the top-left pixel.
    #[must_use]
    pub fn plane_top_left(&self) -> Complex {
        self.center - Complex::new(self.half_width, self.half_height())
    }

    /// Plane distance between horizontally adjacent pixels.
    #[must_use]
    pub fn pixel_step_x(&self) -> f64 {
        2.0 * self.half_width / f64::from(self.dims.width)
    }

    /// Plane distance between vertically adjacent pixels.
    #[must_use]
    pub fn pixel_step_y(&self) -> f64 {
        2.0 * self.half_height() / f64::from(self.dims.height)
    }

    #[must_use]
    pub fn plane_point(&self, x: u32, y: u32) -> Complex {
        let top_left = self.plane_top_left();

        Complex::new(
            top_left.real + f64::from(x) * self.pixel_step_x(),
            top_left.imag + f64::from(y) * self.pixel_step_y(),
        )
    }

    pub fn set_dims(&mut self, dims: PixelDims) -> Result<(), ViewportError> {
        validate_dims(dims)?;

        self.dims = dims;
        Ok(())
    }

    pub fn reset(&mut self, center: Complex, half_width: f64) -> Result<(), ViewportError> {
        validate(center, half_width)?;

        self.center = center;
        self.half_width = half_width;
        Ok(())
    }

    pub fn pan_by(&mut self, delta: Complex) -> Result<(), ViewportError> {
        let center = self.center + delta;
        validate(center, self.half_width)?;

        self.center = center;
        Ok(())
    }

    /// Scales the half width by `factor`, leaving the viewport untouched when
    /// the result would not be a positive finite width.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), ViewportError> {
        let half_width = self.half_width * factor;
        validate(self.center, half_width)?;

        self.half_width = half_width;
        Ok(())
    }
}

fn validate(center: Complex, half_width: f64) -> Result<(), ViewportError> {
    if !center.is_finite() || !half_width.is_finite() {
        return Err(ViewportError::NonFinite);
    }

    if half_width <= 0.0 {
        return Err(ViewportError::NonPositiveHalfWidth { half_width });
    }

    Ok(())
}

fn validate_dims(dims: PixelDims) -> Result<(), ViewportError> {
    if dims.width == 0 || dims.height == 0 {
        return Err(ViewportError::EmptyDims { dims });
    }

    Ok(())
}
