/// A colour with channels in `[0, 1]`, used as a palette control point.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// Converts hue, saturation and lightness (all in `[0, 1]`) to RGB.
///
/// The lightness match offset is not added, so the result only carries the
/// chroma of the colour: full saturation at half lightness gives the pure
/// hue wheel.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h6 = hue.rem_euclid(1.0) * 6.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());

    match (h6.floor() as i64).rem_euclid(6) {
        0 => Rgb::new(c, x, 0.0),
        1 => Rgb::new(x, c, 0.0),
        2 => Rgb::new(0.0, c, x),
        3 => Rgb::new(0.0, x, c),
        4 => Rgb::new(x, 0.0, c),
        _ => Rgb::new(c, 0.0, x),
    }
}
