/// An opaque 8-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const OPAQUE_ALPHA: u32 = 0xff00_0000;

impl Colour {
    /// Packs the colour as `0xAARRGGBB` with a fully opaque alpha channel.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        OPAQUE_ALPHA | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks the colour channels of an ARGB word, dropping alpha.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xff) as u8,
            g: ((argb >> 8) & 0xff) as u8,
            b: (argb & 0xff) as u8,
        }
    }
}
