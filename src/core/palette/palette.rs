use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palette::errors::PaletteError;
use crate::core::palette::hsl::Rgb;

/// Lookup table from normalized escape value to opaque ARGB colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    table: Vec<u32>,
}

impl Palette {
    /// Builds `total_colours` entries by piecewise-linear interpolation over
    /// the ordered `seeds`.
    ///
    /// Entry `i` sits at position `i * (seeds - 1) / total_colours`, which
    /// stays strictly below the last control point, so every entry has a
    /// following seed to blend towards.
    pub fn build(seeds: &[Rgb], total_colours: usize) -> Result<Self, PaletteError> {
        if total_colours < 2 {
            return Err(PaletteError::TooFewColours { total_colours });
        }

        if seeds.len() < 2 {
            return Err(PaletteError::TooFewSeeds { seeds: seeds.len() });
        }

        let last_segment = seeds.len() - 2;
        let span = (seeds.len() - 1) as f64;

        let table = (0..total_colours)
            .map(|i| {
                let t = i as f64 * span / total_colours as f64;
                let segment = (t.floor() as usize).min(last_segment);
                let d = t - segment as f64;

                to_colour(seeds[segment].lerp(seeds[segment + 1], d)).to_argb()
            })
            .collect();

        Ok(Self { table })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[u32] {
        &self.table
    }

    /// Table index for an escape value.
    ///
    /// Points that used the whole budget (`value >= max_iterations`) take the
    /// last entry. Escaped values are spread over the table by
    /// `total * (value - 1) / max_iterations`; values below one and NaN take
    /// the first entry.
    #[must_use]
    pub fn index_for(&self, value: f64, max_iterations: u32) -> usize {
        let max_iterations = max_iterations.max(1);
        let last = self.table.len().saturating_sub(1);

        if value >= f64::from(max_iterations) {
            return last;
        }

        let position =
            (self.table.len() as f64 * (value - 1.0) / f64::from(max_iterations)).floor();

        if position.is_nan() || position <= 0.0 {
            0
        } else if position >= last as f64 {
            last
        } else {
            position as usize
        }
    }

    #[must_use]
    pub fn color_for(&self, value: f64, max_iterations: u32) -> u32 {
        self.table[self.index_for(value, max_iterations)]
    }
}

impl ColourMap for Palette {
    fn argb(&self, value: f64, max_iterations: u32) -> u32 {
        self.color_for(value, max_iterations)
    }
}

fn to_colour(rgb: Rgb) -> Colour {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    Colour {
        r: channel(rgb.r),
        g: channel(rgb.g),
        b: channel(rgb.b),
    }
}
