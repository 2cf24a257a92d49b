use crate::core::palette::hsl::{Rgb, hsl_to_rgb};
use rand::Rng;

pub const SEED_SATURATION: f64 = 1.0;
pub const SEED_LIGHTNESS: f64 = 0.5;

/// `count` equally spaced hues followed by the black closing control point.
#[must_use]
pub fn rainbow_seeds(count: usize) -> Vec<Rgb> {
    let count = count.max(1);

    close_with_black(
        (0..count).map(|i| hsl_to_rgb(i as f64 / count as f64, SEED_SATURATION, SEED_LIGHTNESS)),
    )
}

/// `count` random hues followed by the black closing control point.
pub fn random_seeds<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Rgb> {
    let count = count.max(1);

    close_with_black(
        (0..count).map(|_| hsl_to_rgb(rng.gen_range(0.0..1.0), SEED_SATURATION, SEED_LIGHTNESS)),
    )
}

fn close_with_black(hues: impl Iterator<Item = Rgb>) -> Vec<Rgb> {
    hues.chain(std::iter::once(Rgb::BLACK)).collect()
}
