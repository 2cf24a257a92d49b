//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;

/// Copies packed `0xAARRGGBB` pixels into an RGBA byte buffer, forcing alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_argb_to_rgba(src: &[u32], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&argb, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let colour = Colour::from_argb(argb);
        dst_pixel[0] = colour.r;
        dst_pixel[1] = colour.g;
        dst_pixel[2] = colour.b;
        dst_pixel[3] = 255;
    }
}
