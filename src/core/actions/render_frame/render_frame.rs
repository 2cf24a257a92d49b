use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::actions::render_frame::errors::RenderFrameError;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;

/// Iteration budget for a view of the given half width.
///
/// Grows with `-scale * ln(half_width)` as the view zooms in and never drops
/// below `min_iterations`.
#[must_use]
pub fn max_iterations_for(half_width: f64, min_iterations: u32, scale: f64) -> u32 {
    let min_iterations = min_iterations.max(1);
    let scaled = (-scale * half_width.ln()).round();

    if scaled.is_finite() && scaled > f64::from(min_iterations) {
        scaled.min(f64::from(u32::MAX)) as u32
    } else {
        min_iterations
    }
}

/// Fills `frame` with one sample per `pixel_block` x `pixel_block` block.
///
/// Blocks are traversed row-major from the top-left of the viewport. Each
/// block takes the colour of the plane point under its top-left pixel, so a
/// coarse frame agrees with the full-detail frame at every block origin.
pub fn render_frame<A, M>(
    viewport: &Viewport,
    pixel_block: u32,
    algorithm: &A,
    colour_map: &M,
    frame: &mut FrameBuffer,
) -> Result<(), RenderFrameError>
where
    A: EscapeAlgorithm,
    M: ColourMap,
{
    let dims = viewport.dims();

    if frame.dims() != dims {
        return Err(RenderFrameError::DimensionMismatch {
            viewport: dims,
            frame: frame.dims(),
        });
    }

    if !pixel_block.is_power_of_two() {
        return Err(RenderFrameError::InvalidBlock { pixel_block });
    }

    if !dims.is_aligned_to(pixel_block) {
        return Err(RenderFrameError::UnalignedBlock { dims, pixel_block });
    }

    let width = dims.width as usize;
    let block = pixel_block as usize;
    let max_iterations = algorithm.max_iterations();
    let origin = viewport.plane_top_left();
    let step_x = f64::from(pixel_block) * viewport.pixel_step_x();
    let step_y = f64::from(pixel_block) * viewport.pixel_step_y();

    for (block_y, band) in frame.pixels_mut().chunks_exact_mut(width * block).enumerate() {
        let imag = origin.imag + block_y as f64 * step_y;
        let (first_row, other_rows) = band.split_at_mut(width);

        for (block_x, run) in first_row.chunks_exact_mut(block).enumerate() {
            let real = origin.real + block_x as f64 * step_x;
            let value = algorithm.escape(Complex::new(real, imag));

            run.fill(colour_map.argb(value, max_iterations));
        }

        for row in other_rows.chunks_exact_mut(width) {
            row.copy_from_slice(first_row);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::PixelDims;
    use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape};
    use crate::core::palette::palette::Palette;
    use crate::core::palette::seeds::rainbow_seeds;

    /// Encodes the escape value itself so tests can read samples back.
    struct StubValueMap;

    impl ColourMap for StubValueMap {
        fn argb(&self, value: f64, _max_iterations: u32) -> u32 {
            (value * 1000.0) as u32
        }
    }

    /// Encodes the sample coordinate so tests can check where blocks sampled.
    struct StubCoordinateAlgorithm;

    impl EscapeAlgorithm for StubCoordinateAlgorithm {
        fn escape(&self, c: Complex) -> f64 {
            (c.real + 10.0) * 100.0 + (c.imag + 10.0)
        }

        fn max_iterations(&self) -> u32 {
            1
        }
    }

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(Complex::new(-0.5, 0.0), 3.0, PixelDims::new(width, height)).unwrap()
    }

    #[test]
    fn test_max_iterations_has_floor_of_minimum() {
        assert_eq!(max_iterations_for(3.0, 100, 100.0), 100);
        assert_eq!(max_iterations_for(1.0, 100, 100.0), 100);
        assert_eq!(max_iterations_for(0.5, 100, 100.0), 100);
    }

    #[test]
    fn test_max_iterations_grows_when_zooming_in() {
        // -100 * ln(0.001) = 690.78
        assert_eq!(max_iterations_for(0.001, 100, 100.0), 691);
        assert!(max_iterations_for(1e-10, 100, 100.0) > max_iterations_for(1e-5, 100, 100.0));
    }

    #[test]
    fn test_max_iterations_ignores_non_finite_width() {
        assert_eq!(max_iterations_for(0.0, 100, 100.0), 100);
        assert_eq!(max_iterations_for(f64::NAN, 100, 100.0), 100);
        assert_eq!(max_iterations_for(3.0, 0, 100.0), 1);
    }

    #[test]
    fn test_interior_and_exterior_samples_of_default_view() {
        let viewport = viewport(16, 16);
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();
        let mut frame = FrameBuffer::new(viewport.dims());

        render_frame(&viewport, 1, &algorithm, &StubValueMap, &mut frame).unwrap();

        // pixel (8, 8) samples c = -0.5 + 0i
        assert_eq!(frame.pixel(8, 8), Some(100_000));

        // pixel (15, 8) samples c = 2.125 + 0i, the sample nearest 2.5 + 0i
        let outside = f64::from(frame.pixel(15, 8).unwrap()) / 1000.0;
        assert!(outside < 5.0);
    }

    #[test]
    fn test_full_detail_matches_per_pixel_escape() {
        let viewport = viewport(16, 8);
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();
        let palette = Palette::build(&rainbow_seeds(32), 256).unwrap();
        let mut frame = FrameBuffer::new(viewport.dims());

        render_frame(&viewport, 1, &algorithm, &palette, &mut frame).unwrap();

        for y in 0..8 {
            for x in 0..16 {
                let expected = palette.color_for(escape(viewport.plane_point(x, y), 100), 100);
                assert_eq!(frame.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_coarse_blocks_replicate_their_origin_sample() {
        let viewport = viewport(16, 16);
        let mut fine = FrameBuffer::new(viewport.dims());
        render_frame(&viewport, 1, &StubCoordinateAlgorithm, &StubValueMap, &mut fine).unwrap();

        for block in [2, 4, 8, 16] {
            let mut coarse = FrameBuffer::new(viewport.dims());
            render_frame(&viewport, block, &StubCoordinateAlgorithm, &StubValueMap, &mut coarse)
                .unwrap();

            for y in 0..16 {
                for x in 0..16 {
                    let origin = fine.pixel(x - x % block, y - y % block);
                    assert_eq!(coarse.pixel(x, y), origin, "block {} pixel ({}, {})", block, x, y);
                }
            }
        }
    }

    #[test]
    fn test_every_pixel_is_written() {
        let viewport = viewport(24, 16);
        let mut frame = FrameBuffer::from_data(viewport.dims(), vec![0; 24 * 16]).unwrap();

        render_frame(&viewport, 8, &StubCoordinateAlgorithm, &StubValueMap, &mut frame).unwrap();

        assert!(frame.pixels().iter().all(|&p| p != 0));
    }

    #[test]
    fn test_rejects_mismatched_frame() {
        let viewport = viewport(16, 16);
        let mut frame = FrameBuffer::new(PixelDims::new(8, 8));

        let result = render_frame(&viewport, 1, &StubCoordinateAlgorithm, &StubValueMap, &mut frame);

        assert_eq!(
            result,
            Err(RenderFrameError::DimensionMismatch {
                viewport: PixelDims::new(16, 16),
                frame: PixelDims::new(8, 8),
            })
        );
    }

    #[test]
    fn test_rejects_non_power_of_two_block() {
        let viewport = viewport(12, 12);
        let mut frame = FrameBuffer::new(viewport.dims());

        for pixel_block in [0, 3, 6] {
            let result =
                render_frame(&viewport, pixel_block, &StubCoordinateAlgorithm, &StubValueMap, &mut frame);
            assert_eq!(result, Err(RenderFrameError::InvalidBlock { pixel_block }));
        }
    }

    #[test]
    fn test_rejects_block_that_does_not_tile_frame() {
        let viewport = viewport(12, 12);
        let mut frame = FrameBuffer::new(viewport.dims());

        let result = render_frame(&viewport, 8, &StubCoordinateAlgorithm, &StubValueMap, &mut frame);

        assert_eq!(
            result,
            Err(RenderFrameError::UnalignedBlock {
                dims: PixelDims::new(12, 12),
                pixel_block: 8,
            })
        );
    }
}
