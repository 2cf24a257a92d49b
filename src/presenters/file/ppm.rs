use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary (P6) PPM images.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(frame, &mut file)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Encodes `frame` as P6, dropping the alpha channel.
pub fn write_ppm<W: Write>(frame: &FrameBuffer, out: &mut W) -> std::io::Result<()> {
    let dims = frame.dims();

    // P6 = binary RGB, then width, height and max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", dims.width, dims.height)?;
    writeln!(out, "255")?;

    let rgb: Vec<u8> = frame
        .pixels()
        .iter()
        .flat_map(|&argb| {
            let colour = Colour::from_argb(argb);
            [colour.r, colour.g, colour.b]
        })
        .collect();

    out.write_all(&rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::PixelDims;

    #[test]
    fn test_write_ppm_emits_header_and_rgb_triples() {
        let frame =
            FrameBuffer::from_data(PixelDims::new(2, 1), vec![0xff11_2233, 0xffaa_bbcc]).unwrap();
        let mut out = Vec::new();

        write_ppm(&frame, &mut out).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0x11, 0x22, 0x33, 0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let frame = FrameBuffer::new(PixelDims::new(4, 4));

        PpmFilePresenter::new().present(&frame, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), b"P6\n4 4\n255\n".len() + 4 * 4 * 3);

        let _ = std::fs::remove_dir_all(dir);
    }
}
