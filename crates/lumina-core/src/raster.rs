//! CPU rasterizer. Pixels are independent, so rows are shaded in parallel
//! with rayon and no synchronisation beyond the final join.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::params::Uniforms;
use crate::shade::{shade, Coordinate};

/// An RGBA8 image, rows top to bottom, sRGB-encoded, alpha always 255.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: [0u8, 0, 0, 255].repeat(width as usize * height as usize),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = byte_offset(self.width, x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Re-shade every pixel into the existing buffer.
    pub fn render(&mut self, uniforms: &Uniforms, time: f32) {
        self.render_scaled(uniforms, time, 1.0);
    }

    /// As [`Frame::render`], for a frame that will be shown `pixel_scale`
    /// times larger than it is rendered.
    pub fn render_scaled(&mut self, uniforms: &Uniforms, time: f32, pixel_scale: f32) {
        let (width, height) = (self.width, self.height);
        self.pixels
            .par_chunks_mut(width as usize * 4)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let coord = Coordinate::from_pixel(x as u32, y as u32, width, height)
                        .with_pixel_scale(pixel_scale);
                    px.copy_from_slice(&to_rgba8(shade(uniforms, coord, time)));
                }
            });
    }
}

/// Index of the first byte of pixel (`x`, `y`). Computed in `usize` so
/// frames past 2³² bytes still address correctly.
fn byte_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

fn to_rgba8(c: glam::Vec3) -> [u8; 4] {
    let q = |v: f32| (v * 255.0 + 0.5) as u8;
    [q(c.x), q(c.y), q(c.z), 255]
}

/// Shade a fresh `width`×`height` frame.
pub fn render_frame(uniforms: &Uniforms, time: f32, width: u32, height: u32) -> Result<Frame> {
    render_frame_scaled(uniforms, time, width, height, 1.0)
}

/// Shade a `width`×`height` frame meant to be upscaled by `pixel_scale` for
/// display. Grain and other screen-space patterns then match a full-size
/// render of the same scene.
pub fn render_frame_scaled(
    uniforms: &Uniforms,
    time: f32,
    width: u32,
    height: u32,
    pixel_scale: f32,
) -> Result<Frame> {
    let mut frame = Frame::new(width, height)?;
    frame.render_scaled(uniforms, time, pixel_scale);
    log::debug!(
        "rendered {}x{} frame of {} at t={time:.3} (x{pixel_scale})",
        width,
        height,
        uniforms.mode
    );
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{LuminaMode, Mode, StudioMode};
    use crate::params::RenderParams;

    #[test]
    fn zero_dimensions_are_rejected() {
        let u = Uniforms::default();
        assert_eq!(
            render_frame(&u, 0.0, 0, 10),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(render_frame(&u, 0.0, 10, 0).is_err());
    }

    #[test]
    fn frame_has_one_opaque_pixel_per_cell() {
        let frame = render_frame(&Uniforms::default(), 0.5, 7, 5).unwrap();
        assert_eq!(frame.as_bytes().len(), 140);
        assert!(frame.as_bytes().chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn parallel_render_matches_direct_shading() {
        let u = RenderParams::default()
            .with_mode(Mode::Studio(StudioMode::Candy))
            .validate()
            .uniforms;
        let frame = render_frame(&u, 1.25, 16, 9).unwrap();
        for (x, y) in [(0, 0), (15, 8), (7, 4), (3, 6)] {
            let expected = to_rgba8(shade(&u, Coordinate::from_pixel(x, y, 16, 9), 1.25));
            assert_eq!(frame.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn unit_pixel_scale_matches_plain_render() {
        let u = RenderParams::default()
            .with_mode(Mode::Lumina(LuminaMode::Grainy))
            .validate()
            .uniforms;
        assert_eq!(
            render_frame_scaled(&u, 0.5, 12, 8, 1.0).unwrap(),
            render_frame(&u, 0.5, 12, 8).unwrap()
        );
    }

    #[test]
    fn scaled_preview_samples_output_pixel_space() {
        // Preview pixel (x, y) at half size lands within half an output
        // pixel of full-size pixel (2x, 2y).
        for (x, y) in [(0, 0), (5, 3), (19, 14)] {
            let preview = Coordinate::from_pixel(x, y, 20, 15).with_pixel_scale(2.0);
            let full = Coordinate::from_pixel(2 * x, 2 * y, 40, 30);
            assert!((preview.pixel - full.pixel).abs().max_element() <= 0.5 + 1e-4);
            assert_eq!(preview.uv, Coordinate::from_pixel(x, y, 20, 15).uv);
        }
    }

    #[test]
    fn scaled_grainy_frame_uses_scaled_coordinates() {
        let u = RenderParams::default()
            .with_mode(Mode::Lumina(LuminaMode::Grainy))
            .validate()
            .uniforms;
        let frame = render_frame_scaled(&u, 1.0, 16, 12, 3.0).unwrap();
        for (x, y) in [(0, 0), (15, 11), (8, 5)] {
            let coord = Coordinate::from_pixel(x, y, 16, 12).with_pixel_scale(3.0);
            assert_eq!(frame.pixel(x, y), to_rgba8(shade(&u, coord, 1.0)));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let u = RenderParams::default()
            .with_mode(Mode::Lumina(LuminaMode::Cosmic))
            .validate()
            .uniforms;
        let a = render_frame(&u, 2.0, 32, 32).unwrap();
        let b = render_frame(&u, 2.0, 32, 32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn byte_offset_does_not_wrap_for_huge_frames() {
        assert_eq!(byte_offset(7, 3, 2), (2 * 7 + 3) * 4);
        // 70 000 × 70 000 pixels overflows u32 well before the last row.
        let expected = (69_999usize * 70_000 + 69_999) * 4;
        assert_eq!(byte_offset(70_000, 69_999, 69_999), expected);
    }

    #[test]
    fn quantisation_rounds_to_nearest() {
        assert_eq!(to_rgba8(glam::Vec3::new(0.0, 0.5, 1.0)), [0, 128, 255, 255]);
    }
}
