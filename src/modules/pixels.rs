/*
Pixel opacity sources for the per-pixel collision tests.

Any row-major buffer with one sample per pixel works: RGBA8 arrays straight
from `Image::get_image_data`, macroquad `Color`s, plain alpha bytes or bools.
A `PixelMask` packs the same information into one bit per pixel, which is
what you want to keep around per sprite:

    let mask = PixelMask::from_image(&image);
    if mask.get(x, y) == Some(true) { ... }

A sample is opaque when its alpha is non-zero.
*/

use macroquad::color::Color;
use macroquad::texture::Image;

use super::error::{check_buffer_len, CollisionError, Result};

pub trait Opacity {
    fn is_opaque(&self) -> bool;
}

impl Opacity for [u8; 4] {
    #[inline]
    fn is_opaque(&self) -> bool {
        self[3] != 0
    }
}

impl Opacity for Color {
    #[inline]
    fn is_opaque(&self) -> bool {
        self.a != 0.0
    }
}

impl Opacity for u8 {
    #[inline]
    fn is_opaque(&self) -> bool {
        *self != 0
    }
}

impl Opacity for bool {
    #[inline]
    fn is_opaque(&self) -> bool {
        *self
    }
}

/// Row-major opacity samples, one per pixel.
pub trait AlphaSource: Sync {
    fn sample_count(&self) -> usize;

    /// `false` for indices past the end.
    fn is_opaque(&self, index: usize) -> bool;
}

impl<P: Opacity + Sync> AlphaSource for [P] {
    #[inline]
    fn sample_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_opaque(&self, index: usize) -> bool {
        self.get(index).is_some_and(Opacity::is_opaque)
    }
}

impl<P: Opacity + Sync> AlphaSource for Vec<P> {
    #[inline]
    fn sample_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_opaque(&self, index: usize) -> bool {
        self.as_slice().is_opaque(index)
    }
}

/// One bit per pixel, row-major, most significant bit first (1 = opaque).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelMask {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl PixelMask {
    pub fn from_pixels<P: Opacity>(width: usize, height: usize, pixels: &[P]) -> Result<Self> {
        check_buffer_len(width as i64, height as i64, pixels.len())?;
        Ok(Self {
            width,
            height,
            bits: pack(pixels),
        })
    }

    /// Builds a mask from tightly packed RGBA8 bytes.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(CollisionError::PixelBufferMismatch {
                width: width as i64,
                height: height as i64,
                expected: width * height,
                actual: bytes.len() / 4,
            });
        }
        let pixels: Vec<[u8; 4]> = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::from_pixels(width, height, &pixels)
    }

    pub fn from_image(image: &Image) -> Self {
        let width = image.width as usize;
        let height = image.height as usize;
        let data = image.get_image_data();
        Self {
            width,
            height,
            bits: pack(&data[..data.len().min(width * height)]),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Opacity at `(x, y)`, or `None` outside the mask.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.bit(y * self.width + x)
    }

    pub fn count_opaque(&self) -> usize {
        (0..self.width * self.height)
            .filter(|&idx| self.bit(idx) == Some(true))
            .count()
    }

    #[inline]
    fn bit(&self, idx: usize) -> Option<bool> {
        let byte = *self.bits.get(idx / 8)?;
        Some((byte >> (7 - (idx % 8))) & 1 == 1)
    }
}

fn pack<P: Opacity>(pixels: &[P]) -> Vec<u8> {
    let mut bits = vec![0u8; pixels.len().div_ceil(8)];
    for (idx, pixel) in pixels.iter().enumerate() {
        if pixel.is_opaque() {
            bits[idx / 8] |= 1 << (7 - (idx % 8));
        }
    }
    bits
}

impl AlphaSource for PixelMask {
    #[inline]
    fn sample_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    fn is_opaque(&self, index: usize) -> bool {
        index < self.sample_count() && self.bit(index).unwrap_or(false)
    }
}
