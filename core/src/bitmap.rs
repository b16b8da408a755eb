//! Packed 1-bit-per-pixel bitmaps.
//!
//! Pixels are stored row-major as a continuous bit stream (bit index =
//! row * width + column), MSB first within each byte. Bit value 1 is white
//! (`BinaryColor::On`), 0 is black (`BinaryColor::Off`). The byte data
//! carries no dimensions; width and height come from the caller.

use alloc::vec;
use alloc::vec::Vec;
use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{OriginDimensions, Point, Size},
};
use log::trace;

/// Bytes needed to hold `width * height` pixels at 1 bit per pixel.
pub const fn buffer_size(width: u16, height: u16) -> usize {
    (width as usize * height as usize + 7) / 8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    OutOfRange { row: u16, column: u16 },
    SizeMismatch { expected: usize, actual: usize },
}

type Result<T> = core::result::Result<T, Error>;

/// Read-only view over a packed byte buffer with known dimensions.
#[derive(Clone, Copy)]
pub struct PackedBitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
}

impl<'a> PackedBitmap<'a> {
    /// Wraps `data`, rejecting any buffer whose length does not match the
    /// declared dimensions exactly.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Result<Self> {
        let expected = buffer_size(width, height);
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        trace!("Packed bitmap: {}x{}, {} bytes", width, height, expected);
        Ok(PackedBitmap {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Pixel at (row, column).
    pub fn pixel(&self, row: u16, column: u16) -> Result<BinaryColor> {
        if row >= self.height || column >= self.width {
            return Err(Error::OutOfRange { row, column });
        }
        let index = row as usize * self.width as usize + column as usize;
        let byte_index = index / 8;
        let bit_index = 7 - (index % 8);
        if (self.data[byte_index] >> bit_index) & 1 == 1 {
            Ok(BinaryColor::On)
        } else {
            Ok(BinaryColor::Off)
        }
    }

    /// Row-major iterator over all pixels.
    pub fn pixels(&self) -> PixelIter<'a> {
        PixelIter {
            bitmap: *self,
            index: 0,
        }
    }

    /// Decodes every pixel into `buffer`, one byte per pixel (0 or 1),
    /// row-major. `buffer` must hold at least `width * height` bytes.
    pub fn unpack_into(&self, buffer: &mut [u8]) -> Result<()> {
        let expected = self.width as usize * self.height as usize;
        if buffer.len() < expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        for (out, Pixel(_, color)) in buffer.iter_mut().zip(self.pixels()) {
            *out = color.is_on() as u8;
        }
        Ok(())
    }
}

impl OriginDimensions for PackedBitmap<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

pub struct PixelIter<'a> {
    bitmap: PackedBitmap<'a>,
    index: usize,
}

impl Iterator for PixelIter<'_> {
    type Item = Pixel<BinaryColor>;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.bitmap.width as usize;
        if self.index >= width * self.bitmap.height as usize {
            return None;
        }
        let byte_index = self.index / 8;
        let bit_index = 7 - (self.index % 8);
        let color = if (self.bitmap.data[byte_index] >> bit_index) & 1 == 1 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        };
        let point = Point::new((self.index % width) as i32, (self.index / width) as i32);
        self.index += 1;
        Some(Pixel(point, color))
    }
}

/// Packs a row-major pixel sequence into a fresh buffer, MSB first.
/// Inverse of [`PackedBitmap::pixels`]; trailing padding bits stay 0.
pub fn pack(pixels: impl IntoIterator<Item = BinaryColor>, width: u16, height: u16) -> Vec<u8> {
    let mut buffer = vec![0u8; buffer_size(width, height)];
    let total = width as usize * height as usize;
    for (index, color) in pixels.into_iter().take(total).enumerate() {
        if color == BinaryColor::On {
            buffer[index / 8] |= 1 << (7 - index % 8);
        }
    }
    buffer
}
