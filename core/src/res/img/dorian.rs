// Image dimensions: 200x180
// Black/White encoding: 1-bit, 8 pixels per byte, MSB first, row-major
// Bit values: 0=Black, 1=White

use crate::bitmap::buffer_size;

pub const WIDTH: u16 = 200;
pub const HEIGHT: u16 = 180;
pub const BUFFER_SIZE: usize = buffer_size(WIDTH, HEIGHT);

pub static DORIAN: &[u8; BUFFER_SIZE] = include_bytes!("./dorian.bin");
