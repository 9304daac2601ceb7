//! Built-in hex digit sprites.

pub const GLYPH_WIDTH: u8 = 4;
pub const GLYPH_HEIGHT: u8 = 5;

/// 0..F, five rows each, pixels in the high nibble.
pub const FONT: [[u8; GLYPH_HEIGHT as usize]; 16] = [
    [0xF0, 0x90, 0x90, 0x90, 0xF0], // 0
    [0x20, 0x60, 0x20, 0x20, 0x70], // 1
    [0xF0, 0x10, 0xF0, 0x80, 0xF0], // 2
    [0xF0, 0x10, 0xF0, 0x10, 0xF0], // 3
    [0x90, 0x90, 0xF0, 0x10, 0x10], // 4
    [0xF0, 0x80, 0xF0, 0x10, 0xF0], // 5
    [0xF0, 0x80, 0xF0, 0x90, 0xF0], // 6
    [0xF0, 0x10, 0x20, 0x40, 0x40], // 7
    [0xF0, 0x90, 0xF0, 0x90, 0xF0], // 8
    [0xF0, 0x90, 0xF0, 0x10, 0xF0], // 9
    [0xF0, 0x90, 0xF0, 0x90, 0x90], // A
    [0xE0, 0x90, 0xE0, 0x90, 0xE0], // B
    [0xF0, 0x80, 0x80, 0x80, 0xF0], // C
    [0xE0, 0x90, 0x90, 0x90, 0xE0], // D
    [0xF0, 0x80, 0xF0, 0x80, 0xF0], // E
    [0xF0, 0x80, 0xF0, 0x80, 0x80], // F
];

/// Colon between digit groups, one pixel wide.
pub const SEPARATOR: [u8; GLYPH_HEIGHT as usize] = [0x00, 0x80, 0x00, 0x80, 0x00];

/// Sprite for the low nibble of `digit`.
pub fn glyph(digit: u8) -> &'static [u8; GLYPH_HEIGHT as usize] {
    &FONT[(digit & 0x0F) as usize]
}
