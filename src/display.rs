use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::BinaryColor,
    Drawable, Pixel,
};

use crate::font::{self, FONT, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Monochrome bitmap display with XOR sprite compositing.
pub trait Display {
    type Error;

    /// Turns every pixel off.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// XORs `sprite` (one byte per row, MSB leftmost) onto the screen at
    /// `(x, y)`. Returns `true` if any lit pixel was turned off.
    fn draw_sprite(&mut self, sprite: &[u8], x: u8, y: u8) -> Result<bool, Self::Error>;

    fn draw_digit(&mut self, digit: u8, x: u8, y: u8) -> Result<bool, Self::Error> {
        self.draw_sprite(font::glyph(digit), x, y)
    }

    /// Pushes a completed frame to the device, if it buffers.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// The 64x32 screen of the CHIP-8 machine.
pub type Chip8Screen = FrameBuffer<64, 32>;

/// Four chained 8x8 matrices.
pub type PanelScreen = FrameBuffer<32, 8>;

/// In-memory `W`x`H` bitmap, one `u64` per row with column 0 in bit 63.
///
/// Sprites wrap around to the opposite edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    rows: [u64; H],
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    const FITS: () = assert!(W > 0 && W <= 64 && H > 0);

    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        Self { rows: [0; H] }
    }

    const fn mask(x: usize) -> u64 {
        1 << (63 - x)
    }

    /// Whether the pixel at `(x, y)` is lit; out-of-range reads are off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < W && y < H && self.rows[y] & Self::mask(x) != 0
    }

    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Identifies the hex glyph occupying the 4x5 cell at `(x, y)`.
    ///
    /// Returns `None` for a blank cell or one that matches no glyph.
    pub fn glyph_at(&self, x: u8, y: u8) -> Option<u8> {
        let mut cell = [0u8; GLYPH_HEIGHT as usize];
        for (row, bits) in cell.iter_mut().enumerate() {
            let py = (y as usize + row) % H;
            for col in 0..GLYPH_WIDTH as usize {
                let px = (x as usize + col) % W;
                if self.pixel(px, py) {
                    *bits |= 0x80 >> col;
                }
            }
        }
        FONT.iter().position(|g| *g == cell).map(|digit| digit as u8)
    }

    pub(crate) fn xor_sprite(&mut self, sprite: &[u8], x: u8, y: u8) -> bool {
        let x0 = x as usize % W;
        let y0 = y as usize % H;
        let mut erased = false;

        for (row, bits) in sprite.iter().enumerate() {
            let py = (y0 + row) % H;
            for col in 0..8 {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let mask = Self::mask((x0 + col) % W);
                erased |= (self.rows[py] & mask) != 0;
                self.rows[py] ^= mask;
            }
        }

        erased
    }
}

impl PanelScreen {
    /// Splits the frame into the four 8x8 buffers of an FC16 chain,
    /// leftmost device first.
    pub fn fc16_devices(&self) -> [[u8; 8]; 4] {
        let mut device_buffers = [[0u8; 8]; 4];
        for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
            let shift = 56 - dev_idx * 8;
            for (r, byte) in buffer.iter_mut().enumerate() {
                *byte = ((self.rows[r] >> shift) & 0xFF) as u8;
            }
        }
        device_buffers
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Display for FrameBuffer<W, H> {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.rows = [0; H];
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: &[u8], x: u8, y: u8) -> Result<bool, Self::Error> {
        Ok(self.xor_sprite(sprite, x, y))
    }
}

impl<const W: usize, const H: usize> Drawable for FrameBuffer<W, H> {
    type Color = BinaryColor;
    type Output = ();

    /// Copies every pixel, lit or not, onto `target`.
    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter((0..H).flat_map(move |y| {
            (0..W).map(move |x| {
                Pixel(
                    Point::new(x as i32, y as i32),
                    BinaryColor::from(self.pixel(x, y)),
                )
            })
        }))
    }
}
