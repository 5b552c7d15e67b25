//! The logical-resolution software framebuffer

use crate::font;
use volley_core::Color;

/// A fixed-size RGBA8 pixel buffer.
///
/// The frame is created once at the game's logical resolution and never
/// resized; scaling to the window happens at presentation time. Pixels are
/// stored as packed little-endian RGBA words so the buffer can be uploaded
/// to the blit pipeline's `Rgba8UnormSrgb` texture without conversion.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

fn pack(color: Color) -> u32 {
    u32::from_le_bytes(color.to_bytes())
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pack(Color::BLACK); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel words, row-major from the top-left
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Fill the entire frame with one color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(pack(color));
    }

    /// Write a single pixel. Out-of-bounds coordinates are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = pack(color);
    }

    /// Read a pixel back, if it is in bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let bytes = self.pixels[(y as u32 * self.width + x as u32) as usize].to_le_bytes();
        Some(Color::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    /// Fill an axis-aligned rectangle, clipped to the frame bounds
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(self.width as i32);
        let y1 = (y + h as i32).min(self.height as i32);
        let packed = pack(color);
        for row in y0..y1 {
            for col in x0..x1 {
                self.pixels[(row as u32 * self.width + col as u32) as usize] = packed;
            }
        }
    }

    /// Draw a text string with the built-in 5×7 font, top-left at (x, y).
    ///
    /// Characters without a glyph render as blank. Pixels falling outside
    /// the frame are clipped.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(glyph) = font::glyph(ch) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                            self.put_pixel(pen_x + col as i32, y + row as i32, color);
                        }
                    }
                }
            }
            pen_x += font::GLYPH_ADVANCE as i32;
        }
    }
}
