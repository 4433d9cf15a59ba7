// Core types shared by the terrain, skier and drawing code.

/// Screen-space coordinate. x grows to the right, y grows downwards.
pub type Point = glam::Vec2;

// Palette (0x00RRGGBB, what minifb expects)
pub const LIGHT_GRAY: u32 = 0x00_C8_C8_C8;
pub const GRAY: u32 = 0x00_82_82_82;
pub const DARK_GRAY: u32 = 0x00_50_50_50;
pub const RAY_WHITE: u32 = 0x00_F5_F5_F5;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Read one pixel; `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// An image ready to be stamped onto the frame buffer.
/// Pixels are 0xAARRGGBB so transparent PNG areas can be skipped.
#[derive(Clone)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Texture {
    /// Single-color texture, handy for tests and placeholders.
    pub fn solid(width: usize, height: usize, argb: u32) -> Self {
        Self { width, height, pixels: vec![argb; width * height] }
    }
}

/// Pack RGBA bytes into 0xAARRGGBB.
#[inline]
pub fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// State of the pointer for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// `None` when the window does not know where the mouse is.
    pub position: Option<Point>,
    pub button: ButtonState,
}

/// Edges of the left mouse button for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub pressed: bool,  // went down this frame
    pub held: bool,     // is down now (true on the press frame too)
    pub released: bool, // went up this frame
}
