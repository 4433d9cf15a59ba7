// Window + software drawing utilities.
// What this file gives the game:
// 1) A window that shows the frame buffer and reports the mouse.
// 2) Lines, filled bands and discs for the slopes and the cursor.
// 3) Texture stamping (with alpha) for the background layers and the skier.

use crate::config::Config;
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::input::ButtonTracker;
use crate::types::{FrameBuffer, Point, PointerInput, Texture};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    button: ButtonTracker,
}

impl Drawer {
    /// Open the game window, paced to the configured frame rate, cursor hidden.
    /// Visual: an empty 1920x1080 "Skier" window appears; the OS arrow is gone.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut window = Window::new(
            &config.window_title,
            config.window_width,
            config.window_height,
            WindowOptions::default(),
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(config.target_fps);
        window.set_cursor_visibility(false);
        Ok(Self { window, button: ButtonTracker::new() })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately shows the new frame (slopes, skier, trees).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Sample the mouse once for this frame.
    /// Positions outside the window are passed through; the terrain decides
    /// what to do with them.
    pub fn poll_pointer(&mut self) -> PointerInput {
        let position = self
            .window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| Point::new(x, y));
        let button = self.button.step(self.window.get_mouse_down(MouseButton::Left));
        PointerInput { position, button }
    }
}

/* ---------- Software drawing: pixels, lines, bands, discs, textures ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// 1-pixel line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_thin_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Solid filled circle.
/// Visual: the round white cursor that follows your mouse.
pub fn fill_disc(fb: &mut FrameBuffer, center: Point, radius: f32, color: u32) {
    if radius <= 0.0 { return; }
    let r = radius.ceil() as i32;
    let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
    let r2 = radius * radius;
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Line of the given width from p0 to p1.
/// Widths above one pixel are built by stamping discs along the segment.
/// Visual: the bright ridge line on top of each slope.
pub fn draw_line(fb: &mut FrameBuffer, p0: Point, p1: Point, width: f32, color: u32) {
    if width <= 1.0 {
        draw_thin_line(
            fb,
            p0.x.round() as i32, p0.y.round() as i32,
            p1.x.round() as i32, p1.y.round() as i32,
            color,
        );
        return;
    }
    let radius = width * 0.5;
    let dist = p0.distance(p1).max(1.0);
    let steps = dist.ceil() as i32; // one stamp per pixel of length
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        fill_disc(fb, p0.lerp(p1, t), radius, color);
    }
}

/// Fill everything below the segment a→b down to the bottom of the buffer.
/// Columns outside the buffer are skipped, so off-screen slopes cost nothing.
/// Visual: the snow under a slope, reaching the bottom edge of the window.
pub fn fill_band(fb: &mut FrameBuffer, a: Point, b: Point, color: u32) {
    let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
    let span = right.x - left.x;
    if span <= 0.0 { return; }

    let x_start = left.x.ceil().max(0.0) as i32;
    let x_end = right.x.floor().min(fb.width as f32 - 1.0) as i32;
    for x in x_start..=x_end {
        let t = (x as f32 - left.x) / span;
        let top = left.y + (right.y - left.y) * t;
        let y_start = top.round().max(0.0) as usize;
        for y in y_start..fb.height {
            fb.pixels[y * fb.width + x as usize] = color;
        }
    }
}

/// Stamp a texture with its top-left corner at `pos`.
/// Opaque pixels are copied, transparent ones skipped, the rest blended.
pub fn draw_texture(fb: &mut FrameBuffer, tex: &Texture, pos: Point, lut: &GammaLut) {
    let ox = pos.x.round() as i64;
    let oy = pos.y.round() as i64;

    // Clip the texture rectangle against the frame buffer once.
    let x0 = ox.max(0);
    let y0 = oy.max(0);
    let x1 = (ox + tex.width as i64).min(fb.width as i64);
    let y1 = (oy + tex.height as i64).min(fb.height as i64);
    if x0 >= x1 || y0 >= y1 { return; }

    for y in y0..y1 {
        let src_row = (y - oy) as usize * tex.width;
        let dst_row = y as usize * fb.width;
        for x in x0..x1 {
            let src = tex.pixels[src_row + (x - ox) as usize];
            let alpha = src >> 24;
            if alpha == 0 { continue; }
            let di = dst_row + x as usize;
            fb.pixels[di] = if alpha == 0xFF {
                src & 0x00FF_FFFF
            } else {
                lut.blend_over(fb.pixels[di], src)
            };
        }
    }
}
