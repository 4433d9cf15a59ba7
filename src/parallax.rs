// Background layers that slide left at their own speeds to fake depth.
// Each texture is drawn twice, side by side, so the loop has no visible seam.

use std::path::Path;

use crate::assets::load_texture_resized;
use crate::config::Config;
use crate::draw::draw_texture;
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, Point, Texture};

pub struct ParallaxEntry {
    texture: Texture,
    speed: f32,
    offset: Point,
    initial: Point,
}

impl ParallaxEntry {
    pub fn offset(&self) -> Point {
        self.offset
    }
}

pub struct ParallaxLayer {
    entries: Vec<ParallaxEntry>,
    speed_modifier: f32,
    size: (u32, u32), // every loaded image is stretched to the window
}

impl ParallaxLayer {
    pub fn new(config: &Config) -> Self {
        Self {
            entries: Vec::new(),
            speed_modifier: 1.0,
            size: (config.window_width as u32, config.window_height as u32),
        }
    }

    /// Load an image (resized to the window) and add it as the next layer.
    /// Visual: nothing yet; the layer shows up on the next `draw`, in front of earlier ones.
    pub fn add(&mut self, path: &Path, speed: f32, initial: Point) -> Result<(), Error> {
        let texture = load_texture_resized(path, self.size.0, self.size.1)?;
        self.push(texture, speed, initial);
        Ok(())
    }

    pub fn push(&mut self, texture: Texture, speed: f32, initial: Point) {
        self.entries.push(ParallaxEntry { texture, speed, offset: initial, initial });
    }

    pub fn entries(&self) -> &[ParallaxEntry] {
        &self.entries
    }

    pub fn set_speed_modifier(&mut self, modifier: f32) {
        self.speed_modifier = modifier;
    }

    pub fn update(&mut self) {
        for e in &mut self.entries {
            e.offset.x -= e.speed * self.speed_modifier;
            if e.offset.x <= -(e.texture.width as f32) {
                e.offset.x = e.initial.x;
            }
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer, lut: &GammaLut) {
        for e in &self.entries {
            draw_texture(fb, &e.texture, e.offset, lut);
            let seam = Point::new(e.offset.x + e.texture.width as f32, e.offset.y);
            draw_texture(fb, &e.texture, seam, lut);
        }
    }
}
