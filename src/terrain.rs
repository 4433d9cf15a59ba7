// The mountain: every slope the player has drawn, scrolling left together.
//
// Mouse rules (only while the pointer is inside the window):
//   press   -> start a new slope at the pointer
//   hold    -> extend it, but only when the pointer moved further right
//   release -> the slope is finished and just scrolls from now on

use crate::config::Config;
use crate::slope::Slope;
use crate::types::{FrameBuffer, PointerInput};

pub struct Terrain {
    slopes: Vec<Slope>, // append-only; the active slope is always last
    config: Config,
}

impl Terrain {
    pub fn new(config: &Config) -> Self {
        Self {
            slopes: Vec::new(),
            config: config.clone(),
        }
    }

    pub fn scroll_speed(&self) -> f32 {
        self.config.scroll_speed
    }

    pub fn slopes(&self) -> &[Slope] {
        &self.slopes
    }

    /// One frame: scroll, drop finished off-screen slopes, then apply the mouse.
    pub fn update(&mut self, input: &PointerInput) {
        for slope in &mut self.slopes {
            slope.scroll(self.config.scroll_speed);
        }
        self.evict_offscreen();

        let Some(p) = input.position else { return };
        if !self.config.contains(p) {
            return;
        }

        if input.button.pressed {
            // A release outside the window never reached us; close that slope now.
            if let Some(prev) = self.active_slope_mut() {
                prev.set_active(false);
            }
            let mut slope = Slope::new();
            slope.set_active(true);
            slope.add_point(p);
            self.slopes.push(slope);
            log::debug!("Slope #{} started at ({:.0}, {:.0})", self.slopes.len(), p.x, p.y);
        }

        if input.button.held {
            if let Some(slope) = self.active_slope_mut() {
                // Monotonic left-to-right authoring.
                if let Ok(last) = slope.last_point() {
                    if p.x > last.x {
                        slope.add_point(p);
                    }
                }
            }
        }

        if input.button.released {
            if let Some(slope) = self.active_slope_mut() {
                slope.set_active(false);
                log::debug!("Slope finished with {} points", slope.points().len());
            }
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        for slope in &self.slopes {
            slope.draw(fb);
        }
    }

    fn active_slope_mut(&mut self) -> Option<&mut Slope> {
        self.slopes.last_mut().filter(|s| s.is_active())
    }

    fn evict_offscreen(&mut self) {
        let before = self.slopes.len();
        self.slopes.retain(|s| !s.is_offscreen());
        let dropped = before - self.slopes.len();
        if dropped > 0 {
            log::debug!("Evicted {dropped} off-screen slope(s), {} left", self.slopes.len());
        }
    }
}
