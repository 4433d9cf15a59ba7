// One hand-drawn piece of the mountain.
// Visual: a white ridge line with three stacked snow bands filling the
// ground below it down to the bottom of the window.

use crate::draw::{draw_line, fill_band};
use crate::error::Error;
use crate::types::{DARK_GRAY, FrameBuffer, GRAY, LIGHT_GRAY, Point, RAY_WHITE};

/// Finished slopes whose last point is left of this x are off-screen.
pub const CULL_X: f32 = -10.0;

const BAND_DEPTH: f32 = 30.0;
const BAND_COLORS: [u32; 3] = [LIGHT_GRAY, GRAY, DARK_GRAY];
const RIDGE_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slope {
    points: Vec<Point>, // authoring order, never reordered
    active: bool,       // still being drawn by a held mouse button
}

impl Slope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the empty, inactive state.
    pub fn begin(&mut self) {
        self.points.clear();
        self.active = false;
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Move the whole slope left by `dx` (the world scrolls, the skier doesn't).
    /// Visual: the slope slides left under the skier.
    pub fn scroll(&mut self, dx: f32) {
        for p in &mut self.points {
            p.x -= dx;
        }
    }

    pub fn last_point(&self) -> Result<Point, Error> {
        self.points.last().copied().ok_or(Error::EmptyTerrain)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Finished and scrolled past the left edge. Empty slopes count as gone.
    pub fn is_offscreen(&self) -> bool {
        if self.active {
            return false;
        }
        match self.last_point() {
            Ok(last) => last.x < CULL_X,
            Err(_) => true,
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        if self.is_empty() || self.is_offscreen() {
            return;
        }
        for seg in self.points.windows(2) {
            let (a, b) = (seg[0], seg[1]);
            // Later bands overwrite earlier ones, leaving 30px stripes.
            for (j, &color) in BAND_COLORS.iter().enumerate() {
                let drop = Point::new(0.0, j as f32 * BAND_DEPTH);
                fill_band(fb, a + drop, b + drop, color);
            }
            draw_line(fb, a, b, RIDGE_WIDTH, RAY_WHITE);
        }
    }
}
