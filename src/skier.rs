// The skier stays at a fixed x; the terrain slides under it.
// Each frame it looks for the two slope points around its x and either
// sits on that segment or keeps falling.

use crate::assets::radial_gradient;
use crate::config::Config;
use crate::draw::draw_texture;
use crate::gamma::GammaLut;
use crate::slope::Slope;
use crate::terrain::Terrain;
use crate::types::{FrameBuffer, Point, Texture};

const SPRITE_SIZE: usize = 64;
const SPRITE_INNER: u32 = 0xFF_FD_F9_00; // yellow
const SPRITE_OUTER: u32 = 0x00_00_00_00; // fully transparent

/// The two terrain points immediately left and right of an x position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub left: Point,
    pub right: Point,
}

/// Nearest points strictly left and right of `x` within one slope.
pub fn bracket_in_slope(slope: &Slope, x: f32) -> Option<Bracket> {
    let mut left: Option<Point> = None;
    let mut right: Option<Point> = None;
    for &p in slope.points() {
        if p.x > x {
            if right.is_none_or(|r| p.x < r.x) {
                right = Some(p);
            }
        } else if p.x < x && left.is_none_or(|l| p.x > l.x) {
            left = Some(p);
        }
    }
    Some(Bracket { left: left?, right: right? })
}

/// First bracket around `x`, skipping slopes already behind the skier.
pub fn find_bracket(terrain: &Terrain, x: f32) -> Option<Bracket> {
    terrain
        .slopes()
        .iter()
        .filter(|s| s.last_point().is_ok_and(|last| last.x >= 0.0))
        .find_map(|s| bracket_in_slope(s, x))
}

/// Is `point` on the segment a→b, give or take `tolerance` pixels?
/// Cross-product distance test, then a range check along the longer axis.
pub fn point_on_segment(point: Point, a: Point, b: Point, tolerance: f32) -> bool {
    let dc = point - a;
    let dl = b - a;
    let cross = dc.perp_dot(dl);
    if cross.abs() >= tolerance * dl.x.abs().max(dl.y.abs()) {
        return false;
    }
    if dl.x.abs() >= dl.y.abs() {
        let (lo, hi) = if dl.x > 0.0 { (a.x, b.x) } else { (b.x, a.x) };
        lo <= point.x && point.x <= hi
    } else {
        let (lo, hi) = if dl.y > 0.0 { (a.y, b.y) } else { (b.y, a.y) };
        lo <= point.y && point.y <= hi
    }
}

pub struct Skier {
    position: Point,
    velocity: f32,
    floor: f32, // past this y we wrap back to the top
    sprite: Texture,
}

impl Skier {
    pub fn new(config: &Config) -> Self {
        Self {
            position: config.skier_start,
            velocity: config.fall_velocity,
            floor: config.window_height as f32,
            sprite: radial_gradient(SPRITE_SIZE, SPRITE_SIZE, 0.5, SPRITE_INNER, SPRITE_OUTER),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Snap onto the terrain under us, or fall. Reads the terrain, never changes it.
    pub fn update(&mut self, terrain: &Terrain) {
        let landed = find_bracket(terrain, self.position.x).filter(|b| {
            log::trace!("L {:.1}; R {:.1}", b.left.x, b.right.x);
            let tolerance = (b.left.x - b.right.x).abs();
            point_on_segment(self.position, b.left, b.right, tolerance)
        });

        match landed {
            Some(b) => self.position.y = b.right.y,
            None => self.position.y += self.velocity,
        }

        // Arcade wrap, not a game over.
        if self.position.y > self.floor {
            self.position.y = 0.0;
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer, lut: &GammaLut) {
        let half = Point::splat(SPRITE_SIZE as f32 * 0.5);
        draw_texture(fb, &self.sprite, self.position - half, lut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ButtonState, PointerInput};

    fn slope_at_xs(xs: &[f32], y: f32) -> Slope {
        let mut s = Slope::new();
        for &x in xs {
            s.add_point(Point::new(x, y));
        }
        s
    }

    /// Draw finished slopes through the real mouse rules, with no scrolling.
    fn terrain_with_slopes(slopes: &[&[(f32, f32)]]) -> Terrain {
        let mut t = Terrain::new(&Config { scroll_speed: 0.0, ..Config::default() });
        for points in slopes {
            for (i, &(x, y)) in points.iter().enumerate() {
                t.update(&PointerInput {
                    position: Some(Point::new(x, y)),
                    button: ButtonState { pressed: i == 0, held: true, released: false },
                });
            }
            t.update(&PointerInput {
                position: Some(Point::new(0.0, 0.0)),
                button: ButtonState { pressed: false, held: false, released: true },
            });
        }
        t
    }

    fn terrain_with(points: &[(f32, f32)]) -> Terrain {
        terrain_with_slopes(&[points])
    }

    #[test]
    fn bracket_picks_nearest_neighbours() {
        let s = slope_at_xs(&[0.0, 100.0, 200.0], 500.0);
        let b = bracket_in_slope(&s, 150.0).unwrap();
        assert_eq!(b.left.x, 100.0);
        assert_eq!(b.right.x, 200.0);
    }

    #[test]
    fn no_bracket_beyond_slope_ends() {
        let s = slope_at_xs(&[0.0, 100.0, 200.0], 500.0);
        assert!(bracket_in_slope(&s, 250.0).is_none());
        assert!(bracket_in_slope(&s, -5.0).is_none());
    }

    #[test]
    fn point_exactly_on_vertex_is_not_a_side() {
        let s = slope_at_xs(&[0.0, 100.0, 200.0], 500.0);
        let b = bracket_in_slope(&s, 100.0).unwrap();
        assert_eq!((b.left.x, b.right.x), (0.0, 200.0));
    }

    #[test]
    fn find_bracket_needs_a_slope_around_x() {
        let t = terrain_with(&[(300.0, 500.0), (500.0, 500.0)]);
        assert!(find_bracket(&t, 400.0).is_some());
        assert!(find_bracket(&t, 600.0).is_none());
        assert!(find_bracket(&Terrain::new(&Config::default()), 400.0).is_none());
    }

    #[test]
    fn earlier_slope_wins_when_two_overlap() {
        let t = terrain_with_slopes(&[
            &[(300.0, 100.0), (500.0, 100.0)],
            &[(350.0, 700.0), (450.0, 700.0)],
        ]);
        assert_eq!(t.slopes().len(), 2);
        let b = find_bracket(&t, 400.0).unwrap();
        assert_eq!(b.left, Point::new(300.0, 100.0));
        assert_eq!(b.right, Point::new(500.0, 100.0));
    }

    #[test]
    fn later_slope_used_when_earlier_misses() {
        let t = terrain_with_slopes(&[
            &[(100.0, 100.0), (200.0, 100.0)],
            &[(350.0, 700.0), (450.0, 700.0)],
        ]);
        let b = find_bracket(&t, 400.0).unwrap();
        assert_eq!((b.left.y, b.right.y), (700.0, 700.0));
    }

    #[test]
    fn segment_test_matches_flat_and_steep_lines() {
        let a = Point::new(0.0, 100.0);
        let b = Point::new(100.0, 100.0);
        assert!(point_on_segment(Point::new(50.0, 140.0), a, b, 50.0));
        assert!(!point_on_segment(Point::new(50.0, 160.0), a, b, 50.0));
        assert!(!point_on_segment(Point::new(150.0, 100.0), a, b, 50.0));

        let steep_top = Point::new(0.0, 0.0);
        let steep_bottom = Point::new(10.0, 200.0);
        assert!(point_on_segment(Point::new(5.0, 100.0), steep_top, steep_bottom, 10.0));
        assert!(!point_on_segment(Point::new(5.0, 250.0), steep_top, steep_bottom, 10.0));
    }

    #[test]
    fn falls_without_terrain() {
        let cfg = Config::default();
        let mut skier = Skier::new(&cfg);
        skier.update(&Terrain::new(&cfg));
        assert_eq!(skier.position(), Point::new(400.0, 30.0));
    }

    #[test]
    fn lands_on_slope_under_it() {
        let t = terrain_with(&[(300.0, 500.0), (450.0, 520.0)]);
        let mut skier = Skier::new(&Config::default());
        skier.set_position(Point::new(400.0, 480.0));
        skier.update(&t);
        assert_eq!(skier.position().y, 520.0);
    }

    #[test]
    fn keeps_falling_when_far_above_slope() {
        let t = terrain_with(&[(300.0, 900.0), (450.0, 900.0)]);
        let mut skier = Skier::new(&Config::default());
        skier.update(&t);
        assert_eq!(skier.position().y, 30.0);
    }

    #[test]
    fn wraps_to_top_past_window_bottom() {
        let cfg = Config::default();
        let mut skier = Skier::new(&cfg);
        skier.set_position(Point::new(400.0, 1075.0));
        skier.update(&Terrain::new(&cfg));
        assert_eq!(skier.position().y, 0.0);
    }
}
