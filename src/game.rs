// Everything that lives for the whole run, and the fixed per-frame order:
// input -> terrain -> skier -> parallax, then draw back to front.

use crate::assets::{load_texture, vertical_gradient};
use crate::config::Config;
use crate::draw::{draw_texture, fill_disc};
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::parallax::ParallaxLayer;
use crate::skier::Skier;
use crate::terrain::Terrain;
use crate::types::{FrameBuffer, Point, PointerInput, RAY_WHITE, Texture};

const SKY_TOP: u32 = 0x00_66_BF_FF;    // sky blue
const SKY_BOTTOM: u32 = 0x00_D3_B0_83; // beige
const SKY_FRACTION: f32 = 0.65;
const CURSOR_RADIUS: f32 = 10.0;

/// (file, scroll speed, initial offset), far to near.
const BACK_LAYERS: [(&str, f32, (f32, f32)); 5] = [
    ("landscape_0004_5_clouds.png", 0.5, (0.0, -100.0)),
    ("landscape_0003_4_mountain.png", 2.0, (0.0, 0.0)),
    ("landscape_0002_3_trees.png", 3.0, (0.0, 0.0)),
    ("landscape_0001_2_trees.png", 4.0, (0.0, 0.0)),
    ("landscape_0000_1_trees.png", 5.0, (0.0, 0.0)),
];
const FRONT_LAYERS: [(&str, f32, (f32, f32)); 1] = [
    ("landscape_0001_2_trees_green.png", 7.0, (0.0, 350.0)),
];
const SUN_FILE: &str = "sun.png";

/// The decorative images: sky, sun, and the two parallax sets.
pub struct Scenery {
    sky: Texture,
    sun: Option<Texture>,
    back: ParallaxLayer,  // behind the slopes
    front: ParallaxLayer, // over the slopes and the skier
}

impl Scenery {
    /// Sky only; nothing read from disk.
    pub fn plain(config: &Config) -> Self {
        Self {
            sky: sky_texture(config),
            sun: None,
            back: ParallaxLayer::new(config),
            front: ParallaxLayer::new(config),
        }
    }

    /// Every file `load` reads from the asset folder.
    pub fn required_files() -> impl Iterator<Item = &'static str> {
        BACK_LAYERS
            .iter()
            .chain(FRONT_LAYERS.iter())
            .map(|(file, _, _)| *file)
            .chain(std::iter::once(SUN_FILE))
    }

    /// Load every image from the asset folder. Any missing file stops startup.
    pub fn load(config: &Config) -> Result<Self, Error> {
        log::info!("Loading scenery from {}", config.asset_dir.display());
        let mut scenery = Self::plain(config);
        for (file, speed, (x, y)) in BACK_LAYERS {
            scenery.back.add(&config.asset(file), speed, Point::new(x, y))?;
        }
        for (file, speed, (x, y)) in FRONT_LAYERS {
            scenery.front.add(&config.asset(file), speed, Point::new(x, y))?;
        }
        scenery.sun = Some(load_texture(&config.asset(SUN_FILE))?);
        log::info!(
            "Scenery ready: {} back layer(s), {} front layer(s)",
            scenery.back.entries().len(),
            scenery.front.entries().len()
        );
        Ok(scenery)
    }

    fn update(&mut self) {
        self.back.update();
        self.front.update();
    }
}

fn sky_texture(config: &Config) -> Texture {
    let h = (config.window_height as f32 * SKY_FRACTION) as usize;
    vertical_gradient(config.window_width, h, SKY_TOP, SKY_BOTTOM)
}

pub struct Game {
    terrain: Terrain,
    skier: Skier,
    scenery: Scenery,
    lut: GammaLut,
    cursor: Option<Point>,
    sun_pos: Point,
}

impl Game {
    pub fn new(config: &Config, scenery: Scenery) -> Self {
        Self {
            terrain: Terrain::new(config),
            skier: Skier::new(config),
            scenery,
            lut: GammaLut::new(),
            cursor: None,
            sun_pos: Point::new(
                config.window_width as f32 / 2.0 - 128.0,
                config.window_height as f32 / 2.0,
            ),
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn skier(&self) -> &Skier {
        &self.skier
    }

    /// Advance one frame. The order matters: the skier must see this frame's terrain.
    pub fn update(&mut self, input: &PointerInput) {
        self.cursor = input.position;
        self.terrain.update(input);
        self.skier.update(&self.terrain);
        self.scenery.update();
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        fb.clear(0);
        draw_texture(fb, &self.scenery.sky, Point::ZERO, &self.lut);
        if let Some(sun) = &self.scenery.sun {
            draw_texture(fb, sun, self.sun_pos, &self.lut);
        }
        self.scenery.back.draw(fb, &self.lut);
        self.terrain.draw(fb);
        self.skier.draw(fb, &self.lut);
        if let Some(p) = self.cursor {
            fill_disc(fb, p, CURSOR_RADIUS, RAY_WHITE);
        }
        self.scenery.front.draw(fb, &self.lut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonState;

    fn small_config() -> Config {
        Config { window_width: 800, window_height: 600, ..Config::default() }
    }

    #[test]
    fn load_fails_without_assets() {
        let cfg = Config { asset_dir: "no/such/dir".into(), ..small_config() };
        assert!(matches!(Scenery::load(&cfg), Err(Error::AssetLoad { .. })));
    }

    #[test]
    fn required_files_lists_every_image() {
        let files: Vec<_> = Scenery::required_files().collect();
        assert_eq!(files.len(), 7);
        assert!(files.contains(&"sun.png"));
        assert!(files.contains(&"landscape_0004_5_clouds.png"));
        assert!(files.contains(&"landscape_0001_2_trees_green.png"));
    }

    #[test]
    fn skier_sees_terrain_from_the_same_frame() {
        let cfg = Config { scroll_speed: 0.0, ..small_config() };
        let mut game = Game::new(&cfg, Scenery::plain(&cfg));
        let held = |x: f32, pressed| PointerInput {
            position: Some(Point::new(x, 40.0)),
            button: ButtonState { pressed, held: true, released: false },
        };
        game.update(&held(300.0, true));
        // skier falls 20 -> 30; the new point brackets x=400 on this very frame
        game.update(&held(500.0, false));
        assert_eq!(game.skier().position().y, 40.0);
    }

    #[test]
    fn draw_puts_cursor_on_top_of_sky() {
        let cfg = small_config();
        let mut game = Game::new(&cfg, Scenery::plain(&cfg));
        game.update(&PointerInput { position: Some(Point::new(100.0, 100.0)), ..Default::default() });
        let mut fb = FrameBuffer::new(cfg.window_width, cfg.window_height);
        game.draw(&mut fb);
        assert_eq!(fb.get(100, 100), Some(RAY_WHITE));
        assert_eq!(fb.get(700, 0), Some(SKY_TOP));
        // below the sky band nothing was drawn
        assert_eq!(fb.get(700, 590), Some(0));
    }
}
