// Fixed game settings, built once in main and handed to every component.

use std::path::PathBuf;

use crate::types::Point;

/// Env var that points the game at a different asset folder.
pub const ASSET_DIR_ENV: &str = "SKIER_ASSET_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: usize,
    pub window_height: usize,
    pub window_title: String,
    /// How far the world moves left every frame (px/frame).
    pub scroll_speed: f32,
    /// How far the skier drops every frame when not on a slope (px/frame).
    pub fall_velocity: f32,
    pub skier_start: Point,
    pub target_fps: usize,
    pub asset_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1920,
            window_height: 1080,
            window_title: "Skier".to_string(),
            scroll_speed: 6.0,
            fall_velocity: 10.0,
            skier_start: Point::new(400.0, 20.0),
            target_fps: 60,
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl Config {
    /// Defaults, with the asset folder taken from `SKIER_ASSET_DIR` when set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(dir) = std::env::var(ASSET_DIR_ENV) {
            if !dir.is_empty() {
                cfg.asset_dir = PathBuf::from(dir);
            }
        }
        cfg
    }

    pub fn asset(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }

    /// True when `p` lies inside the window (edges included).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0
            && p.x <= self.window_width as f32
            && p.y >= 0.0
            && p.y <= self.window_height as f32
    }
}
