//! Slope Skier: draw a mountain with the mouse and watch a skier ride it.
//!
//! The window and pixel presentation come from minifb ([`draw::Drawer`]);
//! everything else (slopes, terrain, skier, parallax) is plain data updated
//! once per frame in a fixed order by [`game::Game`].

pub mod assets;
pub mod audio;
pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod gamma;
pub mod input;
pub mod parallax;
pub mod skier;
pub mod slope;
pub mod terrain;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use game::{Game, Scenery};
pub use types::{ButtonState, Point, PointerInput};
