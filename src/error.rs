// One error type for the whole game.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// A background image could not be opened or decoded
    #[error("Asset load error ({}): {source}", .path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Audio output or the music file is unavailable (never fatal)
    #[error("Audio error: {0}")]
    Audio(String),

    /// Asked a slope for its last point while it has none
    #[error("Slope has no points")]
    EmptyTerrain,
}
