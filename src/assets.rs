// Turns image files (and a couple of generated gradients) into Textures.
// Everything here runs once at startup; a missing file is fatal.

use std::path::Path;

use image::{RgbaImage, imageops::FilterType};

use crate::error::Error;
use crate::types::{Texture, pack_argb};

/// Decode an image file as-is.
pub fn load_texture(path: &Path) -> Result<Texture, Error> {
    let img = open_rgba(path)?;
    log::debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(texture_from_rgba(&img))
}

/// Decode an image file and stretch it to `width` x `height` if it isn't already.
pub fn load_texture_resized(path: &Path, width: u32, height: u32) -> Result<Texture, Error> {
    let mut img = open_rgba(path)?;
    if img.width() != width || img.height() != height {
        log::debug!(
            "Resizing {} from {}x{} to {}x{}",
            path.display(), img.width(), img.height(), width, height
        );
        img = image::imageops::resize(&img, width, height, FilterType::Triangle);
    }
    Ok(texture_from_rgba(&img))
}

fn open_rgba(path: &Path) -> Result<RgbaImage, Error> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| Error::AssetLoad { path: path.to_path_buf(), source })
}

/// Repack an RGBA image into 0xAARRGGBB pixels.
pub fn texture_from_rgba(img: &RgbaImage) -> Texture {
    let pixels = img.pixels().map(|p| pack_argb(p[0], p[1], p[2], p[3])).collect();
    Texture { width: img.width() as usize, height: img.height() as usize, pixels }
}

/// Top-to-bottom gradient between two opaque 0x00RRGGBB colors.
/// Visual: the blue-to-beige sky behind the mountains.
pub fn vertical_gradient(width: usize, height: usize, top: u32, bottom: u32) -> Texture {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let t = if height > 1 { y as f32 / (height - 1) as f32 } else { 0.0 };
        let row = lerp_argb(top | 0xFF00_0000, bottom | 0xFF00_0000, t);
        pixels.extend(std::iter::repeat_n(row, width));
    }
    Texture { width, height, pixels }
}

/// Round glow: `inner` at the center, fading to `outer` at the edge.
/// `density` in [0,1] is the fraction of the radius that stays fully `inner`.
/// Visual: the soft yellow ball that is the skier.
pub fn radial_gradient(width: usize, height: usize, density: f32, inner: u32, outer: u32) -> Texture {
    let radius = width.min(height) as f32 * 0.5;
    let (cx, cy) = (width as f32 * 0.5, height as f32 * 0.5);
    let solid = radius * density;
    let fade = (radius * (1.0 - density)).max(f32::EPSILON);

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let t = ((d - solid) / fade).clamp(0.0, 1.0);
            pixels.push(lerp_argb(inner, outer, t));
        }
    }
    Texture { width, height, pixels }
}

/// Per-channel linear mix of two 0xAARRGGBB colors.
fn lerp_argb(a: u32, b: u32, t: f32) -> u32 {
    let ch = |shift: u32| {
        let ca = ((a >> shift) & 0xFF) as f32;
        let cb = ((b >> shift) & 0xFF) as f32;
        (ca + (cb - ca) * t).round().clamp(0.0, 255.0) as u32
    };
    (ch(24) << 24) | (ch(16) << 16) | (ch(8) << 8) | ch(0)
}
