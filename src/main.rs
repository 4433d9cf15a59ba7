// How to play:
// • Hold Left Mouse and drag to the right: you draw a slope.
// • Release to finish it; the world keeps scrolling left.
// • The yellow skier lands on whatever is under it, or falls and wraps.
// • ESC or closing the window quits.

use std::time::{Duration, Instant};

use slope_skier::draw::Drawer;
use slope_skier::config::ASSET_DIR_ENV;
use slope_skier::types::FrameBuffer;
#[cfg(feature = "music")]
use slope_skier::audio::{MUSIC_FILE, Music};
use slope_skier::{Config, Error, Game, Scenery};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!(
        "Starting \"{}\" at {}x{}, {} fps",
        config.window_title, config.window_width, config.window_height, config.target_fps
    );

    /* --- Window + assets ---
       A missing background image is fatal; nothing sensible to show without it. */
    let mut drawer = Drawer::new(&config)?;
    let scenery = Scenery::load(&config).inspect_err(|_| {
        log::error!(
            "Put {} in {} (or point {} at the folder that has them)",
            Scenery::required_files().collect::<Vec<_>>().join(", "),
            config.asset_dir.display(),
            ASSET_DIR_ENV
        );
    })?;
    let mut game = Game::new(&config, scenery);

    #[cfg(feature = "music")]
    let mut music = Music::open(&config.asset(MUSIC_FILE))
        .inspect_err(|e| log::warn!("Playing without music: {e}"))
        .ok();

    // Reused every frame; this is what the window shows.
    let mut screen = FrameBuffer::new(config.window_width, config.window_height);

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Input, 2) update in fixed order, 3) draw, 4) present (paced to target fps)
        let input = drawer.poll_pointer();
        #[cfg(feature = "music")]
        {
            if let Some(m) = music.as_mut() {
                m.update(&input);
            }
        }
        game.update(&input);
        game.draw(&mut screen);
        drawer.present(&screen)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::debug!(
                "FPS: {:.1} | slopes: {}",
                frames_this_second as f32 / secs,
                game.terrain().slopes().len()
            );
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("Window closed, bye");
    Ok(())
}
