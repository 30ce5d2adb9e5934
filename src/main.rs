//! Stack Tower entry point
//!
//! Runs a headless session: the built-in player stacks blocks until it
//! misses or the frame cap is reached, one frame per `1/fps` (set `fps` to 0
//! to run as fast as possible). Pass a settings JSON path as the first
//! argument to override defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use stack_tower::platform::FramePacer;
    use stack_tower::{FrameStatus, Game, JsonFileStore, Settings};

    env_logger::init();
    log::info!("Stack Tower (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };
    if !settings.autoplay {
        log::warn!("Autoplay disabled and no input backend attached; nothing will drop");
    }

    let store = JsonFileStore::new(&settings.record_path);
    let max_frames = settings.max_frames;
    let mut pacer = FramePacer::new(settings.fps);
    let mut game = Game::new(settings, store);

    while game.state().is_running() && game.frames() < max_frames {
        pacer.wait();
        if game.frame(&[]) == FrameStatus::Quit {
            break;
        }
    }

    let scene = game.scene();
    println!("{}", scene.hud.score_line);
    if let Some(line) = &scene.hud.game_over_line {
        println!("{line}");
    }
    log::info!(
        "Tower height {} after {} frames",
        game.state().blocks().len(),
        game.frames()
    );

    game.shutdown();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds are driven by the page through the library API
}
