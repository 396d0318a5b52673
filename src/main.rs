//! Replays a gesture script against the map controls and logs where the
//! camera ends up after every step.
//!
//! ```text
//! RUST_LOG=debug map-controls scripts/zoom_and_pan.toml
//! ```

use std::{path::PathBuf, process::ExitCode};

use map_controls::replay::GestureScript;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        log::error!("usage: map-controls <script.toml>");
        return ExitCode::FAILURE;
    };

    let samples = match GestureScript::load(&path).and_then(|s| s.run()) {
        Ok(samples) => samples,
        Err(e) => {
            log::error!("{}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    for sample in &samples {
        log::info!(
            "step {:>3}: camera {:.3} zoom {:.3} -> {:.3} {:?}{}",
            sample.step,
            sample.position,
            sample.current_zoom,
            sample.target_zoom,
            sample.state,
            if sample.consumed { "" } else { " (ignored)" },
        );
    }
    ExitCode::SUCCESS
}
