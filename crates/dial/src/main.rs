mod app;
mod logging;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use dial_audio::{Jukebox, Playlist};
use dial_config::Config;
use dial_render::{ClockAssets, FACE_FILE, MINUTE_HAND_FILE, SECOND_HAND_FILE};

use crate::app::App;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init_logging(&config);

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));
    let assets_dir = assets_dir_from(std::env::args_os().nth(1), &config, exe_dir);
    log::info!("using assets from {}", assets_dir.display());

    // Images are required; fail before the terminal switches screens.
    let assets = match ClockAssets::load(&assets_dir, config.face_height) {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("{err}");
            eprintln!("Error loading images: {err}");
            eprintln!(
                "Make sure {FACE_FILE}, {MINUTE_HAND_FILE}, and {SECOND_HAND_FILE} are in {}",
                assets_dir.display()
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let playlist = Playlist::new(&assets_dir, &config.tracks);
    let missing = playlist.missing();
    let notice = if missing.is_empty() {
        None
    } else {
        log::warn!(
            "the following music tracks are missing from {}: {}",
            assets_dir.display(),
            missing.join(", ")
        );
        Some(format!("Missing tracks: {}", missing.join(", ")))
    };

    let jukebox = Jukebox::new(dial_audio::default_backend(), playlist);

    let terminal = ratatui::init();
    let result = App::new(&config, assets, jukebox, notice).run(terminal);
    ratatui::restore();
    result.map(|()| ExitCode::SUCCESS)
}

/// Asset directory: first argument, then config, then the executable's
/// directory, then the working directory.
fn assets_dir_from(arg: Option<OsString>, config: &Config, exe_dir: Option<PathBuf>) -> PathBuf {
    arg.map(PathBuf::from)
        .or_else(|| config.assets.clone())
        .or(exe_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_assets() -> Config {
        Config {
            assets: Some(PathBuf::from("/opt/dial")),
            ..Config::default()
        }
    }

    #[test]
    fn test_argument_wins() {
        let dir = assets_dir_from(
            Some(OsString::from("/tmp/clock")),
            &config_with_assets(),
            Some(PathBuf::from("/usr/bin")),
        );
        assert_eq!(dir, PathBuf::from("/tmp/clock"));
    }

    #[test]
    fn test_config_before_exe_dir() {
        let dir = assets_dir_from(None, &config_with_assets(), Some(PathBuf::from("/usr/bin")));
        assert_eq!(dir, PathBuf::from("/opt/dial"));
    }

    #[test]
    fn test_exe_dir_fallback() {
        let dir = assets_dir_from(None, &Config::default(), Some(PathBuf::from("/usr/bin")));
        assert_eq!(dir, PathBuf::from("/usr/bin"));
    }

    #[test]
    fn test_working_dir_last_resort() {
        assert_eq!(assets_dir_from(None, &Config::default(), None), PathBuf::from("."));
    }
}
