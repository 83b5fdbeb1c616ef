//! Configuration for the dial clock application.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/dial/config.toml` on Linux). Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

/// Lowest accepted frame rate.
const MIN_FRAME_RATE: u32 = 1;

/// Highest accepted frame rate.
const MAX_FRAME_RATE: u32 = 120;

/// Largest accepted ball radius, in canvas pixels.
const MAX_BALL_RADIUS: i32 = 256;

/// Largest accepted ball step, in canvas pixels.
const MAX_BALL_STEP: i32 = 256;

/// Errors raised while reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the images and audio tracks.
    pub assets: Option<PathBuf>,
    /// Audio track file names, in play order, relative to `assets`.
    pub tracks: Vec<String>,
    /// Frames drawn per second.
    pub frame_rate: u32,
    /// Ball radius in canvas pixels.
    pub ball_radius: i32,
    /// Distance the ball moves per key press.
    pub ball_step: i32,
    /// Tallest the clock face may be drawn, in canvas pixels.
    pub face_height: u32,
    /// Log filter in `env_logger` syntax, e.g. "debug" or "dial=trace".
    pub log_level: Option<String>,
    /// Log file path. Defaults to `dial.log` in the data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: None,
            tracks: vec![
                "track1.mp3".to_string(),
                "track2.mp3".to_string(),
                "track3.mp3".to_string(),
            ],
            frame_rate: 30,
            ball_radius: 4,
            ball_step: 2,
            face_height: 48,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the configuration from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(contents)?;
        Ok(config.sanitized())
    }

    /// Clamp values that would break the render loop.
    fn sanitized(mut self) -> Self {
        self.frame_rate = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        self.ball_radius = self.ball_radius.clamp(1, MAX_BALL_RADIUS);
        self.ball_step = self.ball_step.clamp(1, MAX_BALL_STEP);
        self.face_height = self.face_height.max(1);
        self
    }

    /// Resolve the log file path, falling back to the data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            project_dirs().map(|dirs| dirs.data_local_dir().join("dial.log"))
        })
    }
}

/// Location of the configuration file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "dial")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.tracks.len(), 3);
        assert_eq!(config.tracks[0], "track1.mp3");
        assert!(config.assets.is_none());
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(
            r#"
            assets = "/opt/dial"
            tracks = ["intro.ogg"]
            ball_radius = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.assets, Some(PathBuf::from("/opt/dial")));
        assert_eq!(config.tracks, vec!["intro.ogg".to_string()]);
        assert_eq!(config.ball_radius, 6);
        assert_eq!(config.ball_step, 2);
        assert_eq!(config.frame_rate, 30);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_frame_rate_clamped() {
        assert_eq!(Config::parse("frame_rate = 0").unwrap().frame_rate, 1);
        assert_eq!(Config::parse("frame_rate = 1000").unwrap().frame_rate, 120);
    }

    #[test]
    fn test_ball_values_clamped() {
        let config = Config::parse("ball_radius = 2147483647\nball_step = 2147483647").unwrap();
        assert_eq!(config.ball_radius, 256);
        assert_eq!(config.ball_step, 256);

        let config = Config::parse("ball_radius = -5\nball_step = 0").unwrap();
        assert_eq!(config.ball_radius, 1);
        assert_eq!(config.ball_step, 1);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(Config::parse("frame_rate = \"fast\"").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("dial-config-test-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let name = format!("dial-config-test-{}.toml", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, "face_height = 64\nlog_level = \"debug\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.face_height, 64);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let name = format!("dial-config-bad-{}.toml", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, "face_height = [").unwrap();
        let result = Config::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/custom.log")),
            ..Config::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/custom.log")));
    }
}
