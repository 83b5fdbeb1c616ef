//! Logger setup.
//!
//! The terminal belongs to the UI, so log records go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Once;

use dial_config::Config;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// The filter comes from `log_level` in the config, then `RUST_LOG`, then
/// defaults to `info`. Without a writable log file records are discarded.
pub fn init_logging(config: &Config) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.parse_filters(&filter_for(config, std::env::var("RUST_LOG").ok()));
        builder.write_style(env_logger::WriteStyle::Never);

        match config.log_path().as_deref().and_then(open_log_file) {
            Some(file) => builder.target(env_logger::Target::Pipe(Box::new(file))),
            None => builder.target(env_logger::Target::Pipe(Box::new(io::sink()))),
        };

        builder.init();

        log::debug!("logging initialized");
    });
}

/// Filter directives: `log_level` from the config, then `env`, then `info`.
fn filter_for(config: &Config, env: Option<String>) -> String {
    config
        .log_level
        .clone()
        .or(env)
        .unwrap_or_else(|| "info".to_string())
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
