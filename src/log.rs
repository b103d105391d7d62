// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the file subscriber behind `logf!`/`logd!`/`loge!`.
///
/// Level comes from `RUST_LOG` (default `info`). Safe to call more than once;
/// later calls and any IO failure leave logging as it was.
pub fn init() {
    let _ = fs::create_dir_all(STORE_DIR);
    let path = Path::new(STORE_DIR).join(LOG_FILE);

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .try_init();
}
