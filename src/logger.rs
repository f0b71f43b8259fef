//! Log setup for the `scout` binary.
//!
//! Records go to stderr as `<timestamp> [LEVEL] - message`, so stdout only
//! carries results. The default level is `info`; `RUST_LOG` overrides it.

use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};

pub fn init() {
    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized.");
    }
}
