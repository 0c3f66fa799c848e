//! Layered App Icon Generator
//!
//! Draws the front, back and middle layers of a layered app icon at every
//! configured resolution and exports each one as a preview PNG and as an
//! imageset for manual assembly in Xcode.
//!
//! # Layers
//! - Front: white airplane with a drop shadow and an optional title
//! - Back: vertical sky gradient
//! - Middle: two translucent clouds

pub mod config;
pub mod generator;
pub mod layer;

pub use config::{Config, Resolution};
pub use generator::{Generator, ResolutionSummary, Summary, next_steps};
pub use layer::Layer;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info` when `RUST_LOG` is unset.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
