//! # Audio Gauge
//!
//! A terminal visualiser for an external audio-analysis producer.
//!
//! The producer streams `"<loudness>,<pitch>"` datagrams over UDP.
//! Each datagram is parsed into a `Sample` and repainted as two fixed-width ASCII gauges.
//!
//! Refer to the included binaries for the visualiser itself and a sample sender.
/// Gauge arithmetic, frame formatting and the terminal renderer
pub mod render;
/// Socket handling, the listen loop and the error type
pub mod runtime;
/// The sample type and its wire format
pub mod sample;
/// Settings shared by the binaries
pub mod settings;

/// Initialises `env_logger` with an `info` default that `RUST_LOG` can override.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
}
