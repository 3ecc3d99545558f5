use thiserror::Error;

/// Represents the kind of error that can occur while receiving or sending samples.
#[derive(Error, Debug)]
pub enum VisualiserError {
    /// Binding the datagram socket failed, the visualiser cannot start.
    #[error("failed to bind UDP socket on port {port}: {source}")]
    Bind {
        /// The port that could not be bound.
        port: u16,
        /// The underlying socket error.
        source: std::io::Error,
    },

    /// A single receive call failed. The listen loop carries on after this one.
    #[error("receive failed: {0}")]
    Receive(std::io::Error),

    /// The settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// There was a generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisualiserError {
    /// Whether the error ends the process or only the current iteration of the listen loop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Receive(_))
    }
}
