//! # Audio Gauge visualiser
//!
//! Binds the sample port and repaints the loudness and pitch gauges for every datagram received.
//! Runs until the process is killed.
//!
//! Startup fails with a non-zero exit status when the socket cannot be bound,
//! or when `visualiser.toml` or a `VISUALISER_*` variable holds a value that cannot be read.
use audiogauge::{
    init_logging,
    render::terminal::TerminalRenderer,
    runtime::{error::VisualiserError, receiver::Receiver},
    settings::Settings,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), VisualiserError> {
    init_logging();
    log::info!("Visualiser starting");

    let settings = Settings::load().inspect_err(|e| log::error!("{e}"))?;
    let mut receiver = Receiver::bind(settings.port)
        .await
        .inspect_err(|e| log::error!("{e}"))?;
    log::info!("Listening on port {}", settings.port);

    let mut renderer = TerminalRenderer::stdout(&settings);
    receiver.listen(&mut renderer).await;
    Ok(())
}
