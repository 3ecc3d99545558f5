//! # Sample sender
//!
//! Feeds the visualiser without a live audio producer.
//!
//! `sender pattern` plays the built-in test pattern.
//! `sender` forwards each line of standard input as one datagram.
//! Both modes finish by sending a silent sample so the loudness gauge drops back to empty.
use std::{
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    net::UdpSocket,
    time::sleep,
};

use audiogauge::{
    init_logging,
    runtime::error::VisualiserError,
    sample::pattern::{SILENCE_PAYLOAD, TEST_PATTERN},
    settings::Settings,
};

const PATTERN_STEP: Duration = Duration::from_millis(200);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), VisualiserError> {
    init_logging();
    let settings = Settings::load()?;

    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    // UDP is connectionless, connect only fixes the default destination for send().
    socket
        .connect(SocketAddr::from((Ipv4Addr::LOCALHOST, settings.port)))
        .await?;
    log::info!("Sending samples to 127.0.0.1:{}", settings.port);

    match std::env::args().nth(1).as_deref() {
        Some("pattern") => play_pattern(&socket).await?,
        Some(other) => log::warn!("Unknown mode {other:?}, expected \"pattern\" or no argument"),
        None => forward_stdin(&socket).await?,
    }

    socket.send(SILENCE_PAYLOAD.as_bytes()).await?;
    Ok(())
}

async fn play_pattern(socket: &UdpSocket) -> Result<(), VisualiserError> {
    for sample in TEST_PATTERN {
        log::debug!("Sending {sample}");
        socket.send(sample.to_payload().as_bytes()).await?;
        sleep(PATTERN_STEP).await;
    }
    Ok(())
}

async fn forward_stdin(socket: &UdpSocket) -> Result<(), VisualiserError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches(['\r', '\n']);
        socket.send(line.as_bytes()).await?;
    }
    Ok(())
}
