use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::UdpSocket;

use crate::{
    runtime::{error::VisualiserError, handler::SampleSink},
    sample::parser::{Sample, parse_sample},
};

/// Size of the receive buffer.
/// One slot is kept free, so payloads are capped one byte short of it.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Owns the bound datagram socket for the lifetime of the visualiser.
#[derive(Debug)]
pub struct Receiver {
    socket: UdpSocket,
    buffer: [u8; RECV_BUFFER_SIZE],
}

impl Receiver {
    /// Binds a datagram socket to `port` on all local IPv4 interfaces.
    ///
    /// # Errors
    ///
    /// Throws a `VisualiserError::Bind` if the socket cannot be created or bound.
    pub async fn bind(port: u16) -> Result<Self, VisualiserError> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .map_err(|source| VisualiserError::Bind { port, source })?;
        Ok(Self {
            socket,
            buffer: [0u8; RECV_BUFFER_SIZE],
        })
    }

    /// The address the socket is bound to.
    ///
    /// # Errors
    ///
    /// Throws a `VisualiserError::Io` if the socket cannot report its address.
    pub fn local_addr(&self) -> Result<SocketAddr, VisualiserError> {
        Ok(self.socket.local_addr()?)
    }

    /// Waits for the next datagram, parses it and hands the sample to `sink`.
    ///
    /// Returns `None` for a zero-length datagram, which is skipped without rendering.
    ///
    /// # Errors
    ///
    /// Throws a `VisualiserError::Receive` if the receive call fails.
    pub async fn process_next<S: SampleSink>(
        &mut self,
        sink: &mut S,
    ) -> Result<Option<Sample>, VisualiserError> {
        let (len, sender) = self
            .socket
            .recv_from(&mut self.buffer[..RECV_BUFFER_SIZE - 1])
            .await
            .map_err(VisualiserError::Receive)?;

        if len == 0 {
            log::trace!("Skipping empty datagram from {sender}");
            return Ok(None);
        }

        log::debug!("Received {len} bytes from {sender}");
        let sample = parse_sample(&self.buffer[..len]);
        sink.present(&sample);
        Ok(Some(sample))
    }

    /// Receives and presents samples forever.
    ///
    /// A failed receive is logged and the loop immediately waits for the next datagram.
    pub async fn listen<S: SampleSink>(&mut self, sink: &mut S) {
        loop {
            if let Err(e) = self.process_next(sink).await {
                log::error!("{e}");
            }
        }
    }
}
