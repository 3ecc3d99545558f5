/// Module containing the error type shared by the binaries
pub mod error;
/// Module containing the sink the receiver hands samples to
pub mod handler;
/// Module containing the datagram receiver and the listen loop
pub mod receiver;
