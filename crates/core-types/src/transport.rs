use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO Error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        TransportError::Io(e.to_string())
    }
}

/// Inbound side of the serial link.
///
/// Polled by the control loop; implementations must never block waiting for
/// data.
pub trait ByteSource {
    /// Is at least one byte ready to read?
    fn available(&self) -> bool;

    /// Take the next byte, or `None` if nothing is buffered.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Outbound side of the serial link.
///
/// Wraps a short textual payload as `<payload>` and transmits it.
pub trait Responder {
    fn respond(&mut self, payload: &str) -> Result<(), TransportError>;
}

/// In-memory source, mostly for tests and replaying captured traffic.
impl ByteSource for std::collections::VecDeque<u8> {
    fn available(&self) -> bool {
        !self.is_empty()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.pop_front()
    }
}
