//! Outbound replies.

use core_types::constants::{reply, thermo};
use core_types::{Responder, TransportError};
use std::io::Write;

/// Writes each payload as `<payload>` plus CR LF to any `Write` sink.
pub struct WrappingResponder<W> {
    sink: W,
}

impl<W: Write> WrappingResponder<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Responder for WrappingResponder<W> {
    fn respond(&mut self, payload: &str) -> Result<(), TransportError> {
        self.sink.write_all(&[reply::START])?;
        self.sink.write_all(payload.as_bytes())?;
        self.sink.write_all(&[reply::END])?;
        self.sink.write_all(reply::LINE_ENDING.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Servo position reply payload.
pub fn format_position(degrees: i32) -> String {
    degrees.to_string()
}

/// Temperature reply payload: right-aligned, fixed precision (`" 23.50"`).
pub fn format_temperature(celsius: f32) -> String {
    format!(
        "{:>width$.prec$}",
        celsius,
        width = thermo::REPLY_WIDTH,
        prec = thermo::REPLY_PRECISION
    )
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_wraps_payload() {
        let mut r = WrappingResponder::new(Vec::new());
        r.respond("90").unwrap();
        r.respond("ok").unwrap();
        assert_eq!(r.get_ref().as_slice(), b"<90>\r\n<ok>\r\n");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(23.5), " 23.50");
        assert_eq!(format_temperature(-100.0), "-100.00");
        assert_eq!(format_temperature(215.257), "215.26");
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0), "0");
        assert_eq!(format_position(180), "180");
    }
}
