//! Host-side request encoding.

use crate::axis;
use core_types::constants::servo;
use core_types::{FrameKind, ProtocolConfig};

/// Builds request frames for the device.
#[derive(Debug, Clone, Default)]
pub struct RequestEncoder {
    protocol: ProtocolConfig,
}

impl RequestEncoder {
    pub fn new(protocol: ProtocolConfig) -> Self {
        Self { protocol }
    }

    /// `?<axis>\r`
    pub fn query(&self, axis: char) -> Vec<u8> {
        let mut body = Vec::with_capacity(4);
        push_char(&mut body, axis);
        self.frame(FrameKind::Query, &body)
    }

    /// `!<axis>,<value>\r`. Whole values are written without a fraction.
    pub fn instruction(&self, axis: char, value: f32) -> Vec<u8> {
        let mut body = Vec::with_capacity(12);
        push_char(&mut body, axis);
        body.push(self.protocol.separator);
        body.extend_from_slice(value.to_string().as_bytes());
        self.frame(FrameKind::Instruction, &body)
    }

    /// Move request for the knob servos, clamped to the servo range.
    pub fn position(&self, degrees: i32) -> Vec<u8> {
        let degrees = degrees.clamp(servo::MIN_POSITION, servo::MAX_POSITION);
        self.instruction(axis::POSITION, degrees as f32)
    }

    /// Wrap `body` in the marker for `kind` and the terminator.
    pub fn frame(&self, kind: FrameKind, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(body.len() + 2);
        out.extend(self.protocol.marker_for(kind));
        out.extend_from_slice(body);
        out.push(self.protocol.terminator);
        out
    }
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::Parser;
    use framing::{CommandFramer, Framer};

    #[test]
    fn test_query_bytes() {
        assert_eq!(RequestEncoder::default().query('t'), b"?t\r");
    }

    #[test]
    fn test_instruction_bytes() {
        let enc = RequestEncoder::default();
        assert_eq!(enc.instruction('p', 90.0), b"!p,90\r");
        assert_eq!(enc.instruction('p', 12.5), b"!p,12.5\r");
    }

    #[test]
    fn test_custom_protocol_markers() {
        let enc = RequestEncoder::new(ProtocolConfig {
            query_marker: b'#',
            instruction_marker: b'$',
            terminator: b'\n',
            ..ProtocolConfig::default()
        });
        assert_eq!(enc.query('t'), b"#t\n");
        assert_eq!(enc.instruction('p', 5.0), b"$p,5\n");
        assert_eq!(enc.frame(FrameKind::None, b"raw"), b"raw\n");
    }

    #[test]
    fn test_position_is_clamped() {
        let enc = RequestEncoder::default();
        assert_eq!(enc.position(200), b"!p,180\r");
        assert_eq!(enc.position(-5), b"!p,0\r");
        assert_eq!(enc.position(75), b"!p,75\r");
    }

    #[test]
    fn test_encoded_request_reaches_parser() {
        let enc = RequestEncoder::default();
        let mut framer = CommandFramer::new();
        let mut wire = enc.position(120);
        wire.extend(enc.query('p'));

        let frames = framer.push(&wire);
        let parser = Parser::default();
        let cmds: Vec<_> = frames.iter().map(|f| parser.parse(f)).collect();
        assert_eq!(cmds[0].value, Some(120.0));
        assert_eq!(cmds[1].axis, 'p');
        assert_eq!(cmds[1].value, None);
    }
}
