use crate::Framer;
use core_types::constants::reply;
use log::{trace, warn};

/// Buffers device output and emits the payload of every `<...>` reply.
///
/// Bytes outside a reply (line endings, boot chatter) are dropped. The
/// firmware right-aligns numeric replies, so surrounding spaces are trimmed
/// from the payload. A reply longer than `reply::MAX_PAYLOAD_LEN` is
/// abandoned and the framer waits for the next `<`.
pub struct ReplyFramer {
    // Some while inside `<...>`
    buffer: Option<Vec<u8>>,
}

impl ReplyFramer {
    pub fn new() -> Self {
        Self { buffer: None }
    }

    /// Is a reply currently being collected?
    pub fn in_reply(&self) -> bool {
        self.buffer.is_some()
    }
}

impl Default for ReplyFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer for ReplyFramer {
    type Output = String;

    fn feed(&mut self, byte: u8) -> Option<String> {
        let Some(buf) = self.buffer.as_mut() else {
            if byte == reply::START {
                self.buffer = Some(Vec::with_capacity(16));
            } else {
                trace!("Skipping byte 0x{:02X} outside reply", byte);
            }
            return None;
        };

        if byte != reply::END {
            if buf.len() >= reply::MAX_PAYLOAD_LEN {
                warn!(
                    "Reply exceeds {} bytes without '>', dropping it",
                    reply::MAX_PAYLOAD_LEN
                );
                self.buffer = None;
            } else {
                buf.push(byte);
            }
            return None;
        }

        let bytes = std::mem::take(buf);
        self.buffer = None;
        Some(String::from_utf8_lossy(&bytes).trim_matches(' ').to_string())
    }

    fn reset(&mut self) {
        self.buffer = None;
    }

    fn name(&self) -> &'static str {
        "Reply"
    }
}
