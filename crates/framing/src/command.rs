use crate::Framer;
use core_types::constants::protocol::MAX_FRAME_LEN;
use core_types::{CompletedFrame, FrameKind, ProtocolConfig};
use log::{debug, trace, warn};

/// Receive state machine for command frames.
///
/// Idle until a query or instruction marker arrives, then accumulates content
/// until the terminator. Stray bytes while idle are dropped. Content past
/// `max_frame_len` is discarded, so an oversized frame closes with exactly
/// its first `max_frame_len` bytes.
pub struct CommandFramer {
    config: ProtocolConfig,
    kind: FrameKind,
    // never longer than max_frame_len
    buffer: Vec<u8>,
    overflowed: bool,
}

impl CommandFramer {
    pub fn new() -> Self {
        Self::with_config(ProtocolConfig::default())
    }

    /// Framer for a custom link. The buffer grows on demand up to
    /// `max_frame_len`; run `ProtocolConfig::validate` first to reject
    /// colliding bytes.
    pub fn with_config(config: ProtocolConfig) -> Self {
        Self {
            buffer: Vec::with_capacity(config.max_frame_len.min(MAX_FRAME_LEN)),
            config,
            kind: FrameKind::None,
            overflowed: false,
        }
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Kind of the frame in progress, `FrameKind::None` when idle.
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Content bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        !self.kind.is_open()
    }

    fn finish(&mut self) -> CompletedFrame {
        let frame = CompletedFrame::new(self.kind, &self.buffer);
        debug!("{:?} frame complete: {:?}", self.kind, frame.as_text());
        self.buffer.clear();
        self.kind = FrameKind::None;
        self.overflowed = false;
        frame
    }
}

impl Default for CommandFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer for CommandFramer {
    type Output = CompletedFrame;

    fn feed(&mut self, byte: u8) -> Option<CompletedFrame> {
        if !self.kind.is_open() {
            match self.config.kind_for_marker(byte) {
                Some(kind) => {
                    trace!("{:?} frame opened", kind);
                    self.kind = kind;
                }
                None => trace!("Discarding stray byte 0x{:02X}", byte),
            }
            return None;
        }

        if byte == self.config.terminator {
            return Some(self.finish());
        }

        if self.buffer.len() < self.config.max_frame_len {
            self.buffer.push(byte);
        } else if !self.overflowed {
            warn!(
                "Frame exceeds {} bytes, truncating",
                self.config.max_frame_len
            );
            self.overflowed = true;
        }
        None
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.kind = FrameKind::None;
        self.overflowed = false;
    }

    fn name(&self) -> &'static str {
        "Command"
    }
}
