//! # Core Types
//!
//! Shared vocabulary for the hotplate command link: frame kinds, completed
//! frames, parsed commands and the protocol configuration. Both the device
//! side (`framing`, `command`, `controller`) and host tooling build on these.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod constants;
pub mod transport;
pub use transport::{ByteSource, Responder, TransportError};

/// Which marker byte opened the frame currently being received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameKind {
    /// No frame is open.
    #[default]
    None,
    /// Opened by the query marker (`?`). Reads device state.
    Query,
    /// Opened by the instruction marker (`!`). Carries a numeric argument.
    Instruction,
}

impl FrameKind {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A finalized frame body, without its marker and terminator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedFrame {
    bytes: Vec<u8>,
    kind: FrameKind,
}

impl CompletedFrame {
    /// Builds a frame from raw content. Content is cut at the first NUL so the
    /// body is always NUL-free, matching what the device firmware would see.
    pub fn new(kind: FrameKind, content: &[u8]) -> Self {
        let end = content.iter().position(|&b| b == 0).unwrap_or(content.len());
        Self {
            bytes: content.get(..end).map(<[u8]>::to_vec).unwrap_or_default(),
            kind,
        }
    }

    pub fn query(content: &[u8]) -> Self {
        Self::new(FrameKind::Query, content)
    }

    pub fn instruction(content: &[u8]) -> Self {
        Self::new(FrameKind::Instruction, content)
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lossy text view, for logging.
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// A parsed request: which target it addresses and, for instructions, the
/// numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub kind: FrameKind,
    pub axis: char,
    pub value: Option<f32>,
}

impl Command {
    /// Wire-level stand-in for "no numeric argument".
    pub const ABSENT_VALUE: f32 = -1.0;

    pub fn query(axis: char) -> Self {
        Self {
            kind: FrameKind::Query,
            axis,
            value: None,
        }
    }

    pub fn instruction(axis: char, value: f32) -> Self {
        Self {
            kind: FrameKind::Instruction,
            axis,
            value: Some(value),
        }
    }

    pub fn value_or_sentinel(&self) -> f32 {
        self.value.unwrap_or(Self::ABSENT_VALUE)
    }
}

/// Bytes and limits that define the link.
///
/// Defaults are the bit-exact contract the firmware and host agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    pub query_marker: u8,
    pub instruction_marker: u8,
    pub terminator: u8,
    pub separator: u8,
    /// Maximum number of content bytes kept per frame.
    pub max_frame_len: usize,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            query_marker: constants::protocol::QUERY_MARKER,
            instruction_marker: constants::protocol::INSTRUCTION_MARKER,
            terminator: constants::protocol::TERMINATOR,
            separator: constants::protocol::SEPARATOR,
            max_frame_len: constants::protocol::MAX_FRAME_LEN,
        }
    }
}

impl ProtocolConfig {
    /// Frame kind a marker byte opens, if it is one.
    pub fn kind_for_marker(&self, byte: u8) -> Option<FrameKind> {
        if byte == self.query_marker {
            Some(FrameKind::Query)
        } else if byte == self.instruction_marker {
            Some(FrameKind::Instruction)
        } else {
            None
        }
    }

    pub fn marker_for(&self, kind: FrameKind) -> Option<u8> {
        match kind {
            FrameKind::Query => Some(self.query_marker),
            FrameKind::Instruction => Some(self.instruction_marker),
            FrameKind::None => None,
        }
    }

    /// Rejects configurations where the framing bytes collide or the frame
    /// limit is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query_marker == self.instruction_marker {
            return Err(ConfigError::MarkerCollision);
        }
        if self.terminator == self.query_marker || self.terminator == self.instruction_marker {
            return Err(ConfigError::TerminatorCollision);
        }
        if self.separator == self.terminator {
            return Err(ConfigError::SeparatorCollision);
        }
        if self.max_frame_len == 0 || self.max_frame_len > constants::protocol::FRAME_LEN_LIMIT {
            return Err(ConfigError::FrameLength {
                len: self.max_frame_len,
                limit: constants::protocol::FRAME_LEN_LIMIT,
            });
        }
        Ok(())
    }
}

/// A configuration value the link or the loop cannot run with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("query and instruction markers must differ")]
    MarkerCollision,

    #[error("terminator must differ from both markers")]
    TerminatorCollision,

    #[error("separator must differ from the terminator")]
    SeparatorCollision,

    #[error("max_frame_len must be between 1 and {limit}, got {len}")]
    FrameLength { len: usize, limit: usize },

    #[error("servo_min ({min}) exceeds servo_max ({max})")]
    ServoRange { min: i32, max: i32 },
}
