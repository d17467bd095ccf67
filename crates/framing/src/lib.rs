//! # Framing
//!
//! Incremental byte-stream framers for the hotplate link.
//!
//! - [`CommandFramer`]: device side, turns `?...\r` / `!...\r` into
//!   [`core_types::CompletedFrame`]s.
//! - [`ReplyFramer`]: host side, pulls `<...>` replies out of the device's
//!   output.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod command;
pub mod reply;

pub use command::CommandFramer;
pub use reply::ReplyFramer;

/// Trait for converting a stream of bytes into discrete frames.
pub trait Framer: Send {
    type Output;

    /// Ingest exactly one byte. Returns a frame only when this byte completed one.
    fn feed(&mut self, byte: u8) -> Option<Self::Output>;

    /// Ingest a chunk and return every frame it completed, in order.
    ///
    /// # Arguments
    /// * `bytes` - The new chunk of data read from the transport.
    fn push(&mut self, bytes: &[u8]) -> Vec<Self::Output> {
        bytes.iter().filter_map(|&b| self.feed(b)).collect()
    }

    /// Reset internal state, dropping any partial frame.
    fn reset(&mut self);

    /// Get the name of the framer.
    fn name(&self) -> &'static str;
}
