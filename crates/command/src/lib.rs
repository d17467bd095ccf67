//! # Command
//!
//! Turns completed frames into typed [`Command`]s and, for the host side,
//! encodes requests back into wire bytes.
//!
//! ## Parsing policy
//!
//! Frame content is split on the first separator. The first byte of the first
//! field selects the axis; instruction frames convert the second field to a
//! float. Conversion is lenient by default (unparsable or missing arguments
//! become `0.0`); [`ParserConfig::strict`] turns those cases into
//! [`ParseError`]s instead.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod encode;
pub mod error;
pub mod fields;
pub mod number;
pub mod parser;

pub use core_types::Command;
pub use encode::RequestEncoder;
pub use error::ParseError;
pub use parser::{Parser, ParserConfig};

/// Axis selectors understood by the hotplate firmware.
pub mod axis {
    /// Knob servo position, in degrees.
    pub const POSITION: char = 'p';
    /// Thermocouple temperature, in °C.
    pub const TEMPERATURE: char = 't';
}
