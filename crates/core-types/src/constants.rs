//! Centralized constants for the hotplate command link
//!
//! The protocol values are shared with the host script and the deployed
//! firmware. Changing any of them breaks compatibility with both.

/// Framing bytes and limits
pub mod protocol {
    /// Opens a query frame (`?t\r`, `?p\r`).
    pub const QUERY_MARKER: u8 = b'?';

    /// Opens an instruction frame (`!p,90\r`).
    pub const INSTRUCTION_MARKER: u8 = b'!';

    /// Closes the open frame.
    pub const TERMINATOR: u8 = b'\r';

    /// Splits the axis field from the argument field.
    pub const SEPARATOR: u8 = b',';

    /// Maximum frame body length in bytes
    ///
    /// **Value**: 31
    ///
    /// **Rationale**: the firmware receive buffer is 32 bytes and reserves one
    /// slot for the string terminator. Bytes past the limit land in that slot
    /// and are dropped when the frame closes.
    pub const MAX_FRAME_LEN: usize = 31;

    /// Largest `max_frame_len` a configuration may ask for.
    ///
    /// **Value**: 1024
    ///
    /// **Rationale**: frames are short ASCII commands; anything larger is a
    /// misconfiguration, not a protocol variant.
    pub const FRAME_LEN_LIMIT: usize = 1024;
}

/// Reply wrapping
pub mod reply {
    /// Opens a device reply.
    pub const START: u8 = b'<';

    /// Closes a device reply.
    pub const END: u8 = b'>';

    /// Appended after every reply, like a serial `println`.
    pub const LINE_ENDING: &str = "\r\n";

    /// Longest reply payload the host collects before giving up on it.
    ///
    /// **Value**: 64
    ///
    /// **Rationale**: the longest payload the firmware sends is a fault
    /// report (about 40 bytes). A missing `>` must not grow the buffer forever.
    pub const MAX_PAYLOAD_LEN: usize = 64;
}

/// Actuator limits
pub mod servo {
    /// Lowest commandable servo angle in degrees.
    pub const MIN_POSITION: i32 = 0;

    /// Highest commandable servo angle in degrees.
    ///
    /// **Rationale**: hobby servos on the hotplate knobs are 180° parts; the
    /// host script clamps to the same range before sending.
    pub const MAX_POSITION: i32 = 180;
}

/// Thermocouple reporting
pub mod thermo {
    /// Temperature reported before the first successful conversion.
    ///
    /// **Value**: -100.0 °C, well outside anything a hotplate reads, so the
    /// host can tell "no sample yet" from a real value.
    pub const INITIAL_TEMPERATURE: f32 = -100.0;

    /// Field width of a temperature reply (`" 23.50"`).
    pub const REPLY_WIDTH: usize = 6;

    /// Decimal places of a temperature reply.
    pub const REPLY_PRECISION: usize = 2;
}
