//! # Controller
//!
//! The hotplate device loop and the hardware it talks to.
//!
//! ## Layout
//!
//! - **controller**: polling loop tying the link to the effectors
//! - **hardware**: thermocouple / actuator traits and the paired knob servos
//! - **responder**: `<payload>` replies and their payload formats
//! - **fault**: thermocouple amplifier fault register decoding
//! - **sim**: in-memory hardware for tests and the native simulator

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod config;
pub mod controller;
pub mod error;
pub mod fault;
pub mod hardware;
pub mod responder;
pub mod sim;

pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::{ControllerError, HardwareError};
pub use fault::FaultFlags;
pub use hardware::{Actuator, DualServo, Thermocouple};
pub use responder::WrappingResponder;
