use core_types::{ConfigError, TransportError};
use thiserror::Error;

/// Failure reported by a hardware collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HardwareError {
    #[error("Device did not respond: {0}")]
    NoResponse(String),
    #[error("{0}")]
    Other(String),
}

/// Errors surfaced by the control loop
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Thermocouple amplifier failed to start; the device cannot run
    #[error("Could not initialize thermocouple: {0}")]
    ThermocoupleInit(#[source] HardwareError),

    /// Reply could not be written to the link
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration text was not valid JSON
    #[error("Invalid configuration JSON: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ControllerError::ThermocoupleInit(HardwareError::NoResponse("SPI".into()));
        assert_eq!(
            err.to_string(),
            "Could not initialize thermocouple: Device did not respond: SPI"
        );
    }

    #[test]
    fn test_transport_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ControllerError = TransportError::from(io).into();
        assert!(matches!(err, ControllerError::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: IO Error: closed");
    }

    #[test]
    fn test_config_conversion() {
        let err: ControllerError = ConfigError::ServoRange { min: 90, max: 10 }.into();
        assert_eq!(
            err.to_string(),
            "Configuration error: servo_min (90) exceeds servo_max (10)"
        );
    }
}
