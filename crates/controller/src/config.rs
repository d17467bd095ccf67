use crate::error::ControllerError;
use command::ParserConfig;
use core_types::constants::{servo, thermo};
use core_types::{ConfigError, ProtocolConfig};
use serde::{Deserialize, Serialize};

/// Everything the control loop needs to know at startup.
///
/// Missing fields fall back to the firmware defaults, so a config file only
/// has to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub protocol: ProtocolConfig,
    pub parser: ParserConfig,
    pub servo_min: i32,
    pub servo_max: i32,
    /// Reported for `?t` until the first conversion completes.
    pub initial_temperature: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            protocol: ProtocolConfig::default(),
            parser: ParserConfig::default(),
            servo_min: servo::MIN_POSITION,
            servo_max: servo::MAX_POSITION,
            initial_temperature: thermo::INITIAL_TEMPERATURE,
        }
    }
}

impl ControllerConfig {
    pub fn from_json(text: &str) -> Result<Self, ControllerError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.protocol.validate()?;
        if self.servo_min > self.servo_max {
            return Err(ConfigError::ServoRange {
                min: self.servo_min,
                max: self.servo_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.servo_min, 0);
        assert_eq!(cfg.servo_max, 180);
        assert_eq!(cfg.initial_temperature, -100.0);
        assert!(!cfg.parser.strict);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let cfg = ControllerConfig::from_json(r#"{"parser": {"strict": true}, "servo_max": 170}"#)
            .unwrap();
        assert!(cfg.parser.strict);
        assert_eq!(cfg.servo_max, 170);
        assert_eq!(cfg.protocol, ProtocolConfig::default());
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = ControllerConfig::from_json(r#"{"servo_min": 90, "servo_max": 10}"#).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Config(ConfigError::ServoRange { min: 90, max: 10 })
        ));
    }

    #[test]
    fn test_oversized_frame_limit_rejected() {
        let json = format!(r#"{{"protocol": {{"max_frame_len": {}}}}}"#, usize::MAX);
        let err = ControllerConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Config(ConfigError::FrameLength { .. })
        ));
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(
            ControllerConfig::from_json("{"),
            Err(ControllerError::ConfigFormat(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let cfg = ControllerConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ControllerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
