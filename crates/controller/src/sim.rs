//! Simulated hardware for running the loop off-device.

use crate::error::HardwareError;
use crate::fault::FaultFlags;
use crate::hardware::{Actuator, Thermocouple};

/// Servo that lands exactly where it is told.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimServo {
    position: i32,
}

impl Actuator for SimServo {
    fn write(&mut self, degrees: i32) {
        self.position = degrees;
    }

    fn read(&self) -> i32 {
        self.position
    }
}

/// Thermocouple returning a settable reading.
///
/// A conversion completes on every trigger unless a fault is injected, in
/// which case the fault line stays asserted and no data becomes ready.
#[derive(Debug, Clone)]
pub struct SimThermocouple {
    temperature: f32,
    fault: FaultFlags,
    fail_begin: bool,
    ready: bool,
    conversions: u32,
}

impl SimThermocouple {
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature,
            fault: FaultFlags::empty(),
            fail_begin: false,
            ready: false,
            conversions: 0,
        }
    }

    /// Amplifier that never answers `begin`.
    pub fn absent() -> Self {
        Self {
            fail_begin: true,
            ..Self::new(0.0)
        }
    }

    pub fn set_temperature(&mut self, celsius: f32) {
        self.temperature = celsius;
    }

    pub fn inject_fault(&mut self, fault: FaultFlags) {
        self.fault = fault;
    }

    pub fn conversions(&self) -> u32 {
        self.conversions
    }
}

impl Thermocouple for SimThermocouple {
    fn begin(&mut self) -> Result<(), HardwareError> {
        if self.fail_begin {
            return Err(HardwareError::NoResponse("thermocouple amplifier".into()));
        }
        Ok(())
    }

    fn trigger_one_shot(&mut self) {
        self.conversions += 1;
        self.ready = self.fault.is_empty();
    }

    fn data_ready(&self) -> bool {
        self.ready
    }

    fn fault_asserted(&self) -> bool {
        !self.fault.is_empty()
    }

    fn read_temperature(&mut self) -> f32 {
        self.ready = false;
        self.temperature
    }

    fn read_fault(&mut self) -> FaultFlags {
        self.fault
    }
}
