//! Effector interfaces the control loop drives.

use crate::error::HardwareError;
use crate::fault::FaultFlags;
use log::debug;

/// Thermocouple amplifier in one-shot conversion mode.
pub trait Thermocouple {
    /// Configure the amplifier. Called once before the loop starts.
    fn begin(&mut self) -> Result<(), HardwareError>;

    /// Start a conversion; returns immediately.
    fn trigger_one_shot(&mut self);

    /// Has the last conversion finished?
    fn data_ready(&self) -> bool;

    /// Is the amplifier's fault line asserted?
    fn fault_asserted(&self) -> bool;

    /// Latest converted temperature in °C.
    fn read_temperature(&mut self) -> f32;

    fn read_fault(&mut self) -> FaultFlags;
}

/// A positional actuator, e.g. a hobby servo.
pub trait Actuator {
    /// Move to `degrees`.
    fn write(&mut self, degrees: i32);

    /// Last commanded position.
    fn read(&self) -> i32;
}

/// Two servos turning the same knob, driven as one.
pub struct DualServo<A> {
    primary: A,
    secondary: A,
    min: i32,
    max: i32,
}

impl<A: Actuator> DualServo<A> {
    pub fn new(primary: A, secondary: A, min: i32, max: i32) -> Self {
        Self {
            primary,
            secondary,
            min,
            max,
        }
    }

    /// Move both servos, clamped to the configured range. An inverted range
    /// pins every move to `max`.
    pub fn write(&mut self, degrees: i32) {
        let degrees = degrees.max(self.min).min(self.max);
        self.primary.write(degrees);
        self.secondary.write(degrees);
    }

    /// Position of the primary servo. A secondary that drifted is pulled back
    /// to match.
    pub fn read(&mut self) -> i32 {
        let pos = self.primary.read();
        let other = self.secondary.read();
        if pos != other {
            debug!("Servo mismatch ({} vs {}), resyncing", pos, other);
            self.secondary.write(pos);
        }
        pos
    }

    pub fn primary(&self) -> &A {
        &self.primary
    }

    pub fn secondary(&self) -> &A {
        &self.secondary
    }

    pub fn secondary_mut(&mut self) -> &mut A {
        &mut self.secondary
    }
}
