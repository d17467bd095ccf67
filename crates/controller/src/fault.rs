//! Thermocouple amplifier fault decoding.

use bitflags::bitflags;

bitflags! {
    /// MAX31856 fault status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FaultFlags: u8 {
        const CJ_RANGE = 0x80;
        const TC_RANGE = 0x40;
        const CJ_HIGH = 0x20;
        const CJ_LOW = 0x10;
        const TC_HIGH = 0x08;
        const TC_LOW = 0x04;
        const OVUV = 0x02;
        const OPEN = 0x01;
    }
}

// Reporting order, most significant bit first.
const DESCRIPTIONS: [(FaultFlags, &str); 8] = [
    (FaultFlags::CJ_RANGE, "Cold Junction Range Fault"),
    (FaultFlags::TC_RANGE, "Thermocouple Range Fault"),
    (FaultFlags::CJ_HIGH, "Cold Junction High Fault"),
    (FaultFlags::CJ_LOW, "Cold Junction Low Fault"),
    (FaultFlags::TC_HIGH, "Thermocouple High Fault"),
    (FaultFlags::TC_LOW, "Thermocouple Low Fault"),
    (FaultFlags::OVUV, "Over/Under Voltage Fault"),
    (FaultFlags::OPEN, "Thermocouple Open Fault"),
];

impl FaultFlags {
    /// Human-readable description of every asserted fault.
    pub fn descriptions(self) -> impl Iterator<Item = &'static str> {
        DESCRIPTIONS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, text)| text)
    }
}

/// Reply payload for one asserted fault.
pub fn fault_report(description: &str) -> String {
    format!("Read Fault:\t{}", description)
}
