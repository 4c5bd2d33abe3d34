use core::fmt;

use crate::keyboard::KeySwitchIdentifier;

/// Electrical address of one switch: the driver line it sits on and the
/// sense line it is read from. Both are indices into the wiring, not pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchAddress {
    pub driver: u8,
    pub sense: u8,
}

impl SwitchAddress {
    pub const fn new(driver: u8, sense: u8) -> Self {
        SwitchAddress { driver, sense }
    }
}

impl From<[u8; 2]> for SwitchAddress {
    fn from(value: [u8; 2]) -> Self {
        SwitchAddress {
            driver: value[0],
            sense: value[1],
        }
    }
}

impl From<SwitchAddress> for [u8; 2] {
    fn from(value: SwitchAddress) -> Self {
        [value.driver, value.sense]
    }
}

impl KeySwitchIdentifier<2> for SwitchAddress {}

impl fmt::Display for SwitchAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver {} / sense {}", self.driver, self.sense)
    }
}
