use core::hash::Hash;

use crate::Vec;

/// Source of raw switch transitions; the matrix scanner lives outside this
/// crate and implements this.
pub trait KeySwitches<const SZ: usize, const RO: usize> {
    type Identifier: KeySwitchIdentifier<SZ>;
    fn scan(&mut self) -> Vec<SwitchEvent<Self::Identifier>, RO>;
}

pub trait KeySwitchIdentifier<const SZ: usize>:
    Copy + Eq + From<[u8; SZ]> + Into<[u8; SZ]> + Hash
{
}

/// One press or release reported by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchEvent<I> {
    pub switch: I,
    pub pressed: bool,
}

impl<I> SwitchEvent<I> {
    pub fn press(switch: I) -> Self {
        SwitchEvent {
            switch,
            pressed: true,
        }
    }

    pub fn release(switch: I) -> Self {
        SwitchEvent {
            switch,
            pressed: false,
        }
    }
}
