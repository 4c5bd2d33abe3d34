use snafu::Snafu;

use crate::matrix::SwitchAddress;

/// Lookup failures. None of these are fatal: callers decide whether to
/// surface them or degrade to [`Key::None`](crate::keyboard::Key::None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Slot {slot} is outside the {len} slots of the table"))]
    OutOfRangeSlot { slot: usize, len: usize },
    #[snafu(display("Layer {layer} is outside the {len} layers of the set"))]
    OutOfRangeLayer { layer: usize, len: usize },
    #[snafu(display("No populated switch at {address}"))]
    UnresolvedAddress { address: SwitchAddress },
    #[snafu(display("No layer for selector {selector}"))]
    MissingLayer { selector: usize },
}
