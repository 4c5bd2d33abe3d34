//! Electrical side of a switch matrix and its mapping onto the authoring grid.
//!
//! Switches are addressed by the electrical line that drives them and the
//! line that senses them. Scan order is a PCB routing detail, so layouts are
//! authored in a separate grid ([`LogicalSlot`]) and a [`PositionTable`]
//! translates between the two.

mod layout_descriptor;
mod pin;
mod position_table;
mod switch_address;
mod wiring;

pub use layout_descriptor::LayoutDescriptor;
pub use pin::{Pin, Port};
pub use position_table::{LogicalSlot, Position, PositionTable, ScanOrder};
pub use switch_address::SwitchAddress;
pub use wiring::MatrixWiring;
