mod controller;
mod external_communicator;
mod key;
mod key_switches;
mod keyboard_state;
mod keymap;
mod layer;
mod layout;

pub use controller::Controller;
pub use external_communicator::ExternalCommunicator;
pub use key::Key;
pub use key_switches::{KeySwitchIdentifier, KeySwitches, SwitchEvent};
pub use keyboard_state::KeyboardState;
pub use keymap::Keymap;
pub use layer::{LayerSelector, LayerSet};
pub use layout::{Layout, MatrixLayout};
