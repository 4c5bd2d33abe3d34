use heapless::{FnvIndexMap, Vec};

use super::{ExternalCommunicator, Key, KeySwitches, KeyboardState, LayerSelector, Layout};
use crate::matrix::LogicalSlot;

/// Turns scanned switch events into the set of keys currently held.
///
/// The key of a slot is fixed when it is pressed, so changing layers while a
/// key is held does not change what that key sends until it is released.
pub struct Controller<
    'a,
    const SZ: usize,
    const RO: usize,
    C: ExternalCommunicator,
    K: KeySwitches<SZ, RO>,
    L: Layout<SZ, Identifier = K::Identifier>,
> {
    pub communicator: C,
    pub key_switches: K,
    layout: L,
    selector: &'a LayerSelector,
    layer: usize,
    keys: Vec<Key, RO>,
    pressed_slots: FnvIndexMap<LogicalSlot, Key, 16>,
}

impl<
        'a,
        const SZ: usize,
        const RO: usize,
        C: ExternalCommunicator,
        K: KeySwitches<SZ, RO>,
        L: Layout<SZ, Identifier = K::Identifier>,
    > Controller<'a, SZ, RO, C, K, L>
{
    pub fn new(communicator: C, key_switches: K, layout: L, selector: &'a LayerSelector) -> Self {
        Controller {
            communicator,
            key_switches,
            layout,
            selector,
            layer: 0,
            keys: Vec::new(),
            pressed_slots: FnvIndexMap::new(),
        }
    }

    pub fn get_state(&self) -> KeyboardState<RO> {
        KeyboardState {
            layer: self.layer,
            keys: self.keys.clone(),
        }
    }

    pub fn main_loop(&mut self) {
        let layer = self.selector.get();

        for event in self.key_switches.scan() {
            let slot = match self.layout.slot(&event.switch) {
                Ok(slot) => slot,
                Err(e) => {
                    crate::log::warn!("ignoring switch event: {}", e);
                    continue;
                }
            };

            if !event.pressed {
                self.pressed_slots.remove(&slot);
                continue;
            }
            if self.pressed_slots.contains_key(&slot) {
                continue;
            }

            let key = self.layout.key(layer, slot).unwrap_or_else(|e| {
                crate::log::warn!("no key for slot {}: {}", slot.index(), e);
                Key::None
            });
            if key.is_noop() {
                continue;
            }
            if self.pressed_slots.insert(slot, key).is_err() {
                crate::log::warn!("too many switches held, dropping slot {}", slot.index());
            }
        }

        self.keys = self
            .pressed_slots
            .values()
            .copied()
            .take(RO)
            .collect();

        if !self.keys.is_empty() {
            crate::log::debug!("{} keys held on layer {}", self.keys.len(), layer);
        }
        self.layer = layer;
    }

    pub fn send_keys(&self) -> Result<(), C::Error> {
        if !self.communicator.is_ready() {
            return Ok(());
        }

        self.communicator.send_keys(&self.keys)
    }
}
