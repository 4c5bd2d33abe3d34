use core::sync::atomic::{AtomicU8, Ordering};

use snafu::{ensure, OptionExt};

use super::{Key, Keymap};
use crate::{
    error::{Error, MissingLayerSnafu, OutOfRangeLayerSnafu},
    matrix::LogicalSlot,
};

/// Ordered layers; index 0 is the base layer and always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSet<const LAYERS: usize, const ROWS: usize, const COLS: usize> {
    layers: [Keymap<ROWS, COLS>; LAYERS],
}

impl<const LAYERS: usize, const ROWS: usize, const COLS: usize> LayerSet<LAYERS, ROWS, COLS> {
    /// Panics (at compile time when used in a `const`) without a base layer.
    pub const fn new(layers: [Keymap<ROWS, COLS>; LAYERS]) -> Self {
        assert!(LAYERS > 0, "a layer set needs a base layer");
        LayerSet { layers }
    }

    pub const fn len(&self) -> usize {
        LAYERS
    }

    pub const fn is_empty(&self) -> bool {
        LAYERS == 0
    }

    pub fn base_layer(&self) -> &Keymap<ROWS, COLS> {
        &self.layers[0]
    }

    pub fn layer(&self, selector: usize) -> Result<&Keymap<ROWS, COLS>, Error> {
        self.layers
            .get(selector)
            .context(MissingLayerSnafu { selector })
    }

    /// The layer `selector` names, or the base layer if there is none.
    pub fn active_layer(&self, selector: usize) -> &Keymap<ROWS, COLS> {
        match self.layer(selector) {
            Ok(layer) => layer,
            Err(_) => {
                crate::log::warn!("no layer {}, using base layer", selector);
                self.base_layer()
            }
        }
    }

    pub fn action_for_slot(&self, layer: usize, slot: LogicalSlot) -> Result<Key, Error> {
        ensure!(layer < LAYERS, OutOfRangeLayerSnafu { layer, len: LAYERS });
        self.layers[layer].action_for_slot(slot)
    }

    /// Key for `slot` under `selector`, following [`Key::Transparent`] down
    /// towards the base layer. A transparent base layer yields
    /// [`Key::None`].
    pub fn resolve(&self, selector: usize, slot: LogicalSlot) -> Result<Key, Error> {
        let top = if selector < LAYERS { selector } else { 0 };
        for layer in self.layers[..=top].iter().rev() {
            let key = layer.action_for_slot(slot)?;
            if key != Key::Transparent {
                return Ok(key);
            }
        }
        Ok(Key::None)
    }
}

/// Index of the active layer, written by whatever manages layers and read
/// on every lookup.
#[derive(Debug, Default)]
pub struct LayerSelector(AtomicU8);

impl LayerSelector {
    pub const fn new(layer: u8) -> Self {
        LayerSelector(AtomicU8::new(layer))
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed) as usize
    }

    pub fn set(&self, layer: u8) {
        self.0.store(layer, Ordering::Relaxed);
    }
}
