use crate::{
    keyboard::{Key, KeySwitchIdentifier, LayerSet},
    matrix::{LogicalSlot, PositionTable, SwitchAddress},
    Error,
};

pub trait Layout<const SZ: usize> {
    type Identifier: KeySwitchIdentifier<SZ>;

    fn slot(&self, switch: &Self::Identifier) -> Result<LogicalSlot, Error>;

    fn key(&self, layer: usize, slot: LogicalSlot) -> Result<Key, Error>;
}

#[derive(Debug, Clone, Copy)]
pub struct MatrixLayout<const LAYERS: usize, const ROWS: usize, const COLS: usize> {
    positions: PositionTable<ROWS, COLS>,
    layers: LayerSet<LAYERS, ROWS, COLS>,
}

impl<const LAYERS: usize, const ROWS: usize, const COLS: usize> MatrixLayout<LAYERS, ROWS, COLS> {
    pub const fn new(
        positions: PositionTable<ROWS, COLS>,
        layers: LayerSet<LAYERS, ROWS, COLS>,
    ) -> Self {
        MatrixLayout { positions, layers }
    }

    pub fn positions(&self) -> &PositionTable<ROWS, COLS> {
        &self.positions
    }

    pub fn layers(&self) -> &LayerSet<LAYERS, ROWS, COLS> {
        &self.layers
    }

    /// Key for a scanned address. Addresses without a populated switch are
    /// scan noise and produce [`Key::None`].
    pub fn action_for_address(&self, layer: usize, address: SwitchAddress) -> Key {
        match self
            .slot(&address)
            .and_then(|slot| self.key(layer, slot))
        {
            Ok(key) => key,
            Err(e) => {
                crate::log::debug!("{}", e);
                Key::None
            }
        }
    }
}

impl<const LAYERS: usize, const ROWS: usize, const COLS: usize> Layout<2>
    for MatrixLayout<LAYERS, ROWS, COLS>
{
    type Identifier = SwitchAddress;

    fn slot(&self, switch: &SwitchAddress) -> Result<LogicalSlot, Error> {
        self.positions.slot_for_address(*switch)
    }

    fn key(&self, layer: usize, slot: LogicalSlot) -> Result<Key, Error> {
        self.layers.resolve(layer, slot)
    }
}
