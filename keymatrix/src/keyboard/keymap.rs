use snafu::ensure;

use super::Key;
use crate::{
    error::{Error, OutOfRangeSlotSnafu},
    matrix::LogicalSlot,
};

/// One complete layer: a key for every slot of the authoring grid.
///
/// Usually written with [`keymap!`](crate::keymap) so the grid reads like the
/// physical board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap<const ROWS: usize, const COLS: usize> {
    keys: [[Key; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Keymap<ROWS, COLS> {
    pub const fn new(keys: [[Key; COLS]; ROWS]) -> Self {
        Keymap { keys }
    }

    pub const fn empty() -> Self {
        Self::new([[Key::None; COLS]; ROWS])
    }

    pub fn action_for_slot(&self, slot: LogicalSlot) -> Result<Key, Error> {
        let index = slot.index();
        ensure!(
            index < ROWS * COLS,
            OutOfRangeSlotSnafu {
                slot: index,
                len: ROWS * COLS
            }
        );
        Ok(self.keys[index / COLS][index % COLS])
    }

    pub fn keys(&self) -> &[[Key; COLS]; ROWS] {
        &self.keys
    }

    pub fn assigned(&self) -> impl Iterator<Item = (LogicalSlot, Key)> + '_ {
        self.keys
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, key)| !key.is_noop())
            .map(|(index, key)| (LogicalSlot::new(index as u16), *key))
    }
}
