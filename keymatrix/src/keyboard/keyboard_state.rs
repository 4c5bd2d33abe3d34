use heapless::Vec;

use super::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct KeyboardState<const RO: usize> {
    pub layer: usize,
    pub keys: Vec<Key, RO>,
}
