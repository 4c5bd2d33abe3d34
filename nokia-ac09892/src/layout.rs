use core::fmt;

use keymatrix::{
    keyboard::MatrixLayout,
    matrix::{LayoutDescriptor, LogicalSlot, Position, PositionTable},
    Error,
};

use crate::{
    keymap::LAYERS,
    matrix::{COLS, ROWS, SCAN_ORDER},
};

pub type NokiaLayout = MatrixLayout<1, ROWS, COLS>;

/// A switch by its silkscreen number, `S1` to `S130`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switch(pub u8);

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// Silkscreen number per keymap slot, ISO fitting. S17/S18 and S127/S128
// share a matrix position; the alternatives are named by the variants.
const SWITCHES: [[u8; COLS]; ROWS] = [
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
    [23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38],
    [46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 39, 40, 41, 42],
    [65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 58, 59, 60, 61],
    [84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 77, 78, 79, 80],
    [103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 96, 97, 98, 99],
    [21, 22, 45, 64, 121, 83, 122, 102, 123, 124, 125, 126, 115, 116, 117, 118],
    [44, 20, 63, 82, 101, 120, 81, 100, 119, 130, 129, 128, 62, 43, 19, 17],
];

const KEYPAD_PLUS_TOP: (usize, usize) = (7, 15);
const KEYPAD_PLUS_BOTTOM: (usize, usize) = (7, 14);
const KEYPAD_ZERO_LEFT: (usize, usize) = (7, 11);
const KEYPAD_ZERO_RIGHT: (usize, usize) = (7, 10);

// S120, S121, S122, S124, S125, S126 sit beside the space bar and have no
// switch on this board; S129 only exists when S127 replaces S128.
const ISO: LayoutDescriptor<ROWS, COLS> = LayoutDescriptor::new(
    "iso",
    &[(6, 4), (6, 6), (6, 9), (6, 10), (6, 11), (7, 5), KEYPAD_ZERO_RIGHT],
);
const TALL_KEYPAD_PLUS: LayoutDescriptor<ROWS, COLS> =
    ISO.with_unpopulated("iso-tall-keypad-plus", &[KEYPAD_PLUS_BOTTOM]);
const SPLIT_KEYPAD_ZERO: LayoutDescriptor<ROWS, COLS> =
    ISO.with_populated("iso-split-keypad-zero", &[KEYPAD_ZERO_RIGHT]);

/// Physical fittings the PCB supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutVariant {
    /// As shipped: S17 and S19 on the keypad, a 2u S128.
    #[default]
    Iso,
    /// S18, a 1w2h key, replaces S17 and S19.
    TallKeypadPlus,
    /// S127 and S129 replace S128.
    SplitKeypadZero,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 3] = [
        LayoutVariant::Iso,
        LayoutVariant::TallKeypadPlus,
        LayoutVariant::SplitKeypadZero,
    ];

    pub const fn descriptor(self) -> LayoutDescriptor<ROWS, COLS> {
        match self {
            LayoutVariant::Iso => ISO,
            LayoutVariant::TallKeypadPlus => TALL_KEYPAD_PLUS,
            LayoutVariant::SplitKeypadZero => SPLIT_KEYPAD_ZERO,
        }
    }

    pub const fn positions(self) -> PositionTable<ROWS, COLS> {
        PositionTable::new(&SCAN_ORDER, &self.descriptor())
    }

    pub const fn layout(self) -> NokiaLayout {
        MatrixLayout::new(self.positions(), LAYERS)
    }

    /// Switch fitted at `slot`, `None` if the position is empty.
    pub fn switch_at(self, slot: LogicalSlot) -> Result<Option<Switch>, Error> {
        let positions = self.positions();
        let (row, col) = positions.coordinates(slot)?;
        Ok(match positions.address_for_slot(slot)? {
            Position::Populated(_) => Some(self.label(row, col)),
            Position::Unpopulated => None,
        })
    }

    pub fn slot_for_switch(self, switch: Switch) -> Option<LogicalSlot> {
        let positions = self.positions();
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .find(|&(row, col)| {
                self.label(row, col) == switch && self.descriptor().is_populated(row, col)
            })
            .and_then(|(row, col)| positions.slot_at(row, col).ok())
    }

    fn label(self, row: usize, col: usize) -> Switch {
        match (self, (row, col)) {
            (LayoutVariant::TallKeypadPlus, KEYPAD_PLUS_TOP) => Switch(18),
            (LayoutVariant::SplitKeypadZero, KEYPAD_ZERO_LEFT) => Switch(127),
            _ => Switch(SWITCHES[row][col]),
        }
    }
}

#[cfg(test)]
mod tests {
    use keymatrix::matrix::SwitchAddress;

    use super::*;
    use crate::matrix::WIRING;

    // Switch numbers by electrical line, [ROW][COL], as on the schematic.
    const SCHEMATIC: [[u8; COLS]; ROWS] = [
        [99, 98, 97, 96, 114, 113, 112, 111, 110, 109, 108, 107, 106, 104, 103, 105],
        [61, 60, 59, 58, 76, 75, 74, 73, 72, 71, 70, 69, 68, 66, 65, 67],
        [80, 79, 78, 77, 95, 94, 93, 92, 91, 90, 89, 88, 87, 85, 84, 86],
        [38, 37, 36, 35, 34, 33, 32, 31, 30, 29, 28, 27, 26, 24, 23, 25],
        [17, 19, 43, 62, 128, 129, 130, 119, 100, 81, 120, 101, 82, 20, 44, 63],
        [16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 2, 1, 3],
        [42, 41, 40, 39, 57, 56, 55, 54, 53, 52, 51, 50, 49, 47, 46, 48],
        [118, 117, 116, 115, 126, 125, 124, 123, 102, 122, 83, 121, 64, 22, 21, 45],
    ];

    #[test]
    fn keymap_order_matches_schematic() {
        let positions = PositionTable::new(&SCAN_ORDER, &LayoutDescriptor::full("all"));
        assert_eq!(positions.populated_count(), ROWS * COLS);
        for (slot, address) in positions.populated() {
            let (row, col) = positions.coordinates(slot).unwrap();
            let expected = SCHEMATIC[address.driver as usize][address.sense as usize];
            assert_eq!(SWITCHES[row][col], expected, "slot {}", slot.index());
        }
    }

    #[test]
    fn every_switch_number_is_listed_once() {
        let mut seen = [false; 131];
        for n in SWITCHES.iter().flatten() {
            assert!(!seen[*n as usize], "S{} listed twice", n);
            seen[*n as usize] = true;
        }
        // S18 and S127 share positions with S17 and S128
        let missing: Vec<_> = (1..=130).filter(|n| !seen[*n]).collect();
        assert_eq!(missing, [18, 127]);
    }

    #[test]
    fn s1_is_slot_zero_at_a5_b13() {
        let positions = LayoutVariant::Iso.positions();
        let slot = LayoutVariant::Iso.slot_for_switch(Switch(1)).unwrap();
        assert_eq!(slot.index(), 0);
        let address = positions.address_for_slot(slot).unwrap().address().unwrap();
        assert_eq!(
            WIRING.pins(address).map(|(d, s)| (d.to_string(), s.to_string())),
            Some(("A5".to_string(), "B13".to_string()))
        );
    }

    #[test]
    fn iso_leaves_documented_positions_empty() {
        let iso = LayoutVariant::Iso;
        for n in [120, 121, 122, 124, 125, 126, 129] {
            assert_eq!(iso.slot_for_switch(Switch(n)), None, "S{}", n);
        }
        assert_eq!(iso.positions().populated_count(), 128 - 7);
        assert_eq!(iso.descriptor().unpopulated().count(), 7);
    }

    #[test]
    fn tall_keypad_plus_replaces_s17_and_s19() {
        let tall = LayoutVariant::TallKeypadPlus;
        let s18 = tall.slot_for_switch(Switch(18)).unwrap();
        assert_eq!(Some(s18), LayoutVariant::Iso.slot_for_switch(Switch(17)));
        assert_eq!(tall.slot_for_switch(Switch(17)), None);
        assert_eq!(tall.slot_for_switch(Switch(19)), None);
        assert_eq!(tall.switch_at(s18), Ok(Some(Switch(18))));
        assert_eq!(tall.positions().populated_count(), 120);
    }

    #[test]
    fn split_keypad_zero_replaces_s128() {
        let split = LayoutVariant::SplitKeypadZero;
        let s127 = split.slot_for_switch(Switch(127)).unwrap();
        assert_eq!(Some(s127), LayoutVariant::Iso.slot_for_switch(Switch(128)));
        assert!(split.slot_for_switch(Switch(129)).is_some());
        assert_eq!(split.slot_for_switch(Switch(128)), None);
        assert_eq!(split.positions().populated_count(), 122);
    }

    #[test]
    fn electrical_s17_address_is_shared() {
        let address = SwitchAddress::new(4, 0);
        let iso = LayoutVariant::Iso;
        let tall = LayoutVariant::TallKeypadPlus;
        let slot = iso.positions().slot_for_address(address).unwrap();
        assert_eq!(tall.positions().slot_for_address(address), Ok(slot));
        assert_eq!(iso.switch_at(slot), Ok(Some(Switch(17))));
        assert_eq!(tall.switch_at(slot), Ok(Some(Switch(18))));
    }

    #[test]
    fn displays_silkscreen_name() {
        assert_eq!(Switch(49).to_string(), "S49");
    }
}
