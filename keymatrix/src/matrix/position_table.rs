use snafu::{ensure, OptionExt};

use super::{LayoutDescriptor, MatrixWiring, Pin, SwitchAddress};
use crate::error::{Error, OutOfRangeSlotSnafu, UnresolvedAddressSnafu};

/// Index into the authoring grid, row-major and zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogicalSlot(u16);

impl LogicalSlot {
    /// Unchecked: tables reject indices past their end on lookup.
    pub const fn new(index: u16) -> Self {
        LogicalSlot(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    Populated(SwitchAddress),
    Unpopulated,
}

impl Position {
    pub fn address(self) -> Option<SwitchAddress> {
        match self {
            Position::Populated(address) => Some(address),
            Position::Unpopulated => None,
        }
    }
}

/// Electrical line behind each authoring row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOrder<const ROWS: usize, const COLS: usize> {
    drivers: [u8; ROWS],
    senses: [u8; COLS],
}

impl<const ROWS: usize, const COLS: usize> ScanOrder<ROWS, COLS> {
    /// Both arrays must be permutations of their line numbers; anything else
    /// panics (at compile time when used in a `const`).
    pub const fn new(drivers: [u8; ROWS], senses: [u8; COLS]) -> Self {
        assert!(is_permutation(&drivers), "driver lines must be a permutation");
        assert!(is_permutation(&senses), "sense lines must be a permutation");
        ScanOrder { drivers, senses }
    }

    pub const fn identity() -> Self {
        let mut drivers = [0; ROWS];
        let mut senses = [0; COLS];
        let mut i = 0;
        while i < ROWS {
            drivers[i] = i as u8;
            i += 1;
        }
        i = 0;
        while i < COLS {
            senses[i] = i as u8;
            i += 1;
        }
        Self::new(drivers, senses)
    }

    pub const fn from_pins(
        wiring: &MatrixWiring<ROWS, COLS>,
        drivers: [Pin; ROWS],
        senses: [Pin; COLS],
    ) -> Self {
        let mut driver_lines = [0; ROWS];
        let mut sense_lines = [0; COLS];
        let mut i = 0;
        while i < ROWS {
            driver_lines[i] = match wiring.driver_line(drivers[i]) {
                Some(line) => line,
                None => panic!("scan order names a pin that drives no row"),
            };
            i += 1;
        }
        i = 0;
        while i < COLS {
            sense_lines[i] = match wiring.sense_line(senses[i]) {
                Some(line) => line,
                None => panic!("scan order names a pin that senses no column"),
            };
            i += 1;
        }
        Self::new(driver_lines, sense_lines)
    }

    pub fn driver(&self, row: usize) -> Option<u8> {
        self.drivers.get(row).copied()
    }

    pub fn sense(&self, col: usize) -> Option<u8> {
        self.senses.get(col).copied()
    }
}

const fn is_permutation<const N: usize>(lines: &[u8; N]) -> bool {
    let mut seen = [false; N];
    let mut i = 0;
    while i < N {
        let line = lines[i] as usize;
        if line >= N || seen[line] {
            return false;
        }
        seen[line] = true;
        i += 1;
    }
    true
}

/// Static two-way map between authoring slots and switch addresses.
///
/// Built once from a [`ScanOrder`] and a [`LayoutDescriptor`]; unpopulated
/// positions have no address and are not reachable from any address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTable<const ROWS: usize, const COLS: usize> {
    positions: [[Position; COLS]; ROWS],
    // indexed by [driver][sense]
    slots: [[Option<LogicalSlot>; COLS]; ROWS],
    populated: usize,
}

impl<const ROWS: usize, const COLS: usize> PositionTable<ROWS, COLS> {
    pub const fn new(order: &ScanOrder<ROWS, COLS>, layout: &LayoutDescriptor<ROWS, COLS>) -> Self {
        assert!(ROWS * COLS <= u16::MAX as usize, "too many slots");
        let mut positions = [[Position::Unpopulated; COLS]; ROWS];
        let mut slots = [[None; COLS]; ROWS];
        let mut populated = 0;
        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                if layout.is_populated(row, col) {
                    let driver = order.drivers[row];
                    let sense = order.senses[col];
                    positions[row][col] = Position::Populated(SwitchAddress::new(driver, sense));
                    slots[driver as usize][sense as usize] =
                        Some(LogicalSlot((row * COLS + col) as u16));
                    populated += 1;
                }
                col += 1;
            }
            row += 1;
        }
        PositionTable {
            positions,
            slots,
            populated,
        }
    }

    pub const fn len(&self) -> usize {
        ROWS * COLS
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn populated_count(&self) -> usize {
        self.populated
    }

    pub fn slot(&self, index: usize) -> Result<LogicalSlot, Error> {
        ensure!(
            index < self.len(),
            OutOfRangeSlotSnafu {
                slot: index,
                len: self.len()
            }
        );
        Ok(LogicalSlot(index as u16))
    }

    pub fn slot_at(&self, row: usize, col: usize) -> Result<LogicalSlot, Error> {
        ensure!(
            row < ROWS && col < COLS,
            OutOfRangeSlotSnafu {
                slot: row.saturating_mul(COLS).saturating_add(col),
                len: self.len()
            }
        );
        self.slot(row * COLS + col)
    }

    pub fn coordinates(&self, slot: LogicalSlot) -> Result<(usize, usize), Error> {
        let index = self.slot(slot.index())?.index();
        Ok((index / COLS, index % COLS))
    }

    pub fn address_for_slot(&self, slot: LogicalSlot) -> Result<Position, Error> {
        let (row, col) = self.coordinates(slot)?;
        Ok(self.positions[row][col])
    }

    pub fn slot_for_address(&self, address: SwitchAddress) -> Result<LogicalSlot, Error> {
        self.slots
            .get(address.driver as usize)
            .and_then(|senses| senses.get(address.sense as usize))
            .copied()
            .flatten()
            .context(UnresolvedAddressSnafu { address })
    }

    pub fn populated(&self) -> impl Iterator<Item = (LogicalSlot, SwitchAddress)> + '_ {
        self.positions
            .iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, position)| {
                position
                    .address()
                    .map(|address| (LogicalSlot(index as u16), address))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: ScanOrder<2, 3> = ScanOrder::new([1, 0], [2, 0, 1]);
    const LAYOUT: LayoutDescriptor<2, 3> = LayoutDescriptor::new("test", &[(1, 2)]);
    const TABLE: PositionTable<2, 3> = PositionTable::new(&ORDER, &LAYOUT);

    #[test]
    fn reorders_scan_lines_into_authoring_grid() {
        assert_eq!(
            TABLE.address_for_slot(LogicalSlot::new(0)),
            Ok(Position::Populated(SwitchAddress::new(1, 2)))
        );
        assert_eq!(
            TABLE.address_for_slot(LogicalSlot::new(4)),
            Ok(Position::Populated(SwitchAddress::new(0, 0)))
        );
    }

    #[test]
    fn populated_slots_round_trip() {
        assert_eq!(TABLE.populated().count(), TABLE.populated_count());
        for (slot, address) in TABLE.populated() {
            assert_eq!(TABLE.slot_for_address(address), Ok(slot));
        }
    }

    #[test]
    fn unpopulated_slot_has_no_address() {
        let slot = TABLE.slot_at(1, 2).unwrap();
        assert_eq!(TABLE.address_for_slot(slot), Ok(Position::Unpopulated));
        // (driver 0, sense 1) would be row 1, col 2
        assert_eq!(
            TABLE.slot_for_address(SwitchAddress::new(0, 1)),
            Err(Error::UnresolvedAddress {
                address: SwitchAddress::new(0, 1)
            })
        );
    }

    #[test]
    fn addresses_outside_matrix_are_unresolved() {
        assert!(matches!(
            TABLE.slot_for_address(SwitchAddress::new(2, 0)),
            Err(Error::UnresolvedAddress { .. })
        ));
        assert!(matches!(
            TABLE.slot_for_address(SwitchAddress::new(0, 3)),
            Err(Error::UnresolvedAddress { .. })
        ));
    }

    #[test]
    fn out_of_range_slots_fail() {
        assert_eq!(
            TABLE.address_for_slot(LogicalSlot::new(6)),
            Err(Error::OutOfRangeSlot { slot: 6, len: 6 })
        );
        assert_eq!(
            TABLE.slot_at(0, 3),
            Err(Error::OutOfRangeSlot { slot: 3, len: 6 })
        );
        assert_eq!(TABLE.coordinates(LogicalSlot::new(5)), Ok((1, 2)));
    }

    #[test]
    fn huge_coordinates_fail_without_overflow() {
        assert_eq!(
            TABLE.slot_at(usize::MAX, 0),
            Err(Error::OutOfRangeSlot {
                slot: usize::MAX,
                len: 6
            })
        );
        assert!(matches!(
            TABLE.slot_at(0, usize::MAX),
            Err(Error::OutOfRangeSlot { .. })
        ));
    }

    #[test]
    fn identity_order_keeps_lines() {
        let table = PositionTable::new(&ScanOrder::<2, 3>::identity(), &LayoutDescriptor::full("full"));
        assert_eq!(table.populated_count(), 6);
        assert_eq!(
            table.slot_for_address(SwitchAddress::new(1, 1)),
            Ok(LogicalSlot::new(4))
        );
    }

    #[test]
    fn resolves_pin_scan_order() {
        let wiring = MatrixWiring::new([Pin::a(0), Pin::a(1)], [Pin::b(0), Pin::b(1), Pin::b(2)]);
        let order = ScanOrder::from_pins(&wiring, [Pin::a(1), Pin::a(0)], [Pin::b(2), Pin::b(0), Pin::b(1)]);
        assert_eq!(order, ORDER);
    }

    #[test]
    #[should_panic(expected = "sense lines must be a permutation")]
    fn repeated_sense_line_is_rejected() {
        let _ = ScanOrder::<1, 2>::new([0], [1, 1]);
    }
}
