use super::{Pin, SwitchAddress};

/// Pins behind each electrical line, indexed by line number
/// (`ROW0..`, `COL0..` on the PCB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixWiring<const ROWS: usize, const COLS: usize> {
    drivers: [Pin; ROWS],
    senses: [Pin; COLS],
}

impl<const ROWS: usize, const COLS: usize> MatrixWiring<ROWS, COLS> {
    pub const fn new(drivers: [Pin; ROWS], senses: [Pin; COLS]) -> Self {
        assert!(ROWS <= u8::MAX as usize && COLS <= u8::MAX as usize);
        let mut i = 0;
        while i < ROWS + COLS {
            let pin = if i < ROWS { drivers[i] } else { senses[i - ROWS] };
            let mut j = i + 1;
            while j < ROWS + COLS {
                let other = if j < ROWS { drivers[j] } else { senses[j - ROWS] };
                assert!(!pin.same_as(&other), "pin wired to two matrix lines");
                j += 1;
            }
            i += 1;
        }
        MatrixWiring { drivers, senses }
    }

    pub fn driver_pin(&self, line: u8) -> Option<Pin> {
        self.drivers.get(line as usize).copied()
    }

    pub fn sense_pin(&self, line: u8) -> Option<Pin> {
        self.senses.get(line as usize).copied()
    }

    pub const fn driver_line(&self, pin: Pin) -> Option<u8> {
        let mut line = 0;
        while line < ROWS {
            if self.drivers[line].same_as(&pin) {
                return Some(line as u8);
            }
            line += 1;
        }
        None
    }

    pub const fn sense_line(&self, pin: Pin) -> Option<u8> {
        let mut line = 0;
        while line < COLS {
            if self.senses[line].same_as(&pin) {
                return Some(line as u8);
            }
            line += 1;
        }
        None
    }

    pub fn address_for_pins(&self, driver: Pin, sense: Pin) -> Option<SwitchAddress> {
        Some(SwitchAddress::new(
            self.driver_line(driver)?,
            self.sense_line(sense)?,
        ))
    }

    pub fn pins(&self, address: SwitchAddress) -> Option<(Pin, Pin)> {
        Some((
            self.driver_pin(address.driver)?,
            self.sense_pin(address.sense)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIRING: MatrixWiring<2, 3> =
        MatrixWiring::new([Pin::a(0), Pin::a(1)], [Pin::b(9), Pin::b(8), Pin::c(13)]);

    #[test]
    fn resolves_pins_both_ways() {
        let address = WIRING.address_for_pins(Pin::a(1), Pin::c(13)).unwrap();
        assert_eq!(address, SwitchAddress::new(1, 2));
        assert_eq!(WIRING.pins(address), Some((Pin::a(1), Pin::c(13))));
    }

    #[test]
    fn rejects_unwired_pins_and_lines() {
        assert_eq!(WIRING.address_for_pins(Pin::b(9), Pin::b(8)), None);
        assert_eq!(WIRING.driver_pin(2), None);
        assert_eq!(WIRING.pins(SwitchAddress::new(0, 3)), None);
    }

    #[test]
    #[should_panic(expected = "pin wired to two matrix lines")]
    fn duplicate_pin_is_rejected() {
        let _ = MatrixWiring::new([Pin::a(0), Pin::a(1)], [Pin::a(0)]);
    }
}
