//! The keyboard PCB's 2 × 17 connector. Odd pins run along the top edge
//! from pin 1, even pins along the bottom from pin 2.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    Row(u8),
    Col(u8),
    /// Numbered like the PCB, `Led(82)` is L82.
    Led(u8),
    Supply3V,
    NotConnected,
}

pub const PINS: u8 = 34;

const TOP: [Signal; 17] = [
    Signal::Row(0),
    Signal::Row(2),
    Signal::Row(4),
    Signal::Row(6),
    Signal::Col(0),
    Signal::Col(2),
    Signal::Col(4),
    Signal::Col(6),
    Signal::Col(8),
    Signal::Col(10),
    Signal::Col(12),
    Signal::Col(14),
    Signal::NotConnected,
    Signal::Led(4),
    Signal::Led(3),
    Signal::Led(1),
    Signal::Led(82),
];

const BOTTOM: [Signal; 17] = [
    Signal::Row(1),
    Signal::Row(3),
    Signal::Row(5),
    Signal::Row(7),
    Signal::Col(1),
    Signal::Col(3),
    Signal::Col(5),
    Signal::Col(7),
    Signal::Col(9),
    Signal::Col(11),
    Signal::Col(13),
    Signal::Col(15),
    Signal::Supply3V,
    Signal::Led(6),
    Signal::Led(5),
    Signal::Led(2),
    Signal::NotConnected,
];

/// Signal on connector pin `pin` (1-based).
pub fn signal(pin: u8) -> Option<Signal> {
    if pin == 0 || pin > PINS {
        return None;
    }
    let index = usize::from((pin - 1) / 2);
    if pin % 2 == 1 {
        Some(TOP[index])
    } else {
        Some(BOTTOM[index])
    }
}

/// Connector pin carrying `signal`. Unconnected pins are not looked up.
pub fn pin_for(signal: Signal) -> Option<u8> {
    if signal == Signal::NotConnected {
        return None;
    }
    (1..=PINS).find(|pin| self::signal(*pin) == Some(signal))
}
