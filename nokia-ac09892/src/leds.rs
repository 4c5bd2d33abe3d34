use keymatrix::matrix::Pin;

/// Host lock indicators, as bits of a HID LED output report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    NumLock,
    CapsLock,
    ScrollLock,
}

impl Indicator {
    pub const fn report_mask(self) -> u8 {
        match self {
            Indicator::NumLock => 0x01,
            Indicator::CapsLock => 0x02,
            Indicator::ScrollLock => 0x04,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led {
    /// Name on the PCB, e.g. `L82`.
    pub name: &'static str,
    pub pin: Pin,
    pub indicator: Option<Indicator>,
}

impl Led {
    /// Whether this LED should be on for a host LED report. LEDs without an
    /// indicator stay off.
    pub fn lit(&self, report: u8) -> bool {
        self.indicator
            .is_some_and(|indicator| report & indicator.report_mask() != 0)
    }
}

/// LEDs wired to the blackpill. L3 to L6 reach the connector but are not
/// connected.
pub const LEDS: [Led; 3] = [
    Led {
        name: "L1",
        pin: Pin::c(13),
        indicator: None,
    },
    Led {
        name: "L2",
        pin: Pin::c(14),
        indicator: None,
    },
    Led {
        name: "L82",
        pin: Pin::c(15),
        indicator: Some(Indicator::CapsLock),
    },
];

pub fn led_for_indicator(indicator: Indicator) -> Option<&'static Led> {
    LEDS.iter().find(|led| led.indicator == Some(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_lock_is_l82_on_c15() {
        let led = led_for_indicator(Indicator::CapsLock).unwrap();
        assert_eq!(led.name, "L82");
        assert_eq!(led.pin, Pin::c(15));
        assert_eq!(led_for_indicator(Indicator::NumLock), None);
    }

    #[test]
    fn follows_host_report() {
        let caps = &LEDS[2];
        assert!(caps.lit(0x02));
        assert!(caps.lit(0x07));
        assert!(!caps.lit(0x05));
        assert!(!LEDS[0].lit(0xff));
    }
}
