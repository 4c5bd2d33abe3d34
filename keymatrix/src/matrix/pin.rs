use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    pub port: Port,
    pub number: u8,
}

impl Pin {
    pub const fn new(port: Port, number: u8) -> Self {
        Pin { port, number }
    }

    pub const fn a(number: u8) -> Self {
        Self::new(Port::A, number)
    }

    pub const fn b(number: u8) -> Self {
        Self::new(Port::B, number)
    }

    pub const fn c(number: u8) -> Self {
        Self::new(Port::C, number)
    }

    // `PartialEq` is not usable in const fn yet.
    pub(crate) const fn same_as(&self, other: &Pin) -> bool {
        self.port as u8 == other.port as u8 && self.number == other.number
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Port::A => "A",
            Port::B => "B",
            Port::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.port, self.number)
    }
}
