//! # Pin numbering
//!
//! GPIO pins are addressed with a single integer, `port * 16 + pin`. For example PA0 is pin 0,
//! PB3 is pin 19 and PL15 is pin 191.
//!
//! Slew rate and drive strength are configured per port, so a pin number mostly serves to select
//! the [`Port`] it belongs to.
use crate::Error;

/// Number of pins in each port
pub const PINS_PER_PORT: u8 = 16;
/// Number of GPIO ports, A to L
pub const NUM_PORTS: usize = 12;

/// Value-level `enum` for GPIO ports
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
}

impl Port {
    pub const ALL: [Port; NUM_PORTS] = [
        Port::A,
        Port::B,
        Port::C,
        Port::D,
        Port::E,
        Port::F,
        Port::G,
        Port::H,
        Port::I,
        Port::J,
        Port::K,
        Port::L,
    ];

    #[inline]
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Value-level `struct` representing pin IDs
///
/// Only constructed through [`PinId::new`] and [`PinId::from_number`], so `num` is always
/// below 16.
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    port: Port,
    num: u8,
}

impl PinId {
    /// Create a pin ID from a port and a pin position inside that port
    ///
    /// Returns [`Error::InvalidArgument`] if `num` is larger than 15
    pub fn new(port: Port, num: u8) -> Result<Self, Error> {
        if num >= PINS_PER_PORT {
            return Err(Error::InvalidArgument);
        }
        Ok(PinId { port, num })
    }

    /// Create a pin ID from a pin number, `port * 16 + pin`
    ///
    /// Returns [`Error::InvalidArgument`] for negative numbers or numbers beyond PL15
    pub fn from_number(pin: i32) -> Result<Self, Error> {
        if pin < 0 {
            return Err(Error::InvalidArgument);
        }
        let port = u8::try_from(pin / PINS_PER_PORT as i32)
            .ok()
            .and_then(Port::from_index)
            .ok_or(Error::InvalidArgument)?;
        Ok(PinId {
            port,
            num: (pin % PINS_PER_PORT as i32) as u8,
        })
    }

    #[inline]
    pub fn port(&self) -> Port {
        self.port
    }

    /// Position of the pin inside its port
    #[inline]
    pub fn num(&self) -> u8 {
        self.num
    }

    /// Pin number, `port * 16 + pin`
    #[inline]
    pub fn number(&self) -> i32 {
        self.port as i32 * PINS_PER_PORT as i32 + self.num as i32
    }

    #[inline]
    pub(super) fn mask_16(&self) -> u16 {
        1 << self.num
    }
}

impl TryFrom<i32> for PinId {
    type Error = Error;

    fn try_from(pin: i32) -> Result<Self, Error> {
        Self::from_number(pin)
    }
}
