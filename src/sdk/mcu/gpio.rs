use crate::config::{PINS_PER_PORT, PORT_COUNT};
use crate::BIT;

/// GPIO ports wired to the shared EINT3 vector.
///
/// Only ports 0 and 2 of the LPC176x have edge detection; every other port is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Port {
    P0 = 0,
    P2 = 2,
}

impl Port {
    pub const ALL: [Port; PORT_COUNT] = [Port::P0, Port::P2];

    /// Slot in per-port tables (0 for port 0, 1 for port 2).
    pub const fn index(self) -> usize {
        match self {
            Port::P0 => 0,
            Port::P2 => 1,
        }
    }

    /// Byte offset of this port's interrupt registers from port 0's.
    pub const fn reg_offset(self) -> u32 {
        (self as u32) << 4
    }
}

impl TryFrom<u8> for Port {
    type Error = PinError;

    fn try_from(port: u8) -> Result<Self, Self::Error> {
        match port {
            0 => Ok(Port::P0),
            2 => Ok(Port::P2),
            _ => Err(PinError::InvalidPort(port)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The port has no edge detection hardware.
    InvalidPort(u8),
    /// Bit 31 and above have no line behind them.
    BitOutOfRange(u8),
}

/// A physical line that can raise the shared vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpioPin {
    port: Port,
    bit: u8,
}

impl GpioPin {
    pub fn new(port: u8, bit: u8) -> Result<Self, PinError> {
        let port = Port::try_from(port)?;
        if bit as usize >= PINS_PER_PORT {
            return Err(PinError::BitOutOfRange(bit));
        }
        Ok(GpioPin { port, bit })
    }

    pub const fn port(&self) -> Port {
        self.port
    }

    pub const fn bit(&self) -> u8 {
        self.bit
    }

    pub const fn mask(&self) -> u32 {
        BIT!(self.bit)
    }
}

/// Pin abstraction layer consumed by the router.
///
/// Maps the application's logical pin identifiers onto physical (port, bit) pairs.
/// `port_of` and `bit_of` are only called for pins that passed `is_interrupt_capable`.
pub trait PinMap {
    type Pin: Copy;

    fn is_interrupt_capable(&self, pin: Self::Pin) -> bool;

    fn port_of(&self, pin: Self::Pin) -> u8;

    fn bit_of(&self, pin: Self::Pin) -> u8;
}

/// Logical pin number: `(port << 5) | bit`.
pub type PinId = u16;

/// Not connected.
pub const P_NC: PinId = 0xffff;

pub const fn pin_id(port: u8, bit: u8) -> PinId {
    ((port as u16) << 5) | (bit as u16 & 0x1f)
}

pub const fn pin_port(pin: PinId) -> u8 {
    ((pin >> 5) & 0b111) as u8
}

pub const fn pin_bit(pin: PinId) -> u8 {
    (pin & 0b11111) as u8
}

// Bonded-out lines of the 100 pin LPC1768/LPC1769, one mask per port
const VALID_PINS: [u32; 5] = [
    0x7fff_8fff, // P0.0-11, P0.15-30
    0xffff_c713, // P1.0-1, P1.4, P1.8-10, P1.14-31
    0x0000_3fff, // P2.0-13
    0x0600_0000, // P3.25-26
    0x3000_0000, // P4.28-29
];

pub const fn pin_is_valid(pin: PinId) -> bool {
    let port = pin_port(pin) as usize;
    port < VALID_PINS.len() && pin >> 8 == 0 && VALID_PINS[port] & BIT!(pin_bit(pin)) != 0
}

/// Pin map for the LPC176x `PinId` encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lpc176xPins;

impl PinMap for Lpc176xPins {
    type Pin = PinId;

    fn is_interrupt_capable(&self, pin: PinId) -> bool {
        pin_is_valid(pin) && Port::try_from(pin_port(pin)).is_ok()
    }

    fn port_of(&self, pin: PinId) -> u8 {
        pin_port(pin)
    }

    fn bit_of(&self, pin: PinId) -> u8 {
        pin_bit(pin)
    }
}
