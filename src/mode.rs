use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Arduino `PinStatus` values accepted by `attach_interrupt_raw`.
pub const CHANGE: u32 = 2;
pub const FALLING: u32 = 3;
pub const RISING: u32 = 4;

bitflags::bitflags! {
    /// Edge detectors of a single line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Edges: u8 {
        const RISING = 0b01;
        const FALLING = 0b10;
    }
}

/// Which transitions of a pin fire its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u32)]
pub enum EdgeMode {
    Change = CHANGE,
    Falling = FALLING,
    Rising = RISING,
}

impl EdgeMode {
    /// Decode an Arduino style mode number. `LOW`/`HIGH` and anything unknown yield `None`.
    pub fn from_raw(mode: u32) -> Option<Self> {
        EdgeMode::from_u32(mode)
    }

    /// Detectors to arm; the complement is disarmed.
    pub const fn edges(self) -> Edges {
        match self {
            EdgeMode::Rising => Edges::RISING,
            EdgeMode::Falling => Edges::FALLING,
            EdgeMode::Change => Edges::all(),
        }
    }
}
