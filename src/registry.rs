use core::cell::RefCell;
use core::fmt;

use critical_section::{CriticalSection, Mutex};

use crate::config::{PINS_PER_PORT, PORT_COUNT};
use crate::sdk::mcu::gpio::{GpioPin, Port};

/// Something that can be run when a pin's edge fires.
///
/// Called from interrupt context: implementations must not block and should return quickly.
pub trait InterruptHandler {
    fn on_interrupt(&self);
}

/// A registered edge callback.
///
/// The registry only ever holds the address; the caller keeps the target alive, which the
/// `'static` bound enforces.
#[derive(Clone, Copy)]
pub enum Callback {
    Function(fn()),
    Handler(&'static (dyn InterruptHandler + Sync)),
}

impl Callback {
    #[inline]
    pub fn invoke(&self) {
        match self {
            Callback::Function(f) => f(),
            Callback::Handler(h) => h.on_interrupt(),
        }
    }
}

impl From<fn()> for Callback {
    fn from(f: fn()) -> Self {
        Callback::Function(f)
    }
}

impl<T: InterruptHandler + Sync> From<&'static T> for Callback {
    fn from(handler: &'static T) -> Self {
        Callback::Handler(handler)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Function(func) => write!(f, "Function({:p})", *func as *const ()),
            Callback::Handler(h) => write!(f, "Handler({:p})", *h as *const _ as *const ()),
        }
    }
}

type CallbackTable = [[Option<Callback>; PINS_PER_PORT]; PORT_COUNT];

/// Per-port callback slots, shared between normal and interrupt context.
///
/// Every accessor requires a `CriticalSection` token, so the masking that keeps the table
/// consistent with the edge-enable registers is visible at each call site.
pub struct CallbackRegistry {
    slots: Mutex<RefCell<CallbackTable>>,
}

impl CallbackRegistry {
    pub const fn new() -> Self {
        CallbackRegistry {
            slots: Mutex::new(RefCell::new([[None; PINS_PER_PORT]; PORT_COUNT])),
        }
    }

    /// Store `callback` for `pin`, replacing whatever was there.
    pub fn set(&self, cs: CriticalSection<'_>, pin: GpioPin, callback: Callback) {
        self.slots.borrow_ref_mut(cs)[pin.port().index()][pin.bit() as usize] = Some(callback);
    }

    pub fn clear(&self, cs: CriticalSection<'_>, pin: GpioPin) {
        self.slots.borrow_ref_mut(cs)[pin.port().index()][pin.bit() as usize] = None;
    }

    /// Callback for a raw status bit. Bits without a slot read as empty.
    pub fn get(&self, cs: CriticalSection<'_>, port: Port, bit: u8) -> Option<Callback> {
        self.slots.borrow_ref(cs)[port.index()].get(bit as usize).copied().flatten()
    }

    /// Number of occupied slots.
    pub fn len(&self, cs: CriticalSection<'_>) -> usize {
        self.slots.borrow_ref(cs).iter().flatten().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self, cs: CriticalSection<'_>) -> bool {
        self.len(cs) == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}
