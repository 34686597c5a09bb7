use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::config::{EINT3_IRQN, EINT3_PRIORITY};
use crate::edge::{disable_edges, enable_edges};
use crate::mode::EdgeMode;
use crate::registry::{Callback, CallbackRegistry};
use crate::sdk::common::bit::{SetBits, ONES_32};
use crate::sdk::mcu::gpio::{GpioPin, PinMap, Port};
use crate::sdk::mcu::gpio_irq::GpioIntRegisters;
use crate::sdk::mcu::irq_i::InterruptController;

/// Routes the shared EINT3 vector to per-pin callbacks.
///
/// One value owns the callback table and the one-shot vector initialisation latch for the
/// lifetime of the program; both the registration calls and [`dispatch`](Self::dispatch)
/// go through a reference to it.
///
/// Registration never reports failure. Pins the pin map rejects are ignored, and so is an
/// attach with an unknown raw mode.
pub struct GpioIrqRouter<R, N, M> {
    registers: R,
    nvic: N,
    pins: M,
    callbacks: CallbackRegistry,
    initialized: Mutex<Cell<bool>>,
}

impl<R, N, M> GpioIrqRouter<R, N, M> {
    pub const fn new(registers: R, nvic: N, pins: M) -> Self {
        GpioIrqRouter {
            registers,
            nvic,
            pins,
            callbacks: CallbackRegistry::new(),
            initialized: Mutex::new(Cell::new(false)),
        }
    }

    pub fn registers(&self) -> &R {
        &self.registers
    }

    pub fn interrupt_controller(&self) -> &N {
        &self.nvic
    }

    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Whether the shared vector has been configured and enabled.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.initialized.borrow(cs).get())
    }
}

impl<R, N, M> GpioIrqRouter<R, N, M>
where
    R: GpioIntRegisters,
    N: InterruptController,
    M: PinMap,
{
    /// Registers `callback` for `pin` and arms the edges selected by `mode`.
    ///
    /// # Algorithm
    ///
    /// 1. Resolve the pin; bail out silently if it cannot raise interrupts
    /// 2. With interrupts masked:
    ///    - On the very first attach, set the EINT3 priority and enable the vector
    ///    - Store the callback, replacing any previous one
    ///    - Clear stale status for the line and arm its edge detectors
    ///
    /// # Notes
    ///
    /// * Plain functions need a cast to pick the `Callback` conversion: `handler as fn()`
    pub fn attach_interrupt(&self, pin: M::Pin, callback: impl Into<Callback>, mode: EdgeMode) {
        let Some(pin) = self.resolve(pin) else {
            #[cfg(feature = "log")]
            log::debug!("attach_interrupt: pin cannot raise interrupts, ignored");
            return;
        };
        let callback = callback.into();

        critical_section::with(|cs| {
            self.initialize(cs);
            self.callbacks.set(cs, pin, callback);
            enable_edges(&self.registers, pin, mode);
        });

        #[cfg(feature = "log")]
        log::trace!("armed P{}.{} for {:?}", pin.port() as u8, pin.bit(), mode);
    }

    /// Same as [`attach_interrupt`](Self::attach_interrupt) with an Arduino mode number
    /// (`CHANGE`, `FALLING`, `RISING`). Unknown modes leave everything untouched.
    pub fn attach_interrupt_raw(&self, pin: M::Pin, callback: impl Into<Callback>, mode: u32) {
        match EdgeMode::from_raw(mode) {
            Some(mode) => self.attach_interrupt(pin, callback, mode),
            None => {
                #[cfg(feature = "log")]
                log::debug!("attach_interrupt: unsupported mode {}, ignored", mode);
            }
        }
    }

    /// Disarms `pin` and forgets its callback.
    ///
    /// The edge detectors are disabled and the line's pending status is cleared before the
    /// slot is emptied, all with interrupts masked, so the dispatcher never sees an armed
    /// line whose callback is gone.
    pub fn detach_interrupt(&self, pin: M::Pin) {
        let Some(pin) = self.resolve(pin) else {
            return;
        };

        critical_section::with(|cs| {
            disable_edges(&self.registers, pin);
            self.callbacks.clear(cs, pin);
        });

        #[cfg(feature = "log")]
        log::trace!("disarmed P{}.{}", pin.port() as u8, pin.bit());
    }

    pub fn is_attached(&self, pin: M::Pin) -> bool {
        match self.resolve(pin) {
            Some(pin) => critical_section::with(|cs| {
                self.callbacks.get(cs, pin.port(), pin.bit()).is_some()
            }),
            None => false,
        }
    }

    /// Body of the shared EINT3 handler.
    ///
    /// # Algorithm
    ///
    /// 1. Snapshot rising and falling status of port 0 and port 2, once each; the block sits on
    ///    the slow APB bus
    /// 2. Clear every status bit of both ports and the vector's pending flag
    /// 3. Drain rising0, falling0, rising2, falling2 in that order, highest bit first,
    ///    invoking the callback of each set bit
    ///
    /// # Notes
    ///
    /// * An edge that latches between the snapshot and the clear is lost, not deferred
    /// * A pin with both edges pending gets two invocations
    /// * Bits without a callback are skipped
    /// * Callbacks run unmasked and may attach or detach pins themselves
    pub fn dispatch(&self) {
        let rise0 = self.registers.rising_status(Port::P0);
        let fall0 = self.registers.falling_status(Port::P0);
        let rise2 = self.registers.rising_status(Port::P2);
        let fall2 = self.registers.falling_status(Port::P2);

        // Clear the interrupts ASAP
        self.registers.clear(Port::P0, ONES_32);
        self.registers.clear(Port::P2, ONES_32);
        self.nvic.clear_pending(EINT3_IRQN);

        for (port, pending) in [
            (Port::P0, rise0),
            (Port::P0, fall0),
            (Port::P2, rise2),
            (Port::P2, fall2),
        ] {
            for bit in SetBits::new(pending) {
                let callback = critical_section::with(|cs| self.callbacks.get(cs, port, bit));
                if let Some(callback) = callback {
                    callback.invoke();
                }
            }
        }
    }

    fn resolve(&self, pin: M::Pin) -> Option<GpioPin> {
        if !self.pins.is_interrupt_capable(pin) {
            return None;
        }
        GpioPin::new(self.pins.port_of(pin), self.pins.bit_of(pin)).ok()
    }

    fn initialize(&self, cs: CriticalSection<'_>) {
        let initialized = self.initialized.borrow(cs);
        if initialized.get() {
            return;
        }

        self.nvic.set_priority(EINT3_IRQN, EINT3_PRIORITY);
        self.nvic.enable(EINT3_IRQN);
        initialized.set(true);

        #[cfg(feature = "log")]
        log::debug!("EINT3 enabled at priority {}", EINT3_PRIORITY);
    }
}
