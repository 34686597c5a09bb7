//! GPIO edge interrupts for the LPC176x.
//!
//! Every interrupt-capable line of ports 0 and 2 shares the single EINT3 vector. This crate
//! keeps one callback per line, arms the rising/falling detectors, and demultiplexes EINT3
//! back to the callbacks of the lines that actually fired.
//!
//! ```no_run
//! use lpc176x_gpio_irq::{attach_interrupt, detach_interrupt, pin_id, EdgeMode};
//!
//! fn on_endstop() {}
//!
//! attach_interrupt(pin_id(0, 3), on_endstop as fn(), EdgeMode::Rising);
//! detach_interrupt(pin_id(0, 3));
//! ```
//!
//! With the `default-handler` feature (on by default) the crate exports `EINT3_IRQHandler`
//! wired to [`GPIO_INTERRUPTS`]. Turn the feature off to provide that symbol yourself; the
//! replacement takes over the vector completely and may call
//! [`GpioIrqRouter::dispatch`] or not.
#![cfg_attr(not(test), no_std)]

pub mod sdk;
pub mod config;
pub mod mode;
pub mod registry;
pub mod edge;
pub mod router;

#[cfg(test)]
mod mock;

pub use mode::{EdgeMode, Edges, CHANGE, FALLING, RISING};
pub use registry::{Callback, CallbackRegistry, InterruptHandler};
pub use router::GpioIrqRouter;
pub use sdk::common::bit::SetBits;
pub use sdk::mcu::gpio::{pin_id, GpioPin, Lpc176xPins, PinError, PinId, PinMap, Port, P_NC};
pub use sdk::mcu::gpio_irq::{GpioIntRegisters, Lpc176xGpioInt};
pub use sdk::mcu::irq_i::{encode_priority, InterruptController, Nvic};

pub type Lpc176xRouter = GpioIrqRouter<Lpc176xGpioInt, Nvic, Lpc176xPins>;

/// The router behind the free functions and the default EINT3 handler.
pub static GPIO_INTERRUPTS: Lpc176xRouter = GpioIrqRouter::new(Lpc176xGpioInt, Nvic, Lpc176xPins);

/// Calls `callback` whenever `pin` sees an edge selected by `mode`.
///
/// Pins that cannot raise interrupts are silently ignored.
pub fn attach_interrupt(pin: PinId, callback: impl Into<Callback>, mode: EdgeMode) {
    GPIO_INTERRUPTS.attach_interrupt(pin, callback, mode);
}

/// [`attach_interrupt`] taking an Arduino mode number.
pub fn attach_interrupt_raw(pin: PinId, callback: impl Into<Callback>, mode: u32) {
    GPIO_INTERRUPTS.attach_interrupt_raw(pin, callback, mode);
}

pub fn detach_interrupt(pin: PinId) {
    GPIO_INTERRUPTS.detach_interrupt(pin);
}

#[cfg(feature = "default-handler")]
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn EINT3_IRQHandler() {
    GPIO_INTERRUPTS.dispatch();
}
