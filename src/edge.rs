use crate::mode::{EdgeMode, Edges};
use crate::sdk::mcu::gpio::GpioPin;
use crate::sdk::mcu::gpio_irq::GpioIntRegisters;
use crate::{BM_CLR, BM_SET};

/// Arms edge detection for a single line.
///
/// # Parameters
///
/// * `regs` - GPIO interrupt register block
/// * `pin` - The physical line to arm
/// * `mode` - Which edges should latch a status bit
///
/// # Algorithm
///
/// 1. Write the pin's bit to the port clear register, dropping any edge latched before arming
/// 2. Set the rising enable bit if the mode includes rising edges, clear it otherwise
/// 3. Same for the falling enable bit
///
/// # Notes
///
/// * Re-arming with another mode disarms the edge the new mode no longer wants
/// * Other lines of the port keep their enable bits
pub fn enable_edges<R: GpioIntRegisters>(regs: &R, pin: GpioPin, mode: EdgeMode) {
    let port = pin.port();
    let mask = pin.mask();
    let edges = mode.edges();

    regs.clear(port, mask);

    let mut rising = regs.rising_enable(port);
    if edges.contains(Edges::RISING) {
        BM_SET!(rising, mask);
    } else {
        BM_CLR!(rising, mask);
    }
    regs.set_rising_enable(port, rising);

    let mut falling = regs.falling_enable(port);
    if edges.contains(Edges::FALLING) {
        BM_SET!(falling, mask);
    } else {
        BM_CLR!(falling, mask);
    }
    regs.set_falling_enable(port, falling);
}

/// Disarms both edges of a line, then drops its pending status so nothing stale is
/// reported if the line is armed again later.
pub fn disable_edges<R: GpioIntRegisters>(regs: &R, pin: GpioPin) {
    let port = pin.port();
    let mask = pin.mask();

    let mut rising = regs.rising_enable(port);
    BM_CLR!(rising, mask);
    regs.set_rising_enable(port, rising);

    let mut falling = regs.falling_enable(port);
    BM_CLR!(falling, mask);
    regs.set_falling_enable(port, falling);

    regs.clear(port, mask);
}
