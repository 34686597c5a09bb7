use crate::sdk::mcu::gpio::Port;
use crate::sdk::mcu::register::{
    read_reg_io_int_en_f, read_reg_io_int_en_r, read_reg_io_int_stat_f, read_reg_io_int_stat_r,
    write_reg_io_int_clr, write_reg_io_int_en_f, write_reg_io_int_en_r,
};

/// Edge detection registers of the GPIO interrupt block.
///
/// All values are raw 32 bit port masks. Implementers must perform the accesses in
/// the order they are called; the router relies on that to keep enable and pending
/// state consistent.
///
/// # Notes
///
/// * Status registers are sticky: a latched edge stays set until written to `clear`
/// * Writing to `clear` only affects the bits that are set in `mask`
pub trait GpioIntRegisters {
    fn rising_enable(&self, port: Port) -> u32;

    fn set_rising_enable(&self, port: Port, value: u32);

    fn falling_enable(&self, port: Port) -> u32;

    fn set_falling_enable(&self, port: Port, value: u32);

    fn rising_status(&self, port: Port) -> u32;

    fn falling_status(&self, port: Port) -> u32;

    fn clear(&self, port: Port, mask: u32);
}

/// The LPC176x GPIOINT block at `0x4002_8080`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lpc176xGpioInt;

impl GpioIntRegisters for Lpc176xGpioInt {
    #[inline]
    fn rising_enable(&self, port: Port) -> u32 {
        read_reg_io_int_en_r(port.reg_offset())
    }

    #[inline]
    fn set_rising_enable(&self, port: Port, value: u32) {
        write_reg_io_int_en_r(value, port.reg_offset())
    }

    #[inline]
    fn falling_enable(&self, port: Port) -> u32 {
        read_reg_io_int_en_f(port.reg_offset())
    }

    #[inline]
    fn set_falling_enable(&self, port: Port, value: u32) {
        write_reg_io_int_en_f(value, port.reg_offset())
    }

    #[inline]
    fn rising_status(&self, port: Port) -> u32 {
        read_reg_io_int_stat_r(port.reg_offset())
    }

    #[inline]
    fn falling_status(&self, port: Port) -> u32 {
        read_reg_io_int_stat_f(port.reg_offset())
    }

    #[inline]
    fn clear(&self, port: Port, mask: u32) {
        write_reg_io_int_clr(mask, port.reg_offset())
    }
}
