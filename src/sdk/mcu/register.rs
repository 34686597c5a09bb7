extern crate core;
extern crate paste;

use crate::BIT;

pub const GPIOINT_BASE_ADDR: u32 = 0x4002_8000;
pub const NVIC_BASE_ADDR: u32 = 0xE000_E000;

#[macro_export]
macro_rules! regrw_idx {
    ( $x:ident, $base:expr, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>](i: u32) -> $s {
                unsafe {
                    return core::ptr::read_volatile((($base + $a) + i) as *mut $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s, i: u32) {
                unsafe {
                    core::ptr::write_volatile((($base + $a) + i) as *mut $s, value)
                }
            }
        }
    };
}

/****************************************************
 gpio interrupt regs struct: begin  addr : 0x4002_8080
 per port registers are indexed by `port << 4`, so port 2 sits 0x20 above port 0
 *****************************************************/
regrw_idx!(reg_io_int_stat_r, GPIOINT_BASE_ADDR, 0x84, u32);
regrw_idx!(reg_io_int_stat_f, GPIOINT_BASE_ADDR, 0x88, u32);
regrw_idx!(reg_io_int_clr, GPIOINT_BASE_ADDR, 0x8c, u32);
regrw_idx!(reg_io_int_en_r, GPIOINT_BASE_ADDR, 0x90, u32);
regrw_idx!(reg_io_int_en_f, GPIOINT_BASE_ADDR, 0x94, u32);

/****************************************************
 nvic regs struct: begin  addr : 0xE000_E100
 word registers are indexed by `(irq >> 5) << 2`, priority bytes by `irq`
 *****************************************************/
regrw_idx!(reg_nvic_iser, NVIC_BASE_ADDR, 0x100, u32);
regrw_idx!(reg_nvic_icpr, NVIC_BASE_ADDR, 0x280, u32);
regrw_idx!(reg_nvic_ipr, NVIC_BASE_ADDR, 0x400, u8);

pub const fn nvic_word_offset(irq: u32) -> u32 {
    (irq >> 5) << 2
}

pub const fn nvic_bit(irq: u32) -> u32 {
    BIT!(irq & 0x1f)
}
