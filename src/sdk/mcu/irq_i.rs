use crate::sdk::mcu::register::{
    nvic_bit, nvic_word_offset, write_reg_nvic_icpr, write_reg_nvic_ipr, write_reg_nvic_iser,
};

/// Number of priority bits implemented by the LPC176x NVIC.
pub const NVIC_PRIO_BITS: u32 = 5;

/// Interrupt controller primitives the router needs for the shared vector.
pub trait InterruptController {
    fn set_priority(&self, irq: u32, priority: u32);

    fn enable(&self, irq: u32);

    fn clear_pending(&self, irq: u32);
}

/// Encodes a preempt/sub priority pair for the given priority grouping.
///
/// # Parameters
///
/// * `group` - Priority grouping (0-7), as programmed in AIRCR.PRIGROUP
/// * `preempt` - Preemption priority, truncated to the bits the group leaves for it
/// * `sub` - Sub priority, truncated likewise
///
/// # Notes
///
/// * With 5 priority bits and group 0, all bits are preemption bits and `sub` is dropped
pub const fn encode_priority(group: u32, preempt: u32, sub: u32) -> u32 {
    let group = group & 0x07;

    let preempt_bits = if 7 - group > NVIC_PRIO_BITS { NVIC_PRIO_BITS } else { 7 - group };
    let sub_bits = if group + NVIC_PRIO_BITS < 7 { 0 } else { group + NVIC_PRIO_BITS - 7 };

    ((preempt & ((1 << preempt_bits) - 1)) << sub_bits) | (sub & ((1 << sub_bits) - 1))
}

/// Cortex-M3 NVIC.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nvic;

impl InterruptController for Nvic {
    fn set_priority(&self, irq: u32, priority: u32) {
        // Priorities live in the top bits of each IPR byte
        write_reg_nvic_ipr(((priority << (8 - NVIC_PRIO_BITS)) & 0xff) as u8, irq);
    }

    fn enable(&self, irq: u32) {
        write_reg_nvic_iser(nvic_bit(irq), nvic_word_offset(irq));
    }

    fn clear_pending(&self, irq: u32) {
        write_reg_nvic_icpr(nvic_bit(irq), nvic_word_offset(irq));
    }
}

#[cfg(test)]
mod tests {
    use mry::Any;

    use crate::sdk::mcu::register::*;

    use super::*;

    #[test]
    fn test_encode_priority() {
        assert_eq!(encode_priority(0, 1, 0), 1);
        assert_eq!(encode_priority(0, 31, 3), 31);
        // 3 preempt bits, 2 sub bits
        assert_eq!(encode_priority(4, 1, 2), 0b00110);
        assert_eq!(encode_priority(7, 5, 9), 9);
    }

    #[test]
    #[mry::lock(write_reg_nvic_ipr)]
    fn test_set_priority() {
        mock_write_reg_nvic_ipr(Any, Any).returns(());

        Nvic.set_priority(21, 1);

        mock_write_reg_nvic_ipr(0x08, 21).assert_called(1);
    }

    #[test]
    #[mry::lock(write_reg_nvic_iser)]
    #[mry::lock(write_reg_nvic_icpr)]
    fn test_enable_and_clear_pending() {
        mock_write_reg_nvic_iser(Any, Any).returns(());
        mock_write_reg_nvic_icpr(Any, Any).returns(());

        Nvic.enable(21);
        Nvic.clear_pending(21);
        Nvic.enable(34);

        mock_write_reg_nvic_iser(0x0020_0000, 0).assert_called(1);
        mock_write_reg_nvic_icpr(0x0020_0000, 0).assert_called(1);
        mock_write_reg_nvic_iser(0x4, 4).assert_called(1);
    }
}
