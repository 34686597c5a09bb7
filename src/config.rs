use crate::sdk::mcu::irq_i::encode_priority;

// Shared vector for every GPIO edge on ports 0 and 2
pub const EINT3_IRQN: u32 = 21;

// group 0, preempt 1, sub 0
pub const EINT3_PRIORITY: u32 = encode_priority(0, 1, 0);

// Lines per port that can hold a callback; bit 31 is not representable
pub const PINS_PER_PORT: usize = 31;

// Ports wired to the shared vector
pub const PORT_COUNT: usize = 2;
