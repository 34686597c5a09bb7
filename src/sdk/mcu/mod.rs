pub mod gpio;
pub mod gpio_irq;
pub mod irq_i;
pub mod register;
