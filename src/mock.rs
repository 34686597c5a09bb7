//! Simulated GPIOINT block and NVIC for host tests.

use core::cell::{Cell, RefCell};
use std::vec::Vec;

use crate::mode::Edges;
use crate::sdk::mcu::gpio::Port;
use crate::sdk::mcu::gpio_irq::GpioIntRegisters;
use crate::sdk::mcu::irq_i::InterruptController;
use crate::BIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    RisingEnable(Port, u32),
    FallingEnable(Port, u32),
    Clear(Port, u32),
    RisingStatus(Port),
    FallingStatus(Port),
}

impl Access {
    fn is_write(&self) -> bool {
        matches!(self, Access::RisingEnable(..) | Access::FallingEnable(..) | Access::Clear(..))
    }
}

#[derive(Default)]
struct PortRegs {
    en_r: Cell<u32>,
    en_f: Cell<u32>,
    stat_r: Cell<u32>,
    stat_f: Cell<u32>,
}

/// Behaves like the hardware: status bits latch only for armed edges and stay set
/// until written to the clear register.
#[derive(Default)]
pub struct SimGpioInt {
    ports: [PortRegs; 2],
    log: RefCell<Vec<Access>>,
    // Edge that lands right after the last status read of a dispatch
    racing_edge: Cell<Option<(Port, u8, Edges)>>,
}

impl SimGpioInt {
    pub fn new() -> Self {
        Self::default()
    }

    fn regs(&self, port: Port) -> &PortRegs {
        &self.ports[port.index()]
    }

    /// Transition on a line; latches only the armed edges.
    pub fn edge(&self, port: Port, bit: u8, edges: Edges) {
        let regs = self.regs(port);
        let mask = BIT!(bit);
        if edges.contains(Edges::RISING) && regs.en_r.get() & mask != 0 {
            regs.stat_r.set(regs.stat_r.get() | mask);
        }
        if edges.contains(Edges::FALLING) && regs.en_f.get() & mask != 0 {
            regs.stat_f.set(regs.stat_f.get() | mask);
        }
    }

    /// Force status bits, armed or not (noise captured before arming).
    pub fn latch(&self, port: Port, bit: u8, edges: Edges) {
        let regs = self.regs(port);
        let mask = BIT!(bit);
        if edges.contains(Edges::RISING) {
            regs.stat_r.set(regs.stat_r.get() | mask);
        }
        if edges.contains(Edges::FALLING) {
            regs.stat_f.set(regs.stat_f.get() | mask);
        }
    }

    /// Deliver an edge between the port 2 falling status read and the clear.
    pub fn race_edge(&self, port: Port, bit: u8, edges: Edges) {
        self.racing_edge.set(Some((port, bit, edges)));
    }

    pub fn enables(&self, port: Port) -> (u32, u32) {
        let regs = self.regs(port);
        (regs.en_r.get(), regs.en_f.get())
    }

    pub fn any_pending(&self) -> bool {
        self.ports.iter().any(|regs| regs.stat_r.get() | regs.stat_f.get() != 0)
    }

    pub fn accesses(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Access> {
        self.log.borrow().iter().copied().filter(Access::is_write).collect()
    }

    pub fn take_writes(&self) -> Vec<Access> {
        let writes = self.writes();
        self.log.borrow_mut().clear();
        writes
    }
}

impl GpioIntRegisters for SimGpioInt {
    fn rising_enable(&self, port: Port) -> u32 {
        self.regs(port).en_r.get()
    }

    fn set_rising_enable(&self, port: Port, value: u32) {
        self.log.borrow_mut().push(Access::RisingEnable(port, value));
        self.regs(port).en_r.set(value);
    }

    fn falling_enable(&self, port: Port) -> u32 {
        self.regs(port).en_f.get()
    }

    fn set_falling_enable(&self, port: Port, value: u32) {
        self.log.borrow_mut().push(Access::FallingEnable(port, value));
        self.regs(port).en_f.set(value);
    }

    fn rising_status(&self, port: Port) -> u32 {
        self.log.borrow_mut().push(Access::RisingStatus(port));
        self.regs(port).stat_r.get()
    }

    fn falling_status(&self, port: Port) -> u32 {
        self.log.borrow_mut().push(Access::FallingStatus(port));
        let status = self.regs(port).stat_f.get();
        if port == Port::P2 {
            if let Some((port, bit, edges)) = self.racing_edge.take() {
                self.edge(port, bit, edges);
            }
        }
        status
    }

    fn clear(&self, port: Port, mask: u32) {
        self.log.borrow_mut().push(Access::Clear(port, mask));
        let regs = self.regs(port);
        regs.stat_r.set(regs.stat_r.get() & !mask);
        regs.stat_f.set(regs.stat_f.get() & !mask);
    }
}

#[derive(Default)]
pub struct SimNvic {
    pub priority: Cell<Option<(u32, u32)>>,
    pub enable_calls: Cell<u32>,
    pub enabled: Cell<Option<u32>>,
    pub pending: Cell<bool>,
}

impl SimNvic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InterruptController for SimNvic {
    fn set_priority(&self, irq: u32, priority: u32) {
        self.priority.set(Some((irq, priority)));
    }

    fn enable(&self, irq: u32) {
        self.enable_calls.set(self.enable_calls.get() + 1);
        self.enabled.set(Some(irq));
    }

    fn clear_pending(&self, _irq: u32) {
        self.pending.set(false);
    }
}
