//! # Hardware Interrupts
//!
//! IRQ and NMI requests are latched on the CPU and serviced between
//! instructions. A request is checked as soon as it is raised and again after
//! every `step()`.
//!
//! - NMI always wins and is never masked.
//! - IRQ is taken only while the interrupt disable flag is clear; otherwise it
//!   stays pending until a CLI, PLP or RTI clears the flag.
//! - A bus whose `irq_active()` reports true acts as a level-triggered IRQ.
//!
//! Entering an interrupt pushes PC (high byte first) and the status with B
//! clear, sets I, loads PC from the line's vector and costs 7 ticks. It does
//! not count as an instruction.

use std::fmt;

use crate::{MemoryBus, Status, CPU};

/// IRQ/BRK vector location (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// NMI vector location (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Ticks charged for entering an interrupt handler.
pub const INTERRUPT_CYCLES: u64 = 7;

/// A hardware interrupt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterruptLine {
    /// Maskable interrupt request
    Irq,
    /// Non-maskable interrupt
    Nmi,
}

impl InterruptLine {
    /// Address of the line's handler vector.
    pub const fn vector(self) -> u16 {
        match self {
            InterruptLine::Irq => IRQ_VECTOR,
            InterruptLine::Nmi => NMI_VECTOR,
        }
    }
}

impl fmt::Display for InterruptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterruptLine::Irq => write!(f, "IRQ"),
            InterruptLine::Nmi => write!(f, "NMI"),
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Raises a maskable interrupt request.
    ///
    /// If the interrupt disable flag is clear the handler is entered right
    /// away; otherwise the request stays pending.
    pub fn interrupt_request(&mut self) {
        self.pending_irq = true;
        self.service_interrupts();
    }

    /// Raises a non-maskable interrupt. The handler is entered right away.
    pub fn non_maskable_interrupt(&mut self) {
        self.pending_nmi = true;
        self.service_interrupts();
    }

    /// Returns true while an IRQ request is waiting for I to clear.
    pub fn irq_pending(&self) -> bool {
        self.pending_irq
    }

    /// Returns true while an NMI request has not been serviced.
    pub fn nmi_pending(&self) -> bool {
        self.pending_nmi
    }

    /// Enters at most one pending interrupt handler, NMI first.
    pub(crate) fn service_interrupts(&mut self) {
        if self.pending_nmi {
            self.pending_nmi = false;
            self.enter_interrupt(InterruptLine::Nmi);
            return;
        }

        let irq_line = self.pending_irq || self.memory.irq_active();
        if irq_line && !self.regs.p.contains(Status::INTERRUPT_DISABLE) {
            self.pending_irq = false;
            self.enter_interrupt(InterruptLine::Irq);
        }
    }

    fn enter_interrupt(&mut self, line: InterruptLine) {
        let return_address = self.regs.pc;
        self.push_word(return_address);

        let status = self.regs.p.to_stack_irq();
        self.push(status);

        self.regs.p.insert(Status::INTERRUPT_DISABLE);
        self.regs.pc = self.read_word(line.vector());
        self.ticks += INTERRUPT_CYCLES;

        tracing::debug!(%line, return_address, handler = self.regs.pc, "interrupt taken");
    }
}
