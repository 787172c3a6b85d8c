//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status (with B and unused set)
//! - PLA: Pull Accumulator (updates Z and N)
//! - PLP: Pull Processor Status (B dropped, unused set)
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page and wraps within it.

use crate::{MemoryBus, Status, CPU};

pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.regs.a;
    cpu.push(value);
}

pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.p.to_stack_brk();
    cpu.push(status);
}

pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.regs.a = value;
    cpu.regs.p.update_nz(value);
}

pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.regs.p = Status::from_stack(status);
}
