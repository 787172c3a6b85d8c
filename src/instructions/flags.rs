//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{MemoryBus, Status, CPU};

pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.remove(Status::CARRY);
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.insert(Status::CARRY);
}

/// Clearing I lets a pending IRQ be serviced right after this instruction.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.remove(Status::INTERRUPT_DISABLE);
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.insert(Status::INTERRUPT_DISABLE);
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.remove(Status::OVERFLOW);
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.remove(Status::DECIMAL);
}

pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.insert(Status::DECIMAL);
}
