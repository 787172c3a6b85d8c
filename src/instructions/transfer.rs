//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy a register and update Z and N.
//! TXS copies X into the stack pointer and affects no flags.

use crate::{MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.p.update_nz(cpu.regs.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.p.update_nz(cpu.regs.y);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.p.update_nz(cpu.regs.a);
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.p.update_nz(cpu.regs.a);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.p.update_nz(cpu.regs.x);
}

/// TXS does not touch the flags.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.sp = cpu.regs.x;
}
