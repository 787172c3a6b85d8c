//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory (read once, written once); INX/INY/DEX/DEY modify
//! the index registers. All wrap at 8 bits and update Z and N.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify_memory(cpu, operand, |value| value.wrapping_add(1));
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify_memory(cpu, operand, |value| value.wrapping_sub(1));
}

fn modify_memory<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, op: impl FnOnce(u8) -> u8) {
    if let Operand::Address { addr, .. } = operand {
        let result = op(cpu.memory.read_byte(addr));
        cpu.memory.write_byte(addr, result);
        cpu.regs.p.update_nz(result);
    }
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.p.update_nz(cpu.regs.x);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.p.update_nz(cpu.regs.y);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.p.update_nz(cpu.regs.x);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.p.update_nz(cpu.regs.y);
}
