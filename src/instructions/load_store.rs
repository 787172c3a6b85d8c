//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register, updating Z and N
//! - STA, STX, STY: store a register; no flags affected
//!
//! Stores write their effective address without reading it first.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.regs.a = value;
    cpu.regs.p.update_nz(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.regs.x = value;
    cpu.regs.p.update_nz(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.regs.y = value;
    cpu.regs.p.update_nz(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.a;
    store(cpu, operand, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.x;
    store(cpu, operand, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.y;
    store(cpu, operand, value);
}

fn store<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    if let Operand::Address { addr, .. } = operand {
        cpu.memory.write_byte(addr, value);
    }
}
