//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate either on the accumulator or, as
//! read-modify-write instructions, on memory. A memory operand is read once
//! and written once.

use crate::addressing::Operand;
use crate::{MemoryBus, Status, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction. Bit 7 goes to C.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction. Bit 0 goes to C.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction through the carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction through the carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}

// Applies `op(value, carry_in) -> (result, carry_out)` to the operand and
// writes the result back, updating C, Z and N.
fn modify<M, F>(cpu: &mut CPU<M>, operand: Operand, op: F)
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let carry_in = cpu.regs.p.contains(Status::CARRY);
    let value = cpu.operand_value(operand);
    let (result, carry_out) = op(value, carry_in);

    match operand {
        Operand::Address { addr, .. } => cpu.memory.write_byte(addr, result),
        _ => cpu.regs.a = result,
    }

    cpu.regs.p.set(Status::CARRY, carry_out);
    cpu.regs.p.update_nz(result);
}
