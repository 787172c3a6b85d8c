//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: Add/Subtract with Carry, binary or BCD
//! - AND, ORA, EOR: bitwise logic into the accumulator
//! - BIT: bit test
//! - CMP, CPX, CPY: register comparison
//!
//! Decimal mode follows NMOS behaviour: the accumulator gets the BCD-adjusted
//! result, N and V come from the intermediate sum after the low-nibble
//! adjustment, and Z reflects the plain binary result.

use crate::addressing::Operand;
use crate::{MemoryBus, Status, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Sets C on unsigned overflow, V on signed overflow, and
/// updates Z and N. Uses BCD when the D flag is set and the variant has
/// decimal mode.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    if decimal_active(cpu) {
        adc_decimal(cpu, value);
    } else {
        adc_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). C is cleared on borrow.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    if decimal_active(cpu) {
        sbc_decimal(cpu, value);
    } else {
        // Binary SBC is ADC of the one's complement
        adc_binary(cpu, !value);
    }
}

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.regs.p.contains(Status::DECIMAL) && cpu.config.variant.has_decimal_mode()
}

fn adc_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.p.contains(Status::CARRY) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.regs.p.set(Status::CARRY, result16 > 0xFF);
    // Both operands had the same sign and the result's sign differs
    cpu.regs
        .p
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.regs.p.update_nz(result);
    cpu.regs.a = result;
}

fn adc_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.p.contains(Status::CARRY) as u16;

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    if lo > 9 {
        lo += 6;
    }
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + (lo > 0x0F) as u16;

    let binary = (a as u16 + value as u16 + carry_in) as u8;
    let intermediate = ((hi << 4) | (lo & 0x0F)) as u8;
    cpu.regs.p.set(Status::ZERO, binary == 0);
    cpu.regs.p.set(Status::NEGATIVE, intermediate & 0x80 != 0);
    cpu.regs.p.set(
        Status::OVERFLOW,
        !(a ^ value) & (a ^ intermediate) & 0x80 != 0,
    );

    if hi > 9 {
        hi += 6;
    }
    cpu.regs.p.set(Status::CARRY, hi > 0x0F);
    cpu.regs.a = ((hi << 4) | (lo & 0x0F)) as u8;
}

fn sbc_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let borrow = (!cpu.regs.p.contains(Status::CARRY)) as i16;

    // Flags come from the binary subtraction
    let binary = a as i16 - value as i16 - borrow;
    cpu.regs.p.set(Status::CARRY, binary >= 0);
    cpu.regs.p.set(
        Status::OVERFLOW,
        (a as i16 ^ binary) & (a as i16 ^ value as i16) & 0x80 != 0,
    );
    cpu.regs.p.update_nz(binary as u8);

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 6;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 6;
    }
    cpu.regs.a = (((hi << 4) & 0xF0) | (lo & 0x0F)) as u8;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = cpu.regs.a & value;
    cpu.regs.a = result;
    cpu.regs.p.update_nz(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = cpu.regs.a | value;
    cpu.regs.a = result;
    cpu.regs.p.update_nz(result);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = cpu.regs.a ^ value;
    cpu.regs.a = result;
    cpu.regs.p.update_nz(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.regs.p.set(Status::ZERO, cpu.regs.a & value == 0);
    cpu.regs.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.regs.p.set(Status::OVERFLOW, value & 0x40 != 0);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.regs.a;
    compare(cpu, register, operand);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.regs.x;
    compare(cpu, register, operand);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.regs.y;
    compare(cpu, register, operand);
}

// C = register >= M, Z and N from register - M
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.regs.p.set(Status::CARRY, register >= value);
    cpu.regs.p.update_nz(register.wrapping_sub(value));
}
