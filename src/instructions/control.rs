//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR/RTS: subroutine call and return
//! - RTI: return from interrupt
//! - BRK: Force Interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::Operand;
use crate::interrupts::IRQ_VECTOR;
use crate::{MemoryBus, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The indirect form's NMOS page-wrap bug is applied during operand
/// resolution.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address { addr, .. } = operand {
        cpu.regs.pc = addr;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the JSR's last byte (return address - 1).
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address { addr, .. } = operand {
        let return_address = cpu.regs.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.regs.pc = addr;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status (B dropped, unused bit set), then PC. Unlike RTS the
/// pulled PC is used as is.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.regs.p = Status::from_stack(status);
    cpu.regs.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte but pushes PC+2, skipping a padding byte. The pushed
/// status has B set; the live register does not.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // PC already points at the padding byte
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.regs.p.to_stack_brk();
    cpu.push(status);

    cpu.regs.p.insert(Status::INTERRUPT_DISABLE);
    cpu.regs.pc = cpu.read_word(IRQ_VECTOR);
}
