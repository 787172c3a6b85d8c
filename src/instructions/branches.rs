//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS share one implementation; the
//! dispatcher evaluates the flag condition.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use crate::addressing::{pages_differ, Operand};
use crate::{MemoryBus, CPU};

/// Branches by the relative offset when `condition` holds.
///
/// Cycle timing:
/// - 2 cycles if branch not taken (charged by the opcode table)
/// - +1 cycle if branch taken to same page
/// - +2 cycles if branch taken to different page
///
/// No flags are affected.
pub(crate) fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, condition: bool) {
    let Operand::Relative(offset) = operand else {
        return;
    };
    if !condition {
        return;
    }

    // PC already points past the operand byte
    let origin = cpu.regs.pc;
    let target = origin.wrapping_add_signed(offset as i16);

    cpu.ticks += 1;
    if pages_differ(origin, target) {
        cpu.ticks += 1;
    }
    cpu.regs.pc = target;
}
