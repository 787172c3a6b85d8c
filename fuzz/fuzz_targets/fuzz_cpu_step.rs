//! Fuzz target for CPU step execution.
//!
//! This target seeds registers and memory from arbitrary input, then runs a
//! few instructions with interrupts and bus hooks in play to find panics.

#![no_main]

use arbitrary::Arbitrary;
use hook6502::{HookKind, Memory, Status, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed status byte, loaded through PLP
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes executed after the register setup prologue
    instruction_bytes: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Instructions to run after the prologue
    steps: u8,
    raise_irq: bool,
    raise_nmi: bool,
    hook_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;
    let mut memory = Memory::new();

    // Reset at 0x8000, IRQ at 0x9000, NMI at 0xA000
    let _ = memory.load(&[0x00, 0xA0, 0x00, 0x80, 0x00, 0x90], 0xFFFA);

    let _ = memory.load(&input.memory.zero_page, 0x0000);
    let _ = memory.load(&input.memory.stack_page, 0x0100);
    let _ = memory.load(&input.memory.main_memory, 0x4000);

    // LDX #sp; TXS; LDA #p; PHA; PLP; LDA #a; LDX #x; LDY #y
    let prologue = [
        0xA2, state.sp, 0x9A, 0xA9, state.status, 0x48, 0x28, 0xA9, state.a, 0xA2, state.x,
        0xA0, state.y,
    ];
    let _ = memory.load(&prologue, 0x8000);
    let _ = memory.load(&input.memory.instruction_bytes, 0x8000 + prologue.len());

    memory.register_read_write_hook(input.hook_address, HookKind::ReadWrite, |_, _| {});

    let mut cpu = CPU::new(memory);
    cpu.step_times(8);
    assert_eq!(cpu.sp(), state.sp);

    if input.raise_irq {
        cpu.interrupt_request();
    }
    if input.raise_nmi {
        cpu.non_maskable_interrupt();
    }

    let before = cpu.tick_count();
    let count = cpu.step_times(u64::from(input.steps % 32));

    // Invariants that must hold for any instruction stream
    assert_eq!(count, 8 + u64::from(input.steps % 32));
    assert!(cpu.tick_count() >= before);
    assert!(cpu.flags().contains(Status::UNUSED));
    assert!(!cpu.flags().contains(Status::BREAK));
});
