//! CPU construction and reset tests
//!
//! Verifies the power-up register state, the reset vector read and that reset
//! clears counters and pending interrupts while keeping hooks.

use hook6502::{CpuConfig, Memory, Variant, CPU, MEMORY_SIZE};
use std::cell::Cell;
use std::rc::Rc;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut cpu = CPU::new(Memory::new());
    cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
    cpu.load(program, 0x8000).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_power_up_state() {
    let cpu = setup_cpu(&[]);

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.status(), 0x24);
    assert_eq!(cpu.instruction_count(), 0);
    assert_eq!(cpu.tick_count(), 0);
    assert!(!cpu.irq_pending());
    assert!(!cpu.nmi_pending());
}

#[test]
fn test_unloaded_vector_starts_at_zero() {
    let cpu = CPU::new(Memory::new());
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_memory_size() {
    let cpu = setup_cpu(&[]);
    assert_eq!(cpu.memory().size(), MEMORY_SIZE);
    assert_eq!(MEMORY_SIZE, 0x10000);
}

#[test]
fn test_reset_clears_registers_and_counters() {
    // LDA #$11; LDX #$22; LDY #$33; SEC; PHA
    let mut cpu = setup_cpu(&[0xA9, 0x11, 0xA2, 0x22, 0xA0, 0x33, 0x38, 0x48]);
    cpu.step_times(5);
    assert_eq!(cpu.instruction_count(), 5);

    cpu.reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
    assert_eq!(cpu.status(), 0x24);
    assert_eq!(cpu.instruction_count(), 0);
    assert_eq!(cpu.tick_count(), 0);
}

#[test]
fn test_reset_rereads_vector() {
    let mut cpu = setup_cpu(&[]);
    cpu.load(&[0x00, 0xC0], 0xFFFC).unwrap();

    cpu.reset();
    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_reset_keeps_memory_contents() {
    let mut cpu = setup_cpu(&[0xA9, 0x01]);
    cpu.load(&[0x5A], 0x0200).unwrap();

    cpu.reset();
    assert_eq!(cpu.read(0x0200, 1).unwrap(), vec![0x5A]);
    assert_eq!(cpu.read(0x8000, 2).unwrap(), vec![0xA9, 0x01]);
}

#[test]
fn test_reset_drops_pending_interrupts() {
    let mut cpu = setup_cpu(&[0xEA]);

    // I is set after reset, so the request is latched
    cpu.interrupt_request();
    assert!(cpu.irq_pending());

    cpu.reset();
    assert!(!cpu.irq_pending());
}

#[test]
fn test_reset_keeps_instruction_hooks() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA]);
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    cpu.register_instruction_hook(move |_, _| seen.set(seen.get() + 1));

    cpu.step();
    cpu.reset();
    cpu.step();

    assert_eq!(calls.get(), 2);
}

#[test]
fn test_with_config() {
    let config = CpuConfig::default()
        .with_variant(Variant::Ricoh2A03)
        .with_rng_seed(7);
    let cpu = CPU::with_config(Memory::new(), config);

    assert_eq!(cpu.config().variant, Variant::Ricoh2A03);
    assert_eq!(cpu.config().rng_seed, Some(7));
}
