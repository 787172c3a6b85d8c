//! Tests for the flag instructions and register transfers.

use hook6502::{Memory, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut cpu = CPU::new(Memory::new());
    cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
    cpu.load(program, 0x8000).unwrap();
    cpu.reset();
    cpu
}

// ========== Flags ==========

#[test]
fn test_sec_clc() {
    let mut cpu = setup_cpu(&[0x38, 0x18]);

    cpu.step();
    assert!(cpu.flags().contains(Status::CARRY));
    cpu.step();
    assert!(!cpu.flags().contains(Status::CARRY));
    assert_eq!(cpu.tick_count(), 4);
}

#[test]
fn test_cli_sei() {
    let mut cpu = setup_cpu(&[0x58, 0x78]);

    cpu.step();
    assert!(!cpu.flags().contains(Status::INTERRUPT_DISABLE));
    cpu.step();
    assert!(cpu.flags().contains(Status::INTERRUPT_DISABLE));
}

#[test]
fn test_sed_cld() {
    let mut cpu = setup_cpu(&[0xF8, 0xD8]);

    cpu.step();
    assert_eq!(cpu.status(), 0x2C);
    cpu.step();
    assert_eq!(cpu.status(), 0x24);
}

#[test]
fn test_clv() {
    // CLC; LDA #$7F; ADC #$01 sets V; CLV
    let mut cpu = setup_cpu(&[0x18, 0xA9, 0x7F, 0x69, 0x01, 0xB8]);

    cpu.step_times(3);
    assert!(cpu.flags().contains(Status::OVERFLOW));
    cpu.step();
    assert!(!cpu.flags().contains(Status::OVERFLOW));
}

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    // LDA #$80; TAX; TAY
    let mut cpu = setup_cpu(&[0xA9, 0x80, 0xAA, 0xA8]);

    cpu.step_times(3);
    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flags().contains(Status::NEGATIVE));
}

#[test]
fn test_txa_tya() {
    // LDX #$00; LDA #$05; TXA
    let mut cpu = setup_cpu(&[0xA2, 0x00, 0xA9, 0x05, 0x8A, 0xA0, 0x09, 0x98]);

    cpu.step_times(3);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().contains(Status::ZERO));

    // LDY #$09; TYA
    cpu.step_times(2);
    assert_eq!(cpu.a(), 0x09);
    assert!(!cpu.flags().contains(Status::ZERO));
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu(&[0xBA]);

    cpu.step();
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flags().contains(Status::NEGATIVE));
}

#[test]
fn test_txs_leaves_flags() {
    // LDX #$00 sets Z; LDA #$01 clears it; TXS
    let mut cpu = setup_cpu(&[0xA2, 0x00, 0xA9, 0x01, 0x9A]);

    cpu.step_times(2);
    let status = cpu.status();
    cpu.step();
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), status);
}
