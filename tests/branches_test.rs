//! Tests for the conditional branch instructions.
//!
//! Tests cover:
//! - Taken and not-taken paths for every condition
//! - Backward branches with negative offsets
//! - Cycle counts: 2 not taken, 3 taken, 4 taken across a page

use hook6502::{Memory, CPU};

/// Helper function to create a CPU with the program at `origin`
fn setup_cpu_at(program: &[u8], origin: u16) -> CPU<Memory> {
    let mut cpu = CPU::new(Memory::new());
    cpu.load(&origin.to_le_bytes(), 0xFFFC).unwrap();
    cpu.load(program, origin as usize).unwrap();
    cpu.reset();
    cpu
}

fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    setup_cpu_at(program, 0x8000)
}

#[test]
fn test_beq_not_taken() {
    // LDA #$01; BEQ +4
    let mut cpu = setup_cpu(&[0xA9, 0x01, 0xF0, 0x04]);

    cpu.step_times(2);
    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.tick_count(), 2 + 2);
}

#[test]
fn test_beq_taken() {
    // LDA #$00; BEQ +4
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0xF0, 0x04]);

    cpu.step_times(2);
    assert_eq!(cpu.pc(), 0x8008);
    assert_eq!(cpu.tick_count(), 2 + 3);
}

#[test]
fn test_bne_backward() {
    // LDX #$03; loop: DEX; BNE loop
    let mut cpu = setup_cpu(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD]);

    cpu.step_times(1 + 3 * 2);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.pc(), 0x8005);
    // two taken branches, one not taken
    assert_eq!(cpu.tick_count(), 2 + 3 * 2 + 3 + 3 + 2);
}

#[test]
fn test_branch_page_cross_penalty() {
    // At $80FB: BCC +$10 lands on $810D
    let mut cpu = setup_cpu_at(&[0x90, 0x10], 0x80FB);

    cpu.step();
    assert_eq!(cpu.pc(), 0x810D);
    assert_eq!(cpu.tick_count(), 4);
}

#[test]
fn test_bcs_and_bcc() {
    // SEC; BCC +2; BCS +2
    let mut cpu = setup_cpu(&[0x38, 0x90, 0x02, 0xB0, 0x02]);

    cpu.step_times(2);
    assert_eq!(cpu.pc(), 0x8003);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8007);
}

#[test]
fn test_bmi_and_bpl() {
    // LDA #$80; BPL +2; BMI +2
    let mut cpu = setup_cpu(&[0xA9, 0x80, 0x10, 0x02, 0x30, 0x02]);

    cpu.step_times(2);
    assert_eq!(cpu.pc(), 0x8004);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8008);
}

#[test]
fn test_bvs_and_bvc() {
    // CLC; LDA #$50; ADC #$50 sets V; BVC +2; BVS +2
    let mut cpu = setup_cpu(&[0x18, 0xA9, 0x50, 0x69, 0x50, 0x50, 0x02, 0x70, 0x02]);

    cpu.step_times(4);
    assert_eq!(cpu.pc(), 0x8007);
    cpu.step();
    assert_eq!(cpu.pc(), 0x800B);
}
