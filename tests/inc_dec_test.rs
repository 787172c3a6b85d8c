//! Tests for INC, DEC, INX, INY, DEX and DEY.

use hook6502::{Memory, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut cpu = CPU::new(Memory::new());
    cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
    cpu.load(program, 0x8000).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_inc_zero_page_wraps() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.load(&[0xFF], 0x0010).unwrap();

    cpu.step();
    assert_eq!(cpu.read(0x0010, 1).unwrap(), vec![0x00]);
    assert!(cpu.flags().contains(Status::ZERO));
    assert_eq!(cpu.tick_count(), 5);
}

#[test]
fn test_dec_absolute() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x04]);
    cpu.load(&[0x00], 0x0400).unwrap();

    cpu.step();
    assert_eq!(cpu.read(0x0400, 1).unwrap(), vec![0xFF]);
    assert!(cpu.flags().contains(Status::NEGATIVE));
    assert_eq!(cpu.tick_count(), 6);
}

#[test]
fn test_inc_absolute_x_no_page_penalty() {
    // LDX #$01; INC $04FF,X
    let mut cpu = setup_cpu(&[0xA2, 0x01, 0xFE, 0xFF, 0x04]);

    cpu.step_times(2);
    assert_eq!(cpu.read(0x0500, 1).unwrap(), vec![0x01]);
    assert_eq!(cpu.tick_count(), 2 + 7);
}

#[test]
fn test_inx_wraps() {
    // LDX #$FF; INX
    let mut cpu = setup_cpu(&[0xA2, 0xFF, 0xE8]);

    cpu.step_times(2);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flags().contains(Status::ZERO));
}

#[test]
fn test_iny() {
    // LDY #$7F; INY
    let mut cpu = setup_cpu(&[0xA0, 0x7F, 0xC8]);

    cpu.step_times(2);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flags().contains(Status::NEGATIVE));
}

#[test]
fn test_dex_wraps() {
    let mut cpu = setup_cpu(&[0xCA]);

    cpu.step();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flags().contains(Status::NEGATIVE));
    assert_eq!(cpu.tick_count(), 2);
}

#[test]
fn test_dey_to_zero() {
    // LDY #$01; DEY
    let mut cpu = setup_cpu(&[0xA0, 0x01, 0x88]);

    cpu.step_times(2);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flags().contains(Status::ZERO));
}
