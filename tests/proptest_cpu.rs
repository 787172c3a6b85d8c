//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use hook6502::{Memory, Mnemonic, Status, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut cpu = CPU::new(Memory::new());
    cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
    cpu.load(program, 0x8000).unwrap();
    cpu.reset();
    cpu
}

/// Opcodes that don't modify PC in special ways (excludes branches, jumps, calls, returns)
fn straight_line_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !m.mnemonic.is_branch()
                && !matches!(
                    m.mnemonic,
                    Mnemonic::Jmp | Mnemonic::Jsr | Mnemonic::Rts | Mnemonic::Rti | Mnemonic::Brk
                )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    #[test]
    fn prop_lda_immediate_sets_nz(value in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xA9, value]);
        cpu.step();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flags().contains(Status::ZERO), value == 0);
        prop_assert_eq!(cpu.flags().contains(Status::NEGATIVE), value & 0x80 != 0);
    }

    #[test]
    fn prop_binary_adc_matches_integer_sum(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let carry_op = if carry { 0x38 } else { 0x18 };
        let mut cpu = setup_cpu(&[carry_op, 0xA9, a, 0x69, m]);
        cpu.step_times(3);

        let sum = a as u16 + m as u16 + carry as u16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flags().contains(Status::CARRY), sum > 0xFF);

        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;
        prop_assert_eq!(cpu.flags().contains(Status::OVERFLOW), !(-128..=127).contains(&signed));
    }

    #[test]
    fn prop_binary_sbc_is_adc_of_complement(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let carry_op = if carry { 0x38 } else { 0x18 };
        let mut sbc = setup_cpu(&[carry_op, 0xA9, a, 0xE9, m]);
        let mut adc = setup_cpu(&[carry_op, 0xA9, a, 0x69, !m]);
        sbc.step_times(3);
        adc.step_times(3);

        prop_assert_eq!(sbc.a(), adc.a());
        prop_assert_eq!(sbc.status(), adc.status());
    }

    #[test]
    fn prop_compare_carry_is_unsigned_ge(reg in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xA2, reg, 0xE0, m]);
        cpu.step_times(2);

        prop_assert_eq!(cpu.flags().contains(Status::CARRY), reg >= m);
        prop_assert_eq!(cpu.flags().contains(Status::ZERO), reg == m);
        prop_assert_eq!(cpu.x(), reg);
    }

    #[test]
    fn prop_pha_pla_round_trip(value in any::<u8>(), sp in any::<u8>()) {
        // LDX #sp; TXS; LDA #value; PHA; LDA #$00; PLA
        let mut cpu = setup_cpu(&[0xA2, sp, 0x9A, 0xA9, value, 0x48, 0xA9, 0x00, 0x68]);
        cpu.step_times(6);

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn prop_status_bit5_set_and_break_clear(opcode in any::<u8>(), b1 in any::<u8>(), b2 in any::<u8>()) {
        let mut cpu = setup_cpu(&[opcode, b1, b2]);
        cpu.step();

        prop_assert!(cpu.flags().contains(Status::UNUSED));
        prop_assert!(!cpu.flags().contains(Status::BREAK));
    }

    #[test]
    fn prop_step_charges_at_least_base_cycles(opcode in any::<u8>(), b1 in any::<u8>(), b2 in any::<u8>()) {
        let mut cpu = setup_cpu(&[opcode, b1, b2]);
        let count = cpu.step();

        let base = OPCODE_TABLE[opcode as usize].base_cycles as u64;
        prop_assert_eq!(count, 1);
        prop_assert!(cpu.tick_count() >= base);
        prop_assert!(cpu.tick_count() <= base + 2);
    }

    #[test]
    fn prop_straight_line_pc_advances_by_size(
        index in 0usize..1000,
        b1 in any::<u8>(),
        b2 in any::<u8>(),
    ) {
        let opcodes = straight_line_opcodes();
        let opcode = opcodes[index % opcodes.len()];
        let mut cpu = setup_cpu(&[opcode, b1, b2]);
        cpu.step();

        let size = OPCODE_TABLE[opcode as usize].size_bytes as u16;
        prop_assert_eq!(cpu.pc(), 0x8000 + size);
    }

    #[test]
    fn prop_exec_reaches_target(target in 0u64..500) {
        let mut cpu = setup_cpu(&[0xEA; 300]);
        cpu.exec(target);

        prop_assert!(cpu.tick_count() >= target);
        prop_assert!(cpu.tick_count() < target + 2);
    }
}
