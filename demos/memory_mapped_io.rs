//! Example demonstrating memory-mapped I/O through bus hooks.
//!
//! This example shows how to:
//! - Emulate a transmit-only serial port with a write hook
//! - Expose a random byte source at a fixed address
//! - Count retired instructions with an instruction hook
//! - Watch reset and interrupt entry through tracing (RUST_LOG=hook6502=trace)
//!
//! Memory layout:
//! - 0x00FE: random byte source
//! - 0x8000-0x801F: program
//! - 0x8020-: message
//! - 0xD000: serial transmit register
//! - 0xD001: hex dump register

use hook6502::{HookKind, Memory, CPU};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const SERIAL_TX: u16 = 0xD000;
const HEX_OUT: u16 = 0xD001;
const RNG_ADDR: u16 = 0x00FE;
const HALT: u16 = 0x8013;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hook6502=debug".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("6502 Memory-Mapped I/O Example");
    println!("==============================\n");

    let program = [
        0xA2, 0x00, // LDX #$00
        0xBD, 0x20, 0x80, // loop: LDA $8020,X
        0xF0, 0x07, // BEQ done
        0x8D, 0x00, 0xD0, // STA $D000 (serial)
        0xE8, // INX
        0x4C, 0x02, 0x80, // JMP loop
        0xA5, 0xFE, // done: LDA $FE (random)
        0x8D, 0x01, 0xD0, // STA $D001 (hex dump)
        0x4C, 0x13, 0x80, // halt: JMP halt
    ];

    let mut cpu = CPU::new(Memory::new());
    cpu.load(&[0x00, 0x80], 0xFFFC)?;
    cpu.load(&program, 0x8000)?;
    cpu.load(b"Hello, hooks!\n\0", 0x8020)?;
    cpu.reset();

    // Serial port: collect transmitted bytes
    let output = Rc::new(RefCell::new(String::new()));
    let tx = Rc::clone(&output);
    cpu.register_read_write_hook(SERIAL_TX, HookKind::Write, move |event, _| {
        tx.borrow_mut().push(event.value as char);
    });

    cpu.register_read_write_hook(HEX_OUT, HookKind::Write, |event, _| {
        println!("Random byte from 0x{:04X}: 0x{:02X}", RNG_ADDR, event.value);
    });
    cpu.configure_rng(RNG_ADDR);

    let retired = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&retired);
    cpu.register_instruction_hook(move |_, _| counter.set(counter.get() + 1));

    while cpu.pc() != HALT {
        cpu.step();
    }

    print!("Serial output: {}", output.borrow());
    println!("Instructions retired: {}", retired.get());
    println!("Ticks elapsed: {}", cpu.tick_count());
    assert_eq!(retired.get(), cpu.instruction_count());

    Ok(())
}
