//! # Instrumentable 6502 CPU Emulator
//!
//! An NMOS 6502 CPU emulator built around a flat 64KB memory bus that external
//! code can instrument. Peripherals are emulated by intercepting bus accesses
//! rather than by plugging device models into the core.
//!
//! ## Quick Start
//!
//! ```rust
//! use hook6502::{CPU, Memory};
//!
//! let mut cpu = CPU::new(Memory::new());
//!
//! // Reset vector points at 0x8000, program is LDA #$CC
//! cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
//! cpu.load(&[0xA9, 0xCC], 0x8000).unwrap();
//! cpu.reset();
//!
//! cpu.step();
//! assert_eq!(cpu.a(), 0xCC);
//! assert_eq!(cpu.instruction_count(), 1);
//! ```
//!
//! ## Architecture
//!
//! - **Memory bus**: `Memory` owns the 65536 cells, the per-address read/write
//!   hook table and the optional RNG binding. Bulk `load`/`read` are bounds
//!   checked and hook-free; the CPU goes through `MemoryBus::read_byte` and
//!   `MemoryBus::write_byte`, which fire hooks.
//! - **CPU core**: `CPU` holds the registers, counters, interrupt lines and the
//!   instruction hook list, and drives the table-driven fetch/decode/execute
//!   loop over `OPCODE_TABLE`.
//! - **Interrupts**: IRQ and NMI are latched request lines polled at every
//!   instruction boundary. NMI wins when both are pending.
//!
//! ## Hooks
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use hook6502::{CPU, HookKind, Memory};
//!
//! let mut cpu = CPU::new(Memory::new());
//! cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
//! cpu.load(&[0x8D, 0x00, 0xD0], 0x8000).unwrap(); // STA $D000
//! cpu.reset();
//!
//! let writes = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&writes);
//! cpu.register_read_write_hook(0xD000, "write".parse::<HookKind>().unwrap(), move |_, _| {
//!     seen.set(seen.get() + 1);
//! });
//!
//! cpu.step();
//! assert_eq!(writes.get(), 1);
//! ```
//!
//! Everything runs on the caller's thread. Hooks run synchronously and cannot
//! call back into `step()`: they never receive the CPU itself.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod hooks;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod rng;

// Internal instruction implementations (not part of public API)
mod instructions;

pub use addressing::AddressingMode;
pub use config::{CpuConfig, Variant};
pub use cpu::CPU;
pub use hooks::{Access, BusEvent, BusView, HookKind};
pub use interrupts::InterruptLine;
pub use memory::{Memory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, Status};

/// Errors raised at the emulator's caller-facing boundary.
///
/// Instruction execution never fails; only bulk memory access and hook kind
/// parsing can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An access of `len` bytes at `location` falls outside the 64KB window.
    #[error("accessing {len} bytes at 0x{location:04X} is outside memory bounds")]
    OutOfRange {
        /// First address of the rejected access
        location: usize,
        /// Number of bytes requested
        len: usize,
    },

    /// An argument is not one of the accepted values.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
