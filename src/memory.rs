//! # Memory Bus
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory it runs against, and `Memory`, the flat 64KB bus with hook
//! interception.
//!
//! ## Two Access Paths
//!
//! - **Bulk** (`load`, `read`): caller-facing, bounds checked, never fires
//!   hooks and never consults the RNG. Used for setup and inspection.
//! - **Per-byte** (`MemoryBus::read_byte`, `MemoryBus::write_byte`):
//!   CPU-facing, always in range, fires read/write hooks and applies the RNG
//!   binding.

use crate::hooks::{shared_hook, Access, BusEvent, BusView, HookKind, HookTable};
use crate::rng::RngSource;
use crate::{Error, Result};

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// Both operations take `&mut self`: a read can have side effects (hooks,
/// random number generation, device registers).
///
/// # Design
///
/// - No error types: 6502 hardware has no bus error mechanism
/// - Every `u16` address is valid
///
/// ## Implementing Custom Memory
///
/// ```
/// use hook6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read_byte(&mut self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write_byte(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte as the CPU sees it. Must never panic.
    fn read_byte(&mut self, addr: u16) -> u8;

    /// Writes a byte as the CPU does. Must never panic.
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Checks if a device is holding the IRQ line active.
    ///
    /// The line is level-sensitive: the CPU consults it at every interrupt
    /// check, together with requests latched by `CPU::interrupt_request`.
    /// Defaults to `false` for buses without interrupt-capable devices.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Flat 64KB memory with read/write hooks and an optional RNG cell.
///
/// # Examples
///
/// ```
/// use hook6502::{Error, Memory};
///
/// let mut mem = Memory::new();
/// mem.load(&[0xAB, 0xBA], 0x1AA1).unwrap();
/// assert_eq!(mem.read(0x1AA1, 2).unwrap(), vec![0xAB, 0xBA]);
///
/// // Overflowing the 64KB window is rejected without touching memory
/// assert!(matches!(mem.load(&[1, 2, 3], 0xFFFE), Err(Error::OutOfRange { .. })));
/// assert_eq!(mem.read(0xFFFE, 2).unwrap(), vec![0, 0]);
/// ```
#[derive(Debug)]
pub struct Memory {
    cells: Box<[u8; MEMORY_SIZE]>,
    hooks: HookTable,
    rng: Option<RngSource>,
}

impl Memory {
    /// Creates a memory with every cell zeroed, no hooks and no RNG.
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; MEMORY_SIZE]),
            hooks: HookTable::new(),
            rng: None,
        }
    }

    /// Total size in bytes (always 65536).
    pub fn size(&self) -> usize {
        MEMORY_SIZE
    }

    /// Copies `bytes` into memory starting at `location`.
    ///
    /// Fails with `Error::OutOfRange` when the data would run past 0xFFFF; in
    /// that case nothing is written.
    pub fn load(&mut self, bytes: &[u8], location: usize) -> Result<()> {
        let end = Self::checked_end(location, bytes.len())?;
        self.cells[location..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns `count` bytes starting at `location`, without firing hooks.
    ///
    /// Fails with `Error::OutOfRange` when `location` is not a valid address
    /// or the range runs past 0xFFFF.
    pub fn read(&self, location: usize, count: usize) -> Result<Vec<u8>> {
        if location >= MEMORY_SIZE {
            return Err(Error::OutOfRange {
                location,
                len: count,
            });
        }
        let end = Self::checked_end(location, count)?;
        Ok(self.cells[location..end].to_vec())
    }

    fn checked_end(location: usize, len: usize) -> Result<usize> {
        match location.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(end),
            _ => Err(Error::OutOfRange { location, len }),
        }
    }

    /// Registers `hook` for `kind` accesses at `address`.
    ///
    /// A later registration for the same address and kind replaces the
    /// earlier one. `HookKind::ReadWrite` installs one shared callback as both
    /// the read and the write hook.
    ///
    /// The hook receives the access and a `BusView` through which it can
    /// read or update memory cells without firing further hooks.
    pub fn register_read_write_hook<F>(&mut self, address: u16, kind: HookKind, hook: F)
    where
        F: FnMut(BusEvent, &mut BusView<'_>) + 'static,
    {
        tracing::trace!(address, %kind, "registering bus hook");
        self.hooks.register(address, kind, shared_hook(hook));
    }

    /// Removes the `kind` hook(s) at `address`. No-op if none is registered.
    pub fn deregister_read_write_hook(&mut self, address: u16, kind: HookKind) {
        tracing::trace!(address, %kind, "removing bus hook");
        self.hooks.deregister(address, kind);
    }

    /// Whether a read hook is registered at `address`.
    pub fn has_read_hook(&self, address: u16) -> bool {
        self.hooks.contains(address, Access::Read)
    }

    /// Whether a write hook is registered at `address`.
    pub fn has_write_hook(&self, address: u16) -> bool {
        self.hooks.contains(address, Access::Write)
    }

    /// Binds an entropy-seeded random byte generator to `address`,
    /// replacing any previous binding.
    pub fn configure_rng(&mut self, address: u16) {
        tracing::trace!(address, "binding rng");
        self.rng = Some(RngSource::from_entropy(address));
    }

    /// Like `configure_rng`, but reproducible.
    pub fn configure_seeded_rng(&mut self, address: u16, seed: u64) {
        tracing::trace!(address, seed, "binding seeded rng");
        self.rng = Some(RngSource::seeded(address, seed));
    }

    /// Unbinds the generator; the address reads its stored cell again.
    pub fn clear_rng(&mut self) {
        self.rng = None;
    }

    /// Address currently shadowed by the generator.
    pub fn rng_address(&self) -> Option<u16> {
        self.rng.as_ref().map(RngSource::address)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read_byte(&mut self, addr: u16) -> u8 {
        let mut value = self.cells[addr as usize];
        if let Some(rng) = self.rng.as_mut().filter(|rng| rng.address() == addr) {
            value = rng.next_byte();
        }

        let event = BusEvent {
            kind: Access::Read,
            address: addr,
            value,
        };
        self.hooks.fire(event, &mut BusView::new(&mut self.cells));
        value
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;

        let event = BusEvent {
            kind: Access::Write,
            address: addr,
            value,
        };
        self.hooks.fire(event, &mut BusView::new(&mut self.cells));
    }
}
