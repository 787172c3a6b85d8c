//! # Hook Registry
//!
//! Two independent hook sets instrument the emulator:
//!
//! - **Read/write hooks** are keyed by address and access kind. The memory
//!   bus invokes them synchronously at the moment of each byte access made by
//!   the CPU, after the access has taken effect. They cannot change the value
//!   of the access that fired them, but they get a `BusView` of the memory
//!   cells and may update any of them for later accesses.
//! - **Instruction hooks** form an ordered list held by the CPU. Each fires
//!   once per retired instruction, after that instruction's register and flag
//!   updates are final and before interrupts are polled.
//!
//! Hooks are single-threaded (`Rc`/`RefCell`), matching the emulator itself.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::memory::MEMORY_SIZE;
use crate::registers::Registers;
use crate::Error;

/// Kind of a single bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The CPU read a byte.
    Read,
    /// The CPU wrote a byte.
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write"),
        }
    }
}

/// Which accesses a read/write hook registration covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Reads only.
    Read,
    /// Writes only.
    Write,
    /// Both reads and writes, through one shared callback.
    ReadWrite,
}

impl HookKind {
    fn covers(self, access: Access) -> bool {
        matches!(
            (self, access),
            (HookKind::ReadWrite, _) | (HookKind::Read, Access::Read) | (HookKind::Write, Access::Write)
        )
    }
}

impl FromStr for HookKind {
    type Err = Error;

    /// Parses `read`, `write` or `read_write`.
    ///
    /// ```
    /// use hook6502::{Error, HookKind};
    ///
    /// assert_eq!("read_write".parse::<HookKind>(), Ok(HookKind::ReadWrite));
    /// assert!(matches!("execute".parse::<HookKind>(), Err(Error::InvalidArgument(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(HookKind::Read),
            "write" => Ok(HookKind::Write),
            "read_write" => Ok(HookKind::ReadWrite),
            other => Err(Error::InvalidArgument(format!(
                "{other} must be one of read, write, read_write"
            ))),
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HookKind::Read => write!(f, "read"),
            HookKind::Write => write!(f, "write"),
            HookKind::ReadWrite => write!(f, "read_write"),
        }
    }
}

/// What a read/write hook is told about the access that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusEvent {
    /// Whether this was a read or a write.
    pub kind: Access,
    /// Address accessed.
    pub address: u16,
    /// Value returned by the read (after RNG substitution) or value stored.
    pub value: u8,
}

/// Direct access to the memory cells from inside a read/write hook.
///
/// A device hook uses it to post status bytes or latch data for later CPU
/// accesses. Accesses through the view bypass hooks and the RNG binding.
pub struct BusView<'a> {
    cells: &'a mut [u8; MEMORY_SIZE],
}

impl<'a> BusView<'a> {
    pub(crate) fn new(cells: &'a mut [u8; MEMORY_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the byte stored at `address`.
    pub fn read(&self, address: u16) -> u8 {
        self.cells[address as usize]
    }

    /// Stores `value` at `address`.
    pub fn write(&mut self, address: u16, value: u8) {
        self.cells[address as usize] = value;
    }
}

impl fmt::Debug for BusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BusView").finish_non_exhaustive()
    }
}

/// Shared read/write hook callback.
///
/// `read_write` registrations store the same `Rc` in both tables.
pub(crate) type ReadWriteHook = Rc<RefCell<dyn FnMut(BusEvent, &mut BusView<'_>)>>;

pub(crate) fn shared_hook<F>(hook: F) -> ReadWriteHook
where
    F: FnMut(BusEvent, &mut BusView<'_>) + 'static,
{
    Rc::new(RefCell::new(hook))
}

/// Instruction hook callback. Receives the final register state of the
/// retired instruction and the bus, which it may read or write freely.
pub type InstructionHook<M> = Box<dyn FnMut(&Registers, &mut M)>;

/// Per-address read and write hook tables.
///
/// Each address holds at most one read hook and at most one write hook.
#[derive(Default)]
pub(crate) struct HookTable {
    read: HashMap<u16, ReadWriteHook>,
    write: HashMap<u16, ReadWriteHook>,
}

impl HookTable {
    /// Creates an empty table.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Installs `hook` for `kind` at `address`, replacing any previous entry.
    pub(crate) fn register(&mut self, address: u16, kind: HookKind, hook: ReadWriteHook) {
        if kind.covers(Access::Read) {
            self.read.insert(address, Rc::clone(&hook));
        }
        if kind.covers(Access::Write) {
            self.write.insert(address, hook);
        }
    }

    /// Removes the entries matching `kind` at `address`. Absent entries are
    /// ignored.
    pub(crate) fn deregister(&mut self, address: u16, kind: HookKind) {
        if kind.covers(Access::Read) {
            self.read.remove(&address);
        }
        if kind.covers(Access::Write) {
            self.write.remove(&address);
        }
    }

    /// Whether a hook is registered for `access` at `address`.
    pub(crate) fn contains(&self, address: u16, access: Access) -> bool {
        self.table(access).contains_key(&address)
    }

    /// Invokes the hook registered for `event`, if any, handing it `bus`.
    pub(crate) fn fire(&self, event: BusEvent, bus: &mut BusView<'_>) {
        if let Some(hook) = self.table(event.kind).get(&event.address) {
            (&mut *hook.borrow_mut())(event, bus);
        }
    }

    fn table(&self, access: Access) -> &HashMap<u16, ReadWriteHook> {
        match access {
            Access::Read => &self.read,
            Access::Write => &self.write,
        }
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("read", &self.read.keys().collect::<Vec<_>>())
            .field("write", &self.write.keys().collect::<Vec<_>>())
            .finish()
    }
}
