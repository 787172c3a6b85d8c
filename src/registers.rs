//! # CPU Registers and Status Flags
//!
//! The 6502 programmer-visible state: three 8-bit data registers, the 8-bit
//! stack pointer, the 16-bit program counter and the packed status register.
//! Rust's fixed-width integers keep every register inside its declared width;
//! all arithmetic on them uses wrapping operations.

use bitflags::bitflags;

bitflags! {
    /// Processor status register (P), bit layout NV-BDIZC.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry (set on unsigned overflow, cleared on borrow)
        const CARRY = 0b0000_0001;
        /// Zero (result was zero)
        const ZERO = 0b0000_0010;
        /// Interrupt disable (masks IRQ, never NMI)
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode (BCD arithmetic for ADC/SBC)
        const DECIMAL = 0b0000_1000;
        /// Break. Only meaningful in a status byte pushed by BRK or PHP.
        const BREAK = 0b0001_0000;
        /// Unused bit, always reads as 1.
        const UNUSED = 0b0010_0000;
        /// Overflow (signed overflow)
        const OVERFLOW = 0b0100_0000;
        /// Negative (bit 7 of result)
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Power-up/reset value: interrupts disabled, unused bit set.
    pub const POWER_UP: Status = Status::INTERRUPT_DISABLE.union(Status::UNUSED);

    /// Builds a status register from a byte pulled off the stack.
    ///
    /// B does not exist as a latch in the register, so it is dropped; the
    /// unused bit is forced on.
    pub fn from_stack(value: u8) -> Self {
        Status::from_bits_retain(value)
            .difference(Status::BREAK)
            .union(Status::UNUSED)
    }

    /// Byte pushed by BRK and PHP (B and unused set).
    pub fn to_stack_brk(self) -> u8 {
        self.union(Status::BREAK | Status::UNUSED).bits()
    }

    /// Byte pushed by IRQ and NMI entry (B clear, unused set).
    pub fn to_stack_irq(self) -> u8 {
        self.difference(Status::BREAK).union(Status::UNUSED).bits()
    }

    /// Updates Z and N from a result byte.
    pub fn update_nz(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_UP
    }
}

/// Snapshot of the programmer-visible register file.
///
/// Hooks receive a shared reference to this; there is no public path to
/// mutate it outside instruction execution, interrupts and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) pc: u16,
    pub(crate) sp: u8,
    pub(crate) p: Status,
}

impl Registers {
    /// Stack pointer after reset.
    pub const POWER_UP_SP: u8 = 0xFD;

    pub(crate) fn power_up(pc: u16) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: Self::POWER_UP_SP,
            p: Status::POWER_UP,
        }
    }

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter (address of the next opcode).
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer. The stack lives at 0x0100 + SP and grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Status register.
    pub fn status(&self) -> Status {
        self.p
    }
}
