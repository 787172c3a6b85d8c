//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, PC, SP and the packed status register
//! - **Counters**: retired instructions and elapsed ticks since the last reset
//! - **Interrupt lines**: latched IRQ and NMI requests
//! - **Instruction hooks**: callbacks fired after every retired instruction
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, fire hooks, poll interrupts
//! - `step_times()`: Execute a fixed number of instructions
//! - `exec()`: Execute until the tick counter reaches a target
//!
//! An instruction always runs to completion; interrupts are only taken between
//! instructions.

use crate::addressing::{pages_differ, Operand};
use crate::hooks::{BusView, InstructionHook};
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::{
    AddressingMode, BusEvent, CpuConfig, HookKind, Memory, MemoryBus, Mnemonic, Registers, Result,
    Status, OPCODE_TABLE,
};

/// Reset vector location (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The
/// usual bus is `Memory`, for which the CPU also forwards the bulk load/read,
/// read/write hook and RNG operations.
///
/// # Examples
///
/// ```
/// use hook6502::{CPU, Memory};
///
/// let mut cpu = CPU::new(Memory::new());
/// cpu.load(&[0x00, 0x80], 0xFFFC).unwrap();
/// cpu.load(&[0xEA; 10], 0x8000).unwrap(); // NOPs
/// cpu.reset();
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
///
/// cpu.exec(20);
/// assert_eq!(cpu.tick_count(), 20);
/// assert_eq!(cpu.instruction_count(), 10);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    /// Instructions retired since reset
    pub(crate) instructions: u64,

    /// Ticks elapsed since reset
    pub(crate) ticks: u64,

    pub(crate) pending_irq: bool,
    pub(crate) pending_nmi: bool,

    instruction_hooks: Vec<InstructionHook<M>>,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with the default configuration and resets it.
    ///
    /// The reset vector is read from `memory` immediately; call `reset()`
    /// again after loading a program.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration and resets it.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::power_up(0x0000),
            instructions: 0,
            ticks: 0,
            pending_irq: false,
            pending_nmi: false,
            instruction_hooks: Vec::new(),
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFD, A/X/Y are zeroed
    /// - Status becomes 0x24 (interrupt disable and the unused bit)
    /// - Instruction and tick counters are zeroed, pending interrupts dropped
    ///
    /// Hooks stay registered.
    pub fn reset(&mut self) {
        let pc = self.read_word(RESET_VECTOR);
        self.regs = Registers::power_up(pc);
        self.instructions = 0;
        self.ticks = 0;
        self.pending_irq = false;
        self.pending_nmi = false;

        tracing::debug!(pc, "cpu reset");
    }

    /// Executes one instruction and returns the instruction count.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC
    /// 2. Resolve the operand per the opcode's addressing mode
    /// 3. Execute the operation
    /// 4. Charge the cycle cost and count the instruction
    /// 5. Fire instruction hooks
    /// 6. Service a pending NMI, else a pending unmasked IRQ
    ///
    /// Illegal opcodes execute as one-byte no-ops.
    pub fn step(&mut self) -> u64 {
        let opcode = self.fetch_byte();
        let metadata = &OPCODE_TABLE[opcode as usize];
        let operand = self.resolve_operand(metadata.addressing_mode);

        let mut cycles = metadata.base_cycles as u64;
        if metadata.page_penalty {
            if let Operand::Address { page_crossed: true, .. } = operand {
                cycles += 1;
            }
        }
        self.ticks += cycles;

        self.execute(opcode, metadata.mnemonic, operand);

        self.instructions += 1;
        self.fire_instruction_hooks();
        self.service_interrupts();

        self.instructions
    }

    /// Executes exactly `n` instructions and returns the instruction count.
    pub fn step_times(&mut self, n: u64) -> u64 {
        for _ in 0..n {
            self.step();
        }
        self.instructions
    }

    /// Executes whole instructions until the tick counter reaches
    /// `target_ticks`, then returns the instruction count.
    ///
    /// The last instruction may overshoot the target by part of its cost.
    pub fn exec(&mut self, target_ticks: u64) -> u64 {
        while self.ticks < target_ticks {
            self.step();
        }
        self.instructions
    }

    fn execute(&mut self, opcode: u8, mnemonic: Mnemonic, operand: Operand) {
        use Mnemonic::*;

        let p = self.regs.p;
        match mnemonic {
            Adc => alu::adc(self, operand),
            Sbc => alu::sbc(self, operand),
            And => alu::and(self, operand),
            Ora => alu::ora(self, operand),
            Eor => alu::eor(self, operand),
            Bit => alu::bit(self, operand),
            Cmp => alu::cmp(self, operand),
            Cpx => alu::cpx(self, operand),
            Cpy => alu::cpy(self, operand),

            Asl => shifts::asl(self, operand),
            Lsr => shifts::lsr(self, operand),
            Rol => shifts::rol(self, operand),
            Ror => shifts::ror(self, operand),

            Lda => load_store::lda(self, operand),
            Ldx => load_store::ldx(self, operand),
            Ldy => load_store::ldy(self, operand),
            Sta => load_store::sta(self, operand),
            Stx => load_store::stx(self, operand),
            Sty => load_store::sty(self, operand),

            Inc => inc_dec::inc(self, operand),
            Dec => inc_dec::dec(self, operand),
            Inx => inc_dec::inx(self),
            Iny => inc_dec::iny(self),
            Dex => inc_dec::dex(self),
            Dey => inc_dec::dey(self),

            Bcc => branches::branch_if(self, operand, !p.contains(Status::CARRY)),
            Bcs => branches::branch_if(self, operand, p.contains(Status::CARRY)),
            Bne => branches::branch_if(self, operand, !p.contains(Status::ZERO)),
            Beq => branches::branch_if(self, operand, p.contains(Status::ZERO)),
            Bpl => branches::branch_if(self, operand, !p.contains(Status::NEGATIVE)),
            Bmi => branches::branch_if(self, operand, p.contains(Status::NEGATIVE)),
            Bvc => branches::branch_if(self, operand, !p.contains(Status::OVERFLOW)),
            Bvs => branches::branch_if(self, operand, p.contains(Status::OVERFLOW)),

            Jmp => control::jmp(self, operand),
            Jsr => control::jsr(self, operand),
            Rts => control::rts(self),
            Rti => control::rti(self),
            Brk => control::brk(self),
            Nop => {}

            Pha => stack::pha(self),
            Php => stack::php(self),
            Pla => stack::pla(self),
            Plp => stack::plp(self),

            Clc => flags::clc(self),
            Sec => flags::sec(self),
            Cli => flags::cli(self),
            Sei => flags::sei(self),
            Clv => flags::clv(self),
            Cld => flags::cld(self),
            Sed => flags::sed(self),

            Tax => transfer::tax(self),
            Tay => transfer::tay(self),
            Txa => transfer::txa(self),
            Tya => transfer::tya(self),
            Tsx => transfer::tsx(self),
            Txs => transfer::txs(self),

            Illegal => {
                tracing::trace!(
                    opcode,
                    pc = self.regs.pc.wrapping_sub(1),
                    "illegal opcode executed as NOP"
                );
            }
        }
    }

    /// Reads the operand bytes following the opcode and computes the operand.
    ///
    /// Pointer reads in zero page wrap within zero page.
    fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte() as i8),
            AddressingMode::ZeroPage => Self::direct(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                Self::direct(self.fetch_byte().wrapping_add(self.regs.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Self::direct(self.fetch_byte().wrapping_add(self.regs.y) as u16)
            }
            AddressingMode::Absolute => Self::direct(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Self::indexed(base, self.regs.x)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Self::indexed(base, self.regs.y)
            }
            AddressingMode::Indirect => {
                // NMOS bug: the pointer's high byte is fetched from the same page
                let ptr = self.fetch_word();
                let lo = self.memory.read_byte(ptr) as u16;
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read_byte(hi_addr) as u16;
                Self::direct((hi << 8) | lo)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.regs.x);
                Self::direct(self.read_zero_page_word(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_zero_page_word(zp);
                Self::indexed(base, self.regs.y)
            }
        }
    }

    fn direct(addr: u16) -> Operand {
        Operand::Address {
            addr,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Operand {
        let addr = base.wrapping_add(index as u16);
        Operand::Address {
            addr,
            page_crossed: pages_differ(base, addr),
        }
    }

    // ========== Bus Helpers ==========

    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word at `addr`.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read_byte(addr) as u16;
        let hi = self.memory.read_byte(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    fn read_zero_page_word(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read_byte(zp as u16) as u16;
        let hi = self.memory.read_byte(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads the value an operand designates.
    pub(crate) fn operand_value(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address { addr, .. } => self.memory.read_byte(addr),
            Operand::Accumulator => self.regs.a,
            // Not produced for instructions that read a value
            Operand::None | Operand::Relative(_) => 0,
        }
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write_byte(0x0100 | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read_byte(0x0100 | self.regs.sp as u16)
    }

    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Instruction Hooks ==========

    /// Appends a hook fired once per retired instruction, in registration
    /// order. The same closure logic may be registered several times.
    ///
    /// Hooks receive the register state after the instruction and the bus.
    /// Bus accesses made by a hook fire read/write hooks as usual.
    pub fn register_instruction_hook<F>(&mut self, hook: F)
    where
        F: FnMut(&Registers, &mut M) + 'static,
    {
        self.instruction_hooks.push(Box::new(hook));
    }

    /// Removes every instruction hook.
    pub fn clear_instruction_hooks(&mut self) {
        self.instruction_hooks.clear();
    }

    fn fire_instruction_hooks(&mut self) {
        for hook in self.instruction_hooks.iter_mut() {
            hook(&self.regs, &mut self.memory);
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.regs.p.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.regs.p
    }

    /// Returns the whole register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Instructions retired since the last reset.
    pub fn instruction_count(&self) -> u64 {
        self.instructions
    }

    /// Ticks elapsed since the last reset, including interrupt entry.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// The configuration the CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Shared access to the attached bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the attached bus. Accesses made through it fire hooks.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

/// Conveniences for the built-in flat bus.
impl CPU<Memory> {
    /// See [`Memory::load`].
    pub fn load(&mut self, bytes: &[u8], location: usize) -> Result<()> {
        self.memory.load(bytes, location)
    }

    /// See [`Memory::read`].
    pub fn read(&self, location: usize, count: usize) -> Result<Vec<u8>> {
        self.memory.read(location, count)
    }

    /// See [`Memory::register_read_write_hook`].
    pub fn register_read_write_hook<F>(&mut self, address: u16, kind: HookKind, hook: F)
    where
        F: FnMut(BusEvent, &mut BusView<'_>) + 'static,
    {
        self.memory.register_read_write_hook(address, kind, hook);
    }

    /// See [`Memory::deregister_read_write_hook`].
    pub fn deregister_read_write_hook(&mut self, address: u16, kind: HookKind) {
        self.memory.deregister_read_write_hook(address, kind);
    }

    /// Binds the random byte generator to `address`, seeded from
    /// `CpuConfig::rng_seed` when one is configured.
    pub fn configure_rng(&mut self, address: u16) {
        match self.config.rng_seed {
            Some(seed) => self.memory.configure_seeded_rng(address, seed),
            None => self.memory.configure_rng(address),
        }
    }
}
