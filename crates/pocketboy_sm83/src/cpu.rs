pub mod addr;
pub mod bus;
pub mod regs;

mod alu;
mod dispatch;
mod exec;


use thiserror::Error;

use addr::Address;
use bus::{Bus, BusFault};
use dispatch::OpcodeTables;
use regs::Registers;

/// Failure raised while executing a single instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// An architecturally undefined opcode byte was fetched. Real hardware
    /// hard-locks on these; silently skipping them would desynchronise the
    /// emulated state, so the core surfaces them instead.
    #[error("illegal opcode {opcode:#04x} at {pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// The external memory interface reported a fault.
    #[error(transparent)]
    Bus(#[from] BusFault),
}

/// Execution state of the core.
///
/// `Halted` and `Stopped` are data, not thread suspension: while in either
/// state [`Cpu::step`] performs no fetch and reports an idle outcome until an
/// external wake signal arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Halted,
    Stopped,
}

/// What a single call to [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One full instruction was fetched and executed.
    Executed,
    /// The core is Halted or Stopped; nothing was fetched.
    Idle,
}

/// SM83 CPU core.
///
/// Owns the register file, the interrupt-master-enable flag and the
/// Running/Halted/Stopped state machine. Everything else — which interrupts
/// are pending, when to wake the core, what backs the address space — belongs
/// to the surrounding emulator and reaches the core through [`Bus`] and the
/// wake methods.
#[derive(Clone, Copy, Debug)]
pub struct Cpu {
    pub regs: Registers,
    ime: bool,
    mode: Mode,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a core in a neutral power-on state: zeroed registers, IME
    /// clear, Running.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            mode: Mode::Running,
        }
    }

    /// Create a core with the DMG post-boot-ROM register values, as left by
    /// the boot ROM when it hands control to cartridge code at `0x0100`.
    pub fn post_boot() -> Self {
        let mut cpu = Self::new();
        cpu.regs.a = 0x01;
        cpu.regs.f = 0xB0;
        cpu.regs.b = 0x00;
        cpu.regs.c = 0x13;
        cpu.regs.d = 0x00;
        cpu.regs.e = 0xD8;
        cpu.regs.h = 0x01;
        cpu.regs.l = 0x4D;
        cpu.regs.sp = 0xFFFE;
        cpu.regs.pc = 0x0100;
        cpu
    }

    /// Reset the core to the neutral power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Set the interrupt-master-enable flag directly.
    ///
    /// Used by the external interrupt-acknowledgment path, which clears IME
    /// when it services an interrupt.
    #[inline]
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
    }

    /// External signal: a pending, enabled interrupt exists.
    ///
    /// Wakes a Halted core. The core does not itself poll the interrupt
    /// controller; deciding that an interrupt is both pending and enabled is
    /// the caller's job. A Stopped core is unaffected (see [`Cpu::resume`]).
    pub fn interrupt_wake(&mut self) {
        if self.mode == Mode::Halted {
            log::debug!("waking from HALT");
            self.mode = Mode::Running;
        }
    }

    /// External reset/wake signal releasing the STOP low-power state.
    pub fn resume(&mut self) {
        if self.mode == Mode::Stopped {
            log::debug!("resuming from STOP");
            self.mode = Mode::Running;
        }
    }

    /// Advance the core by exactly one instruction.
    ///
    /// Fetches one opcode byte (advancing PC), resolves the `0xCB` prefix
    /// escape if needed, and invokes the matching handler from the dispatch
    /// tables. While Halted or Stopped this is a no-op observation and
    /// returns [`StepOutcome::Idle`].
    ///
    /// A step is atomic from the caller's point of view; on error the core
    /// stops mid-instruction and the failure is returned as-is.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<StepOutcome, ExecError> {
        if self.mode != Mode::Running {
            return Ok(StepOutcome::Idle);
        }

        let opcode = self.fetch8(bus)?;
        // The 0xCB slot of the primary table holds the prefix escape, which
        // fetches the second byte and dispatches the secondary table itself.
        OpcodeTables::<B>::PRIMARY[opcode as usize](self, bus, opcode)?;
        Ok(StepOutcome::Executed)
    }

    /// Fetch the next instruction byte, advancing PC by one.
    ///
    /// Opcode and operand fetches share this single primitive so the whole
    /// decode path has one sequencing discipline.
    #[inline]
    pub(crate) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> Result<u8, ExecError> {
        let value = bus.read8(Address::new(self.regs.pc))?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    /// Fetch a little-endian 16-bit operand, advancing PC by two.
    #[inline]
    pub(crate) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> Result<u16, ExecError> {
        let lo = self.fetch8(bus)? as u16;
        let hi = self.fetch8(bus)? as u16;
        Ok((hi << 8) | lo)
    }

    /// Push a word: SP decrements before each byte write, high byte first, so
    /// that memory[SP] = low and memory[SP+1] = high afterwards.
    #[inline]
    pub(crate) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) -> Result<(), ExecError> {
        let lo = value as u8;
        let hi = (value >> 8) as u8;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(Address::new(self.regs.sp), hi)?;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(Address::new(self.regs.sp), lo)?;
        Ok(())
    }

    /// Pop a word: low byte first, SP increments after each byte read. The
    /// ordering mirrors [`Cpu::push_u16`] so push followed by pop restores
    /// the original value exactly.
    #[inline]
    pub(crate) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> Result<u16, ExecError> {
        let lo = bus.read8(Address::new(self.regs.sp))? as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(Address::new(self.regs.sp))? as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok((hi << 8) | lo)
    }

    #[inline]
    pub(crate) fn enter_halt(&mut self) {
        log::debug!("entering HALT at pc={:#06x}", self.regs.pc);
        self.mode = Mode::Halted;
    }

    #[inline]
    pub(crate) fn enter_stop(&mut self) {
        log::debug!("entering STOP at pc={:#06x}", self.regs.pc);
        self.mode = Mode::Stopped;
    }
}
