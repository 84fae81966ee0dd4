use crate::cpu::bus::Bus;
use crate::cpu::dispatch::ILLEGAL_OPCODES;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    /// NOP — 0x00.
    pub(crate) fn op_nop<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        Ok(())
    }

    /// HALT — 0x76. Suspends instruction fetch until the external interrupt
    /// controller signals a pending, enabled interrupt
    /// (see [`Cpu::interrupt_wake`]).
    pub(crate) fn op_halt<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.enter_halt();
        Ok(())
    }

    /// STOP — 0x10. A 2-byte instruction; the padding byte is fetched and
    /// discarded so PC matches hardware. Fetch stays suspended until an
    /// external reset/wake signal (see [`Cpu::resume`]).
    pub(crate) fn op_stop<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        let _padding = self.fetch8(bus)?;
        self.enter_stop();
        Ok(())
    }

    /// DI — 0xF3.
    pub(crate) fn op_di<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.ime = false;
        Ok(())
    }

    /// EI — 0xFB.
    ///
    /// IME is enabled immediately. Hardware delays the enable by one
    /// instruction; that refinement is deliberately not modelled here and
    /// would slot into this handler plus a pending flag on [`Cpu`].
    pub(crate) fn op_ei<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.ime = true;
        Ok(())
    }

    /// Handler installed in the architecturally undefined primary slots.
    pub(crate) fn op_illegal<B: Bus>(&mut self, _bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(ILLEGAL_OPCODES.contains(&opcode));

        let pc = self.regs.pc.wrapping_sub(1);
        log::warn!("illegal opcode {opcode:#04x} at {pc:#06x}");
        Err(ExecError::IllegalOpcode { opcode, pc })
    }
}
