use crate::cpu::bus::Bus;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    /// INC r and INC (HL) — 0x04/0x0C/…/0x34/0x3C.
    ///
    /// Z, N, H follow the additive formula; C is never touched.
    pub(crate) fn op_inc_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index)?;
        let result = self.alu_inc8(value);
        self.write_reg8(bus, index, result)
    }

    /// DEC r and DEC (HL) — 0x05/0x0D/…/0x35/0x3D.
    pub(crate) fn op_dec_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index)?;
        let result = self.alu_dec8(value);
        self.write_reg8(bus, index, result)
    }

    /// INC rr — 0x03/0x13/0x23/0x33. Wraps modulo 65536, no flags.
    pub(crate) fn op_inc_rr<B: Bus>(&mut self, _bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let index = (opcode >> 4) & 0x03;
        let value = self.read_rp(index).wrapping_add(1);
        self.write_rp(index, value);
        Ok(())
    }

    /// DEC rr — 0x0B/0x1B/0x2B/0x3B. Wraps modulo 65536, no flags.
    pub(crate) fn op_dec_rr<B: Bus>(&mut self, _bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let index = (opcode >> 4) & 0x03;
        let value = self.read_rp(index).wrapping_sub(1);
        self.write_rp(index, value);
        Ok(())
    }
}
