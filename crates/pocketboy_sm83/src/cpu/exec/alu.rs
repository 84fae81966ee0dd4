use crate::cpu::bus::Bus;
use crate::cpu::regs::Flag;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    /// 8-bit ALU block — 0x80..=0xBF.
    ///
    /// Bits 3–5 select the operation (ADD/ADC/SUB/SBC/AND/XOR/OR/CP), bits
    /// 0–2 the operand register (with 6 = `(HL)`).
    pub(crate) fn op_alu_a_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0x80..=0xBF));

        let value = self.read_reg8(bus, opcode & 0x07)?;
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        Ok(())
    }

    /// Immediate forms of the ALU block — 0xC6/0xCE/0xD6/0xDE/0xE6/0xEE/0xF6/0xFE.
    pub(crate) fn op_alu_a_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let value = self.fetch8(bus)?;
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        Ok(())
    }

    #[inline]
    fn alu_dispatch(&mut self, op: u8, value: u8) {
        match op {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// ADD HL,rr — 0x09/0x19/0x29/0x39.
    pub(crate) fn op_add_hl_rr<B: Bus>(&mut self, _bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.read_rp((opcode >> 4) & 0x03);
        self.alu_add16_hl(value);
        Ok(())
    }

    /// ADD SP,r8 — 0xE8.
    pub(crate) fn op_add_sp_r8<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        let imm = self.fetch8(bus)?;
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Ok(())
    }

    /// Unprefixed rotate-A instructions — 0x07 RLCA, 0x0F RRCA, 0x17 RLA,
    /// 0x1F RRA.
    ///
    /// Same shapes as the CB-prefixed rotates, but Z is always forced to 0.
    pub(crate) fn op_rotate_a<B: Bus>(&mut self, _bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let a = self.regs.a;
        let (result, carry_out) = match opcode {
            0x07 => (a.rotate_left(1), (a & 0x80) != 0),
            0x0F => (a.rotate_right(1), (a & 0x01) != 0),
            0x17 => {
                let carry_in = if self.regs.flag(Flag::C) { 1 } else { 0 };
                ((a << 1) | carry_in, (a & 0x80) != 0)
            }
            _ => {
                let carry_in = if self.regs.flag(Flag::C) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, (a & 0x01) != 0)
            }
        };

        self.regs.a = result;
        self.regs.clear_flags();
        self.regs.set_flag(Flag::C, carry_out);
        Ok(())
    }

    /// DAA — 0x27.
    pub(crate) fn op_daa<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.alu_daa();
        Ok(())
    }

    /// CPL — 0x2F. Complements A; sets N and H, leaves Z and C.
    pub(crate) fn op_cpl<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, true);
        Ok(())
    }

    /// SCF — 0x37. Sets C, clears N and H, leaves Z.
    pub(crate) fn op_scf<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, true);
        Ok(())
    }

    /// CCF — 0x3F. Complements C, clears N and H, leaves Z.
    pub(crate) fn op_ccf<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        let carry = self.regs.flag(Flag::C);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, !carry);
        Ok(())
    }
}
