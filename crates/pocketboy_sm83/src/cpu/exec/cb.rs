//! Handlers for the 0xCB-prefixed table: rotates, shifts, SWAP and the
//! single-bit test/set/reset family. Bits 0–2 of the prefixed byte select
//! the operand (6 = `(HL)`), bits 3–5 the rotate variant or the bit number.

use crate::cpu::bus::Bus;
use crate::cpu::regs::Flag;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    #[inline]
    fn set_rotate_flags(&mut self, result: u8, carry: bool) {
        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::C, carry);
    }

    /// RLC r — 0x00..=0x07.
    pub(crate) fn op_rlc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry = (value & 0x80) != 0;
        let result = value.rotate_left(1);
        self.set_rotate_flags(result, carry);
        self.write_reg8(bus, z, result)
    }

    /// RRC r — 0x08..=0x0F.
    pub(crate) fn op_rrc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry = (value & 0x01) != 0;
        let result = value.rotate_right(1);
        self.set_rotate_flags(result, carry);
        self.write_reg8(bus, z, result)
    }

    /// RL r — 0x10..=0x17. Rotate left through Carry.
    pub(crate) fn op_rl<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry_in = if self.regs.flag(Flag::C) { 1 } else { 0 };
        let carry_out = (value & 0x80) != 0;
        let result = (value << 1) | carry_in;
        self.set_rotate_flags(result, carry_out);
        self.write_reg8(bus, z, result)
    }

    /// RR r — 0x18..=0x1F. Rotate right through Carry.
    pub(crate) fn op_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry_in = if self.regs.flag(Flag::C) { 0x80 } else { 0 };
        let carry_out = (value & 0x01) != 0;
        let result = (value >> 1) | carry_in;
        self.set_rotate_flags(result, carry_out);
        self.write_reg8(bus, z, result)
    }

    /// SLA r — 0x20..=0x27. Shift left, bit 0 cleared.
    pub(crate) fn op_sla<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry = (value & 0x80) != 0;
        let result = value << 1;
        self.set_rotate_flags(result, carry);
        self.write_reg8(bus, z, result)
    }

    /// SRA r — 0x28..=0x2F. Arithmetic shift right, bit 7 preserved.
    pub(crate) fn op_sra<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry = (value & 0x01) != 0;
        let result = (value >> 1) | (value & 0x80);
        self.set_rotate_flags(result, carry);
        self.write_reg8(bus, z, result)
    }

    /// SWAP r — 0x30..=0x37. Exchanges nibbles; Carry always cleared.
    pub(crate) fn op_swap<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let result = (value << 4) | (value >> 4);
        self.set_rotate_flags(result, false);
        self.write_reg8(bus, z, result)
    }

    /// SRL r — 0x38..=0x3F. Logical shift right, bit 7 cleared.
    pub(crate) fn op_srl<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        let carry = (value & 0x01) != 0;
        let result = value >> 1;
        self.set_rotate_flags(result, carry);
        self.write_reg8(bus, z, result)
    }

    /// BIT b,r — 0x40..=0x7F.
    ///
    /// Z becomes the complement of the tested bit; N=0, H=1; Carry and the
    /// operand itself are untouched.
    pub(crate) fn op_bit<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode & 0x07)?;
        let bit_set = (value & (1 << bit)) != 0;
        self.regs.set_flag(Flag::Z, !bit_set);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);
        Ok(())
    }

    /// RES b,r — 0x80..=0xBF. Clears bit b; no flags.
    pub(crate) fn op_res<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let bit = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        self.write_reg8(bus, z, value & !(1 << bit))
    }

    /// SET b,r — 0xC0..=0xFF. Sets bit b; no flags.
    pub(crate) fn op_set<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let bit = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z)?;
        self.write_reg8(bus, z, value | (1 << bit))
    }
}
