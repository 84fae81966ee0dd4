//! Instruction semantics, split by family. Every handler has the uniform
//! [`super::dispatch::OpHandler`] shape and receives the opcode byte it was
//! dispatched for, so row-regular encodings decode their operands from the
//! byte itself.

mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::addr::Address;
use super::bus::Bus;
use super::regs::Flag;
use super::{Cpu, ExecError};

impl Cpu {
    /// Read an 8-bit operand by table index.
    ///
    /// The index follows the standard SM83 register order used by the opcode
    /// rows: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(crate) fn read_reg8<B: Bus>(&mut self, bus: &mut B, index: u8) -> Result<u8, ExecError> {
        Ok(match index {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(Address::new(self.regs.hl()))?,
            7 => self.regs.a,
            _ => unreachable!(),
        })
    }

    /// Write an 8-bit operand by table index. The encoding matches
    /// [`Cpu::read_reg8`].
    #[inline]
    pub(crate) fn write_reg8<B: Bus>(
        &mut self,
        bus: &mut B,
        index: u8,
        value: u8,
    ) -> Result<(), ExecError> {
        match index {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(Address::new(self.regs.hl()), value)?,
            7 => self.regs.a = value,
            _ => unreachable!(),
        }
        Ok(())
    }

    /// Read a 16-bit register by pair-table index: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(crate) fn read_rp(&self, index: u8) -> u16 {
        match index {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            3 => self.regs.sp,
            _ => unreachable!(),
        }
    }

    /// Write a 16-bit register by pair-table index. The encoding matches
    /// [`Cpu::read_rp`].
    #[inline]
    pub(crate) fn write_rp(&mut self, index: u8, value: u16) {
        match index {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            3 => self.regs.sp = value,
            _ => unreachable!(),
        }
    }

    /// Evaluate the condition code carried in bits 3–4 of a conditional
    /// JR/JP/CALL/RET opcode: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    pub(crate) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.regs.flag(Flag::Z),
            1 => self.regs.flag(Flag::Z),
            2 => !self.regs.flag(Flag::C),
            _ => self.regs.flag(Flag::C),
        }
    }
}
