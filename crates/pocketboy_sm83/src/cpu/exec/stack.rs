use crate::cpu::bus::Bus;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    /// PUSH rr — 0xC5/0xD5/0xE5/0xF5. The push table uses AF in the slot
    /// where the other pair tables carry SP.
    pub(crate) fn op_push_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        };
        self.push_u16(bus, value)
    }

    /// POP rr — 0xC1/0xD1/0xE1/0xF1. Popping into AF keeps the low nibble of
    /// F zero.
    pub(crate) fn op_pop_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus)?;
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
        Ok(())
    }
}
