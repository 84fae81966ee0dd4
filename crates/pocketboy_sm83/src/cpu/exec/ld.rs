use crate::cpu::addr::Address;
use crate::cpu::bus::Bus;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    /// LD rr,d16 — 0x01/0x11/0x21/0x31.
    pub(crate) fn op_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16(bus)?;
        self.write_rp((opcode >> 4) & 0x03, value);
        Ok(())
    }

    /// LD r,d8 and LD (HL),d8 — 0x06/0x0E/…/0x36/0x3E.
    pub(crate) fn op_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let dst = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus)?;
        self.write_reg8(bus, dst, value)
    }

    /// LD r,r' and the (HL) transfer forms — 0x40..=0x7F except 0x76 (HALT).
    pub(crate) fn op_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(matches!(opcode, 0x40..=0x7F) && opcode != 0x76);

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src)?;
        self.write_reg8(bus, dst, value)
    }

    /// LD (BC/DE/HL+/HL-),A — 0x02/0x12/0x22/0x32.
    pub(crate) fn op_ld_indirect_a<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
    ) -> Result<(), ExecError> {
        let addr = match opcode {
            0x02 => self.regs.bc(),
            0x12 => self.regs.de(),
            _ => self.regs.hl(),
        };
        bus.write8(Address::new(addr), self.regs.a)?;
        match opcode {
            0x22 => self.regs.set_hl(addr.wrapping_add(1)),
            0x32 => self.regs.set_hl(addr.wrapping_sub(1)),
            _ => {}
        }
        Ok(())
    }

    /// LD A,(BC/DE/HL+/HL-) — 0x0A/0x1A/0x2A/0x3A.
    pub(crate) fn op_ld_a_indirect<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
    ) -> Result<(), ExecError> {
        let addr = match opcode {
            0x0A => self.regs.bc(),
            0x1A => self.regs.de(),
            _ => self.regs.hl(),
        };
        self.regs.a = bus.read8(Address::new(addr))?;
        match opcode {
            0x2A => self.regs.set_hl(addr.wrapping_add(1)),
            0x3A => self.regs.set_hl(addr.wrapping_sub(1)),
            _ => {}
        }
        Ok(())
    }

    /// LD (a16),SP — 0x08. Stores SP low byte first.
    pub(crate) fn op_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        let addr = Address::new(self.fetch16(bus)?);
        let sp = self.regs.sp;
        bus.write8(addr, sp as u8)?;
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8)?;
        Ok(())
    }

    /// LDH (a8),A / LDH A,(a8) — 0xE0/0xF0. The operand byte is resolved
    /// against the I/O page at 0xFF00.
    pub(crate) fn op_ldh_a8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let offset = self.fetch8(bus)?;
        let addr = Address::high_page(offset);
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a)?;
        } else {
            self.regs.a = bus.read8(addr)?;
        }
        Ok(())
    }

    /// LDH (C),A / LDH A,(C) — 0xE2/0xF2. Like the a8 forms, but the offset
    /// comes from register C.
    pub(crate) fn op_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let addr = Address::high_page(self.regs.c);
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a)?;
        } else {
            self.regs.a = bus.read8(addr)?;
        }
        Ok(())
    }

    /// LD (a16),A / LD A,(a16) — 0xEA/0xFA.
    pub(crate) fn op_ld_a16_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let addr = Address::new(self.fetch16(bus)?);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a)?;
        } else {
            self.regs.a = bus.read8(addr)?;
        }
        Ok(())
    }

    /// LD SP,HL — 0xF9.
    pub(crate) fn op_ld_sp_hl<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.regs.sp = self.regs.hl();
        Ok(())
    }

    /// LD HL,SP+r8 — 0xF8. Flags come from the low-byte addition.
    pub(crate) fn op_ld_hl_sp_r8<B: Bus>(
        &mut self,
        bus: &mut B,
        _opcode: u8,
    ) -> Result<(), ExecError> {
        let imm = self.fetch8(bus)?;
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        Ok(())
    }
}
