use crate::cpu::bus::Bus;
use crate::cpu::{Cpu, ExecError};

impl Cpu {
    /// Relative jump core used by JR and JR cc.
    ///
    /// The displacement byte is always fetched, taken or not, so PC ends up
    /// past the operand either way; it is signed and relative to the address
    /// following the operand.
    fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) -> Result<(), ExecError> {
        let offset = self.fetch8(bus)? as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        }
        Ok(())
    }

    /// Absolute jump core used by JP and JP cc. The target word is always
    /// fetched.
    fn jp<B: Bus>(&mut self, bus: &mut B, cond: bool) -> Result<(), ExecError> {
        let addr = self.fetch16(bus)?;
        if cond {
            self.regs.pc = addr;
        }
        Ok(())
    }

    /// Call core used by CALL and CALL cc. Pushes the address of the
    /// following instruction before jumping.
    fn call<B: Bus>(&mut self, bus: &mut B, cond: bool) -> Result<(), ExecError> {
        let addr = self.fetch16(bus)?;
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret)?;
            self.regs.pc = addr;
        }
        Ok(())
    }

    /// Return core used by RET and RET cc.
    fn ret<B: Bus>(&mut self, bus: &mut B, cond: bool) -> Result<(), ExecError> {
        if cond {
            let addr = self.pop_u16(bus)?;
            self.regs.pc = addr;
        }
        Ok(())
    }

    /// JR r8 — 0x18.
    pub(crate) fn op_jr<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.jr(bus, true)
    }

    /// JR cc,r8 — 0x20/0x28/0x30/0x38.
    pub(crate) fn op_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let cond = self.condition(opcode);
        self.jr(bus, cond)
    }

    /// JP a16 — 0xC3.
    pub(crate) fn op_jp_a16<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.jp(bus, true)
    }

    /// JP cc,a16 — 0xC2/0xCA/0xD2/0xDA.
    pub(crate) fn op_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let cond = self.condition(opcode);
        self.jp(bus, cond)
    }

    /// JP HL — 0xE9. No operand fetch; the target is the HL pair itself.
    pub(crate) fn op_jp_hl<B: Bus>(&mut self, _bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.regs.pc = self.regs.hl();
        Ok(())
    }

    /// CALL a16 — 0xCD.
    pub(crate) fn op_call_a16<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.call(bus, true)
    }

    /// CALL cc,a16 — 0xC4/0xCC/0xD4/0xDC.
    pub(crate) fn op_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let cond = self.condition(opcode);
        self.call(bus, cond)
    }

    /// RET — 0xC9.
    pub(crate) fn op_ret<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        self.ret(bus, true)
    }

    /// RET cc — 0xC0/0xC8/0xD0/0xD8.
    pub(crate) fn op_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        let cond = self.condition(opcode);
        self.ret(bus, cond)
    }

    /// RETI — 0xD9. RET plus interrupt-master-enable.
    pub(crate) fn op_reti<B: Bus>(&mut self, bus: &mut B, _opcode: u8) -> Result<(), ExecError> {
        let addr = self.pop_u16(bus)?;
        self.regs.pc = addr;
        self.ime = true;
        Ok(())
    }

    /// RST n — 0xC7/0xCF/0xD7/0xDF/0xE7/0xEF/0xF7/0xFF. Calls the fixed
    /// vector encoded in bits 3–5.
    pub(crate) fn op_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert!(opcode & 0xC7 == 0xC7);

        let ret = self.regs.pc;
        self.push_u16(bus, ret)?;
        self.regs.pc = (opcode & 0x38) as u16;
        Ok(())
    }
}
