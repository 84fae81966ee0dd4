//! Arithmetic cores shared by the register, `(HL)` and immediate operand
//! forms of the ALU instructions. The carry math lives in two free functions
//! so ADD/ADC/SUB/SBC/CP/INC/DEC and the signed 16-bit adds all draw their H
//! and C bits from the same two identities.

use super::regs::Flag;
use super::Cpu;

/// `a + b + carry_in` with the two carry-outs the flag register wants.
///
/// Bit 4 of `a ^ b ^ result` is exactly the carry that crossed from bit 3
/// into bit 4, which is the half-carry definition.
#[inline]
fn adc8(a: u8, b: u8, carry_in: u8) -> (u8, bool, bool) {
    let wide = a as u16 + b as u16 + carry_in as u16;
    let result = wide as u8;
    let half = (a ^ b ^ result) & 0x10 != 0;
    (result, half, wide > 0xFF)
}

/// `a - b - borrow_in` with half-borrow and borrow-out. The same XOR identity
/// as [`adc8`] yields the borrow across bit 3.
#[inline]
fn sbc8(a: u8, b: u8, borrow_in: u8) -> (u8, bool, bool) {
    let result = a.wrapping_sub(b).wrapping_sub(borrow_in);
    let half = (a ^ b ^ result) & 0x10 != 0;
    let borrow = (a as u16) < b as u16 + borrow_in as u16;
    (result, half, borrow)
}

impl Cpu {
    /// Incoming carry for the ADC/SBC variants: the C flag as 0 or 1, or a
    /// constant 0 for the plain ADD/SUB forms.
    #[inline]
    fn carry_in(&self, use_carry: bool) -> u8 {
        (use_carry && self.regs.flag(Flag::C)) as u8
    }

    /// Writes all four flags at once. Most ALU ops define every flag, so
    /// spelling out the whole row keeps each op's flag behaviour in one line.
    #[inline]
    fn set_znhc(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.set_flag(Flag::Z, z);
        self.regs.set_flag(Flag::N, n);
        self.regs.set_flag(Flag::H, h);
        self.regs.set_flag(Flag::C, c);
    }

    /// ADD (`use_carry` false) or ADC (true) into A.
    pub(crate) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry_in = self.carry_in(use_carry);
        let (result, half, carry) = adc8(self.regs.a, value, carry_in);
        self.regs.a = result;
        self.set_znhc(result == 0, false, half, carry);
    }

    /// SUB (`use_carry` false) or SBC (true) into A.
    pub(crate) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let borrow_in = self.carry_in(use_carry);
        let (result, half, borrow) = sbc8(self.regs.a, value, borrow_in);
        self.regs.a = result;
        self.set_znhc(result == 0, true, half, borrow);
    }

    #[inline]
    pub(crate) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.set_znhc(self.regs.a == 0, false, true, false);
    }

    #[inline]
    pub(crate) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.set_znhc(self.regs.a == 0, false, false, false);
    }

    #[inline]
    pub(crate) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.set_znhc(self.regs.a == 0, false, false, false);
    }

    /// CP: SUB's flags without SUB's store.
    #[inline]
    pub(crate) fn alu_cp(&mut self, value: u8) {
        let (result, half, borrow) = sbc8(self.regs.a, value, 0);
        self.set_znhc(result == 0, true, half, borrow);
    }

    /// INC core. C is the one flag INC leaves alone, so this writes Z, N and
    /// H individually instead of going through [`Cpu::set_znhc`].
    #[inline]
    pub(crate) fn alu_inc8(&mut self, value: u8) -> u8 {
        let (result, half, _) = adc8(value, 1, 0);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, half);
        result
    }

    /// DEC core. Like INC, C is untouched.
    #[inline]
    pub(crate) fn alu_dec8(&mut self, value: u8) -> u8 {
        let (result, half, _) = sbc8(value, 1, 0);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, half);
        result
    }

    /// ADD HL,rr core. Z survives; H is the carry that crossed bit 11, by
    /// the word-sized version of the [`adc8`] identity.
    #[inline]
    pub(crate) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (sum, carry) = hl.overflowing_add(value);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, (hl ^ value ^ sum) & 0x1000 != 0);
        self.regs.set_flag(Flag::C, carry);
        self.regs.set_hl(sum);
    }

    /// Signed-immediate 16-bit add used by ADD SP,r8 and LD HL,SP+r8.
    ///
    /// H and C come from the unsigned byte add of the immediate into the low
    /// half of `base`, whatever the immediate's sign; Z and N are forced
    /// clear even when the sum is zero.
    #[inline]
    pub(crate) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let (_, half, carry) = adc8(base as u8, imm8, 0);
        self.set_znhc(false, false, half, carry);
        base.wrapping_add(imm8 as i8 as u16)
    }

    /// DAA: fold the decimal correction the previous ADD/ADC or SUB/SBC
    /// needs into A.
    ///
    /// Each nibble that overflowed decimally (flagged by H/C, or visible
    /// directly after an addition) takes a 0x06/0x60 correction, added or
    /// subtracted per the N flag. C latches once a 0x60 correction is owed
    /// and is never cleared by DAA itself.
    pub(crate) fn alu_daa(&mut self) {
        let subtracting = self.regs.flag(Flag::N);
        let mut correction = 0u8;
        let mut carry = self.regs.flag(Flag::C);

        if self.regs.flag(Flag::H) || (!subtracting && self.regs.a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if carry || (!subtracting && self.regs.a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        self.regs.a = if subtracting {
            self.regs.a.wrapping_sub(correction)
        } else {
            self.regs.a.wrapping_add(correction)
        };

        self.regs.set_flag(Flag::Z, self.regs.a == 0);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, carry);
    }
}
