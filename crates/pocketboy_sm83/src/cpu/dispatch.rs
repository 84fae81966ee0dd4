//! Opcode dispatch: two parallel 256-entry tables of handler function
//! pointers, one for the primary opcode space and one reached through the
//! 0xCB prefix escape. Dispatch is a single indexed load; each handler owns
//! the operand fetches its encoding specifies.

use std::marker::PhantomData;

use super::bus::Bus;
use super::{Cpu, ExecError};

/// Uniform shape of every instruction handler. The opcode byte is passed
/// through so row-regular encodings can decode register/bit fields from it.
pub(crate) type OpHandler<B> = fn(&mut Cpu, &mut B, u8) -> Result<(), ExecError>;

/// The escape byte that selects the secondary table.
pub(crate) const PREFIX: u8 = 0xCB;

/// The eleven architecturally undefined primary opcodes. Their table slots
/// hold [`Cpu::op_illegal`]; every prefixed slot is defined.
pub(crate) const ILLEGAL_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

impl Cpu {
    /// 0xCB prefix escape: fetch the second opcode byte (advancing PC, like
    /// any other operand fetch) and dispatch it through the secondary table.
    pub(crate) fn op_prefix<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<(), ExecError> {
        debug_assert_eq!(opcode, PREFIX);

        let prefixed = self.fetch8(bus)?;
        OpcodeTables::<B>::PREFIXED[prefixed as usize](self, bus, prefixed)
    }
}

pub(crate) struct OpcodeTables<B>(PhantomData<B>);

impl<B: Bus> OpcodeTables<B> {
    /// Primary opcode table, indexed by the fetched opcode byte.
    pub(crate) const PRIMARY: [OpHandler<B>; 256] = [
        /* 0x00 NOP          */ Cpu::op_nop,
        /* 0x01 LD BC,d16    */ Cpu::op_ld_rr_d16,
        /* 0x02 LD (BC),A    */ Cpu::op_ld_indirect_a,
        /* 0x03 INC BC       */ Cpu::op_inc_rr,
        /* 0x04 INC B        */ Cpu::op_inc_r,
        /* 0x05 DEC B        */ Cpu::op_dec_r,
        /* 0x06 LD B,d8      */ Cpu::op_ld_r_d8,
        /* 0x07 RLCA         */ Cpu::op_rotate_a,
        /* 0x08 LD (a16),SP  */ Cpu::op_ld_a16_sp,
        /* 0x09 ADD HL,BC    */ Cpu::op_add_hl_rr,
        /* 0x0A LD A,(BC)    */ Cpu::op_ld_a_indirect,
        /* 0x0B DEC BC       */ Cpu::op_dec_rr,
        /* 0x0C INC C        */ Cpu::op_inc_r,
        /* 0x0D DEC C        */ Cpu::op_dec_r,
        /* 0x0E LD C,d8      */ Cpu::op_ld_r_d8,
        /* 0x0F RRCA         */ Cpu::op_rotate_a,
        /* 0x10 STOP         */ Cpu::op_stop,
        /* 0x11 LD DE,d16    */ Cpu::op_ld_rr_d16,
        /* 0x12 LD (DE),A    */ Cpu::op_ld_indirect_a,
        /* 0x13 INC DE       */ Cpu::op_inc_rr,
        /* 0x14 INC D        */ Cpu::op_inc_r,
        /* 0x15 DEC D        */ Cpu::op_dec_r,
        /* 0x16 LD D,d8      */ Cpu::op_ld_r_d8,
        /* 0x17 RLA          */ Cpu::op_rotate_a,
        /* 0x18 JR r8        */ Cpu::op_jr,
        /* 0x19 ADD HL,DE    */ Cpu::op_add_hl_rr,
        /* 0x1A LD A,(DE)    */ Cpu::op_ld_a_indirect,
        /* 0x1B DEC DE       */ Cpu::op_dec_rr,
        /* 0x1C INC E        */ Cpu::op_inc_r,
        /* 0x1D DEC E        */ Cpu::op_dec_r,
        /* 0x1E LD E,d8      */ Cpu::op_ld_r_d8,
        /* 0x1F RRA          */ Cpu::op_rotate_a,
        /* 0x20 JR NZ,r8     */ Cpu::op_jr_cc,
        /* 0x21 LD HL,d16    */ Cpu::op_ld_rr_d16,
        /* 0x22 LD (HL+),A   */ Cpu::op_ld_indirect_a,
        /* 0x23 INC HL       */ Cpu::op_inc_rr,
        /* 0x24 INC H        */ Cpu::op_inc_r,
        /* 0x25 DEC H        */ Cpu::op_dec_r,
        /* 0x26 LD H,d8      */ Cpu::op_ld_r_d8,
        /* 0x27 DAA          */ Cpu::op_daa,
        /* 0x28 JR Z,r8      */ Cpu::op_jr_cc,
        /* 0x29 ADD HL,HL    */ Cpu::op_add_hl_rr,
        /* 0x2A LD A,(HL+)   */ Cpu::op_ld_a_indirect,
        /* 0x2B DEC HL       */ Cpu::op_dec_rr,
        /* 0x2C INC L        */ Cpu::op_inc_r,
        /* 0x2D DEC L        */ Cpu::op_dec_r,
        /* 0x2E LD L,d8      */ Cpu::op_ld_r_d8,
        /* 0x2F CPL          */ Cpu::op_cpl,
        /* 0x30 JR NC,r8     */ Cpu::op_jr_cc,
        /* 0x31 LD SP,d16    */ Cpu::op_ld_rr_d16,
        /* 0x32 LD (HL-),A   */ Cpu::op_ld_indirect_a,
        /* 0x33 INC SP       */ Cpu::op_inc_rr,
        /* 0x34 INC (HL)     */ Cpu::op_inc_r,
        /* 0x35 DEC (HL)     */ Cpu::op_dec_r,
        /* 0x36 LD (HL),d8   */ Cpu::op_ld_r_d8,
        /* 0x37 SCF          */ Cpu::op_scf,
        /* 0x38 JR C,r8      */ Cpu::op_jr_cc,
        /* 0x39 ADD HL,SP    */ Cpu::op_add_hl_rr,
        /* 0x3A LD A,(HL-)   */ Cpu::op_ld_a_indirect,
        /* 0x3B DEC SP       */ Cpu::op_dec_rr,
        /* 0x3C INC A        */ Cpu::op_inc_r,
        /* 0x3D DEC A        */ Cpu::op_dec_r,
        /* 0x3E LD A,d8      */ Cpu::op_ld_r_d8,
        /* 0x3F CCF          */ Cpu::op_ccf,
        /* 0x40 LD B,B       */ Cpu::op_ld_r_r,
        /* 0x41 LD B,C       */ Cpu::op_ld_r_r,
        /* 0x42 LD B,D       */ Cpu::op_ld_r_r,
        /* 0x43 LD B,E       */ Cpu::op_ld_r_r,
        /* 0x44 LD B,H       */ Cpu::op_ld_r_r,
        /* 0x45 LD B,L       */ Cpu::op_ld_r_r,
        /* 0x46 LD B,(HL)    */ Cpu::op_ld_r_r,
        /* 0x47 LD B,A       */ Cpu::op_ld_r_r,
        /* 0x48 LD C,B       */ Cpu::op_ld_r_r,
        /* 0x49 LD C,C       */ Cpu::op_ld_r_r,
        /* 0x4A LD C,D       */ Cpu::op_ld_r_r,
        /* 0x4B LD C,E       */ Cpu::op_ld_r_r,
        /* 0x4C LD C,H       */ Cpu::op_ld_r_r,
        /* 0x4D LD C,L       */ Cpu::op_ld_r_r,
        /* 0x4E LD C,(HL)    */ Cpu::op_ld_r_r,
        /* 0x4F LD C,A       */ Cpu::op_ld_r_r,
        /* 0x50 LD D,B       */ Cpu::op_ld_r_r,
        /* 0x51 LD D,C       */ Cpu::op_ld_r_r,
        /* 0x52 LD D,D       */ Cpu::op_ld_r_r,
        /* 0x53 LD D,E       */ Cpu::op_ld_r_r,
        /* 0x54 LD D,H       */ Cpu::op_ld_r_r,
        /* 0x55 LD D,L       */ Cpu::op_ld_r_r,
        /* 0x56 LD D,(HL)    */ Cpu::op_ld_r_r,
        /* 0x57 LD D,A       */ Cpu::op_ld_r_r,
        /* 0x58 LD E,B       */ Cpu::op_ld_r_r,
        /* 0x59 LD E,C       */ Cpu::op_ld_r_r,
        /* 0x5A LD E,D       */ Cpu::op_ld_r_r,
        /* 0x5B LD E,E       */ Cpu::op_ld_r_r,
        /* 0x5C LD E,H       */ Cpu::op_ld_r_r,
        /* 0x5D LD E,L       */ Cpu::op_ld_r_r,
        /* 0x5E LD E,(HL)    */ Cpu::op_ld_r_r,
        /* 0x5F LD E,A       */ Cpu::op_ld_r_r,
        /* 0x60 LD H,B       */ Cpu::op_ld_r_r,
        /* 0x61 LD H,C       */ Cpu::op_ld_r_r,
        /* 0x62 LD H,D       */ Cpu::op_ld_r_r,
        /* 0x63 LD H,E       */ Cpu::op_ld_r_r,
        /* 0x64 LD H,H       */ Cpu::op_ld_r_r,
        /* 0x65 LD H,L       */ Cpu::op_ld_r_r,
        /* 0x66 LD H,(HL)    */ Cpu::op_ld_r_r,
        /* 0x67 LD H,A       */ Cpu::op_ld_r_r,
        /* 0x68 LD L,B       */ Cpu::op_ld_r_r,
        /* 0x69 LD L,C       */ Cpu::op_ld_r_r,
        /* 0x6A LD L,D       */ Cpu::op_ld_r_r,
        /* 0x6B LD L,E       */ Cpu::op_ld_r_r,
        /* 0x6C LD L,H       */ Cpu::op_ld_r_r,
        /* 0x6D LD L,L       */ Cpu::op_ld_r_r,
        /* 0x6E LD L,(HL)    */ Cpu::op_ld_r_r,
        /* 0x6F LD L,A       */ Cpu::op_ld_r_r,
        /* 0x70 LD (HL),B    */ Cpu::op_ld_r_r,
        /* 0x71 LD (HL),C    */ Cpu::op_ld_r_r,
        /* 0x72 LD (HL),D    */ Cpu::op_ld_r_r,
        /* 0x73 LD (HL),E    */ Cpu::op_ld_r_r,
        /* 0x74 LD (HL),H    */ Cpu::op_ld_r_r,
        /* 0x75 LD (HL),L    */ Cpu::op_ld_r_r,
        /* 0x76 HALT         */ Cpu::op_halt,
        /* 0x77 LD (HL),A    */ Cpu::op_ld_r_r,
        /* 0x78 LD A,B       */ Cpu::op_ld_r_r,
        /* 0x79 LD A,C       */ Cpu::op_ld_r_r,
        /* 0x7A LD A,D       */ Cpu::op_ld_r_r,
        /* 0x7B LD A,E       */ Cpu::op_ld_r_r,
        /* 0x7C LD A,H       */ Cpu::op_ld_r_r,
        /* 0x7D LD A,L       */ Cpu::op_ld_r_r,
        /* 0x7E LD A,(HL)    */ Cpu::op_ld_r_r,
        /* 0x7F LD A,A       */ Cpu::op_ld_r_r,
        /* 0x80 ADD A,B      */ Cpu::op_alu_a_r,
        /* 0x81 ADD A,C      */ Cpu::op_alu_a_r,
        /* 0x82 ADD A,D      */ Cpu::op_alu_a_r,
        /* 0x83 ADD A,E      */ Cpu::op_alu_a_r,
        /* 0x84 ADD A,H      */ Cpu::op_alu_a_r,
        /* 0x85 ADD A,L      */ Cpu::op_alu_a_r,
        /* 0x86 ADD A,(HL)   */ Cpu::op_alu_a_r,
        /* 0x87 ADD A,A      */ Cpu::op_alu_a_r,
        /* 0x88 ADC A,B      */ Cpu::op_alu_a_r,
        /* 0x89 ADC A,C      */ Cpu::op_alu_a_r,
        /* 0x8A ADC A,D      */ Cpu::op_alu_a_r,
        /* 0x8B ADC A,E      */ Cpu::op_alu_a_r,
        /* 0x8C ADC A,H      */ Cpu::op_alu_a_r,
        /* 0x8D ADC A,L      */ Cpu::op_alu_a_r,
        /* 0x8E ADC A,(HL)   */ Cpu::op_alu_a_r,
        /* 0x8F ADC A,A      */ Cpu::op_alu_a_r,
        /* 0x90 SUB B        */ Cpu::op_alu_a_r,
        /* 0x91 SUB C        */ Cpu::op_alu_a_r,
        /* 0x92 SUB D        */ Cpu::op_alu_a_r,
        /* 0x93 SUB E        */ Cpu::op_alu_a_r,
        /* 0x94 SUB H        */ Cpu::op_alu_a_r,
        /* 0x95 SUB L        */ Cpu::op_alu_a_r,
        /* 0x96 SUB (HL)     */ Cpu::op_alu_a_r,
        /* 0x97 SUB A        */ Cpu::op_alu_a_r,
        /* 0x98 SBC A,B      */ Cpu::op_alu_a_r,
        /* 0x99 SBC A,C      */ Cpu::op_alu_a_r,
        /* 0x9A SBC A,D      */ Cpu::op_alu_a_r,
        /* 0x9B SBC A,E      */ Cpu::op_alu_a_r,
        /* 0x9C SBC A,H      */ Cpu::op_alu_a_r,
        /* 0x9D SBC A,L      */ Cpu::op_alu_a_r,
        /* 0x9E SBC A,(HL)   */ Cpu::op_alu_a_r,
        /* 0x9F SBC A,A      */ Cpu::op_alu_a_r,
        /* 0xA0 AND B        */ Cpu::op_alu_a_r,
        /* 0xA1 AND C        */ Cpu::op_alu_a_r,
        /* 0xA2 AND D        */ Cpu::op_alu_a_r,
        /* 0xA3 AND E        */ Cpu::op_alu_a_r,
        /* 0xA4 AND H        */ Cpu::op_alu_a_r,
        /* 0xA5 AND L        */ Cpu::op_alu_a_r,
        /* 0xA6 AND (HL)     */ Cpu::op_alu_a_r,
        /* 0xA7 AND A        */ Cpu::op_alu_a_r,
        /* 0xA8 XOR B        */ Cpu::op_alu_a_r,
        /* 0xA9 XOR C        */ Cpu::op_alu_a_r,
        /* 0xAA XOR D        */ Cpu::op_alu_a_r,
        /* 0xAB XOR E        */ Cpu::op_alu_a_r,
        /* 0xAC XOR H        */ Cpu::op_alu_a_r,
        /* 0xAD XOR L        */ Cpu::op_alu_a_r,
        /* 0xAE XOR (HL)     */ Cpu::op_alu_a_r,
        /* 0xAF XOR A        */ Cpu::op_alu_a_r,
        /* 0xB0 OR B         */ Cpu::op_alu_a_r,
        /* 0xB1 OR C         */ Cpu::op_alu_a_r,
        /* 0xB2 OR D         */ Cpu::op_alu_a_r,
        /* 0xB3 OR E         */ Cpu::op_alu_a_r,
        /* 0xB4 OR H         */ Cpu::op_alu_a_r,
        /* 0xB5 OR L         */ Cpu::op_alu_a_r,
        /* 0xB6 OR (HL)      */ Cpu::op_alu_a_r,
        /* 0xB7 OR A         */ Cpu::op_alu_a_r,
        /* 0xB8 CP B         */ Cpu::op_alu_a_r,
        /* 0xB9 CP C         */ Cpu::op_alu_a_r,
        /* 0xBA CP D         */ Cpu::op_alu_a_r,
        /* 0xBB CP E         */ Cpu::op_alu_a_r,
        /* 0xBC CP H         */ Cpu::op_alu_a_r,
        /* 0xBD CP L         */ Cpu::op_alu_a_r,
        /* 0xBE CP (HL)      */ Cpu::op_alu_a_r,
        /* 0xBF CP A         */ Cpu::op_alu_a_r,
        /* 0xC0 RET NZ       */ Cpu::op_ret_cc,
        /* 0xC1 POP BC       */ Cpu::op_pop_rr,
        /* 0xC2 JP NZ,a16    */ Cpu::op_jp_cc,
        /* 0xC3 JP a16       */ Cpu::op_jp_a16,
        /* 0xC4 CALL NZ,a16  */ Cpu::op_call_cc,
        /* 0xC5 PUSH BC      */ Cpu::op_push_rr,
        /* 0xC6 ADD A,d8     */ Cpu::op_alu_a_d8,
        /* 0xC7 RST 00H      */ Cpu::op_rst,
        /* 0xC8 RET Z        */ Cpu::op_ret_cc,
        /* 0xC9 RET          */ Cpu::op_ret,
        /* 0xCA JP Z,a16     */ Cpu::op_jp_cc,
        /* 0xCB prefix       */ Cpu::op_prefix,
        /* 0xCC CALL Z,a16   */ Cpu::op_call_cc,
        /* 0xCD CALL a16     */ Cpu::op_call_a16,
        /* 0xCE ADC A,d8     */ Cpu::op_alu_a_d8,
        /* 0xCF RST 08H      */ Cpu::op_rst,
        /* 0xD0 RET NC       */ Cpu::op_ret_cc,
        /* 0xD1 POP DE       */ Cpu::op_pop_rr,
        /* 0xD2 JP NC,a16    */ Cpu::op_jp_cc,
        /* 0xD3 (undefined)  */ Cpu::op_illegal,
        /* 0xD4 CALL NC,a16  */ Cpu::op_call_cc,
        /* 0xD5 PUSH DE      */ Cpu::op_push_rr,
        /* 0xD6 SUB d8       */ Cpu::op_alu_a_d8,
        /* 0xD7 RST 10H      */ Cpu::op_rst,
        /* 0xD8 RET C        */ Cpu::op_ret_cc,
        /* 0xD9 RETI         */ Cpu::op_reti,
        /* 0xDA JP C,a16     */ Cpu::op_jp_cc,
        /* 0xDB (undefined)  */ Cpu::op_illegal,
        /* 0xDC CALL C,a16   */ Cpu::op_call_cc,
        /* 0xDD (undefined)  */ Cpu::op_illegal,
        /* 0xDE SBC A,d8     */ Cpu::op_alu_a_d8,
        /* 0xDF RST 18H      */ Cpu::op_rst,
        /* 0xE0 LDH (a8),A   */ Cpu::op_ldh_a8,
        /* 0xE1 POP HL       */ Cpu::op_pop_rr,
        /* 0xE2 LDH (C),A    */ Cpu::op_ldh_c,
        /* 0xE3 (undefined)  */ Cpu::op_illegal,
        /* 0xE4 (undefined)  */ Cpu::op_illegal,
        /* 0xE5 PUSH HL      */ Cpu::op_push_rr,
        /* 0xE6 AND d8       */ Cpu::op_alu_a_d8,
        /* 0xE7 RST 20H      */ Cpu::op_rst,
        /* 0xE8 ADD SP,r8    */ Cpu::op_add_sp_r8,
        /* 0xE9 JP HL        */ Cpu::op_jp_hl,
        /* 0xEA LD (a16),A   */ Cpu::op_ld_a16_a,
        /* 0xEB (undefined)  */ Cpu::op_illegal,
        /* 0xEC (undefined)  */ Cpu::op_illegal,
        /* 0xED (undefined)  */ Cpu::op_illegal,
        /* 0xEE XOR d8       */ Cpu::op_alu_a_d8,
        /* 0xEF RST 28H      */ Cpu::op_rst,
        /* 0xF0 LDH A,(a8)   */ Cpu::op_ldh_a8,
        /* 0xF1 POP AF       */ Cpu::op_pop_rr,
        /* 0xF2 LDH A,(C)    */ Cpu::op_ldh_c,
        /* 0xF3 DI           */ Cpu::op_di,
        /* 0xF4 (undefined)  */ Cpu::op_illegal,
        /* 0xF5 PUSH AF      */ Cpu::op_push_rr,
        /* 0xF6 OR d8        */ Cpu::op_alu_a_d8,
        /* 0xF7 RST 30H      */ Cpu::op_rst,
        /* 0xF8 LD HL,SP+r8  */ Cpu::op_ld_hl_sp_r8,
        /* 0xF9 LD SP,HL     */ Cpu::op_ld_sp_hl,
        /* 0xFA LD A,(a16)   */ Cpu::op_ld_a16_a,
        /* 0xFB EI           */ Cpu::op_ei,
        /* 0xFC (undefined)  */ Cpu::op_illegal,
        /* 0xFD (undefined)  */ Cpu::op_illegal,
        /* 0xFE CP d8        */ Cpu::op_alu_a_d8,
        /* 0xFF RST 38H      */ Cpu::op_rst,
    ];

    /// Secondary table for 0xCB-prefixed opcodes. Each row of eight covers
    /// one operation over the operand order B,C,D,E,H,L,(HL),A; the handlers
    /// decode the operand (and bit number) from the opcode byte.
    pub(crate) const PREFIXED: [OpHandler<B>; 256] = [
        // 0x00..=0x07: RLC r
        Cpu::op_rlc, Cpu::op_rlc, Cpu::op_rlc, Cpu::op_rlc,
        Cpu::op_rlc, Cpu::op_rlc, Cpu::op_rlc, Cpu::op_rlc,
        // 0x08..=0x0F: RRC r
        Cpu::op_rrc, Cpu::op_rrc, Cpu::op_rrc, Cpu::op_rrc,
        Cpu::op_rrc, Cpu::op_rrc, Cpu::op_rrc, Cpu::op_rrc,
        // 0x10..=0x17: RL r
        Cpu::op_rl, Cpu::op_rl, Cpu::op_rl, Cpu::op_rl,
        Cpu::op_rl, Cpu::op_rl, Cpu::op_rl, Cpu::op_rl,
        // 0x18..=0x1F: RR r
        Cpu::op_rr, Cpu::op_rr, Cpu::op_rr, Cpu::op_rr,
        Cpu::op_rr, Cpu::op_rr, Cpu::op_rr, Cpu::op_rr,
        // 0x20..=0x27: SLA r
        Cpu::op_sla, Cpu::op_sla, Cpu::op_sla, Cpu::op_sla,
        Cpu::op_sla, Cpu::op_sla, Cpu::op_sla, Cpu::op_sla,
        // 0x28..=0x2F: SRA r
        Cpu::op_sra, Cpu::op_sra, Cpu::op_sra, Cpu::op_sra,
        Cpu::op_sra, Cpu::op_sra, Cpu::op_sra, Cpu::op_sra,
        // 0x30..=0x37: SWAP r
        Cpu::op_swap, Cpu::op_swap, Cpu::op_swap, Cpu::op_swap,
        Cpu::op_swap, Cpu::op_swap, Cpu::op_swap, Cpu::op_swap,
        // 0x38..=0x3F: SRL r
        Cpu::op_srl, Cpu::op_srl, Cpu::op_srl, Cpu::op_srl,
        Cpu::op_srl, Cpu::op_srl, Cpu::op_srl, Cpu::op_srl,
        // 0x40..=0x7F: BIT b,r
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        Cpu::op_bit, Cpu::op_bit, Cpu::op_bit, Cpu::op_bit,
        // 0x80..=0xBF: RES b,r
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        Cpu::op_res, Cpu::op_res, Cpu::op_res, Cpu::op_res,
        // 0xC0..=0xFF: SET b,r
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
        Cpu::op_set, Cpu::op_set, Cpu::op_set, Cpu::op_set,
    ];
}
