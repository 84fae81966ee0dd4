//! The SM83 register file: eight byte registers, SP, PC and the four
//! condition flags packed into the high nibble of F.

/// One of the four condition flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// Zero — bit 7 of F.
    Z,
    /// Subtract — bit 6. Records whether the last ALU op was a subtraction,
    /// consumed only by DAA.
    N,
    /// Half carry — bit 5. Carry/borrow across bit 3.
    H,
    /// Carry — bit 4. Carry/borrow out of bit 7.
    C,
}

impl Flag {
    #[inline]
    const fn mask(self) -> u8 {
        match self {
            Flag::Z => 0x80,
            Flag::N => 0x40,
            Flag::H => 0x20,
            Flag::C => 0x10,
        }
    }
}

/// Bits of F that actually exist; the low nibble always reads as zero.
const FLAG_BITS: u8 = 0xF0;

/// Generates the getter/setter for a 16-bit pair view over two byte fields.
macro_rules! pair_view {
    ($get:ident / $set:ident over $hi:ident, $lo:ident) => {
        #[inline]
        pub fn $get(&self) -> u16 {
            (self.$hi as u16) << 8 | self.$lo as u16
        }

        #[inline]
        pub fn $set(&mut self, word: u16) {
            self.$hi = (word >> 8) as u8;
            self.$lo = word as u8;
        }
    };
}

/// The architectural register state.
///
/// Byte registers are stored individually; the AF/BC/DE/HL pairs are views
/// computed on access, never separate storage, so a write through a pair name
/// is immediately visible through the byte names and vice versa.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    pair_view!(bc / set_bc over b, c);
    pair_view!(de / set_de over d, e);
    pair_view!(hl / set_hl over h, l);

    // AF is not macro-generated: both directions have to mask out the
    // nonexistent low nibble of F.

    #[inline]
    pub fn af(&self) -> u16 {
        (self.a as u16) << 8 | (self.f & FLAG_BITS) as u16
    }

    #[inline]
    pub fn set_af(&mut self, word: u16) {
        self.a = (word >> 8) as u8;
        self.f = word as u8 & FLAG_BITS;
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag.mask() != 0
    }

    /// Writes one flag without disturbing the other three. Passing `false`
    /// clears the bit, so callers state every flag outcome explicitly instead
    /// of relying on a prior reset.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        if on {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.f = 0;
    }
}
