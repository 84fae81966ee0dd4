use std::fmt;

/// An absolute location in the 16-bit address space.
///
/// Addresses are built per memory access from one of the supported addressing
/// forms and discarded immediately after use:
///
/// - an immediate word or a 16-bit register value ([`Address::new`]),
/// - a register pair value, which is already a `u16` ([`Address::new`]),
/// - a byte register relative to the I/O/high-memory page
///   ([`Address::high_page`], resolving to `0xFF00 + offset`).
///
/// The type is bounded to `0x0000..=0xFFFF` by construction, so a [`crate::Bus`]
/// implementation never sees an out-of-range location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(u16);

impl Address {
    /// Base of the I/O/high-memory page used by the LDH addressing form.
    pub const IO_PAGE: u16 = 0xFF00;

    #[inline]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Resolve an 8-bit offset against the I/O page.
    ///
    /// `0xFF00 + offset` cannot overflow 16 bits for any byte value.
    #[inline]
    pub const fn high_page(offset: u8) -> Self {
        Self(Self::IO_PAGE + offset as u16)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: u16) -> Self {
        Self(self.0.wrapping_add(rhs))
    }
}

impl From<u16> for Address {
    #[inline]
    fn from(addr: u16) -> Self {
        Self(addr)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
