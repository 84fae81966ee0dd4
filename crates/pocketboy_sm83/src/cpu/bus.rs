use thiserror::Error;

use super::addr::Address;

/// Access fault surfaced by a [`Bus`] implementation.
///
/// The core treats a fault as fatal for the current step and propagates it to
/// the caller unchanged; it never masks one or retries the access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("bus fault at {addr}")]
pub struct BusFault {
    pub addr: Address,
}

impl BusFault {
    pub fn at(addr: Address) -> Self {
        Self { addr }
    }
}

/// Abstraction over the memory-mapped address space (memory and IO).
///
/// The surrounding emulator owns the backing store; the core only performs
/// synchronous byte reads and writes through this trait. Both operations are
/// defined over the full `0x0000..=0xFFFF` range, but an implementation may
/// report a fault for regions it does not back.
pub trait Bus {
    fn read8(&mut self, addr: Address) -> Result<u8, BusFault>;
    fn write8(&mut self, addr: Address, value: u8) -> Result<(), BusFault>;
}
