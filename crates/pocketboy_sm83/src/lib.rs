//! SM83 (Game Boy LR35902) CPU instruction-execution core.
//!
//! This crate models the fetch-decode-execute engine of the Sharp SM83: the
//! register file and flag semantics, the two 256-entry opcode dispatch tables
//! (primary and `0xCB`-prefixed), the full instruction semantics with their
//! exact flag effects, and the Running/Halted/Stopped execution state machine.
//!
//! Everything outside the CPU proper — the memory map, the interrupt
//! controller, cartridges, video and audio — lives behind the [`Bus`] trait.
//! The owning emulator drives the core one instruction at a time via
//! [`Cpu::step`].

pub mod cpu;

pub use cpu::addr::Address;
pub use cpu::bus::{Bus, BusFault};
pub use cpu::regs::{Flag, Registers};
pub use cpu::{Cpu, ExecError, Mode, StepOutcome};
