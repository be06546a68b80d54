//! Small freestanding-target support routines that don't belong to any
//! one subsystem: a stack-trace walker for the panic handler and the
//! `memset` intrinsic the freestanding target needs.

pub mod memory;
pub mod stack;
