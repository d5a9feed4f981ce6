//! Incremental checksum traits for crchash.
//!
//! This crate provides the capability contract that every crchash checksum
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming write-then-finalize checksum | CRC-8, CRC-16 |
//! | [`Checksum8`] | Raw 8-bit result (`sum8`) | CRC-8/MAXIM |
//! | [`Checksum16`] | Raw 16-bit result (`sum16`) | CRC-16/XMODEM |
//!
//! The width-specific traits are blanket-implemented for every [`Checksum`]
//! whose output has the matching width.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod checksum;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, Checksum8, Checksum16};
