//! Table-driven CRC-8 and CRC-16 checksums.
//!
//! This crate computes cyclic redundancy checks from a parameter set
//! (polynomial, initial value, reflection, final XOR) at two widths, and exposes
//! them through the incremental [`Checksum`] contract so generic byte-stream
//! consumers can drive them.
//!
//! # Building Blocks
//!
//! | Type | Role |
//! |------|------|
//! | [`Params<W>`] | One CRC variant (`W = u8` or `u16`) |
//! | [`Table<W>`] | The 256-entry lookup table derived from a [`Params`] |
//! | [`Crc<W>`] | A parameter set bundled with its table; `const`-constructible |
//! | [`Digest<'_, W>`](Digest) | One in-progress computation borrowing a [`Crc`] |
//! | [`catalog`] | Published CRC-8 and CRC-16 parameter sets |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum16, Crc, catalog};
//!
//! static MODBUS: Crc<u16> = Crc::<u16>::new(&catalog::CRC16_MODBUS);
//!
//! // One-shot
//! assert_eq!(MODBUS.checksum(b"123456789"), 0x4B37);
//!
//! // Streaming
//! let mut digest = MODBUS.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.sum16(), 0x4B37);
//! ```
//!
//! Parameters that only arrive at runtime go through [`CrcParams`]:
//!
//! ```rust
//! use checksum::{Crc, CrcParams, Params, catalog};
//!
//! let raw: CrcParams = catalog::CRC8_WCDMA.into();
//! let params = Params::<u8>::try_from(raw).expect("8-bit parameters");
//! assert_eq!(Crc::<u8>::new(&params).checksum(b"123456789"), 0x25);
//!
//! assert!(Params::<u16>::try_from(raw).is_err());
//! ```
//!
//! # Backends
//!
//! Every digest folds bytes with the lookup table unless `CRCHASH_FORCE`
//! selects the bitwise [`reference`] kernel; see [`config`].
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible and never allocates. Disable the `std`
//! feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod catalog;
pub mod config;
mod engine;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod params;
pub mod reference;
pub(crate) mod table;
mod width;

#[cfg(test)]
mod proptests;

pub use config::{CrcConfig, CrcForce};
pub use engine::{CHECK_INPUT, Crc, Digest};
pub use error::{CheckMismatch, ParamsError};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
pub use params::{CrcParams, Params};
pub use table::Table;
// Re-export traits for convenience
pub use traits::{Checksum, Checksum8, Checksum16};
pub use width::Width;
