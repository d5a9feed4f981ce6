//! Table-driven CRC-8 and CRC-16 checksums.
//!
//! `crchash` computes cyclic redundancy checks for the published CRC-8 and
//! CRC-16 parameter sets (and any custom set of the same widths) behind an
//! incremental write-then-finalize interface. Zero dependencies, `no_std`
//! compatible, allocation-free.
//!
//! # Quick Start
//!
//! ```
//! use crchash::{Crc, catalog};
//!
//! static MODBUS: Crc<u16> = Crc::<u16>::new(&catalog::CRC16_MODBUS);
//!
//! // One-shot computation
//! let crc = MODBUS.checksum(b"123456789");
//! assert_eq!(crc, 0x4B37);
//!
//! // Streaming computation
//! let mut digest = MODBUS.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), crc);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` adapters and the `CRCHASH_FORCE` override |
//! | `alloc` | Yes | `Checksum::sum` into a `Vec<u8>` (implied by `std`) |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! crchash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use checksum::{
  // Errors
  CheckMismatch,
  // Traits
  Checksum,
  Checksum8,
  Checksum16,
  // Engine
  Crc,
  // Configuration
  CrcConfig,
  CrcForce,
  CrcParams,
  Digest,
  Params,
  ParamsError,
  Table,
  Width,
  catalog,
  config,
  reference,
};
#[cfg(feature = "std")]
pub use checksum::{ChecksumReader, ChecksumWriter};
