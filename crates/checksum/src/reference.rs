//! Bitwise reference implementations.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! These implementations process one bit at a time, making them:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: no lookup tables
//!
//! The table-driven engine must produce identical results.
//!
//! # CRC Model
//!
//! These implementations follow the Rocksoft model (CRC RevEng catalog):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (8, 16) |
//! | `poly`    | Generator polynomial, normal form |
//! | `init`    | Initial register value |
//! | `refin`   | Reflect input bytes |
//! | `refout`  | Reflect output before final XOR |
//! | `xorout`  | Final XOR value |
//!
//! # Performance
//!
//! These are intentionally slow (~8 operations per bit). Use for:
//! - Correctness verification
//! - Test oracles
//! - Forcing the bitwise kernel with `CRCHASH_FORCE=reference`

use crate::{Params, Width, params::reflect_bits, table::mask};

/// Fold `data` into a raw register, one bit at a time.
///
/// Uses the same register convention as the table-driven engine: the register
/// of a reflected CRC holds the bit-reversed remainder. The two can therefore
/// be interleaved on one digest.
#[must_use]
pub fn update<W: Width>(params: &Params<W>, mut crc: u32, data: &[u8]) -> u32 {
  if params.refin {
    let poly = params.polynomial_reflected().widen();
    for &byte in data {
      crc ^= u32::from(byte);
      for _ in 0..8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      }
    }
  } else {
    let poly = params.poly.widen();
    let top = 1u32 << (W::BITS - 1);
    for &byte in data {
      crc ^= u32::from(byte) << (W::BITS - 8);
      for _ in 0..8 {
        crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 } & W::MASK;
      }
    }
  }
  crc
}

/// Compute the CRC of `data` straight from the Rocksoft model.
///
/// Always shifts MSB-first; reflection is applied to each input byte and to the
/// final register explicitly instead of being folded into the register layout.
/// `width` must be 8 or 16; [`checksum`] is the public entry point.
#[must_use]
#[allow(clippy::indexing_slicing)] // i < data.len()
pub(crate) const fn checksum_u32(
  width: u32,
  poly: u32,
  init: u32,
  refin: bool,
  refout: bool,
  xorout: u32,
  data: &[u8],
) -> u32 {
  let mask = mask(width);
  let top = 1u32 << (width - 1);
  let mut crc = init & mask;

  let mut i = 0usize;
  while i < data.len() {
    let byte = if refin { data[i].reverse_bits() } else { data[i] };
    crc ^= (byte as u32) << (width - 8);
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 } & mask;
      bit += 1;
    }
    i += 1;
  }

  if refout {
    crc = reflect_bits(crc as u64, width as u8) as u32;
  }
  (crc ^ xorout) & mask
}

/// Compute the CRC of `data` for `params` straight from the Rocksoft model.
#[must_use]
pub fn checksum<W: Width>(params: &Params<W>, data: &[u8]) -> W {
  W::truncate(checksum_u32(
    W::BITS,
    params.poly.widen(),
    params.init.widen(),
    params.refin,
    params.refout,
    params.xorout.widen(),
    data,
  ))
}
