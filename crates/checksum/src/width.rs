//! Checksum widths.
//!
//! The engine is written once over [`Width`]; register arithmetic happens in a
//! `u32` and is narrowed back with [`Width::truncate`]. Only `u8` (CRC-8) and
//! `u16` (CRC-16) implement it.

use core::fmt::Debug;

mod private {
  pub trait Sealed {}
}

/// An unsigned integer type that can hold one CRC register.
///
/// This trait is sealed.
pub trait Width: Copy + Eq + Default + Debug + Send + Sync + 'static + private::Sealed {
  /// Checksum width in bits.
  const BITS: u32;

  /// Checksum width in bytes.
  const BYTES: usize;

  /// All `BITS` low bits set.
  const MASK: u32;

  /// Big-endian serialization of one value.
  type Bytes: Copy + Eq + Debug + AsRef<[u8]>;

  /// Widen to the `u32` working register.
  fn widen(self) -> u32;

  /// Narrow a `u32` register, dropping bits above `BITS`.
  fn truncate(value: u32) -> Self;

  /// Big-endian bytes, most significant first.
  fn to_be_bytes(self) -> Self::Bytes;
}

define_width!(u8, 8);
define_width!(u16, 16);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constants() {
    assert_eq!(<u8 as Width>::BITS, 8);
    assert_eq!(<u8 as Width>::BYTES, 1);
    assert_eq!(<u8 as Width>::MASK, 0xFF);
    assert_eq!(<u16 as Width>::BITS, 16);
    assert_eq!(<u16 as Width>::BYTES, 2);
    assert_eq!(<u16 as Width>::MASK, 0xFFFF);
  }

  #[test]
  fn truncate_drops_high_bits() {
    assert_eq!(<u8 as Width>::truncate(0x1_2345), 0x45);
    assert_eq!(<u16 as Width>::truncate(0x1_2345), 0x2345);
  }

  #[test]
  fn big_endian_bytes() {
    assert_eq!(Width::to_be_bytes(0x31C3u16), [0x31, 0xC3]);
    // The low byte keeps all eight bits.
    assert_eq!(Width::to_be_bytes(0xABCDu16), [0xAB, 0xCD]);
    assert_eq!(Width::to_be_bytes(0xF4u8), [0xF4]);
  }
}
