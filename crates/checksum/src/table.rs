//! Const-fn CRC lookup table generation.
//!
//! One 256-entry table per parameter set. The kernel [`entry`] is written once
//! for every width; the typed `Table::<W>::new` constructors are generated per
//! width by `define_width!`.
//!
//! # Reflection Convention
//!
//! | `refin` | Table holds | Consumed by |
//! |---------|-------------|-------------|
//! | `false` | MSB-first remainders of `i << (width - 8)` | `(crc << 8) ^ T[(crc >> (width - 8)) ^ b]` |
//! | `true` | LSB-first remainders of `i` (reflected polynomial) | `(crc >> 8) ^ T[(crc ^ b) & 0xFF]` |
//!
//! The reflected table is the bit-reversed image of the normal one, so the
//! register of a reflected CRC holds the bit-reversed remainder.

use core::fmt;

use crate::{Width, params::reflect_bits};

/// Low `width` bits set.
#[inline(always)]
#[must_use]
pub(crate) const fn mask(width: u32) -> u32 {
  if width >= 32 { u32::MAX } else { (1u32 << width) - 1 }
}

/// Generate a single lookup table entry for a CRC of `width` bits.
///
/// `poly` is given in normal (MSB-first) form. The result fits in `width` bits.
#[must_use]
pub(crate) const fn entry(width: u32, poly: u32, refin: bool, index: u8) -> u32 {
  let mask = mask(width);
  let mut r;
  let mut bit = 0;

  if refin {
    let poly = reflect_bits(poly as u64, width as u8) as u32;
    r = index as u32;
    while bit < 8 {
      r = if r & 1 != 0 { (r >> 1) ^ poly } else { r >> 1 };
      bit += 1;
    }
  } else {
    let top = 1u32 << (width - 1);
    r = (index as u32) << (width - 8);
    while bit < 8 {
      r = if r & top != 0 { (r << 1) ^ poly } else { r << 1 } & mask;
      bit += 1;
    }
  }

  r & mask
}

/// A 256-entry CRC lookup table.
///
/// Immutable once built; share it by reference between any number of digests.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Table<W: Width> {
  entries: [W; 256],
}

impl<W: Width> Table<W> {
  #[inline]
  pub(crate) const fn from_entries(entries: [W; 256]) -> Self {
    Self { entries }
  }

  /// All 256 entries, indexed by byte value.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[W; 256] {
    &self.entries
  }

  /// Entry for `index`, widened to the working register.
  #[inline(always)]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // u8 index into a 256-entry array
  pub(crate) fn lookup(&self, index: u8) -> u32 {
    self.entries[usize::from(index)].widen()
  }
}

impl<W: Width> fmt::Debug for Table<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table")
      .field("width", &W::BITS)
      .field("len", &self.entries.len())
      .finish_non_exhaustive()
  }
}
