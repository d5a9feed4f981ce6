//! Internal macros for width instantiation.
//!
//! Trait methods cannot be called from a `const fn`, so the `const`
//! constructors of [`Table`](crate::Table) and [`Crc`](crate::Crc) are stamped
//! out once per width. Everything they do is delegated to the width-agnostic
//! kernel in [`crate::table`].

/// Implement [`Width`](crate::Width) for an unsigned integer type and generate
/// its `const` table and CRC constructors.
///
/// This macro creates:
/// - `impl Width for $ty`
/// - `Table::<$ty>::new` (`const fn`)
/// - `Crc::<$ty>::new` (`const fn`)
///
/// # Arguments
///
/// - `$ty`: The register type (e.g. `u16`)
/// - `$bits`: Its width in bits (e.g. `16`)
macro_rules! define_width {
  ($ty:ty, $bits:literal) => {
    impl private::Sealed for $ty {}

    impl $crate::Width for $ty {
      const BITS: u32 = $bits;
      const BYTES: usize = $bits / 8;
      const MASK: u32 = <$ty>::MAX as u32;

      type Bytes = [u8; $bits / 8];

      #[inline(always)]
      fn widen(self) -> u32 {
        u32::from(self)
      }

      #[inline(always)]
      fn truncate(value: u32) -> Self {
        value as $ty
      }

      #[inline(always)]
      fn to_be_bytes(self) -> Self::Bytes {
        <$ty>::to_be_bytes(self)
      }
    }

    impl $crate::Table<$ty> {
      /// Build the 256-entry lookup table for `params`.
      ///
      /// Usable in `const` context, so tables for fixed variants are computed
      /// at compile time.
      #[must_use]
      #[allow(clippy::indexing_slicing)] // i < 256
      pub const fn new(params: &$crate::Params<$ty>) -> Self {
        let mut entries = [0 as $ty; 256];
        let mut i = 0usize;
        while i < 256 {
          entries[i] = $crate::table::entry($bits, params.poly as u32, params.refin, i as u8) as $ty;
          i += 1;
        }
        Self::from_entries(entries)
      }
    }

    impl $crate::Crc<$ty> {
      /// Build the table for `params` and bundle the two together.
      ///
      /// ```
      /// use checksum::{Crc, catalog};
      ///
      #[doc = concat!("const CRC: Crc<", stringify!($ty), "> = Crc::<", stringify!($ty), ">::new(&catalog::CRC", stringify!($bits), "_MAXIM);")]
      /// assert!(CRC.verify().is_ok());
      /// ```
      #[must_use]
      pub const fn new(params: &$crate::Params<$ty>) -> Self {
        Self::from_parts(*params, $crate::Table::<$ty>::new(params))
      }
    }
  };
}
