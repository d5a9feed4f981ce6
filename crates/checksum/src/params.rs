//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC algorithms following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use crate::{Width, error::ParamsError};

/// One CRC variant, typed by its register width.
///
/// The register type `W` fixes the width (`u8` → CRC-8, `u16` → CRC-16), so
/// `poly`, `init`, `xorout` and `check` can never carry bits above the width.
///
/// # Parameters
///
/// - `poly`: The generator polynomial (without the implicit high bit), normal form
/// - `init`: Initial value for the CRC register, unreflected
/// - `refin`: If true, reflect each input byte before processing
/// - `refout`: If true, reflect the final CRC before XOR
/// - `xorout`: Value to XOR with the final CRC
/// - `check`: The CRC of the ASCII string `"123456789"`
/// - `name`: Catalogue name, for diagnostics only
///
/// # Reflection
///
/// "Reflected" means bit-reversed. A reflected CRC is processed LSB-first: the
/// register holds the bit-reversed remainder and the table is built from the
/// reflected polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params<W: Width> {
  /// Generator polynomial (without implicit high bit).
  pub poly: W,
  /// Initial value for the CRC register.
  pub init: W,
  /// Reflect input bytes before processing.
  pub refin: bool,
  /// Reflect final CRC before XOR.
  pub refout: bool,
  /// XOR value applied to final CRC.
  pub xorout: W,
  /// Expected CRC of `b"123456789"`.
  pub check: W,
  /// Catalogue name.
  pub name: &'static str,
}

impl<W: Width> Params<W> {
  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    W::BITS
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[inline]
  #[must_use]
  pub fn polynomial_reflected(&self) -> W {
    W::truncate(reflect_bits(u64::from(self.poly.widen()), W::BITS as u8) as u32)
  }
}

/// CRC parameters with a runtime width.
///
/// This is the shape parameters have when they come from configuration rather
/// than from code. Convert with [`Params::try_from`] to get a typed parameter
/// set; the conversion rejects values that do not fit the declared width.
///
/// ```
/// use checksum::{CrcParams, Params};
///
/// let raw = CrcParams {
///   width: 16,
///   polynomial: 0x1021,
///   initial: 0x0000,
///   reflect_in: false,
///   reflect_out: false,
///   xor_out: 0x0000,
///   check: 0x31C3,
///   name: "CRC-16/XMODEM",
/// };
/// let params = Params::<u16>::try_from(raw)?;
/// assert_eq!(params.poly, 0x1021);
/// assert!(Params::<u8>::try_from(raw).is_err());
/// # Ok::<(), checksum::ParamsError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits (8 or 16).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
  /// Expected CRC of `b"123456789"`.
  pub check: u64,
  /// Catalogue name.
  pub name: &'static str,
}

impl CrcParams {
  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError::UnsupportedWidth`] unless `width` is 8 or 16.
  pub const fn polynomial_reflected(&self) -> Result<u64, ParamsError> {
    match self.width {
      8 | 16 => Ok(reflect_bits(self.polynomial, self.width)),
      width => Err(ParamsError::UnsupportedWidth { width }),
    }
  }
}

impl<W: Width> From<Params<W>> for CrcParams {
  fn from(params: Params<W>) -> Self {
    Self {
      width: W::BITS as u8,
      polynomial: u64::from(params.poly.widen()),
      initial: u64::from(params.init.widen()),
      reflect_in: params.refin,
      reflect_out: params.refout,
      xor_out: u64::from(params.xorout.widen()),
      check: u64::from(params.check.widen()),
      name: params.name,
    }
  }
}

impl<W: Width> TryFrom<CrcParams> for Params<W> {
  type Error = ParamsError;

  fn try_from(raw: CrcParams) -> Result<Self, Self::Error> {
    if u32::from(raw.width) != W::BITS {
      return Err(ParamsError::WidthMismatch {
        expected: W::BITS,
        found: raw.width,
      });
    }

    let narrow = |field: &'static str, value: u64| -> Result<W, ParamsError> {
      if value > u64::from(W::MASK) {
        return Err(ParamsError::ValueOutOfRange {
          field,
          value,
          width: W::BITS,
        });
      }
      Ok(W::truncate(value as u32))
    };

    Ok(Self {
      poly: narrow("polynomial", raw.polynomial)?,
      init: narrow("initial", raw.initial)?,
      refin: raw.reflect_in,
      refout: raw.reflect_out,
      xorout: narrow("xor_out", raw.xor_out)?,
      check: narrow("check", raw.check)?,
      name: raw.name,
    })
  }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// Widths above 64 are treated as 64.
#[must_use]
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  let width = if width > 64 { 64 } else { width };
  let mut result = 0u64;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width.wrapping_sub(1).wrapping_sub(i));
    }
    i = i.wrapping_add(1);
  }
  result
}
