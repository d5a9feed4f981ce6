//! Error types.
//!
//! The CRC engine itself cannot fail. Errors exist only where parameters enter
//! from outside ([`ParamsError`]) and for self-verification ([`CheckMismatch`]).

use core::fmt;

/// Parameters rejected while converting to a typed [`Params`](crate::Params).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamsError {
  /// The declared width does not match the target register type.
  WidthMismatch {
    /// Width of the target register type.
    expected: u32,
    /// Width declared by the parameters.
    found: u8,
  },
  /// The declared width is neither 8 nor 16.
  UnsupportedWidth {
    /// Width declared by the parameters.
    width: u8,
  },
  /// A value has bits set above the declared width.
  ValueOutOfRange {
    /// Parameter name (`polynomial`, `initial`, `xor_out` or `check`).
    field: &'static str,
    /// The offending value.
    value: u64,
    /// Declared width in bits.
    width: u32,
  },
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::WidthMismatch { expected, found } => {
        write!(f, "CRC width {found} does not match a {expected}-bit register")
      }
      Self::UnsupportedWidth { width } => write!(f, "CRC width {width} is not supported (expected 8 or 16)"),
      Self::ValueOutOfRange { field, value, width } => {
        write!(f, "{field} 0x{value:X} does not fit in {width} bits")
      }
    }
  }
}

impl core::error::Error for ParamsError {}

/// A parameter set failed its `"123456789"` check value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckMismatch {
  /// Catalogue name of the parameter set.
  pub name: &'static str,
  /// The documented check value.
  pub expected: u32,
  /// The value actually computed.
  pub actual: u32,
}

impl fmt::Display for CheckMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: check value mismatch (expected 0x{:X}, computed 0x{:X})",
      self.name, self.expected, self.actual
    )
  }
}

impl core::error::Error for CheckMismatch {}
