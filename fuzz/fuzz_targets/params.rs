//! Fuzz target for runtime parameter validation.
//!
//! Any `CrcParams` either converts to a typed parameter set whose values
//! round-trip, or is rejected with an error. It never panics.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc, CrcParams, Params, ParamsError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  initial: u64,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u64,
  check: u64,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let raw = CrcParams {
    width: input.width,
    polynomial: input.polynomial,
    initial: input.initial,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
    xor_out: input.xor_out,
    check: input.check,
    name: "fuzz",
  };

  match raw.polynomial_reflected() {
    Ok(reflected) => assert!(matches!(raw.width, 8 | 16) && reflected >> raw.width == 0),
    Err(err) => assert_eq!(err, ParamsError::UnsupportedWidth { width: raw.width }),
  }

  match Params::<u8>::try_from(raw) {
    Ok(params) => {
      assert_eq!(CrcParams::from(params), raw);
      let _ = Crc::<u8>::new(&params).checksum(&input.data);
    }
    Err(ParamsError::WidthMismatch { .. }) => assert_ne!(raw.width, 8),
    Err(_) => assert_eq!(raw.width, 8),
  }

  match Params::<u16>::try_from(raw) {
    Ok(params) => {
      assert_eq!(CrcParams::from(params), raw);
      let _ = Crc::<u16>::new(&params).checksum(&input.data);
    }
    Err(ParamsError::WidthMismatch { .. }) => assert_ne!(raw.width, 16),
    Err(_) => assert_eq!(raw.width, 16),
  }
});
