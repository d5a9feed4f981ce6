//! Differential fuzzing against the `crc` crate.
//!
//! Builds a parameter set from the input, so the whole space of 8- and 16-bit
//! polynomials, initial values and reflection modes gets exercised, not just
//! the catalogue.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc, Params};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  poly: u16,
  init: u16,
  xorout: u16,
  refin: bool,
  refout: bool,
  wide: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  if input.wide {
    test_crc16_differential(&input);
  } else {
    test_crc8_differential(&input);
  }
});

fn test_crc16_differential(input: &Input) {
  let params = Params::<u16> {
    poly: input.poly,
    init: input.init,
    refin: input.refin,
    refout: input.refout,
    xorout: input.xorout,
    check: 0,
    name: "CRC-16/FUZZ",
  };
  let ours = Crc::<u16>::new(&params).checksum(&input.data);

  let algorithm: &'static crc::Algorithm<u16> = Box::leak(Box::new(crc::Algorithm {
    width: 16,
    poly: params.poly,
    init: params.init,
    refin: params.refin,
    refout: params.refout,
    xorout: params.xorout,
    check: 0,
    residue: 0,
  }));
  let reference = crc::Crc::<u16>::new(algorithm).checksum(&input.data);

  assert_eq!(
    ours,
    reference,
    "CRC-16 differential mismatch: ours={ours:#06x}, reference={reference:#06x}, params={params:?}, len={}",
    input.data.len()
  );
}

fn test_crc8_differential(input: &Input) {
  let params = Params::<u8> {
    poly: input.poly as u8,
    init: input.init as u8,
    refin: input.refin,
    refout: input.refout,
    xorout: input.xorout as u8,
    check: 0,
    name: "CRC-8/FUZZ",
  };
  let ours = Crc::<u8>::new(&params).checksum(&input.data);

  let algorithm: &'static crc::Algorithm<u8> = Box::leak(Box::new(crc::Algorithm {
    width: 8,
    poly: params.poly,
    init: params.init,
    refin: params.refin,
    refout: params.refout,
    xorout: params.xorout,
    check: 0,
    residue: 0,
  }));
  let reference = crc::Crc::<u8>::new(algorithm).checksum(&input.data);

  assert_eq!(
    ours,
    reference,
    "CRC-8 differential mismatch: ours={ours:#04x}, reference={reference:#04x}, params={params:?}, len={}",
    input.data.len()
  );
}
