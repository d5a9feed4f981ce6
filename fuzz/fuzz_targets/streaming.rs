//! Fuzz target for the streaming CRC API.
//!
//! Tests that arbitrary sequences of update calls, resets and kernel switches
//! produce the one-shot result for every catalogued variant.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc, CrcForce, Digest, Width, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Catalog index, reduced modulo the catalog size
  variant: u8,
  /// Switch to the bitwise kernel after this many chunks
  switch_after: u8,
}

fuzz_target!(|input: Input| {
  let index = usize::from(input.variant);

  let p16 = catalog::CRC16_ALL[index % catalog::CRC16_ALL.len()];
  let crc16 = Crc::<u16>::new(p16);
  let expected = crc16.checksum(&input.data);
  test_streaming(crc16.digest(), &input, expected, p16.name);

  let p8 = catalog::CRC8_ALL[index % catalog::CRC8_ALL.len()];
  let crc8 = Crc::<u8>::new(p8);
  let expected = crc8.checksum(&input.data);
  test_streaming(crc8.digest(), &input, expected, p8.name);
});

fn test_streaming<W: Width>(mut digest: Digest<'_, W>, input: &Input, expected: W, name: &str) {
  // Garbage before a reset must not leak into the result.
  digest.update(&input.data);
  digest.reset();

  let data = &input.data;
  let chunk_sizes = &input.chunk_sizes;
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    if chunk_idx == usize::from(input.switch_after) {
      digest = digest.with_force(CrcForce::Reference);
    }

    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    digest.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(digest.finalize(), expected, "{name} streaming mismatch");
}
