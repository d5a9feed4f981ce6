//! Basic checksum usage: one-shot, streaming, resume and runtime parameters.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Checksum, Crc, CrcParams, Params, catalog};

static XMODEM: Crc<u16> = Crc::<u16>::new(&catalog::CRC16_XMODEM);
static MAXIM: Crc<u8> = Crc::<u8>::new(&catalog::CRC8_MAXIM);

fn main() {
  println!("=== Checksum Basic Examples ===\n");
  eprintln!("backend: {}", XMODEM.backend_name());

  one_shot_examples();
  streaming_examples();
  resume_example();
  runtime_params_example();
}

/// One-shot computation: simplest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth
  let crc16 = XMODEM.checksum(data);
  println!("CRC-16/XMODEM:  0x{crc16:04X}");
  assert_eq!(crc16, 0x31C3);

  // CRC-16/MODBUS - Modbus RTU
  let modbus = Crc::<u16>::new(&catalog::CRC16_MODBUS).checksum(data);
  println!("CRC-16/MODBUS:  0x{modbus:04X}");
  assert_eq!(modbus, 0x4B37);

  // CRC-8/MAXIM - 1-Wire
  let crc8 = MAXIM.checksum(data);
  println!("CRC-8/MAXIM:    0x{crc8:02X}");
  assert_eq!(crc8, 0xA1);

  println!("\nEvery catalogued variant:");
  for variant in catalog::all() {
    let check = match variant {
      catalog::Variant::Crc8(p) => format!("0x{:02X}", Crc::<u8>::new(p).checksum(data)),
      catalog::Variant::Crc16(p) => format!("0x{:04X}", Crc::<u16>::new(p).checksum(data)),
    };
    println!("  {:<20} {check}", variant.name());
  }

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let mut digest = XMODEM.digest();
  digest.update(b"1234");
  digest.update(b"56789");
  let crc = digest.finalize();

  println!("Streaming CRC-16: 0x{crc:04X}");
  assert_eq!(crc, 0x31C3);

  // finalize() is non-consuming: can continue after
  digest.update(b"...");
  println!("Extended CRC-16:  0x{:04X}", digest.finalize());

  // Big-endian bytes for generic consumers
  let mut out = Vec::new();
  digest.sum(&mut out);
  println!("sum():            {out:02X?}");

  // reset() clears state for reuse
  digest.reset();
  digest.update(b"new data");
  println!("Reset CRC-16:     0x{:04X}", digest.finalize());

  println!();
}

/// Resume computation from a saved checksum.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved = MAXIM.checksum(part1);
  println!("Saved after part1:      0x{saved:02X}");

  let mut resumed = MAXIM.resume(saved);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume: 0x{final_crc:02X}");

  let mut full = MAXIM.digest();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");

  println!();
}

/// Parameters that arrive at runtime.
fn runtime_params_example() {
  println!("--- Runtime Parameters ---\n");

  let raw = CrcParams {
    width: 16,
    polynomial: 0x8BB7,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0xD0DB,
    name: "CRC-16/T10-DIF",
  };

  match Params::<u16>::try_from(raw) {
    Ok(params) => {
      let crc = Crc::<u16>::new(&params);
      match crc.verify() {
        Ok(()) => println!("{} verified", params.name),
        Err(err) => println!("{err}"),
      }
    }
    Err(err) => println!("rejected: {err}"),
  }

  if let Err(err) = Params::<u8>::try_from(raw) {
    println!("as CRC-8: {err}");
  }

  println!();
}
