//! Checksum a file with any catalogued variant.
//!
//! Run with: `cargo run --example file_checksum -p checksum -- <path> [variant]`
//!
//! `variant` defaults to `CRC-16/XMODEM`; names are case-insensitive.

use std::{fs::File, io, process::ExitCode};

use checksum::{Crc, catalog};

fn main() -> ExitCode {
  let mut args = std::env::args().skip(1);
  let Some(path) = args.next() else {
    eprintln!("usage: file_checksum <path> [variant]");
    return ExitCode::FAILURE;
  };
  let name = args.next().unwrap_or_else(|| "CRC-16/XMODEM".to_owned());

  let Some(variant) = catalog::find(&name) else {
    eprintln!("unknown CRC variant: {name}");
    eprintln!("known variants:");
    for v in catalog::all() {
      eprintln!("  {}", v.name());
    }
    return ExitCode::FAILURE;
  };

  match run(&path, variant) {
    Ok(line) => {
      println!("{line}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("{path}: {err}");
      ExitCode::FAILURE
    }
  }
}

fn run(path: &str, variant: catalog::Variant) -> io::Result<String> {
  let mut file = File::open(path)?;
  let line = match variant {
    catalog::Variant::Crc8(params) => {
      let crc = Crc::<u8>::new(params);
      let mut digest = crc.digest();
      let len = io::copy(&mut file, &mut digest)?;
      eprintln!("{}: {len} bytes via {}", params.name, digest.backend_name());
      format!("{:02x}  {path}", digest.finalize())
    }
    catalog::Variant::Crc16(params) => {
      let crc = Crc::<u16>::new(params);
      let mut digest = crc.digest();
      let len = io::copy(&mut file, &mut digest)?;
      eprintln!("{}: {len} bytes via {}", params.name, digest.backend_name());
      format!("{:04x}  {path}", digest.finalize())
    }
  };
  Ok(line)
}
