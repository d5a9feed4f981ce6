use checksum::{Crc, CrcForce, CrcParams, Params, ParamsError, catalog, reference};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn crc16_reflected_bitwise(poly_reflected: u16, init: u16, xor_out: u16, data: &[u8]) -> u16 {
  let mut crc = init.reverse_bits();
  for &b in data {
    crc ^= u16::from(b);
    for _ in 0..8 {
      let mask = 0u16.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & mask);
    }
  }
  crc ^ xor_out
}

fn crc_normal_bitwise_u16(poly: u16, init: u16, xor_out: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  for &b in data {
    crc ^= u16::from(b) << 8;
    for _ in 0..8 {
      if (crc & 0x8000) != 0 {
        crc = (crc << 1) ^ poly;
      } else {
        crc <<= 1;
      }
    }
  }
  crc ^ xor_out
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

#[test]
fn crc16_modbus_invariants() {
  let crc = Crc::<u16>::new(&catalog::CRC16_MODBUS);

  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = crc.checksum(&data);
      let reference = crc16_reflected_bitwise(0xA001, 0xFFFF, 0x0000, &data);
      assert_eq!(oneshot, reference, "modbus reference mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = crc.digest();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "modbus incremental mismatch at len={len} split={split}");

        let mut r = crc.resume(crc.checksum(a));
        r.update(b);
        assert_eq!(r.finalize(), oneshot, "modbus resume mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn crc16_genibus_invariants() {
  let crc = Crc::<u16>::new(&catalog::CRC16_GENIBUS);

  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = crc.checksum(&data);
      let reference = crc_normal_bitwise_u16(0x1021, 0xFFFF, 0xFFFF, &data);
      assert_eq!(oneshot, reference, "genibus reference mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = crc.digest();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "genibus incremental mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn every_variant_matches_bitwise_reference() {
  for &len in &[0usize, 1, 9, 64, 1000] {
    let data = gen_bytes(len, 0x5d58_39a7_3d87_1ceb ^ len as u64);
    for p in catalog::CRC8_ALL {
      let crc = Crc::<u8>::new(p);
      assert_eq!(crc.checksum(&data), reference::checksum(p, &data), "{} len={len}", p.name);
      let mut forced = crc.digest().with_force(CrcForce::Reference);
      forced.update(&data);
      assert_eq!(forced.finalize(), crc.checksum(&data), "{} len={len}", p.name);
    }
    for p in catalog::CRC16_ALL {
      let crc = Crc::<u16>::new(p);
      assert_eq!(crc.checksum(&data), reference::checksum(p, &data), "{} len={len}", p.name);
    }
  }
}

#[test]
fn reset_is_idempotent() {
  for p in catalog::CRC8_ALL {
    let crc = Crc::<u8>::new(p);
    let fresh = crc.digest().finalize();
    let mut digest = crc.digest();
    digest.update(b"some bytes");
    digest.reset();
    assert_eq!(digest.finalize(), fresh, "{}", p.name);
    digest.reset();
    assert_eq!(digest.finalize(), fresh, "{}", p.name);
  }
}

#[test]
fn distinct_variants_disagree() {
  // Same polynomial, different init/xorout: the outputs must differ.
  let xmodem = Crc::<u16>::new(&catalog::CRC16_XMODEM);
  let ccitt = Crc::<u16>::new(&catalog::CRC16_CCITT_FALSE);
  let genibus = Crc::<u16>::new(&catalog::CRC16_GENIBUS);
  let data = gen_bytes(128, 7);
  assert_ne!(xmodem.checksum(&data), ccitt.checksum(&data));
  assert_eq!(ccitt.checksum(&data) ^ 0xFFFF, genibus.checksum(&data));
}

#[test]
fn runtime_params_build_a_working_crc() {
  let raw = CrcParams {
    width: 8,
    polynomial: 0x9B,
    initial: 0xFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
    check: 0xDA,
    name: "CRC-8/CDMA2000",
  };
  let params = Params::<u8>::try_from(raw).unwrap();
  assert_eq!(params, catalog::CRC8_CDMA2000);
  assert_eq!(Crc::<u8>::new(&params).verify(), Ok(()));

  let wide = CrcParams { width: 32, ..raw };
  assert_eq!(
    Params::<u8>::try_from(wide),
    Err(ParamsError::WidthMismatch { expected: 8, found: 32 })
  );

  let overflowing = CrcParams {
    initial: 0x1FF,
    ..raw
  };
  assert!(matches!(
    Params::<u8>::try_from(overflowing),
    Err(ParamsError::ValueOutOfRange { field: "initial", .. })
  ));
}

#[test]
fn catalog_lookup_is_case_insensitive() {
  let Some(catalog::Variant::Crc16(params)) = catalog::find("crc-16/modbus") else {
    panic!("CRC-16/MODBUS should be catalogued");
  };
  assert_eq!(*params, catalog::CRC16_MODBUS);
  assert!(matches!(catalog::find(" CRC-8/MAXIM "), Some(catalog::Variant::Crc8(_))));
  assert!(catalog::find("CRC-32").is_none());
}
