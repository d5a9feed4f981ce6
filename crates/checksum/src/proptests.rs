extern crate std;

use std::boxed::Box;

use proptest::prelude::*;

use crate::{Crc, CrcForce, Params, catalog, reference};

fn algorithm8(p: &Params<u8>) -> &'static ::crc::Algorithm<u8> {
  Box::leak(Box::new(::crc::Algorithm {
    width: 8,
    poly: p.poly,
    init: p.init,
    refin: p.refin,
    refout: p.refout,
    xorout: p.xorout,
    check: p.check,
    residue: 0,
  }))
}

fn algorithm16(p: &Params<u16>) -> &'static ::crc::Algorithm<u16> {
  Box::leak(Box::new(::crc::Algorithm {
    width: 16,
    poly: p.poly,
    init: p.init,
    refin: p.refin,
    refout: p.refout,
    xorout: p.xorout,
    check: p.check,
    residue: 0,
  }))
}

fn arb_params8() -> impl Strategy<Value = Params<u8>> {
  (any::<u8>(), any::<u8>(), any::<bool>(), any::<bool>(), any::<u8>()).prop_map(
    |(poly, init, refin, refout, xorout)| Params {
      poly: poly | 1,
      init,
      refin,
      refout,
      xorout,
      check: 0,
      name: "CRC-8/RANDOM",
    },
  )
}

fn arb_params16() -> impl Strategy<Value = Params<u16>> {
  (any::<u16>(), any::<u16>(), any::<bool>(), any::<bool>(), any::<u16>()).prop_map(
    |(poly, init, refin, refout, xorout)| Params {
      poly: poly | 1,
      init,
      refin,
      refout,
      xorout,
      check: 0,
      name: "CRC-16/RANDOM",
    },
  )
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-validation against the crc crate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn catalog_matches_crc_crate_named_algorithms() {
  let data = b"The quick brown fox jumps over the lazy dog";
  let pairs16: [(&Params<u16>, &'static ::crc::Algorithm<u16>); 7] = [
    (&catalog::CRC16_ARC, &::crc::CRC_16_ARC),
    (&catalog::CRC16_KERMIT, &::crc::CRC_16_KERMIT),
    (&catalog::CRC16_MODBUS, &::crc::CRC_16_MODBUS),
    (&catalog::CRC16_XMODEM, &::crc::CRC_16_XMODEM),
    (&catalog::CRC16_X_25, &::crc::CRC_16_IBM_SDLC),
    (&catalog::CRC16_USB, &::crc::CRC_16_USB),
    (&catalog::CRC16_GENIBUS, &::crc::CRC_16_GENIBUS),
  ];
  for (ours, theirs) in pairs16 {
    let expected = ::crc::Crc::<u16>::new(theirs).checksum(data);
    assert_eq!(Crc::<u16>::new(ours).checksum(data), expected, "{}", ours.name);
  }

  let pairs8: [(&Params<u8>, &'static ::crc::Algorithm<u8>); 4] = [
    (&catalog::CRC8, &::crc::CRC_8_SMBUS),
    (&catalog::CRC8_MAXIM, &::crc::CRC_8_MAXIM_DOW),
    (&catalog::CRC8_ROHC, &::crc::CRC_8_ROHC),
    (&catalog::CRC8_DVB_S2, &::crc::CRC_8_DVB_S2),
  ];
  for (ours, theirs) in pairs8 {
    let expected = ::crc::Crc::<u8>::new(theirs).checksum(data);
    assert_eq!(Crc::<u8>::new(ours).checksum(data), expected, "{}", ours.name);
  }
}

proptest! {
  #[test]
  fn catalog16_matches_crc_crate(
    index in 0..catalog::CRC16_ALL.len(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
  ) {
    let params = catalog::CRC16_ALL[index];
    let theirs = ::crc::Crc::<u16>::new(algorithm16(params));
    prop_assert_eq!(Crc::<u16>::new(params).checksum(&data), theirs.checksum(&data));
  }

  #[test]
  fn catalog8_matches_crc_crate(
    index in 0..catalog::CRC8_ALL.len(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
  ) {
    let params = catalog::CRC8_ALL[index];
    let theirs = ::crc::Crc::<u8>::new(algorithm8(params));
    prop_assert_eq!(Crc::<u8>::new(params).checksum(&data), theirs.checksum(&data));
  }

  #[test]
  fn random_params16_match_crc_crate(
    params in arb_params16(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let theirs = ::crc::Crc::<u16>::new(algorithm16(&params));
    prop_assert_eq!(Crc::<u16>::new(&params).checksum(&data), theirs.checksum(&data));
  }

  #[test]
  fn random_params8_match_crc_crate(
    params in arb_params8(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let theirs = ::crc::Crc::<u8>::new(algorithm8(&params));
    prop_assert_eq!(Crc::<u8>::new(&params).checksum(&data), theirs.checksum(&data));
  }

  #[test]
  fn streaming_matches_crc_crate(
    params in arb_params16(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk in 1usize..=257,
  ) {
    let ours_crc = Crc::<u16>::new(&params);
    let theirs_crc = ::crc::Crc::<u16>::new(algorithm16(&params));
    let mut ours = ours_crc.digest();
    let mut theirs = theirs_crc.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      theirs.update(part);
    }

    prop_assert_eq!(ours.finalize(), theirs.finalize());
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Table kernel vs bitwise reference
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn table_matches_reference16(
    params in arb_params16(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let crc = Crc::<u16>::new(&params);
    let mut table = crc.digest().with_force(CrcForce::Table);
    let mut bitwise = crc.digest().with_force(CrcForce::Reference);
    table.update(&data);
    bitwise.update(&data);
    prop_assert_eq!(table.finalize(), bitwise.finalize());
    prop_assert_eq!(table.finalize(), reference::checksum(&params, &data));
  }

  #[test]
  fn table_matches_reference8(
    params in arb_params8(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let crc = Crc::<u8>::new(&params);
    prop_assert_eq!(crc.checksum(&data), reference::checksum(&params, &data));
  }

  #[test]
  fn resume_matches_concatenation(
    params in arb_params16(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>(),
  ) {
    let crc = Crc::<u16>::new(&params);
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let mut resumed = crc.resume(crc.checksum(a));
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), crc.checksum(&data));
  }
}
