//! Named CRC-8 and CRC-16 parameter sets.
//!
//! Values follow the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//! Names are the historic catalogue names (`CRC-16/X-25`, `CRC-8/MAXIM`, ...).
//!
//! # Example
//!
//! ```
//! use checksum::{Crc, catalog};
//!
//! const XMODEM: Crc<u16> = Crc::<u16>::new(&catalog::CRC16_XMODEM);
//! assert_eq!(XMODEM.checksum(b"123456789"), 0x31C3);
//!
//! let variant = catalog::find("crc-16/modbus").unwrap();
//! assert_eq!(variant.name(), "CRC-16/MODBUS");
//! ```

use crate::Params;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-8 (SMBus) - poly 0x07.
pub const CRC8: Params<u8> = Params {
  poly: 0x07,
  init: 0x00,
  refin: false,
  refout: false,
  xorout: 0x00,
  check: 0xF4,
  name: "CRC-8",
};

/// CRC-8/CDMA2000.
pub const CRC8_CDMA2000: Params<u8> = Params {
  poly: 0x9B,
  init: 0xFF,
  refin: false,
  refout: false,
  xorout: 0x00,
  check: 0xDA,
  name: "CRC-8/CDMA2000",
};

/// CRC-8/DARC - Data Radio Channel.
pub const CRC8_DARC: Params<u8> = Params {
  poly: 0x39,
  init: 0x00,
  refin: true,
  refout: true,
  xorout: 0x00,
  check: 0x15,
  name: "CRC-8/DARC",
};

/// CRC-8/DVB-S2.
pub const CRC8_DVB_S2: Params<u8> = Params {
  poly: 0xD5,
  init: 0x00,
  refin: false,
  refout: false,
  xorout: 0x00,
  check: 0xBC,
  name: "CRC-8/DVB-S2",
};

/// CRC-8/EBU (AES) - AES3 digital audio.
pub const CRC8_EBU: Params<u8> = Params {
  poly: 0x1D,
  init: 0xFF,
  refin: true,
  refout: true,
  xorout: 0x00,
  check: 0x97,
  name: "CRC-8/EBU",
};

/// CRC-8/I-CODE.
pub const CRC8_I_CODE: Params<u8> = Params {
  poly: 0x1D,
  init: 0xFD,
  refin: false,
  refout: false,
  xorout: 0x00,
  check: 0x7E,
  name: "CRC-8/I-CODE",
};

/// CRC-8/ITU (I.432.1) - ATM header error control.
pub const CRC8_ITU: Params<u8> = Params {
  poly: 0x07,
  init: 0x00,
  refin: false,
  refout: false,
  xorout: 0x55,
  check: 0xA1,
  name: "CRC-8/ITU",
};

/// CRC-8/MAXIM (Dallas/Maxim 1-Wire).
pub const CRC8_MAXIM: Params<u8> = Params {
  poly: 0x31,
  init: 0x00,
  refin: true,
  refout: true,
  xorout: 0x00,
  check: 0xA1,
  name: "CRC-8/MAXIM",
};

/// CRC-8/ROHC - Robust Header Compression.
pub const CRC8_ROHC: Params<u8> = Params {
  poly: 0x07,
  init: 0xFF,
  refin: true,
  refout: true,
  xorout: 0x00,
  check: 0xD0,
  name: "CRC-8/ROHC",
};

/// CRC-8/WCDMA.
pub const CRC8_WCDMA: Params<u8> = Params {
  poly: 0x9B,
  init: 0x00,
  refin: true,
  refout: true,
  xorout: 0x00,
  check: 0x25,
  name: "CRC-8/WCDMA",
};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/ARC (aka CRC-16/IBM, CRC-16/LHA).
pub const CRC16_ARC: Params<u16> = Params {
  poly: 0x8005,
  init: 0x0000,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0xBB3D,
  name: "CRC-16/ARC",
};

/// CRC-16/AUG-CCITT (aka CRC-16/SPI-FUJITSU).
pub const CRC16_AUG_CCITT: Params<u16> = Params {
  poly: 0x1021,
  init: 0x1D0F,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0xE5CC,
  name: "CRC-16/AUG-CCITT",
};

/// CRC-16/BUYPASS (aka CRC-16/UMTS, CRC-16/VERIFONE).
pub const CRC16_BUYPASS: Params<u16> = Params {
  poly: 0x8005,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0xFEE8,
  name: "CRC-16/BUYPASS",
};

/// CRC-16/CCITT-FALSE (aka CRC-16/IBM-3740, CRC-16/AUTOSAR).
pub const CRC16_CCITT_FALSE: Params<u16> = Params {
  poly: 0x1021,
  init: 0xFFFF,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0x29B1,
  name: "CRC-16/CCITT-FALSE",
};

/// CRC-16/CDMA2000.
pub const CRC16_CDMA2000: Params<u16> = Params {
  poly: 0xC867,
  init: 0xFFFF,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0x4C06,
  name: "CRC-16/CDMA2000",
};

/// CRC-16/DDS-110.
pub const CRC16_DDS_110: Params<u16> = Params {
  poly: 0x8005,
  init: 0x800D,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0x9ECF,
  name: "CRC-16/DDS-110",
};

/// CRC-16/DECT-R - DECT R-CRC.
pub const CRC16_DECT_R: Params<u16> = Params {
  poly: 0x0589,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0x0001,
  check: 0x007E,
  name: "CRC-16/DECT-R",
};

/// CRC-16/DECT-X - DECT X-CRC.
pub const CRC16_DECT_X: Params<u16> = Params {
  poly: 0x0589,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0x007F,
  name: "CRC-16/DECT-X",
};

/// CRC-16/DNP - Distributed Network Protocol.
pub const CRC16_DNP: Params<u16> = Params {
  poly: 0x3D65,
  init: 0x0000,
  refin: true,
  refout: true,
  xorout: 0xFFFF,
  check: 0xEA82,
  name: "CRC-16/DNP",
};

/// CRC-16/EN-13757 - wireless M-Bus.
pub const CRC16_EN_13757: Params<u16> = Params {
  poly: 0x3D65,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0xFFFF,
  check: 0xC2B7,
  name: "CRC-16/EN-13757",
};

/// CRC-16/GENIBUS (aka CRC-16/EPC, CRC-16/DARC).
pub const CRC16_GENIBUS: Params<u16> = Params {
  poly: 0x1021,
  init: 0xFFFF,
  refin: false,
  refout: false,
  xorout: 0xFFFF,
  check: 0xD64E,
  name: "CRC-16/GENIBUS",
};

/// CRC-16/MAXIM (aka CRC-16/MAXIM-DOW).
pub const CRC16_MAXIM: Params<u16> = Params {
  poly: 0x8005,
  init: 0x0000,
  refin: true,
  refout: true,
  xorout: 0xFFFF,
  check: 0x44C2,
  name: "CRC-16/MAXIM",
};

/// CRC-16/MCRF4XX.
pub const CRC16_MCRF4XX: Params<u16> = Params {
  poly: 0x1021,
  init: 0xFFFF,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0x6F91,
  name: "CRC-16/MCRF4XX",
};

/// CRC-16/RIELLO.
pub const CRC16_RIELLO: Params<u16> = Params {
  poly: 0x1021,
  init: 0xB2AA,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0x63D0,
  name: "CRC-16/RIELLO",
};

/// CRC-16/T10-DIF - SCSI data integrity field.
pub const CRC16_T10_DIF: Params<u16> = Params {
  poly: 0x8BB7,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0xD0DB,
  name: "CRC-16/T10-DIF",
};

/// CRC-16/TELEDISK.
pub const CRC16_TELEDISK: Params<u16> = Params {
  poly: 0xA097,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0x0FB3,
  name: "CRC-16/TELEDISK",
};

/// CRC-16/TMS37157.
pub const CRC16_TMS37157: Params<u16> = Params {
  poly: 0x1021,
  init: 0x89EC,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0x26B1,
  name: "CRC-16/TMS37157",
};

/// CRC-16/USB.
pub const CRC16_USB: Params<u16> = Params {
  poly: 0x8005,
  init: 0xFFFF,
  refin: true,
  refout: true,
  xorout: 0xFFFF,
  check: 0xB4C8,
  name: "CRC-16/USB",
};

/// CRC-A (ISO/IEC 14443-3 type A).
pub const CRC16_CRC_A: Params<u16> = Params {
  poly: 0x1021,
  init: 0xC6C6,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0xBF05,
  name: "CRC-A",
};

/// CRC-16/KERMIT (aka CRC-16/CCITT-TRUE).
pub const CRC16_KERMIT: Params<u16> = Params {
  poly: 0x1021,
  init: 0x0000,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0x2189,
  name: "CRC-16/KERMIT",
};

/// CRC-16/MODBUS.
pub const CRC16_MODBUS: Params<u16> = Params {
  poly: 0x8005,
  init: 0xFFFF,
  refin: true,
  refout: true,
  xorout: 0x0000,
  check: 0x4B37,
  name: "CRC-16/MODBUS",
};

/// CRC-16/X-25 (aka CRC-16/IBM-SDLC) - HDLC, X.25.
pub const CRC16_X_25: Params<u16> = Params {
  poly: 0x1021,
  init: 0xFFFF,
  refin: true,
  refout: true,
  xorout: 0xFFFF,
  check: 0x906E,
  name: "CRC-16/X-25",
};

/// CRC-16/XMODEM (aka CRC-16/ACORN, CRC-16/LTE).
pub const CRC16_XMODEM: Params<u16> = Params {
  poly: 0x1021,
  init: 0x0000,
  refin: false,
  refout: false,
  xorout: 0x0000,
  check: 0x31C3,
  name: "CRC-16/XMODEM",
};

/// Every CRC-8 parameter set in this catalog.
pub const CRC8_ALL: &[&Params<u8>] = &[
  &CRC8,
  &CRC8_CDMA2000,
  &CRC8_DARC,
  &CRC8_DVB_S2,
  &CRC8_EBU,
  &CRC8_I_CODE,
  &CRC8_ITU,
  &CRC8_MAXIM,
  &CRC8_ROHC,
  &CRC8_WCDMA,
];

/// Every CRC-16 parameter set in this catalog.
pub const CRC16_ALL: &[&Params<u16>] = &[
  &CRC16_ARC,
  &CRC16_AUG_CCITT,
  &CRC16_BUYPASS,
  &CRC16_CCITT_FALSE,
  &CRC16_CDMA2000,
  &CRC16_DDS_110,
  &CRC16_DECT_R,
  &CRC16_DECT_X,
  &CRC16_DNP,
  &CRC16_EN_13757,
  &CRC16_GENIBUS,
  &CRC16_MAXIM,
  &CRC16_MCRF4XX,
  &CRC16_RIELLO,
  &CRC16_T10_DIF,
  &CRC16_TELEDISK,
  &CRC16_TMS37157,
  &CRC16_USB,
  &CRC16_CRC_A,
  &CRC16_KERMIT,
  &CRC16_MODBUS,
  &CRC16_X_25,
  &CRC16_XMODEM,
];

/// A catalog entry of either width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
  /// An 8-bit parameter set.
  Crc8(&'static Params<u8>),
  /// A 16-bit parameter set.
  Crc16(&'static Params<u16>),
}

impl Variant {
  /// Catalogue name.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Crc8(p) => p.name,
      Self::Crc16(p) => p.name,
    }
  }

  /// Width in bits.
  #[must_use]
  pub const fn width(&self) -> u32 {
    match self {
      Self::Crc8(_) => 8,
      Self::Crc16(_) => 16,
    }
  }
}

/// Look up a parameter set by catalogue name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<Variant> {
  let name = name.trim();
  if let Some(p) = CRC8_ALL.iter().copied().find(|p| p.name.eq_ignore_ascii_case(name)) {
    return Some(Variant::Crc8(p));
  }
  CRC16_ALL
    .iter()
    .copied()
    .find(|p| p.name.eq_ignore_ascii_case(name))
    .map(Variant::Crc16)
}

/// Every catalog entry, CRC-8 first.
pub fn all() -> impl Iterator<Item = Variant> {
  CRC8_ALL
    .iter()
    .copied()
    .map(Variant::Crc8)
    .chain(CRC16_ALL.iter().copied().map(Variant::Crc16))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn find_is_case_insensitive() {
    assert_eq!(find("CRC-16/XMODEM"), Some(Variant::Crc16(&CRC16_XMODEM)));
    assert_eq!(find("crc-16/xmodem"), Some(Variant::Crc16(&CRC16_XMODEM)));
    assert_eq!(find("  crc-8/maxim "), Some(Variant::Crc8(&CRC8_MAXIM)));
    assert_eq!(find("crc-a"), Some(Variant::Crc16(&CRC16_CRC_A)));
  }

  #[test]
  fn find_unknown() {
    assert_eq!(find("CRC-32"), None);
    assert_eq!(find(""), None);
  }

  #[test]
  fn names_are_unique() {
    for (i, a) in all().enumerate() {
      for b in all().skip(i + 1) {
        assert!(!a.name().eq_ignore_ascii_case(b.name()), "duplicate name {}", a.name());
      }
    }
  }

  #[test]
  fn every_entry_is_findable() {
    for variant in all() {
      assert_eq!(find(variant.name()), Some(variant));
    }
    assert_eq!(all().count(), CRC8_ALL.len() + CRC16_ALL.len());
  }

  #[test]
  fn widths() {
    assert!(all().take(CRC8_ALL.len()).all(|v| v.width() == 8));
    assert!(all().skip(CRC8_ALL.len()).all(|v| v.width() == 16));
  }
}
