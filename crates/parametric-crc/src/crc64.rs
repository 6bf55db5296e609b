//! 64-bit parametric CRC models.
//!
//! # Quick Start
//!
//! ```
//! use parametric_crc::crc64;
//!
//! const XZ: crc64::Crc = crc64::Crc::table_based(crc64::XZ);
//! assert_eq!(XZ.calculate(b"123456789"), 0x995D_C9BB_DF19_39FA);
//! ```

// SAFETY: All indexing uses u8-derived indices into 16/256-entry tables or
// bounded loop counters over the input slice.
#![allow(clippy::indexing_slicing)]

crc_width_impl!(u64, 64, crate::reflect::reflect_64);

// ─────────────────────────────────────────────────────────────────────────────
// Catalog (CRC RevEng parameters)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64/GO-ISO. The Go standard library's ISO polynomial.
pub const GO_ISO: Params = Params::new(
  0x0000_0000_0000_001B,
  0xFFFF_FFFF_FFFF_FFFF,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
);
/// CRC-64/MS.
pub const MS: Params = Params::new(
  0x259C_84CB_A642_6349,
  0xFFFF_FFFF_FFFF_FFFF,
  0x0000_0000_0000_0000,
  true,
);
/// CRC-64/XZ (alias: CRC-64/GO-ECMA). XZ Utils, 7-Zip.
pub const XZ: Params = Params::new(
  0x42F0_E1EB_A9EA_3693,
  0xFFFF_FFFF_FFFF_FFFF,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
);
/// CRC-64/ECMA-182 (alias: CRC-64). The unreflected ECMA polynomial as
/// published in ECMA-182.
pub const ECMA_182: Params = Params::new(
  0x42F0_E1EB_A9EA_3693,
  0x0000_0000_0000_0000,
  0x0000_0000_0000_0000,
  false,
);
/// CRC-64/WE.
pub const WE: Params = Params::new(
  0x42F0_E1EB_A9EA_3693,
  0xFFFF_FFFF_FFFF_FFFF,
  0xFFFF_FFFF_FFFF_FFFF,
  false,
);
/// CRC-64/REDIS.
pub const REDIS: Params = Params::new(
  0xAD93_D235_94C9_35A9,
  0x0000_0000_0000_0000,
  0x0000_0000_0000_0000,
  true,
);

/// The plain "CRC-64" of the catalog; synonym for [`ECMA_182`].
pub const CRC64: Params = ECMA_182;
/// Synonym for [`XZ`].
pub const GO_ECMA: Params = XZ;

// Check values per the RevEng catalog, verified at compile time.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(Crc::table_based(XZ).calculate(CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);
  assert!(Crc::tableless(ECMA_182).calculate(CHECK_INPUT) == 0x6C40_DF5F_0B49_7347);
  assert!(XZ.residue() == 0x4995_8C9A_BD7D_353F);
};
