//! 32-bit parametric CRC models.
//!
//! # Quick Start
//!
//! ```
//! use parametric_crc::crc32;
//!
//! const PKZIP: crc32::Crc = crc32::Crc::table_based(crc32::PKZIP);
//! assert_eq!(PKZIP.calculate(b"123456789"), 0xCBF4_3926);
//! ```

// SAFETY: All indexing uses u8-derived indices into 16/256-entry tables or
// bounded loop counters over the input slice.
#![allow(clippy::indexing_slicing)]

crc_width_impl!(u32, 32, crate::reflect::reflect_32);

// ─────────────────────────────────────────────────────────────────────────────
// Catalog (CRC RevEng parameters)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/XFER.
pub const XFER: Params = Params::new(0x0000_00AF, 0x0000_0000, 0x0000_0000, false);
/// CRC-32/JAMCRC. The ISO-HDLC register without the final inversion.
pub const JAMCRC: Params = Params::new(0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, true);
/// CRC-32/ISO-HDLC (alias: CRC-32, CRC-32/ADCCP, CRC-32/V-42, CRC-32/XZ,
/// PKZIP).
///
/// The most widely deployed CRC-32: Ethernet, gzip, PNG, zip, SATA.
pub const ISO_HDLC: Params = Params::new(0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true);
/// CRC-32/CKSUM (alias: CRC-32/POSIX). The POSIX `cksum` utility.
pub const CKSUM: Params = Params::new(0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF, false);
/// CRC-32/MPEG-2.
pub const MPEG2: Params = Params::new(0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, false);
/// CRC-32/BZIP2 (alias: CRC-32/AAL5, CRC-32/DECT-B, B-CRC-32).
pub const BZIP2: Params = Params::new(0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false);
/// CRC-32/ISCSI (alias: CRC-32/BASE91-C, CRC-32/CASTAGNOLI,
/// CRC-32/INTERLAKEN, CRC-32C).
///
/// The Castagnoli polynomial; iSCSI, SCTP, Btrfs, ext4.
pub const ISCSI: Params = Params::new(0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true);
/// CRC-32/MEF.
pub const MEF: Params = Params::new(0x741B_8CD7, 0xFFFF_FFFF, 0x0000_0000, true);
/// CRC-32/CD-ROM-EDC.
pub const CD_ROM_EDC: Params = Params::new(0x8001_801B, 0x0000_0000, 0x0000_0000, true);
/// CRC-32/AIXM (alias: CRC-32Q).
pub const AIXM: Params = Params::new(0x8141_41AB, 0x0000_0000, 0x0000_0000, false);
/// CRC-32/BASE91-D (alias: CRC-32D).
pub const BASE91_D: Params = Params::new(0xA833_982B, 0xFFFF_FFFF, 0xFFFF_FFFF, true);
/// CRC-32/AUTOSAR.
pub const AUTOSAR: Params = Params::new(0xF4AC_FB13, 0xFFFF_FFFF, 0xFFFF_FFFF, true);

/// The plain "CRC-32" of the catalog; synonym for [`ISO_HDLC`].
pub const CRC32: Params = ISO_HDLC;
/// Synonym for [`ISO_HDLC`].
pub const PKZIP: Params = ISO_HDLC;
/// Synonym for [`ISO_HDLC`].
pub const V42: Params = ISO_HDLC;
/// Synonym for [`ISO_HDLC`].
pub const XZ: Params = ISO_HDLC;
/// Synonym for [`CKSUM`].
pub const POSIX: Params = CKSUM;
/// Synonym for [`ISCSI`].
pub const CASTAGNOLI: Params = ISCSI;
/// Synonym for [`ISCSI`].
pub const CRC32C: Params = ISCSI;
/// Synonym for [`BASE91_D`].
pub const CRC32D: Params = BASE91_D;
/// Synonym for [`AIXM`].
pub const CRC32Q: Params = AIXM;

// Check values per the RevEng catalog, verified at compile time.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(Crc::table_based(ISO_HDLC).calculate(CHECK_INPUT) == 0xCBF4_3926);
  assert!(Crc::table_based(BZIP2).calculate(CHECK_INPUT) == 0xFC89_1918);
  assert!(Crc::small_table_based(ISCSI).calculate(CHECK_INPUT) == 0xE306_9283);
  assert!(ISO_HDLC.residue() == 0xDEBB_20E3);
  assert!(BZIP2.residue() == 0xC704_DD7B);
};
