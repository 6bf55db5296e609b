//! 16-bit parametric CRC models.
//!
//! # Quick Start
//!
//! ```
//! use parametric_crc::crc16;
//!
//! const KERMIT: crc16::Crc = crc16::Crc::table_based(crc16::KERMIT);
//!
//! assert_eq!(KERMIT.calculate(b"123456789"), 0x2189);
//!
//! let mut digest = KERMIT.digest();
//! digest.update(b"12345");
//! digest.update_byte(b'6');
//! digest.update(b"789");
//! assert_eq!(digest.finalize(), 0x2189);
//! ```

// SAFETY: All indexing uses u8-derived indices into 16/256-entry tables or
// bounded loop counters over the input slice.
#![allow(clippy::indexing_slicing)]

crc_width_impl!(u16, 16, crate::reflect::reflect_16);

// ─────────────────────────────────────────────────────────────────────────────
// Catalog (CRC RevEng parameters)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/DECT-X (alias: X-CRC-16).
pub const DECT_X: Params = Params::new(0x0589, 0x0000, 0x0000, false);
/// CRC-16/DECT-R (alias: R-CRC-16).
pub const DECT_R: Params = Params::new(0x0589, 0x0000, 0x0001, false);
/// CRC-16/NRSC-5.
pub const NRSC_5: Params = Params::new(0x080B, 0xFFFF, 0x0000, true);
/// CRC-16/DNP.
pub const DNP: Params = Params::new(0x3D65, 0x0000, 0xFFFF, true);
/// CRC-16/EN-13757. Wireless M-Bus.
pub const EN_13757: Params = Params::new(0x3D65, 0x0000, 0xFFFF, false);
/// CRC-16/KERMIT (alias: CRC-16/CCITT, CRC-16/CCITT-TRUE, CRC-16/BLUETOOTH,
/// CRC-16/V-41-LSB, CRC-CCITT).
///
/// The reflected CCITT polynomial as used by the Kermit protocol; the name
/// "CCITT" is routinely (and wrongly) attached to [`IBM_3740`] as well.
pub const KERMIT: Params = Params::new(0x1021, 0x0000, 0x0000, true);
/// CRC-16/TMS37157.
pub const TMS37157: Params = Params::new(0x1021, 0x89EC, 0x0000, true);
/// CRC-16/RIELLO.
pub const RIELLO: Params = Params::new(0x1021, 0xB2AA, 0x0000, true);
/// CRC-16/ISO-IEC-14443-3-A (alias: CRC-A). Proximity card framing.
pub const ISO_IEC_14443_3_A: Params = Params::new(0x1021, 0xC6C6, 0x0000, true);
/// CRC-16/MCRF4XX.
pub const MCRF4XX: Params = Params::new(0x1021, 0xFFFF, 0x0000, true);
/// CRC-16/IBM-SDLC (alias: CRC-16/ISO-HDLC, CRC-16/ISO-IEC-14443-3-B,
/// CRC-16/X-25, CRC-B, X-25).
pub const IBM_SDLC: Params = Params::new(0x1021, 0xFFFF, 0xFFFF, true);
/// CRC-16/XMODEM (alias: CRC-16/ACORN, CRC-16/LTE, CRC-16/V-41-MSB, ZMODEM).
pub const XMODEM: Params = Params::new(0x1021, 0x0000, 0x0000, false);
/// CRC-16/GSM.
pub const GSM: Params = Params::new(0x1021, 0x0000, 0xFFFF, false);
/// CRC-16/SPI-FUJITSU (alias: CRC-16/AUG-CCITT).
pub const SPI_FUJITSU: Params = Params::new(0x1021, 0x1D0F, 0x0000, false);
/// CRC-16/IBM-3740 (alias: CRC-16/AUTOSAR, CRC-16/CCITT-FALSE).
pub const IBM_3740: Params = Params::new(0x1021, 0xFFFF, 0x0000, false);
/// CRC-16/GENIBUS (alias: CRC-16/DARC, CRC-16/EPC, CRC-16/EPC-C1G2,
/// CRC-16/I-CODE).
pub const GENIBUS: Params = Params::new(0x1021, 0xFFFF, 0xFFFF, false);
/// CRC-16/PROFIBUS (alias: CRC-16/IEC-61158-2).
pub const PROFIBUS: Params = Params::new(0x1DCF, 0xFFFF, 0xFFFF, false);
/// CRC-16/OPENSAFETY-A.
pub const OPENSAFETY_A: Params = Params::new(0x5935, 0x0000, 0x0000, false);
/// CRC-16/M17.
pub const M17: Params = Params::new(0x5935, 0xFFFF, 0x0000, false);
/// CRC-16/LJ1200.
pub const LJ1200: Params = Params::new(0x6F63, 0x0000, 0x0000, false);
/// CRC-16/OPENSAFETY-B.
pub const OPENSAFETY_B: Params = Params::new(0x755B, 0x0000, 0x0000, false);
/// CRC-16/ARC (alias: ARC, CRC-16, CRC-16/LHA, CRC-IBM).
pub const ARC: Params = Params::new(0x8005, 0x0000, 0x0000, true);
/// CRC-16/MAXIM-DOW (alias: CRC-16/MAXIM).
pub const MAXIM_DOW: Params = Params::new(0x8005, 0x0000, 0xFFFF, true);
/// CRC-16/MODBUS.
pub const MODBUS: Params = Params::new(0x8005, 0xFFFF, 0x0000, true);
/// CRC-16/USB.
pub const USB: Params = Params::new(0x8005, 0xFFFF, 0xFFFF, true);
/// CRC-16/UMTS (alias: CRC-16/BUYPASS, CRC-16/VERIFONE).
pub const UMTS: Params = Params::new(0x8005, 0x0000, 0x0000, false);
/// CRC-16/DDS-110.
pub const DDS_110: Params = Params::new(0x8005, 0x800D, 0x0000, false);
/// CRC-16/CMS.
pub const CMS: Params = Params::new(0x8005, 0xFFFF, 0x0000, false);
/// CRC-16/T10-DIF. SCSI data integrity field.
pub const T10_DIF: Params = Params::new(0x8BB7, 0x0000, 0x0000, false);
/// CRC-16/TELEDISK.
pub const TELEDISK: Params = Params::new(0xA097, 0x0000, 0x0000, false);
/// CRC-16/CDMA2000.
pub const CDMA2000: Params = Params::new(0xC867, 0xFFFF, 0x0000, false);

/// The plain "CRC-16" of the catalog; synonym for [`ARC`].
pub const CRC16: Params = ARC;
/// Synonym for [`KERMIT`].
pub const BLUETOOTH: Params = KERMIT;
/// Synonym for [`KERMIT`].
pub const CCITT: Params = KERMIT;
/// Synonym for [`KERMIT`].
pub const V41_LSB: Params = KERMIT;
/// Synonym for [`XMODEM`].
pub const V41_MSB: Params = XMODEM;
/// Synonym for [`XMODEM`].
pub const ZMODEM: Params = XMODEM;
/// Synonym for [`SPI_FUJITSU`].
pub const AUG_CCITT: Params = SPI_FUJITSU;
/// Synonym for [`IBM_3740`]; commonly misidentified as "CCITT".
pub const CCITT_FALSE: Params = IBM_3740;
/// Synonym for [`IBM_3740`].
pub const AUTOSAR: Params = IBM_3740;
/// Synonym for [`GENIBUS`].
pub const DARC: Params = GENIBUS;
/// Synonym for [`ISO_IEC_14443_3_A`].
pub const CRC_A: Params = ISO_IEC_14443_3_A;
/// Synonym for [`IBM_SDLC`].
pub const CRC_B: Params = IBM_SDLC;
/// Synonym for [`IBM_SDLC`].
pub const X25: Params = IBM_SDLC;

// Check values per the RevEng catalog, verified at compile time.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(Crc::table_based(KERMIT).calculate(CHECK_INPUT) == 0x2189);
  assert!(Crc::small_table_based(XMODEM).calculate(CHECK_INPUT) == 0x31C3);
  assert!(Crc::tableless(IBM_SDLC).calculate(CHECK_INPUT) == 0x906E);
  assert!(IBM_SDLC.residue() == 0xF0B8);
  assert!(GSM.residue() == 0x1D0F);
};
