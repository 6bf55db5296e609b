//! 8-bit parametric CRC models.
//!
//! The 8-bit register is the degenerate width: the table-driven step needs
//! no shifts at all (`table[crc ^ b]` in both conventions), which the
//! strategy layer exploits.
//!
//! # Quick Start
//!
//! ```
//! use parametric_crc::crc8;
//!
//! const SMBUS: crc8::Crc = crc8::Crc::table_based(crc8::SMBUS);
//! assert_eq!(SMBUS.calculate(b"123456789"), 0xF4);
//! ```

// SAFETY: All indexing uses u8-derived indices into 16/256-entry tables or
// bounded loop counters over the input slice.
#![allow(clippy::indexing_slicing)]

crc_width_impl!(u8, 8, crate::reflect::reflect_8);

// ─────────────────────────────────────────────────────────────────────────────
// Catalog (CRC RevEng parameters)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-8/ROHC.
pub const ROHC: Params = Params::new(0x07, 0xFF, 0x00, true);
/// CRC-8/I-432-1 (alias: CRC-8/ITU). ATM HEC.
pub const I_432_1: Params = Params::new(0x07, 0x00, 0x55, false);
/// CRC-8/SMBUS (alias: CRC-8). The SMBus packet error code.
pub const SMBUS: Params = Params::new(0x07, 0x00, 0x00, false);
/// CRC-8/TECH-3250 (alias: CRC-8/AES, CRC-8/EBU).
pub const TECH_3250: Params = Params::new(0x1D, 0xFF, 0x00, true);
/// CRC-8/GSM-A.
pub const GSM_A: Params = Params::new(0x1D, 0x00, 0x00, false);
/// CRC-8/MIFARE-MAD.
pub const MIFARE_MAD: Params = Params::new(0x1D, 0xC7, 0x00, false);
/// CRC-8/I-CODE.
pub const I_CODE: Params = Params::new(0x1D, 0xFD, 0x00, false);
/// CRC-8/HITAG.
pub const HITAG: Params = Params::new(0x1D, 0xFF, 0x00, false);
/// CRC-8/SAE-J1850.
pub const SAE_J1850: Params = Params::new(0x1D, 0xFF, 0xFF, false);
/// CRC-8/OPENSAFETY.
pub const OPENSAFETY: Params = Params::new(0x2F, 0x00, 0x00, false);
/// CRC-8/AUTOSAR.
pub const AUTOSAR: Params = Params::new(0x2F, 0xFF, 0xFF, false);
/// CRC-8/MAXIM-DOW (alias: CRC-8/MAXIM, DOW-CRC). 1-Wire bus.
pub const MAXIM_DOW: Params = Params::new(0x31, 0x00, 0x00, true);
/// CRC-8/NRSC-5.
pub const NRSC_5: Params = Params::new(0x31, 0xFF, 0x00, false);
/// CRC-8/DARC.
pub const DARC: Params = Params::new(0x39, 0x00, 0x00, true);
/// CRC-8/GSM-B.
pub const GSM_B: Params = Params::new(0x49, 0x00, 0xFF, false);
/// CRC-8/WCDMA.
pub const WCDMA: Params = Params::new(0x9B, 0x00, 0x00, true);
/// CRC-8/LTE.
pub const LTE: Params = Params::new(0x9B, 0x00, 0x00, false);
/// CRC-8/CDMA2000.
pub const CDMA2000: Params = Params::new(0x9B, 0xFF, 0x00, false);
/// CRC-8/BLUETOOTH.
pub const BLUETOOTH: Params = Params::new(0xA7, 0x00, 0x00, true);
/// CRC-8/DVB-S2.
pub const DVB_S2: Params = Params::new(0xD5, 0x00, 0x00, false);

/// The plain "CRC-8" of the catalog; synonym for [`SMBUS`].
pub const CRC8: Params = SMBUS;
/// Synonym for [`MAXIM_DOW`].
pub const MAXIM: Params = MAXIM_DOW;
/// Synonym for [`I_432_1`].
pub const ITU: Params = I_432_1;

// Check values per the RevEng catalog, verified at compile time.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(Crc::table_based(SMBUS).calculate(CHECK_INPUT) == 0xF4);
  assert!(Crc::tableless(SAE_J1850).calculate(CHECK_INPUT) == 0x4B);
  assert!(Crc::small_table_based(ROHC).calculate(CHECK_INPUT) == 0xD0);
  assert!(SMBUS.residue() == 0x00);
  assert!(SAE_J1850.residue() == 0xC4);
};

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;

  #[test]
  fn test_vectors() {
    let cases: &[(Params, u8)] = &[
      (ROHC, 0xD0),
      (I_432_1, 0xA1),
      (SMBUS, 0xF4),
      (TECH_3250, 0x97),
      (MAXIM_DOW, 0xA1),
      (SAE_J1850, 0x4B),
      (BLUETOOTH, 0x26),
      (DVB_S2, 0xBC),
    ];
    for &(params, check) in cases {
      assert_eq!(Crc::table_based(params).calculate(b"123456789"), check);
    }
  }

  #[test]
  fn fast_table_matches_direct_entries() {
    // The fast constructor must reproduce the per-byte definition
    // entry[i] = register after absorbing byte i from zero.
    for &params in &[SMBUS, MAXIM_DOW] {
      let table = Table::new(&params);
      let poly = params.actual_poly();
      for i in 0..=u8::MAX {
        let direct = table_entry(poly, params.ref_reg, i, 0);
        assert_eq!(table.lookup(i), direct, "entry {i:#04x}");
      }
    }
  }

  #[test]
  fn small_table_matches_full_table() {
    for &params in &[SMBUS, ROHC, DARC] {
      let full = Table::new(&params);
      let small = SmallTable::new(&params);
      for i in 0..=u8::MAX {
        assert_eq!(small.lookup(i), full.lookup(i), "entry {i:#04x}");
      }
    }
  }

  #[test]
  fn shift_free_step_matches_kernel() {
    // Width 8 takes the `table[crc ^ b]` path; it must agree with the
    // bit-by-bit kernel byte for byte.
    let data = b"The quick brown fox jumps over the lazy dog";
    for &params in &[SMBUS, ROHC] {
      let tabled = Crc::table_based(params);
      let bitwise = Crc::tableless(params);
      let mut a = tabled.digest();
      let mut b = bitwise.digest();
      for &byte in data.iter() {
        a.update_byte(byte);
        b.update_byte(byte);
        assert_eq!(a.interim(), b.interim());
      }
    }
  }

  #[test]
  fn residue_constants() {
    assert_eq!(ROHC.residue(), 0x00);
    assert_eq!(I_432_1.residue(), 0xAC);
    assert_eq!(AUTOSAR.residue(), 0x42);
    assert_eq!(GSM_B.residue(), 0x53);
  }
}
