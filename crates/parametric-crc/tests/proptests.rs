//! Property tests over random models, inputs, and chunkings.
//!
//! These complement the deterministic catalog and invariant suites with
//! randomized coverage:
//!
//! 1. **Streaming equivalence**: any chunking through the streaming API
//!    equals the one-shot result.
//! 2. **Strategy equivalence**: tableless, table and small-table engines
//!    agree on random inputs.
//! 3. **Residue law**: appending the CRC to the dataword in transmission
//!    order leaves the model's residue constant in the register.

use parametric_crc::reflect::{reflect_16, reflect_32, reflect_64};
use parametric_crc::{crc16, crc32, crc64};
use proptest::prelude::*;

/// Catalog draw for randomized model selection.
const MODELS_16: &[crc16::Params] = &[
  crc16::KERMIT,
  crc16::XMODEM,
  crc16::IBM_SDLC,
  crc16::GSM,
  crc16::DNP,
  crc16::RIELLO,
  crc16::DECT_R,
  crc16::CDMA2000,
];

const MODELS_32: &[crc32::Params] = &[
  crc32::ISO_HDLC,
  crc32::BZIP2,
  crc32::CKSUM,
  crc32::JAMCRC,
  crc32::ISCSI,
  crc32::AIXM,
];

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn crc16_chunking_equivalence(
    params in proptest::sample::select(MODELS_16),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk_pattern in proptest::collection::vec(1usize..=512, 1..=32)
  ) {
    let crc = crc16::Crc::table_based(params);
    let oneshot = crc.calculate(&data);

    let mut digest = crc.digest();
    let mut offset = 0;
    let mut pattern_idx = 0;
    while offset < data.len() {
      let end = (offset + chunk_pattern[pattern_idx]).min(data.len());
      digest.update(&data[offset..end]);
      offset = end;
      pattern_idx = (pattern_idx + 1) % chunk_pattern.len();
    }
    prop_assert_eq!(digest.finalize(), oneshot, "chunking pattern {:?}", chunk_pattern);
  }

  #[test]
  fn crc32_strategies_agree(
    params in proptest::sample::select(MODELS_32),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let tableless = crc32::Crc::tableless(params);
    let tabled = crc32::Crc::table_based(params);
    let small = crc32::Crc::small_table_based(params);

    let mut d0 = tableless.digest();
    let mut d1 = tabled.digest();
    let mut d2 = small.digest();
    for digest in [&mut d0, &mut d1, &mut d2] {
      digest.update(a);
    }
    prop_assert_eq!(d0.interim(), d1.interim());
    prop_assert_eq!(d1.interim(), d2.interim());
    for digest in [&mut d0, &mut d1, &mut d2] {
      digest.update(b);
    }
    prop_assert_eq!(d0.finalize(), d1.finalize());
    prop_assert_eq!(d1.finalize(), d2.finalize());
    prop_assert_eq!(d1.finalize(), tabled.calculate(&data));
  }

  #[test]
  fn crc32_interim_resume(
    params in proptest::sample::select(MODELS_32),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let crc = crc32::Crc::table_based(params);
    let mut first = crc.digest();
    first.update(a);

    let mut resumed = crc.digest_from_interim(first.interim());
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), crc.calculate(&data));
  }

  #[test]
  fn crc32_residue_law(
    params in proptest::sample::select(MODELS_32),
    data in proptest::collection::vec(any::<u8>(), 0..=2048)
  ) {
    let crc = crc32::Crc::table_based(params);
    let mut value = crc.calculate(&data);
    if params.ref_in != params.ref_out {
      value = reflect_32(value);
    }
    let trailer = if params.ref_in { value.to_le_bytes() } else { value.to_be_bytes() };

    let mut digest = crc.digest();
    digest.update(&data);
    digest.update(&trailer);
    prop_assert_eq!(digest.residue_of_register(), params.residue());
  }

  #[test]
  fn crc16_crossed_output_reflection_residue_law(
    init in any::<u16>(),
    xor_out in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    // ref_in != ref_out is absent from the catalog; cover it with random
    // init/xor_out around the CCITT polynomial. The CRC is bit-reversed
    // before it is appended, per the crossed-endian transmission rule.
    // The input-side reflection on that trailer cancels against ref_in, so
    // the register ends up holding the mirror image of the derived
    // constant; that relationship is itself input-independent.
    let params = crc16::Params::new(0x1021, init, xor_out, true).with_ref_out(false);
    let crc = crc16::Crc::table_based(params);

    let value = reflect_16(crc.calculate(&data));
    let trailer = value.to_le_bytes();

    let mut digest = crc.digest();
    digest.update(&data);
    digest.update(&trailer);
    prop_assert_eq!(digest.residue_of_register(), reflect_16(params.residue()));

    // Either register convention observes the same codeword residue.
    let flipped = crc16::Crc::table_based(params.with_ref_reg(false));
    let mut other = flipped.digest();
    other.update(&data);
    other.update(&trailer);
    prop_assert_eq!(other.residue_of_register(), digest.residue_of_register());
  }

  #[test]
  fn crc64_register_convention_invariance(
    data in proptest::collection::vec(any::<u8>(), 0..=2048)
  ) {
    for &params in &[crc64::XZ, crc64::ECMA_182, crc64::REDIS] {
      let flipped = params.with_ref_reg(!params.ref_reg);
      prop_assert_eq!(
        crc64::Crc::table_based(params).calculate(&data),
        crc64::Crc::table_based(flipped).calculate(&data)
      );
    }
  }

  #[test]
  fn reflect_round_trips(v in any::<u64>()) {
    prop_assert_eq!(reflect_16(reflect_16(v as u16)), v as u16);
    prop_assert_eq!(reflect_32(reflect_32(v as u32)), v as u32);
    prop_assert_eq!(reflect_64(reflect_64(v)), v);
  }
}
