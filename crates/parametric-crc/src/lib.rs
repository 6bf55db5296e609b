//! Parametric CRC-8 / CRC-16 / CRC-32 / CRC-64.
//!
//! One uniform abstraction, the CRC *model*, is instantiated with the seven
//! Rocksoft/RevEng parameters (width, polynomial, initial value, final XOR,
//! input reflection, output reflection, register reflection) to produce a
//! checksum engine that both streams updates and computes one-shot digests.
//! Residue constants and lookup tables are derived from the parameters
//! alone, at compile time.
//!
//! # Models
//!
//! Each width module ships a catalog of named parameter sets from the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//!
//! | Module | Register | Examples |
//! |--------|----------|----------|
//! | [`crc8`] | `u8` | CRC-8/SMBUS, CRC-8/SAE-J1850, CRC-8/MAXIM-DOW |
//! | [`crc16`] | `u16` | CRC-16/KERMIT, CRC-16/XMODEM, CRC-16/IBM-SDLC |
//! | [`crc32`] | `u32` | CRC-32/ISO-HDLC, CRC-32/BZIP2, CRC-32/ISCSI |
//! | [`crc64`] | `u64` | CRC-64/XZ, CRC-64/ECMA-182 |
//!
//! A model is just a parameter tuple; custom polynomials use the same API:
//!
//! ```
//! use parametric_crc::crc16;
//!
//! // 0xA2EB from the CRC polynomial zoo, reflected, init/xorout = 0xFFFF.
//! const ZOO: crc16::Params = crc16::Params::new(0xA2EB, 0xFFFF, 0xFFFF, true);
//! const ZOO_CRC: crc16::Crc = crc16::Crc::table_based(ZOO);
//! let _ = ZOO_CRC.calculate(b"123456789");
//! ```
//!
//! # Calculation Strategies
//!
//! Every model runs under any of five strategies with identical results:
//!
//! | Strategy | Constructor | Table memory |
//! |----------|-------------|--------------|
//! | Table-driven (default) | [`crc32::Crc::table_based`] | 256 entries, embedded |
//! | Small (nibble) table | [`crc32::Crc::small_table_based`] | 16+16 entries, embedded |
//! | Tableless | [`crc32::Crc::tableless`] | none |
//! | External table | [`crc32::ExtCrc`] | 256 entries, caller-owned |
//! | External small table | [`crc32::ExtSmallCrc`] | 16+16 entries, caller-owned |
//!
//! Engines built in a `const` or `static` carry their tables as link-time
//! constants:
//!
//! ```
//! use parametric_crc::crc32;
//!
//! static PKZIP: crc32::Crc = crc32::Crc::table_based(crc32::PKZIP);
//!
//! // One-shot.
//! assert_eq!(PKZIP.calculate(b"123456789"), 0xCBF4_3926);
//!
//! // Streaming.
//! let mut digest = PKZIP.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xCBF4_3926);
//! ```
//!
//! The whole pipeline is `const fn`; check values can be verified at
//! compile time:
//!
//! ```
//! use parametric_crc::crc64;
//!
//! const CHECK: u64 = crc64::Crc::table_based(crc64::XZ).calculate(b"123456789");
//! const _: () = assert!(CHECK == 0x995D_C9BB_DF19_39FA);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): `std::io::Write` for streaming digests
//! - `reflect-nibble-table` / `reflect-no-table`: smaller provisioning of
//!   the byte bit-reversal used when a model's input convention differs
//!   from its register convention (see [`reflect`])
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible; without `std` only the `io::Write`
//! adapter disappears.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod reflect;

pub mod crc8;
pub mod crc16;
pub mod crc32;
pub mod crc64;

// Re-export the streaming trait for convenience.
pub use traits::Checksum;
