//! Basic usage of the parametric CRC engines.
//!
//! Run: `cargo run -p parametric-crc --example basic`

use parametric_crc::{crc16, crc32};

// Engines in statics carry their tables as link-time constants.
static KERMIT: crc16::Crc = crc16::Crc::table_based(crc16::KERMIT);
static PKZIP: crc32::Crc = crc32::Crc::table_based(crc32::PKZIP);

fn main() {
  let data = b"123456789";

  // One-shot.
  println!("CRC-16/KERMIT   check=0x{:04X}", KERMIT.calculate(data));
  println!("CRC-32/ISO-HDLC check=0x{:08X}", PKZIP.calculate(data));

  // Streaming with pause/resume through the interim register.
  let mut digest = PKZIP.digest();
  digest.update(b"12345");
  let saved = digest.interim();

  let mut resumed = PKZIP.digest_from_interim(saved);
  resumed.update(b"6789");
  println!("streamed        check=0x{:08X}", resumed.finalize());

  // A custom model: any polynomial from the zoo works the same way.
  let zoo = crc16::Params::new(0xA2EB, 0xFFFF, 0xFFFF, true);
  let crc = crc16::Crc::table_based(zoo);
  println!(
    "CRC-16/ZOO-A2EB check=0x{:04X} residue=0x{:04X}",
    crc.calculate(data),
    zoo.residue()
  );
}
