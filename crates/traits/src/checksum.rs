//! Non-cryptographic checksum traits.
//!
//! Traits for streaming checksum algorithms like CRC-16 and CRC-64.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates for large data
//! - **Resumability**: Finalization never consumes the state

use core::fmt::Debug;

/// Streaming non-cryptographic checksum state.
///
/// Implementors absorb input incrementally and can be finalized at any point
/// without losing the ability to absorb more input afterwards.
///
/// # Usage Pattern
///
/// ```text
/// let mut digest = engine.digest();
/// digest.update(b"hello ");
/// digest.update(b"world");
/// let crc = digest.finalize();
/// ```
pub trait Checksum: Clone {
  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u16` for CRC-16, `u32` for CRC-32, etc.
  type Output: Copy + Eq + Debug;

  /// Update the state with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the state with a single byte.
  #[inline]
  fn update_byte(&mut self, byte: u8) {
    self.update(&[byte]);
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume or reset the state, allowing further
  /// updates if needed (the result would then cover all data processed
  /// so far).
  fn finalize(&self) -> Self::Output;

  /// Reset the state as if newly constructed from its engine.
  fn reset(&mut self);
}
