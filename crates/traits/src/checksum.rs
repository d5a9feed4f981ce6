//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: incremental updates, finalize without consuming
//! - **Byte output**: big-endian serialization for generic consumers
//! - **Raw output**: width-specific numeric accessors

use core::fmt::Debug;

/// Incremental, write-then-finalize checksum.
///
/// This is the shape generic byte-stream consumers drive: feed bytes with
/// [`update`](Self::update) (or through `std::io::Write` on implementors), then
/// read the result with [`finalize`](Self::finalize) or one of the byte forms.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Crc, catalog};
/// use traits::Checksum;
///
/// let crc = Crc::<u16>::new(&catalog::CRC16_XMODEM);
/// let mut hasher = crc.digest();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0x31C3);
/// assert_eq!(hasher.finalize_bytes(), [0x31, 0xC3]);
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent and must not change the running state
/// - `reset()` must restore the hasher to its freshly constructed state
/// - `finalize_bytes()` is the big-endian encoding of `finalize()`
pub trait Checksum {
  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  const OUTPUT_SIZE: usize;

  /// Preferred input granularity in bytes.
  ///
  /// Byte-at-a-time checksums accept any length, so this defaults to 1.
  const BLOCK_SIZE: usize = 1;

  /// The numeric checksum type (`u8` for CRC-8, `u16` for CRC-16).
  type Output: Copy + Eq + Debug + Default;

  /// The serialized checksum (`[u8; OUTPUT_SIZE]`).
  type Bytes: Copy + Eq + Debug + AsRef<[u8]>;

  /// Update the hasher with additional data.
  ///
  /// Zero-length input is a no-op.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, so it can be used to peek at an
  /// intermediate value and more data can be written afterwards.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Finalize and return the checksum as big-endian bytes.
  #[must_use]
  fn finalize_bytes(&self) -> Self::Bytes;

  /// Append the big-endian checksum to `out`.
  #[cfg(feature = "alloc")]
  #[inline]
  fn sum(&self, out: &mut alloc::vec::Vec<u8>) {
    out.extend_from_slice(self.finalize_bytes().as_ref());
  }

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Number of bytes produced by [`finalize_bytes`](Self::finalize_bytes).
  #[inline]
  #[must_use]
  fn size(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Preferred input granularity in bytes.
  #[inline]
  #[must_use]
  fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Wrap a reader so every byte read is fed into this checksum.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::{Crc, catalog};
  /// use std::fs::File;
  ///
  /// let crc = Crc::<u16>::new(&catalog::CRC16_KERMIT);
  /// let mut reader = crc.digest().reader(File::open("data.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:04x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(self, inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, self)
  }

  /// Wrap a writer so every byte written is fed into this checksum.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::{Crc, catalog};
  /// use std::{fs::File, io::Write};
  ///
  /// let crc = Crc::<u8>::new(&catalog::CRC8_MAXIM);
  /// let mut writer = crc.digest().writer(File::create("output.bin")?);
  /// writer.write_all(b"hello world")?;
  /// let (file, crc) = writer.into_parts();
  /// println!("CRC: {:02x}", crc);
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(self, inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, self)
  }
}

/// 8-bit checksum returning its raw numeric value.
pub trait Checksum8: Checksum<Output = u8> {
  /// The finalized 8-bit checksum.
  #[must_use]
  fn sum8(&self) -> u8;
}

impl<T: Checksum<Output = u8>> Checksum8 for T {
  #[inline]
  fn sum8(&self) -> u8 {
    self.finalize()
  }
}

/// 16-bit checksum returning its raw numeric value.
pub trait Checksum16: Checksum<Output = u16> {
  /// The finalized 16-bit checksum.
  #[must_use]
  fn sum16(&self) -> u16;
}

impl<T: Checksum<Output = u16>> Checksum16 for T {
  #[inline]
  fn sum16(&self) -> u16 {
    self.finalize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Wrapping byte sum, enough to exercise the provided methods.
  #[derive(Clone, Default)]
  struct Sum16(u16);

  impl Checksum for Sum16 {
    const OUTPUT_SIZE: usize = 2;
    type Output = u16;
    type Bytes = [u8; 2];

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u16::from(b)));
    }

    fn finalize(&self) -> u16 {
      self.0
    }

    fn finalize_bytes(&self) -> [u8; 2] {
      self.0.to_be_bytes()
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[derive(Clone, Default)]
  struct Xor8(u8);

  impl Checksum for Xor8 {
    const OUTPUT_SIZE: usize = 1;
    type Output = u8;
    type Bytes = [u8; 1];

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
    }

    fn finalize(&self) -> u8 {
      self.0
    }

    fn finalize_bytes(&self) -> [u8; 1] {
      [self.0]
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn vectored_matches_sequential() {
    let mut a = Sum16::default();
    a.update_vectored(&[b"ab", b"", b"cd"]);
    let mut b = Sum16::default();
    b.update(b"abcd");
    assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn size_and_block_size() {
    assert_eq!(Sum16::default().size(), 2);
    assert_eq!(Sum16::default().block_size(), 1);
    assert_eq!(Xor8::default().size(), 1);
  }

  #[test]
  fn width_extensions() {
    let mut s = Sum16::default();
    s.update(&[0xFF, 0xFF]);
    assert_eq!(s.sum16(), 0x01FE);

    let mut x = Xor8::default();
    x.update(&[0x0F, 0xF0]);
    assert_eq!(x.sum8(), 0xFF);
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn sum_appends_big_endian() {
    let mut s = Sum16::default();
    s.update(&[0xFF, 0xFF]);
    let mut out = alloc::vec![0xAA];
    s.sum(&mut out);
    assert_eq!(out, [0xAA, 0x01, 0xFE]);
  }
}
