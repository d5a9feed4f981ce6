//! The CRC engine.
//!
//! [`Crc`] owns a parameter set and its lookup table. [`Digest`] is one
//! in-progress computation borrowing a `Crc`; any number of digests can share
//! the same table, from any number of threads.
//!
//! # Register Convention
//!
//! The running register is kept in the form the update loop consumes:
//!
//! - `refin == false`: the plain remainder, MSB-first
//! - `refin == true`: the bit-reversed remainder, LSB-first
//!
//! Finalization reflects the register once more when `refin != refout`, then
//! applies `xorout`.

use core::fmt;

use traits::Checksum;

use crate::{
  Params, Table, Width,
  config::{self, CrcForce},
  error::CheckMismatch,
  params::reflect_bits,
  reference,
};

/// The catalogue check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

#[inline(always)]
fn reflect<W: Width>(value: u32) -> u32 {
  reflect_bits(u64::from(value), W::BITS as u8) as u32
}

/// Fold `data` into a raw register using the 256-entry table.
#[inline]
fn update_table<W: Width>(table: &Table<W>, refin: bool, mut crc: u32, data: &[u8]) -> u32 {
  if refin {
    for &b in data {
      crc = table.lookup((crc as u8) ^ b) ^ (crc >> 8);
    }
  } else {
    let shift = W::BITS - 8;
    for &b in data {
      crc = (table.lookup(((crc >> shift) as u8) ^ b) ^ (crc << 8)) & W::MASK;
    }
  }
  crc
}

/// A CRC variant ready to compute: one parameter set plus its lookup table.
///
/// Build it once (ideally in a `const` or `static`) and hand out as many
/// [`Digest`]s as needed.
///
/// ```
/// use checksum::{Crc, catalog};
///
/// static XMODEM: Crc<u16> = Crc::<u16>::new(&catalog::CRC16_XMODEM);
///
/// assert_eq!(XMODEM.checksum(b"123456789"), 0x31C3);
///
/// let mut digest = XMODEM.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0x31C3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc<W: Width> {
  params: Params<W>,
  table: Table<W>,
}

impl<W: Width> Crc<W> {
  #[inline]
  pub(crate) const fn from_parts(params: Params<W>, table: Table<W>) -> Self {
    Self { params, table }
  }

  /// The parameter set this `Crc` was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &Params<W> {
    &self.params
  }

  /// The lookup table derived from [`Crc::params`].
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &Table<W> {
    &self.table
  }

  /// Start a new computation in the reset state.
  ///
  /// The kernel is the process-wide selection from [`config::get`].
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest<'_, W> {
    Digest::new(self)
  }

  /// Continue a computation from a previously finalized checksum.
  ///
  /// Feeding `B` into `resume(checksum(A))` finalizes to `checksum(A || B)`.
  /// [`Digest::reset`] still returns to the parameter set's initial value.
  ///
  /// ```
  /// use checksum::{Crc, catalog};
  ///
  /// let crc = Crc::<u16>::new(&catalog::CRC16_X_25);
  /// let mut digest = crc.resume(crc.checksum(b"1234"));
  /// digest.update(b"56789");
  /// assert_eq!(digest.finalize(), crc.checksum(b"123456789"));
  /// ```
  #[must_use]
  pub fn resume(&self, crc: W) -> Digest<'_, W> {
    let p = &self.params;
    let raw = crc.widen() ^ p.xorout.widen();
    let state = if p.refin != p.refout { reflect::<W>(raw) } else { raw };
    Digest {
      state: W::truncate(state),
      crc: self,
      kernel: config::get().effective_force,
    }
  }

  /// Compute the CRC of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> W {
    let mut digest = self.digest();
    digest.update(data);
    digest.finalize()
  }

  /// Check the parameter set against its documented check value.
  ///
  /// # Errors
  ///
  /// Returns [`CheckMismatch`] when the CRC of `"123456789"` differs from
  /// `params().check`.
  pub fn verify(&self) -> Result<(), CheckMismatch> {
    let actual = self.checksum(CHECK_INPUT);
    if actual == self.params.check {
      Ok(())
    } else {
      Err(CheckMismatch {
        name: self.params.name,
        expected: self.params.check.widen(),
        actual: actual.widen(),
      })
    }
  }

  /// Returns the backend new digests use in this process.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    config::get().effective_force.backend_name()
  }

  #[inline]
  fn initial_state(&self) -> W {
    let init = self.params.init.widen();
    W::truncate(if self.params.refin { reflect::<W>(init) } else { init })
  }
}

/// One in-progress CRC computation.
///
/// Create it with [`Crc::digest`] or [`Crc::resume`]. It borrows the `Crc`
/// for its table and parameters; the running register is its own.
#[derive(Clone)]
pub struct Digest<'a, W: Width> {
  state: W,
  crc: &'a Crc<W>,
  kernel: CrcForce,
}

impl<'a, W: Width> Digest<'a, W> {
  /// A digest in the reset state.
  #[inline]
  #[must_use]
  pub fn new(crc: &'a Crc<W>) -> Self {
    Self {
      state: crc.initial_state(),
      crc,
      kernel: config::get().effective_force,
    }
  }

  /// Select the kernel for this digest regardless of `CRCHASH_FORCE`.
  ///
  /// Both kernels share one register layout, so switching mid-stream is fine.
  #[inline]
  #[must_use]
  pub const fn with_force(mut self, force: CrcForce) -> Self {
    self.kernel = force.resolve();
    self
  }

  /// The `Crc` this digest computes.
  #[inline]
  #[must_use]
  pub const fn crc(&self) -> &'a Crc<W> {
    self.crc
  }

  /// Returns the kernel this digest folds bytes with.
  #[inline]
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    self.kernel.backend_name()
  }

  /// Fold `data` into the running checksum.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    let params = &self.crc.params;
    let reg = self.state.widen();
    let reg = match self.kernel {
      CrcForce::Reference => reference::update(params, reg, data),
      CrcForce::Auto | CrcForce::Table => update_table(&self.crc.table, params.refin, reg, data),
    };
    self.state = W::truncate(reg);
  }

  /// The checksum of everything written so far.
  ///
  /// Does not change the running state; more data can follow.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> W {
    let p = &self.crc.params;
    let reg = self.state.widen();
    let out = if p.refin != p.refout { reflect::<W>(reg) } else { reg };
    W::truncate(out ^ p.xorout.widen())
  }

  /// Return to the parameter set's initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.crc.initial_state();
  }
}

impl<W: Width> fmt::Debug for Digest<'_, W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Digest")
      .field("name", &self.crc.params.name)
      .field("state", &self.state)
      .field("backend", &self.backend_name())
      .finish()
  }
}

impl<W: Width> Checksum for Digest<'_, W> {
  const OUTPUT_SIZE: usize = W::BYTES;
  type Output = W;
  type Bytes = W::Bytes;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Digest::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Digest::finalize(self)
  }

  #[inline]
  fn finalize_bytes(&self) -> Self::Bytes {
    Digest::finalize(self).to_be_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    Digest::reset(self);
  }
}

#[cfg(feature = "std")]
impl<W: Width> std::io::Write for Digest<'_, W> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
