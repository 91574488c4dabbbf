use super::*;

/// A non-negative decimal stored the way PNG stores gamma and chromaticity:
/// the value times 100,000 in a `u32`.
///
/// Converting from a float is lossy (five decimal places are kept) and
/// saturating: negative values and NaN become 0, values too large become the
/// maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngFixed(u32);
impl PngFixed {
  /// The scale between the stored integer and the value it represents.
  pub const SCALE: u32 = 100_000;

  /// Wraps an already-scaled integer.
  #[inline]
  #[must_use]
  pub const fn from_raw(raw: u32) -> Self {
    Self(raw)
  }

  /// The scaled integer.
  #[inline]
  #[must_use]
  pub const fn raw(self) -> u32 {
    self.0
  }

  #[inline]
  #[must_use]
  pub fn from_f64(value: f64) -> Self {
    // `!(value > 0.0)` also catches NaN
    if !(value > 0.0) {
      return Self(0);
    }
    let scaled = value * f64::from(Self::SCALE);
    if scaled >= f64::from(u32::MAX) {
      Self(u32::MAX)
    } else {
      Self(round_ties_even(scaled) as u32)
    }
  }

  #[inline]
  #[must_use]
  pub fn to_f64(self) -> f64 {
    f64::from(self.0) / f64::from(Self::SCALE)
  }
}
impl From<f64> for PngFixed {
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_f64(value)
  }
}
impl From<PngFixed> for f64 {
  #[inline]
  fn from(value: PngFixed) -> Self {
    value.to_f64()
  }
}
impl From<u32> for PngFixed {
  #[inline]
  fn from(raw: u32) -> Self {
    Self::from_raw(raw)
  }
}
impl From<PngFixed> for u32 {
  #[inline]
  fn from(value: PngFixed) -> Self {
    value.raw()
  }
}
impl core::fmt::Display for PngFixed {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.to_f64())
  }
}
