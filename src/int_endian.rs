//! Big-endian integer helpers.
//!
//! Everything multi-byte in a PNG stream is big-endian ("network order").

use bytemuck::{Pod, Zeroable};

/// A `u16` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u16` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct U16BE([u8; 2]);
impl U16BE {
  /// Convert this value to a native `u16`
  #[inline]
  #[must_use]
  pub const fn to_u16(self) -> u16 {
    u16::from_be_bytes(self.0)
  }
  /// Make a value from a native `u16`
  #[inline]
  #[must_use]
  pub const fn from_u16(u: u16) -> Self {
    Self(u.to_be_bytes())
  }
  /// The stored bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 2] {
    self.0
  }
}
impl core::fmt::Debug for U16BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U16BE").field(&self.to_u16()).finish()
  }
}
impl From<u16> for U16BE {
  #[inline]
  #[must_use]
  fn from(value: u16) -> Self {
    Self::from_u16(value)
  }
}
impl From<U16BE> for u16 {
  #[inline]
  #[must_use]
  fn from(value: U16BE) -> Self {
    value.to_u16()
  }
}
impl From<[u8; 2]> for U16BE {
  #[inline]
  #[must_use]
  fn from(bytes: [u8; 2]) -> Self {
    Self(bytes)
  }
}

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
  /// The stored bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  #[must_use]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  #[must_use]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}
impl From<[u8; 4]> for U32BE {
  #[inline]
  #[must_use]
  fn from(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }
}

/// Reads a big-endian `u16` from the first two bytes.
///
/// ## Panics
/// * If `bytes` has fewer than 2 elements.
#[inline]
#[must_use]
pub fn u16_be(bytes: &[u8]) -> u16 {
  u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Reads a big-endian `u32` from the first four bytes.
///
/// ## Panics
/// * If `bytes` has fewer than 4 elements.
#[inline]
#[must_use]
pub fn u32_be(bytes: &[u8]) -> u32 {
  u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[test]
fn test_be_helpers() {
  assert_eq!(u32_be(&[0x00, 0x00, 0xBB, 0x80, 0xFF]), 48000);
  assert_eq!(u16_be(&[0x07, 0xE8]), 2024);
  assert_eq!(U32BE::from_u32(0x1234_5678).to_bytes(), [0x12, 0x34, 0x56, 0x78]);
  assert_eq!(U16BE::from([0xAB, 0xCD]).to_u16(), 0xABCD);
  let u: u32 = U32BE::from(7_u32).into();
  assert_eq!(u, 7);
  let pair: [U16BE; 2] = bytemuck::cast([0x00_u8, 0x0D, 0x49, 0x48]);
  assert_eq!(pair.map(U16BE::to_u16), [13, 0x4948]);
}
