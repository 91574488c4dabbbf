use alloc::{string::String, vec::Vec};
use core::fmt::Write;

/// An array of bytes expected to contain ascii data.
///
/// There's no actual enforced encoding! The `Debug` and `Display` impls will
/// just `as` cast each byte into a character. This works just as expected for
/// ascii data (`32..=126`), and is still safe for non-ascii data, but you just
/// might get non-printing characters or multi-byte unicode characters.
///
/// PNG chunk types are four ascii letters, so this is used to give them a
/// readable `Debug` output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self([0; N])
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('\"')?;
    Ok(())
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

/// Encodes a string as one byte per character.
///
/// Characters outside of ascii become `b'?'`.
#[inline]
#[must_use]
pub fn ascii_to_bytes(s: &str) -> Vec<u8> {
  s.chars().map(|ch| if ch.is_ascii() { ch as u8 } else { b'?' }).collect()
}

/// Decodes one character per byte.
///
/// Bytes outside of ascii become `'?'`.
#[inline]
#[must_use]
pub fn bytes_to_ascii(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| if b.is_ascii() { b as char } else { '?' }).collect()
}

#[test]
fn test_ascii_helpers() {
  assert_eq!(ascii_to_bytes("gAMA"), b"gAMA");
  assert_eq!(ascii_to_bytes("né"), b"n?");
  assert_eq!(bytes_to_ascii(b"tIME"), "tIME");
  assert_eq!(bytes_to_ascii(&[b'a', 0xFF]), "a?");
  assert_eq!(alloc::format!("{:?}", AsciiArray(*b"IEND")), "\"IEND\"");
}
