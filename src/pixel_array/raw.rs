//! Conversions between [`PixelArray`] and the raw layouts codecs use.
//!
//! Depth changes use only integer operations: going down keeps the high byte,
//! going up repeats the byte so that `0xFF` becomes `0xFFFF`. Dropping the
//! alpha channel composites over opaque white.

use super::*;

/// The four raw pixel layouts a codec hands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
  /// 3 channels, 8 bits each
  Rgb8,
  /// 4 channels, 8 bits each
  Rgba8,
  /// 3 channels, 16 bits each
  Rgb16,
  /// 4 channels, 16 bits each
  Rgba16,
}
impl PixelFormat {
  /// Channels per pixel: 3 or 4.
  #[inline]
  #[must_use]
  pub const fn channels(self) -> usize {
    if self.has_alpha() {
      4
    } else {
      3
    }
  }

  /// Bits per channel: 8 or 16.
  #[inline]
  #[must_use]
  pub const fn depth(self) -> u32 {
    match self {
      Self::Rgb8 | Self::Rgba8 => 8,
      Self::Rgb16 | Self::Rgba16 => 16,
    }
  }

  #[inline]
  #[must_use]
  pub const fn has_alpha(self) -> bool {
    matches!(self, Self::Rgba8 | Self::Rgba16)
  }
}
impl TryFrom<(usize, u32)> for PixelFormat {
  type Error = PngError;
  /// From `(channels, depth)`.
  #[inline]
  fn try_from((channels, depth): (usize, u32)) -> Result<Self, Self::Error> {
    Ok(match (channels, depth) {
      (3, 8) => Self::Rgb8,
      (4, 8) => Self::Rgba8,
      (3, 16) => Self::Rgb16,
      (4, 16) => Self::Rgba16,
      _ => return Err(PngError::UnsupportedFormat),
    })
  }
}

/// Raw channel values, 8 or 16 bits each.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum RawPixels {
  U8(Vec<u8>),
  U16(Vec<u16>),
}
impl RawPixels {
  /// Number of channel values.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    match self {
      Self::U8(v) => v.len(),
      Self::U16(v) => v.len(),
    }
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Bits per element.
  #[inline]
  #[must_use]
  pub const fn depth(&self) -> u32 {
    match self {
      Self::U8(_) => 8,
      Self::U16(_) => 16,
    }
  }
}

/// Keeps the high byte of each value.
#[inline]
#[must_use]
pub fn depth_16_to_8(src: &[u16]) -> Vec<u8> {
  src.iter().map(|&c| (c >> 8) as u8).collect()
}

/// Repeats each byte into both halves of a `u16`.
#[inline]
#[must_use]
pub fn depth_8_to_16(src: &[u8]) -> Vec<u16> {
  src.iter().map(|&b| (u16::from(b) << 8) | u16::from(b)).collect()
}

fn expect_multiple_of(len: usize, channels: usize) -> PngResult<()> {
  if len % channels == 0 {
    Ok(())
  } else {
    Err(PngError::LengthMismatch { expected: len.next_multiple_of(channels), found: len })
  }
}

fn append_alpha<T: Copy>(rgb: &[T], alpha: T) -> Vec<T> {
  let mut out = Vec::with_capacity(rgb.len() / 3 * 4);
  for px in rgb.chunks_exact(3) {
    out.extend_from_slice(px);
    out.push(alpha);
  }
  out
}

fn flatten_u8(rgba: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
  for px in rgba.chunks_exact(4) {
    let a = u32::from(px[3]);
    for &c in &px[..3] {
      out.push(((u32::from(c) * a + 0xFF * (0x100 - a)) >> 8) as u8);
    }
  }
  out
}

fn flatten_u16(rgba: &[u16]) -> Vec<u16> {
  let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
  for px in rgba.chunks_exact(4) {
    let a = u64::from(px[3]);
    for &c in &px[..3] {
      out.push(((u64::from(c) * a + 0xFFFF * (0x1_0000 - a)) >> 16) as u16);
    }
  }
  out
}

/// RGB8 to RGBA8, with every alpha at `0xFF`.
///
/// ## Failure
/// * The length isn't a multiple of 3.
#[inline]
pub fn add_alpha_u8(rgb: &[u8]) -> PngResult<Vec<u8>> {
  expect_multiple_of(rgb.len(), 3)?;
  Ok(append_alpha(rgb, 0xFF))
}

/// RGB16 to RGBA16, with every alpha at `0xFFFF`.
///
/// ## Failure
/// * The length isn't a multiple of 3.
#[inline]
pub fn add_alpha_u16(rgb: &[u16]) -> PngResult<Vec<u16>> {
  expect_multiple_of(rgb.len(), 3)?;
  Ok(append_alpha(rgb, 0xFFFF))
}

/// RGBA8 to RGB8, compositing each pixel over white.
///
/// ## Failure
/// * The length isn't a multiple of 4.
#[inline]
pub fn remove_alpha_u8(rgba: &[u8]) -> PngResult<Vec<u8>> {
  expect_multiple_of(rgba.len(), 4)?;
  Ok(flatten_u8(rgba))
}

/// RGBA16 to RGB16, compositing each pixel over white.
///
/// ## Failure
/// * The length isn't a multiple of 4.
#[inline]
pub fn remove_alpha_u16(rgba: &[u16]) -> PngResult<Vec<u16>> {
  expect_multiple_of(rgba.len(), 4)?;
  Ok(flatten_u16(rgba))
}

impl PixelArray {
  /// Converts a raw buffer from a codec.
  ///
  /// ## Failure
  /// * The element type of `raw` doesn't match the depth of `format`.
  /// * Either dimension is 0, or the size overflows.
  /// * `raw` doesn't have exactly `channels * width * height` values.
  pub fn from_raw(raw: &RawPixels, format: PixelFormat, width: u32, height: u32) -> PngResult<Self> {
    let len = checked_len(width, height, format.channels())?;
    checked_len(width, height, 4)?;
    let wide = match (raw, format.depth()) {
      (RawPixels::U8(v), 8) => {
        expect_len(len, v.len())?;
        depth_8_to_16(v)
      }
      (RawPixels::U16(v), 16) => {
        expect_len(len, v.len())?;
        v.clone()
      }
      _ => return Err(PngError::UnsupportedFormat),
    };
    let data = if format.has_alpha() { wide } else { append_alpha(&wide, 0xFFFF) };
    Ok(Self { width, height, data, metadata: Metadata::default() })
  }

  /// Converts to a raw buffer for a codec.
  ///
  /// The 8-bit formats keep the high byte of each channel. The 3-channel
  /// formats composite each pixel over white, after any depth change.
  #[must_use]
  pub fn to_raw(&self, format: PixelFormat) -> RawPixels {
    match format {
      PixelFormat::Rgba16 => RawPixels::U16(self.data.clone()),
      PixelFormat::Rgb16 => RawPixels::U16(flatten_u16(&self.data)),
      PixelFormat::Rgba8 => RawPixels::U8(depth_16_to_8(&self.data)),
      PixelFormat::Rgb8 => RawPixels::U8(flatten_u8(&depth_16_to_8(&self.data))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::vec;

  #[test]
  fn test_pixel_format() {
    for format in [PixelFormat::Rgb8, PixelFormat::Rgba8, PixelFormat::Rgb16, PixelFormat::Rgba16] {
      assert_eq!(PixelFormat::try_from((format.channels(), format.depth())), Ok(format));
    }
    assert_eq!(PixelFormat::try_from((1, 8)), Err(PngError::UnsupportedFormat));
    assert_eq!(PixelFormat::try_from((4, 4)).unwrap_err().kind(), crate::ErrorKind::Unsupported);
  }

  #[test]
  fn test_depth_changes() {
    assert_eq!(depth_16_to_8(&[0xFFFF, 0x80FF, 0x00FF]), vec![0xFF, 0x80, 0x00]);
    assert_eq!(depth_8_to_16(&[0xFF, 0x80, 0x01]), vec![0xFFFF, 0x8080, 0x0101]);
    // stable after the first reduction
    let once = depth_8_to_16(&depth_16_to_8(&[0x1234, 0xABCD, 0xFFFE, 0x0001]));
    assert_eq!(depth_8_to_16(&depth_16_to_8(&once)), once);
  }

  #[test]
  fn test_alpha_changes() {
    assert_eq!(add_alpha_u8(&[1, 2, 3, 4, 5, 6]).unwrap(), vec![1, 2, 3, 0xFF, 4, 5, 6, 0xFF]);
    assert_eq!(add_alpha_u16(&[1, 2, 3]).unwrap(), vec![1, 2, 3, 0xFFFF]);
    assert_eq!(
      add_alpha_u8(&[1, 2, 3, 4]),
      Err(PngError::LengthMismatch { expected: 6, found: 4 })
    );
    // opaque stays, transparent goes white
    assert_eq!(remove_alpha_u8(&[10, 20, 30, 0xFF, 10, 20, 30, 0]).unwrap(), vec![
      10, 20, 30, 0xFF, 0xFF, 0xFF
    ]);
    assert_eq!(remove_alpha_u8(&[0x80, 0, 0xFF, 0x80]).unwrap(), vec![191, 127, 0xFF]);
    assert_eq!(remove_alpha_u16(&[0, 0xFFFF, 0x1234, 0xFFFF, 0, 0, 0, 0]).unwrap(), vec![
      0, 0xFFFF, 0x1234, 0xFFFF, 0xFFFF, 0xFFFF
    ]);
    assert!(remove_alpha_u16(&[0; 5]).is_err());
  }

  #[test]
  fn test_from_raw_errors() {
    let raw = RawPixels::U8(vec![0; 12]);
    assert_eq!(
      PixelArray::from_raw(&raw, PixelFormat::Rgb16, 2, 2),
      Err(PngError::UnsupportedFormat)
    );
    assert_eq!(
      PixelArray::from_raw(&raw, PixelFormat::Rgba8, 2, 2),
      Err(PngError::LengthMismatch { expected: 16, found: 12 })
    );
    assert_eq!(PixelArray::from_raw(&raw, PixelFormat::Rgb8, 0, 2), Err(PngError::WidthOrHeightZero));
    assert!(PixelArray::from_raw(&raw, PixelFormat::Rgb8, 2, 2).is_ok());
  }

  #[test]
  fn test_red_through_rgb8() {
    let red = PixelArray::from_pixels(&[Pixel::RED; 4], 2, 2).unwrap();
    let raw = red.to_raw(PixelFormat::Rgb8);
    assert_eq!(raw, RawPixels::U8(vec![0xFF, 0, 0, 0xFF, 0, 0, 0xFF, 0, 0, 0xFF, 0, 0]));
    let back = PixelArray::from_raw(&raw, PixelFormat::Rgb8, 2, 2).unwrap();
    assert_eq!(back, red);
    assert!(back.pixels().iter().all(|p| p.to_array() == [65535, 0, 0, 65535]));
  }

  #[test]
  fn test_to_raw_layouts() {
    let a = PixelArray::from_pixels(&[Pixel::new(0x1234, 0x5678, 0x9ABC, 0xFFFF)], 1, 1).unwrap();
    assert_eq!(a.to_raw(PixelFormat::Rgba16), RawPixels::U16(vec![0x1234, 0x5678, 0x9ABC, 0xFFFF]));
    assert_eq!(a.to_raw(PixelFormat::Rgb16), RawPixels::U16(vec![0x1234, 0x5678, 0x9ABC]));
    assert_eq!(a.to_raw(PixelFormat::Rgba8), RawPixels::U8(vec![0x12, 0x56, 0x9A, 0xFF]));
    assert_eq!(a.to_raw(PixelFormat::Rgb8).len(), 3);
    assert_eq!(a.to_raw(PixelFormat::Rgb8).depth(), 8);
  }
}
