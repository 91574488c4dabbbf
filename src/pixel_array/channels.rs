//! Float views of a [`PixelArray`], for handing to numeric code.
//!
//! "Channel first" is planar (all red values, then all green, ...).
//! "Channel last" is interleaved, the same order as the pixel buffer. Values
//! are scaled to `0.0..=1.0`, and coming back in they go through
//! [`Pixel::from_f32`].

use super::*;
use crate::pixel::INV_RANGE_F32;

#[inline]
fn unit(c: u16) -> f32 {
  f32::from(c) * INV_RANGE_F32
}

impl PixelArray {
  fn plane(&self, channel: usize) -> Vec<f32> {
    self.data.iter().skip(channel).step_by(4).map(|&c| unit(c)).collect()
  }

  fn planar(&self, channels: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(self.pixel_count() * channels);
    for c in 0..channels {
      out.extend(self.data.iter().skip(c).step_by(4).map(|&v| unit(v)));
    }
    out
  }

  fn interleaved(&self, channels: usize) -> Vec<f32> {
    self
      .data
      .chunks_exact(4)
      .flat_map(|px| px[..channels].iter().map(|&v| unit(v)))
      .collect()
  }

  #[inline]
  #[must_use]
  pub fn red_channel(&self) -> Vec<f32> {
    self.plane(0)
  }

  #[inline]
  #[must_use]
  pub fn green_channel(&self) -> Vec<f32> {
    self.plane(1)
  }

  #[inline]
  #[must_use]
  pub fn blue_channel(&self) -> Vec<f32> {
    self.plane(2)
  }

  #[inline]
  #[must_use]
  pub fn alpha_channel(&self) -> Vec<f32> {
    self.plane(3)
  }

  /// Red plane, green plane, blue plane. Alpha is dropped as is (no
  /// compositing).
  #[inline]
  #[must_use]
  pub fn rgb_channel_first(&self) -> Vec<f32> {
    self.planar(3)
  }

  /// `[r, g, b]` per pixel. Alpha is dropped as is (no compositing).
  #[inline]
  #[must_use]
  pub fn rgb_channel_last(&self) -> Vec<f32> {
    self.interleaved(3)
  }

  #[inline]
  #[must_use]
  pub fn rgba_channel_first(&self) -> Vec<f32> {
    self.planar(4)
  }

  #[inline]
  #[must_use]
  pub fn rgba_channel_last(&self) -> Vec<f32> {
    self.interleaved(4)
  }

  /// Builds an array from a function giving the `[r, g, b, a]` floats of each
  /// linear pixel index.
  fn from_float_fn(width: u32, height: u32, f: impl Fn(usize) -> [f32; 4]) -> PngResult<Self> {
    let n = checked_len(width, height, 1)?;
    checked_len(width, height, 4)?;
    let pixels: Vec<Pixel> = (0..n)
      .map(|i| {
        let [r, g, b, a] = f(i);
        Pixel::from_f32(r, g, b, a)
      })
      .collect();
    Self::from_pixels(&pixels, width, height)
  }

  /// The inverse of [`rgb_channel_first`](Self::rgb_channel_first), with an
  /// optional alpha plane (fully opaque if `None`).
  ///
  /// ## Failure
  /// * Either dimension is 0, or the size overflows.
  /// * `rgb` isn't `3 * width * height` long, or `alpha` isn't `width *
  ///   height` long.
  pub fn from_rgb_channel_first(
    rgb: &[f32], alpha: Option<&[f32]>, width: u32, height: u32,
  ) -> PngResult<Self> {
    let n = checked_len(width, height, 1)?;
    expect_len(n * 3, rgb.len())?;
    if let Some(alpha) = alpha {
      expect_len(n, alpha.len())?;
    }
    Self::from_float_fn(width, height, |i| {
      [rgb[i], rgb[n + i], rgb[2 * n + i], alpha.map_or(1.0, |a| a[i])]
    })
  }

  /// The inverse of [`rgb_channel_last`](Self::rgb_channel_last), with an
  /// optional alpha plane (fully opaque if `None`).
  ///
  /// ## Failure
  /// * Same as [`PixelArray::from_rgb_channel_first`].
  pub fn from_rgb_channel_last(
    rgb: &[f32], alpha: Option<&[f32]>, width: u32, height: u32,
  ) -> PngResult<Self> {
    let n = checked_len(width, height, 1)?;
    expect_len(n * 3, rgb.len())?;
    if let Some(alpha) = alpha {
      expect_len(n, alpha.len())?;
    }
    Self::from_float_fn(width, height, |i| {
      [rgb[3 * i], rgb[3 * i + 1], rgb[3 * i + 2], alpha.map_or(1.0, |a| a[i])]
    })
  }

  /// ## Failure
  /// * Either dimension is 0, or the size overflows.
  /// * `rgba` isn't `4 * width * height` long.
  pub fn from_rgba_channel_first(rgba: &[f32], width: u32, height: u32) -> PngResult<Self> {
    let n = checked_len(width, height, 1)?;
    expect_len(checked_len(width, height, 4)?, rgba.len())?;
    Self::from_float_fn(width, height, |i| [rgba[i], rgba[n + i], rgba[2 * n + i], rgba[3 * n + i]])
  }

  /// ## Failure
  /// * Either dimension is 0, or the size overflows.
  /// * `rgba` isn't `4 * width * height` long.
  pub fn from_rgba_channel_last(rgba: &[f32], width: u32, height: u32) -> PngResult<Self> {
    expect_len(checked_len(width, height, 4)?, rgba.len())?;
    Self::from_float_fn(width, height, |i| {
      [rgba[4 * i], rgba[4 * i + 1], rgba[4 * i + 2], rgba[4 * i + 3]]
    })
  }

  /// Copies each gray value into red, green, and blue, fully opaque.
  ///
  /// ## Failure
  /// * Either dimension is 0, or the size overflows.
  /// * `gray` isn't `width * height` long.
  pub fn from_grayscale(gray: &[f32], width: u32, height: u32) -> PngResult<Self> {
    expect_len(checked_len(width, height, 1)?, gray.len())?;
    Self::from_float_fn(width, height, |i| [gray[i], gray[i], gray[i], 1.0])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::vec;

  fn sample() -> PixelArray {
    PixelArray::from_pixels(&[Pixel::RED, Pixel::new(0, 0xFFFF, 0, 0), Pixel::BLUE], 3, 1).unwrap()
  }

  #[test]
  fn test_single_planes() {
    let a = sample();
    assert_eq!(a.red_channel(), vec![1.0, 0.0, 0.0]);
    assert_eq!(a.green_channel(), vec![0.0, 1.0, 0.0]);
    assert_eq!(a.blue_channel(), vec![0.0, 0.0, 1.0]);
    assert_eq!(a.alpha_channel(), vec![1.0, 0.0, 1.0]);
  }

  #[test]
  fn test_plane_scale_matches_pixel() {
    let a = PixelArray::from_pixels(&[Pixel::new(257, 0x8000, 1, 0xFFFE)], 1, 1).unwrap();
    assert_eq!(a.red_channel()[0].to_bits(), 0x3B80_8080);
    assert_eq!(a.rgba_channel_last(), a.get(0, 0).unwrap().to_f32().to_vec());
  }

  #[test]
  fn test_layouts() {
    let a = sample();
    assert_eq!(a.rgb_channel_first(), vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(a.rgb_channel_last(), vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    let first = a.rgba_channel_first();
    assert_eq!(&first[9..], &[1.0, 0.0, 1.0]);
    let last = a.rgba_channel_last();
    assert_eq!(&last[4..8], &[0.0, 1.0, 0.0, 0.0]);
  }

  #[test]
  fn test_round_trips() {
    let a = PixelArray::from_pixels(
      &[Pixel::new(0x1234, 0x8080, 0xFFFE, 0x4000), Pixel::ORANGE, Pixel::TRANSPARENT, Pixel::PINK],
      2,
      2,
    )
    .unwrap();
    assert_eq!(PixelArray::from_rgba_channel_first(&a.rgba_channel_first(), 2, 2).unwrap(), a);
    assert_eq!(PixelArray::from_rgba_channel_last(&a.rgba_channel_last(), 2, 2).unwrap(), a);
    let alpha = a.alpha_channel();
    assert_eq!(
      PixelArray::from_rgb_channel_first(&a.rgb_channel_first(), Some(alpha.as_slice()), 2, 2).unwrap(),
      a
    );
    assert_eq!(
      PixelArray::from_rgb_channel_last(&a.rgb_channel_last(), Some(alpha.as_slice()), 2, 2).unwrap(),
      a
    );
    let opaque = PixelArray::from_rgb_channel_last(&a.rgb_channel_last(), None, 2, 2).unwrap();
    assert!(!opaque.has_alpha_channel());
    assert_eq!(opaque[1], Pixel::ORANGE);
  }

  #[test]
  fn test_grayscale() {
    let a = PixelArray::from_grayscale(&[0.0, 0.5, 1.0, 2.0], 4, 1).unwrap();
    assert_eq!(a[0], Pixel::BLACK);
    assert_eq!(a[1], Pixel::rgb(0x7FFF, 0x7FFF, 0x7FFF));
    assert_eq!(a[2], Pixel::WHITE);
    assert_eq!(a[3], Pixel::WHITE);
  }

  #[test]
  fn test_length_errors() {
    assert_eq!(
      PixelArray::from_grayscale(&[0.0; 3], 2, 2),
      Err(PngError::LengthMismatch { expected: 4, found: 3 })
    );
    assert_eq!(
      PixelArray::from_rgb_channel_first(&[0.0; 12], Some(&[1.0; 3][..]), 2, 2),
      Err(PngError::LengthMismatch { expected: 4, found: 3 })
    );
    assert!(PixelArray::from_rgba_channel_last(&[0.0; 15], 2, 2).is_err());
    assert!(PixelArray::from_rgb_channel_last(&[0.0; 12], None, 2, 0).is_err());
  }
}
