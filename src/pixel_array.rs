#![forbid(unsafe_code)]

//! Heap-allocated RGBA16 images.
//!
//! A [`PixelArray`] always stores its pixels as 16-bit RGBA, whatever depth
//! the file had. The [`raw`] submodule converts to and from the 8-bit and
//! 3-channel layouts that codecs deal in, and the [`channels`] submodule
//! converts to and from float planes.

use core::ops::{Add, Index, IndexMut, Mul, Sub};

use alloc::vec::Vec;
use pixel_formats::r8g8b8a8_Srgb;

use crate::{png::Metadata, Pixel, PngError, PngResult};

pub mod raw;
pub use raw::{PixelFormat, RawPixels};

pub mod channels;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// The element count of a `width` by `height` buffer with `per_pixel` elements
/// for each pixel.
///
/// ## Failure
/// * Either dimension is 0.
/// * The count doesn't fit in a `usize`.
#[inline]
pub(crate) fn checked_len(width: u32, height: u32, per_pixel: usize) -> PngResult<usize> {
  if width == 0 || height == 0 {
    return Err(PngError::WidthOrHeightZero);
  }
  usize::try_from(width)?
    .checked_mul(usize::try_from(height)?)
    .and_then(|n| n.checked_mul(per_pixel))
    .ok_or(PngError::CheckedMath)
}

#[inline]
pub(crate) fn expect_len(expected: usize, found: usize) -> PngResult<()> {
  if expected == found {
    Ok(())
  } else {
    Err(PngError::LengthMismatch { expected, found })
  }
}

/// An RGBA16 image plus its metadata.
///
/// The channel buffer is row-major, left to right, top to bottom, with the
/// four channels of each pixel together. Its length is always exactly
/// `4 * width * height`, and both dimensions are always non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelArray {
  width: u32,
  height: u32,
  data: Vec<u16>,
  metadata: Metadata,
}
impl Default for PixelArray {
  /// A single transparent pixel.
  #[inline]
  fn default() -> Self {
    Self { width: 1, height: 1, data: alloc::vec![0; 4], metadata: Metadata::default() }
  }
}
impl PixelArray {
  /// An all-transparent image.
  ///
  /// ## Failure
  /// * Either dimension is 0, or the buffer size overflows.
  #[inline]
  pub fn new(width: u32, height: u32) -> PngResult<Self> {
    let len = checked_len(width, height, 4)?;
    Ok(Self { width, height, data: alloc::vec![0; len], metadata: Metadata::default() })
  }

  /// Copies an interleaved RGBA16 buffer.
  ///
  /// ## Failure
  /// * Either dimension is 0, or the buffer size overflows.
  /// * `channels.len()` isn't `4 * width * height`.
  #[inline]
  pub fn from_channels(channels: &[u16], width: u32, height: u32) -> PngResult<Self> {
    let len = checked_len(width, height, 4)?;
    expect_len(len, channels.len())?;
    Ok(Self { width, height, data: channels.to_vec(), metadata: Metadata::default() })
  }

  /// Copies a buffer of pixels.
  ///
  /// ## Failure
  /// * Either dimension is 0, or the buffer size overflows.
  /// * `pixels.len()` isn't `width * height`.
  #[inline]
  pub fn from_pixels(pixels: &[Pixel], width: u32, height: u32) -> PngResult<Self> {
    checked_len(width, height, 4)?;
    expect_len(checked_len(width, height, 1)?, pixels.len())?;
    let data = bytemuck::cast_slice::<Pixel, u16>(pixels).to_vec();
    Ok(Self { width, height, data, metadata: Metadata::default() })
  }

  /// Converts 8-bit pixels, widening each channel.
  ///
  /// ## Failure
  /// * Same as [`PixelArray::from_pixels`].
  #[inline]
  pub fn from_rgba8_pixels(pixels: &[r8g8b8a8_Srgb], width: u32, height: u32) -> PngResult<Self> {
    let wide: Vec<Pixel> = pixels.iter().copied().map(Pixel::from_rgba8).collect();
    Self::from_pixels(&wide, width, height)
  }

  /// Narrows each pixel to 8 bits per channel (keeping the high byte).
  #[inline]
  #[must_use]
  pub fn to_rgba8_pixels(&self) -> Vec<r8g8b8a8_Srgb> {
    self.pixels().iter().copied().map(Pixel::to_rgba8).collect()
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// `width * height`
  #[inline]
  #[must_use]
  pub fn pixel_count(&self) -> usize {
    self.data.len() / 4
  }

  /// The interleaved RGBA16 channel values.
  #[inline]
  #[must_use]
  pub fn channels(&self) -> &[u16] {
    &self.data
  }

  #[inline]
  #[must_use]
  pub fn channels_mut(&mut self) -> &mut [u16] {
    &mut self.data
  }

  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[Pixel] {
    bytemuck::cast_slice(&self.data)
  }

  #[inline]
  #[must_use]
  pub fn pixels_mut(&mut self) -> &mut [Pixel] {
    bytemuck::cast_slice_mut(&mut self.data)
  }

  #[inline]
  #[must_use]
  pub const fn in_range(&self, x: u32, y: u32) -> bool {
    x < self.width && y < self.height
  }

  /// ## Failure
  /// * The position is outside the image.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> PngResult<Pixel> {
    if self.in_range(x, y) {
      Ok(self.pixels()[xy_width_to_index(x, y, self.width)])
    } else {
      Err(PngError::OutOfBounds { x, y })
    }
  }

  /// ## Failure
  /// * The position is outside the image.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> PngResult<()> {
    let p = self.get_mut(x, y).ok_or(PngError::OutOfBounds { x, y })?;
    *p = pixel;
    Ok(())
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Pixel> {
    if self.in_range(x, y) {
      let i = xy_width_to_index(x, y, self.width);
      Some(&mut self.pixels_mut()[i])
    } else {
      None
    }
  }

  /// If every pixel is fully transparent.
  #[inline]
  #[must_use]
  pub fn is_blank(&self) -> bool {
    self.pixels().iter().all(|p| p.a == 0)
  }

  /// If any pixel is less than fully opaque, so alpha must be kept.
  #[inline]
  #[must_use]
  pub fn has_alpha_channel(&self) -> bool {
    self.pixels().iter().any(|p| p.a < 0xFFFF)
  }

  /// Resets to a single transparent pixel with default metadata.
  #[inline]
  pub fn clear(&mut self) {
    *self = Self::default();
  }

  #[inline]
  #[must_use]
  pub const fn metadata(&self) -> &Metadata {
    &self.metadata
  }

  #[inline]
  #[must_use]
  pub fn metadata_mut(&mut self) -> &mut Metadata {
    &mut self.metadata
  }

  #[inline]
  pub fn set_metadata(&mut self, metadata: Metadata) {
    self.metadata = metadata;
  }

  /// A new array with `f` applied to every pixel. Metadata is copied.
  #[inline]
  #[must_use]
  pub fn map_pixels(&self, mut f: impl FnMut(Pixel) -> Pixel) -> Self {
    let pixels: Vec<Pixel> = self.pixels().iter().map(|p| f(*p)).collect();
    Self {
      width: self.width,
      height: self.height,
      data: bytemuck::cast_slice(&pixels).to_vec(),
      metadata: self.metadata,
    }
  }

  /// A new array from `f` applied to each pair of pixels at the same
  /// position. The metadata of `self` is copied.
  ///
  /// ## Failure
  /// * The two arrays have different dimensions.
  #[inline]
  pub fn combine(&self, other: &Self, mut f: impl FnMut(Pixel, Pixel) -> Pixel) -> PngResult<Self> {
    if (self.width, self.height) != (other.width, other.height) {
      return Err(PngError::SizeMismatch);
    }
    let pixels: Vec<Pixel> =
      self.pixels().iter().zip(other.pixels()).map(|(a, b)| f(*a, *b)).collect();
    Ok(Self {
      width: self.width,
      height: self.height,
      data: bytemuck::cast_slice(&pixels).to_vec(),
      metadata: self.metadata,
    })
  }

  /// [`Pixel::union`] at each position.
  #[inline]
  pub fn union(&self, other: &Self) -> PngResult<Self> {
    self.combine(other, Pixel::union)
  }

  /// [`Pixel::difference`] at each position.
  #[inline]
  pub fn difference(&self, other: &Self) -> PngResult<Self> {
    self.combine(other, Pixel::difference)
  }

  /// [`Pixel::blend`] at each position, with `self` as the background.
  #[inline]
  pub fn blend(&self, foreground: &Self) -> PngResult<Self> {
    self.combine(foreground, Pixel::blend)
  }

  /// Gives fully transparent pixels the color of nearby visible pixels.
  ///
  /// Each pass, every transparent pixel that touches (in the four axis
  /// directions) a pixel colored in an earlier pass takes the average color
  /// of those neighbors. Pixels with non-zero alpha count as colored from the
  /// start. Alpha isn't changed, so the image looks the same, but resampling
  /// it won't pull in black fringes.
  ///
  /// `expands` is how many passes to run, `None` runs until nothing changes.
  pub fn fill_zero_alpha_pixels(&mut self, expands: Option<u32>) {
    const OPAQUE: u32 = 0;
    const UNFILLED: u32 = u32::MAX;
    let (w, h) = (self.width as usize, self.height as usize);
    // 0 for visible pixels, `n + 1` for pixels filled in pass `n`
    let mut generation_of: Vec<u32> =
      self.pixels().iter().map(|p| if p.a > 0 { OPAQUE } else { UNFILLED }).collect();
    let mut generation: u32 = 1;
    let mut updated = true;
    while updated && expands.map_or(true, |limit| generation <= limit) {
      updated = false;
      for y in 0..h {
        for x in 0..w {
          let i = y * w + x;
          if generation_of[i] < generation {
            continue;
          }
          let mut neighbors = [None; 4];
          if x >= 1 {
            neighbors[0] = Some(i - 1);
          }
          if x + 1 < w {
            neighbors[1] = Some(i + 1);
          }
          if y >= 1 {
            neighbors[2] = Some(i - w);
          }
          if y + 1 < h {
            neighbors[3] = Some(i + w);
          }
          let (mut r, mut g, mut b, mut n) = (0_u32, 0_u32, 0_u32, 0_u32);
          for j in neighbors.into_iter().flatten() {
            if generation_of[j] < generation {
              let p = self.pixels()[j];
              r += u32::from(p.r);
              g += u32::from(p.g);
              b += u32::from(p.b);
              n += 1;
            }
          }
          if n > 0 {
            self.pixels_mut()[i] = Pixel::new((r / n) as u16, (g / n) as u16, (b / n) as u16, 0);
            generation_of[i] = generation;
            updated = true;
          }
        }
      }
      generation = generation.saturating_add(1);
    }
    log::trace!("filled zero alpha pixels in {} passes", generation - 1);
  }
}

impl Index<usize> for PixelArray {
  type Output = Pixel;
  /// Pixel by linear index.
  ///
  /// ## Panics
  /// * If the index is out of bounds.
  #[inline]
  fn index(&self, index: usize) -> &Pixel {
    &self.pixels()[index]
  }
}
impl IndexMut<usize> for PixelArray {
  #[inline]
  fn index_mut(&mut self, index: usize) -> &mut Pixel {
    &mut self.pixels_mut()[index]
  }
}

impl Add for &PixelArray {
  type Output = PngResult<PixelArray>;
  #[inline]
  fn add(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}
impl Sub for &PixelArray {
  type Output = PngResult<PixelArray>;
  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    self.difference(rhs)
  }
}
impl Mul for &PixelArray {
  type Output = PngResult<PixelArray>;
  #[inline]
  fn mul(self, rhs: Self) -> Self::Output {
    self.blend(rhs)
  }
}

impl core::fmt::Display for PixelArray {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} x {}", self.width, self.height)
  }
}
