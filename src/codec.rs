#![forbid(unsafe_code)]

//! Reading and writing whole PNG files, with the pixel compression done by an
//! outside codec.
//!
//! This crate doesn't do DEFLATE or PNG row filtering. Instead you give it an
//! [`ImageCodec`] that turns PNG bytes into a [`RawImage`] and back, and
//! [`read_png`] / [`write_png`] take care of everything around that: CRC
//! checks, metadata chunks, and the depth and alpha conversions.

use alloc::vec::Vec;

use crate::{
  png::{read_png_chunks, write_png_chunks, ChunkTy, Dpi, Metadata},
  PixelArray, PixelFormat, PngResult, RawPixels,
};

/// Decoded pixels as a codec sees them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
  /// channel values, row-major, interleaved
  pub pixels: RawPixels,
  /// the layout of `pixels`
  pub format: PixelFormat,
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// physical resolution
  pub dpi: Dpi,
}

/// Something that compresses and decompresses PNG image data.
///
/// `decode` takes a full PNG data stream and gives back its pixels, and
/// `encode` does the reverse. The encoded stream only needs the critical
/// chunks, the metadata chunks are rewritten afterwards anyway.
pub trait ImageCodec {
  /// Decodes a PNG data stream.
  ///
  /// ## Failure
  /// * Should give [`PngError::UnsupportedFormat`](crate::PngError::UnsupportedFormat)
  ///   for encodings it can't produce one of the four [`PixelFormat`]s from.
  fn decode(&self, bytes: &[u8]) -> PngResult<RawImage>;

  /// Encodes pixels into a PNG data stream.
  fn encode(&self, image: &RawImage) -> PngResult<Vec<u8>>;
}
impl<C: ImageCodec + ?Sized> ImageCodec for &C {
  #[inline]
  fn decode(&self, bytes: &[u8]) -> PngResult<RawImage> {
    (**self).decode(bytes)
  }
  #[inline]
  fn encode(&self, image: &RawImage) -> PngResult<Vec<u8>> {
    (**self).encode(image)
  }
}

/// Options for [`read_png`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadOptions {
  /// Check the CRC of every chunk. On by default.
  pub crc_check: bool,
}
impl Default for ReadOptions {
  #[inline]
  fn default() -> Self {
    Self { crc_check: true }
  }
}

/// Options for [`write_png`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriteOptions {
  /// The raw layout handed to the codec. [`PixelFormat::Rgba8`] by default.
  pub format: PixelFormat,
}
impl Default for WriteOptions {
  #[inline]
  fn default() -> Self {
    Self { format: PixelFormat::Rgba8 }
  }
}

/// Reads a PNG data stream into a [`PixelArray`] with its metadata.
///
/// The resolution comes from the `pHYs` chunk if there is one, otherwise from
/// what the codec reported.
///
/// ## Failure
/// * The chunk stream is malformed, or a CRC is wrong (when checking).
/// * A metadata chunk doesn't parse.
/// * The codec fails, or gives pixels that don't fit its stated format and
///   size.
pub fn read_png<C: ImageCodec + ?Sized>(
  codec: &C, bytes: &[u8], options: ReadOptions,
) -> PngResult<PixelArray> {
  let chunks = read_png_chunks(bytes, options.crc_check)?;
  let mut metadata = Metadata::read(&chunks)?;
  let raw = codec.decode(bytes)?;
  log::debug!("decoded {}x{} {:?}", raw.width, raw.height, raw.format);
  if !chunks.iter().any(|c| c.ty() == ChunkTy::pHYs) {
    metadata.dpi = raw.dpi;
  }
  let mut array = PixelArray::from_raw(&raw.pixels, raw.format, raw.width, raw.height)?;
  array.set_metadata(metadata);
  Ok(array)
}

/// Writes a [`PixelArray`] and its metadata as a PNG data stream.
///
/// The pixels are converted to `options.format` before encoding, so 8-bit
/// formats lose the low byte and 3-channel formats are composited over
/// white.
///
/// ## Failure
/// * The codec fails, or gives back a stream that isn't a valid chunk stream.
pub fn write_png<C: ImageCodec + ?Sized>(
  array: &PixelArray, codec: &C, options: WriteOptions,
) -> PngResult<Vec<u8>> {
  let metadata = array.metadata();
  let raw = RawImage {
    pixels: array.to_raw(options.format),
    format: options.format,
    width: array.width(),
    height: array.height(),
    dpi: metadata.dpi,
  };
  let encoded = codec.encode(&raw)?;
  let chunks = read_png_chunks(&encoded, false)?;
  let chunks = metadata.apply(&chunks)?;
  log::debug!("writing {} chunks, {metadata}", chunks.len());
  Ok(write_png_chunks(&chunks))
}
