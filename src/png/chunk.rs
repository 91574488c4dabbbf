use super::*;
use bytemuck::{Pod, Zeroable};

/// The largest payload (and the largest whole stream) that this crate will
/// handle: `i32::MAX / 2`.
///
/// Real PNG allows up to `2^31 - 1` per chunk, but nothing sensible gets near
/// this and it keeps a corrupt length field from asking for gigabytes.
pub const MAX_CHUNK_LENGTH: u32 = (i32::MAX / 2) as u32;

/// The four ascii bytes that name a chunk's type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const gAMA: Self = Self(*b"gAMA");
  pub const cHRM: Self = Self(*b"cHRM");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const tIME: Self = Self(*b"tIME");
  pub const pHYs: Self = Self(*b"pHYs");

  /// Critical chunks have an uppercase first letter.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
  /// Public chunks have an uppercase second letter.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }
  /// Safe-to-copy chunks have a lowercase fourth letter.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
}
impl core::fmt::Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Debug::fmt(&AsciiArray(self.0), f)
  }
}
impl core::fmt::Display for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&AsciiArray(self.0), f)
  }
}
impl From<[u8; 4]> for ChunkTy {
  #[inline]
  fn from(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }
}

/// The length and type fields that start every chunk record.
#[derive(Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct ChunkHeader {
  length: U32BE,
  ty: [u8; 4],
}

/// A single chunk: a type and a payload.
///
/// The length and CRC fields of the on-disk record are derived from these two
/// when the chunk is written, so they're not stored.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
  ty: ChunkTy,
  data: Vec<u8>,
}
impl Chunk {
  /// Makes a chunk from a type and payload.
  ///
  /// ## Failure
  /// * The payload is longer than [`MAX_CHUNK_LENGTH`].
  #[inline]
  pub fn new(ty: ChunkTy, data: impl Into<Vec<u8>>) -> PngResult<Self> {
    let data = data.into();
    if data.len() > MAX_CHUNK_LENGTH as usize {
      return Err(PngError::PayloadTooLarge(data.len()));
    }
    Ok(Self { ty, data })
  }

  /// For the fixed-size typed chunks, which can never be over the limit.
  #[inline]
  #[must_use]
  pub(crate) fn from_small_parts(ty: ChunkTy, data: Vec<u8>) -> Self {
    debug_assert!(data.len() <= MAX_CHUNK_LENGTH as usize);
    Self { ty, data }
  }

  /// The end marker.
  #[inline]
  #[must_use]
  pub fn iend() -> Self {
    Self { ty: ChunkTy::IEND, data: Vec::new() }
  }

  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }

  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// Total bytes this chunk takes up when written: the payload plus 4 each
  /// for length, type, and CRC.
  #[inline]
  #[must_use]
  pub fn length(&self) -> usize {
    self.data.len() + 12
  }

  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    chunk_crc(self.ty, &self.data)
  }

  /// Appends the full record (length, type, payload, CRC) to `out`.
  #[inline]
  pub fn write_to(&self, out: &mut Vec<u8>) {
    let header = ChunkHeader { length: U32BE::from_u32(self.data.len() as u32), ty: self.ty.0 };
    out.extend_from_slice(bytemuck::bytes_of(&header));
    out.extend_from_slice(&self.data);
    out.extend_from_slice(&U32BE::from_u32(self.crc()).to_bytes());
  }

  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.length());
    self.write_to(&mut out);
    out
  }
}
impl core::fmt::Debug for Chunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .finish()
  }
}

/// Produces successive chunks from PNG bytes.
///
/// Each item is a `Result`. The iterator stops after yielding an `IEND` chunk
/// (anything after that is ignored) or after yielding the first error.
#[derive(Debug, Clone)]
pub struct PngChunkIter<'b> {
  spare: &'b [u8],
  crc_check: bool,
  done: bool,
}
impl<'b> PngChunkIter<'b> {
  /// Checks the PNG signature and sets up to read the chunks after it.
  ///
  /// ## Failure
  /// * The input is longer than [`MAX_CHUNK_LENGTH`].
  /// * The input is shorter than the signature, or the signature is wrong.
  pub fn from_png_bytes(bytes: &'b [u8], crc_check: bool) -> PngResult<Self> {
    if bytes.len() > MAX_CHUNK_LENGTH as usize {
      return Err(PngError::LengthTooLarge(bytes.len() as u64));
    }
    match try_split_off_byte_array::<8>(bytes) {
      Some((signature, spare)) if signature == PNG_SIGNATURE => {
        Ok(Self { spare, crc_check, done: false })
      }
      Some(_) => Err(PngError::NoPngSignature),
      None => Err(PngError::UnexpectedEndOfInput),
    }
  }

  fn read_one(&mut self) -> PngResult<Chunk> {
    if self.spare.len() < 12 {
      return Err(PngError::UnexpectedEndOfInput);
    }
    let (header_bytes, rest) =
      try_split_off_byte_array::<8>(self.spare).ok_or(PngError::UnexpectedEndOfInput)?;
    let header: ChunkHeader = bytemuck::cast(header_bytes);
    let length = header.length.to_u32();
    if length > MAX_CHUNK_LENGTH {
      return Err(PngError::LengthTooLarge(u64::from(length)));
    }
    let ty = ChunkTy(header.ty);
    let (data, rest) =
      try_split_off_slice(rest, length as usize).ok_or(PngError::UnexpectedEndOfInput)?;
    let (crc_bytes, rest) =
      try_split_off_byte_array::<4>(rest).ok_or(PngError::UnexpectedEndOfInput)?;
    if self.crc_check {
      let declared = u32::from_be_bytes(crc_bytes);
      let actual = chunk_crc(ty, data);
      if declared != actual {
        log::warn!("{ty:?}: declared CRC {declared:#010X} but computed {actual:#010X}");
        return Err(PngError::CrcMismatch { chunk_ty: ty, declared, actual });
      }
    }
    self.spare = rest;
    log::trace!("{ty:?}: {length} bytes");
    Ok(Chunk { ty, data: data.to_vec() })
  }
}
impl Iterator for PngChunkIter<'_> {
  type Item = PngResult<Chunk>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if self.spare.is_empty() {
      self.done = true;
      return Some(Err(PngError::MissingIend));
    }
    let result = self.read_one();
    match &result {
      Ok(chunk) if chunk.ty == ChunkTy::IEND => {
        self.done = true;
        if !self.spare.is_empty() {
          log::debug!("ignoring {} bytes after IEND", self.spare.len());
        }
      }
      Ok(_) => (),
      Err(_) => self.done = true,
    }
    Some(result)
  }
}

/// Reads every chunk of a PNG data stream, up to and including `IEND`.
///
/// ## Failure
/// * Bad signature, truncated chunks, or over-long lengths (malformed).
/// * No `IEND` chunk (malformed).
/// * When `crc_check` is set, any chunk whose CRC doesn't match (integrity).
#[inline]
pub fn read_png_chunks(bytes: &[u8], crc_check: bool) -> PngResult<Vec<Chunk>> {
  PngChunkIter::from_png_bytes(bytes, crc_check)?.collect()
}

/// Writes the PNG signature followed by each chunk.
#[inline]
#[must_use]
pub fn write_png_chunks(chunks: &[Chunk]) -> Vec<u8> {
  let total = PNG_SIGNATURE.len() + chunks.iter().map(Chunk::length).sum::<usize>();
  let mut out = Vec::with_capacity(total);
  out.extend_from_slice(&PNG_SIGNATURE);
  for chunk in chunks {
    chunk.write_to(&mut out);
  }
  out
}
