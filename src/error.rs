use core::{fmt, num::TryFromIntError};

use crate::png::ChunkTy;

/// The broad category of a [`PngError`].
///
/// Callers that only care about "what went wrong" at a coarse level can match
/// on this instead of every individual error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
  /// The byte stream doesn't follow the container format.
  Malformed,
  /// A chunk's declared CRC doesn't match its contents.
  Integrity,
  /// A pixel format or enumerated value outside what this crate handles.
  Unsupported,
  /// The caller passed arguments that break the function's contract.
  Argument,
}

/// An error from the `pngrw` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PngError {
  /// The first eight bytes aren't the PNG signature.
  NoPngSignature,

  /// The data ended before a complete chunk could be read.
  UnexpectedEndOfInput,

  /// The data ran out before an `IEND` chunk was found.
  MissingIend,

  /// A length (of the whole stream or of a single chunk) is over the
  /// `i32::MAX / 2` ceiling.
  LengthTooLarge(u64),

  /// A chunk was built with a payload over the `i32::MAX / 2` ceiling.
  PayloadTooLarge(usize),

  /// A chunk's payload is too short (or otherwise invalid) for its type.
  BadChunkData(ChunkTy),

  /// The chunk's declared CRC doesn't match the computed CRC.
  CrcMismatch {
    /// type of the offending chunk
    chunk_ty: ChunkTy,
    /// the CRC stored in the stream
    declared: u32,
    /// the CRC computed over type and payload
    actual: u32,
  },

  /// A pixel format that isn't one of the four supported ones, or a raw
  /// buffer whose element type doesn't fit the format.
  UnsupportedFormat,

  /// An `sRGB` rendering intent byte other than `0..=3`.
  UnknownRenderingIntent(u8),

  /// A typed view was asked to read a chunk of a different type.
  ChunkTypeMismatch {
    /// the type the view reads
    expected: ChunkTy,
    /// the type of the chunk that was given
    found: ChunkTy,
  },

  /// Width or height is zero.
  WidthOrHeightZero,

  /// A buffer length doesn't match what the dimensions require.
  LengthMismatch {
    /// number of elements required
    expected: usize,
    /// number of elements given
    found: usize,
  },

  /// A pixel position outside of the image.
  OutOfBounds {
    /// x position
    x: u32,
    /// y position
    y: u32,
  },

  /// Two pixel arrays that must be the same size aren't.
  SizeMismatch,

  /// A DPI value that isn't a positive, finite number.
  InvalidDpi,

  /// A record time with a field outside its calendar range.
  InvalidRecordTime,

  /// Metadata can't be applied to an empty chunk list.
  NoChunksPresent,

  /// A checked math operation failed.
  CheckedMath,
}

impl PngError {
  /// Which of the four broad categories this error falls in.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::NoPngSignature
      | Self::UnexpectedEndOfInput
      | Self::MissingIend
      | Self::LengthTooLarge(_)
      | Self::BadChunkData(_) => ErrorKind::Malformed,
      Self::CrcMismatch { .. } => ErrorKind::Integrity,
      Self::UnsupportedFormat | Self::UnknownRenderingIntent(_) => ErrorKind::Unsupported,
      Self::ChunkTypeMismatch { .. }
      | Self::PayloadTooLarge(_)
      | Self::WidthOrHeightZero
      | Self::LengthMismatch { .. }
      | Self::OutOfBounds { .. }
      | Self::SizeMismatch
      | Self::InvalidDpi
      | Self::InvalidRecordTime
      | Self::NoChunksPresent
      | Self::CheckedMath => ErrorKind::Argument,
    }
  }
}

impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoPngSignature => f.write_str("missing PNG signature"),
      Self::UnexpectedEndOfInput => f.write_str("unexpected end of input inside a chunk"),
      Self::MissingIend => f.write_str("no IEND chunk before the end of input"),
      Self::LengthTooLarge(len) => write!(f, "length {len} is over the 0x3FFFFFFF limit"),
      Self::PayloadTooLarge(len) => write!(f, "chunk payload of {len} bytes is over the limit"),
      Self::BadChunkData(ty) => write!(f, "invalid payload for {ty:?} chunk"),
      Self::CrcMismatch { chunk_ty, declared, actual } => {
        write!(f, "CRC mismatch in {chunk_ty:?}: declared {declared:#010X}, actual {actual:#010X}")
      }
      Self::UnsupportedFormat => f.write_str("unsupported pixel format"),
      Self::UnknownRenderingIntent(b) => write!(f, "unknown rendering intent {b}"),
      Self::ChunkTypeMismatch { expected, found } => {
        write!(f, "expected a {expected:?} chunk, found {found:?}")
      }
      Self::WidthOrHeightZero => f.write_str("width and height must be non-zero"),
      Self::LengthMismatch { expected, found } => {
        write!(f, "buffer length is {found}, expected {expected}")
      }
      Self::OutOfBounds { x, y } => write!(f, "position ({x}, {y}) is out of bounds"),
      Self::SizeMismatch => f.write_str("pixel array sizes don't match"),
      Self::InvalidDpi => f.write_str("dpi must be positive and finite"),
      Self::InvalidRecordTime => f.write_str("record time has a field out of calendar range"),
      Self::NoChunksPresent => f.write_str("chunk list is empty"),
      Self::CheckedMath => f.write_str("arithmetic overflow"),
    }
  }
}

impl core::error::Error for PngError {}

impl From<TryFromIntError> for PngError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}

/// Shorthand for results with a [`PngError`].
pub type PngResult<T> = Result<T, PngError>;
