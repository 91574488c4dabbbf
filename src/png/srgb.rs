use super::*;

/// How a color management system should map colors that fall outside the
/// output device's gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RenderingIntent {
  /// for images preferring good adaptation to the output device gamut at the
  /// expense of colorimetric accuracy, such as photographs.
  Perceptual = 0,
  /// for images requiring colour appearance matching (relative to the output
  /// device white point), such as logos.
  RelativeColorimetric = 1,
  /// for images preferring preservation of saturation at the expense of hue and
  /// lightness, such as charts and graphs.
  Saturation = 2,
  /// for images requiring preservation of absolute colorimetry, such as
  /// previews of images destined for a different output device (proofs).
  AbsoluteColorimetric = 3,
}
impl TryFrom<u8> for RenderingIntent {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::Perceptual,
      1 => Self::RelativeColorimetric,
      2 => Self::Saturation,
      3 => Self::AbsoluteColorimetric,
      other => return Err(PngError::UnknownRenderingIntent(other)),
    })
  }
}
impl From<RenderingIntent> for u8 {
  #[inline]
  fn from(intent: RenderingIntent) -> Self {
    intent as u8
  }
}

/// Standard RGB colour space
///
/// Spec: [sRGB](https://www.w3.org/TR/png/#11sRGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct sRGB {
  pub intent: RenderingIntent,
}
impl sRGB {
  #[inline]
  #[must_use]
  pub fn to_chunk(&self) -> Chunk {
    Chunk::from_small_parts(ChunkTy::sRGB, alloc::vec![u8::from(self.intent)])
  }
}
impl TryFrom<&Chunk> for sRGB {
  type Error = PngError;
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    expect_chunk_ty(chunk, ChunkTy::sRGB)?;
    match chunk.data() {
      [b, ..] => Ok(Self { intent: RenderingIntent::try_from(*b)? }),
      [] => Err(PngError::BadChunkData(ChunkTy::sRGB)),
    }
  }
}
