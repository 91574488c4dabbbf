use super::*;

/// Image gamma
///
/// Stored as the *inverse* of the display gamma, so a typical sRGB-ish image
/// has `1 / 2.2`, which is `45455` once scaled.
///
/// Spec: [gAMA](https://www.w3.org/TR/png/#11gAMA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct gAMA {
  pub gamma: PngFixed,
}
impl gAMA {
  #[inline]
  #[must_use]
  pub fn to_chunk(&self) -> Chunk {
    Chunk::from_small_parts(ChunkTy::gAMA, U32BE::from_u32(self.gamma.raw()).to_bytes().to_vec())
  }
}
impl TryFrom<&Chunk> for gAMA {
  type Error = PngError;
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    expect_chunk_ty(chunk, ChunkTy::gAMA)?;
    match chunk.data() {
      [a, b, c, d, ..] => Ok(Self { gamma: PngFixed::from_raw(u32::from_be_bytes([*a, *b, *c, *d])) }),
      _ => Err(PngError::BadChunkData(ChunkTy::gAMA)),
    }
  }
}
