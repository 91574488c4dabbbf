use super::*;

/// Image last-modification time
///
/// The fields are plain calendar values, in UTC by convention. Each field must
/// be in its calendar range (month `1..=12`, day `1..=31`, hour `0..24`,
/// minute and second `0..60`). Reading a chunk rejects anything else, and
/// [`Metadata::apply`] won't write it. The day isn't checked against the
/// length of the month.
///
/// Spec: [tIME](https://www.w3.org/TR/png/#11tIME)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct tIME {
  pub year: u16,
  pub month: u8,
  pub day: u8,
  pub hour: u8,
  pub minute: u8,
  pub second: u8,
}
impl tIME {
  /// If every field is in its calendar range.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    matches!(self.month, 1..=12)
      && matches!(self.day, 1..=31)
      && self.hour < 24
      && self.minute < 60
      && self.second < 60
  }

  #[inline]
  #[must_use]
  pub fn to_chunk(&self) -> Chunk {
    let [y0, y1] = U16BE::from_u16(self.year).to_bytes();
    Chunk::from_small_parts(
      ChunkTy::tIME,
      alloc::vec![y0, y1, self.month, self.day, self.hour, self.minute, self.second],
    )
  }
}
impl TryFrom<&Chunk> for tIME {
  type Error = PngError;
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    expect_chunk_ty(chunk, ChunkTy::tIME)?;
    let time = match *chunk.data() {
      [y0, y1, month, day, hour, minute, second, ..] => {
        tIME { year: u16::from_be_bytes([y0, y1]), month, day, hour, minute, second }
      }
      _ => return Err(PngError::BadChunkData(ChunkTy::tIME)),
    };
    if time.is_valid() {
      Ok(time)
    } else {
      Err(PngError::BadChunkData(ChunkTy::tIME))
    }
  }
}
impl core::fmt::Display for tIME {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
      self.year, self.month, self.day, self.hour, self.minute, self.second
    )
  }
}
