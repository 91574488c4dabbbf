use super::*;

/// CIE 1931 xy positions of the white point and the three primaries.
///
/// The default is sRGB primaries with a D65 white point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct ChromaticityPoints {
  pub white_x: PngFixed,
  pub white_y: PngFixed,
  pub red_x: PngFixed,
  pub red_y: PngFixed,
  pub green_x: PngFixed,
  pub green_y: PngFixed,
  pub blue_x: PngFixed,
  pub blue_y: PngFixed,
}
impl Default for ChromaticityPoints {
  #[inline]
  fn default() -> Self {
    Self {
      white_x: PngFixed::from_raw(31270),
      white_y: PngFixed::from_raw(32900),
      red_x: PngFixed::from_raw(64000),
      red_y: PngFixed::from_raw(33000),
      green_x: PngFixed::from_raw(30000),
      green_y: PngFixed::from_raw(60000),
      blue_x: PngFixed::from_raw(15000),
      blue_y: PngFixed::from_raw(6000),
    }
  }
}
impl ChromaticityPoints {
  /// The fields in the order they're stored in a `cHRM` chunk.
  #[inline]
  #[must_use]
  pub const fn to_array(&self) -> [PngFixed; 8] {
    [
      self.white_x,
      self.white_y,
      self.red_x,
      self.red_y,
      self.green_x,
      self.green_y,
      self.blue_x,
      self.blue_y,
    ]
  }

  #[inline]
  #[must_use]
  pub const fn from_array(
    [white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y]: [PngFixed; 8],
  ) -> Self {
    Self { white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y }
  }
}
impl core::fmt::Display for ChromaticityPoints {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "W:{},{} R:{},{} G:{},{} B:{},{}",
      self.white_x,
      self.white_y,
      self.red_x,
      self.red_y,
      self.green_x,
      self.green_y,
      self.blue_x,
      self.blue_y
    )
  }
}

/// Primary chromaticities and white point
///
/// Spec: [cHRM](https://www.w3.org/TR/png/#11cHRM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct cHRM {
  pub points: ChromaticityPoints,
}
impl cHRM {
  #[inline]
  #[must_use]
  pub fn to_chunk(&self) -> Chunk {
    let data: Vec<u8> =
      self.points.to_array().iter().flat_map(|p| U32BE::from_u32(p.raw()).to_bytes()).collect();
    Chunk::from_small_parts(ChunkTy::cHRM, data)
  }
}
impl TryFrom<&Chunk> for cHRM {
  type Error = PngError;
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    expect_chunk_ty(chunk, ChunkTy::cHRM)?;
    let data = chunk.data();
    if data.len() < 4 * 8 {
      return Err(PngError::BadChunkData(ChunkTy::cHRM));
    }
    let mut values = [PngFixed::default(); 8];
    for (value, bytes) in values.iter_mut().zip(data.chunks_exact(4)) {
      *value = PngFixed::from_raw(u32_be(bytes));
    }
    Ok(Self { points: ChromaticityPoints::from_array(values) })
  }
}
