use super::*;

/// Pixels per meter for each pixel per inch.
pub const INCHES_PER_METER: f64 = 100.0 / 2.54;

/// Horizontal and vertical resolution in dots per inch.
///
/// Values are always kept on a 1/32 grid, which is the precision common
/// encoders use. A value on that grid survives a trip through a `pHYs` chunk
/// (whole pixels per meter) unchanged.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dpi {
  x: f64,
  y: f64,
}
impl Dpi {
  /// 96 by 96.
  pub const DEFAULT: Self = Self { x: 96.0, y: 96.0 };

  /// Makes a resolution, snapping each value to the nearest 1/32.
  ///
  /// ## Failure
  /// * Either value isn't finite, or doesn't stay positive after snapping.
  #[inline]
  pub fn new(x: f64, y: f64) -> PngResult<Self> {
    let (x, y) = (snap_to_32nds(x)?, snap_to_32nds(y)?);
    Ok(Self { x, y })
  }

  #[inline]
  #[must_use]
  pub const fn x(&self) -> f64 {
    self.x
  }

  #[inline]
  #[must_use]
  pub const fn y(&self) -> f64 {
    self.y
  }
}
impl Default for Dpi {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}
impl core::fmt::Display for Dpi {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}x{}", self.x, self.y)
  }
}

fn snap_to_32nds(v: f64) -> PngResult<f64> {
  // the upper bound keeps the integer-cast rounding exact
  if !v.is_finite() || !(v > 0.0) || v > 1.0e12 {
    return Err(PngError::InvalidDpi);
  }
  let snapped = round_ties_even(v * 32.0) / 32.0;
  if snapped > 0.0 {
    Ok(snapped)
  } else {
    Err(PngError::InvalidDpi)
  }
}

#[inline]
#[must_use]
fn dpi_to_ppm(dpi: f64) -> u32 {
  // float to int `as` casts saturate
  round_ties_even(dpi * INCHES_PER_METER) as u32
}

#[inline]
#[must_use]
fn ppm_to_dpi(ppm: u32) -> f64 {
  round_ties_even(f64::from(ppm) / INCHES_PER_METER * 32.0) / 32.0
}

/// Physical pixel dimensions
///
/// Spec: [pHYs](https://www.w3.org/TR/png/#11pHYs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct pHYs {
  /// pixels per unit, x axis
  pub ppu_x: u32,
  /// pixels per unit, y axis
  pub ppu_y: u32,
  /// if the unit is the meter. Otherwise the values only give an aspect ratio.
  pub is_meters: bool,
}
impl pHYs {
  /// Converts a resolution to the nearest whole pixels per meter.
  #[inline]
  #[must_use]
  pub fn from_dpi(dpi: Dpi) -> Self {
    Self { ppu_x: dpi_to_ppm(dpi.x()), ppu_y: dpi_to_ppm(dpi.y()), is_meters: true }
  }

  /// Converts back to dots per inch, on the nearest 1/32.
  ///
  /// The unit flag is not consulted: the values are always taken as pixels
  /// per meter. A zero pixel count can't be turned into a resolution, so that
  /// gives `None`.
  #[inline]
  #[must_use]
  pub fn dpi(&self) -> Option<Dpi> {
    Dpi::new(ppm_to_dpi(self.ppu_x), ppm_to_dpi(self.ppu_y)).ok()
  }

  #[inline]
  #[must_use]
  pub fn to_chunk(&self) -> Chunk {
    let mut data = Vec::with_capacity(9);
    data.extend_from_slice(&U32BE::from_u32(self.ppu_x).to_bytes());
    data.extend_from_slice(&U32BE::from_u32(self.ppu_y).to_bytes());
    data.push(u8::from(self.is_meters));
    Chunk::from_small_parts(ChunkTy::pHYs, data)
  }
}
impl TryFrom<&Chunk> for pHYs {
  type Error = PngError;
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    expect_chunk_ty(chunk, ChunkTy::pHYs)?;
    let data = chunk.data();
    if data.len() < 9 {
      return Err(PngError::BadChunkData(ChunkTy::pHYs));
    }
    Ok(Self { ppu_x: u32_be(&data[0..4]), ppu_y: u32_be(&data[4..8]), is_meters: data[8] == 1 })
  }
}
