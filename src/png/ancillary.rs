use super::*;

/// Which of the typed ancillary chunks a value is.
///
/// The order of the variants is the order that [`Metadata::apply`] writes
/// them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AncillaryKind {
  Gamma,
  Chromaticity,
  RenderingIntent,
  RecordTime,
  PhysicalDpi,
}
impl AncillaryKind {
  /// Every kind, in write order.
  pub const ALL: [Self; 5] =
    [Self::Gamma, Self::Chromaticity, Self::RenderingIntent, Self::RecordTime, Self::PhysicalDpi];

  #[inline]
  #[must_use]
  pub const fn chunk_ty(self) -> ChunkTy {
    match self {
      Self::Gamma => ChunkTy::gAMA,
      Self::Chromaticity => ChunkTy::cHRM,
      Self::RenderingIntent => ChunkTy::sRGB,
      Self::RecordTime => ChunkTy::tIME,
      Self::PhysicalDpi => ChunkTy::pHYs,
    }
  }

  #[inline]
  #[must_use]
  pub fn from_chunk_ty(ty: ChunkTy) -> Option<Self> {
    Self::ALL.into_iter().find(|kind| kind.chunk_ty() == ty)
  }
}

/// A parsed ancillary chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub enum AncillaryChunk {
  /// Image gamma
  gAMA(gAMA),
  /// Primary chromaticities
  cHRM(cHRM),
  /// sRGB rendering intent
  sRGB(sRGB),
  /// Last modification time
  tIME(tIME),
  /// Physical pixel size
  pHYs(pHYs),
}

type DecodeFn = fn(&Chunk) -> PngResult<AncillaryChunk>;

/// Chunk type to decoder, one entry per variant.
const DECODERS: [(ChunkTy, DecodeFn); 5] = [
  (ChunkTy::gAMA, |c: &Chunk| gAMA::try_from(c).map(AncillaryChunk::gAMA)),
  (ChunkTy::cHRM, |c: &Chunk| cHRM::try_from(c).map(AncillaryChunk::cHRM)),
  (ChunkTy::sRGB, |c: &Chunk| sRGB::try_from(c).map(AncillaryChunk::sRGB)),
  (ChunkTy::tIME, |c: &Chunk| tIME::try_from(c).map(AncillaryChunk::tIME)),
  (ChunkTy::pHYs, |c: &Chunk| pHYs::try_from(c).map(AncillaryChunk::pHYs)),
];

impl AncillaryChunk {
  /// Parses the chunk if it's one of the typed ancillary kinds.
  ///
  /// Any other chunk type gives `Ok(None)`.
  ///
  /// ## Failure
  /// * The payload doesn't fit the layout of its type.
  #[inline]
  pub fn from_chunk(chunk: &Chunk) -> PngResult<Option<Self>> {
    match DECODERS.iter().find(|(ty, _)| *ty == chunk.ty()) {
      Some((_, decode)) => decode(chunk).map(Some),
      None => Ok(None),
    }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> AncillaryKind {
    match self {
      Self::gAMA(_) => AncillaryKind::Gamma,
      Self::cHRM(_) => AncillaryKind::Chromaticity,
      Self::sRGB(_) => AncillaryKind::RenderingIntent,
      Self::tIME(_) => AncillaryKind::RecordTime,
      Self::pHYs(_) => AncillaryKind::PhysicalDpi,
    }
  }

  #[inline]
  #[must_use]
  pub fn to_chunk(&self) -> Chunk {
    match self {
      Self::gAMA(c) => c.to_chunk(),
      Self::cHRM(c) => c.to_chunk(),
      Self::sRGB(c) => c.to_chunk(),
      Self::tIME(c) => c.to_chunk(),
      Self::pHYs(c) => c.to_chunk(),
    }
  }
}
impl TryFrom<&Chunk> for AncillaryChunk {
  type Error = PngError;
  /// Like [`AncillaryChunk::from_chunk`], but a chunk of any other type is an
  /// error.
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    Self::from_chunk(chunk)?.ok_or(PngError::BadChunkData(chunk.ty()))
  }
}

/// Fails with [`PngError::ChunkTypeMismatch`] unless the chunk has the given
/// type.
#[inline]
pub(crate) fn expect_chunk_ty(chunk: &Chunk, expected: ChunkTy) -> PngResult<()> {
  if chunk.ty() == expected {
    Ok(())
  } else {
    Err(PngError::ChunkTypeMismatch { expected, found: chunk.ty() })
  }
}
