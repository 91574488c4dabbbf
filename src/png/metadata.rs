use super::*;

/// The image metadata this crate understands, gathered from the ancillary
/// chunks of a PNG.
///
/// Every field but `dpi` is optional, and a `None` field isn't written. The
/// resolution is always written, defaulting to [`Dpi::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metadata {
  /// inverse display gamma (`gAMA`)
  pub gamma: Option<PngFixed>,
  /// white point and primaries (`cHRM`)
  pub chromaticity: Option<ChromaticityPoints>,
  /// the image is sRGB, with this rendering intent (`sRGB`)
  pub rendering_intent: Option<RenderingIntent>,
  /// last modification time (`tIME`)
  pub record_time: Option<tIME>,
  /// physical resolution (`pHYs`)
  pub dpi: Dpi,
}
impl Default for Metadata {
  #[inline]
  fn default() -> Self {
    Self {
      gamma: None,
      chromaticity: None,
      rendering_intent: None,
      record_time: None,
      dpi: Dpi::DEFAULT,
    }
  }
}
impl Metadata {
  /// Metadata describing a plain sRGB image: gamma `1/2.2`, the default
  /// chromaticity points, perceptual intent, no time, 96 dpi.
  #[inline]
  #[must_use]
  pub fn srgb() -> Self {
    Self {
      gamma: Some(PngFixed::from_f64(1.0 / 2.2)),
      chromaticity: Some(ChromaticityPoints::default()),
      rendering_intent: Some(RenderingIntent::Perceptual),
      record_time: None,
      dpi: Dpi::DEFAULT,
    }
  }

  /// Reads the metadata out of a list of chunks.
  ///
  /// If a chunk type appears more than once the last one wins. A `pHYs` chunk
  /// with a zero pixel count is skipped.
  ///
  /// ## Failure
  /// * Any of the five chunk types has a payload that doesn't parse.
  pub fn read(chunks: &[Chunk]) -> PngResult<Self> {
    let mut out = Self::default();
    let mut seen: Vec<AncillaryKind> = Vec::new();
    for chunk in chunks {
      let Some(ancillary) = AncillaryChunk::from_chunk(chunk)? else { continue };
      let kind = ancillary.kind();
      if seen.contains(&kind) {
        log::warn!("duplicate {:?} chunk, the later one is used", chunk.ty());
      } else {
        seen.push(kind);
      }
      match ancillary {
        AncillaryChunk::gAMA(g) => out.gamma = Some(g.gamma),
        AncillaryChunk::cHRM(c) => out.chromaticity = Some(c.points),
        AncillaryChunk::sRGB(s) => out.rendering_intent = Some(s.intent),
        AncillaryChunk::tIME(t) => out.record_time = Some(t),
        AncillaryChunk::pHYs(p) => match p.dpi() {
          Some(dpi) => out.dpi = dpi,
          None => log::warn!("ignoring pHYs with a zero pixel count: {p:?}"),
        },
      }
    }
    log::debug!("read metadata: {out}");
    Ok(out)
  }

  /// The chunks this metadata becomes, in write order.
  #[must_use]
  pub fn to_chunks(&self) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(AncillaryKind::ALL.len());
    if let Some(gamma) = self.gamma {
      out.push(gAMA { gamma }.to_chunk());
    }
    if let Some(points) = self.chromaticity {
      out.push(cHRM { points }.to_chunk());
    }
    if let Some(intent) = self.rendering_intent {
      out.push(sRGB { intent }.to_chunk());
    }
    if let Some(time) = self.record_time {
      out.push(time.to_chunk());
    }
    out.push(pHYs::from_dpi(self.dpi).to_chunk());
    out
  }

  /// Writes this metadata into a chunk list.
  ///
  /// Every existing chunk of the five metadata types is removed, then the
  /// new ones go in right after the first chunk (which is normally `IHDR`).
  /// All other chunks keep their order.
  ///
  /// ## Failure
  /// * `chunks` is empty.
  /// * `record_time` is set but not [valid](tIME::is_valid), since it
  ///   couldn't be read back.
  pub fn apply(&self, chunks: &[Chunk]) -> PngResult<Vec<Chunk>> {
    let first = chunks.first().ok_or(PngError::NoChunksPresent)?;
    if self.record_time.is_some_and(|t| !t.is_valid()) {
      return Err(PngError::InvalidRecordTime);
    }
    let is_metadata = |c: &&Chunk| AncillaryKind::from_chunk_ty(c.ty()).is_some();
    if is_metadata(&first) {
      log::warn!("first chunk is {:?}, it will be replaced", first.ty());
    }
    let new_chunks = self.to_chunks();
    let mut out = Vec::with_capacity(chunks.len() + new_chunks.len());
    let mut kept = chunks.iter().filter(|c| !is_metadata(c)).cloned();
    out.extend(kept.next());
    out.extend(new_chunks);
    out.extend(kept);
    Ok(out)
  }
}
impl core::fmt::Display for Metadata {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Dpi: {}", self.dpi)?;
    if let Some(gamma) = self.gamma {
      write!(f, " Gamma: {gamma}")?;
    }
    if let Some(points) = self.chromaticity {
      write!(f, " Chromaticity: {points}")?;
    }
    if let Some(intent) = self.rendering_intent {
      write!(f, " Intent: {intent:?}")?;
    }
    if let Some(time) = self.record_time {
      write!(f, " Time: {time}")?;
    }
    Ok(())
  }
}
