use pngrw::{
  codec::*,
  png::*,
  ErrorKind, Pixel, PixelArray, PixelFormat, PngError, PngResult, RawPixels,
};

/// Stores pixels uncompressed in a private `raWp` chunk, so the whole
/// read/write path can run without a real DEFLATE codec.
struct StoredCodec;

const RAW_TY: ChunkTy = ChunkTy(*b"raWp");

fn format_byte(format: PixelFormat) -> u8 {
  match format {
    PixelFormat::Rgb8 => 0,
    PixelFormat::Rgba8 => 1,
    PixelFormat::Rgb16 => 2,
    PixelFormat::Rgba16 => 3,
  }
}

impl ImageCodec for StoredCodec {
  fn decode(&self, bytes: &[u8]) -> PngResult<RawImage> {
    let chunks = read_png_chunks(bytes, false)?;
    let raw = chunks.iter().find(|c| c.ty() == RAW_TY).ok_or(PngError::UnsupportedFormat)?;
    let data = raw.data();
    if data.len() < 17 {
      return Err(PngError::BadChunkData(RAW_TY));
    }
    let format = match data[0] {
      0 => PixelFormat::Rgb8,
      1 => PixelFormat::Rgba8,
      2 => PixelFormat::Rgb16,
      3 => PixelFormat::Rgba16,
      _ => return Err(PngError::UnsupportedFormat),
    };
    let width = u32::from_be_bytes(data[1..5].try_into().unwrap());
    let height = u32::from_be_bytes(data[5..9].try_into().unwrap());
    let dpi_x = u32::from_be_bytes(data[9..13].try_into().unwrap());
    let dpi_y = u32::from_be_bytes(data[13..17].try_into().unwrap());
    let body = &data[17..];
    let pixels = if format.depth() == 8 {
      RawPixels::U8(body.to_vec())
    } else {
      RawPixels::U16(body.chunks_exact(2).map(|b| u16::from_be_bytes([b[0], b[1]])).collect())
    };
    let dpi = Dpi::new(f64::from(dpi_x) / 32.0, f64::from(dpi_y) / 32.0)?;
    Ok(RawImage { pixels, format, width, height, dpi })
  }

  fn encode(&self, image: &RawImage) -> PngResult<Vec<u8>> {
    let mut ihdr = Vec::new();
    ihdr.extend(image.width.to_be_bytes());
    ihdr.extend(image.height.to_be_bytes());
    let color_type = if image.format.has_alpha() { 6 } else { 2 };
    ihdr.extend([image.format.depth() as u8, color_type, 0, 0, 0]);
    let mut raw = vec![format_byte(image.format)];
    raw.extend(image.width.to_be_bytes());
    raw.extend(image.height.to_be_bytes());
    raw.extend(((image.dpi.x() * 32.0) as u32).to_be_bytes());
    raw.extend(((image.dpi.y() * 32.0) as u32).to_be_bytes());
    match &image.pixels {
      RawPixels::U8(v) => raw.extend(v),
      RawPixels::U16(v) => raw.extend(v.iter().flat_map(|c| c.to_be_bytes())),
    }
    let chunks = [Chunk::new(ChunkTy::IHDR, ihdr)?, Chunk::new(RAW_TY, raw)?, Chunk::iend()];
    Ok(write_png_chunks(&chunks))
  }
}

fn sample_array() -> PixelArray {
  let pixels: Vec<Pixel> = (0..12_u16)
    .map(|i| Pixel::new(i * 5000, 0xFFFF - i * 3000, i * 77, 0xFFFF - i * 1000))
    .collect();
  PixelArray::from_pixels(&pixels, 4, 3).unwrap()
}

#[test]
fn test_red_square_through_rgb8() {
  let red = PixelArray::from_pixels(&[Pixel::RED; 4], 2, 2).unwrap();
  let options = WriteOptions { format: PixelFormat::Rgb8 };
  let bytes = write_png(&red, &StoredCodec, options).unwrap();
  let back = read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap();
  assert_eq!((back.width(), back.height()), (2, 2));
  for p in back.pixels() {
    assert_eq!((p.r, p.g, p.b, p.a), (65535, 0, 0, 65535));
  }
  assert_eq!(back, red);
}

#[test]
fn test_rgba16_is_lossless() {
  let mut array = sample_array();
  array.set_metadata(Metadata::srgb());
  let options = WriteOptions { format: PixelFormat::Rgba16 };
  let bytes = write_png(&array, &StoredCodec, options).unwrap();
  assert_eq!(read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap(), array);
}

#[test]
fn test_rgba8_is_stable_after_one_trip() {
  let array = sample_array();
  let once = read_png(
    &StoredCodec,
    &write_png(&array, &StoredCodec, WriteOptions::default()).unwrap(),
    ReadOptions::default(),
  )
  .unwrap();
  let twice = read_png(
    &StoredCodec,
    &write_png(&once, &StoredCodec, WriteOptions::default()).unwrap(),
    ReadOptions::default(),
  )
  .unwrap();
  assert_eq!(once, twice);
  for (a, b) in array.pixels().iter().zip(once.pixels()) {
    assert_eq!(a.r >> 8, b.r >> 8);
    assert_eq!(a.a >> 8, b.a >> 8);
  }
}

#[test]
fn test_rgb16_composites_over_white() {
  let half_black = PixelArray::from_pixels(&[Pixel::new(0, 0, 0, 0x8000)], 1, 1).unwrap();
  let options = WriteOptions { format: PixelFormat::Rgb16 };
  let bytes = write_png(&half_black, &StoredCodec, options).unwrap();
  let back = read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap();
  assert_eq!(back[0], Pixel::rgb(0x7FFF, 0x7FFF, 0x7FFF));
  assert!(!back.has_alpha_channel());
}

#[test]
fn test_metadata_round_trip() {
  let mut array = sample_array();
  let metadata = array.metadata_mut();
  metadata.gamma = Some(PngFixed::from_f64(0.5));
  metadata.rendering_intent = Some(RenderingIntent::AbsoluteColorimetric);
  metadata.record_time =
    Some(tIME { year: 2023, month: 11, day: 5, hour: 8, minute: 1, second: 2 });
  metadata.dpi = Dpi::new(192.0, 96.0).unwrap();
  let bytes = write_png(&array, &StoredCodec, WriteOptions::default()).unwrap();
  let chunks = read_png_chunks(&bytes, true).unwrap();
  let tys: Vec<ChunkTy> = chunks.iter().map(Chunk::ty).collect();
  assert_eq!(tys, vec![
    ChunkTy::IHDR,
    ChunkTy::gAMA,
    ChunkTy::sRGB,
    ChunkTy::tIME,
    ChunkTy::pHYs,
    RAW_TY,
    ChunkTy::IEND
  ]);
  let back = read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap();
  assert_eq!(back.metadata(), array.metadata());
}

#[test]
fn test_codec_dpi_when_no_phys() {
  let raw = RawImage {
    pixels: RawPixels::U8(vec![1, 2, 3]),
    format: PixelFormat::Rgb8,
    width: 1,
    height: 1,
    dpi: Dpi::new(72.0, 72.0).unwrap(),
  };
  let bytes = StoredCodec.encode(&raw).unwrap();
  let back = read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap();
  assert_eq!(back.metadata().dpi, raw.dpi);
  assert_eq!(back.metadata().gamma, None);
  assert_eq!(back[0], Pixel::rgb(0x0101, 0x0202, 0x0303));
}

#[test]
fn test_crc_check_option() {
  let bytes = write_png(&sample_array(), &StoredCodec, WriteOptions::default()).unwrap();
  let mut bad = bytes.clone();
  // last byte of the IHDR CRC
  bad[8 + 25 - 1] ^= 0x55;
  let err = read_png(&StoredCodec, &bad, ReadOptions::default()).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Integrity);
  let unchecked = read_png(&StoredCodec, &bad, ReadOptions { crc_check: false }).unwrap();
  assert_eq!(unchecked, read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap());
}

#[test]
fn test_codec_errors_pass_through() {
  let bytes = write_png_chunks(&[Chunk::iend()]);
  assert_eq!(read_png(&StoredCodec, &bytes, ReadOptions::default()), Err(PngError::UnsupportedFormat));
  // a codec that lies about the buffer size
  let raw = RawImage {
    pixels: RawPixels::U16(vec![0; 3]),
    format: PixelFormat::Rgb16,
    width: 2,
    height: 1,
    dpi: Dpi::DEFAULT,
  };
  let bytes = StoredCodec.encode(&raw).unwrap();
  let err = read_png(&StoredCodec, &bytes, ReadOptions::default()).unwrap_err();
  assert_eq!(err, PngError::LengthMismatch { expected: 6, found: 3 });
}
