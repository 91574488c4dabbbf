use pngrw::{png::*, ErrorKind, PngError};
use walkdir::WalkDir;

#[test]
fn test_PngChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    if let Ok(it) = PngChunkIter::from_png_bytes(&v, true) {
      for _ in it {
        //
      }
    }
    let _ = read_png_chunks(&v, false);
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let result = read_png_chunks(&v, true);
    if !v.starts_with(&PNG_SIGNATURE) {
      assert_eq!(result, Err(PngError::NoPngSignature));
    }
  }
}

#[test]
fn test_random_chunk_bodies_no_panics() {
  // a real signature followed by junk gets an error, never a panic
  for _ in 0..20 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(512));
    for result in PngChunkIter::from_png_bytes(&v, true).unwrap() {
      if let Ok(chunk) = result {
        let _ = AncillaryChunk::from_chunk(&chunk);
      }
    }
    let _ = read_png_chunks(&v, false).and_then(|chunks| Metadata::read(&chunks));
  }
}

#[test]
fn test_random_payloads_through_views() {
  for ty in [ChunkTy::gAMA, ChunkTy::cHRM, ChunkTy::sRGB, ChunkTy::tIME, ChunkTy::pHYs] {
    for len in [0, 1, 4, 7, 9, 32, 40] {
      let chunk = Chunk::new(ty, super::rand_bytes(len)).unwrap();
      match AncillaryChunk::from_chunk(&chunk) {
        Ok(Some(parsed)) => assert_eq!(parsed.to_chunk().ty(), ty),
        Ok(None) => panic!("{ty:?} should always be recognized"),
        Err(e) => assert!(
          matches!(e.kind(), ErrorKind::Malformed | ErrorKind::Unsupported),
          "{ty:?}: {e:?}"
        ),
      }
    }
  }
}

#[test]
fn test_write_then_read_chunks() {
  let chunks = vec![
    Chunk::new(ChunkTy::IHDR, vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]).unwrap(),
    Chunk::new(ChunkTy(*b"zzZz"), super::rand_bytes(100)).unwrap(),
    Chunk::new(ChunkTy::IDAT, super::rand_bytes(300)).unwrap(),
    Chunk::new(ChunkTy::IDAT, Vec::new()).unwrap(),
    Chunk::iend(),
  ];
  let bytes = write_png_chunks(&chunks);
  assert_eq!(read_png_chunks(&bytes, true).unwrap(), chunks);
  // every truncation is an error, never a panic or a short success
  for cut in 0..bytes.len() {
    assert!(read_png_chunks(&bytes[..cut], true).is_err(), "cut at {cut}");
  }
}

#[test]
fn test_metadata_survives_bytes() {
  let base = vec![
    Chunk::new(ChunkTy::IHDR, vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0]).unwrap(),
    Chunk::iend(),
  ];
  let mut m = Metadata::srgb();
  m.record_time = Some(tIME { year: 2000, month: 1, day: 1, hour: 0, minute: 0, second: 0 });
  m.dpi = Dpi::new(300.0, 150.0).unwrap();
  let bytes = write_png_chunks(&m.apply(&base).unwrap());
  let back = Metadata::read(&read_png_chunks(&bytes, true).unwrap()).unwrap();
  assert_eq!(back, m);
  assert_eq!(back.gamma.unwrap().raw(), 45455);
}
