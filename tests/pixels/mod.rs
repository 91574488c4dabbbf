use pngrw::{
  pixel_array::raw::{depth_16_to_8, depth_8_to_16},
  png::Metadata,
  Pixel, PixelArray, PixelFormat, RawPixels,
};

fn rand_pixels(count: usize) -> Vec<Pixel> {
  super::rand_bytes(count * 8)
    .chunks_exact(8)
    .map(|b| {
      Pixel::new(
        u16::from_le_bytes([b[0], b[1]]),
        u16::from_le_bytes([b[2], b[3]]),
        u16::from_le_bytes([b[4], b[5]]),
        u16::from_le_bytes([b[6], b[7]]),
      )
    })
    .collect()
}

#[test]
fn test_blend_identities() {
  for p in rand_pixels(200) {
    assert_eq!(p * Pixel::TRANSPARENT, p, "{p}");
    for opaque in [Pixel::BLACK, Pixel::ORANGE, Pixel::VIOLET] {
      assert_eq!(p * opaque, opaque, "{p}");
    }
  }
}

#[test]
fn test_union_commutes() {
  let a = rand_pixels(100);
  let b = rand_pixels(100);
  for (a, b) in a.into_iter().zip(b) {
    if a.a != 0 && b.a != 0 {
      assert_eq!(a + b, b + a, "{a} + {b}");
    }
  }
}

#[test]
fn test_operators_never_panic() {
  let a = rand_pixels(300);
  let b = rand_pixels(300);
  let edge = [Pixel::TRANSPARENT, Pixel::WHITE, Pixel::new(0, 0, 0, 1), Pixel::new(0xFFFF, 0xFFFF, 0xFFFF, 1)];
  for x in a.iter().chain(&edge) {
    for y in b.iter().take(20).chain(&edge) {
      let _ = (*x + *y, *x - *y, *x * *y);
    }
  }
}

#[test]
fn test_depth_round_trip_stable() {
  let channels: Vec<u16> = rand_pixels(64).iter().flat_map(|p| p.to_array()).collect();
  let once = depth_8_to_16(&depth_16_to_8(&channels));
  let twice = depth_8_to_16(&depth_16_to_8(&once));
  assert_eq!(once, twice);
}

#[test]
fn test_raw_round_trips() {
  let pixels = rand_pixels(6);
  let array = PixelArray::from_pixels(&pixels, 3, 2).unwrap();
  let raw = array.to_raw(PixelFormat::Rgba16);
  assert_eq!(PixelArray::from_raw(&raw, PixelFormat::Rgba16, 3, 2).unwrap(), array);
  let rgb8 = array.to_raw(PixelFormat::Rgb8);
  assert_eq!(rgb8.len(), 18);
  let back = PixelArray::from_raw(&rgb8, PixelFormat::Rgb8, 3, 2).unwrap();
  assert!(!back.has_alpha_channel());
  // an already-flat image is stable through the same trip
  assert_eq!(PixelArray::from_raw(&back.to_raw(PixelFormat::Rgb8), PixelFormat::Rgb8, 3, 2).unwrap(), back);
  assert!(matches!(array.to_raw(PixelFormat::Rgba8), RawPixels::U8(v) if v.len() == 24));
}

#[test]
fn test_array_operators() {
  let a = PixelArray::from_pixels(&rand_pixels(9), 3, 3).unwrap();
  let b = PixelArray::from_pixels(&rand_pixels(9), 3, 3).unwrap();
  let sum = (&a + &b).unwrap();
  let diff = (&a - &b).unwrap();
  let over = (&a * &b).unwrap();
  for i in 0..9 {
    assert_eq!(sum[i], a[i] + b[i]);
    assert_eq!(diff[i], a[i] - b[i]);
    assert_eq!(over[i], a[i] * b[i]);
  }
  let wide = PixelArray::new(9, 1).unwrap();
  assert!((&a + &wide).is_err());
}

#[test]
fn test_clone_is_deep() {
  let mut a = PixelArray::from_pixels(&[Pixel::RED; 4], 2, 2).unwrap();
  a.set_metadata(Metadata::srgb());
  let b = a.clone();
  a.set(0, 0, Pixel::BLUE).unwrap();
  a.metadata_mut().gamma = None;
  assert_eq!(b.get(0, 0).unwrap(), Pixel::RED);
  assert!(b.metadata().gamma.is_some());
}

#[test]
fn test_float_channels_round_trip() {
  let a = PixelArray::from_pixels(&rand_pixels(20), 5, 4).unwrap();
  let planar = a.rgba_channel_first();
  assert_eq!(planar.len(), 80);
  assert!(planar.iter().all(|v| (0.0..=1.0).contains(v)));
  assert_eq!(PixelArray::from_rgba_channel_first(&planar, 5, 4).unwrap(), a);
  let gray = a.red_channel();
  let g = PixelArray::from_grayscale(&gray, 5, 4).unwrap();
  for i in 0..20 {
    assert_eq!(g[i].r, a[i].r);
    assert_eq!(g[i].b, a[i].r);
    assert_eq!(g[i].a, 0xFFFF);
  }
}
