#![forbid(unsafe_code)]

//! Just has shorthands for splitting things off the front of byte slices.

/// Splits `N` bytes off the front of the slice as an array.
///
/// Gives `None` if there's not enough bytes.
#[inline]
pub fn try_split_off_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let mut a = [0_u8; N];
    a.copy_from_slice(head);
    Some((a, tail))
  } else {
    None
  }
}

/// Splits `n` bytes off the front of the slice.
///
/// Gives `None` if there's not enough bytes.
#[inline]
pub fn try_split_off_slice(bytes: &[u8], n: usize) -> Option<(&[u8], &[u8])> {
  if bytes.len() >= n {
    Some(bytes.split_at(n))
  } else {
    None
  }
}

/// Rounds to the nearest integer, with ties going to the even neighbor.
///
/// `core` doesn't have float rounding, so this works through an integer cast.
/// Only meaningful for finite values with a magnitude under `2^52`, which
/// covers every use in this crate.
#[inline]
#[must_use]
pub(crate) fn round_ties_even(x: f64) -> f64 {
  let negative = x < 0.0;
  let x = if negative { -x } else { x };
  let whole = (x as u64) as f64;
  let frac = x - whole;
  let rounded = if frac > 0.5 {
    whole + 1.0
  } else if frac < 0.5 {
    whole
  } else if (whole as u64) % 2 == 0 {
    whole
  } else {
    whole + 1.0
  };
  if negative {
    -rounded
  } else {
    rounded
  }
}

#[test]
fn test_round_ties_even() {
  assert_eq!(round_ties_even(0.5), 0.0);
  assert_eq!(round_ties_even(1.5), 2.0);
  assert_eq!(round_ties_even(2.5), 2.0);
  assert_eq!(round_ties_even(2.4999), 2.0);
  assert_eq!(round_ties_even(3071.57), 3072.0);
  assert_eq!(round_ties_even(-1.5), -2.0);
}

#[test]
fn test_split_helpers() {
  let bytes = [1_u8, 2, 3, 4, 5];
  let (a, rest) = try_split_off_byte_array::<2>(&bytes).unwrap();
  assert_eq!(a, [1, 2]);
  assert_eq!(rest, &[3, 4, 5]);
  assert!(try_split_off_byte_array::<6>(&bytes).is_none());
  assert_eq!(try_split_off_slice(&bytes, 5), Some((&bytes[..], &[][..])));
  assert!(try_split_off_slice(&bytes, 6).is_none());
}
