#![forbid(unsafe_code)]

//! A single 16-bit-per-channel RGBA color.

use bytemuck::{Pod, Zeroable};
use core::ops::{Add, Mul, Sub};
use pixel_formats::{r8g8b8_Srgb, r8g8b8a8_Srgb};

/// One RGBA color, 16 bits per channel.
///
/// Colors are straight (not premultiplied) alpha. The compositing operators
/// premultiply internally, with 64-bit intermediates.
///
/// The default value is [`Pixel::TRANSPARENT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Pixel {
  pub r: u16,
  pub g: u16,
  pub b: u16,
  pub a: u16,
}

const MAX: i64 = 0xFFFF;
// A float that should land exactly on an integer can come out a hair under it,
// and the final cast truncates.
const EPSILON_F32: f32 = 5.0e-7 * 65535.0;
const EPSILON_F64: f64 = 5.0e-15 * 65535.0;
/// Scale from a channel value to `0.0..=1.0`.
pub(crate) const INV_RANGE_F32: f32 = 1.0 / 65535.0;
pub(crate) const INV_RANGE_F64: f64 = 1.0 / 65535.0;

impl Pixel {
  pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
  pub const BLACK: Self = Self::rgb(0, 0, 0);
  pub const GRAY: Self = Self::rgb(0x8080, 0x8080, 0x8080);
  pub const WHITE: Self = Self::rgb(0xFFFF, 0xFFFF, 0xFFFF);
  pub const RED: Self = Self::rgb(0xFFFF, 0, 0);
  pub const YELLOW: Self = Self::rgb(0xFFFF, 0xFFFF, 0);
  pub const LIME: Self = Self::rgb(0, 0xFFFF, 0);
  pub const CYAN: Self = Self::rgb(0, 0xFFFF, 0xFFFF);
  pub const BLUE: Self = Self::rgb(0, 0, 0xFFFF);
  pub const MAGENTA: Self = Self::rgb(0xFFFF, 0, 0xFFFF);
  pub const GREEN: Self = Self::rgb(0, 0x8080, 0);
  pub const ORANGE: Self = Self::rgb(0xFFFF, 0xA5A5, 0);
  pub const PINK: Self = Self::rgb(0xFFFF, 0x6969, 0xB4B4);
  pub const VIOLET: Self = Self::rgb(0xEEEE, 0x8282, 0xEEEE);

  #[inline]
  #[must_use]
  pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
    Self { r, g, b, a }
  }

  /// A fully opaque color.
  #[inline]
  #[must_use]
  pub const fn rgb(r: u16, g: u16, b: u16) -> Self {
    Self { r, g, b, a: 0xFFFF }
  }

  /// Each value is clamped to `0..=65535`.
  #[inline]
  #[must_use]
  pub fn from_i32(r: i32, g: i32, b: i32, a: i32) -> Self {
    let c = |v: i32| v.clamp(0, 0xFFFF) as u16;
    Self::new(c(r), c(g), c(b), c(a))
  }

  /// Each value is taken as `0.0..=1.0`, scaled, and clamped. NaN becomes 0.
  #[inline]
  #[must_use]
  pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
    let c = |v: f32| (v * 65535.0 + EPSILON_F32).clamp(0.0, 65535.0) as u16;
    Self::new(c(r), c(g), c(b), c(a))
  }

  /// Each value is taken as `0.0..=1.0`, scaled, and clamped. NaN becomes 0.
  #[inline]
  #[must_use]
  pub fn from_f64(r: f64, g: f64, b: f64, a: f64) -> Self {
    let c = |v: f64| (v * 65535.0 + EPSILON_F64).clamp(0.0, 65535.0) as u16;
    Self::new(c(r), c(g), c(b), c(a))
  }

  /// `[r, g, b, a]`, each in `0.0..=1.0`.
  #[inline]
  #[must_use]
  pub fn to_f32(self) -> [f32; 4] {
    self.to_array().map(|c| f32::from(c) * INV_RANGE_F32)
  }

  /// `[r, g, b, a]`, each in `0.0..=1.0`.
  #[inline]
  #[must_use]
  pub fn to_f64(self) -> [f64; 4] {
    self.to_array().map(|c| f64::from(c) * INV_RANGE_F64)
  }

  #[inline]
  #[must_use]
  pub const fn to_array(self) -> [u16; 4] {
    [self.r, self.g, self.b, self.a]
  }

  #[inline]
  #[must_use]
  pub const fn from_array([r, g, b, a]: [u16; 4]) -> Self {
    Self { r, g, b, a }
  }

  /// Widens each channel by repeating its byte, so `0xFF` becomes `0xFFFF`.
  #[inline]
  #[must_use]
  pub const fn from_rgba8(p: r8g8b8a8_Srgb) -> Self {
    Self::new(widen(p.r), widen(p.g), widen(p.b), widen(p.a))
  }

  /// Keeps the high byte of each channel.
  #[inline]
  #[must_use]
  pub const fn to_rgba8(self) -> r8g8b8a8_Srgb {
    r8g8b8a8_Srgb {
      r: (self.r >> 8) as u8,
      g: (self.g >> 8) as u8,
      b: (self.b >> 8) as u8,
      a: (self.a >> 8) as u8,
    }
  }

  #[inline]
  #[must_use]
  pub const fn is_transparent(self) -> bool {
    self.a == 0
  }

  #[inline]
  #[must_use]
  pub const fn is_opaque(self) -> bool {
    self.a == 0xFFFF
  }

  /// Adds two colors together, weighted by their alphas.
  ///
  /// If either is fully transparent the other is returned as is. Each channel
  /// saturates at the maximum.
  #[inline]
  #[must_use]
  pub fn union(self, other: Self) -> Self {
    if self.a == 0 {
      return other;
    }
    if other.a == 0 {
      return self;
    }
    let a = combined_alpha(self.a, other.a);
    if a == 0 {
      return Self::TRANSPARENT;
    }
    let (a1, a2, a_wide) = (i64::from(self.a), i64::from(other.a), i64::from(a));
    let mix = |c1: u16, c2: u16| {
      ((i64::from(c1) * a1 + i64::from(c2) * a2) / a_wide).min(MAX) as u16
    };
    Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b), a)
  }

  /// Takes one color away from another, weighted by their alphas.
  ///
  /// If `self` is fully transparent the result is black with `other`'s alpha.
  /// If `other` is fully transparent `self` is returned. Each channel stops
  /// at zero.
  #[inline]
  #[must_use]
  pub fn difference(self, other: Self) -> Self {
    if self.a == 0 {
      return Self::new(0, 0, 0, other.a);
    }
    if other.a == 0 {
      return self;
    }
    let a = combined_alpha(self.a, other.a);
    if a == 0 {
      return Self::TRANSPARENT;
    }
    let (a1, a2, a_wide) = (i64::from(self.a), i64::from(other.a), i64::from(a));
    let mix = |c1: u16, c2: u16| {
      ((i64::from(c1) * a1 - i64::from(c2) * a2) / a_wide).clamp(0, MAX) as u16
    };
    Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b), a)
  }

  /// Draws `foreground` over `self`.
  ///
  /// A transparent foreground gives the background unchanged. Otherwise a
  /// transparent background or an opaque foreground gives the foreground.
  #[inline]
  #[must_use]
  pub fn blend(self, foreground: Self) -> Self {
    if foreground.a == 0 {
      return self;
    }
    if self.a == 0 || foreground.a == 0xFFFF {
      return foreground;
    }
    let a = combined_alpha(self.a, foreground.a);
    if a == 0 {
      return Self::TRANSPARENT;
    }
    let (a2, a_wide) = (i64::from(foreground.a), i64::from(a));
    let mix = |c1: u16, c2: u16| {
      ((i64::from(c1) * (a_wide - a2) + i64::from(c2) * a2) / a_wide).clamp(0, MAX) as u16
    };
    Self::new(
      mix(self.r, foreground.r),
      mix(self.g, foreground.g),
      mix(self.b, foreground.b),
      a,
    )
  }
}

/// `1 - (1 - a1)(1 - a2)` in 16-bit fixed point.
#[inline]
#[must_use]
const fn combined_alpha(a1: u16, a2: u16) -> u16 {
  let t1 = 0xFFFF - a1 as u32;
  let t2 = 0xFFFF - a2 as u32;
  (0xFFFF - ((t1 * t2 + 0xFFFF) >> 16)) as u16
}

#[inline]
#[must_use]
const fn widen(b: u8) -> u16 {
  ((b as u16) << 8) | (b as u16)
}

impl From<r8g8b8a8_Srgb> for Pixel {
  #[inline]
  fn from(p: r8g8b8a8_Srgb) -> Self {
    Self::from_rgba8(p)
  }
}
impl From<r8g8b8_Srgb> for Pixel {
  #[inline]
  fn from(p: r8g8b8_Srgb) -> Self {
    Self::rgb(widen(p.r), widen(p.g), widen(p.b))
  }
}
impl From<Pixel> for r8g8b8a8_Srgb {
  #[inline]
  fn from(p: Pixel) -> Self {
    p.to_rgba8()
  }
}
impl From<[u16; 4]> for Pixel {
  #[inline]
  fn from(array: [u16; 4]) -> Self {
    Self::from_array(array)
  }
}
impl From<Pixel> for [u16; 4] {
  #[inline]
  fn from(p: Pixel) -> Self {
    p.to_array()
  }
}

impl Add for Pixel {
  type Output = Self;
  #[inline]
  fn add(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}
impl Sub for Pixel {
  type Output = Self;
  #[inline]
  fn sub(self, rhs: Self) -> Self {
    self.difference(rhs)
  }
}
impl Mul for Pixel {
  type Output = Self;
  /// `background * foreground`
  #[inline]
  fn mul(self, rhs: Self) -> Self {
    self.blend(rhs)
  }
}

impl core::fmt::Display for Pixel {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:04X} {:04X} {:04X} {:04X}", self.r, self.g, self.b, self.a)
  }
}
