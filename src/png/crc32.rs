use super::*;

/// Lookup table for the reflected polynomial `0xEDB88320`, built at compile
/// time.
const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Runs more bytes through a CRC that's in progress.
///
/// The value passed in and returned is the "raw" register, without the final
/// XOR. Start from `u32::MAX` and finish with `^ u32::MAX`, or just use
/// [`png_crc`] if you have all the bytes up front.
#[inline]
#[must_use]
pub fn update_crc(mut crc: u32, iter: impl IntoIterator<Item = u8>) -> u32 {
  for byte in iter {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// The CRC32 value that PNG uses for chunk integrity.
#[inline]
#[must_use]
pub fn png_crc(iter: impl IntoIterator<Item = u8>) -> u32 {
  update_crc(u32::MAX, iter) ^ u32::MAX
}

/// The CRC of a chunk: covers the type bytes then the payload, but *not* the
/// length field.
#[inline]
#[must_use]
pub fn chunk_crc(ty: ChunkTy, data: &[u8]) -> u32 {
  png_crc(ty.0.iter().copied().chain(data.iter().copied()))
}
