#![forbid(unsafe_code)]
#![allow(non_camel_case_types)]

//! The PNG container: chunks, their CRCs, and the typed metadata chunks.
//!
//! A PNG data stream is an 8 byte signature followed by "chunks". Each chunk
//! is a big-endian length, a four letter type, the payload, and a CRC over the
//! type and payload. The stream ends with an `IEND` chunk.
//!
//! This module only handles that framing plus five ancillary chunk types that
//! carry metadata. The compressed image data itself (`IDAT`) is left alone:
//! see [`crate::codec`] for how pixels get in and out.
//!
//! ## Reading
//!
//! ```
//! use pngrw::png::*;
//! # let png_bytes = write_png_chunks(&[Chunk::iend()]);
//! let chunks = read_png_chunks(&png_bytes, true).unwrap();
//! let metadata = Metadata::read(&chunks).unwrap();
//! assert_eq!(metadata.dpi, Dpi::DEFAULT);
//! ```
//!
//! If you want to stop early, or keep going past a bad chunk's error
//! yourself, use a [`PngChunkIter`] directly.
//!
//! ## Writing
//!
//! [`Metadata::apply`] gives a new chunk list with the metadata chunks
//! replaced, and [`write_png_chunks`] turns a chunk list back into bytes.

use crate::{ascii_array::AsciiArray, error::*, int_endian::*, parser_helpers::*};
use alloc::vec::Vec;

/// The first eight bytes of every PNG data stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

mod crc32;
pub use crc32::*;

mod chunk;
pub use chunk::*;

mod fixed;
pub use fixed::*;

mod gama;
pub use gama::*;

mod chrm;
pub use chrm::*;

mod srgb;
pub use srgb::*;

mod time;
pub use time::*;

mod phys;
pub use phys::*;

mod ancillary;
pub use ancillary::*;

mod metadata;
pub use metadata::*;
