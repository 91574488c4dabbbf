#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for PNG images as plain values: chunks, metadata, and 16-bit RGBA
//! pixels.
//!
//! * [`png`] handles the container: the chunk stream, CRCs, and the `gAMA`,
//!   `cHRM`, `sRGB`, `tIME`, and `pHYs` metadata chunks.
//! * [`Pixel`] and [`PixelArray`] hold colors at 16 bits per channel, with
//!   conversions to and from 8-bit and 3-channel layouts and a few
//!   compositing operators.
//! * [`codec`] joins the two, using an [`ImageCodec`](codec::ImageCodec) you
//!   provide for the actual compression.

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod int_endian;
pub use int_endian::*;

pub mod ascii_array;
pub use ascii_array::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;

mod pixel;
pub use pixel::*;

pub mod pixel_array;
pub use pixel_array::{PixelArray, PixelFormat, RawPixels};

pub mod codec;
