//! Lossless RGB image codec using the QOI byte-stream format.
//!
//! The wire format is a 14-byte big-endian header followed by a stream of
//! per-pixel operations, each starting with a tag byte:
//!
//! ```text
//! 0xFE      r g b     raw pixel, 4 bytes
//! 00iiiiii            color-cache index, 1 byte
//! 01rrggbb            small delta from the previous pixel, 1 byte
//! 10gggggg  rrrrbbbb  large (luma) delta, 2 bytes
//! 11rrrrrr            run of identical pixels, 1 byte
//! ```
//!
//! There is no trailer or checksum. Only 3-channel (no alpha) images are
//! supported; decoded pixels are exposed with fully opaque alpha.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QoiError {
    #[error("magic number mismatch")]
    BadMagic,
    #[error("unexpected end of image stream")]
    Truncated,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, QoiError>;

pub mod codec;
pub mod raster;

pub use codec::{decode, decode_from_reader, encode, encode_to_writer};
pub use raster::Raster;

/// Read an image file in any format the `image` crate supports and write it
/// out encoded as a `.qoi` stream.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let raster = Raster::open(input)?;
    let encoded = codec::encode(&raster);
    let mut file = File::create(output)?;
    file.write_all(&encoded)?;
    Ok(())
}

/// Decode a `.qoi` file and save the pixels in the format implied by the
/// output path's extension.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let mut file = File::open(input)?;
    let raster = codec::decode_from_reader(&mut file)?;
    raster.save(output)
}
