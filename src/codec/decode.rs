//! Decode pass: inverts each operation in stream order.
//!
//! The cache update and predecessor bookkeeping mirror the encoder exactly,
//! pixel for pixel; any divergence there makes the rest of the stream
//! undecodable.

use std::io::Read;
use std::slice::Iter;

use log::debug;

use crate::codec::cache::ColorCache;
use crate::codec::header::{Header, HEADER_LEN};
use crate::codec::{OP_DIFF, OP_INDEX, OP_RGB, OP_RUN, TAG_MASK};
use crate::raster::Raster;
use crate::{QoiError, Result};

#[inline]
fn next_byte(stream: &mut Iter<'_, u8>) -> Result<u8> {
    stream.next().copied().ok_or(QoiError::Truncated)
}

/// Decode a complete byte stream (header included) into a pixel grid of the
/// header's declared dimensions.
pub fn decode(bytes: &[u8]) -> Result<Raster> {
    // Validate the header before allocating anything.
    let header = Header::parse(bytes)?;
    let mut raster = Raster::new(header.width, header.height);
    let mut stream = bytes[HEADER_LEN..].iter();

    let mut cache = ColorCache::new();
    let (mut last_r, mut last_g, mut last_b) = (0u8, 0u8, 0u8);
    let mut run = 0u8;

    for y in 0..header.height {
        for x in 0..header.width {
            let (r, g, b);

            if run > 0 {
                run -= 1;
                (r, g, b) = (last_r, last_g, last_b);
            } else {
                let byte = next_byte(&mut stream)?;
                // The raw sentinel shares the run tag's top bits, so it has
                // to be matched on the full byte first.
                if byte == OP_RGB {
                    r = next_byte(&mut stream)?;
                    g = next_byte(&mut stream)?;
                    b = next_byte(&mut stream)?;
                } else {
                    match byte & TAG_MASK {
                        OP_INDEX => {
                            (r, g, b) = cache.entry(byte & 0x3F);
                        }
                        OP_RUN => {
                            (r, g, b) = (last_r, last_g, last_b);
                            run = (byte & 0x3F).wrapping_sub(1);
                        }
                        OP_DIFF => {
                            r = last_r.wrapping_add((byte >> 4) & 0x3).wrapping_sub(2);
                            g = last_g.wrapping_add((byte >> 2) & 0x3).wrapping_sub(2);
                            b = last_b.wrapping_add(byte & 0x3).wrapping_sub(2);
                        }
                        _ => {
                            // OP_LUMA: dg in the first byte, dr-dg and db-dg
                            // in the second byte's nibbles, all mod 256.
                            let dg = (byte & 0x3F).wrapping_sub(32);
                            let second = next_byte(&mut stream)?;
                            g = last_g.wrapping_add(dg);
                            r = last_r
                                .wrapping_add(dg)
                                .wrapping_add((second >> 4) & 0xF)
                                .wrapping_sub(8);
                            b = last_b
                                .wrapping_add(dg)
                                .wrapping_add(second & 0xF)
                                .wrapping_sub(8);
                        }
                    }
                }
            }

            raster.set(x, y, r, g, b);
            last_r = r;
            last_g = g;
            last_b = b;
            cache.update(r, g, b);
        }
    }

    debug!(
        "decoded {} byte stream into {}x{} rgb image",
        bytes.len(),
        header.width,
        header.height
    );
    Ok(raster)
}

/// Drain a byte source and decode it. IO failures propagate verbatim.
pub fn decode_from_reader<R: Read>(reader: &mut R) -> Result<Raster> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}
