//! Encode pass: one greedy walk over the pixel grid.
//!
//! Pixels are visited row by row (y outer, x inner). Each pixel either
//! extends the pending run or, after flushing it, is encoded by the first
//! matching rule: cache index, small delta, luma delta, raw. Whatever was
//! chosen, the pixel then overwrites its cache slot and becomes the
//! predecessor for the next one; the decoder replays the identical updates,
//! which is what keeps the two passes in sync.

use std::io::Write;

use log::debug;

use crate::codec::cache::{self, ColorCache};
use crate::codec::header::{Header, HEADER_LEN};
use crate::codec::{OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RUN, RUN_CAP};
use crate::raster::Raster;
use crate::Result;

/// Encode a pixel grid into a complete byte stream, header included.
pub fn encode(raster: &Raster) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + raster.pixel_count() * 4);
    Header::new(raster.width(), raster.height()).write_to(&mut out);

    let mut cache = ColorCache::new();
    let (mut last_r, mut last_g, mut last_b) = (0u8, 0u8, 0u8);
    let mut run = 0u8;

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let (r, g, b) = raster.get(x, y);

            if (r, g, b) == (last_r, last_g, last_b) && run < RUN_CAP {
                run += 1;
            } else {
                if run > 0 {
                    out.push(OP_RUN | run);
                    run = 0;
                }
                if cache.lookup(r, g, b) {
                    out.push(OP_INDEX | cache::slot(r, g, b));
                } else {
                    // Wrapping differences; wraparound stands in for
                    // negative deltas and the decoder adds them back mod 256.
                    let dr = r.wrapping_sub(last_r) as i8;
                    let dg = g.wrapping_sub(last_g) as i8;
                    let db = b.wrapping_sub(last_b) as i8;
                    let dr_dg = dr.wrapping_sub(dg);
                    let db_dg = db.wrapping_sub(dg);

                    if (-2..=1).contains(&dr) && (-2..=1).contains(&dg) && (-2..=1).contains(&db) {
                        out.push(
                            OP_DIFF
                                | (((dr + 2) as u8) << 4)
                                | (((dg + 2) as u8) << 2)
                                | ((db + 2) as u8),
                        );
                    } else if (-32..=31).contains(&dg)
                        && (-8..=7).contains(&dr_dg)
                        && (-8..=7).contains(&db_dg)
                    {
                        out.push(OP_LUMA | ((dg + 32) as u8));
                        out.push((((dr_dg + 8) as u8) << 4) | ((db_dg + 8) as u8));
                    } else {
                        out.push(OP_RGB);
                        out.push(r);
                        out.push(g);
                        out.push(b);
                    }
                }
            }

            last_r = r;
            last_g = g;
            last_b = b;
            cache.update(r, g, b);
        }
    }

    if run > 0 {
        out.push(OP_RUN | run);
    }

    debug!(
        "encoded {}x{} rgb image into {} bytes",
        raster.width(),
        raster.height(),
        out.len()
    );
    out
}

/// Encode into a byte sink. The stream is built in memory first, so on an IO
/// error nothing has been partially interleaved into the sink by this call.
pub fn encode_to_writer<W: Write>(writer: &mut W, raster: &Raster) -> Result<()> {
    writer.write_all(&encode(raster))?;
    Ok(())
}
