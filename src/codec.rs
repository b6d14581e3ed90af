//! The QOI operation stream: tag constants shared by the encoder and
//! decoder, and the encode/decode passes themselves.

pub mod cache;
pub mod decode;
pub mod encode;
pub mod header;

pub use decode::{decode, decode_from_reader};
pub use encode::{encode, encode_to_writer};

/// Raw pixel sentinel, followed by r g b verbatim (4 bytes total).
pub const OP_RGB: u8 = 0b1111_1110;
/// Reserved RGBA sentinel. Never emitted in 3-channel mode.
pub const OP_RGBA: u8 = 0b1111_1111;
/// Color-cache reference, low 6 bits = slot index.
pub const OP_INDEX: u8 = 0b0000_0000;
/// Small delta, three 2-bit fields = per-channel delta + 2.
pub const OP_DIFF: u8 = 0b0100_0000;
/// Large delta, low 6 bits = dg + 32; second byte carries dr-dg and db-dg.
pub const OP_LUMA: u8 = 0b1000_0000;
/// Run of identical pixels, low 6 bits = run length (1..=RUN_CAP).
pub const OP_RUN: u8 = 0b1100_0000;

/// Top two bits select the operation for every tag except the sentinels.
pub const TAG_MASK: u8 = 0b1100_0000;

/// Longest run a single OP_RUN byte may carry. `OP_RUN | 62` and
/// `OP_RUN | 63` are the OP_RGB and OP_RGBA sentinels, so those low-6-bit
/// values must never appear in a run byte.
pub const RUN_CAP: u8 = 61;
