//! Fixed-size file header: magic, dimensions, channel count, color space.

use crate::{QoiError, Result};

/// "qoif" as a big-endian u32.
pub const MAGIC: u32 = 0x716f_6966;

/// Serialized header size in bytes. The header precedes all pixel data.
pub const HEADER_LEN: usize = 14;

/// 3-channel mode, the only one this codec emits.
pub const CHANNELS_RGB: u8 = 3;

/// Color-space tag, fixed to 0 in this implementation.
pub const COLORSPACE_RGB: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub colorspace: u8,
}

impl Header {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            magic: MAGIC,
            width,
            height,
            channels: CHANNELS_RGB,
            colorspace: COLORSPACE_RGB,
        }
    }

    /// Append the six fields in fixed big-endian order, no padding.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.magic.to_be_bytes());
        out.extend_from_slice(&self.width.to_be_bytes());
        out.extend_from_slice(&self.height.to_be_bytes());
        out.push(self.channels);
        out.push(self.colorspace);
    }

    /// Parse the header from the front of a byte stream.
    ///
    /// Fails with `BadMagic` if the magic constant does not match. Dimensions
    /// are trusted as given; no further validation.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(QoiError::Truncated);
        }
        let magic = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if magic != MAGIC {
            return Err(QoiError::BadMagic);
        }
        let width = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let height = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);

        Ok(Self {
            magic,
            width,
            height,
            channels: bytes[12],
            colorspace: bytes[13],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let mut bytes = Vec::new();
        Header::new(640, 480).write_to(&mut bytes);

        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[0..4], b"qoif");
        assert_eq!(&bytes[4..8], &640u32.to_be_bytes());
        assert_eq!(&bytes[8..12], &480u32.to_be_bytes());
        assert_eq!(bytes[12], CHANNELS_RGB);
        assert_eq!(bytes[13], COLORSPACE_RGB);
    }

    #[test]
    fn test_header_roundtrip() {
        let header = Header::new(12345, 67890);
        let mut bytes = Vec::new();
        header.write_to(&mut bytes);

        let parsed = Header::parse(&bytes).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = Vec::new();
        Header::new(1, 1).write_to(&mut bytes);
        bytes[0] = b'x';

        assert!(matches!(
            Header::parse(&bytes),
            Err(crate::QoiError::BadMagic)
        ));
    }

    #[test]
    fn test_short_header() {
        let mut bytes = Vec::new();
        Header::new(1, 1).write_to(&mut bytes);
        bytes.truncate(10);

        assert!(matches!(
            Header::parse(&bytes),
            Err(crate::QoiError::Truncated)
        ));
    }
}
