use flate2::{bufread::GzEncoder, Compression};
use std::io;

use crate::error::{Error, Result};

pub const DEFAULT_LEVEL: u32 = 6;
const MAX_LEVEL: u32 = 9;

/// Compress `src` into a complete gzip member.
///
/// `level` runs from 0 (store only) to 9 (best). Anything else is refused before encoding.
pub(crate) fn compress(src: &[u8], level: u32) -> Result<Vec<u8>> {
    if level > MAX_LEVEL {
        return Err(Error::CompressionLevel(level));
    }

    let mut gz_encoder = GzEncoder::new(src, Compression::new(level));
    let mut dest = Vec::with_capacity(src.len() / 2 + 32);
    io::copy(&mut gz_encoder, &mut dest).map_err(Error::Compression)?;

    tracing::trace!(
        level,
        raw = src.len(),
        compressed = dest.len(),
        "gzip body"
    );
    Ok(dest)
}
