//! Stream adapters for Deflated Explicit VR Little Endian.
//!
//! In a deflated file the data set following the file meta group
//! is compressed as a single raw deflate stream.

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Wrap a reader so that the raw deflate stream is inflated on the fly.
pub fn adapt_reader<R: Read>(reader: R) -> DeflateDecoder<R> {
    DeflateDecoder::new(reader)
}

/// Wrap a writer so that the data written to it is deflated.
///
/// The encoder must be [finished](DeflateEncoder::finish)
/// for the stream to be complete.
pub fn adapt_writer<W: Write>(writer: W) -> DeflateEncoder<W> {
    DeflateEncoder::new(writer, Compression::fast())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deflate_stream_round_trip() {
        let data: Vec<u8> = (0..4096_u32).map(|x| (x % 7) as u8).collect();
        let mut encoder = adapt_writer(Vec::new());
        encoder.write_all(&data).unwrap();
        let compressed = encoder.finish().unwrap();
        assert!(compressed.len() < data.len());

        let mut out = Vec::new();
        adapt_reader(&compressed[..]).read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
    }
}
