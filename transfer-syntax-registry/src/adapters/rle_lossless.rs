//! Support for RLE Lossless image decoding and encoding.
//!
//! Each frame is a single fragment starting with a 64-byte header:
//! the number of segments followed by 15 segment offsets,
//! all as little endian 32-bit integers.
//! There is one segment per byte of each sample,
//! most significant byte first,
//! and each row is compressed separately with the PackBits scheme.
//!
//! See <https://dicom.nema.org/medical/dicom/2023e/output/chtml/part05/chapter_G.html>

use dcmkit_dictionary_std::uids;
use dcmkit_encoding::adapters::{
    decode_error, encapsulated_frame, encode_error, native_frame, DecodeResult, EncodeOptions,
    EncodeResult, PixelDataCodec, PixelDataObject,
};
use snafu::OptionExt;

const HEADER_LEN: usize = 64;
const MAX_SEGMENTS: usize = 15;

/// Codec for the RLE Lossless transfer syntax (UID `1.2.840.10008.1.2.5`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RleLosslessAdapter;

struct Geometry {
    rows: usize,
    cols: usize,
    samples_per_pixel: usize,
    bytes_per_sample: usize,
}

impl Geometry {
    fn segments(&self) -> usize {
        self.samples_per_pixel * self.bytes_per_sample
    }

    fn pixels(&self) -> usize {
        self.rows * self.cols
    }

    fn frame_len(&self) -> usize {
        self.pixels() * self.segments()
    }
}

impl PixelDataCodec for RleLosslessAdapter {
    fn transfer_syntax(&self) -> &str {
        uids::RLE_LOSSLESS
    }

    fn decode_frame(
        &self,
        src: &dyn PixelDataObject,
        frame: u32,
        dst: &mut Vec<u8>,
    ) -> DecodeResult<()> {
        let cols = src
            .cols()
            .context(decode_error::MissingAttributeSnafu { name: "Columns" })?;
        let rows = src
            .rows()
            .context(decode_error::MissingAttributeSnafu { name: "Rows" })?;
        let samples_per_pixel =
            src.samples_per_pixel()
                .context(decode_error::MissingAttributeSnafu {
                    name: "SamplesPerPixel",
                })?;
        let bits_allocated = src
            .bits_allocated()
            .context(decode_error::MissingAttributeSnafu {
                name: "BitsAllocated",
            })?;

        if bits_allocated != 8 && bits_allocated != 16 {
            snafu::whatever!("BitsAllocated other than 8 or 16 is not supported");
        }
        let geometry = Geometry {
            rows: rows as usize,
            cols: cols as usize,
            samples_per_pixel: samples_per_pixel as usize,
            bytes_per_sample: bits_allocated as usize / 8,
        };

        let fragment = encapsulated_frame(src, frame)?;
        let offsets = read_rle_header(&fragment)?;
        if offsets.len() != geometry.segments() {
            snafu::whatever!(
                "Expected {} RLE segments, found {}",
                geometry.segments(),
                offsets.len()
            );
        }

        // output is interleaved native samples in little endian:
        //    Pixel 1                             | ... Pixel N
        //    Red         Green       Blue        | ...
        //    LSB R MSB R LSB G MSB G LSB B MSB B | ...
        let base_offset = dst.len();
        dst.resize(base_offset + geometry.frame_len(), 0);
        let pixel_stride = geometry.segments();

        for (i, &start) in offsets.iter().enumerate() {
            let end = offsets
                .get(i + 1)
                .map(|&o| o as usize)
                .unwrap_or_else(|| fragment.len());
            let start = start as usize;
            if start > end || end > fragment.len() {
                snafu::whatever!("RLE segment {} is out of bounds", i);
            }
            let decoded = unpack_bits(&fragment[start..end], geometry.pixels())?;

            // segment order is MSB first for each sample
            let sample = i / geometry.bytes_per_sample;
            let byte = geometry.bytes_per_sample - 1 - i % geometry.bytes_per_sample;
            let first = base_offset + sample * geometry.bytes_per_sample + byte;
            for (k, value) in decoded.into_iter().enumerate() {
                dst[first + k * pixel_stride] = value;
            }
        }
        Ok(())
    }

    fn encode_frame(
        &self,
        src: &dyn PixelDataObject,
        frame: u32,
        _options: EncodeOptions,
        dst: &mut Vec<u8>,
    ) -> EncodeResult<()> {
        let cols = src
            .cols()
            .context(encode_error::MissingAttributeSnafu { name: "Columns" })?;
        let rows = src
            .rows()
            .context(encode_error::MissingAttributeSnafu { name: "Rows" })?;
        let samples_per_pixel =
            src.samples_per_pixel()
                .context(encode_error::MissingAttributeSnafu {
                    name: "SamplesPerPixel",
                })?;
        let bits_allocated = src
            .bits_allocated()
            .context(encode_error::MissingAttributeSnafu {
                name: "BitsAllocated",
            })?;
        if bits_allocated != 8 && bits_allocated != 16 {
            snafu::whatever!("BitsAllocated other than 8 or 16 is not supported");
        }
        let geometry = Geometry {
            rows: rows as usize,
            cols: cols as usize,
            samples_per_pixel: samples_per_pixel as usize,
            bytes_per_sample: bits_allocated as usize / 8,
        };
        if geometry.segments() > MAX_SEGMENTS {
            snafu::whatever!("Too many RLE segments for {} samples per pixel", samples_per_pixel);
        }

        let frame_data = native_frame(src, frame)?;
        let pixel_stride = geometry.segments();

        let start = dst.len();
        dst.resize(start + HEADER_LEN, 0);
        let mut offsets = Vec::with_capacity(geometry.segments());
        let mut row_bytes = Vec::with_capacity(geometry.cols);

        for i in 0..geometry.segments() {
            offsets.push((dst.len() - start) as u32);
            let sample = i / geometry.bytes_per_sample;
            let byte = geometry.bytes_per_sample - 1 - i % geometry.bytes_per_sample;
            let first = sample * geometry.bytes_per_sample + byte;

            for row in 0..geometry.rows {
                row_bytes.clear();
                row_bytes.extend(
                    (0..geometry.cols)
                        .map(|col| frame_data[first + (row * geometry.cols + col) * pixel_stride]),
                );
                pack_bits(&row_bytes, dst);
            }
            if (dst.len() - start) % 2 == 1 {
                dst.push(0);
            }
        }

        // fill in the header
        let header = &mut dst[start..start + HEADER_LEN];
        header[0..4].copy_from_slice(&(offsets.len() as u32).to_le_bytes());
        for (i, offset) in offsets.iter().enumerate() {
            header[4 + i * 4..8 + i * 4].copy_from_slice(&offset.to_le_bytes());
        }
        Ok(())
    }
}

/// Read the RLE header and return the segment offsets.
fn read_rle_header(fragment: &[u8]) -> DecodeResult<Vec<u32>> {
    if fragment.len() < HEADER_LEN {
        snafu::whatever!("RLE fragment is too short for its header");
    }
    let read_u32 = |i: usize| {
        u32::from_le_bytes([
            fragment[i],
            fragment[i + 1],
            fragment[i + 2],
            fragment[i + 3],
        ])
    };
    let nr_segments = read_u32(0) as usize;
    if nr_segments > MAX_SEGMENTS {
        snafu::whatever!("Invalid number of RLE segments: {}", nr_segments);
    }
    Ok((0..nr_segments).map(|i| read_u32(4 + i * 4)).collect())
}

/// Decode a PackBits segment, expecting `expected` bytes of output.
///
/// Bytes beyond the expected length are discarded,
/// as are trailing bytes of the segment after the output is complete.
fn unpack_bits(segment: &[u8], expected: usize) -> DecodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(expected);
    let mut i = 0;
    while i < segment.len() && out.len() < expected {
        let h = segment[i] as i8;
        i += 1;
        if h >= 0 {
            let n = h as usize + 1;
            let literal = segment
                .get(i..i + n)
                .whatever_context("Truncated literal run in RLE segment")?;
            out.extend_from_slice(literal);
            i += n;
        } else if h != -128 {
            let n = (1 - h as isize) as usize;
            let value = *segment
                .get(i)
                .whatever_context("Truncated replicate run in RLE segment")?;
            out.resize(out.len() + n, value);
            i += 1;
        }
        // h = -128 is a no-op
    }
    if out.len() < expected {
        snafu::whatever!(
            "RLE segment decoded to {} bytes, expected {}",
            out.len(),
            expected
        );
    }
    out.truncate(expected);
    Ok(out)
}

/// Encode one row with PackBits, appending to `dst`.
fn pack_bits(row: &[u8], dst: &mut Vec<u8>) {
    let mut i = 0;
    while i < row.len() {
        // length of the run of equal bytes starting at i
        let mut run = 1;
        while i + run < row.len() && run < 128 && row[i + run] == row[i] {
            run += 1;
        }
        if run >= 2 {
            dst.push((1 - run as isize) as i8 as u8);
            dst.push(row[i]);
            i += run;
            continue;
        }

        // literal run until the next pair of equal bytes
        let start = i;
        let mut len = 0;
        while i < row.len() && len < 128 {
            if i + 1 < row.len() && row[i] == row[i + 1] {
                break;
            }
            i += 1;
            len += 1;
        }
        dst.push((len - 1) as u8);
        dst.extend_from_slice(&row[start..start + len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packbits() {
        let encoded = vec![
            0xFE, 0xAA, 0x02, 0x80, 0x00, 0x2A, 0xFD, 0xAA, 0x03, 0x80, 0x00, 0x2A, 0x22, 0xF7,
            0xAA,
        ];
        let expected = vec![
            0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0xAA, 0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0x22,
            0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
        ];
        assert_eq!(unpack_bits(&encoded, expected.len()).unwrap(), expected);
    }

    #[test]
    fn pack_bits_round_trip() {
        let rows: Vec<Vec<u8>> = vec![
            vec![],
            vec![7],
            vec![1, 2, 3, 4, 5],
            vec![9; 300],
            (0..=255).collect(),
            vec![1, 1, 2, 3, 3, 3, 4, 5, 5],
        ];
        for row in rows {
            let mut packed = Vec::new();
            pack_bits(&row, &mut packed);
            assert_eq!(unpack_bits(&packed, row.len()).unwrap(), row);
        }
    }

    #[test]
    fn replicate_runs_are_compact() {
        let mut packed = Vec::new();
        pack_bits(&[0; 128], &mut packed);
        assert_eq!(packed, vec![0x81, 0x00]);
    }

    #[test]
    fn truncated_segment() {
        assert!(unpack_bits(&[0x05, 1, 2], 6).is_err());
        assert!(unpack_bits(&[0xFD], 4).is_err());
    }
}
