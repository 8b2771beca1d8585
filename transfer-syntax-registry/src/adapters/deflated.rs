//! Support for Deflated Image Frame Compression,
//! where every frame is a raw deflate stream in its own fragment.

use dcmkit_dictionary_std::uids;
use dcmkit_encoding::adapters::{
    encapsulated_frame, native_frame, DecodeResult, EncodeOptions, EncodeResult, PixelDataCodec,
    PixelDataObject,
};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use snafu::ResultExt;
use std::io::{Read, Write};

/// Codec for Deflated Image Frame Compression (UID `1.2.840.10008.1.2.8.1`)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeflatedImageFrameAdapter;

impl PixelDataCodec for DeflatedImageFrameAdapter {
    fn transfer_syntax(&self) -> &str {
        uids::DEFLATED_IMAGE_FRAME_COMPRESSION
    }

    fn decode_frame(
        &self,
        src: &dyn PixelDataObject,
        frame: u32,
        dst: &mut Vec<u8>,
    ) -> DecodeResult<()> {
        let fragment = encapsulated_frame(src, frame)?;
        // trailing padding after the end of the deflate stream is ignored
        DeflateDecoder::new(&fragment[..])
            .read_to_end(dst)
            .whatever_context("failed to inflate frame")?;
        Ok(())
    }

    fn encode_frame(
        &self,
        src: &dyn PixelDataObject,
        frame: u32,
        options: EncodeOptions,
        dst: &mut Vec<u8>,
    ) -> EncodeResult<()> {
        let frame_data = native_frame(src, frame)?;

        let compression = match options.effort {
            None => Compression::default(),
            Some(0) | Some(1) => Compression::fast(),
            // map 0..=100 to 0..=9
            Some(e) => Compression::new((e.min(100) / 11) as u32),
        };
        let len_before = dst.len();
        let mut encoder = DeflateEncoder::new(&mut *dst, compression);
        encoder
            .write_all(&frame_data)
            .whatever_context("failed to encode deflated data")?;
        encoder
            .finish()
            .whatever_context("failed to finish deflated data encoding")?;

        if (dst.len() - len_before) % 2 == 1 {
            // add null byte to maintain even length
            dst.push(0);
        }
        Ok(())
    }
}
