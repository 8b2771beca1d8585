//! Core module for building pixel data codecs.
//!
//! This module contains the core types and traits
//! for consumers and implementers of
//! transfer syntaxes with encapsulated pixel data.
//!
//! Objects holding pixel data implement the [`PixelDataObject`] trait.
//! Transfer syntaxes which define an encapsulated pixel data encoding
//! provide an implementation of [`PixelDataCodec`]
//! to be able to decode and encode imaging data.

use snafu::{OptionExt, Snafu};
use std::borrow::Cow;

/// The possible error conditions when decoding (reading) pixel data.
///
/// Implementers of codecs are recommended to choose
/// the most fitting error variant for the tested condition.
/// When no suitable variant is available,
/// the [`Custom`](DecodeError::Custom) variant may be used.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum DecodeError {
    /// A custom error occurred when decoding,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The input pixel data is not encapsulated.
    NotEncapsulated,

    /// The requested frame is outside the given object's frame range.
    FrameRangeOutOfBounds,

    /// A required attribute is missing
    /// from the object representing the image.
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingAttribute { name: &'static str },
}

/// The possible error conditions when encoding (writing) pixel data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum EncodeError {
    /// A custom error when encoding fails.
    /// Read the `message` and the underlying `source`
    /// for more details.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// Input pixel data is not native, should be decoded first.
    NotNative,

    /// The requested frame is outside the given object's frame range.
    FrameRangeOutOfBounds,

    /// A required attribute is missing
    /// from the object representing the image.
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingAttribute { name: &'static str },
}

/// The result of decoding (reading) pixel data
pub type DecodeResult<T, E = DecodeError> = Result<T, E>;

/// The result of encoding (writing) pixel data
pub type EncodeResult<T, E = EncodeError> = Result<T, E>;

/// An object to be interpreted as pixel data.
///
/// It is defined in this crate so that
/// codec implementers only have to depend on `dcmkit-encoding`.
pub trait PixelDataObject {
    /// Return the object's transfer syntax UID.
    fn transfer_syntax_uid(&self) -> &str;

    /// Return the _Rows_, or `None` if it is not found
    fn rows(&self) -> Option<u16>;

    /// Return the _Columns_, or `None` if it is not found
    fn cols(&self) -> Option<u16>;

    /// Return the _Samples Per Pixel_, or `None` if it is not found
    fn samples_per_pixel(&self) -> Option<u16>;

    /// Return the _Bits Allocated_, or `None` if it is not defined
    fn bits_allocated(&self) -> Option<u16>;

    /// Return the _Bits Stored_, or `None` if it is not defined
    fn bits_stored(&self) -> Option<u16>;

    /// Return the _High Bit_, or `None` if it is not defined
    fn high_bit(&self) -> Option<u16>;

    /// Return the _Number Of Frames_, or `None` if it is not defined
    fn number_of_frames(&self) -> Option<u32>;

    /// Returns the number of fragments, or `None` for native pixel data
    fn number_of_fragments(&self) -> Option<u32>;

    /// Return a specific encoded pixel fragment by index
    /// (where 0 is the first fragment after the basic offset table),
    /// or `None` if no such fragment is available.
    ///
    /// In the case of native (non-encapsulated) pixel data,
    /// the whole data in little endian may be obtained
    /// by requesting fragment number 0.
    fn fragment(&self, fragment: usize) -> Option<Cow<'_, [u8]>>;

    /// Return the object's offset table,
    /// or `None` if no offset table is available.
    fn offset_table(&self) -> Option<Cow<'_, [u32]>>;
}

/// Custom options when encoding pixel data into an encapsulated form.
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct EncodeOptions {
    /// The quality of the output image as a number between 0 and 100,
    /// where 100 is the best quality that the encapsulated form can achieve.
    /// It is ignored if the transfer syntax only supports lossless compression.
    pub quality: Option<u8>,

    /// The amount of effort that the encoder may take to encode the pixel data,
    /// as a number between 0 and 100.
    /// Encoders are not required to support this option.
    pub effort: Option<u8>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn effort(mut self, effort: u8) -> Self {
        self.effort = Some(effort);
        self
    }
}

/// A pixel data codec for one transfer syntax.
///
/// Decoding always produces native pixel data in little endian,
/// appended to the destination.
/// Encoding expects native pixel data
/// and produces one fragment per frame.
pub trait PixelDataCodec: Send + Sync {
    /// The UID of the transfer syntax implemented by this codec.
    fn transfer_syntax(&self) -> &str;

    /// Decode all frames of the given object.
    fn decode(&self, src: &dyn PixelDataObject, dst: &mut Vec<u8>) -> DecodeResult<()> {
        let frames = src.number_of_frames().unwrap_or(1);
        for frame in 0..frames {
            self.decode_frame(src, frame, dst)?;
        }
        Ok(())
    }

    /// Decode a single frame of the given object.
    fn decode_frame(
        &self,
        src: &dyn PixelDataObject,
        frame: u32,
        dst: &mut Vec<u8>,
    ) -> DecodeResult<()>;

    /// Encode every frame of the given object,
    /// pushing one fragment per frame into `dst`.
    fn encode(
        &self,
        src: &dyn PixelDataObject,
        options: EncodeOptions,
        dst: &mut Vec<Vec<u8>>,
    ) -> EncodeResult<()> {
        let frames = src.number_of_frames().unwrap_or(1);
        for frame in 0..frames {
            let mut frame_data = Vec::new();
            self.encode_frame(src, frame, options.clone(), &mut frame_data)?;
            dst.push(frame_data);
        }
        Ok(())
    }

    /// Encode a single frame of the given object,
    /// appending the whole fragment to `dst`.
    fn encode_frame(
        &self,
        src: &dyn PixelDataObject,
        frame: u32,
        options: EncodeOptions,
        dst: &mut Vec<u8>,
    ) -> EncodeResult<()>;
}

/// Obtain the encoded bytes of one frame of encapsulated pixel data.
///
/// Frames map to fragments one to one when the counts match.
/// A single frame takes every fragment.
/// Otherwise the offset table decides which fragments belong to each frame.
pub fn encapsulated_frame<'a>(
    src: &'a dyn PixelDataObject,
    frame: u32,
) -> DecodeResult<Cow<'a, [u8]>> {
    let fragments = src
        .number_of_fragments()
        .context(decode_error::NotEncapsulatedSnafu)?;
    let frames = src.number_of_frames().unwrap_or(1);
    snafu::ensure!(frame < frames, decode_error::FrameRangeOutOfBoundsSnafu);

    if fragments == frames {
        return src
            .fragment(frame as usize)
            .context(decode_error::FrameRangeOutOfBoundsSnafu);
    }

    let fragment_range = if frames == 1 {
        0..fragments as usize
    } else {
        let table = match src.offset_table() {
            Some(table) if table.len() == frames as usize => table,
            _ => snafu::whatever!(
                "Cannot map {} fragments to {} frames without an offset table",
                fragments,
                frames
            ),
        };
        let start = table[frame as usize];
        let end = table.get(frame as usize + 1).copied().unwrap_or(u32::MAX);

        // item offsets are relative to the first fragment item
        let mut first = None;
        let mut last = 0;
        let mut position = 0_u32;
        for i in 0..fragments as usize {
            let len = src
                .fragment(i)
                .map(|f| f.len() as u32)
                .context(decode_error::FrameRangeOutOfBoundsSnafu)?;
            if position >= start && position < end {
                first.get_or_insert(i);
                last = i + 1;
            }
            position += 8 + len;
        }
        let first = first.context(decode_error::FrameRangeOutOfBoundsSnafu)?;
        first..last
    };

    if fragment_range.len() == 1 {
        return src
            .fragment(fragment_range.start)
            .context(decode_error::FrameRangeOutOfBoundsSnafu);
    }
    let mut data = Vec::new();
    for i in fragment_range {
        let fragment = src
            .fragment(i)
            .context(decode_error::FrameRangeOutOfBoundsSnafu)?;
        data.extend_from_slice(&fragment);
    }
    Ok(Cow::Owned(data))
}

/// The number of bytes of one native frame.
pub fn native_frame_len(src: &dyn PixelDataObject) -> EncodeResult<usize> {
    let rows = src
        .rows()
        .context(encode_error::MissingAttributeSnafu { name: "Rows" })?;
    let cols = src
        .cols()
        .context(encode_error::MissingAttributeSnafu { name: "Columns" })?;
    let samples_per_pixel = src
        .samples_per_pixel()
        .context(encode_error::MissingAttributeSnafu {
            name: "SamplesPerPixel",
        })?;
    let bits_allocated = src
        .bits_allocated()
        .context(encode_error::MissingAttributeSnafu {
            name: "BitsAllocated",
        })?;
    Ok(rows as usize * cols as usize * samples_per_pixel as usize * (bits_allocated as usize / 8))
}

/// Obtain the bytes of one frame of native pixel data.
pub fn native_frame<'a>(src: &'a dyn PixelDataObject, frame: u32) -> EncodeResult<Cow<'a, [u8]>> {
    snafu::ensure!(
        src.number_of_fragments().is_none(),
        encode_error::NotNativeSnafu
    );
    let frame_len = native_frame_len(src)?;
    let data = src.fragment(0).context(encode_error::MissingAttributeSnafu {
        name: "PixelData",
    })?;
    let start = frame as usize * frame_len;
    let end = start + frame_len;
    snafu::ensure!(end <= data.len(), encode_error::FrameRangeOutOfBoundsSnafu);
    Ok(match data {
        Cow::Borrowed(data) => Cow::Borrowed(&data[start..end]),
        Cow::Owned(data) => Cow::Owned(data[start..end].to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;

    struct Fragments {
        frames: u32,
        fragments: Vec<Vec<u8>>,
        offset_table: Vec<u32>,
    }

    impl PixelDataObject for Fragments {
        fn transfer_syntax_uid(&self) -> &str {
            "1.2.840.10008.1.2.5"
        }
        fn rows(&self) -> Option<u16> {
            Some(2)
        }
        fn cols(&self) -> Option<u16> {
            Some(2)
        }
        fn samples_per_pixel(&self) -> Option<u16> {
            Some(1)
        }
        fn bits_allocated(&self) -> Option<u16> {
            Some(8)
        }
        fn bits_stored(&self) -> Option<u16> {
            Some(8)
        }
        fn high_bit(&self) -> Option<u16> {
            Some(7)
        }
        fn number_of_frames(&self) -> Option<u32> {
            Some(self.frames)
        }
        fn number_of_fragments(&self) -> Option<u32> {
            Some(self.fragments.len() as u32)
        }
        fn fragment(&self, fragment: usize) -> Option<Cow<'_, [u8]>> {
            self.fragments.get(fragment).map(|f| Cow::Borrowed(&f[..]))
        }
        fn offset_table(&self) -> Option<Cow<'_, [u32]>> {
            if self.offset_table.is_empty() {
                None
            } else {
                Some(Cow::Borrowed(&self.offset_table[..]))
            }
        }
    }

    #[test]
    fn frames_from_offset_table() {
        let obj = Fragments {
            frames: 2,
            fragments: vec![vec![1, 2], vec![3, 4], vec![5, 6, 7, 8]],
            // frame 0: fragments 0 and 1; frame 1: fragment 2
            offset_table: vec![0, 20],
        };
        assert_eq!(&*encapsulated_frame(&obj, 0).unwrap(), &[1, 2, 3, 4]);
        assert_eq!(&*encapsulated_frame(&obj, 1).unwrap(), &[5, 6, 7, 8]);
        assert_matches!(
            encapsulated_frame(&obj, 2),
            Err(DecodeError::FrameRangeOutOfBounds)
        );
    }

    #[test]
    fn single_frame_takes_all_fragments() {
        let obj = Fragments {
            frames: 1,
            fragments: vec![vec![1, 2], vec![3, 4]],
            offset_table: vec![],
        };
        assert_eq!(&*encapsulated_frame(&obj, 0).unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn ambiguous_fragments_without_table() {
        let obj = Fragments {
            frames: 2,
            fragments: vec![vec![1, 2], vec![3, 4], vec![5, 6]],
            offset_table: vec![],
        };
        assert_matches!(
            encapsulated_frame(&obj, 0),
            Err(DecodeError::Custom { .. })
        );
    }

    #[test]
    fn native_frames_require_native_data() {
        let obj = Fragments {
            frames: 1,
            fragments: vec![vec![1, 2, 3, 4]],
            offset_table: vec![],
        };
        assert_matches!(native_frame(&obj, 0), Err(EncodeError::NotNative));
        assert_eq!(native_frame_len(&obj).unwrap(), 4);
    }
}
