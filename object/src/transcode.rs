//! Changing the transfer syntax of a data set.
//!
//! Only the pixel data depends on the transfer syntax
//! once a data set is in memory.
//! Between two native syntaxes nothing needs to change,
//! while encapsulated syntaxes go through their registered codecs.
//! Two encapsulated syntaxes are always bridged through native pixel data.

use crate::attribute::{Attribute, Value};
use crate::dataset::DataSet;
use crate::pixeldata::{self, ImagePixelDescription, PixelDataSource, PixelFragmentSequence};
use crate::ReadError;
use dcmkit_core::value::{PrimitiveValue, C};
use dcmkit_core::{Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::adapters::{DecodeError, EncodeError, EncodeOptions, PixelDataCodec};
use dcmkit_encoding::pixel::{self, right_align, zero_unused_bits};
use dcmkit_encoding::TransferSyntax;
use dcmkit_transfer_syntax_registry::CodecRegistry;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No codec registered for transfer syntax {}", uid))]
    MissingCodec { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not decode pixel data from {}", uid))]
    Decode {
        uid: String,
        source: DecodeError,
    },
    #[snafu(display("Could not encode pixel data into {}", uid))]
    Encode {
        uid: String,
        source: EncodeError,
    },
    #[snafu(display("Could not describe the pixel data"))]
    PixelDescription {
        #[snafu(backtrace)]
        source: pixeldata::Error,
    },
    #[snafu(display("Could not align pixel samples"))]
    PixelAlignment {
        #[snafu(backtrace)]
        source: pixel::Error,
    },
    #[snafu(display("Pixel data of {} was not loaded from its source", tag))]
    UnresolvedPixelDataReference { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Pixel data of {} is neither native nor encapsulated", tag))]
    UnexpectedPixelData { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Could not load pixel data from the backing file"))]
    LoadPixelData {
        #[snafu(source(from(ReadError, Box::new)))]
        source: Box<ReadError>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Create a copy of a data set whose pixel data is encoded in `to`,
/// given that it is currently encoded in `from`.
///
/// The input data set is never modified,
/// so a failure leaves it as it was.
pub fn change_transfer_syntax(
    ds: &DataSet,
    from: &TransferSyntax,
    to: &TransferSyntax,
) -> Result<DataSet> {
    let pixel_data = match ds.get(tags::PIXEL_DATA) {
        Some(a) if !a.is_empty() && !a.is_null() => a,
        _ => return Ok(ds.clone()),
    };
    if let Value::PixelReference(_) = pixel_data.value() {
        return UnresolvedPixelDataReferenceSnafu {
            tag: tags::PIXEL_DATA,
        }
        .fail();
    }
    if from == to {
        return Ok(ds.clone());
    }

    match (from.is_encapsulated(), to.is_encapsulated()) {
        (false, false) => Ok(ds.clone()),
        (false, true) => {
            debug!("Encoding pixel data into {}", to.uid());
            encode(ds, to)
        }
        (true, false) => {
            debug!("Decoding pixel data from {}", from.uid());
            decode(ds, from)
        }
        (true, true) => {
            debug!(
                "Transcoding pixel data from {} to {} through native",
                from.uid(),
                to.uid()
            );
            let native = decode(ds, from)?;
            encode(&native, to)
        }
    }
}

fn codec(ts: &TransferSyntax) -> Result<Arc<dyn PixelDataCodec>> {
    CodecRegistry::get(ts.uid()).context(MissingCodecSnafu { uid: ts.uid() })
}

/// Encapsulated pixel data to native.
fn decode(ds: &DataSet, from: &TransferSyntax) -> Result<DataSet> {
    let codec = codec(from)?;
    let desc = ImagePixelDescription::from_dataset(ds).context(PixelDescriptionSnafu)?;
    let fragments = ds
        .get(tags::PIXEL_DATA)
        .and_then(Attribute::fragments)
        .context(UnexpectedPixelDataSnafu {
            tag: tags::PIXEL_DATA,
        })?;

    let mut native = Vec::with_capacity(desc.total_length());
    codec
        .decode(
            &PixelDataSource::encapsulated(from.uid(), &desc, fragments),
            &mut native,
        )
        .context(DecodeSnafu { uid: from.uid() })?;

    let mut out = ds.clone();
    let pixel_data = if desc.bits_allocated > 8 {
        let words: C<u16> = native
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        Attribute::new(tags::PIXEL_DATA, VR::OW, PrimitiveValue::U16(words))
    } else {
        Attribute::new(tags::PIXEL_DATA, VR::OB, PrimitiveValue::U8(native.into()))
    };
    out.put(pixel_data);
    if desc.samples_per_pixel > 1 {
        // decoders produce interleaved samples
        out.put_u16(tags::PLANAR_CONFIGURATION, VR::US, 0);
    }
    Ok(out)
}

/// Native pixel data to encapsulated.
fn encode(ds: &DataSet, to: &TransferSyntax) -> Result<DataSet> {
    let codec = codec(to)?;
    let mut desc = ImagePixelDescription::from_dataset(ds).context(PixelDescriptionSnafu)?;
    let pixel_data = ds.get(tags::PIXEL_DATA).context(UnexpectedPixelDataSnafu {
        tag: tags::PIXEL_DATA,
    })?;
    let mut native = match pixel_data.primitive() {
        Some(v) => v.to_bytes().into_owned(),
        None => {
            return UnexpectedPixelDataSnafu {
                tag: tags::PIXEL_DATA,
            }
            .fail()
        }
    };

    if desc.bits_stored < desc.bits_allocated {
        zero_unused_bits(
            &mut native,
            desc.bits_allocated,
            desc.bits_stored,
            desc.high_bit,
        )
        .context(PixelAlignmentSnafu)?;
        right_align(
            &mut native,
            desc.bits_allocated,
            desc.bits_stored,
            desc.high_bit,
        )
        .context(PixelAlignmentSnafu)?;
        desc.high_bit = desc.bits_stored - 1;
    }

    let mut frames = Vec::new();
    codec
        .encode(
            &PixelDataSource::native(to.uid(), &desc, &native[..]),
            EncodeOptions::new(),
            &mut frames,
        )
        .context(EncodeSnafu { uid: to.uid() })?;

    let mut out = ds.clone();
    out.put(Attribute::pixel_sequence(
        tags::PIXEL_DATA,
        PixelFragmentSequence::from_frames(frames, true),
    ));
    if ds.get_u16(tags::HIGH_BIT) != Some(desc.high_bit) {
        out.put_u16(tags::HIGH_BIT, VR::US, desc.high_bit);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, RLE_LOSSLESS,
    };
    use dcmkit_transfer_syntax_registry::register_rle_lossless;
    use matches::assert_matches;

    fn image(bits_stored: u16, high_bit: u16, samples: Vec<u16>) -> DataSet {
        let mut ds = DataSet::new();
        ds.put_u16(tags::ROWS, VR::US, 2);
        ds.put_u16(tags::COLUMNS, VR::US, 2);
        ds.put_u16(tags::BITS_ALLOCATED, VR::US, 16);
        ds.put_u16(tags::BITS_STORED, VR::US, bits_stored);
        ds.put_u16(tags::HIGH_BIT, VR::US, high_bit);
        ds.put_u16(tags::PIXEL_REPRESENTATION, VR::US, 0);
        ds.put_u16(tags::SAMPLES_PER_PIXEL, VR::US, 1);
        ds.put_str(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2");
        ds.put(Attribute::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(samples.into()),
        ));
        ds
    }

    #[test]
    fn native_to_native_is_a_copy() {
        let ds = image(16, 15, vec![1, 2, 3, 4]);
        let out =
            change_transfer_syntax(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, &EXPLICIT_VR_BIG_ENDIAN)
                .unwrap();
        assert_eq!(out, ds);
    }

    #[test]
    fn rle_round_trip() {
        register_rle_lossless();
        let ds = image(16, 15, vec![0x0102, 0x0304, 0xFFFF, 0]);
        let rle = change_transfer_syntax(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, &RLE_LOSSLESS).unwrap();
        let fragments = rle.get(tags::PIXEL_DATA).unwrap().fragments().unwrap();
        assert_eq!(fragments.fragments().len(), 1);
        assert_eq!(fragments.offset_table(), &[0]);

        let back = change_transfer_syntax(&rle, &RLE_LOSSLESS, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn high_bit_follows_right_alignment() {
        register_rle_lossless();
        // 12 bits stored in the upper bits of each sample
        let ds = image(12, 15, vec![0x1230, 0xFFF0, 0x0010, 0x000F]);
        let rle = change_transfer_syntax(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, &RLE_LOSSLESS).unwrap();
        assert_eq!(rle.get_u16(tags::HIGH_BIT), Some(11));
        let back = change_transfer_syntax(&rle, &RLE_LOSSLESS, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            back.get(tags::PIXEL_DATA).unwrap().to_bytes().unwrap().as_ref(),
            &[0x23, 0x01, 0xFF, 0x0F, 0x01, 0x00, 0x00, 0x00]
        );
        // the input is left as it was
        assert_eq!(ds.get_u16(tags::HIGH_BIT), Some(15));
    }

    #[test]
    fn unresolved_reference() {
        let mut ds = image(16, 15, vec![0; 4]);
        ds.get_mut(tags::PIXEL_DATA)
            .unwrap()
            .replace_value(Value::PixelReference(crate::PixelDataReference {
                offset: 200,
                length: 8,
            }));
        assert_matches!(
            change_transfer_syntax(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, &RLE_LOSSLESS),
            Err(Error::UnresolvedPixelDataReference { .. })
        );
    }

    #[test]
    fn missing_codec() {
        let ds = image(16, 15, vec![0; 4]);
        let unknown = TransferSyntax::new_encapsulated("1.2.3.4.5.6", "Unknown");
        assert_matches!(
            change_transfer_syntax(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, &unknown),
            Err(Error::MissingCodec { .. })
        );
    }
}
