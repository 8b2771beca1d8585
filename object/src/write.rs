//! Data set encoding.
//!
//! A [`DataSetWriter`] serializes a [`DataSet`] in the byte order and VR mode
//! of a transfer syntax, in ascending tag order.
//! Empty attributes are not written,
//! and null attributes are written with a zero length.
//! Whether sequences and their items carry an explicit length
//! or are closed by delimitation items is chosen with [`WriteOptions`].

use crate::attribute::{Attribute, Value};
use crate::dataset::DataSet;
use crate::pixeldata::PixelFragmentSequence;
use byteordered::ByteOrdered;
use dcmkit_core::header::{DataElementHeader, Length};
use dcmkit_core::{Tag, VR};
use dcmkit_encoding::encode::{self, encoded_len};
use dcmkit_encoding::{ElementEncoder, TransferSyntax};
use dcmkit_transfer_syntax_registry::deflate;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::convert::TryFrom;
use std::io::{self, Write};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write attribute {}", tag))]
    WriteAttribute {
        tag: Tag,
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not write pixel data fragments of {}", tag))]
    WriteFragments {
        tag: Tag,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Pixel data of {} was not loaded from its source", tag))]
    UnresolvedPixelDataReference { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Value of {} is too long for a 32-bit length", tag))]
    ValueTooLong { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Could not finish the deflated stream"))]
    FinishDeflate {
        backtrace: Backtrace,
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Options for writing a data set.
///
/// By default, sequences and items are written with explicit lengths
/// and the basic offset table of encapsulated pixel data is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct WriteOptions {
    /// Write sequence lengths up front,
    /// instead of an undefined length and a sequence delimitation item
    pub explicit_length_sequence: bool,
    /// Write item lengths up front,
    /// instead of an undefined length and an item delimitation item
    pub explicit_length_sequence_item: bool,
    /// Write the basic offset table of encapsulated pixel data,
    /// when offsets are available
    pub write_fragment_offset_table: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            explicit_length_sequence: true,
            explicit_length_sequence_item: true,
            write_fragment_offset_table: true,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn explicit_length_sequence(mut self, explicit: bool) -> Self {
        self.explicit_length_sequence = explicit;
        self
    }

    pub fn explicit_length_sequence_item(mut self, explicit: bool) -> Self {
        self.explicit_length_sequence_item = explicit;
        self
    }

    pub fn write_fragment_offset_table(mut self, write: bool) -> Self {
        self.write_fragment_offset_table = write;
        self
    }
}

/// Writes data sets to a byte sink.
#[derive(Debug)]
pub struct DataSetWriter<W> {
    to: W,
    encoder: ElementEncoder,
    options: WriteOptions,
}

impl<W> DataSetWriter<W>
where
    W: Write,
{
    /// Create a writer for the byte order and VR mode of a transfer syntax.
    ///
    /// Deflate compression is not applied here:
    /// see [`write_dataset`] for that.
    pub fn new(to: W, ts: &TransferSyntax, options: WriteOptions) -> Self {
        Self::with_encoder(to, ts.encoder(), options)
    }

    pub fn with_encoder(to: W, encoder: ElementEncoder, options: WriteOptions) -> Self {
        DataSetWriter {
            to,
            encoder,
            options,
        }
    }

    pub fn into_inner(self) -> W {
        self.to
    }

    /// Write all attributes of a data set.
    pub fn write_dataset(&mut self, ds: &DataSet) -> Result<()> {
        for attribute in ds.iter().filter(|a| !a.is_empty()) {
            self.write_attribute(attribute)?;
        }
        Ok(())
    }

    fn write_attribute(&mut self, attribute: &Attribute) -> Result<()> {
        let tag = attribute.tag();
        let vr = attribute.vr();
        match attribute.value() {
            Value::Empty => Ok(()),
            Value::Null => self.write_header(tag, vr, Length(0)),
            Value::Sequence(items) if items.is_empty() => {
                self.write_header(tag, VR::SQ, Length(0))
            }
            Value::Primitive(value) => {
                self.write_header(tag, vr, Length(encoded_len(vr, value)))?;
                self.encoder
                    .encode_primitive(&mut self.to, vr, value)
                    .context(WriteAttributeSnafu { tag })?;
                Ok(())
            }
            Value::Sequence(items) => {
                let len = if self.options.explicit_length_sequence {
                    let len = value_length_u64(attribute, &self.encoder, &self.options);
                    Length(defined_length(tag, len)?)
                } else {
                    Length::UNDEFINED
                };
                self.write_header(tag, VR::SQ, len)?;
                for item in items {
                    self.write_item(tag, item)?;
                }
                if len.is_undefined() {
                    self.encoder
                        .encode_sequence_delimiter(&mut self.to)
                        .context(WriteAttributeSnafu { tag })?;
                }
                Ok(())
            }
            Value::PixelSequence(seq) => self.write_fragments(tag, vr, seq),
            Value::PixelReference(_) => UnresolvedPixelDataReferenceSnafu { tag }.fail(),
        }
    }

    fn write_header(&mut self, tag: Tag, vr: VR, len: Length) -> Result<()> {
        self.encoder
            .encode_element_header(&mut self.to, DataElementHeader::new(tag, vr, len))
            .context(WriteAttributeSnafu { tag })?;
        Ok(())
    }

    fn write_item(&mut self, tag: Tag, item: &DataSet) -> Result<()> {
        if self.options.explicit_length_sequence_item {
            let len = defined_length(tag, dataset_length(item, &self.encoder, &self.options))?;
            self.encoder
                .encode_item_header(&mut self.to, len)
                .context(WriteAttributeSnafu { tag })?;
            self.write_dataset(item)
        } else {
            self.encoder
                .encode_item_header(&mut self.to, Length::UNDEFINED.0)
                .context(WriteAttributeSnafu { tag })?;
            self.write_dataset(item)?;
            self.encoder
                .encode_item_delimiter(&mut self.to)
                .context(WriteAttributeSnafu { tag })
        }
    }

    fn write_fragments(&mut self, tag: Tag, vr: VR, seq: &PixelFragmentSequence) -> Result<()> {
        let vr = if vr == VR::OW { VR::OW } else { VR::OB };
        self.write_header(tag, vr, Length::UNDEFINED)?;

        let table: &[u32] = if self.options.write_fragment_offset_table {
            seq.offset_table()
        } else {
            &[]
        };
        self.encoder
            .encode_item_header(&mut self.to, table.len() as u32 * 4)
            .context(WriteAttributeSnafu { tag })?;
        let mut to = ByteOrdered::runtime(&mut self.to, self.encoder.endianness());
        for offset in table {
            to.write_u32(*offset).context(WriteFragmentsSnafu { tag })?;
        }

        for fragment in seq.fragments() {
            ensure!(fragment.len() < u32::MAX as usize, ValueTooLongSnafu { tag });
            self.encoder
                .encode_item_header(&mut self.to, fragment.len() as u32)
                .context(WriteAttributeSnafu { tag })?;
            self.to
                .write_all(fragment)
                .context(WriteFragmentsSnafu { tag })?;
        }
        self.encoder
            .encode_sequence_delimiter(&mut self.to)
            .context(WriteAttributeSnafu { tag })
    }
}

/// Narrow a length to 32 bits, short of the undefined length marker.
fn defined_length(tag: Tag, len: u64) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|l| *l != u32::MAX)
        .ok_or_else(|| ValueTooLongSnafu { tag }.build())
}

/// Write a data set in the given transfer syntax,
/// deflating it if the syntax says so.
pub fn write_dataset<W>(
    to: W,
    ds: &DataSet,
    ts: &TransferSyntax,
    options: WriteOptions,
) -> Result<()>
where
    W: Write,
{
    if ts.is_deflated() {
        let mut writer = DataSetWriter::new(deflate::adapt_writer(to), ts, options);
        writer.write_dataset(ds)?;
        writer.into_inner().finish().context(FinishDeflateSnafu)?;
        Ok(())
    } else {
        DataSetWriter::new(to, ts, options).write_dataset(ds)
    }
}

/// The number of bytes of a data set once encoded.
pub(crate) fn dataset_length(
    ds: &DataSet,
    encoder: &ElementEncoder,
    options: &WriteOptions,
) -> u64 {
    ds.iter()
        .filter(|a| !a.is_empty())
        .map(|a| {
            let vr = match a.value() {
                Value::Sequence(_) => VR::SQ,
                _ => a.vr(),
            };
            u64::from(encoder.header_len(vr)) + value_length_u64(a, encoder, options)
        })
        .sum()
}

/// The even-padded number of bytes of an attribute's value once encoded,
/// saturated to `u32::MAX`.
pub(crate) fn value_length(
    attribute: &Attribute,
    encoder: &ElementEncoder,
    options: &WriteOptions,
) -> u32 {
    u32::try_from(value_length_u64(attribute, encoder, options)).unwrap_or(u32::MAX)
}

fn value_length_u64(
    attribute: &Attribute,
    encoder: &ElementEncoder,
    options: &WriteOptions,
) -> u64 {
    match attribute.value() {
        Value::Empty | Value::Null => 0,
        Value::Primitive(v) => u64::from(encoded_len(attribute.vr(), v)),
        Value::Sequence(items) if items.is_empty() => 0,
        Value::Sequence(items) => {
            let items_len: u64 = items
                .iter()
                .map(|item| {
                    let delimiter = if options.explicit_length_sequence_item { 0 } else { 8 };
                    8 + dataset_length(item, encoder, options) + delimiter
                })
                .sum();
            let delimiter = if options.explicit_length_sequence { 0 } else { 8 };
            items_len + delimiter
        }
        Value::PixelSequence(seq) => {
            let table = if options.write_fragment_offset_table {
                seq.offset_table().len() as u64 * 4
            } else {
                0
            };
            let fragments: u64 = seq.fragments().iter().map(|f| 8 + f.len() as u64).sum();
            8 + table + fragments + 8
        }
        Value::PixelReference(r) => u64::from(r.length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::value::{PrimitiveValue, C};
    use dcmkit_dictionary_std::tags;
    use matches::assert_matches;
    use dcmkit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };

    fn write(ds: &DataSet, ts: &TransferSyntax, options: WriteOptions) -> Vec<u8> {
        let mut out = Vec::new();
        write_dataset(&mut out, ds, ts, options).unwrap();
        out
    }

    #[test]
    fn explicit_le_primitives() {
        let mut ds = DataSet::new();
        ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^Jane^");
        ds.put_u16(tags::ROWS, VR::US, 0x0102);
        let out = write(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default());
        assert_eq!(
            out,
            vec![
                0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x0A, 0x00,
                b'D', b'o', b'e', b'^', b'J', b'a', b'n', b'e', b'^', b' ',
                0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x02, 0x01,
            ]
        );
    }

    #[test]
    fn empty_is_skipped_and_null_has_zero_length() {
        let mut ds = DataSet::new();
        ds.attribute_mut(tags::PATIENT_NAME);
        ds.put(Attribute::null(tags::PATIENT_ID, VR::LO));
        let out = write(&ds, &IMPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default());
        assert_eq!(out, vec![0x10, 0x00, 0x20, 0x00, 0, 0, 0, 0]);
    }

    #[test]
    fn sequence_lengths() {
        let mut item = DataSet::new();
        item.put_str(tags::CODE_VALUE, VR::SH, "AB");
        let mut ds = DataSet::new();
        ds.put(Attribute::sequence(
            tags::CONCEPT_NAME_CODE_SEQUENCE,
            vec![item],
        ));

        let explicit = write(&ds, &IMPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default());
        // header 8 + item header 8 + element 10
        assert_eq!(explicit.len(), 26);
        assert_eq!(&explicit[4..8], &18_u32.to_le_bytes());
        assert_eq!(&explicit[12..16], &10_u32.to_le_bytes());

        let undefined = write(
            &ds,
            &IMPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::new()
                .explicit_length_sequence(false)
                .explicit_length_sequence_item(false),
        );
        assert_eq!(undefined.len(), 42);
        assert_eq!(&undefined[4..8], &[0xFF; 4]);
        assert_eq!(&undefined[12..16], &[0xFF; 4]);
        assert_eq!(&undefined[34..38], &[0xFE, 0xFF, 0xDD, 0xE0]);
    }

    #[test]
    fn fragments_with_and_without_offset_table() {
        let mut ds = DataSet::new();
        ds.put(Attribute::pixel_sequence(
            tags::PIXEL_DATA,
            PixelFragmentSequence::from_frames(vec![vec![1, 2], vec![3, 4, 5]], true),
        ));
        let with_table = write(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default());
        // header 12, table item 8 + 8, fragments 10 + 12, delimiter 8
        assert_eq!(with_table.len(), 58);
        assert_eq!(&with_table[16..20], &8_u32.to_le_bytes());
        assert_eq!(&with_table[24..28], &10_u32.to_le_bytes());
        assert_eq!(
            u64::from(ds.get(tags::PIXEL_DATA).unwrap().stream_length()),
            with_table.len() as u64 - 12
        );

        let without = write(
            &ds,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::new().write_fragment_offset_table(false),
        );
        assert_eq!(without.len(), 50);
        assert_eq!(&without[16..20], &0_u32.to_le_bytes());
    }

    #[test]
    fn unresolved_references_are_not_written() {
        let mut ds = DataSet::new();
        ds.put(Attribute::with_value(
            tags::PIXEL_DATA,
            VR::OW,
            Value::PixelReference(crate::attribute::PixelDataReference {
                offset: 0,
                length: 4,
            }),
        ));
        let mut out = Vec::new();
        let result = write_dataset(
            &mut out,
            &ds,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::default(),
        );
        assert_matches!(result, Err(Error::UnresolvedPixelDataReference { .. }));
    }

    #[test]
    fn binary_values_in_big_endian() {
        let mut ds = DataSet::new();
        ds.put(Attribute::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(C::from_slice(&[0x0102])),
        ));
        let out = write(
            &ds,
            &EXPLICIT_VR_BIG_ENDIAN,
            WriteOptions::default(),
        );
        assert_eq!(
            out,
            vec![0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0, 0, 0, 0, 0, 2, 0x01, 0x02]
        );
    }
}
