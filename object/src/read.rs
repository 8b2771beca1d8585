//! Data set decoding.
//!
//! A [`DataSetReader`] reads a data set from any [`Read`] source
//! in a single forward pass, without ever seeking.
//! Its position in the source is tracked by a [`CountingReader`],
//! so that pixel data may be left in the source
//! and referred to by offset (see [`ReadOptions`]).

use crate::attribute::{Attribute, PixelDataReference, Value};
use crate::dataset::{lookup_private, DataSet};
use crate::pixeldata::PixelFragmentSequence;
use dcmkit_core::header::{DataElementHeader, Header, HasLength, SequenceItemHeader};
use dcmkit_core::value::{PrimitiveValue, C};
use dcmkit_core::{Tag, VR};
use dcmkit_dictionary_std::StandardDataDictionary;
use dcmkit_encoding::decode::{self, decode_value};
use dcmkit_encoding::{ElementDecoder, Endianness, TransferSyntax};
use dcmkit_transfer_syntax_registry::deflate;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};
use tracing::{debug, warn};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not decode data at position {}", position))]
    Decode {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },
    #[snafu(display("Could not read value of {} at position {}", tag, position))]
    ReadValue {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Undefined length for {} with VR {} at position {}", tag, vr, position))]
    UndefinedLength {
        tag: Tag,
        vr: VR,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected {} at position {}", tag, position))]
    UnexpectedDelimiter {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read the sequence inside {}", tag))]
    ReadInnerSequence {
        tag: Tag,
        #[snafu(source(from(Error, Box::new)))]
        source: Box<Error>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Options for reading a data set.
///
/// All options are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ReadOptions {
    /// Leave native pixel data in the source,
    /// recording a [`PixelDataReference`] instead
    pub store_pixel_data_references: bool,
    /// Drop pixel data from the data set
    pub do_not_store_pixel_data: bool,
    /// Accept files without preamble, magic code and file meta group
    pub read_non_part10: bool,
    /// Keep group length elements outside of the file meta group
    pub keep_group_lengths: bool,
    /// Decode explicit `UN` values with the VR known by the dictionary
    pub use_dictionary_for_explicit_un: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_pixel_data_references(mut self, store: bool) -> Self {
        self.store_pixel_data_references = store;
        self
    }

    pub fn do_not_store_pixel_data(mut self, drop: bool) -> Self {
        self.do_not_store_pixel_data = drop;
        self
    }

    pub fn read_non_part10(mut self, read: bool) -> Self {
        self.read_non_part10 = read;
        self
    }

    pub fn keep_group_lengths(mut self, keep: bool) -> Self {
        self.keep_group_lengths = keep;
        self
    }

    pub fn use_dictionary_for_explicit_un(mut self, use_dictionary: bool) -> Self {
        self.use_dictionary_for_explicit_un = use_dictionary;
        self
    }
}

/// A reader adapter which counts the bytes read through it.
#[derive(Debug)]
pub struct CountingReader<R> {
    inner: R,
    position: u64,
}

impl<R> CountingReader<R> {
    /// Wrap a reader whose next byte is at the given absolute position.
    pub fn new(inner: R, position: u64) -> Self {
        CountingReader { inner, position }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> CountingReader<R> {
    /// Discard exactly `len` bytes by reading forward.
    pub fn skip(&mut self, len: u64) -> io::Result<()> {
        let skipped = io::copy(&mut self.by_ref().take(len), &mut io::sink())?;
        if skipped < len {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(())
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}

/// Where the attributes being read come to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    /// The end of the source
    Eof,
    /// An absolute position in the source
    Position(u64),
    /// An item delimitation item
    ItemDelimiter,
}

/// Reads data sets from a byte source.
#[derive(Debug)]
pub struct DataSetReader<R> {
    source: CountingReader<R>,
    decoder: ElementDecoder,
    options: ReadOptions,
}

impl<R> DataSetReader<R>
where
    R: Read,
{
    /// Create a reader for the byte order and VR mode of a transfer syntax,
    /// starting at position 0.
    ///
    /// Deflated sources are not inflated here:
    /// see [`read_dataset`] for that.
    pub fn new(source: R, ts: &TransferSyntax, options: ReadOptions) -> Self {
        Self::with_position(source, ts.decoder(), options, 0)
    }

    /// Create a reader whose source starts at the given absolute position.
    pub fn with_position(
        source: R,
        decoder: ElementDecoder,
        options: ReadOptions,
        position: u64,
    ) -> Self {
        DataSetReader {
            source: CountingReader::new(source, position),
            decoder,
            options,
        }
    }

    pub fn position(&self) -> u64 {
        self.source.position()
    }

    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// Read attributes until the end of the source.
    pub fn read_dataset(&mut self) -> Result<DataSet> {
        self.read_until(End::Eof)
    }

    fn read_until(&mut self, end: End) -> Result<DataSet> {
        let mut ds = DataSet::new();
        loop {
            if let End::Position(end) = end {
                if self.position() >= end {
                    break;
                }
            }
            let position = self.position();
            let header = match self.decoder.decode_header(&mut self.source) {
                Ok((header, _)) => header,
                Err(e) if end == End::Eof && is_eof(&e) => break,
                Err(e) => return Err(e).context(DecodeSnafu { position }),
            };

            match header.tag() {
                Tag::ITEM_DELIMITER if end == End::ItemDelimiter => break,
                Tag::ITEM_DELIMITER => {
                    warn!("Ignoring stray item delimiter at position {}", position);
                    continue;
                }
                Tag::ITEM | Tag::SEQUENCE_DELIMITER => {
                    return UnexpectedDelimiterSnafu {
                        tag: header.tag(),
                        position,
                    }
                    .fail()
                }
                _ => {}
            }

            if let Some(attribute) = self.read_attribute(&ds, header, position)? {
                ds.put(attribute);
            }
        }
        Ok(ds)
    }

    /// Read the value of an attribute whose header was just read.
    /// Returns `None` if the attribute is dropped.
    fn read_attribute(
        &mut self,
        ds: &DataSet,
        header: DataElementHeader,
        position: u64,
    ) -> Result<Option<Attribute>> {
        let tag = header.tag();
        let vr = if self.decoder.is_explicit_vr() {
            header.vr()
        } else {
            dictionary_vr(ds, tag).unwrap_or(VR::UN)
        };

        let len = match header.length().get() {
            Some(len) => len,
            None if tag == Tag::PIXEL_DATA => {
                let fragments = self.read_fragments(tag)?;
                if self.options.do_not_store_pixel_data {
                    return Ok(None);
                }
                return Ok(Some(Attribute::with_value(
                    tag,
                    vr,
                    Value::PixelSequence(fragments),
                )));
            }
            None if vr == VR::SQ || vr == VR::UN => {
                // the contents of undefined length UN are implicit VR little endian
                let decoder = if vr == VR::UN {
                    ElementDecoder::implicit_le()
                } else {
                    self.decoder
                };
                let items = self.with_decoder(decoder, |r| r.read_items(None))?;
                return Ok(Some(sequence_or_null(tag, items)));
            }
            None => return UndefinedLengthSnafu { tag, vr, position }.fail(),
        };

        if vr == VR::SQ {
            let end = self.position() + u64::from(len);
            let items = self.read_items(Some(end))?;
            return Ok(Some(sequence_or_null(tag, items)));
        }

        if tag == Tag::PIXEL_DATA {
            if self.options.do_not_store_pixel_data {
                self.skip(tag, len)?;
                return Ok(None);
            }
            if self.options.store_pixel_data_references && len > 0 {
                let offset = self.position();
                self.skip(tag, len)?;
                return Ok(Some(Attribute::with_value(
                    tag,
                    vr,
                    Value::PixelReference(PixelDataReference {
                        offset,
                        length: len,
                    }),
                )));
            }
        }

        if tag.is_group_length() && tag.group() != 0x0002 && !self.options.keep_group_lengths {
            debug!("Dropping group length {}", tag);
            self.skip(tag, len)?;
            return Ok(None);
        }

        if len == 0 {
            return Ok(Some(Attribute::null(tag, vr)));
        }

        if vr == VR::UN
            && self.decoder.is_explicit_vr()
            && self.options.use_dictionary_for_explicit_un
        {
            if let Some(known) = dictionary_vr(ds, tag).filter(|vr| *vr != VR::UN) {
                return self.read_explicit_un(tag, known, len).map(Some);
            }
        }

        let value = self
            .decoder
            .read_value(&mut self.source, vr, len)
            .context(DecodeSnafu { position })?;
        Ok(Some(Attribute::new(tag, vr, value)))
    }

    /// Re-read an explicit `UN` value with the VR known by the dictionary.
    /// The value bytes are implicit VR little endian.
    fn read_explicit_un(&mut self, tag: Tag, vr: VR, len: u32) -> Result<Attribute> {
        let position = self.position();
        let mut bytes = vec![0; len as usize];
        self.source
            .read_exact(&mut bytes)
            .context(ReadValueSnafu { tag, position })?;

        if vr == VR::SQ {
            let mut inner = DataSetReader::with_position(
                &bytes[..],
                ElementDecoder::implicit_le(),
                self.options,
                position,
            );
            let items = inner
                .read_items(Some(position + u64::from(len)))
                .context(ReadInnerSequenceSnafu { tag })?;
            return Ok(sequence_or_null(tag, items));
        }
        Ok(Attribute::new(
            tag,
            vr,
            decode_value(&bytes, vr, Endianness::Little),
        ))
    }

    /// Read sequence items,
    /// either up to the given end position
    /// or up to a sequence delimitation item.
    fn read_items(&mut self, end: Option<u64>) -> Result<Vec<DataSet>> {
        let mut items = Vec::new();
        loop {
            if let Some(end) = end {
                if self.position() >= end {
                    break;
                }
            }
            let position = self.position();
            let header = self
                .decoder
                .decode_item_header(&mut self.source)
                .context(DecodeSnafu { position })?;
            match header {
                SequenceItemHeader::Item { len } => {
                    let item = match len.get() {
                        Some(len) => {
                            let end = self.position() + u64::from(len);
                            self.read_until(End::Position(end))?
                        }
                        None => self.read_until(End::ItemDelimiter)?,
                    };
                    items.push(item);
                }
                SequenceItemHeader::SequenceDelimiter if end.is_none() => break,
                SequenceItemHeader::SequenceDelimiter | SequenceItemHeader::ItemDelimiter => {
                    warn!("Ignoring stray {} at position {}", header.tag(), position);
                }
            }
        }
        Ok(items)
    }

    /// Read the items of encapsulated pixel data:
    /// the basic offset table, then the fragments.
    fn read_fragments(&mut self, tag: Tag) -> Result<PixelFragmentSequence> {
        let mut offset_table = None;
        let mut fragments = Vec::new();
        loop {
            let position = self.position();
            let header = self
                .decoder
                .decode_item_header(&mut self.source)
                .context(DecodeSnafu { position })?;
            match header {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().ok_or_else(|| {
                        UndefinedLengthSnafu {
                            tag: Tag::ITEM,
                            vr: VR::OB,
                            position,
                        }
                        .build()
                    })?;
                    let mut bytes = vec![0; len as usize];
                    self.source
                        .read_exact(&mut bytes)
                        .context(ReadValueSnafu { tag, position })?;
                    if offset_table.is_none() {
                        let table = match decode_value(&bytes, VR::UL, self.decoder.endianness()) {
                            PrimitiveValue::U32(table) => table,
                            _ => C::new(),
                        };
                        offset_table = Some(table);
                    } else {
                        fragments.push(bytes);
                    }
                }
                SequenceItemHeader::SequenceDelimiter => break,
                SequenceItemHeader::ItemDelimiter => {
                    warn!("Ignoring item delimiter in pixel data at position {}", position);
                }
            }
        }
        Ok(PixelFragmentSequence::new(
            offset_table.unwrap_or_default(),
            fragments,
        ))
    }

    fn skip(&mut self, tag: Tag, len: u32) -> Result<()> {
        let position = self.position();
        self.source
            .skip(u64::from(len))
            .context(ReadValueSnafu { tag, position })
    }

    fn with_decoder<T>(
        &mut self,
        decoder: ElementDecoder,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let saved = std::mem::replace(&mut self.decoder, decoder);
        let out = f(self);
        self.decoder = saved;
        out
    }
}

/// Read a data set in the given transfer syntax,
/// inflating it if the syntax says so.
///
/// Pixel data references are not available in deflated data sets,
/// so pixel data is then always loaded.
pub fn read_dataset<R>(source: R, ts: &TransferSyntax, options: ReadOptions) -> Result<DataSet>
where
    R: Read,
{
    if ts.is_deflated() {
        let options = if options.store_pixel_data_references {
            warn!("Pixel data references are not supported in deflated data sets");
            options.store_pixel_data_references(false)
        } else {
            options
        };
        DataSetReader::new(deflate::adapt_reader(source), ts, options).read_dataset()
    } else {
        DataSetReader::new(source, ts, options).read_dataset()
    }
}

fn is_eof(e: &decode::Error) -> bool {
    matches!(
        e,
        decode::Error::ReadHeaderTag { source, .. } if source.kind() == io::ErrorKind::UnexpectedEof
    )
}

/// The VR of a tag according to the dictionaries,
/// resolving private tags through the creators in the data set.
fn dictionary_vr(ds: &DataSet, tag: Tag) -> Option<VR> {
    StandardDataDictionary::vr_of(tag).or_else(|| lookup_private(ds, tag).map(|e| e.vr))
}

fn sequence_or_null(tag: Tag, items: Vec<DataSet>) -> Attribute {
    if items.is_empty() {
        Attribute::null(tag, VR::SQ)
    } else {
        Attribute::sequence(tag, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_dictionary_std::tags;
    use dcmkit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };
    use matches::assert_matches;

    #[rustfmt::skip]
    const IMPLICIT_SEQUENCE: &[u8] = &[
        // (0040,A043) undefined length
        0x40, 0x00, 0x43, 0xA0, 0xFF, 0xFF, 0xFF, 0xFF,
        // item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        // (0008,0100) SH "AB"
        0x08, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00, 0x00, b'A', b'B',
        // item delimiter
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // (0010,0010) PN "Doe^"
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'D', b'o', b'e', b'^',
    ];

    #[test]
    fn implicit_vr_uses_dictionary() {
        let ds = read_dataset(IMPLICIT_SEQUENCE, &IMPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new())
            .unwrap();
        assert_eq!(ds.len(), 2);
        let seq = ds.get(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap();
        assert_eq!(seq.vr(), VR::SQ);
        let items = seq.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get(tags::CODE_VALUE).unwrap().vr(), VR::SH);
        assert_eq!(items[0].get_str(tags::CODE_VALUE).as_deref(), Some("AB"));
        assert_eq!(ds.get(tags::PATIENT_NAME).unwrap().vr(), VR::PN);
    }

    #[rustfmt::skip]
    const EXPLICIT_UN_SEQUENCE: &[u8] = &[
        // (0040,A043) UN undefined length
        0x40, 0x00, 0x43, 0xA0, b'U', b'N', 0, 0, 0xFF, 0xFF, 0xFF, 0xFF,
        // item, explicit length 10, contents implicit VR
        0xFE, 0xFF, 0x00, 0xE0, 0x0A, 0x00, 0x00, 0x00,
        0x08, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00, 0x00, b'A', b'B',
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn undefined_length_un_is_an_implicit_sequence() {
        let ds = read_dataset(EXPLICIT_UN_SEQUENCE, &EXPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new())
            .unwrap();
        let items = ds.get(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap().items().unwrap();
        assert_eq!(items[0].get_str(tags::CODE_VALUE).as_deref(), Some("AB"));
    }

    #[test]
    fn explicit_un_with_dictionary() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0028,0010) UN length 2
            0x28, 0x00, 0x10, 0x00, b'U', b'N', 0, 0, 0x02, 0x00, 0x00, 0x00, 0x00, 0x02,
        ];
        let ds = read_dataset(data, &EXPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new()).unwrap();
        assert_eq!(ds.get(tags::ROWS).unwrap().vr(), VR::UN);

        let options = ReadOptions::new().use_dictionary_for_explicit_un(true);
        let ds = read_dataset(data, &EXPLICIT_VR_LITTLE_ENDIAN, options).unwrap();
        assert_eq!(ds.get(tags::ROWS).unwrap().vr(), VR::US);
        assert_eq!(ds.get_u16(tags::ROWS), Some(512));
    }

    #[test]
    fn group_lengths_are_dropped_by_default() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0010,0000) UL 12
            0x10, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x0C, 0x00, 0x00, 0x00,
            // (0010,0010) PN "Doe^"
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'D', b'o', b'e', b'^',
        ];
        let ds = read_dataset(data, &EXPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new()).unwrap();
        assert_eq!(ds.len(), 1);
        let ds = read_dataset(
            data,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::new().keep_group_lengths(true),
        )
        .unwrap();
        assert_eq!(ds.get_u32(Tag(0x0010, 0x0000)), Some(12));
    }

    #[test]
    fn zero_length_reads_as_null() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x00, 0x00,
            0x40, 0x00, 0x43, 0xA0, b'S', b'Q', 0, 0, 0x00, 0x00, 0x00, 0x00,
        ];
        let ds = read_dataset(data, &EXPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new()).unwrap();
        assert!(ds.get(tags::PATIENT_NAME).unwrap().is_null());
        assert!(ds.get(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap().is_null());
    }

    #[rustfmt::skip]
    const NATIVE_PIXEL_DATA: &[u8] = &[
        // (0028,0010) US 2
        0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x02, 0x00,
        // (7FE0,0010) OW length 4
        0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0, 0, 0x04, 0x00, 0x00, 0x00, 1, 2, 3, 4,
    ];

    #[test]
    fn pixel_data_references() {
        let options = ReadOptions::new().store_pixel_data_references(true);
        let mut reader = DataSetReader::with_position(
            NATIVE_PIXEL_DATA,
            EXPLICIT_VR_LITTLE_ENDIAN.decoder(),
            options,
            100,
        );
        let ds = reader.read_dataset().unwrap();
        let pixel_data = ds.get(tags::PIXEL_DATA).unwrap();
        assert_eq!(
            pixel_data.pixel_data_reference(),
            Some(PixelDataReference {
                offset: 122,
                length: 4
            })
        );
        assert_eq!(pixel_data.stream_length(), 4);
        assert_eq!(reader.position(), 126);
    }

    #[test]
    fn pixel_data_can_be_dropped() {
        let options = ReadOptions::new().do_not_store_pixel_data(true);
        let ds = read_dataset(NATIVE_PIXEL_DATA, &EXPLICIT_VR_LITTLE_ENDIAN, options).unwrap();
        assert!(!ds.contains(tags::PIXEL_DATA));
        assert_eq!(ds.get_u16(tags::ROWS), Some(2));
    }

    #[test]
    fn encapsulated_pixel_data() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0, 0, 0xFF, 0xFF, 0xFF, 0xFF,
            // offset table with one entry
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0, 0, 0, 0,
            // one fragment
            0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0xAB, 0xCD,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let ds = read_dataset(data, &EXPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new()).unwrap();
        let fragments = ds.get(tags::PIXEL_DATA).unwrap().fragments().unwrap();
        assert_eq!(fragments.offset_table(), &[0]);
        assert_eq!(fragments.fragments(), &[vec![0xAB, 0xCD]]);
    }

    #[test]
    fn truncated_value() {
        let data = &NATIVE_PIXEL_DATA[..NATIVE_PIXEL_DATA.len() - 1];
        assert_matches!(
            read_dataset(data, &EXPLICIT_VR_LITTLE_ENDIAN, ReadOptions::new()),
            Err(Error::Decode { position: 10, .. })
        );
    }
}
