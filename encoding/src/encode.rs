//! This module contains all DICOM data element encoding logic.
//!
//! [`ElementEncoder`] is the counterpart of
//! [`ElementDecoder`](crate::decode::ElementDecoder),
//! writing headers, item markers and primitive values
//! in the byte order and VR mode of a transfer syntax.

use byteordered::{ByteOrdered, Endianness};
use dcmkit_core::header::{DataElementHeader, Header, HasLength};
use dcmkit_core::value::PrimitiveValue;
use dcmkit_core::{Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

/// Module-level error type:
/// for errors which may occur while encoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write element header"))]
    WriteHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write sequence delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write value"))]
    WriteValue {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Length {} of {} does not fit in a 16-bit length field for VR {}", len, tag, vr))]
    LengthOverflow {
        tag: Tag,
        vr: VR,
        len: u32,
        backtrace: Backtrace,
    },
    #[snafu(display("Value of type {} cannot be encoded with VR {}", value_type, vr))]
    IncompatibleValue {
        value_type: dcmkit_core::value::ValueType,
        vr: VR,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A data element encoder,
/// parameterized at run-time by byte order and VR mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementEncoder {
    endianness: Endianness,
    explicit_vr: bool,
}

impl ElementEncoder {
    pub fn new(endianness: Endianness, explicit_vr: bool) -> Self {
        ElementEncoder {
            endianness,
            explicit_vr,
        }
    }

    /// The encoder for the file meta group (explicit VR little endian).
    pub fn file_header() -> Self {
        Self::new(Endianness::Little, true)
    }

    /// The encoder for DIMSE command sets (implicit VR little endian).
    pub fn implicit_le() -> Self {
        Self::new(Endianness::Little, false)
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// The number of bytes taken by the header of an element with this VR.
    pub fn header_len(&self, vr: VR) -> u32 {
        if self.explicit_vr && vr.has_long_explicit_length() {
            12
        } else {
            8
        }
    }

    /// Encode and write a DICOM attribute tag.
    pub fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        to.write_u16(tag.group()).context(WriteTagSnafu)?;
        to.write_u16(tag.element()).context(WriteTagSnafu)?;
        Ok(())
    }

    /// Encode and write a data element header.
    /// Returns the number of bytes written.
    pub fn encode_element_header<W>(&self, to: W, header: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        let tag = header.tag();
        let len = header.length().0;
        to.write_u16(tag.group()).context(WriteHeaderSnafu)?;
        to.write_u16(tag.element()).context(WriteHeaderSnafu)?;

        if !self.explicit_vr {
            to.write_u32(len).context(WriteHeaderSnafu)?;
            return Ok(8);
        }

        let vr = header.vr();
        to.write_all(&vr.to_bytes()).context(WriteHeaderSnafu)?;
        if vr.has_long_explicit_length() {
            to.write_all(&[0, 0]).context(WriteHeaderSnafu)?;
            to.write_u32(len).context(WriteHeaderSnafu)?;
            Ok(12)
        } else {
            snafu::ensure!(len <= 0xFFFF, LengthOverflowSnafu { tag, vr, len });
            to.write_u16(len as u16).context(WriteHeaderSnafu)?;
            Ok(8)
        }
    }

    /// Encode and write a sequence item header with the given length,
    /// which may be undefined (`0xFFFF_FFFF`).
    pub fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        to.write_u16(0xFFFE).context(WriteItemHeaderSnafu)?;
        to.write_u16(0xE000).context(WriteItemHeaderSnafu)?;
        to.write_u32(len).context(WriteItemHeaderSnafu)?;
        Ok(())
    }

    /// Encode and write an item delimitation item.
    pub fn encode_item_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        to.write_u16(0xFFFE).context(WriteItemDelimiterSnafu)?;
        to.write_u16(0xE00D).context(WriteItemDelimiterSnafu)?;
        to.write_u32(0).context(WriteItemDelimiterSnafu)?;
        Ok(())
    }

    /// Encode and write a sequence delimitation item.
    pub fn encode_sequence_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        to.write_u16(0xFFFE).context(WriteSequenceDelimiterSnafu)?;
        to.write_u16(0xE0DD).context(WriteSequenceDelimiterSnafu)?;
        to.write_u32(0).context(WriteSequenceDelimiterSnafu)?;
        Ok(())
    }

    /// Encode and write a primitive value as the given VR,
    /// padded to an even length.
    /// Returns the number of bytes written,
    /// which is always equal to [`encoded_len`].
    pub fn encode_primitive<W>(&self, to: W, vr: VR, value: &PrimitiveValue) -> Result<usize>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        let mut written = 0;

        if vr.is_text() {
            let text = value.to_str();
            to.write_all(text.as_bytes()).context(WriteValueSnafu)?;
            written += text.len();
        } else {
            use PrimitiveValue::*;
            match value {
                Strs(_) => {
                    return IncompatibleValueSnafu {
                        value_type: value.value_type(),
                        vr,
                    }
                    .fail()
                }
                Tags(c) => {
                    for t in c {
                        to.write_u16(t.group()).context(WriteValueSnafu)?;
                        to.write_u16(t.element()).context(WriteValueSnafu)?;
                    }
                }
                U8(c) => to.write_all(c).context(WriteValueSnafu)?,
                I16(c) => {
                    for v in c {
                        to.write_i16(*v).context(WriteValueSnafu)?;
                    }
                }
                U16(c) => {
                    for v in c {
                        to.write_u16(*v).context(WriteValueSnafu)?;
                    }
                }
                I32(c) => {
                    for v in c {
                        to.write_i32(*v).context(WriteValueSnafu)?;
                    }
                }
                U32(c) => {
                    for v in c {
                        to.write_u32(*v).context(WriteValueSnafu)?;
                    }
                }
                I64(c) => {
                    for v in c {
                        to.write_i64(*v).context(WriteValueSnafu)?;
                    }
                }
                U64(c) => {
                    for v in c {
                        to.write_u64(*v).context(WriteValueSnafu)?;
                    }
                }
                F32(c) => {
                    for v in c {
                        to.write_f32(*v).context(WriteValueSnafu)?;
                    }
                }
                F64(c) => {
                    for v in c {
                        to.write_f64(*v).context(WriteValueSnafu)?;
                    }
                }
            }
            written += value.calculate_byte_len();
        }

        if written % 2 == 1 {
            to.write_all(&[vr.padding_byte()]).context(WriteValueSnafu)?;
            written += 1;
        }
        Ok(written)
    }
}

/// The even-padded number of bytes that a primitive value
/// takes when encoded with the given VR.
pub fn encoded_len(vr: VR, value: &PrimitiveValue) -> u32 {
    let len = if vr.is_text() {
        value.to_str().len()
    } else {
        value.calculate_byte_len()
    };
    ((len + 1) & !1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ElementDecoder;
    use dcmkit_core::header::Length;
    use dcmkit_core::value::C;
    use matches::assert_matches;
    use rstest::rstest;

    #[test]
    fn encode_explicit_le_headers() {
        let enc = ElementEncoder::new(Endianness::Little, true);
        let mut out = Vec::new();
        let n = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8)),
            )
            .unwrap();
        assert_eq!(n, 8);
        assert_eq!(&out, &[0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00]);

        out.clear();
        let n = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag::PIXEL_DATA, VR::OB, Length::UNDEFINED),
            )
            .unwrap();
        assert_eq!(n, 12);
        assert_eq!(
            &out,
            &[0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[rstest]
    #[case(Endianness::Little, true, VR::OB, 12)]
    #[case(Endianness::Little, true, VR::SQ, 12)]
    #[case(Endianness::Little, true, VR::UT, 12)]
    #[case(Endianness::Little, true, VR::US, 8)]
    #[case(Endianness::Big, true, VR::UN, 12)]
    #[case(Endianness::Big, true, VR::DS, 8)]
    #[case(Endianness::Little, false, VR::OB, 8)]
    #[case(Endianness::Little, false, VR::SQ, 8)]
    fn header_size_depends_on_vr_form(
        #[case] endianness: Endianness,
        #[case] explicit_vr: bool,
        #[case] vr: VR,
        #[case] expected: u32,
    ) {
        let enc = ElementEncoder::new(endianness, explicit_vr);
        assert_eq!(enc.header_len(vr), expected);

        let mut out = Vec::new();
        let n = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0009, 0x0010), vr, Length(4)),
            )
            .unwrap();
        assert_eq!(n as u32, expected);
        assert_eq!(out.len(), n);
    }

    #[test]
    fn encode_big_endian_item_markers() {
        let enc = ElementEncoder::new(Endianness::Big, true);
        let mut out = Vec::new();
        enc.encode_item_header(&mut out, 10).unwrap();
        enc.encode_item_delimiter(&mut out).unwrap();
        enc.encode_sequence_delimiter(&mut out).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xFF, 0xFE, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x0A,
            0xFF, 0xFE, 0xE0, 0x0D, 0x00, 0x00, 0x00, 0x00,
            0xFF, 0xFE, 0xE0, 0xDD, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(&out[..], expected);
    }

    #[test]
    fn short_length_overflow() {
        let enc = ElementEncoder::file_header();
        let res = enc.encode_element_header(
            Vec::new(),
            DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(0x1_0000)),
        );
        assert_matches!(res, Err(Error::LengthOverflow { .. }));
    }

    #[test]
    fn text_padding() {
        let enc = ElementEncoder::implicit_le();
        let mut out = Vec::new();
        let n = enc
            .encode_primitive(&mut out, VR::UI, &PrimitiveValue::from("1.2.3"))
            .unwrap();
        assert_eq!(n, 6);
        assert_eq!(&out, b"1.2.3\0");
        assert_eq!(encoded_len(VR::UI, &PrimitiveValue::from("1.2.3")), 6);

        out.clear();
        let value = PrimitiveValue::Strs(C::from_vec(vec!["DERIVED".into(), "AXIAL".into()]));
        let n = enc.encode_primitive(&mut out, VR::CS, &value).unwrap();
        assert_eq!(n, 14);
        assert_eq!(&out, b"DERIVED\\AXIAL ");
    }

    #[test]
    fn numbers_follow_byte_order() {
        let value = PrimitiveValue::U16(C::from_slice(&[1, 0x0203]));
        let mut out = Vec::new();
        ElementEncoder::new(Endianness::Big, true)
            .encode_primitive(&mut out, VR::US, &value)
            .unwrap();
        assert_eq!(&out, &[0x00, 0x01, 0x02, 0x03]);

        // decoding in the same byte order gives the value back
        let decoded = ElementDecoder::new(Endianness::Big, true)
            .read_value(&mut &out[..], VR::US, 4)
            .unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn numeric_value_in_text_vr_is_rendered() {
        let mut out = Vec::new();
        ElementEncoder::implicit_le()
            .encode_primitive(&mut out, VR::IS, &PrimitiveValue::from(512_u16))
            .unwrap();
        assert_eq!(&out, b"512 ");
    }

    #[test]
    fn text_in_binary_vr_is_rejected() {
        let res = ElementEncoder::implicit_le().encode_primitive(
            Vec::new(),
            VR::US,
            &PrimitiveValue::from("abc"),
        );
        assert_matches!(res, Err(Error::IncompatibleValue { .. }));
    }
}
