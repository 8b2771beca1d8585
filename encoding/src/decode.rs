//! This module contains all DICOM data element decoding logic.
//!
//! A single [`ElementDecoder`] covers every combination of byte order and
//! VR mode, selected at run-time from the transfer syntax.
//! Value bytes are turned into [`PrimitiveValue`]s by [`decode_value`].

use byteordered::{ByteOrdered, Endianness};
use dcmkit_core::header::{DataElementHeader, Length, SequenceItemHeader, SequenceItemHeaderError};
use dcmkit_core::value::{PrimitiveValue, C};
use dcmkit_core::{Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};
use tracing::warn;

/// Module-level error type:
/// for errors which may occur while decoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field"))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader { source: SequenceItemHeaderError },
    #[snafu(display("Failed to read value of {} bytes", len))]
    ReadValue {
        len: u32,
        backtrace: Backtrace,
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A data element header decoder,
/// parameterized at run-time by byte order and VR mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDecoder {
    endianness: Endianness,
    explicit_vr: bool,
}

impl ElementDecoder {
    pub fn new(endianness: Endianness, explicit_vr: bool) -> Self {
        ElementDecoder {
            endianness,
            explicit_vr,
        }
    }

    /// The decoder for the file meta group,
    /// which is always explicit VR little endian.
    pub fn file_header() -> Self {
        Self::new(Endianness::Little, true)
    }

    /// The decoder for DIMSE command sets and implicit VR files.
    pub fn implicit_le() -> Self {
        Self::new(Endianness::Little, false)
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Fetch and decode the next data element header from the given source.
    /// Returns the header and the number of bytes read.
    ///
    /// In implicit VR mode the VR is reported as `UN`,
    /// and should be resolved with a data dictionary.
    /// Item and delimiter headers (group `FFFE`) never carry a VR.
    pub fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let mut source = ByteOrdered::runtime(source, self.endianness);
        let group = source.read_u16().context(ReadHeaderTagSnafu)?;
        let element = source.read_u16().context(ReadTagSnafu)?;

        if group == 0xFFFE || !self.explicit_vr {
            // item delimiters do not have VR or reserved field
            let len = source.read_u32().context(ReadItemLengthSnafu)?;
            return Ok((
                DataElementHeader::new((group, element), VR::UN, Length(len)),
                8,
            ));
        }

        let mut vr_bytes = [0u8; 2];
        source.read_exact(&mut vr_bytes).context(ReadVrSnafu)?;
        let vr = VR::from_binary(vr_bytes).unwrap_or_else(|| {
            warn!(
                "Unknown VR {:02X}{:02X} in ({:04X},{:04X}), reading as UN",
                vr_bytes[0], vr_bytes[1], group, element
            );
            VR::UN
        });

        if vr.has_long_explicit_length() {
            let mut reserved = [0u8; 2];
            source.read_exact(&mut reserved).context(ReadReservedSnafu)?;
            let len = source.read_u32().context(ReadLengthSnafu)?;
            Ok((
                DataElementHeader::new((group, element), vr, Length(len)),
                12,
            ))
        } else {
            let len = source.read_u16().context(ReadLengthSnafu)?;
            Ok((
                DataElementHeader::new((group, element), vr, Length(u32::from(len))),
                8,
            ))
        }
    }

    /// Fetch and decode the next sequence item header from the given source.
    pub fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut source = ByteOrdered::runtime(source, self.endianness);
        let group = source.read_u16().context(ReadItemHeaderSnafu)?;
        let element = source.read_u16().context(ReadItemHeaderSnafu)?;
        let len = source.read_u32().context(ReadItemHeaderSnafu)?;

        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    /// Decode a DICOM attribute tag from the given source.
    pub fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let mut source = ByteOrdered::runtime(source, self.endianness);
        let group = source.read_u16().context(ReadTagSnafu)?;
        let element = source.read_u16().context(ReadTagSnafu)?;
        Ok(Tag(group, element))
    }

    /// Read exactly `len` bytes of value data
    /// and decode them according to the given VR.
    pub fn read_value<S>(&self, source: &mut S, vr: VR, len: u32) -> Result<PrimitiveValue>
    where
        S: ?Sized + Read,
    {
        let mut buf = vec![0u8; len as usize];
        source.read_exact(&mut buf).context(ReadValueSnafu { len })?;
        Ok(decode_value(&buf, vr, self.endianness))
    }
}

/// Decode the raw bytes of a primitive value.
///
/// Text is split on backslash for multi-valued VRs
/// and stripped of its trailing padding.
/// Binary data of an unexpected length is truncated
/// to a whole number of values.
pub fn decode_value(bytes: &[u8], vr: VR, endianness: Endianness) -> PrimitiveValue {
    match vr {
        VR::AE
        | VR::AS
        | VR::CS
        | VR::DA
        | VR::DS
        | VR::DT
        | VR::IS
        | VR::LO
        | VR::PN
        | VR::SH
        | VR::TM
        | VR::UC
        | VR::UI => {
            let text = String::from_utf8_lossy(bytes);
            PrimitiveValue::Strs(
                text.split('\\')
                    .map(|s| trim_padding(s).to_string())
                    .collect(),
            )
        }
        VR::LT | VR::ST | VR::UT | VR::UR => {
            let text = String::from_utf8_lossy(bytes);
            PrimitiveValue::Strs(std::iter::once(trim_padding(&text).to_string()).collect())
        }
        VR::AT => {
            let values = read_all(bytes, 4, vr, |mut s| {
                let g = s.read_u16()?;
                let e = s.read_u16()?;
                Ok(Tag(g, e))
            }, endianness);
            PrimitiveValue::Tags(values)
        }
        VR::OB | VR::UN | VR::SQ => PrimitiveValue::U8(C::from_slice(bytes)),
        VR::OW | VR::US => {
            PrimitiveValue::U16(read_all(bytes, 2, vr, |mut s| s.read_u16(), endianness))
        }
        VR::SS => PrimitiveValue::I16(read_all(bytes, 2, vr, |mut s| s.read_i16(), endianness)),
        VR::OL | VR::UL => {
            PrimitiveValue::U32(read_all(bytes, 4, vr, |mut s| s.read_u32(), endianness))
        }
        VR::SL => PrimitiveValue::I32(read_all(bytes, 4, vr, |mut s| s.read_i32(), endianness)),
        VR::OV | VR::UV => {
            PrimitiveValue::U64(read_all(bytes, 8, vr, |mut s| s.read_u64(), endianness))
        }
        VR::SV => PrimitiveValue::I64(read_all(bytes, 8, vr, |mut s| s.read_i64(), endianness)),
        VR::OF | VR::FL => {
            PrimitiveValue::F32(read_all(bytes, 4, vr, |mut s| s.read_f32(), endianness))
        }
        VR::OD | VR::FD => {
            PrimitiveValue::F64(read_all(bytes, 8, vr, |mut s| s.read_f64(), endianness))
        }
    }
}

/// Strip the trailing padding (spaces and null characters) of a text value.
pub fn trim_padding(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == ' ' || c == '\0')
}

fn read_all<T, F>(bytes: &[u8], width: usize, vr: VR, f: F, endianness: Endianness) -> C<T>
where
    F: Fn(ByteOrdered<&[u8], Endianness>) -> io::Result<T>,
{
    if bytes.len() % width != 0 {
        warn!(
            "Value of VR {} has length {} which is not a multiple of {}, truncating",
            vr,
            bytes.len(),
            width
        );
    }
    bytes
        .chunks_exact(width)
        .filter_map(|chunk| f(ByteOrdered::runtime(chunk, endianness)).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::header::{HasLength, Header};
    use matches::assert_matches;
    use std::io::Cursor;

    #[rustfmt::skip]
    const RAW_EXPLICIT_LE: &[u8] = &[
        0x02, 0x00, 0x02, 0x00,     // (0002,0002) Media Storage SOP Class UID
            b'U', b'I',
            0x1A, 0x00,             // Length: 26 bytes
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'1',
                0x00,               // padding
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            b'O', b'B',
            0x00, 0x00,             // reserved
            0xFF, 0xFF, 0xFF, 0xFF, // undefined length
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x04, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_explicit_le_headers() {
        let dec = ElementDecoder::new(Endianness::Little, true);
        let mut cursor = Cursor::new(RAW_EXPLICIT_LE);

        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x0002, 0x0002));
        assert_eq!(header.vr(), VR::UI);
        assert_eq!(header.length(), Length(26));
        assert_eq!(bytes_read, 8);
        let value = dec.read_value(&mut cursor, VR::UI, 26).unwrap();
        assert_eq!(value.string().unwrap(), "1.2.840.10008.5.1.4.1.1.1");

        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag::PIXEL_DATA);
        assert_eq!(header.vr(), VR::OB);
        assert!(header.length().is_undefined());
        assert_eq!(bytes_read, 12);

        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_matches!(item, SequenceItemHeader::Item { len } if len == Length(4));
    }

    #[test]
    fn decode_implicit_header_has_unknown_vr() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, // (0010,0010)
            0x08, 0x00, 0x00, 0x00, // length: 8
        ];
        let dec = ElementDecoder::implicit_le();
        let (header, bytes_read) = dec.decode_header(&mut &raw[..]).unwrap();
        assert_eq!(header.tag(), Tag(0x0010, 0x0010));
        assert_eq!(header.vr(), VR::UN);
        assert_eq!(header.length(), Length(8));
        assert_eq!(bytes_read, 8);
    }

    #[test]
    fn decode_explicit_be_header() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x28, 0x00, 0x10, // (0028,0010) Rows
            b'U', b'S',
            0x00, 0x02,             // length: 2
            0x02, 0x00,             // 512
        ];
        let dec = ElementDecoder::new(Endianness::Big, true);
        let mut source = &raw[..];
        let (header, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0010));
        assert_eq!(header.length(), Length(2));
        let value = dec.read_value(&mut source, VR::US, 2).unwrap();
        assert_eq!(value, PrimitiveValue::from(512_u16));
    }

    #[test]
    fn bad_item_header() {
        let raw: &[u8] = &[0x08, 0x00, 0x10, 0x00, 0, 0, 0, 0];
        let dec = ElementDecoder::implicit_le();
        assert_matches!(
            dec.decode_item_header(&mut &raw[..]),
            Err(Error::BadSequenceHeader { .. })
        );
    }

    #[test]
    fn truncated_header() {
        let raw: &[u8] = &[0x08, 0x00];
        let dec = ElementDecoder::file_header();
        assert!(dec.decode_header(&mut &raw[..]).is_err());
    }

    #[test]
    fn text_values_are_split_and_trimmed() {
        let v = decode_value(b"ORIGINAL\\PRIMARY ", VR::CS, Endianness::Little);
        assert_eq!(v.strings().unwrap(), &["ORIGINAL", "PRIMARY"]);

        let v = decode_value(b"a\\b text  ", VR::LT, Endianness::Little);
        assert_eq!(v.strings().unwrap(), &["a\\b text"]);

        let v = decode_value(b"1.2.3\0", VR::UI, Endianness::Little);
        assert_eq!(v.string().unwrap(), "1.2.3");
    }

    #[test]
    fn binary_values_follow_byte_order() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(
            decode_value(&bytes, VR::OW, Endianness::Little),
            PrimitiveValue::U16(C::from_slice(&[0x0201, 0x0403]))
        );
        assert_eq!(
            decode_value(&bytes, VR::OW, Endianness::Big),
            PrimitiveValue::U16(C::from_slice(&[0x0102, 0x0304]))
        );
        assert_eq!(
            decode_value(&bytes, VR::AT, Endianness::Little),
            PrimitiveValue::Tags(C::from_slice(&[Tag(0x0201, 0x0403)]))
        );
        assert_eq!(
            decode_value(&bytes, VR::OB, Endianness::Big),
            PrimitiveValue::U8(C::from_slice(&bytes))
        );
    }

    #[test]
    fn odd_binary_length_is_truncated() {
        let v = decode_value(&[1, 0, 2], VR::US, Endianness::Little);
        assert_eq!(v, PrimitiveValue::from(1_u16));
    }
}
