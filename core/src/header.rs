//! Basic building blocks of a DICOM data element:
//! the attribute tag, the value representation,
//! the value length and the element header.

use snafu::{Backtrace, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Only Item (FFFE,E000), Item Delimiter (FFFE,E00D)
    /// and Sequence Delimiter (FFFE,E0DD) are admitted.
    #[snafu(display("Unexpected item header tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Delimiters must have a zero length.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value length declared by the element or item, in bytes.
    fn length(&self) -> Length;

    /// Check whether the declared length is zero.
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
pub trait Header: HasLength {
    /// Retrieve the element's tag.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }

    /// Check whether this is the header of encapsulated pixel data.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag::PIXEL_DATA && self.length().is_undefined()
    }
}

/// The header of a data element: tag, value representation and value length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataElementHeader {
    pub tag: Tag,
    pub vr: VR,
    pub len: Length,
}

impl HasLength for DataElementHeader {
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation.
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Whether the element holds a sequence or encapsulated pixel data
    /// rather than a primitive value.
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.is_encapsulated_pixeldata()
    }
}

/// A header of an item, item delimiter or sequence delimiter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceItemHeader {
    /// The start of an item, with its declared length.
    Item { len: Length },
    /// The end of an item of undefined length.
    ItemDelimiter,
    /// The end of a sequence of undefined length.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Build an item header from its raw tag and length.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<Self, SequenceItemHeaderError> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER | Tag::SEQUENCE_DELIMITER if len != Length(0) => {
                UnexpectedDelimiterLengthSnafu { len }.fail()
            }
            Tag::ITEM_DELIMITER => Ok(SequenceItemHeader::ItemDelimiter),
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    fn length(&self) -> Length {
        match self {
            SequenceItemHeader::Item { len } => *len,
            _ => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    fn tag(&self) -> Tag {
        match self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }
}

/// A DICOM value representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Locator
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation from its two-byte binary form.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve the two-character representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve the binary form of this VR.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether explicit VR encoding uses 2 reserved bytes
    /// and a 4-byte value length for this VR (PS3.5 7.1.2).
    pub fn has_long_explicit_length(self) -> bool {
        use VR::*;
        matches!(
            self,
            OB | OD | OF | OL | OV | OW | SQ | UC | UN | UR | UT
        )
    }

    /// Whether values of this VR are character strings.
    pub fn is_text(self) -> bool {
        use VR::*;
        matches!(
            self,
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT
        )
    }

    /// Whether a textual value of this VR may hold multiple values
    /// separated by a backslash.
    pub fn is_multi_valued_text(self) -> bool {
        self.is_text() && !matches!(self, VR::LT | VR::ST | VR::UT | VR::UR)
    }

    /// Whether this VR holds opaque binary data.
    pub fn is_binary(self) -> bool {
        use VR::*;
        matches!(self, OB | OD | OF | OL | OV | OW | UN)
    }

    /// The byte used to pad values of this VR to an even length.
    pub fn padding_byte(self) -> u8 {
        if self.is_text() && self != VR::UI {
            b' '
        } else {
            0
        }
    }
}

impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A DICOM attribute tag, as a `(group, element)` pair.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub u16, pub u16);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Pixel Data (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> u16 {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> u16 {
        self.1
    }

    /// Whether the tag belongs to a private group (odd group number).
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether this is a private creator element, `(gggg,0010-00FF)` in an odd group.
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Whether this is a group length element, `(gggg,0000)`.
    pub fn is_group_length(self) -> bool {
        self.1 == 0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:#06X}, {:#06X})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// The value length of a data element or item.
///
/// `Length::UNDEFINED` marks a value delimited by an explicit
/// delimitation item instead of a known size.
/// Two undefined lengths are not considered equal,
/// use [`inner_eq`](Length::inner_eq) to compare the raw values.
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from a size in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` is the reserved undefined length value.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined.
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_defined() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Compare the raw length values, so that two undefined lengths are equal.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl PartialEq for Length {
    fn eq(&self, rhs: &Length) -> bool {
        self.is_defined() && rhs.is_defined() && self.0 == rhs.0
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(len) => f.debug_tuple("Length").field(&len).finish(),
            None => f.write_str("Length(Undefined)"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("U/L"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_display_and_order() {
        let tag = Tag(0x0010, 0x0020);
        assert_eq!(tag.to_string(), "(0010,0020)");
        assert_eq!(format!("{:?}", tag), "Tag(0x0010, 0x0020)");
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert!(Tag(0x0009, 0x0010).is_private_creator());
        assert!(!Tag(0x0009, 0x1010).is_private_creator());
        assert!(Tag(0x0028, 0x0000).is_group_length());
    }

    #[test]
    fn undefined_lengths_are_not_equal() {
        assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
        assert_eq!(Length(16), Length(16));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
        assert_eq!(Length(8).get(), Some(8));
    }

    #[test]
    fn headers_compare_through_their_length() {
        let a = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8));
        assert_eq!(a, DataElementHeader::new((0x0010, 0x0010), VR::PN, Length(8)));
        let undefined = DataElementHeader::new(Tag::PIXEL_DATA, VR::OB, Length::UNDEFINED);
        let copy = undefined;
        assert_ne!(undefined, copy);
        assert!(undefined.is_encapsulated_pixeldata());
        assert_eq!(SequenceItemHeader::ItemDelimiter, SequenceItemHeader::ItemDelimiter);
    }

    #[test]
    fn vr_binary_forms() {
        assert_eq!(VR::from_binary(*b"OW"), Some(VR::OW));
        assert_eq!(VR::from_binary(*b"??"), None);
        assert_eq!(VR::UT.to_bytes(), *b"UT");
        assert!(VR::UN.has_long_explicit_length());
        assert!(!VR::US.has_long_explicit_length());
        assert_eq!(VR::UI.padding_byte(), 0);
        assert_eq!(VR::LO.padding_byte(), b' ');
        assert!(!VR::LT.is_multi_valued_text());
        assert!(VR::CS.is_multi_valued_text());
    }

    #[test]
    fn item_headers() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(20)).unwrap(),
            SequenceItemHeader::Item { len: Length(20) }
        );
        assert_eq!(
            SequenceItemHeader::new(Tag::SEQUENCE_DELIMITER, Length(0)).unwrap(),
            SequenceItemHeader::SequenceDelimiter
        );
        assert!(SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(4)).is_err());
        assert!(SequenceItemHeader::new(Tag(0x0008, 0x0016), Length(4)).is_err());
    }
}
