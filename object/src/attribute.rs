//! Data set attributes.
//!
//! An [`Attribute`] couples a tag and a VR with a [`Value`],
//! which may be in one of three states:
//! _empty_ (present, but never assigned),
//! _null_ (explicitly without value, encoded with a zero length),
//! or populated with a primitive value, a sequence of items,
//! encapsulated pixel data fragments
//! or a reference to pixel data left in the source stream.

use crate::dataset::DataSet;
use crate::pixeldata::PixelFragmentSequence;
use crate::write::WriteOptions;
use dcmkit_core::value::{ConvertValueError, PrimitiveValue};
use dcmkit_core::{Tag, VR};
use dcmkit_encoding::decode::trim_padding;
use dcmkit_encoding::encode::encoded_len;
use dcmkit_encoding::ElementEncoder;
use num_traits::NumCast;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::str::FromStr;

/// An error when retrieving the value of an attribute.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    /// The attribute was never assigned a value
    #[snafu(display("Attribute {} is empty", tag))]
    EmptyValue { tag: Tag, backtrace: Backtrace },
    /// The attribute is explicitly without value
    #[snafu(display("Attribute {} is null", tag))]
    NullValue { tag: Tag, backtrace: Backtrace },
    /// The value is a sequence or pixel data, not a primitive value
    #[snafu(display("Attribute {} does not hold a primitive value", tag))]
    NotPrimitive { tag: Tag, backtrace: Backtrace },
    /// The primitive value could not be converted
    #[snafu(display("Could not convert the value of {}", tag))]
    ConvertValue {
        tag: Tag,
        source: ConvertValueError,
    },
}

pub type Result<T, E = AccessError> = std::result::Result<T, E>;

/// The position of native pixel data in its source stream,
/// recorded in place of the bytes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelDataReference {
    /// Absolute byte offset of the first value byte
    pub offset: u64,
    /// Number of value bytes
    pub length: u32,
}

/// The value of an attribute.
#[derive(Debug, Clone)]
pub enum Value {
    /// No value was ever assigned
    Empty,
    /// Explicitly without value
    Null,
    Primitive(PrimitiveValue),
    /// Sequence items, owned by value
    Sequence(Vec<DataSet>),
    /// Encapsulated pixel data
    PixelSequence(PixelFragmentSequence),
    /// Native pixel data not yet loaded from the source stream
    PixelReference(PixelDataReference),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value reads back as null once encoded.
    pub(crate) fn encodes_as_null(&self, vr: VR) -> bool {
        match self {
            Value::Null => true,
            Value::Primitive(v) => encoded_len(vr, v) == 0,
            Value::Sequence(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(value: PrimitiveValue) -> Self {
        Value::Primitive(value)
    }
}

/// A single data set entry: tag, VR and value.
#[derive(Debug, Clone)]
pub struct Attribute {
    tag: Tag,
    vr: VR,
    value: Value,
}

impl Attribute {
    /// Create a populated attribute with a primitive value.
    pub fn new(tag: Tag, vr: VR, value: impl Into<PrimitiveValue>) -> Self {
        Attribute {
            tag,
            vr,
            value: Value::Primitive(value.into()),
        }
    }

    /// Create an attribute with any kind of value.
    pub fn with_value(tag: Tag, vr: VR, value: Value) -> Self {
        Attribute { tag, vr, value }
    }

    /// Create an attribute which was never assigned a value.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        Attribute {
            tag,
            vr,
            value: Value::Empty,
        }
    }

    /// Create an attribute explicitly without value.
    pub fn null(tag: Tag, vr: VR) -> Self {
        Attribute {
            tag,
            vr,
            value: Value::Null,
        }
    }

    /// Create a sequence attribute.
    pub fn sequence(tag: Tag, items: Vec<DataSet>) -> Self {
        Attribute {
            tag,
            vr: VR::SQ,
            value: Value::Sequence(items),
        }
    }

    /// Create an encapsulated pixel data attribute.
    pub fn pixel_sequence(tag: Tag, fragments: PixelFragmentSequence) -> Self {
        Attribute {
            tag,
            vr: VR::OB,
            value: Value::PixelSequence(fragments),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// The number of values held:
    /// items for a sequence, fragments for encapsulated pixel data.
    pub fn multiplicity(&self) -> u32 {
        match &self.value {
            Value::Empty | Value::Null => 0,
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(items) => items.len() as u32,
            Value::PixelSequence(seq) => seq.fragments().len() as u32,
            Value::PixelReference(_) => 1,
        }
    }

    /// The even-padded length of the encoded value, in bytes.
    ///
    /// Sequences and encapsulated pixel data are measured
    /// in explicit VR with the default write options.
    /// A pixel data reference yields its recorded length.
    pub fn stream_length(&self) -> u32 {
        match &self.value {
            Value::PixelReference(r) => r.length,
            _ => crate::write::value_length(
                self,
                &ElementEncoder::file_header(),
                &WriteOptions::default(),
            ),
        }
    }

    /// Mark the attribute as explicitly without value.
    pub fn set_null(&mut self) {
        self.value = Value::Null;
    }

    /// Replace the value with a primitive value.
    pub fn set_value(&mut self, value: impl Into<PrimitiveValue>) {
        self.value = Value::Primitive(value.into());
    }

    /// Replace the value with a sequence of items.
    pub fn set_items(&mut self, items: Vec<DataSet>) {
        self.value = Value::Sequence(items);
    }

    /// Replace the value of the attribute, returning the previous one.
    pub fn replace_value(&mut self, value: Value) -> Value {
        std::mem::replace(&mut self.value, value)
    }

    /// The primitive value, if populated with one.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match &self.value {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// The sequence items, if this is a populated sequence.
    pub fn items(&self) -> Option<&[DataSet]> {
        match &self.value {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<DataSet>> {
        match &mut self.value {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The encapsulated pixel data fragments, if any.
    pub fn fragments(&self) -> Option<&PixelFragmentSequence> {
        match &self.value {
            Value::PixelSequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn pixel_data_reference(&self) -> Option<PixelDataReference> {
        match &self.value {
            Value::PixelReference(r) => Some(*r),
            _ => None,
        }
    }

    fn primitive_or_null(&self) -> Result<Option<&PrimitiveValue>> {
        match &self.value {
            Value::Null => Ok(None),
            Value::Primitive(v) => Ok(Some(v)),
            Value::Empty => EmptyValueSnafu { tag: self.tag }.fail(),
            _ => NotPrimitiveSnafu { tag: self.tag }.fail(),
        }
    }

    /// Render the value as text.
    /// A null value yields an empty string.
    pub fn to_str(&self) -> Result<Cow<'_, str>> {
        Ok(match self.primitive_or_null()? {
            Some(v) => v.to_str(),
            None => Cow::Borrowed(""),
        })
    }

    pub fn to_u16(&self) -> Result<u16> {
        self.to_int()
    }

    pub fn to_u32(&self) -> Result<u32> {
        self.to_int()
    }

    fn to_int<T>(&self) -> Result<T>
    where
        T: NumCast + FromStr,
    {
        let value = self
            .primitive_or_null()?
            .context(NullValueSnafu { tag: self.tag })?;
        value.to_int().context(ConvertValueSnafu { tag: self.tag })
    }

    pub fn to_f64(&self) -> Result<f64> {
        let value = self
            .primitive_or_null()?
            .context(NullValueSnafu { tag: self.tag })?;
        value.to_float64().context(ConvertValueSnafu { tag: self.tag })
    }

    /// Retrieve the value as little endian bytes.
    /// A null value yields no bytes.
    pub fn to_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(match self.primitive_or_null()? {
            Some(v) => v.to_bytes(),
            None => Cow::Borrowed(&[]),
        })
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && vr_compatible(self.vr, other.vr)
            && values_equal(self.vr, &self.value, &other.value)
    }
}

/// Whether two VRs denote the same kind of value.
/// Binary VRs are interchangeable, so that OB and OW compare by bytes.
pub(crate) fn vr_compatible(a: VR, b: VR) -> bool {
    a == b || (a.is_binary() && b.is_binary())
}

/// Value-based equality of two attribute values.
///
/// Text compares without padding,
/// binary data compares byte for byte in little endian.
pub(crate) fn values_equal(vr: VR, a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Empty, Value::Empty) => true,
        (Value::Empty, _) | (_, Value::Empty) => false,
        (a, b) if a.encodes_as_null(vr) || b.encodes_as_null(vr) => {
            a.encodes_as_null(vr) && b.encodes_as_null(vr)
        }
        (Value::Primitive(a), Value::Primitive(b)) => primitives_equal(vr, a, b),
        (Value::Sequence(a), Value::Sequence(b)) => a == b,
        (Value::PixelSequence(a), Value::PixelSequence(b)) => a == b,
        (Value::PixelReference(a), Value::PixelReference(b)) => a == b,
        _ => false,
    }
}

fn primitives_equal(vr: VR, a: &PrimitiveValue, b: &PrimitiveValue) -> bool {
    if a == b {
        return true;
    }
    let textual = vr.is_text()
        || matches!(a, PrimitiveValue::Strs(_))
        || matches!(b, PrimitiveValue::Strs(_));
    if textual {
        let a = a.to_str();
        let b = b.to_str();
        if vr.is_multi_valued_text() || !vr.is_text() {
            a.split('\\')
                .map(trim_padding)
                .eq(b.split('\\').map(trim_padding))
        } else {
            trim_padding(&a) == trim_padding(&b)
        }
    } else {
        let a = a.to_bytes();
        let b = b.to_bytes();
        // a single trailing pad byte is not part of the value
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        match long.len() - short.len() {
            0 => short == long,
            1 => long.ends_with(&[0]) && long.starts_with(&short),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::value::C;
    use dcmkit_dictionary_std::tags;

    #[test]
    fn empty_and_null_are_distinct() {
        let empty = Attribute::empty(tags::PATIENT_NAME, VR::PN);
        let null = Attribute::null(tags::PATIENT_NAME, VR::PN);
        assert!(empty.is_empty());
        assert!(!empty.is_null());
        assert!(null.is_null());
        assert_ne!(empty, null);
        assert_eq!(null.stream_length(), 0);
        assert_eq!(null.to_str().unwrap(), "");
        assert!(empty.to_str().is_err());
    }

    #[test]
    fn empty_text_equals_null() {
        let null = Attribute::null(tags::PATIENT_NAME, VR::PN);
        let blank = Attribute::new(tags::PATIENT_NAME, VR::PN, "");
        assert_eq!(null, blank);
    }

    #[test]
    fn binary_values_compare_by_bytes() {
        let ob = Attribute::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(C::from_slice(&[0x01, 0x02, 0x03, 0x04])),
        );
        let ow = Attribute::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(C::from_slice(&[0x0201, 0x0403])),
        );
        assert_eq!(ob, ow);
        let other = Attribute::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(C::from_slice(&[0x0201, 0x0404])),
        );
        assert_ne!(ob, other);
    }

    #[test]
    fn text_compares_without_padding() {
        let a = Attribute::new(tags::PATIENT_ID, VR::LO, "12345 ");
        let b = Attribute::new(tags::PATIENT_ID, VR::LO, "12345");
        assert_eq!(a, b);
        let multi = Attribute::new(
            tags::IMAGE_TYPE,
            VR::CS,
            PrimitiveValue::Strs(C::from_vec(vec!["ORIGINAL".into(), "PRIMARY".into()])),
        );
        let joined = Attribute::new(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY ");
        assert_eq!(multi, joined);
    }

    #[test]
    fn numbers_in_text_vr() {
        let number = Attribute::new(tags::NUMBER_OF_FRAMES, VR::IS, 12_u32);
        let text = Attribute::new(tags::NUMBER_OF_FRAMES, VR::IS, "12");
        assert_eq!(number, text);
        assert_eq!(text.to_u32().unwrap(), 12);
    }

    #[test]
    fn stream_length_is_even() {
        let a = Attribute::new(tags::PATIENT_NAME, VR::PN, "Doe^John");
        assert_eq!(a.stream_length(), 8);
        let a = Attribute::new(tags::PATIENT_NAME, VR::PN, "Doe^Jane^");
        assert_eq!(a.stream_length(), 10);
        let r = Attribute::with_value(
            tags::PIXEL_DATA,
            VR::OW,
            Value::PixelReference(PixelDataReference {
                offset: 1024,
                length: 512,
            }),
        );
        assert_eq!(r.stream_length(), 512);
        assert_eq!(r.multiplicity(), 1);
    }
}
