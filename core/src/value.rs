//! Primitive values of DICOM data elements.
//!
//! Sequences and pixel fragments live in the object model,
//! this module only covers values which can be decoded
//! from a contiguous run of bytes.

use crate::header::Tag;
use itertools::Itertools;
use num_traits::NumCast;
use smallvec::SmallVec;
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The kind of primitive value, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Strs,
    Tags,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Error raised when a value is requested as a different type
/// than the one it holds.
#[derive(Debug, Snafu)]
#[snafu(display("Requested {} but value is {}", requested, got))]
pub struct CastValueError {
    pub requested: &'static str,
    pub got: ValueType,
    backtrace: Backtrace,
}

/// Error raised when a value could not be converted
/// into the requested type.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConvertValueError {
    /// The value is empty
    #[snafu(display("Value of type {} is empty", original))]
    NoValue { original: ValueType },
    /// Text could not be parsed into a number
    #[snafu(display("Could not parse `{}` as {}", text, requested))]
    ParseNumber {
        text: String,
        requested: &'static str,
        backtrace: Backtrace,
    },
    /// Number out of range of the requested type
    #[snafu(display("Value of type {} does not fit in {}", original, requested))]
    NarrowConvert {
        original: ValueType,
        requested: &'static str,
        backtrace: Backtrace,
    },
    /// The value cannot be converted at all
    #[snafu(display("Cannot convert {} to {}", original, requested))]
    Unconvertible {
        original: ValueType,
        requested: &'static str,
        backtrace: Backtrace,
    },
}

/// A primitive value of a DICOM data element.
///
/// Multiple values are kept in a [`C`] small vector.
/// Text values are held already split on the backslash delimiter
/// (except for VRs which do not admit multiple values)
/// and without their padding.
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// One or more strings.
    Strs(C<String>),
    /// Attribute tags (AT).
    Tags(C<Tag>),
    /// Raw bytes (OB, UN).
    U8(C<u8>),
    /// Signed shorts (SS).
    I16(C<i16>),
    /// Unsigned shorts (US, OW).
    U16(C<u16>),
    /// Signed longs (SL).
    I32(C<i32>),
    /// Unsigned longs (UL, OL).
    U32(C<u32>),
    /// Signed very longs (SV).
    I64(C<i64>),
    /// Unsigned very longs (UV, OV).
    U64(C<u64>),
    /// Single precision floats (FL, OF).
    F32(C<f32>),
    /// Double precision floats (FD, OD).
    F64(C<f64>),
}

impl PrimitiveValue {
    /// Create a single-valued string.
    pub fn from_str_single(value: impl Into<String>) -> Self {
        PrimitiveValue::Strs(std::iter::once(value.into()).collect())
    }

    /// Retrieve the kind of value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::U8(_) => ValueType::U8,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::U64(_) => ValueType::U64,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
        }
    }

    /// The number of individual values.
    pub fn multiplicity(&self) -> u32 {
        let n = match self {
            PrimitiveValue::Strs(c) => c.len(),
            PrimitiveValue::Tags(c) => c.len(),
            PrimitiveValue::U8(c) => c.len(),
            PrimitiveValue::I16(c) => c.len(),
            PrimitiveValue::U16(c) => c.len(),
            PrimitiveValue::I32(c) => c.len(),
            PrimitiveValue::U32(c) => c.len(),
            PrimitiveValue::I64(c) => c.len(),
            PrimitiveValue::U64(c) => c.len(),
            PrimitiveValue::F32(c) => c.len(),
            PrimitiveValue::F64(c) => c.len(),
        };
        n as u32
    }

    /// Whether this value holds no individual values.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// The number of bytes of the encoded value, before padding.
    pub fn calculate_byte_len(&self) -> usize {
        match self {
            PrimitiveValue::Strs(c) => {
                c.iter().map(|s| s.len()).sum::<usize>() + c.len().saturating_sub(1)
            }
            PrimitiveValue::Tags(c) => c.len() * 4,
            PrimitiveValue::U8(c) => c.len(),
            PrimitiveValue::I16(c) => c.len() * 2,
            PrimitiveValue::U16(c) => c.len() * 2,
            PrimitiveValue::I32(c) => c.len() * 4,
            PrimitiveValue::U32(c) => c.len() * 4,
            PrimitiveValue::I64(c) => c.len() * 8,
            PrimitiveValue::U64(c) => c.len() * 8,
            PrimitiveValue::F32(c) => c.len() * 4,
            PrimitiveValue::F64(c) => c.len() * 8,
        }
    }

    /// Render the value as text, joining multiple values with a backslash.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            PrimitiveValue::Strs(c) if c.len() == 1 => Cow::Borrowed(c[0].as_str()),
            PrimitiveValue::Strs(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::Tags(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::U8(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::I16(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::U16(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::I32(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::U32(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::I64(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::U64(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::F32(c) => Cow::Owned(c.iter().join("\\")),
            PrimitiveValue::F64(c) => Cow::Owned(c.iter().join("\\")),
        }
    }

    /// Retrieve the value as little endian bytes.
    ///
    /// Text is returned as its joined form, without padding.
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        fn collect<T, const N: usize>(values: &[T], f: impl Fn(&T) -> [u8; N]) -> Vec<u8> {
            values.iter().flat_map(f).collect()
        }
        match self {
            PrimitiveValue::U8(c) => Cow::Borrowed(&c[..]),
            PrimitiveValue::Strs(_) => match self.to_str() {
                Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                Cow::Owned(s) => Cow::Owned(s.into_bytes()),
            },
            PrimitiveValue::Tags(c) => Cow::Owned(
                c.iter()
                    .flat_map(|t| {
                        let [a, b] = t.0.to_le_bytes();
                        let [c, d] = t.1.to_le_bytes();
                        [a, b, c, d]
                    })
                    .collect(),
            ),
            PrimitiveValue::I16(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::U16(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::I32(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::U32(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::I64(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::U64(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::F32(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
            PrimitiveValue::F64(c) => Cow::Owned(collect(c, |v| v.to_le_bytes())),
        }
    }

    /// Retrieve the first value as an integer,
    /// parsing text if necessary.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        let requested = std::any::type_name::<T>();
        let original = self.value_type();
        if self.is_empty() {
            return NoValueSnafu { original }.fail();
        }
        let narrow = || NarrowConvertSnafu {
            original,
            requested,
        };
        let out: Option<T> = match self {
            PrimitiveValue::Strs(c) => {
                let text = c[0].trim();
                return text.parse().ok().context_parse(text, requested);
            }
            PrimitiveValue::U8(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::I16(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::U16(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::I32(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::U32(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::I64(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::U64(c) => <T as NumCast>::from(c[0]),
            PrimitiveValue::Tags(_) | PrimitiveValue::F32(_) | PrimitiveValue::F64(_) => {
                return UnconvertibleSnafu {
                    original,
                    requested,
                }
                .fail()
            }
        };
        out.ok_or_else(|| narrow().build())
    }

    /// Retrieve the first value as a double precision float,
    /// parsing text if necessary.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        let original = self.value_type();
        if self.is_empty() {
            return NoValueSnafu { original }.fail();
        }
        match self {
            PrimitiveValue::Strs(c) => {
                let text = c[0].trim();
                text.parse().ok().context_parse(text, "f64")
            }
            PrimitiveValue::F32(c) => Ok(<f64 as From<f32>>::from(c[0])),
            PrimitiveValue::F64(c) => Ok(c[0]),
            PrimitiveValue::Tags(_) => UnconvertibleSnafu {
                original,
                requested: "f64",
            }
            .fail(),
            _ => self.to_int::<i64>().map(|v| v as f64),
        }
    }

    /// Borrow the single string held, if this is a textual value.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            PrimitiveValue::Strs(c) if !c.is_empty() => Ok(c[0].as_str()),
            _ => CastValueSnafu {
                requested: "string",
                got: self.value_type(),
            }
            .fail(),
        }
    }

    /// Borrow all strings held, if this is a textual value.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            PrimitiveValue::Strs(c) => Ok(&c[..]),
            _ => CastValueSnafu {
                requested: "strings",
                got: self.value_type(),
            }
            .fail(),
        }
    }

    /// Borrow the values as unsigned shorts.
    pub fn uint16_slice(&self) -> Result<&[u16], CastValueError> {
        match self {
            PrimitiveValue::U16(c) => Ok(&c[..]),
            _ => CastValueSnafu {
                requested: "u16",
                got: self.value_type(),
            }
            .fail(),
        }
    }

    /// Borrow the values as attribute tags.
    pub fn tags(&self) -> Result<&[Tag], CastValueError> {
        match self {
            PrimitiveValue::Tags(c) => Ok(&c[..]),
            _ => CastValueSnafu {
                requested: "tags",
                got: self.value_type(),
            }
            .fail(),
        }
    }
}

trait ParseContext<T> {
    fn context_parse(self, text: &str, requested: &'static str) -> Result<T, ConvertValueError>;
}

impl<T> ParseContext<T> for Option<T> {
    fn context_parse(self, text: &str, requested: &'static str) -> Result<T, ConvertValueError> {
        match self {
            Some(v) => Ok(v),
            None => ParseNumberSnafu {
                text: text.to_string(),
                requested,
            }
            .fail(),
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::from_str_single(value)
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::from_str_single(value)
    }
}

macro_rules! impl_from_number {
    ($t: ty, $variant: ident) => {
        impl From<$t> for PrimitiveValue {
            fn from(value: $t) -> Self {
                PrimitiveValue::$variant(std::iter::once(value).collect())
            }
        }

        impl From<Vec<$t>> for PrimitiveValue {
            fn from(value: Vec<$t>) -> Self {
                PrimitiveValue::$variant(value.into_iter().collect())
            }
        }
    };
}

impl_from_number!(u8, U8);
impl_from_number!(i16, I16);
impl_from_number!(u16, U16);
impl_from_number!(i32, I32);
impl_from_number!(u32, U32);
impl_from_number!(i64, I64);
impl_from_number!(u64, U64);
impl_from_number!(f32, F32);
impl_from_number!(f64, F64);

impl From<Tag> for PrimitiveValue {
    fn from(value: Tag) -> Self {
        PrimitiveValue::Tags(std::iter::once(value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn text_values_join_with_backslash() {
        let v = PrimitiveValue::Strs(smallvec!["ORIGINAL".to_string(), "PRIMARY".to_string()]);
        assert_eq!(v.multiplicity(), 2);
        assert_eq!(v.to_str(), "ORIGINAL\\PRIMARY");
        assert_eq!(v.calculate_byte_len(), 16);
        assert_eq!(v.string().unwrap(), "ORIGINAL");
    }

    #[test]
    fn numbers_convert() {
        assert_eq!(PrimitiveValue::from(512_u16).to_int::<u32>().unwrap(), 512);
        assert_eq!(PrimitiveValue::from(" 42 ").to_int::<i32>().unwrap(), 42);
        assert_eq!(PrimitiveValue::from("1.5").to_float64().unwrap(), 1.5);
        assert!(PrimitiveValue::from(-1_i32).to_int::<u16>().is_err());
        assert!(PrimitiveValue::from("abc").to_int::<u16>().is_err());
    }

    #[test]
    fn floats_widen() {
        assert_eq!(PrimitiveValue::from(0.25_f32).to_float64().unwrap(), 0.25);
        assert_eq!(PrimitiveValue::from(-3.5_f64).to_float64().unwrap(), -3.5);
        assert_eq!(PrimitiveValue::from(7_u16).to_float64().unwrap(), 7.0);
    }

    #[test]
    fn bytes_are_little_endian() {
        let v = PrimitiveValue::from(vec![0x0102_u16, 0x0304]);
        assert_eq!(&v.to_bytes()[..], &[0x02, 0x01, 0x04, 0x03]);
        let t = PrimitiveValue::from(Tag(0x0028, 0x0010));
        assert_eq!(&t.to_bytes()[..], &[0x28, 0x00, 0x10, 0x00]);
    }
}
