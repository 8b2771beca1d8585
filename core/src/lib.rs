#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! Core types of the dcmkit DICOM toolkit.
//!
//! - [`header`] holds the attribute tag, value representation,
//!   value length and element header types.
//! - [`value`] holds primitive values decoded from a data element.
//! - [`dictionary`] describes the data dictionary abstraction,
//!   which maps tags to their alias and typical VR.

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, DataDictionaryEntry};
pub use header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
pub use value::{PrimitiveValue, C};

// re-export crates that are part of the public API
pub use smallvec;
