//! Core data dictionary abstractions.
//!
//! A data dictionary maps attribute tags to their alias,
//! typical value representation and value multiplicity.
//! The standard dictionary lives in a separate crate.

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// Value multiplicity range of an attribute, `(min, max)`.
/// A `max` of `u32::MAX` stands for an unbounded multiplicity ("n").
pub type Multiplicity = (u32, u32);

/// Unbounded multiplicity upper limit.
pub const VM_N: u32 = u32::MAX;

/// Type trait for a dictionary of DICOM attributes.
///
/// The methods herein have no generic parameters,
/// so that it can be used as a trait object.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by its alias (e.g. "PatientName").
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;
}

/// A dictionary entry describing one attribute.
pub trait DataDictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The alias of the attribute, in UpperCamelCase with no spaces.
    fn alias(&self) -> &str;
    /// The typical value representation of the attribute.
    fn vr(&self) -> VR;
    /// The value multiplicity range.
    fn vm(&self) -> Multiplicity;
}

/// A dictionary entry with a borrowed alias,
/// typically pointing into a static table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DataDictionaryEntryRef<'a> {
    pub tag: Tag,
    pub alias: &'a str,
    pub vr: VR,
    pub vm: Multiplicity,
}

impl DataDictionaryEntry for DataDictionaryEntryRef<'_> {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
    fn vm(&self) -> Multiplicity {
        self.vm
    }
}

/// A dictionary entry with full ownership,
/// used for entries registered at run-time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntryBuf {
    pub tag: Tag,
    pub alias: String,
    pub vr: VR,
    pub vm: Multiplicity,
}

impl DataDictionaryEntry for DataDictionaryEntryBuf {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        &self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
    fn vm(&self) -> Multiplicity {
        self.vm
    }
}

/// A dictionary which knows no attributes.
///
/// Useful when decoding data whose VRs are always explicit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, _: &str) -> Option<&Self::Entry> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&Self::Entry> {
        None
    }
}

impl<D: DataDictionary> DataDictionary for &D {
    type Entry = D::Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }
}
