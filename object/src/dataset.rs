//! The in-memory data set.
//!
//! A [`DataSet`] maps tags to [`Attribute`]s in ascending tag order.
//! Sequence items are data sets themselves, owned by their parent attribute,
//! so that changing one data set never affects another.

use crate::attribute::{Attribute, Value};
use crate::diff::{compare_data_sets, AttributeDifference};
use dcmkit_core::dictionary::DataDictionaryEntryBuf;
use dcmkit_core::value::PrimitiveValue;
use dcmkit_core::{Tag, VR};
use dcmkit_dictionary_std::{PrivateDataDictionary, StandardDataDictionary};
use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};
use std::iter::FromIterator;

/// A DICOM data set held in memory.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    entries: BTreeMap<Tag, Attribute>,
}

impl DataSet {
    /// Create a new empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: Tag) -> Option<&Attribute> {
        self.entries.get(&tag)
    }

    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut Attribute> {
        self.entries.get_mut(&tag)
    }

    /// Insert an attribute,
    /// returning the previous attribute with the same tag, if any.
    pub fn put(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(attribute.tag(), attribute)
    }

    pub fn remove(&mut self, tag: Tag) -> Option<Attribute> {
        self.entries.remove(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Obtain the attribute with the given tag,
    /// inserting an empty one if it is absent.
    ///
    /// The VR of a new attribute comes from the data dictionary,
    /// including private attributes whose creator is in this data set,
    /// and is `UN` for unknown tags.
    pub fn attribute_mut(&mut self, tag: Tag) -> &mut Attribute {
        let vr = if self.contains(tag) {
            VR::UN
        } else {
            StandardDataDictionary::vr_of(tag)
                .or_else(|| self.lookup_private(tag).map(|e| e.vr))
                .unwrap_or(VR::UN)
        };
        self.entries
            .entry(tag)
            .or_insert_with(|| Attribute::empty(tag, vr))
    }

    /// Put a text attribute.
    pub fn put_str(&mut self, tag: Tag, vr: VR, value: impl Into<String>) -> Option<Attribute> {
        self.put(Attribute::new(
            tag,
            vr,
            PrimitiveValue::from_str_single(value),
        ))
    }

    /// Put an unsigned short attribute.
    pub fn put_u16(&mut self, tag: Tag, vr: VR, value: u16) -> Option<Attribute> {
        self.put(Attribute::new(tag, vr, value))
    }

    /// Put an unsigned long attribute.
    pub fn put_u32(&mut self, tag: Tag, vr: VR, value: u32) -> Option<Attribute> {
        self.put(Attribute::new(tag, vr, value))
    }

    /// Render the value of an attribute as text,
    /// if it is present and holds a primitive value.
    pub fn get_str(&self, tag: Tag) -> Option<Cow<'_, str>> {
        self.get(tag).and_then(|a| a.to_str().ok())
    }

    pub fn get_u16(&self, tag: Tag) -> Option<u16> {
        self.get(tag).and_then(|a| a.to_u16().ok())
    }

    pub fn get_u32(&self, tag: Tag) -> Option<u32> {
        self.get(tag).and_then(|a| a.to_u32().ok())
    }

    /// Resolve a private attribute through the private data dictionary,
    /// using the private creator reserving its block in this data set.
    pub fn lookup_private(&self, tag: Tag) -> Option<DataDictionaryEntryBuf> {
        lookup_private(self, tag)
    }

    /// Iterate over the attributes in ascending tag order.
    pub fn iter(&self) -> btree_map::Values<'_, Tag, Attribute> {
        self.entries.values()
    }

    /// Iterate mutably over the attributes in ascending tag order.
    pub fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, Tag, Attribute> {
        self.entries.values_mut()
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare this data set (as expected) with another (as actual),
    /// listing every difference found.
    pub fn compare(&self, actual: &DataSet) -> Vec<AttributeDifference> {
        let mut out = Vec::new();
        compare_data_sets(self, actual, &mut Vec::new(), &mut out);
        out
    }

    /// Whether any attribute, at any depth,
    /// holds a reference to pixel data still in its source.
    pub fn has_pixel_data_references(&self) -> bool {
        self.iter().any(|a| match a.value() {
            Value::PixelReference(_) => true,
            Value::Sequence(items) => items.iter().any(DataSet::has_pixel_data_references),
            _ => false,
        })
    }
}

/// Resolve a private attribute of the given data set
/// through the private data dictionary.
pub fn lookup_private(data_set: &DataSet, tag: Tag) -> Option<DataDictionaryEntryBuf> {
    PrivateDataDictionary::resolve(tag, |creator_tag| {
        data_set
            .get(creator_tag)
            .and_then(|a| a.to_str().ok())
            .map(|s| s.into_owned())
    })
}

impl PartialEq for DataSet {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_empty()
    }
}

impl FromIterator<Attribute> for DataSet {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        DataSet {
            entries: iter.into_iter().map(|a| (a.tag(), a)).collect(),
        }
    }
}

impl Extend<Attribute> for DataSet {
    fn extend<T: IntoIterator<Item = Attribute>>(&mut self, iter: T) {
        self.entries
            .extend(iter.into_iter().map(|a| (a.tag(), a)));
    }
}

impl IntoIterator for DataSet {
    type Item = Attribute;
    type IntoIter = btree_map::IntoValues<Tag, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Attribute;
    type IntoIter = btree_map::Values<'a, Tag, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_dictionary_std::{register_private, tags};

    #[test]
    fn iteration_is_in_tag_order() {
        let mut ds = DataSet::new();
        ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        ds.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3");
        ds.put_u16(tags::ROWS, VR::US, 64);
        let order: Vec<_> = ds.tags().collect();
        assert_eq!(
            order,
            vec![tags::SOP_INSTANCE_UID, tags::PATIENT_NAME, tags::ROWS]
        );
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.get_u16(tags::ROWS), Some(64));
    }

    #[test]
    fn attribute_mut_inserts_empty_with_dictionary_vr() {
        let mut ds = DataSet::new();
        let attr = ds.attribute_mut(tags::PATIENT_ID);
        assert!(attr.is_empty());
        assert_eq!(attr.vr(), VR::LO);
        attr.set_value("ID-1");
        assert_eq!(ds.get_str(tags::PATIENT_ID).as_deref(), Some("ID-1"));

        let unknown = ds.attribute_mut(Tag(0x0009, 0x1001));
        assert_eq!(unknown.vr(), VR::UN);
    }

    #[test]
    fn attribute_mut_resolves_private_vr() {
        register_private("DCMKIT TEST", 0x0029, 0x01, "TestPrivateValue", VR::DS);
        let mut ds = DataSet::new();
        ds.put_str(Tag(0x0029, 0x0010), VR::LO, "DCMKIT TEST");
        assert_eq!(ds.attribute_mut(Tag(0x0029, 0x1001)).vr(), VR::DS);
        // a different block is not reserved by this creator
        assert_eq!(ds.attribute_mut(Tag(0x0029, 0x1101)).vr(), VR::UN);
    }

    #[test]
    fn items_are_owned_by_value() {
        let mut item = DataSet::new();
        item.put_str(tags::CODE_VALUE, VR::SH, "A");
        let mut ds = DataSet::new();
        ds.put(Attribute::sequence(
            tags::CONCEPT_NAME_CODE_SEQUENCE,
            vec![item.clone()],
        ));
        let mut copy = ds.clone();
        copy.get_mut(tags::CONCEPT_NAME_CODE_SEQUENCE)
            .and_then(|a| a.items_mut())
            .map(|items| items[0].put_str(tags::CODE_VALUE, VR::SH, "B"));
        assert_ne!(ds, copy);
        let items = ds.get(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap().items().unwrap();
        assert_eq!(items[0], item);
    }

    #[test]
    fn empty_attributes_do_not_affect_equality() {
        let mut a = DataSet::new();
        a.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        let mut b = a.clone();
        b.attribute_mut(tags::PATIENT_ID);
        assert_eq!(a, b);
        b.get_mut(tags::PATIENT_ID).unwrap().set_null();
        assert_ne!(a, b);
    }
}
