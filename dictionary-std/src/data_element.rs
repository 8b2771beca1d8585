use crate::tags::ENTRIES;
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef};
use dcmkit_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// The unit type [`StandardDataDictionary`]
/// already provides access to it through the [`DataDictionary`] trait.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DataDictionaryEntryRef<'static>>,
    /// repeating elements of the form (ggxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn index(&mut self, entry: &'static DataDictionaryEntryRef<'static>) {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        if is_repeating_group(entry.tag.group()) {
            self.repeating_ggxx.insert(entry.tag);
        }
    }

    /// The number of indexed entries.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
    vm: (1, 1),
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VR::LO,
    vm: (1, 1),
};

/// Whether attributes of this group repeat over the `xx` portion
/// of the group number (curves in 50xx, overlays in 60xx).
fn is_repeating_group(group: u16) -> bool {
    matches!(group & 0xFF00, 0x5000 | 0x6000)
}

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// The dictionary index is initialized upon first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DataDictionaryEntryRef<'static>> {
        let r = registry();
        r.by_tag
            .get(&tag)
            .or_else(|| {
                // repeating groups only cover even (standard) groups
                if tag.group() & 1 == 1 {
                    return None;
                }
                let group_trimmed = Tag(tag.group() & 0xFF00, tag.element());
                if r.repeating_ggxx.contains(&group_trimmed) {
                    return r.by_tag.get(&group_trimmed);
                }
                None
            })
            .copied()
            .or_else(|| {
                if tag.is_private_creator() {
                    return Some(&PRIVATE_CREATOR_ENTRY);
                }
                if tag.is_group_length() {
                    return Some(&GROUP_LENGTH_ENTRY);
                }
                None
            })
    }

    /// Convenience shortcut for the typical VR of a tag.
    pub fn vr_of(tag: Tag) -> Option<VR> {
        Self::indexed_tag(tag).map(|e| e.vr)
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry {
        by_name: HashMap::with_capacity(ENTRIES.len() + 1),
        by_tag: HashMap::with_capacity(ENTRIES.len()),
        repeating_ggxx: HashSet::with_capacity(75),
    };
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic group length is not a table entry
    d.by_name.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef};
    use dcmkit_core::header::{Tag, VR};

    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Tag(0x0010, 0x0010),
                alias: "PatientName",
                vr: VR::PN,
                vm: (1, 1),
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VR::OW);

        let image_type = dict.by_name("ImageType").unwrap();
        assert_eq!(image_type.vm.0, 2);
    }

    #[test]
    fn generic_entries() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.by_tag(Tag(0x0028, 0x0000)).unwrap().vr, VR::UL);
        assert_eq!(dict.by_tag(Tag(0x0029, 0x0011)).unwrap().alias, "PrivateCreator");
        assert_eq!(dict.by_tag(Tag(0x6002, 0x3000)).unwrap().vr, VR::OW);
        assert!(dict.by_tag(Tag(0x0029, 0x1011)).is_none());
    }

    #[test]
    fn acquisition_attributes_have_their_vr() {
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0018, 0x1030)), Some(VR::LO));
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0020, 0x1041)), Some(VR::DS));
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0018, 0x0050)), Some(VR::DS));
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0008, 0x002A)), Some(VR::DT));

        let dict = StandardDataDictionary;
        let protocol = dict.by_name("ProtocolName").unwrap();
        assert_eq!(protocol.tag, crate::tags::PROTOCOL_NAME);
        let frame_of_reference = dict.by_name("FrameOfReferenceUID").unwrap();
        assert_eq!(frame_of_reference.tag, Tag(0x0020, 0x0052));
        assert_eq!(frame_of_reference.vr, VR::UI);
    }

    #[test]
    fn repeating_groups() {
        let dict = StandardDataDictionary;

        let rows = dict.by_tag(Tag(0x6002, 0x0010)).unwrap();
        assert_eq!(rows.alias, "OverlayRows");
        assert_eq!(rows.vr, VR::US);
        assert_eq!(dict.by_tag(Tag(0x60EE, 0x3000)).unwrap().alias, "OverlayData");
        assert_eq!(dict.by_tag(Tag(0x501E, 0x3000)).unwrap().alias, "CurveData");

        // odd groups are private
        assert!(dict.by_tag(Tag(0x6001, 0x1010)).is_none());
        // only listed elements repeat
        assert!(dict.by_tag(Tag(0x6002, 0x0F00)).is_none());
    }

    #[test]
    fn registry_holds_the_whole_table() {
        let registry = super::registry();
        assert!(registry.len() > 4000);
        assert!(!registry.is_empty());

        let dict = StandardDataDictionary;
        assert!(dict.by_name("GantryAngle").is_some());
        assert!(dict.by_name("WaveformData").is_some());
        assert_eq!(dict.by_name("RetiredOrMadeUpAttribute"), None);
    }
}
