//! Run-time dictionary of private attributes.
//!
//! Private data elements `(gggg,xxee)` live in a block `xx`
//! reserved by a private creator element `(gggg,00xx)`.
//! The same private attribute may therefore land on different tags
//! in different data sets, so look-ups are keyed by
//! the creator string, the group, and the element offset `ee`.

use dcmkit_core::dictionary::{DataDictionaryEntryBuf, Multiplicity};
use dcmkit_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

type Key = (String, u16, u8);

static PRIVATE: Lazy<RwLock<HashMap<Key, DataDictionaryEntryBuf>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Handle to the process-wide private attribute dictionary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrivateDataDictionary;

impl PrivateDataDictionary {
    /// Register a private attribute for the given creator.
    ///
    /// The entry's tag is recorded with the block byte zeroed,
    /// as in `(gggg,00ee)`.
    /// Registering the same key again replaces the previous entry.
    pub fn register(
        creator: &str,
        group: u16,
        element_offset: u8,
        alias: impl Into<String>,
        vr: VR,
        vm: Multiplicity,
    ) {
        let entry = DataDictionaryEntryBuf {
            tag: Tag(group, u16::from(element_offset)),
            alias: alias.into(),
            vr,
            vm,
        };
        let key = (normalize(creator), group, element_offset);
        let mut table = PRIVATE.write().unwrap_or_else(|e| e.into_inner());
        table.insert(key, entry);
    }

    /// Remove a private attribute, if registered.
    pub fn unregister(creator: &str, group: u16, element_offset: u8) {
        let key = (normalize(creator), group, element_offset);
        let mut table = PRIVATE.write().unwrap_or_else(|e| e.into_inner());
        table.remove(&key);
    }

    /// Look up a private attribute by creator and concrete tag.
    pub fn by_creator(creator: &str, tag: Tag) -> Option<DataDictionaryEntryBuf> {
        if !tag.is_private() || tag.element() < 0x1000 {
            return None;
        }
        let key = (normalize(creator), tag.group(), (tag.element() & 0x00FF) as u8);
        let table = PRIVATE.read().unwrap_or_else(|e| e.into_inner());
        table.get(&key).cloned()
    }

    /// Look up a private attribute by concrete tag,
    /// resolving its creator with the given function.
    ///
    /// `creator_of` receives the private creator tag `(gggg,00xx)`
    /// reserving the block of `tag`, and should return its value
    /// in the data set being inspected.
    pub fn resolve<F>(tag: Tag, creator_of: F) -> Option<DataDictionaryEntryBuf>
    where
        F: FnOnce(Tag) -> Option<String>,
    {
        let creator_tag = private_creator_tag(tag)?;
        let creator = creator_of(creator_tag)?;
        Self::by_creator(&creator, tag)
    }
}

/// Register a single-valued private attribute for the given creator.
///
/// Shortcut for [`PrivateDataDictionary::register`].
pub fn register_private(
    creator: &str,
    group: u16,
    element_offset: u8,
    alias: impl Into<String>,
    vr: VR,
) {
    PrivateDataDictionary::register(creator, group, element_offset, alias, vr, (1, 1));
}

/// The private creator tag which reserves the block of the given private tag.
pub fn private_creator_tag(tag: Tag) -> Option<Tag> {
    if !tag.is_private() || tag.element() < 0x1000 {
        return None;
    }
    Some(Tag(tag.group(), tag.element() >> 8))
}

fn normalize(creator: &str) -> String {
    creator.trim_end_matches(|c: char| c == ' ' || c == '\0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_lookup_by_creator_block() {
        PrivateDataDictionary::register("ACME 1.1", 0x0019, 0x10, "AcmeScanMode", VR::CS, (1, 1));

        // block 0x10 reserved by (0019,0010)
        let entry = PrivateDataDictionary::resolve(Tag(0x0019, 0x1010), |creator| {
            assert_eq!(creator, Tag(0x0019, 0x0010));
            Some("ACME 1.1 ".to_string())
        })
        .expect("entry should resolve");
        assert_eq!(entry.alias, "AcmeScanMode");
        assert_eq!(entry.vr, VR::CS);

        // same attribute in another block
        let entry = PrivateDataDictionary::by_creator("ACME 1.1", Tag(0x0019, 0x2210));
        assert!(entry.is_some());

        assert!(PrivateDataDictionary::by_creator("OTHER", Tag(0x0019, 0x1010)).is_none());
        assert!(PrivateDataDictionary::by_creator("ACME 1.1", Tag(0x0018, 0x1010)).is_none());

        PrivateDataDictionary::unregister("ACME 1.1", 0x0019, 0x10);
        assert!(PrivateDataDictionary::by_creator("ACME 1.1", Tag(0x0019, 0x1010)).is_none());
    }
}
