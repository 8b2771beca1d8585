//! Module containing the transfer syntax descriptor
//! and the trait for looking them up by UID.
//!
//! A transfer syntax determines the byte order of the data set,
//! whether value representations are written explicitly,
//! and whether the pixel data is encapsulated (compressed).
//! Built-in syntaxes are declared as constants,
//! while codec-provided ones are registered at run-time
//! (see the `dcmkit-transfer-syntax-registry` crate).

use crate::decode::ElementDecoder;
use crate::encode::ElementEncoder;
use byteordered::Endianness;
use std::hash::{Hash, Hasher};

/// A DICOM transfer syntax specifier.
///
/// Two specifiers are equal when they share the same UID.
/// Use [`same_descriptor`](TransferSyntax::same_descriptor)
/// to compare every property.
#[derive(Debug, Clone, Copy)]
pub struct TransferSyntax {
    uid: &'static str,
    name: &'static str,
    byte_order: Endianness,
    explicit_vr: bool,
    encapsulated: bool,
    deflated: bool,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        encapsulated: bool,
        deflated: bool,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            encapsulated,
            deflated,
        }
    }

    /// Create a descriptor for a syntax with encapsulated pixel data,
    /// which is always explicit VR little endian.
    pub const fn new_encapsulated(uid: &'static str, name: &'static str) -> Self {
        Self::new(uid, name, Endianness::Little, true, true, false)
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether value representations are written explicitly.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Whether pixel data is encapsulated in fragments.
    pub const fn is_encapsulated(&self) -> bool {
        self.encapsulated
    }

    /// Whether the data set is wrapped in a deflate stream.
    pub const fn is_deflated(&self) -> bool {
        self.deflated
    }

    /// Whether the pixel data is kept in its native form.
    pub const fn is_native(&self) -> bool {
        !self.encapsulated
    }

    /// Whether every property of both descriptors is the same,
    /// not only the UID.
    pub fn same_descriptor(&self, other: &TransferSyntax) -> bool {
        self.uid == other.uid
            && self.name == other.name
            && self.byte_order == other.byte_order
            && self.explicit_vr == other.explicit_vr
            && self.encapsulated == other.encapsulated
            && self.deflated == other.deflated
    }

    /// Obtain an element decoder for this transfer syntax.
    pub fn decoder(&self) -> ElementDecoder {
        ElementDecoder::new(self.byte_order, self.explicit_vr)
    }

    /// Obtain an element encoder for this transfer syntax.
    pub fn encoder(&self) -> ElementEncoder {
        ElementEncoder::new(self.byte_order, self.explicit_vr)
    }
}

impl PartialEq for TransferSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for TransferSyntax {}

impl Hash for TransferSyntax {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

/// Trim the padding that UIDs may carry in a data set
/// (trailing null characters and spaces).
pub fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches(|c: char| c == '\0' || c == ' ')
}

/// Base trait for a type which can look up transfer syntaxes by UID.
pub trait TransferSyntaxIndex {
    /// Obtain the transfer syntax identified by the given UID,
    /// or `None` if it is not known.
    fn get(&self, uid: &str) -> Option<TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<TransferSyntax> {
        (**self).get(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_uid() {
        let a = TransferSyntax::new("1.2.3", "A", Endianness::Little, true, false, false);
        let b = TransferSyntax::new("1.2.3", "B", Endianness::Big, false, false, false);
        let c = TransferSyntax::new("1.2.4", "A", Endianness::Little, true, false, false);
        assert_eq!(a, b);
        assert!(!a.same_descriptor(&b));
        assert!(a.same_descriptor(&a));
        assert_ne!(a, c);
    }

    #[test]
    fn trims_uid_padding() {
        assert_eq!(trim_uid("1.2.840.10008.1.2\0"), "1.2.840.10008.1.2");
        assert_eq!(trim_uid("1.2.840.10008.1.2.1 "), "1.2.840.10008.1.2.1");
        assert_eq!(trim_uid("1.2"), "1.2");
    }

    #[test]
    fn encapsulated_is_explicit_le() {
        let ts = TransferSyntax::new_encapsulated("1.2.840.10008.1.2.5", "RLE Lossless");
        assert!(ts.is_explicit_vr());
        assert!(ts.is_encapsulated());
        assert!(!ts.is_native());
        assert_eq!(ts.endianness(), Endianness::Little);
    }
}
