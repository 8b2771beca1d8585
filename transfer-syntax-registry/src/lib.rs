//! This crate contains the DICOM transfer syntax registry
//! and the registry of pixel data codecs.
//!
//! The transfer syntax registry maps the UID of a transfer syntax
//! into the respective transfer syntax specifier.
//! The four uncompressed syntaxes in [`entries`] are always available.
//! Further syntaxes are registered at run-time,
//! usually together with a codec in the [`CodecRegistry`].
//!
//! ```
//! use dcmkit_transfer_syntax_registry::{register_rle_lossless, TransferSyntaxRegistry};
//!
//! assert!(TransferSyntaxRegistry::resolve("1.2.840.10008.1.2.1\0").is_some());
//!
//! register_rle_lossless();
//! let ts = TransferSyntaxRegistry::resolve("1.2.840.10008.1.2.5").unwrap();
//! assert!(ts.is_encapsulated());
//! ```
//!
//! Both registries are process-wide and guarded by a read-write lock,
//! so readers never observe a partially applied update.

pub mod adapters;
pub mod deflate;
pub mod entries;

use dcmkit_encoding::adapters::PixelDataCodec;
use dcmkit_encoding::transfer_syntax::trim_uid;
use dcmkit_encoding::{TransferSyntax, TransferSyntaxIndex};
use once_cell::sync::Lazy;
use snafu::{ensure, Backtrace, Snafu};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// An error when updating the transfer syntax registry.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegistryError {
    /// A different transfer syntax is already registered with this UID.
    #[snafu(display("Transfer syntax {} is already registered", uid))]
    DuplicateUid {
        uid: &'static str,
        backtrace: Backtrace,
    },
    /// Built-in transfer syntaxes cannot be removed.
    #[snafu(display("Transfer syntax {} is built in and cannot be unregistered", uid))]
    BuiltIn {
        uid: &'static str,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

static REGISTRY: Lazy<RwLock<HashMap<&'static str, TransferSyntax>>> = Lazy::new(|| {
    RwLock::new(
        entries::BUILT_IN
            .iter()
            .map(|ts| (ts.uid(), *ts))
            .collect(),
    )
});

static CODECS: Lazy<RwLock<HashMap<String, Arc<dyn PixelDataCodec>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Zero-sized representative of the main transfer syntax registry.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain a transfer syntax by its UID.
    ///
    /// Trailing null characters and spaces are ignored.
    pub fn resolve(uid: &str) -> Option<TransferSyntax> {
        let uid = trim_uid(uid);
        let map = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        map.get(uid).copied()
    }

    /// Register a transfer syntax.
    ///
    /// Registering the same descriptor twice has no effect.
    /// Fails if a different descriptor already holds the same UID.
    pub fn register(ts: TransferSyntax) -> Result<()> {
        let mut map = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = map.get(ts.uid()) {
            ensure!(
                existing.same_descriptor(&ts),
                DuplicateUidSnafu { uid: ts.uid() }
            );
            return Ok(());
        }
        debug!("Registering transfer syntax {} ({})", ts.uid(), ts.name());
        map.insert(ts.uid(), ts);
        Ok(())
    }

    /// Remove a transfer syntax from the registry.
    ///
    /// Removing a syntax which is not registered has no effect.
    /// Built-in syntaxes cannot be removed.
    /// The codec for the same UID, if any, is left in place.
    pub fn unregister(ts: &TransferSyntax) -> Result<()> {
        ensure!(
            !Self::is_built_in(ts.uid()),
            BuiltInSnafu { uid: ts.uid() }
        );
        let mut map = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
        if map.remove(ts.uid()).is_some() {
            debug!("Unregistered transfer syntax {}", ts.uid());
        }
        Ok(())
    }

    /// Whether the given UID is one of the built-in transfer syntaxes.
    pub fn is_built_in(uid: &str) -> bool {
        let uid = trim_uid(uid);
        entries::BUILT_IN.iter().any(|ts| ts.uid() == uid)
    }

    /// A snapshot of all registered transfer syntaxes, sorted by UID.
    pub fn all() -> Vec<TransferSyntax> {
        let map = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<_> = map.values().copied().collect();
        all.sort_by_key(|ts| ts.uid());
        all
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<TransferSyntax> {
        Self::resolve(uid)
    }
}

/// Zero-sized representative of the pixel data codec registry.
///
/// The codec registry is kept apart from the transfer syntax registry.
/// Callers register both, as the `register_*` functions of this crate do.
#[derive(Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct CodecRegistry;

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = CODECS.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_set().entries(map.keys()).finish()
    }
}

impl CodecRegistry {
    /// Register a codec under the UID of the transfer syntax it implements,
    /// replacing any previous codec for that UID.
    pub fn register(codec: Arc<dyn PixelDataCodec>) {
        let uid = trim_uid(codec.transfer_syntax()).to_string();
        debug!("Registering pixel data codec for {}", uid);
        let mut map = CODECS.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(uid, codec);
    }

    /// Remove the codec for the given transfer syntax UID, returning it.
    pub fn unregister(uid: &str) -> Option<Arc<dyn PixelDataCodec>> {
        let mut map = CODECS.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(trim_uid(uid))
    }

    /// Obtain the codec for the given transfer syntax UID.
    pub fn get(uid: &str) -> Option<Arc<dyn PixelDataCodec>> {
        let map = CODECS.read().unwrap_or_else(PoisonError::into_inner);
        map.get(trim_uid(uid)).cloned()
    }
}

/// Make RLE Lossless available,
/// registering both the transfer syntax and its codec.
pub fn register_rle_lossless() {
    // the descriptor is constant, so registering it again never conflicts
    let _ = TransferSyntaxRegistry::register(entries::RLE_LOSSLESS);
    CodecRegistry::register(Arc::new(adapters::rle_lossless::RleLosslessAdapter));
}

/// Make Deflated Image Frame Compression available,
/// registering both the transfer syntax and its codec.
pub fn register_deflated_image_frame() {
    let _ = TransferSyntaxRegistry::register(entries::DEFLATED_IMAGE_FRAME_COMPRESSION);
    CodecRegistry::register(Arc::new(
        adapters::deflated::DeflatedImageFrameAdapter,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::Endianness;
    use matches::assert_matches;

    #[test]
    fn built_ins_are_present() {
        for uid in [
            "1.2.840.10008.1.2",
            "1.2.840.10008.1.2.1",
            "1.2.840.10008.1.2.2",
            "1.2.840.10008.1.2.1.99",
        ] {
            let ts = TransferSyntaxRegistry::resolve(uid).unwrap();
            assert_eq!(ts.uid(), uid);
            assert!(TransferSyntaxRegistry::is_built_in(uid));
        }
        let ts = TransferSyntaxRegistry::resolve("1.2.840.10008.1.2.2\0").unwrap();
        assert_eq!(ts.endianness(), Endianness::Big);
        assert!(TransferSyntaxRegistry.get("1.2.840.10008.1.2 ").is_some());
    }

    #[test]
    fn built_ins_cannot_be_removed() {
        assert_matches!(
            TransferSyntaxRegistry::unregister(&entries::EXPLICIT_VR_LITTLE_ENDIAN),
            Err(RegistryError::BuiltIn { .. })
        );
        assert!(TransferSyntaxRegistry::resolve("1.2.840.10008.1.2.1").is_some());
    }

    #[test]
    fn register_and_unregister() {
        const PRIVATE_TS: TransferSyntax = TransferSyntax::new(
            "1.2.3.4.5.6.7.8.1",
            "Private syntax",
            Endianness::Little,
            true,
            false,
            false,
        );
        const CONFLICT: TransferSyntax = TransferSyntax::new(
            "1.2.3.4.5.6.7.8.1",
            "Another private syntax",
            Endianness::Big,
            true,
            false,
            false,
        );

        TransferSyntaxRegistry::register(PRIVATE_TS).unwrap();
        // identical registration is a no-op
        TransferSyntaxRegistry::register(PRIVATE_TS).unwrap();
        assert_matches!(
            TransferSyntaxRegistry::register(CONFLICT),
            Err(RegistryError::DuplicateUid { .. })
        );
        let ts = TransferSyntaxRegistry::resolve("1.2.3.4.5.6.7.8.1").unwrap();
        assert_eq!(ts.name(), "Private syntax");
        assert!(TransferSyntaxRegistry::all().contains(&PRIVATE_TS));

        TransferSyntaxRegistry::unregister(&PRIVATE_TS).unwrap();
        assert!(TransferSyntaxRegistry::resolve("1.2.3.4.5.6.7.8.1").is_none());
        // absent: no-op
        TransferSyntaxRegistry::unregister(&PRIVATE_TS).unwrap();
    }

    #[test]
    fn codec_registration() {
        register_deflated_image_frame();
        let codec = CodecRegistry::get("1.2.840.10008.1.2.8.1\0").unwrap();
        assert_eq!(codec.transfer_syntax(), "1.2.840.10008.1.2.8.1");
        let ts = TransferSyntaxRegistry::resolve("1.2.840.10008.1.2.8.1").unwrap();
        assert!(ts.is_encapsulated());
        // idempotent
        register_deflated_image_frame();
    }
}
