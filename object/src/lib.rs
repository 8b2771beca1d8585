//! This crate contains the in-memory model of DICOM data sets
//! and the means to read and write them.
//!
//! A [`DataSet`] is an ordered map of [`Attribute`]s,
//! whose values may be nested data sets.
//! Data sets are decoded with a [`DataSetReader`]
//! and encoded with a [`DataSetWriter`],
//! in any of the registered transfer syntaxes.
//! A [`DicomFile`] pairs a data set with its file meta group.
//!
//! # Examples
//!
//! Read a file and fetch some attributes:
//!
//! ```no_run
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let file = open_file("0001.dcm")?;
//!
//! let patient_name = file.get_str(tags::PATIENT_NAME);
//! let rows = file.get_u16(tags::ROWS);
//! # Ok(())
//! # }
//! ```
//!
//! Pixel data can be left in the file until needed:
//!
//! ```no_run
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::{OpenFileOptions, ReadOptions};
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let file = OpenFileOptions::new()
//!     .read_options(ReadOptions::new().store_pixel_data_references(true))
//!     .open_file("0002.dcm")?;
//! if let Some(reference) = file.get(tags::PIXEL_DATA).and_then(|a| a.pixel_data_reference()) {
//!     let pixels = file.load_pixel_data_reference(&reference)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Data sets can be compared attribute by attribute:
//!
//! ```
//! # use dcmkit_dictionary_std::tags;
//! # use dcmkit_object::{DataSet, VR};
//! let mut expected = DataSet::new();
//! expected.put_str(tags::PATIENT_ID, VR::LO, "P01");
//! let mut actual = expected.clone();
//! actual.put_str(tags::PATIENT_ID, VR::LO, "P02");
//!
//! for difference in expected.compare(&actual) {
//!     println!("{}", difference);
//! }
//! ```
pub mod attribute;
pub mod dataset;
pub mod diff;
pub mod file;
pub mod meta;
pub mod pixeldata;
pub mod read;
pub mod record;
pub mod transcode;
pub mod write;

pub use crate::attribute::{AccessError, Attribute, PixelDataReference, Value};
pub use crate::dataset::DataSet;
pub use crate::diff::{AttributeDifference, DifferenceKind};
pub use crate::file::{from_reader, open_file, DicomFile, OpenFileOptions, ReadPreamble};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::pixeldata::{ImagePixelDescription, PixelDataSource, PixelFragmentSequence};
pub use crate::read::{read_dataset, DataSetReader, ReadOptions};
pub use crate::record::{DirectoryRecord, RecordDifference, RecordId, RecordTree};
pub use crate::transcode::change_transfer_syntax;
pub use crate::write::{write_dataset, DataSetWriter, WriteOptions};

pub use dcmkit_core::{PrimitiveValue, Tag, VR};
pub use dcmkit_dictionary_std::StandardDataDictionary;

use snafu::{Backtrace, Snafu};

/// The implementation class UID written to the meta group of new files.
///
/// Generated as a UUID-derived UID under the `2.25` root.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.207416298461308937181957126372413553409";

/// The implementation version name written to the meta group of new files.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMKIT 0.1";

/// An error which may occur when loading a DICOM file
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read from file '{}'", filename.display()))]
    ReadFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not read data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: crate::read::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    /// Neither the magic code nor a non-Part-10 read was allowed
    #[snafu(display("Not a DICOM Part 10 file"))]
    NotDicom { backtrace: Backtrace },
    /// Pixel data references need the file the object was opened from
    #[snafu(display("No backing file to load pixel data from"))]
    NoBackingFile { backtrace: Backtrace },
}

/// An error which may occur when writing a DICOM file
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write meta group data set"))]
    WriteMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not write data set"))]
    WriteDataSet {
        #[snafu(backtrace)]
        source: crate::write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not load referenced pixel data"))]
    ResolvePixelData {
        #[snafu(backtrace)]
        source: ReadError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::value::C;
    use dcmkit_dictionary_std::tags;
    use dcmkit_transfer_syntax_registry::entries::{
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN,
    };
    use matches::assert_matches;

    fn sample_file(ts: &str) -> DicomFile {
        let meta = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4.5")
            .transfer_syntax(ts)
            .build()
            .unwrap();
        let mut ds = DataSet::new();
        ds.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5");
        ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        ds.put_u16(tags::ROWS, VR::US, 2);
        ds.put_u16(tags::COLUMNS, VR::US, 2);
        ds.put_u16(tags::BITS_ALLOCATED, VR::US, 16);
        ds.put(Attribute::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(C::from_vec(vec![1, 2, 3, 4])),
        ));
        DicomFile::new(meta, ds)
    }

    #[test]
    fn write_and_read_back_from_memory() {
        for ts in [
            EXPLICIT_VR_LITTLE_ENDIAN.uid(),
            EXPLICIT_VR_BIG_ENDIAN.uid(),
            DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN.uid(),
        ] {
            let file = sample_file(ts);
            let mut out = Vec::new();
            file.write_all(&mut out, WriteOptions::default()).unwrap();
            assert_eq!(&out[128..132], b"DICM");

            let read_back = from_reader(&out[..]).unwrap();
            assert_eq!(read_back.meta(), file.meta());
            assert_eq!(read_back.dataset(), file.dataset());
            assert!(read_back.preamble().is_some());
        }
    }

    #[test]
    fn files_without_preamble() {
        let file = sample_file(EXPLICIT_VR_LITTLE_ENDIAN.uid());
        let mut out = Vec::new();
        file.write_meta_and_dataset(&mut out, WriteOptions::default())
            .unwrap();
        let read_back = from_reader(&out[..]).unwrap();
        assert!(read_back.preamble().is_none());
        assert_eq!(read_back.dataset(), file.dataset());

        assert_matches!(
            OpenFileOptions::new()
                .read_preamble(ReadPreamble::Always)
                .from_reader(&out[..]),
            Err(ReadError::NotDicom { .. })
        );
    }

    #[test]
    fn references_need_a_backing_file() {
        let file = sample_file(EXPLICIT_VR_LITTLE_ENDIAN.uid());
        assert_matches!(
            file.load_pixel_data_reference(&PixelDataReference {
                offset: 0,
                length: 8
            }),
            Err(ReadError::NoBackingFile { .. })
        );
    }
}
