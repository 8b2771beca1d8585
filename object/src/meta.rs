//! The file meta information group of DICOM Part 10 files.
use crate::attribute::Attribute;
use crate::dataset::DataSet;
use crate::read::{self, DataSetReader, ReadOptions};
use crate::write::{self, dataset_length, DataSetWriter, WriteOptions};
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::header::{HasLength, Header};
use dcmkit_core::value::{PrimitiveValue, C};
use dcmkit_core::{Length, Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::decode;
use dcmkit_encoding::transfer_syntax::trim_uid;
use dcmkit_encoding::{ElementDecoder, ElementEncoder};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{Read, Write};

pub const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// Position of the first meta group element in a file with a preamble.
const META_GROUP_START: u64 = 128 + 4 + 12;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The magic code `DICM` could not be read from the source.
    #[snafu(display("Could not start reading DICOM data"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The magic code could not be written.
    #[snafu(display("Could not write the magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The group length value could not be read.
    #[snafu(display("Could not read data value"))]
    ReadValueData {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data"))]
    NotDicom { backtrace: Backtrace },

    /// The header of the group length element could not be decoded.
    #[snafu(display("Could not decode data element"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: decode::Error,
    },

    /// The elements of the meta group could not be decoded.
    #[snafu(display("Could not read file meta group data set"))]
    ReadSet {
        #[snafu(backtrace)]
        source: read::Error,
    },

    /// The first element is not the group length.
    #[snafu(display("Unexpected data element tagged {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The value length of the group length element is not 4.
    #[snafu(display("Unexpected length {} for data element tagged {}", length, tag))]
    UnexpectedDataValueLength {
        tag: Tag,
        length: Length,
        backtrace: Backtrace,
    },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteSet {
        #[snafu(backtrace)]
        source: write::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information Table.
///
/// UID values are kept with their trailing null padding;
/// the accessor methods return them trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,

    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// Sending Application Entity Title
    pub sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title
    pub receiving_application_entity_title: Option<String>,
}

impl FileMetaTable {
    /// Read the magic code and the meta group from a source
    /// positioned right after the preamble.
    pub fn from_reader<R: Read>(mut file: R) -> Result<Self> {
        let mut magic = [0; 4];
        file.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
        ensure!(magic == DICM_MAGIC_CODE, NotDicomSnafu);
        Self::read_group(file)
    }

    /// Read the meta group from a source positioned right after the magic code.
    pub(crate) fn read_group<R: Read>(mut file: R) -> Result<Self> {
        let decoder = ElementDecoder::file_header();
        let (header, _) = decoder
            .decode_header(&mut file)
            .context(DecodeElementSnafu)?;
        ensure!(
            header.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH,
            UnexpectedTagSnafu { tag: header.tag() }
        );
        ensure!(
            header.length() == Length(4),
            UnexpectedDataValueLengthSnafu {
                tag: header.tag(),
                length: header.length(),
            }
        );
        let mut buf = [0; 4];
        file.read_exact(&mut buf).context(ReadValueDataSnafu)?;
        let group_length = LittleEndian::read_u32(&buf);

        let group = DataSetReader::with_position(
            file.take(u64::from(group_length)),
            decoder,
            ReadOptions::default(),
            META_GROUP_START,
        )
        .read_dataset()
        .context(ReadSetSnafu)?;

        Self::from_dataset(&group)?.into_builder().group_length(group_length).build()
    }

    /// Collect the meta group elements of a data set.
    /// Elements outside of group `0002` are ignored.
    pub fn from_dataset(group: &DataSet) -> Result<Self> {
        let text = |tag| {
            group
                .get(tag)
                .filter(|a| !a.is_empty())
                .and_then(|a| a.to_str().ok())
                .filter(|s| !s.is_empty())
                .map(|s| s.into_owned())
        };

        let mut builder = FileMetaTableBuilder::new();
        if let Some(version) = group
            .get(tags::FILE_META_INFORMATION_VERSION)
            .and_then(|a| a.to_bytes().ok())
            .filter(|v| v.len() == 2)
        {
            builder = builder.information_version([version[0], version[1]]);
        }
        if let Some(v) = text(tags::MEDIA_STORAGE_SOP_CLASS_UID) {
            builder = builder.media_storage_sop_class_uid(v);
        }
        if let Some(v) = text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID) {
            builder = builder.media_storage_sop_instance_uid(v);
        }
        if let Some(v) = text(tags::TRANSFER_SYNTAX_UID) {
            builder = builder.transfer_syntax(v);
        }
        if let Some(v) = text(tags::IMPLEMENTATION_CLASS_UID) {
            builder = builder.implementation_class_uid(v);
        }
        if let Some(v) = text(tags::IMPLEMENTATION_VERSION_NAME) {
            builder = builder.implementation_version_name(v);
        }
        if let Some(v) = text(tags::SOURCE_APPLICATION_ENTITY_TITLE) {
            builder = builder.source_application_entity_title(v);
        }
        if let Some(v) = text(SENDING_APPLICATION_ENTITY_TITLE) {
            builder = builder.sending_application_entity_title(v);
        }
        if let Some(v) = text(RECEIVING_APPLICATION_ENTITY_TITLE) {
            builder = builder.receiving_application_entity_title(v);
        }
        builder.build()
    }

    /// The transfer syntax UID, without padding.
    pub fn transfer_syntax(&self) -> &str {
        trim_uid(&self.transfer_syntax)
    }

    /// The media storage SOP class UID, without padding.
    pub fn media_storage_sop_class_uid(&self) -> &str {
        trim_uid(&self.media_storage_sop_class_uid)
    }

    /// The media storage SOP instance UID, without padding.
    pub fn media_storage_sop_instance_uid(&self) -> &str {
        trim_uid(&self.media_storage_sop_instance_uid)
    }

    /// The implementation class UID, without padding.
    pub fn implementation_class_uid(&self) -> &str {
        trim_uid(&self.implementation_class_uid)
    }

    /// Replace the transfer syntax UID,
    /// updating the group length accordingly.
    pub fn set_transfer_syntax(&mut self, uid: &str) {
        self.transfer_syntax = ui_padded(uid);
        self.update_information_group_length();
    }

    /// Recompute the group length from the current elements.
    pub fn update_information_group_length(&mut self) {
        self.information_group_length = group_length_of(&self.to_group(false));
    }

    pub fn into_builder(self) -> FileMetaTableBuilder {
        FileMetaTableBuilder {
            information_group_length: Some(self.information_group_length),
            information_version: Some(self.information_version),
            media_storage_sop_class_uid: Some(self.media_storage_sop_class_uid),
            media_storage_sop_instance_uid: Some(self.media_storage_sop_instance_uid),
            transfer_syntax: Some(self.transfer_syntax),
            implementation_class_uid: Some(self.implementation_class_uid),
            implementation_version_name: self.implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
            sending_application_entity_title: self.sending_application_entity_title,
            receiving_application_entity_title: self.receiving_application_entity_title,
        }
    }

    /// The meta group as a data set, including its group length.
    pub fn to_dataset(&self) -> DataSet {
        self.to_group(true)
    }

    fn to_group(&self, with_length: bool) -> DataSet {
        let mut group = DataSet::new();
        if with_length {
            group.put_u32(
                tags::FILE_META_INFORMATION_GROUP_LENGTH,
                VR::UL,
                self.information_group_length,
            );
        }
        group.put(Attribute::new(
            tags::FILE_META_INFORMATION_VERSION,
            VR::OB,
            PrimitiveValue::U8(C::from_slice(&self.information_version)),
        ));
        group.put_str(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            VR::UI,
            self.media_storage_sop_class_uid(),
        );
        group.put_str(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            VR::UI,
            self.media_storage_sop_instance_uid(),
        );
        group.put_str(tags::TRANSFER_SYNTAX_UID, VR::UI, self.transfer_syntax());
        group.put_str(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            self.implementation_class_uid(),
        );
        let optional = [
            (
                tags::IMPLEMENTATION_VERSION_NAME,
                VR::SH,
                &self.implementation_version_name,
            ),
            (
                tags::SOURCE_APPLICATION_ENTITY_TITLE,
                VR::AE,
                &self.source_application_entity_title,
            ),
            (
                SENDING_APPLICATION_ENTITY_TITLE,
                VR::AE,
                &self.sending_application_entity_title,
            ),
            (
                RECEIVING_APPLICATION_ENTITY_TITLE,
                VR::AE,
                &self.receiving_application_entity_title,
            ),
        ];
        for (tag, vr, value) in optional {
            if let Some(v) = value {
                group.put_str(tag, vr, v.trim_end());
            }
        }
        group
    }

    /// Write the magic code and the meta group, in explicit VR little endian.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = writer;
        writer
            .write_all(&DICM_MAGIC_CODE)
            .context(WriteMagicCodeSnafu)?;
        let mut group = self.to_group(false);
        group.put_u32(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            VR::UL,
            group_length_of(&group),
        );
        DataSetWriter::with_encoder(writer, ElementEncoder::file_header(), WriteOptions::default())
            .write_dataset(&group)
            .context(WriteSetSnafu)
    }
}

const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);

fn group_length_of(group: &DataSet) -> u32 {
    dataset_length(group, &ElementEncoder::file_header(), &WriteOptions::default()) as u32
}

/// A builder for DICOM meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    information_group_length: Option<u32>,
    information_version: Option<[u8; 2]>,
    media_storage_sop_class_uid: Option<String>,
    media_storage_sop_instance_uid: Option<String>,
    transfer_syntax: Option<String>,
    implementation_class_uid: Option<String>,
    implementation_version_name: Option<String>,
    source_application_entity_title: Option<String>,
    sending_application_entity_title: Option<String>,
    receiving_application_entity_title: Option<String>,
}

/// Ensure that the string is even lengthed, by adding a trailing character
/// if not.
fn padded<T>(s: T, pad: char) -> String
where
    T: Into<String>,
{
    let mut s = s.into();
    if s.len() % 2 == 1 {
        s.push(pad);
    }
    s
}

fn ui_padded<T>(s: T) -> String
where
    T: Into<String>,
{
    padded(s, '\0')
}

fn txt_padded<T>(s: T) -> String
where
    T: Into<String>,
{
    padded(s, ' ')
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the meta information group length.
    /// It is computed from the other elements otherwise.
    pub fn group_length(mut self, value: u32) -> FileMetaTableBuilder {
        self.information_group_length = Some(value);
        self
    }

    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    pub fn media_storage_sop_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_class_uid = Some(ui_padded(value));
        self
    }

    pub fn media_storage_sop_instance_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_instance_uid = Some(ui_padded(value));
        self
    }

    pub fn transfer_syntax<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.transfer_syntax = Some(ui_padded(value));
        self
    }

    pub fn implementation_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_class_uid = Some(ui_padded(value));
        self
    }

    pub fn implementation_version_name<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_version_name = Some(txt_padded(value));
        self
    }

    pub fn source_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.source_application_entity_title = Some(txt_padded(value));
        self
    }

    pub fn sending_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.sending_application_entity_title = Some(txt_padded(value));
        self
    }

    pub fn receiving_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.receiving_application_entity_title = Some(txt_padded(value));
        self
    }

    /// Build the table.
    ///
    /// The SOP class and instance UIDs and the transfer syntax are required.
    /// The implementation class UID and version name
    /// default to those of this library,
    /// and the information version defaults to `[0, 1]`.
    pub fn build(self) -> Result<FileMetaTable> {
        let media_storage_sop_class_uid =
            self.media_storage_sop_class_uid.context(MissingElementSnafu {
                alias: "MediaStorageSOPClassUID",
            })?;
        let media_storage_sop_instance_uid =
            self.media_storage_sop_instance_uid.context(MissingElementSnafu {
                alias: "MediaStorageSOPInstanceUID",
            })?;
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntax",
        })?;
        let (implementation_class_uid, implementation_version_name) =
            match self.implementation_class_uid {
                Some(uid) => (uid, self.implementation_version_name),
                None => (
                    ui_padded(IMPLEMENTATION_CLASS_UID),
                    self.implementation_version_name
                        .or_else(|| Some(txt_padded(IMPLEMENTATION_VERSION_NAME))),
                ),
            };

        let mut table = FileMetaTable {
            information_group_length: 0,
            information_version: self.information_version.unwrap_or([0, 1]),
            media_storage_sop_class_uid,
            media_storage_sop_instance_uid,
            transfer_syntax,
            implementation_class_uid,
            implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
            sending_application_entity_title: self.sending_application_entity_title,
            receiving_application_entity_title: self.receiving_application_entity_title,
        };
        match self.information_group_length {
            Some(len) => table.information_group_length = len,
            None => table.update_information_group_length(),
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;

    #[rustfmt::skip]
    const TEST_META_1: &[u8] = &[
        // magic code
        b'D', b'I', b'C', b'M',
        // File Meta Information Group Length: (0000,0002) ; UL ; 4 ; 200
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0xc8, 0x00, 0x00, 0x00,
        // File Meta Information Version: (0002, 0001) ; OB ; 2 ; [0x00, 0x01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // Media Storage SOP Class UID (0002, 0002) ; UI ; 26 ; "1.2.840.10008.5.1.4.1.1.1\0" (ComputedRadiographyImageStorage)
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e,
        0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e, 0x31, 0x2e,
        0x31, 0x00,
        // Media Storage SOP Instance UID (0002, 0003) ; UI ; 56 ; "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x38, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x2e, 0x34, 0x2e,
        0x35, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35,
        0x36, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x2e, 0x31, 0x32,
        0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x00,
        // Transfer Syntax UID (0002,0010) ; UI ; 20 ; "1.2.840.10008.1.2.1\0" (LittleEndianExplicit)
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e,
        0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
        // Implementation Class UID (0002,0012) ; UI ; 20 ; "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x34, 0x35, 0x2e,
        0x36, 0x2e, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x2e, 0x32, 0x33, 0x34,
        // optional elements:

        // Implementation Version Name (0002,0013) ; SH ; "RUSTY_DICOM_269"
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x10, 0x00, 0x52, 0x55, 0x53, 0x54, 0x59, 0x5f, 0x44, 0x49,
        0x43, 0x4f, 0x4d, 0x5f, 0x32, 0x36, 0x39, 0x20,
        // Source Application Entity Title (0002, 0016) ; AE ; 0 (no data)
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00
    ];

    #[test]
    fn read_meta_table_from_reader() {
        let table = FileMetaTable::from_reader(TEST_META_1).unwrap();

        assert_eq!(table.information_group_length, 200);
        assert_eq!(table.information_version, [0u8, 1u8]);
        assert_eq!(table.media_storage_sop_class_uid(), "1.2.840.10008.5.1.4.1.1.1");
        assert_eq!(
            table.media_storage_sop_instance_uid(),
            "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567"
        );
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        assert_eq!(table.implementation_class_uid, "1.2.345.6.7890.1.234");
        assert_eq!(
            table.implementation_version_name.as_deref(),
            Some("RUSTY_DICOM_269 ")
        );
        assert_eq!(table.source_application_entity_title, None);
        assert_eq!(table.sending_application_entity_title, None);
    }

    #[test]
    fn not_dicom() {
        assert_matches!(
            FileMetaTable::from_reader(&b"DICN"[..]),
            Err(Error::NotDicom { .. })
        );
    }

    #[test]
    fn missing_transfer_syntax() {
        assert_matches!(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
                .media_storage_sop_instance_uid("1.2.3")
                .build(),
            Err(Error::MissingElement {
                alias: "TransferSyntax",
                ..
            })
        );
    }

    #[test]
    fn write_then_read() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2")
            .source_application_entity_title("STORESCU")
            .build()
            .unwrap();
        assert_eq!(table.implementation_class_uid(), IMPLEMENTATION_CLASS_UID);

        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        assert_eq!(&out[..4], b"DICM");
        assert_eq!(
            LittleEndian::read_u32(&out[12..16]) as usize,
            out.len() - 16
        );
        assert_eq!(table.information_group_length as usize, out.len() - 16);

        let read_back = FileMetaTable::from_reader(&out[..]).unwrap();
        assert_eq!(read_back, table);
    }

    #[test]
    fn group_length_follows_transfer_syntax() {
        let mut table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2")
            .build()
            .unwrap();
        let before = table.information_group_length;
        table.set_transfer_syntax("1.2.840.10008.1.2.1");
        // "1.2.840.10008.1.2" pads to 18 bytes, "1.2.840.10008.1.2.1" to 20
        assert_eq!(table.information_group_length, before + 2);
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
    }
}
