//! DICOM Part 10 files.
use crate::attribute::Value;
use crate::dataset::DataSet;
use crate::meta::{FileMetaTable, FileMetaTableBuilder, DICM_MAGIC_CODE};
use crate::read::{read_dataset, DataSetReader, ReadOptions};
use crate::transcode::{self, LoadPixelDataSnafu};
use crate::write::{write_dataset, WriteOptions};
use crate::{
    NoBackingFileSnafu, NotDicomSnafu, OpenFileSnafu, ParseMetaDataSetSnafu, PixelDataReference,
    ReadDataSetSnafu, ReadError, ReadFileSnafu, ReadPreambleBytesSnafu,
    ReadUnsupportedTransferSyntaxSnafu, ResolvePixelDataSnafu, WriteDataSetSnafu, WriteError,
    WriteFileSnafu, WriteMetaDataSetSnafu, WritePreambleSnafu, WriteUnsupportedTransferSyntaxSnafu,
};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::decode::decode_value;
use dcmkit_encoding::TransferSyntax;
use dcmkit_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{OptionExt, ResultExt};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type Result<T, E = ReadError> = std::result::Result<T, E>;

/// Size of the file preamble.
pub const PREAMBLE_LENGTH: usize = 128;

/// Open a DICOM file with the default options.
pub fn open_file<P>(path: P) -> Result<DicomFile>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Read a DICOM file from a byte source with the default options.
pub fn from_reader<R>(source: R) -> Result<DicomFile>
where
    R: Read,
{
    OpenFileOptions::new().from_reader(source)
}

/// Whether to expect the 128-byte preamble before the magic code.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Look for the magic code both after a preamble and at the very start
    #[default]
    Auto,
    /// The source starts with the magic code
    Never,
    /// The source starts with a preamble
    Always,
}

/// A builder type for opening a DICOM file with additional options.
///
/// ```no_run
/// # use dcmkit_object::{OpenFileOptions, ReadOptions};
/// let file = OpenFileOptions::new()
///     .read_options(ReadOptions::new().store_pixel_data_references(true))
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct OpenFileOptions {
    read_options: ReadOptions,
    read_preamble: ReadPreamble,
    transfer_syntax: Option<TransferSyntax>,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set the options for decoding the data set.
    pub fn read_options(mut self, options: ReadOptions) -> Self {
        self.read_options = options;
        self
    }

    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the transfer syntax of sources without a file meta group.
    /// Implicit VR little endian is assumed otherwise.
    ///
    /// This only takes effect with [`ReadOptions::read_non_part10`].
    pub fn non_part10_transfer_syntax(mut self, ts: TransferSyntax) -> Self {
        self.transfer_syntax = Some(ts);
        self
    }

    /// Open the file at the given path.
    ///
    /// The path is kept in the returned object,
    /// so that pixel data references can be loaded later on.
    pub fn open_file<P>(self, path: P) -> Result<DicomFile>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        let mut obj = self.from_reader(BufReader::new(file))?;
        obj.path = Some(path.to_path_buf());
        Ok(obj)
    }

    /// Read a DICOM file from a byte source.
    pub fn from_reader<R>(self, source: R) -> Result<DicomFile>
    where
        R: Read,
    {
        let mut source = source;
        let mut head = Vec::with_capacity(PREAMBLE_LENGTH + 4);
        source
            .by_ref()
            .take(PREAMBLE_LENGTH as u64 + 4)
            .read_to_end(&mut head)
            .context(ReadPreambleBytesSnafu)?;

        let magic_after_preamble = head.get(PREAMBLE_LENGTH..) == Some(&DICM_MAGIC_CODE[..]);
        let magic_at_start = head.starts_with(&DICM_MAGIC_CODE);
        let has_preamble = match self.read_preamble {
            ReadPreamble::Always if magic_after_preamble => Some(true),
            ReadPreamble::Never if magic_at_start => Some(false),
            ReadPreamble::Auto if magic_after_preamble => Some(true),
            ReadPreamble::Auto if magic_at_start => Some(false),
            _ => None,
        };

        let source = Cursor::new(head).chain(source);
        match has_preamble {
            Some(has_preamble) => self.read_part10(source, has_preamble),
            None if self.read_options.read_non_part10 => self.read_bare(source),
            None => NotDicomSnafu.fail(),
        }
    }

    fn read_part10<R: Read>(self, mut source: R, has_preamble: bool) -> Result<DicomFile> {
        let preamble = if has_preamble {
            let mut preamble = [0; PREAMBLE_LENGTH];
            source
                .read_exact(&mut preamble)
                .context(ReadPreambleBytesSnafu)?;
            Some(preamble)
        } else {
            None
        };

        let meta = FileMetaTable::from_reader(&mut source).context(ParseMetaDataSetSnafu)?;
        let ts = TransferSyntaxRegistry::resolve(meta.transfer_syntax()).context(
            ReadUnsupportedTransferSyntaxSnafu {
                uid: meta.transfer_syntax(),
            },
        )?;
        debug!("Reading data set in {}", ts.name());

        // magic code, then the group length element and its value
        let position = preamble.map(|_| PREAMBLE_LENGTH as u64).unwrap_or(0)
            + 4
            + 12
            + u64::from(meta.information_group_length);

        let dataset = if ts.is_deflated() {
            read_dataset(source, &ts, self.read_options)
        } else {
            DataSetReader::with_position(source, ts.decoder(), self.read_options, position)
                .read_dataset()
        }
        .context(ReadDataSetSnafu)?;

        Ok(DicomFile {
            meta,
            dataset,
            preamble,
            path: None,
        })
    }

    fn read_bare<R: Read>(self, source: R) -> Result<DicomFile> {
        let ts = self.transfer_syntax.unwrap_or(IMPLICIT_VR_LITTLE_ENDIAN);
        warn!(
            "No file meta group found, reading a bare data set in {}",
            ts.name()
        );
        let dataset = if ts.is_deflated() {
            read_dataset(source, &ts, self.read_options)
        } else {
            DataSetReader::with_position(source, ts.decoder(), self.read_options, 0)
                .read_dataset()
        }
        .context(ReadDataSetSnafu)?;

        let uid = |tag| {
            dataset
                .get_str(tag)
                .map(|s| s.into_owned())
                .unwrap_or_default()
        };
        let meta = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uid(tags::SOP_CLASS_UID))
            .media_storage_sop_instance_uid(uid(tags::SOP_INSTANCE_UID))
            .transfer_syntax(ts.uid())
            .build()
            .context(ParseMetaDataSetSnafu)?;

        Ok(DicomFile {
            meta,
            dataset,
            preamble: None,
            path: None,
        })
    }
}

/// A DICOM file: its file meta group and its main data set.
#[derive(Debug, Clone)]
pub struct DicomFile {
    meta: FileMetaTable,
    dataset: DataSet,
    preamble: Option<[u8; PREAMBLE_LENGTH]>,
    path: Option<PathBuf>,
}

impl DicomFile {
    /// Create a new file from a meta group and a data set.
    pub fn new(meta: FileMetaTable, dataset: DataSet) -> Self {
        DicomFile {
            meta,
            dataset,
            preamble: None,
            path: None,
        }
    }

    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    pub fn dataset_mut(&mut self) -> &mut DataSet {
        &mut self.dataset
    }

    pub fn into_parts(self) -> (FileMetaTable, DataSet) {
        (self.meta, self.dataset)
    }

    /// The preamble read from the source, if there was one.
    pub fn preamble(&self) -> Option<&[u8; PREAMBLE_LENGTH]> {
        self.preamble.as_ref()
    }

    /// Set the preamble to write. Zeros are written otherwise.
    pub fn set_preamble(&mut self, preamble: Option<[u8; PREAMBLE_LENGTH]>) {
        self.preamble = preamble;
    }

    /// The file this object was opened from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The transfer syntax declared in the meta group.
    pub fn transfer_syntax(&self) -> Result<TransferSyntax> {
        TransferSyntaxRegistry::resolve(self.meta.transfer_syntax()).context(
            ReadUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax(),
            },
        )
    }

    /// Read the bytes behind a pixel data reference from the backing file.
    pub fn load_pixel_data_reference(&self, reference: &PixelDataReference) -> Result<Vec<u8>> {
        let path = self.path.as_deref().context(NoBackingFileSnafu)?;
        let mut file = File::open(path).context(OpenFileSnafu { filename: path })?;
        file.seek(SeekFrom::Start(reference.offset))
            .context(ReadFileSnafu { filename: path })?;
        let mut data = vec![0; reference.length as usize];
        file.read_exact(&mut data)
            .context(ReadFileSnafu { filename: path })?;
        Ok(data)
    }

    /// Replace every pixel data reference in the data set
    /// with the data from the backing file.
    pub fn resolve_pixel_data_references(&mut self) -> Result<()> {
        if !self.dataset.has_pixel_data_references() {
            return Ok(());
        }
        let ts = self.transfer_syntax()?;
        let mut dataset = std::mem::take(&mut self.dataset);
        let outcome = self.resolve_in(&mut dataset, &ts);
        self.dataset = dataset;
        outcome
    }

    fn resolve_in(&self, ds: &mut DataSet, ts: &TransferSyntax) -> Result<()> {
        for attribute in ds.iter_mut() {
            match attribute.value_mut() {
                Value::PixelReference(reference) => {
                    let reference = *reference;
                    let bytes = self.load_pixel_data_reference(&reference)?;
                    let value = decode_value(&bytes, attribute.vr(), ts.endianness());
                    attribute.set_value(value);
                }
                Value::Sequence(items) => {
                    for item in items {
                        self.resolve_in(item, ts)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Change the transfer syntax of the file,
    /// re-encoding the pixel data if needed.
    ///
    /// Pixel data references are loaded first.
    /// On failure the file is left as it was.
    pub fn change_transfer_syntax(&mut self, ts: &TransferSyntax) -> transcode::Result<()> {
        let from = self.transfer_syntax().context(LoadPixelDataSnafu)?;
        let dataset = {
            let resolved = self.resolved_dataset().context(LoadPixelDataSnafu)?;
            transcode::change_transfer_syntax(&resolved, &from, ts)?
        };
        self.dataset = dataset;
        self.meta.set_transfer_syntax(ts.uid());
        Ok(())
    }

    fn resolved_dataset(&self) -> Result<Cow<'_, DataSet>> {
        if !self.dataset.has_pixel_data_references() {
            return Ok(Cow::Borrowed(&self.dataset));
        }
        let ts = self.transfer_syntax()?;
        let mut dataset = self.dataset.clone();
        self.resolve_in(&mut dataset, &ts)?;
        Ok(Cow::Owned(dataset))
    }

    /// Write the whole file to the given path,
    /// with the default write options.
    pub fn write_to_file<P>(&self, path: P) -> Result<(), WriteError>
    where
        P: AsRef<Path>,
    {
        self.write_to_file_with_options(path, WriteOptions::default())
    }

    pub fn write_to_file_with_options<P>(
        &self,
        path: P,
        options: WriteOptions,
    ) -> Result<(), WriteError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        // pixel data may still be in the file about to be replaced
        let dataset = self.resolved_dataset().context(ResolvePixelDataSnafu)?;
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write_parts(&mut to, &dataset, options)?;
        to.flush().context(WriteFileSnafu { filename: path })
    }

    /// Write the preamble, the magic code, the meta group and the data set.
    pub fn write_all<W>(&self, to: W, options: WriteOptions) -> Result<(), WriteError>
    where
        W: Write,
    {
        let dataset = self.resolved_dataset().context(ResolvePixelDataSnafu)?;
        self.write_parts(to, &dataset, options)
    }

    /// Write the meta group and the data set, without preamble.
    pub fn write_meta_and_dataset<W>(&self, to: W, options: WriteOptions) -> Result<(), WriteError>
    where
        W: Write,
    {
        let dataset = self.resolved_dataset().context(ResolvePixelDataSnafu)?;
        self.write_body(to, &dataset, options)
    }

    fn write_parts<W>(
        &self,
        mut to: W,
        dataset: &DataSet,
        options: WriteOptions,
    ) -> Result<(), WriteError>
    where
        W: Write,
    {
        to.write_all(&self.preamble.unwrap_or([0; PREAMBLE_LENGTH]))
            .context(WritePreambleSnafu)?;
        self.write_body(to, dataset, options)
    }

    fn write_body<W>(
        &self,
        mut to: W,
        dataset: &DataSet,
        options: WriteOptions,
    ) -> Result<(), WriteError>
    where
        W: Write,
    {
        let ts = TransferSyntaxRegistry::resolve(self.meta.transfer_syntax()).context(
            WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax(),
            },
        )?;
        self.meta.write(&mut to).context(WriteMetaDataSetSnafu)?;
        write_dataset(to, dataset, &ts, options).context(WriteDataSetSnafu)
    }
}

impl std::ops::Deref for DicomFile {
    type Target = DataSet;

    fn deref(&self) -> &DataSet {
        &self.dataset
    }
}

impl std::ops::DerefMut for DicomFile {
    fn deref_mut(&mut self) -> &mut DataSet {
        &mut self.dataset
    }
}
