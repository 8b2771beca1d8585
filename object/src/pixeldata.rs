//! Pixel data helpers.
//!
//! Native pixel data is a flat little endian buffer held as a primitive value.
//! Encapsulated pixel data is held as a [`PixelFragmentSequence`].
//! [`ImagePixelDescription`] gathers the image pixel module attributes
//! which a codec needs to interpret either form.

use crate::attribute::AccessError;
use crate::dataset::DataSet;
use dcmkit_core::value::C;
use dcmkit_core::Tag;
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::adapters::PixelDataObject;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Missing required attribute {}", name))]
    MissingAttribute {
        name: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid value for attribute {}", name))]
    InvalidAttribute {
        name: &'static str,
        source: AccessError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Encapsulated pixel data:
/// a basic offset table followed by the encoded fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelFragmentSequence {
    offset_table: C<u32>,
    fragments: C<Vec<u8>>,
}

impl PixelFragmentSequence {
    /// Create a fragment sequence,
    /// padding every fragment to an even length.
    pub fn new<T, F>(offset_table: T, fragments: F) -> Self
    where
        T: Into<C<u32>>,
        F: IntoIterator<Item = Vec<u8>>,
    {
        PixelFragmentSequence {
            offset_table: offset_table.into(),
            fragments: fragments.into_iter().map(pad_even).collect(),
        }
    }

    /// Create a fragment sequence with one fragment per frame.
    ///
    /// With `with_offset_table`,
    /// the offset of each frame is recorded relative to
    /// the first byte of the first fragment item.
    pub fn from_frames<F>(frames: F, with_offset_table: bool) -> Self
    where
        F: IntoIterator<Item = Vec<u8>>,
    {
        let fragments: C<Vec<u8>> = frames.into_iter().map(pad_even).collect();
        let offset_table = if with_offset_table {
            fragments
                .iter()
                .scan(0_u32, |offset, fragment| {
                    let current = *offset;
                    *offset += 8 + fragment.len() as u32;
                    Some(current)
                })
                .collect()
        } else {
            C::new()
        };
        PixelFragmentSequence {
            offset_table,
            fragments,
        }
    }

    pub fn offset_table(&self) -> &[u32] {
        &self.offset_table
    }

    pub fn fragments(&self) -> &[Vec<u8>] {
        &self.fragments
    }

    /// Append a fragment, padding it to an even length.
    pub fn push_fragment(&mut self, fragment: Vec<u8>) {
        self.fragments.push(pad_even(fragment));
    }

    pub fn into_parts(self) -> (C<u32>, C<Vec<u8>>) {
        (self.offset_table, self.fragments)
    }
}

fn pad_even(mut fragment: Vec<u8>) -> Vec<u8> {
    if fragment.len() % 2 == 1 {
        fragment.push(0);
    }
    fragment
}

/// The attributes of the image pixel module which describe pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePixelDescription {
    pub rows: u16,
    pub columns: u16,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub high_bit: u16,
    pub pixel_representation: u16,
    pub planar_configuration: u16,
    pub number_of_frames: u32,
    pub photometric_interpretation: String,
}

impl ImagePixelDescription {
    /// Read the description from a data set.
    ///
    /// Rows, Columns and Bits Allocated are required.
    /// The other attributes take their usual defaults when absent:
    /// one sample per pixel, all allocated bits stored,
    /// one frame, MONOCHROME2.
    pub fn from_dataset(ds: &DataSet) -> Result<Self> {
        let rows = required_u16(ds, tags::ROWS, "Rows")?;
        let columns = required_u16(ds, tags::COLUMNS, "Columns")?;
        let bits_allocated = required_u16(ds, tags::BITS_ALLOCATED, "BitsAllocated")?;
        let samples_per_pixel =
            optional_u16(ds, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")?.unwrap_or(1);
        let bits_stored =
            optional_u16(ds, tags::BITS_STORED, "BitsStored")?.unwrap_or(bits_allocated);
        let high_bit = optional_u16(ds, tags::HIGH_BIT, "HighBit")?
            .unwrap_or_else(|| bits_stored.saturating_sub(1));
        let pixel_representation =
            optional_u16(ds, tags::PIXEL_REPRESENTATION, "PixelRepresentation")?.unwrap_or(0);
        let planar_configuration =
            optional_u16(ds, tags::PLANAR_CONFIGURATION, "PlanarConfiguration")?.unwrap_or(0);
        let number_of_frames = match ds.get(tags::NUMBER_OF_FRAMES) {
            Some(a) if !a.is_empty() && !a.is_null() => a
                .to_u32()
                .context(InvalidAttributeSnafu {
                    name: "NumberOfFrames",
                })?,
            _ => 1,
        };
        let photometric_interpretation = ds
            .get_str(tags::PHOTOMETRIC_INTERPRETATION)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "MONOCHROME2".to_string());

        Ok(ImagePixelDescription {
            rows,
            columns,
            samples_per_pixel,
            bits_allocated,
            bits_stored,
            high_bit,
            pixel_representation,
            planar_configuration,
            number_of_frames,
            photometric_interpretation,
        })
    }

    /// The number of bytes of each sample.
    pub fn bytes_per_sample(&self) -> usize {
        (self.bits_allocated as usize + 7) / 8
    }

    /// The number of bytes of one native frame.
    pub fn frame_length(&self) -> usize {
        self.rows as usize
            * self.columns as usize
            * self.samples_per_pixel as usize
            * self.bytes_per_sample()
    }

    /// The number of bytes of all native frames.
    pub fn total_length(&self) -> usize {
        self.frame_length() * self.number_of_frames as usize
    }
}

fn optional_u16(ds: &DataSet, tag: Tag, name: &'static str) -> Result<Option<u16>> {
    match ds.get(tag) {
        Some(a) if !a.is_empty() && !a.is_null() => a
            .to_u16()
            .map(Some)
            .context(InvalidAttributeSnafu { name }),
        _ => Ok(None),
    }
}

fn required_u16(ds: &DataSet, tag: Tag, name: &'static str) -> Result<u16> {
    optional_u16(ds, tag, name)?.context(MissingAttributeSnafu { name })
}

/// Pixel data and its description, viewed as a codec input.
#[derive(Debug)]
pub struct PixelDataSource<'a> {
    transfer_syntax_uid: &'a str,
    description: &'a ImagePixelDescription,
    data: SourceData<'a>,
}

#[derive(Debug)]
enum SourceData<'a> {
    Native(Cow<'a, [u8]>),
    Encapsulated(&'a PixelFragmentSequence),
}

impl<'a> PixelDataSource<'a> {
    /// View native pixel data in little endian.
    pub fn native(
        transfer_syntax_uid: &'a str,
        description: &'a ImagePixelDescription,
        data: impl Into<Cow<'a, [u8]>>,
    ) -> Self {
        PixelDataSource {
            transfer_syntax_uid,
            description,
            data: SourceData::Native(data.into()),
        }
    }

    /// View encapsulated pixel data.
    pub fn encapsulated(
        transfer_syntax_uid: &'a str,
        description: &'a ImagePixelDescription,
        fragments: &'a PixelFragmentSequence,
    ) -> Self {
        PixelDataSource {
            transfer_syntax_uid,
            description,
            data: SourceData::Encapsulated(fragments),
        }
    }
}

impl PixelDataObject for PixelDataSource<'_> {
    fn transfer_syntax_uid(&self) -> &str {
        self.transfer_syntax_uid
    }

    fn rows(&self) -> Option<u16> {
        Some(self.description.rows)
    }

    fn cols(&self) -> Option<u16> {
        Some(self.description.columns)
    }

    fn samples_per_pixel(&self) -> Option<u16> {
        Some(self.description.samples_per_pixel)
    }

    fn bits_allocated(&self) -> Option<u16> {
        Some(self.description.bits_allocated)
    }

    fn bits_stored(&self) -> Option<u16> {
        Some(self.description.bits_stored)
    }

    fn high_bit(&self) -> Option<u16> {
        Some(self.description.high_bit)
    }

    fn number_of_frames(&self) -> Option<u32> {
        Some(self.description.number_of_frames)
    }

    fn number_of_fragments(&self) -> Option<u32> {
        match &self.data {
            SourceData::Native(_) => None,
            SourceData::Encapsulated(seq) => Some(seq.fragments().len() as u32),
        }
    }

    fn fragment(&self, fragment: usize) -> Option<Cow<'_, [u8]>> {
        match &self.data {
            SourceData::Native(data) if fragment == 0 => Some(Cow::Borrowed(&data[..])),
            SourceData::Native(_) => None,
            SourceData::Encapsulated(seq) => {
                seq.fragments().get(fragment).map(|f| Cow::Borrowed(&f[..]))
            }
        }
    }

    fn offset_table(&self) -> Option<Cow<'_, [u32]>> {
        match &self.data {
            SourceData::Encapsulated(seq) if !seq.offset_table().is_empty() => {
                Some(Cow::Borrowed(seq.offset_table()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::VR;
    use matches::assert_matches;

    #[test]
    fn fragments_are_padded() {
        let seq = PixelFragmentSequence::new(C::<u32>::new(), vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(seq.fragments(), &[vec![1, 2, 3, 0], vec![4, 5]]);
    }

    #[test]
    fn offset_table_from_frames() {
        let seq = PixelFragmentSequence::from_frames(
            vec![vec![0; 10], vec![0; 7], vec![0; 4]],
            true,
        );
        // 8 bytes of item header before each fragment
        assert_eq!(seq.offset_table(), &[0, 18, 34]);
        let seq = PixelFragmentSequence::from_frames(vec![vec![0; 10]], false);
        assert!(seq.offset_table().is_empty());
    }

    #[test]
    fn description_from_dataset() {
        let mut ds = DataSet::new();
        ds.put_u16(tags::ROWS, VR::US, 4);
        ds.put_u16(tags::COLUMNS, VR::US, 3);
        ds.put_u16(tags::BITS_ALLOCATED, VR::US, 16);
        ds.put_u16(tags::BITS_STORED, VR::US, 12);
        ds.put_str(tags::NUMBER_OF_FRAMES, VR::IS, "2");
        let desc = ImagePixelDescription::from_dataset(&ds).unwrap();
        assert_eq!(desc.samples_per_pixel, 1);
        assert_eq!(desc.high_bit, 11);
        assert_eq!(desc.number_of_frames, 2);
        assert_eq!(desc.photometric_interpretation, "MONOCHROME2");
        assert_eq!(desc.frame_length(), 24);
        assert_eq!(desc.total_length(), 48);

        ds.remove(tags::ROWS);
        assert_matches!(
            ImagePixelDescription::from_dataset(&ds),
            Err(Error::MissingAttribute { name: "Rows", .. })
        );
    }
}
