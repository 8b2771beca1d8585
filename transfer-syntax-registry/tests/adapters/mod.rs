//! Utility module for testing pixel data codecs.
use std::borrow::Cow;

use dcmkit_encoding::adapters::PixelDataObject;

/// A test data object.
///
/// Can be used to test pixel data codecs
/// without having to build a data set with `dcmkit_object`.
#[derive(Debug, Clone)]
pub(crate) struct TestDataObject {
    pub ts_uid: String,
    pub rows: u16,
    pub columns: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub samples_per_pixel: u16,
    pub number_of_frames: u32,
    pub flat_pixel_data: Option<Vec<u8>>,
    pub fragments: Option<Vec<Vec<u8>>>,
}

impl TestDataObject {
    /// A native object with the given geometry and pixel bytes.
    pub fn native(
        rows: u16,
        columns: u16,
        bits_allocated: u16,
        samples_per_pixel: u16,
        number_of_frames: u32,
        data: Vec<u8>,
    ) -> Self {
        TestDataObject {
            ts_uid: "1.2.840.10008.1.2.1".to_string(),
            rows,
            columns,
            bits_allocated,
            bits_stored: bits_allocated,
            samples_per_pixel,
            number_of_frames,
            flat_pixel_data: Some(data),
            fragments: None,
        }
    }

    /// The same image, encapsulated in the given fragments.
    pub fn with_fragments(&self, ts_uid: &str, fragments: Vec<Vec<u8>>) -> Self {
        TestDataObject {
            ts_uid: ts_uid.to_string(),
            flat_pixel_data: None,
            fragments: Some(fragments),
            ..self.clone()
        }
    }

    /// The same image with the given native pixel data.
    pub fn with_native(&self, data: Vec<u8>) -> Self {
        TestDataObject {
            ts_uid: "1.2.840.10008.1.2.1".to_string(),
            flat_pixel_data: Some(data),
            fragments: None,
            ..self.clone()
        }
    }
}

impl PixelDataObject for TestDataObject {
    fn transfer_syntax_uid(&self) -> &str {
        &self.ts_uid
    }

    fn rows(&self) -> Option<u16> {
        Some(self.rows)
    }

    fn cols(&self) -> Option<u16> {
        Some(self.columns)
    }

    fn samples_per_pixel(&self) -> Option<u16> {
        Some(self.samples_per_pixel)
    }

    fn bits_allocated(&self) -> Option<u16> {
        Some(self.bits_allocated)
    }

    fn bits_stored(&self) -> Option<u16> {
        Some(self.bits_stored)
    }

    fn high_bit(&self) -> Option<u16> {
        Some(self.bits_stored - 1)
    }

    fn number_of_frames(&self) -> Option<u32> {
        Some(self.number_of_frames)
    }

    fn number_of_fragments(&self) -> Option<u32> {
        self.fragments.as_ref().map(|f| f.len() as u32)
    }

    fn fragment(&self, fragment: usize) -> Option<Cow<'_, [u8]>> {
        match (&self.flat_pixel_data, &self.fragments) {
            (_, Some(v)) => v.get(fragment).map(|f| Cow::Borrowed(f.as_slice())),
            (Some(v), _) if fragment == 0 => Some(Cow::Borrowed(v)),
            _ => None,
        }
    }

    fn offset_table(&self) -> Option<Cow<'_, [u32]>> {
        None
    }
}
