use dcmkit_core::value::{PrimitiveValue, C};
use dcmkit_dictionary_std::tags;
use dcmkit_object::{
    open_file, Attribute, DataSet, DicomFile, FileMetaTableBuilder, OpenFileOptions, ReadError,
    ReadOptions, WriteOptions, VR,
};
use dcmkit_transfer_syntax_registry::entries::{
    DEFLATED_IMAGE_FRAME_COMPRESSION, EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN,
    IMPLICIT_VR_LITTLE_ENDIAN, RLE_LOSSLESS,
};
use dcmkit_transfer_syntax_registry::{register_deflated_image_frame, register_rle_lossless};
use matches::assert_matches;
use std::fs;

const SOP_CLASS: &str = "1.2.840.10008.5.1.4.1.1.7";

fn secondary_capture(ts: &str, samples_per_pixel: u16, pixels: Vec<u16>) -> DicomFile {
    let meta = FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(SOP_CLASS)
        .media_storage_sop_instance_uid("1.2.3.4.5.6")
        .transfer_syntax(ts)
        .build()
        .unwrap();
    let mut ds = DataSet::new();
    ds.put_str(tags::SOP_CLASS_UID, VR::UI, SOP_CLASS);
    ds.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5.6");
    ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^Jane");
    ds.put_u16(tags::ROWS, VR::US, 2);
    ds.put_u16(tags::COLUMNS, VR::US, 2);
    ds.put_u16(tags::SAMPLES_PER_PIXEL, VR::US, samples_per_pixel);
    ds.put_u16(tags::BITS_ALLOCATED, VR::US, 16);
    ds.put_u16(tags::BITS_STORED, VR::US, 16);
    ds.put_u16(tags::HIGH_BIT, VR::US, 15);
    ds.put_u16(tags::PIXEL_REPRESENTATION, VR::US, 0);
    if samples_per_pixel > 1 {
        ds.put_str(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "RGB");
        ds.put_u16(tags::PLANAR_CONFIGURATION, VR::US, 0);
    } else {
        ds.put_str(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2");
    }
    ds.put(Attribute::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::U16(C::from_vec(pixels)),
    ));
    DicomFile::new(meta, ds)
}

#[test]
fn pixel_data_references_and_null_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.dcm");
    let pixels = vec![10, 20, 30, 40];
    secondary_capture(EXPLICIT_VR_LITTLE_ENDIAN.uid(), 1, pixels.clone())
        .write_to_file(&path)
        .unwrap();

    let options = ReadOptions::new().store_pixel_data_references(true);
    let mut file = OpenFileOptions::new()
        .read_options(options)
        .open_file(&path)
        .unwrap();

    let pixel_data = file.get(tags::PIXEL_DATA).unwrap();
    let reference = pixel_data.pixel_data_reference().unwrap();
    assert_eq!(pixel_data.stream_length(), 8);
    assert!(!pixel_data.is_null());
    assert_eq!(
        file.load_pixel_data_reference(&reference).unwrap(),
        vec![10, 0, 20, 0, 30, 0, 40, 0]
    );

    // the whole file ends with the pixel data
    let len = fs::metadata(&path).unwrap().len();
    assert_eq!(reference.offset + u64::from(reference.length), len);

    file.get_mut(tags::PIXEL_DATA).unwrap().set_null();
    let null_length = file.get(tags::PIXEL_DATA).unwrap().stream_length();
    let rewritten = dir.path().join("null.dcm");
    file.write_to_file(&rewritten).unwrap();

    let reloaded = OpenFileOptions::new()
        .read_options(options)
        .open_file(&rewritten)
        .unwrap();
    let pixel_data = reloaded.get(tags::PIXEL_DATA).unwrap();
    assert!(pixel_data.is_null());
    assert!(!pixel_data.is_empty());
    assert_eq!(pixel_data.stream_length(), null_length);
}

#[test]
fn references_are_loaded_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.dcm");
    let original = secondary_capture(EXPLICIT_VR_BIG_ENDIAN.uid(), 1, vec![1, 0x0203, 4, 5]);
    original.write_to_file(&path).unwrap();

    let mut file = OpenFileOptions::new()
        .read_options(ReadOptions::new().store_pixel_data_references(true))
        .open_file(&path)
        .unwrap();
    assert!(file.dataset().has_pixel_data_references());

    // rewriting over the backing file itself
    file.write_to_file(&path).unwrap();
    let reloaded = open_file(&path).unwrap();
    assert_eq!(reloaded.dataset(), original.dataset());

    file.resolve_pixel_data_references().unwrap();
    assert!(!file.dataset().has_pixel_data_references());
    assert_eq!(file.dataset(), original.dataset());
}

#[test]
fn pixel_data_can_be_left_out() {
    let mut out = Vec::new();
    secondary_capture(IMPLICIT_VR_LITTLE_ENDIAN.uid(), 1, vec![1, 2, 3, 4])
        .write_all(&mut out, WriteOptions::default())
        .unwrap();
    let file = OpenFileOptions::new()
        .read_options(ReadOptions::new().do_not_store_pixel_data(true))
        .from_reader(&out[..])
        .unwrap();
    assert!(!file.contains(tags::PIXEL_DATA));
    assert_eq!(file.get_str(tags::PATIENT_NAME).as_deref(), Some("Doe^Jane"));
}

#[test]
fn non_part10_streams() {
    let file = secondary_capture(EXPLICIT_VR_LITTLE_ENDIAN.uid(), 1, vec![1, 2, 3, 4]);
    let mut bare = Vec::new();
    dcmkit_object::write_dataset(
        &mut bare,
        file.dataset(),
        &EXPLICIT_VR_BIG_ENDIAN,
        WriteOptions::default(),
    )
    .unwrap();

    assert_matches!(
        dcmkit_object::from_reader(&bare[..]),
        Err(ReadError::NotDicom { .. })
    );

    let read = OpenFileOptions::new()
        .read_options(ReadOptions::new().read_non_part10(true))
        .non_part10_transfer_syntax(EXPLICIT_VR_BIG_ENDIAN)
        .from_reader(&bare[..])
        .unwrap();
    assert_eq!(read.dataset(), file.dataset());
    assert_eq!(read.meta().transfer_syntax(), EXPLICIT_VR_BIG_ENDIAN.uid());
    assert_eq!(read.meta().media_storage_sop_class_uid(), SOP_CLASS);
    assert_eq!(read.meta().media_storage_sop_instance_uid(), "1.2.3.4.5.6");
}

#[test]
fn chained_codecs_round_trip() {
    register_rle_lossless();
    register_deflated_image_frame();

    let pixels: Vec<u16> = (0..12).map(|v| v * 1000 + 7).collect();
    let original = secondary_capture(EXPLICIT_VR_LITTLE_ENDIAN.uid(), 3, pixels);

    let mut file = original.clone();
    file.change_transfer_syntax(&RLE_LOSSLESS).unwrap();
    assert_eq!(file.meta().transfer_syntax(), RLE_LOSSLESS.uid());
    assert!(file.get(tags::PIXEL_DATA).unwrap().fragments().is_some());

    file.change_transfer_syntax(&DEFLATED_IMAGE_FRAME_COMPRESSION)
        .unwrap();
    assert_eq!(
        file.meta().transfer_syntax(),
        DEFLATED_IMAGE_FRAME_COMPRESSION.uid()
    );

    // through a file in the compressed syntax
    let mut out = Vec::new();
    file.write_all(&mut out, WriteOptions::default()).unwrap();
    let mut file = dcmkit_object::from_reader(&out[..]).unwrap();

    file.change_transfer_syntax(&EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();
    assert_eq!(file.dataset(), original.dataset());
    assert_eq!(file.meta(), original.meta());
}

#[test]
fn failed_transcoding_leaves_the_file_untouched() {
    let mut file = secondary_capture(EXPLICIT_VR_LITTLE_ENDIAN.uid(), 1, vec![1, 2, 3, 4]);
    // 3 samples announced, only 1 present
    file.put_u16(tags::SAMPLES_PER_PIXEL, VR::US, 3);
    let before = file.clone();
    register_rle_lossless();
    assert!(file.change_transfer_syntax(&RLE_LOSSLESS).is_err());
    assert_eq!(file.dataset(), before.dataset());
    assert_eq!(file.meta(), before.meta());
}

#[test]
fn explicit_un_resolved_with_the_dictionary() {
    let mut ds = DataSet::new();
    ds.put(Attribute::new(
        tags::ROWS,
        VR::UN,
        PrimitiveValue::U8(C::from_slice(&[0x00, 0x01])),
    ));
    ds.put(Attribute::new(
        tags::PATIENT_NAME,
        VR::UN,
        PrimitiveValue::U8(C::from_slice(b"Doe^John")),
    ));
    let mut out = Vec::new();
    dcmkit_object::write_dataset(&mut out, &ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default())
        .unwrap();

    let read = dcmkit_object::read_dataset(
        &out[..],
        &EXPLICIT_VR_LITTLE_ENDIAN,
        ReadOptions::new().use_dictionary_for_explicit_un(true),
    )
    .unwrap();
    assert_eq!(read.get(tags::ROWS).unwrap().vr(), VR::US);
    assert_eq!(read.get_u16(tags::ROWS), Some(256));
    assert_eq!(read.get(tags::PATIENT_NAME).unwrap().vr(), VR::PN);
    assert_eq!(read.get_str(tags::PATIENT_NAME).as_deref(), Some("Doe^John"));
}
