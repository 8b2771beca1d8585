use dcmkit_core::value::{PrimitiveValue, C};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::TransferSyntax;
use dcmkit_object::{
    read_dataset, write_dataset, Attribute, DataSet, PixelFragmentSequence, ReadOptions,
    Tag, WriteOptions, VR,
};
use dcmkit_transfer_syntax_registry::entries::{
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN,
    IMPLICIT_VR_LITTLE_ENDIAN, RLE_LOSSLESS,
};
use rstest::rstest;

fn code(value: &str, meaning: &str) -> DataSet {
    let mut item = DataSet::new();
    item.put_str(tags::CODE_VALUE, VR::SH, value);
    item.put_str(tags::CODE_MEANING, VR::LO, meaning);
    item
}

/// A data set with sequences nested two levels deep.
fn structured_report() -> DataSet {
    let mut inner = code("121071", "Finding");
    inner.put(Attribute::sequence(
        tags::CONCEPT_NAME_CODE_SEQUENCE,
        vec![code("A", "First"), code("B", "Second")],
    ));

    let mut ds = DataSet::new();
    ds.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.826.0.1.3680043.2.1125.1");
    ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
    ds.put_str(tags::PATIENT_ID, VR::LO, "P01");
    ds.put_str(tags::MODALITY, VR::CS, "SR");
    ds.put_str(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY");
    ds.put(Attribute::null(tags::PATIENT_BIRTH_DATE, VR::DA));
    ds.put(Attribute::null(tags::OTHER_PATIENT_IDS_SEQUENCE, VR::SQ));
    ds.put(Attribute::sequence(
        tags::CONTENT_SEQUENCE,
        vec![inner, DataSet::new(), code("C", "Third")],
    ));
    ds
}

fn image() -> DataSet {
    let mut ds = DataSet::new();
    ds.put_u16(tags::ROWS, VR::US, 2);
    ds.put_u16(tags::COLUMNS, VR::US, 3);
    ds.put_u16(tags::BITS_ALLOCATED, VR::US, 16);
    ds.put_u16(tags::BITS_STORED, VR::US, 16);
    ds.put_u16(tags::HIGH_BIT, VR::US, 15);
    ds.put_u16(tags::SAMPLES_PER_PIXEL, VR::US, 1);
    ds.put(Attribute::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::U16(C::from_vec(vec![0, 1, 0x0100, 0x7FFF, 0x8000, 0xFFFF])),
    ));
    ds
}

/// A 2x2 monochrome image with 8-bit samples stored as OB.
fn byte_image() -> DataSet {
    let mut ds = DataSet::new();
    ds.put_u16(tags::ROWS, VR::US, 2);
    ds.put_u16(tags::COLUMNS, VR::US, 2);
    ds.put_u16(tags::BITS_ALLOCATED, VR::US, 8);
    ds.put_u16(tags::BITS_STORED, VR::US, 8);
    ds.put_u16(tags::HIGH_BIT, VR::US, 7);
    ds.put_u16(tags::SAMPLES_PER_PIXEL, VR::US, 1);
    ds.put(Attribute::new(
        tags::PIXEL_DATA,
        VR::OB,
        PrimitiveValue::U8(C::from_slice(&[1, 2, 3, 4])),
    ));
    ds
}

/// Acquisition attributes outside the most common modules.
fn acquisition() -> DataSet {
    let mut ds = DataSet::new();
    ds.put_str(tags::PROTOCOL_NAME, VR::LO, "Head");
    ds.put_str(tags::SLICE_LOCATION, VR::DS, "12.5");
    ds.put_str(tags::SLICE_THICKNESS, VR::DS, "1.25");
    ds.put_str(tags::KVP, VR::DS, "120");
    ds.put_str(tags::BODY_PART_EXAMINED, VR::CS, "HEAD");
    ds.put_str(tags::CONVOLUTION_KERNEL, VR::SH, "STANDARD");
    ds.put_str(tags::FRAME_OF_REFERENCE_UID, VR::UI, "1.2.826.0.1.3680043.2.1125.7");
    ds.put_str(tags::ACQUISITION_DATE_TIME, VR::DT, "20240101120000");
    ds.put_str(tags::RECOMMENDED_DISPLAY_FRAME_RATE, VR::IS, "25");
    ds
}

fn round_trip(ds: &DataSet, ts: &TransferSyntax, options: WriteOptions) -> DataSet {
    let mut out = Vec::new();
    write_dataset(&mut out, ds, ts, options).unwrap();
    read_dataset(&out[..], ts, ReadOptions::default()).unwrap()
}

#[rstest]
fn uncompressed_syntaxes_round_trip(
    #[values(
        IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BIG_ENDIAN,
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
    )]
    ts: TransferSyntax,
) {
    for ds in [structured_report(), image(), byte_image(), acquisition()] {
        let read_back = round_trip(&ds, &ts, WriteOptions::default());
        let differences = ds.compare(&read_back);
        assert!(differences.is_empty(), "{}: {:?}", ts.name(), differences);
    }
}

#[test]
fn implicit_vr_recovers_standard_vrs() {
    let read_back = round_trip(
        &acquisition(),
        &IMPLICIT_VR_LITTLE_ENDIAN,
        WriteOptions::default(),
    );
    let vr_of = |tag| read_back.get(tag).map(Attribute::vr);
    assert_eq!(vr_of(tags::PROTOCOL_NAME), Some(VR::LO));
    assert_eq!(vr_of(tags::SLICE_LOCATION), Some(VR::DS));
    assert_eq!(vr_of(tags::KVP), Some(VR::DS));
    assert_eq!(vr_of(tags::CONVOLUTION_KERNEL), Some(VR::SH));
    assert_eq!(vr_of(tags::ACQUISITION_DATE_TIME), Some(VR::DT));
    assert_eq!(read_back.get_str(tags::PROTOCOL_NAME).as_deref(), Some("Head"));
    assert_eq!(read_back.get_str(tags::SLICE_LOCATION).as_deref(), Some("12.5"));
}

#[test]
fn byte_pixel_data_survives_implicit_vr() {
    let read_back = round_trip(
        &byte_image(),
        &IMPLICIT_VR_LITTLE_ENDIAN,
        WriteOptions::default(),
    );
    let pixel_data = read_back.get(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixel_data.to_bytes().unwrap().as_ref(), &[1, 2, 3, 4]);
    assert!(byte_image().compare(&read_back).is_empty());
}

#[rstest]
fn sequence_length_modes_are_symmetric(
    #[values(IMPLICIT_VR_LITTLE_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, EXPLICIT_VR_BIG_ENDIAN)]
    ts: TransferSyntax,
    #[values(true, false)] explicit_length_sequence: bool,
    #[values(true, false)] explicit_length_sequence_item: bool,
) {
    let ds = structured_report();
    let options = WriteOptions::new()
        .explicit_length_sequence(explicit_length_sequence)
        .explicit_length_sequence_item(explicit_length_sequence_item);
    let read_back = round_trip(&ds, &ts, options);
    assert_eq!(read_back, ds);

    let items = read_back
        .get(tags::CONTENT_SEQUENCE)
        .and_then(Attribute::items)
        .unwrap();
    assert_eq!(items.len(), 3);
    let nested = items[0]
        .get(tags::CONCEPT_NAME_CODE_SEQUENCE)
        .and_then(Attribute::items)
        .unwrap();
    assert_eq!(nested[1].get_str(tags::CODE_MEANING).as_deref(), Some("Second"));
}

#[test]
fn null_and_empty_are_distinct() {
    let mut ds = DataSet::new();
    ds.put_str(tags::PATIENT_ID, VR::LO, "P01");
    ds.put(Attribute::null(tags::PATIENT_NAME, VR::PN));
    ds.put(Attribute::empty(tags::PATIENT_BIRTH_DATE, VR::DA));

    let read_back = round_trip(&ds, &EXPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default());
    let name = read_back.get(tags::PATIENT_NAME).unwrap();
    assert!(name.is_null());
    assert!(!name.is_empty());
    assert_eq!(name.stream_length(), 0);
    // empty attributes are never written
    assert!(!read_back.contains(tags::PATIENT_BIRTH_DATE));
    assert_eq!(read_back, ds);
}

#[rstest]
fn encapsulated_pixel_data_round_trip(#[values(true, false)] write_fragment_offset_table: bool) {
    let mut ds = DataSet::new();
    ds.put_u16(tags::ROWS, VR::US, 1);
    ds.put_u16(tags::COLUMNS, VR::US, 3);
    ds.put_u16(tags::BITS_ALLOCATED, VR::US, 8);
    ds.put_str(tags::NUMBER_OF_FRAMES, VR::IS, "2");
    ds.put(Attribute::pixel_sequence(
        tags::PIXEL_DATA,
        PixelFragmentSequence::from_frames(vec![vec![1, 2, 3], vec![4, 5, 6, 7]], true),
    ));

    let options = WriteOptions::new().write_fragment_offset_table(write_fragment_offset_table);
    let read_back = round_trip(&ds, &RLE_LOSSLESS, options);
    let fragments = read_back
        .get(tags::PIXEL_DATA)
        .and_then(Attribute::fragments)
        .unwrap();
    assert_eq!(fragments.fragments(), &[vec![1, 2, 3, 0], vec![4, 5, 6, 7]]);
    if write_fragment_offset_table {
        assert_eq!(fragments.offset_table(), &[0, 12]);
    } else {
        assert!(fragments.offset_table().is_empty());
    }
}

#[test]
fn private_attributes_keep_their_vr_in_implicit_syntax() {
    dcmkit_dictionary_std::register_private("DCMKIT ROUND TRIP", 0x0019, 0x10, "Gain", VR::DS);

    let mut ds = DataSet::new();
    ds.put_str(Tag(0x0019, 0x0010), VR::LO, "DCMKIT ROUND TRIP");
    ds.put_str(Tag(0x0019, 0x1010), VR::DS, "1.5");
    let read_back = round_trip(&ds, &IMPLICIT_VR_LITTLE_ENDIAN, WriteOptions::default());
    assert_eq!(read_back.get(Tag(0x0019, 0x1010)).unwrap().vr(), VR::DS);
    assert_eq!(read_back, ds);
}
