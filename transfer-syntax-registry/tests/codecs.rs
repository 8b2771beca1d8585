//! Test suite for the codecs shipped with the registry,
//! on their own and chained together.

mod adapters;

use adapters::TestDataObject;
use dcmkit_encoding::adapters::{EncodeOptions, PixelDataCodec};
use dcmkit_transfer_syntax_registry::adapters::deflated::DeflatedImageFrameAdapter;
use dcmkit_transfer_syntax_registry::adapters::rle_lossless::RleLosslessAdapter;
use dcmkit_transfer_syntax_registry::{
    register_deflated_image_frame, register_rle_lossless, CodecRegistry, TransferSyntaxRegistry,
};
use rstest::rstest;

/// A gradient with some flat areas, so that both run kinds show up.
fn test_image(rows: u16, columns: u16, bytes_per_pixel: usize, frames: u32) -> Vec<u8> {
    let len = rows as usize * columns as usize * bytes_per_pixel * frames as usize;
    (0..len)
        .map(|i| if (i / 16) % 2 == 0 { 0x40 } else { (i * 7 % 251) as u8 })
        .collect()
}

#[rstest]
#[case(8, 1, 1)]
#[case(16, 1, 1)]
#[case(8, 3, 1)]
#[case(16, 3, 2)]
#[case(8, 1, 3)]
fn codec_round_trip(
    #[case] bits_allocated: u16,
    #[case] samples_per_pixel: u16,
    #[case] frames: u32,
    #[values(0, 1)] codec: usize,
) {
    let codecs: [&dyn PixelDataCodec; 2] = [&RleLosslessAdapter, &DeflatedImageFrameAdapter];
    let codec = codecs[codec];

    let bytes_per_pixel = samples_per_pixel as usize * (bits_allocated as usize / 8);
    let data = test_image(12, 10, bytes_per_pixel, frames);
    let native = TestDataObject::native(12, 10, bits_allocated, samples_per_pixel, frames, data);

    let mut fragments = Vec::new();
    codec
        .encode(&native, EncodeOptions::new(), &mut fragments)
        .unwrap();
    assert_eq!(fragments.len(), frames as usize);
    for fragment in &fragments {
        assert_eq!(fragment.len() % 2, 0, "fragments must have even length");
    }

    let encapsulated = native.with_fragments(codec.transfer_syntax(), fragments);
    let mut decoded = Vec::new();
    codec.decode(&encapsulated, &mut decoded).unwrap();
    assert_eq!(Some(&decoded), native.flat_pixel_data.as_ref());
}

#[test]
fn chained_codecs_round_trip() {
    register_rle_lossless();
    register_deflated_image_frame();
    let rle = CodecRegistry::get("1.2.840.10008.1.2.5").unwrap();
    let deflated = CodecRegistry::get("1.2.840.10008.1.2.8.1").unwrap();
    assert!(TransferSyntaxRegistry::resolve(rle.transfer_syntax()).is_some());
    assert!(TransferSyntaxRegistry::resolve(deflated.transfer_syntax()).is_some());

    let data = test_image(16, 16, 2, 2);
    let native = TestDataObject::native(16, 16, 16, 1, 2, data.clone());

    // native -> RLE
    let mut rle_fragments = Vec::new();
    rle.encode(&native, EncodeOptions::new(), &mut rle_fragments)
        .unwrap();
    let rle_object = native.with_fragments(rle.transfer_syntax(), rle_fragments);

    // RLE -> native -> deflated frames
    let mut intermediate = Vec::new();
    rle.decode(&rle_object, &mut intermediate).unwrap();
    let intermediate = native.with_native(intermediate);
    let mut deflated_fragments = Vec::new();
    deflated
        .encode(&intermediate, EncodeOptions::new().effort(100), &mut deflated_fragments)
        .unwrap();
    let deflated_object = native.with_fragments(deflated.transfer_syntax(), deflated_fragments);

    // deflated frames -> native
    let mut out = Vec::new();
    deflated.decode(&deflated_object, &mut out).unwrap();
    assert_eq!(out, data);

    // single frame access
    let mut second = Vec::new();
    deflated.decode_frame(&deflated_object, 1, &mut second).unwrap();
    assert_eq!(&second[..], &data[512..]);
}

#[test]
fn corrupt_rle_fragment_fails() {
    let native = TestDataObject::native(4, 4, 8, 1, 1, vec![1; 16]);
    let mut fragments = Vec::new();
    RleLosslessAdapter
        .encode(&native, EncodeOptions::new(), &mut fragments)
        .unwrap();
    // truncate the only segment
    fragments[0].truncate(66);
    let broken = native.with_fragments("1.2.840.10008.1.2.5", fragments);
    let mut out = Vec::new();
    assert!(RleLosslessAdapter.decode(&broken, &mut out).is_err());
}

#[test]
fn encoding_requires_native_data() {
    let native = TestDataObject::native(2, 2, 8, 1, 1, vec![0; 4]);
    let encapsulated = native.with_fragments("1.2.840.10008.1.2.5", vec![vec![0; 4]]);
    let mut out = Vec::new();
    assert!(DeflatedImageFrameAdapter
        .encode(&encapsulated, EncodeOptions::new(), &mut out)
        .is_err());
}
