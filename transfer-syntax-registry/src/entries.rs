//! A list of compiled transfer syntax specifiers.
//!
//! - The four **built-in** syntaxes are always present in the registry
//!   and cannot be removed.
//! - The **codec-provided** syntaxes are only known to the registry
//!   once registered, usually alongside their codec
//!   (see [`register_rle_lossless`](crate::register_rle_lossless)
//!   and [`register_deflated_image_frame`](crate::register_deflated_image_frame)).

use byteordered::Endianness;
use dcmkit_dictionary_std::uids;
use dcmkit_encoding::TransferSyntax as Ts;

// -- the four built-in transfer syntaxes --

/// Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    false,
    false,
);

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    false,
    false,
);

/// Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    false,
    false,
);

/// Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    false,
    true,
);

pub(crate) const BUILT_IN: [Ts; 4] = [
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
];

// -- codec-provided transfer syntaxes --

/// RLE Lossless
pub const RLE_LOSSLESS: Ts = Ts::new_encapsulated(uids::RLE_LOSSLESS, "RLE Lossless");

/// Deflated Image Frame Compression
pub const DEFLATED_IMAGE_FRAME_COMPRESSION: Ts = Ts::new_encapsulated(
    uids::DEFLATED_IMAGE_FRAME_COMPRESSION,
    "Deflated Image Frame Compression",
);
