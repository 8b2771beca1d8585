//! DICOM encoding and decoding primitives.
//!
//! This crate provides the building blocks for reading and writing
//! data elements in accordance to a [transfer syntax]:
//! header and value decoders, their encoding counterparts,
//! the contract for pixel data codecs,
//! and a few helpers for preparing native pixel data.
//!
//! All APIs are based on synchronous I/O.
//!
//! [transfer syntax]: transfer_syntax::TransferSyntax

pub mod adapters;
pub mod decode;
pub mod encode;
pub mod pixel;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use decode::ElementDecoder;
pub use encode::ElementEncoder;
pub use transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
