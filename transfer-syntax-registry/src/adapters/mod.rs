//! Root module for the pixel data codecs shipped with the registry.
//!
//! - [`rle_lossless`] provides RLE Lossless decoding and encoding.
//! - [`deflated`] provides Deflated Image Frame Compression,
//!   a raw deflate stream per frame.
pub mod deflated;
pub mod rle_lossless;
