//! DICOM encoding and decoding primitives.
//!
//! This crate provides the conversion between DICOM element values
//! and their byte representation:
//!
//! - [`text`] decodes and encodes text values
//!   under the character sets declared by a _Specific Character Set_ element,
//!   including ISO 2022 code extensions with escape sequences;
//! - [`binary`] reads and writes packed fixed-width values
//!   in either byte order.
//!
//! [`text`]: ./text/index.html
//! [`binary`]: ./binary/index.html

pub mod binary;
pub mod text;

pub use byteordered::Endianness;
pub use text::{CharacterSet, Delimiters, SpecificCharacterSet, TextCodec};
