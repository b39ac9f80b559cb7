#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM data set model,
//! containing the concepts and data structures
//! shared by the codec, dictionary and data set crates.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the DICOM attribute tag types,
//!   including private creator qualified tags and tag masks.
//! - [`vr`] is the closed registry of value representations,
//!   with the static layout and content rules of each one.
//! - [`validation`] checks textual content and value multiplicity.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.
//! - [`value`] holds definitions for native values
//!   written to and read from DICOM elements.
//! - [`error`] contains errors of value interpretation.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`error`]: ./error/index.html
//! [`header`]: ./header/index.html
//! [`validation`]: ./validation/index.html
//! [`value`]: ./value/index.html
//! [`vr`]: ./vr/index.html

pub mod dictionary;
pub mod error;
pub mod header;
pub mod validation;
pub mod value;
pub mod vr;

pub use dictionary::DataDictionary;
pub use error::InvalidValueReadError;
pub use header::{QualifiedTag, Tag, TagMask};
pub use validation::ValidationError;
pub use value::{PersonName, PrimitiveValue};
pub use vr::VR;

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;

/// Helper macro for constructing a DICOM primitive value,
/// of an arbitrary variant and multiplicity.
///
/// The base syntax is a value type identifier,
/// which is one of the variants of [`PrimitiveValue`],
/// followed by either an expression resolving to one standard Rust value,
/// or a bracketed list of values.
///
/// # Example
///
/// ```
/// # use dicom_core::dicom_value;
/// # use dicom_core::value::PrimitiveValue;
/// let value = dicom_value!(Strs, ["DERIVED", "PRIMARY"]);
/// assert_eq!(value.multiplicity(), 2);
///
/// let value = dicom_value!(U16, 512);
/// assert_eq!(value, PrimitiveValue::from(512_u16));
/// ```
#[macro_export]
macro_rules! dicom_value {
    // Empty value
    () => {
        $crate::value::PrimitiveValue::Empty
    };
    // Multiple strings
    (Strs, [ $($elem: expr),+ , ]) => {
        $crate::value::PrimitiveValue :: Strs ($crate::smallvec::smallvec![$($elem.to_owned(),)*])
    };
    (Strs, [ $($elem: expr),+ ]) => {
        $crate::value::PrimitiveValue :: Strs ($crate::smallvec::smallvec![$($elem.to_owned(),)*])
    };
    ($typ: ident, [ $($elem: expr),+ , ]) => {
        $crate::value::PrimitiveValue :: $typ ($crate::smallvec::smallvec![$($elem,)*])
    };
    ($typ: ident, [ $($elem: expr),+ ]) => {
        $crate::value::PrimitiveValue :: $typ ($crate::smallvec::smallvec![$($elem,)*])
    };
    (Str, $elem: expr) => {
        $crate::value::PrimitiveValue :: Str (String::from($elem))
    };
    ($typ: ident, $elem: expr) => {
        $crate::value::PrimitiveValue :: $typ ($crate::value::C::from_elem($elem, 1))
    };
}

/// Commonly used items of this crate.
pub mod prelude {
    pub use crate::dicom_value;
    pub use crate::dictionary::{DataDictionary, DataDictionaryEntry};
    pub use crate::header::{QualifiedTag, Tag, TagMask};
    pub use crate::value::{PersonName, PrimitiveValue};
    pub use crate::vr::VR;
}
