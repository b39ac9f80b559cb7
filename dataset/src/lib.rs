#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains a high-level abstraction for building and inspecting
//! DICOM data sets in memory.
//! At this level, a data set is comparable to a dictionary of elements,
//! ordered by tag,
//! in which some of them can hold nested data sets themselves.
//!
//! Every element keeps its value in the binary form
//! dictated by its value representation,
//! and values are converted to and from native Rust types on access:
//!
//! - [`DataSet::add`] and [`DataSet::add_or_update`]
//!   take any value convertible into a [`PrimitiveValue`],
//!   choose the value representation from the data dictionary,
//!   and validate the new element;
//! - [`DataSet::get_value`], [`DataSet::get_values`],
//!   [`DataSet::get_single_value`] and friends
//!   retrieve values as any type implementing [`FromElement`].
//!
//! # Examples
//!
//! ```
//! use dicom_dataset::DataSet;
//! use dicom_dictionary_std::tags;
//! use dicom_core::value::PersonName;
//! # fn main() -> Result<(), dicom_dataset::Error> {
//! let mut dataset = DataSet::new_empty();
//! dataset.add(tags::PATIENT_NAME, PersonName::new("Doe", "John"))?;
//! dataset.add(tags::SLICE_THICKNESS, 1.0_f64)?;
//!
//! assert_eq!(dataset.get_string(tags::PATIENT_NAME)?, "Doe^John");
//! let name: PersonName = dataset.get_single_value(tags::PATIENT_NAME)?;
//! assert_eq!(name.first(), "John");
//! assert_eq!(dataset.element(tags::SLICE_THICKNESS)?.to_str()?, "1");
//! # Ok(())
//! # }
//! ```
//!
//! Private attributes are addressed with a [`QualifiedTag`],
//! and are mapped to a private block of their creator:
//!
//! ```
//! # use dicom_dataset::DataSet;
//! use dicom_core::{QualifiedTag, Tag, VR};
//! # fn main() -> Result<(), dicom_dataset::Error> {
//! let mut dataset = DataSet::new_empty();
//! let tag = QualifiedTag::private(0x0029, 0x0001, "ACME 1.0");
//! dataset.add_with_vr(tag.clone(), VR::LO, "value")?;
//! assert!(dataset.contains(tag));
//! assert!(dataset.contains(Tag(0x0029, 0x1001)));
//! # Ok(())
//! # }
//! ```
pub mod convert;
pub mod element;
pub mod mem;
pub mod options;

pub use crate::convert::FromElement;
pub use crate::element::{BulkData, DataElement, TextValue, Value};
pub use crate::mem::{DataSet, ValidationSuspended};
pub use crate::options::{DataSetOptions, EqualityMode};
pub use dicom_core::validation::ValidationError;
pub use dicom_core::{PrimitiveValue, QualifiedTag, Tag, VR};
pub use dicom_dictionary_std::StandardDataDictionary;

use dicom_core::error::InvalidValueReadError;
use dicom_core::header::GroupNumber;
use dicom_core::value::ValueType;
use dicom_encoding::binary::BinaryValueError;
use snafu::{Backtrace, Snafu};

/// The error type of data set and element operations.
///
/// Errors are split in three families:
/// structural and usage errors ([`DataError`]),
/// values breaking the rules of their value representation or attribute
/// ([`ValidationError`]),
/// and invalid caller input ([`ArgumentError`]).
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A structural or usage error.
    #[snafu(context(false), display("{}", source))]
    Data {
        #[snafu(backtrace)]
        source: DataError,
    },
    /// The content of an element is not valid.
    #[snafu(context(false), display("validation failed: {}", source))]
    Validation {
        #[snafu(backtrace)]
        source: ValidationError,
    },
    /// The caller provided an invalid argument.
    #[snafu(context(false), display("{}", source))]
    Argument {
        #[snafu(backtrace)]
        source: ArgumentError,
    },
}

/// Structural and usage errors of data set operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum DataError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },

    #[snafu(display("Unknown data attribute named `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },

    #[snafu(display("Data element {} already exists", tag))]
    DuplicateTag { tag: Tag, backtrace: Backtrace },

    #[snafu(display("Data element {} is a {} element, expected {}", tag, found, expected))]
    WrongItemType {
        tag: Tag,
        found: &'static str,
        expected: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Element {} has {} values, a single value was requested", tag, count))]
    NotSingleValued {
        tag: Tag,
        count: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Cannot convert {:?} value to {} element {}", from, vr, tag))]
    UnsupportedValue {
        tag: Tag,
        vr: VR,
        from: ValueType,
        backtrace: Backtrace,
    },

    #[snafu(display("Cannot read {} element {} as `{}`", vr, tag, type_name))]
    UnsupportedConversion {
        tag: Tag,
        vr: VR,
        type_name: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not interpret value of element {}", tag))]
    InvalidValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: InvalidValueReadError,
    },

    #[snafu(display("Could not read or write binary value of element {}", tag))]
    BinaryValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: BinaryValueError,
    },

    #[snafu(display("Unknown tag {} has no value representation defined", tag))]
    UnknownTag { tag: QualifiedTag, backtrace: Backtrace },

    #[snafu(display("No private block left in group {:04X} for creator `{}`", group, creator))]
    PrivateBlocksExhausted {
        group: GroupNumber,
        creator: String,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not load bulk data from `{}`", uri))]
    LoadBulkData {
        uri: String,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Errors caused by invalid caller input.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ArgumentError {
    #[snafu(display("Index {} out of range, element {} has {} values", index, tag, count))]
    IndexOutOfRange {
        tag: Tag,
        index: usize,
        count: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Whether this error is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
