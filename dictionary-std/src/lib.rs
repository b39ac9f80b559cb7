//! The standard DICOM attribute dictionary and related constants.
//!
//! - [`StandardDataDictionary`] looks up the keyword,
//!   value representation and value multiplicity of the attributes
//!   defined in [DICOM PS3.6].
//!   Data sets use it by default
//!   to validate values and to choose value representations.
//! - [`tags`] maps attribute keywords to tags at compile time.
//! - [`uids`] holds the transfer syntax UIDs
//!   which determine the byte order of binary values.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
