//! Configuration of a data set.
//!
//! Every [`DataSet`](crate::DataSet) holds its own [`DataSetOptions`],
//! which nested sequence items inherit from their parent.

use dicom_core::header::GroupNumber;
use dicom_dictionary_std::uids;
use dicom_encoding::text::SpecificCharacterSet;
use dicom_encoding::Endianness;

/// How two data sets are compared for equality.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EqualityMode {
    /// Data sets are equal if all of their elements are equal,
    /// recursing into sequence items.
    #[default]
    Content,
    /// A data set is only equal to itself.
    Identity,
}

/// A builder type for the options of a data set.
///
/// # Example
///
/// ```
/// # use dicom_dataset::{DataSet, DataSetOptions, EqualityMode};
/// # use dicom_encoding::text::SpecificCharacterSet;
/// let options = DataSetOptions::new()
///     .validate(false)
///     .equality(EqualityMode::Identity)
///     .fallback_charset(SpecificCharacterSet::from_code("ISO_IR 100"));
/// let dataset = DataSet::new_empty_with_options(options);
/// assert!(!dataset.is_validating());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct DataSetOptions {
    pub(crate) validate: bool,
    pub(crate) equality: EqualityMode,
    pub(crate) fallback_charset: SpecificCharacterSet,
    pub(crate) transfer_syntax: String,
    pub(crate) group_restriction: Option<GroupNumber>,
}

impl Default for DataSetOptions {
    fn default() -> Self {
        DataSetOptions {
            validate: true,
            equality: EqualityMode::Content,
            fallback_charset: SpecificCharacterSet::default(),
            transfer_syntax: uids::EXPLICIT_VR_LITTLE_ENDIAN.to_string(),
            group_restriction: None,
        }
    }
}

impl DataSetOptions {
    pub fn new() -> Self {
        DataSetOptions::default()
    }

    /// Options for a file meta group data set,
    /// which only admits elements of group `0002`.
    pub fn file_meta() -> Self {
        DataSetOptions::default().restrict_to_group(0x0002)
    }

    /// Set whether elements are validated when added or changed.
    ///
    /// Validation is enabled by default.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set how data sets are compared for equality.
    pub fn equality(mut self, mode: EqualityMode) -> Self {
        self.equality = mode;
        self
    }

    /// Set the character sets used for text values
    /// when the data set has no _Specific Character Set_ element.
    pub fn fallback_charset(mut self, charset: SpecificCharacterSet) -> Self {
        self.fallback_charset = charset;
        self
    }

    /// Set the transfer syntax UID of the data set,
    /// which determines the byte order of binary values.
    pub fn transfer_syntax(mut self, uid: impl Into<String>) -> Self {
        self.transfer_syntax = uid.into();
        self
    }

    /// Only admit elements of the given group.
    pub fn restrict_to_group(mut self, group: GroupNumber) -> Self {
        self.group_restriction = Some(group);
        self
    }

    /// Whether elements are validated on mutation.
    pub fn is_validating(&self) -> bool {
        self.validate
    }

    pub fn equality_mode(&self) -> EqualityMode {
        self.equality
    }

    pub fn fallback(&self) -> &SpecificCharacterSet {
        &self.fallback_charset
    }

    pub fn transfer_syntax_uid(&self) -> &str {
        &self.transfer_syntax
    }

    pub fn group_restriction(&self) -> Option<GroupNumber> {
        self.group_restriction
    }

    /// The byte order of binary values under the configured transfer syntax.
    ///
    /// Only _Explicit VR Big Endian_ is big endian.
    pub fn endianness(&self) -> Endianness {
        if self.transfer_syntax.trim_end_matches('\0') == uids::EXPLICIT_VR_BIG_ENDIAN {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}
