//! Transfer syntax UIDs.
//!
//! A data set only takes the byte order of binary values
//! from its transfer syntax,
//! so these are the syntaxes which tell byte orders apart.

/// Implicit VR Little Endian, the default transfer syntax of DICOM.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";

/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";

/// Deflated Explicit VR Little Endian.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";

/// Explicit VR Big Endian (retired),
/// the only transfer syntax with big endian binary values.
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
