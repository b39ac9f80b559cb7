//! The value representation registry.
//!
//! Every [`VR`] maps to exactly one static [`VrInfo`] record,
//! describing how values of that representation are laid out
//! and which content rules apply to them.
//! The set of value representations is closed:
//! there is no way to register new ones at run-time.

use crate::validation::{self, ValidationError};
use crate::value::ValueType;
use snafu::{Backtrace, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

/// Error raised when looking up a value representation
/// by an unrecognized code.
#[derive(Debug, Snafu)]
#[snafu(display("unknown value representation `{}`", code))]
pub struct UnknownVrError {
    /// the code which failed to resolve
    pub code: String,
    backtrace: Backtrace,
}

/// The static descriptor of a value representation.
#[derive(Debug, PartialEq, Eq)]
pub struct VrInfo {
    /// The value representation described.
    pub vr: VR,
    /// Human readable name of the value representation.
    pub name: &'static str,
    /// Whether values are textual.
    pub is_string: bool,
    /// Whether textual values are subject to
    /// the Specific Character Set of the data set.
    pub is_string_encoded: bool,
    /// Whether the value length is a 16-bit field
    /// in explicit VR encodings.
    pub has_16bit_length: bool,
    /// Whether the value may hold more than one value
    /// (textual values are separated with a backslash).
    pub is_multi_value: bool,
    /// The byte used to pad values to an even length.
    pub padding: u8,
    /// Maximum length of a single value,
    /// in characters for textual VRs and bytes otherwise.
    /// Zero means unbounded.
    pub maximum_length: u32,
    /// Number of bytes of one atomic value, zero if not applicable.
    pub unit_size: u32,
    /// Width in bytes of the swapping unit when changing byte order.
    pub byte_swap: u32,
    /// The native value type produced by this representation.
    pub native_type: ValueType,
    /// Whether the number of values is checked
    /// against the dictionary value multiplicity.
    pub validates_count: bool,
}

const SPACE: u8 = b' ';
const NUL: u8 = 0;

macro_rules! vr_info {
    (
        $vr: ident, $name: literal,
        string: $is_string: literal, encoded: $encoded: literal,
        short: $short: literal, multi: $multi: literal,
        pad: $pad: expr, max: $max: literal,
        unit: $unit: literal, swap: $swap: literal,
        native: $native: ident, count: $count: literal
    ) => {
        VrInfo {
            vr: VR::$vr,
            name: $name,
            is_string: $is_string,
            is_string_encoded: $encoded,
            has_16bit_length: $short,
            is_multi_value: $multi,
            padding: $pad,
            maximum_length: $max,
            unit_size: $unit,
            byte_swap: $swap,
            native_type: ValueType::$native,
            validates_count: $count,
        }
    };
}

static AE_INFO: VrInfo = vr_info!(AE, "Application Entity", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 16, unit: 1, swap: 1, native: Strs, count: true);
static AS_INFO: VrInfo = vr_info!(AS, "Age String", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 4, unit: 1, swap: 1, native: Strs, count: true);
static AT_INFO: VrInfo = vr_info!(AT, "Attribute Tag", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 4, unit: 4, swap: 2, native: Tags, count: true);
static CS_INFO: VrInfo = vr_info!(CS, "Code String", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 16, unit: 1, swap: 1, native: Strs, count: true);
static DA_INFO: VrInfo = vr_info!(DA, "Date", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 8, unit: 1, swap: 1, native: Date, count: true);
static DS_INFO: VrInfo = vr_info!(DS, "Decimal String", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 16, unit: 1, swap: 1, native: F64, count: true);
static DT_INFO: VrInfo = vr_info!(DT, "Date Time", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 26, unit: 1, swap: 1, native: DateTime, count: true);
static FD_INFO: VrInfo = vr_info!(FD, "Floating Point Double", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 8, unit: 8, swap: 8, native: F64, count: true);
static FL_INFO: VrInfo = vr_info!(FL, "Floating Point Single", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 4, unit: 4, swap: 4, native: F32, count: true);
static IS_INFO: VrInfo = vr_info!(IS, "Integer String", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 12, unit: 1, swap: 1, native: I32, count: true);
static LO_INFO: VrInfo = vr_info!(LO, "Long String", string: true, encoded: true, short: true, multi: true, pad: SPACE, max: 64, unit: 1, swap: 1, native: Strs, count: true);
static LT_INFO: VrInfo = vr_info!(LT, "Long Text", string: true, encoded: true, short: true, multi: false, pad: SPACE, max: 10240, unit: 1, swap: 1, native: Str, count: true);
static OB_INFO: VrInfo = vr_info!(OB, "Other Byte", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 1, swap: 1, native: U8, count: false);
static OD_INFO: VrInfo = vr_info!(OD, "Other Double", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 8, swap: 8, native: F64, count: false);
static OF_INFO: VrInfo = vr_info!(OF, "Other Float", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 4, swap: 4, native: F32, count: false);
static OL_INFO: VrInfo = vr_info!(OL, "Other Long", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 4, swap: 4, native: U32, count: false);
static OV_INFO: VrInfo = vr_info!(OV, "Other Very Long", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 8, swap: 8, native: U64, count: false);
static OW_INFO: VrInfo = vr_info!(OW, "Other Word", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 2, swap: 2, native: U16, count: false);
static PN_INFO: VrInfo = vr_info!(PN, "Person Name", string: true, encoded: true, short: true, multi: true, pad: SPACE, max: 64, unit: 1, swap: 1, native: Strs, count: true);
static SH_INFO: VrInfo = vr_info!(SH, "Short String", string: true, encoded: true, short: true, multi: true, pad: SPACE, max: 16, unit: 1, swap: 1, native: Strs, count: true);
static SL_INFO: VrInfo = vr_info!(SL, "Signed Long", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 4, unit: 4, swap: 4, native: I32, count: true);
static SQ_INFO: VrInfo = vr_info!(SQ, "Sequence of Items", string: false, encoded: false, short: false, multi: false, pad: SPACE, max: 0, unit: 0, swap: 0, native: Item, count: false);
static SS_INFO: VrInfo = vr_info!(SS, "Signed Short", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 2, unit: 2, swap: 2, native: I16, count: true);
static ST_INFO: VrInfo = vr_info!(ST, "Short Text", string: true, encoded: true, short: true, multi: false, pad: SPACE, max: 1024, unit: 1, swap: 1, native: Str, count: true);
static SV_INFO: VrInfo = vr_info!(SV, "Signed Very Long", string: false, encoded: false, short: false, multi: true, pad: NUL, max: 8, unit: 8, swap: 8, native: I64, count: true);
static TM_INFO: VrInfo = vr_info!(TM, "Time", string: true, encoded: false, short: true, multi: true, pad: SPACE, max: 16, unit: 1, swap: 1, native: Time, count: true);
static UC_INFO: VrInfo = vr_info!(UC, "Unlimited Characters", string: true, encoded: true, short: false, multi: true, pad: SPACE, max: 0, unit: 1, swap: 1, native: Strs, count: false);
static UI_INFO: VrInfo = vr_info!(UI, "Unique Identifier", string: true, encoded: false, short: true, multi: true, pad: NUL, max: 64, unit: 1, swap: 1, native: Strs, count: true);
static UL_INFO: VrInfo = vr_info!(UL, "Unsigned Long", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 4, unit: 4, swap: 4, native: U32, count: true);
static UN_INFO: VrInfo = vr_info!(UN, "Unknown", string: false, encoded: false, short: false, multi: false, pad: NUL, max: 0, unit: 1, swap: 1, native: U8, count: false);
static UR_INFO: VrInfo = vr_info!(UR, "Universal Resource Identifier", string: true, encoded: true, short: false, multi: false, pad: SPACE, max: 0, unit: 1, swap: 1, native: Str, count: true);
static US_INFO: VrInfo = vr_info!(US, "Unsigned Short", string: false, encoded: false, short: true, multi: true, pad: NUL, max: 2, unit: 2, swap: 2, native: U16, count: true);
static UT_INFO: VrInfo = vr_info!(UT, "Unlimited Text", string: true, encoded: true, short: false, multi: false, pad: SPACE, max: 0, unit: 1, swap: 1, native: Str, count: true);
static UV_INFO: VrInfo = vr_info!(UV, "Unsigned Very Long", string: false, encoded: false, short: false, multi: true, pad: NUL, max: 8, unit: 8, swap: 8, native: U64, count: true);

impl VR {
    /// All value representations, in alphabetical order.
    pub const ALL: [VR; 34] = [
        VR::AE, VR::AS, VR::AT, VR::CS, VR::DA, VR::DS, VR::DT, VR::FD,
        VR::FL, VR::IS, VR::LO, VR::LT, VR::OB, VR::OD, VR::OF, VR::OL,
        VR::OV, VR::OW, VR::PN, VR::SH, VR::SL, VR::SQ, VR::SS, VR::ST,
        VR::SV, VR::TM, VR::UC, VR::UI, VR::UL, VR::UN, VR::UR, VR::US,
        VR::UT, VR::UV,
    ];

    /// Look up a value representation by its two-letter code.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_core::VR;
    /// assert_eq!(VR::lookup("PN").unwrap(), VR::PN);
    /// assert!(VR::lookup("XY").is_err());
    /// ```
    pub fn lookup(code: &str) -> Result<VR, UnknownVrError> {
        code.parse()
    }

    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Retrieve the static descriptor of this value representation.
    pub fn info(self) -> &'static VrInfo {
        use VR::*;
        match self {
            AE => &AE_INFO,
            AS => &AS_INFO,
            AT => &AT_INFO,
            CS => &CS_INFO,
            DA => &DA_INFO,
            DS => &DS_INFO,
            DT => &DT_INFO,
            FD => &FD_INFO,
            FL => &FL_INFO,
            IS => &IS_INFO,
            LO => &LO_INFO,
            LT => &LT_INFO,
            OB => &OB_INFO,
            OD => &OD_INFO,
            OF => &OF_INFO,
            OL => &OL_INFO,
            OV => &OV_INFO,
            OW => &OW_INFO,
            PN => &PN_INFO,
            SH => &SH_INFO,
            SL => &SL_INFO,
            SQ => &SQ_INFO,
            SS => &SS_INFO,
            ST => &ST_INFO,
            SV => &SV_INFO,
            TM => &TM_INFO,
            UC => &UC_INFO,
            UI => &UI_INFO,
            UL => &UL_INFO,
            UN => &UN_INFO,
            UR => &UR_INFO,
            US => &US_INFO,
            UT => &UT_INFO,
            UV => &UV_INFO,
        }
    }

    /// Whether values of this representation are textual.
    #[inline]
    pub fn is_string(self) -> bool {
        self.info().is_string
    }

    /// Whether textual values are subject to the Specific Character Set.
    #[inline]
    pub fn is_string_encoded(self) -> bool {
        self.info().is_string_encoded
    }

    /// Whether textual values are split on backslash into multiple values.
    #[inline]
    pub fn is_multi_value(self) -> bool {
        self.info().is_multi_value
    }

    /// The byte used for padding a value to an even length.
    #[inline]
    pub fn padding(self) -> u8 {
        self.info().padding
    }

    /// The maximum length of a single value, `0` when unbounded.
    #[inline]
    pub fn maximum_length(self) -> u32 {
        self.info().maximum_length
    }

    /// The maximum length of a single value,
    /// or `u32::MAX` when the representation is unbounded.
    pub fn effective_maximum_length(self) -> u32 {
        match self.info().maximum_length {
            0 => u32::MAX,
            len => len,
        }
    }

    /// The size in bytes of a single binary value, `0` if not applicable.
    #[inline]
    pub fn unit_size(self) -> u32 {
        self.info().unit_size
    }

    /// The native value type of this representation.
    #[inline]
    pub fn native_type(self) -> ValueType {
        self.info().native_type
    }

    /// Check the given textual content against
    /// the content rules of this value representation.
    ///
    /// Representations without content rules accept any text.
    pub fn validate_string(self, content: &str) -> Result<(), ValidationError> {
        validation::validate_string(self, content)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = UnknownVrError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => UnknownVrSnafu { code: string }.fail(),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vr_has_its_own_descriptor() {
        for vr in VR::ALL {
            let info = vr.info();
            assert_eq!(info.vr, vr);
            assert!(std::ptr::eq(info, vr.info()));
            assert_eq!(VR::lookup(vr.to_string()).unwrap(), vr);
        }
    }

    #[test]
    fn unknown_code_fails() {
        let err = VR::lookup("ZZ").unwrap_err();
        assert_eq!(err.code, "ZZ");
        assert!(VR::from_binary(*b"zz").is_none());
        assert_eq!(VR::from_binary(*b"OW"), Some(VR::OW));
    }

    #[test]
    fn padding_rules() {
        assert_eq!(VR::UI.padding(), 0);
        assert_eq!(VR::PN.padding(), b' ');
        assert_eq!(VR::OB.padding(), 0);
        assert_eq!(VR::SQ.padding(), b' ');
    }

    #[test]
    fn textual_properties() {
        assert!(VR::PN.is_string_encoded());
        assert!(!VR::CS.is_string_encoded());
        assert!(!VR::LT.is_multi_value());
        assert!(VR::UC.is_multi_value());
        assert!(!VR::US.is_string());
        assert_eq!(VR::UT.effective_maximum_length(), u32::MAX);
        assert_eq!(VR::SH.effective_maximum_length(), 16);
    }

    #[test]
    fn binary_properties() {
        assert_eq!(VR::US.unit_size(), 2);
        assert_eq!(VR::FD.unit_size(), 8);
        assert_eq!(VR::AT.unit_size(), 4);
        assert_eq!(VR::AT.info().byte_swap, 2);
        assert!(!VR::OB.info().has_16bit_length);
        assert!(VR::US.info().has_16bit_length);
        assert!(!VR::OW.info().validates_count);
        assert_eq!(VR::DS.native_type(), ValueType::F64);
        assert_eq!(VR::SQ.native_type(), ValueType::Item);
    }
}
