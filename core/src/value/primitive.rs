//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::date::{
    format_date, format_datetime, format_datetime_with_offset, format_time, DateRange,
    DateTimeRange, TimeRange,
};
use super::person_name::PersonName;
use crate::header::Tag;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use itertools::Itertools;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a native value
/// on its way into a DICOM element.
///
/// Values are turned into the binary form of the element's
/// value representation when added to an element,
/// so the same variant may feed different representations
/// (e.g. `F64` for FD, OD and DS).
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// # Example
///
/// ```
/// # use dicom_core::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Str("Smith^John".to_string()));
/// assert_eq!(value.multiplicity(), 1);
///
/// let value = PrimitiveValue::from(512_u16);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data.
    Empty,

    /// A sequence of strings.
    Strs(C<String>),

    /// A single string, which is not split on backslash.
    Str(String),

    /// A sequence of attribute tags.
    Tags(C<Tag>),

    /// A sequence of unsigned 8-bit integers.
    U8(C<u8>),

    /// A sequence of signed 16-bit integers.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    U64(C<u64>),

    /// A sequence of 32-bit floating point numbers.
    F32(C<f32>),

    /// A sequence of 64-bit floating point numbers.
    F64(C<f64>),

    /// A sequence of dates.
    Date(C<NaiveDate>),

    /// A sequence of date-time values without UTC offset.
    DateTime(C<NaiveDateTime>),

    /// A sequence of time values.
    Time(C<NaiveTime>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u8, U8);
impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);

impl_from_for_primitive!(Tag, Tags);
impl_from_for_primitive!(NaiveDate, Date);
impl_from_for_primitive!(NaiveTime, Time);
impl_from_for_primitive!(NaiveDateTime, DateTime);

/// Conversion of a sequence of native values,
/// each becoming one value of the element.
macro_rules! impl_from_seq_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<Vec<$typ>> for PrimitiveValue {
            fn from(value: Vec<$typ>) -> Self {
                PrimitiveValue::$variant(C::from_vec(value))
            }
        }

        impl From<&[$typ]> for PrimitiveValue {
            fn from(value: &[$typ]) -> Self {
                PrimitiveValue::$variant(value.iter().cloned().collect())
            }
        }

        impl<const N: usize> From<[$typ; N]> for PrimitiveValue {
            fn from(value: [$typ; N]) -> Self {
                PrimitiveValue::$variant(value.into_iter().collect())
            }
        }
    };
}

impl_from_seq_for_primitive!(u8, U8);
impl_from_seq_for_primitive!(u16, U16);
impl_from_seq_for_primitive!(i16, I16);
impl_from_seq_for_primitive!(u32, U32);
impl_from_seq_for_primitive!(i32, I32);
impl_from_seq_for_primitive!(u64, U64);
impl_from_seq_for_primitive!(i64, I64);
impl_from_seq_for_primitive!(f32, F32);
impl_from_seq_for_primitive!(f64, F64);
impl_from_seq_for_primitive!(Tag, Tags);
impl_from_seq_for_primitive!(NaiveDate, Date);
impl_from_seq_for_primitive!(NaiveTime, Time);
impl_from_seq_for_primitive!(NaiveDateTime, DateTime);
impl_from_seq_for_primitive!(String, Strs);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<&[&str]> for PrimitiveValue {
    fn from(value: &[&str]) -> Self {
        PrimitiveValue::Strs(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PrimitiveValue {
    fn from(value: [&str; N]) -> Self {
        PrimitiveValue::Strs(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<PersonName> for PrimitiveValue {
    fn from(value: PersonName) -> Self {
        PrimitiveValue::Strs(C::from_elem(value.to_string(), 1))
    }
}

impl From<&PersonName> for PrimitiveValue {
    fn from(value: &PersonName) -> Self {
        PrimitiveValue::Strs(C::from_elem(value.to_string(), 1))
    }
}

/// Date-times with a UTC offset are kept in text form,
/// as the offset is not part of the `DateTime` variant.
impl From<DateTime<FixedOffset>> for PrimitiveValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PrimitiveValue::Strs(C::from_elem(format_datetime_with_offset(&value), 1))
    }
}

macro_rules! impl_from_range_for_primitive {
    ($typ: ty) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::Strs(C::from_elem(value.to_string(), 1))
            }
        }
    };
}

impl_from_range_for_primitive!(DateRange);
impl_from_range_for_primitive!(TimeRange);
impl_from_range_for_primitive!(DateTimeRange);

impl PrimitiveValue {
    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
            Date(c) => c.len() as u32,
            DateTime(c) => c.len() as u32,
            Time(c) => c.len() as u32,
        }
    }

    /// Whether the value holds no elements.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Retrieve the type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Date(_) => ValueType::Date,
            PrimitiveValue::DateTime(_) => ValueType::DateTime,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::Time(_) => ValueType::Time,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::U64(_) => ValueType::U64,
            PrimitiveValue::U8(_) => ValueType::U8,
        }
    }

    /// Convert the primitive value into a string representation.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided as is.
    /// In the case of `Strs`, the strings are first joined together
    /// with a backslash (`'\\'`).
    /// All other type variants are first converted to a string,
    /// then joined together with a backslash.
    /// Dates and times use their standard DICOM form.
    ///
    /// ```
    /// # use dicom_core::value::{C, PrimitiveValue};
    /// # use smallvec::smallvec;
    /// # use chrono::NaiveDate;
    /// assert_eq!(
    ///     PrimitiveValue::from(NaiveDate::from_ymd_opt(2014, 10, 12).unwrap())
    ///         .to_str(),
    ///     "20141012",
    /// );
    /// assert_eq!(
    ///     PrimitiveValue::from(["DERIVED", "PRIMARY"]).to_str(),
    ///     "DERIVED\\PRIMARY",
    /// );
    /// ```
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(values) => Cow::from(values.as_str()),
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    Cow::from(&values[0])
                } else {
                    Cow::from(values.iter().join("\\"))
                }
            }
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Turn the value into a list of textual values,
    /// one per element.
    pub fn to_multi_str(&self) -> Cow<[String]> {
        fn seq_to_str<I>(iter: I) -> Cow<'static, [String]>
        where
            I: IntoIterator,
            I::Item: std::fmt::Display,
        {
            Cow::Owned(iter.into_iter().map(|x| x.to_string()).collect())
        }

        match self {
            PrimitiveValue::Empty => Cow::Borrowed(&[]),
            PrimitiveValue::Str(value) => Cow::Borrowed(std::slice::from_ref(value)),
            PrimitiveValue::Strs(values) => Cow::Borrowed(&values[..]),
            PrimitiveValue::Date(values) => {
                Cow::Owned(values.iter().map(|v| format_date(*v)).collect())
            }
            PrimitiveValue::Time(values) => {
                Cow::Owned(values.iter().map(|v| format_time(*v)).collect())
            }
            PrimitiveValue::DateTime(values) => {
                Cow::Owned(values.iter().map(|v| format_datetime(*v)).collect())
            }
            PrimitiveValue::U8(values) => seq_to_str(values),
            PrimitiveValue::U16(values) => seq_to_str(values),
            PrimitiveValue::U32(values) => seq_to_str(values),
            PrimitiveValue::I16(values) => seq_to_str(values),
            PrimitiveValue::I32(values) => seq_to_str(values),
            PrimitiveValue::U64(values) => seq_to_str(values),
            PrimitiveValue::I64(values) => seq_to_str(values),
            PrimitiveValue::F32(values) => seq_to_str(values),
            PrimitiveValue::F64(values) => seq_to_str(values),
            PrimitiveValue::Tags(values) => seq_to_str(values),
        }
    }
}

/// The output of this method is equivalent to calling the method `to_str`
impl std::fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Str(value) => f.write_str(value),
            _ => f.write_str(&self.to_multi_str().iter().join("\\")),
        }
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content,
/// plus the `Item` and `PixelSequence` entries.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,

    /// An item. Used for elements in a SQ, regardless of content.
    Item,

    /// An item. Used for the values of encapsulated pixel data.
    PixelSequence,

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI and UC.
    Strs,

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str,

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags,

    /// The value is a sequence of unsigned 8-bit integers.
    /// Used for OB and UN.
    U8,

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16,

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16,

    /// A sequence of signed 32-bit integers.
    /// Used for SL and IS.
    I32,

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32,

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64,

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64,

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32,

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD, FD and DS.
    F64,

    /// A sequence of dates.
    /// Used for the DA representation.
    Date,

    /// A sequence of date-time values.
    /// Used for the DT representation.
    DateTime,

    /// A sequence of time values.
    /// Used for the TM representation.
    Time,
}

impl ValueType {
    /// Whether the type is textual.
    pub fn is_textual(self) -> bool {
        matches!(self, ValueType::Str | ValueType::Strs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn multiplicity_and_type() {
        assert_eq!(PrimitiveValue::Empty.multiplicity(), 0);
        assert_eq!(PrimitiveValue::from("A\\B").multiplicity(), 1);
        assert_eq!(PrimitiveValue::from([1_u16, 2, 3]).multiplicity(), 3);
        assert_eq!(PrimitiveValue::from(vec![1.5_f64]).value_type(), ValueType::F64);
        assert_eq!(
            PrimitiveValue::from(PersonName::new("Doe", "John")),
            PrimitiveValue::Strs(smallvec!["Doe^John".to_string()])
        );
    }

    #[test]
    fn textual_forms() {
        let value = PrimitiveValue::from([Tag(0x0010, 0x0010), Tag(0x0010, 0x0020)]);
        assert_eq!(value.to_str(), "(0010,0010)\\(0010,0020)");

        let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        assert_eq!(PrimitiveValue::from(time).to_str(), "103000");

        let value = PrimitiveValue::from([10_i32, -4]);
        assert_eq!(&value.to_multi_str()[..], &["10".to_string(), "-4".to_string()]);

        let range = DateRange::from_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(PrimitiveValue::from(range).to_str(), "20240101-");
    }
}
