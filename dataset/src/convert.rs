//! Conversion of element values into native Rust types.
//!
//! Any type implementing [`FromElement`] can be requested
//! from a [`DataElement`] or a [`DataSet`](crate::DataSet).
//! The conversion depends on the value representation of the element:
//! textual values are parsed,
//! binary values are read in the byte order of the data set
//! and cast to the requested numeric type when lossless.

use crate::element::DataElement;
use crate::{InvalidValueSnafu, Result, UnsupportedConversionSnafu};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};
use dicom_core::error::{
    InvalidValueReadError, NumberOutOfRangeSnafu, ParseFloatSnafu, ParseIntegerSnafu,
    ParseTagSnafu,
};
use dicom_core::value::date::{parse_date, parse_datetime, parse_datetime_with_offset, parse_time};
use dicom_core::value::{DateRange, DateTimeRange, PersonName, TimeRange, ValueType};
use dicom_core::{Tag, VR};
use num_traits::{NumCast, ToPrimitive};
use snafu::{OptionExt, ResultExt};
use std::any::type_name;
use std::fmt;

/// A native type which can be read from the values of a data element.
pub trait FromElement: Sized {
    /// Read the value at the given index of the element.
    fn from_element<D>(element: &DataElement<D>, index: usize) -> Result<Self>;

    /// Read all values of the element.
    fn all_from_element<D>(element: &DataElement<D>) -> Result<Vec<Self>> {
        (0..element.value_count()?)
            .map(|i| Self::from_element(element, i))
            .collect()
    }
}

fn unsupported<T, D>(element: &DataElement<D>) -> crate::Error {
    UnsupportedConversionSnafu {
        tag: element.tag(),
        vr: element.vr(),
        type_name: type_name::<T>(),
    }
    .build()
    .into()
}

impl FromElement for String {
    fn from_element<D>(element: &DataElement<D>, index: usize) -> Result<Self> {
        element.string_at(index)
    }

    fn all_from_element<D>(element: &DataElement<D>) -> Result<Vec<Self>> {
        element.strings()
    }
}

/// A numeric type of element values.
pub(crate) trait Number: NumCast + ToPrimitive + Copy + fmt::Display {
    const INTEGRAL: bool;
}

macro_rules! impl_number {
    ($($typ: ty => $integral: literal),* $(,)?) => {
        $(
            impl Number for $typ {
                const INTEGRAL: bool = $integral;
            }

            impl FromElement for $typ {
                fn from_element<D>(element: &DataElement<D>, index: usize) -> Result<Self> {
                    read_number(element, index)
                }

                fn all_from_element<D>(element: &DataElement<D>) -> Result<Vec<Self>> {
                    read_numbers(element)
                }
            }
        )*
    };
}

impl_number! {
    u8 => true,
    i16 => true,
    u16 => true,
    i32 => true,
    u32 => true,
    i64 => true,
    u64 => true,
    f32 => false,
    f64 => false,
}

/// Cast a number to another numeric type.
///
/// Fails if the value does not fit the target type,
/// or if a fractional value would be truncated into an integer.
pub(crate) fn cast_number<S: Number, T: Number>(tag: Tag, value: S) -> Result<T> {
    let exact = !T::INTEGRAL || S::INTEGRAL || value.to_f64().map_or(false, |v| v.fract() == 0.0);
    let cast = if exact { <T as NumCast>::from(value) } else { None };
    Ok(cast
        .context(NumberOutOfRangeSnafu {
            value: value.to_string(),
            type_name: type_name::<T>(),
        })
        .context(InvalidValueSnafu { tag })?)
}

fn number_from_text<N: Number>(tag: Tag, vr: VR, text: &str) -> Result<N> {
    if vr == VR::IS || (vr != VR::DS && N::INTEGRAL) {
        let value = parse_is(text).context(InvalidValueSnafu { tag })?;
        cast_number(tag, value)
    } else {
        let value = parse_ds(text).context(InvalidValueSnafu { tag })?;
        cast_number(tag, value)
    }
}

fn read_number<N: Number, D>(element: &DataElement<D>, index: usize) -> Result<N> {
    let tag = element.tag();
    let vr = element.vr();
    if vr.is_string() {
        let text = element.string_at(index)?;
        return number_from_text(tag, vr, &text);
    }

    macro_rules! read_as {
        ($typ: ty) => {
            cast_number(tag, element.binary_at::<$typ>(index)?)
        };
    }

    match vr.native_type() {
        ValueType::U8 => read_as!(u8),
        ValueType::I16 => read_as!(i16),
        ValueType::U16 => read_as!(u16),
        ValueType::I32 => read_as!(i32),
        ValueType::U32 => read_as!(u32),
        ValueType::I64 => read_as!(i64),
        ValueType::U64 => read_as!(u64),
        ValueType::F32 => read_as!(f32),
        ValueType::F64 => read_as!(f64),
        _ => Err(unsupported::<N, D>(element)),
    }
}

fn read_numbers<N: Number, D>(element: &DataElement<D>) -> Result<Vec<N>> {
    if element.vr().is_string() {
        let (tag, vr) = (element.tag(), element.vr());
        element
            .strings()?
            .iter()
            .map(|text| number_from_text(tag, vr, text))
            .collect()
    } else {
        (0..element.value_count()?)
            .map(|i| read_number(element, i))
            .collect()
    }
}

impl FromElement for Tag {
    fn from_element<D>(element: &DataElement<D>, index: usize) -> Result<Self> {
        match element.vr() {
            VR::AT => element.binary_at::<Tag>(index),
            vr if vr.is_string() => {
                let text = element.string_at(index)?;
                Ok(text
                    .parse::<Tag>()
                    .context(ParseTagSnafu)
                    .context(InvalidValueSnafu { tag: element.tag() })?)
            }
            _ => Err(unsupported::<Tag, D>(element)),
        }
    }
}

/// Implement `FromElement` for a type parsed from text
/// according to the value representation.
macro_rules! impl_from_text {
    ($typ: ty, |$vr: ident, $text: ident| $body: expr) => {
        impl FromElement for $typ {
            fn from_element<D>(element: &DataElement<D>, index: usize) -> Result<Self> {
                if !element.vr().is_string() {
                    return Err(unsupported::<$typ, D>(element));
                }
                let text = element.string_at(index)?;
                let $vr = element.vr();
                let $text = text.as_str();
                let parsed: Option<std::result::Result<$typ, InvalidValueReadError>> = $body;
                match parsed {
                    Some(value) => Ok(value.context(InvalidValueSnafu { tag: element.tag() })?),
                    None => Err(unsupported::<$typ, D>(element)),
                }
            }
        }
    };
}

impl_from_text!(NaiveDate, |vr, text| match vr {
    VR::DA => Some(parse_date(text)),
    VR::DT => Some(parse_datetime(text).map(|dt| dt.date())),
    _ => None,
});

impl_from_text!(NaiveTime, |vr, text| match vr {
    VR::TM => Some(parse_time(text)),
    VR::DT => Some(parse_datetime(text).map(|dt| dt.time())),
    _ => None,
});

impl_from_text!(NaiveDateTime, |vr, text| match vr {
    VR::DT => Some(parse_datetime(text)),
    VR::DA => Some(parse_date(text).map(|d| d.and_time(NaiveTime::MIN))),
    _ => None,
});

// date-times without offset are taken as UTC
impl_from_text!(DateTime<FixedOffset>, |vr, text| match vr {
    VR::DT => Some(parse_datetime_with_offset(text, Utc.fix())),
    _ => None,
});

impl_from_text!(PersonName, |_vr, text| Some(Ok(PersonName::parse(text))));

impl_from_text!(DateRange, |vr, text| match vr {
    VR::DA => Some(DateRange::parse(text)),
    _ => None,
});

impl_from_text!(TimeRange, |vr, text| match vr {
    VR::TM => Some(TimeRange::parse(text)),
    _ => None,
});

// a single date covers the whole day
impl_from_text!(DateTimeRange, |vr, text| match vr {
    VR::DT => Some(DateTimeRange::parse(text)),
    VR::DA => Some(DateRange::parse(text).map(|r| r.to_datetime_range())),
    _ => None,
});

/// Parse the text of a DS value.
pub fn parse_ds(text: &str) -> Result<f64, InvalidValueReadError> {
    let text = text.trim();
    text.parse().context(ParseFloatSnafu { text })
}

/// Parse the text of an IS value.
///
/// A fractional part is accepted as long as it is zero (`"12.0"`),
/// which is not a valid IS value but is found in real world files.
pub fn parse_is(text: &str) -> Result<i64, InvalidValueReadError> {
    let text = text.trim();
    match text.parse() {
        Ok(value) => Ok(value),
        Err(e) => match text.split_once('.') {
            Some((integral, fraction))
                if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') =>
            {
                integral.parse().context(ParseIntegerSnafu { text })
            }
            _ => Err(e).context(ParseIntegerSnafu { text }),
        },
    }
}

/// Format a number as a DS value.
///
/// The shortest text which reads back as the same number is used.
/// When it exceeds the 16 characters of a DS value,
/// the closest of the fixed point and exponent forms which fit is used.
///
/// ```
/// # use dicom_dataset::convert::format_ds;
/// assert_eq!(format_ds(1.0_f64), "1");
/// assert_eq!(format_ds(-0.25_f64), "-0.25");
/// assert_eq!(format_ds(1e20_f64), "1e20");
/// assert_eq!(format_ds(0.1_f32), "0.1");
/// ```
pub fn format_ds<F>(value: F) -> String
where
    F: fmt::Display + fmt::LowerExp + Into<f64> + Copy,
{
    const MAX_LEN: usize = 16;

    let text = value.to_string();
    if text.len() <= MAX_LEN {
        return text;
    }
    let shortest_exp = format!("{:e}", value);
    if shortest_exp.len() <= MAX_LEN {
        return shortest_exp;
    }

    let fixed = (0..MAX_LEN)
        .rev()
        .map(|precision| trim_fraction(format!("{:.*}", precision, value)))
        .find(|text| text.len() <= MAX_LEN);
    let exponent = (0..MAX_LEN)
        .rev()
        .map(|precision| format!("{:.*e}", precision, value))
        .find(|text| text.len() <= MAX_LEN);
    let error = |text: &str| {
        text.parse::<f64>()
            .map_or(f64::INFINITY, |v| (v - value.into()).abs())
    };
    match (fixed, exponent) {
        (Some(fixed), Some(exponent)) => {
            if error(&exponent) < error(&fixed) {
                exponent
            } else {
                fixed
            }
        }
        (Some(text), None) | (None, Some(text)) => text,
        (None, None) => shortest_exp,
    }
}

fn trim_fraction(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
