//! This module aggregates errors that may emerge
//! when interpreting DICOM values.
use crate::header::ParseTagError;
use snafu::{Backtrace, Snafu};
use std::num::{ParseFloatError, ParseIntError};

/// Triggered when a value cannot be read as the requested native type.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum InvalidValueReadError {
    /// The text cannot be parsed as an integer.
    #[snafu(display("Failed to parse text value `{}` as an integer", text))]
    ParseInteger {
        text: String,
        backtrace: Backtrace,
        source: ParseIntError,
    },
    /// The text cannot be parsed as a floating point number.
    #[snafu(display("Failed to parse text value `{}` as a floating point number", text))]
    ParseFloat {
        text: String,
        backtrace: Backtrace,
        source: ParseFloatError,
    },
    /// The number does not fit in the requested type.
    #[snafu(display("Value {} is out of range of the requested type `{}`", value, type_name))]
    NumberOutOfRange {
        value: String,
        type_name: &'static str,
        backtrace: Backtrace,
    },
    /// None of the accepted patterns matched the text.
    #[snafu(display("Text `{}` does not match any accepted {} pattern", text, kind))]
    ParseDateTime {
        text: String,
        kind: &'static str,
        backtrace: Backtrace,
    },
    /// The text does not name a variant of the requested enumeration.
    #[snafu(display("Text `{}` is not a known `{}` value", text, type_name))]
    ParseEnum {
        text: String,
        type_name: &'static str,
        backtrace: Backtrace,
    },
    /// The text is not a tag.
    #[snafu(display("Failed to parse text value as an attribute tag"))]
    ParseTag {
        #[snafu(backtrace)]
        source: ParseTagError,
    },
    /// The byte length is not a multiple of the value unit.
    #[snafu(display("Invalid byte length {}, not a multiple of {}", len, unit))]
    InvalidLength {
        len: usize,
        unit: u32,
        backtrace: Backtrace,
    },
    /// The end of a range precedes its start.
    #[snafu(display("End {} is before start {}", end, start))]
    RangeInversion {
        start: String,
        end: String,
        backtrace: Backtrace,
    },
}

/// Type alias for a result of value interpretation.
pub type Result<T, E = InvalidValueReadError> = std::result::Result<T, E>;
