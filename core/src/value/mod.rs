//! This module includes the native values
//! which can be written to and read from DICOM elements:
//! primitive values, person names, and dates and times with their ranges.

pub mod date;
pub mod person_name;
mod primitive;

pub use self::date::{DateRange, DateTimeRange, TimeRange, ValueRange};
pub use self::person_name::PersonName;
pub use self::primitive::{PrimitiveValue, ValueType, C};

// Re-exported from chrono
pub use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
