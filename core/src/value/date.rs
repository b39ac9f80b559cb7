//! Parsing and formatting of DA, TM and DT values,
//! and of the ranges built from them.
//!
//! Textual dates and times are matched against an ordered list of patterns,
//! the first one matching the whole text wins.
//! Besides the standard DICOM forms,
//! the lists accept a few separators found in real world files
//! (`yyyy.MM.dd`, `HH:mm:ss`, ...).
//! Values are always written with the first, standard pattern.
//!
//! Pattern syntax: `yyyy`, `MM`, `dd`, `HH`, `mm` and `ss`
//! stand for that many decimal digits,
//! `F` stands for 1 to 6 digits of a second fraction,
//! `Z` stands for a UTC offset `&ZZXX`,
//! any other character must appear literally.

use crate::error::{ParseDateTimeSnafu, RangeInversionSnafu, Result};
use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};
use std::fmt;

/// Accepted patterns of DA values, in order of preference.
pub const DATE_PATTERNS: &[&str] = &[
    "yyyyMMdd",
    "yyyy.MM.dd",
    "yyyy/MM/dd",
    "yyyy",
    "yyyyMM",
    "yyyy.MM",
];

/// Accepted patterns of TM values, in order of preference.
pub const TIME_PATTERNS: &[&str] = &[
    "HHmmss",
    "HH",
    "HHmm",
    "HHmmssF",
    "HHmmss.F",
    "HH.mm",
    "HH.mm.ss",
    "HH.mm.ss.F",
    "HH:mm",
    "HH:mm:ss",
    "HH:mm:ss:F",
    "HH:mm:ss.F",
];

/// Accepted patterns of DT values, in order of preference.
pub const DATETIME_PATTERNS: &[&str] = &[
    "yyyyMMddHHmmss",
    "yyyyMMddHHmmssZ",
    "yyyyMMddHHmmss.F",
    "yyyyMMddHHmmss.FZ",
    "yyyyMMddHHmm",
    "yyyyMMddHHmmZ",
    "yyyyMMddHH",
    "yyyyMMddHHZ",
    "yyyyMMdd",
    "yyyyMMddZ",
    "yyyyMM",
    "yyyyMMZ",
    "yyyy",
    "yyyyZ",
    "yyyy.MM.dd",
    "yyyy/MM/dd",
];

/// The components captured by a pattern.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Fields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    nanosecond: u32,
    offset: Option<i32>,
}

fn take_digits(text: &[u8], count: usize) -> Option<(u32, &[u8])> {
    if text.len() < count || !text[..count].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = text[..count]
        .iter()
        .fold(0, |acc, c| acc * 10 + u32::from(c - b'0'));
    Some((value, &text[count..]))
}

/// Match the whole text against a single pattern.
fn match_pattern(pattern: &str, text: &str) -> Option<Fields> {
    let mut fields = Fields::default();
    let mut pattern = pattern.as_bytes();
    let mut text = text.as_bytes();

    while let Some(&token) = pattern.first() {
        let run = pattern.iter().take_while(|&&c| c == token).count();
        match token {
            b'y' | b'M' | b'd' | b'H' | b'm' | b's' => {
                let (value, rest) = take_digits(text, run)?;
                text = rest;
                match token {
                    b'y' => fields.year = Some(value as i32),
                    b'M' => fields.month = Some(value),
                    b'd' => fields.day = Some(value),
                    b'H' => fields.hour = Some(value),
                    b'm' => fields.minute = Some(value),
                    _ => fields.second = Some(value),
                }
                pattern = &pattern[run..];
            }
            b'F' => {
                let digits = text.iter().take_while(|c| c.is_ascii_digit()).count();
                if !(1..=6).contains(&digits) {
                    return None;
                }
                let (value, rest) = take_digits(text, digits)?;
                fields.nanosecond = value * 10u32.pow(9 - digits as u32);
                text = rest;
                pattern = &pattern[1..];
            }
            b'Z' => {
                let sign = match text.first() {
                    Some(b'+') => 1,
                    Some(b'-') => -1,
                    _ => return None,
                };
                let (hours, rest) = take_digits(&text[1..], 2)?;
                let (minutes, rest) = take_digits(rest, 2)?;
                fields.offset = Some(sign * (hours * 3600 + minutes * 60) as i32);
                text = rest;
                pattern = &pattern[1..];
            }
            literal => {
                if text.first() != Some(&literal) {
                    return None;
                }
                text = &text[1..];
                pattern = &pattern[1..];
            }
        }
    }

    if text.is_empty() {
        Some(fields)
    } else {
        None
    }
}

fn match_any(patterns: &[&str], text: &str) -> Option<Fields> {
    patterns.iter().find_map(|p| match_pattern(p, text))
}

impl Fields {
    fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    fn time(&self) -> Option<NaiveTime> {
        // a leap second is folded into the last second of the minute
        NaiveTime::from_hms_nano_opt(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0).min(59),
            self.nanosecond,
        )
    }
}

/// Parse a DA value.
///
/// ```
/// # use dicom_core::value::date::parse_date;
/// # use chrono::NaiveDate;
/// assert_eq!(parse_date("20240229")?, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(parse_date("2024.02.29")?, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(parse_date("29/02/2024").is_err());
/// # Ok::<(), dicom_core::error::InvalidValueReadError>(())
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    match match_any(DATE_PATTERNS, text).and_then(|f| f.date()) {
        Some(date) => Ok(date),
        None => ParseDateTimeSnafu { text, kind: "date" }.fail(),
    }
}

/// Parse a TM value.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    let text = text.trim();
    match match_any(TIME_PATTERNS, text).and_then(|f| f.time()) {
        Some(time) => Ok(time),
        None => ParseDateTimeSnafu { text, kind: "time" }.fail(),
    }
}

fn parse_datetime_fields(text: &str) -> Result<(NaiveDateTime, Option<FixedOffset>)> {
    let text = text.trim();
    let parsed = match_any(DATETIME_PATTERNS, text).and_then(|f| {
        let offset = match f.offset {
            Some(secs) => Some(FixedOffset::east_opt(secs)?),
            None => None,
        };
        Some((NaiveDateTime::new(f.date()?, f.time()?), offset))
    });
    match parsed {
        Some(parsed) => Ok(parsed),
        None => ParseDateTimeSnafu {
            text,
            kind: "date-time",
        }
        .fail(),
    }
}

/// Parse a DT value, ignoring its UTC offset if present.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime> {
    parse_datetime_fields(text).map(|(dt, _)| dt)
}

/// Parse a DT value into a date-time with its UTC offset,
/// using `default_offset` when the value has none.
pub fn parse_datetime_with_offset(
    text: &str,
    default_offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let (dt, offset) = parse_datetime_fields(text)?;
    let offset = offset.unwrap_or(default_offset);
    match offset.from_local_datetime(&dt).single() {
        Some(dt) => Ok(dt),
        None => ParseDateTimeSnafu {
            text,
            kind: "date-time",
        }
        .fail(),
    }
}

/// Format a date with the standard DA pattern `yyyyMMdd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Format a time with the standard TM pattern `HHmmss`,
/// followed by the fraction of a second when not zero.
pub fn format_time(time: NaiveTime) -> String {
    if time.nanosecond() == 0 {
        time.format("%H%M%S").to_string()
    } else {
        time.format("%H%M%S%.6f").to_string()
    }
}

/// Format a date-time with the standard DT pattern `yyyyMMddHHmmss`,
/// followed by the fraction of a second when not zero.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    if datetime.nanosecond() == 0 {
        datetime.format("%Y%m%d%H%M%S").to_string()
    } else {
        datetime.format("%Y%m%d%H%M%S%.6f").to_string()
    }
}

/// Format a date-time with its UTC offset (`&ZZXX`).
pub fn format_datetime_with_offset(datetime: &DateTime<FixedOffset>) -> String {
    format!(
        "{}{}",
        format_datetime(datetime.naive_local()),
        datetime.format("%z")
    )
}

/// A range of dates, times or date-times,
/// in which either bound may be open.
///
/// In text, ranges are written as `start-end`, `start-` or `-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange<T> {
    start: Option<T>,
    end: Option<T>,
}

/// A range of DA values.
pub type DateRange = ValueRange<NaiveDate>;
/// A range of TM values.
pub type TimeRange = ValueRange<NaiveTime>;
/// A range of DT values, or of DA values expanded to whole days.
pub type DateTimeRange = ValueRange<NaiveDateTime>;

impl<T> ValueRange<T>
where
    T: PartialOrd + fmt::Display + Copy,
{
    /// Construct a range between two values monotonically ordered in time.
    pub fn from_start_to_end(start: T, end: T) -> Result<Self> {
        if start > end {
            return RangeInversionSnafu {
                start: start.to_string(),
                end: end.to_string(),
            }
            .fail();
        }
        Ok(ValueRange {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Construct a range with no upper bound.
    pub fn from_start(start: T) -> Self {
        ValueRange {
            start: Some(start),
            end: None,
        }
    }

    /// Construct a range with no lower bound.
    pub fn from_end(end: T) -> Self {
        ValueRange {
            start: None,
            end: Some(end),
        }
    }

    /// The lower bound, `None` if open.
    pub fn start(&self) -> Option<T> {
        self.start
    }

    /// The upper bound, `None` if open.
    pub fn end(&self) -> Option<T> {
        self.end
    }

    /// Whether the value lies within the range, bounds included.
    pub fn contains(&self, value: T) -> bool {
        self.start.map_or(true, |s| s <= value) && self.end.map_or(true, |e| value <= e)
    }
}

/// Split a range text into its two bounds.
/// A text without separator yields the same single bound twice.
fn split_range(text: &str) -> (Option<&str>, Option<&str>) {
    fn non_empty(s: &str) -> Option<&str> {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    match text.split_once('-') {
        Some((start, end)) => (non_empty(start), non_empty(end)),
        None => (non_empty(text), non_empty(text)),
    }
}

fn parse_bounds<T, F>(text: &str, parse: F) -> Result<ValueRange<T>>
where
    T: PartialOrd + fmt::Display + Copy,
    F: Fn(&str) -> Result<T>,
{
    let (start, end) = split_range(text);
    let start = start.map(&parse).transpose()?;
    let end = end.map(&parse).transpose()?;
    match (start, end) {
        (Some(start), Some(end)) => ValueRange::from_start_to_end(start, end),
        (start, end) => Ok(ValueRange { start, end }),
    }
}

impl DateRange {
    /// Parse a DA range such as `20240101-20241231`.
    pub fn parse(text: &str) -> Result<Self> {
        parse_bounds(text, parse_date)
    }

    /// Expand the range to date-times,
    /// from the start of the first day up to the last millisecond
    /// of the last day.
    pub fn to_datetime_range(&self) -> DateTimeRange {
        let last_millisecond = Duration::days(1) - Duration::milliseconds(1);
        ValueRange {
            start: self.start.and_then(|d| d.and_hms_opt(0, 0, 0)),
            end: self
                .end
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d + last_millisecond),
        }
    }
}

impl TimeRange {
    /// Parse a TM range such as `0800-1700`.
    pub fn parse(text: &str) -> Result<Self> {
        parse_bounds(text, parse_time)
    }
}

impl DateTimeRange {
    /// Parse a DT range such as `20240101120000-20240101130000`.
    ///
    /// Bounds with a negative UTC offset are not supported in ranges,
    /// since the offset sign is also the range separator.
    pub fn parse(text: &str) -> Result<Self> {
        parse_bounds(text, parse_datetime)
    }
}

fn write_range<T>(
    f: &mut fmt::Formatter,
    range: &ValueRange<T>,
    format: impl Fn(T) -> String,
) -> fmt::Result
where
    T: Copy,
{
    if let Some(start) = range.start {
        f.write_str(&format(start))?;
    }
    f.write_str("-")?;
    if let Some(end) = range.end {
        f.write_str(&format(end))?;
    }
    Ok(())
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_range(f, self, format_date)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_range(f, self, format_time)
    }
}

impl fmt::Display for DateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_range(f, self, format_datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32, micro: u32) -> NaiveTime {
        NaiveTime::from_hms_micro_opt(h, m, s, micro).unwrap()
    }

    #[test]
    fn dates() {
        assert_eq!(parse_date("20240229").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date("2024/02/29").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date("2024").unwrap(), date(2024, 1, 1));
        assert_eq!(parse_date("202403").unwrap(), date(2024, 3, 1));
        assert!(parse_date("20230229").is_err());
        assert!(parse_date("2024022").is_err());
        assert_eq!(format_date(date(2024, 2, 29)), "20240229");
    }

    #[test]
    fn times() {
        assert_eq!(parse_time("070907").unwrap(), time(7, 9, 7, 0));
        assert_eq!(parse_time("07").unwrap(), time(7, 0, 0, 0));
        assert_eq!(parse_time("0709").unwrap(), time(7, 9, 0, 0));
        assert_eq!(parse_time("070907.0705").unwrap(), time(7, 9, 7, 70500));
        assert_eq!(parse_time("07090712").unwrap(), time(7, 9, 7, 120000));
        assert_eq!(parse_time("07:09:07").unwrap(), time(7, 9, 7, 0));
        assert_eq!(parse_time("07.09.07.5").unwrap(), time(7, 9, 7, 500000));
        assert_eq!(parse_time("07:09:07:25").unwrap(), time(7, 9, 7, 250000));
        assert!(parse_time("7").is_err());
        assert!(parse_time("250000").is_err());
        assert!(parse_time("070907.1234567").is_err());

        assert_eq!(format_time(time(7, 9, 7, 0)), "070907");
        assert_eq!(format_time(time(7, 9, 7, 500)), "070907.000500");
    }

    #[test]
    fn datetimes() {
        let dt = parse_datetime("20240229134501.25").unwrap();
        assert_eq!(dt, date(2024, 2, 29).and_time(time(13, 45, 1, 250000)));
        assert_eq!(format_datetime(dt), "20240229134501.250000");

        let dt = parse_datetime("2024").unwrap();
        assert_eq!(dt, date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());

        let dt = parse_datetime_with_offset("20240229134501-0500", FixedOffset::east_opt(0).unwrap())
            .unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(format_datetime_with_offset(&dt), "20240229134501-0500");

        let utc = FixedOffset::east_opt(0).unwrap();
        let dt = parse_datetime_with_offset("202402291345", utc).unwrap();
        assert_eq!(dt.offset(), &utc);
        assert!(parse_datetime("2024022913450").is_err());
    }

    #[test]
    fn date_ranges() {
        let range = DateRange::parse("20240101-20241231").unwrap();
        assert_eq!(range.start(), Some(date(2024, 1, 1)));
        assert_eq!(range.end(), Some(date(2024, 12, 31)));
        assert!(range.contains(date(2024, 6, 1)));
        assert_eq!(range.to_string(), "20240101-20241231");

        let range = DateRange::parse("-20241231").unwrap();
        assert_eq!(range.start(), None);
        assert_eq!(range.to_string(), "-20241231");

        let range = DateRange::parse("20240101-").unwrap();
        assert_eq!(range.end(), None);

        assert!(DateRange::parse("20241231-20240101").is_err());
    }

    #[test]
    fn range_bounds_are_trimmed() {
        assert_eq!(split_range(" 20240101 - "), (Some("20240101"), None));
        assert_eq!(split_range("20240101 "), (Some("20240101"), Some("20240101")));
        assert_eq!(split_range(" "), (None, None));

        let range = DateRange::parse("20240101 - 20240131 ").unwrap();
        assert_eq!(range.end(), Some(date(2024, 1, 31)));
    }

    #[test]
    fn single_date_spans_the_whole_day() {
        let range = DateRange::parse("20240229").unwrap().to_datetime_range();
        assert_eq!(
            range.start(),
            Some(date(2024, 2, 29).and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(
            range.end(),
            Some(date(2024, 2, 29).and_hms_milli_opt(23, 59, 59, 999).unwrap())
        );
    }

    #[test]
    fn time_ranges() {
        let range = TimeRange::parse("0800-1700").unwrap();
        assert_eq!(range.start(), Some(time(8, 0, 0, 0)));
        assert_eq!(range.end(), Some(time(17, 0, 0, 0)));
        assert_eq!(range.to_string(), "080000-170000");
    }
}
