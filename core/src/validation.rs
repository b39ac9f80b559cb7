//! Content and multiplicity rules of DICOM values.
//!
//! [`validate_string`] checks a single textual value
//! against the rules of its value representation,
//! whereas [`validate_multiplicity`] checks the number of values
//! of an element against the value multiplicity
//! declared by the attribute dictionary.

use crate::dictionary::ValueMultiplicity;
use crate::header::Tag;
use crate::vr::VR;
use snafu::{ensure, Backtrace, Snafu};
use std::borrow::Cow;

/// An error raised when a value violates
/// the rules of its value representation or attribute.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum ValidationError {
    /// The textual content does not follow the VR rules.
    #[snafu(display("invalid {} value `{}`: {}", vr, value, reason))]
    InvalidContent {
        /// the value representation of the value
        vr: VR,
        /// the offending value
        value: String,
        /// a short description of the violated rule
        reason: Cow<'static, str>,
        backtrace: Backtrace,
    },
    /// The number of values does not match the value multiplicity.
    #[snafu(display(
        "number of values {} of {} does not match value multiplicity {}",
        count,
        tag,
        vm
    ))]
    Multiplicity {
        /// the element tag
        tag: Tag,
        /// the value representation of the element
        vr: VR,
        /// the number of values found
        count: u32,
        /// the value multiplicity declared for the attribute
        vm: ValueMultiplicity,
        backtrace: Backtrace,
    },
    /// The tag is not allowed in this data set.
    #[snafu(display("tag {} is not allowed, only group {:04X} is accepted", tag, group))]
    TagNotAllowed {
        /// the rejected tag
        tag: Tag,
        /// the only group accepted
        group: u16,
        backtrace: Backtrace,
    },
}

type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Check a single textual value against the content rules
/// of the given value representation.
///
/// Multi-valued content must be split by the caller,
/// as the backslash is rejected by most representations.
/// Representations without specific rules accept any content.
pub fn validate_string(vr: VR, content: &str) -> Result<()> {
    match vr {
        VR::AE => validate_ae(content),
        VR::AS => validate_as(content),
        VR::CS => validate_cs(content),
        VR::DA => validate_da(content),
        VR::DS => validate_ds(content),
        VR::DT => validate_dt(content),
        VR::IS => validate_is(content),
        VR::LO => validate_lo(content),
        VR::LT => validate_max_len(VR::LT, content, 10240),
        VR::PN => validate_pn(content),
        VR::SH => validate_sh(content),
        VR::ST => validate_max_len(VR::ST, content, 1024),
        VR::TM => validate_tm(content),
        VR::UI => validate_ui(content),
        _ => Ok(()),
    }
}

/// Check the number of values of an element
/// against the value multiplicity of its attribute.
///
/// Private tags and empty elements are not checked.
pub fn validate_multiplicity(tag: Tag, vr: VR, count: u32, vm: ValueMultiplicity) -> Result<()> {
    if tag.is_private() || count == 0 {
        return Ok(());
    }
    ensure!(
        vm.contains(count),
        MultiplicitySnafu {
            tag,
            vr,
            count,
            vm
        }
    );
    Ok(())
}

fn invalid(vr: VR, value: &str, reason: impl Into<Cow<'static, str>>) -> ValidationError {
    InvalidContentSnafu {
        vr,
        value,
        reason: reason.into(),
    }
    .build()
}

fn char_len(content: &str) -> usize {
    content.chars().count()
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|c| c.is_ascii_digit())
}

/// Parse two ASCII digits at the given position.
/// The caller must have checked that the text only has digits.
fn two_digits(text: &str, at: usize) -> u32 {
    text.as_bytes()[at..at + 2]
        .iter()
        .fold(0, |acc, c| acc * 10 + u32::from(c - b'0'))
}

fn is_control_except_esc(c: char) -> bool {
    c.is_control() && c != '\u{1b}'
}

fn validate_max_len(vr: VR, content: &str, max: usize) -> Result<()> {
    if char_len(content) > max {
        return Err(invalid(
            vr,
            content,
            format!("value exceeds maximum length of {} characters", max),
        ));
    }
    Ok(())
}

fn validate_ae(content: &str) -> Result<()> {
    validate_max_len(VR::AE, content, 16)?;
    if content.chars().all(char::is_whitespace) {
        return Err(invalid(VR::AE, content, "value may not consist only of spaces"));
    }
    if content.chars().any(|c| c == '\\' || c.is_control()) {
        return Err(invalid(VR::AE, content, "value contains invalid control character"));
    }
    Ok(())
}

fn validate_as(content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    let bytes = content.as_bytes();
    let ok = bytes.len() == 4
        && bytes[..3].iter().all(u8::is_ascii_digit)
        && matches!(bytes[3], b'D' | b'W' | b'M' | b'Y');
    if !ok {
        return Err(invalid(VR::AS, content, "value does not have pattern 000[DWMY]"));
    }
    Ok(())
}

fn validate_cs(content: &str) -> Result<()> {
    validate_max_len(VR::CS, content, 16)?;
    if !content.bytes().all(|c| match c {
        b' ' | b'_' => true,
        c => c.is_ascii_digit() || c.is_ascii_uppercase(),
    }) {
        return Err(invalid(
            VR::CS,
            content,
            "only uppercase characters, digits, space and underscore are allowed",
        ));
    }
    Ok(())
}

fn validate_da(content: &str) -> Result<()> {
    let components: Vec<&str> = content.split('-').collect();
    if components.len() > 2 {
        return Err(invalid(VR::DA, content, "value contains too many range separators '-'"));
    }

    for component in components {
        let component = component.trim_end_matches(' ');
        if component.is_empty() {
            continue;
        }
        if component.len() != 8 || !all_digits(component) {
            return Err(invalid(
                VR::DA,
                content,
                "one of the date values does not match the pattern YYYYMMDD",
            ));
        }
        if two_digits(component, 4) > 12 {
            return Err(invalid(VR::DA, content, "month component exceeds the value 12"));
        }
        if two_digits(component, 6) > 31 {
            return Err(invalid(VR::DA, content, "day component exceeds the value 31"));
        }
    }
    Ok(())
}

/// Whether the text is a decimal number
/// of the form `[+-](digits[.digits]|.digits)[(e|E)[+-]digits]`.
fn is_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

fn validate_ds(content: &str) -> Result<()> {
    validate_max_len(VR::DS, content, 16)?;
    if !is_decimal(content.trim()) {
        return Err(invalid(VR::DS, content, "value is not a decimal string"));
    }
    Ok(())
}

/// A four digit offset of at most 12 hours,
/// as found after a `-` which is not a range separator.
fn is_negative_offset(text: &str) -> bool {
    text.len() == 4 && all_digits(text) && text.parse::<u32>().map_or(false, |v| v <= 1200)
}

fn validate_dt(content: &str) -> Result<()> {
    if content.contains("-0000") {
        return Err(invalid(
            VR::DT,
            content,
            "negative UTC offset with value -0000 is not allowed",
        ));
    }
    if content.trim() == "-" {
        return Err(invalid(
            VR::DT,
            content,
            "both date time components of a range cannot be empty",
        ));
    }

    // a `-` may either separate a range or introduce a negative UTC offset
    let parts: Vec<&str> = content.split('-').collect();
    let components: Vec<Cow<str>> = match parts.as_slice() {
        [single] => vec![Cow::Borrowed(*single)],
        [first, second] => {
            if is_negative_offset(second) {
                vec![Cow::Borrowed(content)]
            } else {
                vec![Cow::Borrowed(*first), Cow::Borrowed(*second)]
            }
        }
        [first, second, third] => {
            if is_negative_offset(second) {
                vec![
                    Cow::Owned(format!("{}-{}", first, second)),
                    Cow::Borrowed(*third),
                ]
            } else if is_negative_offset(third) {
                vec![
                    Cow::Borrowed(*first),
                    Cow::Owned(format!("{}-{}", second, third)),
                ]
            } else {
                return Err(invalid(VR::DT, content, "value is in invalid range format"));
            }
        }
        [first, second, third, fourth] => vec![
            Cow::Owned(format!("{}-{}", first, second)),
            Cow::Owned(format!("{}-{}", third, fourth)),
        ],
        _ => {
            return Err(invalid(
                VR::DT,
                content,
                "value contains too many range separators '-'",
            ))
        }
    };

    for component in &components {
        let component = component.trim_end_matches(' ');
        if component.is_empty() {
            continue;
        }
        validate_dt_component(content, component)?;
    }
    Ok(())
}

fn validate_dt_component(content: &str, component: &str) -> Result<()> {
    let pieces: Vec<&str> = component.split(|c| c == '+' || c == '-').collect();
    if pieces.len() > 2 {
        return Err(invalid(
            VR::DT,
            content,
            "value contains too many UTC separators '+' or '-'",
        ));
    }
    if let Some(offset) = pieces.get(1) {
        if offset.len() != 4 || !all_digits(offset) {
            return Err(invalid(VR::DT, content, "value does not match the UTC pattern &ZZXX"));
        }
        let hours = two_digits(offset, 0);
        if component.contains('+') && hours > 14 {
            return Err(invalid(
                VR::DT,
                content,
                "positive UTC hours component exceeds 14",
            ));
        }
        if !component.contains('+') && hours > 12 {
            return Err(invalid(
                VR::DT,
                content,
                "negative UTC hours component exceeds 12",
            ));
        }
        if two_digits(offset, 2) > 59 {
            return Err(invalid(VR::DT, content, "UTC minutes component exceeds 59"));
        }
    }

    let datetime = pieces[0];
    let (whole, fraction) = match datetime.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (datetime, None),
    };
    let shape_ok = all_digits(whole)
        && match fraction {
            None => matches!(whole.len(), 4 | 6 | 8 | 10 | 12 | 14),
            Some(f) => whole.len() == 14 && (1..=6).contains(&f.len()) && all_digits(f),
        };
    if !shape_ok {
        return Err(invalid(
            VR::DT,
            content,
            "value does not match pattern YYYY[MM[DD[HH[MM[SS[.F{1-6}]]]]]]",
        ));
    }

    let len = whole.len();
    if len >= 14 && two_digits(whole, 12) > 60 {
        return Err(invalid(VR::DT, content, "seconds component exceeds 60"));
    }
    if len >= 12 && two_digits(whole, 10) > 59 {
        return Err(invalid(VR::DT, content, "minutes component exceeds 59"));
    }
    if len >= 10 && two_digits(whole, 8) > 23 {
        return Err(invalid(VR::DT, content, "hours component exceeds 23"));
    }
    if len >= 8 {
        match two_digits(whole, 6) {
            0 => return Err(invalid(VR::DT, content, "day component cannot be 0")),
            d if d > 31 => return Err(invalid(VR::DT, content, "day component exceeds 31")),
            _ => {}
        }
    }
    if len >= 6 {
        match two_digits(whole, 4) {
            0 => return Err(invalid(VR::DT, content, "month component cannot be 0")),
            m if m > 12 => return Err(invalid(VR::DT, content, "month component exceeds 12")),
            _ => {}
        }
    }
    Ok(())
}

fn validate_is(content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    let trimmed = content.trim_matches(' ');
    let digits = trimmed
        .strip_prefix(|c| c == '+' || c == '-')
        .unwrap_or(trimmed);
    if !all_digits(digits) {
        return Err(invalid(VR::IS, content, "value is not an integer string"));
    }
    if trimmed.parse::<i32>().is_err() {
        return Err(invalid(
            VR::IS,
            content,
            "value is out of range of a signed 32-bit integer",
        ));
    }
    Ok(())
}

fn validate_lo(content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    validate_max_len(VR::LO, content, 64)?;
    if content.chars().any(|c| c == '\\' || is_control_except_esc(c)) {
        return Err(invalid(VR::LO, content, "value contains invalid character"));
    }
    Ok(())
}

fn validate_pn(content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    let groups: Vec<&str> = content.split('=').collect();
    if groups.len() > 3 {
        return Err(invalid(VR::PN, content, "value contains too many groups"));
    }
    for group in &groups {
        if char_len(group) > 64 {
            return Err(invalid(
                VR::PN,
                content,
                "value exceeds maximum length of 64 characters",
            ));
        }
        if group.chars().any(is_control_except_esc) {
            return Err(invalid(VR::PN, content, "value contains invalid control character"));
        }
    }
    if groups.iter().any(|group| group.split('^').count() > 5) {
        return Err(invalid(VR::PN, content, "value contains too many components"));
    }
    Ok(())
}

fn validate_sh(content: &str) -> Result<()> {
    if content.chars().any(|c| c == '\\' || is_control_except_esc(c)) {
        return Err(invalid(VR::SH, content, "value contains invalid character"));
    }
    validate_max_len(VR::SH, content, 16)
}

fn validate_tm(content: &str) -> Result<()> {
    let components: Vec<&str> = content.split('-').collect();
    if components.len() > 2 {
        return Err(invalid(VR::TM, content, "value contains too many range separators '-'"));
    }

    for component in components {
        let component = component.trim_end_matches(' ');
        if component.is_empty() {
            continue;
        }
        let (whole, fraction) = match component.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (component, None),
        };
        let shape_ok = all_digits(whole)
            && match fraction {
                None => matches!(whole.len(), 2 | 4 | 6),
                Some(f) => whole.len() == 6 && (1..=6).contains(&f.len()) && all_digits(f),
            };
        if !shape_ok {
            return Err(invalid(
                VR::TM,
                content,
                "value does not match pattern HH[MM[SS[.F{1-6}]]]",
            ));
        }
        if two_digits(whole, 0) > 23 {
            return Err(invalid(VR::TM, content, "hour component exceeds 23"));
        }
        if whole.len() >= 4 && two_digits(whole, 2) > 59 {
            return Err(invalid(VR::TM, content, "minutes component exceeds 59"));
        }
        if whole.len() >= 6 && two_digits(whole, 4) > 60 {
            return Err(invalid(VR::TM, content, "seconds component exceeds 60"));
        }
    }
    Ok(())
}

fn validate_ui(content: &str) -> Result<()> {
    let content = content.trim_end_matches(' ');
    if content.is_empty() {
        return Ok(());
    }
    validate_max_len(VR::UI, content, 64)?;
    if !content.bytes().all(|c| c == b'.' || c.is_ascii_digit()) {
        return Err(invalid(
            VR::UI,
            content,
            "value contains invalid characters other than '0'-'9' and '.'",
        ));
    }
    for component in content.split('.') {
        if component.is_empty() {
            return Err(invalid(VR::UI, content, "a component can not be empty"));
        }
        if component.len() > 1 && component.starts_with('0') {
            return Err(invalid(VR::UI, content, "components must not have leading zeros"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(vr: VR, value: &str) {
        if let Err(e) = validate_string(vr, value) {
            panic!("{} `{}` should be valid: {}", vr, value, e);
        }
    }

    fn bad(vr: VR, value: &str) {
        assert!(
            validate_string(vr, value).is_err(),
            "{} `{}` should be invalid",
            vr,
            value
        );
    }

    #[test]
    fn code_strings() {
        ok(VR::CS, "ORIGINAL");
        ok(VR::CS, "WHOLE BODY");
        ok(VR::CS, "ISO_IR 100");
        bad(VR::CS, "lowercase");
        bad(VR::CS, "THIS IS MORE THAN 16");
    }

    #[test]
    fn application_entities() {
        ok(VR::AE, "STORESCP");
        bad(VR::AE, "    ");
        bad(VR::AE, "A\\B");
        bad(VR::AE, "ABCDEFGHIJKLMNOPQ");
    }

    #[test]
    fn age_strings() {
        ok(VR::AS, "");
        ok(VR::AS, "045Y");
        bad(VR::AS, "45Y");
        bad(VR::AS, "045y");
    }

    #[test]
    fn dates() {
        ok(VR::DA, "20240229");
        ok(VR::DA, "20240101-20241231");
        ok(VR::DA, "-20241231");
        ok(VR::DA, "20240101 ");
        bad(VR::DA, "2024-01-01");
        bad(VR::DA, "20241301");
        bad(VR::DA, "20240132");
        bad(VR::DA, "2024.01.01");
    }

    #[test]
    fn decimal_strings() {
        ok(VR::DS, "1");
        ok(VR::DS, " -1.5 ");
        ok(VR::DS, ".5");
        ok(VR::DS, "5.");
        ok(VR::DS, "1.25e-3");
        bad(VR::DS, "1.2.3");
        bad(VR::DS, "e5");
        bad(VR::DS, "1e");
        bad(VR::DS, "12345678901234567");
    }

    #[test]
    fn date_times() {
        ok(VR::DT, "2024");
        ok(VR::DT, "20240229134500");
        ok(VR::DT, "20240229134500.123456");
        ok(VR::DT, "20240229134500+0100");
        ok(VR::DT, "20240229134500-0500");
        ok(VR::DT, "2023-2024");
        ok(VR::DT, "20240229134500-0500-20240301");
        ok(VR::DT, "2024-20240229134500-0500");
        bad(VR::DT, "20240229134500-0000");
        bad(VR::DT, "-");
        bad(VR::DT, "20240229134500+1500");
        bad(VR::DT, "202402291345001");
        bad(VR::DT, "20241329");
        bad(VR::DT, "20240200");
    }

    #[test]
    fn integer_strings() {
        ok(VR::IS, "");
        ok(VR::IS, " +42 ");
        ok(VR::IS, "-2147483648");
        bad(VR::IS, "2147483648");
        bad(VR::IS, "1.0");
        bad(VR::IS, "4 2");
    }

    #[test]
    fn texts() {
        ok(VR::LO, "Long string with \u{1b}$B escape");
        bad(VR::LO, "line\nbreak");
        bad(VR::LO, "back\\slash");
        ok(VR::ST, &"x".repeat(1024));
        bad(VR::ST, &"x".repeat(1025));
        ok(VR::LT, "back\\slash\r\nis fine");
        bad(VR::SH, "ABCDEFGHIJKLMNOPQ");
    }

    #[test]
    fn person_names() {
        ok(VR::PN, "Doe^John");
        ok(VR::PN, "Yamada^Tarou=\u{1b}$B;3ED\u{1b}(B^\u{1b}$BB@O:\u{1b}(B=");
        bad(VR::PN, "a=b=c=d");
        bad(VR::PN, "a^b^c^d^e^f");
        bad(VR::PN, &"x".repeat(65));
        bad(VR::PN, "Doe\r^John");
    }

    #[test]
    fn times() {
        ok(VR::TM, "07");
        ok(VR::TM, "0709");
        ok(VR::TM, "070907.0705 ");
        ok(VR::TM, "1010-1200");
        bad(VR::TM, "021");
        bad(VR::TM, "2400");
        bad(VR::TM, "1260");
        bad(VR::TM, "126161");
        bad(VR::TM, "01-02-03");
    }

    #[test]
    fn unique_identifiers() {
        ok(VR::UI, "");
        ok(VR::UI, "1.2.840.10008.1.2.1");
        ok(VR::UI, "1.2.0.3");
        bad(VR::UI, "1.2.03");
        bad(VR::UI, "1..2");
        bad(VR::UI, ".1.2");
        bad(VR::UI, "1.2.");
        bad(VR::UI, "1.2.a");
        bad(VR::UI, &format!("1.{}", "2".repeat(64)));
    }

    #[test]
    fn unrestricted_representations() {
        ok(VR::UT, "anything\\goes\r\n");
        ok(VR::UN, "anything");
    }

    #[test]
    fn multiplicity() {
        let vm: ValueMultiplicity = "1-3".parse().unwrap();
        assert!(validate_multiplicity(Tag(0x0008, 0x0008), VR::CS, 2, vm).is_ok());
        assert!(validate_multiplicity(Tag(0x0008, 0x0008), VR::CS, 0, vm).is_ok());
        let err = validate_multiplicity(Tag(0x0008, 0x0008), VR::CS, 4, vm).unwrap_err();
        assert!(matches!(err, ValidationError::Multiplicity { count: 4, .. }));
        // private tags are exempt
        assert!(validate_multiplicity(Tag(0x0009, 0x1001), VR::CS, 9, vm).is_ok());
    }
}
