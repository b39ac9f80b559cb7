//! Person name (PN) values.

use std::fmt;

/// A person name, as held by a PN value.
///
/// Only the alphabetic component group is interpreted:
/// ideographic and phonetic groups (after `=`) are ignored when parsing.
/// Components are separated by `^` in the order
/// family name, given name, middle name, prefix and suffix.
///
/// ```
/// # use dicom_core::value::PersonName;
/// let name = PersonName::new("Doe", "John");
/// assert_eq!(name.to_string(), "Doe^John");
/// assert_eq!(name.middle(), "");
///
/// let name = PersonName::parse("Adams^John Robert Quincy^^Rev.^B.A. M.Div.");
/// assert_eq!(name.first(), "John Robert Quincy");
/// assert_eq!(name.suffix(), "B.A. M.Div.");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    last: String,
    first: String,
    middle: String,
    prefix: String,
    suffix: String,
}

impl PersonName {
    /// Create a name from the family and given names.
    pub fn new(last: impl Into<String>, first: impl Into<String>) -> Self {
        PersonName {
            last: last.into(),
            first: first.into(),
            ..Default::default()
        }
    }

    /// Set the middle name.
    pub fn with_middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = middle.into();
        self
    }

    /// Set the name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Interpret the text of a single PN value.
    /// Missing components are empty.
    pub fn parse(text: &str) -> Self {
        let alphabetic = text.split('=').next().unwrap_or_default();
        let mut parts = alphabetic.split('^').map(|s| s.trim_end().to_string());
        PersonName {
            last: parts.next().unwrap_or_default(),
            first: parts.next().unwrap_or_default(),
            middle: parts.next().unwrap_or_default(),
            prefix: parts.next().unwrap_or_default(),
            suffix: parts.next().unwrap_or_default(),
        }
    }

    /// The family name.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// The given name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The middle name.
    pub fn middle(&self) -> &str {
        &self.middle
    }

    /// The name prefix, such as a title.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The name suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether all components are empty.
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    fn components(&self) -> [&str; 5] {
        [
            self.last.as_str(),
            self.first.as_str(),
            self.middle.as_str(),
            self.prefix.as_str(),
            self.suffix.as_str(),
        ]
    }
}

/// Writes the DICOM form of the name,
/// leaving out trailing empty components.
impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.components();
        let used = components
            .iter()
            .rposition(|c| !c.is_empty())
            .map_or(0, |i| i + 1);
        for (i, component) in components[..used].iter().enumerate() {
            if i > 0 {
                f.write_str("^")?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}

impl From<&str> for PersonName {
    fn from(text: &str) -> Self {
        PersonName::parse(text)
    }
}
