//! The attribute dictionary abstraction.
//!
//! A dictionary translates a tag or keyword into the attribute's
//! keyword, value representation and value multiplicity.
//! Data sets consult it to validate element values
//! and to pick a value representation for implicitly typed additions.
//! The standard dictionary lives in the `dicom-dictionary-std` crate.

mod data_element;
mod multiplicity;
pub mod stub;

pub use self::data_element::{TagRange, TagRangeParseError, VirtualVr};
pub use self::multiplicity::{ParseVmError, ValueMultiplicity};

use crate::header::Tag;

/// A dictionary of DICOM attributes.
///
/// Entries are looked up by tag ([`by_tag`](DataDictionary::by_tag)),
/// by keyword ([`by_name`](DataDictionary::by_name)),
/// by either of the two written as text
/// ([`by_expr`](DataDictionary::by_expr)),
/// or by private creator ([`by_private_tag`](DataDictionary::by_private_tag)).
/// All of them return `None` for unknown attributes.
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its case sensitive keyword,
    /// such as `"PatientName"`.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch the entry of a private attribute,
    /// identified by its private creator
    /// and the low byte of its element number.
    ///
    /// The default implementation knows no private attributes.
    fn by_private_tag(&self, tag: Tag, creator: &str) -> Option<&Self::Entry> {
        let _ = (tag, creator);
        None
    }

    /// Fetch an entry by a tag in one of its text forms
    /// (`(gggg,eeee)`, `gggg,eeee` or `ggggeeee`)
    /// or else by keyword.
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Interpret a tag written as text or as a keyword.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse()
            .ok()
            .or_else(|| self.by_name(tag).map(|e| e.tag()))
    }
}

impl<D> DataDictionary for &'_ D
where
    D: DataDictionary,
{
    type Entry = D::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }

    fn by_private_tag(&self, tag: Tag, creator: &str) -> Option<&Self::Entry> {
        (**self).by_private_tag(tag, creator)
    }
}

/// A dictionary entry, describing one DICOM attribute.
pub trait DataDictionaryEntry {
    /// The tags covered by the attribute.
    fn tag_range(&self) -> TagRange;

    /// A representative tag of the attribute.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The keyword of the attribute, such as `"PatientName"`.
    fn alias(&self) -> &str;

    /// The value representation of the attribute,
    /// possibly depending on context.
    fn vr(&self) -> VirtualVr;

    /// The number of values admitted by the attribute.
    fn vm(&self) -> ValueMultiplicity;
}

/// A dictionary entry with a static keyword,
/// as held by compiled dictionaries.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The tag or tag range
    pub tag: TagRange,
    /// The keyword
    pub alias: &'a str,
    /// The value representation
    pub vr: VirtualVr,
    /// The value multiplicity
    pub vm: ValueMultiplicity,
}

impl DataDictionaryEntry for DataDictionaryEntryRef<'_> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }

    fn alias(&self) -> &str {
        self.alias
    }

    fn vr(&self) -> VirtualVr {
        self.vr
    }

    fn vm(&self) -> ValueMultiplicity {
        self.vm
    }
}
