//! The standard attribute dictionary.

use crate::tags::ENTRIES;
use dicom_core::dictionary::{
    DataDictionary, DataDictionaryEntryRef, TagRange, ValueMultiplicity, VirtualVr,
};
use dicom_core::header::Tag;
use dicom_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

type Entry = DataDictionaryEntryRef<'static>;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(StandardDataDictionaryRegistry::build);

/// The index of the standard dictionary,
/// built on first use.
///
/// Use it through the [`StandardDataDictionary`] unit type.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The indexed records of the standard dictionary.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_name: HashMap<&'static str, &'static Entry>,
    by_tag: HashMap<Tag, &'static Entry>,
    /// attributes of repeating groups or elements
    repeating: Vec<&'static Entry>,
}

impl StandardDataDictionaryRegistry {
    fn build() -> Self {
        let mut registry = StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 2),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            repeating: Vec::new(),
        };
        for entry in ENTRIES {
            registry.by_name.insert(entry.alias, entry);
            match entry.tag {
                TagRange::Single(tag) => {
                    registry.by_tag.insert(tag, entry);
                }
                _ => registry.repeating.push(entry),
            }
        }
        registry
            .by_name
            .insert(GROUP_LENGTH_ENTRY.alias, &GROUP_LENGTH_ENTRY);
        registry
            .by_name
            .insert(PRIVATE_CREATOR_ENTRY.alias, &PRIVATE_CREATOR_ENTRY);
        registry
    }

    fn lookup(&self, tag: Tag) -> Option<&'static Entry> {
        if let Some(entry) = self.by_tag.get(&tag) {
            return Some(*entry);
        }
        if let Some(entry) = self.repeating.iter().find(|e| e.tag.contains(tag)) {
            return Some(*entry);
        }
        if tag.is_private_creator() {
            Some(&PRIVATE_CREATOR_ENTRY)
        } else if tag.element() == 0x0000 {
            Some(&GROUP_LENGTH_ENTRY)
        } else {
            None
        }
    }
}

/// Any group length without a record of its own.
static GROUP_LENGTH_ENTRY: Entry = DataDictionaryEntryRef {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VirtualVr::Exact(VR::UL),
    vm: ValueMultiplicity::ONE,
};

/// Any private creator element.
static PRIVATE_CREATOR_ENTRY: Entry = DataDictionaryEntryRef {
    tag: TagRange::PrivateCreator,
    alias: "PrivateCreator",
    vr: VirtualVr::Exact(VR::LO),
    vm: ValueMultiplicity::ONE,
};

/// The dictionary of the attributes defined in DICOM PS3.6.
///
/// This is the dictionary used by data sets unless told otherwise.
/// It knows no private attributes besides private creators.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().lookup(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}
