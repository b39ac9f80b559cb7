//! Tag ranges and context dependent value representations
//! of attribute dictionary entries.

use std::str::FromStr;

use snafu::{Backtrace, ResultExt, Snafu};

use crate::header::{ParseTagError, TagMask};
use crate::value::C;
use crate::{Tag, VR};

/// The tags covered by one attribute of a dictionary.
///
/// Most attributes have a single tag,
/// but repeating groups such as _Overlay Data_ `(60xx,3000)`
/// span a range of them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TagRange {
    /// Exactly one tag
    Single(Tag),
    /// `(GGxx,EEEE)`, the low byte of the group is open
    Group100(Tag),
    /// `(GGGG,EExx)`, the low byte of the element is open
    Element100(Tag),
    /// Any group length tag `(GGGG,0000)`
    /// not described by an attribute of its own
    GroupLength,
    /// Any private creator tag,
    /// from `(GGGG,0010)` to `(GGGG,00FF)` with an odd group
    PrivateCreator,
}

impl TagRange {
    /// The representative tag of the range,
    /// with open digits set to zero.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) | TagRange::Group100(tag) | TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Whether the given tag is covered by this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => tag.0 & 0xFF00 == t.0 && tag.1 == t.1,
            TagRange::Element100(t) => tag.0 == t.0 && tag.1 & 0xFF00 == t.1,
            TagRange::GroupLength => tag.1 == 0x0000,
            TagRange::PrivateCreator => tag.is_private_creator(),
        }
    }
}

/// An error returned when parsing an invalid tag range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagRangeParseError {
    /// Not written like a tag or tag mask.
    #[snafu(display("invalid tag range"))]
    InvalidTagRange {
        #[snafu(backtrace)]
        source: ParseTagError,
    },
    /// Open digits other than the low byte of the group or element.
    #[snafu(display("unsupported tag range `{}`", text))]
    UnsupportedTagRange { text: String, backtrace: Backtrace },
}

impl FromStr for TagRange {
    type Err = TagRangeParseError;

    /// Parse a range written like a tag,
    /// with `xx` in place of the open digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let TagMask { tag, mask } = s.parse().context(InvalidTagRangeSnafu)?;
        match (mask.0, mask.1) {
            (0xFFFF, 0xFFFF) => Ok(TagRange::Single(tag)),
            (0xFF00, 0xFFFF) => Ok(TagRange::Group100(tag)),
            (0xFFFF, 0xFF00) => Ok(TagRange::Element100(tag)),
            _ => UnsupportedTagRangeSnafu { text: s }.fail(),
        }
    }
}

/// The value representation of a dictionary entry,
/// which for a few attributes depends on the context.
///
/// _Pixel Data_, for instance, is either [`OB`](VR::OB) or [`OW`](VR::OW).
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// A value representation known regardless of context.
    Exact(VR),
    /// A pixel sample value,
    /// [`SS`](VR::SS) for signed pixel data and [`US`](VR::US) otherwise.
    Xs,
    /// Overlay data, [`OB`](VR::OB) or [`OW`](VR::OW).
    Ox,
    /// Pixel data, [`OB`](VR::OB) or [`OW`](VR::OW).
    Px,
    /// LUT data, [`US`](VR::US) or [`OW`](VR::OW).
    Lt,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// The value representation, if it does not depend on context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// The value representation to assume without further context:
    /// [`US`](VR::US) for `Xs`, [`OW`](VR::OW) for the others.
    pub fn relaxed(self) -> VR {
        self.candidates()[0]
    }

    /// All value representations which this descriptor may stand for,
    /// starting with the [relaxed](VirtualVr::relaxed) one.
    pub fn candidates(self) -> C<VR> {
        match self {
            VirtualVr::Exact(vr) => C::from_elem(vr, 1),
            VirtualVr::Xs => C::from_slice(&[VR::US, VR::SS]),
            VirtualVr::Ox | VirtualVr::Px => C::from_slice(&[VR::OW, VR::OB]),
            VirtualVr::Lt => C::from_slice(&[VR::OW, VR::US]),
        }
    }
}
