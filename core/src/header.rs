//! This modules contains the definitions of DICOM attribute tags:
//! the plain [`Tag`], the private creator aware [`QualifiedTag`]
//! and the wildcard [`TagMask`].

use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a (group, element) pair.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether this tag is the address of a private creator element,
    /// `(gggg,0010)` through `(gggg,00FF)` in a private group.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Whether this is a group length tag `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0
    }

    /// The tag of the private creator element
    /// which reserves the block of this private data element.
    ///
    /// Returns `None` if this is not a private tag
    /// inside of a reserved block `(gggg,1000)` to `(gggg,FFFF)`.
    pub fn private_creator_tag(self) -> Option<Tag> {
        if self.is_private() && self.1 >= 0x1000 {
            Some(Tag(self.0, self.1 >> 8))
        } else {
            None
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// An error returned when parsing an invalid tag, qualified tag or mask.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingGroup { backtrace: Backtrace },
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingElement { backtrace: Backtrace },
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`"))]
    InvalidGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid tag component `element`"))]
    InvalidElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid wildcard digit `{}` in tag mask", digit))]
    InvalidMaskDigit { digit: char, backtrace: Backtrace },
}

/// Split `(gggg,eeee)`, `gggg,eeee` or `ggggeeee`
/// into its group and element parts.
fn split_tag(s: &str) -> Result<(&str, &str), ParseTagError> {
    let s = s
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(s);
    let (group, elem) = match s.split_once(',') {
        Some(parts) => parts,
        None if s.len() == 8 && s.is_char_boundary(4) => s.split_at(4),
        None if s.is_empty() => return MissingGroupSnafu.fail(),
        None => return MissingElementSnafu.fail(),
    };
    let (group, elem) = (group.trim(), elem.trim());
    ensure!(
        group.len() == 4,
        InvalidGroupLengthSnafu { got: group.len() }
    );
    ensure!(
        elem.len() == 4,
        InvalidElementLengthSnafu { got: elem.len() }
    );
    Ok((group, elem))
}

/// Parse a tag from text.
///
/// The accepted formats are `(gggg,eeee)`, `gggg,eeee` and `ggggeeee`,
/// with each part written as 4 hexadecimal digits.
///
/// ```
/// # use dicom_core::Tag;
/// let tag: Tag = "(0010,0010)".parse()?;
/// assert_eq!(tag, Tag(0x0010, 0x0010));
/// let tag: Tag = "7FE00010".parse()?;
/// assert_eq!(tag, Tag(0x7FE0, 0x0010));
/// # Ok::<(), dicom_core::header::ParseTagError>(())
/// ```
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, elem) = split_tag(s)?;
        let group = u16::from_str_radix(group, 16).context(InvalidGroupSnafu)?;
        let elem = u16::from_str_radix(elem, 16).context(InvalidElementSnafu)?;
        Ok(Tag(group, elem))
    }
}

/// A tag which may be qualified by the identifier of its private creator.
///
/// Private data elements are only meaningful
/// alongside the private creator which reserved their block.
/// When a creator is given,
/// equality, ordering and hashing only consider the group,
/// the low byte of the element and the creator,
/// so that `(0029,1010)` and `(0029,0010)` name the same attribute
/// of the same creator, regardless of which block it was assigned to.
#[derive(Debug, Clone)]
pub struct QualifiedTag {
    /// The tag, possibly not yet resolved to a private block.
    pub tag: Tag,
    /// The private creator identifier, if any.
    pub creator: Option<String>,
}

impl QualifiedTag {
    /// Create a qualified tag without a private creator.
    pub fn new(tag: Tag) -> Self {
        QualifiedTag { tag, creator: None }
    }

    /// Create a private tag owned by the given creator.
    ///
    /// Only the low byte of `element` identifies the attribute,
    /// the block is assigned when the tag is resolved against a data set.
    pub fn private(group: GroupNumber, element: ElementNumber, creator: impl Into<String>) -> Self {
        QualifiedTag {
            tag: Tag(group, element),
            creator: Some(creator.into()),
        }
    }

    /// The private creator identifier, if any.
    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// Whether the tag still needs to be mapped
    /// to a concrete private block in a data set:
    /// a private group, an element number in `0x0001..=0x00FF`,
    /// and a creator.
    pub fn needs_resolution(&self) -> bool {
        self.tag.is_private()
            && self.creator.is_some()
            && (0x0001..=0x00FF).contains(&self.tag.element())
    }

    fn key(&self) -> (GroupNumber, ElementNumber, Option<&str>) {
        match &self.creator {
            Some(creator) if self.tag.is_private() => {
                (self.tag.0, self.tag.1 & 0x00FF, Some(creator.as_str()))
            }
            _ => (self.tag.0, self.tag.1, None),
        }
    }
}

impl From<Tag> for QualifiedTag {
    fn from(tag: Tag) -> Self {
        QualifiedTag::new(tag)
    }
}

impl From<(u16, u16)> for QualifiedTag {
    fn from(tag: (u16, u16)) -> Self {
        QualifiedTag::new(tag.into())
    }
}

impl PartialEq for QualifiedTag {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QualifiedTag {}

impl Hash for QualifiedTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl PartialOrd for QualifiedTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QualifiedTag {
    fn cmp(&self, other: &Self) -> Ordering {
        let (g1, e1, c1) = self.key();
        let (g2, e2, c2) = other.key();
        g1.cmp(&g2).then(e1.cmp(&e2)).then_with(|| match (c1, c2) {
            (Some(c1), Some(c2)) => c1.cmp(c2),
            _ => Ordering::Equal,
        })
    }
}

impl fmt::Display for QualifiedTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.key() {
            (group, element, Some(creator)) => {
                write!(f, "({:04X},xx{:02X}:{})", group, element, creator)
            }
            _ => fmt::Display::fmt(&self.tag, f),
        }
    }
}

/// Parse a qualified tag,
/// either as a plain tag or as `(gggg,xxee:CREATOR)`.
impl FromStr for QualifiedTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        match inner.split_once(':') {
            Some((tag, creator)) => {
                let (group, elem) = split_tag(tag)?;
                let group = u16::from_str_radix(group, 16).context(InvalidGroupSnafu)?;
                let elem = elem.trim_start_matches(|c| c == 'x' || c == 'X');
                let elem = u16::from_str_radix(elem, 16).context(InvalidElementSnafu)?;
                Ok(QualifiedTag::private(group, elem & 0x00FF, creator))
            }
            None => inner.parse().map(QualifiedTag::new),
        }
    }
}

/// A tag pattern with hexadecimal wildcard digits,
/// such as `(0010,xxxx)` or `(60xx,3000)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagMask {
    /// The tag bits which must match.
    pub tag: Tag,
    /// The bit mask of the relevant bits of the tag.
    pub mask: Tag,
}

impl TagMask {
    /// A mask matching exactly one tag.
    pub fn exact(tag: Tag) -> Self {
        TagMask {
            tag,
            mask: Tag(0xFFFF, 0xFFFF),
        }
    }

    /// A mask matching every element of a group.
    pub fn group(group: GroupNumber) -> Self {
        TagMask {
            tag: Tag(group, 0),
            mask: Tag(0xFFFF, 0),
        }
    }

    /// Whether the given tag matches this mask.
    pub fn matches(&self, tag: Tag) -> bool {
        tag.0 & self.mask.0 == self.tag.0 && tag.1 & self.mask.1 == self.tag.1
    }
}

impl fmt::Display for TagMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_part(f: &mut fmt::Formatter, value: u16, mask: u16) -> fmt::Result {
            for shift in [12, 8, 4, 0] {
                if (mask >> shift) & 0xF == 0 {
                    f.write_str("x")?;
                } else {
                    write!(f, "{:X}", (value >> shift) & 0xF)?;
                }
            }
            Ok(())
        }
        f.write_str("(")?;
        write_part(f, self.tag.0, self.mask.0)?;
        f.write_str(",")?;
        write_part(f, self.tag.1, self.mask.1)?;
        f.write_str(")")
    }
}

impl FromStr for TagMask {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn parse_part(part: &str) -> Result<(u16, u16), ParseTagError> {
            let mut value = 0;
            let mut mask = 0;
            for digit in part.chars() {
                value <<= 4;
                mask <<= 4;
                if digit == 'x' || digit == 'X' {
                    continue;
                }
                let nibble = digit
                    .to_digit(16)
                    .context(InvalidMaskDigitSnafu { digit })?;
                value |= nibble as u16;
                mask |= 0xF;
            }
            Ok((value, mask))
        }

        let (group, elem) = split_tag(s)?;
        let (group, group_mask) = parse_part(group)?;
        let (elem, elem_mask) = parse_part(elem)?;
        Ok(TagMask {
            tag: Tag(group, elem),
            mask: Tag(group_mask, elem_mask),
        })
    }
}

impl From<Tag> for TagMask {
    fn from(tag: Tag) -> Self {
        TagMask::exact(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_formatting() {
        assert_eq!(Tag(0x0010, 0x0020).to_string(), "(0010,0020)");
        assert_eq!(format!("{:?}", Tag(0x7FE0, 0x0010)), "Tag(0x7FE0, 0x0010)");
    }

    #[test]
    fn parse_tags() {
        assert_eq!("(0010,0020)".parse::<Tag>().unwrap(), Tag(0x0010, 0x0020));
        assert_eq!("0010,0020".parse::<Tag>().unwrap(), Tag(0x0010, 0x0020));
        assert_eq!("7fe00010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert!(matches!(
            "(010,0020)".parse::<Tag>(),
            Err(ParseTagError::InvalidGroupLength { got: 3, .. })
        ));
        assert!(matches!(
            "(0010,00G0)".parse::<Tag>(),
            Err(ParseTagError::InvalidElement { .. })
        ));
    }

    #[test]
    fn private_tag_properties() {
        assert!(Tag(0x0029, 0x1010).is_private());
        assert!(!Tag(0x0028, 0x0010).is_private());
        assert!(Tag(0x0029, 0x0010).is_private_creator());
        assert!(!Tag(0x0029, 0x1010).is_private_creator());
        assert_eq!(
            Tag(0x0029, 0x1110).private_creator_tag(),
            Some(Tag(0x0029, 0x0011))
        );
        assert_eq!(Tag(0x0028, 0x1110).private_creator_tag(), None);
    }

    #[test]
    fn qualified_private_tags_ignore_block() {
        let a = QualifiedTag::private(0x0029, 0x1010, "SIEMENS CSA HEADER");
        let b = QualifiedTag::private(0x0029, 0x0010, "SIEMENS CSA HEADER");
        let c = QualifiedTag::private(0x0029, 0x0010, "GEMS_IDEN_01");
        assert_eq!(a, b);
        assert_ne!(b, c);

        let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);

        assert_eq!(a.to_string(), "(0029,xx10:SIEMENS CSA HEADER)");
        assert_eq!(
            QualifiedTag::new(Tag(0x0010, 0x0010)).to_string(),
            "(0010,0010)"
        );
    }

    #[test]
    fn qualified_tag_ordering() {
        let mut tags = vec![
            QualifiedTag::private(0x0029, 0x0010, "B"),
            QualifiedTag::new(Tag(0x0010, 0x0020)),
            QualifiedTag::private(0x0029, 0x0010, "A"),
            QualifiedTag::new(Tag(0x0010, 0x0010)),
        ];
        tags.sort();
        assert_eq!(tags[0].tag, Tag(0x0010, 0x0010));
        assert_eq!(tags[1].tag, Tag(0x0010, 0x0020));
        assert_eq!(tags[2].creator(), Some("A"));
        assert_eq!(tags[3].creator(), Some("B"));
    }

    #[test]
    fn parse_qualified_tags() {
        let tag: QualifiedTag = "(0029,xx10:SIEMENS CSA HEADER)".parse().unwrap();
        assert_eq!(tag.tag, Tag(0x0029, 0x0010));
        assert_eq!(tag.creator(), Some("SIEMENS CSA HEADER"));
        assert!(tag.needs_resolution());

        let tag: QualifiedTag = "(0010,0010)".parse().unwrap();
        assert_eq!(tag.creator(), None);
        assert!(!tag.needs_resolution());
    }

    #[test]
    fn tag_masks() {
        let mask: TagMask = "(60xx,3000)".parse().unwrap();
        assert!(mask.matches(Tag(0x6000, 0x3000)));
        assert!(mask.matches(Tag(0x60FE, 0x3000)));
        assert!(!mask.matches(Tag(0x6100, 0x3000)));
        assert!(!mask.matches(Tag(0x6000, 0x3001)));
        assert_eq!(mask.to_string(), "(60xx,3000)");

        let mask: TagMask = "0010,xxxx".parse().unwrap();
        assert_eq!(mask, TagMask::group(0x0010));
        assert!(mask.matches(Tag(0x0010, 0x1010)));

        assert!(matches!(
            "(00z0,0000)".parse::<TagMask>(),
            Err(ParseTagError::InvalidMaskDigit { digit: 'z', .. })
        ));
    }
}
