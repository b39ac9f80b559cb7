//! This module contains reusable components for encoding and decoding text in DICOM
//! data structures, including support for character repertoires.
//!
//! The Character Repertoires supported by DICOM are:
//! - ISO 8859
//! - JIS X 0201-1976 Code for Information Interchange
//! - JIS X 0208-1990 Code for the Japanese Graphic Character set for information interchange
//! - JIS X 0212-1990 Code of the supplementary Japanese Graphic Character set for information interchange
//! - KS X 1001 (registered as ISO-IR 149) for Korean Language
//! - TIS 620-2533 (1990) Thai Characters Code for Information Interchange
//! - ISO 10646-1, 10646-2, and their associated supplements and extensions for Unicode character set
//! - GB 18030
//! - GB2312
//!
//! A single [`CharacterSet`] is one of these repertoires.
//! The value of a _Specific Character Set_ (0008,0005) element
//! is represented by [`SpecificCharacterSet`],
//! an ordered list of character sets
//! which may be switched in the middle of a value
//! through ISO 2022 escape sequences.
//!
//! Decoding and encoding through a [`SpecificCharacterSet`] never fails:
//! content which cannot be represented strictly
//! is decoded or encoded with replacement characters
//! and a warning is logged.
//!
//! Additional character sets can be registered at run-time
//! with [`register_character_set`].

use encoding::all::{
    ASCII, GB18030, GBK, ISO_2022_JP, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4,
    ISO_8859_5, ISO_8859_6, ISO_8859_7, ISO_8859_8, UTF_8, WINDOWS_1254, WINDOWS_31J,
    WINDOWS_874, WINDOWS_949,
};
use encoding::label::encoding_from_whatwg_label;
use encoding::{DecoderTrap, EncoderTrap, EncodingRef};
use once_cell::sync::Lazy;
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

/// An error type for text encoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeTextError {
    /// A custom error message,
    /// for when the underlying error type does not encode error semantics
    /// into type variants.
    #[snafu(display("{}", message))]
    EncodeCustom {
        /// The error message in plain text.
        message: Cow<'static, str>,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

/// An error type for text decoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeTextError {
    /// A custom error message,
    /// for when the underlying error type does not encode error semantics
    /// into type variants.
    #[snafu(display("{}", message))]
    DecodeCustom {
        /// The error message in plain text.
        message: Cow<'static, str>,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

/// An error type for character set registration.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegisterCharsetError {
    /// The defined term to register is empty.
    #[snafu(display("cannot register a character set under an empty term"))]
    EmptyTerm {
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
    /// The encoding label is not known.
    #[snafu(display("unknown text encoding `{}`", label))]
    UnknownEncoding {
        /// The label given at registration.
        label: String,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

type EncodeResult<T> = Result<T, EncodeTextError>;
type DecodeResult<T> = Result<T, DecodeTextError>;

/// A holder of encoding and decoding mechanisms for text in DICOM content,
/// which according to the standard, depends on the specific character set.
pub trait TextCodec {
    /// Obtain the defined term (unique name) of the text encoding,
    /// which may be used as the value of a
    /// Specific Character Set (0008, 0005) element to refer to this codec.
    ///
    /// Should contain no leading or trailing spaces.
    /// This method may be useful for testing purposes, considering that
    /// `TextCodec` is often used as a trait object.
    fn name(&self) -> &'static str;

    /// Decode the given byte buffer as a single string. The resulting string
    /// _may_ contain backslash characters ('\') to delimit individual values,
    /// and should be split later on if required.
    fn decode(&self, text: &[u8]) -> DecodeResult<String>;

    /// Encode a text value into a byte vector. The input string can
    /// feature multiple text values by using the backslash character ('\')
    /// as the value delimiter.
    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>>;
}

impl<T: ?Sized> TextCodec for Box<T>
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        self.as_ref().decode(text)
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        self.as_ref().encode(text)
    }
}

impl<'a, T: ?Sized> TextCodec for &'a T
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        (**self).decode(text)
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        (**self).encode(text)
    }
}

/// The set of characters which reset the active character set
/// back to the first one of a [`SpecificCharacterSet`].
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Delimiters {
    /// Control characters of free text:
    /// carriage return, line feed, tab and form feed.
    #[default]
    Text,
    /// Component and group separators of person names (`^` and `=`).
    PersonName,
}

impl Delimiters {
    /// Whether the given byte is one of these delimiters.
    pub fn contains(self, byte: u8) -> bool {
        match self {
            Delimiters::Text => matches!(byte, b'\r' | b'\n' | b'\t' | 0x0C),
            Delimiters::PersonName => matches!(byte, b'^' | b'='),
        }
    }

    fn contains_char(self, c: char) -> bool {
        u8::try_from(c).map(|b| self.contains(b)).unwrap_or(false)
    }
}

/// A single character repertoire which may be named
/// in a _Specific Character Set_ element.
#[derive(Clone)]
#[non_exhaustive]
pub enum CharacterSet {
    /// **ISO-IR 6**: the default character repertoire (ASCII).
    Default,
    /// **ISO-IR 13**: JIS X 0201, Japanese Katakana and Romaji.
    IsoIr13,
    /// **ISO-IR 100** (ISO-8859-1): Right-hand part of the Latin alphabet no. 1,
    /// the Western Europe character set.
    IsoIr100,
    /// **ISO-IR 101** (ISO-8859-2): Right-hand part of the Latin alphabet no. 2,
    /// the Central/Eastern Europe character set.
    IsoIr101,
    /// **ISO-IR 109** (ISO-8859-3): Right-hand part of the Latin alphabet no. 3,
    /// the South Europe character set.
    IsoIr109,
    /// **ISO-IR 110** (ISO-8859-4): Right-hand part of the Latin alphabet no. 4,
    /// the North Europe character set.
    IsoIr110,
    /// **ISO-IR 126** (ISO-8859-7): The Latin/Greek character set.
    IsoIr126,
    /// **ISO-IR 127** (ISO-8859-6): The Latin/Arabic character set.
    IsoIr127,
    /// **ISO-IR 138** (ISO-8859-8): The Latin/Hebrew character set.
    IsoIr138,
    /// **ISO-IR 144** (ISO-8859-5): The Latin/Cyrillic character set.
    IsoIr144,
    /// **ISO-IR 148** (ISO-8859-9): Latin alphabet no. 5, Turkish.
    IsoIr148,
    /// **ISO-IR 149**: KS X 1001, Korean Hangul and Hanja.
    IsoIr149,
    /// **ISO-IR 166**: TIS 620-2533, Thai.
    IsoIr166,
    /// **ISO-IR 192**: The Unicode character set based on the UTF-8 encoding.
    IsoIr192,
    /// **GB18030**: The Simplified Chinese character set.
    Gb18030,
    /// **GBK**: The Simplified Chinese character set, subset of GB18030.
    Gbk,
    /// **ISO 2022 IR 87**: JIS X 0208, Japanese Kanji.
    IsoIr87,
    /// **ISO 2022 IR 159**: JIS X 0212, supplementary Japanese Kanji.
    IsoIr159,
    /// **ISO 2022 IR 58**: GB 2312, Simplified Chinese.
    IsoIr58,
    /// A character set registered at run-time
    /// through [`register_character_set`].
    Custom {
        /// The defined term under which it was registered.
        term: Arc<str>,
        /// The text encoding.
        encoding: EncodingRef,
    },
}

/// ISO 2022 escape sequences and the character sets they designate.
/// Each sequence includes the leading ESC byte.
const ESCAPE_SEQUENCES: &[(&[u8], CharacterSet)] = &[
    (b"\x1B-A", CharacterSet::IsoIr100),
    (b"\x1B-B", CharacterSet::IsoIr101),
    (b"\x1B-C", CharacterSet::IsoIr109),
    (b"\x1B-D", CharacterSet::IsoIr110),
    (b"\x1B-F", CharacterSet::IsoIr126),
    (b"\x1B-G", CharacterSet::IsoIr127),
    (b"\x1B-H", CharacterSet::IsoIr138),
    (b"\x1B-L", CharacterSet::IsoIr144),
    (b"\x1B-M", CharacterSet::IsoIr148),
    (b"\x1B-T", CharacterSet::IsoIr166),
    (b"\x1B(B", CharacterSet::Default),
    (b"\x1B)I", CharacterSet::IsoIr13),
    (b"\x1B(J", CharacterSet::IsoIr13),
    (b"\x1B$B", CharacterSet::IsoIr87),
    (b"\x1B$(D", CharacterSet::IsoIr159),
    (b"\x1B$)D", CharacterSet::IsoIr159),
    (b"\x1B$)C", CharacterSet::IsoIr149),
    (b"\x1B$)A", CharacterSet::IsoIr58),
];

const ESC: u8 = 0x1B;

/// Character sets registered by the user, by normalized term.
static REGISTRY: Lazy<RwLock<HashMap<String, CharacterSet>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register a text encoding under the given defined term,
/// so that _Specific Character Set_ values naming it
/// are decoded and encoded with that encoding.
///
/// The encoding is identified by its WHATWG label
/// (e.g. `"iso-8859-15"` or `"koi8-r"`).
/// A registration overrides built-in character sets of the same term.
///
/// # Example
///
/// ```
/// # use dicom_encoding::text::{register_character_set, CharacterSet};
/// register_character_set("KOI8", "koi8-r")?;
/// let charset = CharacterSet::from_term("KOI8").unwrap();
/// assert_eq!(charset.defined_term(), "KOI8");
/// # Ok::<_, dicom_encoding::text::RegisterCharsetError>(())
/// ```
pub fn register_character_set(term: &str, label: &str) -> Result<(), RegisterCharsetError> {
    let key = normalize_term(term);
    ensure!(!key.is_empty(), EmptyTermSnafu);
    let encoding = encoding_from_whatwg_label(label).context(UnknownEncodingSnafu { label })?;

    let charset = CharacterSet::Custom {
        term: Arc::from(term.trim()),
        encoding,
    };
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, charset);
    Ok(())
}

/// Bring a defined term into a canonical form:
/// no surrounding padding, upper case,
/// and underscores in place of spaces and dashes.
fn normalize_term(term: &str) -> String {
    term.trim_matches(|c: char| c == ' ' || c == '\0')
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

impl CharacterSet {
    /// Obtain the character set identified by the given defined term,
    /// as found in a _Specific Character Set_ element.
    ///
    /// Spaces, dashes and underscores are interchangeable,
    /// so that `"ISO-IR 100"` and `"ISO_IR 100"` refer to the same set.
    /// An empty term refers to the default character set.
    /// Returns `None` if the term is not known.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_encoding::text::CharacterSet;
    /// let charset = CharacterSet::from_term("ISO_IR 100");
    /// assert_eq!(charset, Some(CharacterSet::IsoIr100));
    /// assert_eq!(CharacterSet::from_term("ISO-IR 100"), charset);
    /// ```
    pub fn from_term(term: &str) -> Option<Self> {
        let key = normalize_term(term);
        if let Some(charset) = REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Some(charset.clone());
        }

        use CharacterSet::*;
        let charset = match key.as_str() {
            "" | "ISO_IR_6" | "ISO_2022_IR_6" => Default,
            "ISO_IR_13" | "ISO_2022_IR_13" => IsoIr13,
            "ISO_IR_100" | "ISO_2022_IR_100" => IsoIr100,
            "ISO_IR_101" | "ISO_2022_IR_101" => IsoIr101,
            "ISO_IR_109" | "ISO_2022_IR_109" => IsoIr109,
            "ISO_IR_110" | "ISO_2022_IR_110" => IsoIr110,
            "ISO_IR_126" | "ISO_2022_IR_126" => IsoIr126,
            "ISO_IR_127" | "ISO_2022_IR_127" => IsoIr127,
            "ISO_IR_138" | "ISO_2022_IR_138" => IsoIr138,
            "ISO_IR_144" | "ISO_2022_IR_144" => IsoIr144,
            "ISO_IR_148" | "ISO_2022_IR_148" => IsoIr148,
            "ISO_IR_149" | "ISO_2022_IR_149" => IsoIr149,
            "ISO_IR_166" | "ISO_2022_IR_166" => IsoIr166,
            "ISO_IR_192" => IsoIr192,
            "GB18030" => Gb18030,
            "GBK" | "ISO_2022_GBK" => Gbk,
            "ISO_2022_IR_87" => IsoIr87,
            "ISO_2022_IR_159" => IsoIr159,
            "ISO_2022_IR_58" => IsoIr58,
            _ => return None,
        };
        Some(charset)
    }

    /// Identify the character set designated by the escape sequence
    /// at the start of `bytes`,
    /// returning it along with the length of the sequence.
    pub fn from_escape_sequence(bytes: &[u8]) -> Option<(CharacterSet, usize)> {
        ESCAPE_SEQUENCES
            .iter()
            .find(|(seq, _)| bytes.starts_with(seq))
            .map(|(seq, charset)| (charset.clone(), seq.len()))
    }

    /// The defined term of this character set
    /// in its non-extended form where one exists
    /// (e.g. `"ISO_IR 100"`, `"ISO 2022 IR 87"`).
    pub fn defined_term(&self) -> &str {
        match self {
            CharacterSet::Custom { term, .. } => term,
            charset => charset.name(),
        }
    }

    /// The underlying text encoding.
    pub fn encoding(&self) -> EncodingRef {
        use CharacterSet::*;
        match self {
            Default => ASCII,
            IsoIr13 => WINDOWS_31J,
            IsoIr100 => ISO_8859_1,
            IsoIr101 => ISO_8859_2,
            IsoIr109 => ISO_8859_3,
            IsoIr110 => ISO_8859_4,
            IsoIr126 => ISO_8859_7,
            IsoIr127 => ISO_8859_6,
            IsoIr138 => ISO_8859_8,
            IsoIr144 => ISO_8859_5,
            IsoIr148 => WINDOWS_1254,
            IsoIr149 => WINDOWS_949,
            IsoIr166 => WINDOWS_874,
            IsoIr192 => UTF_8,
            Gb18030 => GB18030,
            Gbk | IsoIr58 => GBK,
            IsoIr87 | IsoIr159 => ISO_2022_JP,
            Custom { encoding, .. } => *encoding,
        }
    }

    /// The escape sequence which designates this character set,
    /// or an empty slice if it cannot be designated by code extension.
    pub fn escape_sequence(&self) -> &'static [u8] {
        ESCAPE_SEQUENCES
            .iter()
            .find(|(_, charset)| charset == self)
            .map(|(seq, _)| *seq)
            .unwrap_or(&[])
    }

    /// Whether the text encoding interprets escape sequences by itself,
    /// so that they are kept in the bytes given to the decoder
    /// and emitted by the encoder.
    pub fn manages_escapes(&self) -> bool {
        matches!(self, CharacterSet::IsoIr87 | CharacterSet::IsoIr159)
    }

    /// Whether both character sets decode bytes the same way.
    fn same_encoding(&self, other: &CharacterSet) -> bool {
        self.encoding().name() == other.encoding().name()
    }

    /// Decode with the strict variant of the encoding,
    /// falling back to replacement characters.
    fn decode_lossy(&self, bytes: &[u8]) -> String {
        let encoding = self.encoding();
        match encoding.decode(bytes, DecoderTrap::Strict) {
            Ok(text) => text,
            Err(e) => {
                let text = encoding
                    .decode(bytes, DecoderTrap::Replace)
                    .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
                warn!(
                    "Could not decode {:?} with character set {}: {}, using replacement characters",
                    text,
                    self.defined_term(),
                    e
                );
                text
            }
        }
    }

    fn encode_strict(&self, text: &str) -> Option<Vec<u8>> {
        self.encoding().encode(text, EncoderTrap::Strict).ok()
    }
}

impl fmt::Debug for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Custom { term, encoding } => f
                .debug_struct("Custom")
                .field("term", term)
                .field("encoding", &encoding.name())
                .finish(),
            _ => f.write_str(self.defined_term()),
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.defined_term())
    }
}

impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                CharacterSet::Custom { term, encoding },
                CharacterSet::Custom {
                    term: other_term,
                    encoding: other_encoding,
                },
            ) => term == other_term && encoding.name() == other_encoding.name(),
            (CharacterSet::Custom { .. }, _) | (_, CharacterSet::Custom { .. }) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for CharacterSet {}

impl Default for CharacterSet {
    fn default() -> Self {
        CharacterSet::Default
    }
}

impl TextCodec for CharacterSet {
    fn name(&self) -> &'static str {
        use CharacterSet::*;
        match self {
            Default => "ISO_IR 6",
            IsoIr13 => "ISO_IR 13",
            IsoIr100 => "ISO_IR 100",
            IsoIr101 => "ISO_IR 101",
            IsoIr109 => "ISO_IR 109",
            IsoIr110 => "ISO_IR 110",
            IsoIr126 => "ISO_IR 126",
            IsoIr127 => "ISO_IR 127",
            IsoIr138 => "ISO_IR 138",
            IsoIr144 => "ISO_IR 144",
            IsoIr148 => "ISO_IR 148",
            IsoIr149 => "ISO_IR 149",
            IsoIr166 => "ISO_IR 166",
            IsoIr192 => "ISO_IR 192",
            Gb18030 => "GB18030",
            Gbk => "GBK",
            IsoIr87 => "ISO 2022 IR 87",
            IsoIr159 => "ISO 2022 IR 159",
            IsoIr58 => "ISO 2022 IR 58",
            Custom { encoding, .. } => encoding.name(),
        }
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        self.encoding()
            .decode(text, DecoderTrap::Strict)
            .map_err(|message| DecodeCustomSnafu { message }.build())
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        self.encoding()
            .encode(text, EncoderTrap::Strict)
            .map_err(|message| EncodeCustomSnafu { message }.build())
    }
}

/// The ordered list of character sets
/// declared by a _Specific Character Set_ element.
///
/// The first character set is the one in effect
/// at the start of a value and after each delimiter.
/// The others may be activated through ISO 2022 escape sequences.
/// The list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificCharacterSet(Vec<CharacterSet>);

impl Default for SpecificCharacterSet {
    fn default() -> Self {
        SpecificCharacterSet(vec![CharacterSet::Default])
    }
}

impl From<CharacterSet> for SpecificCharacterSet {
    fn from(charset: CharacterSet) -> Self {
        SpecificCharacterSet(vec![charset])
    }
}

impl SpecificCharacterSet {
    /// Build the list of character sets from the values
    /// of a _Specific Character Set_ element.
    ///
    /// An empty list or an empty first value
    /// selects the default character set.
    /// Unknown terms fall back to the default character set
    /// with a warning.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut charsets: Vec<CharacterSet> = terms
            .into_iter()
            .map(|term| {
                let term = term.as_ref();
                CharacterSet::from_term(term).unwrap_or_else(|| {
                    warn!(
                        "'{}' is not a known character set, using the default character set instead",
                        term
                    );
                    CharacterSet::Default
                })
            })
            .collect();
        if charsets.is_empty() {
            charsets.push(CharacterSet::Default);
        }
        SpecificCharacterSet(charsets)
    }

    /// Build the list of character sets
    /// from the full text of a _Specific Character Set_ element,
    /// with values separated by backslashes.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_encoding::text::{CharacterSet, SpecificCharacterSet};
    /// let charset = SpecificCharacterSet::from_code("\\ISO 2022 IR 87");
    /// assert_eq!(
    ///     charset.charsets(),
    ///     &[CharacterSet::Default, CharacterSet::IsoIr87],
    /// );
    /// ```
    pub fn from_code(code: &str) -> Self {
        let code = code.trim_end_matches(|c: char| c == ' ' || c == '\0');
        if code.is_empty() {
            return Self::default();
        }
        Self::from_terms(code.split('\\'))
    }

    /// The character sets in order of declaration.
    pub fn charsets(&self) -> &[CharacterSet] {
        &self.0
    }

    /// The character set in effect at the start of a value.
    pub fn first(&self) -> &CharacterSet {
        // the list is never empty
        &self.0[0]
    }

    /// The defined terms of the character sets,
    /// suitable as the values of a _Specific Character Set_ element.
    pub fn terms(&self) -> Vec<String> {
        self.0.iter().map(|c| c.defined_term().to_string()).collect()
    }

    /// Whether the given character set is among the declared ones
    /// or decodes like the default character set.
    fn admits(&self, charset: &CharacterSet) -> bool {
        charset.same_encoding(&CharacterSet::Default)
            || self.0.iter().any(|c| c.same_encoding(charset))
    }

    /// Decode a byte buffer into text,
    /// switching character sets on escape sequences
    /// and going back to the first one after each delimiter.
    ///
    /// Bytes which are not valid in the active character set
    /// are replaced and a warning is logged.
    pub fn decode_text(&self, bytes: &[u8], delimiters: Delimiters) -> String {
        if self.0.len() < 2 || !bytes.contains(&ESC) {
            return self.first().decode_lossy(bytes);
        }

        let mut out = String::with_capacity(bytes.len());
        let mut start = 0;
        for (i, _) in bytes.iter().enumerate().filter(|(_, b)| **b == ESC) {
            if i > start {
                out.push_str(&self.decode_fragment(&bytes[start..i], delimiters));
            }
            start = i;
        }
        out.push_str(&self.decode_fragment(&bytes[start..], delimiters));
        out
    }

    /// Decode a fragment which either starts with an escape sequence
    /// or is the start of the value.
    fn decode_fragment(&self, fragment: &[u8], delimiters: Delimiters) -> String {
        let (charset, seq_len) = if fragment.first() == Some(&ESC) {
            match CharacterSet::from_escape_sequence(fragment) {
                Some((charset, len)) if self.admits(&charset) => (charset, len),
                Some((charset, len)) => {
                    warn!(
                        "Found escape sequence for {}, which is not declared in the Specific Character Set, using the default character set instead",
                        charset
                    );
                    (CharacterSet::Default, len)
                }
                None => {
                    warn!("Unknown escape sequence found in text, using the default character set");
                    (CharacterSet::Default, unknown_escape_len(fragment))
                }
            }
        } else {
            (self.first().clone(), 0)
        };

        // the escape sequence is part of the input of self-managed encodings,
        // where only control characters reset the active set
        let (body_start, delimiters) = if charset.manages_escapes() {
            (0, Delimiters::Text)
        } else {
            (seq_len, delimiters)
        };

        match fragment[seq_len..]
            .iter()
            .position(|b| delimiters.contains(*b))
        {
            Some(pos) => {
                let split = seq_len + pos;
                let mut text = charset.decode_lossy(&fragment[body_start..split]);
                text.push_str(&self.first().decode_lossy(&fragment[split..]));
                text
            }
            None => charset.decode_lossy(&fragment[body_start..]),
        }
    }

    /// Encode text into bytes.
    ///
    /// The first character set is tried on the whole text.
    /// If it cannot represent the text,
    /// each span between delimiters is encoded
    /// with the first declared character set able to represent it,
    /// preceded by its escape sequence.
    /// Spans which no declared character set can represent
    /// are encoded with replacement characters and a warning is logged.
    pub fn encode_text(&self, text: &str, delimiters: Delimiters) -> Vec<u8> {
        if let Some(bytes) = self.first().encode_strict(text) {
            return bytes;
        }

        let mut out = Vec::with_capacity(text.len() * 2);
        let mut span_start = 0;
        for (i, c) in text.char_indices() {
            if delimiters.contains_char(c) {
                self.encode_span(&text[span_start..i], &mut out);
                self.encode_span(&text[i..i + c.len_utf8()], &mut out);
                span_start = i + c.len_utf8();
            }
        }
        self.encode_span(&text[span_start..], &mut out);
        out
    }

    fn encode_span(&self, span: &str, out: &mut Vec<u8>) {
        if span.is_empty() {
            return;
        }
        for (i, charset) in self.0.iter().enumerate() {
            if let Some(bytes) = charset.encode_strict(span) {
                if i > 0 && !charset.manages_escapes() {
                    out.extend_from_slice(charset.escape_sequence());
                }
                out.extend(bytes);
                return;
            }
        }

        warn!(
            "Could not encode {:?} with any of the character sets {:?}, using replacement characters",
            span, self.0
        );
        let first = self.first();
        match first.encoding().encode(span, EncoderTrap::Replace) {
            Ok(bytes) => out.extend(bytes),
            Err(_) => out.extend(span.bytes().map(|b| if b.is_ascii() { b } else { b'?' })),
        }
    }
}

/// Length of an escape sequence missing from the table:
/// four bytes for multi-byte sets, three otherwise.
fn unknown_escape_len(fragment: &[u8]) -> usize {
    let len = match fragment {
        [_, b'$', b'(' | b')', ..] => 4,
        _ => 3,
    };
    len.min(fragment.len())
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> &'static str {
        self.first().name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        Ok(self.decode_text(text, Delimiters::Text))
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        Ok(self.encode_text(text, Delimiters::Text))
    }
}
