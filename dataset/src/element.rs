//! Data elements and their values.
//!
//! A [`DataElement`] keeps its value in the binary form
//! of its value representation,
//! together with the character sets and byte order of that form.
//! Native values are converted on the way in ([`DataElement::append`])
//! and on the way out ([`DataElement::get`]).
//!
//! Textual values added through [`DataElement::append`]
//! are kept as text ([`TextValue`])
//! and only encoded when their bytes are requested,
//! in the character sets in effect at that moment.

use crate::convert::{format_ds, FromElement};
use crate::mem::DataSet;
use crate::{
    BinaryValueSnafu, IndexOutOfRangeSnafu, InvalidValueSnafu, LoadBulkDataSnafu,
    NotSingleValuedSnafu, Result, UnsupportedValueSnafu, WrongItemTypeSnafu,
};
use chrono::{NaiveDateTime, NaiveTime};
use dicom_core::error::{InvalidValueReadError, ParseEnumSnafu, ParseTagSnafu};
use dicom_core::validation::ValidationError;
use dicom_core::value::date::{format_date, format_datetime, format_time};
use dicom_core::value::{PrimitiveValue, ValueType, C};
use dicom_core::{Tag, VR};
use dicom_dictionary_std::StandardDataDictionary;
use dicom_encoding::binary::{read_value_at, read_values, write_values, BinaryValue};
use dicom_encoding::text::{Delimiters, SpecificCharacterSet};
use dicom_encoding::Endianness;
use num_traits::NumCast;
use once_cell::sync::{Lazy, OnceCell};
use snafu::{OptionExt, ResultExt};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

static DEFAULT_CHARSET: Lazy<SpecificCharacterSet> = Lazy::new(SpecificCharacterSet::default);

const PADDING: &[char] = &[' ', '\0'];

/// A function fetching the content of bulk data from its URI.
pub type BulkDataLoader = Arc<dyn Fn(&str) -> std::io::Result<Vec<u8>> + Send + Sync>;

/// A value held elsewhere,
/// only fetched the first time that its content is needed.
#[derive(Clone)]
pub struct BulkData {
    uri: String,
    data: OnceCell<Vec<u8>>,
    loader: BulkDataLoader,
}

impl BulkData {
    /// Create a reference to bulk data,
    /// to be fetched with the given loader.
    pub fn new<F>(uri: impl Into<String>, loader: F) -> Self
    where
        F: Fn(&str) -> std::io::Result<Vec<u8>> + Send + Sync + 'static,
    {
        BulkData {
            uri: uri.into(),
            data: OnceCell::new(),
            loader: Arc::new(loader),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether the content was already fetched.
    pub fn is_resolved(&self) -> bool {
        self.data.get().is_some()
    }

    /// Fetch the content if not fetched yet.
    ///
    /// The loader is called at most once successfully,
    /// later calls return the same content.
    pub fn force(&self) -> Result<&[u8]> {
        let data = self
            .data
            .get_or_try_init(|| (self.loader)(&self.uri))
            .context(LoadBulkDataSnafu { uri: &self.uri })?;
        Ok(data)
    }

    fn get(&self) -> Option<&[u8]> {
        self.data.get().map(Vec::as_slice)
    }
}

impl fmt::Debug for BulkData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkData")
            .field("uri", &self.uri)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl PartialEq for BulkData {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

/// A textual value,
/// encoded in the character sets of its element on first access to its bytes.
#[derive(Debug, Clone, Default)]
pub struct TextValue {
    text: String,
    encoded: OnceCell<Vec<u8>>,
}

impl TextValue {
    fn new(text: String) -> Self {
        TextValue {
            text,
            encoded: OnceCell::new(),
        }
    }

    /// The text, with any trailing padding.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the text was encoded since it last changed.
    pub fn is_encoded(&self) -> bool {
        self.encoded.get().is_some()
    }

    fn encoded<F>(&self, encode: F) -> &[u8]
    where
        F: FnOnce(&str) -> Vec<u8>,
    {
        self.encoded.get_or_init(|| encode(&self.text))
    }

    fn text_mut(&mut self) -> &mut String {
        self.invalidate();
        &mut self.text
    }

    fn invalidate(&mut self) {
        self.encoded.take();
    }
}

/// The value of a data element.
#[derive(Debug, Clone)]
pub enum Value<D = StandardDataDictionary> {
    /// The bytes of a primitive value,
    /// in the binary form of the element's value representation.
    Primitive(Vec<u8>),
    /// A textual primitive value not encoded yet.
    Text(TextValue),
    /// The items of a sequence.
    Sequence(Vec<DataSet<D>>),
    /// The fragments of encapsulated pixel data.
    PixelSequence(Vec<Vec<u8>>),
    /// A primitive value yet to be fetched.
    BulkData(BulkData),
}

impl<D> Value<D> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Primitive(_) | Value::Text(_) => "primitive",
            Value::Sequence(_) => "sequence",
            Value::PixelSequence(_) => "pixel sequence",
            Value::BulkData(_) => "bulk data",
        }
    }
}

impl<D> PartialEq for Value<D> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a.text == b.text,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::PixelSequence(a), Value::PixelSequence(b)) => a == b,
            (Value::BulkData(a), Value::BulkData(b)) => a == b,
            _ => false,
        }
    }
}

/// A data element: a tag, a value representation and a value.
#[derive(Debug, Clone)]
pub struct DataElement<D = StandardDataDictionary> {
    tag: Tag,
    vr: VR,
    value: Value<D>,
    charset: SpecificCharacterSet,
    endianness: Endianness,
}

impl<D> PartialEq for DataElement<D> {
    fn eq(&self, other: &Self) -> bool {
        if self.tag != other.tag || self.vr != other.vr {
            return false;
        }
        match (&self.value, &other.value) {
            (Value::Text(_), Value::Primitive(_)) | (Value::Primitive(_), Value::Text(_)) => {
                matches!((self.to_str(), other.to_str()), (Ok(a), Ok(b)) if a == b)
            }
            (a, b) => a == b,
        }
    }
}

fn delimiters(vr: VR) -> Delimiters {
    if vr == VR::PN {
        Delimiters::PersonName
    } else {
        Delimiters::Text
    }
}

/// Leading spaces are significant in text and person names.
fn trim_value(vr: VR, value: &str) -> &str {
    match vr {
        VR::LT | VR::ST | VR::UT | VR::UC | VR::UR | VR::PN => value.trim_end_matches(PADDING),
        _ => value.trim_matches(PADDING),
    }
}

impl<D> DataElement<D> {
    /// Create an element with the given native value,
    /// in the default character repertoire and little endian.
    ///
    /// Fails if the value cannot be represented in `vr`.
    pub fn new(tag: Tag, vr: VR, value: impl Into<PrimitiveValue>) -> Result<Self> {
        let mut element = DataElement::empty(tag, vr);
        element.append(value)?;
        Ok(element)
    }

    /// Create an element without values.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        let value = if vr == VR::SQ {
            Value::Sequence(Vec::new())
        } else if vr.is_string() {
            Value::Text(TextValue::default())
        } else {
            Value::Primitive(Vec::new())
        };
        DataElement::from_value(tag, vr, value)
    }

    /// Create an element from bytes in the binary form of `vr`,
    /// as sliced by a data set reader.
    ///
    /// The bytes are taken to be in the default character repertoire
    /// and little endian,
    /// use [`with_encoding`](DataElement::with_encoding) otherwise.
    pub fn from_bytes(tag: Tag, vr: VR, bytes: Vec<u8>) -> Self {
        DataElement::from_value(tag, vr, Value::Primitive(bytes))
    }

    /// Create a sequence element.
    pub fn new_sequence(tag: Tag, items: Vec<DataSet<D>>) -> Self {
        DataElement::from_value(tag, VR::SQ, Value::Sequence(items))
    }

    /// Create an element of encapsulated pixel data fragments.
    pub fn new_pixel_sequence(tag: Tag, vr: VR, fragments: Vec<Vec<u8>>) -> Self {
        DataElement::from_value(tag, vr, Value::PixelSequence(fragments))
    }

    /// Create an element whose value is fetched on first access.
    pub fn new_bulk_data(tag: Tag, vr: VR, bulk: BulkData) -> Self {
        DataElement::from_value(tag, vr, Value::BulkData(bulk))
    }

    fn from_value(tag: Tag, vr: VR, value: Value<D>) -> Self {
        DataElement {
            tag,
            vr,
            value,
            charset: DEFAULT_CHARSET.clone(),
            endianness: Endianness::Little,
        }
    }

    /// Declare the character sets and byte order
    /// in which the current bytes are encoded.
    ///
    /// The bytes are left untouched,
    /// text not encoded yet will be encoded in `charset`.
    pub fn with_encoding(mut self, charset: SpecificCharacterSet, endianness: Endianness) -> Self {
        if let Value::Text(text) = &mut self.value {
            text.invalidate();
        }
        self.charset = charset;
        self.endianness = endianness;
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn value(&self) -> &Value<D> {
        &self.value
    }

    /// The character sets of the text in this element.
    pub fn charset(&self) -> &SpecificCharacterSet {
        &self.charset
    }

    /// The byte order of binary values in this element.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Move the value out of the element.
    pub fn into_value(self) -> Value<D> {
        self.value
    }

    pub(crate) fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }

    /// The sequence items, if this is a sequence.
    pub fn items(&self) -> Option<&[DataSet<D>]> {
        match &self.value {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub(crate) fn items_mut(&mut self) -> Option<&mut Vec<DataSet<D>>> {
        match &mut self.value {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The pixel data fragments, if this is encapsulated pixel data.
    pub fn fragments(&self) -> Option<&[Vec<u8>]> {
        match &self.value {
            Value::PixelSequence(fragments) => Some(fragments),
            _ => None,
        }
    }

    /// Whether the value is available without fetching bulk data.
    pub fn is_resolved(&self) -> bool {
        match &self.value {
            Value::BulkData(bulk) => bulk.is_resolved(),
            _ => true,
        }
    }

    /// Fetch the bulk data value if not fetched yet.
    pub fn force(&self) -> Result<()> {
        if let Value::BulkData(bulk) = &self.value {
            bulk.force()?;
        }
        Ok(())
    }

    fn wrong_type(&self, expected: &'static str) -> crate::Error {
        WrongItemTypeSnafu {
            tag: self.tag,
            found: self.value.kind(),
            expected,
        }
        .build()
        .into()
    }

    /// The bytes of a primitive value, fetching bulk data if needed.
    pub fn bytes(&self) -> Result<&[u8]> {
        match &self.value {
            Value::Primitive(bytes) => Ok(bytes),
            Value::Text(text) => Ok(text.encoded(|text| self.encode(text))),
            Value::BulkData(bulk) => bulk.force(),
            _ => Err(self.wrong_type("primitive")),
        }
    }

    /// The bytes of a primitive value as written to a data set stream,
    /// padded to an even length with the padding of the value representation.
    pub fn to_wire_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = self.bytes()?.to_vec();
        if bytes.len() % 2 == 1 {
            bytes.push(self.vr.padding());
        }
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        if self.vr.is_string_encoded() {
            self.charset.decode_text(bytes, delimiters(self.vr))
        } else {
            DEFAULT_CHARSET.decode_text(bytes, Delimiters::Text)
        }
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        if self.vr.is_string_encoded() {
            self.charset.encode_text(text, delimiters(self.vr))
        } else {
            DEFAULT_CHARSET.encode_text(text, Delimiters::Text)
        }
    }

    /// The whole text of a textual value, padding included.
    fn text(&self) -> Result<Cow<'_, str>> {
        match &self.value {
            Value::Text(text) => Ok(Cow::Borrowed(text.as_str())),
            _ => Ok(Cow::Owned(self.decode(self.bytes()?))),
        }
    }

    fn count_in(&self, bytes: &[u8]) -> usize {
        if !self.vr.is_string() {
            return bytes.len() / self.vr.unit_size().max(1) as usize;
        }
        if !self.vr.is_multi_value() {
            return 1;
        }
        self.count_text(&self.decode(bytes))
    }

    fn count_text(&self, text: &str) -> usize {
        if !self.vr.is_multi_value() {
            return 1;
        }
        let text = text.trim_end_matches(PADDING);
        if text.is_empty() {
            0
        } else {
            text.split('\\').count()
        }
    }

    /// The number of values in the element.
    ///
    /// Single valued text (LT, ST, UT, UR) always counts as one value,
    /// even if empty.
    /// Bulk data which was not fetched yet counts as no values.
    pub fn count(&self) -> usize {
        match &self.value {
            Value::Primitive(bytes) => self.count_in(bytes),
            Value::Text(text) => self.count_text(text.as_str()),
            Value::Sequence(items) => items.len(),
            Value::PixelSequence(fragments) => fragments.len(),
            Value::BulkData(bulk) => bulk.get().map_or(0, |bytes| self.count_in(bytes)),
        }
    }

    /// The number of values in the element, fetching bulk data if needed.
    pub fn value_count(&self) -> Result<usize> {
        self.force()?;
        Ok(self.count())
    }

    /// The whole value as text.
    ///
    /// Text values are decoded as a whole without trailing padding,
    /// binary values are rendered and joined with a backslash.
    pub fn to_str(&self) -> Result<String> {
        if self.vr.is_string() {
            let text = self.text()?;
            Ok(text.trim_end_matches(PADDING).to_string())
        } else {
            Ok(self.to_primitive()?.to_str().into_owned())
        }
    }

    /// All values as text, one per value.
    pub fn strings(&self) -> Result<Vec<String>> {
        if !self.vr.is_string() {
            return Ok(self.to_primitive()?.to_multi_str().into_owned());
        }
        let text = self.text()?;
        let text = text.trim_end_matches(PADDING);
        if !self.vr.is_multi_value() {
            return Ok(vec![trim_value(self.vr, text).to_string()]);
        }
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(text
            .split('\\')
            .map(|v| trim_value(self.vr, v).to_string())
            .collect())
    }

    pub(crate) fn string_at(&self, index: usize) -> Result<String> {
        let values = self.strings()?;
        let count = values.len();
        Ok(values.into_iter().nth(index).context(IndexOutOfRangeSnafu {
            tag: self.tag,
            index,
            count,
        })?)
    }

    pub(crate) fn binary_at<T: BinaryValue>(&self, index: usize) -> Result<T> {
        let bytes = self.bytes()?;
        let value = read_value_at::<T>(bytes, index, self.endianness)
            .context(BinaryValueSnafu { tag: self.tag })?;
        Ok(value.context(IndexOutOfRangeSnafu {
            tag: self.tag,
            index,
            count: bytes.len() / T::SIZE,
        })?)
    }

    /// The value as a native primitive value.
    ///
    /// Text is provided as is, without parsing numbers or dates.
    pub fn to_primitive(&self) -> Result<PrimitiveValue> {
        let vr = self.vr;
        if vr.is_string() {
            let mut values = self.strings()?;
            return Ok(if vr.is_multi_value() {
                PrimitiveValue::Strs(C::from_vec(values))
            } else {
                PrimitiveValue::Str(values.pop().unwrap_or_default())
            });
        }

        let bytes = self.bytes()?;
        let endianness = self.endianness;
        let tag = self.tag;

        macro_rules! read_all {
            ($variant: ident) => {
                PrimitiveValue::$variant(C::from_vec(
                    read_values(bytes, endianness).context(BinaryValueSnafu { tag })?,
                ))
            };
        }

        Ok(match vr.native_type() {
            ValueType::Tags => read_all!(Tags),
            ValueType::U8 => PrimitiveValue::U8(C::from_slice(bytes)),
            ValueType::I16 => read_all!(I16),
            ValueType::U16 => read_all!(U16),
            ValueType::I32 => read_all!(I32),
            ValueType::U32 => read_all!(U32),
            ValueType::I64 => read_all!(I64),
            ValueType::U64 => read_all!(U64),
            ValueType::F32 => read_all!(F32),
            ValueType::F64 => read_all!(F64),
            _ => return Err(self.wrong_type("primitive")),
        })
    }

    /// Read the value at `index` as the requested type.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_dataset::DataElement;
    /// # use dicom_core::{Tag, VR};
    /// let element: DataElement = DataElement::from_bytes(Tag(0x0020, 0x0013), VR::IS, b"12\\-4 ".to_vec());
    /// assert_eq!(element.get::<i32>(1)?, -4);
    /// assert_eq!(element.get::<String>(0)?, "12");
    /// assert!(element.get::<i32>(2).is_err());
    /// # Ok::<(), dicom_dataset::Error>(())
    /// ```
    pub fn get<T: FromElement>(&self, index: usize) -> Result<T> {
        T::from_element(self, index)
    }

    /// Read all values as the requested type.
    pub fn values<T: FromElement>(&self) -> Result<Vec<T>> {
        T::all_from_element(self)
    }

    /// Read the value at `index` as a variant of an enumeration.
    ///
    /// The text is trimmed of padding,
    /// and tried again in upper case if it is not recognized as is.
    pub fn get_enum<E: FromStr>(&self, index: usize) -> Result<E> {
        let text = self.string_at(index)?;
        let text = text.trim_matches(PADDING);
        let parsed = text
            .parse()
            .or_else(|_| text.to_ascii_uppercase().parse())
            .ok()
            .context(ParseEnumSnafu {
                text,
                type_name: std::any::type_name::<E>(),
            })
            .context(InvalidValueSnafu { tag: self.tag })?;
        Ok(parsed)
    }

    /// Append the given values to the element.
    ///
    /// The values are converted to the binary form of the value representation
    /// and added after the existing ones.
    /// Trailing padding of textual values is dropped first,
    /// so that [`to_wire_bytes`](DataElement::to_wire_bytes)
    /// pads the new value once.
    ///
    /// Value multiplicity is not checked here,
    /// see [`DataSet::append`](crate::DataSet::append).
    pub fn append(&mut self, value: impl Into<PrimitiveValue>) -> Result<()> {
        let value = value.into();
        if self.vr.is_string() {
            return self.append_text(&value);
        }
        let new_bytes = self.encode_values(&value)?;
        self.materialize()?;
        match &mut self.value {
            Value::Primitive(bytes) => {
                bytes.extend_from_slice(&new_bytes);
                Ok(())
            }
            other => Err(WrongItemTypeSnafu {
                tag: self.tag,
                found: other.kind(),
                expected: "primitive",
            }
            .build()
            .into()),
        }
    }

    fn append_text(&mut self, value: &PrimitiveValue) -> Result<()> {
        let (tag, vr) = (self.tag, self.vr);
        let texts = text_values(vr, value).context(UnsupportedValueSnafu {
            tag,
            vr,
            from: value.value_type(),
        })?;
        self.materialize()?;
        let existing = self.count();
        let text = match &mut self.value {
            Value::Text(text) => text,
            other => {
                return Err(WrongItemTypeSnafu {
                    tag,
                    found: other.kind(),
                    expected: "primitive",
                }
                .build()
                .into())
            }
        };
        if texts.is_empty() {
            return Ok(());
        }

        let text = text.text_mut();
        let len = text.trim_end_matches(PADDING).len();
        text.truncate(len);
        if vr.is_multi_value() {
            if existing > 0 {
                text.push('\\');
            }
        } else if !text.is_empty() {
            return NotSingleValuedSnafu {
                tag,
                count: existing + 1,
            }
            .fail()
            .map_err(Into::into);
        }
        text.push_str(&texts.join("\\"));
        Ok(())
    }

    /// Bring the value to the form in which new values are appended:
    /// text for textual value representations, bytes otherwise.
    ///
    /// Bulk data is fetched.
    fn materialize(&mut self) -> Result<()> {
        let bytes = match &self.value {
            Value::Primitive(bytes) if self.vr.is_string() => bytes.as_slice(),
            Value::BulkData(bulk) => bulk.force()?,
            _ => return Ok(()),
        };
        let value = if self.vr.is_string() {
            Value::Text(TextValue::new(self.decode(bytes)))
        } else {
            Value::Primitive(bytes.to_vec())
        };
        self.value = value;
        Ok(())
    }

    fn encode_values(&self, value: &PrimitiveValue) -> Result<Vec<u8>> {
        let vr = self.vr;
        let unsupported = || -> crate::Error {
            UnsupportedValueSnafu {
                tag: self.tag,
                vr,
                from: value.value_type(),
            }
            .build()
            .into()
        };

        let endianness = self.endianness;
        let tag = self.tag;
        let mut out = Vec::new();

        macro_rules! write_as {
            ($typ: ty) => {{
                let values: Vec<$typ> = numbers(tag, value).ok_or_else(unsupported)??;
                write_values(&values, endianness, &mut out).context(BinaryValueSnafu { tag })?;
            }};
        }

        match vr.native_type() {
            ValueType::Tags => {
                let tags = match value {
                    PrimitiveValue::Empty => Vec::new(),
                    PrimitiveValue::Tags(tags) => tags.to_vec(),
                    PrimitiveValue::Str(_) | PrimitiveValue::Strs(_) => value
                        .to_multi_str()
                        .iter()
                        .map(|s| s.trim().parse::<Tag>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .context(ParseTagSnafu)
                        .context(InvalidValueSnafu { tag })?,
                    _ => return Err(unsupported()),
                };
                write_values(&tags, endianness, &mut out).context(BinaryValueSnafu { tag })?;
            }
            ValueType::U8 => write_as!(u8),
            ValueType::I16 => write_as!(i16),
            ValueType::U16 => write_as!(u16),
            ValueType::I32 => write_as!(i32),
            ValueType::U32 => write_as!(u32),
            ValueType::I64 => write_as!(i64),
            ValueType::U64 => write_as!(u64),
            ValueType::F32 => write_as!(f32),
            ValueType::F64 => write_as!(f64),
            _ => return Err(unsupported()),
        }
        Ok(out)
    }

    /// Convert the value to other character sets and byte order.
    ///
    /// Text is encoded again from its logical value,
    /// encoded text read from bytes is decoded first.
    pub(crate) fn reencode(&mut self, charset: &SpecificCharacterSet, endianness: Endianness) {
        let DataElement {
            vr,
            value,
            charset: current_charset,
            endianness: current_endianness,
            ..
        } = self;
        let decoded = match value {
            Value::Text(text) => {
                text.invalidate();
                None
            }
            Value::Primitive(bytes) if vr.is_string() => (vr.is_string_encoded()
                && *current_charset != *charset)
                .then(|| current_charset.decode_text(bytes, delimiters(*vr))),
            Value::Primitive(bytes) => {
                let swap = vr.info().byte_swap as usize;
                if swap > 1 && *current_endianness != endianness {
                    for unit in bytes.chunks_exact_mut(swap) {
                        unit.reverse();
                    }
                }
                None
            }
            // fetched bytes are kept in their original encoding
            Value::BulkData(_) => return,
            // items are converted by their own data set
            Value::Sequence(_) | Value::PixelSequence(_) => None,
        };
        if let Some(text) = decoded {
            *value = Value::Text(TextValue::new(text));
        }
        *current_charset = charset.clone();
        *current_endianness = endianness;
    }

    /// Check every textual value against the rules of the value representation.
    ///
    /// Bulk data not fetched yet is not checked.
    /// Sequence items are checked by their own data set.
    pub fn validate_content(&self) -> Result<()> {
        if !self.vr.is_string() || !self.is_resolved() {
            return Ok(());
        }
        if let Value::Primitive(_) | Value::Text(_) | Value::BulkData(_) = self.value {
            for value in self.strings()? {
                self.vr
                    .validate_string(&value)
                    .map_err(|e: ValidationError| -> crate::Error { e.into() })?;
            }
        }
        Ok(())
    }
}

/// Turn a native value into the textual values of `vr`,
/// or `None` if the value type does not fit.
fn text_values(vr: VR, value: &PrimitiveValue) -> Option<Vec<String>> {
    use PrimitiveValue::*;

    fn integral<T>(values: &[T]) -> Option<Vec<String>>
    where
        T: Copy + Into<f64>,
    {
        values
            .iter()
            .map(|v| {
                let v: f64 = (*v).into();
                (v.fract() == 0.0).then(|| format!("{}", v as i64))
            })
            .collect()
    }

    match (vr, value) {
        (_, Empty) => Some(Vec::new()),
        (_, Str(text)) => Some(vec![text.clone()]),
        (_, Strs(texts)) => Some(texts.to_vec()),
        (VR::DS, F64(values)) => Some(values.iter().map(|v| format_ds(*v)).collect()),
        (VR::DS, F32(values)) => Some(values.iter().map(|v| format_ds(*v)).collect()),
        (VR::DS | VR::IS, U8(_) | I16(_) | U16(_) | I32(_) | U32(_) | I64(_) | U64(_)) => {
            Some(value.to_multi_str().into_owned())
        }
        (VR::IS, F64(values)) => integral(values),
        (VR::IS, F32(values)) => integral(values),
        (VR::DA, Date(_)) | (VR::TM, Time(_)) | (VR::DT, DateTime(_)) => {
            Some(value.to_multi_str().into_owned())
        }
        (VR::DA, DateTime(values)) => Some(values.iter().map(|v| format_date(v.date())).collect()),
        (VR::TM, DateTime(values)) => Some(values.iter().map(|v| format_time(v.time())).collect()),
        (VR::DT, Date(values)) => Some(values.iter().map(|v| format_date(*v)).collect()),
        (VR::DT, Time(_)) => None,
        _ => None,
    }
}

/// Turn a native numeric value into numbers of type `T`,
/// or `None` if the value is not numeric.
fn numbers<T>(tag: Tag, value: &PrimitiveValue) -> Option<Result<Vec<T>>>
where
    T: crate::convert::Number,
{
    use crate::convert::cast_number;
    use PrimitiveValue::*;

    fn cast_all<S, T>(tag: Tag, values: &[S]) -> Result<Vec<T>>
    where
        S: crate::convert::Number,
        T: crate::convert::Number,
    {
        values.iter().map(|v| cast_number(tag, *v)).collect()
    }

    Some(match value {
        Empty => Ok(Vec::new()),
        U8(v) => cast_all(tag, v),
        I16(v) => cast_all(tag, v),
        U16(v) => cast_all(tag, v),
        I32(v) => cast_all(tag, v),
        U32(v) => cast_all(tag, v),
        I64(v) => cast_all(tag, v),
        U64(v) => cast_all(tag, v),
        F32(v) => cast_all(tag, v),
        F64(v) => cast_all(tag, v),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dicom_core::dicom_value;
    use dicom_core::value::{DateTimeRange, PersonName};

    type Element = DataElement<StandardDataDictionary>;

    #[test]
    fn person_name_components() {
        let element = Element::new(
            Tag(0x0010, 0x0010),
            VR::PN,
            PersonName::new("Doe", "John"),
        )
        .unwrap();
        assert_eq!(element.bytes().unwrap(), b"Doe^John");
        assert_eq!(element.to_str().unwrap(), "Doe^John");
        let name: PersonName = element.get(0).unwrap();
        assert_eq!(name.last(), "Doe");
        assert_eq!(name.first(), "John");
        assert_eq!(name.middle(), "");
    }

    #[test]
    fn decimal_string_from_float() {
        let element = Element::new(Tag(0x0018, 0x0050), VR::DS, 1.0_f32).unwrap();
        assert_eq!(element.bytes().unwrap(), b"1");
        assert_eq!(element.to_wire_bytes().unwrap(), b"1 ");
        assert_eq!(element.get::<f64>(0).unwrap(), 1.0);

        let element = Element::new(Tag(0x0028, 0x0030), VR::DS, [0.5_f64, 0.25]).unwrap();
        assert_eq!(element.to_str().unwrap(), "0.5\\0.25");
        assert_eq!(element.values::<f64>().unwrap(), vec![0.5, 0.25]);
    }

    #[test]
    fn counts() {
        let tag = Tag(0x0008, 0x0008);
        assert_eq!(Element::from_bytes(tag, VR::CS, Vec::new()).count(), 0);
        assert_eq!(Element::from_bytes(tag, VR::CS, b"A\\B ".to_vec()).count(), 2);
        assert_eq!(Element::from_bytes(tag, VR::CS, b"A\\".to_vec()).count(), 2);
        assert_eq!(Element::from_bytes(tag, VR::LT, Vec::new()).count(), 1);
        assert_eq!(Element::from_bytes(tag, VR::LT, b"a\\b".to_vec()).count(), 1);
        assert_eq!(Element::from_bytes(tag, VR::US, vec![0; 6]).count(), 3);
        assert_eq!(Element::from_bytes(tag, VR::AT, vec![0; 8]).count(), 2);
        assert_eq!(Element::new_sequence(tag, Vec::new()).count(), 0);
    }

    #[test]
    fn binary_values_in_both_byte_orders() {
        let tag = Tag(0x0028, 0x0010);
        let element = Element::from_bytes(tag, VR::US, vec![0x00, 0x02]);
        assert_eq!(element.get::<u16>(0).unwrap(), 512);
        let element = element.with_encoding(SpecificCharacterSet::default(), Endianness::Big);
        assert_eq!(element.get::<u16>(0).unwrap(), 2);
        assert_eq!(element.get::<i32>(0).unwrap(), 2);
        assert_eq!(element.get::<String>(0).unwrap(), "2");
        assert!(matches!(
            element.get::<u16>(1),
            Err(crate::Error::Argument {
                source: crate::ArgumentError::IndexOutOfRange { index: 1, count: 1, .. },
            })
        ));
    }

    #[test]
    fn reencode_swaps_bytes() {
        let tag = Tag(0x0028, 0x0010);
        let mut element = Element::new(tag, VR::UL, [1_u32, 0x0102_0304]).unwrap();
        element.reencode(&SpecificCharacterSet::default(), Endianness::Big);
        assert_eq!(
            element.bytes().unwrap(),
            &[0, 0, 0, 1, 0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(element.values::<u32>().unwrap(), vec![1, 0x0102_0304]);
    }

    #[test]
    fn reencode_transcodes_text() {
        let tag = Tag(0x0010, 0x0010);
        let utf8 = SpecificCharacterSet::from_code("ISO_IR 192");
        let mut element = Element::from_bytes(tag, VR::PN, "Buc^Jérôme".as_bytes().to_vec())
            .with_encoding(utf8, Endianness::Little);
        let latin1 = SpecificCharacterSet::from_code("ISO_IR 100");
        element.reencode(&latin1, Endianness::Little);
        assert_eq!(element.bytes().unwrap(), b"Buc^J\xe9r\xf4me");
        assert_eq!(element.to_str().unwrap(), "Buc^Jérôme");
    }

    #[test]
    fn append_keeps_existing_values() {
        let tag = Tag(0x0008, 0x0008);
        let mut element = Element::new(tag, VR::CS, "ORIGINAL").unwrap();
        element.append("PRIMARY").unwrap();
        assert_eq!(element.strings().unwrap(), vec!["ORIGINAL", "PRIMARY"]);

        // odd length value padded by the reader
        let mut element = Element::from_bytes(tag, VR::CS, b"A ".to_vec());
        element.append("BC").unwrap();
        assert_eq!(element.bytes().unwrap(), b"A\\BC");
        assert_eq!(element.to_wire_bytes().unwrap(), b"A\\BC");

        let mut element = Element::new(Tag(0x0028, 0x0010), VR::US, 1_u16).unwrap();
        element.append(dicom_value!(U16, [2, 3])).unwrap();
        assert_eq!(element.values::<u16>().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn type_mismatch() {
        let tag = Tag(0x0028, 0x0010);
        assert!(matches!(
            Element::new(tag, VR::US, "text"),
            Err(crate::Error::Data {
                source: crate::DataError::UnsupportedValue { .. },
            })
        ));
        assert!(Element::new(tag, VR::US, -1_i32).is_err());
        assert!(Element::new(tag, VR::US, 1.5_f64).is_err());
        assert!(Element::new(tag, VR::LO, 1.5_f64).is_err());
        assert!(Element::new(tag, VR::IS, 1.5_f64).is_err());
        assert_eq!(
            Element::new(tag, VR::IS, 3.0_f64).unwrap().to_str().unwrap(),
            "3"
        );
    }

    #[test]
    fn dates() {
        let tag = Tag(0x0008, 0x0020);
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let element = Element::new(tag, VR::DA, date).unwrap();
        assert_eq!(element.to_str().unwrap(), "20240229");
        assert_eq!(element.get::<NaiveDate>(0).unwrap(), date);

        let range: DateTimeRange = element.get(0).unwrap();
        assert_eq!(range.start(), date.and_hms_opt(0, 0, 0));
        assert_eq!(range.end(), date.and_hms_milli_opt(23, 59, 59, 999));

        let element = Element::from_bytes(tag, VR::DA, b"2024.01.05".to_vec());
        assert_eq!(
            element.get::<NaiveDate>(0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert!(element.get::<u16>(0).is_err());

        let element = Element::from_bytes(Tag(0x0008, 0x0030), VR::TM, b"1015".to_vec());
        assert_eq!(
            element.get::<NaiveTime>(0).unwrap(),
            NaiveTime::from_hms_opt(10, 15, 0).unwrap()
        );
        assert!(element.get::<NaiveDateTime>(0).is_err());
    }

    #[test]
    fn attribute_tags() {
        let tag = Tag(0x0020, 0x5000);
        let element = Element::new(tag, VR::AT, [Tag(0x0010, 0x0010), Tag(0x7FE0, 0x0010)]).unwrap();
        assert_eq!(element.bytes().unwrap(), &[0x10, 0, 0x10, 0, 0xE0, 0x7F, 0x10, 0]);
        assert_eq!(element.get::<Tag>(1).unwrap(), Tag(0x7FE0, 0x0010));
        assert_eq!(element.to_str().unwrap(), "(0010,0010)\\(7FE0,0010)");

        let element = Element::new(tag, VR::AT, "(0008,0016)").unwrap();
        assert_eq!(element.get::<Tag>(0).unwrap(), Tag(0x0008, 0x0016));
    }

    #[derive(Debug, PartialEq)]
    enum Laterality {
        Left,
        Right,
    }

    impl FromStr for Laterality {
        type Err = ();

        fn from_str(s: &str) -> std::result::Result<Self, ()> {
            match s {
                "L" => Ok(Laterality::Left),
                "R" => Ok(Laterality::Right),
                _ => Err(()),
            }
        }
    }

    #[test]
    fn enumerations() {
        let tag = Tag(0x0020, 0x0060);
        let element = Element::from_bytes(tag, VR::CS, b"r ".to_vec());
        assert_eq!(element.get_enum::<Laterality>(0).unwrap(), Laterality::Right);
        let element = Element::from_bytes(tag, VR::CS, b"X ".to_vec());
        assert!(element.get_enum::<Laterality>(0).is_err());
    }

    #[test]
    fn bulk_data_is_fetched_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let bulk = BulkData::new("http://example.com/bulk/1", move |_uri| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 0, 2, 0])
        });
        let element = Element::new_bulk_data(Tag(0x0028, 0x1201), VR::OW, bulk);
        assert!(!element.is_resolved());
        assert_eq!(element.count(), 0);
        assert_eq!(element.values::<u16>().unwrap(), vec![1, 2]);
        assert_eq!(element.values::<u16>().unwrap(), vec![1, 2]);
        assert!(element.is_resolved());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_bulk_data() {
        let bulk = BulkData::new("file:///missing", |_| {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
        });
        let element = Element::new_bulk_data(Tag(0x7FE0, 0x0010), VR::OB, bulk);
        assert!(matches!(
            element.bytes(),
            Err(crate::Error::Data {
                source: crate::DataError::LoadBulkData { .. },
            })
        ));
        assert!(!element.is_resolved());
    }
}
