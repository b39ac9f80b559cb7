//! This module contains the implementation for an in-memory DICOM data set.

use crate::convert::FromElement;
use crate::element::{BulkData, DataElement};
use crate::options::{DataSetOptions, EqualityMode};
use crate::{
    DuplicateTagSnafu, NoSuchAttributeNameSnafu, NoSuchDataElementTagSnafu,
    NotSingleValuedSnafu, PrivateBlocksExhaustedSnafu, Result, UnknownTagSnafu,
    WrongItemTypeSnafu,
};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry, ValueMultiplicity};
use dicom_core::header::{GroupNumber, TagMask};
use dicom_core::validation::{validate_multiplicity, MultiplicitySnafu, TagNotAllowedSnafu};
use dicom_core::value::ValueType;
use dicom_core::{PrimitiveValue, QualifiedTag, Tag, VR};
use dicom_dictionary_std::{tags, StandardDataDictionary};
use dicom_encoding::text::SpecificCharacterSet;
use snafu::{ensure, OptionExt};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use tracing::{debug, trace};

/// First and last private blocks which can be reserved in a group.
const PRIVATE_BLOCKS: std::ops::RangeInclusive<u16> = 0x0010..=0x00FF;

/** A DICOM data set that is fully contained in memory.
 *
 * Elements are kept in tag order,
 * with at most one element per tag.
 */
#[derive(Debug, Clone)]
pub struct DataSet<D = StandardDataDictionary> {
    /// the element map
    entries: BTreeMap<Tag, DataElement<D>>,
    /// the data dictionary
    dict: D,
    /// validation, equality and encoding options
    options: DataSetOptions,
}

impl<D> PartialEq for DataSet<D> {
    // This implementation ignores the data dictionary.
    fn eq(&self, other: &Self) -> bool {
        match self.options.equality {
            EqualityMode::Identity => std::ptr::eq(self, other),
            EqualityMode::Content => self.entries == other.entries,
        }
    }
}

impl<D: Default> Default for DataSet<D> {
    fn default() -> Self {
        DataSet {
            entries: BTreeMap::new(),
            dict: D::default(),
            options: DataSetOptions::default(),
        }
    }
}

impl DataSet<StandardDataDictionary> {
    /// Create a new empty data set
    /// using the standard data dictionary and default options.
    pub fn new_empty() -> Self {
        DataSet::default()
    }

    /// Create a new empty data set with the given options.
    pub fn new_empty_with_options(options: DataSetOptions) -> Self {
        DataSet::new_empty_with_dict_and_options(StandardDataDictionary, options)
    }

    /// Create a new empty file meta group data set,
    /// which only accepts elements of group `0002`.
    pub fn new_file_meta() -> Self {
        DataSet::new_empty_with_options(DataSetOptions::file_meta())
    }
}

/// Operations which do not need the data dictionary.
impl<D> DataSet<D> {
    /// Create a new empty data set with the given data dictionary.
    pub fn new_empty_with_dict(dict: D) -> Self {
        DataSet::new_empty_with_dict_and_options(dict, DataSetOptions::default())
    }

    pub fn new_empty_with_dict_and_options(dict: D, options: DataSetOptions) -> Self {
        DataSet {
            entries: BTreeMap::new(),
            dict,
            options,
        }
    }

    pub fn options(&self) -> &DataSetOptions {
        &self.options
    }

    pub fn dict(&self) -> &D {
        &self.dict
    }

    /// Whether elements are validated when added or changed.
    pub fn is_validating(&self) -> bool {
        self.options.validate
    }

    /// Enable or disable validation on mutation.
    ///
    /// Prefer [`suspend_validation`](DataSet::suspend_validation)
    /// to disable it for a limited scope.
    pub fn set_validation(&mut self, validate: bool) {
        self.options.validate = validate;
    }

    /// The transfer syntax UID of the data set.
    pub fn transfer_syntax(&self) -> &str {
        self.options.transfer_syntax_uid()
    }

    /// Change the transfer syntax of the data set,
    /// converting binary values to its byte order.
    pub fn set_transfer_syntax(&mut self, uid: impl Into<String>) {
        self.options.transfer_syntax = uid.into();
        self.reencode_all();
    }

    /// The character sets of text values in this data set:
    /// those of the _Specific Character Set_ element if present,
    /// the fallback character sets otherwise.
    pub fn effective_charset(&self) -> SpecificCharacterSet {
        self.entries
            .get(&tags::SPECIFIC_CHARACTER_SET)
            .and_then(|e| e.to_str().ok())
            .map(|code| SpecificCharacterSet::from_code(&code))
            .unwrap_or_else(|| self.options.fallback_charset.clone())
    }

    /// Disable validation until the returned guard is dropped,
    /// which restores the previous setting.
    ///
    /// The guard gives access to the data set in the meantime.
    /// Call [`validate`](DataSet::validate) afterwards
    /// to check all elements at once.
    ///
    /// ```
    /// # use dicom_dataset::DataSet;
    /// # use dicom_dictionary_std::tags;
    /// let mut dataset = DataSet::new_empty();
    /// {
    ///     let mut dataset = dataset.suspend_validation();
    ///     // single valued attribute, yet accepted
    ///     dataset.add(tags::PATIENT_ID, ["1", "2"])?;
    ///     assert!(dataset.validate().is_err());
    /// }
    /// assert!(dataset.is_validating());
    /// # Ok::<(), dicom_dataset::Error>(())
    /// ```
    pub fn suspend_validation(&mut self) -> ValidationSuspended<'_, D> {
        let previous = self.options.validate;
        self.options.validate = false;
        ValidationSuspended {
            dataset: self,
            previous,
        }
    }

    /// Run the given function with validation disabled,
    /// restoring the previous setting afterwards,
    /// also when the function panics.
    pub fn with_validation_suspended<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let mut guard = self.suspend_validation();
        f(&mut guard)
    }

    /// The number of elements in the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the elements in tag order.
    pub fn iter(&self) -> ::std::collections::btree_map::Values<'_, Tag, DataElement<D>> {
        self.entries.values()
    }

    /// Iterate over the tags of the elements in order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Find the concrete tag of an attribute without reserving anything.
    ///
    /// Tags which do not need a private block are returned as is.
    /// For private attributes,
    /// `None` is returned if no block is reserved for the creator.
    pub fn find_private_tag(&self, tag: &QualifiedTag) -> Option<Tag> {
        if !tag.needs_resolution() {
            return Some(tag.tag);
        }
        let creator = tag.creator()?;
        let group = tag.tag.group();
        self.find_private_block(group, creator)
            .map(|block| private_tag(group, block, tag.tag.element()))
    }

    fn find_private_block(&self, group: GroupNumber, creator: &str) -> Option<u16> {
        PRIVATE_BLOCKS.clone().find(|&block| {
            self.private_creator(Tag(group, block)).as_deref() == Some(creator.trim())
        })
    }

    /// The private creator identifier stored at the given tag.
    fn private_creator(&self, creator_tag: Tag) -> Option<String> {
        self.entries
            .get(&creator_tag)
            .and_then(|e| e.to_str().ok())
            .map(|creator| creator.trim().to_string())
    }

    /// Whether an element with this tag is present.
    ///
    /// Private attributes are looked up in the block of their creator,
    /// without reserving one.
    pub fn contains(&self, tag: impl Into<QualifiedTag>) -> bool {
        self.find_private_tag(&tag.into())
            .map_or(false, |tag| self.entries.contains_key(&tag))
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: impl Into<QualifiedTag>) -> Result<&DataElement<D>> {
        let tag = tag.into();
        Ok(self
            .find_private_tag(&tag)
            .and_then(|t| self.entries.get(&t))
            .context(NoSuchDataElementTagSnafu { tag: tag.tag })?)
    }

    /// Retrieve a particular DICOM element by its tag,
    /// if present.
    pub fn element_opt(&self, tag: impl Into<QualifiedTag>) -> Option<&DataElement<D>> {
        self.element(tag).ok()
    }

    /// Read the value at `index` of an element as the requested type.
    pub fn get_value<T: FromElement>(&self, tag: impl Into<QualifiedTag>, index: usize) -> Result<T> {
        self.element(tag)?.get(index)
    }

    /// Read all values of an element as the requested type.
    pub fn get_values<T: FromElement>(&self, tag: impl Into<QualifiedTag>) -> Result<Vec<T>> {
        self.element(tag)?.values()
    }

    /// Read the only value of an element.
    ///
    /// Fails if the element holds no values or more than one.
    pub fn get_single_value<T: FromElement>(&self, tag: impl Into<QualifiedTag>) -> Result<T> {
        let element = self.element(tag)?;
        let count = element.value_count()?;
        ensure!(
            count == 1,
            NotSingleValuedSnafu {
                tag: element.tag(),
                count
            }
        );
        element.get(0)
    }

    /// The whole value of an element as text.
    pub fn get_string(&self, tag: impl Into<QualifiedTag>) -> Result<String> {
        self.element(tag)?.to_str()
    }

    /// The number of values of an element,
    /// or the number of items of a sequence.
    pub fn get_value_count(&self, tag: impl Into<QualifiedTag>) -> Result<usize> {
        self.element(tag)?.value_count()
    }

    /// Read the value at `index` of an element as a variant of an enumeration.
    pub fn get_enum<E: FromStr>(&self, tag: impl Into<QualifiedTag>, index: usize) -> Result<E> {
        self.element(tag)?.get_enum(index)
    }

    pub fn get_value_or_default<T: FromElement>(
        &self,
        tag: impl Into<QualifiedTag>,
        index: usize,
        default: T,
    ) -> T {
        self.try_get_value(tag, index).unwrap_or(default)
    }

    pub fn get_single_value_or_default<T: FromElement>(
        &self,
        tag: impl Into<QualifiedTag>,
        default: T,
    ) -> T {
        self.try_get_single_value(tag).unwrap_or(default)
    }

    pub fn try_get_value<T: FromElement>(&self, tag: impl Into<QualifiedTag>, index: usize) -> Option<T> {
        self.get_value(tag, index).ok()
    }

    pub fn try_get_values<T: FromElement>(&self, tag: impl Into<QualifiedTag>) -> Option<Vec<T>> {
        self.get_values(tag).ok()
    }

    pub fn try_get_single_value<T: FromElement>(&self, tag: impl Into<QualifiedTag>) -> Option<T> {
        self.get_single_value(tag).ok()
    }

    /// The whole value of an element as text, if present.
    pub fn try_get_string(&self, tag: impl Into<QualifiedTag>) -> Option<String> {
        self.get_string(tag).ok()
    }

    /// The items of a sequence element.
    pub fn get_sequence(&self, tag: impl Into<QualifiedTag>) -> Result<&[DataSet<D>]> {
        let element = self.element(tag)?;
        Ok(element.items().context(WrongItemTypeSnafu {
            tag: element.tag(),
            found: element.value().kind(),
            expected: "sequence",
        })?)
    }

    pub fn try_get_sequence(&self, tag: impl Into<QualifiedTag>) -> Option<&[DataSet<D>]> {
        self.get_sequence(tag).ok()
    }

    /// The items of a sequence element, if it has at least one.
    pub fn try_get_non_empty_sequence(&self, tag: impl Into<QualifiedTag>) -> Option<&[DataSet<D>]> {
        self.try_get_sequence(tag).filter(|items| !items.is_empty())
    }

    /// Removes a DICOM element by its tag,
    /// reporting whether it was present.
    pub fn remove(&mut self, tag: impl Into<QualifiedTag>) -> bool {
        self.take(tag).is_ok()
    }

    /// Removes and returns a particular DICOM element by its tag.
    pub fn take(&mut self, tag: impl Into<QualifiedTag>) -> Result<DataElement<D>> {
        let tag = tag.into();
        let element = self
            .find_private_tag(&tag)
            .and_then(|t| self.entries.remove(&t))
            .context(NoSuchDataElementTagSnafu { tag: tag.tag })?;
        if element.tag() == tags::SPECIFIC_CHARACTER_SET {
            self.reencode_all();
        }
        Ok(element)
    }

    /// Remove the elements with the given tags,
    /// returning how many were present.
    pub fn remove_all<I, T>(&mut self, tags: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<QualifiedTag>,
    {
        tags.into_iter()
            .map(|tag| self.remove(tag))
            .filter(|&removed| removed)
            .count()
    }

    /// Remove the elements satisfying the predicate,
    /// returning how many were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&DataElement<D>) -> bool,
    {
        let before = self.entries.len();
        let had_charset = self.entries.contains_key(&tags::SPECIFIC_CHARACTER_SET);
        self.entries.retain(|_, element| !predicate(element));
        if had_charset && !self.entries.contains_key(&tags::SPECIFIC_CHARACTER_SET) {
            self.reencode_all();
        }
        before - self.entries.len()
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Bring all elements to the character sets and byte order
    /// of the data set, recursively.
    fn reencode_all(&mut self) {
        let charset = self.effective_charset();
        let endianness = self.options.endianness();
        trace!("Converting data set values to {:?}, {:?}", charset, endianness);
        let parent = self.options.clone();
        for element in self.entries.values_mut() {
            element.reencode(&charset, endianness);
            if let Some(items) = element.items_mut() {
                for item in items {
                    item.inherit(&parent, &charset);
                }
            }
        }
    }

    /// Take the options of the parent data set of a sequence item.
    ///
    /// Validation and group restrictions are not inherited.
    fn inherit(&mut self, parent: &DataSetOptions, charset: &SpecificCharacterSet) {
        self.options.equality = parent.equality;
        self.options.transfer_syntax = parent.transfer_syntax.clone();
        self.options.fallback_charset = charset.clone();
        self.reencode_all();
    }
}

impl<D> DataSet<D>
where
    D: DataDictionary,
    D: Clone,
{
    /// Retrieve a particular DICOM element by its keyword.
    pub fn element_by_name(&self, name: &str) -> Result<&DataElement<D>> {
        let tag = self.lookup_name(name)?;
        self.element(tag)
    }

    /// Removes a DICOM element by its keyword,
    /// reporting whether it was present.
    pub fn remove_by_name(&mut self, name: &str) -> Result<bool> {
        let tag = self.lookup_name(name)?;
        Ok(self.remove(tag))
    }

    fn lookup_name(&self, name: &str) -> Result<Tag> {
        Ok(self
            .dict
            .by_name(name)
            .context(NoSuchAttributeNameSnafu { name })
            .map(|e| e.tag())?)
    }

    /// Add a value to the data set,
    /// with the value representation of the attribute in the dictionary.
    ///
    /// Fails if an element with this tag already exists,
    /// if the tag is unknown,
    /// or if the new element does not pass validation.
    /// Private attributes are placed in the block of their creator,
    /// which is reserved if needed.
    pub fn add(&mut self, tag: impl Into<QualifiedTag>, value: impl Into<PrimitiveValue>) -> Result<()> {
        self.add_value(tag.into(), None, value.into(), false)?;
        Ok(())
    }

    /// Add a value to the data set with the given value representation.
    pub fn add_with_vr(
        &mut self,
        tag: impl Into<QualifiedTag>,
        vr: VR,
        value: impl Into<PrimitiveValue>,
    ) -> Result<()> {
        self.add_value(tag.into(), Some(vr), value.into(), false)?;
        Ok(())
    }

    /// Add a value to the data set,
    /// replacing any element with the same tag.
    pub fn add_or_update(
        &mut self,
        tag: impl Into<QualifiedTag>,
        value: impl Into<PrimitiveValue>,
    ) -> Result<()> {
        self.add_value(tag.into(), None, value.into(), true)?;
        Ok(())
    }

    pub fn add_or_update_with_vr(
        &mut self,
        tag: impl Into<QualifiedTag>,
        vr: VR,
        value: impl Into<PrimitiveValue>,
    ) -> Result<()> {
        self.add_value(tag.into(), Some(vr), value.into(), true)?;
        Ok(())
    }

    fn add_value(
        &mut self,
        tag: QualifiedTag,
        vr: Option<VR>,
        value: PrimitiveValue,
        replace: bool,
    ) -> Result<Option<DataElement<D>>> {
        let vr = match vr {
            Some(vr) => vr,
            None => self.select_vr(&tag, value.value_type())?,
        };
        self.with_private_tag(&tag, |obj, tag| {
            ensure!(
                replace || !obj.entries.contains_key(&tag),
                DuplicateTagSnafu { tag }
            );
            let mut element = DataElement::empty(tag, vr)
                .with_encoding(obj.effective_charset(), obj.options.endianness());
            element.append(value)?;
            obj.insert(element, replace)
        })
    }

    /// Run `f` with the concrete tag of an attribute.
    ///
    /// A private block reserved for the attribute is released
    /// if `f` fails.
    fn with_private_tag<T, F>(&mut self, tag: &QualifiedTag, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self, Tag) -> Result<T>,
    {
        if let Some(found) = self.find_private_tag(tag) {
            return f(self, found);
        }
        let concrete = self.get_private_tag(tag)?;
        let result = f(self, concrete);
        if result.is_err() {
            if let Some(creator) = concrete.private_creator_tag() {
                debug!("Releasing private block {} of `{}`", creator, tag);
                self.entries.remove(&creator);
            }
        }
        result
    }

    /// Choose the value representation of a new element:
    /// the first one declared for the attribute which fits the value type,
    /// or else the first one declared.
    fn select_vr(&self, tag: &QualifiedTag, value_type: ValueType) -> Result<VR> {
        let entry = match tag.creator() {
            Some(creator) if tag.tag.is_private() => self.dict.by_private_tag(tag.tag, creator),
            _ if tag.tag.is_private() && !tag.tag.is_private_creator() => None,
            _ => self.dict.by_tag(tag.tag),
        };
        let candidates = entry.context(UnknownTagSnafu { tag: tag.clone() })?.vr().candidates();
        let fits = |vr: &VR| match value_type {
            ValueType::Empty => true,
            t if t.is_textual() => vr.is_string(),
            t => vr.native_type() == t,
        };
        Ok(candidates
            .iter()
            .copied()
            .find(fits)
            .or_else(|| candidates.first().copied())
            .unwrap_or(VR::UN))
    }

    /// Insert a data element, replacing (and returning) any
    /// previous element of the same attribute.
    ///
    /// The element is converted to the character sets and byte order
    /// of the data set, and validated if validation is enabled.
    pub fn put(&mut self, element: DataElement<D>) -> Result<Option<DataElement<D>>> {
        self.insert(element, true)
    }

    /// Insert a data element,
    /// failing if an element with the same tag exists.
    pub fn add_element(&mut self, element: DataElement<D>) -> Result<()> {
        self.insert(element, false)?;
        Ok(())
    }

    /// Add a sequence of the given items.
    ///
    /// The items take the transfer syntax and character sets of this data set.
    pub fn add_sequence(&mut self, tag: impl Into<QualifiedTag>, items: Vec<DataSet<D>>) -> Result<()> {
        self.with_private_tag(&tag.into(), |obj, tag| {
            obj.insert(DataElement::new_sequence(tag, items), false)
        })?;
        Ok(())
    }

    pub fn add_or_update_sequence(
        &mut self,
        tag: impl Into<QualifiedTag>,
        items: Vec<DataSet<D>>,
    ) -> Result<()> {
        self.with_private_tag(&tag.into(), |obj, tag| {
            obj.insert(DataElement::new_sequence(tag, items), true)
        })?;
        Ok(())
    }

    /// Add encapsulated pixel data fragments.
    pub fn add_pixel_sequence(&mut self, tag: Tag, fragments: Vec<Vec<u8>>) -> Result<()> {
        self.insert(DataElement::new_pixel_sequence(tag, VR::OB, fragments), false)?;
        Ok(())
    }

    /// Add an element whose value is fetched on first access.
    pub fn add_bulk_data(&mut self, tag: impl Into<QualifiedTag>, vr: VR, bulk: BulkData) -> Result<()> {
        self.with_private_tag(&tag.into(), |obj, tag| {
            obj.insert(DataElement::new_bulk_data(tag, vr, bulk), false)
        })?;
        Ok(())
    }

    /// Append values to an existing element.
    ///
    /// With validation enabled,
    /// fails if the element would hold more values
    /// than the attribute admits.
    pub fn append(&mut self, tag: impl Into<QualifiedTag>, value: impl Into<PrimitiveValue>) -> Result<()> {
        let tag = tag.into();
        let mut element = self.element(tag)?.clone();
        element.append(value)?;
        if self.options.validate && element.is_resolved() {
            element.validate_content()?;
            if let Some(vm) = self.multiplicity_of(&element) {
                let count = element.count() as u32;
                ensure!(
                    count <= vm.max,
                    MultiplicitySnafu {
                        tag: element.tag(),
                        vr: element.vr(),
                        count,
                        vm
                    }
                );
            }
        }
        let tag = element.tag();
        self.entries.insert(tag, element);
        if tag == tags::SPECIFIC_CHARACTER_SET {
            self.reencode_all();
        }
        Ok(())
    }

    fn insert(&mut self, mut element: DataElement<D>, replace: bool) -> Result<Option<DataElement<D>>> {
        let tag = element.tag();
        if let Some(group) = self.options.group_restriction {
            ensure!(tag.group() == group, TagNotAllowedSnafu { tag, group });
        }
        ensure!(
            replace || !self.entries.contains_key(&tag),
            DuplicateTagSnafu { tag }
        );

        let charset = self.effective_charset();
        element.reencode(&charset, self.options.endianness());
        if let Some(items) = element.items_mut() {
            for item in items {
                item.inherit(&self.options, &charset);
            }
        }
        if self.options.validate {
            self.check(&element)?;
        }

        let previous = self.entries.insert(tag, element);
        if tag == tags::SPECIFIC_CHARACTER_SET {
            self.reencode_all();
        }
        Ok(previous)
    }

    /// The value multiplicity to check the element against, if any.
    fn multiplicity_of(&self, element: &DataElement<D>) -> Option<ValueMultiplicity> {
        let tag = element.tag();
        if tag.is_private() || !element.vr().info().validates_count {
            return None;
        }
        self.dict.by_tag(tag).map(|entry| entry.vm())
    }

    fn check(&self, element: &DataElement<D>) -> Result<()> {
        if !element.is_resolved() {
            return Ok(());
        }
        element.validate_content()?;
        if let Some(vm) = self.multiplicity_of(element) {
            validate_multiplicity(element.tag(), element.vr(), element.count() as u32, vm)?;
        }
        Ok(())
    }

    /// Check all elements against the rules of their value representation
    /// and the value multiplicity of their attribute,
    /// recursing into sequence items.
    ///
    /// This check does not depend on whether validation is enabled.
    pub fn validate(&self) -> Result<()> {
        for element in self.entries.values() {
            if let Some(items) = element.items() {
                for item in items {
                    item.validate()?;
                }
            }
            self.check(element)?;
        }
        Ok(())
    }

    /// Find the concrete tag of an attribute,
    /// reserving a private block for its creator if needed.
    ///
    /// Fails if all blocks of the group are taken by other creators.
    pub fn get_private_tag(&mut self, tag: &QualifiedTag) -> Result<Tag> {
        if let Some(found) = self.find_private_tag(tag) {
            return Ok(found);
        }
        let creator = tag.creator().unwrap_or_default();
        let block = self.reserve_private_block(tag.tag.group(), creator)?;
        Ok(private_tag(tag.tag.group(), block, tag.tag.element()))
    }

    /// Reserve a private block of the group for the given creator,
    /// or find the block already reserved.
    fn reserve_private_block(&mut self, group: GroupNumber, creator: &str) -> Result<u16> {
        if let Some(block) = self.find_private_block(group, creator) {
            return Ok(block);
        }
        let block = PRIVATE_BLOCKS
            .clone()
            .find(|&block| !self.entries.contains_key(&Tag(group, block)))
            .context(PrivateBlocksExhaustedSnafu { group, creator })?;
        debug!(
            "Reserving private block {:02X} of group {:04X} for `{}`",
            block, group, creator
        );
        let mut element = DataElement::empty(Tag(group, block), VR::LO)
            .with_encoding(self.effective_charset(), self.options.endianness());
        element.append(creator.trim())?;
        self.insert(element, false)?;
        Ok(block)
    }

    /// Copy all elements into another data set,
    /// replacing elements with the same tag.
    ///
    /// Private elements are placed in the block
    /// that their creator has in the destination.
    pub fn copy_to(&self, destination: &mut DataSet<D>) -> Result<()> {
        for element in self.entries.values() {
            self.copy_element(element, destination)?;
        }
        Ok(())
    }

    /// Copy the elements with the given tags into another data set,
    /// skipping those which are not present.
    pub fn copy_tags_to<I, T>(&self, destination: &mut DataSet<D>, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<QualifiedTag>,
    {
        for tag in tags {
            if let Some(element) = self.element_opt(tag) {
                self.copy_element(element, destination)?;
            }
        }
        Ok(())
    }

    /// Copy the elements whose tags match the mask into another data set.
    pub fn copy_matching_to(&self, destination: &mut DataSet<D>, mask: &TagMask) -> Result<()> {
        for element in self.entries.values().filter(|e| mask.matches(e.tag())) {
            self.copy_element(element, destination)?;
        }
        Ok(())
    }

    fn copy_element(&self, element: &DataElement<D>, destination: &mut DataSet<D>) -> Result<()> {
        let tag = element.tag();
        if tag.is_private_creator() {
            if let Some(creator) = self.private_creator(tag) {
                destination.reserve_private_block(tag.group(), &creator)?;
                return Ok(());
            }
        }
        let creator = tag
            .private_creator_tag()
            .and_then(|creator_tag| self.private_creator(creator_tag));
        let mut element = element.clone();
        if let Some(creator) = creator {
            let block = destination.reserve_private_block(tag.group(), &creator)?;
            element.set_tag(private_tag(tag.group(), block, tag.element()));
        }
        destination.put(element)?;
        Ok(())
    }

    /// Gather the functional group attributes which apply to a frame
    /// of a multi-frame image into a new data set.
    ///
    /// The attributes of the first item of every functional group sequence
    /// in the shared and the per-frame functional groups are collected,
    /// per-frame ones taking precedence.
    /// _Referenced Image Sequence_ is copied as a whole.
    /// Missing or empty sequences are skipped.
    pub fn functional_group_values(&self, frame: usize) -> Result<DataSet<D>> {
        let options = DataSetOptions {
            group_restriction: None,
            fallback_charset: self.effective_charset(),
            ..self.options.clone()
        };
        let mut values = DataSet::new_empty_with_dict_and_options(self.dict.clone(), options);

        let shared = self
            .try_get_non_empty_sequence(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE)
            .and_then(|items| items.first());
        let per_frame = self
            .try_get_non_empty_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
            .and_then(|items| items.get(frame));

        for group in shared.into_iter().chain(per_frame) {
            for sequence in group.iter().filter(|e| e.items().is_some()) {
                if sequence.tag() == tags::REFERENCED_IMAGE_SEQUENCE {
                    values.put(sequence.clone())?;
                } else if let Some(item) = sequence.items().and_then(|items| items.first()) {
                    for element in item {
                        values.put(element.clone())?;
                    }
                }
            }
        }
        Ok(values)
    }
}

/// The tag of a private attribute in the given block.
fn private_tag(group: GroupNumber, block: u16, element: u16) -> Tag {
    Tag(group, (block << 8) | (element & 0x00FF))
}

/// A data set with validation suspended,
/// obtained from [`DataSet::suspend_validation`].
///
/// Dropping it restores the previous validation setting.
#[derive(Debug)]
pub struct ValidationSuspended<'a, D = StandardDataDictionary> {
    dataset: &'a mut DataSet<D>,
    previous: bool,
}

impl<D> Deref for ValidationSuspended<'_, D> {
    type Target = DataSet<D>;

    fn deref(&self) -> &Self::Target {
        self.dataset
    }
}

impl<D> DerefMut for ValidationSuspended<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.dataset
    }
}

impl<D> Drop for ValidationSuspended<'_, D> {
    fn drop(&mut self) {
        self.dataset.options.validate = self.previous;
    }
}

impl<'a, D> IntoIterator for &'a DataSet<D> {
    type Item = &'a DataElement<D>;
    type IntoIter = ::std::collections::btree_map::Values<'a, Tag, DataElement<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl<D> IntoIterator for DataSet<D> {
    type Item = DataElement<D>;
    type IntoIter = Iter<D>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Base iterator type for an in-memory data set.
#[derive(Debug)]
pub struct Iter<D> {
    inner: ::std::collections::btree_map::IntoIter<Tag, DataElement<D>>,
}

impl<D> Iterator for Iter<D> {
    type Item = DataElement<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| x.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn count(self) -> usize {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataError, Error};
    use dicom_core::validation::ValidationError;
    use dicom_core::value::PersonName;
    use dicom_dictionary_std::uids;
    use dicom_encoding::Endianness;

    fn patient() -> DataSet {
        let mut obj = DataSet::new_empty();
        obj.add(tags::PATIENT_NAME, PersonName::new("Doe", "John"))
            .unwrap();
        obj.add(tags::PATIENT_ID, "12345").unwrap();
        obj
    }

    #[test]
    fn dataset_get() {
        let obj = patient();
        let name: PersonName = obj.get_single_value(tags::PATIENT_NAME).unwrap();
        assert_eq!(name.last(), "Doe");
        assert_eq!(name.first(), "John");
        assert_eq!(name.middle(), "");
        assert_eq!(obj.get_string(tags::PATIENT_NAME).unwrap(), "Doe^John");
        assert_eq!(obj.element(tags::PATIENT_NAME).unwrap().vr(), VR::PN);
        assert_eq!(
            obj.element_by_name("PatientID").unwrap().to_str().unwrap(),
            "12345"
        );
        assert!(matches!(
            obj.element(tags::STUDY_DATE),
            Err(Error::Data {
                source: DataError::NoSuchDataElementTag {
                    tag: tags::STUDY_DATE,
                    ..
                },
            })
        ));
        assert!(obj.element_by_name("NotAnAttribute").is_err());
    }

    #[test]
    fn dataset_add_duplicate() {
        let mut obj = patient();
        assert!(matches!(
            obj.add(tags::PATIENT_ID, "54321"),
            Err(Error::Data {
                source: DataError::DuplicateTag { .. },
            })
        ));
        obj.add_or_update(tags::PATIENT_ID, "54321").unwrap();
        assert_eq!(obj.get_string(tags::PATIENT_ID).unwrap(), "54321");
    }

    #[test]
    fn dataset_decimal_string() {
        let mut obj = DataSet::new_empty();
        obj.add(tags::SLICE_THICKNESS, 1.0_f32).unwrap();
        assert_eq!(obj.get_string(tags::SLICE_THICKNESS).unwrap(), "1");
        assert_eq!(obj.get_single_value::<f64>(tags::SLICE_THICKNESS).unwrap(), 1.0);
    }

    #[test]
    fn dataset_vr_from_value_type() {
        let mut obj = DataSet::new_empty();
        obj.add(tags::SMALLEST_IMAGE_PIXEL_VALUE, -5_i16).unwrap();
        assert_eq!(
            obj.element(tags::SMALLEST_IMAGE_PIXEL_VALUE).unwrap().vr(),
            VR::SS
        );
        obj.add(tags::ROWS, 512_u16).unwrap();
        assert_eq!(obj.element(tags::ROWS).unwrap().vr(), VR::US);
        assert!(matches!(
            obj.add(Tag(0x0009, 0x1001), "x"),
            Err(Error::Data {
                source: DataError::UnknownTag { .. },
            })
        ));
        assert!(matches!(
            obj.add(QualifiedTag::private(0x0011, 0x0001, "ACME 1.0"), "x"),
            Err(Error::Data {
                source: DataError::UnknownTag { .. },
            })
        ));
    }

    #[test]
    fn dataset_with_other_dictionary() {
        use dicom_core::dictionary::stub::StubDataDictionary;

        let mut obj = DataSet::new_empty_with_dict(StubDataDictionary);
        assert!(matches!(
            obj.add(tags::PATIENT_ID, "1"),
            Err(Error::Data {
                source: DataError::UnknownTag { .. },
            })
        ));
        obj.add_with_vr(tags::PATIENT_ID, VR::LO, ["1", "2"]).unwrap();
        obj.validate().unwrap();
        assert_eq!(obj.get_value_count(tags::PATIENT_ID).unwrap(), 2);
    }

    #[test]
    fn single_value_of_multi_valued_element() {
        let mut obj = DataSet::new_empty();
        obj.add(tags::IMAGE_TYPE, ["ORIGINAL", "PRIMARY"]).unwrap();
        assert_eq!(obj.get_value_count(tags::IMAGE_TYPE).unwrap(), 2);
        assert!(matches!(
            obj.get_single_value::<String>(tags::IMAGE_TYPE),
            Err(Error::Data {
                source: crate::DataError::NotSingleValued { count: 2, .. },
            })
        ));
        assert_eq!(
            obj.get_value::<String>(tags::IMAGE_TYPE, 1).unwrap(),
            "PRIMARY"
        );
        assert_eq!(
            obj.get_single_value_or_default(tags::IMAGE_TYPE, String::from("none")),
            "none"
        );
        assert_eq!(obj.try_get_value::<String>(tags::IMAGE_TYPE, 2), None);
    }

    #[test]
    fn multiplicity_is_validated() {
        let mut obj = patient();
        assert!(matches!(
            obj.append(tags::PATIENT_ID, "67890"),
            Err(Error::Validation {
                source: ValidationError::Multiplicity { count: 2, .. },
            })
        ));
        assert_eq!(obj.get_value_count(tags::PATIENT_ID).unwrap(), 1);

        let mut obj = DataSet::new_empty();
        assert!(obj.add(tags::IMAGE_TYPE, "ORIGINAL").is_err());
        obj.add(tags::IMAGE_TYPE, ["ORIGINAL", "PRIMARY"]).unwrap();
        obj.append(tags::IMAGE_TYPE, "AXIAL").unwrap();
        assert_eq!(obj.get_value_count(tags::IMAGE_TYPE).unwrap(), 3);
    }

    #[test]
    fn private_tags_are_not_validated_for_multiplicity() {
        let mut obj = DataSet::new_empty();
        let tag = QualifiedTag::private(0x0029, 0x0010, "ACME 1.0");
        obj.add_with_vr(tag.clone(), VR::LO, "a").unwrap();
        obj.append(tag.clone(), "b").unwrap();
        obj.append(tag.clone(), "c").unwrap();
        assert_eq!(obj.get_value_count(tag).unwrap(), 3);
    }

    #[test]
    fn content_is_validated() {
        let mut obj = DataSet::new_empty();
        assert!(matches!(
            obj.add(tags::MODALITY, "ct"),
            Err(Error::Validation {
                source: ValidationError::InvalidContent { vr: VR::CS, .. },
            })
        ));
        assert!(!obj.contains(tags::MODALITY));
        obj.add(tags::MODALITY, "CT").unwrap();
    }

    #[test]
    fn private_tag_isolation() {
        let mut obj = DataSet::new_empty();
        let acme = QualifiedTag::private(0x0029, 0x0001, "ACME 1.0");
        let other = QualifiedTag::private(0x0029, 0x0001, "OTHER");
        assert!(!obj.contains(acme.clone()));

        obj.add_with_vr(acme.clone(), VR::LO, "acme").unwrap();
        assert!(obj.contains(acme.clone()));
        assert!(!obj.contains(other.clone()));

        obj.add_with_vr(other.clone(), VR::LO, "other").unwrap();
        assert_eq!(obj.find_private_tag(&acme), Some(Tag(0x0029, 0x1001)));
        assert_eq!(obj.find_private_tag(&other), Some(Tag(0x0029, 0x1101)));
        assert_eq!(obj.get_string(Tag(0x0029, 0x0010)).unwrap(), "ACME 1.0");
        assert_eq!(obj.get_string(Tag(0x0029, 0x0011)).unwrap(), "OTHER");
        assert_eq!(obj.get_string(acme).unwrap(), "acme");
        assert_eq!(obj.get_string(other).unwrap(), "other");
    }

    #[test]
    fn private_blocks_exhausted() {
        let mut obj = DataSet::new_empty();
        for block in 0x10..=0xFF_u16 {
            let creator = format!("CREATOR {}", block);
            obj.get_private_tag(&QualifiedTag::private(0x0011, 0x0001, creator))
                .unwrap();
        }
        assert!(matches!(
            obj.get_private_tag(&QualifiedTag::private(0x0011, 0x0001, "ONE MORE")),
            Err(Error::Data {
                source: DataError::PrivateBlocksExhausted { group: 0x0011, .. },
            })
        ));
        // reserved blocks are still found
        assert_eq!(
            obj.get_private_tag(&QualifiedTag::private(0x0011, 0x0002, "CREATOR 16"))
                .unwrap(),
            Tag(0x0011, 0x1002)
        );
    }

    #[test]
    fn failed_private_addition_releases_its_block() {
        let mut obj = DataSet::new_empty();
        let acme = QualifiedTag::private(0x0011, 0x0001, "ACME 1.0");
        let other = QualifiedTag::private(0x0011, 0x0001, "OTHER");

        assert!(obj.add_with_vr(acme.clone(), VR::US, "text").is_err());
        assert!(obj.add_with_vr(acme.clone(), VR::CS, "lower case").is_err());
        assert!(obj.is_empty());
        assert!(!obj.contains(acme.clone()));

        obj.add_with_vr(other.clone(), VR::LO, "other").unwrap();
        assert_eq!(obj.find_private_tag(&other), Some(Tag(0x0011, 0x1001)));

        // a block already in use stays reserved
        obj.add_with_vr(acme.clone(), VR::LO, "acme").unwrap();
        assert!(obj.add_with_vr(acme.clone(), VR::LO, "again").is_err());
        assert_eq!(obj.find_private_tag(&acme), Some(Tag(0x0011, 0x1101)));
        assert_eq!(obj.get_string(Tag(0x0011, 0x0011)).unwrap(), "ACME 1.0");
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn suspension_restores_previous_setting() {
        let mut obj = DataSet::new_empty();
        obj.with_validation_suspended(|obj| {
            obj.add(tags::PATIENT_ID, ["1", "2"]).unwrap();
            assert!(!obj.is_validating());
            {
                let nested = obj.suspend_validation();
                assert!(!nested.is_validating());
            }
            assert!(!obj.is_validating());
        });
        assert!(obj.is_validating());
        assert!(obj.validate().is_err());

        let mut obj = DataSet::new_empty_with_options(DataSetOptions::new().validate(false));
        drop(obj.suspend_validation());
        assert!(!obj.is_validating());
    }

    #[test]
    fn suspension_restored_on_panic() {
        let mut obj = DataSet::new_empty();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            obj.with_validation_suspended(|_| panic!("reader failure"));
        }));
        assert!(result.is_err());
        assert!(obj.is_validating());
    }

    #[test]
    fn content_equality_ignores_insertion_order() {
        let mut a = DataSet::new_empty();
        a.add(tags::PATIENT_ID, "1").unwrap();
        a.add(tags::MODALITY, "MR").unwrap();
        a.add(tags::ROWS, 256_u16).unwrap();

        let mut b = DataSet::new_empty();
        b.add(tags::ROWS, 256_u16).unwrap();
        b.add(tags::PATIENT_ID, "1").unwrap();
        b.add(tags::MODALITY, "MR").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.tags().collect::<Vec<_>>(), b.tags().collect::<Vec<_>>());

        b.add_or_update(tags::MODALITY, "CT").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn identity_equality() {
        let options = DataSetOptions::new().equality(EqualityMode::Identity);
        let a = DataSet::new_empty_with_options(options.clone());
        let b = DataSet::new_empty_with_options(options);
        assert_eq!(a, a);
        assert_ne!(a, b);
    }

    #[test]
    fn multi_charset_person_name() {
        let mut obj = DataSet::new_empty();
        obj.add(tags::SPECIFIC_CHARACTER_SET, "\\ISO 2022 IR 87").unwrap();
        let bytes = b"Yamada^Tarou=\x1b$B;3ED\x1b(B^\x1b$BB@O:\x1b(B=\x1b$B$d$^$@\x1b(B^\x1b$B$?$m$&\x1b(B";
        let element = DataElement::from_bytes(tags::PATIENT_NAME, VR::PN, bytes.to_vec())
            .with_encoding(obj.effective_charset(), Endianness::Little);
        obj.put(element).unwrap();
        assert_eq!(
            obj.get_string(tags::PATIENT_NAME).unwrap(),
            "Yamada^Tarou=山田^太郎=やまだ^たろう"
        );
    }

    #[test]
    fn changing_charset_transcodes_values() {
        let mut obj = DataSet::new_empty();
        obj.add(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 192").unwrap();
        obj.add(tags::PATIENT_NAME, "Buc^Jérôme").unwrap();
        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().bytes().unwrap(),
            "Buc^Jérôme".as_bytes()
        );

        obj.add_or_update(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 100")
            .unwrap();
        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().bytes().unwrap(),
            b"Buc^J\xe9r\xf4me"
        );
        assert_eq!(obj.get_string(tags::PATIENT_NAME).unwrap(), "Buc^Jérôme");
    }

    #[test]
    fn text_added_before_charset_keeps_its_characters() {
        let mut obj = DataSet::new_empty();
        obj.add(tags::PATIENT_NAME, "Buc^Jérôme").unwrap();
        obj.add(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 192").unwrap();
        assert_eq!(obj.get_string(tags::PATIENT_NAME).unwrap(), "Buc^Jérôme");
        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().bytes().unwrap(),
            "Buc^Jérôme".as_bytes()
        );

        obj.add(tags::OTHER_PATIENT_NAMES, "Müller^Jürgen").unwrap();
        obj.append(tags::OTHER_PATIENT_NAMES, "Øster^Åse").unwrap();
        assert_eq!(
            obj.get_values::<String>(tags::OTHER_PATIENT_NAMES).unwrap(),
            vec!["Müller^Jürgen", "Øster^Åse"]
        );
    }

    #[test]
    fn items_encode_text_with_the_charset_of_their_parent() {
        let mut item = DataSet::new_empty();
        item.add(tags::PATIENT_NAME, "Gómez^María").unwrap();

        let mut obj = DataSet::new_empty();
        obj.add(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 192").unwrap();
        obj.add_sequence(tags::REFERENCED_IMAGE_SEQUENCE, vec![item])
            .unwrap();

        let items = obj.get_sequence(tags::REFERENCED_IMAGE_SEQUENCE).unwrap();
        assert_eq!(items[0].get_string(tags::PATIENT_NAME).unwrap(), "Gómez^María");
        assert_eq!(
            items[0].element(tags::PATIENT_NAME).unwrap().bytes().unwrap(),
            "Gómez^María".as_bytes()
        );
    }

    #[test]
    fn big_endian_data_set() {
        let options = DataSetOptions::new().transfer_syntax(uids::EXPLICIT_VR_BIG_ENDIAN);
        let mut obj = DataSet::new_empty_with_options(options);
        obj.add(tags::ROWS, 0x0102_u16).unwrap();
        let rows = obj.element(tags::ROWS).unwrap();
        assert_eq!(rows.bytes().unwrap(), &[0x01, 0x02]);
        assert_eq!(obj.get_single_value::<u16>(tags::ROWS).unwrap(), 0x0102);

        obj.set_transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN);
        let rows = obj.element(tags::ROWS).unwrap();
        assert_eq!(rows.bytes().unwrap(), &[0x02, 0x01]);
        assert_eq!(obj.get_single_value::<u16>(tags::ROWS).unwrap(), 0x0102);
    }

    #[test]
    fn file_meta_group_restriction() {
        let mut meta = DataSet::new_file_meta();
        meta.add(tags::TRANSFER_SYNTAX_UID, uids::EXPLICIT_VR_LITTLE_ENDIAN)
            .unwrap();
        assert!(matches!(
            meta.add(tags::PATIENT_ID, "1"),
            Err(Error::Validation {
                source: ValidationError::TagNotAllowed { group: 0x0002, .. },
            })
        ));
    }

    #[test]
    fn sequences() {
        let mut item = DataSet::new_empty();
        item.add(tags::REFERENCED_SOP_INSTANCE_UID, "1.2.3.4").unwrap();
        let mut obj = DataSet::new_empty();
        obj.add_sequence(tags::REFERENCED_IMAGE_SEQUENCE, vec![item])
            .unwrap();

        let items = obj.get_sequence(tags::REFERENCED_IMAGE_SEQUENCE).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0]
                .get_string(tags::REFERENCED_SOP_INSTANCE_UID)
                .unwrap(),
            "1.2.3.4"
        );
        assert_eq!(obj.get_value_count(tags::REFERENCED_IMAGE_SEQUENCE).unwrap(), 1);

        obj.add(tags::PATIENT_ID, "1").unwrap();
        assert!(matches!(
            obj.get_sequence(tags::PATIENT_ID),
            Err(Error::Data {
                source: DataError::WrongItemType { .. },
            })
        ));
        assert!(obj.try_get_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE).is_none());

        obj.add_sequence(tags::PIXEL_MEASURES_SEQUENCE, Vec::new())
            .unwrap();
        assert!(obj.try_get_sequence(tags::PIXEL_MEASURES_SEQUENCE).is_some());
        assert!(obj
            .try_get_non_empty_sequence(tags::PIXEL_MEASURES_SEQUENCE)
            .is_none());
    }

    #[test]
    fn remove_elements() {
        let mut obj = patient();
        obj.add(tags::MODALITY, "CT").unwrap();
        assert!(obj.remove(tags::MODALITY));
        assert!(!obj.remove(tags::MODALITY));
        assert!(obj.remove_by_name("PatientID").unwrap());
        assert_eq!(obj.len(), 1);

        let mut obj = patient();
        obj.add(tags::MODALITY, "CT").unwrap();
        assert_eq!(obj.remove_all([tags::PATIENT_ID, tags::MODALITY, tags::ROWS]), 2);
        assert_eq!(obj.remove_where(|e| e.vr() == VR::PN), 1);
        assert!(obj.is_empty());

        let mut obj = patient();
        let taken = obj.take(tags::PATIENT_ID).unwrap();
        assert_eq!(taken.to_str().unwrap(), "12345");
        assert!(obj.take(tags::PATIENT_ID).is_err());
        obj.clear();
        assert!(obj.is_empty());
    }

    #[test]
    fn copy_selected_elements() {
        let mut source = patient();
        source.add(tags::MODALITY, "CT").unwrap();
        source.add(tags::ROWS, 512_u16).unwrap();

        let mut destination = DataSet::new_empty();
        source
            .copy_matching_to(&mut destination, &"(0010,xxxx)".parse().unwrap())
            .unwrap();
        assert_eq!(
            destination.tags().collect::<Vec<_>>(),
            vec![tags::PATIENT_NAME, tags::PATIENT_ID]
        );

        let mut destination = DataSet::new_empty();
        source
            .copy_tags_to(&mut destination, [tags::ROWS, tags::STUDY_DATE])
            .unwrap();
        assert_eq!(destination.tags().collect::<Vec<_>>(), vec![tags::ROWS]);

        let mut destination = DataSet::new_empty();
        source.copy_to(&mut destination).unwrap();
        assert_eq!(destination, source);
    }

    #[test]
    fn copy_private_elements_to_their_creator_block() {
        let tag = QualifiedTag::private(0x0029, 0x0001, "ACME 1.0");
        let mut source = DataSet::new_empty();
        source.add_with_vr(tag.clone(), VR::LO, "acme").unwrap();

        let mut destination = DataSet::new_empty();
        destination
            .add_with_vr(QualifiedTag::private(0x0029, 0x0001, "OTHER"), VR::LO, "other")
            .unwrap();
        source.copy_to(&mut destination).unwrap();

        assert_eq!(destination.find_private_tag(&tag), Some(Tag(0x0029, 0x1101)));
        assert_eq!(destination.get_string(tag).unwrap(), "acme");
        assert_eq!(destination.get_string(Tag(0x0029, 0x1001)).unwrap(), "other");
    }

    #[test]
    fn lenient_functional_groups_of_frame() {
        fn group(tag: Tag, element: DataSet) -> DataSet {
            let mut group = DataSet::new_empty();
            group.add_sequence(tag, vec![element]).unwrap();
            group
        }

        let mut spacing = DataSet::new_empty();
        spacing.add(tags::PIXEL_SPACING, [0.5_f64, 0.5]).unwrap();
        spacing.add(tags::SLICE_THICKNESS, 2.0_f64).unwrap();
        let shared = group(tags::PIXEL_MEASURES_SEQUENCE, spacing);

        let frames: Vec<DataSet> = (0..2)
            .map(|i| {
                let mut position = DataSet::new_empty();
                position
                    .add(tags::IMAGE_POSITION_PATIENT, [0.0, 0.0, i as f64])
                    .unwrap();
                let mut frame = group(tags::PLANE_POSITION_SEQUENCE, position);
                let mut thickness = DataSet::new_empty();
                thickness.add(tags::SLICE_THICKNESS, 3.0_f64).unwrap();
                frame
                    .add_sequence(tags::PIXEL_MEASURES_SEQUENCE, vec![thickness])
                    .unwrap();
                frame
            })
            .collect();

        let mut obj = DataSet::new_empty();
        obj.add_sequence(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE, vec![shared])
            .unwrap();
        obj.add_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, frames)
            .unwrap();

        let values = obj.functional_group_values(1).unwrap();
        assert_eq!(
            values.get_values::<f64>(tags::IMAGE_POSITION_PATIENT).unwrap(),
            vec![0.0, 0.0, 1.0]
        );
        assert_eq!(
            values.get_values::<f64>(tags::PIXEL_SPACING).unwrap(),
            vec![0.5, 0.5]
        );
        assert_eq!(
            values.get_single_value::<f64>(tags::SLICE_THICKNESS).unwrap(),
            3.0
        );

        // frame out of range: shared groups only
        let values = obj.functional_group_values(7).unwrap();
        assert!(!values.contains(tags::IMAGE_POSITION_PATIENT));
        assert_eq!(
            values.get_single_value::<f64>(tags::SLICE_THICKNESS).unwrap(),
            2.0
        );
    }

    #[test]
    fn unresolved_bulk_data_is_not_validated() {
        let mut obj = DataSet::new_empty();
        let bulk = BulkData::new("http://example.com/bulk/2", |_| Ok(b"A\\B\\C ".to_vec()));
        obj.add_bulk_data(tags::PATIENT_ID, VR::LO, bulk).unwrap();
        assert_eq!(obj.element(tags::PATIENT_ID).unwrap().count(), 0);
        assert_eq!(obj.get_value_count(tags::PATIENT_ID).unwrap(), 3);
        assert!(obj.validate().is_err());
    }
}
