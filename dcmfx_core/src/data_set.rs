//! A DICOM data set, defined as a map of data element tags to data element
//! values.

#[cfg(feature = "std")]
pub mod print;

#[cfg(feature = "std")]
use std::collections::{BTreeMap, btree_map};

#[cfg(not(feature = "std"))]
use alloc::{
  collections::{BTreeMap, btree_map},
  format,
  string::{String, ToString},
  vec::Vec,
};

use crate::data_element_value::{age_string, date, date_time, person_name, time};
use crate::data_set_path::DataSetPathEntry;
use crate::{
  DataElementTag, DataElementValue, DataError, DataSetPath, RcByteSlice,
  TransferSyntax, ValueRepresentation, dictionary,
};

#[cfg(feature = "std")]
pub use print::DataSetPrintOptions;

/// A DICOM data set that is a mapping of data element tags to data element
/// values.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet(BTreeMap<DataElementTag, DataElementValue>);

/// The successful result of looking up a [`DataSetPath`] in a data set.
/// Depending on the path, the result will either be a specific data element
/// value, or a specific sequence item in a sequence (i.e. a nested data set).
///
enum DataSetLookupResult<'a> {
  DataElementValue(&'a DataElementValue),
  DataSet(&'a DataSet),
}

impl DataSet {
  /// Returns a new empty data set.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Returns the number of data elements in a data set.
  ///
  pub fn size(&self) -> usize {
    self.0.len()
  }

  /// Returns whether a data set is empty and contains no data elements.
  ///
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns whether a data element with the specified tag exists in a data
  /// set.
  ///
  pub fn has(&self, tag: DataElementTag) -> bool {
    self.0.contains_key(&tag)
  }

  /// Returns a new data set containing the File Meta Information data
  /// elements in this data set, i.e. those where the data element tag group
  /// equals 2.
  ///
  /// This function also sets the *'(0002,0002) Media Storage SOP Class UID'*
  /// and *'(0002,0003) Media Storage SOP Instance UID'* data elements to
  /// match the *'(0008,0016) SOP Class UID'* and *'(0008,0018) SOP Instance
  /// UID'* data elements in this data set.
  ///
  pub fn file_meta_information(&self) -> DataSet {
    let mut file_meta_information: DataSet = self
      .0
      .range((
      core::ops::Bound::Included(DataElementTag::new(2, 0x0000)),
      core::ops::Bound::Included(DataElementTag::new(2, 0xFFFF)),
      ))
      .map(|(tag, value)| (*tag, value.clone()))
      .collect();

    // Exclude any data elements that don't hold a chunk of binary data, i.e.
    // sequences or encapsulated pixel data, as they aren't allowed in File
    // Meta Information
    file_meta_information
      .0
      .retain(|_tag, value| value.bytes().is_ok());

    if let Ok(value) = self.get_value(dictionary::SOP_CLASS_UID.tag) {
      file_meta_information.insert(
        DataElementTag::new(0x0002, 0x0002),
        value.clone(),
      );
    } else {
      file_meta_information.delete(DataElementTag::new(0x0002, 0x0002));
    }

    if let Ok(value) = self.get_value(dictionary::SOP_INSTANCE_UID.tag) {
      file_meta_information.insert(
        DataElementTag::new(0x0002, 0x0003),
        value.clone(),
      );
    } else {
      file_meta_information.delete(DataElementTag::new(0x0002, 0x0003));
    }

    file_meta_information
  }

  /// Inserts a data element tag and value into a data set. If there is
  /// already a value for the tag then it is replaced with the new value.
  ///
  pub fn insert(&mut self, tag: DataElementTag, value: DataElementValue) {
    self.0.insert(tag, value);
  }

  /// Inserts a new binary value into a data set. If there is already a value
  /// for the tag it is replaced with the new value.
  ///
  pub fn insert_binary_value(
    &mut self,
    tag: DataElementTag,
    vr: ValueRepresentation,
    bytes: RcByteSlice,
  ) -> Result<(), DataError> {
    self.insert(tag, DataElementValue::new_binary(vr, bytes)?);

    Ok(())
  }

  /// Inserts a data element with an age string value into a data set. The
  /// data element being inserted must be referenced through its dictionary
  /// entry.
  ///
  pub fn insert_age_string_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &age_string::StructuredAge,
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(1) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::AgeString] => {
        DataElementValue::new_age_string(value)
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a date value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_date_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &date::StructuredDate,
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(1) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::Date] => DataElementValue::new_date(value),
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a date time value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_date_time_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &date_time::StructuredDateTime,
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(1) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::DateTime] => {
        DataElementValue::new_date_time(value)
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with float values into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  /// This method automatically determines the correct VR to use for the new
  /// data element.
  ///
  pub fn insert_float_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &[f64],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len() as u32) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::DecimalString] => {
        DataElementValue::new_decimal_string(value)
      }
      [ValueRepresentation::FloatingPointDouble] => {
        DataElementValue::new_floating_point_double(value)
      }
      [ValueRepresentation::FloatingPointSingle] => {
        DataElementValue::new_floating_point_single(
          &value.iter().map(|f| *f as f32).collect::<Vec<f32>>(),
        )
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with integer values into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  /// This method automatically determines the correct VR to use for the new
  /// data element.
  ///
  pub fn insert_int_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &[i64],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len() as u32) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::IntegerString] => {
        DataElementValue::new_integer_string(value)
      }
      [ValueRepresentation::SignedLong] => {
        DataElementValue::new_signed_long(value)
      }
      [ValueRepresentation::SignedShort] => {
        DataElementValue::new_signed_short(value)
      }
      [ValueRepresentation::UnsignedLong] => {
        DataElementValue::new_unsigned_long(value)
      }
      [ValueRepresentation::UnsignedShort] => {
        DataElementValue::new_unsigned_short(value)
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a person name value into a data set. The
  /// data element being inserted must be referenced through its dictionary
  /// entry.
  ///
  pub fn insert_person_name_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &[person_name::StructuredPersonName],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len() as u32) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::PersonName] => {
        DataElementValue::new_person_name(value)
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a sequence value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_sequence_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    items: Vec<Self>,
  ) -> Result<(), DataError> {
    let value = match item.vrs {
      [ValueRepresentation::Sequence] => {
        Ok(DataElementValue::new_sequence(items))
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a string value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  /// This method automatically determines the correct VR to use for the new
  /// data element.
  ///
  pub fn insert_string_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &[&str],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len() as u32) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::ApplicationEntity] => match value {
        [value] => DataElementValue::new_application_entity(value),
        _ => return invalid_insert_error(item),
      },
      [ValueRepresentation::CodeString] => {
        DataElementValue::new_code_string(value)
      }
      [ValueRepresentation::LongString] => {
        DataElementValue::new_long_string(value)
      }
      [ValueRepresentation::LongText] => match value {
        [value] => DataElementValue::new_long_text(value),
        _ => return invalid_insert_error(item),
      },
      [ValueRepresentation::ShortString] => {
        DataElementValue::new_short_string(value)
      }
      [ValueRepresentation::ShortText] => match value {
        [value] => DataElementValue::new_short_text(value),
        _ => return invalid_insert_error(item),
      },
      [ValueRepresentation::UniqueIdentifier] => {
        DataElementValue::new_unique_identifier(value)
      }
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a time value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_time_value(
    &mut self,
    item: &dictionary::DictionaryItem,
    value: &time::StructuredTime,
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(1) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::Time] => DataElementValue::new_time(value),
      _ => return invalid_insert_error(item),
    }?;

    self.0.insert(item.tag, value);

    Ok(())
  }

  /// Merges two data sets together. Data elements from the second data set
  /// take precedence.
  ///
  pub fn merge(&mut self, b: Self) {
    for (key, value) in b.0.into_iter() {
      self.0.insert(key, value);
    }
  }

  /// Deletes a data element from a data set.
  ///
  pub fn delete(&mut self, tag: DataElementTag) {
    self.0.remove(&tag);
  }

  /// Returns the tags in a data set, sorted by group and element.
  ///
  pub fn tags(&self) -> Vec<DataElementTag> {
    self.0.keys().copied().collect()
  }

  /// Returns an iterator over a data set's elements, sorted by tag.
  ///
  pub fn iter(
    &self,
  ) -> btree_map::Iter<'_, DataElementTag, DataElementValue> {
    self.0.iter()
  }

  /// Returns a mutable iterator over a data set's elements, sorted by tag.
  ///
  pub fn iter_mut(
    &mut self,
  ) -> btree_map::IterMut<'_, DataElementTag, DataElementValue> {
    self.0.iter_mut()
  }

  /// Looks up a data set path in a data set and returns the data element or
  /// data set that it specifies. If the path is invalid for the data set then
  /// an error is returned.
  ///
  fn lookup(
    &self,
    path: &DataSetPath,
  ) -> Result<DataSetLookupResult, DataError> {
    let mut lookup_result = DataSetLookupResult::DataSet(self);

    for entry in path.entries().iter() {
      match lookup_result {
        DataSetLookupResult::DataElementValue(value) => {
          if let DataSetPathEntry::SequenceItem { index } = entry {
            if let Ok(items) = value.sequence_items() {
              if let Some(item) = items.get(*index) {
                lookup_result = DataSetLookupResult::DataSet(item);
                continue;
              }
            }
          }
        }

        DataSetLookupResult::DataSet(data_set) => {
          if let DataSetPathEntry::DataElement { tag } = entry {
            if let Some(value) = data_set.0.get(tag) {
              lookup_result = DataSetLookupResult::DataElementValue(value);
              continue;
            }
          }
        }
      }

      return Err(DataError::new_tag_not_present().with_path(path));
    }

    Ok(lookup_result)
  }

  /// Returns the data element value for the specified tag in a data set.
  ///
  pub fn get_value(
    &self,
    tag: DataElementTag,
  ) -> Result<&DataElementValue, DataError> {
    match self.0.get(&tag) {
      Some(value) => Ok(value),
      _ => Err(
        DataError::new_tag_not_present()
          .with_path(&DataSetPath::new_with_data_element(tag)),
      ),
    }
  }

  /// Returns the data element value at the specified path in a data set. The
  /// path must end with a data element tag.
  ///
  pub fn get_value_at_path(
    &self,
    path: &DataSetPath,
  ) -> Result<&DataElementValue, DataError> {
    match self.lookup(path) {
      Ok(DataSetLookupResult::DataElementValue(value)) => Ok(value),
      _ => Err(DataError::new_tag_not_present().with_path(path)),
    }
  }

  /// Returns the data set at the specified path in a data set. The path must
  /// be empty or end with a sequence item index.
  ///
  pub fn get_data_set_at_path(
    &self,
    path: &DataSetPath,
  ) -> Result<&DataSet, DataError> {
    match self.lookup(path) {
      Ok(DataSetLookupResult::DataSet(data_set)) => Ok(data_set),
      _ => Err(DataError::new_tag_not_present().with_path(path)),
    }
  }

  /// Returns the raw value bytes for the specified tag in a data set.
  ///
  /// See [`DataElementValue::bytes()`].
  ///
  pub fn get_value_bytes(
    &self,
    tag: DataElementTag,
    vr: ValueRepresentation,
  ) -> Result<&RcByteSlice, DataError> {
    let value = self.get_value(tag)?;

    if value.value_representation() == vr {
      value
        .bytes()
        .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
    } else {
      Err(
        DataError::new_value_not_present()
          .with_path(&DataSetPath::new_with_data_element(tag)),
      )
    }
  }

  /// Returns the singular string value for a data element in a data set. If
  /// the data element with the specified tag does not hold exactly one
  /// string value then an error is returned.
  ///
  pub fn get_string(&self, tag: DataElementTag) -> Result<&str, DataError> {
    self
      .get_value(tag)?
      .get_string()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns all of the string values for a data element in a data set. If
  /// the data element with the specified tag is not of a type that supports
  /// multiple string values then an error is returned.
  ///
  pub fn get_strings(
    &self,
    tag: DataElementTag,
  ) -> Result<Vec<&str>, DataError> {
    self
      .get_value(tag)?
      .get_strings()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the singular integer value for a data element in a data set. If
  /// the data element with the specified tag does not hold exactly one
  /// integer value then an error is returned.
  ///
  pub fn get_int(&self, tag: DataElementTag) -> Result<i64, DataError> {
    self
      .get_value(tag)?
      .get_int()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns all of the integer values for a data element in a data set. If
  /// the data element with the specified tag is not of a type that supports
  /// multiple integer values then an error is returned.
  ///
  pub fn get_ints(&self, tag: DataElementTag) -> Result<Vec<i64>, DataError> {
    self
      .get_value(tag)?
      .get_ints()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the singular floating point value for a data element in a data
  /// set. If the data element with the specified tag does not hold exactly
  /// one floating point value then an error is returned.
  ///
  pub fn get_float(&self, tag: DataElementTag) -> Result<f64, DataError> {
    self
      .get_value(tag)?
      .get_float()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns all of the floating point values for a data element in a data
  /// set. If the data element with the specified tag is not of a type that
  /// supports multiple floating point values then an error is returned.
  ///
  pub fn get_floats(&self, tag: DataElementTag) -> Result<Vec<f64>, DataError> {
    self
      .get_value(tag)?
      .get_floats()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the age value for a data element in a data set. If the data
  /// element does not hold an `AgeString` value then an error is returned.
  ///
  pub fn get_age(
    &self,
    tag: DataElementTag,
  ) -> Result<age_string::StructuredAge, DataError> {
    self
      .get_value(tag)?
      .get_age()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the date value for a data element in a data set. If the data
  /// element does not hold a `Date` value then an error is returned.
  ///
  pub fn get_date(
    &self,
    tag: DataElementTag,
  ) -> Result<date::StructuredDate, DataError> {
    self
      .get_value(tag)?
      .get_date()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the structured date/time value for a data element in a data
  /// set. If the data element does not hold a `DateTime` value then an error
  /// is returned.
  ///
  pub fn get_date_time(
    &self,
    tag: DataElementTag,
  ) -> Result<date_time::StructuredDateTime, DataError> {
    self
      .get_value(tag)?
      .get_date_time()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the time value for a data element in a data set. If the data
  /// element does not hold a `Time` value then an error is returned.
  ///
  pub fn get_time(
    &self,
    tag: DataElementTag,
  ) -> Result<time::StructuredTime, DataError> {
    self
      .get_value(tag)?
      .get_time()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the singular person name value for a data element in a data
  /// set. If the data element with the specified tag does not hold exactly
  /// one person name value then an error is returned.
  ///
  pub fn get_person_name(
    &self,
    tag: DataElementTag,
  ) -> Result<person_name::StructuredPersonName, DataError> {
    self
      .get_value(tag)?
      .get_person_name()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Looks up the *'(0002,0010) Transfer Syntax UID'* data element in this
  /// data set, and if present, attempts to convert it to a known transfer
  /// syntax definition.
  ///
  pub fn get_transfer_syntax(&self) -> Result<TransferSyntax, DataError> {
    let transfer_syntax_uid =
      self.get_string(dictionary::TRANSFER_SYNTAX_UID.tag)?;

    TransferSyntax::from_uid(transfer_syntax_uid).map_err(|_| {
      DataError::new_value_invalid(format!(
        "Unrecognized transfer syntax UID: '{transfer_syntax_uid}'"
      ))
    })
  }

  /// Returns the size in bytes of all data elements in a data set.
  ///
  /// See [`DataElementValue::total_byte_size()`].
  ///
  pub fn total_byte_size(&self) -> u64 {
    self
      .iter()
      .fold(0, |acc, (_, value)| acc + value.total_byte_size())
  }

  /// Returns the human-readable name for a data element tag in a data set,
  /// using its data elements to determine the private creator if the tag is
  /// private.
  ///
  pub fn tag_name(&self, tag: DataElementTag) -> String {
    let private_creator = self.private_creator_for_tag(tag).ok();

    dictionary::tag_name(tag, private_creator)
  }

  /// Formats a data element tag in a data set as `"(GROUP,ELEMENT) TAG_NAME"`,
  /// e.g. `"(0008,0020) StudyDate"`. The other data elements in the data set
  /// are used to determine the private creator if the tag is private.
  ///
  pub fn tag_with_name(&self, tag: DataElementTag) -> String {
    let private_creator = self.private_creator_for_tag(tag).ok();

    dictionary::tag_with_name(tag, private_creator)
  }

  /// Returns the value of the *'(gggg,00xx) Private Creator'* data element in
  /// this data set for the specified private tag.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn private_creator_for_tag(
    &self,
    tag: DataElementTag,
  ) -> Result<&str, ()> {
    if !tag.is_private() {
      return Err(());
    }

    let private_creator_tag =
      DataElementTag::new(tag.group, tag.element >> 8);

    if private_creator_tag.element < 0x10 {
      return Err(());
    }

    self.get_string(private_creator_tag).map_err(|_| ())
  }

  /// Removes all private range tags from a data set, including recursively
  /// into any sequences that are present.
  ///
  pub fn delete_private_elements(&mut self) {
    self.0.retain(|tag, value| {
      if tag.is_private() {
        return false;
      }

      if let Ok(items) = value.sequence_items_mut() {
        for item in items.iter_mut() {
          item.delete_private_elements();
        }
      }

      true
    })
  }

  /// Returns a new data set containing just the private tags for the given
  /// group and private creator name in a data set. The group number must
  /// always be odd for private data elements, and the private creator name
  /// must match exactly.
  ///
  /// If the group number is even or there is no *'(gggg,00XX) Private
  /// Creator'* data element with the specified name then an error is
  /// returned.
  ///
  pub fn private_block(
    &self,
    group: u16,
    private_creator: &str,
  ) -> Result<Self, String> {
    if group & 1 == 0 {
      return Err("Private group number is even".to_string());
    }

    let private_creator_value =
      DataElementValue::new_long_string(&[private_creator])
        .map_err(|_| "Private creator name is invalid".to_string())?;

    // Search for a matching `(gggg,00XX) Private Creator' data element.
    // Ref: PS3.5 7.8.1.
    let mut private_creator_element = None;
    for element in 0x10..=0xFF {
      if self.0.get(&DataElementTag::new(group, element))
        == Some(&private_creator_value)
      {
        private_creator_element = Some(element);
        break;
      }
    }

    let private_creator_element = private_creator_element.ok_or(format!(
      "Private creator '{private_creator}' not found"
    ))?;

    // Calculate the range of element values to include in the returned data
    // set
    let element_start = private_creator_element << 8;
    let element_end = element_start | 0xFF;

    // Filter this data set to only include the relevant private data
    // elements
    let mut result = Self::new();
    for (tag, value) in self.0.iter() {
      if tag.group == group
        && tag.element >= element_start
        && tag.element <= element_end
      {
        result.insert(*tag, value.clone());
      }
    }

    Ok(result)
  }
}

impl FromIterator<(DataElementTag, DataElementValue)> for DataSet {
  fn from_iter<T: IntoIterator<Item = (DataElementTag, DataElementValue)>>(
    iter: T,
  ) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl IntoIterator for DataSet {
  type Item = (DataElementTag, DataElementValue);

  type IntoIter = btree_map::IntoIter<DataElementTag, DataElementValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl Extend<(DataElementTag, DataElementValue)> for DataSet {
  fn extend<T: IntoIterator<Item = (DataElementTag, DataElementValue)>>(
    &mut self,
    iter: T,
  ) {
    self.0.extend(iter);
  }
}

/// Helper function that returns an error message when one of the
/// `insert_*_value` functions is called with invalid arguments.
///
fn invalid_insert_error<T>(
  item: &dictionary::DictionaryItem,
) -> Result<T, DataError> {
  match item.vrs {
    [vr] => Err(DataError::new_value_invalid(format!(
      "Data element '{}' (VR: '{}', multiplicity: {}) does not support the \
       provided data",
      item.name, vr, item.multiplicity
    ))),

    vrs => Err(DataError::new_value_invalid(format!(
      "Data element '{}' supports multiple VRs: {}",
      item.name,
      vrs.iter().map(|vr| vr.to_string()).collect::<Vec<String>>().join(", "),
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_and_get_value_test() {
    let mut data_set = DataSet::new();

    data_set
      .insert_string_value(&dictionary::MODALITY, &["CT"])
      .unwrap();

    assert_eq!(data_set.get_string(dictionary::MODALITY.tag), Ok("CT"));
  }

  #[test]
  fn merge_test() {
    let mut a = DataSet::new();
    a.insert_int_value(&dictionary::ROWS, &[512]).unwrap();

    let mut b = DataSet::new();
    b.insert_int_value(&dictionary::ROWS, &[256]).unwrap();

    a.merge(b);

    assert_eq!(a.get_int(dictionary::ROWS.tag), Ok(256));
  }
}
