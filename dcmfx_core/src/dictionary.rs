//! A dictionary of well-known DICOM data elements.
//!
//! This is not a complete rendition of the DICOM data element registry
//! defined by PS3.6 -- which runs to several thousand entries -- but covers
//! the data elements this library's readers, writers, and value decoders
//! need to name or specially recognize, e.g. clarifying data elements,
//! sequence/item delimiters, and pixel data related attributes.
//!
//! Tags outside of this dictionary, and all private data elements, are still
//! read and written correctly; they're simply reported with a generic name.

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
};

use crate::{
  data_element_tag::DataElementTag,
  value_multiplicity::ValueMultiplicity,
  value_representation::ValueRepresentation,
  value_representation::ValueRepresentation as Vr,
};

/// A single entry in the data element dictionary: its tag, human-readable
/// name, the VR(s) it's recognized to hold, and its value multiplicity.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DictionaryItem {
  pub tag: DataElementTag,
  pub name: &'static str,
  pub vrs: &'static [ValueRepresentation],
  pub multiplicity: ValueMultiplicity,
}

macro_rules! item {
  ($name:ident, $group:expr, $element:expr, $display_name:expr, [$($vr:expr),* $(,)?], $min:expr, $max:expr) => {
    pub const $name: DictionaryItem = DictionaryItem {
      tag: DataElementTag {
        group: $group,
        element: $element,
      },
      name: $display_name,
      vrs: &[$($vr),*],
      multiplicity: ValueMultiplicity {
        min: $min,
        max: $max,
      },
    };
  };
}

item!(FILE_META_INFORMATION_GROUP_LENGTH, 0x0002, 0x0000, "File Meta Information Group Length", [Vr::UnsignedLong], 1, Some(1));
item!(FILE_META_INFORMATION_VERSION, 0x0002, 0x0001, "File Meta Information Version", [Vr::OtherByteString], 1, Some(1));
item!(TRANSFER_SYNTAX_UID, 0x0002, 0x0010, "Transfer Syntax UID", [Vr::UniqueIdentifier], 1, Some(1));
item!(IMPLEMENTATION_CLASS_UID, 0x0002, 0x0012, "Implementation Class UID", [Vr::UniqueIdentifier], 1, Some(1));
item!(IMPLEMENTATION_VERSION_NAME, 0x0002, 0x0013, "Implementation Version Name", [Vr::ShortString], 1, Some(1));

item!(SPECIFIC_CHARACTER_SET, 0x0008, 0x0005, "Specific Character Set", [Vr::CodeString], 1, None);
item!(SOP_CLASS_UID, 0x0008, 0x0016, "SOP Class UID", [Vr::UniqueIdentifier], 1, Some(1));
item!(SOP_INSTANCE_UID, 0x0008, 0x0018, "SOP Instance UID", [Vr::UniqueIdentifier], 1, Some(1));
item!(MODALITY, 0x0008, 0x0060, "Modality", [Vr::CodeString], 1, Some(1));

item!(PATIENT_AGE, 0x0010, 0x1010, "Patient's Age", [Vr::AgeString], 1, Some(1));
item!(PATIENT_SEX, 0x0010, 0x0040, "Patient's Sex", [Vr::CodeString], 1, Some(1));

item!(INSTANCE_NUMBER, 0x0020, 0x0013, "Instance Number", [Vr::IntegerString], 1, Some(1));

item!(ROWS, 0x0028, 0x0010, "Rows", [Vr::UnsignedShort], 1, Some(1));
item!(COLUMNS, 0x0028, 0x0011, "Columns", [Vr::UnsignedShort], 1, Some(1));
item!(BITS_ALLOCATED, 0x0028, 0x0100, "Bits Allocated", [Vr::UnsignedShort], 1, Some(1));
item!(PIXEL_REPRESENTATION, 0x0028, 0x0103, "Pixel Representation", [Vr::UnsignedShort], 1, Some(1));
item!(SMALLEST_VALID_PIXEL_VALUE, 0x0028, 0x0104, "Smallest Valid Pixel Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(LARGEST_VALID_PIXEL_VALUE, 0x0028, 0x0105, "Largest Valid Pixel Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(SMALLEST_IMAGE_PIXEL_VALUE, 0x0028, 0x0106, "Smallest Image Pixel Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(LARGEST_IMAGE_PIXEL_VALUE, 0x0028, 0x0107, "Largest Image Pixel Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE, 0x0028, 0x0108, "Smallest Image Pixel Value in Plane", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE, 0x0028, 0x0109, "Largest Image Pixel Value in Plane", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(SMALLEST_PIXEL_VALUE_IN_SERIES, 0x0028, 0x0110, "Smallest Pixel Value in Series", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(LARGEST_PIXEL_VALUE_IN_SERIES, 0x0028, 0x0111, "Largest Pixel Value in Series", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(PIXEL_PADDING_VALUE, 0x0028, 0x0120, "Pixel Padding Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(2));
item!(PIXEL_PADDING_RANGE_LIMIT, 0x0028, 0x0121, "Pixel Padding Range Limit", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(ZERO_VELOCITY_PIXEL_VALUE, 0x0028, 0x1014, "Zero Velocity Pixel Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, 0x0028, 0x1101, "Red Palette Color Lookup Table Descriptor", [Vr::UnsignedShort, Vr::SignedShort], 3, Some(3));
item!(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, 0x0028, 0x1102, "Green Palette Color Lookup Table Descriptor", [Vr::UnsignedShort, Vr::SignedShort], 3, Some(3));
item!(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, 0x0028, 0x1103, "Blue Palette Color Lookup Table Descriptor", [Vr::UnsignedShort, Vr::SignedShort], 3, Some(3));
item!(LUT_DESCRIPTOR, 0x0028, 0x3002, "LUT Descriptor", [Vr::UnsignedShort, Vr::SignedShort], 3, Some(3));
item!(LUT_DATA, 0x0028, 0x3006, "LUT Data", [Vr::UnsignedShort, Vr::OtherWordString], 1, None);

item!(HISTOGRAM_FIRST_BIN_VALUE, 0x0060, 0x3006, "Histogram First Bin Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(HISTOGRAM_LAST_BIN_VALUE, 0x0060, 0x3008, "Histogram Last Bin Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));

item!(CHANNEL_MINIMUM_VALUE, 0x003A, 0x0218, "Channel Minimum Value", [Vr::DecimalString, Vr::SignedShort], 1, Some(1));
item!(CHANNEL_MAXIMUM_VALUE, 0x003A, 0x021C, "Channel Maximum Value", [Vr::DecimalString, Vr::SignedShort], 1, Some(1));
item!(WAVEFORM_BITS_STORED, 0x003A, 0x021A, "Waveform Bits Stored", [Vr::UnsignedShort], 1, Some(1));

item!(REAL_WORLD_VALUE_LAST_VALUE_MAPPED, 0x0040, 0x9211, "Real World Value Last Value Mapped", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(REAL_WORLD_VALUE_FIRST_VALUE_MAPPED, 0x0040, 0x9216, "Real World Value First Value Mapped", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));
item!(MAPPED_PIXEL_VALUE, 0x0040, 0x9239, "Mapped Pixel Value", [Vr::UnsignedShort, Vr::SignedShort], 1, Some(1));

item!(WAVEFORM_BITS_ALLOCATED, 0x5400, 0x1004, "Waveform Bits Allocated", [Vr::UnsignedShort], 1, Some(1));
item!(WAVEFORM_SAMPLE_INTERPRETATION, 0x5400, 0x1006, "Waveform Sample Interpretation", [Vr::CodeString], 1, Some(1));
item!(WAVEFORM_PADDING_VALUE, 0x5400, 0x100A, "Waveform Padding Value", [Vr::OtherByteString, Vr::OtherWordString, Vr::SignedShort, Vr::UnsignedShort], 1, Some(1));
item!(WAVEFORM_DATA, 0x5400, 0x1010, "Waveform Data", [Vr::OtherByteString, Vr::OtherWordString], 1, Some(1));

item!(DATA_SET_TRAILING_PADDING, 0xFFFC, 0xFFFC, "Data Set Trailing Padding", [Vr::OtherByteString], 1, Some(1));

item!(ITEM, 0xFFFE, 0xE000, "Item", [], 1, Some(1));
item!(ITEM_DELIMITATION_ITEM, 0xFFFE, 0xE00D, "Item Delimitation Item", [], 0, Some(0));
item!(SEQUENCE_DELIMITATION_ITEM, 0xFFFE, 0xE0DD, "Sequence Delimitation Item", [], 0, Some(0));
item!(PIXEL_DATA, 0x7FE0, 0x0010, "Pixel Data", [Vr::OtherByteString, Vr::OtherWordString], 1, Some(1));

/// All entries in the dictionary, used by [`find`].
///
const ENTRIES: &[DictionaryItem] = &[
  FILE_META_INFORMATION_GROUP_LENGTH,
  FILE_META_INFORMATION_VERSION,
  TRANSFER_SYNTAX_UID,
  IMPLEMENTATION_CLASS_UID,
  IMPLEMENTATION_VERSION_NAME,
  SPECIFIC_CHARACTER_SET,
  SOP_CLASS_UID,
  SOP_INSTANCE_UID,
  MODALITY,
  PATIENT_AGE,
  PATIENT_SEX,
  INSTANCE_NUMBER,
  ROWS,
  COLUMNS,
  BITS_ALLOCATED,
  PIXEL_REPRESENTATION,
  SMALLEST_VALID_PIXEL_VALUE,
  LARGEST_VALID_PIXEL_VALUE,
  SMALLEST_IMAGE_PIXEL_VALUE,
  LARGEST_IMAGE_PIXEL_VALUE,
  SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE,
  LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE,
  SMALLEST_PIXEL_VALUE_IN_SERIES,
  LARGEST_PIXEL_VALUE_IN_SERIES,
  PIXEL_PADDING_VALUE,
  PIXEL_PADDING_RANGE_LIMIT,
  ZERO_VELOCITY_PIXEL_VALUE,
  RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR,
  GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR,
  BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR,
  LUT_DESCRIPTOR,
  LUT_DATA,
  HISTOGRAM_FIRST_BIN_VALUE,
  HISTOGRAM_LAST_BIN_VALUE,
  CHANNEL_MINIMUM_VALUE,
  CHANNEL_MAXIMUM_VALUE,
  WAVEFORM_BITS_STORED,
  REAL_WORLD_VALUE_LAST_VALUE_MAPPED,
  REAL_WORLD_VALUE_FIRST_VALUE_MAPPED,
  MAPPED_PIXEL_VALUE,
  WAVEFORM_BITS_ALLOCATED,
  WAVEFORM_SAMPLE_INTERPRETATION,
  WAVEFORM_PADDING_VALUE,
  WAVEFORM_DATA,
  DATA_SET_TRAILING_PADDING,
  ITEM,
  ITEM_DELIMITATION_ITEM,
  SEQUENCE_DELIMITATION_ITEM,
  PIXEL_DATA,
];

/// Looks up a data element tag in the dictionary.
///
/// `private_creator` is accepted for API compatibility with private data
/// dictionaries, but this dictionary only contains standard, non-private
/// data elements, so it has no effect on the lookup.
///
#[allow(clippy::result_unit_err)]
pub fn find(
  tag: DataElementTag,
  _private_creator: Option<&str>,
) -> Result<DictionaryItem, ()> {
  ENTRIES.iter().copied().find(|item| item.tag == tag).ok_or(())
}

/// Returns the human-readable name for a data element tag, e.g.
/// `"Patient's Age"`. Tags not present in the dictionary are named using
/// their group and element numbers.
///
pub fn tag_name(tag: DataElementTag, private_creator: Option<&str>) -> String {
  match find(tag, private_creator) {
    Ok(item) => item.name.to_string(),

    Err(()) if tag.is_private() => "Private Tag".to_string(),

    Err(()) => "Unknown Tag".to_string(),
  }
}

/// Returns a data element tag and its human-readable name combined into a
/// single string, e.g. `"(0010,1010) Patient's Age"`.
///
pub fn tag_with_name(tag: DataElementTag, private_creator: Option<&str>) -> String {
  format!("{} {}", tag, tag_name(tag, private_creator))
}

/// Returns the human-readable name for a well-known UID, e.g. a transfer
/// syntax or SOP class UID. Returns `Err(())` if the UID isn't recognized.
///
pub fn uid_name(uid: &str) -> Result<&str, ()> {
  crate::transfer_syntax::TransferSyntax::from_uid(uid).map(|ts| ts.name)
}

/// Returns whether the given tag holds a lookup table descriptor, which are
/// a special case in the DICOM standard: their first and third values are
/// always encoded as `US`, regardless of the VR of the data element overall,
/// while the middle value takes the sign of the overall VR.
///
/// Ref: PS3.5 6.2.
///
pub fn is_lut_descriptor_tag(tag: DataElementTag) -> bool {
  matches!(
    tag,
    t if t == RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR.tag
      || t == GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR.tag
      || t == BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR.tag
      || t == LUT_DESCRIPTOR.tag
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn find_test() {
    assert_eq!(find(PIXEL_DATA.tag, None), Ok(PIXEL_DATA));
    assert_eq!(find(DataElementTag::new(0x0009, 0x0001), None), Err(()));
  }

  #[test]
  fn is_lut_descriptor_tag_test() {
    assert!(is_lut_descriptor_tag(LUT_DESCRIPTOR.tag));
    assert!(!is_lut_descriptor_tag(PIXEL_DATA.tag));
  }
}
