//! Defines the value representations (VRs) used by data elements in a DICOM
//! data set.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// The value representation (VR) of a data element describes the data type
/// and format of its value.
///
/// Ref: PS3.5 6.2.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueRepresentation {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

/// The constraints placed by a VR on the raw bytes of a data element's value.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthRequirements {
  /// The maximum number of bytes allowed for the value.
  pub bytes_max: u32,

  /// The value's byte length must be a multiple of this amount.
  pub bytes_multiple_of: u32,

  /// The maximum number of characters allowed in the value, when the VR is a
  /// textual one. `None` when there is no such limit beyond the byte limit.
  pub string_characters_max: Option<u32>,
}

impl core::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    let bytes = self.to_bytes();

    write!(f, "{}{}", bytes[0] as char, bytes[1] as char)
  }
}

impl ValueRepresentation {
  /// Converts the two-character uppercase ASCII abbreviation used in the
  /// DICOM P10 format, e.g. `b"AS"`, into a `ValueRepresentation`.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ()> {
    match bytes {
      b"AE" => Ok(Self::ApplicationEntity),
      b"AS" => Ok(Self::AgeString),
      b"AT" => Ok(Self::AttributeTag),
      b"CS" => Ok(Self::CodeString),
      b"DA" => Ok(Self::Date),
      b"DS" => Ok(Self::DecimalString),
      b"DT" => Ok(Self::DateTime),
      b"FL" => Ok(Self::FloatingPointSingle),
      b"FD" => Ok(Self::FloatingPointDouble),
      b"IS" => Ok(Self::IntegerString),
      b"LO" => Ok(Self::LongString),
      b"LT" => Ok(Self::LongText),
      b"OB" => Ok(Self::OtherByteString),
      b"OD" => Ok(Self::OtherDoubleString),
      b"OF" => Ok(Self::OtherFloatString),
      b"OL" => Ok(Self::OtherLongString),
      b"OV" => Ok(Self::OtherVeryLongString),
      b"OW" => Ok(Self::OtherWordString),
      b"PN" => Ok(Self::PersonName),
      b"SH" => Ok(Self::ShortString),
      b"SL" => Ok(Self::SignedLong),
      b"SQ" => Ok(Self::Sequence),
      b"SS" => Ok(Self::SignedShort),
      b"ST" => Ok(Self::ShortText),
      b"SV" => Ok(Self::SignedVeryLong),
      b"TM" => Ok(Self::Time),
      b"UC" => Ok(Self::UnlimitedCharacters),
      b"UI" => Ok(Self::UniqueIdentifier),
      b"UL" => Ok(Self::UnsignedLong),
      b"UN" => Ok(Self::Unknown),
      b"UR" => Ok(Self::UniversalResourceIdentifier),
      b"US" => Ok(Self::UnsignedShort),
      b"UT" => Ok(Self::UnlimitedText),
      b"UV" => Ok(Self::UnsignedVeryLong),
      _ => Err(()),
    }
  }

  /// Converts a `ValueRepresentation` to its two-character uppercase ASCII
  /// abbreviation used in the DICOM P10 format, e.g. `b"AS"`.
  ///
  pub fn to_bytes(self) -> [u8; 2] {
    match self {
      Self::ApplicationEntity => *b"AE",
      Self::AgeString => *b"AS",
      Self::AttributeTag => *b"AT",
      Self::CodeString => *b"CS",
      Self::Date => *b"DA",
      Self::DecimalString => *b"DS",
      Self::DateTime => *b"DT",
      Self::FloatingPointSingle => *b"FL",
      Self::FloatingPointDouble => *b"FD",
      Self::IntegerString => *b"IS",
      Self::LongString => *b"LO",
      Self::LongText => *b"LT",
      Self::OtherByteString => *b"OB",
      Self::OtherDoubleString => *b"OD",
      Self::OtherFloatString => *b"OF",
      Self::OtherLongString => *b"OL",
      Self::OtherVeryLongString => *b"OV",
      Self::OtherWordString => *b"OW",
      Self::PersonName => *b"PN",
      Self::ShortString => *b"SH",
      Self::SignedLong => *b"SL",
      Self::Sequence => *b"SQ",
      Self::SignedShort => *b"SS",
      Self::ShortText => *b"ST",
      Self::SignedVeryLong => *b"SV",
      Self::Time => *b"TM",
      Self::UnlimitedCharacters => *b"UC",
      Self::UniqueIdentifier => *b"UI",
      Self::UnsignedLong => *b"UL",
      Self::Unknown => *b"UN",
      Self::UniversalResourceIdentifier => *b"UR",
      Self::UnsignedShort => *b"US",
      Self::UnlimitedText => *b"UT",
      Self::UnsignedVeryLong => *b"UV",
    }
  }

  /// Returns the human-readable name of a VR, e.g. `"Age String"`.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      Self::ApplicationEntity => "Application Entity",
      Self::AgeString => "Age String",
      Self::AttributeTag => "Attribute Tag",
      Self::CodeString => "Code String",
      Self::Date => "Date",
      Self::DecimalString => "Decimal String",
      Self::DateTime => "Date Time",
      Self::FloatingPointSingle => "Floating Point Single",
      Self::FloatingPointDouble => "Floating Point Double",
      Self::IntegerString => "Integer String",
      Self::LongString => "Long String",
      Self::LongText => "Long Text",
      Self::OtherByteString => "Other Byte String",
      Self::OtherDoubleString => "Other Double String",
      Self::OtherFloatString => "Other Float String",
      Self::OtherLongString => "Other Long String",
      Self::OtherVeryLongString => "Other Very Long String",
      Self::OtherWordString => "Other Word String",
      Self::PersonName => "Person Name",
      Self::ShortString => "Short String",
      Self::SignedLong => "Signed Long",
      Self::Sequence => "Sequence",
      Self::SignedShort => "Signed Short",
      Self::ShortText => "Short Text",
      Self::SignedVeryLong => "Signed Very Long",
      Self::Time => "Time",
      Self::UnlimitedCharacters => "Unlimited Characters",
      Self::UniqueIdentifier => "Unique Identifier",
      Self::UnsignedLong => "Unsigned Long",
      Self::Unknown => "Unknown",
      Self::UniversalResourceIdentifier => "Universal Resource Identifier",
      Self::UnsignedShort => "Unsigned Short",
      Self::UnlimitedText => "Unlimited Text",
      Self::UnsignedVeryLong => "Unsigned Very Long",
    }
  }

  /// Returns whether a VR holds a textual value, i.e. one that can be decoded
  /// using a specific character set.
  ///
  pub fn is_string(&self) -> bool {
    matches!(
      self,
      Self::ApplicationEntity
        | Self::AgeString
        | Self::CodeString
        | Self::Date
        | Self::DecimalString
        | Self::DateTime
        | Self::IntegerString
        | Self::LongString
        | Self::LongText
        | Self::PersonName
        | Self::ShortString
        | Self::ShortText
        | Self::Time
        | Self::UniqueIdentifier
        | Self::UnlimitedCharacters
        | Self::UniversalResourceIdentifier
        | Self::UnlimitedText
    )
  }

  /// Returns whether a VR is a textual VR whose encoding is affected by the
  /// active specific character set, i.e. all string VRs other than those
  /// whose content is constrained to the basic DICOM character repertoire.
  ///
  pub fn is_encoded_string(&self) -> bool {
    matches!(
      self,
      Self::LongString
        | Self::LongText
        | Self::PersonName
        | Self::ShortString
        | Self::ShortText
        | Self::UnlimitedCharacters
        | Self::UnlimitedText
    )
  }

  /// Pads the given bytes to an even length, as required by the DICOM P10
  /// format, using the padding byte appropriate for this VR.
  ///
  pub fn pad_bytes_to_even_length(&self, bytes: &mut Vec<u8>) {
    if bytes.len() % 2 == 0 {
      return;
    }

    let padding: u8 = match self {
      Self::UniqueIdentifier => 0x00,
      _ if self.is_string() => 0x20,
      _ => 0x00,
    };

    bytes.push(padding);
  }

  /// Returns the constraints this VR places on the raw bytes of a value.
  ///
  pub fn length_requirements(&self) -> LengthRequirements {
    match self {
      Self::AgeString => LengthRequirements {
        bytes_max: 4,
        bytes_multiple_of: 1,
        string_characters_max: Some(4),
      },

      Self::ApplicationEntity => LengthRequirements {
        bytes_max: 16,
        bytes_multiple_of: 1,
        string_characters_max: Some(16),
      },

      Self::AttributeTag => LengthRequirements {
        bytes_max: 0xFFFC,
        bytes_multiple_of: 4,
        string_characters_max: None,
      },

      Self::CodeString => LengthRequirements {
        bytes_max: 16,
        bytes_multiple_of: 1,
        string_characters_max: Some(16),
      },

      Self::Date => LengthRequirements {
        bytes_max: 8,
        bytes_multiple_of: 1,
        string_characters_max: Some(8),
      },

      Self::DateTime => LengthRequirements {
        bytes_max: 26,
        bytes_multiple_of: 1,
        string_characters_max: Some(26),
      },

      Self::DecimalString => LengthRequirements {
        bytes_max: 16,
        bytes_multiple_of: 1,
        string_characters_max: Some(16),
      },

      Self::FloatingPointDouble => LengthRequirements {
        bytes_max: 0xFFF8,
        bytes_multiple_of: 8,
        string_characters_max: None,
      },

      Self::FloatingPointSingle => LengthRequirements {
        bytes_max: 0xFFFC,
        bytes_multiple_of: 4,
        string_characters_max: None,
      },

      Self::IntegerString => LengthRequirements {
        bytes_max: 12,
        bytes_multiple_of: 1,
        string_characters_max: Some(12),
      },

      Self::LongString => LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: 1,
        string_characters_max: Some(64),
      },

      Self::LongText => LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: 1,
        string_characters_max: Some(10240),
      },

      Self::OtherByteString
      | Self::OtherDoubleString
      | Self::OtherFloatString
      | Self::OtherLongString
      | Self::OtherVeryLongString
      | Self::OtherWordString
      | Self::Unknown => LengthRequirements {
        bytes_max: 0xFFFFFFFE,
        bytes_multiple_of: 1,
        string_characters_max: None,
      },

      Self::PersonName => LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: 1,
        string_characters_max: Some(324),
      },

      Self::Sequence => LengthRequirements {
        bytes_max: 0,
        bytes_multiple_of: 1,
        string_characters_max: None,
      },

      Self::ShortString => LengthRequirements {
        bytes_max: 16,
        bytes_multiple_of: 1,
        string_characters_max: Some(16),
      },

      Self::ShortText => LengthRequirements {
        bytes_max: 1024,
        bytes_multiple_of: 1,
        string_characters_max: Some(1024),
      },

      Self::SignedLong => LengthRequirements {
        bytes_max: 0xFFFC,
        bytes_multiple_of: 4,
        string_characters_max: None,
      },

      Self::SignedShort => LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: 2,
        string_characters_max: None,
      },

      Self::SignedVeryLong => LengthRequirements {
        bytes_max: 0xFFFFFFF8,
        bytes_multiple_of: 8,
        string_characters_max: None,
      },

      Self::Time => LengthRequirements {
        bytes_max: 14,
        bytes_multiple_of: 1,
        string_characters_max: Some(14),
      },

      Self::UniqueIdentifier => LengthRequirements {
        bytes_max: 64,
        bytes_multiple_of: 1,
        string_characters_max: Some(64),
      },

      Self::UniversalResourceIdentifier => LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: 1,
        string_characters_max: None,
      },

      Self::UnlimitedCharacters => LengthRequirements {
        bytes_max: 0xFFFFFFFE,
        bytes_multiple_of: 1,
        string_characters_max: None,
      },

      Self::UnlimitedText => LengthRequirements {
        bytes_max: 0xFFFFFFFE,
        bytes_multiple_of: 1,
        string_characters_max: None,
      },

      Self::UnsignedLong => LengthRequirements {
        bytes_max: 0xFFFC,
        bytes_multiple_of: 4,
        string_characters_max: None,
      },

      Self::UnsignedShort => LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: 2,
        string_characters_max: None,
      },

      Self::UnsignedVeryLong => LengthRequirements {
        bytes_max: 0xFFFFFFF8,
        bytes_multiple_of: 8,
        string_characters_max: None,
      },
    }
  }

  /// Swaps the endianness of the raw bytes of a value that uses this VR. Only
  /// VRs that hold binary numeric data are affected; string and other VRs are
  /// left unchanged.
  ///
  pub fn swap_endianness(&self, bytes: &mut [u8]) {
    match self {
      Self::AttributeTag
      | Self::OtherWordString
      | Self::SignedShort
      | Self::UnsignedShort => swap_endianness_chunks(bytes, 2),

      Self::FloatingPointSingle
      | Self::OtherFloatString
      | Self::OtherLongString
      | Self::SignedLong
      | Self::UnsignedLong => swap_endianness_chunks(bytes, 4),

      Self::FloatingPointDouble
      | Self::OtherDoubleString
      | Self::OtherVeryLongString
      | Self::SignedVeryLong
      | Self::UnsignedVeryLong => swap_endianness_chunks(bytes, 8),

      _ => (),
    }
  }
}

fn swap_endianness_chunks(bytes: &mut [u8], chunk_size: usize) {
  for chunk in bytes.chunks_exact_mut(chunk_size) {
    chunk.reverse();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[cfg(not(feature = "std"))]
  use alloc::{vec, format};

  const ALL_VRS: [ValueRepresentation; 34] = [
    ValueRepresentation::ApplicationEntity,
    ValueRepresentation::AgeString,
    ValueRepresentation::AttributeTag,
    ValueRepresentation::CodeString,
    ValueRepresentation::Date,
    ValueRepresentation::DecimalString,
    ValueRepresentation::DateTime,
    ValueRepresentation::FloatingPointSingle,
    ValueRepresentation::FloatingPointDouble,
    ValueRepresentation::IntegerString,
    ValueRepresentation::LongString,
    ValueRepresentation::LongText,
    ValueRepresentation::OtherByteString,
    ValueRepresentation::OtherDoubleString,
    ValueRepresentation::OtherFloatString,
    ValueRepresentation::OtherLongString,
    ValueRepresentation::OtherVeryLongString,
    ValueRepresentation::OtherWordString,
    ValueRepresentation::PersonName,
    ValueRepresentation::ShortString,
    ValueRepresentation::SignedLong,
    ValueRepresentation::Sequence,
    ValueRepresentation::SignedShort,
    ValueRepresentation::ShortText,
    ValueRepresentation::SignedVeryLong,
    ValueRepresentation::Time,
    ValueRepresentation::UnlimitedCharacters,
    ValueRepresentation::UniqueIdentifier,
    ValueRepresentation::UnsignedLong,
    ValueRepresentation::Unknown,
    ValueRepresentation::UniversalResourceIdentifier,
    ValueRepresentation::UnsignedShort,
    ValueRepresentation::UnsignedVeryLong,
    ValueRepresentation::UnlimitedText,
  ];

  #[test]
  fn from_bytes_and_to_bytes_round_trip_test() {
    for vr in ALL_VRS {
      assert_eq!(ValueRepresentation::from_bytes(&vr.to_bytes()), Ok(vr));
    }
  }

  #[test]
  fn to_string_test() {
    assert_eq!(ValueRepresentation::AgeString.to_string(), "AS");
    assert_eq!(ValueRepresentation::PersonName.to_string(), "PN");
  }

  #[test]
  fn name_test() {
    assert_eq!(ValueRepresentation::AgeString.name(), "Age String");
  }

  #[test]
  fn is_string_test() {
    assert!(ValueRepresentation::ShortText.is_string());
    assert!(!ValueRepresentation::UnsignedLong.is_string());
  }

  #[test]
  fn is_encoded_string_test() {
    assert!(ValueRepresentation::PersonName.is_encoded_string());
    assert!(!ValueRepresentation::UniqueIdentifier.is_encoded_string());
  }

  #[test]
  fn pad_bytes_to_even_length_test() {
    let mut uid_bytes = vec![0x31];
    ValueRepresentation::UniqueIdentifier.pad_bytes_to_even_length(&mut uid_bytes);
    assert_eq!(uid_bytes, vec![0x31, 0x00]);

    let mut sh_bytes = vec![0x41];
    ValueRepresentation::ShortString.pad_bytes_to_even_length(&mut sh_bytes);
    assert_eq!(sh_bytes, vec![0x41, 0x20]);
  }

  #[test]
  fn length_requirements_test() {
    assert_eq!(
      ValueRepresentation::AgeString.length_requirements(),
      LengthRequirements {
        bytes_max: 4,
        bytes_multiple_of: 1,
        string_characters_max: Some(4),
      }
    );
  }

  #[test]
  fn swap_endianness_test() {
    let mut bytes = vec![0x01, 0x02, 0x03, 0x04];
    ValueRepresentation::UnsignedLong.swap_endianness(&mut bytes);
    assert_eq!(bytes, vec![0x04, 0x03, 0x02, 0x01]);

    let mut bytes = vec![0x01, 0x02];
    ValueRepresentation::ShortString.swap_endianness(&mut bytes);
    assert_eq!(bytes, vec![0x01, 0x02]);
  }
}
