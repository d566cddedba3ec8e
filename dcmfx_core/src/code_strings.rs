//! Converts a `CodeString` value to a human-readable description, for the
//! handful of code strings whose raw value isn't self-explanatory.
//!
//! This is a deliberately small subset of the code strings defined across
//! PS3.3 -- just the ones this library's data set printer describes by
//! default. Values and tags with no entry here still round-trip correctly;
//! they're just shown as their raw `CodeString` value.

use crate::{DataElementTag, dictionary};

/// Converts a `CodeString` value to a descriptive string if one is available.
///
#[allow(clippy::result_unit_err)]
pub fn describe(value: &str, tag: DataElementTag) -> Result<&str, ()> {
  match tag {
    tag if tag == dictionary::MODALITY.tag => match value {
      "AU" => Ok("Audio"),
      "BDUS" => Ok("Bone Densitometry (ultrasound)"),
      "CR" => Ok("Computed Radiography"),
      "CT" => Ok("Computed Tomography"),
      "DX" => Ok("Digital Radiography"),
      "ECG" => Ok("Electrocardiography"),
      "ES" => Ok("Endoscopy"),
      "GM" => Ok("General Microscopy"),
      "HD" => Ok("Hemodynamic Waveform"),
      "IO" => Ok("Intra-Oral Radiography"),
      "KO" => Ok("Key Object Selection"),
      "MG" => Ok("Mammography"),
      "MR" => Ok("Magnetic Resonance"),
      "NM" => Ok("Nuclear Medicine"),
      "OT" => Ok("Other"),
      "PR" => Ok("Presentation State"),
      "PT" => Ok("Positron emission tomography (PET)"),
      "RF" => Ok("Radio Fluoroscopy"),
      "RTDOSE" => Ok("Radiotherapy Dose"),
      "RTIMAGE" => Ok("Radiotherapy Image"),
      "RTPLAN" => Ok("Radiotherapy Plan"),
      "RTSTRUCT" => Ok("Radiotherapy Structure Set"),
      "SEG" => Ok("Segmentation"),
      "SM" => Ok("Slide Microscopy"),
      "SR" => Ok("SR Document"),
      "US" => Ok("Ultrasound"),
      "XA" => Ok("X-Ray Angiography"),
      _ => Err(()),
    },

    tag if tag == dictionary::PATIENT_SEX.tag => match value {
      "M" => Ok("Male"),
      "F" => Ok("Female"),
      "O" => Ok("Other"),
      _ => Err(()),
    },

    _ => Err(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn describe_test() {
    assert_eq!(describe("CT", dictionary::MODALITY.tag), Ok("Computed Tomography"));
    assert_eq!(describe("M", dictionary::PATIENT_SEX.tag), Ok("Male"));
    assert_eq!(describe("ZZ", dictionary::MODALITY.tag), Err(()));
    assert_eq!(describe("CT", dictionary::PATIENT_SEX.tag), Err(()));
  }
}
