//! Serializes streams of DICOM P10 tokens, and complete data sets, into raw
//! DICOM P10 bytes.
//!
//! Converting a data set into DICOM P10 tokens is handled by the
//! [`crate::p10_token`] module; this module is only concerned with turning
//! those tokens into bytes, the inverse of what [`crate::p10_read`] does.

#[cfg(not(feature = "std"))]
use alloc::{
  boxed::Box, format, string::ToString, vec, vec::Vec,
};

use byteorder::ByteOrder;

use dcmfx_core::{
  DataElementTag, DataElementValue, DataSet, DataSetPath, RcByteSlice,
  TransferSyntax, dictionary, transfer_syntax, transfer_syntax::Endianness,
};

use crate::{
  P10Error, P10FilterTransform, P10InsertTransform, P10Token, P10WriteConfig,
  internal::{
    data_element_header::{DataElementHeader, ValueLengthSize},
    value_length::ValueLength,
  },
  p10_token, uids,
};

/// Data is compressed into chunks of this size when writing deflated transfer
/// syntaxes.
///
const ZLIB_DEFLATE_CHUNK_SIZE: usize = 64 * 1024;

/// A write context holds the current state of an in-progress DICOM P10 write.
/// DICOM P10 tokens are written to a write context with
/// [`Self::write_token()`], and the resulting output bytes are then read back
/// out with [`Self::read_bytes()`].
///
pub struct P10WriteContext {
  config: P10WriteConfig,
  p10_bytes: Vec<RcByteSlice>,
  p10_total_byte_count: u64,
  is_ended: bool,
  transfer_syntax: &'static TransferSyntax,
  zlib_stream: Option<flate2::Compress>,
  path: DataSetPath,
  sequence_item_counts: Vec<usize>,
}

impl P10WriteContext {
  /// Creates a new write context for writing DICOM P10 data.
  ///
  pub fn new(config: Option<P10WriteConfig>) -> Self {
    Self {
      config: config.unwrap_or_default(),
      p10_bytes: vec![],
      p10_total_byte_count: 0,
      is_ended: false,
      transfer_syntax: &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN,
      zlib_stream: None,
      path: DataSetPath::new(),
      sequence_item_counts: vec![],
    }
  }

  /// Reads the DICOM P10 bytes that have become available out of a write
  /// context since the last call to this function.
  ///
  pub fn read_bytes(&mut self) -> Vec<RcByteSlice> {
    core::mem::take(&mut self.p10_bytes)
  }

  /// Writes a DICOM P10 token to a write context. Use [`Self::read_bytes()`]
  /// to retrieve the new DICOM P10 bytes generated as a result.
  ///
  pub fn write_token(&mut self, token: &P10Token) -> Result<(), P10Error> {
    if self.is_ended {
      return Err(P10Error::TokenStreamInvalid {
        when: "Writing DICOM P10 token".to_string(),
        details: "Received a further token after the write was completed"
          .to_string(),
        token: token.clone(),
      });
    }

    match token {
      // When the File Meta Information token is received, read the transfer
      // syntax it specifies and start a zlib compressor if it's deflated
      P10Token::FileMetaInformation {
        data_set: file_meta_information,
      } => {
        let transfer_syntax_uid = file_meta_information
          .get_string(dictionary::TRANSFER_SYNTAX_UID.tag)
          .unwrap_or(transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN.uid);

        let new_transfer_syntax = TransferSyntax::from_uid(transfer_syntax_uid)
          .map_err(|_| P10Error::TransferSyntaxNotSupported {
            transfer_syntax_uid: transfer_syntax_uid.to_string(),
          })?;

        if new_transfer_syntax.is_deflated {
          self.zlib_stream = Some(flate2::Compress::new(
            flate2::Compression::new(self.config.zlib_compression_level),
            false,
          ));
        }

        self.transfer_syntax = new_transfer_syntax;

        let token_bytes = self.token_to_bytes(token)?;
        self.push_bytes(token_bytes);

        Ok(())
      }

      // When the end token is received, flush any remaining bytes out of the
      // zlib compressor and mark the write as complete
      P10Token::End => {
        if let Some(zlib_stream) = self.zlib_stream.as_mut() {
          loop {
            let mut output = vec![0u8; ZLIB_DEFLATE_CHUNK_SIZE];

            let total_out = zlib_stream.total_out();
            let status = zlib_stream
              .compress(&[], &mut output, flate2::FlushCompress::Finish)
              .unwrap();
            output.resize((zlib_stream.total_out() - total_out) as usize, 0u8);

            if !output.is_empty() {
              self.push_bytes(output.into());
            }

            if status == flate2::Status::StreamEnd {
              break;
            }
          }

          self.zlib_stream = None;
        }

        self.is_ended = true;

        Ok(())
      }

      _ => {
        match token {
          P10Token::DataElementHeader { tag, .. } => {
            self.path.add_data_element(*tag)
          }

          P10Token::SequenceStart { tag, .. } => {
            self.sequence_item_counts.push(0);
            self.path.add_data_element(*tag)
          }

          P10Token::SequenceItemStart { .. } | P10Token::PixelDataItem { .. } => {
            let index = self.sequence_item_counts.last_mut().unwrap();
            *index += 1;
            self.path.add_sequence_item(*index - 1)
          }

          _ => Ok(()),
        }
        .map_err(|details| P10Error::TokenStreamInvalid {
          when: "Writing token to context".to_string(),
          details,
          token: token.clone(),
        })?;

        let token_bytes = self.token_to_bytes(token)?;

        match token {
          P10Token::DataElementValueBytes {
            bytes_remaining: 0, ..
          }
          | P10Token::SequenceItemDelimiter => self.path.pop(),

          P10Token::SequenceDelimiter { .. } => {
            self.sequence_item_counts.pop();
            self.path.pop()
          }

          _ => Ok(()),
        }
        .map_err(|details| P10Error::TokenStreamInvalid {
          when: "Writing token to context".to_string(),
          details,
          token: token.clone(),
        })?;

        if let Some(zlib_stream) = self.zlib_stream.as_mut() {
          let mut bytes_remaining = &token_bytes[..];

          while !bytes_remaining.is_empty() {
            let mut output = vec![0u8; ZLIB_DEFLATE_CHUNK_SIZE];

            let total_in = zlib_stream.total_in();
            let total_out = zlib_stream.total_out();
            zlib_stream
              .compress(bytes_remaining, &mut output, flate2::FlushCompress::None)
              .unwrap();
            output.resize((zlib_stream.total_out() - total_out) as usize, 0u8);

            if !output.is_empty() {
              self.push_bytes(output.into());
            }

            let consumed = (zlib_stream.total_in() - total_in) as usize;
            if consumed == 0 {
              panic!("zlib compressor did not consume any bytes");
            }

            bytes_remaining = &bytes_remaining[consumed..];
          }
        } else {
          self.push_bytes(token_bytes);
        }

        Ok(())
      }
    }
  }

  fn push_bytes(&mut self, bytes: RcByteSlice) {
    self.p10_total_byte_count += bytes.len() as u64;
    self.p10_bytes.push(bytes);
  }

  /// Converts a single DICOM P10 token to raw DICOM P10 bytes.
  ///
  fn token_to_bytes(&self, token: &P10Token) -> Result<RcByteSlice, P10Error> {
    match token {
      P10Token::FilePreambleAndDICMPrefix { preamble } => {
        let mut data = Vec::with_capacity(132);
        data.extend_from_slice(preamble.as_ref());
        data.extend_from_slice(b"DICM");

        Ok(data.into())
      }

      P10Token::FileMetaInformation { data_set } => {
        let mut file_meta_information = data_set.clone();
        prepare_file_meta_information(&mut file_meta_information);

        let mut fmi_bytes = Vec::with_capacity(8192);

        // Group length element, with a placeholder 32-bit length that is
        // filled in once the rest of the bytes are known
        fmi_bytes
          .extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x55, 0x4C, 0x04, 0x00]);
        fmi_bytes.extend_from_slice(&[0, 0, 0, 0]);

        for (tag, value) in file_meta_information.into_iter() {
          let vr = value.value_representation();

          let value_bytes =
            value.bytes().map_err(|_| P10Error::DataInvalid {
              when: "Serializing File Meta Information".to_string(),
              details: format!(
                "Tag '{}' with value representation '{}' is not allowed in \
                 File Meta Information",
                tag, vr
              ),
              path: self.path.clone(),
              offset: self.p10_total_byte_count,
            })?;

          let header_bytes = self.data_element_header_to_bytes(
            &DataElementHeader {
              tag,
              vr: Some(vr),
              length: ValueLength::new(value_bytes.len() as u32),
            },
            Endianness::LittleEndian,
          )?;

          fmi_bytes.extend_from_slice(&header_bytes);
          fmi_bytes.extend_from_slice(value_bytes);
        }

        let fmi_length = (fmi_bytes.len() - 12) as u32;
        byteorder::LittleEndian::write_u32(&mut fmi_bytes[8..12], fmi_length);

        Ok(fmi_bytes.into())
      }

      P10Token::DataElementHeader { tag, vr, length, .. } => {
        let vr = match self.transfer_syntax.vr_serialization {
          transfer_syntax::VrSerialization::VrExplicit => Some(*vr),
          transfer_syntax::VrSerialization::VrImplicit => None,
        };

        self.data_element_header_to_bytes(
          &DataElementHeader {
            tag: *tag,
            vr,
            length: ValueLength::new(*length),
          },
          self.transfer_syntax.endianness,
        )
      }

      P10Token::DataElementValueBytes { vr, data, .. } => {
        if self.transfer_syntax.endianness == Endianness::BigEndian {
          let mut data_vec = data.to_vec();
          vr.swap_endianness(&mut data_vec);
          Ok(data_vec.into())
        } else {
          Ok(data.clone())
        }
      }

      P10Token::SequenceStart { tag, vr, .. } => {
        let vr = match self.transfer_syntax.vr_serialization {
          transfer_syntax::VrSerialization::VrExplicit => Some(*vr),
          transfer_syntax::VrSerialization::VrImplicit => None,
        };

        self.data_element_header_to_bytes(
          &DataElementHeader {
            tag: *tag,
            vr,
            length: ValueLength::Undefined,
          },
          self.transfer_syntax.endianness,
        )
      }

      P10Token::SequenceDelimiter { .. } => self.data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::SEQUENCE_DELIMITATION_ITEM.tag,
          vr: None,
          length: ValueLength::ZERO,
        },
        self.transfer_syntax.endianness,
      ),

      P10Token::SequenceItemStart { .. } => self.data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::ITEM.tag,
          vr: None,
          length: ValueLength::Undefined,
        },
        self.transfer_syntax.endianness,
      ),

      P10Token::SequenceItemDelimiter => self.data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::ITEM_DELIMITATION_ITEM.tag,
          vr: None,
          length: ValueLength::ZERO,
        },
        self.transfer_syntax.endianness,
      ),

      P10Token::PixelDataItem { length, .. } => self.data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::ITEM.tag,
          vr: None,
          length: ValueLength::new(*length),
        },
        self.transfer_syntax.endianness,
      ),

      P10Token::End => Ok(RcByteSlice::empty()),
    }
  }

  /// Serializes a data element header to raw bytes. If the header's VR is
  /// `None` then it's written using implicit VR.
  ///
  fn data_element_header_to_bytes(
    &self,
    header: &DataElementHeader,
    endianness: Endianness,
  ) -> Result<RcByteSlice, P10Error> {
    let length = header.length.to_u32();

    let mut bytes = Vec::with_capacity(12);

    match endianness {
      Endianness::LittleEndian => {
        bytes.extend_from_slice(&header.tag.group.to_le_bytes());
        bytes.extend_from_slice(&header.tag.element.to_le_bytes());
      }
      Endianness::BigEndian => {
        bytes.extend_from_slice(&header.tag.group.to_be_bytes());
        bytes.extend_from_slice(&header.tag.element.to_be_bytes());
      }
    }

    match header.vr {
      None => match endianness {
        Endianness::LittleEndian => {
          bytes.extend_from_slice(&length.to_le_bytes())
        }
        Endianness::BigEndian => bytes.extend_from_slice(&length.to_be_bytes()),
      },

      Some(vr) => {
        bytes.extend_from_slice(vr.to_string().as_bytes());

        match DataElementHeader::value_length_size(vr) {
          ValueLengthSize::U16 => {
            if length > u16::MAX as u32 {
              return Err(P10Error::DataInvalid {
                when: "Serializing data element header".to_string(),
                details: format!(
                  "Length 0x{:X} exceeds the maximum of 0xFFFF",
                  length
                ),
                path: self.path.clone(),
                offset: self.p10_total_byte_count,
              });
            }

            match endianness {
              Endianness::LittleEndian => {
                bytes.extend_from_slice(&(length as u16).to_le_bytes())
              }
              Endianness::BigEndian => {
                bytes.extend_from_slice(&(length as u16).to_be_bytes())
              }
            }
          }

          ValueLengthSize::U32 => {
            bytes.extend_from_slice(&[0, 0]);

            match endianness {
              Endianness::LittleEndian => {
                bytes.extend_from_slice(&length.to_le_bytes())
              }
              Endianness::BigEndian => {
                bytes.extend_from_slice(&length.to_be_bytes())
              }
            }
          }
        }
      }
    }

    Ok(bytes.into())
  }
}

/// Sets the *'(0002,0001) File Meta Information Version'*, *'(0002,0012)
/// Implementation Class UID'* and *'(0002,0013) Implementation Version Name'*
/// values in a File Meta Information data set prior to it being serialized to
/// bytes.
///
fn prepare_file_meta_information(file_meta_information: &mut DataSet) {
  let file_meta_information_version =
    DataElementValue::new_other_byte_string(vec![0, 1]).unwrap();

  file_meta_information.insert(
    dictionary::FILE_META_INFORMATION_VERSION.tag,
    file_meta_information_version,
  );

  file_meta_information.insert(
    dictionary::IMPLEMENTATION_CLASS_UID.tag,
    DataElementValue::new_unique_identifier(&[
      uids::DCMFX_IMPLEMENTATION_CLASS_UID,
    ])
    .unwrap(),
  );

  file_meta_information.insert(
    dictionary::IMPLEMENTATION_VERSION_NAME.tag,
    DataElementValue::new_short_string(&[
      &uids::dcmfx_implementation_version_name(),
    ])
    .unwrap(),
  );
}

/// Converts a data set to DICOM P10 tokens. Each token is returned via a
/// callback.
///
/// The File Preamble, "DICM" prefix, File Meta Information, main data set, and
/// final end token are all included in the emitted tokens. A *'(0008,0005)
/// Specific Character Set'* data element specifying UTF-8 is inserted if one
/// isn't already present, and any File Meta Information data elements present
/// in the main data set are excluded, as these are always sourced from
/// [`DataSet::file_meta_information()`].
///
pub fn data_set_to_tokens<E: From<P10Error>>(
  data_set: &DataSet,
  path: &DataSetPath,
  token_callback: &mut impl FnMut(&P10Token) -> Result<(), E>,
) -> Result<(), E> {
  let mut remove_fmi_transform =
    P10FilterTransform::new(Box::new(|tag: DataElementTag, _, _, _| {
      tag.group != 2
    }));

  let mut data_elements_to_insert = DataSet::new();
  data_elements_to_insert
    .insert_string_value(&dictionary::SPECIFIC_CHARACTER_SET, &["ISO_IR 192"])
    .unwrap();
  let mut insert_specific_character_set_transform =
    P10InsertTransform::new(data_elements_to_insert);

  let mut process_token = |token: &P10Token| -> Result<(), E> {
    if !remove_fmi_transform.add_token(token).map_err(E::from)? {
      return Ok(());
    }

    let tokens = insert_specific_character_set_transform
      .add_token(token)
      .map_err(E::from)?;

    for token in tokens.iter() {
      token_callback(token)?;
    }

    Ok(())
  };

  let preamble_token = P10Token::FilePreambleAndDICMPrefix {
    preamble: Box::new([0; 128]),
  };
  process_token(&preamble_token)?;

  let fmi_token = P10Token::FileMetaInformation {
    data_set: data_set.file_meta_information(),
  };
  process_token(&fmi_token)?;

  p10_token::data_elements_to_tokens(data_set, path, &mut process_token)?;

  process_token(&P10Token::End)
}

/// Converts a data set directly to DICOM P10 bytes. The generated bytes are
/// returned via a callback.
///
pub fn data_set_to_bytes(
  data_set: &DataSet,
  path: &DataSetPath,
  bytes_callback: &mut impl FnMut(RcByteSlice) -> Result<(), P10Error>,
  config: Option<P10WriteConfig>,
) -> Result<(), P10Error> {
  let mut context = P10WriteContext::new(config);

  let mut process_token = |token: &P10Token| -> Result<(), P10Error> {
    context.write_token(token)?;

    for bytes in context.read_bytes() {
      bytes_callback(bytes)?;
    }

    Ok(())
  };

  data_set_to_tokens(data_set, path, &mut process_token)
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmfx_core::ValueRepresentation;

  #[test]
  fn data_element_header_to_bytes_test() {
    assert_eq!(
      P10WriteContext::new(None).data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::WAVEFORM_DATA.tag,
          vr: None,
          length: ValueLength::new(0x12345678),
        },
        Endianness::LittleEndian,
      ),
      Ok(vec![0, 84, 16, 16, 120, 86, 52, 18].into())
    );

    assert_eq!(
      P10WriteContext::new(None).data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::WAVEFORM_DATA.tag,
          vr: None,
          length: ValueLength::new(0x12345678),
        },
        Endianness::BigEndian,
      ),
      Ok(vec![84, 0, 16, 16, 18, 52, 86, 120].into())
    );

    assert_eq!(
      P10WriteContext::new(None).data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::PATIENT_AGE.tag,
          vr: Some(ValueRepresentation::UnlimitedText),
          length: ValueLength::new(0x1234),
        },
        Endianness::LittleEndian,
      ),
      Ok(vec![16, 0, 16, 16, 85, 84, 0, 0, 52, 18, 0, 0].into())
    );

    assert_eq!(
      P10WriteContext::new(None).data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::PIXEL_DATA.tag,
          vr: Some(ValueRepresentation::OtherWordString),
          length: ValueLength::new(0x12345678),
        },
        Endianness::LittleEndian,
      ),
      Ok(vec![224, 127, 16, 0, 79, 87, 0, 0, 120, 86, 52, 18].into())
    );

    assert_eq!(
      P10WriteContext::new(None).data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::PATIENT_AGE.tag,
          vr: Some(ValueRepresentation::AgeString),
          length: ValueLength::new(0x12345),
        },
        Endianness::LittleEndian,
      ),
      Err(P10Error::DataInvalid {
        when: "Serializing data element header".to_string(),
        details: "Length 0x12345 exceeds the maximum of 0xFFFF".to_string(),
        path: DataSetPath::new(),
        offset: 0,
      })
    );

    assert_eq!(
      P10WriteContext::new(None).data_element_header_to_bytes(
        &DataElementHeader {
          tag: dictionary::SMALLEST_IMAGE_PIXEL_VALUE.tag,
          vr: Some(ValueRepresentation::SignedShort),
          length: ValueLength::new(0x1234),
        },
        Endianness::LittleEndian,
      ),
      Ok(vec![40, 0, 6, 1, 83, 83, 52, 18].into())
    );
  }

  #[test]
  fn round_trip_simple_data_set_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::PATIENT_SEX, &["M"])
      .unwrap();

    let mut bytes = vec![];
    data_set_to_bytes(
      &data_set,
      &DataSetPath::new(),
      &mut |chunk| {
        bytes.extend_from_slice(&chunk);
        Ok(())
      },
      None,
    )
    .unwrap();

    assert_eq!(&bytes[128..132], b"DICM");
  }
}
