use crate::internal::utils;

/// Decodes the next codepoint from the given bytes using the ISO IR 6
/// repertoire, also known as ISO 646 and US-ASCII. This is the default
/// character set used by DICOM, and is also the default G0 code element for
/// every ISO 2022 character set.
///
pub fn decode_next_codepoint(bytes: &[u8]) -> Result<(char, &[u8]), ()> {
  match bytes {
    [byte_0, rest @ ..] if *byte_0 <= 0x7F => {
      Ok((utils::codepoint_to_char(*byte_0 as u32), rest))
    }

    [_, rest @ ..] => Ok((utils::REPLACEMENT_CHARACTER, rest)),

    _ => Err(()),
  }
}
