use crate::internal::utils;

const YEN_SIGN: char = '\u{00A5}';
const OVERLINE: char = '\u{203E}';

/// Maps a single katakana byte in the range 0xA1-0xDF to its half-width
/// katakana codepoint. Bytes outside this range are not valid JIS X 0201
/// katakana.
///
fn katakana_codepoint(byte: u8) -> char {
  if (0xA1..=0xDF).contains(&byte) {
    utils::codepoint_to_char(0xFF61 + u32::from(byte - 0xA1))
  } else {
    utils::REPLACEMENT_CHARACTER
  }
}

/// Decodes the next codepoint from the given bytes using the full JIS X
/// 0201 repertoire, i.e. both the Roman (G0) half and the katakana (G1)
/// half in a single byte-indexed character set. This is used when `ISO_IR
/// 13` is referenced directly, without ISO 2022 code extension.
///
/// The backslash byte (0x5C) decodes to the yen sign, matching the Roman
/// half of JIS X 0201. Use [`decode_next_codepoint_allowing_backslash`] when
/// decoding a string type that supports multiplicity, where 0x5C must
/// remain a literal backslash so that value splitting still works.
///
pub fn decode_next_codepoint(bytes: &[u8]) -> Result<(char, &[u8]), ()> {
  decode(bytes, false)
}

/// As [`decode_next_codepoint`], but decodes the backslash byte (0x5C) as a
/// literal backslash rather than the yen sign. Used when decoding
/// multi-valued strings and person names, where the backslash is a
/// component delimiter rather than character data.
///
pub fn decode_next_codepoint_allowing_backslash(
  bytes: &[u8],
) -> Result<(char, &[u8]), ()> {
  decode(bytes, true)
}

fn decode(bytes: &[u8], allow_backslash: bool) -> Result<(char, &[u8]), ()> {
  match bytes {
    [0x5C, rest @ ..] => {
      Ok((if allow_backslash { '\\' } else { YEN_SIGN }, rest))
    }

    [0x7E, rest @ ..] => Ok((OVERLINE, rest)),

    [byte_0, rest @ ..] if *byte_0 <= 0x7F => {
      Ok((utils::codepoint_to_char(*byte_0 as u32), rest))
    }

    [byte_0, rest @ ..] => Ok((katakana_codepoint(*byte_0), rest)),

    _ => Err(()),
  }
}

/// Decodes the next codepoint using only the Roman (G0) half of JIS X 0201,
/// as designated by the `ESC ( J` escape sequence. This is identical to
/// ISO IR 6 (ASCII) except that the backslash and tilde positions carry the
/// yen sign and overline instead.
///
pub fn decode_romaji_next_codepoint(
  bytes: &[u8],
) -> Result<(char, &[u8]), ()> {
  match bytes {
    [0x5C, rest @ ..] => Ok((YEN_SIGN, rest)),
    [0x7E, rest @ ..] => Ok((OVERLINE, rest)),

    [byte_0, rest @ ..] if *byte_0 <= 0x7F => {
      Ok((utils::codepoint_to_char(*byte_0 as u32), rest))
    }

    [_, rest @ ..] => Ok((utils::REPLACEMENT_CHARACTER, rest)),

    _ => Err(()),
  }
}

/// Decodes the next codepoint using only the katakana (G1) half of JIS X
/// 0201, as designated by the `ESC ) I` escape sequence.
///
pub fn decode_katakana_next_codepoint(
  bytes: &[u8],
) -> Result<(char, &[u8]), ()> {
  match bytes {
    [byte_0, rest @ ..] => Ok((katakana_codepoint(*byte_0), rest)),
    _ => Err(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_next_codepoint_test() {
    assert_eq!(decode_next_codepoint(&[0x5C]).unwrap().0, YEN_SIGN);
    assert_eq!(decode_next_codepoint(&[0x7E]).unwrap().0, OVERLINE);
    assert_eq!(decode_next_codepoint(&[0xA6]).unwrap().0, 'ｦ');
  }

  #[test]
  fn decode_next_codepoint_allowing_backslash_test() {
    assert_eq!(
      decode_next_codepoint_allowing_backslash(&[0x5C]).unwrap().0,
      '\\'
    );
  }
}
