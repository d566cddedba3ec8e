use crate::internal::gbk;
use crate::internal::utils;

/// Decodes the next codepoint from the given bytes using GB18030, a
/// variable-width encoding (1, 2, or 4 bytes per character) that is a
/// superset of GBK and ASCII.
///
/// The 4-byte sequences that encode the supplementary planes (U+10000 to
/// U+10FFFF) follow a fixed linear relationship to their codepoint and so
/// are decoded exactly. The 2-byte range is lead/trail-compatible with GBK
/// and reuses its lookup table. The 4-byte sequences used to fill gaps in
/// the BMP require a further per-codepoint mapping table that isn't
/// reproduced here; those sequences are still consumed at the correct
/// length but decode to the replacement character.
///
pub fn decode_next_codepoint(bytes: &[u8]) -> Result<(char, &[u8]), ()> {
  match bytes {
    [byte_0, rest @ ..] if *byte_0 <= 0x7F => {
      Ok((utils::codepoint_to_char(*byte_0 as u32), rest))
    }

    // Four-byte sequence encoding a supplementary-plane codepoint.
    [byte_0, byte_1, byte_2, byte_3, rest @ ..]
      if (0x90..=0xE3).contains(byte_0)
        && (0x30..=0x39).contains(byte_1)
        && (0x81..=0xFE).contains(byte_2)
        && (0x30..=0x39).contains(byte_3) =>
    {
      let linear = (u32::from(*byte_0 - 0x90) * 10 * 126 * 10)
        + (u32::from(*byte_1 - 0x30) * 126 * 10)
        + (u32::from(*byte_2 - 0x81) * 10)
        + u32::from(*byte_3 - 0x30);

      Ok((utils::codepoint_to_char(0x10000 + linear), rest))
    }

    // Four-byte sequence filling a BMP gap; not individually mapped.
    [byte_0, byte_1, _, _, rest @ ..]
      if (0x81..=0xFE).contains(byte_0) && (0x30..=0x39).contains(byte_1) =>
    {
      Ok((utils::REPLACEMENT_CHARACTER, rest))
    }

    // Two-byte GBK-compatible sequence.
    [byte_0, byte_1, rest @ ..]
      if (0x81..=0xFE).contains(byte_0)
        && (0x40..=0xFE).contains(byte_1)
        && *byte_1 != 0x7F =>
    {
      match gbk::table_index(*byte_0, *byte_1) {
        Some(index) => {
          let codepoint = gbk::TABLE[index] as u32;

          if codepoint == 0 {
            Ok((utils::REPLACEMENT_CHARACTER, rest))
          } else {
            Ok((utils::codepoint_to_char(codepoint), rest))
          }
        }

        None => Ok((utils::REPLACEMENT_CHARACTER, rest)),
      }
    }

    [_, rest @ ..] => Ok((utils::REPLACEMENT_CHARACTER, rest)),

    _ => Err(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_next_codepoint_ascii_test() {
    assert_eq!(decode_next_codepoint(&[0x41]).unwrap().0, 'A');
  }

  #[test]
  fn decode_next_codepoint_two_byte_test() {
    assert_eq!(decode_next_codepoint(&[0xB0, 0xA1]).unwrap().0, '啊');
  }

  #[test]
  fn decode_next_codepoint_four_byte_test() {
    assert_eq!(
      decode_next_codepoint(&[0x90, 0x30, 0x81, 0x30]).unwrap().0,
      '𐀀'
    );
  }
}
