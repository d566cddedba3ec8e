use crate::internal::lookup_table_8bit;
use crate::internal::utils;

const U: u16 = 0xFFFD;

/// The upper half (0xA0-0xFF) of ISO 8859-8 (Latin/Hebrew). The codec only
/// needs the logical (unshaped) Hebrew letters; right-to-left presentation
/// is a rendering concern outside its scope.
///
#[rustfmt::skip]
const UPPER_HALF: [u16; 96] = [
  0x00A0, U,      0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
  0x00A8, 0x00A9, 0x00D7, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
  0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
  0x00B8, 0x00B9, 0x00F7, 0x00BB, 0x00BC, 0x00BD, 0x00BE, U,
  U,      U,      U,      U,      U,      U,      U,      U,
  U,      U,      U,      U,      U,      U,      U,      U,
  U,      U,      U,      U,      U,      U,      U,      U,
  U,      U,      U,      U,      U,      U,      U,      0x2017,
  0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7,
  0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
  0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7,
  0x05E8, 0x05E9, 0x05EA, U,      U,      0x200E, 0x200F, U,
];

const TABLE: [u16; 256] = utils::table_with_ascii_lower_half(UPPER_HALF);

/// Decodes the next codepoint from the given bytes using ISO 8859-8
/// (Latin/Hebrew).
///
pub fn decode_next_codepoint(bytes: &[u8]) -> Result<(char, &[u8]), ()> {
  lookup_table_8bit::decode_next_codepoint(bytes, &TABLE)
}
