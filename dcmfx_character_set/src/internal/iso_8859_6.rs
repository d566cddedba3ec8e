use crate::internal::lookup_table_8bit;
use crate::internal::utils;

const U: u16 = 0xFFFD;

/// The upper half (0xA0-0xFF) of ISO 8859-6 (Latin/Arabic), used by the
/// Arabic language. Most of the code space outside the Arabic letters
/// themselves is unassigned.
///
#[rustfmt::skip]
const UPPER_HALF: [u16; 96] = [
  0x00A0, U,      U,      U,      0x00A4, U,      U,      U,
  U,      U,      U,      U,      0x060C, 0x00AD, U,      U,
  U,      U,      U,      U,      U,      U,      U,      U,
  U,      U,      0x061B, U,      U,      U,      0x061F, U,
  U,      0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627,
  0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
  0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x0637,
  0x0638, 0x0639, 0x063A, U,      U,      U,      U,      U,
  U,      0x0641, 0x0642, 0x0643, 0x0644, 0x0645, 0x0646, 0x0647,
  0x0648, 0x0649, 0x064A, 0x064B, 0x064C, 0x064D, 0x064E, 0x064F,
  0x0650, 0x0651, 0x0652, U,      U,      U,      U,      U,
  U,      U,      U,      U,      U,      U,      U,      U,
];

const TABLE: [u16; 256] = utils::table_with_ascii_lower_half(UPPER_HALF);

/// Decodes the next codepoint from the given bytes using ISO 8859-6
/// (Latin/Arabic).
///
pub fn decode_next_codepoint(bytes: &[u8]) -> Result<(char, &[u8]), ()> {
  lookup_table_8bit::decode_next_codepoint(bytes, &TABLE)
}
