#[cfg(not(feature = "std"))]
use alloc::string::String;

/// The `char` for the replacement character used when invalid string data is
/// encountered.
///
pub(crate) const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Strips spaces, dashes, and underscores from a character set's defined
/// term so that near-equivalent spellings such as `"ISO-IR 100"`,
/// `"ISO_IR100"` and `"iso ir 100"` all compare equal.
///
pub(crate) fn canonicalize(s: &str) -> String {
  s.chars()
    .filter(|c| !matches!(c, ' ' | '-' | '_'))
    .collect()
}

/// Converts an integer codepoint value to a `char`. The replacement
/// character is returned if the integer is not a valid codepoint.
///
pub(crate) fn codepoint_to_char(codepoint: u32) -> char {
  char::from_u32(codepoint).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Builds a full 256-entry lookup table for a single-byte character set
/// whose lower half (0x00-0x9F) is identical to ISO 646/US-ASCII plus the C1
/// control range, with only the upper half (0xA0-0xFF) varying between
/// encodings.
///
/// This is the shape of every ISO 8859 character set and several others, so
/// each one only needs to specify its 96-entry upper half.
///
pub(crate) const fn table_with_ascii_lower_half(
  upper_half: [u16; 96],
) -> [u16; 256] {
  let mut table = [0u16; 256];

  let mut i = 0;
  while i < 160 {
    table[i] = i as u16;
    i += 1;
  }

  let mut i = 0;
  while i < 96 {
    table[160 + i] = upper_half[i];
    i += 1;
  }

  table
}
