//! Defines the full catalog of character sets recognized by DICOM's
//! *"Specific Character Set"* data element, and the machinery used to look
//! them up by their defined term and decode bytes with them.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::internal::{
  gb_2312, gb18030, gbk, iso_8859_1, iso_8859_2, iso_8859_3, iso_8859_4,
  iso_8859_5, iso_8859_6, iso_8859_7, iso_8859_8, iso_8859_9, iso_8859_15,
  iso_ir_6, jis_x_0201, jis_x_0208, jis_x_0212, ks_x_1001, tis_620, utf8,
  utils,
};

/// A decoder for a single byte sequence that returns one codepoint and the
/// remaining unconsumed bytes. Returns `Err(())` only when given no bytes.
///
pub type Decoder = fn(&[u8]) -> Result<(char, &[u8]), ()>;

/// A single code element, i.e. a character set that's been designated into
/// either the G0 or G1 position by an ISO 2022 escape sequence (or is the
/// implicit default for a character set that doesn't use ISO 2022).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeElement {
  /// The escape sequence that designates this code element, stored as up to
  /// three bytes. A value of `0` in the third slot means the escape sequence
  /// is only two bytes long.
  pub escape_sequence: [u8; 3],

  pub decoder: Decoder,
}

/// The active G0 and G1 code elements used while decoding an ISO 2022
/// string. Either may be absent, in which case ISO IR 6 is used as a
/// fallback.
///
pub type CodeElementPair = (Option<CodeElement>, Option<CodeElement>);

/// A single character set recognized by DICOM, as named by one of the
/// defined terms in the *"Specific Character Set"* data element, e.g.
/// `"ISO_IR 100"` or `"ISO 2022 IR 87"`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterSet {
  /// A single-byte character set with no support for ISO 2022 code
  /// extension, e.g. ISO_IR 100 (Latin-1). Always decoded on its own.
  SingleByteWithoutExtensions {
    defined_term: &'static str,
    decoder: Decoder,
  },

  /// A single-byte character set that can be combined with others via ISO
  /// 2022 escape sequences, e.g. ISO 2022 IR 100.
  SingleByteWithExtensions {
    defined_term: &'static str,
    code_element_g0: CodeElement,
    code_element_g1: Option<CodeElement>,
  },

  /// A multi-byte character set that can be combined with others via ISO
  /// 2022 escape sequences, e.g. ISO 2022 IR 87 (JIS X 0208).
  MultiByteWithExtensions {
    defined_term: &'static str,
    code_element_g0: Option<CodeElement>,
    code_element_g1: Option<CodeElement>,
  },

  /// A multi-byte character set with no support for ISO 2022 code
  /// extension, e.g. ISO_IR 192 (UTF-8) and GB18030.
  MultiByteWithoutExtensions {
    defined_term: &'static str,
    decoder: Decoder,
  },
}

impl CharacterSet {
  /// Returns the G0/G1 code elements that this character set designates
  /// when it's referenced in a *"Specific Character Set"* value.
  ///
  pub fn code_elements(&self) -> CodeElementPair {
    match self {
      CharacterSet::SingleByteWithExtensions {
        code_element_g0,
        code_element_g1,
        ..
      } => (Some(*code_element_g0), *code_element_g1),

      CharacterSet::MultiByteWithExtensions {
        code_element_g0,
        code_element_g1,
        ..
      } => (*code_element_g0, *code_element_g1),

      _ => (None, None),
    }
  }

  fn defined_term(&self) -> &'static str {
    match self {
      CharacterSet::SingleByteWithoutExtensions { defined_term, .. }
      | CharacterSet::SingleByteWithExtensions { defined_term, .. }
      | CharacterSet::MultiByteWithExtensions { defined_term, .. }
      | CharacterSet::MultiByteWithoutExtensions { defined_term, .. } => {
        defined_term
      }
    }
  }
}

macro_rules! code_element {
  ($decoder:expr, $a:expr, $b:expr) => {
    CodeElement { escape_sequence: [$a, $b, 0], decoder: $decoder }
  };
  ($decoder:expr, $a:expr, $b:expr, $c:expr) => {
    CodeElement { escape_sequence: [$a, $b, $c], decoder: $decoder }
  };
}

pub static ISO_IR_6: CharacterSet = CharacterSet::SingleByteWithoutExtensions {
  defined_term: "ISO_IR 6",
  decoder: iso_ir_6::decode_next_codepoint,
};

pub static ISO_IR_13: CharacterSet = CharacterSet::SingleByteWithoutExtensions {
  defined_term: "ISO_IR 13",
  decoder: jis_x_0201::decode_next_codepoint,
};

pub static ISO_IR_100: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 100",
    decoder: iso_8859_1::decode_next_codepoint,
  };

pub static ISO_IR_101: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 101",
    decoder: iso_8859_2::decode_next_codepoint,
  };

pub static ISO_IR_109: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 109",
    decoder: iso_8859_3::decode_next_codepoint,
  };

pub static ISO_IR_110: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 110",
    decoder: iso_8859_4::decode_next_codepoint,
  };

pub static ISO_IR_144: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 144",
    decoder: iso_8859_5::decode_next_codepoint,
  };

pub static ISO_IR_127: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 127",
    decoder: iso_8859_6::decode_next_codepoint,
  };

pub static ISO_IR_126: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 126",
    decoder: iso_8859_7::decode_next_codepoint,
  };

pub static ISO_IR_138: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 138",
    decoder: iso_8859_8::decode_next_codepoint,
  };

pub static ISO_IR_148: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 148",
    decoder: iso_8859_9::decode_next_codepoint,
  };

pub static ISO_IR_203: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 203",
    decoder: iso_8859_15::decode_next_codepoint,
  };

pub static ISO_IR_166: CharacterSet =
  CharacterSet::SingleByteWithoutExtensions {
    defined_term: "ISO_IR 166",
    decoder: tis_620::decode_next_codepoint,
  };

pub static ISO_IR_192: CharacterSet =
  CharacterSet::MultiByteWithoutExtensions {
    defined_term: "ISO_IR 192",
    decoder: utf8::decode_next_codepoint,
  };

pub static GB18030: CharacterSet = CharacterSet::MultiByteWithoutExtensions {
  defined_term: "GB18030",
  decoder: gb18030::decode_next_codepoint,
};

pub static GBK: CharacterSet = CharacterSet::MultiByteWithoutExtensions {
  defined_term: "GBK",
  decoder: gbk::decode_next_codepoint,
};

pub static ISO_2022_IR_6: CharacterSet = CharacterSet::SingleByteWithExtensions {
  defined_term: "ISO 2022 IR 6",
  code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
  code_element_g1: None,
};

pub static ISO_2022_IR_13: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 13",
    code_element_g0: code_element!(
      jis_x_0201::decode_romaji_next_codepoint,
      0x28,
      0x4A
    ),
    code_element_g1: Some(code_element!(
      jis_x_0201::decode_katakana_next_codepoint,
      0x29,
      0x49
    )),
  };

pub static ISO_2022_IR_100: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 100",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_1::decode_next_codepoint,
      0x2D,
      0x41
    )),
  };

pub static ISO_2022_IR_101: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 101",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_2::decode_next_codepoint,
      0x2D,
      0x42
    )),
  };

pub static ISO_2022_IR_109: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 109",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_3::decode_next_codepoint,
      0x2D,
      0x43
    )),
  };

pub static ISO_2022_IR_110: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 110",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_4::decode_next_codepoint,
      0x2D,
      0x44
    )),
  };

pub static ISO_2022_IR_144: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 144",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_5::decode_next_codepoint,
      0x2D,
      0x4C
    )),
  };

pub static ISO_2022_IR_127: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 127",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_6::decode_next_codepoint,
      0x2D,
      0x47
    )),
  };

pub static ISO_2022_IR_126: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 126",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_7::decode_next_codepoint,
      0x2D,
      0x46
    )),
  };

pub static ISO_2022_IR_138: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 138",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_8::decode_next_codepoint,
      0x2D,
      0x48
    )),
  };

pub static ISO_2022_IR_148: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 148",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_9::decode_next_codepoint,
      0x2D,
      0x4D
    )),
  };

pub static ISO_2022_IR_203: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 203",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      iso_8859_15::decode_next_codepoint,
      0x2D,
      0x62
    )),
  };

pub static ISO_2022_IR_166: CharacterSet =
  CharacterSet::SingleByteWithExtensions {
    defined_term: "ISO 2022 IR 166",
    code_element_g0: code_element!(iso_ir_6::decode_next_codepoint, 0x28, 0x42),
    code_element_g1: Some(code_element!(
      tis_620::decode_next_codepoint,
      0x2D,
      0x54
    )),
  };

pub static ISO_2022_IR_87: CharacterSet = CharacterSet::MultiByteWithExtensions {
  defined_term: "ISO 2022 IR 87",
  code_element_g0: Some(code_element!(
    jis_x_0208::decode_next_codepoint,
    0x24,
    0x42
  )),
  code_element_g1: None,
};

pub static ISO_2022_IR_159: CharacterSet =
  CharacterSet::MultiByteWithExtensions {
    defined_term: "ISO 2022 IR 159",
    code_element_g0: Some(code_element!(
      jis_x_0212::decode_next_codepoint,
      0x24,
      0x28,
      0x44
    )),
    code_element_g1: None,
  };

pub static ISO_2022_IR_149: CharacterSet =
  CharacterSet::MultiByteWithExtensions {
    defined_term: "ISO 2022 IR 149",
    code_element_g0: Some(code_element!(
      ks_x_1001::decode_next_codepoint,
      0x24,
      0x28,
      0x43
    )),
    code_element_g1: None,
  };

pub static ISO_2022_IR_58: CharacterSet = CharacterSet::MultiByteWithExtensions {
  defined_term: "ISO 2022 IR 58",
  code_element_g0: Some(code_element!(
    gb_2312::decode_next_codepoint,
    0x24,
    0x28,
    0x45
  )),
  code_element_g1: None,
};

static ALL_CHARACTER_SETS: &[&CharacterSet] = &[
  &ISO_IR_6,
  &ISO_IR_13,
  &ISO_IR_100,
  &ISO_IR_101,
  &ISO_IR_109,
  &ISO_IR_110,
  &ISO_IR_144,
  &ISO_IR_127,
  &ISO_IR_126,
  &ISO_IR_138,
  &ISO_IR_148,
  &ISO_IR_203,
  &ISO_IR_166,
  &ISO_IR_192,
  &GB18030,
  &GBK,
  &ISO_2022_IR_6,
  &ISO_2022_IR_13,
  &ISO_2022_IR_100,
  &ISO_2022_IR_101,
  &ISO_2022_IR_109,
  &ISO_2022_IR_110,
  &ISO_2022_IR_144,
  &ISO_2022_IR_127,
  &ISO_2022_IR_126,
  &ISO_2022_IR_138,
  &ISO_2022_IR_148,
  &ISO_2022_IR_203,
  &ISO_2022_IR_166,
  &ISO_2022_IR_87,
  &ISO_2022_IR_159,
  &ISO_2022_IR_149,
  &ISO_2022_IR_58,
];

/// Looks up a `CharacterSet` from its canonical defined term, e.g.
/// `"ISO_IR 100"` or `"ISO 2022 IR 87"`. The input is expected to already be
/// upper-cased and trimmed; spaces, dashes, and underscores are ignored so
/// that variants such as `"ISO-IR 100"` and `"iso_ir100"` are also accepted.
///
pub fn from_string(s: String) -> Result<&'static CharacterSet, String> {
  let canonical = utils::canonicalize(&s);

  ALL_CHARACTER_SETS
    .iter()
    .find(|charset| utils::canonicalize(charset.defined_term()) == canonical)
    .copied()
    .ok_or_else(|| format!("Unrecognized specific character set: '{s}'"))
}

/// Decodes a full byte slice using a single non-extension decoder, i.e. one
/// that doesn't support ISO 2022 escape sequences or delimiter resets.
///
pub fn decode_bytes(mut bytes: &[u8], decoder: Decoder) -> String {
  let mut s = String::with_capacity(bytes.len());

  while !bytes.is_empty() {
    match decoder(bytes) {
      Ok((ch, rest)) => {
        s.push(ch);
        bytes = rest;
      }

      Err(()) => break,
    }
  }

  s
}
