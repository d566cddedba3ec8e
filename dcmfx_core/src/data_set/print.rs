//! Pretty-prints a [`DataSet`] as a human-readable tree of lines, with
//! optional ANSI color styling for interactive terminals.
//!
//! This is a separate styling path to the one used by [`crate::DcmfxError`]:
//! that trait colors error output via `owo_colors`, whereas this module hand
//! writes the ANSI escape codes it needs because it paints individual
//! sub-strings of a line (tag, name, value) in different colors rather than
//! coloring a line as a whole.

use std::io::IsTerminal;

use crate::{DataElementTag, DataElementValue, DataSet, dictionary};

/// Controls how a data set is formatted by [`DataSet::print`] and
/// [`data_set_to_lines`].
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataSetPrintOptions {
  /// Whether to style the output using ANSI color codes. When `None`, color
  /// is auto-detected based on whether stdout is an interactive terminal
  /// that supports color.
  pub styled: Option<bool>,

  /// The maximum width in characters of each printed line. Values and
  /// contextual details are truncated to fit. When `None`, the width of the
  /// current terminal is used, falling back to 80 columns when it can't be
  /// determined.
  pub max_width: Option<usize>,
}

impl DataSetPrintOptions {
  /// Returns whether output should be styled with ANSI color codes, resolving
  /// auto-detection if needed.
  ///
  fn resolve_styled(&self) -> bool {
    match self.styled {
      Some(styled) => styled,
      None => {
        std::io::stdout().is_terminal()
          && supports_color::on(supports_color::Stream::Stdout).is_some()
      }
    }
  }

  /// Returns the maximum line width to use, resolving auto-detection if
  /// needed.
  ///
  fn resolve_max_width(&self) -> usize {
    match self.max_width {
      Some(max_width) => max_width,
      None => terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80),
    }
  }
}

impl DataSet {
  /// Prints a data set to stdout as a human-readable tree of lines.
  ///
  pub fn print(&self, options: &DataSetPrintOptions) {
    for line in data_set_to_lines(self, options, 0) {
      println!("{line}");
    }
  }
}

/// Converts a data set into lines of human-readable text, with sequences
/// recursively indented under their parent data element.
///
pub fn data_set_to_lines(
  data_set: &DataSet,
  options: &DataSetPrintOptions,
  indent: usize,
) -> Vec<String> {
  let styled = options.resolve_styled();
  let max_width = options.resolve_max_width();

  let mut lines = vec![];

  for (tag, value) in data_set.iter() {
    let private_creator = data_set.private_creator_for_tag(*tag).ok();
    let name = dictionary::tag_name(*tag, private_creator);

    let prefix = format_data_element_prefix(*tag, &name, indent, styled);

    match value.sequence_items() {
      Ok(items) => {
        lines.push(format!("{prefix} [", prefix = prefix));

        for (index, item) in items.iter().enumerate() {
          let item_prefix = " ".repeat((indent + 1) * 2);

          lines.push(format!(
            "{item_prefix}{} {{",
            text_cyan_and_reset(&format!("Item {index}"), styled)
          ));

          lines.extend(data_set_to_lines(item, options, indent + 2));

          lines.push(format!("{item_prefix}}}"));
        }

        lines.push(format!("{}]", " ".repeat(indent * 2)));
      }

      Err(_) => {
        let available_width = max_width.saturating_sub(prefix_width(&prefix));
        let value_string = value.to_string(*tag, available_width.max(10));

        lines.push(format!(
          "{prefix} {}",
          text_green(&value_string, styled)
        ));
      }
    }
  }

  lines
}

/// Builds the `"(gggg,eeee) Name"` prefix shown before each data element's
/// value, colored per [`DataSetPrintOptions`].
///
fn format_data_element_prefix(
  tag: DataElementTag,
  name: &str,
  indent: usize,
  styled: bool,
) -> String {
  format!(
    "{}{}{}",
    " ".repeat(indent * 2),
    text_blue(&tag.to_string(), styled),
    text_reset_to_bold(&format!(" {name}"), styled)
  )
}

/// Returns the printable width of a prefix string, ignoring the ANSI escape
/// codes it may contain.
///
fn prefix_width(prefix: &str) -> usize {
  let mut width = 0;
  let mut in_escape = false;

  for c in prefix.chars() {
    if in_escape {
      if c == 'm' {
        in_escape = false;
      }
    } else if c == '\x1B' {
      in_escape = true;
    } else {
      width += 1;
    }
  }

  width
}

fn text_blue(s: &str, styled: bool) -> String {
  if styled {
    format!("\x1B[34m{s}\x1B[0m")
  } else {
    s.to_string()
  }
}

fn text_green(s: &str, styled: bool) -> String {
  if styled {
    format!("\x1B[32m{s}\x1B[0m")
  } else {
    s.to_string()
  }
}

fn text_cyan_and_reset(s: &str, styled: bool) -> String {
  if styled {
    format!("\x1B[36m{s}\x1B[0m")
  } else {
    s.to_string()
  }
}

fn text_reset_to_bold(s: &str, styled: bool) -> String {
  if styled {
    format!("\x1B[0m\x1B[1m{s}\x1B[0m")
  } else {
    s.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary;

  #[test]
  fn data_set_to_lines_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::MODALITY, &["CT"])
      .unwrap();

    let options = DataSetPrintOptions {
      styled: Some(false),
      max_width: Some(80),
    };

    let lines = data_set_to_lines(&data_set, &options, 0);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Modality"));
    assert!(lines[0].contains("CT"));
  }

  #[test]
  fn data_set_to_lines_sequence_test() {
    use crate::{DataElementTag, DataElementValue};

    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::MODALITY, &["MR"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set.insert(
      DataElementTag::new(0x0008, 0x1140),
      DataElementValue::new_sequence(vec![item]),
    );

    let options = DataSetPrintOptions {
      styled: Some(false),
      max_width: Some(80),
    };

    let lines = data_set_to_lines(&data_set, &options, 0);
    assert!(lines.iter().any(|line| line.contains("Item 0")));
  }
}
