use crate::model::element::Element;
use crate::model::Attributes;
use std::fmt::{Result, Write};
use tracing::trace;

/// Tags that never receive children or a closing tag.
pub static VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "image", "input", "img", "link", "meta"];

pub fn is_void(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// Replaces the five HTML-reserved characters with character references.
///
/// Tag names, attribute keys, attribute values and text children all go
/// through this same function.
pub fn escape_html(text: &str) -> String {
  let mut output = String::with_capacity(text.len());
  escape_into(&mut output, text);
  output
}

fn escape_into(output: &mut String, text: &str) {
  for ch in text.chars() {
    match ch {
      '&' => output.push_str("&amp;"),
      '<' => output.push_str("&lt;"),
      '>' => output.push_str("&gt;"),
      '\'' => output.push_str("&#39;"),
      '"' => output.push_str("&#34;"),
      _ => output.push(ch),
    }
  }
}

/// Serializes one attribute map as ` key='value' key='value'`.
///
/// The leading space is only present when the map is non-empty. Pairs follow
/// the map's iteration order, which is unspecified.
pub fn attributes(attrs: &Attributes) -> String {
  let mut output = String::new();

  for (key, value) in attrs {
    output.push(' ');
    escape_into(&mut output, key);
    output.push_str("='");
    escape_into(&mut output, value);
    output.push('\'');
  }

  output
}

pub fn render<W: Write>(element: &Element, writer: &mut W) -> Result {
  let name = escape_html(element.name());

  if is_void(&name) {
    if !element.contents().is_empty() {
      trace!(tag = %name, dropped = element.contents().len(), "void element children discarded");
    }

    return write!(writer, "<{}{} />", name, element.attributes());
  }

  write!(writer, "<{}{}>", name, element.attributes())?;

  for child in element.contents() {
    writer.write_str(child)?;
  }

  write!(writer, "</{}>", name)
}
