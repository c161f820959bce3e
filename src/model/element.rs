use crate::render::html;
use std::fmt;
use std::io::{self, Write};

/// A built element waiting to be realized into markup.
///
/// Children are already rendered to strings by the time they are stored here,
/// so an element is a plain tree of owned text and realizing it has no side
/// effects.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Element {
  name: String,
  attributes: String,
  contents: Vec<String>,
}

impl Element {
  pub(crate) fn new(name: String, attributes: String, contents: Vec<String>) -> Element {
    Element {
      name,
      attributes,
      contents,
    }
  }

  /// The tag name as given, before escaping.
  pub fn name(&self) -> &str {
    &self.name
  }

  pub(crate) fn attributes(&self) -> &str {
    &self.attributes
  }

  pub(crate) fn contents(&self) -> &[String] {
    &self.contents
  }

  pub fn render(&self) -> String {
    self.to_string()
  }

  pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", self)
  }

  pub fn into_thunk(self) -> impl Fn() -> String {
    move || self.render()
  }
}

impl fmt::Display for Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    html::render(self, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::arg::{mark_unsafe, Arg};
  use pretty_assertions::assert_eq;
  use std::io::BufWriter;

  #[test]
  fn render_is_repeatable() {
    let element = h!("div", attrs!("id" => "x"), "a & b", h!("span", "c"));
    let first = element.render();

    assert_eq!(first, "<div id='x'>a &amp; b<span>c</span></div>");
    assert_eq!(element.render(), first);
    assert_eq!(element.to_string(), first);
  }

  #[test]
  fn thunk_yields_same_markup_every_call() {
    let thunk = h!("em", "hi").into_thunk();

    assert_eq!(thunk(), "<em>hi</em>");
    assert_eq!(thunk(), "<em>hi</em>");
  }

  #[test]
  fn write_to_io_sink() {
    let element = h!("p", mark_unsafe("<br />"), Arg::from(3));
    let mut writer = BufWriter::new(Vec::new());

    element.write_to(&mut writer).unwrap();
    assert_eq!(std::str::from_utf8(writer.buffer()).unwrap(), "<p><br />3</p>");
  }

  #[test]
  fn name_keeps_raw_tag() {
    assert_eq!(h!("a<b").name(), "a<b");
    assert_eq!(h!("a<b").render(), "<a&lt;b></a&lt;b>");
  }

  #[test]
  fn default_element_is_empty_tag() {
    assert_eq!(Element::default().render(), "<></>");
  }

  #[test]
  fn elements_cross_threads() {
    let element = h!("li", "item");
    let handle = std::thread::spawn(move || element.render());

    assert_eq!(handle.join().unwrap(), "<li>item</li>");
  }
}
