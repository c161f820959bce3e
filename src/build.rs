use crate::model::arg::Arg;
use crate::model::element::Element;
use crate::render::html::{attributes, escape_html};

/// Builds an element from a tag name and a list of arguments.
///
/// Each argument is folded in order: attribute maps extend the attribute
/// string, everything else becomes one child item. Child elements are
/// realized immediately. Building never fails.
pub fn build<I>(name: impl Into<String>, args: I) -> Element
where
  I: IntoIterator,
  I::Item: Into<Arg>,
{
  let mut attrs = String::new();
  let mut contents = vec![];

  for arg in args {
    match arg.into() {
      Arg::Text(text) => contents.push(escape_html(&text)),
      Arg::Attrs(map) => attrs.push_str(&attributes(&map)),
      Arg::TextList(items) => contents.push(escape_html(&items.concat())),
      Arg::Children(children) => contents.push(children.iter().map(Element::render).collect()),
      Arg::Child(child) => contents.push(child.render()),
      Arg::Raw(raw) => contents.push(raw.into_string()),
      Arg::Lazy(thunk) => contents.push(escape_html(&thunk())),
      Arg::Other(text) => contents.push(escape_html(&text)),
    }
  }

  Element::new(name.into(), attrs, contents)
}
