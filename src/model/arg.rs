use super::element::Element;
use super::Attributes;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use tracing::trace;

/// Markup that is emitted verbatim, bypassing escaping.
///
/// This is the only way to get unescaped text into an element. The caller is
/// responsible for the content being safe to embed.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Raw(String);

impl Raw {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }
}

pub fn mark_unsafe(text: impl Into<String>) -> Raw {
  Raw(text.into())
}

/// One argument to an element builder.
pub enum Arg {
  /// Escaped text child.
  Text(String),
  Attrs(Attributes),
  /// Concatenated first, then escaped as a single child.
  TextList(Vec<String>),
  Children(Vec<Element>),
  Child(Element),
  Raw(Raw),
  /// Invoked while building; its output is escaped.
  Lazy(Box<dyn Fn() -> String>),
  /// Stringified fallback, escaped.
  Other(String),
}

impl Arg {
  pub fn lazy<F>(f: F) -> Arg
  where
    F: Fn() -> String + 'static,
  {
    Arg::Lazy(Box::new(f))
  }

  pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Arg {
    Arg::Other(value.to_string())
  }
}

impl fmt::Debug for Arg {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Arg::Text(value) => f.debug_tuple("Text").field(value).finish(),
      Arg::Attrs(value) => f.debug_tuple("Attrs").field(value).finish(),
      Arg::TextList(value) => f.debug_tuple("TextList").field(value).finish(),
      Arg::Children(value) => f.debug_tuple("Children").field(value).finish(),
      Arg::Child(value) => f.debug_tuple("Child").field(value).finish(),
      Arg::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
      Arg::Lazy(_) => f.write_str("Lazy(..)"),
      Arg::Other(value) => f.debug_tuple("Other").field(value).finish(),
    }
  }
}

impl From<&str> for Arg {
  fn from(value: &str) -> Arg {
    Arg::Text(value.into())
  }
}

impl From<String> for Arg {
  fn from(value: String) -> Arg {
    Arg::Text(value)
  }
}

impl From<&String> for Arg {
  fn from(value: &String) -> Arg {
    Arg::Text(value.clone())
  }
}

impl<'a> From<Cow<'a, str>> for Arg {
  fn from(value: Cow<'a, str>) -> Arg {
    Arg::Text(value.into_owned())
  }
}

impl From<Attributes> for Arg {
  fn from(value: Attributes) -> Arg {
    Arg::Attrs(value)
  }
}

impl From<Vec<String>> for Arg {
  fn from(value: Vec<String>) -> Arg {
    Arg::TextList(value)
  }
}

impl From<Vec<&str>> for Arg {
  fn from(value: Vec<&str>) -> Arg {
    Arg::TextList(value.into_iter().map(String::from).collect())
  }
}

impl From<&[&str]> for Arg {
  fn from(value: &[&str]) -> Arg {
    Arg::TextList(value.iter().map(|x| x.to_string()).collect())
  }
}

impl From<Vec<Element>> for Arg {
  fn from(value: Vec<Element>) -> Arg {
    Arg::Children(value)
  }
}

impl From<&[Element]> for Arg {
  fn from(value: &[Element]) -> Arg {
    Arg::Children(value.to_vec())
  }
}

impl From<Element> for Arg {
  fn from(value: Element) -> Arg {
    Arg::Child(value)
  }
}

impl From<&Element> for Arg {
  fn from(value: &Element) -> Arg {
    Arg::Child(value.clone())
  }
}

impl From<Raw> for Arg {
  fn from(value: Raw) -> Arg {
    Arg::Raw(value)
  }
}

macro_rules! display_arg {
  ($($ty:ty),+) => {
    $(
      impl From<$ty> for Arg {
        fn from(value: $ty) -> Arg {
          Arg::Other(value.to_string())
        }
      }
    )+
  };
}

display_arg!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

/// Dispatches a dynamically shaped JSON value.
impl From<serde_json::Value> for Arg {
  fn from(value: serde_json::Value) -> Arg {
    use serde_json::Value;

    match value {
      Value::String(text) => Arg::Text(text),
      Value::Object(map) => Arg::Attrs(
        map
          .into_iter()
          .map(|(key, value)| match value {
            Value::String(text) => (key, text),
            other => (key, other.to_string()),
          })
          .collect(),
      ),
      Value::Array(items) if items.iter().all(Value::is_string) => Arg::TextList(
        items
          .into_iter()
          .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
          })
          .collect(),
      ),
      other => {
        trace!(value = %other, "stringifying json argument");
        Arg::Other(other.to_string())
      }
    }
  }
}
