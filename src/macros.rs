/// Builds an [`Attributes`](crate::Attributes) map from `key => value` pairs.
#[macro_export]
macro_rules! attrs {
  ($($key:expr => $value:expr),* $(,)?) => {
    $crate::Attributes::from([
      $((::std::string::ToString::to_string(&$key), ::std::string::ToString::to_string(&$value)),)*
    ])
  };
}

/// Builds an element from a tag name and any number of arguments, each
/// converted with `Arg::from`.
///
/// ```
/// use daz::{attrs, h, mark_unsafe};
///
/// let page = h!("p", attrs!("class" => "note"), "1 < 2 ", mark_unsafe("<br>"));
/// assert_eq!(page.render(), "<p class='note'>1 &lt; 2 <br></p>");
/// ```
#[macro_export]
macro_rules! h {
  ($name:expr $(, $arg:expr)* $(,)?) => {{
    let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
    $crate::build($name, args)
  }};
}
