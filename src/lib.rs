#[macro_use]
pub mod macros;
pub mod build;
pub mod model;
pub mod render;

pub use build::build;
pub use model::arg::{mark_unsafe, Arg, Raw};
pub use model::element::Element;
pub use model::Attributes;
pub use render::html::{escape_html, is_void, VOID_ELEMENTS};
