use std::collections::HashMap;

pub mod arg;
pub mod element;

/// Attribute names mapped to values. Iteration order is unspecified.
pub type Attributes = HashMap<String, String>;
