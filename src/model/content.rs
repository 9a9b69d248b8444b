//! Content filter.
//!
//! Decides whether a value carries anything worth rendering. Every renderer
//! asks this before emitting a heading or field, so empty sections vanish
//! from the output instead of appearing as bare headings.

use serde_json::{Map, Value};

/// Whether a value carries meaningful content.
///
/// - strings: non-empty after trimming
/// - sequences: non-empty (elements are not inspected)
/// - maps/objects: at least one key (values are not inspected)
/// - absent / null: never
/// - anything else (numbers, booleans): always
pub trait HasContent {
    fn has_content(&self) -> bool;
}

/// Free-function form of [`HasContent::has_content`].
pub fn has_content<T: HasContent + ?Sized>(value: &T) -> bool {
    value.has_content()
}

impl HasContent for str {
    fn has_content(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl HasContent for String {
    fn has_content(&self) -> bool {
        self.as_str().has_content()
    }
}

impl<T: HasContent + ?Sized> HasContent for &T {
    fn has_content(&self) -> bool {
        (**self).has_content()
    }
}

impl<T: HasContent> HasContent for Option<T> {
    fn has_content(&self) -> bool {
        self.as_ref().is_some_and(HasContent::has_content)
    }
}

impl<T> HasContent for [T] {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> HasContent for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl HasContent for bool {
    fn has_content(&self) -> bool {
        true
    }
}

impl HasContent for Map<String, Value> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl HasContent for Value {
    fn has_content(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => s.has_content(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => map.has_content(),
            Value::Bool(_) | Value::Number(_) => true,
        }
    }
}
