//! Ordered attribute maps.

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::value::Value;

/// An ordered collection of attributes with unique names.
///
/// Insertion order is render order. Setting a name that is already present
/// replaces its value without moving it.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: IndexMap<CompactString, Value>,
}

impl Attributes {
    /// Create a new empty attribute collection.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an attribute collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Set an attribute value. If the attribute already exists, updates its value in place.
    pub fn set(&mut self, name: impl Into<CompactString>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<CompactString>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Remove an attribute by name, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Check if an attribute exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over all attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<()> for Attributes {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<CompactString>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<CompactString>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: Into<CompactString>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

/// Build an [`Attributes`] map from `name => value` pairs.
///
/// Values may be of different types; each goes through `Into<Value>`.
///
/// ```
/// use microhtml::attrs;
///
/// let attrs = attrs! { "type" => "checkbox", "checked" => true, "tabindex" => 3 };
/// assert_eq!(attrs.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $( attrs.set($name, $value); )+
        attrs
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn names(attrs: &Attributes) -> Vec<&str> {
        attrs.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let attrs = attrs! { "zebra" => 1, "alpha" => 2, "mike" => 3 };
        assert_eq!(names(&attrs), ["zebra", "alpha", "mike"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = attrs! { "class" => "first", "id" => "myid" };
        attrs.set("class", "second");

        assert_eq!(attrs.len(), 2);
        assert_eq!(names(&attrs), ["class", "id"]);
        assert_eq!(attrs.get("class").map(|v| v.to_text()).as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs: Attributes = [("a", "1"), ("b", "2"), ("c", "3")].into();
        assert!(attrs.remove("b").is_some());
        assert!(attrs.remove("missing").is_none());
        assert_eq!(names(&attrs), ["a", "c"]);
        assert!(!attrs.contains("b"));
    }

    #[test]
    fn test_empty_forms() {
        assert!(Attributes::from(()).is_empty());
        assert!(attrs! {}.is_empty());
    }

    #[test]
    fn test_with_builder() {
        let attrs = Attributes::new().with("href", "/").with("hidden", false);
        assert_eq!(names(&attrs), ["href", "hidden"]);
    }
}
