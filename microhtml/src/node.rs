//! The node model.
//!
//! A tree is made of four node kinds:
//! - [`Element`]: `<tag attrs…>children…</tag>`
//! - [`VoidElement`]: `<tag attrs… />`, which has no children at all
//! - [`Fragment`]: a sequence of children with no wrapping tag
//! - [`Raw`]: markup emitted verbatim
//!
//! Children are either nodes or scalar [`Value`]s. Nothing is escaped when a
//! tree is built; escaping happens when it is rendered (see [`crate::render`]).

use compact_str::CompactString;

use crate::args::{IntoArgs, IntoChildren};
use crate::attributes::Attributes;
use crate::value::{Value, with_scalar_types};

/// Any renderable node.
#[derive(Debug, Clone)]
pub enum Node {
    /// A standard element with children
    Element(Element),
    /// A self-closing element
    Void(VoidElement),
    /// Children without a wrapping tag
    Fragment(Fragment),
    /// Unescaped markup
    Raw(Raw),
}

impl Node {
    /// Returns true if this is a standard element.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this is a void element.
    pub fn is_void(&self) -> bool {
        matches!(self, Node::Void(_))
    }

    /// Returns true if this is a fragment.
    pub fn is_fragment(&self) -> bool {
        matches!(self, Node::Fragment(_))
    }

    /// Returns true if this is raw markup.
    pub fn is_raw(&self) -> bool {
        matches!(self, Node::Raw(_))
    }

    /// The tag name, for the two element kinds.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(e) => Some(e.tag()),
            Node::Void(v) => Some(v.tag()),
            Node::Fragment(_) | Node::Raw(_) => None,
        }
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as void element reference.
    pub fn as_void(&self) -> Option<&VoidElement> {
        match self {
            Node::Void(v) => Some(v),
            _ => None,
        }
    }

    /// Get as fragment reference.
    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            Node::Fragment(f) => Some(f),
            _ => None,
        }
    }

    /// Get as mutable fragment reference.
    pub fn as_fragment_mut(&mut self) -> Option<&mut Fragment> {
        match self {
            Node::Fragment(f) => Some(f),
            _ => None,
        }
    }
}

/// A child of an [`Element`] or [`Fragment`].
#[derive(Debug, Clone)]
pub enum Child {
    /// A nested node, rendered as-is
    Node(Node),
    /// A scalar, rendered escaped
    Value(Value),
}

impl Child {
    /// Returns true for a `Null` scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, Child::Value(Value::Null))
    }

    /// Get as node reference.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(n) => Some(n),
            Child::Value(_) => None,
        }
    }

    /// Get as scalar reference.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Child::Value(v) => Some(v),
            Child::Node(_) => None,
        }
    }
}

/// A standard HTML element: tag, attributes and children.
#[derive(Debug, Clone)]
pub struct Element {
    tag: CompactString,
    attrs: Attributes,
    children: Vec<Child>,
}

impl Element {
    /// Create an element, splitting `args` into attributes and children.
    ///
    /// When the first argument is an [`Attributes`] map it becomes the
    /// element's attributes; every other argument is a child.
    pub fn new(tag: impl Into<CompactString>, args: impl IntoArgs) -> Self {
        let (attrs, children) = args.into_args().split();
        Self {
            tag: tag.into(),
            attrs,
            children,
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Append one child.
    pub fn append_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Append several children, in order.
    pub fn append_children(&mut self, children: impl IntoChildren) {
        self.children.extend(children.into_children());
    }
}

impl<C: Into<Child>> Extend<C> for Element {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        self.children.extend(iter.into_iter().map(Into::into))
    }
}

/// A void element such as `<br />` or `<input />`.
///
/// It has no children and no way to add any.
#[derive(Debug, Clone)]
pub struct VoidElement {
    tag: CompactString,
    attrs: Attributes,
}

impl VoidElement {
    pub fn new(tag: impl Into<CompactString>, attrs: impl Into<Attributes>) -> Self {
        Self {
            tag: tag.into(),
            attrs: attrs.into(),
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

/// A sequence of children rendered back to back.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    children: Vec<Child>,
}

impl Fragment {
    pub fn new(children: impl IntoChildren) -> Self {
        Self {
            children: children.into_children(),
        }
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append one child.
    pub fn append_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Append several children, in order.
    pub fn append_children(&mut self, children: impl IntoChildren) {
        self.children.extend(children.into_children());
    }
}

impl<C: Into<Child>> Extend<C> for Fragment {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        self.children.extend(iter.into_iter().map(Into::into))
    }
}

impl<C: Into<Child>> FromIterator<C> for Fragment {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Markup that is written out exactly as given.
///
/// Nothing inside is escaped or checked. Only wrap strings you trust.
#[derive(Debug, Clone)]
pub struct Raw {
    html: CompactString,
}

impl Raw {
    pub fn new(html: impl Into<CompactString>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<VoidElement> for Node {
    fn from(value: VoidElement) -> Self {
        Node::Void(value)
    }
}

impl From<Fragment> for Node {
    fn from(value: Fragment) -> Self {
        Node::Fragment(value)
    }
}

impl From<Raw> for Node {
    fn from(value: Raw) -> Self {
        Node::Raw(value)
    }
}

macro_rules! child_from_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Child::Node(value.into())
                }
            }
        )*
    };
}

macro_rules! child_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Child::Value(value.into())
                }
            }
        )*
    };
}

child_from_node!(Node, Element, VoidElement, Fragment, Raw);
with_scalar_types!(child_from_scalar);

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Child::Value(Value::Null), Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use facet_testhelpers::test;

    #[test]
    fn test_element_splits_leading_attributes() {
        let el = Element::new("a", (attrs! { "href" => "/" }, "home"));
        assert_eq!(el.tag(), "a");
        assert_eq!(el.attrs().len(), 1);
        assert_eq!(el.children().len(), 1);
    }

    #[test]
    fn test_lone_attributes_yield_no_children() {
        let el = Element::new("div", attrs! { "id" => "x" });
        assert_eq!(el.attrs().len(), 1);
        assert!(el.children().is_empty());
    }

    #[test]
    fn test_without_attributes_everything_is_a_child() {
        let el = Element::new("p", ("hello", 42, None::<&str>));
        assert!(el.attrs().is_empty());
        assert_eq!(el.children().len(), 3);
        assert!(el.children()[2].is_null());
    }

    #[test]
    fn test_append_keeps_call_order() {
        let mut el = Element::new("ul", ());
        el.append_child(Element::new("li", "one"));
        el.append_children((Element::new("li", "two"), "three"));
        el.extend(["four", "five"]);

        let kinds: Vec<bool> = el.children().iter().map(|c| c.as_node().is_some()).collect();
        assert_eq!(kinds, [true, true, false, false, false]);
    }

    #[test]
    fn test_fragment_collects_children() {
        let frag: Fragment = (1..=3).collect();
        assert_eq!(frag.children().len(), 3);
        assert!(Fragment::default().is_empty());
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::from(VoidElement::new("br", ()));
        assert!(node.is_void());
        assert_eq!(node.tag(), Some("br"));
        assert!(node.as_element().is_none());

        let raw = Node::from(Raw::new("<bacon>"));
        assert!(raw.is_raw());
        assert_eq!(raw.tag(), None);
    }

    #[test]
    fn test_trees_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
        assert_send_sync::<Child>();
    }

    #[test]
    fn test_optional_child() {
        assert!(Child::from(None::<Element>).is_null());
        assert!(Child::from(Some(Raw::new("x"))).as_node().is_some());
    }
}
