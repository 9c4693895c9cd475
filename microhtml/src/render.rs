//! Renderer for node trees.
//!
//! One recursive walk handles all four node kinds:
//!
//! - `Element`: `<tag attrs>children</tag>`
//! - `VoidElement`: `<tag attrs />`
//! - `Fragment`: children only
//! - `Raw`: the stored markup, verbatim
//!
//! Attribute values are single-quoted. `true` renders a bare attribute name,
//! `false` and `null` drop the attribute. Scalar children and attribute values
//! are escaped; nested nodes are not re-escaped.

use std::fmt::{self, Write};

use crate::attributes::Attributes;
use crate::node::{Child, Element, Fragment, Node, Raw, VoidElement};
use crate::tracing_macros::trace;
use crate::value::Value;

/// Options for rendering.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Whether to sort attributes alphabetically (default: false).
    /// When false, attributes render in insertion order.
    /// Enable this for deterministic output when attribute maps are built from
    /// unordered sources (e.g., for snapshots or caching).
    pub sort_attributes: bool,
}

impl RenderOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable sorting attributes alphabetically for deterministic output.
    pub fn sort_attributes(mut self) -> Self {
        self.sort_attributes = true;
        self
    }
}

/// Render a node to an HTML string.
pub fn render(node: &Node, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = render_to(&mut out, node, opts);
    out
}

/// Render a node into any `fmt::Write` sink.
pub fn render_to<W: Write + ?Sized>(out: &mut W, node: &Node, opts: &RenderOptions) -> fmt::Result {
    Renderer::new(out, opts).write_node(node)
}

struct Renderer<'a, W: Write + ?Sized> {
    out: &'a mut W,
    options: &'a RenderOptions,
}

impl<'a, W: Write + ?Sized> Renderer<'a, W> {
    fn new(out: &'a mut W, options: &'a RenderOptions) -> Self {
        Self { out, options }
    }

    fn write_attr(&mut self, name: &str, value: &Value) -> fmt::Result {
        match value {
            Value::Null | Value::Bool(false) => Ok(()),
            Value::Bool(true) => write!(self.out, " {name}"),
            _ => {
                write!(self.out, " {name}='")?;
                value.write_escaped(self.out)?;
                self.out.write_char('\'')
            }
        }
    }

    fn write_attrs(&mut self, attrs: &Attributes) -> fmt::Result {
        if self.options.sort_attributes {
            let mut sorted: Vec<_> = attrs.iter().collect();
            sorted.sort_by_key(|(name, _)| *name);
            for (name, value) in sorted {
                self.write_attr(name, value)?;
            }
        } else {
            for (name, value) in attrs.iter() {
                self.write_attr(name, value)?;
            }
        }
        Ok(())
    }

    fn write_children(&mut self, children: &[Child]) -> fmt::Result {
        for child in children {
            match child {
                Child::Node(node) => self.write_node(node)?,
                Child::Value(value) => value.write_escaped(self.out)?,
            }
        }
        Ok(())
    }

    fn write_element(&mut self, elem: &Element) -> fmt::Result {
        let tag = elem.tag();
        trace!(tag, children = elem.children().len(), "render element");
        write!(self.out, "<{tag}")?;
        self.write_attrs(elem.attrs())?;
        self.out.write_char('>')?;
        self.write_children(elem.children())?;
        write!(self.out, "</{tag}>")
    }

    fn write_void(&mut self, elem: &VoidElement) -> fmt::Result {
        let tag = elem.tag();
        trace!(tag, "render void element");
        write!(self.out, "<{tag}")?;
        self.write_attrs(elem.attrs())?;
        self.out.write_str(" />")
    }

    fn write_fragment(&mut self, frag: &Fragment) -> fmt::Result {
        trace!(children = frag.children().len(), "render fragment");
        self.write_children(frag.children())
    }

    fn write_raw(&mut self, raw: &Raw) -> fmt::Result {
        trace!(len = raw.as_str().len(), "render raw");
        self.out.write_str(raw.as_str())
    }

    fn write_node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Element(elem) => self.write_element(elem),
            Node::Void(elem) => self.write_void(elem),
            Node::Fragment(frag) => self.write_fragment(frag),
            Node::Raw(raw) => self.write_raw(raw),
        }
    }
}

// =============================================================================
// Convenience methods and Display
// =============================================================================

macro_rules! render_methods {
    ($($ty:ident => $write:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Render to an HTML string with default options.
                pub fn to_html(&self) -> String {
                    self.to_html_with_options(&RenderOptions::default())
                }

                /// Render with custom options.
                pub fn to_html_with_options(&self, opts: &RenderOptions) -> String {
                    let mut out = String::new();
                    let _ = self.render_to(&mut out, opts);
                    out
                }

                /// Render into any `fmt::Write` sink.
                pub fn render_to<W: Write + ?Sized>(
                    &self,
                    out: &mut W,
                    opts: &RenderOptions,
                ) -> fmt::Result {
                    Renderer::new(out, opts).$write(self)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.render_to(f, &RenderOptions::default())
                }
            }
        )*
    };
}

render_methods! {
    Node => write_node,
    Element => write_element,
    VoidElement => write_void,
    Fragment => write_fragment,
    Raw => write_raw,
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(node) => fmt::Display::fmt(node, f),
            Child::Value(value) => value.write_escaped(f),
        }
    }
}

impl fmt::Display for Value {
    /// Displays the escaped text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_escaped(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use facet_testhelpers::test;

    #[test]
    fn test_element_with_attrs_and_children() {
        let el = Element::new("a", (attrs! { "href" => "x.html", "target" => "_blank" }, "go"));
        assert_eq!(el.to_html(), "<a href='x.html' target='_blank'>go</a>");
    }

    #[test]
    fn test_boolean_and_null_attributes() {
        let el = VoidElement::new(
            "input",
            attrs! { "required" => true, "disabled" => false, "value" => None::<&str>, "size" => 3 },
        );
        assert_eq!(el.to_html(), "<input required size='3' />");
    }

    #[test]
    fn test_attribute_value_escaping() {
        let el = Element::new("a", attrs! { "title" => r#"Say "hi" & <bye>"# });
        assert_eq!(
            el.to_html(),
            "<a title='Say &quot;hi&quot; &amp; &lt;bye&gt;'></a>"
        );
    }

    #[test]
    fn test_text_escaping() {
        let el = Element::new("p", "<script>alert('xss')</script>");
        let html = el.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_blank_children_render_empty() {
        let el = Element::new("p", (None::<&str>, true, false, ""));
        assert_eq!(el.to_html(), "<p></p>");
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let el = Element::new("div", (Raw::new("<b>&amp;</b>"), "&"));
        assert_eq!(el.to_html(), "<div><b>&amp;</b>&amp;</div>");
    }

    #[test]
    fn test_fragment_has_no_wrapper() {
        let frag = Fragment::new(("a", VoidElement::new("hr", ()), "b"));
        assert_eq!(frag.to_html(), "a<hr />b");
    }

    #[test]
    fn test_nested_matches_standalone() {
        let inner = Element::new("span", (attrs! { "class" => "x" }, "it's"));
        let standalone = inner.to_html();
        let outer = Element::new("div", inner);
        assert_eq!(outer.to_html(), format!("<div>{standalone}</div>"));
    }

    #[test]
    fn test_display_matches_to_html() {
        let node = Node::from(Element::new("em", 1.5));
        assert_eq!(node.to_string(), node.to_html());
        assert_eq!(format!("{node}"), "<em>1.5</em>");
    }

    #[test]
    fn test_render_is_idempotent() {
        let el = Element::new("ul", (Element::new("li", "a"), Element::new("li", "b")));
        assert_eq!(el.to_html(), el.to_html());
    }

    #[test]
    fn test_sorted_attributes() {
        let el = Element::new("div", attrs! { "zebra" => 1, "alpha" => 2, "mike" => 3 });

        let opts = RenderOptions::default().sort_attributes();
        assert_eq!(
            el.to_html_with_options(&opts),
            "<div alpha='2' mike='3' zebra='1'></div>"
        );
        assert_eq!(el.to_html(), "<div zebra='1' alpha='2' mike='3'></div>");
    }

    #[test]
    fn test_render_function() {
        let node = Node::from(Raw::new("<!-- hi -->"));
        assert_eq!(render(&node, &RenderOptions::new()), "<!-- hi -->");
    }
}
