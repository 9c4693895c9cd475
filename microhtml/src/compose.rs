//! Composition helpers built on the node model.

use compact_str::CompactString;

use crate::args::{IntoArgs, IntoChildren};
use crate::attributes::Attributes;
use crate::node::{Child, Element, Fragment, Raw, VoidElement};

/// Create an element with an arbitrary tag name.
///
/// This is what every constructor in [`crate::tags`] calls.
pub fn element(tag: impl Into<CompactString>, args: impl IntoArgs) -> Element {
    Element::new(tag, args)
}

/// Create a void element with an arbitrary tag name.
pub fn void_element(tag: impl Into<CompactString>, attrs: impl Into<Attributes>) -> VoidElement {
    VoidElement::new(tag, attrs)
}

/// Group children without a wrapping element.
///
/// ```
/// use microhtml::empty_html;
/// use microhtml::tags::br;
///
/// assert_eq!(empty_html((br(()), br(()))).to_html(), "<br /><br />");
/// ```
pub fn empty_html(children: impl IntoChildren) -> Fragment {
    Fragment::new(children)
}

/// Markup that is emitted without escaping.
///
/// ```
/// use microhtml::raw_html;
/// use microhtml::tags::p;
///
/// assert_eq!(p(raw_html("<bacon>")).to_html(), "<p><bacon></p>");
/// ```
pub fn raw_html(html: impl Into<CompactString>) -> Raw {
    Raw::new(html)
}

/// Join `pieces` with `glue` between each consecutive pair.
///
/// With `filter_nulls`, `None`/`Null` pieces are skipped before joining, so
/// they never produce doubled glue. Other blank values (booleans) are kept.
///
/// ```
/// use microhtml::{Child, join_html};
/// use microhtml::tags::{br, p};
///
/// let pieces = || -> Vec<Child> { vec![p("A").into(), p("B").into(), "C".into()] };
/// assert_eq!(join_html(", ", pieces(), false).to_html(), "<p>A</p>, <p>B</p>, C");
/// assert_eq!(join_html(br(()), pieces(), false).to_html(), "<p>A</p><br /><p>B</p><br />C");
/// ```
pub fn join_html<G, I>(glue: G, pieces: I, filter_nulls: bool) -> Fragment
where
    G: Into<Child>,
    I: IntoIterator,
    I::Item: Into<Child>,
{
    let glue = glue.into();
    let mut out = Fragment::default();
    let mut n = 0;
    for piece in pieces {
        let piece = piece.into();
        if filter_nulls && piece.is_null() {
            continue;
        }
        if n > 0 {
            out.append_child(glue.clone());
        }
        out.append_child(piece);
        n += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use facet_testhelpers::test;

    fn pieces() -> Vec<Child> {
        vec![
            element("p", "A").into(),
            element("p", "B").into(),
            "C".into(),
        ]
    }

    #[test]
    fn test_join_with_text_glue() {
        assert_eq!(
            join_html(", ", pieces(), false).to_html(),
            "<p>A</p>, <p>B</p>, C"
        );
    }

    #[test]
    fn test_join_with_node_glue() {
        assert_eq!(
            join_html(void_element("br", ()), pieces(), false).to_html(),
            "<p>A</p><br /><p>B</p><br />C"
        );
    }

    #[test]
    fn test_join_zero_and_one() {
        assert_eq!(join_html(", ", Vec::<Child>::new(), false).to_html(), "");
        assert_eq!(join_html(", ", ["only"], false).to_html(), "only");
    }

    #[test]
    fn test_join_nulls_kept_by_default() {
        let pieces = [Some("a"), None, Some("b")];
        assert_eq!(join_html("|", pieces, false).to_html(), "a||b");
        assert_eq!(join_html("|", pieces, true).to_html(), "a|b");
    }

    #[test]
    fn test_join_filter_keeps_false() {
        let pieces = [Value::from("a"), Value::Bool(false), Value::Null];
        assert_eq!(join_html("-", pieces, true).to_html(), "a-");
    }

    #[test]
    fn test_join_glue_is_escaped_text() {
        assert_eq!(join_html(" & ", [1, 2], false).to_html(), "1 &amp; 2");
    }

    #[test]
    fn test_empty_html_and_raw() {
        assert_eq!(empty_html(()).to_html(), "");
        assert_eq!(element("p", raw_html("<bacon>")).to_html(), "<p><bacon></p>");
    }
}
