//! Constructor arguments and the attributes-or-child split.
//!
//! Element constructors take a variable number of arguments. The first one
//! may be an attribute map; if it is, it becomes the element's attributes and
//! everything after it is a child. Otherwise every argument is a child.
//!
//! Rust has no variadics, so arguments arrive as any [`IntoArgs`] value:
//!
//! ```
//! use microhtml::attrs;
//! use microhtml::tags::{a, p};
//!
//! p(());                                           // no arguments
//! p("hello");                                      // one child
//! p(("hello", "world"));                           // several children
//! a(attrs! { "href" => "/" });                     // attributes only
//! a((attrs! { "href" => "/" }, "home", p(())));   // attributes, then children
//! p(vec!["a", "b", "c"]);                          // children from a collection
//! ```
//!
//! Only the first position accepts an [`Attributes`] map, so a map can never
//! be mistaken for a child.

use crate::attributes::Attributes;
use crate::node::{Child, Element, Fragment, Node, Raw, VoidElement};
use crate::value::with_scalar_types;

/// The first positional argument: either the attribute map or the first child.
#[derive(Debug, Clone)]
pub enum Arg {
    Attrs(Attributes),
    Child(Child),
}

impl From<Attributes> for Arg {
    fn from(value: Attributes) -> Self {
        Arg::Attrs(value)
    }
}

impl<T: Into<Child>> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg::Child(value.into())
    }
}

/// Positional arguments for an element constructor.
#[derive(Debug, Clone, Default)]
pub struct Args {
    first: Option<Arg>,
    rest: Vec<Child>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments starting with `first`.
    pub fn from_first(first: impl Into<Arg>) -> Self {
        Self {
            first: Some(first.into()),
            rest: Vec::new(),
        }
    }

    /// Append a child argument.
    pub fn push(&mut self, child: impl Into<Child>) {
        let child = child.into();
        if self.first.is_none() {
            self.first = Some(Arg::Child(child));
        } else {
            self.rest.push(child);
        }
    }

    /// Builder form of [`Args::push`].
    pub fn with(mut self, child: impl Into<Child>) -> Self {
        self.push(child);
        self
    }

    /// Split into attributes and children.
    pub fn split(self) -> (Attributes, Vec<Child>) {
        build_args(self.first, self.rest)
    }
}

/// Split positional arguments into `(attributes, children)`.
///
/// A leading [`Arg::Attrs`] is taken as the attribute map and the remaining
/// arguments become children. A leading child, or no arguments at all, gives
/// an empty attribute map and every argument as a child.
pub fn build_args(
    first: Option<Arg>,
    rest: impl IntoIterator<Item = Child>,
) -> (Attributes, Vec<Child>) {
    match first {
        Some(Arg::Attrs(attrs)) => (attrs, rest.into_iter().collect()),
        Some(Arg::Child(child)) => {
            let mut children = vec![child];
            children.extend(rest);
            (Attributes::new(), children)
        }
        None => (Attributes::new(), rest.into_iter().collect()),
    }
}

/// Values accepted as element constructor arguments.
pub trait IntoArgs {
    fn into_args(self) -> Args;
}

/// Values accepted wherever only children are allowed.
pub trait IntoChildren {
    fn into_children(self) -> Vec<Child>;
}

impl IntoArgs for Args {
    fn into_args(self) -> Args {
        self
    }
}

impl IntoArgs for () {
    fn into_args(self) -> Args {
        Args::new()
    }
}

impl IntoChildren for () {
    fn into_children(self) -> Vec<Child> {
        Vec::new()
    }
}

impl IntoArgs for Attributes {
    fn into_args(self) -> Args {
        Args::from_first(self)
    }
}

impl<C: Into<Child>> IntoArgs for Vec<C> {
    fn into_args(self) -> Args {
        let mut args = Args::new();
        for child in self {
            args.push(child);
        }
        args
    }
}

impl<C: Into<Child>> IntoChildren for Vec<C> {
    fn into_children(self) -> Vec<Child> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<C: Into<Child>, const N: usize> IntoArgs for [C; N] {
    fn into_args(self) -> Args {
        let mut args = Args::new();
        for child in self {
            args.push(child);
        }
        args
    }
}

impl<C: Into<Child>, const N: usize> IntoChildren for [C; N] {
    fn into_children(self) -> Vec<Child> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Child>> IntoArgs for Option<T> {
    fn into_args(self) -> Args {
        Args::from_first(self)
    }
}

impl<T: Into<Child>> IntoChildren for Option<T> {
    fn into_children(self) -> Vec<Child> {
        vec![self.into()]
    }
}

macro_rules! single_child_args {
    ($($ty:ty),*) => {
        $(
            impl IntoArgs for $ty {
                fn into_args(self) -> Args {
                    Args::from_first(self)
                }
            }

            impl IntoChildren for $ty {
                fn into_children(self) -> Vec<Child> {
                    vec![self.into()]
                }
            }
        )*
    };
}

single_child_args!(Node, Element, VoidElement, Fragment, Raw, Child);
with_scalar_types!(single_child_args);

macro_rules! tuple_args {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: Into<Arg>, $($rest: Into<Child>),*> IntoArgs for ($first, $($rest,)*) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Args {
                let ($first, $($rest,)*) = self;
                Args {
                    first: Some($first.into()),
                    rest: vec![$($rest.into()),*],
                }
            }
        }

        impl<$first: Into<Child>, $($rest: Into<Child>),*> IntoChildren for ($first, $($rest,)*) {
            #[allow(non_snake_case)]
            fn into_children(self) -> Vec<Child> {
                let ($first, $($rest,)*) = self;
                vec![$first.into(), $($rest.into()),*]
            }
        }
    };
}

tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);
tuple_args!(A, B, C, D, E, F, G);
tuple_args!(A, B, C, D, E, F, G, H);
tuple_args!(A, B, C, D, E, F, G, H, I);
tuple_args!(A, B, C, D, E, F, G, H, I, J);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::value::Value;
    use facet_testhelpers::test;

    #[test]
    fn test_no_arguments() {
        let (attrs, children) = build_args(None, Vec::new());
        assert!(attrs.is_empty());
        assert!(children.is_empty());
    }

    #[test]
    fn test_leading_attributes_are_consumed() {
        let first = Some(Arg::from(attrs! { "id" => "main" }));
        let (attrs, children) = build_args(first, vec![Child::from("a"), Child::from("b")]);
        assert_eq!(attrs.len(), 1);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_only_attributes_gives_no_children() {
        let (attrs, children) = build_args(Some(Arg::from(attrs! { "id" => "x" })), Vec::new());
        assert_eq!(attrs.len(), 1);
        assert!(children.is_empty());
    }

    #[test]
    fn test_leading_child_keeps_position() {
        let (attrs, children) = build_args(Some(Arg::from("first")), vec![Child::from(2)]);
        assert!(attrs.is_empty());
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], Child::Value(Value::Str(s)) if s.as_str() == "first"));
        assert!(matches!(&children[1], Child::Value(Value::Int(2))));
    }

    #[test]
    fn test_empty_attribute_map_is_still_attributes() {
        let (attrs, children) = (Attributes::new(), "x").into_args().split();
        assert!(attrs.is_empty());
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_push_fills_first_slot() {
        let args = Args::new().with("a").with("b");
        let (_, children) = args.split();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_collections_are_all_children() {
        let (attrs, children) = vec!["a", "b", "c"].into_args().split();
        assert!(attrs.is_empty());
        assert_eq!(children.len(), 3);

        let children = [1, 2].into_children();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_null_child_counts() {
        let (_, children) = None::<&str>.into_args().split();
        assert_eq!(children.len(), 1);
        assert!(children[0].is_null());
    }
}
