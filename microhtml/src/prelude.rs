//! Glob-import everything needed to build and render trees.
//!
//! ```
//! use microhtml::prelude::*;
//!
//! let page = div((attrs! { "class" => "card" }, h1("Title"), p("Body")));
//! assert_eq!(page.to_html(), "<div class='card'><h1>Title</h1><p>Body</p></div>");
//! ```

pub use crate::args::{Arg, Args, IntoArgs, IntoChildren};
pub use crate::attributes::Attributes;
pub use crate::attrs;
pub use crate::catalogue::tags::*;
pub use crate::compose::{element, empty_html, join_html, raw_html, void_element};
pub use crate::node::{Child, Element, Fragment, Node, Raw, VoidElement};
pub use crate::render::RenderOptions;
pub use crate::value::{Lazy, Value};
