//! Build HTML from composable element values.
//!
//! microhtml provides:
//! - **Node model**: elements, void elements, fragments and raw markup as plain values
//! - **Tag catalogue**: one constructor per HTML tag in [`tags`]
//! - **Rendering**: a single walk that escapes every text child and attribute value
//! - **Composition**: [`join_html`], [`empty_html`] and [`raw_html`]
//!
//! Nothing is escaped while a tree is built. Escaping happens when it is
//! rendered, so a string can never end up escaped twice or not at all.
//!
//! # Example
//!
//! ```rust
//! use microhtml::attrs;
//! use microhtml::tags::{a, br, input, p};
//!
//! let link = a((attrs! { "href" => "hello.html", "target" => "_blank" }, "Say hi"));
//! assert_eq!(link.to_html(), "<a href='hello.html' target='_blank'>Say hi</a>");
//!
//! // Text children are escaped
//! let para = p("<a href='nope.html'>yo</a>");
//! assert_eq!(
//!     para.to_html(),
//!     "<p>&lt;a href=&#039;nope.html&#039;&gt;yo&lt;/a&gt;</p>"
//! );
//!
//! // `true` renders a bare attribute, `false` drops it
//! assert_eq!(input(attrs! { "required" => true }).to_html(), "<input required />");
//! assert_eq!(input(attrs! { "required" => false }).to_html(), "<input />");
//!
//! // Nodes can be appended after construction
//! let mut para = p("hello");
//! para.append_children((" ", br(()), "world"));
//! assert_eq!(para.to_string(), "<p>hello <br />world</p>");
//! ```

mod tracing_macros;

pub mod args;
pub mod attributes;
pub mod catalogue;
pub mod compose;
pub mod escape;
pub mod node;
pub mod prelude;
pub mod render;
pub mod value;

pub use args::{Arg, Args, IntoArgs, IntoChildren, build_args};
pub use attributes::Attributes;
pub use catalogue::{TAGS, TagError, TagKind, TagSpec, build_tag, tags};
pub use compose::{element, empty_html, join_html, raw_html, void_element};
pub use escape::{escape_text, escape_value, write_escaped};
pub use node::{Child, Element, Fragment, Node, Raw, VoidElement};
pub use render::{RenderOptions, render, render_to};
pub use value::{Lazy, Value};
