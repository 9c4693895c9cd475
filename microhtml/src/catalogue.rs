//! The HTML tag catalogue.
//!
//! A fixed table of tag names, each classified as a standard or void element,
//! expands into the constructor functions of [`tags`] and the [`TAGS`] table.
//! Categories follow <https://developer.mozilla.org/en-US/docs/Web/HTML/Element>.

use facet::Facet;

use crate::args::IntoArgs;
use crate::attributes::Attributes;
use crate::compose::{element, void_element};
use crate::node::{Element, Node, VoidElement};
use crate::tracing_macros::debug;

/// Whether a tag can hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum TagKind {
    /// `<tag>…</tag>`
    Normal,
    /// `<tag />`, attributes only
    Void,
}

/// One row of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    /// Name of the constructor function in [`tags`]
    pub ident: &'static str,
    /// Tag name as rendered
    pub name: &'static str,
    pub kind: TagKind,
}

/// Errors from by-name tag construction.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum TagError {
    /// unknown tag name {name}
    UnknownTag { name: String },

    /// void element {tag} cannot have children
    VoidChildren { tag: String },
}

impl TagSpec {
    /// Find a tag by name, ignoring ASCII case.
    pub fn lookup(name: &str) -> Result<&'static TagSpec, TagError> {
        TAGS.iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                debug!(name, "tag lookup failed");
                TagError::UnknownTag {
                    name: name.to_string(),
                }
            })
    }

    pub fn is_void(&self) -> bool {
        self.kind == TagKind::Void
    }

    /// Construct this tag from constructor arguments.
    ///
    /// Void tags accept a leading attribute map only; any child is an error.
    pub fn build(&self, args: impl IntoArgs) -> Result<Node, TagError> {
        match self.kind {
            TagKind::Normal => Ok(element(self.name, args).into()),
            TagKind::Void => {
                let (attrs, children) = args.into_args().split();
                if !children.is_empty() {
                    return Err(TagError::VoidChildren {
                        tag: self.name.to_string(),
                    });
                }
                Ok(void_element(self.name, attrs).into())
            }
        }
    }
}

/// Construct a catalogue tag by name.
///
/// ```
/// use microhtml::{attrs, build_tag};
///
/// let node = build_tag("input", attrs! { "required" => true }).unwrap();
/// assert_eq!(node.to_html(), "<input required />");
/// assert!(build_tag("br", "text").is_err());
/// assert!(build_tag("blink", ()).is_err());
/// ```
pub fn build_tag(name: &str, args: impl IntoArgs) -> Result<Node, TagError> {
    TagSpec::lookup(name)?.build(args)
}

macro_rules! catalogue {
    ($($kind:ident $ident:ident => $name:literal,)*) => {
        /// Every tag with a constructor in [`tags`], in catalogue order.
        pub static TAGS: &[TagSpec] = &[
            $(
                TagSpec {
                    ident: stringify!($ident),
                    name: $name,
                    kind: TagKind::$kind,
                },
            )*
        ];

        /// One constructor per HTML tag.
        ///
        /// Standard elements take any [`IntoArgs`] value: an optional leading
        /// attribute map followed by children. Void elements take attributes
        /// only. `<var>` is built by `var_`.
        pub mod tags {
            use super::*;

            $( catalogue!(@ctor $kind $ident $name); )*
        }
    };
    (@ctor Normal $ident:ident $name:literal) => {
        #[doc = concat!("`<", $name, ">` element.")]
        pub fn $ident(args: impl IntoArgs) -> Element {
            element($name, args)
        }
    };
    (@ctor Void $ident:ident $name:literal) => {
        #[doc = concat!("`<", $name, " />` void element.")]
        pub fn $ident(attrs: impl Into<Attributes>) -> VoidElement {
            void_element($name, attrs)
        }
    };
}

catalogue! {
    // Main root
    Normal html => "html",
    // Document metadata
    Void base => "base",
    Normal head => "head",
    Void link => "link",
    Void meta => "meta",
    Normal style => "style",
    Normal title => "title",
    // Sectioning root
    Normal body => "body",
    // Content sectioning
    Normal address => "address",
    Normal article => "article",
    Normal aside => "aside",
    Normal footer => "footer",
    Normal header => "header",
    Normal h1 => "h1",
    Normal h2 => "h2",
    Normal h3 => "h3",
    Normal h4 => "h4",
    Normal h5 => "h5",
    Normal h6 => "h6",
    Normal hgroup => "hgroup",
    Normal main => "main",
    Normal nav => "nav",
    Normal section => "section",
    // Text content
    Normal blockquote => "blockquote",
    Normal dd => "dd",
    Normal dir => "dir",
    Normal div => "div",
    Normal dl => "dl",
    Normal dt => "dt",
    Normal figcaption => "figcaption",
    Normal figure => "figure",
    Void hr => "hr",
    Normal li => "li",
    Normal ol => "ol",
    Normal p => "p",
    Normal pre => "pre",
    Normal ul => "ul",
    // Inline text semantics
    Normal a => "a",
    Normal abbr => "abbr",
    Normal b => "b",
    Normal bdi => "bdi",
    Normal bdo => "bdo",
    Void br => "br",
    Normal cite => "cite",
    Normal code => "code",
    Normal data => "data",
    Normal dfn => "dfn",
    Normal em => "em",
    Normal i => "i",
    Normal kbd => "kbd",
    Normal mark => "mark",
    Normal q => "q",
    Normal rb => "rb",
    Normal rp => "rp",
    Normal rt => "rt",
    Normal rtc => "rtc",
    Normal ruby => "ruby",
    Normal s => "s",
    Normal samp => "samp",
    Normal small => "small",
    Normal span => "span",
    Normal strong => "strong",
    Normal sub => "sub",
    Normal sup => "sup",
    Normal time => "time",
    Normal tt => "tt",
    Normal u => "u",
    Normal var_ => "var",
    Void wbr => "wbr",
    // Image and multimedia
    Void area => "area",
    Normal audio => "audio",
    Void img => "img",
    Normal map => "map",
    Void track => "track",
    Normal video => "video",
    // Embedded content
    Normal applet => "applet",
    Void embed => "embed",
    Normal iframe => "iframe",
    Normal noembed => "noembed",
    Normal object => "object",
    Void param => "param",
    Normal picture => "picture",
    Void source => "source",
    // Scripting
    Normal canvas => "canvas",
    Normal noscript => "noscript",
    Normal script => "script",
    // Demarcating edits
    Normal del => "del",
    Normal ins => "ins",
    // Table content
    Normal caption => "caption",
    Void col => "col",
    Normal colgroup => "colgroup",
    Normal table => "table",
    Normal tbody => "tbody",
    Normal td => "td",
    Normal tfoot => "tfoot",
    Normal th => "th",
    Normal thead => "thead",
    Normal tr => "tr",
    // Forms
    Normal button => "button",
    Normal datalist => "datalist",
    Normal fieldset => "fieldset",
    Normal form => "form",
    Void input => "input",
    Normal label => "label",
    Normal legend => "legend",
    Normal meter => "meter",
    Normal optgroup => "optgroup",
    Normal option => "option",
    Normal output => "output",
    Normal progress => "progress",
    Normal select => "select",
    Normal textarea => "textarea",
    // Interactive elements
    Normal details => "details",
    Normal dialog => "dialog",
    Normal summary => "summary",
}
