//! Build trees of markup tags in memory and render them to HTML.
//!
//! A tree is made of [`Tag`]s, each with a name, string attributes and at
//! most one child. Anything implementing [`Renderable`] can be a child:
//! strings, numbers, sequences of renderables, [`Fragment`]s and other tags.
//!
//! # Rendering
//!
//! Rendering is a pure function of the tree and the [`RenderMode`]:
//!
//! - [`RenderMode::Minified`]: no whitespace is added.
//! - [`RenderMode::Indented`]: tags and their content sit on separate lines,
//!   each nesting level indented by a fixed number of spaces.
//!
//! Attribute values are written verbatim unless escaping is switched on in
//! [`RenderOptions`]. Sequence items that cannot be rendered are skipped and
//! reported through `tracing` and in [`Rendered::skipped`].
//!
//! # Example
//!
//! ```
//! use hypertext::elements::{div, span};
//! use hypertext::{RenderMode, RenderableExt};
//!
//! let tree = div()
//!     .attr("class", "box")
//!     .child(vec![span().build(), span().build()])
//!     .build();
//!
//! assert_eq!(
//!     tree.render(),
//!     r#"<div class="box"><span></span><span></span></div>"#
//! );
//! assert_eq!(
//!     tree.render_with(RenderMode::Indented { spaces: 2 }),
//!     "<div class=\"box\">\n  <span></span>\n  <span></span>\n</div>"
//! );
//! ```

pub mod elements;
mod fragment;
mod mode;
mod options;
mod render;
mod tag;
mod util;

pub use fragment::Fragment;
pub use mode::{DEFAULT_INDENT, RenderMode, RenderModeError};
pub use options::RenderOptions;
pub use render::{RenderContext, Renderable, RenderableExt, Rendered, SkippedItem};
pub use tag::{Attributes, Tag, TagBuilder};
pub use util::{escape_html, indent};
