//! Tag nodes.
//!
//! A [`Tag`] is a named element with string attributes and at most one
//! child. Multiple children are expressed by making that child a sequence
//! or a [`Fragment`](crate::Fragment).
//!
//! Rendering picks exactly one of three shapes, in this order:
//!
//! 1. Self-closing: `<name attrs/>`. The child is never consulted.
//! 2. Childless: `<name attrs></name>`, with no inner newline in any mode.
//! 3. With content: the child rendered between the open and close tags.
//!    Indented output puts the content on its own lines, one level deeper.
//!
//! In indented mode the open and close tags start at the context offset and
//! the content is rendered at the next level.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::mode::RenderMode;
use crate::render::{RenderContext, Renderable, RenderableExt};
use crate::util::escape_html;

/// Attribute map. Keys are emitted in sorted order.
pub type Attributes = BTreeMap<String, String>;

/// A markup element.
///
/// # Example
///
/// ```
/// use hypertext::{RenderMode, RenderableExt, Tag};
///
/// let list = Tag::builder("ul")
///     .attr("class", "menu")
///     .child(vec![
///         Tag::builder("li").child("Home").build(),
///         Tag::builder("li").child("About").build(),
///     ])
///     .build();
///
/// assert_eq!(
///     list.render(),
///     r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
/// );
/// assert_eq!(
///     list.render_with(RenderMode::Indented { spaces: 2 }),
///     "<ul class=\"menu\">\n  <li>\n    Home\n  </li>\n  <li>\n    About\n  </li>\n</ul>"
/// );
/// ```
pub struct Tag {
    name: Cow<'static, str>,
    self_closing: bool,
    attributes: Attributes,
    children: Option<Box<dyn Renderable>>,
}

impl Tag {
    /// Start building a tag with the given name.
    ///
    /// The name is emitted literally and is case-sensitive.
    #[must_use]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> TagBuilder {
        TagBuilder {
            tag: Tag {
                name: name.into(),
                self_closing: false,
                attributes: Attributes::new(),
                children: None,
            },
        }
    }

    /// Build a tag from attributes and a child producer.
    ///
    /// `children` is invoked exactly once, before this function returns.
    /// Returning `None` leaves the tag childless.
    ///
    /// ```
    /// use hypertext::{RenderableExt, Tag};
    ///
    /// let p = Tag::new("p", [("id", "intro")], || Some("hello"));
    /// assert_eq!(p.render(), r#"<p id="intro">hello</p>"#);
    /// ```
    pub fn new<I, K, V, F, R>(name: impl Into<Cow<'static, str>>, attributes: I, children: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        F: FnOnce() -> Option<R>,
        R: Renderable + 'static,
    {
        Self::builder(name)
            .attrs(attributes)
            .children_with(children)
            .build()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the attributes.
    ///
    /// Changes are visible to every later render.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    /// The child value, if one was set.
    #[must_use]
    pub fn children(&self) -> Option<&dyn Renderable> {
        self.children.as_deref()
    }

    /// Whether rendering would emit content between the open and close tags.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.self_closing && self.content().is_some()
    }

    fn content(&self) -> Option<&dyn Renderable> {
        self.children.as_deref().filter(|child| child.has_content())
    }

    fn write_open(&self, cx: &RenderContext, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            if cx.options().escape_attributes {
                out.push_str(&escape_html(value));
            } else {
                out.push_str(value);
            }
            out.push('"');
        }
    }

    fn write_close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl Renderable for Tag {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        cx.write_indent(out);
        self.write_open(cx, out);

        if self.self_closing {
            out.push_str("/>");
            return;
        }

        let Some(content) = self.content() else {
            out.push('>');
            self.write_close(out);
            // A child without content writes nothing, but its skipped items
            // are still reported.
            if let Some(child) = self.children.as_deref() {
                cx.nested(|cx| child.render_into(cx, &mut String::new()));
            }
            return;
        };

        match cx.mode() {
            RenderMode::Minified => {
                out.push('>');
                cx.nested(|cx| content.render_into(cx, out));
            }
            RenderMode::Indented { .. } => {
                out.push_str(">\n");
                cx.nested(|cx| content.render_into(cx, out));
                out.push('\n');
                cx.write_indent(out);
            }
        }
        self.write_close(out);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("self_closing", &self.self_closing)
            .field("attributes", &self.attributes)
            .field("has_children", &self.has_children())
            .finish()
    }
}

/// Builder for [`Tag`].
///
/// Attributes and the child are fixed by the time [`build`](Self::build)
/// returns. A builder can itself be used as a child, in which case it is
/// rendered as the tag it would build.
#[must_use]
pub struct TagBuilder {
    tag: Tag,
}

impl TagBuilder {
    /// Set one attribute. Setting the same key again replaces the value.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tag.attributes.insert(key.into(), value.into());
        self
    }

    /// Set several attributes.
    pub fn attrs<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tag.attributes.extend(
            attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    /// Mark the tag as self-closing (`<name/>`).
    pub fn self_closing(mut self, self_closing: bool) -> Self {
        self.tag.self_closing = self_closing;
        self
    }

    /// Set the child, replacing any previous one.
    pub fn child(mut self, child: impl Renderable + 'static) -> Self {
        self.tag.children = Some(Box::new(child));
        self
    }

    /// Set the child from a producer, invoked once, right away.
    pub fn children_with<R, F>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> Option<R>,
        R: Renderable + 'static,
    {
        self.tag.children = producer().map(|child| Box::new(child) as Box<dyn Renderable>);
        self
    }

    pub fn build(self) -> Tag {
        self.tag
    }
}

impl From<TagBuilder> for Tag {
    fn from(builder: TagBuilder) -> Self {
        builder.build()
    }
}

impl Renderable for TagBuilder {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        self.tag.render_into(cx, out);
    }
}
