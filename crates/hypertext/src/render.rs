//! The renderable capability.
//!
//! Every value that can appear in a tree implements [`Renderable`]: scalar
//! leaves (strings, characters, numbers), ordered sequences of renderables,
//! [`Fragment`](crate::Fragment)s and [`Tag`](crate::Tag)s.
//!
//! # Indentation
//!
//! Indentation is owned by containers. A tag renders its content one level
//! deeper through [`RenderContext::nested`], which advances the context
//! offset. Leaves never pick their own indentation: they write their text
//! through [`RenderContext::write_text`], which prefixes each line with the
//! offset their container set. Every byte is written once, straight into the
//! output buffer, whatever the nesting depth.

use std::borrow::Cow;
use std::fmt::Write;
use std::sync::Arc;

use crate::mode::RenderMode;
use crate::options::RenderOptions;
use crate::util::{push_indent, push_indented};

/// A value that can be rendered to markup.
///
/// Implementors write their output into `out`, starting every line at
/// [`RenderContext::offset`]. Text should go through
/// [`RenderContext::write_text`], which does that. The convenience entry points
/// (`render`, `render_with`, ...) live on [`RenderableExt`] and are available
/// for every implementor.
///
/// # Example
///
/// ```
/// use hypertext::{RenderContext, Renderable, RenderableExt, elements::em};
///
/// struct Price(u32);
///
/// impl Renderable for Price {
///     fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
///         em().child(format!("${}", self.0)).build().render_into(cx, out);
///     }
/// }
///
/// assert_eq!(Price(5).render(), "<em>$5</em>");
/// ```
pub trait Renderable: Send + Sync {
    /// Append this value's markup to `out`.
    fn render_into(&self, cx: &mut RenderContext, out: &mut String);

    /// Whether a tag holding this value as its child has anything to render.
    ///
    /// Tags whose child reports `false` render as childless.
    fn has_content(&self) -> bool {
        true
    }
}

/// Rendering entry points, implemented for every [`Renderable`].
pub trait RenderableExt: Renderable {
    /// Render minified.
    fn render(&self) -> String {
        self.render_with(RenderMode::Minified)
    }

    /// Render in the given mode.
    fn render_with(&self, mode: RenderMode) -> String {
        self.render_report(&RenderOptions::new(mode)).output
    }

    /// Render in the given mode as if the output started `offset` columns in.
    ///
    /// The offset is ignored in minified mode.
    fn render_at(&self, mode: RenderMode, offset: usize) -> String {
        let mut cx = RenderContext::new(RenderOptions::new(mode)).with_offset(offset);
        let mut output = String::new();
        self.render_into(&mut cx, &mut output);
        output
    }

    /// Render with full options, returning the output together with every
    /// sequence item that was skipped.
    fn render_report(&self, options: &RenderOptions) -> Rendered {
        let mut cx = RenderContext::new(*options);
        let mut output = String::new();
        self.render_into(&mut cx, &mut output);
        Rendered {
            output,
            skipped: cx.skipped,
        }
    }
}

impl<T: Renderable + ?Sized> RenderableExt for T {}

/// Result of [`RenderableExt::render_report`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered markup.
    pub output: String,
    /// Sequence items that could not be rendered, in encounter order.
    pub skipped: Vec<SkippedItem>,
}

/// A sequence item that was skipped because it is not renderable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedItem {
    /// Position of the item within its sequence.
    pub index: usize,
    /// Type name of the skipped value.
    pub type_name: &'static str,
    /// Indentation offset of the sequence the item belonged to.
    pub offset: usize,
}

/// State threaded through a single render.
#[derive(Debug)]
pub struct RenderContext {
    options: RenderOptions,
    offset: usize,
    skipped: Vec<SkippedItem>,
}

impl RenderContext {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            offset: 0,
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.options.mode
    }

    /// Start rendering at `offset` columns. Ignored in minified mode.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        if !self.options.mode.is_minified() {
            self.offset = offset;
        }
        self
    }

    /// Absolute indentation of the value currently being rendered.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Write the current offset as spaces.
    pub fn write_indent(&self, out: &mut String) {
        push_indent(out, self.offset);
    }

    /// Write `text` with every line starting at the current offset.
    ///
    /// Empty text writes nothing.
    pub fn write_text(&self, text: &str, out: &mut String) {
        if !text.is_empty() {
            push_indented(out, text, self.offset);
        }
    }

    /// Run `f` one nesting level deeper.
    pub fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let parent = self.offset;
        self.offset = self.options.mode.add_spaces(parent);
        let result = f(self);
        self.offset = parent;
        result
    }

    /// Record a skipped sequence item.
    pub fn skip(&mut self, index: usize, type_name: &'static str) {
        tracing::warn!(
            index,
            type_name,
            offset = self.offset,
            "Skipping sequence item that is not renderable"
        );
        self.skipped.push(SkippedItem {
            index,
            type_name,
            offset: self.offset,
        });
    }

    /// Items skipped so far.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedItem] {
        &self.skipped
    }
}

/// One element of a sequence being rendered.
pub(crate) enum SequenceItem<'a> {
    Render(&'a dyn Renderable),
    Opaque(&'static str),
}

/// Render sequence items in order.
///
/// In indented mode items are separated by a newline, but only once the
/// sequence itself has produced output, so skipped or empty leading items
/// never cause a leading newline.
pub(crate) fn render_sequence<'a>(
    items: impl IntoIterator<Item = SequenceItem<'a>>,
    cx: &mut RenderContext,
    out: &mut String,
) {
    let start = out.len();
    for (index, item) in items.into_iter().enumerate() {
        match item {
            SequenceItem::Opaque(type_name) => cx.skip(index, type_name),
            SequenceItem::Render(item) => {
                if !cx.mode().is_minified() && out.len() > start {
                    out.push('\n');
                }
                item.render_into(cx, out);
            }
        }
    }
}

macro_rules! number_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
                    cx.write_indent(out);
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

number_leaf!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Renderable for char {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        cx.write_text(self.encode_utf8(&mut [0; 4]), out);
    }
}

impl Renderable for str {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        cx.write_text(self, out);
    }
}

impl Renderable for String {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        cx.write_text(self, out);
    }
}

impl Renderable for Cow<'_, str> {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        cx.write_text(self, out);
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        (**self).render_into(cx, out);
    }

    fn has_content(&self) -> bool {
        (**self).has_content()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        (**self).render_into(cx, out);
    }

    fn has_content(&self) -> bool {
        (**self).has_content()
    }
}

impl<T: Renderable + ?Sized> Renderable for Arc<T> {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        (**self).render_into(cx, out);
    }

    fn has_content(&self) -> bool {
        (**self).has_content()
    }
}

impl<T: Renderable> Renderable for Option<T> {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        if let Some(value) = self {
            value.render_into(cx, out);
        }
    }

    fn has_content(&self) -> bool {
        self.as_ref().is_some_and(Renderable::has_content)
    }
}

impl<T: Renderable> Renderable for [T] {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        render_sequence(
            self.iter()
                .map(|item| SequenceItem::Render(item as &dyn Renderable)),
            cx,
            out,
        );
    }

    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        self.as_slice().render_into(cx, out);
    }

    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Renderable, const N: usize> Renderable for [T; N] {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        self.as_slice().render_into(cx, out);
    }

    fn has_content(&self) -> bool {
        N > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDENTED: RenderMode = RenderMode::Indented { spaces: 2 };

    #[test]
    fn test_scalar_leaves() {
        assert_eq!("hello".render(), "hello");
        assert_eq!(String::from("owned").render(), "owned");
        assert_eq!(Cow::Borrowed("cow").render(), "cow");
        assert_eq!('x'.render(), "x");
        assert_eq!(5_i32.render(), "5");
        assert_eq!((-42_i64).render(), "-42");
        assert_eq!(2.75_f64.render(), "2.75");
        assert_eq!(2.5_f32.render(), "2.5");
    }

    #[test]
    fn test_leaves_ignore_mode() {
        assert_eq!("hello".render_with(INDENTED), "hello");
        assert_eq!(7_u8.render_with(INDENTED), "7");
    }

    #[test]
    fn test_leaf_keeps_literal_newlines_when_minified() {
        assert_eq!("a\nb".render(), "a\nb");
    }

    #[test]
    fn test_sequence_minified() {
        assert_eq!(vec!["a", "b", "c"].render(), "abc");
        assert_eq!([1_i32, 2, 3].render(), "123");
    }

    #[test]
    fn test_sequence_indented() {
        assert_eq!(vec!["a", "b", "c"].render_with(INDENTED), "a\nb\nc");
    }

    #[test]
    fn test_sequence_skips_empty_leading_items() {
        let items = vec!["", "a", "b"];
        assert_eq!(items.render_with(INDENTED), "a\nb");
    }

    #[test]
    fn test_nested_sequences() {
        let items = vec![vec!["a", "b"], vec!["c"]];
        assert_eq!(items.render_with(INDENTED), "a\nb\nc");
        assert_eq!(items.render(), "abc");
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<&str> = Vec::new();
        assert_eq!(items.render_with(INDENTED), "");
        assert!(!items.has_content());
    }

    #[test]
    fn test_option() {
        assert_eq!(Some("x").render(), "x");
        assert_eq!(None::<&str>.render(), "");
        assert!(!None::<&str>.has_content());
        assert!(Some("x").has_content());
    }

    #[test]
    fn test_boxed_and_shared() {
        let boxed: Box<dyn Renderable> = Box::new(12_i32);
        assert_eq!(boxed.render(), "12");
        let shared: Arc<dyn Renderable> = Arc::new("shared");
        assert_eq!(shared.render(), "shared");
    }

    #[test]
    fn test_render_at_offset() {
        let items = vec!["a", "b"];
        assert_eq!(items.render_at(INDENTED, 4), "    a\n    b");
        assert_eq!(items.render_at(RenderMode::Minified, 4), "ab");
    }

    #[test]
    fn test_render_report_without_skips() {
        let rendered = vec![1_u32, 2].render_report(&RenderOptions::new(INDENTED));
        assert_eq!(rendered.output, "1\n2");
        assert!(rendered.skipped.is_empty());
    }

    #[test]
    fn test_context_nested_offsets() {
        let mut cx = RenderContext::new(RenderOptions::new(RenderMode::Indented { spaces: 3 }));
        assert_eq!(cx.offset(), 0);
        let inner = cx.nested(|cx| cx.nested(|cx| cx.offset()));
        assert_eq!(inner, 6);
        assert_eq!(cx.offset(), 0);
    }

    #[test]
    fn test_context_minified_offset_stays_zero() {
        let mut cx = RenderContext::new(RenderOptions::default());
        assert_eq!(cx.nested(|cx| cx.offset()), 0);
    }

    #[test]
    fn test_context_records_skips() {
        let mut cx = RenderContext::new(RenderOptions::new(INDENTED));
        cx.nested(|cx| cx.skip(1, "bool"));
        assert_eq!(
            cx.skipped(),
            [SkippedItem {
                index: 1,
                type_name: "bool",
                offset: 2,
            }]
        );
    }

    #[test]
    fn test_leaves_write_at_context_offset() {
        let cx = RenderContext::new(RenderOptions::new(INDENTED)).with_offset(4);
        let mut out = String::new();
        cx.write_text("a\nb", &mut out);
        assert_eq!(out, "    a\n    b");

        let mut cx = cx;
        let mut out = String::new();
        42_i32.render_into(&mut cx, &mut out);
        assert_eq!(out, "    42");
    }

    #[test]
    fn test_minified_ignores_start_offset() {
        let cx = RenderContext::new(RenderOptions::default()).with_offset(4);
        assert_eq!(cx.offset(), 0);
    }

    #[test]
    fn test_skip_emits_warning() {
        use std::sync::Mutex;

        use tracing::field::{Field, Visit};
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        #[derive(Default)]
        struct Fields(Vec<String>);

        impl Visit for Fields {
            fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                self.0.push(format!("{}={value:?}", field.name()));
            }
        }

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<(Level, Vec<String>)>>>);

        impl<S: Subscriber> Layer<S> for Capture {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = Fields::default();
                event.record(&mut fields);
                self.0
                    .lock()
                    .unwrap()
                    .push((*event.metadata().level(), fields.0));
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        tracing::subscriber::with_default(subscriber, || {
            let mut cx = RenderContext::new(RenderOptions::new(INDENTED));
            cx.nested(|cx| cx.skip(3, "bool"));
        });

        let events = capture.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        let (level, fields) = &events[0];
        assert_eq!(*level, Level::WARN);
        assert!(fields.contains(&"index=3".to_owned()));
        assert!(fields.contains(&r#"type_name="bool""#.to_owned()));
        assert!(fields.contains(&"offset=2".to_owned()));
        assert!(
            fields.contains(&"message=Skipping sequence item that is not renderable".to_owned())
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let items = vec!["a", "b"];
        assert_eq!(items.render_with(INDENTED), items.render_with(INDENTED));
    }
}
