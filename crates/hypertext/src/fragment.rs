//! Heterogeneous sequences.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::render::{RenderContext, Renderable, SequenceItem, render_sequence};
use crate::tag::{Tag, TagBuilder};

/// An ordered list of values of mixed types.
///
/// Values added with [`push`](Self::push) are statically renderable.
/// [`push_any`](Self::push_any) accepts any value: the built-in renderable
/// types are recognised at runtime, everything else is kept as an opaque
/// entry that is skipped, with a diagnostic, when the fragment is rendered.
///
/// # Example
///
/// ```
/// use hypertext::{Fragment, RenderOptions, RenderMode, RenderableExt};
///
/// let mut fragment = Fragment::new();
/// fragment.push_any("a");
/// fragment.push_any(true);
/// fragment.push_any(2_u8);
///
/// let rendered = fragment.render_report(&RenderOptions::new(RenderMode::Indented { spaces: 2 }));
/// assert_eq!(rendered.output, "a\n2");
/// assert_eq!(rendered.skipped[0].type_name, "bool");
/// ```
#[derive(Default)]
pub struct Fragment {
    entries: Vec<Entry>,
}

enum Entry {
    Renderable(Box<dyn Renderable>),
    Opaque(&'static str),
}

impl Fragment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a renderable value.
    pub fn push(&mut self, item: impl Renderable + 'static) {
        self.entries.push(Entry::Renderable(Box::new(item)));
    }

    /// Append a renderable value, builder style.
    #[must_use]
    pub fn with(mut self, item: impl Renderable + 'static) -> Self {
        self.push(item);
        self
    }

    /// Append a value of any type.
    ///
    /// Recognised at runtime and rendered normally:
    ///
    /// - strings, characters and numbers, [`Tag`], [`TagBuilder`] and
    ///   [`Fragment`];
    /// - `Box<dyn Renderable>` and `Arc<dyn Renderable>`;
    /// - `Vec<T>` and `Option<T>` of any of the above.
    ///
    /// Other values, including renderable ones outside this list (deeper
    /// nesting such as `Vec<Vec<T>>`, references other than `&'static str`,
    /// user types), are skipped at render time. Use [`push`](Self::push) for
    /// those.
    pub fn push_any<T: Any + Send + Sync>(&mut self, value: T) {
        let name = type_name::<T>();
        let entry = match downcast_renderable(Box::new(value)) {
            Ok(item) => Entry::Renderable(item),
            Err(_) => Entry::Opaque(name),
        };
        self.entries.push(entry);
    }

    /// Number of entries, including ones that will be skipped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type AnyValue = Box<dyn Any + Send + Sync>;

fn downcast_renderable(value: AnyValue) -> Result<Box<dyn Renderable>, AnyValue> {
    macro_rules! try_types {
        ($value:ident: $($ty:ty),* $(,)?) => {
            $(
                let $value = match $value.downcast::<$ty>() {
                    Ok(item) => return Ok(item),
                    Err(other) => other,
                };
                let $value = match $value.downcast::<Vec<$ty>>() {
                    Ok(items) => return Ok(items),
                    Err(other) => other,
                };
                let $value = match $value.downcast::<Option<$ty>>() {
                    Ok(item) => return Ok(item),
                    Err(other) => other,
                };
            )*
        };
    }

    try_types!(value:
        &'static str, String, Cow<'static, str>, char,
        i8, i16, i32, i64, i128, isize,
        u8, u16, u32, u64, u128, usize,
        f32, f64,
        Tag, TagBuilder, Fragment,
        Box<dyn Renderable>, Arc<dyn Renderable>,
    );
    Err(value)
}

impl Renderable for Fragment {
    fn render_into(&self, cx: &mut RenderContext, out: &mut String) {
        render_sequence(
            self.entries.iter().map(|entry| match entry {
                Entry::Renderable(item) => SequenceItem::Render(&**item),
                Entry::Opaque(name) => SequenceItem::Opaque(*name),
            }),
            cx,
            out,
        );
    }

    fn has_content(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, Entry::Renderable(item) if item.has_content()))
    }
}

impl<R: Renderable + 'static> FromIterator<R> for Fragment {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut fragment = Self::new();
        fragment.extend(iter);
        fragment
    }
}

impl<R: Renderable + 'static> Extend<R> for Fragment {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for entry in &self.entries {
            match entry {
                Entry::Renderable(_) => list.entry(&"<renderable>"),
                Entry::Opaque(name) => list.entry(name),
            };
        }
        list.finish()
    }
}

/// Build a [`Fragment`] from renderable values of mixed types.
///
/// ```
/// use hypertext::{fragment, RenderableExt, elements::b};
///
/// let f = fragment!["Total: ", b().child(3_i32), '!'];
/// assert_eq!(f.render(), "Total: <b>3</b>!");
/// ```
#[macro_export]
macro_rules! fragment {
    () => {
        $crate::Fragment::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut fragment = $crate::Fragment::new();
        $(fragment.push($item);)+
        fragment
    }};
}
