//! Constructors for standard HTML elements.
//!
//! Each function returns a [`TagBuilder`] preset with the element's name.
//! Void elements (`br`, `img`, `input`, ...) are preset to self-closing.
//!
//! ```
//! use hypertext::RenderableExt;
//! use hypertext::elements::{div, img, p};
//!
//! let card = div()
//!     .attr("class", "card")
//!     .child(vec![img().attr("src", "a.png").build(), p().child("Caption").build()])
//!     .build();
//!
//! assert_eq!(
//!     card.render(),
//!     r#"<div class="card"><img src="a.png"/><p>Caption</p></div>"#
//! );
//! ```

use crate::tag::{Tag, TagBuilder};

/// Elements that never have content and render self-closing.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether `name` is an HTML void element (ASCII case-insensitive).
///
/// ```
/// use hypertext::elements::is_void_element;
///
/// assert!(is_void_element("br"));
/// assert!(is_void_element("IMG"));
/// assert!(!is_void_element("div"));
/// ```
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

macro_rules! elements {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` element.")]
            pub fn $name() -> TagBuilder {
                Tag::builder(stringify!($name))
            }
        )*
    };
}

macro_rules! void_elements {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Self-closing `<", stringify!($name), "/>` element.")]
            pub fn $name() -> TagBuilder {
                Tag::builder(stringify!($name)).self_closing(true)
            }
        )*
    };
}

// Document structure
elements!(html, head, body, title, style, script, noscript, template);

// Sections
elements!(
    header, footer, main, nav, section, article, aside, address, h1, h2, h3, h4, h5, h6, hgroup,
);

// Grouping
elements!(
    div, p, pre, blockquote, ul, ol, li, dl, dt, dd, figure, figcaption, menu, search,
);

// Text-level
elements!(
    a, abbr, b, bdi, bdo, cite, code, data, dfn, em, i, kbd, mark, q, rp, rt, ruby, s, samp,
    small, span, strong, sub, sup, time, u, var, del, ins,
);

// Tables
elements!(table, caption, colgroup, thead, tbody, tfoot, tr, th, td);

// Forms
elements!(
    form, label, button, select, datalist, optgroup, option, textarea, output, progress, meter,
    fieldset, legend,
);

// Embedded and interactive content
elements!(
    picture, iframe, object, video, audio, map, svg, canvas, details, summary, dialog, slot,
);

void_elements!(area, base, br, col, embed, hr, img, input, link, meta, source, track, wbr);
