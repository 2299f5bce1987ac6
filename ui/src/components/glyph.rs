use dioxus::prelude::*;

use crate::navigation::Glyph;

impl Glyph {
    /// Outline paths on a 24x24 grid, stroked with `currentColor`.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Home => &[
                "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
                "M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            ],
            Glyph::Info => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M12 16v-4",
                "M12 8h.01",
            ],
            Glyph::PaymentCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            Glyph::Tool => &[
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
            ],
            Glyph::Person => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            ],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::BackArrow => &["m12 19-7-7 7-7", "M19 12H5"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Glyph::Home => "home",
            Glyph::Info => "info",
            Glyph::PaymentCard => "payment-card",
            Glyph::Tool => "tool",
            Glyph::Person => "person",
            Glyph::Menu => "menu",
            Glyph::Close => "close",
            Glyph::BackArrow => "back-arrow",
        }
    }
}

/// Decorative inline SVG for a [`Glyph`]. Callers label the surrounding control.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[props(default = "glyph".to_string())] class: String) -> Element {
    let name = glyph.name();
    rsx! {
        svg {
            class: "{class} glyph--{name}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph.paths().iter() {
                path { d: *d }
            }
        }
    }
}
