#![cfg(test)]
//! Stylesheet lint: selectors the components emit must exist in the shipped CSS.
//!
//! A substring check is enough as an early warning when a class is renamed in
//! markup but not in the stylesheet (or the reverse).

const THEME_CSS: &str = include_str!("../assets/theme/main.css");
const NAVBAR_CSS: &str = include_str!("../assets/styling/navbar.css");
const CAROUSEL_CSS: &str = include_str!("../assets/styling/carousel.css");
const LANDING_CSS: &str = include_str!("../assets/styling/landing.css");

fn assert_selectors(sheet: &str, name: &str, required: &[&str]) {
    let missing: Vec<_> = required.iter().filter(|s| !sheet.contains(**s)).collect();
    assert!(
        missing.is_empty(),
        "{name} is missing {} selector(s)/token(s): {missing:?}",
        missing.len()
    );
}

#[test]
fn theme_defines_scroll_lock_and_tokens() {
    assert_selectors(
        THEME_CSS,
        "theme/main.css",
        &[
            ":root",
            "--color-bg",
            "--color-accent",
            "body {",
            "body.no-scroll",
            "overflow: hidden",
            ".button--primary",
            ".button--ghost",
            ".button--block",
            ".page {",
        ],
    );
}

#[test]
fn navbar_stylesheet_covers_markup() {
    assert_selectors(
        NAVBAR_CSS,
        "navbar.css",
        &[
            ".navbar__links",
            ".navbar__link--active",
            ".navbar__underline",
            ".navbar__cta",
            ".navbar__toggle",
            ".navbar__drawer {",
            ".navbar__drawer--open",
            "translateX(100%)",
            ".navbar__drawer-link--active",
            ".navbar__drawer-close",
            ".navbar__backdrop",
            "@media (max-width: 1023px)",
        ],
    );
}

#[test]
fn carousel_stylesheet_covers_markup() {
    assert_selectors(
        CAROUSEL_CSS,
        "carousel.css",
        &[
            "@keyframes scroll-left",
            "translateX(-50%)",
            ".clients__track",
            ".clients__logo-item",
            ".clients__fade--left",
            ".clients__fade--right",
            ".clients__edge-glow",
            ".clients__glow--blob",
            "@media (min-width: 768px)",
            "@media (min-width: 1024px)",
        ],
    );
}

#[test]
fn landing_stylesheet_covers_sections() {
    assert_selectors(
        LANDING_CSS,
        "landing.css",
        &[".landing {", "overflow: hidden", ".landing__section", ".landing__hero"],
    );
}
