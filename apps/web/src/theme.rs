use portfolio_core::theme::STORAGE_KEY;
use portfolio_core::ColorScheme;
use ratzilla::ratatui::style::Color;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The saved scheme, ignoring values this version does not know.
pub fn stored_scheme() -> Option<ColorScheme> {
    let stored = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    let scheme = ColorScheme::from_css_value(&stored);
    if scheme.is_none() {
        web_sys::console::warn_1(&format!("Ignoring unknown color scheme {stored:?}").into());
    }
    scheme
}

/// Sets the page's `color-scheme` without touching storage.
pub fn show_scheme(scheme: ColorScheme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        if root.style().set_property("color-scheme", scheme.css_value()).is_err() {
            web_sys::console::warn_1(&"Failed to set color-scheme".into());
        }
    }
}

/// Shows `scheme` and remembers it as the visitor's choice.
pub fn apply_scheme(scheme: ColorScheme) {
    show_scheme(scheme);
    if let Some(storage) = local_storage() {
        if storage.set_item(STORAGE_KEY, scheme.css_value()).is_err() {
            web_sys::console::warn_1(&"Failed to save color scheme".into());
        }
    }
}

/// Foreground, background, muted and accent colours of a scheme.
pub const fn colors(scheme: ColorScheme) -> (Color, Color, Color, Color) {
    match scheme {
        ColorScheme::Automatic => (Color::Reset, Color::Reset, Color::Gray, Color::Cyan),
        ColorScheme::Light => (
            Color::Rgb(0x1f, 0x1f, 0x1f),
            Color::Rgb(0xfa, 0xfa, 0xfa),
            Color::Rgb(0x80, 0x80, 0x80),
            Color::Rgb(0x1f, 0x5f, 0xbf),
        ),
        ColorScheme::Dark => (
            Color::Rgb(0xe6, 0xe6, 0xe6),
            Color::Rgb(0x16, 0x16, 0x1a),
            Color::Rgb(0x70, 0x70, 0x78),
            Color::Rgb(0x6c, 0xb4, 0xee),
        ),
    }
}

pub const SELECTED: Color = Color::Rgb(0xd9, 0x3f, 0x72);
