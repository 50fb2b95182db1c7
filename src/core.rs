use serde::{Deserialize, Serialize};

pub(crate) const THEME_MODE_KEY: &str = "nn.theme_mode";

pub(crate) const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub(crate) const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, rkyv::Archive, rkyv::Serialize,
    rkyv::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeMode {
    System,
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::System
    }
}

impl ThemeMode {
    pub(crate) fn cycled(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System theme",
            ThemeMode::Light => "Light theme",
            ThemeMode::Dark => "Dark theme",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, rkyv::Archive, rkyv::Serialize,
    rkyv::Deserialize,
)]
pub(crate) struct BackdropSettings {
    pub(crate) animations: bool,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self { animations: true }
    }
}

pub(crate) fn media_query_matches(query: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

pub(crate) fn dark_theme_active(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => media_query_matches(DARK_SCHEME_QUERY),
    }
}

/// Swaps the body class so CSS variables follow the resolved theme.
pub(crate) fn apply_document_theme(mode: ThemeMode) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let class_list = body.class_list();
    if dark_theme_active(mode) {
        let _ = class_list.add_1("dark-mode");
    } else {
        let _ = class_list.remove_1("dark-mode");
    }
}

/// Plain-string mirror of the theme mode so the pre-wasm splash can paint
/// with the right palette.
pub(crate) fn persist_theme_hint(mode: ThemeMode) {
    let Some(storage) = web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
    else {
        return;
    };
    let _ = storage.set_item(THEME_MODE_KEY, mode.as_str());
}

pub(crate) fn media_query_list(query: &str) -> Option<web_sys::MediaQueryList> {
    let window = web_sys::window()?;
    window.match_media(query).ok().flatten()
}
