use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Play,
    Learn,
    About,
}

impl Route {
    pub(crate) fn hash(self) -> &'static str {
        match self {
            Route::Home => "",
            Route::Play => "#play",
            Route::Learn => "#learn",
            Route::About => "#about",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Play => "Play",
            Route::Learn => "Learn",
            Route::About => "About",
        }
    }
}

pub(crate) fn parse_route(hash: &str) -> Route {
    let raw = hash.trim().trim_start_matches('#').trim();
    if raw.is_empty() {
        return Route::Home;
    }
    let name = raw.split(&['?', '&'][..]).next().unwrap_or("");
    match name.to_ascii_lowercase().as_str() {
        "play" => Route::Play,
        "learn" => Route::Learn,
        "about" => Route::About,
        _ => Route::Home,
    }
}

pub(crate) fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Home;
    };
    let hash = window.location().hash().unwrap_or_default();
    parse_route(&hash)
}

/// Rewrites the location hash without scrolling, falling back to a plain
/// hash assignment when the history API is unavailable.
pub(crate) fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let new_url = format!("{path}{search}{}", route.hash());
    if let Ok(history) = window.history() {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(&new_url))
            .is_ok()
        {
            return;
        }
    }
    let _ = location.set_hash(route.hash());
}
