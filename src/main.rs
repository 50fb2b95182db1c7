mod app_router;
mod backdrop;
mod boot;
mod boot_runtime;
mod core;
mod drag;
mod idb;
mod persisted;
mod persisted_store;
mod yew_app;

use wasm_bindgen_futures::spawn_local;

use crate::boot_runtime::BootState;
use crate::yew_app::App;

fn main() {
    console_error_panic_hook::set_once();
    boot::set_phase("storage", "loading saved settings");
    boot_runtime::set_boot_state(BootState::LoadingStorage);
    spawn_local(async {
        if let Err(message) = persisted_store::bootstrap().await {
            // defaults still apply; the game itself needs no storage
            gloo::console::warn!("settings bootstrap failed", message);
        }
        crate::core::apply_document_theme(persisted_store::settings_blob().theme_mode);
        boot_runtime::set_boot_state(BootState::Ready);
        boot::ready();
    });
    yew::Renderer::<App>::new().render();
}
