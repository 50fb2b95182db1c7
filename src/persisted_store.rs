use std::cell::RefCell;

use wasm_bindgen_futures::spawn_local;

use crate::idb;
use crate::persisted::{SettingsBlob, SETTINGS_KEY, SETTINGS_VERSION};
use nijinarabe_core::{decode, encode};

thread_local! {
    static SETTINGS_CACHE: RefCell<Option<SettingsBlob>> = RefCell::new(None);
}

/// Loads the settings record into the thread-local cache. Runs once before
/// the app renders; a missing or stale record falls back to defaults.
pub(crate) async fn bootstrap() -> Result<(), String> {
    let db = idb::open_db().await.map_err(idb::js_err)?;
    let settings = load_settings_blob(&db).await.unwrap_or_default();
    SETTINGS_CACHE.with(|slot| {
        *slot.borrow_mut() = Some(settings);
    });
    Ok(())
}

pub(crate) fn settings_blob() -> SettingsBlob {
    SETTINGS_CACHE
        .with(|slot| slot.borrow().clone())
        .unwrap_or_default()
}

pub(crate) fn update_settings_blob<F>(update: F)
where
    F: FnOnce(&mut SettingsBlob),
{
    let settings = SETTINGS_CACHE.with(|slot| {
        let mut settings = slot.borrow().clone().unwrap_or_default();
        update(&mut settings);
        *slot.borrow_mut() = Some(settings.clone());
        settings
    });
    spawn_local(async move {
        if let Err(message) = save_settings_blob(settings).await {
            gloo::console::warn!("settings save failed", message);
        }
    });
}

async fn load_settings_blob(db: &web_sys::IdbDatabase) -> Option<SettingsBlob> {
    let bytes = idb::idb_get_bytes(db, idb::IDB_STORE_SETTINGS, SETTINGS_KEY)
        .await
        .ok()
        .flatten()?;
    let settings = decode::<SettingsBlob>(&bytes)?;
    if settings.version != SETTINGS_VERSION {
        return None;
    }
    Some(settings)
}

async fn save_settings_blob(settings: SettingsBlob) -> Result<(), String> {
    let Some(bytes) = encode(&settings) else {
        return Ok(());
    };
    let db = idb::open_db().await.map_err(idb::js_err)?;
    idb::idb_put_bytes(&db, idb::IDB_STORE_SETTINGS, SETTINGS_KEY, &bytes)
        .await
        .map_err(idb::js_err)?;
    Ok(())
}
