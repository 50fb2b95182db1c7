use crate::core::{BackdropSettings, ThemeMode};

pub(crate) const SETTINGS_VERSION: u32 = 1;
pub(crate) const SETTINGS_KEY: &str = "settings.v1";

#[derive(Clone, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub(crate) struct SettingsBlob {
    pub(crate) version: u32,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) backdrop: BackdropSettings,
}

impl Default for SettingsBlob {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme_mode: ThemeMode::default(),
            backdrop: BackdropSettings::default(),
        }
    }
}
