use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Settings {
    pub share_destination: String,
    pub invoice_export_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            share_destination: dispatch::DEFAULT_SHARE_DESTINATION.into(),
            invoice_export_path: PathBuf::from(dispatch::DEFAULT_EXPORT_FILENAME),
            catalog_path: None,
        }
    }
}

/// Defaults, then the optional `souk.toml` next to the binary's working
/// directory, then `SOUK_*` environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("souk.toml") {
        apply_file_config(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings);

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("share_destination") {
            settings.share_destination = v.clone();
        }
        if let Some(v) = file_cfg.get("invoice_export_path") {
            settings.invoice_export_path = PathBuf::from(v);
        }
        if let Some(v) = file_cfg.get("catalog_path") {
            settings.catalog_path = Some(PathBuf::from(v));
        }
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(v) = std::env::var("SOUK_SHARE_DESTINATION") {
        settings.share_destination = v;
    }
    if let Ok(v) = std::env::var("SOUK_INVOICE_EXPORT_PATH") {
        settings.invoice_export_path = PathBuf::from(v);
    }
    if let Ok(v) = std::env::var("SOUK_CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
}
