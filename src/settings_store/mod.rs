//! Persistent settings record
//!
//! One flat JSON file, `settings.json`, in the config directory (see
//! [`crate::utils::get_config_dir`]). Keys the file lacks take their default
//! values when loaded.

pub mod persistence;

pub use persistence::{
    ensure_settings_initialized, load_settings, reset_settings, save_settings, settings_path,
};
