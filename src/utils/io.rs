// src/utils/io.rs
use std::path::PathBuf;

/// Per-user configuration directory for hashpass, if the platform has one.
/// The directory is not created here; the target store creates it on first
/// write.
pub fn get_app_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hashpass", "hashpass")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}
