use std::{fs, path::PathBuf};

use directories::ProjectDirs;

use crate::constants::APP_NAME;

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", APP_NAME, APP_NAME) {
        let dir = proj_dirs
            .state_dir()
            .unwrap_or_else(|| proj_dirs.data_local_dir())
            .to_path_buf();
        fs::create_dir_all(&dir).ok();
        return dir;
    }
    PathBuf::from(".")
}

pub fn default_log_path() -> PathBuf {
    get_state_dir().join(format!("{}.log", APP_NAME))
}
