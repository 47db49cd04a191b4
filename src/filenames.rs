use crate::config::CONFIG_FILENAME;
use std::{env::var, path::PathBuf};

pub fn monthgrid_config() -> PathBuf {
    match var("MONTHGRID_CONFIG") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .unwrap_or("/".into())
            .join(CONFIG_FILENAME),
    }
}
