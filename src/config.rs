//! Support for application configuration options

use std::error::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Folder where task lists are stored, when nothing else is configured.
/// Feel free to override it before resolving the settings.
pub static DEFAULT_DATA_FOLDER: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| Arc::new(Mutex::new(PathBuf::from("data"))));

/// Name of the task list, when nothing else is configured.
/// Feel free to override it before resolving the settings.
pub static DEFAULT_LIST_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("tasks".to_string())));

/// Overrides the data folder of the config file
pub const DATA_FOLDER_ENV: &str = "TASKLINE_DATA_FOLDER";
/// Path to a JSON config file
pub const CONFIG_FILE_ENV: &str = "TASKLINE_CONFIG";
/// Config file that is used (if it exists) when [`CONFIG_FILE_ENV`] is not set
pub const DEFAULT_CONFIG_FILE: &str = "taskline.json";


/// Where the task list lives
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_folder: PathBuf,
    pub list_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_folder: read_default(&DEFAULT_DATA_FOLDER),
            list_name: read_default(&DEFAULT_LIST_NAME),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing keys get their default values
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let settings = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open config file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };
        Ok(settings)
    }

    /// Resolve the settings from the environment.
    ///
    /// The config file is either given by `TASKLINE_CONFIG` (and must exist), or is `taskline.json` if it exists.
    /// `TASKLINE_DATA_FOLDER` then takes precedence over the data folder of the config file.
    pub fn resolve() -> Result<Self, Box<dyn Error>> {
        let settings = match std::env::var_os(CONFIG_FILE_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    log::debug!("No config file found, using default settings");
                    Self::default()
                }
            },
        };
        Ok(settings.with_data_folder_override(std::env::var_os(DATA_FOLDER_ENV)))
    }

    fn with_data_folder_override(mut self, data_folder: Option<OsString>) -> Self {
        if let Some(folder) = data_folder {
            self.data_folder = PathBuf::from(folder);
        }
        self
    }
}

fn read_default<T: Clone>(value: &Lazy<Arc<Mutex<T>>>) -> T {
    match value.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
