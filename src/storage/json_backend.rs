use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    domain::FormRecord,
    errors::Result,
    utils::{
        app_data_dir,
        persistence::{load_json, remove_if_exists, save_json},
    },
};

use super::FormStorage;

/// Versioned file name; bump the suffix when the record layout changes incompatibly.
pub const FORM_FILE_NAME: &str = "form_data_v1.5.json";

/// Stores the record as pretty-printed JSON inside the data directory.
#[derive(Debug, Clone)]
pub struct JsonFormStore {
    path: PathBuf,
}

impl JsonFormStore {
    pub fn new(root: Option<PathBuf>) -> Self {
        let root = root.unwrap_or_else(app_data_dir);
        Self {
            path: root.join(FORM_FILE_NAME),
        }
    }

    pub fn new_default() -> Self {
        Self::new(None)
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FormStorage for JsonFormStore {
    fn load(&self) -> Result<Option<FormRecord>> {
        let record = load_json(&self.path)?;
        if record.is_some() {
            debug!(path = %self.path.display(), "restored saved answers");
        }
        Ok(record)
    }

    fn save(&self, record: &FormRecord) -> Result<()> {
        save_json(record, &self.path)
    }

    fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path)?;
        info!(path = %self.path.display(), "cleared saved answers");
        Ok(())
    }
}
