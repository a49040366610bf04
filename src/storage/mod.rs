pub mod json_backend;

use crate::{domain::FormRecord, errors::Result};

/// Abstraction over the place the in-progress questionnaire is kept between runs.
pub trait FormStorage: Send + Sync {
    /// Returns the persisted record, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<FormRecord>>;
    fn save(&self, record: &FormRecord) -> Result<()>;
    /// Erases the persisted record.
    fn clear(&self) -> Result<()>;

    /// Restores the last saved record, falling back to an empty one when the stored
    /// data is missing or unreadable.
    fn load_or_default(&self) -> FormRecord {
        match self.load() {
            Ok(Some(record)) => record,
            Ok(None) => FormRecord::default(),
            Err(err) => {
                tracing::warn!("discarding unreadable saved answers: {err}");
                FormRecord::default()
            }
        }
    }
}

pub use json_backend::{JsonFormStore, FORM_FILE_NAME};
