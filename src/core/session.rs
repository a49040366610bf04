use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    domain::{Field, FormRecord, ItemField, ListKind},
    errors::Result,
    form::FormStateManager,
    locale::{Language, LocaleTable},
    message::{self, ExportLink, PreviewEntry},
    storage::FormStorage,
};

/// Facade that owns the live record and persists it after every mutation.
pub struct IntakeSession {
    record: FormRecord,
    locale: LocaleTable,
    locale_dir: Option<PathBuf>,
    storage: Box<dyn FormStorage>,
}

impl IntakeSession {
    /// Restores the last saved answers from `storage`, or starts empty.
    pub fn open(
        storage: Box<dyn FormStorage>,
        language: Language,
        locale_dir: Option<PathBuf>,
    ) -> Self {
        let record = storage.load_or_default();
        let locale = LocaleTable::resolve(language, locale_dir.as_deref());
        debug!(%language, restored = !record.is_empty(), "opened intake session");
        Self {
            record,
            locale,
            locale_dir,
            storage,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn locale(&self) -> &LocaleTable {
        &self.locale
    }

    pub fn language(&self) -> Language {
        self.locale.language
    }

    pub fn locale_dir(&self) -> Option<&Path> {
        self.locale_dir.as_deref()
    }

    pub fn storage(&self) -> &dyn FormStorage {
        self.storage.as_ref()
    }

    /// Switches the presentation language. Stored answers are left untouched.
    pub fn set_language(&mut self, language: Language) {
        self.locale = LocaleTable::resolve(language, self.locale_dir.as_deref());
    }

    pub fn set_locale_dir(&mut self, dir: Option<PathBuf>) {
        self.locale_dir = dir;
        self.set_language(self.language());
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        let next = FormStateManager::new(&self.locale).apply_change(&self.record, field, value);
        self.commit(next)
    }

    pub fn resize_list(&mut self, list: ListKind, desired: &str) -> Result<()> {
        let next = FormStateManager::new(&self.locale).resize_list(&self.record, list, desired);
        self.commit(next)
    }

    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) -> Result<()> {
        let next = FormStateManager::new(&self.locale).update_list_item(
            &self.record,
            index,
            field,
            value,
        )?;
        self.commit(next)
    }

    pub fn commit_income(&mut self) -> Result<()> {
        let next = FormStateManager::new(&self.locale).commit_income(&self.record);
        self.commit(next)
    }

    /// Resets every answer and erases the saved copy.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.record = FormRecord::default();
        info!("questionnaire cleared");
        Ok(())
    }

    pub fn preview(&self) -> Vec<PreviewEntry> {
        message::render_preview(&self.record, &self.locale)
    }

    pub fn segments(&self, limit: usize) -> Vec<String> {
        message::render_with_limit(&self.record, &self.locale, limit)
    }

    pub fn export_links(&self, recipient: &str, limit: usize) -> Vec<ExportLink> {
        message::build_links(recipient, &self.segments(limit))
    }

    fn commit(&mut self, next: FormRecord) -> Result<()> {
        self.storage.save(&next)?;
        self.record = next;
        Ok(())
    }
}
