//! Locale tables: labels, option lists and message strings for both supported languages.

pub mod format;

use std::{
    collections::BTreeMap,
    fmt, fs,
    path::Path,
    str::FromStr,
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{FamilyField, Field, HelperField},
    errors::{IntakeError, Result},
};

pub use format::{format_date_for_message, format_numeric_display, parse_count};

/// Family counts offered by the selector (`0`..=`12`).
pub const MAX_FAMILY_COUNT: usize = 12;
/// Helper counts offered by the selector (`1`..=`13`, plus "planning to hire").
pub const MAX_HELPER_COUNT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = IntakeError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-hk" | "chinese" | "中文" => Ok(Language::Zh),
            "en" | "en-us" | "english" => Ok(Language::En),
            other => Err(IntakeError::InvalidInput(format!(
                "unsupported language `{}` (use zh or en)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiStrings {
    pub intro: String,
    pub preview: String,
    pub export_btn: String,
    /// Shown when the message had to be split.
    pub export_tip: String,
    pub clear: String,
    pub clear_confirm: String,
    pub back: String,
}

/// Labels for every field, keyed by the persisted field key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelSet {
    pub fields: BTreeMap<String, String>,
    pub family: BTreeMap<String, String>,
    pub helper: BTreeMap<String, String>,
    /// Section title with an `{i}` placeholder for the 1-based index.
    pub family_member_title: String,
    pub helper_title: String,
}

impl LabelSet {
    pub fn field(&self, field: Field) -> &str {
        lookup(&self.fields, field.key())
    }

    pub fn family(&self, field: FamilyField) -> &str {
        lookup(&self.family, field.key())
    }

    pub fn helper(&self, field: HelperField) -> &str {
        lookup(&self.helper, field.key())
    }

    pub fn family_member_title(&self, position: usize) -> String {
        self.family_member_title
            .replace("{i}", &position.to_string())
    }

    pub fn helper_title(&self, position: usize) -> String {
        self.helper_title.replace("{i}", &position.to_string())
    }
}

fn lookup<'a>(map: &'a BTreeMap<String, String>, key: &'a str) -> &'a str {
    map.get(key).map(String::as_str).unwrap_or(key)
}

/// Enumerated option lists. Several reveal predicates depend on fixed positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionTable {
    pub yes: String,
    pub no: String,
    pub please_select: String,
    pub planning_to_hire: String,
    pub family_count_zero: String,
    pub family_count_one: String,
    pub housing: Vec<String>,
    pub rooms: Vec<String>,
    pub room_arrangement: Vec<String>,
    pub salary: Vec<String>,
    pub food: Vec<String>,
    pub app_type: Vec<String>,
    pub local_work: Vec<String>,
    pub overseas_work: Vec<String>,
    pub months: Vec<String>,
    pub relations: Vec<String>,
    pub genders: Vec<String>,
    pub helper_arrangement: Vec<String>,
}

/// Identifies an option list for select controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionList {
    YesNo,
    Housing,
    Rooms,
    RoomArrangement,
    Salary,
    Food,
    AppType,
    LocalWork,
    OverseasWork,
    Months,
    Relations,
    Genders,
    HelperArrangement,
    FamilyCount,
    HelperCount,
}

impl OptionTable {
    pub fn list(&self, list: OptionList) -> Vec<String> {
        match list {
            OptionList::YesNo => vec![self.yes.clone(), self.no.clone()],
            OptionList::Housing => self.housing.clone(),
            OptionList::Rooms => self.rooms.clone(),
            OptionList::RoomArrangement => self.room_arrangement.clone(),
            OptionList::Salary => self.salary.clone(),
            OptionList::Food => self.food.clone(),
            OptionList::AppType => self.app_type.clone(),
            OptionList::LocalWork => self.local_work.clone(),
            OptionList::OverseasWork => self.overseas_work.clone(),
            OptionList::Months => self.months.clone(),
            OptionList::Relations => self.relations.clone(),
            OptionList::Genders => self.genders.clone(),
            OptionList::HelperArrangement => self.helper_arrangement.clone(),
            OptionList::FamilyCount => {
                let mut options: Vec<String> =
                    (0..=MAX_FAMILY_COUNT).map(|n| n.to_string()).collect();
                options[0] = self.family_count_zero.clone();
                options[1] = self.family_count_one.clone();
                options
            }
            OptionList::HelperCount => std::iter::once(self.planning_to_hire.clone())
                .chain((1..=MAX_HELPER_COUNT).map(|n| n.to_string()))
                .collect(),
        }
    }
}

/// Everything the questionnaire needs to present itself in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleTable {
    pub language: Language,
    pub message_prefix: String,
    /// Placeholder emitted (in parentheses) for blank values.
    pub empty: String,
    #[serde(default)]
    pub ui: UiStrings,
    pub labels: LabelSet,
    /// Compact labels used only in the exported message.
    pub short_labels: LabelSet,
    pub options: OptionTable,
    /// Long overseas work-arrangement options and their compact export form.
    #[serde(default)]
    pub work_arrangement_short: BTreeMap<String, String>,
}

static ZH_TABLE: Lazy<LocaleTable> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../locales/zh.json"))
        .expect("embedded zh locale table is valid")
});

static EN_TABLE: Lazy<LocaleTable> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../locales/en.json"))
        .expect("embedded en locale table is valid")
});

impl LocaleTable {
    /// Tables shipped with the crate.
    pub fn builtin(language: Language) -> &'static LocaleTable {
        match language {
            Language::Zh => &ZH_TABLE,
            Language::En => &EN_TABLE,
        }
    }

    /// Loads `<dir>/<lang>.json`.
    pub fn load_from_dir(dir: &Path, language: Language) -> Result<LocaleTable> {
        let path = dir.join(format!("{}.json", language.code()));
        let data = fs::read_to_string(&path)?;
        let table: LocaleTable = serde_json::from_str(&data)?;
        if table.language != language {
            return Err(IntakeError::Config(format!(
                "locale file `{}` declares language `{}`",
                path.display(),
                table.language
            )));
        }
        Ok(table)
    }

    /// Resolves the table for `language`, preferring an override directory when given.
    pub fn resolve(language: Language, override_dir: Option<&Path>) -> LocaleTable {
        if let Some(dir) = override_dir {
            match Self::load_from_dir(dir, language) {
                Ok(table) => return table,
                Err(err) => tracing::warn!(
                    dir = %dir.display(),
                    %language,
                    "falling back to built-in locale table: {err}"
                ),
            }
        }
        Self::builtin(language).clone()
    }

    /// Compact form of an overseas work-arrangement option, if one is defined.
    ///
    /// This table is consulted first, then the tables of the other languages so that
    /// values persisted under another locale are still shortened.
    pub fn shorten_work_arrangement<'a>(&'a self, value: &'a str) -> &'a str {
        if let Some(short) = self.work_arrangement_short.get(value) {
            return short;
        }
        Language::ALL
            .iter()
            .filter(|language| **language != self.language)
            .find_map(|language| {
                LocaleTable::builtin(*language)
                    .work_arrangement_short
                    .get(value)
                    .map(String::as_str)
            })
            .unwrap_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_tables_parse_and_label_every_field() {
        for language in Language::ALL {
            let table = LocaleTable::builtin(language);
            assert_eq!(table.language, language);
            for field in Field::ALL {
                assert!(table.labels.fields.contains_key(field.key()), "{field}");
                assert!(table.short_labels.fields.contains_key(field.key()), "{field}");
            }
            for field in FamilyField::ALL {
                assert!(table.short_labels.family.contains_key(field.key()));
            }
            for field in HelperField::ALL {
                assert!(table.short_labels.helper.contains_key(field.key()));
            }
        }
    }

    #[test]
    fn positional_options_have_required_length() {
        for language in Language::ALL {
            let options = &LocaleTable::builtin(language).options;
            assert!(options.room_arrangement.len() >= 6);
            assert!(options.helper_arrangement.len() >= 4);
            assert_eq!(options.app_type.len(), 2);
            assert_eq!(options.overseas_work.len(), 2);
            assert_eq!(options.months.len(), 12);
        }
    }

    #[test]
    fn count_option_lists_match_selector_ranges() {
        let options = &LocaleTable::builtin(Language::En).options;
        let family = options.list(OptionList::FamilyCount);
        assert_eq!(family.len(), MAX_FAMILY_COUNT + 1);
        assert_eq!(family[0], "0 (only employer)");
        assert_eq!(family[1], "1 (employer +1)");
        assert_eq!(family[2], "2");

        let helpers = options.list(OptionList::HelperCount);
        assert_eq!(helpers.len(), MAX_HELPER_COUNT + 1);
        assert_eq!(helpers[1], "1");
    }

    #[test]
    fn section_titles_use_one_based_position() {
        let labels = &LocaleTable::builtin(Language::En).short_labels;
        assert_eq!(labels.helper_title(2), "Helper 2");
        let zh = &LocaleTable::builtin(Language::Zh).labels;
        assert_eq!(zh.family_member_title(1), "家庭成員 1");
    }

    #[test]
    fn shortening_checks_current_then_other_locale() {
        let en = LocaleTable::builtin(Language::En);
        let zh = LocaleTable::builtin(Language::Zh);
        assert_eq!(en.shorten_work_arrangement("ASAP (within 4 months)"), "ASAP");
        assert_eq!(
            en.shorten_work_arrangement("Arrive in specific month"),
            "Specific month"
        );
        assert_eq!(zh.shorten_work_arrangement("盡快四個月內"), "盡快");
        assert_eq!(zh.shorten_work_arrangement("ASAP (within 4 months)"), "ASAP");
        assert_eq!(zh.shorten_work_arrangement("指定月份到港"), "指定月份到港");
    }

    #[test]
    fn resolve_prefers_override_directory() {
        let dir = tempdir().unwrap();
        let mut table = LocaleTable::builtin(Language::En).clone();
        table.empty = "Blank".into();
        std::fs::write(
            dir.path().join("en.json"),
            serde_json::to_string(&table).unwrap(),
        )
        .unwrap();

        let resolved = LocaleTable::resolve(Language::En, Some(dir.path()));
        assert_eq!(resolved.empty, "Blank");

        let fallback = LocaleTable::resolve(Language::Zh, Some(dir.path()));
        assert_eq!(fallback.empty, LocaleTable::builtin(Language::Zh).empty);
    }

    #[test]
    fn language_parses_common_spellings() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("中文".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
    }
}
