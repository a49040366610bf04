#![allow(dead_code)]

use intake_core::{
    domain::{FormRecord, OldHelper},
    form::FormStateManager,
    locale::{Language, LocaleTable},
};

pub fn en() -> &'static LocaleTable {
    LocaleTable::builtin(Language::En)
}

pub fn zh() -> &'static LocaleTable {
    LocaleTable::builtin(Language::Zh)
}

/// Applies `(field key, value)` answers in order through the state manager.
pub fn answer(locale: &LocaleTable, answers: &[(&str, &str)]) -> FormRecord {
    let manager = FormStateManager::new(locale);
    answers
        .iter()
        .fold(FormRecord::new(), |record, (key, value)| {
            let field = key.parse().expect("known field key");
            manager.apply_change(&record, field, value)
        })
}

/// Employer hiring from overseas with a fixed arrival month.
pub fn overseas_record() -> FormRecord {
    answer(
        en(),
        &[
            ("employerName", "Chan Tai Man"),
            ("appType", "Overseas Helper"),
            ("overseasWorkArrangement", "Arrive in specific month"),
            ("overseasArrivalMonth", "March"),
        ],
    )
}

/// Employer who currently has two helpers, the second being replaced with a handover.
pub fn two_helper_record() -> FormRecord {
    let mut record = answer(
        en(),
        &[("hasOtherHelpers", "Yes"), ("oldHelperCount", "2")],
    );
    record.old_helpers[0].name = "Maria".into();
    record.old_helpers[0].visa_expiry = "2025-06-30".into();
    record.old_helpers[1] = OldHelper {
        name: "Siti".into(),
        arrangement: en().options.helper_arrangement[3].clone(),
        handover_days: "7".into(),
        ..record.old_helpers[1].clone()
    };
    record
}
