//! Reveal predicates shared by the form layout, the preview and the message serializer.
//!
//! Option values are matched by exact string equality against the active locale table
//! and against the built-in tables of both languages, so answers persisted under the
//! other language (or by earlier releases) keep their meaning.

use crate::{
    domain::{FamilyField, FamilyMember, Field, FormRecord, HelperField, OldHelper},
    locale::{Language, LocaleTable, OptionTable},
};

const ROOM_SEPARATE: usize = 0;
const ROOM_SHARE_CHILD: usize = 1;
const ROOM_OTHER: usize = 5;
const SALARY_OTHER: usize = 1;
const FOOD_ALLOWANCE: usize = 1;
const APP_LOCAL: usize = 0;
const APP_OVERSEAS: usize = 1;
const LOCAL_VACATION_FIRST: usize = 1;
const OVERSEAS_SPECIFIC_MONTH: usize = 1;
const HELPER_REPLACED_WITH_HANDOVER: usize = 3;

fn matches_option<F>(value: &str, locale: &LocaleTable, pick: F) -> bool
where
    F: Fn(&OptionTable) -> Option<&String>,
{
    if value.is_empty() {
        return false;
    }
    let tables = [
        locale,
        LocaleTable::builtin(Language::Zh),
        LocaleTable::builtin(Language::En),
    ];
    tables
        .iter()
        .filter_map(|table| pick(&table.options))
        .any(|option| option == value)
}

fn matches_index<F>(value: &str, locale: &LocaleTable, list: F, index: usize) -> bool
where
    F: Fn(&OptionTable) -> &Vec<String>,
{
    matches_option(value, locale, |options| list(options).get(index))
}

/// `Yes` in either language.
pub fn is_affirmative(value: &str, locale: &LocaleTable) -> bool {
    matches_option(value, locale, |options| Some(&options.yes))
}

/// `No` in either language.
pub fn is_negative(value: &str, locale: &LocaleTable) -> bool {
    matches_option(value, locale, |options| Some(&options.no))
}

pub fn room_is_separate(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.room_arrangement, ROOM_SEPARATE)
}

pub fn room_is_shared_with_child(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.room_arrangement, ROOM_SHARE_CHILD)
}

pub fn room_is_other(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.room_arrangement, ROOM_OTHER)
}

pub fn salary_is_other(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.salary, SALARY_OTHER)
}

pub fn food_is_allowance(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.food, FOOD_ALLOWANCE)
}

pub fn app_is_local(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.app_type, APP_LOCAL)
}

pub fn app_is_overseas(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.app_type, APP_OVERSEAS)
}

pub fn local_is_vacation_first(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.local_work, LOCAL_VACATION_FIRST)
}

pub fn overseas_is_specific_month(value: &str, locale: &LocaleTable) -> bool {
    matches_index(value, locale, |o| &o.overseas_work, OVERSEAS_SPECIFIC_MONTH)
}

/// The relation answer is "Other" (the last relation option) of either language.
pub fn relation_is_other(value: &str, locale: &LocaleTable) -> bool {
    matches_option(value, locale, |options| options.relations.last())
}

pub fn arrangement_needs_handover(value: &str, locale: &LocaleTable) -> bool {
    matches_index(
        value,
        locale,
        |o| &o.helper_arrangement,
        HELPER_REPLACED_WITH_HANDOVER,
    )
}

/// Whether a scalar field is currently shown (and exported).
pub fn is_visible(field: Field, record: &FormRecord, locale: &LocaleTable) -> bool {
    match field {
        Field::RoomSize => room_is_separate(&record.room_arrangement, locale),
        Field::RoomShareChild => room_is_shared_with_child(&record.room_arrangement, locale),
        Field::RoomOther => room_is_other(&record.room_arrangement, locale),
        Field::SalaryOtherAmount => salary_is_other(&record.salary_type, locale),
        Field::FoodAllowanceAmount => food_is_allowance(&record.food_allowance, locale),
        Field::LocalWorkArrangement => app_is_local(&record.app_type, locale),
        Field::LocalVacationDays => {
            app_is_local(&record.app_type, locale)
                && local_is_vacation_first(&record.local_work_arrangement, locale)
        }
        Field::OverseasWorkArrangement => app_is_overseas(&record.app_type, locale),
        Field::OverseasArrivalMonth => {
            app_is_overseas(&record.app_type, locale)
                && overseas_is_specific_month(&record.overseas_work_arrangement, locale)
        }
        Field::BabyDueDateMonth | Field::BabyGender => {
            is_affirmative(&record.expecting_baby, locale)
        }
        Field::OldHelperCount => is_affirmative(&record.has_other_helpers, locale),
        Field::DogCount => is_affirmative(&record.has_dogs, locale),
        Field::CatCount => is_affirmative(&record.has_cats, locale),
        Field::OtherPetDetails => is_affirmative(&record.has_other_pets, locale),
        _ => true,
    }
}

/// The helper sub-blocks are shown only when other helpers are declared.
pub fn shows_helper_list(record: &FormRecord, locale: &LocaleTable) -> bool {
    is_affirmative(&record.has_other_helpers, locale)
}

pub fn family_field_visible(member: &FamilyMember, field: FamilyField, locale: &LocaleTable) -> bool {
    match field {
        FamilyField::RelationOther => relation_is_other(&member.relation, locale),
        _ => true,
    }
}

pub fn helper_field_visible(helper: &OldHelper, field: HelperField, locale: &LocaleTable) -> bool {
    match field {
        HelperField::HandoverDays => arrangement_needs_handover(&helper.arrangement, locale),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> &'static LocaleTable {
        LocaleTable::builtin(Language::En)
    }

    fn zh() -> &'static LocaleTable {
        LocaleTable::builtin(Language::Zh)
    }

    #[test]
    fn legacy_english_literals_match_under_chinese_locale() {
        assert!(app_is_overseas("Overseas Helper", zh()));
        assert!(is_affirmative("Yes", zh()));
        assert!(room_is_other("Other", zh()));
        assert!(overseas_is_specific_month("Arrive in specific month", zh()));
    }

    #[test]
    fn chinese_literals_match_under_english_locale() {
        assert!(relation_is_other("其他", en()));
        assert!(arrangement_needs_handover("此舊外傭走，但想有交接期", en()));
        assert!(is_negative("沒有", en()));
    }

    #[test]
    fn empty_values_never_reveal() {
        let record = FormRecord::new();
        assert!(!is_visible(Field::RoomSize, &record, en()));
        assert!(!is_visible(Field::OldHelperCount, &record, en()));
        assert!(is_visible(Field::EmployerName, &record, en()));
    }

    #[test]
    fn nested_reveals_require_both_controllers() {
        let mut record = FormRecord::new();
        record.overseas_work_arrangement = "Arrive in specific month".into();
        assert!(!is_visible(Field::OverseasArrivalMonth, &record, en()));
        record.app_type = "Overseas Helper".into();
        assert!(is_visible(Field::OverseasArrivalMonth, &record, en()));
        assert!(!is_visible(Field::LocalWorkArrangement, &record, en()));
    }

    #[test]
    fn room_details_follow_arrangement_position() {
        let options = &en().options;
        let mut record = FormRecord::new();
        record.room_arrangement = options.room_arrangement[1].clone();
        assert!(is_visible(Field::RoomShareChild, &record, en()));
        assert!(!is_visible(Field::RoomSize, &record, en()));
        record.room_arrangement = options.room_arrangement[2].clone();
        assert!(!is_visible(Field::RoomShareChild, &record, en()));
        assert!(!is_visible(Field::RoomOther, &record, en()));
    }

    #[test]
    fn handover_days_only_for_replacement_with_handover() {
        let mut helper = OldHelper::new();
        helper.arrangement = en().options.helper_arrangement[2].clone();
        assert!(!helper_field_visible(&helper, HelperField::HandoverDays, en()));
        helper.arrangement = en().options.helper_arrangement[3].clone();
        assert!(helper_field_visible(&helper, HelperField::HandoverDays, en()));
    }
}
