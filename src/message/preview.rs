//! Structured read-only preview of the answers, using full labels.

use serde::Serialize;

use crate::{
    domain::{FamilyField, Field, FormRecord, HelperField},
    form::visibility,
    locale::{format_date_for_message, LocaleTable},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewEntry {
    Item { label: String, value: String },
    Section { title: String },
    Divider,
}

impl PreviewEntry {
    fn item(label: &str, value: &str) -> Self {
        PreviewEntry::Item {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

const APPLICATION_FIELDS: &[Field] = &[
    Field::EmployerName,
    Field::Address,
    Field::HousingType,
    Field::HouseSize,
    Field::Bedrooms,
    Field::Nationality,
    Field::Occupation,
    Field::Income,
    Field::RoomArrangement,
    Field::RoomSize,
    Field::RoomShareChild,
    Field::RoomOther,
    Field::SalaryType,
    Field::SalaryOtherAmount,
    Field::FoodAllowance,
    Field::FoodAllowanceAmount,
    Field::AppType,
    Field::LocalWorkArrangement,
    Field::LocalVacationDays,
    Field::OverseasWorkArrangement,
    Field::OverseasArrivalMonth,
];

const BABY_FIELDS: &[Field] = &[
    Field::ExpectingBaby,
    Field::BabyDueDateMonth,
    Field::BabyGender,
];

const HOUSEHOLD_FIELDS: &[Field] = &[
    Field::CarWash,
    Field::HasDogs,
    Field::DogCount,
    Field::HasCats,
    Field::CatCount,
    Field::HasOtherPets,
    Field::OtherPetDetails,
    Field::Remarks,
];

pub fn render_preview(record: &FormRecord, locale: &LocaleTable) -> Vec<PreviewEntry> {
    let labels = &locale.labels;
    let mut entries = Vec::new();
    let push_visible = |entries: &mut Vec<PreviewEntry>, fields: &[Field]| {
        for field in fields {
            if visibility::is_visible(*field, record, locale) {
                entries.push(PreviewEntry::item(labels.field(*field), record.get(*field)));
            }
        }
    };

    push_visible(&mut entries, APPLICATION_FIELDS);
    entries.push(PreviewEntry::Divider);

    push_visible(&mut entries, &[Field::FamilyCount]);
    for (idx, member) in record.family_members.iter().enumerate() {
        entries.push(PreviewEntry::Section {
            title: labels.family_member_title(idx + 1),
        });
        for field in FamilyField::ALL {
            if visibility::family_field_visible(member, *field, locale) {
                entries.push(PreviewEntry::item(labels.family(*field), member.get(*field)));
            }
        }
    }
    push_visible(&mut entries, BABY_FIELDS);
    entries.push(PreviewEntry::Divider);

    push_visible(&mut entries, &[Field::HasOtherHelpers, Field::OldHelperCount]);
    if visibility::shows_helper_list(record, locale) {
        for (idx, helper) in record.old_helpers.iter().enumerate() {
            entries.push(PreviewEntry::Section {
                title: labels.helper_title(idx + 1),
            });
            for field in HelperField::ALL {
                if !visibility::helper_field_visible(helper, *field, locale) {
                    continue;
                }
                let value = match field {
                    HelperField::VisaExpiry => format_date_for_message(&helper.visa_expiry),
                    _ => helper.get(*field).to_string(),
                };
                entries.push(PreviewEntry::item(labels.helper(*field), &value));
            }
        }
    }
    entries.push(PreviewEntry::Divider);

    push_visible(&mut entries, HOUSEHOLD_FIELDS);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::OldHelper, locale::Language};

    #[test]
    fn empty_record_has_three_dividers_and_no_sections() {
        let entries = render_preview(&FormRecord::new(), LocaleTable::builtin(Language::En));
        let dividers = entries
            .iter()
            .filter(|entry| matches!(entry, PreviewEntry::Divider))
            .count();
        assert_eq!(dividers, 3);
        assert!(!entries
            .iter()
            .any(|entry| matches!(entry, PreviewEntry::Section { .. })));
    }

    #[test]
    fn helper_sections_use_full_titles_and_display_dates() {
        let locale = LocaleTable::builtin(Language::En);
        let mut record = FormRecord::new();
        record.has_other_helpers = "Yes".into();
        record.old_helper_count = "1".into();
        let mut helper = OldHelper::new();
        helper.visa_expiry = "2025-01-31".into();
        record.old_helpers.push(helper);

        let entries = render_preview(&record, locale);
        assert!(entries.contains(&PreviewEntry::Section {
            title: "Current Helper 1".into()
        }));
        assert!(entries.contains(&PreviewEntry::Item {
            label: locale.labels.helper(HelperField::VisaExpiry).to_string(),
            value: "31-01-2025".into(),
        }));
    }
}
