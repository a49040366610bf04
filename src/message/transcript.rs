//! Builds the plain-text WhatsApp transcript of a record.

use crate::{
    domain::{FamilyField, FamilyMember, Field, FormRecord, HelperField, OldHelper},
    form::visibility,
    locale::{format_date_for_message, LocaleTable},
};

struct TranscriptWriter<'a> {
    locale: &'a LocaleTable,
    out: String,
}

impl<'a> TranscriptWriter<'a> {
    fn new(locale: &'a LocaleTable) -> Self {
        Self {
            locale,
            out: locale.message_prefix.clone(),
        }
    }

    fn line(&mut self, label: &str, value: &str) {
        self.out.push('*');
        self.out.push_str(label);
        self.out.push_str(":* ");
        if value.trim().is_empty() {
            self.out.push('(');
            self.out.push_str(&self.locale.empty);
            self.out.push(')');
        } else {
            self.out.push_str(value);
        }
        self.out.push('\n');
    }

    fn field(&mut self, record: &FormRecord, field: Field) {
        let locale = self.locale;
        self.line(locale.short_labels.field(field), record.get(field));
    }

    fn field_if_visible(&mut self, record: &FormRecord, field: Field) {
        if visibility::is_visible(field, record, self.locale) {
            self.field(record, field);
        }
    }

    fn header(&mut self, title: &str) {
        self.out.push('*');
        self.out.push_str(title);
        self.out.push_str("*\n");
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn family_member(&mut self, position: usize, member: &FamilyMember) {
        let locale = self.locale;
        self.header(&locale.short_labels.family_member_title(position));
        for field in FamilyField::ALL {
            if visibility::family_field_visible(member, *field, locale) {
                self.line(locale.short_labels.family(*field), member.get(*field));
            }
        }
        self.blank();
    }

    fn old_helper(&mut self, position: usize, helper: &OldHelper) {
        let locale = self.locale;
        self.blank();
        self.header(&locale.short_labels.helper_title(position));
        for field in HelperField::ALL {
            if !visibility::helper_field_visible(helper, *field, locale) {
                continue;
            }
            let label = locale.short_labels.helper(*field);
            match field {
                HelperField::VisaExpiry => {
                    self.line(label, &format_date_for_message(&helper.visa_expiry))
                }
                _ => self.line(label, helper.get(*field)),
            }
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

const PROFILE_FIELDS: &[Field] = &[
    Field::EmployerName,
    Field::Address,
    Field::HousingType,
    Field::HouseSize,
    Field::Bedrooms,
    Field::Nationality,
    Field::Occupation,
    Field::Income,
];

const TERMS_FIELDS: &[Field] = &[
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

/// Renders the full transcript, before segmentation.
pub fn render_transcript(record: &FormRecord, locale: &LocaleTable) -> String {
    let mut writer = TranscriptWriter::new(locale);

    for field in PROFILE_FIELDS {
        writer.field(record, *field);
    }
    writer.blank();

    for field in TERMS_FIELDS {
        writer.field_if_visible(record, *field);
    }
    if visibility::is_visible(Field::OverseasWorkArrangement, record, locale) {
        let label = locale.short_labels.field(Field::OverseasWorkArrangement);
        let value = locale.shorten_work_arrangement(&record.overseas_work_arrangement);
        writer.line(label, value);
        writer.field_if_visible(record, Field::OverseasArrivalMonth);
    }
    writer.blank();

    writer.field(record, Field::FamilyCount);
    for (idx, member) in record.family_members.iter().enumerate() {
        writer.family_member(idx + 1, member);
    }
    if record.family_members.is_empty() {
        writer.blank();
    }

    writer.field(record, Field::ExpectingBaby);
    writer.field_if_visible(record, Field::BabyDueDateMonth);
    writer.field_if_visible(record, Field::BabyGender);

    writer.field(record, Field::HasOtherHelpers);
    if visibility::shows_helper_list(record, locale) {
        writer.field(record, Field::OldHelperCount);
        for (idx, helper) in record.old_helpers.iter().enumerate() {
            writer.old_helper(idx + 1, helper);
        }
    }
    writer.blank();

    for field in HOUSEHOLD_FIELDS {
        writer.field_if_visible(record, *field);
    }

    writer.finish()
}
