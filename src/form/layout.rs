//! Presentation order and control kind of every question.

use chrono::NaiveDate;

use crate::{
    domain::{FamilyField, FamilyMember, Field, FormRecord, HelperField, ListKind, OldHelper},
    locale::{LocaleTable, OptionList},
};

use super::visibility;

/// Input control used to collect a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    TextArea,
    Number,
    Date,
    Select(OptionList),
}

impl Control {
    pub fn is_numeric(self) -> bool {
        matches!(self, Control::Number)
    }

    /// Input-type hint check: numbers must parse, dates must be `YYYY-MM-DD`.
    ///
    /// Empty input is always accepted and select values are never restricted.
    pub fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return true;
        }
        match self {
            Control::Number => value.parse::<f64>().is_ok(),
            Control::Date => NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).is_ok(),
            _ => true,
        }
    }
}

/// Storage format of date inputs.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEntry {
    Field(Field, Control),
    /// The per-entry sub-sections of a list, rendered right after its count field.
    List(ListKind),
    Divider,
}

pub const FORM_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry::Field(Field::EmployerName, Control::Text),
    LayoutEntry::Field(Field::Address, Control::TextArea),
    LayoutEntry::Field(Field::HousingType, Control::Select(OptionList::Housing)),
    LayoutEntry::Field(Field::HouseSize, Control::Number),
    LayoutEntry::Field(Field::Bedrooms, Control::Select(OptionList::Rooms)),
    LayoutEntry::Field(Field::Nationality, Control::Text),
    LayoutEntry::Field(Field::Occupation, Control::Text),
    LayoutEntry::Field(Field::Income, Control::Text),
    LayoutEntry::Divider,
    LayoutEntry::Field(
        Field::RoomArrangement,
        Control::Select(OptionList::RoomArrangement),
    ),
    LayoutEntry::Field(Field::RoomSize, Control::Number),
    LayoutEntry::Field(Field::RoomShareChild, Control::Text),
    LayoutEntry::Field(Field::RoomOther, Control::Text),
    LayoutEntry::Field(Field::SalaryType, Control::Select(OptionList::Salary)),
    LayoutEntry::Field(Field::SalaryOtherAmount, Control::Number),
    LayoutEntry::Field(Field::FoodAllowance, Control::Select(OptionList::Food)),
    LayoutEntry::Field(Field::FoodAllowanceAmount, Control::Number),
    LayoutEntry::Field(Field::AppType, Control::Select(OptionList::AppType)),
    LayoutEntry::Field(
        Field::LocalWorkArrangement,
        Control::Select(OptionList::LocalWork),
    ),
    LayoutEntry::Field(Field::LocalVacationDays, Control::Number),
    LayoutEntry::Field(
        Field::OverseasWorkArrangement,
        Control::Select(OptionList::OverseasWork),
    ),
    LayoutEntry::Field(
        Field::OverseasArrivalMonth,
        Control::Select(OptionList::Months),
    ),
    LayoutEntry::Divider,
    LayoutEntry::Field(Field::FamilyCount, Control::Select(OptionList::FamilyCount)),
    LayoutEntry::List(ListKind::FamilyMembers),
    LayoutEntry::Field(Field::ExpectingBaby, Control::Select(OptionList::YesNo)),
    LayoutEntry::Field(Field::BabyDueDateMonth, Control::Select(OptionList::Months)),
    LayoutEntry::Field(Field::BabyGender, Control::Select(OptionList::Genders)),
    LayoutEntry::Divider,
    LayoutEntry::Field(Field::HasOtherHelpers, Control::Select(OptionList::YesNo)),
    LayoutEntry::Field(
        Field::OldHelperCount,
        Control::Select(OptionList::HelperCount),
    ),
    LayoutEntry::List(ListKind::OldHelpers),
    LayoutEntry::Divider,
    LayoutEntry::Field(Field::CarWash, Control::Select(OptionList::YesNo)),
    LayoutEntry::Field(Field::HasDogs, Control::Select(OptionList::YesNo)),
    LayoutEntry::Field(Field::DogCount, Control::Number),
    LayoutEntry::Field(Field::HasCats, Control::Select(OptionList::YesNo)),
    LayoutEntry::Field(Field::CatCount, Control::Number),
    LayoutEntry::Field(Field::HasOtherPets, Control::Select(OptionList::YesNo)),
    LayoutEntry::Field(Field::OtherPetDetails, Control::Text),
    LayoutEntry::Field(Field::Remarks, Control::TextArea),
];

pub const FAMILY_LAYOUT: &[(FamilyField, Control)] = &[
    (FamilyField::Name, Control::Text),
    (FamilyField::YearOfBirth, Control::Number),
    (FamilyField::Relation, Control::Select(OptionList::Relations)),
    (FamilyField::RelationOther, Control::Text),
    (FamilyField::NationalId, Control::Text),
];

pub const HELPER_LAYOUT: &[(HelperField, Control)] = &[
    (HelperField::Name, Control::Text),
    (HelperField::NationalId, Control::Text),
    (HelperField::ContractNumber, Control::Text),
    (HelperField::VisaExpiry, Control::Date),
    (HelperField::Employer, Control::Text),
    (
        HelperField::Arrangement,
        Control::Select(OptionList::HelperArrangement),
    ),
    (HelperField::HandoverDays, Control::Number),
];

/// Control used for a scalar field.
pub fn control_for(field: Field) -> Control {
    FORM_LAYOUT
        .iter()
        .find_map(|entry| match entry {
            LayoutEntry::Field(candidate, control) if *candidate == field => Some(*control),
            _ => None,
        })
        .unwrap_or(Control::Text)
}

pub fn family_control_for(field: FamilyField) -> Control {
    FAMILY_LAYOUT
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, control)| *control)
        .unwrap_or(Control::Text)
}

pub fn helper_control_for(field: HelperField) -> Control {
    HELPER_LAYOUT
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, control)| *control)
        .unwrap_or(Control::Text)
}

/// Scalar fields currently on screen, in presentation order.
pub fn visible_fields(record: &FormRecord, locale: &LocaleTable) -> Vec<(Field, Control)> {
    FORM_LAYOUT
        .iter()
        .filter_map(|entry| match entry {
            LayoutEntry::Field(field, control) => Some((*field, *control)),
            _ => None,
        })
        .filter(|(field, _)| visibility::is_visible(*field, record, locale))
        .collect()
}

pub fn visible_family_fields(
    member: &FamilyMember,
    locale: &LocaleTable,
) -> Vec<(FamilyField, Control)> {
    FAMILY_LAYOUT
        .iter()
        .copied()
        .filter(|(field, _)| visibility::family_field_visible(member, *field, locale))
        .collect()
}

pub fn visible_helper_fields(
    helper: &OldHelper,
    locale: &LocaleTable,
) -> Vec<(HelperField, Control)> {
    HELPER_LAYOUT
        .iter()
        .copied()
        .filter(|(field, _)| visibility::helper_field_visible(helper, *field, locale))
        .collect()
}

/// Whether the sub-sections of `list` are shown.
pub fn list_visible(list: ListKind, record: &FormRecord, locale: &LocaleTable) -> bool {
    match list {
        ListKind::FamilyMembers => true,
        ListKind::OldHelpers => visibility::shows_helper_list(record, locale),
    }
}
