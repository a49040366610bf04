//! Dependency table: which fields are cleared when a controlling field changes.
//!
//! Rules are applied once per update and are not transitive. Clearing `appType` empties
//! the four work-arrangement fields but does not re-run the rules of those fields.

use crate::{
    domain::{FamilyField, Field, HelperField, ItemField, ListKind},
    locale::LocaleTable,
};

use super::visibility;

/// When a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearWhen {
    /// Any write to the controller, including rewriting the same value.
    AnyChange,
    /// Only when the new value is a "No" answer.
    Negative,
}

#[derive(Debug, Clone, Copy)]
pub struct DependencyRule {
    pub controller: Field,
    pub when: ClearWhen,
    pub clears: &'static [Field],
    pub clears_lists: &'static [ListKind],
}

impl DependencyRule {
    const fn on_change(controller: Field, clears: &'static [Field]) -> Self {
        Self {
            controller,
            when: ClearWhen::AnyChange,
            clears,
            clears_lists: &[],
        }
    }

    pub fn fires(&self, value: &str, locale: &LocaleTable) -> bool {
        match self.when {
            ClearWhen::AnyChange => true,
            ClearWhen::Negative => visibility::is_negative(value, locale),
        }
    }
}

pub const DEPENDENCY_RULES: &[DependencyRule] = &[
    DependencyRule::on_change(
        Field::RoomArrangement,
        &[Field::RoomSize, Field::RoomShareChild, Field::RoomOther],
    ),
    DependencyRule::on_change(Field::SalaryType, &[Field::SalaryOtherAmount]),
    DependencyRule::on_change(Field::FoodAllowance, &[Field::FoodAllowanceAmount]),
    DependencyRule::on_change(
        Field::AppType,
        &[
            Field::LocalWorkArrangement,
            Field::LocalVacationDays,
            Field::OverseasWorkArrangement,
            Field::OverseasArrivalMonth,
        ],
    ),
    DependencyRule::on_change(Field::LocalWorkArrangement, &[Field::LocalVacationDays]),
    DependencyRule::on_change(
        Field::OverseasWorkArrangement,
        &[Field::OverseasArrivalMonth],
    ),
    DependencyRule::on_change(
        Field::ExpectingBaby,
        &[Field::BabyDueDateMonth, Field::BabyGender],
    ),
    DependencyRule {
        controller: Field::HasOtherHelpers,
        when: ClearWhen::Negative,
        clears: &[Field::OldHelperCount],
        clears_lists: &[ListKind::OldHelpers],
    },
    DependencyRule::on_change(Field::HasDogs, &[Field::DogCount]),
    DependencyRule::on_change(Field::HasCats, &[Field::CatCount]),
    DependencyRule::on_change(Field::HasOtherPets, &[Field::OtherPetDetails]),
];

pub fn rule_for(field: Field) -> Option<&'static DependencyRule> {
    DEPENDENCY_RULES.iter().find(|rule| rule.controller == field)
}

/// List-item rule: `clears` is emptied unless `keeps` holds for the new controller value.
#[derive(Debug, Clone, Copy)]
pub struct ItemRule {
    pub controller: ItemField,
    pub clears: ItemField,
    pub keeps: fn(&str, &LocaleTable) -> bool,
}

pub const ITEM_RULES: &[ItemRule] = &[
    ItemRule {
        controller: ItemField::Family(FamilyField::Relation),
        clears: ItemField::Family(FamilyField::RelationOther),
        keeps: visibility::relation_is_other,
    },
    ItemRule {
        controller: ItemField::Helper(HelperField::Arrangement),
        clears: ItemField::Helper(HelperField::HandoverDays),
        keeps: visibility::arrangement_needs_handover,
    },
];

pub fn item_rule_for(field: ItemField) -> Option<&'static ItemRule> {
    ITEM_RULES.iter().find(|rule| rule.controller == field)
}
