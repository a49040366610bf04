use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::field::{FamilyField, Field, HelperField};

/// One family member living with the employer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub yob: String,
    pub relation: String,
    pub relation_other: String,
    pub hkid: String,
}

impl FamilyMember {
    /// Fresh entry with a new opaque id and every field empty.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FamilyField) -> &str {
        match field {
            FamilyField::Name => &self.name,
            FamilyField::YearOfBirth => &self.yob,
            FamilyField::Relation => &self.relation,
            FamilyField::RelationOther => &self.relation_other,
            FamilyField::NationalId => &self.hkid,
        }
    }

    pub fn set(&mut self, field: FamilyField, value: String) {
        let slot = match field {
            FamilyField::Name => &mut self.name,
            FamilyField::YearOfBirth => &mut self.yob,
            FamilyField::Relation => &mut self.relation,
            FamilyField::RelationOther => &mut self.relation_other,
            FamilyField::NationalId => &mut self.hkid,
        };
        *slot = value;
    }
}

/// A helper currently or previously employed by the household.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OldHelper {
    pub id: String,
    pub name: String,
    pub hkid: String,
    pub contract_no: String,
    /// Stored as `YYYY-MM-DD`.
    pub visa_expiry: String,
    pub employer: String,
    pub arrangement: String,
    pub handover_days: String,
}

impl OldHelper {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: HelperField) -> &str {
        match field {
            HelperField::Name => &self.name,
            HelperField::NationalId => &self.hkid,
            HelperField::ContractNumber => &self.contract_no,
            HelperField::VisaExpiry => &self.visa_expiry,
            HelperField::Employer => &self.employer,
            HelperField::Arrangement => &self.arrangement,
            HelperField::HandoverDays => &self.handover_days,
        }
    }

    pub fn set(&mut self, field: HelperField, value: String) {
        let slot = match field {
            HelperField::Name => &mut self.name,
            HelperField::NationalId => &mut self.hkid,
            HelperField::ContractNumber => &mut self.contract_no,
            HelperField::VisaExpiry => &mut self.visa_expiry,
            HelperField::Employer => &mut self.employer,
            HelperField::Arrangement => &mut self.arrangement,
            HelperField::HandoverDays => &mut self.handover_days,
        };
        *slot = value;
    }
}

/// The complete answers of one questionnaire session.
///
/// Serialized with the camelCase keys used by earlier releases so that previously
/// persisted blobs stay readable; missing keys fall back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormRecord {
    pub employer_name: String,
    pub address: String,
    pub housing_type: String,
    pub house_size: String,
    pub bedrooms: String,
    pub nationality: String,
    pub occupation: String,
    pub income: String,

    pub room_arrangement: String,
    pub room_size: String,
    pub room_share_child: String,
    pub room_other: String,

    pub salary_type: String,
    pub salary_other_amount: String,
    pub food_allowance: String,
    pub food_allowance_amount: String,

    pub app_type: String,
    pub local_work_arrangement: String,
    pub local_vacation_days: String,
    pub overseas_work_arrangement: String,
    pub overseas_arrival_month: String,

    pub family_count: String,
    pub family_members: Vec<FamilyMember>,

    pub expecting_baby: String,
    pub baby_due_date_month: String,
    pub baby_gender: String,

    pub has_other_helpers: String,
    pub old_helper_count: String,
    pub old_helpers: Vec<OldHelper>,

    pub car_wash: String,
    pub has_dogs: String,
    pub dog_count: String,
    pub has_cats: String,
    pub cat_count: String,
    pub has_other_pets: String,
    pub other_pet_details: String,

    pub remarks: String,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EmployerName => &self.employer_name,
            Field::Address => &self.address,
            Field::HousingType => &self.housing_type,
            Field::HouseSize => &self.house_size,
            Field::Bedrooms => &self.bedrooms,
            Field::Nationality => &self.nationality,
            Field::Occupation => &self.occupation,
            Field::Income => &self.income,
            Field::RoomArrangement => &self.room_arrangement,
            Field::RoomSize => &self.room_size,
            Field::RoomShareChild => &self.room_share_child,
            Field::RoomOther => &self.room_other,
            Field::SalaryType => &self.salary_type,
            Field::SalaryOtherAmount => &self.salary_other_amount,
            Field::FoodAllowance => &self.food_allowance,
            Field::FoodAllowanceAmount => &self.food_allowance_amount,
            Field::AppType => &self.app_type,
            Field::LocalWorkArrangement => &self.local_work_arrangement,
            Field::LocalVacationDays => &self.local_vacation_days,
            Field::OverseasWorkArrangement => &self.overseas_work_arrangement,
            Field::OverseasArrivalMonth => &self.overseas_arrival_month,
            Field::FamilyCount => &self.family_count,
            Field::ExpectingBaby => &self.expecting_baby,
            Field::BabyDueDateMonth => &self.baby_due_date_month,
            Field::BabyGender => &self.baby_gender,
            Field::HasOtherHelpers => &self.has_other_helpers,
            Field::OldHelperCount => &self.old_helper_count,
            Field::CarWash => &self.car_wash,
            Field::HasDogs => &self.has_dogs,
            Field::DogCount => &self.dog_count,
            Field::HasCats => &self.has_cats,
            Field::CatCount => &self.cat_count,
            Field::HasOtherPets => &self.has_other_pets,
            Field::OtherPetDetails => &self.other_pet_details,
            Field::Remarks => &self.remarks,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::EmployerName => &mut self.employer_name,
            Field::Address => &mut self.address,
            Field::HousingType => &mut self.housing_type,
            Field::HouseSize => &mut self.house_size,
            Field::Bedrooms => &mut self.bedrooms,
            Field::Nationality => &mut self.nationality,
            Field::Occupation => &mut self.occupation,
            Field::Income => &mut self.income,
            Field::RoomArrangement => &mut self.room_arrangement,
            Field::RoomSize => &mut self.room_size,
            Field::RoomShareChild => &mut self.room_share_child,
            Field::RoomOther => &mut self.room_other,
            Field::SalaryType => &mut self.salary_type,
            Field::SalaryOtherAmount => &mut self.salary_other_amount,
            Field::FoodAllowance => &mut self.food_allowance,
            Field::FoodAllowanceAmount => &mut self.food_allowance_amount,
            Field::AppType => &mut self.app_type,
            Field::LocalWorkArrangement => &mut self.local_work_arrangement,
            Field::LocalVacationDays => &mut self.local_vacation_days,
            Field::OverseasWorkArrangement => &mut self.overseas_work_arrangement,
            Field::OverseasArrivalMonth => &mut self.overseas_arrival_month,
            Field::FamilyCount => &mut self.family_count,
            Field::ExpectingBaby => &mut self.expecting_baby,
            Field::BabyDueDateMonth => &mut self.baby_due_date_month,
            Field::BabyGender => &mut self.baby_gender,
            Field::HasOtherHelpers => &mut self.has_other_helpers,
            Field::OldHelperCount => &mut self.old_helper_count,
            Field::CarWash => &mut self.car_wash,
            Field::HasDogs => &mut self.has_dogs,
            Field::DogCount => &mut self.dog_count,
            Field::HasCats => &mut self.has_cats,
            Field::CatCount => &mut self.cat_count,
            Field::HasOtherPets => &mut self.has_other_pets,
            Field::OtherPetDetails => &mut self.other_pet_details,
            Field::Remarks => &mut self.remarks,
        }
    }

    /// Raw field write. Does not apply dependency rules; use `form::apply_change`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
