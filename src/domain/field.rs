use std::{fmt, str::FromStr};

use crate::errors::IntakeError;

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Persisted (camelCase) key of the field.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = IntakeError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let needle = input.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|field| field.key().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| IntakeError::UnknownField(needle.to_string()))
            }
        }
    };
}

field_enum! {
    /// Scalar fields of the questionnaire record.
    Field {
        EmployerName => "employerName",
        Address => "address",
        HousingType => "housingType",
        HouseSize => "houseSize",
        Bedrooms => "bedrooms",
        Nationality => "nationality",
        Occupation => "occupation",
        Income => "income",
        RoomArrangement => "roomArrangement",
        RoomSize => "roomSize",
        RoomShareChild => "roomShareChild",
        RoomOther => "roomOther",
        SalaryType => "salaryType",
        SalaryOtherAmount => "salaryOtherAmount",
        FoodAllowance => "foodAllowance",
        FoodAllowanceAmount => "foodAllowanceAmount",
        AppType => "appType",
        LocalWorkArrangement => "localWorkArrangement",
        LocalVacationDays => "localVacationDays",
        OverseasWorkArrangement => "overseasWorkArrangement",
        OverseasArrivalMonth => "overseasArrivalMonth",
        FamilyCount => "familyCount",
        ExpectingBaby => "expectingBaby",
        BabyDueDateMonth => "babyDueDateMonth",
        BabyGender => "babyGender",
        HasOtherHelpers => "hasOtherHelpers",
        OldHelperCount => "oldHelperCount",
        CarWash => "carWash",
        HasDogs => "hasDogs",
        DogCount => "dogCount",
        HasCats => "hasCats",
        CatCount => "catCount",
        HasOtherPets => "hasOtherPets",
        OtherPetDetails => "otherPetDetails",
        Remarks => "remarks",
    }
}

field_enum! {
    /// Fields of a single family member entry.
    FamilyField {
        Name => "name",
        YearOfBirth => "yob",
        Relation => "relation",
        RelationOther => "relationOther",
        NationalId => "hkid",
    }
}

field_enum! {
    /// Fields of a single prior-helper entry.
    HelperField {
        Name => "name",
        NationalId => "hkid",
        ContractNumber => "contractNo",
        VisaExpiry => "visaExpiry",
        Employer => "employer",
        Arrangement => "arrangement",
        HandoverDays => "handoverDays",
    }
}

field_enum! {
    /// The two dynamically sized sub-lists.
    ListKind {
        FamilyMembers => "familyMembers",
        OldHelpers => "oldHelpers",
    }
}

impl ListKind {
    /// Count field that drives the length of the list.
    pub fn count_field(self) -> Field {
        match self {
            ListKind::FamilyMembers => Field::FamilyCount,
            ListKind::OldHelpers => Field::OldHelperCount,
        }
    }

    pub fn for_count_field(field: Field) -> Option<ListKind> {
        match field {
            Field::FamilyCount => Some(ListKind::FamilyMembers),
            Field::OldHelperCount => Some(ListKind::OldHelpers),
            _ => None,
        }
    }
}

/// A field of either list, addressed by list kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Family(FamilyField),
    Helper(HelperField),
}

impl ItemField {
    pub fn list(self) -> ListKind {
        match self {
            ItemField::Family(_) => ListKind::FamilyMembers,
            ItemField::Helper(_) => ListKind::OldHelpers,
        }
    }

    /// Parses a field key in the context of the given list.
    pub fn parse(list: ListKind, input: &str) -> Result<Self, IntakeError> {
        match list {
            ListKind::FamilyMembers => input.parse().map(ItemField::Family),
            ListKind::OldHelpers => input.parse().map(ItemField::Helper),
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Family(field) => field.fmt(f),
            ItemField::Helper(field) => field.fmt(f),
        }
    }
}
