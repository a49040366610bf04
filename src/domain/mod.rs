//! Questionnaire record model and its closed set of field identifiers.

pub mod field;
pub mod record;

pub use field::{FamilyField, Field, HelperField, ItemField, ListKind};
pub use record::{FamilyMember, FormRecord, OldHelper};
