mod common;

use common::{answer, en, overseas_record, zh};
use intake_core::{
    domain::{FamilyField, Field, FormRecord, HelperField, ItemField, ListKind},
    errors::IntakeError,
    form::FormStateManager,
};

#[test]
fn switching_application_type_drops_the_other_branch() {
    let record = answer(
        en(),
        &[
            ("appType", "HK finish contract／Special case／Contract renewal"),
            ("localWorkArrangement", "Home Vacation First, Work Later"),
            ("localVacationDays", "14"),
        ],
    );
    assert_eq!(record.local_vacation_days, "14");

    let switched =
        FormStateManager::new(en()).apply_change(&record, Field::AppType, "Overseas Helper");
    assert!(switched.local_work_arrangement.is_empty());
    assert!(switched.local_vacation_days.is_empty());
    assert_eq!(switched.app_type, "Overseas Helper");
}

#[test]
fn overseas_answers_survive_unrelated_edits() {
    let record = overseas_record();
    let manager = FormStateManager::new(en());
    let edited = manager.apply_change(&record, Field::Remarks, "prefers a non-smoker");
    assert_eq!(edited.overseas_arrival_month, "March");
    assert_eq!(edited.overseas_work_arrangement, record.overseas_work_arrangement);
}

#[test]
fn answering_no_to_helpers_empties_the_helper_list() {
    let record = answer(en(), &[("hasOtherHelpers", "Yes"), ("oldHelperCount", "3")]);
    assert_eq!(record.old_helpers.len(), 3);

    let cleared = FormStateManager::new(en()).apply_change(&record, Field::HasOtherHelpers, "No");
    assert!(cleared.old_helpers.is_empty());
    assert!(cleared.old_helper_count.is_empty());
}

#[test]
fn chinese_negative_answer_also_clears() {
    let record = answer(zh(), &[("hasDogs", "有"), ("dogCount", "2")]);
    let cleared = FormStateManager::new(zh()).apply_change(&record, Field::HasDogs, "沒有");
    assert!(cleared.dog_count.is_empty());
}

#[test]
fn resizing_keeps_existing_entries_untouched() {
    let manager = FormStateManager::new(en());
    let record = manager.resize_list(&FormRecord::new(), ListKind::FamilyMembers, "2");
    let named = manager
        .update_list_item(&record, 0, ItemField::Family(FamilyField::Name), "Ann")
        .unwrap();
    let first_id = named.family_members[0].id.clone();

    let grown = manager.resize_list(&named, ListKind::FamilyMembers, "5");
    assert_eq!(grown.family_members.len(), 5);
    assert_eq!(grown.family_members[0].id, first_id);
    assert_eq!(grown.family_members[0].name, "Ann");

    let shrunk = manager.resize_list(&grown, ListKind::FamilyMembers, "1 (employer +1)");
    assert_eq!(shrunk.family_members.len(), 1);
    assert_eq!(shrunk.family_members[0], named.family_members[0]);
}

#[test]
fn unparseable_count_empties_the_list() {
    let manager = FormStateManager::new(en());
    let record = manager.resize_list(&FormRecord::new(), ListKind::OldHelpers, "2");
    let reset = manager.resize_list(&record, ListKind::OldHelpers, "None yet, planning to hire");
    assert!(reset.old_helpers.is_empty());
    assert_eq!(reset.old_helper_count, "None yet, planning to hire");
}

#[test]
fn list_updates_outside_the_list_are_rejected() {
    let manager = FormStateManager::new(en());
    let record = manager.resize_list(&FormRecord::new(), ListKind::OldHelpers, "1");
    let err = manager
        .update_list_item(&record, 1, ItemField::Helper(HelperField::Name), "Ghost")
        .unwrap_err();
    assert!(matches!(
        err,
        IntakeError::IndexOutOfBounds {
            list: ListKind::OldHelpers,
            index: 1,
            len: 1
        }
    ));
}

#[test]
fn leaving_handover_arrangement_clears_handover_days() {
    let manager = FormStateManager::new(en());
    let handover = en().options.helper_arrangement[3].clone();
    let stay = en().options.helper_arrangement[0].clone();

    let record = manager.resize_list(&FormRecord::new(), ListKind::OldHelpers, "1");
    let record = manager
        .update_list_item(&record, 0, ItemField::Helper(HelperField::Arrangement), &handover)
        .unwrap();
    let record = manager
        .update_list_item(&record, 0, ItemField::Helper(HelperField::HandoverDays), "10")
        .unwrap();
    assert_eq!(record.old_helpers[0].handover_days, "10");

    let record = manager
        .update_list_item(&record, 0, ItemField::Helper(HelperField::Arrangement), &stay)
        .unwrap();
    assert!(record.old_helpers[0].handover_days.is_empty());
}

#[test]
fn income_is_grouped_only_on_commit() {
    let manager = FormStateManager::new(en());
    let record = manager.apply_change(&FormRecord::new(), Field::Income, "45000");
    assert_eq!(record.income, "45000");
    assert_eq!(manager.commit_income(&record).income, "45,000");
}
