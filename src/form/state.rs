use tracing::debug;

use crate::{
    domain::{FamilyMember, Field, FormRecord, ItemField, ListKind, OldHelper},
    errors::{IntakeError, Result},
    locale::{format_numeric_display, parse_count, LocaleTable},
};

use super::rules;

/// Pure state transitions over [`FormRecord`].
///
/// Every operation takes the current record and returns the next one; persisting the
/// result is up to the caller.
#[derive(Debug, Clone, Copy)]
pub struct FormStateManager<'a> {
    locale: &'a LocaleTable,
}

impl<'a> FormStateManager<'a> {
    pub fn new(locale: &'a LocaleTable) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &'a LocaleTable {
        self.locale
    }

    /// Sets `field` and clears its direct dependents.
    ///
    /// Count fields are routed through [`resize_list`](Self::resize_list) so the list
    /// length always tracks the count.
    pub fn apply_change(&self, record: &FormRecord, field: Field, value: &str) -> FormRecord {
        if let Some(list) = ListKind::for_count_field(field) {
            return self.resize_list(record, list, value);
        }

        let mut next = record.clone();
        next.set(field, value);

        if let Some(rule) = rules::rule_for(field) {
            if rule.fires(value, self.locale) {
                for dependent in rule.clears {
                    next.set(*dependent, String::new());
                }
                for list in rule.clears_lists {
                    clear_list(&mut next, *list);
                }
                debug!(%field, cleared = rule.clears.len(), "applied dependency rule");
            }
        }
        next
    }

    /// Stores the raw count text and grows or truncates the list to match it.
    pub fn resize_list(&self, record: &FormRecord, list: ListKind, desired: &str) -> FormRecord {
        let mut next = record.clone();
        next.set(list.count_field(), desired);
        let count = parse_count(desired);
        match list {
            ListKind::FamilyMembers => resize_with(&mut next.family_members, count, FamilyMember::new),
            ListKind::OldHelpers => resize_with(&mut next.old_helpers, count, OldHelper::new),
        }
        debug!(%list, count, "resized list");
        next
    }

    /// Writes one field of the entry at `index`.
    ///
    /// Changing a relation or arrangement clears its detail field unless the new value
    /// reveals it. An index outside the list is rejected; the list is never grown here.
    pub fn update_list_item(
        &self,
        record: &FormRecord,
        index: usize,
        field: ItemField,
        value: &str,
    ) -> Result<FormRecord> {
        let list = field.list();
        let len = list_len(record, list);
        if index >= len {
            return Err(IntakeError::IndexOutOfBounds { list, index, len });
        }

        let mut next = record.clone();
        set_item_field(&mut next, index, field, value.to_string());

        if let Some(rule) = rules::item_rule_for(field) {
            if !(rule.keeps)(value, self.locale) {
                set_item_field(&mut next, index, rule.clears, String::new());
            }
        }
        Ok(next)
    }

    /// Applies the display grouping to the income field (`45000` → `45,000`).
    pub fn commit_income(&self, record: &FormRecord) -> FormRecord {
        let mut next = record.clone();
        next.income = format_numeric_display(&record.income);
        next
    }
}

pub fn list_len(record: &FormRecord, list: ListKind) -> usize {
    match list {
        ListKind::FamilyMembers => record.family_members.len(),
        ListKind::OldHelpers => record.old_helpers.len(),
    }
}

fn clear_list(record: &mut FormRecord, list: ListKind) {
    match list {
        ListKind::FamilyMembers => record.family_members.clear(),
        ListKind::OldHelpers => record.old_helpers.clear(),
    }
}

fn resize_with<T>(items: &mut Vec<T>, count: usize, fresh: fn() -> T) {
    if count > items.len() {
        let missing = count - items.len();
        items.extend((0..missing).map(|_| fresh()));
    } else {
        items.truncate(count);
    }
}

fn set_item_field(record: &mut FormRecord, index: usize, field: ItemField, value: String) {
    match field {
        ItemField::Family(field) => {
            if let Some(member) = record.family_members.get_mut(index) {
                member.set(field, value);
            }
        }
        ItemField::Helper(field) => {
            if let Some(helper) = record.old_helpers.get_mut(index) {
                helper.set(field, value);
            }
        }
    }
}
