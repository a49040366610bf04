use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intake_core::{
    domain::{FamilyMember, Field, FormRecord, OldHelper},
    form::FormStateManager,
    locale::{Language, LocaleTable},
    message::{self, split_segments, SEGMENT_LIMIT},
};

fn build_full_record(locale: &LocaleTable) -> FormRecord {
    let mut record = FormRecord::new();
    for field in Field::ALL {
        record.set(*field, format!("{} answer", field.key()));
    }
    record.has_other_helpers = locale.options.yes.clone();
    record.family_count = "12".into();
    record.old_helper_count = "13".into();
    record.family_members = (0..12)
        .map(|idx| FamilyMember {
            name: format!("Member {idx}"),
            yob: "1980".into(),
            ..FamilyMember::new()
        })
        .collect();
    record.old_helpers = (0..13)
        .map(|idx| OldHelper {
            name: format!("Helper {idx}"),
            visa_expiry: "2026-01-31".into(),
            ..OldHelper::new()
        })
        .collect();
    record.remarks = "remark line\n".repeat(200);
    record
}

fn bench_render(c: &mut Criterion) {
    let locale = LocaleTable::builtin(Language::Zh);
    let record = build_full_record(locale);

    c.bench_function("render_full_record", |b| {
        b.iter(|| message::render(black_box(&record), locale))
    });

    let transcript = message::render_transcript(&record, locale);
    c.bench_function("split_segments_full_record", |b| {
        b.iter(|| split_segments(black_box(&transcript), SEGMENT_LIMIT))
    });
}

fn bench_state(c: &mut Criterion) {
    let locale = LocaleTable::builtin(Language::En);
    let record = build_full_record(locale);
    let manager = FormStateManager::new(locale);

    c.bench_function("apply_change_app_type", |b| {
        b.iter(|| manager.apply_change(black_box(&record), Field::AppType, "Overseas Helper"))
    });
    c.bench_function("resize_family_list", |b| {
        b.iter(|| manager.resize_list(black_box(&record), intake_core::domain::ListKind::FamilyMembers, "3"))
    });
}

criterion_group!(benches, bench_render, bench_state);
criterion_main!(benches);
