mod common;

use common::{answer, en, overseas_record, two_helper_record, zh};
use intake_core::{
    domain::{Field, FormRecord},
    form::FormStateManager,
    message::{self, build_links, render_transcript, split_segments, SEGMENT_LIMIT},
};
use regex::Regex;

#[test]
fn overseas_arrival_is_shortened_with_its_month() {
    let transcript = render_transcript(&overseas_record(), en());
    assert!(transcript.contains("*Employer:* Chan Tai Man\n"));
    assert!(transcript.contains("*Arrival:* Specific month\n*Arrival month:* March\n"));
    assert!(!transcript.contains("Work arrangement"));
}

#[test]
fn toggling_application_type_drops_the_arrival_month_line() {
    let manager = FormStateManager::new(en());
    let local = en().options.app_type[0].clone();
    let record = manager.apply_change(&overseas_record(), Field::AppType, &local);
    let record = manager.apply_change(&record, Field::AppType, "Overseas Helper");

    assert!(record.overseas_work_arrangement.is_empty());
    assert!(record.overseas_arrival_month.is_empty());

    let transcript = render_transcript(&record, en());
    assert!(transcript.contains("*Arrival:* (Empty)\n"));
    assert!(!transcript.contains("Arrival month"));
}

#[test]
fn asap_arrival_hides_the_month_line() {
    let record = answer(
        en(),
        &[
            ("appType", "Overseas Helper"),
            ("overseasWorkArrangement", "ASAP (within 4 months)"),
        ],
    );
    let transcript = render_transcript(&record, en());
    assert!(transcript.contains("*Arrival:* ASAP\n"));
    assert!(!transcript.contains("Arrival month"));
}

#[test]
fn two_helpers_produce_two_indexed_blocks() {
    let transcript = render_transcript(&two_helper_record(), en());
    let headers = Regex::new(r"(?m)^\*Helper (\d+)\*$").unwrap();
    let indices: Vec<&str> = headers
        .captures_iter(&transcript)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    assert_eq!(indices, vec!["1", "2"]);

    assert!(transcript.contains("*Visa expiry:* 30-06-2025\n"));
    assert!(transcript.contains("*Handover days:* 7\n"));
    assert_eq!(transcript.matches("*Handover days:*").count(), 1);
}

#[test]
fn helper_blocks_disappear_when_answer_is_not_yes() {
    let mut record = two_helper_record();
    record.has_other_helpers = String::new();
    let transcript = render_transcript(&record, en());
    assert!(!transcript.contains("*Helper 1*"));
    assert!(!transcript.contains("Helper count"));
}

#[test]
fn chinese_transcript_uses_chinese_prefix_and_placeholder() {
    let transcript = render_transcript(&FormRecord::new(), zh());
    assert!(transcript.starts_with(&zh().message_prefix));
    assert!(transcript.contains(&format!("({})", zh().empty)));
}

#[test]
fn long_remarks_split_on_line_boundaries() {
    let mut record = two_helper_record();
    record.remarks = (0..120)
        .map(|n| format!("note {n}: please cook vegetarian meals"))
        .collect::<Vec<_>>()
        .join("\n");

    let transcript = render_transcript(&record, en());
    let segments = message::render(&record, en());
    assert!(segments.len() > 1);
    assert!(segments
        .iter()
        .all(|segment| segment.chars().count() <= SEGMENT_LIMIT));
    assert!(segments.iter().all(|segment| !segment.is_empty()));
    assert_eq!(segments.concat(), transcript);
    assert!(segments.iter().all(|segment| segment.ends_with('\n')));
}

#[test]
fn oversized_single_line_stays_whole() {
    let line = "x".repeat(2_000);
    let segments = split_segments(&line, SEGMENT_LIMIT);
    assert_eq!(segments, vec![line]);
}

#[test]
fn links_follow_segment_order() {
    let segments = vec!["first\n".to_string(), "second\n".to_string()];
    let links = build_links("+85212345678", &segments);
    assert_eq!(links.len(), 2);
    assert_eq!(links[1].index, 2);
    assert!(links[0].url.starts_with("https://wa.me/85212345678?text=first"));
    assert_eq!(links[1].label("Send"), "Send (2/2)");
}
