//! Message serialization: transcript rendering, segmentation and WhatsApp deep links.

pub mod link;
pub mod preview;
pub mod segment;
pub mod transcript;

use crate::{domain::FormRecord, locale::LocaleTable};

pub use link::{build_links, whatsapp_url, ExportLink, DEFAULT_RECIPIENT};
pub use preview::{render_preview, PreviewEntry};
pub use segment::{split_segments, SEGMENT_LIMIT};
pub use transcript::render_transcript;

/// Renders the record into ordered message segments under the default limit.
pub fn render(record: &FormRecord, locale: &LocaleTable) -> Vec<String> {
    render_with_limit(record, locale, SEGMENT_LIMIT)
}

pub fn render_with_limit(record: &FormRecord, locale: &LocaleTable, limit: usize) -> Vec<String> {
    let transcript = render_transcript(record, locale);
    let segments = split_segments(&transcript, limit);
    tracing::debug!(
        chars = transcript.chars().count(),
        segments = segments.len(),
        "rendered message"
    );
    segments
}
