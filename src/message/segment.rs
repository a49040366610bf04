/// Maximum characters per WhatsApp message segment.
pub const SEGMENT_LIMIT: usize = 1500;

/// Splits `transcript` into segments of whole lines, each at most `limit` characters.
///
/// A line longer than `limit` on its own becomes a single oversized segment. The segments
/// concatenate back to the transcript, and an empty transcript yields one empty segment.
pub fn split_segments(transcript: &str, limit: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in transcript.split_inclusive('\n') {
        let line_len = line.chars().count();
        if !current.is_empty() && current_len + line_len > limit {
            segments.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() || segments.is_empty() {
        segments.push(current);
    }
    segments
}
