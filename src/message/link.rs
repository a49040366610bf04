use serde::Serialize;

/// Recipient used when none is configured.
pub const DEFAULT_RECIPIENT: &str = "85296111003";

const WHATSAPP_BASE: &str = "https://wa.me";

/// One outbound message segment and the deep link that opens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportLink {
    /// 1-based position among all segments.
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub url: String,
}

impl ExportLink {
    /// Button caption; the `(i/n)` suffix only appears for multi-part messages.
    pub fn label(&self, caption: &str) -> String {
        if self.total > 1 {
            format!("{caption} ({}/{})", self.index, self.total)
        } else {
            caption.to_string()
        }
    }
}

pub fn whatsapp_url(recipient: &str, text: &str) -> String {
    format!(
        "{WHATSAPP_BASE}/{}?text={}",
        recipient.trim_start_matches('+'),
        urlencoding::encode(text)
    )
}

pub fn build_links(recipient: &str, segments: &[String]) -> Vec<ExportLink> {
    let total = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(idx, text)| ExportLink {
            index: idx + 1,
            total,
            text: text.clone(),
            url: whatsapp_url(recipient, text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_percent_encodes_text() {
        let url = whatsapp_url(DEFAULT_RECIPIENT, "*Name:* Chan\n");
        assert_eq!(url, "https://wa.me/85296111003?text=%2AName%3A%2A%20Chan%0A");
    }

    #[test]
    fn labels_number_multi_part_messages() {
        let links = build_links("+85212345678", &["a".into(), "b".into()]);
        assert_eq!(links[0].label("Send"), "Send (1/2)");
        assert_eq!(links[1].label("Send"), "Send (2/2)");
        assert!(links[0].url.starts_with("https://wa.me/85212345678?text="));

        let single = build_links(DEFAULT_RECIPIENT, &["a".into()]);
        assert_eq!(single[0].label("Send"), "Send");
    }
}
