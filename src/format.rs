use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_percent(percent: f32) -> String {
    format!("{percent:.2}")
}

/// Resident set size in kB, shown as MB with two decimals.
pub fn format_rss_mb(rss_kb: f32) -> String {
    format!("{:.2}", rss_kb / 1024.0)
}
