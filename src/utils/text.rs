use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate or pad a string to an exact visual width, ellipsizing overlong
/// values so that table columns stay aligned for wide characters too.
pub fn fit_width(s: &str, max_len: usize) -> String {
    let visual_width = s.width();
    if visual_width <= max_len {
        let padding = max_len - visual_width;
        return format!("{}{}", s, " ".repeat(padding));
    }

    let ellipsis_width = UnicodeWidthChar::width('…').unwrap_or(1);
    let mut truncated = String::new();
    let mut current_width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width + ellipsis_width > max_len {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }

    truncated.push('…');
    current_width += ellipsis_width;
    let padding = max_len.saturating_sub(current_width);
    format!("{}{}", truncated, " ".repeat(padding))
}
