/// Bold toggle understood by the output view.
pub const BOLD: char = '\u{02}';

/// Characters the command language treats specially.
const METACHARACTERS: &[char] = &['\\', '$', '%', ';', '"', '{', '}', '(', ')', '[', ']'];

/// Backslash-escapes script metacharacters so the text evaluates to itself
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' {
            escaped.push_str("\\n");
            continue;
        }
        if METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Returns the character for a code unit in the basic multilingual plane.
///
/// Zero, values above `0xFFFF` and lone surrogates yield `None`.
pub fn char_from_code(code: u64) -> Option<char> {
    if code == 0 || code > 0xFFFF {
        return None;
    }
    char::from_u32(code as u32)
}

/// Builds the link markup: `\r!` + actions + `\r` + visible text + `\r`.
pub fn link(text: &str, double_click: &str, tooltip: &str) -> String {
    let mut actions = format!("[!dbl]{double_click}");
    if !tooltip.is_empty() {
        actions.push_str("[!txt]");
        actions.push_str(tooltip);
    }
    format!("\r!{actions}\r{text}\r")
}

/// Whether `name` appears in `features`, ignoring ASCII case
pub fn contains_ignore_case<S: AsRef<str>>(features: &[S], name: &str) -> bool {
    features
        .iter()
        .any(|feature| feature.as_ref().eq_ignore_ascii_case(name))
}
