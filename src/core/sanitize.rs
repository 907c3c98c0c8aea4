// src/core/sanitize.rs

/// Info-table keys come as `Name:` / `Student Number :`.
pub fn strip_trailing_colon(s: &str) -> String {
    s.trim_end()
        .trim_end_matches([':', '\u{FF1A}'])
        .trim_end()
        .to_string()
}

/// ASCII-case-insensitive `starts_with`, safe on multi-byte input.
pub fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Turn a student name / number into a filesystem-friendly stem.
/// Falls back to `fallback` when nothing usable remains.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == ',' || ch == '.' { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
