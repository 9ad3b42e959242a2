//! Name normalization.
//!
//! Worksheet titles, header cells, and workbook base names all go through
//! the same transform before they appear in output paths or header lines.

/// Rewrites a worksheet, column, or file name into a lowercase snake_case
/// identifier.
///
/// The transform, in order: an underscore is inserted at every
/// lowercase→uppercase transition (`FooBarBAZ` becomes `foo_bar_baz`; runs
/// of uppercase are left together), the string is case folded, whitespace
/// runs collapse to a single underscore, every remaining character outside
/// `[a-z0-9_]` is dropped without a replacement separator, and underscore
/// runs collapse to one. The result is a fixed point:
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_ascii_lower = false;
    let mut in_whitespace = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            prev_ascii_lower = false;
            continue;
        }
        if in_whitespace || (prev_ascii_lower && ch.is_ascii_uppercase()) {
            push_separator(&mut out);
        }
        in_whitespace = false;
        prev_ascii_lower = ch.is_ascii_lowercase();
        for folded in ch.to_lowercase() {
            if folded.is_ascii_lowercase() || folded.is_ascii_digit() {
                out.push(folded);
            } else if folded == '_' {
                push_separator(&mut out);
            }
            // everything else is punctuation and is dropped outright
        }
    }
    // a trailing whitespace run still contributes its separator
    if in_whitespace {
        push_separator(&mut out);
    }
    out
}

/// Appends an underscore unless one is already pending, so separator runs
/// collapse as they are produced.
fn push_separator(out: &mut String) {
    if !out.ends_with('_') {
        out.push('_');
    }
}
