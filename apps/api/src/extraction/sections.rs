//! Line normalisation and the section finder.
//!
//! Section boundaries are a heuristic. A header is a short line (under 30
//! characters) that is either all caps or ends with ':' and does not start
//! with a bullet marker. Short all-caps body lines ("AWS", "SQL") therefore
//! end a section early, and a title-case header without a colon
//! ("Experience") does not end one. Callers treat the result as a suggestion.

const HEADER_MAX_CHARS: usize = 30;

/// Splits raw text into trimmed, non-blank lines in original order.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_section_header(line: &str) -> bool {
    if line.chars().count() >= HEADER_MAX_CHARS || line.starts_with(['•', '-']) {
        return false;
    }
    line.ends_with(':') || is_all_caps(line)
}

/// At least one letter and no lowercase letters.
fn is_all_caps(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Body of the first section whose header line contains any of `keywords`
/// (case-insensitive). The body starts on the line after the header and
/// runs until the next header or end of text. The line directly after the
/// header is always part of the body. `None` when no line matches or the
/// header is the last line.
pub fn find_section<'a>(lines: &'a [String], keywords: &[&str]) -> Option<&'a [String]> {
    let header = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        keywords.iter().any(|k| lower.contains(k))
    })?;

    let start = header + 1;
    if start >= lines.len() {
        return None;
    }

    let end = lines[start + 1..]
        .iter()
        .position(|line| is_section_header(line))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    Some(&lines[start..end])
}
