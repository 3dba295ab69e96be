/// Everything before the first `#` of the line.
pub fn strip_line_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(head, _)| head)
}

pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

pub fn is_separator_line(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.chars().all(|c| c == '=')
}

/// Trimmed, non-empty lines of `text` with full-line comments removed.
pub fn meaningful_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !is_comment_line(l))
}
