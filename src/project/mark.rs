use super::LineMark;

/// Paint `mark` over the full line extent of the subtree starting at
/// `start_line`.
///
/// If the start line opens a container (a property whose value text is
/// exactly `{` or `[`, or a bare `{`/`[`), every following line is marked
/// until both the brace and the bracket counters return to zero, inclusive
/// of the closing line. A leaf start line gets marked alone. An out-of-range
/// `start_line` is a no-op.
pub(super) fn mark_subtree(
    lines: &[String],
    marks: &mut [LineMark],
    start_line: usize,
    mark: LineMark,
) {
    if start_line >= lines.len() {
        return;
    }

    let trimmed = lines[start_line].trim();
    let mut brace_count = 0i32;
    let mut bracket_count = 0i32;
    let mut in_subtree = false;

    let opener = property_value(trimmed).unwrap_or(trimmed);
    if opener == "{" {
        in_subtree = true;
        brace_count = 1;
    } else if opener == "[" {
        in_subtree = true;
        bracket_count = 1;
    }

    marks[start_line] = mark;

    if !in_subtree {
        return;
    }

    for i in start_line + 1..lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.is_empty() {
            marks[i] = mark;
            continue;
        }

        match trimmed {
            "{" => brace_count += 1,
            "}" => brace_count -= 1,
            "[" => bracket_count += 1,
            "]" => bracket_count -= 1,
            _ => {
                if let Some(value) = property_value(trimmed) {
                    // Inline empty containers ("a": {}) open and close on
                    // the same line; string values always end in a quote,
                    // so a trailing delimiter is never part of scalar text.
                    let value = value.strip_suffix(',').unwrap_or(value);
                    if value.starts_with('{') {
                        brace_count += 1;
                    } else if value.starts_with('[') {
                        bracket_count += 1;
                    }
                    if value.ends_with('}') {
                        brace_count -= 1;
                    }
                    if value.ends_with(']') {
                        bracket_count -= 1;
                    }
                }
                if trimmed.starts_with('}') {
                    brace_count -= 1;
                }
                if trimmed.starts_with(']') {
                    bracket_count -= 1;
                }
            }
        }

        marks[i] = mark;

        if brace_count == 0 && bracket_count == 0 {
            break;
        }
    }
}

/// The value text of an object-property line (`"key": <value>`), trimmed.
///
/// Returns `None` for lines that are not in property form. The key scan is
/// escape-aware so keys containing `\"` do not cut the match short.
fn property_value(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix('"')?;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                let after = rest[i + 1..].trim_start();
                let value = after.strip_prefix(':')?.trim();
                if value.is_empty() {
                    return None;
                }
                return Some(value);
            }
            _ => {}
        }
    }
    None
}
