/// Capitalize one word: first character upper-case, the rest lower-case.
///
/// A character directly after a `-` keeps its original case, so
/// `"SMITH-JONES"` becomes `"Smith-Jones"` while `"mary-ann"` stays
/// `"Mary-ann"`.
pub fn capitalize(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for (i, c) in word.chars().enumerate() {
        if i == 0 {
            result.extend(c.to_uppercase());
        } else if prev == Some('-') {
            result.push(c);
        } else {
            result.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    result
}

/// Capitalize every space-separated word of `s`.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Turn a `"Last, First"` name into `"First Last"`.
///
/// Names without a comma are returned unchanged. When `title_case` is set,
/// the reordered name is also capitalized word by word.
pub fn reorder_name(name: &str, title_case: bool) -> String {
    let Some((last, first)) = name.split_once(',') else {
        return name.to_string();
    };
    let reordered = format!("{} {}", first.trim(), last.trim());
    let reordered = reordered.trim().to_string();
    if title_case {
        capitalize_words(&reordered)
    } else {
        reordered
    }
}

/// Slice `line` by character offsets, `start` inclusive and `end` inclusive.
///
/// `end == None` means "to the end of the line". An `end` past the line is
/// clamped. Returns `None` when `start` lies beyond the line, which callers
/// treat as a missing field.
pub fn slice_chars(line: &str, start: usize, end: Option<usize>) -> Option<&str> {
    let char_count = line.chars().count();
    if start > char_count {
        return None;
    }
    let byte_at = |char_idx: usize| {
        line.char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(line.len())
    };
    let from = byte_at(start);
    let to = match end {
        Some(e) if e + 1 < char_count => byte_at(e + 1),
        _ => line.len(),
    };
    if to < from {
        return Some("");
    }
    Some(&line[from..to])
}

/// Drop a trailing carriage return left behind by CRLF files.
pub fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
