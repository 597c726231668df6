/// Search highlighting for table cells
use leptos::prelude::*;

/// Byte ranges of case-insensitive matches of `filter` in `text`
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; skip highlighting then
    if haystack.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// `text` with every match of `filter` wrapped in a highlight span
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("ORD-0002", "ord-0"), vec![(0, 5)]);
        assert_eq!(match_ranges("Reddy Reddy", "reddy"), vec![(0, 5), (6, 11)]);
        assert!(match_ranges("Priya", "  ").is_empty());
        assert!(match_ranges("Priya", "x").is_empty());
    }
}
