//! Page categories for tab pages.

/// Table or card list with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Action page (order assignment)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// `{entity}--{category}` with both parts non-empty
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a002_driver--list"));
        assert!(!is_valid_page_id("a002_driver"));
        assert!(!is_valid_page_id("--list"));
    }
}
