use crate::domain::a001_order::OrderRow;

/// Search box plus wash-type dropdown of the assignment page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub query: String,
    /// "all" or a fragment of the wash-type label
    pub wash_type: String,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            wash_type: "all".to_string(),
        }
    }
}

impl OrderFilter {
    pub fn new(query: &str, wash_type: &str) -> Self {
        Self {
            query: query.to_string(),
            wash_type: wash_type.to_string(),
        }
    }

    pub fn matches(&self, row: &OrderRow) -> bool {
        self.matches_query(row) && self.matches_wash_type(row)
    }

    fn matches_query(&self, row: &OrderRow) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&row.order_id, &row.customer, &row.studio]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_wash_type(&self, row: &OrderRow) -> bool {
        let wanted = self.wash_type.trim().to_lowercase();
        wanted.is_empty()
            || wanted == "all"
            || row.wash_type.to_lowercase().contains(&wanted)
    }

    pub fn apply(&self, rows: &[OrderRow]) -> Vec<OrderRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, order_id: &str, customer: &str, studio: &str, wash: &str) -> OrderRow {
        OrderRow {
            id: id.to_string(),
            order_id: order_id.to_string(),
            date: String::new(),
            customer: customer.to_string(),
            phone: String::new(),
            customer_address: String::new(),
            studio_address: String::new(),
            studio: studio.to_string(),
            wash_type: wash.to_string(),
            distance: String::new(),
            status: None,
        }
    }

    fn sample() -> Vec<OrderRow> {
        vec![
            row("A", "ORD-1", "X", "S1", "Express Wash"),
            row("B", "ORD-2", "Y", "S2", "Standard Wash"),
        ]
    }

    fn ids(rows: Vec<OrderRow>) -> Vec<String> {
        rows.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert_eq!(ids(OrderFilter::new("ord-2", "all").apply(&sample())), vec!["B"]);
    }

    #[test]
    fn test_wash_type_filter() {
        assert_eq!(ids(OrderFilter::new("", "express").apply(&sample())), vec!["A"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        assert!(OrderFilter::new("ord-2", "express").apply(&sample()).is_empty());
    }

    #[test]
    fn test_default_matches_everything() {
        assert_eq!(OrderFilter::default().apply(&sample()).len(), 2);
        assert_eq!(ids(OrderFilter::new("s1", "All").apply(&sample())), vec!["A"]);
    }
}
