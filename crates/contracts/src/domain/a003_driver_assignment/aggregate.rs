use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Assigned order
// ============================================================================

/// Order as persisted inside an assignment record.
///
/// Only `id` is required on the wire; `orderId` falls back to an empty string
/// so records written by older screens (`{"id":"O1"}`) still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedOrder {
    pub id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AssignedOrder {
    /// Bare order carrying only its identifier
    pub fn with_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            order_id: id.to_string(),
            customer: None,
            customer_address: None,
            studio: None,
            studio_address: None,
            date: None,
            status: None,
        }
    }

    /// Identifier shown to the user
    pub fn display_id(&self) -> &str {
        if self.order_id.is_empty() {
            &self.id
        } else {
            &self.order_id
        }
    }
}

// ============================================================================
// Write policy
// ============================================================================

/// How a new assignment combines with the stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignPolicy {
    /// Drop whatever was stored and keep only the new orders
    Replace,
    /// Append to the stored orders of the same driver, skipping known ids
    #[default]
    Merge,
}

impl AssignPolicy {
    pub fn code(&self) -> &'static str {
        match self {
            AssignPolicy::Replace => "replace",
            AssignPolicy::Merge => "merge",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "replace" => Some(AssignPolicy::Replace),
            "merge" => Some(AssignPolicy::Merge),
            _ => None,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// The single driver ↔ orders association kept in storage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    pub driver_id: String,
    #[serde(default)]
    pub orders: Vec<AssignedOrder>,
}

impl AssignmentRecord {
    pub fn new(driver_id: &str, orders: Vec<AssignedOrder>) -> Self {
        Self {
            driver_id: driver_id.to_string(),
            orders,
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let record = serde_json::from_str(json)?;
        Ok(record)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.driver_id.is_empty() || self.orders.is_empty()
    }

    pub fn belongs_to(&self, driver_id: &str) -> bool {
        !self.driver_id.is_empty() && self.driver_id == driver_id
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Ids of every stored order
    pub fn assigned_ids(&self) -> HashSet<String> {
        self.orders.iter().map(|o| o.id.clone()).collect()
    }

    /// Record produced by assigning `incoming` to `driver_id` on top of
    /// `existing` under `policy`. Incoming duplicates are collapsed either way.
    pub fn combine(
        existing: Option<&AssignmentRecord>,
        driver_id: &str,
        incoming: Vec<AssignedOrder>,
        policy: AssignPolicy,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut orders = Vec::with_capacity(incoming.len());

        if policy == AssignPolicy::Merge {
            if let Some(prev) = existing.filter(|r| r.belongs_to(driver_id)) {
                for order in &prev.orders {
                    if seen.insert(order.id.clone()) {
                        orders.push(order.clone());
                    }
                }
            }
        }

        for order in incoming {
            if seen.insert(order.id.clone()) {
                orders.push(order);
            }
        }

        Self::new(driver_id, orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(record: &AssignmentRecord) -> Vec<&str> {
        record.orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_parse_minimal_wire_record() {
        let record =
            AssignmentRecord::from_json(r#"{"driverId":"D-1001","orders":[{"id":"O1"}]}"#).unwrap();
        assert_eq!(record.driver_id, "D-1001");
        assert_eq!(record.orders.len(), 1);
        assert_eq!(record.orders[0].order_id, "");
        assert_eq!(record.orders[0].display_id(), "O1");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AssignmentRecord::from_json("{not json").is_err());
        assert!(AssignmentRecord::from_json(r#"{"orders":[]}"#).is_err());
        assert!(AssignmentRecord::from_json("null").is_err());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let mut order = AssignedOrder::with_id("O1");
        order.customer_address = Some("12, Somajiguda, Hyderabad".to_string());
        let json = AssignmentRecord::new("D-1", vec![order]).to_json().unwrap();
        assert!(json.contains("\"driverId\":\"D-1\""));
        assert!(json.contains("\"orderId\":\"O1\""));
        assert!(json.contains("\"customerAddress\""));
        assert!(!json.contains("\"studio\""));
    }

    #[test]
    fn test_merge_appends_for_same_driver() {
        let first = AssignmentRecord::combine(
            None,
            "D",
            vec![AssignedOrder::with_id("O1")],
            AssignPolicy::Merge,
        );
        let second = AssignmentRecord::combine(
            Some(&first),
            "D",
            vec![AssignedOrder::with_id("O2")],
            AssignPolicy::Merge,
        );
        assert_eq!(ids(&second), vec!["O1", "O2"]);

        let third = AssignmentRecord::combine(
            Some(&second),
            "D",
            vec![AssignedOrder::with_id("O1")],
            AssignPolicy::Merge,
        );
        assert_eq!(ids(&third), vec!["O1", "O2"]);
    }

    #[test]
    fn test_merge_ignores_other_driver() {
        let other = AssignmentRecord::new("D-2", vec![AssignedOrder::with_id("O9")]);
        let merged = AssignmentRecord::combine(
            Some(&other),
            "D-1",
            vec![AssignedOrder::with_id("O1")],
            AssignPolicy::Merge,
        );
        assert_eq!(merged.driver_id, "D-1");
        assert_eq!(ids(&merged), vec!["O1"]);
    }

    #[test]
    fn test_replace_overwrites() {
        let prev = AssignmentRecord::new("D", vec![AssignedOrder::with_id("O1")]);
        let replaced = AssignmentRecord::combine(
            Some(&prev),
            "D",
            vec![AssignedOrder::with_id("O2"), AssignedOrder::with_id("O2")],
            AssignPolicy::Replace,
        );
        assert_eq!(ids(&replaced), vec!["O2"]);
    }

    #[test]
    fn test_policy_codes() {
        assert_eq!(AssignPolicy::from_code(" Merge "), Some(AssignPolicy::Merge));
        assert_eq!(AssignPolicy::from_code("replace"), Some(AssignPolicy::Replace));
        assert_eq!(AssignPolicy::from_code("union"), None);
        assert_eq!(AssignPolicy::default(), AssignPolicy::Merge);
    }
}
