use serde::{Deserialize, Serialize};

/// Wash service requested for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WashType {
    Standard,
    Express,
    Both,
}

impl WashType {
    pub fn code(&self) -> &'static str {
        match self {
            WashType::Standard => "standard",
            WashType::Express => "express",
            WashType::Both => "both",
        }
    }

    /// Label shown in order tables
    pub fn display_name(&self) -> &'static str {
        match self {
            WashType::Standard => "Standard Wash",
            WashType::Express => "Express Wash",
            WashType::Both => "Both Wash",
        }
    }

    pub fn all() -> Vec<WashType> {
        vec![WashType::Standard, WashType::Express, WashType::Both]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "standard" => Some(WashType::Standard),
            "express" => Some(WashType::Express),
            "both" => Some(WashType::Both),
            _ => None,
        }
    }
}
